//! Class-list helpers over a whitespace separated `class` attribute.
//!
//! Mirrors what `Element.classList` offers, but works on plain strings so the
//! renderer, the click resolver and the DOM binding share one implementation.

use std::fmt;

use crate::error::{PagerError, PagerResult};

/// An ordered, de-duplicated set of class tokens.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassList {
    tokens: Vec<String>,
}

impl ClassList {
    /// Parse a `class` attribute value.
    #[must_use]
    pub fn parse(class_name: &str) -> Self {
        let mut list = Self::default();
        for token in class_name.split_whitespace() {
            list.push(token);
        }
        list
    }

    /// Whether `cls` is present.
    ///
    /// An empty name is never present. A name containing whitespace is a
    /// caller error, since it can only ever be a list of classes.
    pub fn has(&self, cls: &str) -> PagerResult<bool> {
        if cls.is_empty() {
            return Ok(false);
        }
        if cls.chars().any(char::is_whitespace) {
            return Err(PagerError::InvalidClassName(cls.to_string()));
        }
        Ok(self.tokens.iter().any(|t| t == cls))
    }

    /// Add every class in the space separated `cls`.
    pub fn add(&mut self, cls: &str) {
        for token in cls.split_whitespace() {
            self.push(token);
        }
    }

    /// Remove every class in the space separated `cls`.
    pub fn remove(&mut self, cls: &str) {
        for token in cls.split_whitespace() {
            self.tokens.retain(|t| t != token);
        }
    }

    /// Add or remove `cls` depending on `on`.
    pub fn toggle(&mut self, cls: &str, on: bool) {
        if on {
            self.add(cls);
        } else {
            self.remove(cls);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().map(String::as_str)
    }

    fn push(&mut self, token: &str) {
        if !self.tokens.iter().any(|t| t == token) {
            self.tokens.push(token.to_string());
        }
    }
}

impl fmt::Display for ClassList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.tokens.join(" "))
    }
}

impl<'a> FromIterator<&'a str> for ClassList {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut list = Self::default();
        for cls in iter {
            list.add(cls);
        }
        list
    }
}

/// Check a raw `class` attribute for `cls`.
pub fn has_class(class_name: &str, cls: &str) -> PagerResult<bool> {
    ClassList::parse(class_name).has(cls)
}

/// Return `class_name` with the classes in `cls` added.
#[must_use]
pub fn add_class(class_name: &str, cls: &str) -> String {
    let mut list = ClassList::parse(class_name);
    list.add(cls);
    list.to_string()
}

/// Return `class_name` with the classes in `cls` removed.
#[must_use]
pub fn remove_class(class_name: &str, cls: &str) -> String {
    let mut list = ClassList::parse(class_name);
    list.remove(cls);
    list.to_string()
}
