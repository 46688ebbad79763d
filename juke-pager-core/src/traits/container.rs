//! Render target abstract Trait

use std::collections::HashSet;

/// Container Trait
///
/// The element the pager renders into. Every render replaces the whole content.
///
/// Platform implementation:
/// - Browser: `DomContainer` (`web_sys::Element`)
/// - Terminal / tests: [`InMemoryContainer`]
pub trait Container {
    /// Replace the container content
    ///
    /// # Arguments
    /// * `markup` - Complete pager markup
    fn set_inner_html(&mut self, markup: &str);
}

/// Container lookup Trait
///
/// Resolves the `el` selector of the options into a container.
pub trait ContainerResolver {
    /// Container type produced by this resolver
    type Container: Container;

    /// Find the first container matching `selector`
    fn query_selector(&self, selector: &str) -> Option<Self::Container>;
}

/// In-memory container
///
/// Keeps the latest markup and counts renders.
#[derive(Debug, Clone, Default)]
pub struct InMemoryContainer {
    markup: String,
    render_count: usize,
}

impl InMemoryContainer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Latest rendered markup
    #[must_use]
    pub fn markup(&self) -> &str {
        &self.markup
    }

    /// How many times the container was rendered into
    #[must_use]
    pub fn render_count(&self) -> usize {
        self.render_count
    }
}

impl Container for InMemoryContainer {
    fn set_inner_html(&mut self, markup: &str) {
        markup.clone_into(&mut self.markup);
        self.render_count += 1;
    }
}

/// In-memory document
///
/// Knows a fixed set of selectors; each lookup yields a fresh [`InMemoryContainer`].
#[derive(Debug, Clone, Default)]
pub struct InMemoryDocument {
    selectors: HashSet<String>,
}

impl InMemoryDocument {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a document that resolves the given selectors
    #[must_use]
    pub fn with_selectors<I, S>(selectors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            selectors: selectors.into_iter().map(Into::into).collect(),
        }
    }

    /// Register one more selector
    pub fn insert(&mut self, selector: impl Into<String>) {
        self.selectors.insert(selector.into());
    }
}

impl ContainerResolver for InMemoryDocument {
    type Container = InMemoryContainer;

    fn query_selector(&self, selector: &str) -> Option<InMemoryContainer> {
        // 空选择器在浏览器中是语法错误，同样视为找不到
        let selector = selector.trim();
        (!selector.is_empty() && self.selectors.contains(selector)).then(InMemoryContainer::new)
    }
}
