//! `Container` implementations over the browser DOM.

use juke_pager_core::{Container, ContainerResolver};
use web_sys::{Document, Element};

/// Pager container backed by a DOM element.
#[derive(Debug, Clone)]
pub struct DomContainer {
    element: Element,
}

impl DomContainer {
    pub fn new(element: Element) -> Self {
        Self { element }
    }

    pub fn element(&self) -> &Element {
        &self.element
    }
}

impl Container for DomContainer {
    fn set_inner_html(&mut self, markup: &str) {
        self.element.set_inner_html(markup);
    }
}

/// Resolves `el` selectors against `window.document`.
#[derive(Debug, Clone)]
pub struct DomDocument {
    document: Document,
}

impl DomDocument {
    /// The document of the current window, `None` outside a browser page.
    pub fn current() -> Option<Self> {
        let document = web_sys::window()?.document()?;
        Some(Self { document })
    }
}

impl ContainerResolver for DomDocument {
    type Container = DomContainer;

    fn query_selector(&self, selector: &str) -> Option<DomContainer> {
        match self.document.query_selector(selector) {
            Ok(element) => element.map(DomContainer::new),
            Err(_) => {
                log::warn!("Invalid selector: {selector}");
                None
            }
        }
    }
}
