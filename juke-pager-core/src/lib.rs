//! juke pager core library
//!
//! Provides the platform-independent parts of the pagination widget:
//! - Page window calculation (`generate_pagers`)
//! - Options with defaults and partial refresh
//! - Markup rendering and click resolution
//! - A small event hub (`on` / `off` / `once` / `trigger`)
//!
//! Rendering targets are abstracted through the [`Container`] trait, so the same
//! widget drives the browser DOM binding and the terminal demo.

pub mod error;
pub mod services;
pub mod traits;
pub mod types;
pub mod utils;

#[cfg(test)]
mod test_utils;

// Re-export common types
pub use error::{PagerError, PagerResult};
pub use services::{generate_pagers, ClickTarget, EventHub, Pagination};
pub use traits::{Container, ContainerResolver, InMemoryContainer, InMemoryDocument};
pub use types::{
    PageWindow, PagerEvent, PagerEventType, PagerOptions, PagerOptionsPatch, PAGER_COUNT,
};
