#![forbid(unsafe_code)]

//! Browser binding for the juke pagination widget.
//!
//! [`juke_pager_core::Pagination`] does the work; this crate renders it into a
//! DOM element, wires delegated listeners on that element and forwards
//! `changePage` / `changePageSize` to JavaScript callbacks.
//!
//! ```js
//! const pager = new Pagination({ el: ".page", currentPage: 5, pageCount: 20 });
//! pager.on("changePage", (page) => pager.refresh({ currentPage: page }));
//! ```
//!
//! Only the JSON glue in [`options`] is compiled for native targets, so it can
//! be unit tested without a browser.

pub mod options;

#[cfg(target_arch = "wasm32")]
mod console_log;
#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(target_arch = "wasm32")]
mod wasm;

#[cfg(target_arch = "wasm32")]
pub use wasm::Pagination;
