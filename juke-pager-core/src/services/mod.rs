//! 业务逻辑服务层

mod event_hub;
mod interaction_service;
mod pagination;
mod render_service;
mod window_service;

pub use event_hub::{EventHub, SharedHandler};
pub use interaction_service::{
    clamp_page_input, hover_icon, parse_page_input, resolve_click, ClickTarget,
};
pub use pagination::Pagination;
pub use render_service::{class_names, render_markup};
pub use window_service::generate_pagers;
