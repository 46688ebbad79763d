//! 工具函数

pub mod class_list;
pub mod html;

pub use class_list::{add_class, has_class, remove_class, ClassList};
