//! Tab management module
//!
//! Содержит:
//! - `page` - компонент TabPage для обёртки контента таба
//! - `registry` - маппинг путь → модуль страницы (единственный источник правды)

pub mod page;
pub mod registry;

pub use page::TabPage;
pub use registry::{page_registry, PageModule};
