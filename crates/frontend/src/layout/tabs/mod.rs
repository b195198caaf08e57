//! Tab management module
//!
//! Содержит:
//! - `keys` - объявленный набор табов и заголовки (единственный источник правды)
//! - `context` - TabsContext: активный таб и его персистентность
//! - `bar` - полоса переключения табов
//! - `page` - компонент TabPane для обёртки контента таба
//! - `registry` - маппинг tab key → View

pub mod bar;
pub mod context;
pub mod keys;
pub mod page;
pub mod registry;

pub use bar::TabBar;
pub use context::TabsContext;
pub use page::TabPane;
