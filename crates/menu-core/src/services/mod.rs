//! Domain services (business logic)

pub mod breadcrumbs;
pub mod menu_builder;
pub mod menu_service;

pub use menu_builder::MenuBuilder;
pub use menu_service::MenuService;
