pub mod api;
pub mod config;
pub mod logging;
pub mod router;
pub mod store;
pub mod ui;
