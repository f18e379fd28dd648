pub mod app;
pub mod components;
pub mod config;
pub mod logging;
pub mod particles;
pub mod store;
