//! Animelist Gateway Library

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod mal;
pub mod watchlist;

pub use config::schema::AppConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
