//! # bannerd HTTP Server Module
//!
//! Axum-based HTTP façade over the banner record store.
//!
//! # Endpoints
//!
//! - `/health` - Health check
//! - `/banners.getAll` - List all banners
//! - `/banners.getById` - Fetch a banner by id
//! - `/banners.save` - Create (id=0) or update (id>0) a banner
//! - `/banners.removeById` - Delete a banner by id

pub mod banner_routes;
pub mod config;
pub mod server;

pub use config::HttpServerConfig;
pub use server::HttpServer;
