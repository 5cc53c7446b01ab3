//! bannerd - A minimal in-memory banner CRUD service over HTTP

pub mod banners;
pub mod cli;
pub mod http_server;
