pub mod config;
pub mod decimal;
pub mod error;
pub mod memory;
pub mod observable;
pub mod routes;
pub mod services;
pub mod stellar_toml;
