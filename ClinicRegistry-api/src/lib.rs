// ClinicRegistry-api lib.rs
//
// HTTP layer of the ClinicRegistry service: configuration, routes, handlers
// and the OpenAPI document.

pub mod api;
pub mod config;
pub mod entities;
pub mod openapi;

pub use api::{create_application, create_router, AppState};
pub use config::ServerConfig;
