pub mod errors;
pub mod handlers;
pub mod routes;

pub use routes::{create_application, create_router, AppState};
