// ClinicRegistry Data
// This crate owns database connectivity and the storage gateway for patients and doctors

// Database connection management
pub mod database;

// Repository implementations for data access
pub mod repository;

// Data storage models
pub mod models;
