//! API route handlers
//!
//! - `health`: Health check endpoint
//! - `users`: User CRUD endpoints

pub mod health;
pub mod users;
