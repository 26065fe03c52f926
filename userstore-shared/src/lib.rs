//! # userstore shared library
//!
//! Core of the user store: the record model, the storage contract with its
//! in-memory implementation, and the service layer the HTTP server calls.
//!
//! ## Module Organization
//!
//! - `models`: the user record and its input shapes
//! - `store`: `UserStore` trait, `StoreError`, and `InMemoryUserStore`
//! - `service`: `UserService` trait and the store-backed implementation
//!
//! Everything here is synchronous and framework-free.

pub mod models;
pub mod service;
pub mod store;

/// Current version of the userstore shared library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
