//! Data models for the user store
//!
//! # Models
//!
//! - `user`: the user record plus its create/update input shapes

pub mod user;
