//! Random User API Client Library
//!
//! This library provides a typed client for the public random user generation
//! service (`https://randomuser.me/api`): serde models for its JSON responses and
//! a client that fetches one page of users per call.
//!
//! # Modules
//!
//! - `config`: Configuration management.
//! - `errors`: Error handling types.
//! - `models`: Response envelope and user record models.
//! - `user_client`: Random user API client.

pub mod config;
pub mod errors;
pub mod models;
pub mod user_client;

pub use errors::ClientError;
pub use models::ApiResponse;
pub use user_client::{RandomUserClient, UserQuery};
