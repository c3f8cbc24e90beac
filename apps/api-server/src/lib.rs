//! # Blog API Server
//!
//! Library surface of the server binary; split out so integration tests can
//! build the app with the same routes and state as `main`.

pub mod config;
pub mod handlers;
pub mod middleware;
pub mod state;
