//! HTTP API handlers for phonedir-server

pub mod auth;
pub mod departments;
pub mod employees;
pub mod export;
pub mod health;
pub mod import;
pub mod photos;
