//! South African ID validator web service.
//!
//! This crate primarily ships a `validator-web` binary, but we expose a small
//! library surface to enable integration testing.

pub mod api;
pub mod config;
pub mod page;
