//! Brewbox Core - Shared types library.
//!
//! This crate provides common types used across all Brewbox components:
//! - `api` - The ideas-platform backend (HTTP + Postgres)
//! - `cli` - Command-line tools for migrations and seeding
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no database access, no HTTP
//! clients. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype IDs, roles, entity lifecycle state, and pagination

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
