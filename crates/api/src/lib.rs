//! Brewbox API - multi-tenant ideas platform for coffee shops.
//!
//! Customers submit improvement ideas to a shop's suggestion box; workers
//! triage and discuss them. Every privileged operation resolves through the
//! access-control service in [`services::access_control`].
//!
//! # Layers
//!
//! - [`routes`] - thin axum handlers, DTO shaping only
//! - [`services`] - usecases and access control
//! - [`db`] - repositories over `PostgreSQL`
//! - [`models`] - domain types
//!
//! The library target exists so the CLI and integration tests can reuse the
//! config, auth, and service code.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod db;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod state;
