//! Integration tests for Brewbox.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p brewbox-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `access_control` - The management decision matrix and deny messages
//! - `pagination` - Clamping and offset conventions shared by all lists
//! - `error_mapping` - Error kind to HTTP status translation
//! - `auth_tokens` - Bearer token minting and verification
//!
//! Everything here runs without a database: the access decision, pagination,
//! state, and error-translation logic are pure, which is exactly what makes
//! them testable in isolation.
