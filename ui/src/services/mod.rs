//! Infrastructure Services
//!
//! This module provides the infrastructure the registration feature talks to:
//!
//! - **client**: account registrar trait and its reqwest-backed HTTP implementation
//! - **config**: configuration defaults and the LocalStorage override
//! - **errors**: registration error types
//!
//! The services are designed to be WASM-first, using browser APIs and async traits
//! without Send/Sync bounds for compatibility.

pub mod client;
pub mod config;
pub mod errors;
