//! Email one-time-password service for the FindSpot app.
//!
//! A code is issued for an email address, delivered by email and later
//! checked exactly once before it expires. Persistence, delivery and time are
//! injected so the whole flow can run against in-memory fakes.

pub mod config;
pub mod controllers;
pub mod error;
pub mod models;
pub mod service;
pub mod store;
pub mod utils;

pub use crate::config::config::{Config, ConfigError, OtpConfig};
pub use error::OtpError;
pub use models::otp_codes::{IssuedCode, OtpRecord};
pub use service::otp_service::OtpService;
