//! Household form validation service layer.
//!
//! - [`domain`] turns raw JSON form submissions into typed, normalised forms
//!   and owns the transport-agnostic error payload.
//! - [`inbound::http`] maps those errors onto HTTP responses.
//! - [`cli`] and [`config`] back the `household-check` binary.

pub mod cli;
pub mod config;
pub mod domain;
pub mod inbound;
