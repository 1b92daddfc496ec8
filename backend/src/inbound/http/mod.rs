//! HTTP inbound adapter: response mapping for rejected submissions.

pub mod error;
pub mod validation;
