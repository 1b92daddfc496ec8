//! Inbound adapters that translate external submissions into domain calls
//! while keeping framework details at the edge.
//!
//! HTTP error mapping lives under [`http`]; the command-line checker in
//! [`crate::cli`] reuses it to render rejections.

pub mod http;
