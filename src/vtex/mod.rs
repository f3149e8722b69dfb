//! # VTEX module
//!
//! A synchronous-style wrapper over the VTEX REST API: one client holding
//! the base URL and the two fixed authentication headers, plus thin
//! per-resource endpoint builders on top of it ([`ProductApi`]).
//!
//! Responses are decoded JSON with no client-side schema. Failures are
//! always loud: a non-2xx status or a transport error comes back as a
//! [`VtexError`], never as a silent null.

mod catalog;
mod client;
mod error;

pub use catalog::ProductApi;
pub use client::{HttpMethod, RequestOptions, VtexClient};
pub use error::VtexError;
