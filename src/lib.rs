//! # flexapi
//!
//! Thin client wrappers for two independent backends:
//!
//! - [`dynamodb`]: item-level CRUD (get, scan, put, update, delete) against a
//!   single named Amazon DynamoDB table.
//! - [`vtex`]: authenticated JSON requests against the VTEX e-commerce REST
//!   API, plus a catalog product endpoint.
//!
//! The two components do not interact. Each is a direct pass-through to its
//! backend client (the AWS SDK and reqwest respectively) with typed errors:
//! storage failures carry a transient/permanent classification, HTTP failures
//! carry the offending status and URL. Clients are constructed once with
//! immutable credentials and reused across calls.

pub mod dynamodb;
pub mod logging;
pub mod vtex;

pub use dynamodb::{DynamoDbClient, Item, StoreError, StoreErrorKind, UpdateSpec};
pub use vtex::{HttpMethod, ProductApi, VtexClient, VtexError};
