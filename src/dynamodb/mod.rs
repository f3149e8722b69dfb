//! # DynamoDB module
//!
//! A table-bound client for item-level operations against Amazon DynamoDB.
//!
//! ## Components
//!
//! - `DynamoDbClient`: holds a handle to one table for its lifetime and
//!   exposes get, scan, put, update and delete.
//! - `Item`: an untyped map of attribute names to values. A key is just an
//!   `Item` holding the one or two key attributes.
//! - `UpdateSpec`: an update expression plus its placeholder bindings.
//! - `StoreError`: every failed call comes back as a typed error tagged
//!   transient or permanent; "item not found" is not an error.
//!
//! ## Example
//!
//! ```no_run
//! use flexapi::dynamodb::{DynamoDbClient, Item, UpdateSpec};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client =
//!         DynamoDbClient::connect("products", "us-west-2", "access_key", "secret_key").await;
//!
//!     let item = Item::new()
//!         .set_string("id", "123")
//!         .set_string("name", "Produto Teste");
//!     client.put(item).await?;
//!
//!     let key = Item::new().set_string("id", "123");
//!     let fetched = client.get(key.clone()).await?;
//!     assert!(fetched.is_some());
//!
//!     client
//!         .update(
//!             key.clone(),
//!             UpdateSpec::new("SET #name = :value")
//!                 .name("#name", "name")
//!                 .string_value(":value", "updated"),
//!         )
//!         .await?;
//!
//!     client.delete(key).await?;
//!     Ok(())
//! }
//! ```

mod client;
mod error;
mod item;
mod update;

pub use client::DynamoDbClient;
pub use error::{StoreError, StoreErrorKind};
pub use item::Item;
pub use update::UpdateSpec;
