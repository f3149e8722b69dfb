use aws_config::{BehaviorVersion, Region, SdkConfig};
use aws_sdk_dynamodb::config::Credentials;
use aws_sdk_dynamodb::error::{ProvideErrorMetadata, SdkError};
use aws_sdk_dynamodb::Client;
use tracing::{error, info};

use crate::dynamodb::{Item, StoreError, UpdateSpec};

/// A client bound to one DynamoDB table.
///
/// Construct it once and reuse it; the table handle and credentials are
/// immutable for the client's lifetime. All methods map one-to-one to the
/// store's native item primitives and return a typed [`StoreError`] on
/// failure instead of swallowing it.
#[derive(Debug, Clone)]
pub struct DynamoDbClient {
    client: Client,
    table_name: String,
}

impl DynamoDbClient {
    /// Connects to a table with explicit region and static credentials.
    pub async fn connect(
        table_name: impl Into<String>,
        region: impl Into<String>,
        access_key: &str,
        secret_key: &str,
    ) -> Self {
        let credentials = Credentials::new(access_key, secret_key, None, None, "flexapi");
        let sdk_config = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(region.into()))
            .credentials_provider(credentials)
            .load()
            .await;
        Self::from_config(&sdk_config, table_name)
    }

    /// Binds a table using a prebuilt SDK config.
    ///
    /// Useful when credentials come from the environment, or when the
    /// endpoint is overridden to point at DynamoDB Local.
    pub fn from_config(sdk_config: &SdkConfig, table_name: impl Into<String>) -> Self {
        Self {
            client: Client::new(sdk_config),
            table_name: table_name.into(),
        }
    }

    /// The table this client is bound to.
    pub fn table_name(&self) -> &str {
        &self.table_name
    }

    /// Verifies credentials by attempting to list tables.
    pub async fn check_auth(&self) -> Result<(), StoreError> {
        self.client
            .list_tables()
            .send()
            .await
            .map_err(|e| self.fail("list_tables", e))?;
        info!("Authentication successful");
        Ok(())
    }

    /// Fetches an item by its exact key.
    ///
    /// `Ok(None)` means the call succeeded and no item has that key.
    pub async fn get(&self, key: Item) -> Result<Option<Item>, StoreError> {
        let response = self
            .client
            .get_item()
            .table_name(&self.table_name)
            .set_key(Some(key.into_attributes()))
            .send()
            .await
            .map_err(|e| self.fail("get_item", e))?;

        Ok(response.item.map(Item::from))
    }

    /// Reads every item in the table.
    ///
    /// Follows `LastEvaluatedKey` pagination until the table is exhausted,
    /// so the result is complete regardless of page size.
    pub async fn scan(&self) -> Result<Vec<Item>, StoreError> {
        let mut items = Vec::new();
        let mut last_evaluated_key = None;

        loop {
            let mut scan = self.client.scan().table_name(&self.table_name);

            if let Some(key) = last_evaluated_key {
                scan = scan.set_exclusive_start_key(Some(key));
            }

            let response = scan.send().await.map_err(|e| self.fail("scan", e))?;

            if let Some(new_items) = response.items {
                items.extend(new_items.into_iter().map(Item::from));
            }

            last_evaluated_key = response.last_evaluated_key;

            if last_evaluated_key.is_none() {
                break;
            }
        }

        Ok(items)
    }

    /// Writes an item, replacing any existing item with the same key.
    pub async fn put(&self, item: Item) -> Result<(), StoreError> {
        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(item.into_attributes()))
            .send()
            .await
            .map_err(|e| self.fail("put_item", e))?;

        info!("Item added to '{}'", self.table_name);
        Ok(())
    }

    /// Applies an update expression to the item with the given key.
    ///
    /// The update is unconditional; if no item has the key, DynamoDB creates
    /// one from the key attributes and the SET clauses.
    pub async fn update(&self, key: Item, spec: UpdateSpec) -> Result<(), StoreError> {
        let (expression, values, names) = spec.into_parts();

        let mut request = self
            .client
            .update_item()
            .table_name(&self.table_name)
            .set_key(Some(key.into_attributes()))
            .update_expression(expression);

        // DynamoDB rejects empty binding maps outright, so only attach
        // the ones that are populated.
        if !values.is_empty() {
            request = request.set_expression_attribute_values(Some(values));
        }
        if !names.is_empty() {
            request = request.set_expression_attribute_names(Some(names));
        }

        request
            .send()
            .await
            .map_err(|e| self.fail("update_item", e))?;

        info!("Item updated in '{}'", self.table_name);
        Ok(())
    }

    /// Deletes the item with the given key.
    ///
    /// Idempotent: deleting an absent key still succeeds.
    pub async fn delete(&self, key: Item) -> Result<(), StoreError> {
        self.client
            .delete_item()
            .table_name(&self.table_name)
            .set_key(Some(key.into_attributes()))
            .send()
            .await
            .map_err(|e| self.fail("delete_item", e))?;

        info!("Item deleted from '{}'", self.table_name);
        Ok(())
    }

    fn fail<E>(&self, operation: &'static str, err: SdkError<E>) -> StoreError
    where
        E: ProvideErrorMetadata + std::error::Error + Send + Sync + 'static,
    {
        let err = StoreError::from_sdk(operation, err);
        error!(table = %self.table_name, "{err}");
        err
    }
}
