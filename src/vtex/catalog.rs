use serde_json::Value;

use crate::vtex::{HttpMethod, VtexClient, VtexError};

/// Catalog product endpoints.
///
/// A thin endpoint builder over [`VtexClient`]; holds no state of its own.
pub struct ProductApi<'a> {
    client: &'a VtexClient,
}

impl<'a> ProductApi<'a> {
    pub fn new(client: &'a VtexClient) -> Self {
        Self { client }
    }

    /// Fetches one product document from the private catalog API.
    pub async fn get_product(
        &self,
        account_name: &str,
        environment: &str,
        product_id: &str,
    ) -> Result<Value, VtexError> {
        let endpoint = product_endpoint(account_name, environment, product_id);
        self.client.request(HttpMethod::Get, &endpoint).await
    }
}

fn product_endpoint(account_name: &str, environment: &str, product_id: &str) -> String {
    format!("{account_name}.{environment}.com.br/api/catalog/pvt/product/{product_id}")
}
