//! End-to-end tests for the VTEX client against a local mock server.

use anyhow::Result;
use flexapi::vtex::{HttpMethod, ProductApi, RequestOptions, VtexClient, VtexError};
use httpmock::prelude::*;
use serde_json::json;

fn client_for(server: &MockServer) -> VtexClient {
    VtexClient::new(server.base_url(), "app_key", "app_token").unwrap()
}

#[tokio::test]
async fn get_product_fetches_decoded_json() -> Result<()> {
    let server = MockServer::start();

    let product_mock = server.mock(|when, then| {
        when.method(GET)
            .path("/account_name.environment.com.br/api/catalog/pvt/product/123")
            .header("X-VTEX-API-AppKey", "app_key")
            .header("X-VTEX-API-AppToken", "app_token");
        then.status(200)
            .json_body(json!({"id": "123", "name": "Produto Teste"}));
    });

    let client = client_for(&server);
    let product = ProductApi::new(&client)
        .get_product("account_name", "environment", "123")
        .await?;

    assert_eq!(product, json!({"id": "123", "name": "Produto Teste"}));
    product_mock.assert();
    Ok(())
}

#[tokio::test]
async fn non_2xx_status_propagates_as_error() {
    let server = MockServer::start();

    server.mock(|when, then| {
        when.method(GET)
            .path("/account_name.environment.com.br/api/catalog/pvt/product/404");
        then.status(404).json_body(json!({"error": "not found"}));
    });

    let client = client_for(&server);
    let result = ProductApi::new(&client)
        .get_product("account_name", "environment", "404")
        .await;

    let err = result.expect_err("expected status error");
    assert_eq!(err.status().map(|s| s.as_u16()), Some(404));
    match err {
        VtexError::Status { status, url } => {
            assert_eq!(status.as_u16(), 404);
            assert!(url.ends_with("/account_name.environment.com.br/api/catalog/pvt/product/404"));
        }
        other => panic!("expected status error, got {other:?}"),
    }
}

#[tokio::test]
async fn request_with_sends_json_body_and_query() -> Result<()> {
    let server = MockServer::start();

    let create_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/api/catalog/pvt/product")
            .query_param("an", "account_name")
            .header("X-VTEX-API-AppKey", "app_key")
            .json_body(json!({"name": "Produto Novo"}));
        then.status(200).json_body(json!({"id": "789"}));
    });

    let client = client_for(&server);
    let options = RequestOptions::new()
        .query("an", "account_name")
        .json(json!({"name": "Produto Novo"}));
    let created = client
        .request_with(HttpMethod::Post, "api/catalog/pvt/product", options)
        .await?;

    assert_eq!(created, json!({"id": "789"}));
    create_mock.assert();
    Ok(())
}

#[tokio::test]
async fn delete_passes_the_method_through() -> Result<()> {
    let server = MockServer::start();

    let delete_mock = server.mock(|when, then| {
        when.method(DELETE).path("/api/catalog/pvt/product/123");
        then.status(200).json_body(json!({"deleted": true}));
    });

    let client = client_for(&server);
    let body = client
        .request(HttpMethod::Delete, "api/catalog/pvt/product/123")
        .await?;

    assert_eq!(body, json!({"deleted": true}));
    delete_mock.assert();
    Ok(())
}
