use crate::domain::customer::Customer;
use crate::services::error_handling::CustomerError;
use anyhow::Result;
use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, info};

/// Where fresh customer batches come from.
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait CustomerSource {
    /// One round trip returning `quantity` records, which become the whole
    /// working set.
    async fn fetch_batch(&self, quantity: u32) -> Result<Vec<Customer>>;
}

#[derive(Debug, Deserialize)]
struct BatchEnvelope {
    data: Vec<Customer>,
}

/// Reads batches from the faker persons endpoint.
#[derive(Clone)]
pub struct CustomerRepository {
    client: reqwest::Client,
    endpoint: String,
}

impl CustomerRepository {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }

    /// Decodes a response body of the form `{ "data": [...] }`.
    pub fn decode_batch(body: &str) -> Result<Vec<Customer>> {
        let envelope: BatchEnvelope = serde_json::from_str(body).map_err(|e| CustomerError::Decode {
            message: e.to_string(),
        })?;
        Ok(envelope.data)
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl CustomerSource for CustomerRepository {
    async fn fetch_batch(&self, quantity: u32) -> Result<Vec<Customer>> {
        if quantity == 0 {
            return Err(CustomerError::InvalidQuantity { quantity }.into());
        }

        debug!(endpoint = %self.endpoint, quantity, "Requesting customer batch");

        let response = self
            .client
            .get(&self.endpoint)
            .query(&[("_quantity", quantity)])
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| CustomerError::Transport { message: e.to_string() })?;

        let body = response
            .text()
            .await
            .map_err(|e| CustomerError::Transport { message: e.to_string() })?;

        let customers = Self::decode_batch(&body)?;
        info!(count = customers.len(), "Fetched customers");
        Ok(customers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_batch() {
        let body = r#"{
            "status": "OK", "code": 200, "total": 2,
            "data": [
                {"id": 1, "firstname": "Ada", "lastname": "Lovelace", "email": "ada@example.com",
                 "address": {"id": 0, "street": "1 Main", "city": "London", "country": "UK"}},
                {"id": 2, "firstname": "Alan", "lastname": "Turing"}
            ]
        }"#;

        let customers = CustomerRepository::decode_batch(body).unwrap();
        assert_eq!(customers.len(), 2);
        assert_eq!(customers[0].address.street, "1 Main");
    }

    #[test]
    fn test_decode_rejects_missing_data() {
        let err = CustomerRepository::decode_batch(r#"{"status": "error"}"#).unwrap_err();
        assert!(matches!(err.downcast_ref::<CustomerError>(), Some(CustomerError::Decode { .. })));
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[tokio::test]
    async fn test_zero_quantity_is_rejected_without_request() {
        let repo = CustomerRepository::new("http://127.0.0.1:9/unused");
        let err = repo.fetch_batch(0).await.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CustomerError>(),
            Some(CustomerError::InvalidQuantity { quantity: 0 })
        ));
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[tokio::test]
    async fn test_unreachable_endpoint_is_transport_error() {
        let repo = CustomerRepository::new("http://127.0.0.1:9/persons");
        let err = repo.fetch_batch(5).await.unwrap_err();
        assert!(matches!(err.downcast_ref::<CustomerError>(), Some(CustomerError::Transport { .. })));
    }
}
