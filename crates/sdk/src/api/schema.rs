//! Schema introspection.

use crate::client::KonbiniClient;
use crate::error::KonbiniResult;

/// Schema API.
pub struct SchemaApi<'a> {
    client: &'a KonbiniClient,
}

impl<'a> SchemaApi<'a> {
    pub(crate) fn new(client: &'a KonbiniClient) -> Self {
        Self { client }
    }

    /// Names of every field defined on `entity_type`.
    pub async fn entity_fields(&self, entity_type: &str) -> KonbiniResult<Vec<String>> {
        let schema = self.client.sg().schema_field_read(entity_type).await?;
        Ok(schema.keys().cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use crate::api::test_support::{mount_fault, mount_rpc, test_client};
    use serde_json::json;
    use wiremock::MockServer;

    #[tokio::test]
    async fn test_entity_fields() {
        let server = MockServer::start().await;
        mount_rpc(
            &server,
            "schema_field_read",
            json!({
                "code": {"data_type": {"value": "text"}},
                "sg_cut_in": {"data_type": {"value": "number"}},
            }),
        )
        .await;

        let client = test_client(&server, 500);
        let mut fields = client.schema().entity_fields("Shot").await.unwrap();
        fields.sort();
        assert_eq!(fields, vec!["code", "sg_cut_in"]);
    }

    #[tokio::test]
    async fn test_entity_fields_fault() {
        let server = MockServer::start().await;
        mount_fault(&server, "schema_field_read").await;

        let client = test_client(&server, 500);
        assert!(client.schema().entity_fields("Nope").await.is_err());
    }
}
