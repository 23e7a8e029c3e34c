//! Version endpoints.

use super::{field_list, find_typed};
use crate::client::KonbiniClient;
use crate::error::KonbiniResult;
use konbini_core::fields::VERSION_FIELDS;
use konbini_core::{EntityType, Filter, Record, SgVersion};
use serde_json::Value;
use tracing::{error, info};

/// Versions API.
pub struct VersionsApi<'a> {
    client: &'a KonbiniClient,
}

impl<'a> VersionsApi<'a> {
    pub(crate) fn new(client: &'a KonbiniClient) -> Self {
        Self { client }
    }

    /// Versions of a project.
    pub async fn list(
        &self,
        project_id: i64,
        fields: Option<&[&str]>,
    ) -> KonbiniResult<Vec<SgVersion>> {
        let filters = [Filter::is_entity("project", EntityType::Project, project_id)];
        let fields = field_list(fields, VERSION_FIELDS);
        find_typed(self.client, &filters, &fields, &[]).await
    }

    /// Set `sg_status_list` of a version, e.g. `"apr"`.
    pub async fn update_status(&self, id: i64, status: &str) -> bool {
        let mut data = Record::new();
        data.insert(
            "sg_status_list".to_string(),
            Value::String(status.to_string()),
        );

        match self
            .client
            .sg()
            .update(EntityType::Version.as_str(), id, &data)
            .await
        {
            Ok(_) => {
                info!(id, status, "Updated version status");
                true
            }
            Err(e) => {
                error!(error = %e, id, status, "Failed to update version status");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::api::test_support::{mount_fault, mount_rpc, rpc_results, test_client};
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use wiremock::matchers::{body_partial_json, method};
    use wiremock::{Mock, MockServer};

    #[tokio::test]
    async fn test_list_versions_with_movie() {
        let server = MockServer::start().await;
        mount_rpc(
            &server,
            "read",
            json!({"entities": [{
                "id": 90,
                "type": "Version",
                "code": "SH010_comp_v003",
                "sg_uploaded_movie": {
                    "url": "https://studio.shotgunstudio.com/file_serve/attachment/1",
                    "name": "SH010_comp_v003.mov",
                    "content_type": "video/quicktime",
                    "link_type": "upload",
                    "type": "Attachment",
                    "id": 1,
                },
                "uploaded_movie_duration": 2.04,
                "sg_uploaded_movie_frame_rate": 24.0,
            }]}),
        )
        .await;

        let client = test_client(&server, 500);
        let versions = client.versions().list(70, None).await.unwrap();

        let movie = versions[0].sg_uploaded_movie.as_ref().unwrap();
        assert_eq!(movie.content_type, "video/quicktime");
        assert_eq!(versions[0].sg_uploaded_movie_frame_rate, 24.0);
    }

    #[tokio::test]
    async fn test_update_status() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(body_partial_json(json!({
                "method_name": "update",
                "params": [{}, {
                    "type": "Version",
                    "id": 90,
                    "fields": [{"field_name": "sg_status_list", "value": "apr"}],
                }],
            })))
            .respond_with(rpc_results(json!({"id": 90, "type": "Version"})))
            .mount(&server)
            .await;

        let client = test_client(&server, 500);
        assert!(client.versions().update_status(90, "apr").await);
    }

    #[tokio::test]
    async fn test_update_status_fault() {
        let server = MockServer::start().await;
        mount_fault(&server, "update").await;

        let client = test_client(&server, 500);
        assert!(!client.versions().update_status(90, "apr").await);
    }
}
