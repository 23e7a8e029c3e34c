//! Project endpoints.

use super::{field_list, find_typed, update_typed};
use crate::client::KonbiniClient;
use crate::error::KonbiniResult;
use konbini_core::fields::PROJECT_FIELDS;
use konbini_core::{Filter, SgProject};

/// Projects API.
pub struct ProjectsApi<'a> {
    client: &'a KonbiniClient,
}

impl<'a> ProjectsApi<'a> {
    pub(crate) fn new(client: &'a KonbiniClient) -> Self {
        Self { client }
    }

    pub async fn list(&self, fields: Option<&[&str]>) -> KonbiniResult<Vec<SgProject>> {
        let fields = field_list(fields, PROJECT_FIELDS);
        find_typed(self.client, &[], &fields, &[]).await
    }

    /// Get a project by id.
    pub async fn get(&self, id: i64, fields: Option<&[&str]>) -> KonbiniResult<Option<SgProject>> {
        let fields = field_list(fields, PROJECT_FIELDS);
        let projects = find_typed(self.client, &[Filter::is("id", id)], &fields, &[]).await?;
        Ok(projects.into_iter().next())
    }

    pub async fn update(&self, project: &SgProject) -> KonbiniResult<bool> {
        update_typed(self.client, project).await
    }
}

#[cfg(test)]
mod tests {
    use crate::api::test_support::{mount_rpc, test_client};
    use chrono::{TimeZone, Utc};
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use wiremock::MockServer;

    #[tokio::test]
    async fn test_get_project_with_users() {
        let server = MockServer::start().await;
        mount_rpc(
            &server,
            "read",
            json!({
                "entities": [{
                    "id": 70,
                    "type": "Project",
                    "name": "Kaiju",
                    "updated_at": "2024-03-01T08:30:00Z",
                    "users": [
                        {"id": 1, "type": "HumanUser", "name": "Mika"},
                        {"id": 2, "type": "HumanUser", "name": "Ren"},
                    ],
                }],
                "paging_info": {"entity_count": 1},
            }),
        )
        .await;

        let client = test_client(&server, 500);
        let project = client.projects().get(70, None).await.unwrap().unwrap();

        assert_eq!(project.name, "Kaiju");
        assert_eq!(project.users.len(), 2);
        assert_eq!(project.users[1].name, "Ren");
        assert!(project.is_updated_after(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()));
    }

    #[tokio::test]
    async fn test_get_missing_project() {
        let server = MockServer::start().await;
        mount_rpc(&server, "read", json!({"entities": []})).await;

        let client = test_client(&server, 500);
        assert!(client.projects().get(404, None).await.unwrap().is_none());
    }
}
