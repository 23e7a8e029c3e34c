//! Playlist endpoints.

use super::{field_list, find_typed};
use crate::client::KonbiniClient;
use crate::error::KonbiniResult;
use konbini_core::fields::PLAYLIST_FIELDS;
use konbini_core::{EntityType, Filter, Order, SgPlaylist};

/// Playlists API.
pub struct PlaylistsApi<'a> {
    client: &'a KonbiniClient,
}

impl<'a> PlaylistsApi<'a> {
    pub(crate) fn new(client: &'a KonbiniClient) -> Self {
        Self { client }
    }

    /// Playlists of a project, newest first.
    pub async fn list(
        &self,
        project_id: i64,
        fields: Option<&[&str]>,
    ) -> KonbiniResult<Vec<SgPlaylist>> {
        let filters = [Filter::is_entity("project", EntityType::Project, project_id)];
        let fields = field_list(fields, PLAYLIST_FIELDS);
        find_typed(self.client, &filters, &fields, &[Order::desc("id")]).await
    }
}

#[cfg(test)]
mod tests {
    use crate::api::test_support::{rpc_results, test_client};
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use wiremock::matchers::{body_partial_json, method};
    use wiremock::{Mock, MockServer};

    #[tokio::test]
    async fn test_list_playlists_with_versions() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(body_partial_json(json!({
                "params": [{}, {
                    "type": "Playlist",
                    "sorts": [{"field_name": "id", "direction": "desc"}],
                }],
            })))
            .respond_with(rpc_results(json!({"entities": [{
                "id": 2,
                "type": "Playlist",
                "code": "Dailies 0412",
                "locked": true,
                "versions": [{"id": 90, "type": "Version", "name": "SH010_comp_v003"}],
            }]})))
            .mount(&server)
            .await;

        let client = test_client(&server, 500);
        let playlists = client.playlists().list(70, None).await.unwrap();

        assert!(playlists[0].locked);
        assert_eq!(playlists[0].versions.len(), 1);
        assert_eq!(playlists[0].versions[0].id, 90);
    }
}
