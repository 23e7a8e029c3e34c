//! Attachment endpoints.

use super::{field_list, find_typed};
use crate::client::KonbiniClient;
use crate::error::KonbiniResult;
use konbini_core::fields::ATTACHMENT_FIELDS;
use konbini_core::{link, Filter, FilterOperator, SgAttachment};

/// Attachments API.
pub struct AttachmentsApi<'a> {
    client: &'a KonbiniClient,
}

impl<'a> AttachmentsApi<'a> {
    pub(crate) fn new(client: &'a KonbiniClient) -> Self {
        Self { client }
    }

    /// Attachments linked to an entity, e.g. the files of a Note.
    pub async fn list_for(
        &self,
        entity_type: &str,
        id: i64,
        fields: Option<&[&str]>,
    ) -> KonbiniResult<Vec<SgAttachment>> {
        let filters = [Filter::new(
            "attachment_links",
            FilterOperator::In,
            vec![link(entity_type, id)],
        )];
        let fields = field_list(fields, ATTACHMENT_FIELDS);
        find_typed(self.client, &filters, &fields, &[]).await
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
    async fn test_list_for_note() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(body_partial_json(json!({
                "params": [{}, {
                    "type": "Attachment",
                    "filters": {"conditions": [
                        {"path": "attachment_links", "relation": "in", "values": [{"id": 3, "type": "Note"}]},
                    ]},
                }],
            })))
            .respond_with(rpc_results(json!({"entities": [{
                "id": 500,
                "type": "Attachment",
                "filename": "frame_1001.jpg",
                "file_extension": "jpg",
                "file_size": 20480,
                "created_by": {"id": 1, "type": "HumanUser", "name": "Mika"},
            }]})))
            .mount(&server)
            .await;

        let client = test_client(&server, 500);
        let attachments = client.attachments().list_for("Note", 3, None).await.unwrap();

        assert_eq!(attachments[0].filename, "frame_1001.jpg");
        assert_eq!(attachments[0].file_size, 20480);
        assert_eq!(attachments[0].created_by.as_ref().map(|u| u.id), Some(1));
    }
}
