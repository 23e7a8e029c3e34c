//! Note endpoints.

use super::{create_typed, field_list, find_typed, CreateOutcome};
use crate::client::KonbiniClient;
use crate::error::KonbiniResult;
use konbini_core::fields::NOTE_FIELDS;
use konbini_core::{EntityType, Filter, SgNote};

/// Notes API.
pub struct NotesApi<'a> {
    client: &'a KonbiniClient,
}

impl<'a> NotesApi<'a> {
    pub(crate) fn new(client: &'a KonbiniClient) -> Self {
        Self { client }
    }

    /// Notes of a project.
    pub async fn list(&self, project_id: i64, fields: Option<&[&str]>) -> KonbiniResult<Vec<SgNote>> {
        let filters = [Filter::is_entity("project", EntityType::Project, project_id)];
        let fields = field_list(fields, NOTE_FIELDS);
        find_typed(self.client, &filters, &fields, &[]).await
    }

    pub async fn create(&self, note: &SgNote) -> CreateOutcome {
        create_typed(self.client, note).await
    }
}
