//! Shot endpoints.

use super::{field_list, find_typed};
use crate::client::KonbiniClient;
use crate::error::KonbiniResult;
use konbini_core::fields::SHOT_FIELDS;
use konbini_core::{EntityType, Filter, SgShot};

/// Shots API.
pub struct ShotsApi<'a> {
    client: &'a KonbiniClient,
}

impl<'a> ShotsApi<'a> {
    pub(crate) fn new(client: &'a KonbiniClient) -> Self {
        Self { client }
    }

    /// Shots of a project.
    pub async fn list(&self, project_id: i64, fields: Option<&[&str]>) -> KonbiniResult<Vec<SgShot>> {
        let filters = [Filter::is_entity("project", EntityType::Project, project_id)];
        let fields = field_list(fields, SHOT_FIELDS);
        find_typed(self.client, &filters, &fields, &[]).await
    }
}
