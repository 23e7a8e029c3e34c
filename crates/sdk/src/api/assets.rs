//! Asset endpoints.

use super::{field_list, find_typed};
use crate::client::KonbiniClient;
use crate::error::KonbiniResult;
use konbini_core::fields::ASSET_FIELDS;
use konbini_core::{EntityType, Filter, SgAsset};

/// Assets API.
pub struct AssetsApi<'a> {
    client: &'a KonbiniClient,
}

impl<'a> AssetsApi<'a> {
    pub(crate) fn new(client: &'a KonbiniClient) -> Self {
        Self { client }
    }

    /// Assets of a project, with their tasks hydrated.
    pub async fn list(&self, project_id: i64, fields: Option<&[&str]>) -> KonbiniResult<Vec<SgAsset>> {
        let filters = [Filter::is_entity("project", EntityType::Project, project_id)];
        let fields = field_list(fields, ASSET_FIELDS);
        find_typed(self.client, &filters, &fields, &[]).await
    }
}
