//! HumanUser endpoints.

use super::{create_typed, field_list, find_typed, update_typed, CreateOutcome};
use crate::client::KonbiniClient;
use crate::error::KonbiniResult;
use konbini_core::fields::HUMANUSER_FIELDS;
use konbini_core::{Filter, HumanUserStatus, SgHumanUser};

/// HumanUsers API.
pub struct HumanUsersApi<'a> {
    client: &'a KonbiniClient,
}

impl<'a> HumanUsersApi<'a> {
    pub(crate) fn new(client: &'a KonbiniClient) -> Self {
        Self { client }
    }

    /// List users, or the single user with `id`.
    pub async fn list(
        &self,
        id: Option<i64>,
        fields: Option<&[&str]>,
    ) -> KonbiniResult<Vec<SgHumanUser>> {
        let filters: Vec<Filter> = id.map(|id| Filter::is("id", id)).into_iter().collect();
        let fields = field_list(fields, HUMANUSER_FIELDS);
        find_typed(self.client, &filters, &fields, &[]).await
    }

    /// List users whose status is active.
    pub async fn list_active(&self, fields: Option<&[&str]>) -> KonbiniResult<Vec<SgHumanUser>> {
        let filters = [Filter::is(
            "sg_status_list",
            HumanUserStatus::Active.as_str(),
        )];
        let fields = field_list(fields, HUMANUSER_FIELDS);
        find_typed(self.client, &filters, &fields, &[]).await
    }

    pub async fn create(&self, user: &SgHumanUser) -> CreateOutcome {
        create_typed(self.client, user).await
    }

    /// Update a user. Fails with `InvalidInput` when the user has no id.
    pub async fn update(&self, user: &SgHumanUser) -> KonbiniResult<bool> {
        update_typed(self.client, user).await
    }
}
