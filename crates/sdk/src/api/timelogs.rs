//! TimeLog endpoints.

use super::{
    create_typed, date_between, delete_by_id, field_list, find_typed, month_range, update_typed,
    CreateOutcome,
};
use crate::client::KonbiniClient;
use crate::error::KonbiniResult;
use konbini_core::fields::TIMELOG_FIELDS;
use konbini_core::{BatchRequest, EntityType, Filter, Order, SgTimeLog};
use serde_json::Value;
use tracing::{error, info};

/// TimeLogs API.
pub struct TimeLogsApi<'a> {
    client: &'a KonbiniClient,
}

impl<'a> TimeLogsApi<'a> {
    pub(crate) fn new(client: &'a KonbiniClient) -> Self {
        Self { client }
    }

    /// Time logs of a user.
    pub async fn list(&self, user_id: i64, fields: Option<&[&str]>) -> KonbiniResult<Vec<SgTimeLog>> {
        let filters = [Filter::is_entity("user", EntityType::HumanUser, user_id)];
        let fields = field_list(fields, TIMELOG_FIELDS);
        find_typed(self.client, &filters, &fields, &[]).await
    }

    /// Time logs dated within a month, oldest first.
    pub async fn list_by_month_year(
        &self,
        month: u32,
        year: i32,
        user_id: Option<i64>,
        fields: Option<&[&str]>,
    ) -> KonbiniResult<Vec<SgTimeLog>> {
        let mut filters = vec![date_between("date", month_range(month, year)?)];
        filters.extend(user_id.map(|id| Filter::is_entity("user", EntityType::HumanUser, id)));
        let fields = field_list(fields, TIMELOG_FIELDS);
        find_typed(self.client, &filters, &fields, &[Order::asc("date")]).await
    }

    pub async fn create(&self, timelog: &SgTimeLog) -> CreateOutcome {
        create_typed(self.client, timelog).await
    }

    /// Update a time log. Fails with `InvalidInput` when it has no id.
    pub async fn update(&self, timelog: &SgTimeLog) -> KonbiniResult<bool> {
        update_typed(self.client, timelog).await
    }

    pub async fn delete(&self, id: i64) -> bool {
        delete_by_id(self.client, EntityType::TimeLog.as_str(), id).await
    }

    /// Create many time logs in one batch and return the created records.
    pub async fn bulk_create(&self, timelogs: &[SgTimeLog]) -> KonbiniResult<Vec<Value>> {
        let requests: Vec<BatchRequest> = timelogs.iter().map(BatchRequest::create).collect();
        match self.client.sg().batch(&requests).await {
            Ok(created) => {
                info!(count = created.len(), "Bulk created time logs");
                Ok(created)
            }
            Err(e) => {
                error!(error = %e, count = timelogs.len(), "Failed to bulk create time logs");
                Err(e)
            }
        }
    }

    /// Delete many time logs in one batch.
    pub async fn bulk_delete(&self, ids: &[i64]) -> KonbiniResult<()> {
        let requests: Vec<BatchRequest> = ids
            .iter()
            .map(|&id| BatchRequest::delete(EntityType::TimeLog, id))
            .collect();
        match self.client.sg().batch(&requests).await {
            Ok(_) => Ok(()),
            Err(e) => {
                error!(error = %e, timelog_ids = ?ids, "Failed to bulk delete time logs");
                Err(e)
            }
        }
    }
}
