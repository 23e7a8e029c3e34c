//! Task endpoints.

use super::{create_typed, field_list, find_typed, CreateOutcome};
use crate::client::KonbiniClient;
use crate::error::KonbiniResult;
use konbini_core::fields::TASK_FIELDS;
use konbini_core::{BatchRequest, EntityType, Filter, Record, SgTask};
use serde_json::Value;
use tracing::{error, info};

/// Tasks API.
pub struct TasksApi<'a> {
    client: &'a KonbiniClient,
}

impl<'a> TasksApi<'a> {
    pub(crate) fn new(client: &'a KonbiniClient) -> Self {
        Self { client }
    }

    /// Tasks with the given ids.
    ///
    /// Tasks such as "Idle" or "Report" have no linked entity.
    pub async fn get_many(&self, ids: &[i64], fields: Option<&[&str]>) -> KonbiniResult<Vec<SgTask>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        let fields = field_list(fields, TASK_FIELDS);
        find_typed(self.client, &[Filter::id_in(ids)], &fields, &[]).await
    }

    pub async fn create(&self, task: &SgTask) -> CreateOutcome {
        create_typed(self.client, task).await
    }

    /// Set the same status on every task in one batch.
    ///
    /// The batch is atomic on the server; a failure is logged and returned.
    pub async fn bulk_update_status(&self, ids: &[i64], status: &str) -> KonbiniResult<()> {
        let requests: Vec<BatchRequest> = ids
            .iter()
            .map(|&id| {
                let mut data = Record::new();
                data.insert(
                    "sg_status_list".to_string(),
                    Value::String(status.to_string()),
                );
                BatchRequest::update_fields(EntityType::Task, id, data)
            })
            .collect();

        match self.client.sg().batch(&requests).await {
            Ok(_) => {
                info!(count = ids.len(), status, "Bulk updated task status");
                Ok(())
            }
            Err(e) => {
                error!(error = %e, task_ids = ?ids, status, "Failed to bulk update task status");
                Err(e)
            }
        }
    }
}
