//! Raw RPC calls against the ShotGrid API.

use crate::client::KonbiniClient;
use crate::error::{KonbiniError, KonbiniResult};
use konbini_core::{BatchRequest, Filter, Order, Record};
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::debug;

/// Raw RPC API: untyped records in, untyped records out.
pub struct ShotgunApi<'a> {
    client: &'a KonbiniClient,
}

#[derive(Debug, Deserialize)]
struct ReadResult {
    #[serde(default)]
    entities: Vec<Record>,
    #[serde(default)]
    paging_info: Option<PagingInfo>,
}

#[derive(Debug, Deserialize)]
struct PagingInfo {
    entity_count: usize,
}

fn conditions(filters: &[Filter]) -> Value {
    let conditions: Vec<Value> = filters
        .iter()
        .map(|f| {
            json!({
                "path": f.field,
                "relation": f.operator.as_str(),
                "values": f.values(),
            })
        })
        .collect();
    json!({ "logical_operator": "and", "conditions": conditions })
}

fn field_values(data: &Record) -> Vec<Value> {
    data.iter()
        .map(|(name, value)| json!({ "field_name": name, "value": value }))
        .collect()
}

fn batch_item(request: &BatchRequest) -> Value {
    match request {
        BatchRequest::Create { entity_type, data } => {
            let mut return_fields = vec!["id".to_string()];
            return_fields.extend(data.keys().cloned());
            json!({
                "request_type": "create",
                "type": entity_type,
                "fields": field_values(data),
                "return_fields": return_fields,
            })
        }
        BatchRequest::Update {
            entity_type,
            entity_id,
            data,
        } => json!({
            "request_type": "update",
            "type": entity_type,
            "id": entity_id,
            "fields": field_values(data),
        }),
        BatchRequest::Delete {
            entity_type,
            entity_id,
        } => json!({
            "request_type": "delete",
            "type": entity_type,
            "id": entity_id,
        }),
    }
}

impl<'a> ShotgunApi<'a> {
    pub(crate) fn new(client: &'a KonbiniClient) -> Self {
        Self { client }
    }

    /// Find all entities matching the filters, following pagination.
    pub async fn find(
        &self,
        entity_type: &str,
        filters: &[Filter],
        fields: &[String],
        order: &[Order],
    ) -> KonbiniResult<Vec<Record>> {
        let per_page = self.client.config().entities_per_page;
        self.read(entity_type, filters, fields, order, per_page, None)
            .await
    }

    /// Find the first entity matching the filters.
    pub async fn find_one(
        &self,
        entity_type: &str,
        filters: &[Filter],
        fields: &[String],
    ) -> KonbiniResult<Option<Record>> {
        let mut records = self
            .read(entity_type, filters, fields, &[], 1, Some(1))
            .await?;
        Ok(if records.is_empty() {
            None
        } else {
            Some(records.swap_remove(0))
        })
    }

    async fn read(
        &self,
        entity_type: &str,
        filters: &[Filter],
        fields: &[String],
        order: &[Order],
        per_page: usize,
        limit: Option<usize>,
    ) -> KonbiniResult<Vec<Record>> {
        let mut records = Vec::new();
        let mut current_page = 1;

        loop {
            let mut params = json!({
                "type": entity_type,
                "return_fields": fields,
                "filters": conditions(filters),
                "return_only": "active",
                "paging": {
                    "entities_per_page": per_page,
                    "current_page": current_page,
                },
            });
            if !order.is_empty() {
                params["sorts"] = serde_json::to_value(order)?;
            }

            let page: ReadResult = self.client.http.call("read", params).await?;
            let fetched = page.entities.len();
            records.extend(page.entities);
            debug!(entity_type, current_page, fetched, "Read page");

            let exhausted = page
                .paging_info
                .is_some_and(|info| records.len() >= info.entity_count);
            let limited = limit.is_some_and(|limit| records.len() >= limit);
            if fetched < per_page || exhausted || limited {
                break;
            }
            current_page += 1;
        }

        if let Some(limit) = limit {
            records.truncate(limit);
        }
        Ok(records)
    }

    /// Create an entity and return the created record.
    ///
    /// `id` and the written fields are always returned alongside
    /// `return_fields`.
    pub async fn create(
        &self,
        entity_type: &str,
        data: &Record,
        return_fields: &[String],
    ) -> KonbiniResult<Record> {
        let mut fields = vec!["id".to_string()];
        for name in data.keys().chain(return_fields) {
            if !fields.contains(name) {
                fields.push(name.clone());
            }
        }

        let params = json!({
            "type": entity_type,
            "fields": field_values(data),
            "return_fields": fields,
        });
        self.client.http.call("create", params).await
    }

    /// Update an entity and return the updated fields.
    pub async fn update(&self, entity_type: &str, id: i64, data: &Record) -> KonbiniResult<Record> {
        if id == 0 {
            return Err(KonbiniError::InvalidInput(format!(
                "cannot update {entity_type} without an id"
            )));
        }
        let params = json!({
            "type": entity_type,
            "id": id,
            "fields": field_values(data),
        });
        self.client.http.call("update", params).await
    }

    /// Retire an entity. Returns `true` when the server retired it.
    pub async fn delete(&self, entity_type: &str, id: i64) -> KonbiniResult<bool> {
        let params = json!({ "type": entity_type, "id": id });
        self.client.http.call("delete", params).await
    }

    /// Run several requests in one transaction.
    pub async fn batch(&self, requests: &[BatchRequest]) -> KonbiniResult<Vec<Value>> {
        if requests.is_empty() {
            return Ok(Vec::new());
        }
        let items: Vec<Value> = requests.iter().map(batch_item).collect();
        self.client.http.call("batch", Value::Array(items)).await
    }

    /// Field definitions of an entity type, keyed by field name.
    pub async fn schema_field_read(&self, entity_type: &str) -> KonbiniResult<Record> {
        self.client
            .http
            .call("schema_field_read", json!({ "type": entity_type }))
            .await
    }
}
