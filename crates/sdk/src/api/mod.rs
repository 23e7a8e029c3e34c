//! API modules for the Konbini SDK.

mod assets;
mod attachments;
mod bookings;
mod humanusers;
mod notes;
mod playlists;
mod projects;
mod schema;
mod sg;
mod shots;
mod tasks;
mod timelogs;
mod versions;

pub use assets::AssetsApi;
pub use attachments::AttachmentsApi;
pub use bookings::BookingsApi;
pub use humanusers::HumanUsersApi;
pub use notes::NotesApi;
pub use playlists::PlaylistsApi;
pub use projects::ProjectsApi;
pub use schema::SchemaApi;
pub use sg::ShotgunApi;
pub use shots::ShotsApi;
pub use tasks::TasksApi;
pub use timelogs::TimeLogsApi;
pub use versions::VersionsApi;

use crate::client::KonbiniClient;
use crate::error::{KonbiniError, KonbiniResult};
use chrono::NaiveDate;
use konbini_core::fields;
use konbini_core::{decode, Filter, Order, Record, SgDate, SgModel};
use tracing::error;

/// Result of a create call.
///
/// Remote failures are logged and reported as `is_created == false` with an
/// empty record.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CreateOutcome {
    pub is_created: bool,
    pub record: Record,
}

impl CreateOutcome {
    pub(crate) fn created(record: Record) -> Self {
        Self {
            is_created: true,
            record,
        }
    }

    pub(crate) fn failed() -> Self {
        Self::default()
    }

    /// Id of the created entity, `0` when nothing was created.
    pub fn id(&self) -> i64 {
        self.record
            .get("id")
            .and_then(|v| v.as_i64())
            .unwrap_or_default()
    }
}

fn field_list(fields: Option<&[&str]>, defaults: &[&str]) -> Vec<String> {
    fields::to_owned(fields.unwrap_or(defaults))
}

/// Query and decode into `E`.
///
/// A remote failure is logged and yields an empty list. Records that do not
/// decode are an error.
async fn find_typed<E: SgModel>(
    client: &KonbiniClient,
    filters: &[Filter],
    fields: &[String],
    order: &[Order],
) -> KonbiniResult<Vec<E>> {
    let entity_type = E::SCHEMA.type_name();
    let records = match client.sg().find(entity_type, filters, fields, order).await {
        Ok(records) => records,
        Err(e) if e.is_remote() => {
            error!(error = %e, entity_type, "Failed to read entities");
            return Ok(Vec::new());
        }
        Err(e) => return Err(e),
    };

    records
        .iter()
        .map(|record| decode::<E>(record).map_err(KonbiniError::from))
        .collect()
}

/// Create an entity from its sparse write payload.
async fn create_typed<E: SgModel>(client: &KonbiniClient, entity: &E) -> CreateOutcome {
    let entity_type = entity.entity_type();
    let data = entity.to_record(false);
    match client.sg().create(entity_type, &data, &[]).await {
        Ok(record) => CreateOutcome::created(record),
        Err(e) => {
            error!(error = %e, entity_type, data = ?data, "Failed to create entity");
            CreateOutcome::failed()
        }
    }
}

/// Update an entity from its sparse write payload.
///
/// An entity without an id is rejected before any request is made.
async fn update_typed<E: SgModel>(client: &KonbiniClient, entity: &E) -> KonbiniResult<bool> {
    let entity_type = entity.entity_type();
    if entity.id() == 0 {
        return Err(KonbiniError::InvalidInput(format!(
            "cannot update {entity_type} without an id"
        )));
    }

    let data = entity.to_record(false);
    match client.sg().update(entity_type, entity.id(), &data).await {
        Ok(_) => Ok(true),
        Err(e) => {
            error!(error = %e, entity_type, id = entity.id(), data = ?data, "Failed to update entity");
            Ok(false)
        }
    }
}

/// Retire an entity, logging and returning `false` on failure.
async fn delete_by_id(client: &KonbiniClient, entity_type: &str, id: i64) -> bool {
    match client.sg().delete(entity_type, id).await {
        Ok(deleted) => deleted,
        Err(e) => {
            error!(error = %e, entity_type, id, "Failed to delete entity");
            false
        }
    }
}

/// First and last day of a calendar year.
pub(crate) fn year_range(year: i32) -> KonbiniResult<(SgDate, SgDate)> {
    let first = NaiveDate::from_ymd_opt(year, 1, 1);
    let last = NaiveDate::from_ymd_opt(year, 12, 31);
    match (first, last) {
        (Some(first), Some(last)) => Ok((
            SgDate::from_naive_date(first),
            SgDate::from_naive_date(last),
        )),
        _ => Err(KonbiniError::InvalidInput(format!("invalid year {year}"))),
    }
}

/// First and last day of a month.
pub(crate) fn month_range(month: u32, year: i32) -> KonbiniResult<(SgDate, SgDate)> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)
        .ok_or_else(|| KonbiniError::InvalidInput(format!("invalid month {month}/{year}")))?;
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    };
    let last = next
        .and_then(|d| d.pred_opt())
        .ok_or_else(|| KonbiniError::InvalidInput(format!("invalid month {month}/{year}")))?;
    Ok((SgDate::from_naive_date(first), SgDate::from_naive_date(last)))
}

/// `between` filter over a `YYYY-MM-DD` field.
pub(crate) fn date_between(field: &str, (low, high): (SgDate, SgDate)) -> Filter {
    Filter::between(field, low.as_str(), high.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_year_range() {
        let (first, last) = year_range(2024).unwrap();
        assert_eq!(first.as_str(), "2024-01-01");
        assert_eq!(last.as_str(), "2024-12-31");
    }

    #[test]
    fn test_month_range() {
        let (first, last) = month_range(2, 2024).unwrap();
        assert_eq!(first.as_str(), "2024-02-01");
        assert_eq!(last.as_str(), "2024-02-29");

        let (_, last) = month_range(12, 2023).unwrap();
        assert_eq!(last.as_str(), "2023-12-31");

        assert!(matches!(month_range(13, 2023), Err(KonbiniError::InvalidInput(_))));
    }

    #[test]
    fn test_create_outcome_id() {
        let mut record = Record::new();
        record.insert("id".to_string(), serde_json::json!(42));
        assert_eq!(CreateOutcome::created(record).id(), 42);
        assert_eq!(CreateOutcome::failed().id(), 0);
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use crate::client::KonbiniClient;
    use crate::config::{ClientConfig, RetryConfig};
    use serde_json::{json, Value};
    use wiremock::matchers::{body_partial_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    pub fn test_client(server: &MockServer, entities_per_page: usize) -> KonbiniClient {
        let mut config = ClientConfig::new(
            url::Url::parse(&server.uri()).unwrap(),
            "konbini",
            "secret",
        );
        config.retry_config = RetryConfig::no_retry();
        config.entities_per_page = entities_per_page;
        KonbiniClient::from_config(config).unwrap()
    }

    pub fn rpc_results(results: Value) -> ResponseTemplate {
        ResponseTemplate::new(200).set_body_json(json!({ "results": results }))
    }

    pub fn rpc_fault(message: &str) -> ResponseTemplate {
        ResponseTemplate::new(200).set_body_json(json!({
            "exception": true,
            "message": message,
            "error_code": 103,
        }))
    }

    /// Answer every call to `method_name` with `results`.
    pub async fn mount_rpc(server: &MockServer, method_name: &str, results: Value) {
        Mock::given(method("POST"))
            .and(path("/api3/json"))
            .and(body_partial_json(json!({ "method_name": method_name })))
            .respond_with(rpc_results(results))
            .mount(server)
            .await;
    }

    /// Answer every call to `method_name` with an exception.
    pub async fn mount_fault(server: &MockServer, method_name: &str) {
        Mock::given(method("POST"))
            .and(path("/api3/json"))
            .and(body_partial_json(json!({ "method_name": method_name })))
            .respond_with(rpc_fault("API call failed"))
            .mount(server)
            .await;
    }
}
