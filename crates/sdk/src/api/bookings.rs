//! Booking endpoints.

use super::{
    create_typed, date_between, delete_by_id, field_list, find_typed, month_range, year_range,
    CreateOutcome,
};
use crate::client::KonbiniClient;
use crate::error::KonbiniResult;
use chrono::Datelike;
use konbini_core::fields::BOOKING_FIELDS;
use konbini_core::{EntityType, Filter, Order, SgBooking};

/// Bookings API.
pub struct BookingsApi<'a> {
    client: &'a KonbiniClient,
}

fn user_filter(user_id: Option<i64>) -> Option<Filter> {
    user_id.map(|id| Filter::is_entity("user", EntityType::HumanUser, id))
}

impl<'a> BookingsApi<'a> {
    pub(crate) fn new(client: &'a KonbiniClient) -> Self {
        Self { client }
    }

    /// List bookings, optionally for one user.
    pub async fn list(
        &self,
        user_id: Option<i64>,
        fields: Option<&[&str]>,
    ) -> KonbiniResult<Vec<SgBooking>> {
        let filters: Vec<Filter> = user_filter(user_id).into_iter().collect();
        let fields = field_list(fields, BOOKING_FIELDS);
        find_typed(self.client, &filters, &fields, &[]).await
    }

    /// Bookings starting in `year`, oldest first.
    pub async fn list_by_year(
        &self,
        year: i32,
        user_id: Option<i64>,
        fields: Option<&[&str]>,
    ) -> KonbiniResult<Vec<SgBooking>> {
        let mut filters = vec![date_between("start_date", year_range(year)?)];
        filters.extend(user_filter(user_id));
        let fields = field_list(fields, BOOKING_FIELDS);
        find_typed(
            self.client,
            &filters,
            &fields,
            &[Order::asc("start_date")],
        )
        .await
    }

    /// Bookings starting in the given month, oldest first.
    ///
    /// Rows whose start date falls outside the month are dropped.
    pub async fn list_by_month_year(
        &self,
        month: u32,
        year: i32,
        user_id: Option<i64>,
        fields: Option<&[&str]>,
    ) -> KonbiniResult<Vec<SgBooking>> {
        let mut filters = vec![date_between("start_date", month_range(month, year)?)];
        filters.extend(user_filter(user_id));
        let fields = field_list(fields, BOOKING_FIELDS);
        let bookings: Vec<SgBooking> = find_typed(
            self.client,
            &filters,
            &fields,
            &[Order::asc("start_date")],
        )
        .await?;

        Ok(bookings
            .into_iter()
            .filter(|booking| {
                booking
                    .start_date
                    .to_naive_date()
                    .is_ok_and(|d| d.month() == month && d.year() == year)
            })
            .collect())
    }

    pub async fn create(&self, booking: &SgBooking) -> CreateOutcome {
        create_typed(self.client, booking).await
    }

    /// Delete a booking. Returns `false` if the server refused.
    pub async fn delete(&self, id: i64) -> bool {
        delete_by_id(self.client, EntityType::Booking.as_str(), id).await
    }
}

#[cfg(test)]
mod tests {
    use crate::api::test_support::{mount_fault, mount_rpc, rpc_results, test_client};
    use konbini_core::{SgBooking, SgHumanUser, SgModel};
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use wiremock::matchers::{body_partial_json, method, path};
    use wiremock::{Mock, MockServer};

    #[tokio::test]
    async fn test_list_by_year_filters_range() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api3/json"))
            .and(body_partial_json(json!({
                "params": [{}, {
                    "type": "Booking",
                    "filters": {"conditions": [
                        {"path": "start_date", "relation": "between", "values": ["2023-01-01", "2023-12-31"]},
                        {"path": "user", "relation": "is", "values": [{"id": 5, "type": "HumanUser"}]},
                    ]},
                    "sorts": [{"field_name": "start_date", "direction": "asc"}],
                }],
            })))
            .respond_with(rpc_results(json!({
                "entities": [{
                    "id": 1,
                    "type": "Booking",
                    "start_date": "2023-04-03",
                    "end_date": "2023-04-07",
                    "vacation": true,
                    "user": {"id": 5, "type": "HumanUser", "name": "Mika"},
                }],
            })))
            .mount(&server)
            .await;

        let client = test_client(&server, 500);
        let bookings = client
            .bookings()
            .list_by_year(2023, Some(5), None)
            .await
            .unwrap();

        assert_eq!(bookings.len(), 1);
        assert!(bookings[0].vacation);
        assert_eq!(bookings[0].user.as_ref().map(|u| u.name.as_str()), Some("Mika"));
    }

    #[tokio::test]
    async fn test_list_by_month_year_drops_other_months() {
        let server = MockServer::start().await;
        mount_rpc(
            &server,
            "read",
            json!({"entities": [
                {"id": 1, "type": "Booking", "start_date": "2024-02-05", "end_date": "2024-02-06"},
                {"id": 2, "type": "Booking", "start_date": "2024-03-01", "end_date": "2024-03-02"},
            ]}),
        )
        .await;

        let client = test_client(&server, 500);
        let bookings = client
            .bookings()
            .list_by_month_year(2, 2024, None, None)
            .await
            .unwrap();

        let ids: Vec<i64> = bookings.iter().map(|b| b.id).collect();
        assert_eq!(ids, vec![1]);
    }

    #[tokio::test]
    async fn test_invalid_date_in_response_is_error() {
        let server = MockServer::start().await;
        mount_rpc(
            &server,
            "read",
            json!({"entities": [
                {"id": 1, "type": "Booking", "start_date": "2024/02/05", "end_date": "2024-02-06"},
            ]}),
        )
        .await;

        let client = test_client(&server, 500);
        let result = client.bookings().list(None, None).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_create_booking_sends_user_link() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api3/json"))
            .and(body_partial_json(json!({
                "method_name": "create",
                "params": [{}, {"type": "Booking"}],
            })))
            .respond_with(rpc_results(json!({"id": 31, "type": "Booking"})))
            .mount(&server)
            .await;

        let booking = SgBooking::new("2024-04-29", "2024-05-03")
            .unwrap()
            .with_user(SgHumanUser::new(5))
            .with_vacation(true)
            .with_note("Golden Week");

        let data = booking.to_record(false);
        assert_eq!(data["user"], json!({"id": 5, "type": "HumanUser"}));
        assert_eq!(data["start_date"], json!("2024-04-29"));
        assert!(!data.contains_key("id"));
        assert!(!data.contains_key("percent_allocation"));

        let client = test_client(&server, 500);
        let outcome = client.bookings().create(&booking).await;
        assert!(outcome.is_created);
        assert_eq!(outcome.id(), 31);
    }

    #[tokio::test]
    async fn test_delete_booking() {
        let server = MockServer::start().await;
        mount_rpc(&server, "delete", json!(true)).await;

        let client = test_client(&server, 500);
        assert!(client.bookings().delete(31).await);
    }

    #[tokio::test]
    async fn test_delete_failure_is_false() {
        let server = MockServer::start().await;
        mount_fault(&server, "delete").await;

        let client = test_client(&server, 500);
        assert!(!client.bookings().delete(31).await);
    }
}
