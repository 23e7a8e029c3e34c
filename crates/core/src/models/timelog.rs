use crate::dates::SgDate;
use crate::error::MapperResult;
use crate::mapper::{nested, SgModel};
use crate::models::SgGenericEntity;
use crate::schema::{EntitySchema, FieldSpec};
use crate::types::{EntityType, Record};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A ShotGrid TimeLog. The date is required and validated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SgTimeLog {
    #[serde(default)]
    pub id: i64,
    pub date: SgDate,
    #[serde(default)]
    pub description: String,
    /// Minutes.
    #[serde(default)]
    pub duration: f64,
    /// Usually the Task the time was spent on.
    #[serde(default, with = "nested::one")]
    pub entity: Option<SgGenericEntity>,
    #[serde(default, with = "nested::one")]
    pub project: Option<SgGenericEntity>,
    #[serde(default, with = "nested::one")]
    pub user: Option<SgGenericEntity>,
    #[serde(skip)]
    pub extra_fields: Record,
}

impl SgTimeLog {
    /// Create a timelog, failing if `date` is not `YYYY-MM-DD`.
    pub fn new(date: &str) -> MapperResult<Self> {
        Ok(Self {
            id: 0,
            date: SgDate::parse(date)?,
            description: String::new(),
            duration: 0.0,
            entity: None,
            project: None,
            user: None,
            extra_fields: Record::new(),
        })
    }

    /// The logged day as a calendar date.
    pub fn get_date(&self) -> MapperResult<NaiveDate> {
        self.date.to_naive_date()
    }
}

impl SgModel for SgTimeLog {
    const SCHEMA: EntitySchema = EntitySchema {
        entity_type: Some(EntityType::TimeLog),
        fields: &[
            FieldSpec::scalar("id"),
            FieldSpec::date("date"),
            FieldSpec::scalar("description"),
            FieldSpec::scalar("duration"),
            FieldSpec::link("entity"),
            FieldSpec::entity("project", EntityType::Project),
            FieldSpec::entity("user", EntityType::HumanUser),
        ],
    };

    fn id(&self) -> i64 {
        self.id
    }

    fn extra_fields(&self) -> &Record {
        &self.extra_fields
    }

    fn extra_fields_mut(&mut self) -> &mut Record {
        &mut self.extra_fields
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mapper::{decode, encode};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_timelog_date_validation() {
        assert!(SgTimeLog::new("2021-8-31").unwrap_err().is_invalid_date());
        let timelog = SgTimeLog::new("2021-08-31").unwrap();
        assert_eq!(
            timelog.get_date().unwrap(),
            NaiveDate::from_ymd_opt(2021, 8, 31).unwrap()
        );
    }

    #[test]
    fn test_timelog_payload() {
        let mut timelog = SgTimeLog::new("2021-08-31").unwrap();
        timelog.duration = 117.0;
        timelog.description = "Golden Week 2023".to_string();
        timelog.project = Some(SgGenericEntity::new(EntityType::Project, 410));
        timelog.entity = Some(SgGenericEntity::new(EntityType::Task, 152698));
        timelog.user = Some(SgGenericEntity::new(EntityType::HumanUser, 970));

        assert_eq!(
            serde_json::Value::Object(encode(&timelog, false)),
            json!({
                "project": {"id": 410, "type": "Project"},
                "date": "2021-08-31",
                "duration": 117.0,
                "entity": {"id": 152698, "type": "Task"},
                "user": {"id": 970, "type": "HumanUser"},
                "description": "Golden Week 2023",
            })
        );
    }

    #[test]
    fn test_decode_timelog_integer_duration() {
        let record = json!({"id": 1, "date": "2021-08-31", "duration": 480});
        let timelog: SgTimeLog = decode(record.as_object().unwrap()).unwrap();
        assert_eq!(timelog.duration, 480.0);
    }
}
