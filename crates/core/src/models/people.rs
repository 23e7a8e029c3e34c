use crate::dates::SgDate;
use crate::error::MapperResult;
use crate::mapper::{nested, SgModel};
use crate::models::SgGenericEntity;
use crate::schema::{EntitySchema, FieldSpec};
use crate::types::{EntityType, HumanUserStatus, Record};
use serde::{Deserialize, Serialize};

/// A ShotGrid HumanUser.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SgHumanUser {
    pub id: i64,
    pub login: String,
    pub name: String,
    pub firstname: String,
    pub lastname: String,
    pub email: String,
    pub sg_status_list: String,
    pub file_access: bool,
    pub image: String,
    #[serde(with = "nested::one")]
    pub department: Option<SgGenericEntity>,
    #[serde(with = "nested::list")]
    pub projects: Vec<SgGenericEntity>,
    #[serde(with = "nested::list")]
    pub groups: Vec<SgGenericEntity>,
    #[serde(skip)]
    pub extra_fields: Record,
}

impl SgHumanUser {
    pub fn new(id: i64) -> Self {
        Self {
            id,
            ..Default::default()
        }
    }

    pub fn is_active(&self) -> bool {
        self.sg_status_list == HumanUserStatus::Active.as_str()
    }
}

impl SgModel for SgHumanUser {
    const SCHEMA: EntitySchema = EntitySchema {
        entity_type: Some(EntityType::HumanUser),
        fields: &[
            FieldSpec::scalar("id"),
            FieldSpec::scalar("login"),
            FieldSpec::scalar("name"),
            FieldSpec::scalar("firstname"),
            FieldSpec::scalar("lastname"),
            FieldSpec::scalar("email"),
            FieldSpec::scalar("sg_status_list"),
            FieldSpec::scalar("file_access"),
            FieldSpec::scalar("image"),
            FieldSpec::entity("department", EntityType::Department),
            FieldSpec::entity_list("projects", EntityType::Project),
            FieldSpec::entity_list("groups", EntityType::Group),
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

/// A resource Booking. Both dates are required and validated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SgBooking {
    #[serde(default)]
    pub id: i64,
    #[serde(default, with = "nested::one")]
    pub user: Option<SgHumanUser>,
    pub start_date: SgDate,
    pub end_date: SgDate,
    #[serde(default)]
    pub vacation: bool,
    #[serde(default)]
    pub note: String,
    #[serde(default)]
    pub sg_status_list: String,
    #[serde(default, with = "nested::one")]
    pub project: Option<SgGenericEntity>,
    #[serde(default)]
    pub percent_allocation: i64,
    #[serde(skip)]
    pub extra_fields: Record,
}

impl SgBooking {
    /// Create a booking, failing if either date is not `YYYY-MM-DD`.
    pub fn new(start_date: &str, end_date: &str) -> MapperResult<Self> {
        Ok(Self {
            id: 0,
            user: None,
            start_date: SgDate::parse(start_date)?,
            end_date: SgDate::parse(end_date)?,
            vacation: false,
            note: String::new(),
            sg_status_list: String::new(),
            project: None,
            percent_allocation: 0,
            extra_fields: Record::new(),
        })
    }

    pub fn with_user(mut self, user: SgHumanUser) -> Self {
        self.user = Some(user);
        self
    }

    pub fn with_vacation(mut self, vacation: bool) -> Self {
        self.vacation = vacation;
        self
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = note.into();
        self
    }
}

impl SgModel for SgBooking {
    const SCHEMA: EntitySchema = EntitySchema {
        entity_type: Some(EntityType::Booking),
        fields: &[
            FieldSpec::scalar("id"),
            FieldSpec::entity("user", EntityType::HumanUser),
            FieldSpec::date("start_date"),
            FieldSpec::date("end_date"),
            FieldSpec::scalar("vacation"),
            FieldSpec::scalar("note"),
            FieldSpec::scalar("sg_status_list"),
            FieldSpec::entity("project", EntityType::Project),
            FieldSpec::scalar("percent_allocation"),
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
