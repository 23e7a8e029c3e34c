use crate::mapper::{nested, SgModel};
use crate::models::SgHumanUser;
use crate::schema::{EntitySchema, FieldSpec};
use crate::types::{EntityType, Record};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A ShotGrid Project.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SgProject {
    pub id: i64,
    pub name: String,
    pub archived: bool,
    pub code: String,
    pub sg_description: String,
    pub sg_status: String,
    pub sg_type: String,
    /// `YYYY-MM-DD`; not validated.
    pub start_date: String,
    pub end_date: String,
    #[serde(with = "crate::dates::sg_datetime")]
    pub updated_at: Option<DateTime<Utc>>,
    /// Thumbnail URL when read back from ShotGrid.
    pub image: String,
    pub filmstrip_image: String,
    /// Local path of an image to upload.
    pub image_upload: String,
    /// Number of days.
    pub duration: i64,
    #[serde(with = "nested::list")]
    pub users: Vec<SgHumanUser>,
    #[serde(skip)]
    pub extra_fields: Record,
}

impl SgProject {
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            ..Default::default()
        }
    }

    /// Whether the project changed after `at`. Unknown `updated_at` counts
    /// as not updated.
    pub fn is_updated_after(&self, at: DateTime<Utc>) -> bool {
        self.updated_at.is_some_and(|updated_at| updated_at > at)
    }
}

impl SgModel for SgProject {
    const SCHEMA: EntitySchema = EntitySchema {
        entity_type: Some(EntityType::Project),
        fields: &[
            FieldSpec::scalar("id"),
            FieldSpec::scalar("name"),
            FieldSpec::scalar("archived"),
            FieldSpec::scalar("code"),
            FieldSpec::scalar("sg_description"),
            FieldSpec::scalar("sg_status"),
            FieldSpec::scalar("sg_type"),
            FieldSpec::scalar("start_date"),
            FieldSpec::scalar("end_date"),
            FieldSpec::scalar("updated_at"),
            FieldSpec::scalar("image"),
            FieldSpec::scalar("filmstrip_image"),
            FieldSpec::scalar("image_upload"),
            FieldSpec::scalar("duration"),
            FieldSpec::entity_list("users", EntityType::HumanUser),
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

/// A pipeline Step, e.g. `Model` / `MOD`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SgPipelineStep {
    pub id: i64,
    pub code: String,
    pub short_name: String,
    #[serde(skip)]
    pub extra_fields: Record,
}

impl SgModel for SgPipelineStep {
    const SCHEMA: EntitySchema = EntitySchema {
        entity_type: Some(EntityType::Step),
        fields: &[
            FieldSpec::scalar("id"),
            FieldSpec::scalar("code"),
            FieldSpec::scalar("short_name"),
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
