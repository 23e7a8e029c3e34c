use crate::mapper::{nested, SgModel};
use crate::models::{SgFileLink, SgGenericEntity, SgHumanUser, SgPipelineStep, SgProject};
use crate::schema::{EntitySchema, FieldSpec};
use crate::types::{EntityType, Record};
use serde::{Deserialize, Serialize};

/// A ShotGrid Task.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SgTask {
    pub id: i64,
    pub name: String,
    pub short_name: String,
    /// Task name as shown in ShotGrid.
    pub content: String,
    #[serde(with = "nested::list")]
    pub notes: Vec<SgGenericEntity>,
    pub sg_status_list: String,
    /// Shot or Asset the task belongs to. Empty for tasks such as `Idle`.
    #[serde(with = "nested::one")]
    pub entity: Option<SgGenericEntity>,
    #[serde(with = "nested::one")]
    pub project: Option<SgProject>,
    #[serde(with = "nested::one")]
    pub step: Option<SgPipelineStep>,
    #[serde(with = "nested::list")]
    pub task_assignees: Vec<SgHumanUser>,
    #[serde(with = "nested::list")]
    pub task_reviewers: Vec<SgHumanUser>,
    pub start_date: String,
    pub due_date: String,
    pub duration: i64,
    pub est_in_mins: i64,
    #[serde(skip)]
    pub extra_fields: Record,
}

impl SgModel for SgTask {
    const SCHEMA: EntitySchema = EntitySchema {
        entity_type: Some(EntityType::Task),
        fields: &[
            FieldSpec::scalar("id"),
            FieldSpec::scalar("name"),
            FieldSpec::scalar("short_name"),
            FieldSpec::scalar("content"),
            FieldSpec::entity_list("notes", EntityType::Note),
            FieldSpec::scalar("sg_status_list"),
            FieldSpec::link("entity"),
            FieldSpec::entity("project", EntityType::Project),
            FieldSpec::entity("step", EntityType::Step),
            FieldSpec::entity_list("task_assignees", EntityType::HumanUser),
            FieldSpec::entity_list("task_reviewers", EntityType::HumanUser),
            FieldSpec::scalar("start_date"),
            FieldSpec::scalar("due_date"),
            FieldSpec::scalar("duration"),
            FieldSpec::scalar("est_in_mins"),
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

/// A ShotGrid Shot.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SgShot {
    pub id: i64,
    pub code: String,
    pub description: String,
    pub image: String,
    pub filmstrip_image: String,
    #[serde(with = "nested::one")]
    pub project: Option<SgGenericEntity>,
    #[serde(with = "nested::list")]
    pub notes: Vec<SgGenericEntity>,
    #[serde(with = "nested::list")]
    pub tasks: Vec<SgGenericEntity>,
    #[serde(with = "nested::list")]
    pub assets: Vec<SgGenericEntity>,
    pub sg_cut_in: i64,
    pub sg_cut_out: i64,
    pub sg_cut_duration: i64,
    pub sg_status_list: String,
    pub sg_shot_type: String,
    #[serde(skip)]
    pub extra_fields: Record,
}

impl SgModel for SgShot {
    const SCHEMA: EntitySchema = EntitySchema {
        entity_type: Some(EntityType::Shot),
        fields: &[
            FieldSpec::scalar("id"),
            FieldSpec::scalar("code"),
            FieldSpec::scalar("description"),
            FieldSpec::scalar("image"),
            FieldSpec::scalar("filmstrip_image"),
            FieldSpec::entity("project", EntityType::Project),
            FieldSpec::entity_list("notes", EntityType::Note),
            FieldSpec::entity_list("tasks", EntityType::Task),
            FieldSpec::entity_list("assets", EntityType::Asset),
            FieldSpec::scalar("sg_cut_in"),
            FieldSpec::scalar("sg_cut_out"),
            FieldSpec::scalar("sg_cut_duration"),
            FieldSpec::scalar("sg_status_list"),
            FieldSpec::scalar("sg_shot_type"),
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

/// A ShotGrid Asset.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SgAsset {
    pub id: i64,
    pub code: String,
    #[serde(with = "nested::one")]
    pub project: Option<SgGenericEntity>,
    #[serde(with = "nested::list")]
    pub tasks: Vec<SgTask>,
    #[serde(with = "nested::list")]
    pub notes: Vec<SgGenericEntity>,
    pub image: String,
    pub filmstrip_image: String,
    pub sg_asset_type: String,
    pub sg_status_list: String,
    #[serde(skip)]
    pub extra_fields: Record,
}

impl SgModel for SgAsset {
    const SCHEMA: EntitySchema = EntitySchema {
        entity_type: Some(EntityType::Asset),
        fields: &[
            FieldSpec::scalar("id"),
            FieldSpec::scalar("code"),
            FieldSpec::entity("project", EntityType::Project),
            FieldSpec::entity_list("tasks", EntityType::Task),
            FieldSpec::entity_list("notes", EntityType::Note),
            FieldSpec::scalar("image"),
            FieldSpec::scalar("filmstrip_image"),
            FieldSpec::scalar("sg_asset_type"),
            FieldSpec::scalar("sg_status_list"),
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

/// A ShotGrid Version (a reviewable iteration of a Shot or Asset).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SgVersion {
    pub id: i64,
    /// Version name.
    pub code: String,
    pub description: String,
    pub flagged: bool,
    pub image: String,
    pub filmstrip_image: String,
    #[serde(with = "nested::one")]
    pub entity: Option<SgGenericEntity>,
    #[serde(with = "nested::one")]
    pub project: Option<SgGenericEntity>,
    #[serde(with = "nested::one")]
    pub user: Option<SgGenericEntity>,
    #[serde(with = "nested::one")]
    pub sg_task: Option<SgGenericEntity>,
    pub sg_uploaded_movie: Option<SgFileLink>,
    pub sg_uploaded_movie_mp4: Option<SgFileLink>,
    pub sg_uploaded_movie_webm: Option<SgFileLink>,
    pub sg_path_to_frames: String,
    pub sg_path_to_movie: String,
    pub sg_status_list: String,
    pub uploaded_movie_duration: f64,
    pub sg_uploaded_movie_frame_rate: f64,
    #[serde(with = "nested::list")]
    pub notes: Vec<SgGenericEntity>,
    #[serde(skip)]
    pub extra_fields: Record,
}

impl SgModel for SgVersion {
    const SCHEMA: EntitySchema = EntitySchema {
        entity_type: Some(EntityType::Version),
        fields: &[
            FieldSpec::scalar("id"),
            FieldSpec::scalar("code"),
            FieldSpec::scalar("description"),
            FieldSpec::scalar("flagged"),
            FieldSpec::scalar("image"),
            FieldSpec::scalar("filmstrip_image"),
            FieldSpec::link("entity"),
            FieldSpec::entity("project", EntityType::Project),
            FieldSpec::entity("user", EntityType::HumanUser),
            FieldSpec::entity("sg_task", EntityType::Task),
            FieldSpec::scalar("sg_uploaded_movie"),
            FieldSpec::scalar("sg_uploaded_movie_mp4"),
            FieldSpec::scalar("sg_uploaded_movie_webm"),
            FieldSpec::scalar("sg_path_to_frames"),
            FieldSpec::scalar("sg_path_to_movie"),
            FieldSpec::scalar("sg_status_list"),
            FieldSpec::scalar("uploaded_movie_duration"),
            FieldSpec::scalar("sg_uploaded_movie_frame_rate"),
            FieldSpec::entity_list("notes", EntityType::Note),
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

/// A ShotGrid Playlist.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SgPlaylist {
    pub id: i64,
    /// Playlist name.
    pub code: String,
    pub description: String,
    pub locked: bool,
    #[serde(with = "nested::one")]
    pub project: Option<SgGenericEntity>,
    #[serde(with = "nested::list")]
    pub notes: Vec<SgGenericEntity>,
    #[serde(with = "nested::list")]
    pub versions: Vec<SgVersion>,
    #[serde(skip)]
    pub extra_fields: Record,
}

impl SgModel for SgPlaylist {
    const SCHEMA: EntitySchema = EntitySchema {
        entity_type: Some(EntityType::Playlist),
        fields: &[
            FieldSpec::scalar("id"),
            FieldSpec::scalar("code"),
            FieldSpec::scalar("description"),
            FieldSpec::scalar("locked"),
            FieldSpec::entity("project", EntityType::Project),
            FieldSpec::entity_list("notes", EntityType::Note),
            FieldSpec::entity_list("versions", EntityType::Version),
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
