use crate::mapper::{nested, SgModel};
use crate::models::{SgFileLink, SgGenericEntity, SgProject};
use crate::schema::{EntitySchema, FieldSpec};
use crate::types::{EntityType, Record};
use serde::{Deserialize, Serialize};

/// A ShotGrid Note.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SgNote {
    pub id: i64,
    pub subject: String,
    pub content: String,
    pub sg_status_list: String,
    #[serde(with = "nested::one")]
    pub project: Option<SgProject>,
    /// Author.
    #[serde(with = "nested::one")]
    pub user: Option<SgGenericEntity>,
    #[serde(with = "nested::list")]
    pub addressings_to: Vec<SgGenericEntity>,
    #[serde(with = "nested::list")]
    pub addressings_cc: Vec<SgGenericEntity>,
    /// Entities the note is attached to (Shot, Version, ...).
    #[serde(with = "nested::list")]
    pub note_links: Vec<SgGenericEntity>,
    #[serde(with = "nested::list")]
    pub attachments: Vec<SgGenericEntity>,
    #[serde(skip)]
    pub extra_fields: Record,
}

impl SgModel for SgNote {
    const SCHEMA: EntitySchema = EntitySchema {
        entity_type: Some(EntityType::Note),
        fields: &[
            FieldSpec::scalar("id"),
            FieldSpec::scalar("subject"),
            FieldSpec::scalar("content"),
            FieldSpec::scalar("sg_status_list"),
            FieldSpec::entity("project", EntityType::Project),
            FieldSpec::link("user"),
            FieldSpec::link_list("addressings_to"),
            FieldSpec::link_list("addressings_cc"),
            FieldSpec::link_list("note_links"),
            FieldSpec::entity_list("attachments", EntityType::Attachment),
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

/// A Reply in a note thread.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SgReply {
    pub id: i64,
    pub content: String,
    #[serde(with = "nested::one")]
    pub user: Option<SgGenericEntity>,
    /// The Note being replied to.
    #[serde(with = "nested::one")]
    pub entity: Option<SgGenericEntity>,
    #[serde(skip)]
    pub extra_fields: Record,
}

impl SgModel for SgReply {
    const SCHEMA: EntitySchema = EntitySchema {
        entity_type: Some(EntityType::Reply),
        fields: &[
            FieldSpec::scalar("id"),
            FieldSpec::scalar("content"),
            FieldSpec::link("user"),
            FieldSpec::entity("entity", EntityType::Note),
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

/// A file Attachment.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SgAttachment {
    pub id: i64,
    pub display_name: String,
    pub description: String,
    pub filename: String,
    pub file_extension: String,
    /// Bytes.
    pub file_size: i64,
    pub this_file: Option<SgFileLink>,
    pub image: String,
    pub processing_status: String,
    pub original_fname: String,
    pub sg_status_list: String,
    #[serde(with = "nested::one")]
    pub created_by: Option<SgGenericEntity>,
    #[serde(skip)]
    pub extra_fields: Record,
}

impl SgModel for SgAttachment {
    const SCHEMA: EntitySchema = EntitySchema {
        entity_type: Some(EntityType::Attachment),
        fields: &[
            FieldSpec::scalar("id"),
            FieldSpec::scalar("display_name"),
            FieldSpec::scalar("description"),
            FieldSpec::scalar("filename"),
            FieldSpec::scalar("file_extension"),
            FieldSpec::scalar("file_size"),
            FieldSpec::scalar("this_file"),
            FieldSpec::scalar("image"),
            FieldSpec::scalar("processing_status"),
            FieldSpec::scalar("original_fname"),
            FieldSpec::scalar("sg_status_list"),
            FieldSpec::link("created_by"),
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
    use serde_json::json;

    #[test]
    fn test_decode_note_links() {
        let record = json!({
            "id": 31,
            "type": "Note",
            "subject": "Feedback",
            "content": "Push the camera in",
            "note_links": [
                {"id": 12, "type": "Shot", "name": "SH010"},
                {"id": 3, "type": "Version", "name": "SH010_anim_v001"},
            ],
            "project": {"id": 410, "type": "Project", "name": "Demo"},
        });
        let note: SgNote = decode(record.as_object().unwrap()).unwrap();

        assert_eq!(note.note_links.len(), 2);
        assert_eq!(note.note_links[1].entity_type, "Version");
        assert_eq!(note.project.as_ref().unwrap().id, 410);
    }

    #[test]
    fn test_note_payload() {
        let note = SgNote {
            subject: "Feedback".to_string(),
            content: "Push the camera in".to_string(),
            note_links: vec![SgGenericEntity::new(EntityType::Shot, 12)],
            project: Some(SgProject::new(410, "Demo")),
            ..Default::default()
        };

        let payload = encode(&note, false);
        assert_eq!(payload.get("note_links"), Some(&json!([{"id": 12, "type": "Shot"}])));
        assert_eq!(payload.get("project"), Some(&json!({"id": 410, "type": "Project"})));
    }

    #[test]
    fn test_decode_attachment() {
        let record = json!({
            "id": 100,
            "type": "Attachment",
            "filename": "ref.png",
            "file_size": 2048,
            "this_file": {"url": "https://example/ref.png", "name": "ref.png", "link_type": "upload"},
            "created_by": {"id": 970, "type": "HumanUser", "name": "Kepci"},
        });
        let attachment: SgAttachment = decode(record.as_object().unwrap()).unwrap();

        assert_eq!(attachment.file_size, 2048);
        assert_eq!(attachment.this_file.as_ref().unwrap().name, "ref.png");
        assert_eq!(attachment.created_by.as_ref().unwrap().id, 970);
    }

    #[test]
    fn test_reply_links_note() {
        let reply = SgReply {
            content: "Done".to_string(),
            entity: Some(SgGenericEntity::new(EntityType::Note, 31)),
            ..Default::default()
        };
        let payload = encode(&reply, false);
        assert_eq!(payload.get("entity"), Some(&json!({"id": 31, "type": "Note"})));
    }
}
