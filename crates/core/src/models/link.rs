use crate::mapper::SgModel;
use crate::schema::{EntitySchema, FieldSpec};
use crate::types::{EntityType, Record};
use serde::{Deserialize, Serialize};

/// A reference to an entity of any type, as returned inside link fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SgGenericEntity {
    pub id: i64,
    pub name: String,
    #[serde(rename = "type")]
    pub entity_type: String,
    #[serde(skip)]
    pub extra_fields: Record,
}

impl SgGenericEntity {
    pub fn new(entity_type: EntityType, id: i64) -> Self {
        Self::with_type_name(entity_type.as_str(), id)
    }

    /// Reference a custom entity type by name (e.g. `CustomEntity01`).
    pub fn with_type_name(entity_type: impl Into<String>, id: i64) -> Self {
        Self {
            id,
            entity_type: entity_type.into(),
            ..Default::default()
        }
    }
}

impl SgModel for SgGenericEntity {
    const SCHEMA: EntitySchema = EntitySchema {
        entity_type: None,
        fields: &[
            FieldSpec::scalar("id"),
            FieldSpec::scalar("name"),
            FieldSpec::scalar("type"),
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

    fn entity_type(&self) -> &str {
        &self.entity_type
    }
}

/// An uploaded or linked file, e.g. `Version.sg_uploaded_movie`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SgFileLink {
    pub url: String,
    pub name: String,
    pub content_type: String,
    pub link_type: String,
    #[serde(rename = "type")]
    pub entity_type: String,
    pub id: i64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mapper::{decode, encode, encode_full};
    use serde_json::json;

    #[test]
    fn test_generic_keeps_its_type() {
        let record = json!({"id": 152698, "type": "Task", "name": "Animation"});
        let entity: SgGenericEntity = decode(record.as_object().unwrap()).unwrap();

        assert_eq!(entity.id, 152698);
        assert_eq!(entity.entity_type, "Task");
        assert_eq!(SgModel::entity_type(&entity), "Task");
        assert!(entity.extra_fields.is_empty());
        assert_eq!(entity.to_link(), json!({"id": 152698, "type": "Task"}));
    }

    #[test]
    fn test_generic_encode_drops_identity() {
        let entity = SgGenericEntity {
            name: "Kepci".to_string(),
            ..SgGenericEntity::new(EntityType::HumanUser, 970)
        };

        let full = encode_full(&entity, false);
        assert_eq!(full.get("type"), Some(&json!("HumanUser")));
        assert_eq!(full.get("id"), Some(&json!(970)));

        let write = encode(&entity, false);
        assert_eq!(write.len(), 1);
        assert_eq!(write.get("name"), Some(&json!("Kepci")));
    }

    #[test]
    fn test_custom_entity_reference() {
        let entity = SgGenericEntity::with_type_name("CustomEntity01", 4);
        assert_eq!(entity.to_link(), json!({"id": 4, "type": "CustomEntity01"}));
    }
}
