//! Static field schemas.
//!
//! Every model carries one [`EntitySchema`] listing the wire fields it
//! understands. The mapper uses it to split incoming records into typed and
//! extra fields, to validate date fields, and to reduce nested entities to
//! links when encoding writes. Field defaults are the model's `Default`
//! values (always the falsy value of the field's type); date fields have no
//! default and must be present.

use crate::types::EntityType;

/// Shape of a schema field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Plain JSON value (string, bool, number, timestamp, raw object).
    Scalar,
    /// `YYYY-MM-DD` string, validated on decode.
    Date,
    /// A single nested entity. `None` means the target type varies per value.
    Entity(Option<EntityType>),
    /// A list of nested entities.
    EntityList(Option<EntityType>),
}

impl FieldKind {
    pub fn is_nested(&self) -> bool {
        matches!(self, Self::Entity(_) | Self::EntityList(_))
    }
}

/// One entry of a schema table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub kind: FieldKind,
}

impl FieldSpec {
    pub const fn scalar(name: &'static str) -> Self {
        Self {
            name,
            kind: FieldKind::Scalar,
        }
    }

    pub const fn date(name: &'static str) -> Self {
        Self {
            name,
            kind: FieldKind::Date,
        }
    }

    pub const fn entity(name: &'static str, target: EntityType) -> Self {
        Self {
            name,
            kind: FieldKind::Entity(Some(target)),
        }
    }

    pub const fn entity_list(name: &'static str, target: EntityType) -> Self {
        Self {
            name,
            kind: FieldKind::EntityList(Some(target)),
        }
    }

    /// A link to an entity of any type (e.g. `Task.entity`).
    pub const fn link(name: &'static str) -> Self {
        Self {
            name,
            kind: FieldKind::Entity(None),
        }
    }

    /// A list of links to entities of any type (e.g. `Note.note_links`).
    pub const fn link_list(name: &'static str) -> Self {
        Self {
            name,
            kind: FieldKind::EntityList(None),
        }
    }
}

/// Schema of one entity model.
#[derive(Debug, Clone, Copy)]
pub struct EntitySchema {
    /// Fixed entity type, or `None` for models whose `type` is per instance.
    pub entity_type: Option<EntityType>,
    pub fields: &'static [FieldSpec],
}

impl EntitySchema {
    /// Look up a field by its (sanitized) name.
    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn field_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields.iter().map(|f| f.name)
    }

    /// Name used in error messages.
    pub fn type_name(&self) -> &'static str {
        self.entity_type.map(|t| t.as_str()).unwrap_or("entity")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCHEMA: EntitySchema = EntitySchema {
        entity_type: Some(EntityType::TimeLog),
        fields: &[
            FieldSpec::scalar("id"),
            FieldSpec::date("date"),
            FieldSpec::link("entity"),
            FieldSpec::entity_list("users", EntityType::HumanUser),
        ],
    };

    #[test]
    fn test_field_lookup() {
        assert_eq!(SCHEMA.field("date").unwrap().kind, FieldKind::Date);
        assert_eq!(SCHEMA.field("entity").unwrap().kind, FieldKind::Entity(None));
        assert!(SCHEMA.field("users").unwrap().kind.is_nested());
        assert!(SCHEMA.field("missing").is_none());
    }

    #[test]
    fn test_field_names() {
        let names: Vec<_> = SCHEMA.field_names().collect();
        assert_eq!(names, vec!["id", "date", "entity", "users"]);
        assert_eq!(SCHEMA.type_name(), "TimeLog");
    }
}
