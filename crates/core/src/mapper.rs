//! Conversion between wire records and typed models.

use crate::error::{MapperError, MapperResult};
use crate::schema::{EntitySchema, FieldKind};
use crate::types::{EntityType, Record};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use std::borrow::Cow;
use tracing::{error, trace};

/// A typed ShotGrid entity driven by a static schema.
///
/// Implementors derive `Serialize`/`Deserialize` for their typed fields,
/// mark the extra-fields bag `#[serde(skip)]`, and route nested entity
/// fields through [`nested`].
pub trait SgModel: Serialize + DeserializeOwned {
    const SCHEMA: EntitySchema;

    fn id(&self) -> i64;

    /// Wire fields that are not part of the schema, keyed as received.
    fn extra_fields(&self) -> &Record;

    fn extra_fields_mut(&mut self) -> &mut Record;

    /// Entity type name as sent on the wire.
    fn entity_type(&self) -> &str {
        Self::SCHEMA.type_name()
    }

    /// Decode a record into this model.
    fn from_record(record: &Record) -> MapperResult<Self> {
        decode(record)
    }

    /// Sparse write payload, see [`encode`].
    fn to_record(&self, include_extra_fields: bool) -> Record {
        encode(self, include_extra_fields)
    }

    /// Sparse payload that keeps `id`/`type`, see [`encode_full`].
    fn to_full_record(&self, include_extra_fields: bool) -> Record {
        encode_full(self, include_extra_fields)
    }

    /// The `{"id", "type"}` reference to this entity.
    fn to_link(&self) -> Value {
        link(self.entity_type(), self.id())
    }
}

/// Build an entity reference value.
pub fn link(entity_type: &str, id: i64) -> Value {
    serde_json::json!({ "id": id, "type": entity_type })
}

/// Rewrite a deep-link field name (`sg_sequence.Sequence.code`) into an
/// identifier-safe one (`sg_sequence__Sequence__code`).
pub fn sanitize_key(key: &str) -> Cow<'_, str> {
    if key.contains('.') {
        Cow::Owned(key.replace('.', "__"))
    } else {
        Cow::Borrowed(key)
    }
}

/// Whether a value is dropped by sparse encoding.
pub fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(a) => a.is_empty(),
        Value::Object(o) => o.is_empty(),
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Decode a raw JSON value, which must be an object.
pub fn decode_value<E: SgModel>(value: &Value) -> MapperResult<E> {
    match value {
        Value::Object(record) => decode(record),
        other => Err(MapperError::NotAnObject {
            entity_type: E::SCHEMA.type_name(),
            found: value_kind(other),
        }),
    }
}

/// Decode a record into a model.
///
/// Keys are sanitized before schema lookup. Keys the schema does not know go
/// to the extra-fields bag under their original name. `null` values take the
/// field default. Date fields are validated before anything else is built.
pub fn decode<E: SgModel>(record: &Record) -> MapperResult<E> {
    let schema = E::SCHEMA;
    let mut typed = Record::new();
    let mut extra = Record::new();

    for (key, value) in record {
        let name = sanitize_key(key);
        match schema.field(&name) {
            Some(spec) => {
                if !value.is_null() {
                    typed.insert(spec.name.to_string(), value.clone());
                }
            }
            // The model already knows its own type.
            None if key == "type" && schema.entity_type.is_some() => {}
            None => {
                trace!(entity_type = schema.type_name(), field = %key, "Keeping extra field");
                extra.insert(key.clone(), value.clone());
            }
        }
    }

    validate_dates(&schema, &typed)?;

    let mut entity: E =
        serde_json::from_value(Value::Object(typed)).map_err(|source| MapperError::Decode {
            entity_type: schema.type_name(),
            source,
        })?;
    *entity.extra_fields_mut() = extra;
    Ok(entity)
}

fn validate_dates(schema: &EntitySchema, typed: &Record) -> MapperResult<()> {
    for spec in schema.fields.iter().filter(|f| f.kind == FieldKind::Date) {
        match typed.get(spec.name) {
            Some(Value::String(s)) if crate::dates::validate_sg_date_format(s) => {}
            Some(Value::String(s)) => {
                return Err(MapperError::InvalidDateFormat { value: s.clone() });
            }
            Some(other) => {
                return Err(MapperError::InvalidDateFormat {
                    value: other.to_string(),
                });
            }
            None => {
                return Err(MapperError::InvalidDateFormat {
                    value: String::new(),
                });
            }
        }
    }
    Ok(())
}

fn typed_record<E: SgModel>(entity: &E) -> Record {
    match serde_json::to_value(entity) {
        Ok(Value::Object(record)) => record,
        Ok(other) => {
            error!(
                entity_type = E::SCHEMA.type_name(),
                found = value_kind(&other),
                "Model did not serialize to an object"
            );
            Record::new()
        }
        Err(e) => {
            error!(entity_type = E::SCHEMA.type_name(), error = %e, "Failed to serialize model");
            Record::new()
        }
    }
}

fn merge_extra_fields<E: SgModel>(record: &mut Record, entity: &E) {
    for (key, value) in entity.extra_fields() {
        record.insert(key.clone(), value.clone());
    }
}

/// Encode a model keeping `id` and `type`.
///
/// Falsy values are dropped and nested entities are emitted through their own
/// `encode_full`. Meant for echoing and debugging, never for writes.
pub fn encode_full<E: SgModel>(entity: &E, include_extra_fields: bool) -> Record {
    let mut record = typed_record(entity);
    if let Some(entity_type) = E::SCHEMA.entity_type {
        record.insert("type".to_string(), Value::from(entity_type.as_str()));
    }
    record.retain(|key, value| !is_falsy(value) || is_present_link::<E>(key, value));

    if include_extra_fields {
        merge_extra_fields(&mut record, entity);
    }
    record
}

/// A set single-entity field whose nested value encoded to `{}`.
///
/// It stays in the full encoding so `Some(default)` reads back as `Some`.
fn is_present_link<E: SgModel>(key: &str, value: &Value) -> bool {
    value.is_object()
        && E::SCHEMA
            .field(key)
            .is_some_and(|spec| matches!(spec.kind, FieldKind::Entity(_)))
}

/// Encode a model as a write payload.
///
/// `id` and `type` are never included and falsy values are dropped, so
/// explicitly setting a field to `false`, `0` or `""` does not transmit it.
/// Nested entities are reduced to `{"id", "type"}` links.
pub fn encode<E: SgModel>(entity: &E, include_extra_fields: bool) -> Record {
    let mut record = encode_full(entity, false);
    record.remove("id");
    record.remove("type");

    let mut unlinked = Vec::new();
    for spec in E::SCHEMA.fields {
        let Some(value) = record.get_mut(spec.name) else {
            continue;
        };
        match spec.kind {
            FieldKind::Entity(target) => {
                *value = reduce_to_link(value, target);
                // A link without an id cannot be written.
                if value.is_object() && !value.get("id").is_some_and(|id| !is_falsy(id)) {
                    unlinked.push(spec.name);
                }
            }
            FieldKind::EntityList(target) => {
                if let Value::Array(items) = value {
                    for item in items.iter_mut() {
                        *item = reduce_to_link(item, target);
                    }
                }
            }
            FieldKind::Scalar | FieldKind::Date => {}
        }
    }
    for name in unlinked {
        record.remove(name);
    }

    if include_extra_fields {
        merge_extra_fields(&mut record, entity);
    }
    record
}

fn reduce_to_link(value: &Value, target: Option<EntityType>) -> Value {
    let Value::Object(nested) = value else {
        return value.clone();
    };
    let mut reference = Record::new();
    if let Some(id) = nested.get("id") {
        reference.insert("id".to_string(), id.clone());
    }
    match (nested.get("type"), target) {
        (Some(entity_type), _) => {
            reference.insert("type".to_string(), entity_type.clone());
        }
        (None, Some(target)) => {
            reference.insert("type".to_string(), Value::from(target.as_str()));
        }
        (None, None) => {}
    }
    Value::Object(reference)
}

/// Serde adapters for nested entity fields.
///
/// Both adapters decode through [`decode_value`] so nested entities keep
/// their own extra fields, and serialize through [`encode_full`].
pub mod nested {
    pub mod one {
        use crate::mapper::{decode_value, encode_full, SgModel};
        use serde::{de::Error, Deserialize, Deserializer, Serialize, Serializer};
        use serde_json::Value;

        pub fn serialize<S, E>(value: &Option<E>, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
            E: SgModel,
        {
            match value {
                Some(entity) => encode_full(entity, false).serialize(serializer),
                None => serializer.serialize_none(),
            }
        }

        pub fn deserialize<'de, D, E>(deserializer: D) -> Result<Option<E>, D::Error>
        where
            D: Deserializer<'de>,
            E: SgModel,
        {
            match Value::deserialize(deserializer)? {
                Value::Null => Ok(None),
                value => decode_value(&value).map(Some).map_err(D::Error::custom),
            }
        }
    }

    pub mod list {
        use crate::mapper::{decode_value, encode_full, SgModel};
        use serde::{de::Error, ser::SerializeSeq, Deserialize, Deserializer, Serializer};
        use serde_json::Value;

        #[allow(clippy::ptr_arg)]
        pub fn serialize<S, E>(value: &Vec<E>, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
            E: SgModel,
        {
            let mut seq = serializer.serialize_seq(Some(value.len()))?;
            for entity in value {
                seq.serialize_element(&encode_full(entity, false))?;
            }
            seq.end()
        }

        /// A list decodes element-wise, a lone object decodes once.
        pub fn deserialize<'de, D, E>(deserializer: D) -> Result<Vec<E>, D::Error>
        where
            D: Deserializer<'de>,
            E: SgModel,
        {
            match Value::deserialize(deserializer)? {
                Value::Null => Ok(Vec::new()),
                Value::Array(items) => items
                    .iter()
                    .map(|item| decode_value(item).map_err(D::Error::custom))
                    .collect(),
                value => decode_value(&value)
                    .map(|entity| vec![entity])
                    .map_err(D::Error::custom),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_sanitize_key() {
        assert_eq!(sanitize_key("sg_status_list"), "sg_status_list");
        assert_eq!(
            sanitize_key("entity.Shot.sg_sequence"),
            "entity__Shot__sg_sequence"
        );
        assert!(matches!(sanitize_key("code"), Cow::Borrowed(_)));
    }

    #[test]
    fn test_is_falsy() {
        for value in [
            json!(null),
            json!(false),
            json!(0),
            json!(0.0),
            json!(""),
            json!([]),
            json!({}),
        ] {
            assert!(is_falsy(&value), "{value} should be falsy");
        }
        for value in [json!(true), json!(-1), json!(0.5), json!("x"), json!([0]), json!({"a": 0})] {
            assert!(!is_falsy(&value), "{value} should be truthy");
        }
    }

    #[test]
    fn test_link() {
        assert_eq!(link("HumanUser", 970), json!({"id": 970, "type": "HumanUser"}));
    }

    #[test]
    fn test_reduce_to_link() {
        let full = json!({"id": 3, "type": "Project", "name": "Demo", "code": "DMO"});
        assert_eq!(reduce_to_link(&full, None), json!({"id": 3, "type": "Project"}));

        let untyped = json!({"id": 5, "login": "kepci"});
        assert_eq!(
            reduce_to_link(&untyped, Some(EntityType::HumanUser)),
            json!({"id": 5, "type": "HumanUser"})
        );

        assert_eq!(reduce_to_link(&json!(7), None), json!(7));
    }
}
