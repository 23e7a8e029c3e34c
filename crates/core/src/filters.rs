//! Query filters, ordering and batch requests.

use crate::mapper::{encode, link, SgModel};
use crate::types::{EntityType, Record};
use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;

/// Filter relation understood by the ShotGrid query engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterOperator {
    Is,
    IsNot,
    LessThan,
    GreaterThan,
    Contains,
    NotContains,
    StartsWith,
    EndsWith,
    Between,
    NotBetween,
    In,
    NotIn,
    InLast,
    InNext,
    TypeIs,
    TypeIsNot,
    InCalendarDay,
    InCalendarWeek,
    InCalendarMonth,
    InCalendarYear,
    NameContains,
    NameIs,
}

impl FilterOperator {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Is => "is",
            Self::IsNot => "is_not",
            Self::LessThan => "less_than",
            Self::GreaterThan => "greater_than",
            Self::Contains => "contains",
            Self::NotContains => "not_contains",
            Self::StartsWith => "starts_with",
            Self::EndsWith => "ends_with",
            Self::Between => "between",
            Self::NotBetween => "not_between",
            Self::In => "in",
            Self::NotIn => "not_in",
            Self::InLast => "in_last",
            Self::InNext => "in_next",
            Self::TypeIs => "type_is",
            Self::TypeIsNot => "type_is_not",
            Self::InCalendarDay => "in_calendar_day",
            Self::InCalendarWeek => "in_calendar_week",
            Self::InCalendarMonth => "in_calendar_month",
            Self::InCalendarYear => "in_calendar_year",
            Self::NameContains => "name_contains",
            Self::NameIs => "name_is",
        }
    }
}

/// A `[field, operator, value]` filter triple.
#[derive(Debug, Clone, PartialEq)]
pub struct Filter {
    pub field: String,
    pub operator: FilterOperator,
    pub value: Value,
}

impl Filter {
    pub fn new(field: impl Into<String>, operator: FilterOperator, value: impl Into<Value>) -> Self {
        Self {
            field: field.into(),
            operator,
            value: value.into(),
        }
    }

    pub fn is(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::new(field, FilterOperator::Is, value)
    }

    /// Match a link field against one entity.
    pub fn is_entity(field: impl Into<String>, entity_type: EntityType, id: i64) -> Self {
        Self::new(field, FilterOperator::Is, link(entity_type.as_str(), id))
    }

    pub fn id_in(ids: &[i64]) -> Self {
        Self::new("id", FilterOperator::In, ids.to_vec())
    }

    /// Inclusive range, e.g. two `YYYY-MM-DD` dates.
    pub fn between(field: impl Into<String>, low: impl Into<Value>, high: impl Into<Value>) -> Self {
        Self::new(
            field,
            FilterOperator::Between,
            Value::Array(vec![low.into(), high.into()]),
        )
    }

    /// Values as the query engine expects them: list-valued filters pass
    /// their list through, everything else is wrapped in a one-element list.
    pub fn values(&self) -> Vec<Value> {
        match &self.value {
            Value::Array(items) => items.clone(),
            other => vec![other.clone()],
        }
    }
}

impl Serialize for Filter {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        (&self.field, self.operator, &self.value).serialize(serializer)
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Asc,
    Desc,
}

/// Sort clause of a query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub field_name: String,
    pub direction: Direction,
}

impl Order {
    pub fn asc(field_name: impl Into<String>) -> Self {
        Self {
            field_name: field_name.into(),
            direction: Direction::Asc,
        }
    }

    pub fn desc(field_name: impl Into<String>) -> Self {
        Self {
            field_name: field_name.into(),
            direction: Direction::Desc,
        }
    }
}

/// One item of a bulk `batch` call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "request_type", rename_all = "snake_case")]
pub enum BatchRequest {
    Create {
        entity_type: String,
        data: Record,
    },
    Update {
        entity_type: String,
        entity_id: i64,
        data: Record,
    },
    Delete {
        entity_type: String,
        entity_id: i64,
    },
}

impl BatchRequest {
    /// Create request carrying the entity's write payload.
    pub fn create<E: SgModel>(entity: &E) -> Self {
        Self::Create {
            entity_type: entity.entity_type().to_string(),
            data: encode(entity, false),
        }
    }

    /// Update request for a persisted entity.
    pub fn update<E: SgModel>(entity: &E) -> Self {
        Self::Update {
            entity_type: entity.entity_type().to_string(),
            entity_id: entity.id(),
            data: encode(entity, false),
        }
    }

    pub fn update_fields(entity_type: EntityType, entity_id: i64, data: Record) -> Self {
        Self::Update {
            entity_type: entity_type.as_str().to_string(),
            entity_id,
            data,
        }
    }

    pub fn delete(entity_type: EntityType, entity_id: i64) -> Self {
        Self::Delete {
            entity_type: entity_type.as_str().to_string(),
            entity_id,
        }
    }
}
