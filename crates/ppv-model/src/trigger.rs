//! Typed trigger predicate tree.
//!
//! A trigger gates whether a rule's validator runs. On disk it is a mapping
//! from field key to a list of acceptable values, with the reserved `"or"`
//! key introducing a disjunction of sub-triggers. That mapping is parsed
//! once at load time into this tree so the `"GT<number>"` sentinel is a
//! single well-typed case instead of string sniffing at evaluation time.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value, json};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TriggerError {
    #[error("trigger must be a mapping, got {0}")]
    NotAMapping(String),
    #[error("trigger mixes \"or\" with literal field keys: {0}")]
    MixedDisjunction(String),
    #[error("trigger \"or\" must hold a list of sub-triggers")]
    InvalidDisjunction,
    #[error("unsupported expected value for trigger field {field}: {value}")]
    InvalidExpected { field: String, value: String },
}

/// One expected entry for a trigger field.
#[derive(Debug, Clone, PartialEq)]
pub enum Expected {
    /// Case/whitespace-insensitive string comparison.
    Literal(String),
    /// `"GT<number>"` sentinel: the actual value is percent-coerced and must
    /// exceed this bound.
    GreaterThan(f64),
}

impl Expected {
    fn from_value(field: &str, value: &Value) -> Result<Self, TriggerError> {
        match value {
            Value::String(text) => {
                if let Some(bound) = text.strip_prefix("GT")
                    && let Ok(number) = bound.trim().parse::<f64>()
                {
                    return Ok(Self::GreaterThan(number));
                }
                Ok(Self::Literal(text.clone()))
            }
            Value::Number(number) => Ok(Self::Literal(number.to_string())),
            Value::Bool(flag) => Ok(Self::Literal(flag.to_string())),
            other => Err(TriggerError::InvalidExpected {
                field: field.to_string(),
                value: other.to_string(),
            }),
        }
    }

    fn to_value(&self) -> Value {
        match self {
            Self::Literal(text) => Value::String(text.clone()),
            Self::GreaterThan(bound) => Value::String(format!("GT{bound}")),
        }
    }
}

/// Conjunction member: the named field must match at least one expected entry.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldClause {
    pub field: String,
    pub expected: Vec<Expected>,
}

/// Boolean predicate over context fields.
#[derive(Debug, Clone, PartialEq)]
pub enum Trigger {
    /// All clauses must match. An empty conjunction matches unconditionally.
    All(Vec<FieldClause>),
    /// At least one sub-trigger must fully match.
    Any(Vec<Trigger>),
}

impl Trigger {
    /// A trigger that matches every context (rule always applicable).
    pub fn always() -> Self {
        Self::All(Vec::new())
    }

    /// Parse the on-disk mapping form.
    ///
    /// A mapping containing the `"or"` key is a pure disjunction; mixing
    /// `"or"` with literal field keys is rejected rather than silently
    /// depending on key order.
    pub fn from_value(value: &Value) -> Result<Self, TriggerError> {
        let Value::Object(mapping) = value else {
            return Err(TriggerError::NotAMapping(value.to_string()));
        };
        if let Some(subs) = mapping.get("or") {
            if mapping.len() > 1 {
                return Err(TriggerError::MixedDisjunction(value.to_string()));
            }
            let Value::Array(subs) = subs else {
                return Err(TriggerError::InvalidDisjunction);
            };
            let parsed = subs
                .iter()
                .map(Self::from_value)
                .collect::<Result<Vec<_>, _>>()?;
            return Ok(Self::Any(parsed));
        }

        let mut clauses = Vec::with_capacity(mapping.len());
        for (field, entry) in mapping {
            // A bare scalar is accepted as a single-entry list.
            let entries: Vec<&Value> = match entry {
                Value::Array(list) => list.iter().collect(),
                other => vec![other],
            };
            let expected = entries
                .into_iter()
                .map(|v| Expected::from_value(field, v))
                .collect::<Result<Vec<_>, _>>()?;
            clauses.push(FieldClause {
                field: field.clone(),
                expected,
            });
        }
        Ok(Self::All(clauses))
    }

    /// Render back to the on-disk mapping form.
    pub fn to_value(&self) -> Value {
        match self {
            Self::All(clauses) => {
                let mut mapping = Map::new();
                for clause in clauses {
                    let entries: Vec<Value> =
                        clause.expected.iter().map(Expected::to_value).collect();
                    mapping.insert(clause.field.clone(), Value::Array(entries));
                }
                Value::Object(mapping)
            }
            Self::Any(subs) => {
                let entries: Vec<Value> = subs.iter().map(Self::to_value).collect();
                json!({ "or": entries })
            }
        }
    }
}

impl Serialize for Trigger {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_value().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Trigger {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Self::from_value(&value).map_err(D::Error::custom)
    }
}
