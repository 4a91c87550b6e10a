use crate::utils::error::{EtlError, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// One flat webinar object. Field order follows the source document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WebinarRecord {
    pub data: Map<String, Value>,
}

impl WebinarRecord {
    pub fn new(data: Map<String, Value>) -> Self {
        Self { data }
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.data.keys().map(String::as_str)
    }
}

/// Top-level input document.
///
/// `lastUpdated` and `count` are written by the scraper alongside the list;
/// they are informational only.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebinarDocument {
    pub webinars: Option<Value>,
    pub last_updated: Option<Value>,
    pub count: Option<Value>,
}

impl WebinarDocument {
    /// Parses raw input. The top level must be a JSON object.
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        let value: Value = serde_json::from_slice(bytes)?;
        if !value.is_object() {
            return Err(EtlError::MalformedDocument {
                message: format!("expected a JSON object, found {}", value_kind(&value)),
            });
        }
        Ok(serde_json::from_value(value)?)
    }

    pub fn declared_count(&self) -> Option<u64> {
        self.count.as_ref().and_then(Value::as_u64)
    }

    pub fn last_updated(&self) -> Option<&str> {
        self.last_updated.as_ref().and_then(Value::as_str)
    }

    /// An absent, `null` or otherwise blank list is an empty collection.
    pub fn into_records(self) -> Result<Vec<WebinarRecord>> {
        let items = match self.webinars {
            None => return Ok(Vec::new()),
            Some(Value::Array(items)) => items,
            Some(other) if is_blank(&other) => {
                tracing::debug!("Treating {} \"webinars\" as empty", value_kind(&other));
                return Ok(Vec::new());
            }
            Some(other) => {
                return Err(EtlError::MalformedDocument {
                    message: format!(
                        "\"webinars\" must be an array, found {}",
                        value_kind(&other)
                    ),
                })
            }
        };

        items
            .into_iter()
            .enumerate()
            .map(|(index, item)| match item {
                Value::Object(data) => Ok(WebinarRecord::new(data)),
                other => Err(EtlError::MalformedDocument {
                    message: format!(
                        "webinar at index {} must be an object, found {}",
                        index,
                        value_kind(&other)
                    ),
                }),
            })
            .collect()
    }
}

/// `false`, zero, `""` and `{}` carry no webinars.
fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
    }
}

pub fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Column order of the output, taken from the first record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnSchema {
    columns: Vec<String>,
}

impl ColumnSchema {
    pub fn from_record(record: &WebinarRecord) -> Result<Self> {
        let columns: Vec<String> = record.field_names().map(str::to_string).collect();
        if columns.is_empty() {
            return Err(EtlError::ProcessingError {
                message: "the first webinar has no fields to use as CSV columns".to_string(),
            });
        }
        Ok(Self { columns })
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.columns.iter().any(|column| column == name)
    }
}

/// How records whose keys diverge from the header are handled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum SchemaPolicy {
    /// Missing fields are left empty, unexpected fields are an error.
    #[default]
    Fill,
    /// Missing and unexpected fields are both errors.
    Strict,
    /// Missing fields are left empty, unexpected fields are dropped.
    Lenient,
}

impl fmt::Display for SchemaPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SchemaPolicy::Fill => "fill",
            SchemaPolicy::Strict => "strict",
            SchemaPolicy::Lenient => "lenient",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone)]
pub struct CsvOutput {
    pub schema: ColumnSchema,
    pub rows: usize,
    pub content: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Converted { count: usize, output_path: String },
    NoWebinars,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Converted { count, output_path } => write!(
                f,
                "Successfully converted {} webinars to {}",
                count, output_path
            ),
            Outcome::NoWebinars => f.write_str("No webinars found in JSON."),
        }
    }
}
