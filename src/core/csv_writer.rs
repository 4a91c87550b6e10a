use crate::domain::model::{ColumnSchema, SchemaPolicy, WebinarRecord};
use crate::utils::error::{EtlError, Result};
use csv::WriterBuilder;
use serde_json::Value;

/// Text form of a JSON value in a CSV cell. Nested values stay as compact JSON.
pub fn render_value(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::Array(_) | Value::Object(_) => value.to_string(),
    }
}

/// Lays out one record in header order, applying `policy` to divergent keys.
pub fn project_row(
    schema: &ColumnSchema,
    record: &WebinarRecord,
    index: usize,
    policy: SchemaPolicy,
) -> Result<Vec<String>> {
    let unexpected: Vec<&str> = record
        .field_names()
        .filter(|name| !schema.contains(name))
        .collect();

    if !unexpected.is_empty() && policy != SchemaPolicy::Lenient {
        return Err(EtlError::SchemaMismatch {
            index,
            message: format!("unexpected fields: {}", unexpected.join(", ")),
        });
    }

    let missing: Vec<&str> = schema
        .columns()
        .iter()
        .map(String::as_str)
        .filter(|column| !record.data.contains_key(*column))
        .collect();

    if !missing.is_empty() {
        if policy == SchemaPolicy::Strict {
            return Err(EtlError::SchemaMismatch {
                index,
                message: format!("missing fields: {}", missing.join(", ")),
            });
        }
        tracing::debug!(
            "Webinar at index {} has no value for: {}",
            index,
            missing.join(", ")
        );
    }

    if !unexpected.is_empty() {
        tracing::debug!(
            "Dropping fields of webinar at index {}: {}",
            index,
            unexpected.join(", ")
        );
    }

    Ok(schema
        .columns()
        .iter()
        .map(|column| record.data.get(column).map(render_value).unwrap_or_default())
        .collect())
}

/// Renders the header and every record into CSV bytes.
///
/// Nothing is returned unless every row projects cleanly, so a schema error
/// never produces partial output.
pub fn write_csv(
    records: &[WebinarRecord],
    schema: &ColumnSchema,
    policy: SchemaPolicy,
) -> Result<Vec<u8>> {
    let mut writer = WriterBuilder::new().from_writer(Vec::new());
    writer.write_record(schema.columns())?;

    for (index, record) in records.iter().enumerate() {
        let row = project_row(schema, record, index, policy)?;
        writer.write_record(&row)?;
    }

    writer
        .into_inner()
        .map_err(|e| EtlError::IoError(e.into_error()))
}
