use crate::core::csv_writer;
use crate::core::{ConfigProvider, Pipeline, Storage};
use crate::domain::model::{ColumnSchema, CsvOutput, WebinarDocument, WebinarRecord};
use crate::utils::error::{EtlError, Result};

pub struct WebinarPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> WebinarPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for WebinarPipeline<S, C> {
    async fn extract(&self) -> Result<Vec<WebinarRecord>> {
        let input_path = self.config.input_path();
        tracing::debug!("Reading webinars from: {}", input_path);

        let bytes = self.storage.read_file(input_path).await?;
        let document = WebinarDocument::from_slice(&bytes)?;

        if let Some(last_updated) = document.last_updated() {
            tracing::debug!("Document last updated at {}", last_updated);
        }
        let declared = document.declared_count();

        let records = document.into_records()?;

        if let Some(declared) = declared {
            if declared != records.len() as u64 {
                tracing::warn!(
                    "Document declares {} webinars but contains {}",
                    declared,
                    records.len()
                );
            }
        }

        Ok(records)
    }

    async fn transform(&self, records: Vec<WebinarRecord>) -> Result<CsvOutput> {
        let first = records.first().ok_or_else(|| EtlError::ProcessingError {
            message: "no webinars to derive CSV columns from".to_string(),
        })?;
        let schema = ColumnSchema::from_record(first)?;
        let policy = self.config.schema_policy();

        tracing::debug!(
            "CSV columns ({} policy): {}",
            policy,
            schema.columns().join(", ")
        );

        let content = csv_writer::write_csv(&records, &schema, policy)?;

        Ok(CsvOutput {
            schema,
            rows: records.len(),
            content,
        })
    }

    async fn load(&self, output: CsvOutput) -> Result<String> {
        let output_path = self.config.output_path();

        tracing::debug!(
            "Writing {} rows ({} bytes) to {}",
            output.rows,
            output.content.len(),
            output_path
        );
        self.storage.write_file(output_path, &output.content).await?;

        Ok(output_path.to_string())
    }
}
