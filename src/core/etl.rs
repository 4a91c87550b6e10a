use crate::core::Pipeline;
use crate::domain::model::Outcome;
use crate::utils::error::Result;

pub struct EtlEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> EtlEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub async fn run(&self) -> Result<Outcome> {
        tracing::info!("Starting webinar conversion");

        // Extract
        let records = self.pipeline.extract().await?;
        tracing::info!("Extracted {} webinars", records.len());

        if records.is_empty() {
            return Ok(Outcome::NoWebinars);
        }

        // Transform
        let output = self.pipeline.transform(records).await?;
        let count = output.rows;
        tracing::info!(
            "Rendered {} rows across {} columns",
            count,
            output.schema.len()
        );

        // Load
        let output_path = self.pipeline.load(output).await?;
        tracing::info!("Output saved to: {}", output_path);

        Ok(Outcome::Converted { count, output_path })
    }
}

/// The single console line describing a run.
pub fn status_line(result: &Result<Outcome>) -> String {
    match result {
        Ok(outcome) => outcome.to_string(),
        Err(e) => format!("Error: {}", e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{ColumnSchema, CsvOutput, WebinarRecord};
    use crate::utils::error::EtlError;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct StubPipeline {
        records: Vec<WebinarRecord>,
        fail_transform: bool,
        loads: AtomicUsize,
    }

    impl StubPipeline {
        fn new(records: Vec<WebinarRecord>) -> Self {
            Self {
                records,
                fail_transform: false,
                loads: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait::async_trait]
    impl Pipeline for StubPipeline {
        async fn extract(&self) -> Result<Vec<WebinarRecord>> {
            Ok(self.records.clone())
        }

        async fn transform(&self, records: Vec<WebinarRecord>) -> Result<CsvOutput> {
            if self.fail_transform {
                return Err(EtlError::ProcessingError {
                    message: "boom".to_string(),
                });
            }
            Ok(CsvOutput {
                schema: ColumnSchema::from_record(&records[0])?,
                rows: records.len(),
                content: Vec::new(),
            })
        }

        async fn load(&self, _output: CsvOutput) -> Result<String> {
            self.loads.fetch_add(1, Ordering::SeqCst);
            Ok("data/webinars.csv".to_string())
        }
    }

    fn webinar(id: u64) -> WebinarRecord {
        serde_json::from_value(serde_json::json!({"id": id, "title": "Intro"})).unwrap()
    }

    #[test]
    fn test_run_converts_all_records() {
        let engine = EtlEngine::new(StubPipeline::new(vec![webinar(1), webinar(2)]));

        let result = tokio_test::block_on(engine.run());

        assert_eq!(
            result.as_ref().unwrap(),
            &Outcome::Converted {
                count: 2,
                output_path: "data/webinars.csv".to_string()
            }
        );
        assert_eq!(
            status_line(&result),
            "Successfully converted 2 webinars to data/webinars.csv"
        );
    }

    #[tokio::test]
    async fn test_run_skips_load_when_empty() {
        let engine = EtlEngine::new(StubPipeline::new(Vec::new()));

        let result = engine.run().await;

        assert_eq!(result.as_ref().unwrap(), &Outcome::NoWebinars);
        assert_eq!(engine.pipeline.loads.load(Ordering::SeqCst), 0);
        assert_eq!(status_line(&result), "No webinars found in JSON.");
    }

    #[tokio::test]
    async fn test_run_stops_on_transform_error() {
        let mut pipeline = StubPipeline::new(vec![webinar(1)]);
        pipeline.fail_transform = true;
        let engine = EtlEngine::new(pipeline);

        let result = engine.run().await;

        assert!(result.is_err());
        assert_eq!(engine.pipeline.loads.load(Ordering::SeqCst), 0);
        assert_eq!(status_line(&result), "Error: Data processing error: boom");
    }
}
