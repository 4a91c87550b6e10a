use crate::config::cli::LocalStorage;
use crate::config::ConvertConfig;
use crate::core::etl::EtlEngine;
use crate::core::pipeline::WebinarPipeline;
use crate::core::{ConfigProvider, Storage};
use crate::domain::model::Outcome;
use crate::utils::error::Result;
use crate::utils::validation::Validate;

/// Converts `input_path` to `output_path` relative to the working directory.
///
/// `Ok` carries the success or empty-input message, `Err` the `Error: ` line.
pub async fn convert(input_path: &str, output_path: &str) -> std::result::Result<String, String> {
    let config = ConvertConfig::new(input_path, output_path);
    convert_with(LocalStorage::new("."), config)
        .await
        .map(|outcome| outcome.to_string())
        .map_err(|e| format!("Error: {}", e))
}

pub async fn convert_with<S, C>(storage: S, config: C) -> Result<Outcome>
where
    S: Storage,
    C: ConfigProvider + Validate,
{
    let result = async {
        config.validate()?;
        let engine = EtlEngine::new(WebinarPipeline::new(storage, config));
        engine.run().await
    }
    .await;

    if let Err(e) = &result {
        tracing::error!("Conversion failed: {} (Category: {:?})", e, e.category());
    }

    result
}
