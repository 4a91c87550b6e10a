pub mod cli;

use crate::core::ConfigProvider;
use crate::domain::model::SchemaPolicy;
use crate::utils::error::Result;
use crate::utils::validation::{validate_distinct_paths, validate_path, Validate};
use serde::{Deserialize, Serialize};

pub const DEFAULT_INPUT_PATH: &str = "data/webinars.json";
pub const DEFAULT_OUTPUT_PATH: &str = "data/webinars.csv";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConvertConfig {
    pub input_path: String,
    pub output_path: String,
    #[serde(default)]
    pub schema_policy: SchemaPolicy,
}

impl ConvertConfig {
    pub fn new(input_path: impl Into<String>, output_path: impl Into<String>) -> Self {
        Self {
            input_path: input_path.into(),
            output_path: output_path.into(),
            schema_policy: SchemaPolicy::default(),
        }
    }

    pub fn with_schema_policy(mut self, schema_policy: SchemaPolicy) -> Self {
        self.schema_policy = schema_policy;
        self
    }
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self::new(DEFAULT_INPUT_PATH, DEFAULT_OUTPUT_PATH)
    }
}

impl ConfigProvider for ConvertConfig {
    fn input_path(&self) -> &str {
        &self.input_path
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn schema_policy(&self) -> SchemaPolicy {
        self.schema_policy
    }
}

impl Validate for ConvertConfig {
    fn validate(&self) -> Result<()> {
        validate_path("input_path", &self.input_path)?;
        validate_path("output_path", &self.output_path)?;
        validate_distinct_paths("output_path", &self.input_path, &self.output_path)
    }
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, clap::Parser)]
#[command(name = "webinar-csv")]
#[command(about = "Convert data/webinars.json into data/webinars.csv")]
pub struct CliConfig {
    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(
        long,
        value_enum,
        default_value_t = SchemaPolicy::Fill,
        help = "How to handle webinars whose fields differ from the first one"
    )]
    pub schema_policy: SchemaPolicy,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// Paths are fixed; only the policy comes from the command line.
    pub fn convert_config(&self) -> ConvertConfig {
        ConvertConfig::default().with_schema_policy(self.schema_policy)
    }
}
