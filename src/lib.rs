pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::{cli::LocalStorage, ConvertConfig, DEFAULT_INPUT_PATH, DEFAULT_OUTPUT_PATH};
pub use crate::core::{
    convert::{convert, convert_with},
    etl::{status_line, EtlEngine},
    pipeline::WebinarPipeline,
};
pub use domain::model::{ColumnSchema, Outcome, SchemaPolicy, WebinarRecord};
pub use utils::error::{EtlError, Result};
