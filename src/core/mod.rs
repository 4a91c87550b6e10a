pub mod convert;
pub mod csv_writer;
pub mod etl;
pub mod pipeline;

pub use crate::domain::model::{CsvOutput, Outcome, WebinarRecord};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
