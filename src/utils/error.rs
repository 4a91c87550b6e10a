use thiserror::Error;

#[derive(Error, Debug)]
pub enum EtlError {
    #[error("Failed to read {path}: {source}")]
    ReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write {path}: {source}")]
    WriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid JSON: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Malformed document: {message}")]
    MalformedDocument { message: String },

    #[error("Webinar at index {index} does not match the header: {message}")]
    SchemaMismatch { index: usize, message: String },

    #[error("Data processing error: {message}")]
    ProcessingError { message: String },

    #[error("Invalid value for {field} ({value:?}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Format,
    Schema,
    Output,
    Configuration,
}

impl EtlError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            EtlError::ReadError { .. } => ErrorCategory::Input,
            EtlError::SerializationError(_) | EtlError::MalformedDocument { .. } => {
                ErrorCategory::Format
            }
            EtlError::SchemaMismatch { .. } | EtlError::ProcessingError { .. } => {
                ErrorCategory::Schema
            }
            EtlError::WriteError { .. } | EtlError::IoError(_) | EtlError::CsvError(_) => {
                ErrorCategory::Output
            }
            EtlError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
        }
    }
}

pub type Result<T> = std::result::Result<T, EtlError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_error_names_path() {
        let err = EtlError::ReadError {
            path: "data/webinars.json".to_string(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "No such file or directory"),
        };

        assert_eq!(
            err.to_string(),
            "Failed to read data/webinars.json: No such file or directory"
        );
        assert_eq!(err.category(), ErrorCategory::Input);
    }

    #[test]
    fn test_json_error_is_format_category() {
        let json_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err = EtlError::from(json_err);

        assert!(err.to_string().starts_with("Invalid JSON: "));
        assert_eq!(err.category(), ErrorCategory::Format);
    }

    #[test]
    fn test_schema_mismatch_message() {
        let err = EtlError::SchemaMismatch {
            index: 3,
            message: "unexpected fields: speaker".to_string(),
        };

        assert_eq!(
            err.to_string(),
            "Webinar at index 3 does not match the header: unexpected fields: speaker"
        );
        assert_eq!(err.category(), ErrorCategory::Schema);
    }
}
