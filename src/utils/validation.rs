use crate::utils::error::{EtlError, Result};
use std::path::Path;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.trim().is_empty() {
        return Err(EtlError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(EtlError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

/// Rejects an output path that would overwrite the input.
pub fn validate_distinct_paths(field_name: &str, input: &str, output: &str) -> Result<()> {
    if Path::new(input) == Path::new(output) {
        return Err(EtlError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: output.to_string(),
            reason: "Output path must differ from the input path".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_path() {
        assert!(validate_path("input_path", "data/webinars.json").is_ok());
        assert!(validate_path("input_path", "").is_err());
        assert!(validate_path("input_path", "   ").is_err());
        assert!(validate_path("input_path", "data/\0webinars.json").is_err());
    }

    #[test]
    fn test_validate_distinct_paths() {
        assert!(validate_distinct_paths("output_path", "a.json", "a.csv").is_ok());
        assert!(validate_distinct_paths("output_path", "data/a.json", "data/a.json").is_err());
        // compared by components, so doubled separators still match
        assert!(validate_distinct_paths("output_path", "data//a.json", "data/a.json").is_err());
    }
}
