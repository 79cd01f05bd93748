use crate::utils::error::{RecommenderError, Result};
use std::collections::HashSet;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(RecommenderError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(RecommenderError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_file_extension(
    field_name: &str,
    file: &str,
    allowed_extensions: &[&str],
) -> Result<()> {
    let allowed_set: HashSet<&str> = allowed_extensions.iter().copied().collect();

    match std::path::Path::new(file)
        .extension()
        .and_then(|ext| ext.to_str())
    {
        Some(extension) if allowed_set.contains(extension) => Ok(()),
        Some(extension) => Err(RecommenderError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: file.to_string(),
            reason: format!(
                "Unsupported file extension: {}. Allowed extensions: {}",
                extension,
                allowed_extensions.join(", ")
            ),
        }),
        None => Err(RecommenderError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: file.to_string(),
            reason: "File has no extension or invalid filename".to_string(),
        }),
    }
}

pub fn validate_positive_number(field_name: &str, value: usize, min_value: usize) -> Result<()> {
    if value < min_value {
        return Err(RecommenderError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(RecommenderError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_one_of(field_name: &str, value: &str, allowed: &[&str]) -> Result<()> {
    if !allowed.contains(&value) {
        return Err(RecommenderError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Valid values: {}", allowed.join(", ")),
        });
    }
    Ok(())
}

/// Inclusive bounds check for floats. NaN and infinities never pass, since
/// NaN compares false against both bounds.
pub fn validate_float_range(field_name: &str, value: f64, min: f64, max: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(RecommenderError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value must be a finite number".to_string(),
        });
    }
    if !(min..=max).contains(&value) {
        return Err(RecommenderError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_path() {
        assert!(validate_path("catalog.path", "./catalog.json").is_ok());
        assert!(validate_path("catalog.path", "").is_err());
        assert!(validate_path("catalog.path", "bad\0path").is_err());
    }

    #[test]
    fn test_validate_file_extension() {
        assert!(validate_file_extension("catalog.path", "clinic.json", &["json", "toml"]).is_ok());
        assert!(validate_file_extension("catalog.path", "clinic.toml", &["json", "toml"]).is_ok());
        assert!(validate_file_extension("catalog.path", "clinic.yaml", &["json", "toml"]).is_err());
        assert!(validate_file_extension("catalog.path", "clinic", &["json", "toml"]).is_err());
    }

    #[test]
    fn test_validate_float_range() {
        assert!(validate_float_range("rating", 4.9, 0.0, 5.0).is_ok());
        assert!(validate_float_range("rating", 0.0, 0.0, 5.0).is_ok());
        assert!(validate_float_range("rating", 5.0, 0.0, 5.0).is_ok());
        assert!(validate_float_range("rating", 5.1, 0.0, 5.0).is_err());
        assert!(validate_float_range("rating", -0.1, 0.0, 5.0).is_err());
    }

    #[test]
    fn test_validate_float_range_rejects_non_finite() {
        for value in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let err = validate_float_range("rating", value, 0.0, 5.0).unwrap_err();
            assert!(matches!(
                err,
                RecommenderError::InvalidConfigValueError { ref reason, .. }
                    if reason == "Value must be a finite number"
            ));
        }
    }

    #[test]
    fn test_validate_one_of() {
        assert!(validate_one_of("output.format", "csv", &["text", "csv"]).is_ok());
        assert!(validate_one_of("output.format", "xml", &["text", "csv"]).is_err());
    }

    #[test]
    fn test_validate_positive_number() {
        assert!(validate_positive_number("output.limit", 3, 1).is_ok());
        assert!(validate_positive_number("output.limit", 0, 1).is_err());
    }
}
