use thiserror::Error;

#[derive(Error, Debug)]
pub enum RecommenderError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Catalog validation error: {message}")]
    CatalogError { message: String },

    #[error("Unknown symptom: {name}")]
    UnknownSymptom { name: String },

    #[error("No symptoms selected")]
    NoSymptomsSelected,

    #[error("Unsupported format: {format}")]
    UnsupportedFormat { format: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Data,
    Configuration,
    Input,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl RecommenderError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            RecommenderError::IoError(_) => ErrorCategory::Io,
            RecommenderError::SerializationError(_)
            | RecommenderError::TomlError(_)
            | RecommenderError::CsvError(_)
            | RecommenderError::CatalogError { .. } => ErrorCategory::Data,
            RecommenderError::ConfigValidationError { .. }
            | RecommenderError::InvalidConfigValueError { .. }
            | RecommenderError::UnsupportedFormat { .. } => ErrorCategory::Configuration,
            RecommenderError::UnknownSymptom { .. } | RecommenderError::NoSymptomsSelected => {
                ErrorCategory::Input
            }
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            RecommenderError::NoSymptomsSelected => ErrorSeverity::Low,
            RecommenderError::UnknownSymptom { .. } => ErrorSeverity::Medium,
            RecommenderError::IoError(_) => ErrorSeverity::Critical,
            _ => ErrorSeverity::High,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            RecommenderError::IoError(_) => "Check that the file exists and is readable",
            RecommenderError::SerializationError(_) | RecommenderError::TomlError(_) => {
                "Check the file syntax against the documented catalog/config layout"
            }
            RecommenderError::CsvError(_) => "Try another output format such as json or text",
            RecommenderError::ConfigValidationError { .. }
            | RecommenderError::InvalidConfigValueError { .. } => {
                "Fix the configuration value and run again"
            }
            RecommenderError::CatalogError { .. } => {
                "Fix the catalog entries (ids, names, specializations, ratings)"
            }
            RecommenderError::UnknownSymptom { .. } => {
                "Run with --list-symptoms to see the available symptom names"
            }
            RecommenderError::NoSymptomsSelected => {
                "Please select at least one symptom to get recommendations"
            }
            RecommenderError::UnsupportedFormat { .. } => "Use one of: text, json, csv, tsv",
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            RecommenderError::IoError(e) => format!("Could not read input file: {}", e),
            RecommenderError::UnknownSymptom { name } => {
                format!("'{}' is not a symptom known to this clinic", name)
            }
            RecommenderError::NoSymptomsSelected => "No symptoms selected".to_string(),
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, RecommenderError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_classification() {
        let err = RecommenderError::UnknownSymptom {
            name: "Itchy Nose".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Input);
        assert_eq!(err.severity(), ErrorSeverity::Medium);
        assert!(err.user_friendly_message().contains("Itchy Nose"));

        let io = RecommenderError::from(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "missing",
        ));
        assert_eq!(io.category(), ErrorCategory::Io);
        assert_eq!(io.severity(), ErrorSeverity::Critical);
    }

    #[test]
    fn test_no_symptoms_is_low_severity() {
        let err = RecommenderError::NoSymptomsSelected;
        assert_eq!(err.severity(), ErrorSeverity::Low);
        assert!(err.recovery_suggestion().contains("at least one symptom"));
    }
}
