use super::toml_config::TomlConfig;
use crate::core::selection::SeverityOverride;
use crate::report::{OutputFormat, OUTPUT_FORMATS};
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_file_extension, validate_one_of, validate_positive_number, Validate,
};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "clinic-recommender")]
#[command(about = "Rank clinic doctors for a set of patient symptoms")]
pub struct CliConfig {
    /// Path to TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Catalog file (.json or .toml); overrides the config file
    #[arg(long)]
    pub catalog: Option<String>,

    /// Comma separated symptom names, e.g. "Eye Pain,Red Eyes"
    #[arg(short, long, value_delimiter = ',')]
    pub symptoms: Vec<String>,

    /// Severity override, e.g. "Eye Pain=mild" (repeatable)
    #[arg(long = "severity")]
    pub severities: Vec<String>,

    /// Output format: text, json, csv or tsv
    #[arg(short, long)]
    pub format: Option<String>,

    /// Show at most this many doctors
    #[arg(short, long)]
    pub limit: Option<usize>,

    /// List the symptoms known to the catalog and exit
    #[arg(long)]
    pub list_symptoms: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub log_json: bool,
}

/// Effective settings after merging the config file with command line flags.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub catalog_path: Option<String>,
    pub symptoms: Vec<String>,
    pub overrides: Vec<SeverityOverride>,
    pub format: OutputFormat,
    pub limit: Option<usize>,
    pub list_symptoms: bool,
}

impl CliConfig {
    /// Loads the `--config` file, or an empty config when none was given.
    pub fn load_file_config(&self) -> Result<TomlConfig> {
        match &self.config {
            Some(path) => TomlConfig::from_file(path),
            None => Ok(TomlConfig::default()),
        }
    }

    /// Flags win over file values.
    pub fn merge(&self, file_config: &TomlConfig) -> Result<Settings> {
        let format = match &self.format {
            Some(format) => format.parse()?,
            None => file_config.output_format()?,
        };

        let overrides = self
            .severities
            .iter()
            .map(|value| SeverityOverride::parse(value))
            .collect::<Result<Vec<_>>>()?;

        Ok(Settings {
            catalog_path: self
                .catalog
                .clone()
                .or_else(|| file_config.catalog_path().map(str::to_string)),
            symptoms: self.symptoms.clone(),
            overrides,
            format,
            limit: self.limit.or_else(|| file_config.limit()),
            list_symptoms: self.list_symptoms,
        })
    }

    pub fn verbose_logging(&self, file_config: &TomlConfig) -> bool {
        self.verbose || file_config.verbose()
    }

    pub fn json_logging(&self, file_config: &TomlConfig) -> bool {
        self.log_json || file_config.json_logs()
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(format) = &self.format {
            validate_one_of("format", format.to_lowercase().as_str(), &OUTPUT_FORMATS)?;
        }
        if let Some(limit) = self.limit {
            validate_positive_number("limit", limit, 1)?;
        }
        if let Some(path) = &self.catalog {
            validate_file_extension("catalog", path, &["json", "toml"])?;
        }
        Ok(())
    }
}
