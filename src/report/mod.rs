//! Rendering of assessments for the terminal or downstream tools.

use crate::domain::model::{Assessment, Recommendation};
use crate::utils::error::{RecommenderError, Result};
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;
use std::str::FromStr;

pub const OUTPUT_FORMATS: [&str; 4] = ["text", "json", "csv", "tsv"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Csv,
    Tsv,
}

impl FromStr for OutputFormat {
    type Err = RecommenderError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            "tsv" => Ok(OutputFormat::Tsv),
            other => Err(RecommenderError::UnsupportedFormat {
                format: other.to_string(),
            }),
        }
    }
}

/// Renders `assessment`, keeping at most `limit` recommendations.
pub fn render(
    assessment: &Assessment,
    format: OutputFormat,
    limit: Option<usize>,
) -> Result<String> {
    let shown = match limit {
        Some(limit) => &assessment.recommendations[..limit.min(assessment.recommendations.len())],
        None => &assessment.recommendations[..],
    };

    match format {
        OutputFormat::Text => Ok(render_text(assessment, shown)),
        OutputFormat::Json => render_json(assessment, shown),
        OutputFormat::Csv => render_delimited(shown, b','),
        OutputFormat::Tsv => render_delimited(shown, b'\t'),
    }
}

fn render_text(assessment: &Assessment, shown: &[Recommendation]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Symptoms: {}", assessment.symptoms.join(", "));
    let _ = writeln!(
        out,
        "Urgency: {} - {}",
        assessment.urgency.as_str().to_uppercase(),
        assessment.advice
    );
    let _ = writeln!(out);

    if shown.is_empty() {
        let _ = writeln!(out, "No matching doctors found for the selected symptoms.");
        return out;
    }

    let _ = writeln!(out, "Recommended doctors:");
    for (rank, rec) in shown.iter().enumerate() {
        let doctor = &rec.doctor;
        let _ = writeln!(
            out,
            "{:>2}. Dr. {} - {}% match (rating {:.1}, {} yrs)",
            rank + 1,
            doctor.full_name(),
            rec.score_percent(),
            doctor.rating,
            doctor.experience
        );
        let _ = writeln!(out, "    {}", doctor.specializations.join(", "));
        if let Some(fee) = doctor.consultation_fee {
            let _ = writeln!(out, "    Consultation fee: ${}", fee);
        }
        let _ = writeln!(out, "    {}", rec.reason);
    }
    out
}

#[derive(Serialize)]
struct JsonReport<'a> {
    urgency: &'a str,
    advice: &'a str,
    symptoms: &'a [String],
    recommendations: &'a [Recommendation],
}

fn render_json(assessment: &Assessment, shown: &[Recommendation]) -> Result<String> {
    let report = JsonReport {
        urgency: assessment.urgency.as_str(),
        advice: &assessment.advice,
        symptoms: &assessment.symptoms,
        recommendations: shown,
    };
    Ok(serde_json::to_string_pretty(&report)?)
}

#[derive(Serialize)]
struct Row<'a> {
    rank: usize,
    doctor_id: &'a str,
    doctor_name: String,
    specializations: String,
    match_score: String,
    rating: f64,
    experience: u32,
    matched_symptoms: String,
    reason: &'a str,
}

const DELIMITED_HEADER: [&str; 9] = [
    "rank",
    "doctor_id",
    "doctor_name",
    "specializations",
    "match_score",
    "rating",
    "experience",
    "matched_symptoms",
    "reason",
];

fn render_delimited(shown: &[Recommendation], delimiter: u8) -> Result<String> {
    // serialize() only emits a header alongside the first row
    let mut writer = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .has_headers(false)
        .from_writer(Vec::new());
    writer.write_record(DELIMITED_HEADER)?;

    for (index, rec) in shown.iter().enumerate() {
        writer.serialize(Row {
            rank: index + 1,
            doctor_id: &rec.doctor.id,
            doctor_name: rec.doctor.full_name(),
            specializations: rec.doctor.specializations.join("; "),
            match_score: format!("{:.1}", rec.match_score),
            rating: rec.doctor.rating,
            experience: rec.doctor.experience,
            matched_symptoms: rec.matched_symptoms.join("; "),
            reason: &rec.reason,
        })?;
    }

    let bytes = writer.into_inner().map_err(|e| e.into_error())?;
    String::from_utf8(bytes)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e).into())
}
