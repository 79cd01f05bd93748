use anyhow::Result;
use clinic_recommender::domain::ports::CatalogStore;
use clinic_recommender::report::{render, OutputFormat};
use clinic_recommender::{
    ConfiguredCatalogStore, FileCatalogStore, RecommendationEngine, RecommenderError, Severity,
    UrgencyLevel,
};
use tempfile::TempDir;

const TOML_CATALOG: &str = r#"
[[doctors]]
id = "d1"
first_name = "Nora"
last_name = "Kim"
specializations = ["Cornea Specialist"]
experience = 16
rating = 4.2
consultation_fee = 120

[[doctors.availability]]
day_of_week = 2
start_time = "09:00"
end_time = "13:00"
is_available = true

[[doctors]]
id = "d2"
first_name = "Omar"
last_name = "Haddad"
specializations = ["Cornea"]
experience = 4
rating = 4.9

[[symptoms]]
id = "s1"
name = "Red Eyes"
severity = "moderate"
duration = "recent"
related_specializations = ["Cornea Specialist"]
"#;

/// 測試 TOML 目錄檔載入與評分
#[tokio::test]
async fn test_toml_catalog_file() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("clinic.toml");
    tokio::fs::write(&path, TOML_CATALOG).await?;

    let store = FileCatalogStore::new(&path);
    let catalog = store.load_catalog().await?;
    assert_eq!(catalog.doctors.len(), 2);
    assert_eq!(catalog.doctors[0].available_days(), vec![2]);
    assert_eq!(catalog.symptoms[0].severity, Severity::Moderate);

    let engine = RecommendationEngine::load(&store).await?;
    let assessment = engine.assess_names(&["red eyes".to_string()], &[])?;

    // Kim: 60 + 20 + 10 = 90, Haddad ("Cornea" inside "Cornea Specialist"): 60 + 20 = 80.
    let ranked: Vec<(&str, f64)> = assessment
        .recommendations
        .iter()
        .map(|r| (r.doctor.id.as_str(), r.match_score))
        .collect();
    assert_eq!(ranked, vec![("d1", 90.0), ("d2", 80.0)]);
    assert_eq!(assessment.urgency, UrgencyLevel::Low);

    Ok(())
}

#[tokio::test]
async fn test_json_catalog_file() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("clinic.json");
    let catalog = serde_json::json!({
        "doctors": [
            {"id": "d1", "first_name": "Ida", "last_name": "Berg",
             "specializations": ["Neuro-Ophthalmology"], "experience": 9, "rating": 4.0}
        ],
        "symptoms": [
            {"id": "s1", "name": "Double Vision", "severity": "severe", "duration": "recent",
             "related_specializations": ["Neuro-Ophthalmology"]}
        ]
    });
    tokio::fs::write(&path, serde_json::to_vec_pretty(&catalog)?).await?;

    let store = ConfiguredCatalogStore::from_path(path.to_str());
    let engine = RecommendationEngine::load(&store).await?;
    let assessment = engine.assess_names(&["Double Vision".to_string()], &[])?;

    assert_eq!(assessment.urgency, UrgencyLevel::High);
    assert_eq!(assessment.recommendations[0].match_score, 90.0);
    assert!(assessment.recommendations[0]
        .reason
        .starts_with("Excellent match! Dr. Berg is a skilled Neuro-Ophthalmology"));

    let csv = render(&assessment, OutputFormat::Csv, None)?;
    assert!(csv.contains("d1,Ida Berg,Neuro-Ophthalmology,90.0,4.0,9,Double Vision,"));

    Ok(())
}

#[tokio::test]
async fn test_invalid_catalog_rejected() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("broken.toml");
    let content = r#"
[[doctors]]
id = "d1"
first_name = "Nora"
last_name = "Kim"
specializations = [""]
experience = 16
rating = 4.2
"#;
    tokio::fs::write(&path, content).await?;

    let err = FileCatalogStore::new(&path).load_catalog().await.unwrap_err();
    assert!(matches!(err, RecommenderError::CatalogError { .. }));

    Ok(())
}

#[tokio::test]
async fn test_nan_rating_rejected() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("nan.toml");
    let content = r#"
[[doctors]]
id = "d1"
first_name = "Nora"
last_name = "Kim"
specializations = ["Cornea Specialist"]
experience = 16
rating = nan
"#;
    tokio::fs::write(&path, content).await?;

    let err = FileCatalogStore::new(&path).load_catalog().await.unwrap_err();
    assert!(matches!(
        err,
        RecommenderError::InvalidConfigValueError { ref field, .. } if field == "doctors[0].rating"
    ));

    Ok(())
}

#[tokio::test]
async fn test_malformed_json_rejected() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("broken.json");
    tokio::fs::write(&path, "{\"doctors\": [").await?;

    let err = FileCatalogStore::new(&path).load_catalog().await.unwrap_err();
    assert!(matches!(err, RecommenderError::SerializationError(_)));

    Ok(())
}
