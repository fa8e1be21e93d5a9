// Integration tests for onview
use onview::prelude::*;
use onview_core::{predictor, validate, FeatureBounds};
use std::collections::HashMap;

fn sample_pool() -> Vec<Record> {
    vec![
        Record {
            department: Some("European Paintings".to_string()),
            object_begin_date: Some(1885),
            classification: Some("Paintings".to_string()),
            medium: Some("Oil on canvas".to_string()),
            culture: Some("French".to_string()),
            title: Some("Wheat Field".to_string()),
            predicted_probability: Some(0.92),
            ..Record::default()
        },
        Record {
            department: Some("European Paintings".to_string()),
            object_begin_date: Some(1870),
            classification: Some("Paintings".to_string()),
            title: Some("Dance Class".to_string()),
            predicted_probability: Some(0.85),
            ..Record::default()
        },
        Record {
            department: Some("Egyptian Art".to_string()),
            object_begin_date: Some(-2400),
            classification: Some("Reliefs".to_string()),
            title: Some("Tomb Relief".to_string()),
            predicted_probability: Some(0.15),
            ..Record::default()
        },
        Record {
            department: Some("Asian Art".to_string()),
            object_begin_date: Some(900),
            title: Some("Bronze Vessel".to_string()),
            predicted_probability: Some(0.35),
            ..Record::default()
        },
    ]
}

#[test]
fn test_end_to_end_fallback_prediction() {
    let query = Record {
        department: Some("European Paintings".to_string()),
        object_begin_date: Some(1880),
        classification: Some("Paintings".to_string()),
        ..Record::default()
    };

    let pool = sample_pool();
    let result = predictor::predict(&query, &pool, predictor::DEFAULT_K).unwrap();

    assert_eq!(result.prediction, Verdict::OnView);
    assert!(result.probability > 0.5 && result.probability <= 1.0);
    // Both painting records outrank the ancient pieces
    assert_eq!(result.similar_items[0].title, "Wheat Field");
    assert_eq!(result.similar_items[1].title, "Dance Class");
}

#[test]
fn test_validate_then_predict_flow() {
    let mut ranges: FeatureRanges = HashMap::new();
    ranges.insert(
        "objectBeginDate".to_string(),
        FeatureBounds {
            min: -3000.0,
            max: 2020.0,
            median: None,
        },
    );

    let query = Record {
        department: Some("Asian Art".to_string()),
        object_begin_date: Some(900),
        ..Record::default()
    };

    let validation = validate(&query, &ranges);
    assert!(validation.valid, "unexpected errors: {:?}", validation.errors);

    let result = predictor::predict(&query, &sample_pool(), predictor::DEFAULT_K).unwrap();
    assert!(result.probability >= 0.0 && result.probability <= 1.0);
}

#[test]
fn test_invalid_query_reports_all_problems() {
    let mut ranges: FeatureRanges = HashMap::new();
    ranges.insert(
        "objectEndDate".to_string(),
        FeatureBounds {
            min: -3000.0,
            max: 2020.0,
            median: None,
        },
    );

    let query = Record {
        object_begin_date: Some(1900),
        object_end_date: Some(2500),
        ..Record::default()
    };

    let validation = validate(&query, &ranges);
    assert!(!validation.valid);
    // Missing department, end date out of range
    assert_eq!(validation.errors.len(), 2);
}

#[tokio::test]
async fn test_orchestrator_api_path() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/predict")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{"probability":0.65,"prediction":"on-view","confidence":"medium","explanation":null}"#,
        )
        .create_async()
        .await;

    let config = ClientConfig::new(server.url().parse().unwrap());
    let orchestrator = PredictionOrchestrator::new(config).unwrap();

    let query = Record {
        department: Some("Asian Art".to_string()),
        ..Record::default()
    };
    let pool = sample_pool();
    let result = orchestrator.predict(&query, Some(&pool)).await.unwrap();

    assert_eq!(result.method, Some(Method::Api));
    assert_eq!(result.probability, 0.65);
}

#[tokio::test]
async fn test_orchestrator_degrades_to_local_pool() {
    // No server listening: the remote attempt fails and the pool answers
    let config = ClientConfig::new("http://127.0.0.1:9".parse().unwrap());
    let orchestrator = PredictionOrchestrator::new(config).unwrap();

    let query = Record {
        department: Some("European Paintings".to_string()),
        object_begin_date: Some(1880),
        ..Record::default()
    };
    let pool = sample_pool();
    let result = orchestrator.predict(&query, Some(&pool)).await.unwrap();

    assert_eq!(result.method, Some(Method::Knn));
    assert!(result.warning.is_some());
    assert_eq!(result.prediction, Verdict::OnView);
}

#[tokio::test]
async fn test_orchestrator_without_pool_fails_loudly() {
    let config = ClientConfig::new("http://127.0.0.1:9".parse().unwrap());
    let orchestrator = PredictionOrchestrator::new(config).unwrap();

    let err = orchestrator
        .predict(&Record::default(), None)
        .await
        .unwrap_err();
    assert!(matches!(err, Error::NoFallbackAvailable));
}

#[test]
fn test_prediction_result_wire_shape() {
    let pool = sample_pool();
    let query = Record {
        department: Some("European Paintings".to_string()),
        object_begin_date: Some(1880),
        ..Record::default()
    };
    let result = predictor::predict(&query, &pool, 2).unwrap();
    let json = serde_json::to_value(&result).unwrap();

    assert!(json["probability"].is_f64());
    assert!(json["message"].as_str().unwrap().contains("similar items"));
    assert_eq!(json["similarItems"].as_array().unwrap().len(), 2);
    assert!(json["similarItems"][0]["similarity"]
        .as_str()
        .unwrap()
        .ends_with('%'));
}
