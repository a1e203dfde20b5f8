//! Tests for normstat-model types.

use normstat_model::{
    CellValue, Column, ColumnSummary, Dataset, Frequency, ModelError, NormalityTest,
    OutputFormat, TypeLabel,
};

#[test]
fn dataset_rejects_duplicate_columns() {
    let result = Dataset::new(
        "Sheet1",
        vec![
            Column::from_numbers("Age", &[Some(1.0)]),
            Column::from_numbers("Age", &[Some(2.0)]),
        ],
    );
    assert_eq!(
        result,
        Err(ModelError::DuplicateColumn {
            name: "Age".to_string()
        })
    );
}

#[test]
fn dataset_rejects_ragged_columns() {
    let result = Dataset::new(
        "Sheet1",
        vec![
            Column::from_numbers("Age", &[Some(1.0), Some(2.0)]),
            Column::from_texts("Notes", &[Some("ok")]),
        ],
    );
    assert!(matches!(
        result,
        Err(ModelError::RaggedColumn {
            expected: 2,
            actual: 1,
            ..
        })
    ));
}

#[test]
fn column_names_are_case_sensitive() {
    let dataset = Dataset::new(
        "Sheet1",
        vec![
            Column::from_numbers("ID", &[Some(1.0)]),
            Column::from_numbers("id", &[Some(1.0)]),
        ],
    )
    .expect("distinct names");
    let trimmed = dataset.without_column("ID");
    assert_eq!(trimmed.column_names(), vec!["id"]);
    // Source dataset is untouched.
    assert_eq!(dataset.column_count(), 2);
}

#[test]
fn numeric_detection_uses_full_column() {
    let mixed = Column::new(
        "Mixed",
        vec![
            CellValue::Number(1.0),
            CellValue::Missing,
            CellValue::Text("two".to_string()),
        ],
    );
    assert!(!mixed.is_numeric());
    assert_eq!(mixed.observation_count(), 2);
    assert_eq!(mixed.numeric_observations(), vec![1.0]);

    let empty = Column::new("Empty", vec![CellValue::Missing, CellValue::Missing]);
    assert!(empty.is_numeric());
    assert_eq!(empty.observation_count(), 0);
}

#[test]
fn summary_maps_to_label() {
    let test = NormalityTest {
        statistic: 0.97,
        p_value: 0.88,
    };
    let normal = ColumnSummary::Normal {
        mean: 27.0,
        std_dev: 3.3166,
        test,
    };
    assert_eq!(normal.type_label(), TypeLabel::Normal);
    assert_eq!(normal.normality_test(), Some(&test));

    let categorical = ColumnSummary::Categorical {
        observations: 3,
        frequencies: vec![Frequency {
            value: 1.0,
            count: 3,
        }],
    };
    assert_eq!(categorical.type_label(), TypeLabel::Categorical);
    assert!(categorical.normality_test().is_none());
}

#[test]
fn type_label_round_trips_through_text() {
    for label in TypeLabel::ALL {
        let parsed: TypeLabel = label.as_str().parse().expect("parse label");
        assert_eq!(parsed, label);
    }
    assert!("Gaussian".parse::<TypeLabel>().is_err());
}

#[test]
fn output_format_from_extension() {
    assert_eq!(OutputFormat::from_extension(Some("JSON")), OutputFormat::Json);
    assert_eq!(OutputFormat::from_extension(Some("csv")), OutputFormat::Csv);
    assert_eq!(OutputFormat::from_extension(Some("xlsx")), OutputFormat::Csv);
    assert_eq!(OutputFormat::from_extension(None), OutputFormat::Csv);
}

#[test]
fn cell_value_serializes_tagged() {
    let json = serde_json::to_string(&CellValue::Number(1.5)).expect("serialize cell");
    assert_eq!(json, r#"{"kind":"Number","value":1.5}"#);
    let missing = serde_json::to_string(&CellValue::Missing).expect("serialize missing");
    assert_eq!(missing, r#"{"kind":"Missing"}"#);
}
