//! Property tests over randomly shaped datasets.

use normstat_core::{IDENTIFIER_COLUMN, analyze, shapiro_wilk};
use normstat_model::{CellValue, Column, Dataset, TypeLabel};
use proptest::prelude::*;

fn cell() -> impl Strategy<Value = CellValue> {
    prop_oneof![
        6 => (-1000.0f64..1000.0).prop_map(CellValue::Number),
        3 => (0i32..8).prop_map(|value| CellValue::Number(f64::from(value))),
        1 => Just(CellValue::Missing),
        1 => "[a-z]{1,6}".prop_map(CellValue::Text),
    ]
}

fn dataset() -> impl Strategy<Value = Dataset> {
    (0usize..30, 0usize..6).prop_flat_map(|(rows, columns)| {
        prop::collection::vec(prop::collection::vec(cell(), rows), columns).prop_map(
            move |columns| {
                let columns = columns
                    .into_iter()
                    .enumerate()
                    .map(|(idx, cells)| {
                        let name = if idx == 0 {
                            IDENTIFIER_COLUMN.to_string()
                        } else {
                            format!("C{idx}")
                        };
                        Column::new(name, cells)
                    })
                    .collect();
                Dataset::new("Sheet1", columns).expect("generated dataset is valid")
            },
        )
    })
}

proptest! {
    #[test]
    fn one_row_per_non_identifier_column(data in dataset()) {
        let table = analyze(&data);
        let expected: Vec<&str> = data
            .column_names()
            .into_iter()
            .filter(|name| *name != IDENTIFIER_COLUMN)
            .collect();
        prop_assert_eq!(table.column_names(), expected);
    }

    #[test]
    fn labels_follow_column_content(data in dataset()) {
        let table = analyze(&data);
        for row in &table.rows {
            let column = data.column(&row.column_name).expect("column exists");
            if column.is_numeric() {
                prop_assert_ne!(row.type_label, TypeLabel::Text);
            } else {
                prop_assert_eq!(row.type_label, TypeLabel::Text);
                prop_assert_eq!(row.assumed_measure.as_str(), "");
            }
            if row.type_label == TypeLabel::Normal {
                prop_assert!(row.measure_values.starts_with("Mean="));
            }
        }
    }

    #[test]
    fn analysis_is_repeatable(data in dataset()) {
        prop_assert_eq!(analyze(&data), analyze(&data));
    }

    #[test]
    fn statistic_stays_in_unit_interval(
        data in prop::collection::vec(-1e6f64..1e6, 3..200)
    ) {
        if let Ok(result) = shapiro_wilk(&data) {
            prop_assert!(result.statistic > 0.0 && result.statistic <= 1.0 + 1e-12);
            prop_assert!((0.0..=1.0).contains(&result.p_value));
        }
    }
}
