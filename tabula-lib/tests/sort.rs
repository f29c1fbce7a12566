use tabula_lib::model::{DynamicRecord, Record, Value};
use tabula_lib::sort::{SortDirection, SortState, sort_records};

fn status_rows() -> Vec<DynamicRecord> {
    vec![
        DynamicRecord::new().set("id", 1i64).set("status", "A"),
        DynamicRecord::new().set("id", 2i64).set("status", "A"),
        DynamicRecord::new().set("id", 3i64).set("status", "B"),
    ]
}

fn ids<R: Record>(rows: &[&R]) -> Vec<Value> {
    rows.iter().map(|r| r.field_or_null("id")).collect()
}

// ============================================================================
// Toggle rule
// ============================================================================

#[test]
fn test_toggle_from_unsorted_is_ascending() {
    assert_eq!(SortState::toggled(None, "name"), SortState::ascending("name"));
}

#[test]
fn test_toggle_same_field_flips() {
    let asc = SortState::ascending("name");
    assert_eq!(SortState::toggled(Some(&asc), "name"), SortState::descending("name"));
    let desc = SortState::descending("name");
    assert_eq!(SortState::toggled(Some(&desc), "name"), asc);
}

#[test]
fn test_toggle_other_field_resets_to_ascending() {
    let desc = SortState::descending("name");
    assert_eq!(SortState::toggled(Some(&desc), "email"), SortState::ascending("email"));
}

// ============================================================================
// Sorting
// ============================================================================

#[test]
fn test_no_sort_keeps_input_order() {
    let rows = status_rows();
    let sorted = sort_records(&rows, None);
    assert_eq!(ids(&sorted), vec![Value::Int(1), Value::Int(2), Value::Int(3)]);
}

#[test]
fn test_ascending_is_stable() {
    let rows = status_rows();
    let sorted = sort_records(&rows, Some(&SortState::ascending("status")));
    assert_eq!(ids(&sorted), vec![Value::Int(1), Value::Int(2), Value::Int(3)]);
}

#[test]
fn test_descending_is_stable() {
    let rows = status_rows();
    let sorted = sort_records(&rows, Some(&SortState::descending("status")));
    // Equal "A" rows keep 1 before 2 even when descending.
    assert_eq!(ids(&sorted), vec![Value::Int(3), Value::Int(1), Value::Int(2)]);
}

#[test]
fn test_sort_does_not_mutate_input() {
    let rows = vec![
        DynamicRecord::new().set("id", 3i64),
        DynamicRecord::new().set("id", 1i64),
        DynamicRecord::new().set("id", 2i64),
    ];
    let before = rows.clone();
    let sorted = sort_records(&rows, Some(&SortState::ascending("id")));
    assert_eq!(ids(&sorted), vec![Value::Int(1), Value::Int(2), Value::Int(3)]);
    assert_eq!(rows, before);
}

#[test]
fn test_missing_field_sorts_as_null_first() {
    let rows = vec![
        DynamicRecord::new().set("id", 1i64).set("score", 5i64),
        DynamicRecord::new().set("id", 2i64),
        DynamicRecord::new().set("id", 3i64).set("score", 1i64),
    ];
    let sorted = sort_records(&rows, Some(&SortState::ascending("score")));
    assert_eq!(ids(&sorted), vec![Value::Int(2), Value::Int(3), Value::Int(1)]);
}

#[test]
fn test_numbers_sort_numerically() {
    let rows = vec![
        DynamicRecord::new().set("id", 1i64).set("price", 10.5),
        DynamicRecord::new().set("id", 2i64).set("price", 9i64),
        DynamicRecord::new().set("id", 3i64).set("price", 100i64),
    ];
    let sorted = sort_records(&rows, Some(&SortState::ascending("price")));
    assert_eq!(ids(&sorted), vec![Value::Int(2), Value::Int(1), Value::Int(3)]);
}

#[test]
fn test_direction_serializes_lowercase() {
    let json = serde_json::to_string(&SortState {
        field: "name".into(),
        direction: SortDirection::Descending,
    })
    .unwrap();
    assert_eq!(json, r#"{"field":"name","direction":"descending"}"#);
}

// ============================================================================
// Numeric edge cases
// ============================================================================

fn scored_rows(count: i64) -> Vec<DynamicRecord> {
    // Deterministic scatter of ints, floats and NaNs.
    let mut seed: u64 = 0x2545_F491_4F6C_DD1D;
    (0..count)
        .map(|id| {
            seed = seed.wrapping_mul(6_364_136_223_846_793_005).wrapping_add(1_442_695_040_888_963_407);
            let bits = seed >> 33;
            let score = match bits % 10 {
                0 => Value::Float(f64::NAN),
                1..=4 => Value::Int((bits % 1000) as i64 - 500),
                _ => Value::Float((bits % 100_000) as f64 / 100.0 - 500.0),
            };
            DynamicRecord::new().set("id", id).set("score", score)
        })
        .collect()
}

fn is_nan(value: &Value) -> bool {
    matches!(value, Value::Float(v) if v.is_nan())
}

#[test]
fn test_nan_scores_group_together_without_disturbing_numbers() {
    let rows = scored_rows(400);
    assert!(rows.iter().any(|r| is_nan(&r.field_or_null("score"))));

    for direction in [SortDirection::Ascending, SortDirection::Descending] {
        let sort = SortState {
            field: "score".into(),
            direction,
        };
        let sorted = sort_records(&rows, Some(&sort));
        assert_eq!(sorted.len(), rows.len());

        let scores: Vec<Value> = sorted.iter().map(|r| r.field_or_null("score")).collect();
        let numbers: Vec<&Value> = scores.iter().filter(|v| !is_nan(v)).collect();
        for pair in numbers.windows(2) {
            let ordering = pair[0].compare(pair[1]);
            match direction {
                SortDirection::Ascending => assert_ne!(ordering, std::cmp::Ordering::Greater),
                SortDirection::Descending => assert_ne!(ordering, std::cmp::Ordering::Less),
            }
        }

        // NaNs form one contiguous block in input order.
        let nan_positions: Vec<usize> = scores
            .iter()
            .enumerate()
            .filter(|(_, v)| is_nan(v))
            .map(|(i, _)| i)
            .collect();
        assert!(nan_positions.windows(2).all(|w| w[1] == w[0] + 1));
        let nan_ids: Vec<Value> = nan_positions.iter().map(|&i| sorted[i].field_or_null("id")).collect();
        let mut expected = nan_ids.clone();
        expected.sort_by(|a, b| a.compare(b));
        assert_eq!(nan_ids, expected);
    }
}

#[test]
fn test_large_ints_sort_exactly_against_floats() {
    let two_53 = 9_007_199_254_740_992i64;
    let rows = vec![
        DynamicRecord::new().set("id", 1i64).set("n", two_53 + 1),
        DynamicRecord::new().set("id", 2i64).set("n", two_53 as f64),
        DynamicRecord::new().set("id", 3i64).set("n", two_53),
    ];
    let sorted = sort_records(&rows, Some(&SortState::ascending("n")));
    // 2 and 3 are equal and keep input order; 1 is strictly larger.
    assert_eq!(ids(&sorted), vec![Value::Int(2), Value::Int(3), Value::Int(1)]);
}
