//! Drives the typing surface the way a backend integration would: a mock
//! native backend instantiates the generic wrappers, and every accepted
//! expression input goes through `IntoExpr`.

use anyframe::prelude::*;

/// The mock backend's column type.
#[derive(Debug, Clone, PartialEq)]
struct MockColumn {
    values: Vec<f64>,
}

/// The mock backend's frame type.
#[derive(Debug, Clone, PartialEq)]
struct MockFrame {
    columns: Vec<(String, MockColumn)>,
}

/// A function signature in the compatibility layer: accepts anything
/// expression-like.
fn sort_key(key: impl IntoExpr) -> Expr {
    key.into_expr()
}

#[test]
fn every_union_member_is_accepted_as_an_expression_input() {
    assert_eq!(sort_key(col("a")), col("a"));
    assert_eq!(sort_key("a"), col("a"));
    assert_eq!(sort_key("a".to_owned()), col("a"));
    assert_eq!(sort_key(1i32), lit(1i32));
    assert_eq!(sort_key(1i64), lit(1i64));
    assert_eq!(sort_key(1.5f32), lit(1.5f32));
    assert_eq!(sort_key(1.5f64), lit(1.5f64));
    assert_eq!(sort_key(true), lit(true));

    let s = Series::new("heights", MockColumn { values: vec![1.0] });
    let e = sort_key(s);
    assert!(e.is_literal());
}

#[test]
fn heterogeneous_inputs_collect_into_one_expression_list() {
    let exprs: Vec<Expr> = vec![
        col("a"),
        "b".into(),
        10i64.into(),
        0.5f64.into(),
        Series::new("c", MockColumn { values: vec![] }).into(),
    ];
    assert_eq!(exprs.len(), 5);
    assert_eq!(exprs[1].column_name(), Some("b"));
    assert!(exprs[4].is_literal());
}

#[test]
fn native_wrappers_take_the_mock_backend_unmodified() {
    let column = MockColumn {
        values: vec![1.0, 2.0],
    };
    let series = Series::new("heights", column.clone());
    assert_eq!(series.name(), "heights");
    assert_eq!(series.native(), &column);

    let frame = DataFrame::new(MockFrame {
        columns: vec![("heights".to_owned(), column)],
    });
    assert_eq!(frame.native().columns.len(), 1);
}

#[test]
fn a_series_survives_the_trip_through_an_expression() {
    let series = Series::new(
        "heights",
        MockColumn {
            values: vec![1.0, 2.0],
        },
    );
    let expr = series.clone().into_expr();

    let lv = LiteralValue::try_from(expr).unwrap();
    let erased = match lv {
        LiteralValue::Series(erased) => erased,
        lv => panic!("expected a series literal, got {lv:?}"),
    };
    assert_eq!(erased.name(), "heights");
    assert_eq!(erased.dtype(), DataType::Unknown);
    assert_eq!(erased.downcast::<MockColumn>().unwrap(), series);
}

#[test]
fn downcasting_to_another_backend_reports_a_schema_mismatch() {
    let erased = Series::new("heights", MockColumn { values: vec![] }).erase();
    let err = erased.downcast::<Vec<f64>>().unwrap_err();
    assert!(matches!(err, AnyframeError::SchemaMismatch(_)));
}

#[cfg(feature = "serde")]
#[test]
fn column_and_literal_expressions_roundtrip_through_serde() {
    let exprs = vec![col("a"), cols(["a", "b"]), lit(1i64), lit("x"), lit(NULL)];
    for expr in exprs {
        let json = serde_json::to_string(&expr).unwrap();
        let back: Expr = serde_json::from_str(&json).unwrap();
        assert_eq!(back, expr);
    }
}

#[cfg(feature = "serde")]
#[test]
fn series_literals_refuse_to_serialize() {
    let expr = Series::new("s", vec![1i64]).into_expr();
    assert!(serde_json::to_string(&expr).is_err());
}
