use pointsift::{
    condition::{Combinator, Comparison, ComparisonOp, Composite, Condition, ConditionBuilder},
    error::ConfigurationError,
    filter::{filter, ConditionalFilter},
    option::FilterOptions,
    point::{PointCloud, PointXy, PointXyz},
};

fn sample() -> Vec<PointXy> {
    vec![
        PointXy::new(1.0, 1.0),
        PointXy::new(5.0, 5.0),
        PointXy::new(10.0, 1.0),
    ]
}

fn gt(field: &str, threshold: f32) -> Condition<PointXy> {
    Condition::compare(field, ComparisonOp::GreaterThan, threshold).expect("field exists")
}

#[test]
fn or_keeps_points_above_either_threshold() {
    let condition = Condition::or([gt("x", 4.0), gt("y", 4.0)]);
    assert_eq!(
        filter(&sample(), &condition),
        vec![PointXy::new(5.0, 5.0), PointXy::new(10.0, 1.0)]
    );
}

#[test]
fn and_keeps_points_above_both_thresholds() {
    let condition = Condition::and([gt("x", 4.0), gt("y", 4.0)]);
    assert_eq!(filter(&sample(), &condition), vec![PointXy::new(5.0, 5.0)]);
}

#[test]
fn empty_input_yields_empty_output() {
    let conditions = [
        Condition::or([gt("x", 4.0), gt("y", 4.0)]),
        Condition::and([]),
        Condition::or([]),
        Condition::functor(|_: &PointXy| true),
    ];
    for condition in &conditions {
        assert!(filter(&[], condition).is_empty());
    }

    let driver = ConditionalFilter::new(FilterOptions::default().extract_removed_indices(true))
        .with_condition(Condition::and([]));
    let output = driver
        .filter(&PointCloud::<PointXy>::default())
        .expect("condition set");
    assert!(output.cloud.is_empty());
    assert_eq!(output.removed_indices, Some(vec![]));
}

#[test]
fn missing_field_is_rejected_before_any_record_is_read() {
    let err = Comparison::<PointXy>::new("z", ComparisonOp::GreaterThan, 0.0)
        .expect_err("PointXy has no z");
    assert!(matches!(
        err,
        ConfigurationError::UnknownField { ref field, available, .. }
            if field == "z" && available == ["x", "y"]
    ));

    // The same name resolves for a record type that carries it.
    assert!(Comparison::<PointXyz>::new("z", ComparisonOp::GreaterThan, 0.0).is_ok());

    let err = ConditionBuilder::<PointXy>::or()
        .greater_than("x", 4.0)
        .greater_than("z", 0.0)
        .build()
        .expect_err("PointXy has no z");
    assert!(matches!(err, ConfigurationError::UnknownField { .. }));
}

#[test]
fn empty_composites_are_identities() {
    let points = sample();
    let all = Condition::Composite(Composite::new(Combinator::And));
    let none = Condition::Composite(Composite::new(Combinator::Or));
    assert_eq!(filter(&points, &all), points);
    assert!(filter(&points, &none).is_empty());
}

#[test]
fn single_child_composites_match_the_child() {
    let mut points = sample();
    points.push(PointXy::new(f32::NAN, 9.0));
    for op in [
        ComparisonOp::GreaterThan,
        ComparisonOp::GreaterThanOrEqual,
        ComparisonOp::LessThan,
        ComparisonOp::LessThanOrEqual,
        ComparisonOp::Equal,
        ComparisonOp::NotEqual,
    ] {
        let leaf = Condition::compare("x", op, 5.0).expect("x exists");
        let expected = filter(&points, &leaf);
        let and = Condition::Composite(Composite::with_children(Combinator::And, [leaf.clone()]));
        let or = Condition::Composite(Composite::with_children(Combinator::Or, [leaf]));
        assert_eq!(filter(&points, &and), expected, "AND[{op}]");
        assert_eq!(filter(&points, &or), expected, "OR[{op}]");
    }
}

#[test]
fn nan_fields_fail_every_comparison() {
    let points = vec![PointXy::new(f32::NAN, 0.0), PointXy::new(0.0, 0.0)];
    for op in [
        ComparisonOp::GreaterThan,
        ComparisonOp::GreaterThanOrEqual,
        ComparisonOp::LessThan,
        ComparisonOp::LessThanOrEqual,
        ComparisonOp::Equal,
        ComparisonOp::NotEqual,
    ] {
        let condition = Condition::compare("x", op, 1.0).expect("x exists");
        assert!(
            filter(&points, &condition)
                .iter()
                .all(|point| !point.x.is_nan()),
            "{op} kept a NaN field"
        );
    }
}

#[test]
fn functor_matches_hand_written_condition() {
    let points: Vec<PointXyz> = (0..50)
        .map(|i| PointXyz::new(i as f32, (i % 7) as f32, 0.0))
        .collect();
    let cloud = PointCloud::from_points(points.clone());
    let x = pointsift::FieldAccessor::new("x").expect("x exists");
    let y = pointsift::FieldAccessor::new("y").expect("y exists");
    let mid_x = cloud.bounds(&x).expect("finite").midpoint() as f32;
    let mid_y = cloud.bounds(&y).expect("finite").midpoint() as f32;

    let tree = ConditionBuilder::<PointXyz>::and()
        .greater_than("x", mid_x)
        .greater_than("y", mid_y)
        .build()
        .expect("fields exist");
    let functor = Condition::functor(move |p: &PointXyz| p.x > mid_x && p.y > mid_y);
    let naive: Vec<PointXyz> = points
        .iter()
        .filter(|p| p.x > mid_x && p.y > mid_y)
        .copied()
        .collect();

    assert!(!naive.is_empty());
    assert_eq!(filter(&points, &tree), naive);
    assert_eq!(filter(&points, &functor), naive);
}

#[test]
fn negation_follows_demorgan() {
    let mut points = sample();
    points.push(PointXy::new(f32::NAN, 5.0));
    let p = gt("x", 4.0);
    let q = gt("y", 4.0);

    let not_and = Condition::not(Condition::and([p.clone(), q.clone()]));
    let or_nots = Condition::or([Condition::not(p.clone()), Condition::not(q.clone())]);
    assert_eq!(filter(&points, &not_and), filter(&points, &or_nots));

    let pushed = Condition::and([p, q]).negate();
    assert_eq!(filter(&points, &pushed), filter(&points, &not_and));
}

#[test]
fn f64_literals_match_f32_fields_at_the_boundary() {
    let points = vec![PointXy::new(0.1, 0.0), PointXy::new(0.2, 0.0)];
    let gt = ConditionBuilder::<PointXy>::and()
        .greater_than("x", 0.1)
        .build()
        .expect("x exists");
    let eq = ConditionBuilder::<PointXy>::and()
        .equals("x", 0.1)
        .build()
        .expect("x exists");
    let ne = ConditionBuilder::<PointXy>::and()
        .not_equals("x", 0.1)
        .build()
        .expect("x exists");

    assert_eq!(filter(&points, &gt), vec![PointXy::new(0.2, 0.0)]);
    assert_eq!(filter(&points, &eq), vec![PointXy::new(0.1, 0.0)]);
    assert_eq!(filter(&points, &ne), vec![PointXy::new(0.2, 0.0)]);
}
