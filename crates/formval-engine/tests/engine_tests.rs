//! Integration tests for the engine execution primitive, driving it the
//! way the fluent layer does: string-notation chains parsed into rulesets.

use formval_engine::{parse_checks, parse_transforms, Engine, FilterSet, InputMap, Op, Ruleset};

fn input(pairs: &[(&str, &str)]) -> InputMap {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

fn ruleset(pairs: &[(&str, &str)]) -> Ruleset {
    pairs
        .iter()
        .map(|(field, raw)| {
            let chain = parse_checks(raw)
                .expect("test chains parse")
                .into_iter()
                .map(Op::new)
                .collect();
            (field.to_string(), chain)
        })
        .collect()
}

fn filterset(pairs: &[(&str, &str)]) -> FilterSet {
    pairs
        .iter()
        .map(|(field, raw)| {
            (
                field.to_string(),
                parse_transforms(raw).expect("test chains parse"),
            )
        })
        .collect()
}

#[test]
fn passing_input_yields_no_errors() {
    let engine = Engine::new();
    let errors = engine.validate(
        &input(&[("email", "test@example.com"), ("age", "30")]),
        &ruleset(&[("email", "required|valid_email"), ("age", "required|integer")]),
    );
    assert!(errors.is_empty());
}

#[test]
fn errors_follow_ruleset_order() {
    let engine = Engine::new();
    let errors = engine.validate(
        &input(&[("b", ""), ("a", "")]),
        &ruleset(&[("b", "required"), ("a", "required")]),
    );

    let fields: Vec<_> = errors.iter().map(|e| e.field.as_str()).collect();
    assert_eq!(fields, vec!["b", "a"]);
}

#[test]
fn rendered_messages_interpolate_parameters() {
    let engine = Engine::new();
    let errors = engine.validate(
        &input(&[("username", "ab")]),
        &ruleset(&[("username", "min_len,3")]),
    );
    assert_eq!(
        errors[0].message,
        "The username field needs to be at least 3 characters"
    );
}

#[test]
fn filter_chains_compose() {
    let engine = Engine::new();
    let output = engine.filter(
        &input(&[("title", "  Hello World  ")]),
        &filterset(&[("title", "trim|slug")]),
    );
    assert_eq!(output["title"], "hello-world");
}

#[test]
fn validate_then_filter_round() {
    let engine = Engine::new();
    let fields = input(&[("test", " test "), ("test2", " test ")]);

    let errors = engine.validate(&fields, &ruleset(&[("test", "required")]));
    assert!(errors.is_empty());

    let output = engine.filter(&fields, &filterset(&[("test", "trim"), ("test2", "trim")]));
    assert_eq!(output["test"], "test");
    assert_eq!(output["test2"], "test");
}
