//! Integration tests for the validator facade.
//!
//! Covers the declaration styles, every execution entry point, and the
//! error/message views.

use formval::{FilterOutcome, StaticSubmission, ValidateError, Validator};

// -- input fields --------------------------------------------------------

#[test]
fn add_fields_using_constructor() {
    let fields = [("field_1", "field_1"), ("field_2", "field_3"), ("field_3", "field_3")];

    let valid = Validator::new(fields);
    let got = valid.get_fields();
    assert_eq!(got.len(), 3);
    assert_eq!(got["field_1"], "field_1");
    assert_eq!(got["field_2"], "field_3");
}

#[test]
fn add_fields_using_method_fields() {
    let mut valid = Validator::default();
    valid.fields([("field_1", "a"), ("field_2", "b")]);
    assert_eq!(valid.get_fields().len(), 2);
}

#[test]
fn rule_attachment_leaves_fields_unchanged() {
    let mut valid = Validator::new([("test", "test"), ("other", "x")]);
    valid.field("test").required().min_len(2);
    valid.field("other").alpha();

    let got = valid.get_fields();
    assert_eq!(got.len(), 2);
    assert_eq!(got["test"], "test");
    assert_eq!(got["other"], "x");
}

// -- declaring and running validation ------------------------------------

#[test]
fn run_validation_using_is_valid() {
    let mut valid = Validator::new([("test", "test")]);
    valid.field("test").required();
    assert!(valid.is_valid());
}

#[test]
fn vacuous_success_with_no_rules() {
    let mut valid = Validator::new([("test", "test"), ("other", "")]);
    assert!(valid.is_valid());
}

#[test]
fn run_validation_with_inline_builder() {
    let valid = Validator::new([("test1", "test"), ("test2", "test"), ("test3", "test")]);

    let ok = valid.is_valid_where(|mut pool| {
        pool.rule("test1").required();
        pool.rule("test2").required();
        pool.rule("test3").required();
        pool
    });
    assert!(ok);
}

#[test]
fn inline_builder_may_build_its_own_pool() {
    use formval::ValidPool;

    let valid = Validator::new([("test1", "test"), ("test2", "test")]);

    let ok = valid.is_valid_where(|_| {
        let mut pool = ValidPool::new();
        pool.rule("test1").required();
        pool.rule(["test2"]).required();
        pool
    });
    assert!(ok);
}

#[test]
fn inline_check_is_one_shot() {
    let mut valid = Validator::new([("test", "test")]);

    assert!(!valid.is_valid_where(|mut pool| {
        pool.rule("test").min_len(10);
        pool
    }));
    // the persistent pool never saw the inline rule
    assert!(valid.is_valid());
}

#[test]
fn multi_field_declaration_shares_one_chain() {
    let mut valid = Validator::new([("test", "test"), ("test2", "test")]);
    valid.field(["test", "test2"]).required();
    assert!(valid.is_valid());
}

#[test]
fn appending_to_a_shared_chain_affects_both_fields() {
    let mut valid = Validator::new([("test", "test"), ("test2", "test")]);

    let entry = valid.field(["test", "test2"]);
    entry.required();
    entry.min_len(5);

    let errors = valid.get_error();
    assert_eq!(errors.len(), 2);
    assert!(errors.contains_key("test"));
    assert!(errors.contains_key("test2"));
}

#[test]
fn validation_builder_combines_into_persistent_pool() {
    let mut valid = Validator::new([("test", "123"), ("d", "abc")]);

    valid.validation(|mut pool| {
        pool.rule("test").required();
        pool.rule("d").alpha();
        pool
    });

    assert!(valid.is_valid());
}

#[test]
fn make_constructor_declares_both_pools() {
    let mut valid = Validator::make(
        [("test", " test ")],
        |mut v| {
            v.rule("test").required();
            v
        },
        |mut f| {
            f.rule("test").trim();
            f
        },
    );

    assert!(valid.is_valid());
    assert_eq!(valid.filter_out()["test"], "test");
}

// -- is_error ------------------------------------------------------------

#[test]
fn is_error_is_the_negation_of_is_valid() {
    let mut valid = Validator::new([("test", "test")]);
    valid.field("test").required();

    assert!(!valid.is_error());
    assert_ne!(valid.is_error(), valid.is_valid());
}

#[test]
fn is_error_where_matches_inline_negation() {
    let valid = Validator::new([("test", "test")]);
    assert!(valid.is_error_where(|mut pool| {
        pool.rule("test").min_len(10);
        pool
    }));
}

// -- if_valid ------------------------------------------------------------

#[test]
fn if_valid_runs_success_branch() {
    let mut valid = Validator::new([("test", "test")]);
    valid.field("test").required();

    let mut ran = false;
    valid
        .if_valid(|| ran = true)
        .otherwise(|_| panic!("validation should pass"));
    assert!(ran);
}

#[test]
fn if_valid_hands_errors_to_failure_branch() {
    let mut valid = Validator::new([("test", "test")]);
    valid.field("test").min_len(5);

    let mut count = 0;
    valid
        .if_valid(|| panic!("validation should fail"))
        .otherwise(|errors| count = errors.len());
    assert_eq!(count, 1);
}

// -- valid_or_exception / valid_or_error ---------------------------------

#[test]
fn valid_or_exception_passes() {
    let mut valid = Validator::new([("test", "test")]);
    valid.field("test").required();
    assert!(valid.valid_or_exception().is_ok());
}

#[test]
fn valid_or_exception_default_message() {
    let mut valid = Validator::new([("test", "test")]);
    valid.field("test").required().min_len(5);

    let err = valid.valid_or_exception().unwrap_err();
    assert_eq!(err.to_string(), "vaildate if fallen");
}

#[test]
fn valid_or_exception_with_custom_error() {
    let mut valid = Validator::new([("test", "test")]);
    valid.field("test").min_len(5);

    let err = valid
        .valid_or_exception_with(ValidateError::message("form rejected"))
        .unwrap_err();
    assert_eq!(err.to_string(), "form rejected");
}

#[test]
fn valid_or_error_passes() {
    let mut valid = Validator::new([("test", "test")]);
    valid.field("test").required();
    assert!(valid.valid_or_error().is_ok());
}

#[test]
fn valid_or_error_returns_descriptors() {
    let mut valid = Validator::new([("test", "test")]);
    valid.field("test").required().min_len(5);

    let errors = valid.valid_or_error().unwrap_err();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].field, "test");
    assert_eq!(errors[0].code, "min_len");
}

// -- filtering -----------------------------------------------------------

#[test]
fn run_filter_using_filter_out() {
    let mut valid = Validator::new([("test", "test")]);
    valid.filter("test").upper_case();
    assert_eq!(valid.filter_out()["test"], "TEST");
}

#[test]
fn multi_field_filter_declaration() {
    let mut valid = Validator::new([("test", " test "), ("test2", " test ")]);
    valid.field(["test", "test2"]).required();
    valid.filter(["test", "test2"]).trim();

    let filtered = valid.filter_out();
    assert_eq!(filtered["test"], "test");
    assert_eq!(filtered["test2"], "test");
}

#[test]
fn filters_builder_combines_into_persistent_pool() {
    let mut valid = Validator::new([("test", " test "), ("test2", " test ")]);
    valid.filters(|mut pool| {
        pool.rule("test").trim();
        pool.rule("test2").trim();
        pool
    });

    let filtered = valid.filter_out();
    assert_eq!(filtered["test"], "test");
    assert_eq!(filtered["test2"], "test");
}

#[test]
fn inline_filter_with_patch_semantics() {
    let valid = Validator::new([("test1", "test"), ("test2", " test "), ("test3", "TEST")]);

    let filtered = valid.filter_out_where(|mut pool| {
        pool.rule("test1").upper_case();
        pool.rule("test2").trim();
        pool.rule("test3").lower_case();
        pool
    });

    assert_eq!(filtered["test1"], "TEST");
    assert_eq!(filtered["test2"], "test");
    assert_eq!(filtered["test3"], "test");
}

#[test]
fn inline_filter_leaves_untouched_fields_raw() {
    let mut valid = Validator::new([("touched", " x "), ("raw", " y ")]);
    // a persistent filter exists for "raw", but patch mode must ignore it
    valid.filter("raw").trim();

    let filtered = valid.filter_out_where(|mut pool| {
        pool.rule("touched").trim();
        pool
    });

    assert_eq!(filtered["touched"], "x");
    assert_eq!(filtered["raw"], " y ");
}

#[test]
fn failed_or_filter_filters_on_success() {
    let mut valid = Validator::new([("test", "test")]);
    valid.field("test").required();
    valid.filter("test").upper_case();

    assert_eq!(
        valid.failed_or_filter(),
        FilterOutcome::Filtered([("test".to_string(), "TEST".to_string())].into_iter().collect())
    );
}

#[test]
fn failed_or_filter_reports_failure() {
    let mut valid = Validator::new([("test", "test")]);
    valid.field("test").min_len(5);
    valid.filter("test").upper_case();

    assert_eq!(valid.failed_or_filter(), FilterOutcome::Failed);
}

#[test]
fn failed_or_filter_with_empty_filter_pool_returns_input_unchanged() {
    let mut valid = Validator::new([("test", "test")]);

    match valid.failed_or_filter() {
        FilterOutcome::Filtered(fields) => assert_eq!(fields, *valid.get_fields()),
        FilterOutcome::Failed => panic!("no rules means vacuous success"),
    }
}

// -- error map -----------------------------------------------------------

#[test]
fn get_error_has_one_entry_per_failing_field() {
    let mut valid = Validator::new([("test", "test")]);
    valid.field("test").required().min_len(5);

    let errors = valid.get_error();
    assert_eq!(errors.len(), 1);
    assert!(errors.contains_key("test"));
}

#[test]
fn get_error_is_memoized_until_rules_change() {
    let mut valid = Validator::new([("test", "test")]);
    valid.field("test").min_len(5);

    let first = valid.get_error();
    let second = valid.get_error();
    assert_eq!(first, second);

    // attaching a rule forces re-execution with the new chain
    valid.field("test").not().numeric();
    let third = valid.get_error();
    assert_eq!(third.len(), 1);
}

#[test]
fn message_overrides_apply_to_error_map() {
    let mut valid = Validator::new([("test", "test")]);
    valid.field("test").min_len(5);

    valid.messages().field("test", "way too short");
    assert_eq!(valid.get_error()["test"], "way too short");
}

#[test]
fn later_message_pools_win() {
    let mut valid = Validator::new([("test", "test")]);
    valid.field("test").min_len(5);

    valid.messages().field("test", "first");
    valid.messages().field("test", "second");
    assert_eq!(valid.get_error()["test"], "second");
}

#[test]
fn per_operation_message_wins_over_template() {
    let mut valid = Validator::new([("test", "test")]);
    valid.field("test").min_len(5).message("give me five");
    assert_eq!(valid.get_error()["test"], "give me five");
}

#[test]
fn lang_changes_template_language() {
    let mut valid = Validator::new([("nama", "")]);
    valid.lang("id");
    valid.field("nama").required();

    assert_eq!(valid.get_error()["nama"], "Kolom nama wajib diisi");
}

// -- only / except -------------------------------------------------------

#[test]
fn only_ignores_other_fields_entirely() {
    let mut valid = Validator::new([("a", ""), ("b", "x")]);
    valid.field("a").required();
    valid.field("b").min_len(10);

    valid.only(["b"]);
    assert!(!valid.is_valid());
    let errors = valid.get_error();
    assert_eq!(errors.len(), 1);
    assert!(errors.contains_key("b"));
}

#[test]
fn except_skips_excluded_fields() {
    let mut valid = Validator::new([("a", ""), ("b", "x")]);
    valid.field("a").required();
    valid.field("b").required();

    valid.except(["a"]);
    assert!(valid.is_valid());
}

// -- negated rules -------------------------------------------------------

#[test]
fn negated_rule_composes_with_the_same_machinery() {
    let mut valid = Validator::new([("name", "abc")]);
    valid.field("name").required().not().numeric();
    assert!(valid.is_valid());

    let mut valid = Validator::new([("name", "42")]);
    valid.field("name").required().not().numeric();
    assert!(!valid.is_valid());
    assert_eq!(valid.get_error()["name"], "The name field must be a number");
}

// -- raw rule strings ----------------------------------------------------

#[test]
fn raw_rule_string_declaration() {
    let mut valid = Validator::new([("test", "test")]);
    valid.field("test").raw("required|min_len,5").unwrap();

    assert!(!valid.is_valid());
    assert_eq!(valid.get_error().len(), 1);
}

#[test]
fn raw_unknown_rule_is_a_usage_error() {
    let mut valid = Validator::new([("test", "test")]);
    let err = valid.field("test").raw("required|bogus").unwrap_err();
    assert_eq!(err.to_string(), "unknown validation rule `bogus`");
}

// -- submission ----------------------------------------------------------

#[test]
fn submitted_uses_the_injected_detector() {
    let valid = Validator::new([("test", "test")]).with_detector(StaticSubmission(true));
    assert!(valid.submitted());

    let valid = Validator::new([("test", "test")]).with_detector(StaticSubmission(false));
    assert!(!valid.submitted());
}

#[test]
fn passed_requires_validity_and_submission() {
    let mut valid = Validator::new([("test", "test")]).with_detector(StaticSubmission(true));
    valid.field("test").required();
    assert!(valid.passed());
    assert!(!valid.fails());

    let mut valid = Validator::new([("test", "test")]).with_detector(StaticSubmission(false));
    valid.field("test").required();
    assert!(!valid.passed());
    assert!(valid.fails());

    let mut valid = Validator::new([("test", "test")]).with_detector(StaticSubmission(true));
    valid.field("test").min_len(5);
    assert!(!valid.passed());
    assert!(valid.fails());
}
