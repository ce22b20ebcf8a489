//! Integration tests for worst-case severity evaluation

use icinga_perfdata::{Field, Record, Severity, Tags, exit_code, marshal};

fn gauge_tags() -> Tags {
    Tags::new().warn("10").crit("20").min("0").max("100")
}

struct Simple {
    warning: f64,
}

impl Record for Simple {
    fn fields(&self) -> Vec<Field<'_>> {
        vec![Field::leaf("Warning", self.warning).with_tags(gauge_tags())]
    }
}

struct Complex {
    warning: f64,
    sub: Simple,
}

impl Record for Complex {
    fn fields(&self) -> Vec<Field<'_>> {
        vec![
            Field::leaf("Warning", self.warning).with_tags(gauge_tags()),
            Field::record("Sub", &self.sub),
        ]
    }
}

/// Same shape as [`Complex`] with the field declaration order flipped.
struct ComplexFlipped {
    warning: f64,
    sub: Simple,
}

impl Record for ComplexFlipped {
    fn fields(&self) -> Vec<Field<'_>> {
        vec![
            Field::record("Sub", &self.sub),
            Field::leaf("Warning", self.warning).with_tags(gauge_tags()),
        ]
    }
}

#[test]
fn test_simple_grid() {
    let cases = [
        (5.0, Severity::Ok),
        (15.0, Severity::Warning),
        (25.0, Severity::Critical),
        (150.0, Severity::Critical), // over max
        (-50.0, Severity::Critical), // under min
    ];

    for (warning, want) in cases {
        let got = exit_code(&Simple { warning }).unwrap();
        assert_eq!(got, want, "Warning={warning}");
    }
}

#[test]
fn test_complex_grid_inner_leaf_can_dominate() {
    let cases = [
        (5.0, 5.0, Severity::Ok),
        (15.0, 5.0, Severity::Warning),
        (25.0, 5.0, Severity::Critical),
        (5.0, 15.0, Severity::Warning),
        (5.0, 25.0, Severity::Critical),
        (15.0, 15.0, Severity::Warning),
        (25.0, 25.0, Severity::Critical),
        (25.0, 15.0, Severity::Critical),
        (15.0, 25.0, Severity::Critical),
    ];

    for (outer, inner, want) in cases {
        let record = Complex {
            warning: outer,
            sub: Simple { warning: inner },
        };
        let got = exit_code(&record).unwrap();
        assert_eq!(got, want, "outer={outer} inner={inner}");
    }
}

#[test]
fn test_severity_is_declaration_order_invariant() {
    for (outer, inner) in [(5.0, 5.0), (15.0, 5.0), (5.0, 25.0), (25.0, 15.0)] {
        let record = Complex {
            warning: outer,
            sub: Simple { warning: inner },
        };
        let flipped = ComplexFlipped {
            warning: outer,
            sub: Simple { warning: inner },
        };

        assert_eq!(exit_code(&record).unwrap(), exit_code(&flipped).unwrap(), "outer={outer} inner={inner}");
        // Rendering order, by contrast, follows declaration order.
        assert_ne!(marshal(&record), marshal(&flipped));
    }
}

#[test]
fn test_malformed_thresholds_fail_the_whole_call() {
    struct Malformed {
        tags: Tags,
    }

    impl Record for Malformed {
        fn fields(&self) -> Vec<Field<'_>> {
            vec![Field::leaf("Warning", 5.0).with_tags(self.tags.clone())]
        }
    }

    let cases = [
        Tags::new().warn("af").crit("5").min("5").max("5"),
        Tags::new().warn("5").crit("af").min("5").max("15"),
        Tags::new().warn("5").crit("5").min("af").max("5"),
        Tags::new().warn("5").crit("5").min("5").max("af"),
    ];

    for tags in cases {
        let result = exit_code(&Malformed { tags: tags.clone() });
        assert!(result.is_err(), "expected error for {tags:?}");
    }
}

#[test]
fn test_malformed_threshold_in_nested_record_fails() {
    struct BadInner;

    impl Record for BadInner {
        fn fields(&self) -> Vec<Field<'_>> {
            vec![Field::leaf("Warning", 5.0).with_tags(Tags::new().max("af"))]
        }
    }

    struct Outer {
        inner: BadInner,
    }

    impl Record for Outer {
        fn fields(&self) -> Vec<Field<'_>> {
            // A healthy leaf first; the nested failure must still abort the call.
            vec![Field::leaf("Healthy", 1.0).with_tags(gauge_tags()), Field::record("Inner", &self.inner)]
        }
    }

    assert!(exit_code(&Outer { inner: BadInner }).is_err());
}

#[test]
fn test_fields_without_tags_never_raise_the_aggregate() {
    struct Mixed {
        with_tags: f64,
        without_tags: f64,
        warn_crit: f64,
        min_max: f64,
    }

    impl Record for Mixed {
        fn fields(&self) -> Vec<Field<'_>> {
            vec![
                Field::leaf("WithTags", self.with_tags).with_tags(gauge_tags()),
                Field::leaf("WithoutTags", self.without_tags),
                Field::leaf("WarnCrit", self.warn_crit).with_tags(Tags::new().warn("10").crit("20")),
                Field::leaf("MinMax", self.min_max).with_tags(Tags::new().min("0").max("100")),
            ]
        }
    }

    let cases = [
        (Mixed { with_tags: 5.0, without_tags: 5.0, warn_crit: 5.0, min_max: 5.0 }, Severity::Ok),
        (Mixed { with_tags: 50.0, without_tags: 5.0, warn_crit: 5.0, min_max: 5.0 }, Severity::Critical),
        (Mixed { with_tags: 5.0, without_tags: 500.0, warn_crit: 5.0, min_max: 5.0 }, Severity::Ok),
        (Mixed { with_tags: 5.0, without_tags: 5.0, warn_crit: 500.0, min_max: 5.0 }, Severity::Critical),
        (Mixed { with_tags: 5.0, without_tags: 5.0, warn_crit: 5.0, min_max: 500.0 }, Severity::Critical),
    ];

    for (record, want) in cases {
        assert_eq!(exit_code(&record).unwrap(), want);
    }
}

#[test]
fn test_absent_optional_scalar_is_skipped_silently() {
    struct OptionalGauge {
        warning: Option<f64>,
    }

    impl Record for OptionalGauge {
        fn fields(&self) -> Vec<Field<'_>> {
            vec![Field::optional_leaf("Warning", self.warning).with_tags(gauge_tags())]
        }
    }

    assert_eq!(exit_code(&OptionalGauge { warning: None }).unwrap(), Severity::Ok);
    assert_eq!(exit_code(&OptionalGauge { warning: Some(12.12) }).unwrap(), Severity::Warning);
}

#[test]
fn test_absent_optional_record_is_skipped_silently() {
    struct MaybeSub {
        sub: Option<Simple>,
    }

    impl Record for MaybeSub {
        fn fields(&self) -> Vec<Field<'_>> {
            vec![Field::optional_record("Sub", self.sub.as_ref())]
        }
    }

    assert_eq!(exit_code(&MaybeSub { sub: None }).unwrap(), Severity::Ok);
    assert_eq!(exit_code(&MaybeSub { sub: Some(Simple { warning: 25.0 }) }).unwrap(), Severity::Critical);
}

#[test]
fn test_untagged_text_leaves_are_not_evaluated() {
    struct Check {
        status: String,
        memory: i64,
    }

    impl Record for Check {
        fn fields(&self) -> Vec<Field<'_>> {
            vec![
                Field::leaf("Status", self.status.as_str()),
                Field::leaf("Memory", self.memory)
                    .with_tags(Tags::new().uom("MiB").warn("800").crit("1024").min("64").max("2048")),
            ]
        }
    }

    let check = Check {
        status: "WARN".to_string(),
        memory: 1024,
    };

    assert_eq!(exit_code(&check).unwrap(), Severity::Critical);
}

#[test]
fn test_zero_leaf_record_is_ok() {
    struct Empty;

    impl Record for Empty {
        fn fields(&self) -> Vec<Field<'_>> {
            Vec::new()
        }
    }

    assert_eq!(exit_code(&Empty).unwrap(), Severity::Ok);
}

#[test]
fn test_private_fields_are_never_evaluated() {
    struct WithPrivate {
        broken: f64,
    }

    impl Record for WithPrivate {
        fn fields(&self) -> Vec<Field<'_>> {
            // Malformed tags on a private field must not surface.
            vec![Field::leaf("broken", self.broken).with_tags(Tags::new().warn("af")).private()]
        }
    }

    assert_eq!(exit_code(&WithPrivate { broken: 5.0 }).unwrap(), Severity::Ok);
}

#[test]
fn test_exit_codes_map_to_plugin_conventions() {
    assert_eq!(exit_code(&Simple { warning: 5.0 }).unwrap().code(), 0);
    assert_eq!(exit_code(&Simple { warning: 15.0 }).unwrap().code(), 1);
    assert_eq!(exit_code(&Simple { warning: 25.0 }).unwrap().code(), 2);
    assert_eq!(Severity::Unknown.code(), 3);
}
