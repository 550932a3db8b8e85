use edgar_forms::{
    category_of, is_kept, keep_list, retain_kept, FilingCategory, FormCode, ALL_CATEGORIES,
    KEEP_LIST, PERIODIC_CATEGORIES,
};

#[test]
fn every_declared_code_is_non_empty() {
    for category in ALL_CATEGORIES {
        for form in category.forms() {
            assert!(
                !form.as_str().is_empty(),
                "empty code in category {category}"
            );
        }
    }
}

#[test]
fn combined_length_equals_sum_of_category_lengths() {
    let sum: usize = ALL_CATEGORIES
        .iter()
        .map(|category| category.forms().len())
        .sum();
    assert_eq!(KEEP_LIST.len(), sum);
    assert_eq!(KEEP_LIST.len(), 29);
}

#[test]
fn known_codes_are_kept() {
    for code in ["10-K", "10-K405", "DEF 14A", "S-1/A", "8-K12G3", "10KSB40/A"] {
        assert!(is_kept(code), "expected '{code}' on the keep list");
    }
}

#[test]
fn unrelated_codes_are_not_kept() {
    for code in ["4", "13F-HR", "SC 13D", "10-k", ""] {
        assert!(!is_kept(code), "did not expect '{code}' on the keep list");
    }
}

#[test]
fn combined_order_follows_category_declaration_order() {
    let expected: Vec<FormCode> = ALL_CATEGORIES
        .iter()
        .flat_map(|category| category.forms().iter().copied())
        .collect();
    assert_eq!(*KEEP_LIST, expected);

    // Annual block leads, its amendments follow, proxy statements close.
    assert_eq!(KEEP_LIST[0], FormCode::new("10-K"));
    assert_eq!(KEEP_LIST[5], FormCode::new("10-K/A"));
    assert_eq!(KEEP_LIST[22], FormCode::new("8-K"));
    assert_eq!(KEEP_LIST[28], FormCode::new("DEF 14A"));
}

#[test]
fn keep_list_iteration_is_idempotent() {
    let first: Vec<FormCode> = keep_list().collect();
    let second: Vec<FormCode> = keep_list().collect();
    assert_eq!(first, second);
}

#[test]
fn periodic_block_leads_the_keep_list() {
    let periodic_len: usize = PERIODIC_CATEGORIES
        .iter()
        .map(|category| category.forms().len())
        .sum();
    assert_eq!(periodic_len, 22);

    for form in KEEP_LIST.iter().take(periodic_len) {
        assert!(category_of(form.as_str()).unwrap().is_periodic());
    }
    for form in KEEP_LIST.iter().skip(periodic_len) {
        assert!(!category_of(form.as_str()).unwrap().is_periodic());
    }
}

#[test]
fn category_lookup_reports_declaring_category() {
    assert_eq!(
        category_of("10-Q/A"),
        Some(FilingCategory::QuarterlyReportAmendment)
    );
    assert_eq!(
        category_of("S-1"),
        Some(FilingCategory::RegistrationStatement)
    );
    assert_eq!(category_of("4"), None);
}

#[test]
fn retain_kept_filters_an_observed_stream() {
    let observed = ["10-K", "4", "10-Q", "S-1/A", "SC 13D", "8-K12B"];
    let (kept, summary) = retain_kept(observed);
    assert_eq!(kept, vec!["10-K", "10-Q", "S-1/A", "8-K12B"]);
    assert_eq!(summary.seen, 6);
    assert_eq!(summary.kept, 4);
    assert_eq!(summary.dropped, 2);
}

#[test]
fn category_blocks_serialize_as_string_arrays() {
    let json = serde_json::to_string(FilingCategory::RegistrationStatement.forms()).unwrap();
    assert_eq!(json, "[\"S-1\",\"S-1/A\"]");
}
