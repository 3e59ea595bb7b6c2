use super::common::*;
use crate::assessment::normalizer::normalize;

#[test]
fn detects_children_from_text_even_when_flag_is_false() {
    let facts = normalize(&profile("妻と子2人", 4, 40, 0, 300_000));

    assert!(facts.has_children);
    assert_eq!(facts.children_count, 2);
}

#[test]
fn flag_alone_marks_children_and_falls_back_to_household_size() {
    let mut single = profile("独身", 1, 0, 0, 300_000);
    single.has_children = true;

    let facts = normalize(&single);

    assert!(facts.has_children);
    assert_eq!(facts.children_count, 1);
}

#[test]
fn spouse_marker_removes_two_adults_from_fallback_count() {
    let facts = normalize(&profile("夫と子供", 4, 0, 0, 300_000));
    assert_eq!(facts.children_count, 2);

    let facts = normalize(&profile("妻とこども", 3, 0, 0, 300_000));
    assert_eq!(facts.children_count, 1);

    let facts = normalize(&profile("配偶者と子", 2, 0, 0, 300_000));
    assert_eq!(facts.children_count, 1);
}

#[test]
fn first_digit_run_wins() {
    let facts = normalize(&profile("子12人と犬3匹", 14, 0, 0, 300_000));
    assert_eq!(facts.children_count, 12);

    let facts = normalize(&profile("子0人", 1, 0, 0, 300_000));
    assert!(facts.has_children);
    assert_eq!(facts.children_count, 0);
}

#[test]
fn children_count_is_zero_without_children() {
    let facts = normalize(&profile("妻と2人暮らし", 2, 0, 0, 300_000));

    assert!(!facts.has_children);
    assert_eq!(facts.children_count, 0);
}

#[test]
fn blank_age_scores_as_thirty_five() {
    assert_eq!(normalize(&single_profile()).effective_age, 35);
    assert_eq!(normalize(&parent_profile()).effective_age, 32);
}
