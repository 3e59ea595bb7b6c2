use std::sync::OnceLock;

use regex::Regex;

use super::domain::{ApplicantProfile, NormalizedFacts};

const CHILD_MARKERS: [&str; 3] = ["子", "こども", "子供"];
const SPOUSE_MARKERS: [&str; 3] = ["妻", "夫", "配偶者"];

fn digit_runs() -> &'static Regex {
    static DIGITS: OnceLock<Regex> = OnceLock::new();
    DIGITS.get_or_init(|| Regex::new("[0-9]+").expect("static digit pattern compiles"))
}

/// Derive the boolean and count facts the scorer and classifier consume.
pub fn normalize(profile: &ApplicantProfile) -> NormalizedFacts {
    let description = profile.family_structure.to_lowercase();

    let has_children = profile.has_children || mentions_any(&description, &CHILD_MARKERS);
    let children_count = if has_children {
        children_count(&description, profile.family_count)
    } else {
        0
    };

    NormalizedFacts {
        has_children,
        children_count,
        effective_age: profile.age.effective(),
    }
}

fn mentions_any(description: &str, markers: &[&str]) -> bool {
    markers.iter().any(|marker| description.contains(marker))
}

fn children_count(description: &str, family_count: u32) -> u32 {
    if let Some(run) = digit_runs().find(description) {
        // only overflow can fail here; the scorer caps at three anyway
        return run.as_str().parse::<u32>().unwrap_or(u32::MAX);
    }

    let adults = if mentions_any(description, &SPOUSE_MARKERS) {
        2
    } else {
        1
    };
    family_count.saturating_sub(adults).max(1)
}
