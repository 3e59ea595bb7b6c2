use super::super::domain::{AgeBracket, FamilySituation};

pub(crate) const SCORE_FLOOR: i64 = 40;
pub(crate) const NO_CHILDREN_FLOOR: i64 = 80;
pub(crate) const SCORE_CEILING: i64 = 100;

const MAX_COUNTED_CHILDREN: u32 = 3;

pub(crate) fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

pub(crate) fn age_bonus(bracket: AgeBracket) -> i64 {
    match bracket {
        AgeBracket::UnderThirty => 15,
        AgeBracket::Thirties => 10,
        AgeBracket::Forties => 8,
        AgeBracket::Fifties => 5,
        AgeBracket::SixtyPlus => 3,
    }
}

/// Family adjustment plus the re-floored base score it implies.
pub(crate) fn family_adjustment(situation: FamilySituation, scaled: i64) -> (i64, i64) {
    match situation {
        FamilySituation::WithChildren { count } => {
            let counted = i64::from(count.min(MAX_COUNTED_CHILDREN));
            let adjustment = -5 * counted;
            let minimum_with_children = 65 - 5 * counted;
            (adjustment, minimum_with_children.max(scaled + adjustment))
        }
        FamilySituation::Family => (5, scaled),
        FamilySituation::Single => (10, scaled),
    }
}

pub(crate) fn income_bonus(monthly_income: u64) -> i64 {
    match monthly_income {
        500_000.. => 10,
        300_000.. => 7,
        200_000.. => 5,
        _ => 3,
    }
}

pub(crate) fn savings_bonus(savings: u64, six_months_cost: u64) -> i64 {
    let ratio = savings as f64 / six_months_cost as f64;
    if ratio >= 1.0 {
        10
    } else if ratio >= 0.5 {
        7
    } else if ratio >= 0.25 {
        5
    } else {
        2
    }
}
