mod rules;

use serde::{Deserialize, Serialize};

use super::domain::{
    AgeBracket, FamilySituation, LivingCostTargets, NormalizedFacts, ReadinessStatus, ScoreResult,
};
use rules::{
    age_bonus, family_adjustment, income_bonus, round_half_up, savings_bonus, NO_CHILDREN_FLOOR,
    SCORE_CEILING, SCORE_FLOOR,
};

/// Intermediate values of a score calculation, kept for audits.
///
/// `family_adjustment` is applied twice for households with children: once when
/// `scaled` is re-floored and again in the final sum. Both applications are
/// visible here.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub base_ratio: f64,
    pub scaled: i64,
    pub age_bonus: i64,
    pub family_adjustment: i64,
    pub income_bonus: i64,
    pub savings_bonus: i64,
}

impl ScoreBreakdown {
    pub fn total(&self) -> i64 {
        self.scaled
            + self.age_bonus
            + self.family_adjustment
            + self.income_bonus
            + self.savings_bonus
    }
}

/// Score paired with the breakdown that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreCard {
    pub result: ScoreResult,
    pub breakdown: ScoreBreakdown,
}

/// Compute the readiness score.
///
/// Callers must guarantee `monthly_income >= 1` and `family_count >= 1`.
pub fn score(
    savings: u64,
    monthly_income: u64,
    family_count: u32,
    facts: &NormalizedFacts,
) -> ScoreCard {
    let household_income = monthly_income as f64 * f64::from(family_count);
    let base_ratio = savings as f64 / household_income;

    let scaled = round_half_up(base_ratio * 100.0 / 3.0).min(SCORE_CEILING as f64) as i64;
    let scaled = scaled.max(SCORE_FLOOR);

    let age_bonus = age_bonus(AgeBracket::of(facts.effective_age));

    let situation = FamilySituation::resolve(facts, family_count);
    let (family_adjustment, scaled) = family_adjustment(situation, scaled);

    let income_bonus = income_bonus(monthly_income);
    let six_months_cost = LivingCostTargets::for_household(monthly_income, family_count).six_months;
    let savings_bonus = savings_bonus(savings, six_months_cost);

    let breakdown = ScoreBreakdown {
        base_ratio,
        scaled,
        age_bonus,
        family_adjustment,
        income_bonus,
        savings_bonus,
    };

    let mut total = breakdown.total();
    if !facts.has_children {
        total = total.max(NO_CHILDREN_FLOOR);
    }
    let score = total.clamp(0, SCORE_CEILING) as u8;

    ScoreCard {
        result: ScoreResult {
            score,
            status: ReadinessStatus::from_score(score),
        },
        breakdown,
    }
}
