use serde::{Deserialize, Serialize};

use super::advice::{self, AdviceRequest, AdviceSection};
use super::classification::classify;
use super::domain::{ApplicantProfile, ClassificationTiers, NormalizedFacts, ScoreResult};
use super::normalizer::normalize;
use super::scoring::{self, ScoreBreakdown};

/// Full result of one assessment; recomputed from the profile every time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assessment {
    pub score: ScoreResult,
    pub breakdown: ScoreBreakdown,
    pub facts: NormalizedFacts,
    pub tiers: ClassificationTiers,
    pub raw_advice: String,
    /// Parsed from `raw_advice` and sorted by display priority.
    pub sections: Vec<AdviceSection>,
}

impl Assessment {
    /// Run normalize, score, classify, compose and order for a validated profile.
    pub fn evaluate(profile: &ApplicantProfile) -> Self {
        let facts = normalize(profile);
        let card = scoring::score(
            profile.savings,
            profile.monthly_income,
            profile.family_count,
            &facts,
        );
        let tiers = classify(
            profile.savings,
            profile.monthly_income,
            profile.family_count,
            &facts,
        );

        let composed = advice::compose(&AdviceRequest {
            age: profile.age,
            family_count: profile.family_count,
            savings: profile.savings,
            monthly_income: profile.monthly_income,
            facts: &facts,
            tiers: &tiers,
        });
        let raw_advice = composed.document();
        let sections = advice::parse_and_order(&raw_advice);

        Self {
            score: card.result,
            breakdown: card.breakdown,
            facts,
            tiers,
            raw_advice,
            sections,
        }
    }

    pub fn status_label(&self) -> &'static str {
        self.score.status.label()
    }
}
