use serde::{Deserialize, Serialize};

/// Identifier wrapper for persisted assessments.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AssessmentId(pub String);

/// Age used for scoring when the applicant leaves it blank.
pub const DEFAULT_SCORING_AGE: u32 = 35;

/// Applicant age where a raw `0` means the field was left blank.
///
/// The raw value is kept wide so implausible ages survive deserialization and
/// are rejected by the input guard with a proper violation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "u32", into = "u32")]
pub enum ApplicantAge {
    Unspecified,
    Years(u32),
}

impl ApplicantAge {
    pub const fn from_raw(raw: u32) -> Self {
        if raw == 0 {
            Self::Unspecified
        } else {
            Self::Years(raw)
        }
    }

    pub const fn raw(self) -> u32 {
        match self {
            Self::Unspecified => 0,
            Self::Years(years) => years,
        }
    }

    pub const fn specified(self) -> Option<u32> {
        match self {
            Self::Unspecified => None,
            Self::Years(years) => Some(years),
        }
    }

    /// Age fed to the scorer; blank ages score as [`DEFAULT_SCORING_AGE`].
    pub const fn effective(self) -> u32 {
        match self {
            Self::Unspecified => DEFAULT_SCORING_AGE,
            Self::Years(years) => years,
        }
    }
}

impl From<u32> for ApplicantAge {
    fn from(value: u32) -> Self {
        Self::from_raw(value)
    }
}

impl From<ApplicantAge> for u32 {
    fn from(value: ApplicantAge) -> Self {
        value.raw()
    }
}

/// Age brackets shared by the score bonus, the age advice and the age action steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgeBracket {
    UnderThirty,
    Thirties,
    Forties,
    Fifties,
    SixtyPlus,
}

impl AgeBracket {
    pub const fn of(years: u32) -> Self {
        match years {
            0..=29 => Self::UnderThirty,
            30..=39 => Self::Thirties,
            40..=49 => Self::Forties,
            50..=59 => Self::Fifties,
            _ => Self::SixtyPlus,
        }
    }
}

/// Raw applicant input as submitted by a form, API client or CSV row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicantProfile {
    pub family_structure: String,
    pub family_count: u32,
    #[serde(default = "unspecified_age")]
    pub age: ApplicantAge,
    pub savings: u64,
    pub monthly_income: u64,
    #[serde(default)]
    pub has_children: bool,
}

fn unspecified_age() -> ApplicantAge {
    ApplicantAge::Unspecified
}

/// Facts re-derived from the raw profile on every assessment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedFacts {
    pub has_children: bool,
    /// Zero whenever `has_children` is false.
    pub children_count: u32,
    pub effective_age: u32,
}

/// Household shape; exactly one variant applies per assessment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum FamilySituation {
    WithChildren { count: u32 },
    Family,
    Single,
}

impl FamilySituation {
    pub const fn resolve(facts: &NormalizedFacts, family_count: u32) -> Self {
        if facts.has_children {
            Self::WithChildren {
                count: facts.children_count,
            }
        } else if family_count > 1 {
            Self::Family
        } else {
            Self::Single
        }
    }

    pub const fn has_children(self) -> bool {
        matches!(self, Self::WithChildren { .. })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IncomeLevel {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SavingsLevel {
    Low,
    Medium,
    High,
}

/// Composite readiness tier; `Highest` is the most exposed household.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskProfile {
    Highest,
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationTiers {
    pub income_level: IncomeLevel,
    pub savings_level: SavingsLevel,
    pub risk_profile: RiskProfile,
}

/// Coarse bucket of the readiness score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReadinessStatus {
    Considering,
    Ready,
    Optimal,
}

impl ReadinessStatus {
    pub const fn from_score(score: u8) -> Self {
        match score {
            0..=40 => Self::Considering,
            41..=70 => Self::Ready,
            _ => Self::Optimal,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            ReadinessStatus::Considering => "検討段階",
            ReadinessStatus::Ready => "準備OK",
            ReadinessStatus::Optimal => "絶好のタイミング",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreResult {
    pub score: u8,
    pub status: ReadinessStatus,
}

/// Emergency-fund benchmarks derived from income and household size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LivingCostTargets {
    pub three_months: u64,
    pub six_months: u64,
}

impl LivingCostTargets {
    pub const fn for_household(monthly_income: u64, family_count: u32) -> Self {
        let three_months = monthly_income
            .saturating_mul(family_count as u64)
            .saturating_mul(3);
        Self {
            three_months,
            six_months: three_months.saturating_mul(2),
        }
    }
}
