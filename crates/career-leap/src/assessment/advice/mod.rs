//! Advisory document composition.
//!
//! Sections are built in a fixed construction order and serialized as
//! `【title】\nbody` units separated by blank lines. [`parser`] reads that
//! text back and orders it for display.

mod blocks;
pub mod parser;

use serde::{Deserialize, Serialize};

use super::domain::{
    AgeBracket, ApplicantAge, ClassificationTiers, FamilySituation, LivingCostTargets,
    NormalizedFacts, RiskProfile,
};

pub use parser::{order_sections, parse_and_order, parse_document};

pub(crate) const TITLE_OPEN: char = '【';
pub(crate) const TITLE_CLOSE: char = '】';

/// Identity of an advice section, assigned when the section is composed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    SpecialMessage,
    FundingGoal,
    IncomeAdvice,
    FamilyAdvice,
    LowSavings,
    CareerComparison,
    ActionSteps,
    AgeAdvice,
    Unrecognized,
}

/// Title fragments used to recover a kind from rendered text, in match order.
const TITLE_KEYS: [(&str, SectionKind); 10] = [
    ("あなたへの特別", SectionKind::SpecialMessage),
    ("資金目標", SectionKind::FundingGoal),
    ("月収に応じた", SectionKind::IncomeAdvice),
    ("子育て世帯向け", SectionKind::FamilyAdvice),
    ("家族構成", SectionKind::FamilyAdvice),
    ("単身者向け", SectionKind::FamilyAdvice),
    ("貯蓄が少なくても", SectionKind::LowSavings),
    ("サラリーマン", SectionKind::CareerComparison),
    ("具体的な行動", SectionKind::ActionSteps),
    ("年代別", SectionKind::AgeAdvice),
];

impl SectionKind {
    /// Display priority; lower sorts first.
    pub const fn priority(self) -> u8 {
        match self {
            SectionKind::SpecialMessage => 1,
            SectionKind::FundingGoal => 2,
            SectionKind::IncomeAdvice => 3,
            SectionKind::FamilyAdvice => 4,
            SectionKind::LowSavings => 5,
            SectionKind::CareerComparison => 6,
            SectionKind::ActionSteps => 7,
            SectionKind::AgeAdvice | SectionKind::Unrecognized => 99,
        }
    }

    pub fn from_title(title: &str) -> Self {
        TITLE_KEYS
            .iter()
            .find(|(key, _)| title.contains(key))
            .map(|(_, kind)| *kind)
            .unwrap_or(SectionKind::Unrecognized)
    }
}

/// One titled block of advice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdviceSection {
    pub kind: SectionKind,
    pub title: String,
    pub body: String,
}

impl AdviceSection {
    pub(crate) fn new(kind: SectionKind, title: &str, body: String) -> Self {
        Self {
            kind,
            title: title.to_string(),
            body,
        }
    }

    fn render(&self) -> String {
        format!("{TITLE_OPEN}{}{TITLE_CLOSE}\n{}", self.title, self.body)
    }
}

/// Everything the composer reads; no other state participates.
#[derive(Debug, Clone, Copy)]
pub struct AdviceRequest<'a> {
    pub age: ApplicantAge,
    pub family_count: u32,
    pub savings: u64,
    pub monthly_income: u64,
    pub facts: &'a NormalizedFacts,
    pub tiers: &'a ClassificationTiers,
}

/// Sections in construction order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComposedAdvice {
    pub sections: Vec<AdviceSection>,
}

impl ComposedAdvice {
    /// Serialize to the delimited text consumed by [`parse_document`].
    pub fn document(&self) -> String {
        self.sections
            .iter()
            .map(AdviceSection::render)
            .collect::<Vec<_>>()
            .join("\n\n")
            .trim()
            .to_string()
    }
}

pub fn compose(request: &AdviceRequest<'_>) -> ComposedAdvice {
    let targets = LivingCostTargets::for_household(request.monthly_income, request.family_count);
    let situation = FamilySituation::resolve(request.facts, request.family_count);
    let income = request.tiers.income_level;
    let age_bracket = request.age.specified().map(AgeBracket::of);

    let mut sections = Vec::with_capacity(8);

    sections.push(blocks::funding_goal(
        &targets,
        request.savings,
        request.monthly_income,
    ));

    if let Some(bracket) = age_bracket {
        sections.push(blocks::age_advice(bracket));
    }

    sections.push(blocks::income_advice(income));
    sections.push(blocks::family_advice(situation));

    if request.savings < targets.three_months {
        sections.push(blocks::low_savings(income, situation.has_children()));
    }

    sections.push(blocks::career_comparison(situation.has_children()));
    sections.push(blocks::special_message(encouragement_for(
        request.tiers.risk_profile,
        situation.has_children(),
    )));
    sections.push(blocks::action_steps(
        income,
        situation.has_children(),
        age_bracket,
    ));

    ComposedAdvice { sections }
}

/// Which encouragement message applies; earlier arms win.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Encouragement {
    HighestRisk,
    HighRisk,
    ParentsSteady,
    Steady,
}

pub(crate) fn encouragement_for(risk: RiskProfile, has_children: bool) -> Encouragement {
    match (risk, has_children) {
        (RiskProfile::Highest, _) => Encouragement::HighestRisk,
        (RiskProfile::High, _) => Encouragement::HighRisk,
        (_, true) => Encouragement::ParentsSteady,
        (_, false) => Encouragement::Steady,
    }
}

pub(crate) fn format_yen(amount: u64) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped.push('円');
    grouped
}
