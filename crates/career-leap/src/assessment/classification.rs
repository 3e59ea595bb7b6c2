use super::domain::{
    ClassificationTiers, IncomeLevel, LivingCostTargets, NormalizedFacts, RiskProfile,
    SavingsLevel,
};

const LOW_INCOME_CEILING: u64 = 250_000;
const MEDIUM_INCOME_CEILING: u64 = 500_000;

pub fn classify(
    savings: u64,
    monthly_income: u64,
    family_count: u32,
    facts: &NormalizedFacts,
) -> ClassificationTiers {
    let targets = LivingCostTargets::for_household(monthly_income, family_count);
    let income_level = income_level(monthly_income);
    let savings_level = savings_level(savings, targets.three_months);

    ClassificationTiers {
        income_level,
        savings_level,
        risk_profile: risk_profile(facts.has_children, savings_level, income_level),
    }
}

pub(crate) fn income_level(monthly_income: u64) -> IncomeLevel {
    if monthly_income < LOW_INCOME_CEILING {
        IncomeLevel::Low
    } else if monthly_income < MEDIUM_INCOME_CEILING {
        IncomeLevel::Medium
    } else {
        IncomeLevel::High
    }
}

pub(crate) fn savings_level(savings: u64, three_months_cost: u64) -> SavingsLevel {
    let ratio = savings as f64 / three_months_cost as f64;
    if ratio < 0.5 {
        SavingsLevel::Low
    } else if ratio < 1.0 {
        SavingsLevel::Medium
    } else {
        SavingsLevel::High
    }
}

/// Decision table; arms are listed in precedence order.
pub(crate) fn risk_profile(
    has_children: bool,
    savings: SavingsLevel,
    income: IncomeLevel,
) -> RiskProfile {
    use IncomeLevel as I;
    use SavingsLevel as S;

    match (has_children, savings, income) {
        (true, S::Low, I::Low) => RiskProfile::Highest,
        (true, S::High, I::High) => RiskProfile::Low,
        (true, _, _) => RiskProfile::High,
        (false, S::Low, I::Low) => RiskProfile::Medium,
        (false, S::High, I::High) => RiskProfile::Low,
        (false, _, _) => RiskProfile::Medium,
    }
}
