use super::domain::{ApplicantAge, ApplicantProfile};

pub const MIN_APPLICANT_AGE: u32 = 18;
pub const MAX_APPLICANT_AGE: u32 = 100;
pub const MAX_FAMILY_DESCRIPTION_CHARS: usize = 200;

/// Input errors raised before a profile reaches the scorer.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InputViolation {
    #[error("household must include at least the applicant")]
    EmptyHousehold,
    #[error("monthly income must be at least 1")]
    MissingIncome,
    #[error("age must be blank or between 18 and 100 (found {0})")]
    AgeOutOfRange(u32),
    #[error("family description exceeds 200 characters (found {0})")]
    FamilyDescriptionTooLong(usize),
}

/// Enforces the numeric preconditions the scoring core relies on.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProfileGuard;

impl ProfileGuard {
    pub fn validate(&self, profile: &ApplicantProfile) -> Result<(), InputViolation> {
        if profile.family_count == 0 {
            return Err(InputViolation::EmptyHousehold);
        }

        if profile.monthly_income == 0 {
            return Err(InputViolation::MissingIncome);
        }

        if let ApplicantAge::Years(years) = profile.age {
            if !(MIN_APPLICANT_AGE..=MAX_APPLICANT_AGE).contains(&years) {
                return Err(InputViolation::AgeOutOfRange(years));
            }
        }

        let description_chars = profile.family_structure.chars().count();
        if description_chars > MAX_FAMILY_DESCRIPTION_CHARS {
            return Err(InputViolation::FamilyDescriptionTooLong(description_chars));
        }

        Ok(())
    }
}
