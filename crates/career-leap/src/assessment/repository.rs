use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::domain::{ApplicantProfile, AssessmentId};
use super::pipeline::Assessment;

/// Payload handed to the record store after an assessment completes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentRecord {
    pub assessment_id: AssessmentId,
    pub family_structure: String,
    pub family_count: u32,
    pub savings: u64,
    pub monthly_income: u64,
    pub score: u8,
    pub status_label: String,
    pub raw_advice: String,
    pub recorded_at: DateTime<Utc>,
}

impl AssessmentRecord {
    pub fn from_assessment(
        assessment_id: AssessmentId,
        profile: &ApplicantProfile,
        assessment: &Assessment,
        recorded_at: DateTime<Utc>,
    ) -> Self {
        Self {
            assessment_id,
            family_structure: profile.family_structure.clone(),
            family_count: profile.family_count,
            savings: profile.savings,
            monthly_income: profile.monthly_income,
            score: assessment.score.score,
            status_label: assessment.status_label().to_string(),
            raw_advice: assessment.raw_advice.clone(),
            recorded_at,
        }
    }
}

/// Storage abstraction so the service can run with or without a backing store.
pub trait AssessmentRepository: Send + Sync {
    fn insert(&self, record: AssessmentRecord) -> Result<AssessmentRecord, RepositoryError>;
    fn fetch(&self, id: &AssessmentId) -> Result<Option<AssessmentRecord>, RepositoryError>;
    fn recent(&self, limit: usize) -> Result<Vec<AssessmentRecord>, RepositoryError>;
}

/// Error enumeration for repository failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("record already exists")]
    Conflict,
    #[error("record not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}
