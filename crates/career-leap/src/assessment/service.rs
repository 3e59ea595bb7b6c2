use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, warn};

use super::domain::{ApplicantProfile, AssessmentId};
use super::pipeline::Assessment;
use super::repository::{AssessmentRecord, AssessmentRepository, RepositoryError};
use super::validation::{InputViolation, ProfileGuard};

/// Upper bound on records returned by a single listing.
pub const MAX_RECENT_RECORDS: usize = 100;

static ASSESSMENT_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_assessment_id() -> AssessmentId {
    let id = ASSESSMENT_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    AssessmentId(format!("asm-{id:06}"))
}

/// Assessment plus the id it was stored under, when storage succeeded.
#[derive(Debug, Clone, PartialEq)]
pub struct AssessmentOutcome {
    pub assessment_id: Option<AssessmentId>,
    pub assessment: Assessment,
}

/// Service composing the input guard, the scoring pipeline and the record store.
pub struct AssessmentService<R> {
    guard: ProfileGuard,
    repository: Option<Arc<R>>,
}

impl<R> AssessmentService<R>
where
    R: AssessmentRepository + 'static,
{
    pub fn new(repository: Arc<R>) -> Self {
        Self {
            guard: ProfileGuard,
            repository: Some(repository),
        }
    }

    /// Service that evaluates without storing anything.
    pub fn detached() -> Self {
        Self {
            guard: ProfileGuard,
            repository: None,
        }
    }

    /// Validate, evaluate and hand the result to the record store once.
    ///
    /// Storage failures are logged and never change the returned assessment.
    pub fn assess(
        &self,
        profile: &ApplicantProfile,
    ) -> Result<AssessmentOutcome, AssessmentServiceError> {
        self.guard.validate(profile)?;

        let assessment = Assessment::evaluate(profile);
        debug!(
            score = assessment.score.score,
            status = assessment.status_label(),
            sections = assessment.sections.len(),
            "assessment evaluated"
        );

        let assessment_id = self.persist(profile, &assessment);

        Ok(AssessmentOutcome {
            assessment_id,
            assessment,
        })
    }

    /// Fetch a stored record for API responses.
    pub fn get(&self, id: &AssessmentId) -> Result<AssessmentRecord, AssessmentServiceError> {
        let repository = self
            .repository
            .as_ref()
            .ok_or(AssessmentServiceError::StorageDisabled)?;

        let record = repository.fetch(id)?.ok_or(RepositoryError::NotFound)?;
        Ok(record)
    }

    /// Most recently stored records, newest first.
    pub fn recent(&self, limit: usize) -> Result<Vec<AssessmentRecord>, AssessmentServiceError> {
        let repository = self
            .repository
            .as_ref()
            .ok_or(AssessmentServiceError::StorageDisabled)?;

        Ok(repository.recent(limit.min(MAX_RECENT_RECORDS))?)
    }

    fn persist(&self, profile: &ApplicantProfile, assessment: &Assessment) -> Option<AssessmentId> {
        let repository = self.repository.as_ref()?;

        let record = AssessmentRecord::from_assessment(
            next_assessment_id(),
            profile,
            assessment,
            Utc::now(),
        );

        match repository.insert(record) {
            Ok(stored) => Some(stored.assessment_id),
            Err(err) => {
                warn!(error = %err, "failed to store assessment; returning result unsaved");
                None
            }
        }
    }
}

/// Error raised by the assessment service.
#[derive(Debug, thiserror::Error)]
pub enum AssessmentServiceError {
    #[error(transparent)]
    Input(#[from] InputViolation),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
    #[error("assessment storage is disabled")]
    StorageDisabled,
}
