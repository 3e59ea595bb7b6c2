use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::http::StatusCode;
use axum::response::Response;
use serde_json::Value;

use crate::assessment::domain::{ApplicantAge, ApplicantProfile, AssessmentId};
use crate::assessment::repository::{AssessmentRecord, AssessmentRepository, RepositoryError};
use crate::assessment::AssessmentService;

pub(super) fn profile(
    family_structure: &str,
    family_count: u32,
    age: u32,
    savings: u64,
    monthly_income: u64,
) -> ApplicantProfile {
    ApplicantProfile {
        family_structure: family_structure.to_string(),
        family_count,
        age: ApplicantAge::from_raw(age),
        savings,
        monthly_income,
        has_children: false,
    }
}

/// Single applicant, no age, no savings, 300k income.
pub(super) fn single_profile() -> ApplicantProfile {
    profile("独身", 1, 0, 0, 300_000)
}

/// Married with one child, 32 years old.
pub(super) fn parent_profile() -> ApplicantProfile {
    profile("妻と子1人", 3, 32, 1_000_000, 300_000)
}

#[derive(Default, Clone)]
pub(super) struct MemoryRepository {
    records: Arc<Mutex<HashMap<AssessmentId, AssessmentRecord>>>,
}

impl MemoryRepository {
    pub(super) fn len(&self) -> usize {
        self.records.lock().expect("repository mutex poisoned").len()
    }
}

impl AssessmentRepository for MemoryRepository {
    fn insert(&self, record: AssessmentRecord) -> Result<AssessmentRecord, RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        if guard.contains_key(&record.assessment_id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(record.assessment_id.clone(), record.clone());
        Ok(record)
    }

    fn fetch(&self, id: &AssessmentId) -> Result<Option<AssessmentRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.get(id).cloned())
    }

    fn recent(&self, limit: usize) -> Result<Vec<AssessmentRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        let mut records: Vec<_> = guard.values().cloned().collect();
        records.sort_by(|a, b| b.recorded_at.cmp(&a.recorded_at));
        records.truncate(limit);
        Ok(records)
    }
}

#[derive(Default)]
pub(super) struct UnavailableRepository {
    pub(super) attempts: Mutex<usize>,
}

impl AssessmentRepository for UnavailableRepository {
    fn insert(&self, _record: AssessmentRecord) -> Result<AssessmentRecord, RepositoryError> {
        *self.attempts.lock().expect("attempts mutex poisoned") += 1;
        Err(RepositoryError::Unavailable("store offline".to_string()))
    }

    fn fetch(&self, _id: &AssessmentId) -> Result<Option<AssessmentRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("store offline".to_string()))
    }

    fn recent(&self, _limit: usize) -> Result<Vec<AssessmentRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("store offline".to_string()))
    }
}

pub(super) fn build_service() -> (Arc<AssessmentService<MemoryRepository>>, MemoryRepository) {
    let repository = MemoryRepository::default();
    let service = Arc::new(AssessmentService::new(Arc::new(repository.clone())));
    (service, repository)
}

pub(super) async fn response_json(response: Response) -> (StatusCode, Value) {
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body collects");
    let value = serde_json::from_slice(&bytes).expect("body is json");
    (status, value)
}
