use std::sync::Arc;

use super::common::*;
use crate::assessment::domain::{ApplicantAge, AssessmentId};
use crate::assessment::repository::{AssessmentRepository, RepositoryError};
use crate::assessment::validation::InputViolation;
use crate::assessment::{Assessment, AssessmentService, AssessmentServiceError};

#[test]
fn assess_stores_record_and_returns_id() {
    let (service, repository) = build_service();

    let outcome = service.assess(&single_profile()).expect("assessment succeeds");
    let id = outcome.assessment_id.expect("record stored");

    assert_eq!(repository.len(), 1);
    let record = repository
        .fetch(&id)
        .expect("fetch works")
        .expect("record present");
    assert_eq!(record.score, 80);
    assert_eq!(record.status_label, "絶好のタイミング");
    assert_eq!(record.family_structure, "独身");
    assert_eq!(record.raw_advice, outcome.assessment.raw_advice);

    let fetched = service.get(&id).expect("service fetch works");
    assert_eq!(fetched.assessment_id, id);
}

#[test]
fn storage_failure_does_not_change_result() {
    let repository = Arc::new(UnavailableRepository::default());
    let service = AssessmentService::new(repository.clone());
    let profile = parent_profile();

    let outcome = service.assess(&profile).expect("assessment still succeeds");

    assert!(outcome.assessment_id.is_none());
    assert_eq!(outcome.assessment, Assessment::evaluate(&profile));
    assert_eq!(outcome.assessment.score.score, 74);
    assert_eq!(*repository.attempts.lock().expect("attempts lock"), 1);
}

#[test]
fn detached_service_skips_storage() {
    let service = AssessmentService::<MemoryRepository>::detached();

    let outcome = service.assess(&single_profile()).expect("assessment succeeds");

    assert!(outcome.assessment_id.is_none());
    match service.get(&AssessmentId("asm-000001".to_string())) {
        Err(AssessmentServiceError::StorageDisabled) => {}
        other => panic!("expected storage disabled, got {other:?}"),
    }
}

#[test]
fn rejects_preconditions_before_scoring() {
    let (service, repository) = build_service();

    let mut no_income = single_profile();
    no_income.monthly_income = 0;
    let mut empty_household = single_profile();
    empty_household.family_count = 0;
    let mut too_young = single_profile();
    too_young.age = ApplicantAge::from_raw(17);
    let mut too_old = single_profile();
    too_old.age = ApplicantAge::from_raw(101);
    let mut implausible = single_profile();
    implausible.age = ApplicantAge::from_raw(300);
    let mut rambling = single_profile();
    rambling.family_structure = "家".repeat(201);

    let cases = [
        (no_income, InputViolation::MissingIncome),
        (empty_household, InputViolation::EmptyHousehold),
        (too_young, InputViolation::AgeOutOfRange(17)),
        (too_old, InputViolation::AgeOutOfRange(101)),
        (implausible, InputViolation::AgeOutOfRange(300)),
        (rambling, InputViolation::FamilyDescriptionTooLong(201)),
    ];

    for (profile, expected) in cases {
        match service.assess(&profile) {
            Err(AssessmentServiceError::Input(violation)) => assert_eq!(violation, expected),
            other => panic!("expected {expected:?}, got {other:?}"),
        }
    }
    assert_eq!(repository.len(), 0);
}

#[test]
fn boundary_ages_are_accepted() {
    let (service, _) = build_service();

    for age in [18, 100] {
        let mut applicant = single_profile();
        applicant.age = ApplicantAge::from_raw(age);
        assert!(service.assess(&applicant).is_ok(), "age {age}");
    }
}

#[test]
fn unknown_record_is_not_found() {
    let (service, _) = build_service();

    match service.get(&AssessmentId("asm-missing".to_string())) {
        Err(AssessmentServiceError::Repository(RepositoryError::NotFound)) => {}
        other => panic!("expected not found, got {other:?}"),
    }
}

#[test]
fn evaluation_is_deterministic() {
    let profile = parent_profile();

    let first = Assessment::evaluate(&profile);
    let second = Assessment::evaluate(&profile);

    assert_eq!(first, second);
    assert_eq!(first.raw_advice, second.raw_advice);
}
