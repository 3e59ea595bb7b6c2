//! End-to-end scenarios through the public assessment facade, the CSV importer
//! and the HTTP router.

mod common {
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};

    use career_leap::assessment::{
        AssessmentId, AssessmentRecord, AssessmentRepository, AssessmentService, RepositoryError,
    };

    #[derive(Default, Clone)]
    pub(super) struct InMemoryRepository {
        records: Arc<Mutex<HashMap<AssessmentId, AssessmentRecord>>>,
    }

    impl AssessmentRepository for InMemoryRepository {
        fn insert(&self, record: AssessmentRecord) -> Result<AssessmentRecord, RepositoryError> {
            let mut guard = self.records.lock().expect("repository mutex poisoned");
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

    pub(super) fn service() -> (Arc<AssessmentService<InMemoryRepository>>, InMemoryRepository) {
        let repository = InMemoryRepository::default();
        let service = Arc::new(AssessmentService::new(Arc::new(repository.clone())));
        (service, repository)
    }
}

use std::io::Cursor;

use axum::http::{header, Request, StatusCode};
use career_leap::assessment::{
    parse_profiles, ApplicantAge, ApplicantProfile, Assessment, AssessmentId, AssessmentRecord,
    AssessmentRepository, AssessmentServiceError, AssessmentView, InputViolation, ProfileRowError,
    ReadinessStatus, SectionKind,
};
use chrono::{Duration, Utc};
use common::service;
use tower::ServiceExt;

fn married_parent() -> ApplicantProfile {
    ApplicantProfile {
        family_structure: "妻と子1人".to_string(),
        family_count: 3,
        age: ApplicantAge::from_raw(32),
        savings: 1_000_000,
        monthly_income: 300_000,
        has_children: false,
    }
}

#[test]
fn parent_assessment_matches_documented_example() {
    let (service, repository) = service();

    let outcome = service.assess(&married_parent()).expect("assessment succeeds");
    let assessment = &outcome.assessment;

    assert!(assessment.facts.has_children);
    assert_eq!(assessment.facts.children_count, 1);
    assert_eq!(assessment.score.score, 74);
    assert_eq!(assessment.score.status, ReadinessStatus::Optimal);
    assert_eq!(assessment.sections[0].kind, SectionKind::SpecialMessage);
    assert_eq!(
        assessment.sections.last().map(|section| section.kind),
        Some(SectionKind::AgeAdvice)
    );

    let stored = repository.recent(10).expect("recent works");
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].raw_advice, assessment.raw_advice);
}

#[test]
fn view_exposes_output_contract() {
    let (service, _) = service();
    let outcome = service.assess(&married_parent()).expect("assessment succeeds");

    let view = AssessmentView::from(outcome);
    let json = serde_json::to_value(&view).expect("view serializes");

    assert_eq!(json["score"], 74);
    assert_eq!(json["status_label"], "絶好のタイミング");
    let first = &json["ordered_sections"][0];
    assert!(first["title"].as_str().expect("title").contains("あなたへの特別"));
    assert!(first["body"].is_string());
}

#[test]
fn csv_batch_import_feeds_the_pipeline() {
    let csv = "family_structure,family_count,age,savings,monthly_income,has_children\n\
               独身,1,,0,300000,\n\
               妻と子2人,4,41,2000000,450000,false\n\
               夫,2,29,500000,220000,yes\n";

    let profiles: Vec<ApplicantProfile> = parse_profiles(Cursor::new(csv))
        .expect("csv parses")
        .into_iter()
        .map(|imported| imported.profile.expect("row parses"))
        .collect();
    assert_eq!(profiles.len(), 3);
    assert_eq!(profiles[0].age, ApplicantAge::Unspecified);
    assert!(!profiles[0].has_children);
    assert_eq!(profiles[1].age, ApplicantAge::Years(41));
    assert!(profiles[2].has_children);

    let (service, _) = service();
    let scores: Vec<u8> = profiles
        .iter()
        .map(|profile| {
            service
                .assess(profile)
                .expect("assessment succeeds")
                .assessment
                .score
                .score
        })
        .collect();
    assert_eq!(scores[0], 80);
    assert!(scores.iter().all(|score| (40..=100).contains(score)));
}

#[test]
fn csv_import_reports_bad_rows_without_dropping_the_rest() {
    let csv = "family_structure,family_count,age,savings,monthly_income,has_children\n\
               独身,one,,0,300000,\n\
               夫,2,29,500000,220000,maybe\n\
               妻と子1人,3,300,1000000,300000,はい\n\
               独身,1,40,0,300000,いいえ\n";

    let rows = parse_profiles(Cursor::new(csv)).expect("header reads");
    assert_eq!(rows.len(), 4);
    assert_eq!(
        rows.iter().map(|imported| imported.row).collect::<Vec<_>>(),
        vec![1, 2, 3, 4]
    );

    assert!(matches!(rows[0].profile, Err(ProfileRowError::Malformed(_))));
    assert!(matches!(
        &rows[1].profile,
        Err(ProfileRowError::UnrecognisedChildrenFlag(value)) if value == "maybe"
    ));

    let implausible = rows[2].profile.as_ref().expect("wide ages deserialize");
    assert_eq!(implausible.age, ApplicantAge::Years(300));
    assert!(implausible.has_children);
    let (service, _) = service();
    assert!(matches!(
        service.assess(implausible),
        Err(AssessmentServiceError::Input(InputViolation::AgeOutOfRange(300)))
    ));

    let last = rows[3].profile.as_ref().expect("row parses");
    assert!(!last.has_children);
}

#[test]
fn recent_records_come_back_newest_first() {
    let (service, repository) = service();
    let profile = married_parent();
    let assessment = Assessment::evaluate(&profile);
    let now = Utc::now();

    for (id, minutes_ago) in [("asm-older", 30), ("asm-newest", 1), ("asm-oldest", 90)] {
        repository
            .insert(AssessmentRecord::from_assessment(
                AssessmentId(id.to_string()),
                &profile,
                &assessment,
                now - Duration::minutes(minutes_ago),
            ))
            .expect("insert succeeds");
    }

    let ids: Vec<String> = service
        .recent(2)
        .expect("recent works")
        .into_iter()
        .map(|record| record.assessment_id.0)
        .collect();
    assert_eq!(ids, vec!["asm-newest", "asm-older"]);
}

#[tokio::test]
async fn http_round_trip_through_router() {
    let (service, _) = service();
    let router = career_leap::assessment::assessment_router(service);

    let body = serde_json::to_vec(&married_parent()).expect("profile serializes");
    let response = router
        .oneshot(
            Request::post("/api/v1/assessments")
                .header(header::CONTENT_TYPE, "application/json")
                .body(axum::body::Body::from(body))
                .expect("request builds"),
        )
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body collects");
    let json: serde_json::Value = serde_json::from_slice(&bytes).expect("json body");
    assert_eq!(json["score"], 74);
    assert_eq!(json["tiers"]["income_level"], "medium");
}
