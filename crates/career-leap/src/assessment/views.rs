use serde::Serialize;

use super::advice::SectionKind;
use super::domain::{AssessmentId, ClassificationTiers};
use super::repository::AssessmentRecord;
use super::service::AssessmentOutcome;

/// Presentation-facing shape of a finished assessment.
#[derive(Debug, Clone, Serialize)]
pub struct AssessmentView {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assessment_id: Option<AssessmentId>,
    pub score: u8,
    pub status_label: &'static str,
    pub tiers: ClassificationTiers,
    pub ordered_sections: Vec<SectionView>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SectionView {
    pub kind: SectionKind,
    pub title: String,
    pub body: String,
}

impl From<AssessmentOutcome> for AssessmentView {
    fn from(outcome: AssessmentOutcome) -> Self {
        let AssessmentOutcome {
            assessment_id,
            assessment,
        } = outcome;

        Self {
            assessment_id,
            score: assessment.score.score,
            status_label: assessment.status_label(),
            tiers: assessment.tiers,
            ordered_sections: assessment
                .sections
                .into_iter()
                .map(|section| SectionView {
                    kind: section.kind,
                    title: section.title,
                    body: section.body,
                })
                .collect(),
        }
    }
}

/// Stored record as exposed over HTTP.
#[derive(Debug, Clone, Serialize)]
pub struct AssessmentRecordView {
    pub assessment_id: AssessmentId,
    pub score: u8,
    pub status_label: String,
    pub recorded_at: String,
    pub ordered_sections: Vec<SectionView>,
}

impl From<AssessmentRecord> for AssessmentRecordView {
    fn from(record: AssessmentRecord) -> Self {
        let ordered_sections = super::advice::parse_and_order(&record.raw_advice)
            .into_iter()
            .map(|section| SectionView {
                kind: section.kind,
                title: section.title,
                body: section.body,
            })
            .collect();

        Self {
            assessment_id: record.assessment_id,
            score: record.score,
            status_label: record.status_label,
            recorded_at: record.recorded_at.to_rfc3339(),
            ordered_sections,
        }
    }
}
