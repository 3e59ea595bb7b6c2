//! Readiness assessment: input guard, normalizer, scorer, classifier, advice
//! composition and the record-store boundary.

pub mod advice;
pub mod classification;
pub mod domain;
pub mod import;
pub mod normalizer;
mod pipeline;
pub mod repository;
pub mod router;
pub mod scoring;
pub mod service;
pub mod validation;
pub mod views;

#[cfg(test)]
mod tests;

pub use advice::{AdviceSection, ComposedAdvice, SectionKind};
pub use domain::{
    AgeBracket, ApplicantAge, ApplicantProfile, AssessmentId, ClassificationTiers,
    FamilySituation, IncomeLevel, LivingCostTargets, NormalizedFacts, ReadinessStatus,
    RiskProfile, SavingsLevel, ScoreResult,
};
pub use import::{
    parse_profiles, profiles_from_path, ImportedRow, ProfileImportError, ProfileRowError,
};
pub use pipeline::Assessment;
pub use repository::{AssessmentRecord, AssessmentRepository, RepositoryError};
pub use router::assessment_router;
pub use scoring::{ScoreBreakdown, ScoreCard};
pub use service::{AssessmentOutcome, AssessmentService, AssessmentServiceError};
pub use validation::{InputViolation, ProfileGuard};
pub use views::{AssessmentRecordView, AssessmentView, SectionView};
