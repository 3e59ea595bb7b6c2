use career_leap::assessment::{
    profiles_from_path, ApplicantAge, ApplicantProfile, AssessmentOutcome, AssessmentRepository,
    AssessmentService, AssessmentServiceError, AssessmentView, ImportedRow,
};
use career_leap::error::AppError;
use clap::Args;
use std::path::PathBuf;

use crate::infra::InMemoryAssessmentRepository;

#[derive(Args, Debug)]
pub(crate) struct AssessArgs {
    /// Household description, e.g. "妻と子2人"
    #[arg(long)]
    pub(crate) family: String,
    /// Household size including the applicant
    #[arg(long)]
    pub(crate) family_count: u32,
    /// Applicant age; 0 leaves it unspecified
    #[arg(long, default_value_t = 0)]
    pub(crate) age: u32,
    /// Current savings
    #[arg(long)]
    pub(crate) savings: u64,
    /// Monthly income
    #[arg(long)]
    pub(crate) monthly_income: u64,
    /// Mark the household as having children regardless of the description
    #[arg(long)]
    pub(crate) has_children: bool,
    /// Print the JSON response body instead of a text report
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct BatchArgs {
    /// CSV with family_structure,family_count,age,savings,monthly_income,has_children
    #[arg(long)]
    pub(crate) csv: PathBuf,
    /// Emit one JSON object per line
    #[arg(long)]
    pub(crate) json: bool,
}

impl From<&AssessArgs> for ApplicantProfile {
    fn from(args: &AssessArgs) -> Self {
        ApplicantProfile {
            family_structure: args.family.clone(),
            family_count: args.family_count,
            age: ApplicantAge::from_raw(args.age),
            savings: args.savings,
            monthly_income: args.monthly_income,
            has_children: args.has_children,
        }
    }
}

fn cli_service() -> AssessmentService<InMemoryAssessmentRepository> {
    AssessmentService::<InMemoryAssessmentRepository>::detached()
}

pub(crate) fn run_assess(args: AssessArgs) -> Result<(), AppError> {
    let profile = ApplicantProfile::from(&args);
    let outcome = cli_service().assess(&profile)?;

    if args.json {
        print_json(AssessmentView::from(outcome))?;
    } else {
        print!("{}", render_report(&outcome));
    }

    Ok(())
}

pub(crate) fn run_batch(args: BatchArgs) -> Result<(), AppError> {
    let rows = profiles_from_path(&args.csv)?;

    for line in assess_rows(&cli_service(), rows)? {
        match line {
            BatchLine::Assessed { outcome, .. } if args.json => {
                print_json(AssessmentView::from(outcome))?
            }
            BatchLine::Assessed {
                row,
                profile,
                outcome,
            } => println!("{}", render_summary_line(row, &profile, &outcome)),
            BatchLine::Skipped { row, reason } => eprintln!("row {row}: skipped ({reason})"),
        }
    }

    Ok(())
}

/// Result of one CSV row in a batch run.
#[derive(Debug)]
pub(crate) enum BatchLine {
    Assessed {
        row: usize,
        profile: ApplicantProfile,
        outcome: AssessmentOutcome,
    },
    Skipped {
        row: usize,
        reason: String,
    },
}

/// Assess every imported row. Unreadable or invalid rows are skipped with a
/// reason; only a storage failure aborts the batch.
pub(crate) fn assess_rows<R>(
    service: &AssessmentService<R>,
    rows: Vec<ImportedRow>,
) -> Result<Vec<BatchLine>, AppError>
where
    R: AssessmentRepository + 'static,
{
    let mut lines = Vec::with_capacity(rows.len());

    for ImportedRow { row, profile } in rows {
        let profile = match profile {
            Ok(profile) => profile,
            Err(err) => {
                lines.push(BatchLine::Skipped {
                    row,
                    reason: err.to_string(),
                });
                continue;
            }
        };

        match service.assess(&profile) {
            Ok(outcome) => lines.push(BatchLine::Assessed {
                row,
                profile,
                outcome,
            }),
            Err(AssessmentServiceError::Input(violation)) => lines.push(BatchLine::Skipped {
                row,
                reason: violation.to_string(),
            }),
            Err(other) => return Err(other.into()),
        }
    }

    Ok(lines)
}

fn print_json(view: AssessmentView) -> Result<(), AppError> {
    let line = serde_json::to_string(&view)
        .map_err(|err| AppError::Io(std::io::Error::other(err)))?;
    println!("{line}");
    Ok(())
}

pub(crate) fn render_report(outcome: &AssessmentOutcome) -> String {
    let assessment = &outcome.assessment;
    let mut report = format!(
        "Readiness score: {} ({})\n",
        assessment.score.score,
        assessment.status_label()
    );

    for section in &assessment.sections {
        report.push_str(&format!("\n【{}】\n{}\n", section.title, section.body));
    }

    report
}

pub(crate) fn render_summary_line(
    row: usize,
    profile: &ApplicantProfile,
    outcome: &AssessmentOutcome,
) -> String {
    format!(
        "row {row}: {} | household {} | score {} ({}) | {} sections",
        profile.family_structure,
        profile.family_count,
        outcome.assessment.score.score,
        outcome.assessment.status_label(),
        outcome.assessment.sections.len()
    )
}
