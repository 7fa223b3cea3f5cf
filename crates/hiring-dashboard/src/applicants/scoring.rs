use serde::Serialize;

use super::domain::Applicant;

/// Skills the open postings ask for; the Skills Match dimension scores coverage of this list.
pub const REFERENCE_SKILLS: [&str; 10] = [
    "UI/UX Design",
    "Figma",
    "React",
    "Shopify",
    "JavaScript",
    "Adobe XD",
    "Prototyping",
    "Webflow",
    "Conversion Rate Optimization",
    "Landing Page Design",
];

const EXPERIENCE_FULL_HOURS: f64 = 1000.0;
const PROJECTS_FULL_COUNT: f64 = 50.0;
const RATING_SCALE: f64 = 5.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreDimensionKind {
    JobSuccess,
    Experience,
    Projects,
    SkillsMatch,
    DataQuality,
    OverallRating,
}

impl ScoreDimensionKind {
    pub const fn label(self) -> &'static str {
        match self {
            Self::JobSuccess => "Job Success Rate",
            Self::Experience => "Experience Level",
            Self::Projects => "Project Experience",
            Self::SkillsMatch => "Skills Match",
            Self::DataQuality => "Data Quality",
            Self::OverallRating => "Overall Rating",
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            Self::JobSuccess => "Success rate on completed jobs",
            Self::Experience => "Based on total hours worked",
            Self::Projects => "Based on number of completed projects",
            Self::SkillsMatch => "Relevance of skills to job requirements",
            Self::DataQuality => "Completeness and accuracy of profile data",
            Self::OverallRating => "Client feedback and platform rating",
        }
    }
}

/// One labelled sub-score normalized to a 0-100 percentage.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreDimension {
    pub kind: ScoreDimensionKind,
    pub label: &'static str,
    pub score: f64,
    pub max_score: f64,
    pub percentage: f64,
    pub description: &'static str,
}

impl ScoreDimension {
    fn new(kind: ScoreDimensionKind, score: f64, max_score: f64, percentage: f64) -> Self {
        Self {
            kind,
            label: kind.label(),
            score,
            max_score,
            percentage,
            description: kind.description(),
        }
    }

    /// Dimensions whose raw score is already a percentage.
    fn percent(kind: ScoreDimensionKind, value: f64) -> Self {
        Self::new(kind, value, 100.0, value)
    }
}

/// Derives the fixed-order dimension list for one applicant.
///
/// Overall Rating is only present when the applicant has a positive rating.
pub fn breakdown(applicant: &Applicant) -> Vec<ScoreDimension> {
    let mut dimensions = Vec::with_capacity(6);

    dimensions.push(ScoreDimension::percent(
        ScoreDimensionKind::JobSuccess,
        applicant.job_success.value(),
    ));

    let experience = (applicant.hours_worked.value() / EXPERIENCE_FULL_HOURS * 100.0).min(100.0);
    dimensions.push(ScoreDimension::percent(
        ScoreDimensionKind::Experience,
        experience,
    ));

    let projects = (applicant.jobs_completed.value() / PROJECTS_FULL_COUNT * 100.0).min(100.0);
    dimensions.push(ScoreDimension::percent(
        ScoreDimensionKind::Projects,
        projects,
    ));

    dimensions.push(ScoreDimension::percent(
        ScoreDimensionKind::SkillsMatch,
        skills_match(&applicant.skills),
    ));

    dimensions.push(ScoreDimension::percent(
        ScoreDimensionKind::DataQuality,
        applicant.data_quality_score.unwrap_or(0.0),
    ));

    if applicant.rating > 0.0 {
        dimensions.push(ScoreDimension::new(
            ScoreDimensionKind::OverallRating,
            applicant.rating,
            RATING_SCALE,
            applicant.rating / RATING_SCALE * 100.0,
        ));
    }

    dimensions
}

/// Unweighted mean of the dimension percentages; 0 for an empty list.
pub fn average_percentage(dimensions: &[ScoreDimension]) -> f64 {
    if dimensions.is_empty() {
        return 0.0;
    }
    dimensions.iter().map(|d| d.percentage).sum::<f64>() / dimensions.len() as f64
}

/// Share of [`REFERENCE_SKILLS`] covered by at least one applicant skill, as a percentage.
fn skills_match(skills: &[String]) -> f64 {
    let owned: Vec<String> = skills.iter().map(|skill| skill.to_lowercase()).collect();
    let covered = REFERENCE_SKILLS
        .iter()
        .filter(|reference| {
            let reference = reference.to_lowercase();
            owned.iter().any(|skill| skill.contains(&reference))
        })
        .count();

    covered as f64 / REFERENCE_SKILLS.len() as f64 * 100.0
}

/// Breakdown plus its page-level average, as shown on the detail view.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RatingBreakdown {
    pub dimensions: Vec<ScoreDimension>,
    pub average: f64,
}

impl RatingBreakdown {
    pub fn for_applicant(applicant: &Applicant) -> Self {
        let dimensions = breakdown(applicant);
        let average = average_percentage(&dimensions);
        Self {
            dimensions,
            average,
        }
    }

    pub fn dimension(&self, kind: ScoreDimensionKind) -> Option<&ScoreDimension> {
        self.dimensions.iter().find(|d| d.kind == kind)
    }
}
