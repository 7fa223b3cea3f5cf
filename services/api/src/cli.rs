use crate::report::{run_applicants, ApplicantsCommand};
use crate::server;
use clap::{Args, Parser, Subcommand};
use hiring_dashboard::applicants::{
    parse_threshold, ApplicantQuery, ApplicantStatus, FilterSet, QueryError, SortDirection,
    SortField, SortSpec, HOURLY_RATE_SENTINEL,
};
use hiring_dashboard::error::AppError;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "Hiring Dashboard",
    about = "Serve and inspect the applicant hiring dashboard from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Browse, score, and export the applicant directory
    Applicants {
        #[command(subcommand)]
        command: ApplicantsCommand,
    },
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
    #[command(flatten)]
    pub(crate) source: SourceArgs,
}

#[derive(Args, Debug, Default)]
pub(crate) struct SourceArgs {
    /// Applicant export to load instead of the configured data paths
    #[arg(long)]
    pub(crate) data: Option<PathBuf>,
}

/// Filter and sort flags shared by the listing and export commands.
#[derive(Args, Debug, Default)]
pub(crate) struct FilterArgs {
    /// Case-insensitive text search across name, title, location, skills, and overview
    #[arg(long)]
    pub(crate) search: Option<String>,
    /// Comma separated skills; any match keeps the applicant
    #[arg(long, value_delimiter = ',')]
    pub(crate) skills: Vec<String>,
    /// Exact job posting title
    #[arg(long)]
    pub(crate) job: Option<String>,
    /// Exact location
    #[arg(long)]
    pub(crate) location: Option<String>,
    #[arg(long, value_parser = min_rating_threshold)]
    pub(crate) min_rating: Option<f64>,
    /// Maximum hourly rate; 100 or more disables the filter
    #[arg(long, value_parser = max_hourly_rate_threshold)]
    pub(crate) max_hourly_rate: Option<f64>,
    #[arg(long, value_parser = min_job_success_threshold)]
    pub(crate) min_job_success: Option<f64>,
    #[arg(long)]
    pub(crate) status: Option<ApplicantStatus>,
    /// Sort field (defaults to rating)
    #[arg(long)]
    pub(crate) sort: Option<SortField>,
    /// Sort direction, asc or desc (defaults to desc)
    #[arg(long)]
    pub(crate) direction: Option<SortDirection>,
}

impl FilterArgs {
    pub(crate) fn query(&self) -> ApplicantQuery {
        let filters = FilterSet {
            search: self.search.clone().unwrap_or_default(),
            skills: self
                .skills
                .iter()
                .map(|skill| skill.trim().to_string())
                .filter(|skill| !skill.is_empty())
                .collect(),
            job_posting: self.job.clone().unwrap_or_default(),
            location: self.location.clone().unwrap_or_default(),
            min_rating: self.min_rating.unwrap_or(0.0),
            max_hourly_rate: self.max_hourly_rate.unwrap_or(HOURLY_RATE_SENTINEL),
            min_job_success: self.min_job_success.unwrap_or(0.0),
            status: self.status,
        };

        let default_sort = SortSpec::default();
        let sort = SortSpec::new(
            self.sort.unwrap_or(default_sort.field),
            self.direction.unwrap_or(default_sort.direction),
        );

        ApplicantQuery::new(filters, sort)
    }
}

fn min_rating_threshold(raw: &str) -> Result<f64, QueryError> {
    parse_threshold("min_rating", raw)
}

fn max_hourly_rate_threshold(raw: &str) -> Result<f64, QueryError> {
    parse_threshold("max_hourly_rate", raw)
}

fn min_job_success_threshold(raw: &str) -> Result<f64, QueryError> {
    parse_threshold("min_job_success", raw)
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Applicants { command } => run_applicants(command),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_subcommand_defaults_to_serve() {
        let cli = Cli::try_parse_from(["hiring-dashboard-api"]).expect("parses");
        assert!(cli.command.is_none());
    }

    #[test]
    fn filter_flags_build_a_query() {
        let cli = Cli::try_parse_from([
            "hiring-dashboard-api",
            "applicants",
            "list",
            "--skills",
            "React,Figma",
            "--max-hourly-rate",
            "25",
            "--status",
            "interview",
            "--sort",
            "hourly_rate",
            "--direction",
            "asc",
        ])
        .expect("parses");

        let Some(Command::Applicants {
            command: ApplicantsCommand::List(args),
        }) = cli.command
        else {
            panic!("expected applicants list");
        };

        let query = args.filters.query();
        assert_eq!(query.filters.skills, vec!["React", "Figma"]);
        assert_eq!(query.filters.max_hourly_rate, 25.0);
        assert_eq!(query.filters.status, Some(ApplicantStatus::Interview));
        assert_eq!(
            query.sort,
            SortSpec::new(SortField::HourlyRate, SortDirection::Ascending)
        );
    }

    #[test]
    fn empty_filter_flags_match_the_default_query() {
        assert_eq!(FilterArgs::default().query(), ApplicantQuery::default());
    }

    #[test]
    fn unknown_sort_field_is_a_usage_error() {
        let result = Cli::try_parse_from([
            "hiring-dashboard-api",
            "applicants",
            "list",
            "--sort",
            "salary",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn thresholds_reject_non_finite_and_negative_values() {
        for flag in ["--min-rating=NaN", "--max-hourly-rate=inf", "--min-job-success=-5"] {
            let result =
                Cli::try_parse_from(["hiring-dashboard-api", "applicants", "list", flag]);
            assert!(result.is_err(), "{flag}");
        }

        let cli = Cli::try_parse_from([
            "hiring-dashboard-api",
            "applicants",
            "export",
            "--min-rating",
            "4.5",
        ])
        .expect("parses");
        let Some(Command::Applicants {
            command: ApplicantsCommand::Export(args),
        }) = cli.command
        else {
            panic!("expected applicants export");
        };
        assert_eq!(args.filters.query().filters.min_rating, 4.5);
    }
}
