use crate::cli::{FilterArgs, SourceArgs};
use crate::infra::{directory_service, load_report};
use clap::{Args, Subcommand};
use hiring_dashboard::applicants::{
    write_csv, Applicant, ApplicantDetail, ApplicantId, ApplicantStatus, ComputedStats,
    DataSource, LoadReport,
};
use hiring_dashboard::error::AppError;
use std::fs::File;
use std::io::{self, BufWriter};
use std::path::PathBuf;

#[derive(Subcommand, Debug)]
pub(crate) enum ApplicantsCommand {
    /// List applicants matching the filter flags
    List(ListArgs),
    /// Show one applicant with its rating breakdown
    Show(ShowArgs),
    /// Print directory statistics
    Stats(StatsArgs),
    /// Export matching applicants as CSV
    Export(ExportArgs),
}

#[derive(Args, Debug)]
pub(crate) struct ListArgs {
    #[command(flatten)]
    pub(crate) source: SourceArgs,
    #[command(flatten)]
    pub(crate) filters: FilterArgs,
    /// Show at most this many applicants
    #[arg(long)]
    pub(crate) limit: Option<usize>,
}

#[derive(Args, Debug)]
pub(crate) struct ShowArgs {
    #[command(flatten)]
    pub(crate) source: SourceArgs,
    /// Applicant id
    pub(crate) id: String,
}

#[derive(Args, Debug)]
pub(crate) struct StatsArgs {
    #[command(flatten)]
    pub(crate) source: SourceArgs,
}

#[derive(Args, Debug)]
pub(crate) struct ExportArgs {
    #[command(flatten)]
    pub(crate) source: SourceArgs,
    #[command(flatten)]
    pub(crate) filters: FilterArgs,
    /// Write the CSV to this file instead of stdout
    #[arg(long)]
    pub(crate) output: Option<PathBuf>,
}

pub(crate) fn run_applicants(command: ApplicantsCommand) -> Result<(), AppError> {
    match command {
        ApplicantsCommand::List(args) => run_list(args),
        ApplicantsCommand::Show(args) => run_show(args),
        ApplicantsCommand::Stats(args) => run_stats(args),
        ApplicantsCommand::Export(args) => run_export(args),
    }
}

fn run_list(args: ListArgs) -> Result<(), AppError> {
    let report = load_report(args.source.data)?;
    render_load_summary(&report);

    let service = directory_service(report.applicants);
    let query = args.filters.query();
    let listing = service.list(&query)?;
    let limit = args.limit.unwrap_or(usize::MAX);

    println!(
        "\n{} of {} applicants match (sorted by {} {})",
        listing.applicants.len(),
        listing.stats.total_applicants,
        query.sort.field,
        query.sort.direction
    );
    for applicant in listing.applicants.iter().take(limit) {
        render_applicant_line(applicant);
    }
    if listing.applicants.len() > limit {
        println!("  ... {} more", listing.applicants.len() - limit);
    }

    Ok(())
}

fn run_show(args: ShowArgs) -> Result<(), AppError> {
    let report = load_report(args.source.data)?;
    let service = directory_service(report.applicants);
    let detail = service.detail(&ApplicantId(args.id))?;
    render_detail(&detail);
    Ok(())
}

fn run_stats(args: StatsArgs) -> Result<(), AppError> {
    let report = load_report(args.source.data)?;
    render_load_summary(&report);

    let service = directory_service(report.applicants);
    let stats = service.stats()?;
    render_stats(&stats);
    Ok(())
}

fn run_export(args: ExportArgs) -> Result<(), AppError> {
    let report = load_report(args.source.data)?;
    let service = directory_service(report.applicants);
    let listing = service.list(&args.filters.query())?;

    match args.output {
        Some(path) => {
            let file = File::create(&path)?;
            write_csv(BufWriter::new(file), &listing.applicants)?;
            eprintln!(
                "Exported {} applicants to {}",
                listing.applicants.len(),
                path.display()
            );
        }
        None => write_csv(io::stdout().lock(), &listing.applicants)?,
    }

    Ok(())
}

fn render_load_summary(report: &LoadReport) {
    let source = match &report.source {
        DataSource::File(path) => path.display().to_string(),
        DataSource::Inline => "inline document".to_string(),
        DataSource::Sample => "built-in sample (no export found)".to_string(),
    };
    println!("Applicant directory loaded from {source}");
    println!(
        "- {} accepted | {} rejected | {} field warnings",
        report.applicants.len(),
        report.rejected.len(),
        report.warnings.len()
    );
    for rejection in &report.rejected {
        println!(
            "  - record #{} ({}): {}",
            rejection.index,
            rejection.id.as_deref().unwrap_or("no id"),
            rejection.reason
        );
    }
}

fn render_applicant_line(applicant: &Applicant) {
    println!(
        "- [{}] {} | {} | {} | rating {:.1} | {} | {} success | {}",
        applicant.id,
        applicant.name,
        display_or_dash(&applicant.job_title),
        display_or_dash(&applicant.location),
        applicant.rating,
        display_or_dash(applicant.hourly_rate.display()),
        display_or_dash(applicant.job_success.display()),
        applicant.status.label()
    );
}

fn render_detail(detail: &ApplicantDetail) {
    let applicant = &detail.applicant;
    println!("{} ({})", applicant.name, applicant.id);
    println!("  {}", display_or_dash(&applicant.title));
    println!(
        "  {} | applied for {} | status {}",
        display_or_dash(&applicant.location),
        display_or_dash(&applicant.job_title),
        applicant.status.label()
    );
    println!(
        "  Rate {} | Earned {} | {} hours | {} jobs",
        display_or_dash(applicant.hourly_rate.display()),
        display_or_dash(applicant.total_earned.display()),
        display_or_dash(applicant.hours_worked.display()),
        display_or_dash(applicant.jobs_completed.display())
    );
    if !applicant.skills.is_empty() {
        println!("  Skills: {}", applicant.skills.join(", "));
    }

    println!("\nRating breakdown");
    for dimension in &detail.breakdown.dimensions {
        println!(
            "  - {:<20} {:>5.1}% ({:.1}/{}) {}",
            dimension.label,
            dimension.percentage,
            dimension.score,
            dimension.max_score,
            dimension.description
        );
    }
    println!("  Average: {:.1}%", detail.breakdown.average);
}

fn render_stats(stats: &ComputedStats) {
    println!("\nDirectory statistics");
    println!("- {} applicants", stats.total_applicants);
    println!("- {} job positions", stats.job_positions);
    println!("- {} average rating", stats.average_rating);
    println!("- ${:.0} total earned", stats.total_earned);
    println!("Status breakdown:");
    for status in ApplicantStatus::ordered() {
        println!(
            "  - {}: {}",
            status.label(),
            stats.status_breakdown.count(status)
        );
    }
    if !stats.jobs_breakdown.is_empty() {
        println!("Job postings:");
        for (job, count) in &stats.jobs_breakdown {
            println!("  - {job}: {count}");
        }
    }
}

fn display_or_dash(value: &str) -> &str {
    if value.trim().is_empty() {
        "-"
    } else {
        value
    }
}
