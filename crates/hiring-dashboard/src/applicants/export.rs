use std::io::Write;

use serde::Serialize;

use super::domain::Applicant;

/// Flat CSV row; skills are joined with `; ` and formatted fields keep their display text.
#[derive(Debug, Serialize)]
struct ExportRow<'a> {
    id: &'a str,
    name: &'a str,
    title: &'a str,
    location: &'a str,
    job_title: &'a str,
    status: &'static str,
    rating: f64,
    hourly_rate: &'a str,
    job_success: &'a str,
    total_earned: &'a str,
    hours_worked: &'a str,
    jobs_completed: &'a str,
    skills: String,
    applied_date: &'a str,
}

impl<'a> From<&'a Applicant> for ExportRow<'a> {
    fn from(applicant: &'a Applicant) -> Self {
        Self {
            id: &applicant.id.0,
            name: &applicant.name,
            title: &applicant.title,
            location: &applicant.location,
            job_title: &applicant.job_title,
            status: applicant.status.as_str(),
            rating: applicant.rating,
            hourly_rate: applicant.hourly_rate.display(),
            job_success: applicant.job_success.display(),
            total_earned: applicant.total_earned.display(),
            hours_worked: applicant.hours_worked.display(),
            jobs_completed: applicant.jobs_completed.display(),
            skills: applicant.skills.join("; "),
            applied_date: applicant
                .applied_date
                .as_ref()
                .map(|date| date.raw())
                .unwrap_or_default(),
        }
    }
}

/// Writes the applicants as CSV with a header row, in the order given.
pub fn write_csv<'a, W, I>(writer: W, applicants: I) -> Result<(), csv::Error>
where
    W: Write,
    I: IntoIterator<Item = &'a Applicant>,
{
    let mut csv_writer = csv::WriterBuilder::new()
        .has_headers(true)
        .from_writer(writer);

    for applicant in applicants {
        csv_writer.serialize(ExportRow::from(applicant))?;
    }

    csv_writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::applicants::loader::sample_applicants;

    #[test]
    fn writes_header_and_display_values() {
        let applicants = sample_applicants();
        let mut buffer = Vec::new();
        write_csv(&mut buffer, &applicants).expect("csv export");

        let text = String::from_utf8(buffer).expect("utf8");
        let mut lines = text.lines();
        assert_eq!(
            lines.next(),
            Some(
                "id,name,title,location,job_title,status,rating,hourly_rate,job_success,\
                 total_earned,hours_worked,jobs_completed,skills,applied_date"
            )
        );
        let row = lines.next().expect("data row");
        assert!(row.starts_with("1,John Smith,Senior Shopify Developer,\"New York, NY\""));
        assert!(row.contains("\"$12,450\""));
        assert!(row.contains("Shopify; Liquid; JavaScript; React"));
    }

    #[test]
    fn empty_input_writes_nothing() {
        let mut buffer = Vec::new();
        write_csv(&mut buffer, std::iter::empty()).expect("csv export");
        assert!(buffer.is_empty());
    }
}
