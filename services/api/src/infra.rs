use hiring_dashboard::applicants::{
    Applicant, ApplicantDirectoryService, ApplicantLoader, InMemoryApplicantRepository,
    LoadReport,
};
use hiring_dashboard::config::{AppConfig, DataSourceConfig};
use hiring_dashboard::error::AppError;
use hiring_dashboard::telemetry;
use metrics_exporter_prometheus::PrometheusHandle;
use std::path::PathBuf;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

pub(crate) type DirectoryService = ApplicantDirectoryService<InMemoryApplicantRepository>;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

pub(crate) fn apply_data_override(config: &mut DataSourceConfig, data: Option<PathBuf>) {
    if let Some(path) = data {
        config.explicit_path = Some(path);
    }
}

/// Loads configuration and the applicant export for the one-shot CLI commands.
pub(crate) fn load_report(data: Option<PathBuf>) -> Result<LoadReport, AppError> {
    let mut config = AppConfig::load()?;
    apply_data_override(&mut config.data, data);
    telemetry::init(&config.telemetry)?;
    Ok(ApplicantLoader::from_config(&config.data)?)
}

pub(crate) fn directory_service(applicants: Vec<Applicant>) -> Arc<DirectoryService> {
    let repository = Arc::new(InMemoryApplicantRepository::new(applicants));
    Arc::new(ApplicantDirectoryService::new(repository))
}
