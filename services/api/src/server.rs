use crate::cli::ServeArgs;
use crate::infra::{apply_data_override, directory_service, AppState};
use crate::routes::with_dashboard_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use hiring_dashboard::applicants::ApplicantLoader;
use hiring_dashboard::config::AppConfig;
use hiring_dashboard::error::AppError;
use hiring_dashboard::telemetry;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }
    apply_data_override(&mut config.data, args.source.data.take());

    telemetry::init(&config.telemetry)?;

    let report = ApplicantLoader::from_config(&config.data)?;
    info!(
        source = ?report.source,
        applicants = report.applicants.len(),
        rejected = report.rejected.len(),
        warnings = report.warnings.len(),
        "applicant directory resident"
    );

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let service = directory_service(report.applicants);
    let app = with_dashboard_routes(service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "hiring dashboard ready");

    axum::serve(listener, app).await?;
    Ok(())
}
