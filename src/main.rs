use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use axum_prometheus::PrometheusMetricLayer;
use chrono::{DateTime, Local, Utc};
use clap::{Args, Parser, Subcommand};
use metrics_exporter_prometheus::PrometheusHandle;
use practice_ai::capability::{
    CapabilityEngine, CapabilityMatrixRow, EngineConfig, ServiceCatalogue, ServiceReadinessRow,
    TeamMember,
};
use practice_ai::config::AppConfig;
use practice_ai::error::AppError;
use practice_ai::roster::RosterImporter;
use practice_ai::telemetry;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::io::Cursor;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
struct AppState {
    readiness: Arc<AtomicBool>,
    metrics: PrometheusHandle,
    engine: Arc<EngineConfig>,
}

#[derive(Parser, Debug)]
#[command(
    name = "Practice Capability Service",
    about = "Compute service-line capability and delivery readiness for an accountancy practice",
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
    /// Run the capability engine against a roster export
    Capability {
        #[command(subcommand)]
        command: CapabilityCommand,
    },
}

#[derive(Args, Debug, Default)]
struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    port: Option<u16>,
}

#[derive(Subcommand, Debug)]
enum CapabilityCommand {
    /// Print the capability matrix (one row per service line)
    Matrix(CapabilityArgs),
    /// Print the service readiness report with gaps and recommendations
    Readiness(CapabilityArgs),
}

#[derive(Args, Debug)]
struct CapabilityArgs {
    /// Skill-assessment CSV export (Member ID, Member Name, Role, Skill, Level, Interest)
    #[arg(long)]
    roster_csv: PathBuf,
    /// Restrict output to a single service line id
    #[arg(long)]
    service: Option<String>,
    /// Include the per-skill qualified-member breakdown
    #[arg(long)]
    detail: bool,
}

#[derive(Debug, Deserialize)]
struct CapabilityRequest {
    /// Inline team roster; alternative to `roster_csv`.
    #[serde(default)]
    team: Option<Vec<TeamMember>>,
    /// Raw CSV export content; used when `team` is absent.
    #[serde(default)]
    roster_csv: Option<String>,
}

#[derive(Debug, Serialize)]
struct CapabilityMatrixResponse {
    generated_at: DateTime<Utc>,
    team_size: usize,
    rows: Vec<CapabilityMatrixRow>,
}

#[derive(Debug, Serialize)]
struct ServiceReadinessResponse {
    generated_at: DateTime<Utc>,
    team_size: usize,
    rows: Vec<ServiceReadinessRow>,
}

#[tokio::main]
async fn main() {
    if let Err(err) = run_cli().await {
        eprintln!("application error: {err}");
        std::process::exit(1);
    }
}

async fn run_cli() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => run_server(args).await,
        Command::Capability { command } => run_capability(command),
    }
}

async fn run_server(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(config.environment, &config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(AtomicBool::new(false));
    let state = AppState {
        readiness: readiness_flag.clone(),
        metrics: prometheus_handle,
        engine: Arc::new(config.engine.clone()),
    };

    let app = Router::new()
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .route("/api/v1/capability/matrix", post(capability_matrix_endpoint))
        .route(
            "/api/v1/capability/readiness",
            post(service_readiness_endpoint),
        )
        .layer(prometheus_layer)
        .with_state(state);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "capability service ready");

    axum::serve(listener, app).await?;
    Ok(())
}

fn run_capability(command: CapabilityCommand) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let engine = CapabilityEngine::new(config.engine);
    let catalogue = ServiceCatalogue::standard();

    match command {
        CapabilityCommand::Matrix(args) => {
            let team = RosterImporter::from_path(&args.roster_csv)?;
            let rows = engine.capability_matrix(&catalogue, &team);
            render_capability_matrix(&rows, team.len(), args.service.as_deref(), args.detail);
        }
        CapabilityCommand::Readiness(args) => {
            let team = RosterImporter::from_path(&args.roster_csv)?;
            let rows = engine.service_readiness(&catalogue, &team);
            render_service_readiness(&rows, team.len(), args.service.as_deref(), args.detail);
        }
    }

    Ok(())
}

async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

async fn readiness_endpoint(State(state): State<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

async fn metrics_endpoint(State(state): State<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

fn resolve_team(payload: CapabilityRequest) -> Result<Vec<TeamMember>, AppError> {
    match (payload.team, payload.roster_csv) {
        (Some(team), _) => Ok(team),
        (None, Some(csv)) => {
            let reader = Cursor::new(csv.into_bytes());
            Ok(RosterImporter::from_reader(reader)?)
        }
        (None, None) => Ok(Vec::new()),
    }
}

async fn capability_matrix_endpoint(
    State(state): State<AppState>,
    Json(payload): Json<CapabilityRequest>,
) -> Result<Json<CapabilityMatrixResponse>, AppError> {
    let team = resolve_team(payload)?;
    let engine = CapabilityEngine::new(state.engine.as_ref().clone());
    let catalogue = ServiceCatalogue::standard();
    let rows = engine.capability_matrix(&catalogue, &team);

    Ok(Json(CapabilityMatrixResponse {
        generated_at: Utc::now(),
        team_size: team.len(),
        rows,
    }))
}

async fn service_readiness_endpoint(
    State(state): State<AppState>,
    Json(payload): Json<CapabilityRequest>,
) -> Result<Json<ServiceReadinessResponse>, AppError> {
    let team = resolve_team(payload)?;
    let engine = CapabilityEngine::new(state.engine.as_ref().clone());
    let catalogue = ServiceCatalogue::standard();
    let rows = engine.service_readiness(&catalogue, &team);

    Ok(Json(ServiceReadinessResponse {
        generated_at: Utc::now(),
        team_size: team.len(),
        rows,
    }))
}

fn render_capability_matrix(
    rows: &[CapabilityMatrixRow],
    team_size: usize,
    service_filter: Option<&str>,
    detail: bool,
) {
    println!("Capability matrix ({})", Local::now().date_naive());
    println!("Team size: {team_size}");

    for row in rows {
        if service_filter.is_some_and(|id| id != row.service.id) {
            continue;
        }

        println!(
            "\n{} [{}] - {:.0}%",
            row.service.name,
            row.readiness_label,
            row.readiness_percent
        );
        println!(
            "  Capable: {}",
            if row.capable_members.is_empty() {
                "none".to_string()
            } else {
                row.capable_members.join(", ")
            }
        );
        if !row.partial_capable_members.is_empty() {
            println!("  Partially capable: {}", row.partial_capable_members.join(", "));
        }

        if detail {
            for entry in &row.skill_coverage {
                let marker = if entry.is_critical { "critical" } else { "standard" };
                println!(
                    "  - {} (level {}+, {}): {} qualified",
                    entry.skill_name,
                    entry.minimum_level,
                    marker,
                    entry.qualified_members.len()
                );
            }
        }
    }
}

fn render_service_readiness(
    rows: &[ServiceReadinessRow],
    team_size: usize,
    service_filter: Option<&str>,
    detail: bool,
) {
    println!("Service readiness report ({})", Local::now().date_naive());
    println!("Team size: {team_size}");

    for row in rows {
        if service_filter.is_some_and(|id| id != row.service.id) {
            continue;
        }

        println!(
            "\n{} [{}] - {:.0}%",
            row.service.name,
            row.readiness_label,
            row.readiness_percent
        );
        println!(
            "  Skills: {}/{} ready, {}/{} critical",
            row.skills_ready, row.total_skills, row.critical_skills_met, row.total_critical_skills
        );

        if row.team_members_capable.is_empty() {
            println!("  Contributors: none");
        } else {
            println!("  Contributors:");
            for member in &row.team_members_capable {
                let star = if member.has_high_interest { " *" } else { "" };
                println!(
                    "    #{} {}{} - {}/{} skills, {}% involvement, exp level {}",
                    member.interest_rank,
                    member.member_name,
                    star,
                    member.skills_covered,
                    member.total_required,
                    member.desired_involvement,
                    member.experience_level
                );
            }
        }

        if row.gaps.is_empty() {
            println!("  Gaps: none");
        } else {
            println!("  Gaps:");
            for gap in &row.gaps {
                let marker = if gap.is_critical { "critical" } else { "standard" };
                println!(
                    "    - {} ({}): {} qualified, {} more needed (avg level {:.1})",
                    gap.skill_name, marker, gap.members_meeting_minimum, gap.gap, gap.average_level
                );
            }
        }

        if detail && !row.recommendations.is_empty() {
            println!("  Recommendations:");
            for recommendation in &row.recommendations {
                println!("    - {recommendation}");
            }
        }
    }
}
