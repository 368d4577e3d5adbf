use std::process::ExitCode;

use commute_server::config::ServerConfig;
use commute_server::planner::Routes;
use commute_server::schedule::Timetable;
use commute_server::web::{AppState, create_router};
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "commute_server=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("invalid configuration: {e}");
            return ExitCode::FAILURE;
        }
    };

    // The server never runs without a valid timetable
    let routes = match Timetable::load(&config.timetable_path)
        .and_then(|timetable| Routes::from_timetable(&timetable))
    {
        Ok(routes) => routes,
        Err(e) => {
            error!("failed to load timetable: {e}");
            return ExitCode::FAILURE;
        }
    };
    info!(
        transfer_route = routes.transfer.name(),
        express_route = routes.express.name(),
        "routes ready"
    );

    let state = AppState::new(routes, config.planner);
    let app = create_router(state);

    let listener = match tokio::net::TcpListener::bind(config.bind).await {
        Ok(listener) => listener,
        Err(e) => {
            error!("failed to bind {}: {e}", config.bind);
            return ExitCode::FAILURE;
        }
    };

    info!("Commute planner listening on http://{}", config.bind);
    info!("  GET /health                 - Health check");
    info!("  GET /commute[?now=HH:MM]    - Ranked commute options");

    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        error!("server error: {e}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("failed to listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
    info!("shutting down");
}
