use clap::Parser;
use location_api::{
    build_router,
    cli::Args,
    config::Config,
    initialization::{export_hierarchy, load_location_service},
    utils::logger::init_logger,
    AppState,
};
use tokio::net::TcpListener;
use tokio::signal;
use tracing::{error, info};

#[tokio::main]
async fn main() {
    init_logger();

    let args = Args::parse();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    let location_service = match load_location_service(args.dataset.as_deref()).await {
        Ok(service) => service,
        Err(e) => {
            error!("Failed to load dataset: {}", e);
            std::process::exit(1);
        }
    };

    if let Some(destination) = &args.export {
        if let Err(e) = export_hierarchy(&location_service, &config, destination).await {
            error!("Failed to export hierarchy: {}", e);
            std::process::exit(1);
        }
        return;
    }

    let address = config.bind_address();
    let app = build_router(AppState::new(config, location_service));

    let listener = match TcpListener::bind(&address).await {
        Ok(listener) => listener,
        Err(e) => {
            error!("Cannot bind to {}: {}", address, e);
            std::process::exit(1);
        }
    };

    info!("Location API running on http://{}", address);

    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        error!("Server error: {}", e);
        std::process::exit(1);
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                error!("Failed to install signal handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Signal received, starting graceful shutdown");
}
