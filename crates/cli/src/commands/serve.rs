use anyhow::Result;
use sample_crud_core::ServerConfig;
use sample_crud_http::{create_router, AppState};
use sample_crud_service::PostService;
use std::sync::Arc;

use crate::connect_storage;

pub(crate) async fn run(port: Option<u16>, host: Option<String>) -> Result<()> {
    let mut server = ServerConfig::from_env();
    if let Some(port) = port {
        server.port = port;
    }
    if let Some(host) = host {
        server.host = host;
    }

    let storage = Arc::new(connect_storage().await?);
    let post_service = Arc::new(PostService::new(storage));
    let state = Arc::new(AppState::new(post_service));

    let router = create_router(state);
    let addr = server.bind_addr();
    tracing::info!("Starting HTTP server on {}", addr);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, router).with_graceful_shutdown(shutdown_signal()).await?;
    tracing::info!("HTTP server stopped");

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};

        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            },
            Err(e) => {
                tracing::warn!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            },
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
    tracing::info!("Shutdown signal received");
}
