use crate::config::Settings;
use crate::error::AppError;
use crate::handlers;
use crate::services::MongoDb;
use axum::Router;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::trace::TraceLayer;

/// The router is a single catch-all: every method and path reaches the
/// greeting handler, so no route table exists.
pub fn build_router() -> Router {
    Router::new()
        .fallback(handlers::greet)
        .layer(TraceLayer::new_for_http())
}

pub struct Application {
    port: u16,
    listener: TcpListener,
    router: Router,
    db: MongoDb,
}

impl Application {
    /// Bind the listener and assemble the router. The database handle must
    /// already be connected; it is owned here so the serve loop can release
    /// it on exit.
    pub async fn build(settings: Settings, db: MongoDb) -> Result<Self, AppError> {
        let addr = SocketAddr::from(([0, 0, 0, 0], settings.port));
        let listener = TcpListener::bind(addr).await.map_err(|e| {
            tracing::error!("Failed to bind TCP listener to {}: {}", addr, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        Ok(Self {
            port,
            listener,
            router: build_router(),
            db,
        })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    /// Serve until an unrecoverable failure or an external shutdown signal,
    /// then release the database connection. Cleanup runs on both outcomes.
    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        let result = axum::serve(self.listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await;

        self.db.disconnect().await;
        result
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
