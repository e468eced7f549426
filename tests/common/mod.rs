use hello_service::startup::build_router;
use tokio::net::TcpListener;

pub struct TestApp {
    pub address: String,
}

impl TestApp {
    /// Spawn the router on an ephemeral port. The greeting path touches no
    /// external service, so no database is required here.
    pub async fn spawn() -> Self {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind random port");
        let port = listener
            .local_addr()
            .expect("Failed to read local address")
            .port();
        let address = format!("http://127.0.0.1:{}", port);

        tokio::spawn(async move {
            axum::serve(listener, build_router()).await.ok();
        });

        TestApp { address }
    }
}
