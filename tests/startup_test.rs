use hello_service::config::{MongoConfig, Settings};
use hello_service::services::MongoDb;
use hello_service::startup::Application;
use std::time::Duration;
use tokio::net::TcpListener;

#[tokio::test]
async fn connect_fails_when_store_is_unreachable_within_deadline() {
    // Nothing listens on port 1; the attempt must give up within the deadline.
    let result = MongoDb::connect("mongodb://127.0.0.1:1", Duration::from_secs(1)).await;
    assert!(result.is_err());
}

#[tokio::test]
async fn connect_fails_on_unparseable_uri() {
    let result = MongoDb::new("not-a-mongodb-uri", Duration::from_secs(1)).await;
    assert!(result.is_err());
}

#[tokio::test]
async fn build_fails_when_port_is_already_occupied() {
    let occupied = TcpListener::bind("0.0.0.0:0")
        .await
        .expect("Failed to bind random port");
    let port = occupied.local_addr().expect("Failed to read local address").port();

    // Client construction is lazy, so no running server is needed here.
    let db = MongoDb::new("mongodb://127.0.0.1:27017", Duration::from_secs(1))
        .await
        .expect("Failed to construct client");

    let settings = Settings {
        port,
        mongodb: MongoConfig::default(),
    };

    let result = Application::build(settings, db).await;
    assert!(result.is_err());
}
