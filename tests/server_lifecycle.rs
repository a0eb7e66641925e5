//! Serving over a real socket and shutting down.

use std::time::Duration;

use operadora_routes::config::AppConfig;
use operadora_routes::http::HttpServer;
use operadora_routes::lifecycle::Shutdown;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

async fn raw_get(addr: std::net::SocketAddr, path: &str) -> String {
    let mut stream = TcpStream::connect(addr).await.unwrap();
    let request = format!(
        "GET {} HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n",
        path
    );
    stream.write_all(request.as_bytes()).await.unwrap();

    let mut response = String::new();
    stream.read_to_string(&mut response).await.unwrap();
    response
}

#[tokio::test]
async fn test_serves_until_shutdown() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let server = HttpServer::new(AppConfig::default()).unwrap();
    let handle = tokio::spawn(server.run(listener, shutdown.subscribe()));

    let ok = raw_get(addr, "/operadoras/12345678000190").await;
    assert!(ok.starts_with("HTTP/1.1 200"), "{}", ok);
    assert!(ok.contains("\"cnpj\":\"12345678000190\""));
    assert!(ok.to_ascii_lowercase().contains("x-request-id:"));

    let missing = raw_get(addr, "/unknown").await;
    assert!(missing.starts_with("HTTP/1.1 404"), "{}", missing);

    shutdown.trigger();
    let result = tokio::time::timeout(Duration::from_secs(5), handle)
        .await
        .expect("server did not stop")
        .unwrap();
    assert!(result.is_ok());
}
