//! One-shot local HTTP responder for exercising the reqwest client.

use tokio::{
    io::{AsyncReadExt, AsyncWriteExt},
    net::TcpListener,
    task::JoinHandle,
};

use crate::config::ClientConfig;

/// Answers a single request with `response` and hands back the raw request.
pub(crate) async fn serve_once(response: String) -> (ClientConfig, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("can bind a local port");
    let addr = listener.local_addr().expect("has a local address");

    let handle = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.expect("can accept");
        let mut buf = vec![0u8; 8192];
        let n = socket.read(&mut buf).await.expect("can read request");
        socket
            .write_all(response.as_bytes())
            .await
            .expect("can write response");
        let _ = socket.shutdown().await;
        String::from_utf8_lossy(&buf[..n]).to_string()
    });

    let config = ClientConfig::new(&format!("http://{addr}")).expect("valid url");
    (config, handle)
}

pub(crate) fn http_response(status: &str, body: &str) -> String {
    format!(
        "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
        body.len()
    )
}
