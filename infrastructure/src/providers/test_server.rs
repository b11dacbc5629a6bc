//! One-shot HTTP server for adapter tests.

use std::sync::{Arc, Mutex};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

/// The request the server received, raw
#[derive(Default)]
pub struct Captured {
    pub head: String,
    pub body: String,
}

/// Serve exactly one request with `status` and a JSON `body`.
///
/// Returns the base URL and a handle to the captured request.
pub async fn serve_once(status: u16, body: &'static str) -> (String, Arc<Mutex<Captured>>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let captured = Arc::new(Mutex::new(Captured::default()));
    let sink = Arc::clone(&captured);

    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut buf = Vec::new();
        let mut chunk = [0u8; 4096];
        loop {
            let n = socket.read(&mut chunk).await.unwrap();
            if n == 0 {
                break;
            }
            buf.extend_from_slice(&chunk[..n]);
            if let Some(header_end) = find(&buf, b"\r\n\r\n") {
                let head = String::from_utf8_lossy(&buf[..header_end]).to_string();
                let length = content_length(&head);
                if buf.len() >= header_end + 4 + length {
                    let mut captured = sink.lock().unwrap();
                    captured.body =
                        String::from_utf8_lossy(&buf[header_end + 4..header_end + 4 + length])
                            .to_string();
                    captured.head = head;
                    break;
                }
            }
        }
        let response = format!(
            "HTTP/1.1 {status} Test\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
            body.len()
        );
        socket.write_all(response.as_bytes()).await.unwrap();
        socket.shutdown().await.ok();
    });

    (format!("http://{addr}"), captured)
}

fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack.windows(needle.len()).position(|w| w == needle)
}

fn content_length(head: &str) -> usize {
    head.lines()
        .filter_map(|line| line.split_once(':'))
        .find(|(name, _)| name.trim().eq_ignore_ascii_case("content-length"))
        .and_then(|(_, value)| value.trim().parse().ok())
        .unwrap_or(0)
}
