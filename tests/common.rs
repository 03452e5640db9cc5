//! Shared helpers for parsim integration tests

use std::io::{BufRead, BufReader, Read, Write};
use std::net::{TcpListener, TcpStream};
use std::thread;

use assert_cmd::{cargo::cargo_bin_cmd, Command};

#[allow(dead_code)]
pub fn parsim() -> Command {
    cargo_bin_cmd!("parsim")
}

/// Stub embedding endpoint serving deterministic vectors over HTTP.
///
/// Identical texts always get identical embeddings, so runs against the stub
/// are reproducible. The listener thread lives until the test process exits.
pub struct EmbeddingStub {
    url: String,
}

#[allow(dead_code)]
impl EmbeddingStub {
    pub fn spawn() -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind stub endpoint");
        let addr = listener.local_addr().expect("stub endpoint addr");

        thread::spawn(move || {
            for stream in listener.incoming() {
                match stream {
                    Ok(stream) => handle_request(stream),
                    Err(_) => break,
                }
            }
        });

        Self {
            url: format!("http://{addr}"),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

fn handle_request(stream: TcpStream) {
    let mut reader = BufReader::new(stream);

    let mut content_length = 0usize;
    loop {
        let mut line = String::new();
        if reader.read_line(&mut line).unwrap_or(0) == 0 {
            return;
        }
        if let Some(value) = line.to_lowercase().strip_prefix("content-length:") {
            content_length = value.trim().parse().unwrap_or(0);
        }
        if line == "\r\n" {
            break;
        }
    }

    let mut body = vec![0u8; content_length];
    if reader.read_exact(&mut body).is_err() {
        return;
    }

    let request: serde_json::Value = match serde_json::from_slice(&body) {
        Ok(value) => value,
        Err(_) => return,
    };
    let inputs = request["input"].as_array().cloned().unwrap_or_default();

    let data: Vec<serde_json::Value> = inputs
        .iter()
        .enumerate()
        .map(|(index, text)| {
            serde_json::json!({
                "index": index,
                "embedding": embedding_for(text.as_str().unwrap_or_default()),
            })
        })
        .collect();
    let response = serde_json::json!({ "data": data }).to_string();

    let mut stream = reader.into_inner();
    let _ = write!(
        stream,
        "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        response.len(),
        response
    );
}

/// Deterministic toy embedding derived from the text's bytes.
fn embedding_for(text: &str) -> Vec<f64> {
    let bytes = text.as_bytes();
    let sum: u64 = bytes.iter().map(|&b| u64::from(b)).sum();
    vec![1.0, bytes.len() as f64, (sum % 97) as f64]
}
