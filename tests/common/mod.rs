#![allow(dead_code)]

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

use furniture_ner::network::{FetchMode, NetworkError, PageFetcher, RawContent};

// * Serves canned HTML per URL; unknown URLs fail like a 404.
#[derive(Default)]
pub struct StubFetcher {
    pages: HashMap<String, String>,
    calls: Mutex<HashMap<(String, bool), usize>>,
}

impl StubFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page(mut self, url: &str, html: &str) -> Self {
        self.pages.insert(url.to_string(), html.to_string());
        self
    }

    pub fn text_calls(&self, url: &str) -> usize {
        self.calls(url, true)
    }

    pub fn byte_calls(&self, url: &str) -> usize {
        self.calls(url, false)
    }

    fn calls(&self, url: &str, text: bool) -> usize {
        let calls = self.calls.lock().unwrap();
        calls.get(&(url.to_string(), text)).copied().unwrap_or(0)
    }
}

#[async_trait]
impl PageFetcher for StubFetcher {
    async fn try_fetch(&self, url: &str, mode: FetchMode) -> Result<RawContent, NetworkError> {
        {
            let mut calls = self.calls.lock().unwrap();
            *calls.entry((url.to_string(), mode == FetchMode::Text)).or_insert(0) += 1;
        }

        let html = self
            .pages
            .get(url)
            .ok_or_else(|| NetworkError::Status(404, url.to_string()))?;

        Ok(match mode {
            FetchMode::Text => RawContent::Text(html.clone()),
            FetchMode::Bytes => RawContent::Bytes(html.clone().into_bytes()),
        })
    }
}

// * One-shot-per-connection HTTP responder on 127.0.0.1; returns its base URL.
pub async fn serve(status_line: &'static str, body: &'static str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        loop {
            let Ok((mut socket, _)) = listener.accept().await else { break };
            tokio::spawn(async move {
                let mut buf = [0u8; 4096];
                let _ = socket.read(&mut buf).await;
                let response = format!(
                    "HTTP/1.1 {}\r\nContent-Type: text/html; charset=utf-8\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                    status_line,
                    body.len(),
                    body
                );
                let _ = socket.write_all(response.as_bytes()).await;
                let _ = socket.shutdown().await;
            });
        }
    });

    format!("http://{}/", addr)
}

// * Accepts connections and never answers.
pub async fn serve_hanging() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        let mut held = Vec::new();
        while let Ok((socket, _)) = listener.accept().await {
            held.push(socket);
        }
    });

    format!("http://{}/", addr)
}

pub const SHORT_TIMEOUT: Duration = Duration::from_millis(300);
