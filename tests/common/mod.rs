#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;
use async_trait::async_trait;
use sdg_classifier::errors::{SdgError, SdgResult};
use sdg_classifier::structs::prediction::Prediction;
use sdg_classifier::traits::sdg_classifier::SdgClassifier;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::oneshot;

pub fn pred(code: &str, name: &str, score: f64) -> Prediction {
    Prediction::new(code, name, score)
}

pub fn refused() -> SdgError {
    SdgError::network_error("SDG classification", None, None, "connection refused")
}

#[derive(Clone)]
pub enum Reply {
    Predictions(Vec<Prediction>),
    Fail,
}

/// Answers from a fixed script keyed by line text; unknown lines get no predictions.
#[derive(Default)]
pub struct ScriptedClassifier {
    replies: HashMap<String, Reply>,
    calls: Mutex<Vec<String>>,
}

impl ScriptedClassifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reply(mut self, text: &str, predictions: Vec<Prediction>) -> Self {
        self.replies.insert(text.to_string(), Reply::Predictions(predictions));
        self
    }

    pub fn top(self, text: &str, code: &str, name: &str) -> Self {
        self.reply(text, vec![pred("1", "No poverty", 0.01), pred(code, name, 0.9)])
    }

    pub fn fail(mut self, text: &str) -> Self {
        self.replies.insert(text.to_string(), Reply::Fail);
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl SdgClassifier for ScriptedClassifier {
    async fn classify(&self, text: &str) -> SdgResult<Vec<Prediction>> {
        self.calls.lock().unwrap().push(text.to_string());
        match self.replies.get(text) {
            Some(Reply::Predictions(predictions)) => Ok(predictions.clone()),
            Some(Reply::Fail) => Err(refused()),
            None => Ok(Vec::new()),
        }
    }
}

/// Lines named `"<delay_ms>:<code>"` answer with `code` after `delay_ms`,
/// tracking the peak number of concurrent calls.
#[derive(Default)]
pub struct DelayedClassifier {
    in_flight: AtomicUsize,
    pub peak: AtomicUsize,
}

#[async_trait]
impl SdgClassifier for DelayedClassifier {
    async fn classify(&self, text: &str) -> SdgResult<Vec<Prediction>> {
        let current = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.peak.fetch_max(current, Ordering::SeqCst);

        let (delay, code) = text.split_once(':').unwrap();
        tokio::time::sleep(Duration::from_millis(delay.parse().unwrap())).await;

        self.in_flight.fetch_sub(1, Ordering::SeqCst);
        Ok(vec![pred(code, &format!("Goal {code}"), 1.0)])
    }
}

/// Fails the first `failures` calls, then answers with SDG 13.
pub struct FlakyClassifier {
    failures: usize,
    pub calls: AtomicUsize,
}

impl FlakyClassifier {
    pub const fn new(failures: usize) -> Self {
        Self { failures, calls: AtomicUsize::new(0) }
    }
}

#[async_trait]
impl SdgClassifier for FlakyClassifier {
    async fn classify(&self, _text: &str) -> SdgResult<Vec<Prediction>> {
        if self.calls.fetch_add(1, Ordering::SeqCst) < self.failures {
            return Err(refused());
        }
        Ok(vec![pred("13", "Climate action", 0.8)])
    }
}

/// Serves one canned HTTP response and hands back the raw request it received.
pub async fn serve_once(status_line: &'static str, body: &'static str) -> (String, oneshot::Receiver<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let (tx, rx) = oneshot::channel();

    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let request = read_request(&mut socket).await;
        let response = format!(
            "HTTP/1.1 {status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        socket.write_all(response.as_bytes()).await.unwrap();
        let _ = socket.shutdown().await;
        let _ = tx.send(request);
    });

    (format!("http://{addr}/classify"), rx)
}

/// URL of a local port nothing listens on.
pub async fn closed_endpoint() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}/classify")
}

async fn read_request(socket: &mut TcpStream) -> String {
    let mut buffer = Vec::new();
    let mut chunk = [0u8; 1024];
    loop {
        let read = socket.read(&mut chunk).await.unwrap();
        if read == 0 {
            break;
        }
        buffer.extend_from_slice(&chunk[..read]);

        if let Some(end) = buffer.windows(4).position(|w| w == b"\r\n\r\n") {
            let headers = String::from_utf8_lossy(&buffer[..end]).to_lowercase();
            let length = headers
                .lines()
                .find_map(|line| line.strip_prefix("content-length:"))
                .and_then(|value| value.trim().parse::<usize>().ok())
                .unwrap_or(0);
            if buffer.len() >= end + 4 + length {
                break;
            }
        }
    }
    String::from_utf8_lossy(&buffer).into_owned()
}
