//! Throwaway HTTP/1.1 server that records each request and answers every one
//! with the same canned response.

#![allow(dead_code)]

use std::rc::Rc;
use std::sync::{Arc, Mutex};

use chat_portal::models::{AuthResponse, User};
use chat_portal::services::auth::AuthService;
use chat_portal::services::chat::ChatService;
use chat_portal::services::storage::MemoryStore;
use reqwest::Client;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

#[derive(Debug, Clone)]
pub struct CapturedRequest {
    pub request_line: String,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

impl CapturedRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    pub fn json(&self) -> serde_json::Value {
        serde_json::from_slice(&self.body).expect("request body should be JSON")
    }
}

pub struct StubServer {
    pub base_url: String,
    captured: Arc<Mutex<Vec<CapturedRequest>>>,
}

impl StubServer {
    pub async fn start(status: u16, body: &str) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("listener should bind");
        let addr = listener.local_addr().expect("local addr should resolve");
        let captured = Arc::new(Mutex::new(Vec::new()));
        let captured_for_server = Arc::clone(&captured);
        let body = body.to_string();

        tokio::spawn(async move {
            loop {
                let Ok((mut stream, _)) = listener.accept().await else {
                    break;
                };
                let Ok(request) = read_http_request(&mut stream).await else {
                    continue;
                };
                captured_for_server.lock().unwrap().push(request);

                let response = format!(
                    "HTTP/1.1 {} {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                    status,
                    reason(status),
                    body.len(),
                    body
                );
                let _ = stream.write_all(response.as_bytes()).await;
                let _ = stream.shutdown().await;
            }
        });

        Self {
            base_url: format!("http://{}", addr),
            captured,
        }
    }

    pub fn requests(&self) -> Vec<CapturedRequest> {
        self.captured.lock().unwrap().clone()
    }
}

fn reason(status: u16) -> &'static str {
    match status {
        200 => "OK",
        201 => "Created",
        400 => "Bad Request",
        401 => "Unauthorized",
        409 => "Conflict",
        500 => "Internal Server Error",
        _ => "Status",
    }
}

async fn read_http_request(stream: &mut TcpStream) -> Result<CapturedRequest, String> {
    let mut buffer = Vec::new();
    let mut header_end = None;
    while header_end.is_none() {
        let mut chunk = [0_u8; 1024];
        let read = stream.read(&mut chunk).await.map_err(|e| e.to_string())?;
        if read == 0 {
            return Err("unexpected EOF while reading headers".to_string());
        }
        buffer.extend_from_slice(&chunk[..read]);
        header_end = buffer
            .windows(4)
            .position(|w| w == b"\r\n\r\n")
            .map(|i| i + 4);
    }
    let header_end = header_end.unwrap();

    let header_text = std::str::from_utf8(&buffer[..header_end]).map_err(|e| e.to_string())?;
    let mut lines = header_text.split("\r\n").filter(|l| !l.is_empty());
    let request_line = lines.next().ok_or("missing request line")?.to_string();

    let mut headers = Vec::new();
    let mut content_length = 0_usize;
    for line in lines {
        let Some((name, value)) = line.split_once(':') else {
            continue;
        };
        let value = value.trim().to_string();
        if name.eq_ignore_ascii_case("content-length") {
            content_length = value.parse().map_err(|_| "bad content-length")?;
        }
        headers.push((name.to_string(), value));
    }

    let mut body = buffer[header_end..].to_vec();
    while body.len() < content_length {
        let mut chunk = vec![0_u8; content_length - body.len()];
        let read = stream.read(&mut chunk).await.map_err(|e| e.to_string())?;
        if read == 0 {
            return Err("unexpected EOF while reading body".to_string());
        }
        body.extend_from_slice(&chunk[..read]);
    }
    body.truncate(content_length);

    Ok(CapturedRequest { request_line, headers, body })
}

pub fn client() -> Client {
    Client::builder().no_proxy().build().expect("client should build")
}

pub fn auth_service(api_url: Option<&str>) -> Rc<AuthService> {
    Rc::new(AuthService::new(
        client(),
        api_url.map(String::from),
        Rc::new(MemoryStore::new()),
    ))
}

pub fn chat_service(ai_url: Option<&str>, auth: Rc<AuthService>) -> ChatService {
    ChatService::new(client(), ai_url.map(String::from), auth)
}

pub fn auth_response(token: &str) -> AuthResponse {
    AuthResponse {
        message: "ok".into(),
        user: User { id: 42, username: "ana".into(), email: "ana@example.com".into() },
        token: token.into(),
    }
}

pub const AUTH_OK_BODY: &str = r#"{"message":"Login successful","user":{"id":42,"username":"ana","email":"ana@example.com"},"token":"tok-123"}"#;

pub const CHAT_OK_BODY: &str = r#"{"id":"chatcmpl-1","object":"chat.completion","created":1700000000,"model":"test-model","choices":[{"index":0,"message":{"role":"assistant","content":"Hello there"},"finish_reason":"stop"}],"usage":{"prompt_tokens":5,"completion_tokens":2,"total_tokens":7}}"#;
