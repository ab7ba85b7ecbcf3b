// Minimal HTTP/1.1 stub for exercising the real clients against localhost.
//
// Each connection gets one canned response, in order; once the list runs out
// the last response is repeated. Every request is recorded before its response
// is written, so callers can inspect it as soon as the client returns.

use std::sync::{Arc, Mutex};
use tokio::io::{AsyncBufReadExt, AsyncReadExt, AsyncWriteExt, BufReader};
use tokio::net::{TcpListener, TcpStream};

#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    /// Path plus query string, as sent on the request line.
    pub target: String,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl RecordedRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

#[derive(Debug, Clone)]
pub struct StubResponse {
    status: u16,
    body: String,
    truncated: bool,
}

impl StubResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
            truncated: false,
        }
    }

    /// Declares a longer body than it sends, so reading the body fails.
    pub fn truncated(status: u16) -> Self {
        Self {
            status,
            body: "partial".to_string(),
            truncated: true,
        }
    }
}

pub struct StubServer {
    base_url: String,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl StubServer {
    pub async fn start(responses: Vec<StubResponse>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base_url = format!("http://{}", listener.local_addr().unwrap());
        let requests = Arc::new(Mutex::new(Vec::new()));
        let recorded = requests.clone();

        tokio::spawn(async move {
            let mut queue = responses.into_iter();
            let mut last: Option<StubResponse> = None;
            loop {
                let Ok((stream, _)) = listener.accept().await else {
                    break;
                };
                let Some(response) = queue.next().or_else(|| last.clone()) else {
                    break;
                };
                last = Some(response.clone());
                serve_one(stream, response, &recorded).await;
            }
        });

        Self { base_url, requests }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }
}

async fn serve_one(
    stream: TcpStream,
    response: StubResponse,
    recorded: &Mutex<Vec<RecordedRequest>>,
) -> Option<()> {
    let (read, mut write) = stream.into_split();
    let mut reader = BufReader::new(read);

    let mut request_line = String::new();
    reader.read_line(&mut request_line).await.ok()?;
    let mut parts = request_line.split_whitespace();
    let method = parts.next()?.to_string();
    let target = parts.next()?.to_string();

    let mut headers = Vec::new();
    loop {
        let mut line = String::new();
        reader.read_line(&mut line).await.ok()?;
        let line = line.trim_end();
        if line.is_empty() {
            break;
        }
        if let Some((name, value)) = line.split_once(':') {
            headers.push((name.trim().to_string(), value.trim().to_string()));
        }
    }

    let content_length = headers
        .iter()
        .find(|(k, _)| k.eq_ignore_ascii_case("content-length"))
        .and_then(|(_, v)| v.parse().ok())
        .unwrap_or(0);
    let mut body = vec![0; content_length];
    reader.read_exact(&mut body).await.ok()?;

    recorded.lock().unwrap().push(RecordedRequest {
        method,
        target,
        headers,
        body: String::from_utf8_lossy(&body).into_owned(),
    });

    let declared = if response.truncated {
        response.body.len() + 64
    } else {
        response.body.len()
    };
    let head = format!(
        "HTTP/1.1 {} Stub\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
        response.status, declared
    );
    write.write_all(head.as_bytes()).await.ok()?;
    write.write_all(response.body.as_bytes()).await.ok()?;
    write.shutdown().await.ok()
}
