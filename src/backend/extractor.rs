//! Worker-side of the extraction request cycle.
//!
//! Each accepted submission spawns one thread that issues exactly one
//! blocking HTTP request against the extraction endpoint: a GET with the
//! percent-encoded URL for link submissions, a POST with the raw file bytes
//! for local files. Success requires HTTP 200 with a JSON content type;
//! everything else surfaces as an [`ExtractError`] and ends up on the
//! generic error panel. Requests are never retried or cancelled; one is
//! abandoned only if the app exits.

use reqwest::StatusCode;
use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;
use std::sync::mpsc::Sender;
use std::thread;
use std::time::Instant;
use thiserror::Error;

use crate::drop_zone::DropPayload;
use crate::messages::ResponseMessage;
use crate::wire::ExtractionResponse;

#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("server answered with status {0}")]
    Status(StatusCode),

    #[error("server answered with content type {0:?} instead of JSON")]
    ContentType(Option<String>),

    #[error("malformed response body: {0}")]
    Body(#[from] serde_json::Error),

    #[error("could not read dropped file: {0}")]
    ReadFile(#[from] std::io::Error),
}

/// GET URL for a link submission, with the WAD URL percent-encoded into the
/// query string.
pub fn request_url_for(endpoint: &str, wad_url: &str) -> String {
    format!("{}?url={}", endpoint, urlencoding::encode(wad_url))
}

pub struct Extractor {
    endpoint: String,
}

impl Extractor {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }

    /// Fire off the request for an accepted payload. The result comes back
    /// on `sender` as a single [`ResponseMessage::ExtractionFinished`].
    pub fn dispatch(
        &self,
        payload: DropPayload,
        sender: Sender<ResponseMessage>,
        ctx: egui::Context,
    ) {
        let endpoint = self.endpoint.clone();
        let fallback_label = payload.fallback_label();

        thread::spawn(move || {
            tracing::info!(label = payload.label(), "dispatching extraction request");
            let started = Instant::now();
            let outcome = blocking_extract(&endpoint, &payload);
            let elapsed = started.elapsed();

            if let Err(error) = &outcome {
                tracing::warn!(%error, "extraction request failed");
            }
            if sender
                .send(ResponseMessage::ExtractionFinished {
                    outcome,
                    elapsed,
                    fallback_label,
                })
                .is_err()
            {
                tracing::warn!("app went away before the extraction finished");
            }
            ctx.request_repaint();
        });
    }
}

fn blocking_extract(
    endpoint: &str,
    payload: &DropPayload,
) -> Result<ExtractionResponse, ExtractError> {
    let client = Client::new();

    let response = match payload {
        DropPayload::Url(url) => client.get(request_url_for(endpoint, url)).send()?,
        DropPayload::File { path, .. } => {
            let bytes = std::fs::read(path)?;
            client.post(endpoint).body(bytes).send()?
        }
    };

    let status = response.status();
    if status != StatusCode::OK {
        return Err(ExtractError::Status(status));
    }

    let content_type = response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned);
    match content_type.as_deref() {
        Some(value) if value.starts_with("application/json") => {}
        _ => return Err(ExtractError::ContentType(content_type)),
    }

    let body = response.text()?;
    Ok(serde_json::from_str(&body)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wire::ExtractionOutcome;
    use std::io::{Read, Write};
    use std::net::TcpListener;

    /// Answer exactly one connection with a canned HTTP response.
    fn serve_once(response: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind test listener");
        let addr = listener.local_addr().expect("listener addr");
        thread::spawn(move || {
            if let Ok((mut stream, _)) = listener.accept() {
                let mut buf = [0u8; 4096];
                let _ = stream.read(&mut buf);
                let _ = stream.write_all(response.as_bytes());
            }
        });
        format!("http://{addr}/extract")
    }

    fn url_payload() -> DropPayload {
        DropPayload::Url("http://x/y/DOOM2.WAD".to_string())
    }

    #[test]
    fn ok_json_response_parses_into_the_wire_shape() {
        let endpoint = serve_once(
            "HTTP/1.1 200 OK\r\n\
             Content-Type: application/json\r\n\
             Content-Length: 19\r\n\
             Connection: close\r\n\
             \r\n\
             {\"result\": \"oh no\"}",
        );
        let response = blocking_extract(&endpoint, &url_payload()).expect("canned 200 json");
        match response.result {
            ExtractionOutcome::Failure(detail) => assert_eq!(detail, "oh no"),
            ExtractionOutcome::Assets(_) => panic!("string result should parse as failure"),
        }
    }

    #[test]
    fn non_200_status_surfaces_a_status_error() {
        let endpoint = serve_once(
            "HTTP/1.1 500 Internal Server Error\r\n\
             Content-Length: 0\r\n\
             Connection: close\r\n\
             \r\n",
        );
        match blocking_extract(&endpoint, &url_payload()) {
            Err(ExtractError::Status(status)) => {
                assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR)
            }
            other => panic!("expected a status error, got {other:?}"),
        }
    }

    #[test]
    fn ok_with_non_json_content_type_is_rejected() {
        let endpoint = serve_once(
            "HTTP/1.1 200 OK\r\n\
             Content-Type: text/html\r\n\
             Content-Length: 5\r\n\
             Connection: close\r\n\
             \r\n\
             hello",
        );
        match blocking_extract(&endpoint, &url_payload()) {
            Err(ExtractError::ContentType(Some(content_type))) => {
                assert!(content_type.starts_with("text/html"))
            }
            other => panic!("expected a content-type error, got {other:?}"),
        }
    }

    #[test]
    fn request_url_percent_encodes_the_wad_url() {
        let url = request_url_for(
            "http://localhost:3000/extractDoomWadData",
            "http://example.com/wads/DOOM2.WAD",
        );
        assert_eq!(
            url,
            "http://localhost:3000/extractDoomWadData?url=http%3A%2F%2Fexample.com%2Fwads%2FDOOM2.WAD"
        );
    }

    #[test]
    fn request_url_encodes_query_characters() {
        let url = request_url_for("http://h/extract", "http://x/a.wad?rev=1&b=2 c");
        assert!(!url["http://h/extract?url=".len()..].contains('&'));
        assert!(url.ends_with("http%3A%2F%2Fx%2Fa.wad%3Frev%3D1%26b%3D2%20c"));
    }

    #[test]
    fn missing_file_surfaces_a_read_error() {
        let payload = DropPayload::File {
            name: "nope.wad".to_string(),
            path: std::path::PathBuf::from("/definitely/not/here/nope.wad"),
        };
        match blocking_extract("http://127.0.0.1:0/extract", &payload) {
            Err(ExtractError::ReadFile(_)) => {}
            other => panic!("expected a read error, got {other:?}"),
        }
    }
}
