//! HTTP response handlers.

use anyhow::Result;
use tiny_http::{Header, Request, Response, StatusCode};

use crate::error::PackageError;
use crate::package::BuiltPackage;

const HTML: &str = "text/html; charset=utf-8";
const JSON: &str = "application/json";
const PLAIN: &str = "text/plain; charset=utf-8";
const ZIP: &str = "application/zip";

/// Respond with the finished archive as a download.
pub fn respond_zip(request: Request, package: &BuiltPackage) -> Result<()> {
    let disposition = format!("attachment; filename=\"{}\"", package.filename);
    let response = Response::from_data(package.data.clone())
        .with_header(make_header("Content-Type", ZIP))
        .with_header(
            Header::from_bytes("Content-Disposition", disposition.as_bytes())
                .map_err(|_| anyhow::anyhow!("invalid Content-Disposition header"))?,
        );
    request.respond(response)?;
    Ok(())
}

/// Respond with a structured error body: `{"error": "<message>"}`.
pub fn respond_error(request: Request, error: &PackageError) -> Result<()> {
    let body = serde_json::json!({ "error": error.client_message() }).to_string();
    send_body(request, error.status(), JSON, body.into_bytes())
}

/// Respond with an embedded HTML page.
pub fn respond_html(request: Request, body: &str) -> Result<()> {
    send_body(request, 200, HTML, body.as_bytes().to_vec())
}

/// Respond with 404.
pub fn respond_not_found(request: Request) -> Result<()> {
    send_body(request, 404, PLAIN, b"404 Not Found".to_vec())
}

/// Respond with 405 for unsupported methods on known routes.
pub fn respond_method_not_allowed(request: Request) -> Result<()> {
    send_body(request, 405, PLAIN, b"405 Method Not Allowed".to_vec())
}

fn send_body(request: Request, status: u16, content_type: &'static str, body: Vec<u8>) -> Result<()> {
    let response = Response::from_data(body)
        .with_status_code(StatusCode(status))
        .with_header(make_header("Content-Type", content_type));
    request.respond(response)?;
    Ok(())
}

fn make_header(key: &'static str, value: &'static str) -> Header {
    Header::from_bytes(key, value).unwrap()
}
