//! Multipart form parsing for the package endpoint.
//!
//! The form carries up to four file fields named after the slots, plus
//! `packageName`, `extensions`, and `backgroundColor` text fields. Unknown
//! fields are ignored. Empty file fields (a browser submitting an untouched
//! input) count as absent slots, not failures.

use std::io::Read;

use multipart::server::Multipart;
use tiny_http::Request;

use crate::config::PackageConfig;
use crate::error::PackageError;
use crate::image::color::HexColor;
use crate::package::{OutputSelection, PackageName, PackageRequest, Slot, SourceAsset};

/// Parse the multipart body of an incoming request.
pub fn parse_request(
    request: &mut Request,
    config: &PackageConfig,
) -> Result<PackageRequest, PackageError> {
    let boundary = boundary_from_headers(request)
        .ok_or_else(|| PackageError::input("expected a multipart/form-data body"))?;
    parse_form(request.as_reader(), &boundary, config)
}

/// Parse a multipart body from any reader (separated out for tests).
pub fn parse_form<R: Read>(
    body: R,
    boundary: &str,
    config: &PackageConfig,
) -> Result<PackageRequest, PackageError> {
    let mut form = Multipart::with_body(body, boundary);

    let mut assets = Vec::new();
    let mut raw_name = String::new();
    let mut raw_extensions = String::new();
    let mut raw_background: Option<String> = None;

    loop {
        let entry = form
            .read_entry()
            .map_err(|e| PackageError::input(format!("malformed multipart body: {e}")))?;
        let Some(mut field) = entry else { break };

        let field_name = field.headers.name.to_string();
        let mut data = Vec::new();
        field
            .data
            .read_to_end(&mut data)
            .map_err(|e| PackageError::input(format!("malformed multipart body: {e}")))?;

        match Slot::from_token(&field_name) {
            Some(slot) => {
                // Absent slot, not a failure. A repeated field keeps the
                // first upload.
                if data.is_empty() || assets.iter().any(|a: &SourceAsset| a.slot == slot) {
                    continue;
                }
                assets.push(SourceAsset::new(slot, data).map_err(PackageError::Processing)?);
            }
            None => {
                let text = String::from_utf8_lossy(&data).into_owned();
                match field_name.as_str() {
                    "packageName" => raw_name = text,
                    "extensions" => raw_extensions = text,
                    "backgroundColor" => raw_background = Some(text),
                    _ => {}
                }
            }
        }
    }

    if assets.is_empty() {
        return Err(PackageError::input("no files uploaded"));
    }

    let background = match raw_background.as_deref().map(str::trim) {
        None | Some("") => config.background,
        Some(raw) => HexColor::parse(raw)
            .ok_or_else(|| PackageError::input(format!("invalid background color `{raw}`")))?,
    };

    Ok(PackageRequest {
        assets,
        name: PackageName::sanitize(raw_name.trim()),
        selection: OutputSelection::parse(&raw_extensions),
        background,
    })
}

/// Extract the multipart boundary from the request's Content-Type header.
fn boundary_from_headers(request: &Request) -> Option<String> {
    let value = request
        .headers()
        .iter()
        .find(|h| h.field.as_str().as_str().eq_ignore_ascii_case("content-type"))
        .map(|h| h.value.to_string())?;
    boundary_from_content_type(&value)
}

/// Parse `multipart/form-data; boundary=...`, tolerating quotes and extra
/// parameters.
fn boundary_from_content_type(value: &str) -> Option<String> {
    let mut parts = value.split(';');
    if !parts.next()?.trim().eq_ignore_ascii_case("multipart/form-data") {
        return None;
    }
    for param in parts {
        if let Some(boundary) = param.trim().strip_prefix("boundary=") {
            let boundary = boundary.trim().trim_matches('"');
            if !boundary.is_empty() {
                return Some(boundary.to_string());
            }
        }
    }
    None
}
