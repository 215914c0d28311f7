//! Package-generation server.

mod lifecycle;
mod multipart;
mod response;

use std::sync::Arc;

use anyhow::{Context, Result};
use tiny_http::{Method, Request};

use crate::config::AppConfig;
use crate::package::build_package;
use crate::{debug, embed, log};

/// Bind the server and run the request loop until Ctrl+C.
pub fn run(config: &AppConfig) -> Result<()> {
    let (server, addr) = lifecycle::bind_with_retry(config.serve.interface, config.serve.port)?;
    let server = Arc::new(server);
    let shutdown_rx = lifecycle::install_shutdown(Arc::clone(&server))?;

    log!("serve"; "http://{}", addr);

    // Thread pool keeps a slow package build from blocking other requests.
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(4)
        .build()
        .context("Failed to create request thread pool")?;

    let config = Arc::new(config.clone());
    for request in server.incoming_requests() {
        let config = Arc::clone(&config);
        pool.spawn(move || {
            if let Err(e) = handle_request(request, &config) {
                log!("serve"; "request error: {e}");
            }
        });
    }

    if shutdown_rx.try_recv().is_ok() {
        log!("serve"; "shutting down");
    }
    Ok(())
}

/// Route a single HTTP request.
fn handle_request(request: Request, config: &AppConfig) -> Result<()> {
    let method = request.method().clone();
    let url = request.url().to_string();

    match (method, url.as_str()) {
        (Method::Post, "/api/generate-logo-package") => handle_generate(request, config),
        (Method::Get, "/" | "/index.html") => {
            response::respond_html(request, embed::UPLOAD_HTML)
        }
        (_, "/api/generate-logo-package" | "/" | "/index.html") => {
            response::respond_method_not_allowed(request)
        }
        _ => response::respond_not_found(request),
    }
}

/// Parse the upload, run the pipeline, and stream the archive back.
fn handle_generate(mut request: Request, config: &AppConfig) -> Result<()> {
    let result = multipart::parse_request(&mut request, &config.package)
        .and_then(|package_request| build_package(&package_request, &config.package));

    match result {
        Ok(package) => {
            log!("pack"; "{} ({} entries, {} bytes)", package.filename, package.entries, package.len());
            response::respond_zip(request, &package)
        }
        Err(error) => {
            // Processing detail stays in the server log; the client gets the
            // taxonomy message only.
            debug!("serve"; "request failed: {error:?}");
            log!("error"; "{}", error.client_message());
            response::respond_error(request, &error)
        }
    }
}
