//! Request routing for the HTTP service.

use std::io::Read;

use tiny_http::{Method, Request};

use crate::server::{handlers, AppState};

/// Final status and JSON body for one request.
#[derive(Debug, Clone, PartialEq)]
pub struct Reply {
    pub status: u16,
    pub body: String,
}

/// Requests are small JSON documents; anything larger is rejected.
const MAX_BODY_BYTES: u64 = 64 * 1024;

fn read_body(request: &mut Request) -> std::io::Result<String> {
    let mut body = String::new();
    request
        .as_reader()
        .take(MAX_BODY_BYTES)
        .read_to_string(&mut body)?;
    Ok(body)
}

/// Route a request to its handler.
pub fn dispatch(state: &AppState, request: &mut Request) -> Reply {
    let method = request.method().clone();
    let url = request.url().to_string();
    let path = url.split('?').next().unwrap_or("");

    match (&method, path) {
        (Method::Post, "/preset") => with_body(request, |body| handlers::preset(state, body)),
        (Method::Post, "/disease") => with_body(request, |body| handlers::disease(body)),
        (Method::Post, "/gemini-recommendations") => {
            with_body(request, |body| handlers::recommendations(body))
        }
        (Method::Post, "/api/ml/predict") => {
            with_body(request, |body| handlers::predict(state, body))
        }
        (Method::Post, "/api/ml/predict-multiple") => {
            with_body(request, |body| handlers::predict_multiple(state, body))
        }
        (Method::Get, "/api/ml/diseases") => handlers::diseases(state),
        (Method::Get, p) if p.starts_with("/api/ml/symptoms/") => {
            handlers::symptoms(state, &p["/api/ml/symptoms/".len()..])
        }
        (Method::Get, p) if p.starts_with("/api/ml/symptom-importance/") => {
            handlers::symptom_importance(state, &p["/api/ml/symptom-importance/".len()..])
        }
        (Method::Get, "/health") => handlers::health(),
        _ => handlers::not_found(),
    }
}

/// Read the body, surfacing transport failures distinctly from
/// computation errors.
fn with_body<F>(request: &mut Request, handler: F) -> Reply
where
    F: FnOnce(&str) -> Reply,
{
    match read_body(request) {
        Ok(body) => handler(&body),
        Err(err) => handlers::transport_error(&err),
    }
}
