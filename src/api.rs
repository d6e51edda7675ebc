//! API Client
//!
//! Thin JSON wrapper over the browser fetch API for the mission backend.
//! One attempt per call, no retries or timeouts.

use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, Request, RequestInit, Response};

use crate::models::{AssignCatPayload, Mission, NewMission};

const API_ROOT: &str = "http://127.0.0.1:8000/api/cats";

/// Failure modes of a single API call.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// The fetch itself failed (connection refused, CORS, no network).
    #[error("request failed: {0}")]
    Network(String),
    /// Non-2xx status with a JSON body; `detail` is that body re-serialized
    /// verbatim, which is what the UI surfaces.
    #[error("{detail}")]
    Status { status: u16, detail: String },
    /// Non-2xx status whose body was not valid JSON.
    #[error("server returned status {status} with a non-JSON error body")]
    MalformedErrorBody { status: u16 },
    /// 2xx status whose body did not decode as the expected type.
    #[error("could not decode server response: {0}")]
    Decode(String),
    /// A request body failed to serialize.
    #[error("could not encode request body: {0}")]
    Encode(String),
}

/// Classify a non-2xx response body.
fn status_error(status: u16, body: &str) -> ApiError {
    match serde_json::from_str::<serde_json::Value>(body) {
        Ok(value) => ApiError::Status { status, detail: value.to_string() },
        Err(_) => ApiError::MalformedErrorBody { status },
    }
}

fn js_error(context: &str, value: JsValue) -> ApiError {
    ApiError::Network(format!("{}: {:?}", context, value))
}

/// Issue one JSON request against the API and decode the response.
async fn request<T: DeserializeOwned>(
    method: &str,
    path: &str,
    body: Option<String>,
) -> Result<T, ApiError> {
    let headers = Headers::new().map_err(|e| js_error("headers", e))?;
    headers
        .set("Content-Type", "application/json")
        .map_err(|e| js_error("headers", e))?;

    let opts = RequestInit::new();
    opts.set_method(method);
    opts.set_headers(&headers);
    if let Some(body) = body {
        opts.set_body(&JsValue::from_str(&body));
    }

    let url = format!("{}{}", API_ROOT, path);
    let request =
        Request::new_with_str_and_init(&url, &opts).map_err(|e| js_error("bad request", e))?;

    let window = web_sys::window().ok_or_else(|| ApiError::Network("no window".to_string()))?;
    let response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| js_error("fetch", e))?;
    let response: Response = response
        .dyn_into()
        .map_err(|e| js_error("not a response", e))?;

    let text = JsFuture::from(response.text().map_err(|e| js_error("body", e))?)
        .await
        .map_err(|e| js_error("body", e))?
        .as_string()
        .unwrap_or_default();

    if !response.ok() {
        return Err(status_error(response.status(), &text));
    }
    serde_json::from_str(&text).map_err(|e| ApiError::Decode(e.to_string()))
}

fn to_body<B: Serialize>(body: &B) -> Result<String, ApiError> {
    serde_json::to_string(body).map_err(|e| ApiError::Encode(e.to_string()))
}

// ========================
// Typed Operations
// ========================

pub async fn list_missions() -> Result<Vec<Mission>, ApiError> {
    request("GET", "/missions/", None).await
}

pub async fn assign_cat(mission_id: u32, cat_id: u32) -> Result<Mission, ApiError> {
    let body = to_body(&AssignCatPayload { cat: cat_id })?;
    request(
        "PATCH",
        &format!("/missions/{}/assign_cat/", mission_id),
        Some(body),
    )
    .await
}

pub async fn create_mission(mission: &NewMission) -> Result<Mission, ApiError> {
    request("POST", "/missions/", Some(to_body(mission)?)).await
}

pub async fn complete_mission(mission_id: u32) -> Result<Mission, ApiError> {
    request(
        "PATCH",
        &format!("/missions/{}/complete_mission/", mission_id),
        Some("{}".to_string()),
    )
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Target;

    #[test]
    fn json_error_body_is_surfaced_verbatim() {
        let err = status_error(404, r#"{"detail":"not found"}"#);
        assert_eq!(
            err,
            ApiError::Status { status: 404, detail: r#"{"detail":"not found"}"#.to_string() }
        );
        assert!(err.to_string().contains(r#"{"detail":"not found"}"#));
    }

    #[test]
    fn non_json_error_body_is_its_own_kind() {
        let err = status_error(502, "<html>Bad Gateway</html>");
        assert_eq!(err, ApiError::MalformedErrorBody { status: 502 });
        assert!(err.to_string().contains("502"));
    }

    #[test]
    fn new_mission_body_matches_wire_format() {
        let mission = NewMission {
            cat: None,
            targets: vec![Target {
                id: None,
                name: "Tom".to_string(),
                country: "France".to_string(),
                notes: "Initial notes.".to_string(),
                state: false,
            }],
        };
        let body = to_body(&mission).unwrap();
        assert_eq!(
            body,
            r#"{"cat":null,"targets":[{"name":"Tom","country":"France","notes":"Initial notes.","state":false}]}"#
        );
    }

    #[test]
    fn assign_cat_body_matches_wire_format() {
        assert_eq!(to_body(&AssignCatPayload { cat: 7 }).unwrap(), r#"{"cat":7}"#);
    }

    #[test]
    fn unserializable_body_is_an_encode_error() {
        // serde_json rejects maps with non-string keys
        let body = std::collections::HashMap::from([((1, 2), 3)]);
        assert!(matches!(to_body(&body), Err(ApiError::Encode(_))));
    }
}
