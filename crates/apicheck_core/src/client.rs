//! Typed wrappers over the questionnaire API endpoints.
//!
//! Every method sends exactly one request. Non-2xx statuses come back as
//! [`CheckError::UnexpectedStatus`] so callers can decide which statuses
//! they tolerate.

use crate::error::{CheckError, Result};
use crate::transport::{ApiRequest, ApiResponse, Method, Transport};
use crate::types::{Answer, Credentials, NewQuestion};
use serde_json::{json, Value};

/// API client bound to a transport.
pub struct ApiClient<T> {
    transport: T,
}

impl<T: Transport> ApiClient<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    /// Send a request and require a 2xx status.
    fn call(&self, request: ApiRequest) -> Result<ApiResponse> {
        self.transport.send(&request)?.error_for_status()
    }

    /// `POST /register`; returns the issued token.
    pub fn register(&self, credentials: &Credentials) -> Result<String> {
        let response = self.call(ApiRequest::new(Method::Post, "/register").json(json!({
            "email": credentials.email,
            "password": credentials.password,
            "name": credentials.name,
        })))?;
        data_string(&response, "token")
    }

    /// `POST /login`; returns the issued token.
    pub fn login(&self, credentials: &Credentials) -> Result<String> {
        let response = self.call(ApiRequest::new(Method::Post, "/login").json(json!({
            "email": credentials.email,
            "password": credentials.password,
        })))?;
        data_string(&response, "token")
    }

    pub fn get_profile(&self, token: &str) -> Result<ApiResponse> {
        self.call(ApiRequest::new(Method::Get, "/profile").bearer(token))
    }

    /// `PUT /profile` with a full replacement of name and picture.
    pub fn update_profile(&self, token: &str, name: &str, picture: &str) -> Result<ApiResponse> {
        self.call(
            ApiRequest::new(Method::Put, "/profile")
                .bearer(token)
                .json(json!({ "name": name, "picture": picture })),
        )
    }

    /// `POST /admin/questions`; returns the new question's id.
    pub fn create_question(&self, token: &str, question: &NewQuestion<'_>) -> Result<String> {
        let body = serde_json::to_value(question)
            .map_err(|e| CheckError::MalformedResponse(format!("cannot encode question: {}", e)))?;
        let response = self.call(
            ApiRequest::new(Method::Post, "/admin/questions")
                .bearer(token)
                .json(body),
        )?;
        data_string(&response, "id")
    }

    pub fn list_questions(&self, token: &str) -> Result<ApiResponse> {
        self.call(ApiRequest::new(Method::Get, "/questions").bearer(token))
    }

    pub fn delete_question(&self, token: &str, id: &str) -> Result<ApiResponse> {
        self.call(ApiRequest::new(Method::Delete, format!("/admin/questions/{}", id)).bearer(token))
    }

    /// `POST /submit`; returns the new submission's id.
    pub fn submit(&self, token: &str, answers: &[Answer]) -> Result<String> {
        let response = self.call(
            ApiRequest::new(Method::Post, "/submit")
                .bearer(token)
                .json(json!({ "answers": answers })),
        )?;
        data_string(&response, "id")
    }

    pub fn own_submissions(&self, token: &str) -> Result<ApiResponse> {
        self.call(ApiRequest::new(Method::Get, "/submissions").bearer(token))
    }

    pub fn all_submissions(&self, token: &str) -> Result<ApiResponse> {
        self.call(ApiRequest::new(Method::Get, "/admin/submissions/all").bearer(token))
    }

    /// `GET /admin/submissions/all` without status classification, for the
    /// authorization boundary check.
    pub fn probe_all_submissions(&self, token: &str) -> Result<ApiResponse> {
        self.transport
            .send(&ApiRequest::new(Method::Get, "/admin/submissions/all").bearer(token))
    }
}

/// Extract `data.<field>` as a string from a JSON envelope.
///
/// Numeric ids are accepted and rendered in decimal.
fn data_string(response: &ApiResponse, field: &str) -> Result<String> {
    let body = response.json()?;
    match body.get("data").and_then(|data| data.get(field)) {
        Some(Value::String(s)) if !s.is_empty() => Ok(s.clone()),
        Some(Value::Number(n)) => Ok(n.to_string()),
        Some(other) => Err(CheckError::MalformedResponse(format!(
            "data.{} has unexpected value {}",
            field, other
        ))),
        None => Err(CheckError::MalformedResponse(format!(
            "missing data.{} in {}",
            field, response.body
        ))),
    }
}
