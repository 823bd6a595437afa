//! Shared data types: roles, credentials, question payloads and step results.

use crate::error::CheckError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The two accounts the harness drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Admin,
    User,
}

impl Role {
    /// Both roles, admin first.
    pub const ALL: [Role; 2] = [Role::Admin, Role::User];

    /// Capitalised label used in report messages.
    pub fn label(self) -> &'static str {
        match self {
            Role::Admin => "Admin",
            Role::User => "User",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Admin => write!(f, "admin"),
            Role::User => write!(f, "user"),
        }
    }
}

/// Login material for one account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    /// Account email, also the login identifier.
    pub email: String,
    /// Plain-text password sent on register and login.
    pub password: String,
    /// Display name sent on registration.
    pub name: String,
}

impl Credentials {
    pub fn new(email: &str, password: &str, name: &str) -> Self {
        Self {
            email: email.to_string(),
            password: password.to_string(),
            name: name.to_string(),
        }
    }
}

/// A question to create through the admin endpoint, plus the answer the
/// regular user gives to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionSpec {
    /// Prompt text.
    pub question: String,
    /// Type tag understood by the server (e.g. `scale`).
    #[serde(rename = "type")]
    pub kind: String,
    pub min: i64,
    pub max: i64,
    /// Answer submitted by the regular user. Not part of the create payload.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub answer: Option<String>,
}

impl QuestionSpec {
    pub fn scale(question: &str, min: i64, max: i64, answer: &str) -> Self {
        Self {
            question: question.to_string(),
            kind: "scale".to_string(),
            min,
            max,
            answer: Some(answer.to_string()),
        }
    }

    /// Answer the regular user submits; falls back to the scale minimum.
    pub fn submitted_answer(&self) -> String {
        self.answer.clone().unwrap_or_else(|| self.min.to_string())
    }
}

/// Request body for `POST /admin/questions`.
#[derive(Debug, Serialize)]
pub struct NewQuestion<'a> {
    pub question: &'a str,
    #[serde(rename = "type")]
    pub kind: &'a str,
    pub min: i64,
    pub max: i64,
}

impl<'a> From<&'a QuestionSpec> for NewQuestion<'a> {
    fn from(spec: &'a QuestionSpec) -> Self {
        Self {
            question: &spec.question,
            kind: &spec.kind,
            min: spec.min,
            max: spec.max,
        }
    }
}

/// One entry of a submission's answer set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answer {
    /// Identifier of the answered question.
    pub id: String,
    pub answer: String,
}

/// Outcome of one observable check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepResult {
    pub success: bool,
    pub message: String,
    /// Error detail captured for failures.
    pub detail: Option<String>,
    /// Operator hint for the underlying error, if one applies.
    pub hint: Option<&'static str>,
}

impl StepResult {
    pub fn pass(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            detail: None,
            hint: None,
        }
    }

    pub fn fail(message: impl Into<String>, detail: impl fmt::Display) -> Self {
        Self {
            success: false,
            message: message.into(),
            detail: Some(detail.to_string()),
            hint: None,
        }
    }

    /// A failure caused by `err`, keeping its recovery suggestion.
    pub fn error(message: impl Into<String>, err: CheckError) -> Self {
        Self {
            success: false,
            message: message.into(),
            hint: err.recovery_suggestion(),
            detail: Some(err.to_string()),
        }
    }
}
