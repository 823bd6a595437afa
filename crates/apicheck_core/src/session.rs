//! Mutable state shared by the stages of one run.

use crate::error::{CheckError, Result};
use crate::types::{Answer, Credentials, Role};

/// One account and the bearer token obtained for it, if any.
#[derive(Debug, Clone)]
pub struct Account {
    pub credentials: Credentials,
    token: Option<String>,
}

impl Account {
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            token: None,
        }
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }
}

/// Session context for a single harness run.
///
/// Created fresh for every run and owned by the runner. Created-resource
/// identifiers can only be appended, and are the only source of cleanup
/// targets.
#[derive(Debug, Clone)]
pub struct SessionContext {
    admin: Account,
    user: Account,
    question_ids: Vec<String>,
    /// Answer for each recorded question, parallel to `question_ids`.
    question_answers: Vec<String>,
    submission_ids: Vec<String>,
}

impl SessionContext {
    pub fn new(admin: Credentials, user: Credentials) -> Self {
        Self {
            admin: Account::new(admin),
            user: Account::new(user),
            question_ids: Vec::new(),
            question_answers: Vec::new(),
            submission_ids: Vec::new(),
        }
    }

    pub fn account(&self, role: Role) -> &Account {
        match role {
            Role::Admin => &self.admin,
            Role::User => &self.user,
        }
    }

    pub fn credentials(&self, role: Role) -> &Credentials {
        &self.account(role).credentials
    }

    /// The bearer token for `role`.
    ///
    /// An absent or empty token is an error so dependent checks fail
    /// instead of sending an unauthenticated request.
    pub fn token(&self, role: Role) -> Result<&str> {
        match self.account(role).token() {
            Some(token) if !token.is_empty() => Ok(token),
            _ => Err(CheckError::MissingToken(role)),
        }
    }

    /// Store a freshly issued token, replacing any previous one.
    pub fn set_token(&mut self, role: Role, token: String) {
        match role {
            Role::Admin => self.admin.token = Some(token),
            Role::User => self.user.token = Some(token),
        }
    }

    /// Record a created question together with the answer its spec carries.
    pub fn record_question(&mut self, id: String, answer: String) {
        self.question_ids.push(id);
        self.question_answers.push(answer);
    }

    pub fn record_submission(&mut self, id: String) {
        self.submission_ids.push(id);
    }

    /// Question identifiers in creation order.
    pub fn question_ids(&self) -> &[String] {
        &self.question_ids
    }

    /// Answers keyed by the question each one was created for, in creation
    /// order.
    pub fn recorded_answers(&self) -> impl Iterator<Item = Answer> + '_ {
        self.question_ids
            .iter()
            .zip(&self.question_answers)
            .map(|(id, answer)| Answer {
                id: id.clone(),
                answer: answer.clone(),
            })
    }

    /// Submission identifiers in creation order.
    pub fn submission_ids(&self) -> &[String] {
        &self.submission_ids
    }
}
