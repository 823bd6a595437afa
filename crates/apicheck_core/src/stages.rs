//! The fixed, ordered sequence of harness stages.
//!
//! Each stage reads and mutates the [`SessionContext`] and returns one
//! [`StepResult`] per observable outcome. Stages never return errors: every
//! failure, including a missing token or a malformed body, becomes a failed
//! result so the next stage still runs.

use crate::client::ApiClient;
use crate::config::Config;
use crate::error::{CheckError, Result};
use crate::session::SessionContext;
use crate::transport::Transport;
use crate::types::{Answer, NewQuestion, Role, StepResult};

/// Status the register endpoint returns for an already registered email.
pub const ALREADY_REGISTERED_STATUS: u16 = 400;

/// Status the admin endpoints return for a non-admin token.
pub const FORBIDDEN_STATUS: u16 = 403;

/// Number of question ids the submission answers reference.
pub const SUBMITTED_ANSWERS: usize = 2;

/// One named stage of the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    RegisterAdmin,
    RegisterUser,
    Login,
    Profile,
    Questions,
    Submissions,
    UnauthorizedAccess,
    Cleanup,
}

impl Stage {
    /// Execution order. Later stages depend on state set by earlier ones.
    pub const ALL: [Stage; 8] = [
        Stage::RegisterAdmin,
        Stage::RegisterUser,
        Stage::Login,
        Stage::Profile,
        Stage::Questions,
        Stage::Submissions,
        Stage::UnauthorizedAccess,
        Stage::Cleanup,
    ];

    /// Short identifier.
    pub fn name(self) -> &'static str {
        match self {
            Stage::RegisterAdmin => "register-admin",
            Stage::RegisterUser => "register-user",
            Stage::Login => "login",
            Stage::Profile => "profile",
            Stage::Questions => "questions",
            Stage::Submissions => "submissions",
            Stage::UnauthorizedAccess => "unauthorized-access",
            Stage::Cleanup => "cleanup",
        }
    }

    /// Line announcing the stage in the report.
    pub fn banner(self) -> &'static str {
        match self {
            Stage::RegisterAdmin => "Registering admin user...",
            Stage::RegisterUser => "Registering normal user...",
            Stage::Login => "Testing login for both users...",
            Stage::Profile => "Testing profile operations...",
            Stage::Questions => "Testing question operations...",
            Stage::Submissions => "Testing submission operations...",
            Stage::UnauthorizedAccess => "Testing unauthorized access...",
            Stage::Cleanup => "Cleaning up...",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Stage::RegisterAdmin => "POST /register for the admin account; 400 counts as already registered",
            Stage::RegisterUser => "POST /register for the regular account; 400 counts as already registered",
            Stage::Login => "POST /login for both accounts, independently",
            Stage::Profile => "GET then PUT /profile as admin",
            Stage::Questions => "POST /admin/questions per configured question, then GET /questions as both roles",
            Stage::Submissions => "POST /submit as user, GET /submissions as user, GET /admin/submissions/all as admin",
            Stage::UnauthorizedAccess => "GET /admin/submissions/all as user must answer 403",
            Stage::Cleanup => "DELETE /admin/questions/{id} for every question created in this run",
        }
    }

    /// Run the stage against `client`, mutating `ctx`.
    pub fn run<T: Transport>(
        self,
        client: &ApiClient<T>,
        ctx: &mut SessionContext,
        config: &Config,
    ) -> Vec<StepResult> {
        match self {
            Stage::RegisterAdmin => vec![register(client, ctx, Role::Admin)],
            Stage::RegisterUser => vec![register(client, ctx, Role::User)],
            Stage::Login => login_both(client, ctx),
            Stage::Profile => profile(client, ctx, config),
            Stage::Questions => questions(client, ctx, config),
            Stage::Submissions => submissions(client, ctx),
            Stage::UnauthorizedAccess => vec![unauthorized_access(client, ctx)],
            Stage::Cleanup => cleanup(client, ctx),
        }
    }
}

/// Map a check's result onto "<action> successful" / "<action> failed".
fn outcome<V>(action: &str, result: Result<V>) -> StepResult {
    match result {
        Ok(_) => StepResult::pass(format!("{} successful", action)),
        Err(e) => StepResult::error(format!("{} failed", action), e),
    }
}

fn register<T: Transport>(client: &ApiClient<T>, ctx: &mut SessionContext, role: Role) -> StepResult {
    let (action, existing) = match role {
        Role::Admin => ("Admin registration", "Admin user already exists"),
        Role::User => ("User registration", "Normal user already exists"),
    };

    match client.register(ctx.credentials(role)) {
        Ok(token) => {
            ctx.set_token(role, token);
            StepResult::pass(format!("{} successful", action))
        }
        Err(e) if e.status() == Some(ALREADY_REGISTERED_STATUS) => StepResult::pass(existing),
        Err(e) => StepResult::error(format!("{} failed", action), e),
    }
}

fn login_both<T: Transport>(client: &ApiClient<T>, ctx: &mut SessionContext) -> Vec<StepResult> {
    Role::ALL
        .into_iter()
        .map(|role| {
            let action = format!("{} login", role.label());
            let result = client.login(ctx.credentials(role)).map(|token| {
                ctx.set_token(role, token);
            });
            outcome(&action, result)
        })
        .collect()
}

fn profile<T: Transport>(
    client: &ApiClient<T>,
    ctx: &SessionContext,
    config: &Config,
) -> Vec<StepResult> {
    let read = ctx
        .token(Role::Admin)
        .and_then(|token| client.get_profile(token));
    let write = ctx.token(Role::Admin).and_then(|token| {
        client.update_profile(token, &config.profile.name, &config.profile.picture)
    });

    vec![
        outcome("Get admin profile", read),
        outcome("Update admin profile", write),
    ]
}

fn questions<T: Transport>(
    client: &ApiClient<T>,
    ctx: &mut SessionContext,
    config: &Config,
) -> Vec<StepResult> {
    let mut results = Vec::with_capacity(config.questions.len() + Role::ALL.len());

    for spec in &config.questions {
        let created = ctx
            .token(Role::Admin)
            .and_then(|token| client.create_question(token, &NewQuestion::from(spec)));
        results.push(match created {
            Ok(id) => {
                ctx.record_question(id, spec.submitted_answer());
                StepResult::pass(format!("Create question successful: {}", spec.question))
            }
            Err(e) => StepResult::error(format!("Create question failed: {}", spec.question), e),
        });
    }

    // Read access for both roles; the two lists are not compared.
    for role in Role::ALL {
        let listed = ctx
            .token(role)
            .and_then(|token| client.list_questions(token));
        results.push(outcome(&format!("Get questions as {}", role), listed));
    }

    results
}

/// Answer set for the first recorded questions, each paired with the answer
/// of the spec that created it.
fn build_answers(ctx: &SessionContext) -> Result<Vec<Answer>> {
    let available = ctx.question_ids().len();
    if available < SUBMITTED_ANSWERS {
        return Err(CheckError::NotEnoughQuestions {
            needed: SUBMITTED_ANSWERS,
            available,
        });
    }

    Ok(ctx.recorded_answers().take(SUBMITTED_ANSWERS).collect())
}

fn submissions<T: Transport>(client: &ApiClient<T>, ctx: &mut SessionContext) -> Vec<StepResult> {
    let submitted = build_answers(ctx).and_then(|answers| {
        let token = ctx.token(Role::User)?;
        client.submit(token, &answers)
    });
    let submit = match submitted {
        Ok(id) => {
            ctx.record_submission(id);
            StepResult::pass("Submit questionnaire successful")
        }
        Err(e) => StepResult::error("Submit questionnaire failed", e),
    };

    let own = ctx
        .token(Role::User)
        .and_then(|token| client.own_submissions(token));
    let all = ctx
        .token(Role::Admin)
        .and_then(|token| client.all_submissions(token));

    vec![
        submit,
        outcome("Get user submissions", own),
        outcome("Get all submissions", all),
    ]
}

/// The one inverted check: success means the server refused the user.
fn unauthorized_access<T: Transport>(client: &ApiClient<T>, ctx: &SessionContext) -> StepResult {
    let token = match ctx.token(Role::User) {
        Ok(token) => token,
        Err(e) => return StepResult::error("Unauthorized access check could not run", e),
    };

    match client.probe_all_submissions(token) {
        Ok(response) if response.status == FORBIDDEN_STATUS => {
            StepResult::pass("Unauthorized access test successful")
        }
        Ok(response) => StepResult::fail(
            "Unauthorized access test failed",
            format!(
                "expected status {}, got {}: {}",
                FORBIDDEN_STATUS, response.status, response.body
            ),
        ),
        Err(e) => StepResult::error("Unauthorized access check could not complete", e),
    }
}

fn cleanup<T: Transport>(client: &ApiClient<T>, ctx: &SessionContext) -> Vec<StepResult> {
    let token = ctx.token(Role::Admin);

    ctx.question_ids()
        .iter()
        .map(|id| {
            let deleted = match &token {
                Ok(token) => client.delete_question(token, id),
                Err(_) => Err(CheckError::MissingToken(Role::Admin)),
            };
            match deleted {
                Ok(_) => StepResult::pass(format!("Deleted question {}", id)),
                Err(e) => StepResult::error(format!("Failed to delete question {}", id), e),
            }
        })
        .collect()
}
