use super::fake_api::FakeApi;
use anyhow::Result;
use apicheck_core::{Method, RunReport, Stage};

/// Declarative assertions on the latest run report and the fake server
pub enum Assertion {
    // Report-wide
    AllPassed,
    PassedTotal(usize),
    FailedTotal(usize),

    // Per stage
    StagePassed {
        stage: Stage,
        count: usize,
    },
    StageFailed {
        stage: Stage,
        count: usize,
    },
    StageResultCount {
        stage: Stage,
        count: usize,
    },

    // Individual checks, looked up by message
    CheckPassed(String),
    CheckFailed(String),
    CheckDetailContains {
        message: String,
        text: String,
    },

    // Session context after the run
    RecordedQuestions(usize),
    RecordedSubmissions(usize),

    // Server state
    QuestionsOnServer(usize),
    SubmissionsOnServer(usize),
    ProfileIs {
        email: String,
        name: String,
        picture: String,
    },
    RequestCount {
        method: Method,
        path_prefix: String,
        count: usize,
    },

    // Custom
    Custom(Box<dyn Fn(&RunReport, &FakeApi) -> Result<()>>),
}

impl std::fmt::Debug for Assertion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AllPassed => write!(f, "AllPassed"),
            Self::PassedTotal(n) => write!(f, "PassedTotal({})", n),
            Self::FailedTotal(n) => write!(f, "FailedTotal({})", n),
            Self::StagePassed { stage, count } => {
                write!(f, "StagePassed {{ stage: {:?}, count: {} }}", stage, count)
            }
            Self::StageFailed { stage, count } => {
                write!(f, "StageFailed {{ stage: {:?}, count: {} }}", stage, count)
            }
            Self::StageResultCount { stage, count } => {
                write!(f, "StageResultCount {{ stage: {:?}, count: {} }}", stage, count)
            }
            Self::CheckPassed(m) => write!(f, "CheckPassed({:?})", m),
            Self::CheckFailed(m) => write!(f, "CheckFailed({:?})", m),
            Self::CheckDetailContains { message, text } => {
                write!(f, "CheckDetailContains {{ message: {:?}, text: {:?} }}", message, text)
            }
            Self::RecordedQuestions(n) => write!(f, "RecordedQuestions({})", n),
            Self::RecordedSubmissions(n) => write!(f, "RecordedSubmissions({})", n),
            Self::QuestionsOnServer(n) => write!(f, "QuestionsOnServer({})", n),
            Self::SubmissionsOnServer(n) => write!(f, "SubmissionsOnServer({})", n),
            Self::ProfileIs { email, name, picture } => write!(
                f,
                "ProfileIs {{ email: {:?}, name: {:?}, picture: {:?} }}",
                email, name, picture
            ),
            Self::RequestCount {
                method,
                path_prefix,
                count,
            } => write!(
                f,
                "RequestCount {{ method: {}, path_prefix: {:?}, count: {} }}",
                method, path_prefix, count
            ),
            Self::Custom(_) => write!(f, "Custom(<fn>)"),
        }
    }
}
