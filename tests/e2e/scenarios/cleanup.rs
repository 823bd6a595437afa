use crate::harness::{Assertion, Scenario};
use apicheck_core::{Method, Stage};

#[test]
fn test_single_question_skips_submission_gracefully() {
    Scenario::new("one_question")
        .server_fails_times(Method::Post, "/admin/questions", 500, 1)
        .run_harness()
        .assert(Assertion::RecordedQuestions(1))
        .assert_check_failed("Submit questionnaire failed")
        .assert_detail_contains("Submit questionnaire failed", "need 2 question ids")
        .assert_request_count(Method::Post, "/submit", 0)
        .assert_check_passed("Get user submissions successful")
        .assert_check_passed("Get all submissions successful")
        .assert_stage_passed(Stage::Cleanup, 1)
        .assert_questions_on_server(0)
        .run()
        .unwrap();
}

#[test]
fn test_no_questions_means_no_cleanup_targets() {
    Scenario::new("no_questions")
        .server_fails(Method::Post, "/admin/questions", 403)
        .run_harness()
        .assert(Assertion::RecordedQuestions(0))
        .assert_check_failed("Submit questionnaire failed")
        .assert(Assertion::StageResultCount {
            stage: Stage::Cleanup,
            count: 0,
        })
        .assert_request_count(Method::Delete, "/admin/questions/", 0)
        .run()
        .unwrap();
}

#[test]
fn test_failed_delete_does_not_stop_cleanup() {
    Scenario::new("delete_failure")
        .server_fails_times(Method::Delete, "/admin/questions/", 500, 1)
        .run_harness()
        .assert_stage_failed(Stage::Cleanup, 1)
        .assert_stage_passed(Stage::Cleanup, 1)
        .assert_request_count(Method::Delete, "/admin/questions/", 2)
        .assert_questions_on_server(1)
        .run()
        .unwrap();
}

#[test]
fn test_cleanup_attempts_every_id_when_all_deletes_fail() {
    Scenario::new("all_deletes_dropped")
        .connection_drops(Method::Delete, "/admin/questions/")
        .run_harness()
        .assert_stage_failed(Stage::Cleanup, 2)
        .assert_request_count(Method::Delete, "/admin/questions/", 2)
        .assert_questions_on_server(2)
        // A later healthy run only deletes what it created itself.
        .clear_faults()
        .run_harness()
        .assert_stage_passed(Stage::Cleanup, 2)
        .assert_questions_on_server(2)
        .run()
        .unwrap();
}

#[test]
fn test_cleanup_runs_after_earlier_failures() {
    Scenario::new("cleanup_after_failures")
        .server_fails(Method::Get, "/profile", 500)
        .server_fails(Method::Post, "/submit", 500)
        .server_fails(Method::Get, "/questions", 503)
        .run_harness()
        .assert(Assertion::FailedTotal(4))
        .assert_stage_passed(Stage::Cleanup, 2)
        .assert_questions_on_server(0)
        .run()
        .unwrap();
}
