use crate::harness::{Assertion, Scenario};
use apicheck_core::{Method, Stage};

#[test]
fn test_profile_failure_does_not_stop_the_run() {
    Scenario::new("profile_500")
        .server_fails(Method::Get, "/profile", 500)
        .run_harness()
        .assert_check_failed("Get admin profile failed")
        .assert_detail_contains("Get admin profile failed", "unexpected status 500")
        .assert_check_passed("Update admin profile successful")
        .assert(Assertion::FailedTotal(1))
        .assert_stage_passed(Stage::Cleanup, 2)
        .run()
        .unwrap();
}

#[test]
fn test_non_2xx_statuses_fail_checks() {
    for status in [201, 204] {
        Scenario::new("2xx_variants")
            .server_replies_with(Method::Get, "/submissions", "{}")
            .server_fails(Method::Put, "/profile", status)
            .run_harness()
            .assert_check_passed("Update admin profile successful")
            .assert_check_passed("Get user submissions successful")
            .run()
            .unwrap();
    }

    for status in [301, 401, 404, 409, 500, 503] {
        Scenario::new("non_2xx")
            .server_fails(Method::Get, "/submissions", status)
            .run_harness()
            .assert_check_failed("Get user submissions failed")
            .assert_detail_contains("Get user submissions failed", &status.to_string())
            .assert(Assertion::FailedTotal(1))
            .run()
            .unwrap();
    }
}

#[test]
fn test_registration_hard_failure() {
    Scenario::new("register_500")
        .existing_account("admin@example.com", "admin123!@#", "Admin User")
        .server_fails_times(Method::Post, "/register", 500, 1)
        .run_harness()
        .assert_check_failed("Admin registration failed")
        .assert_check_passed("User registration successful")
        // Login recovers the admin token, so everything downstream passes.
        .assert_check_passed("Admin login successful")
        .assert(Assertion::FailedTotal(1))
        .run()
        .unwrap();
}

#[test]
fn test_registration_transport_failure_is_not_already_exists() {
    Scenario::new("register_dropped")
        .connection_drops(Method::Post, "/register")
        .run_harness()
        .assert_check_failed("Admin registration failed")
        .assert_check_failed("User registration failed")
        .assert_detail_contains("Admin registration failed", "transport error")
        .run()
        .unwrap();
}

#[test]
fn test_malformed_login_body_is_reported() {
    Scenario::new("malformed_login")
        .server_replies_with(Method::Post, "/login", r#"{"success":true,"data":{}}"#)
        .run_harness()
        .assert_check_failed("Admin login failed")
        .assert_check_failed("User login failed")
        .assert_detail_contains("Admin login failed", "missing data.token")
        // Registration tokens from this run are still used.
        .assert_check_passed("Get admin profile successful")
        .assert_check_passed("Submit questionnaire successful")
        .run()
        .unwrap();
}

#[test]
fn test_non_json_question_body_is_reported() {
    Scenario::new("html_question_reply")
        .server_replies_with(Method::Post, "/admin/questions", "<html>gateway</html>")
        .run_harness()
        .assert_stage_failed(Stage::Questions, 2)
        .assert_detail_contains(
            "Create question failed: Do you feel burned out?",
            "malformed response",
        )
        .assert(Assertion::RecordedQuestions(0))
        .run()
        .unwrap();
}
