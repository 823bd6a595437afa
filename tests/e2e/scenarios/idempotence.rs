use crate::harness::{Assertion, Scenario};
use apicheck_core::Stage;

#[test]
fn test_second_run_tolerates_existing_accounts() {
    Scenario::new("second_run")
        .run_harness()
        .assert_all_passed()
        .run_harness()
        .assert_all_passed()
        .assert_check_passed("Admin user already exists")
        .assert_check_passed("Normal user already exists")
        .assert_check_passed("Admin login successful")
        .assert_check_passed("User login successful")
        .run()
        .expect("second run should pass");
}

#[test]
fn test_each_run_cleans_up_its_own_questions() {
    Scenario::new("repeated_cleanup")
        .run_harness()
        .run_harness()
        .run_harness()
        .assert_stage_passed(Stage::Cleanup, 2)
        .assert(Assertion::RecordedQuestions(2))
        .assert_questions_on_server(0)
        .assert(Assertion::SubmissionsOnServer(3))
        .run()
        .unwrap();
}
