use super::*;
use crate::lab::StepRule;

fn step(id: &str, action: &str, rules: Vec<StepRule>) -> LabStep {
    LabStep {
        id: id.into(),
        instruction: format!("do {action}"),
        expected_action: action.into(),
        hint: Some(format!("hint for {id}")),
        rules,
    }
}

/// Two steps: an email on `X`, then a checkbox on `Y`.
fn two_step_lab() -> Lab {
    Lab {
        id: "lab_test".into(),
        title: "Test Lab".into(),
        description: "two steps".into(),
        steps: vec![
            step("s1", "X", vec![StepRule::Contains { substring: "@".into() }]),
            step("s2", "Y", vec![StepRule::Equals { expected: LabValue::Flag(true) }]),
        ],
        success_message: "well done".into(),
    }
}

fn iam_lab() -> Lab {
    Lab {
        id: "lab_iam".into(),
        title: "IAM".into(),
        description: "least privilege".into(),
        steps: vec![step(
            "s1",
            "ROLE_SELECTED",
            vec![
                StepRule::AntiPattern {
                    rejected: vec!["roles/owner".into(), "roles/editor".into()],
                    message: "Stop! Basic roles violate Least Privilege.".into(),
                },
                StepRule::Equals { expected: "roles/storage.objectViewer".into() },
            ],
        )],
        success_message: "done".into(),
    }
}

// =========================================================================
// Happy path
// =========================================================================

#[test]
fn accepted_values_walk_to_completion() {
    let mut session = LabSession::new(two_step_lab());

    assert_eq!(session.submit_action("X", "a@b.com"), SubmitOutcome::Advanced { step: 1 });
    assert_eq!(session.current_index(), 1);
    assert!(!session.is_completed());

    assert_eq!(session.submit_action("Y", true), SubmitOutcome::Completed);
    assert!(session.is_completed());
    assert!(session.current_step().is_none());
    assert_eq!(session.success_message(), Some("well done"));
}

#[test]
fn acceptance_clears_pending_feedback() {
    let mut session = LabSession::new(two_step_lab());
    session.submit_action("X", "nope");
    assert!(session.feedback().is_some());

    session.submit_action("X", "a@b.com");
    assert_eq!(session.feedback(), None);
}

#[test]
fn hint_follows_current_step() {
    let mut session = LabSession::new(two_step_lab());
    assert_eq!(session.hint(), Some("hint for s1"));
    session.submit_action("X", "a@b.com");
    assert_eq!(session.hint(), Some("hint for s2"));
}

// =========================================================================
// Rejection
// =========================================================================

#[test]
fn mismatch_holds_step_and_sets_generic_feedback() {
    let mut session = LabSession::new(two_step_lab());

    let outcome = session.submit_action("X", "not-an-email");
    assert_eq!(outcome, SubmitOutcome::Rejected { feedback: MISMATCH_FEEDBACK.into() });
    assert_eq!(session.current_index(), 0);
    assert_eq!(session.feedback(), Some(MISMATCH_FEEDBACK));
}

#[test]
fn repeated_mismatch_keeps_existing_feedback() {
    let mut session = LabSession::new(iam_lab());

    session.submit_action("ROLE_SELECTED", "roles/owner");
    let blocked = session.feedback().map(str::to_owned);

    // A later generic mismatch must not overwrite the pending message.
    let outcome = session.submit_action("ROLE_SELECTED", "roles/viewer");
    assert_eq!(session.feedback().map(str::to_owned), blocked);
    assert!(matches!(outcome, SubmitOutcome::Rejected { feedback } if Some(feedback.as_str()) == blocked.as_deref()));
}

#[test]
fn wrong_action_tag_is_a_mismatch() {
    let mut session = LabSession::new(two_step_lab());
    // `true` would satisfy step 2, but step 1 is current.
    assert!(matches!(session.submit_action("Y", true), SubmitOutcome::Rejected { .. }));
    assert_eq!(session.current_index(), 0);
}

#[test]
fn anti_pattern_returns_its_own_message() {
    let mut session = LabSession::new(iam_lab());

    for role in ["roles/owner", "roles/editor"] {
        let outcome = session.submit_action("ROLE_SELECTED", role);
        assert_eq!(
            outcome,
            SubmitOutcome::Blocked { message: "Stop! Basic roles violate Least Privilege.".into() }
        );
        assert_ne!(session.feedback(), Some(MISMATCH_FEEDBACK));
    }
    assert_eq!(session.current_index(), 0);
}

#[test]
fn anti_pattern_replaces_generic_feedback() {
    let mut session = LabSession::new(iam_lab());
    session.submit_action("ROLE_SELECTED", "roles/viewer");
    assert_eq!(session.feedback(), Some(MISMATCH_FEEDBACK));

    session.submit_action("ROLE_SELECTED", "roles/editor");
    assert_eq!(session.feedback(), Some("Stop! Basic roles violate Least Privilege."));
}

// =========================================================================
// Value recording
// =========================================================================

#[test]
fn every_submission_is_recorded() {
    let mut session = LabSession::new(iam_lab());

    session.submit_action("ROLE_SELECTED", "roles/owner");
    assert_eq!(session.value("ROLE_SELECTED"), Some(&LabValue::from("roles/owner")));

    session.submit_action("ROLE_SELECTED", "roles/viewer");
    assert_eq!(session.value("ROLE_SELECTED"), Some(&LabValue::from("roles/viewer")));

    session.submit_action("UNRELATED", true);
    assert_eq!(session.value("UNRELATED"), Some(&LabValue::Flag(true)));
    assert_eq!(session.state().values.len(), 2);
}

#[test]
fn submissions_after_completion_do_not_move_state() {
    let mut session = LabSession::new(iam_lab());
    assert_eq!(session.submit_action("ROLE_SELECTED", "roles/storage.objectViewer"), SubmitOutcome::Completed);

    assert_eq!(session.submit_action("ROLE_SELECTED", "roles/owner"), SubmitOutcome::AlreadyCompleted);
    assert!(session.is_completed());
    assert_eq!(session.feedback(), None);
}

// =========================================================================
// Restart
// =========================================================================

#[test]
fn restart_resets_everything() {
    let mut session = LabSession::new(two_step_lab());
    session.submit_action("X", "a@b.com");
    session.submit_action("Y", false);
    session.submit_action("Y", true);
    assert!(session.is_completed());

    session.restart();
    assert_eq!(session.state(), &LabSessionState::default());
    assert_eq!(session.current_index(), 0);
    assert!(session.feedback().is_none());
    assert!(session.success_message().is_none());
}

#[test]
fn restart_mid_lab_allows_replay() {
    let mut session = LabSession::new(two_step_lab());
    session.submit_action("X", "a@b.com");
    session.submit_action("Y", false);

    session.restart();
    assert_eq!(session.submit_action("X", "c@d.io"), SubmitOutcome::Advanced { step: 1 });
    assert_eq!(session.submit_action("Y", true), SubmitOutcome::Completed);
}
