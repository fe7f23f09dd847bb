use super::*;
use crate::curriculum::{Curriculum, Simulator};

fn option(label: &str, correct: bool) -> SimulatorOption {
    SimulatorOption { label: label.into(), correct, feedback: format!("feedback for {label}") }
}

/// Two steps; the correct option is index 1 on both.
fn two_step_product() -> Product {
    let step = |q: &str| SimulatorStep {
        question: q.into(),
        options: vec![option(&format!("{q} wrong"), false), option(&format!("{q} right"), true)],
    };
    Product {
        id: "kms".into(),
        name: "Cloud KMS".into(),
        category: "Encryption".into(),
        description: String::new(),
        tagline: String::new(),
        docs_url: String::new(),
        simulator: Simulator { title: "Rotate Keys".into(), steps: vec![step("first"), step("second")] },
    }
}

#[test]
fn starts_on_first_step_unlocked() {
    let sim = ProductSimulator::new(two_step_product());
    assert_eq!(sim.step_index(), 0);
    assert_eq!(sim.step_count(), 2);
    assert_eq!(sim.current_step().unwrap().question, "first");
    assert!(sim.feedback().is_none());
    assert!(!sim.is_locked());
    assert!(!sim.is_completed());
}

#[test]
fn correct_choice_shows_feedback_and_unlocks_next() {
    let mut sim = ProductSimulator::new(two_step_product());
    assert_eq!(sim.choose(1).unwrap(), ChooseOutcome::Correct);
    assert_eq!(sim.feedback().unwrap().feedback, "feedback for first right");
    assert!(sim.is_locked());

    assert_eq!(sim.next(), NextOutcome::Advanced { step: 1 });
    assert!(sim.feedback().is_none());
    assert!(!sim.is_locked());
}

#[test]
fn choice_locks_the_step() {
    let mut sim = ProductSimulator::new(two_step_product());
    assert_eq!(sim.choose(0).unwrap(), ChooseOutcome::Incorrect);
    assert_eq!(sim.choose(1).unwrap(), ChooseOutcome::Locked);
    assert_eq!(sim.feedback().unwrap().label, "first wrong");
}

#[test]
fn next_requires_a_correct_choice() {
    let mut sim = ProductSimulator::new(two_step_product());
    assert_eq!(sim.next(), NextOutcome::NotReady);

    sim.choose(0).unwrap();
    assert_eq!(sim.next(), NextOutcome::NotReady);
    assert_eq!(sim.step_index(), 0);
    assert!(sim.is_locked());
}

#[test]
fn last_step_completes() {
    let mut sim = ProductSimulator::new(two_step_product());
    sim.choose(1).unwrap();
    sim.next();
    sim.choose(1).unwrap();
    assert_eq!(sim.next(), NextOutcome::Completed);

    assert!(sim.is_completed());
    assert!(sim.current_step().is_none());
    assert_eq!(sim.choose(1).unwrap(), ChooseOutcome::AlreadyCompleted);
    assert_eq!(sim.next(), NextOutcome::NotReady);
}

#[test]
fn reset_clears_everything() {
    let mut sim = ProductSimulator::new(two_step_product());
    sim.choose(1).unwrap();
    sim.next();
    sim.choose(0).unwrap();

    sim.reset();
    assert_eq!(sim.step_index(), 0);
    assert!(sim.feedback().is_none());
    assert!(!sim.is_completed());
    assert_eq!(sim.choose(1).unwrap(), ChooseOutcome::Correct);
}

#[test]
fn reset_after_completion_restarts() {
    let mut sim = ProductSimulator::new(two_step_product());
    for _ in 0..2 {
        sim.choose(1).unwrap();
        sim.next();
    }
    assert!(sim.is_completed());

    sim.reset();
    assert!(!sim.is_completed());
    assert_eq!(sim.current_step().unwrap().question, "first");
}

#[test]
fn out_of_range_option_errors() {
    let mut sim = ProductSimulator::new(two_step_product());
    let err = sim.choose(2).unwrap_err();
    assert!(matches!(err, SimulatorError::OptionOutOfRange { option: 2, options: 2 }));
    assert!(!sim.is_locked());
}

#[test]
fn every_bundled_simulator_can_be_completed() {
    let curriculum = Curriculum::builtin().unwrap();
    for product in curriculum.products() {
        let mut sim = ProductSimulator::new(product.clone());
        for _ in 0..sim.step_count() {
            let correct = sim.current_step().unwrap().options.iter().position(|o| o.correct).unwrap();
            assert_eq!(sim.choose(correct).unwrap(), ChooseOutcome::Correct, "product {}", product.id);
            sim.next();
        }
        assert!(sim.is_completed(), "product {} did not complete", product.id);
    }
}

#[test]
fn iam_simulator_rejects_owner() {
    let curriculum = Curriculum::builtin().unwrap();
    let mut sim = ProductSimulator::new(curriculum.product("iam").unwrap().clone());
    assert_eq!(sim.choose(0).unwrap(), ChooseOutcome::Incorrect);
    assert!(sim.feedback().unwrap().feedback.starts_with("Too risky!"));
}
