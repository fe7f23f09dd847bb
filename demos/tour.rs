//! Guided tour: walk the IAM module end to end, run the IAM product
//! simulator and ask the tutor a question.
//!
//! Reads `GEMINI_API_KEY` from the environment or a `.env` file; without it
//! the tutor answers with its missing-configuration reply.

use cloudsec_academy::{
    Curriculum, LabValue, ModuleWalkthrough, ProductSimulator, Transcript, TutorGateway, UserProgress,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let curriculum = Curriculum::builtin()?;
    let mut progress = UserProgress::for_curriculum(&curriculum);
    let tutor = TutorGateway::from_env();

    let module = curriculum.module("mod_2").ok_or("mod_2 missing from catalog")?;
    progress.set_current_module(Some(&module.id));
    let mut walkthrough = ModuleWalkthrough::new(module.clone());

    let feedback = walkthrough.answer("q1", 1)?;
    tracing::info!(correct = feedback.correct, "quiz answered");

    for (action, value) in [
        ("PRINCIPAL_SELECTED", LabValue::from("alice@example.com")),
        ("ROLE_SELECTED", LabValue::from("roles/editor")),
        ("ROLE_SELECTED", LabValue::from("roles/storage.objectViewer")),
        ("CONDITION_ADDED", LabValue::Flag(true)),
    ] {
        let outcome = walkthrough.submit_lab_action(action, value.clone());
        tracing::info!(%action, ?value, ?outcome, "lab action");
    }

    walkthrough.finish(&mut progress)?;
    tracing::info!(
        score = progress.score(),
        completed = progress.completed_count(),
        total = progress.total_modules(),
        certificate = progress.certificate_eligible(),
        "progress"
    );

    let product = curriculum.product("iam").ok_or("iam missing from catalog")?;
    let mut simulator = ProductSimulator::new(product.clone());
    while let Some(step) = simulator.current_step() {
        let Some(correct) = step.options.iter().position(|o| o.correct) else { break };
        simulator.choose(correct)?;
        if let Some(option) = simulator.feedback() {
            println!("{}: {}", option.label, option.feedback);
        }
        simulator.next();
    }
    tracing::info!(product = %product.id, completed = simulator.is_completed(), "simulator");

    let mut transcript = Transcript::new();
    let context = walkthrough.tutor_context();
    if let Some(reply) = transcript
        .ask_and_record(&tutor, "Why avoid basic roles like Editor?", &context)
        .await
    {
        println!("{}", reply.text);
    }

    Ok(())
}
