use super::*;
use crate::tutor::MISSING_KEY_REPLY;

#[test]
fn new_transcript_starts_with_greeting() {
    let transcript = Transcript::new();
    assert_eq!(transcript.messages().len(), 1);
    assert_eq!(transcript.messages()[0].role, Role::Tutor);
    assert_eq!(transcript.messages()[0].text, GREETING);
}

#[test]
fn pushes_append_in_call_order() {
    let mut transcript = Transcript::new();
    transcript.push_user("first");
    transcript.push_user("second");
    transcript.push_tutor("reply to second");
    transcript.push_tutor("reply to first");

    let texts: Vec<&str> = transcript.messages().iter().map(|m| m.text.as_str()).collect();
    assert_eq!(texts, vec![GREETING, "first", "second", "reply to second", "reply to first"]);

    let stamps: Vec<_> = transcript.messages().iter().map(|m| m.timestamp).collect();
    assert!(stamps.windows(2).all(|w| w[0] <= w[1]));
}

#[tokio::test]
async fn ask_and_record_appends_question_and_reply() {
    let mut transcript = Transcript::new();
    let gateway = TutorGateway::disabled();

    let reply = transcript.ask_and_record(&gateway, "What is VPC-SC?", "ctx").await.cloned();
    assert_eq!(reply.map(|m| m.text), Some(MISSING_KEY_REPLY.to_string()));

    let roles: Vec<Role> = transcript.messages().iter().map(|m| m.role).collect();
    assert_eq!(roles, vec![Role::Tutor, Role::User, Role::Tutor]);
    assert_eq!(transcript.messages()[1].text, "What is VPC-SC?");
}

#[tokio::test]
async fn blank_question_is_ignored() {
    let mut transcript = Transcript::new();
    let gateway = TutorGateway::disabled();
    assert!(transcript.ask_and_record(&gateway, "   ", "ctx").await.is_none());
    assert_eq!(transcript.messages().len(), 1);
}
