use clap::Parser;
use serde_json::json;

use spendwise_chat::cli::{render, run, Cli};
use spendwise_chat::domains::ChatMessage;
use spendwise_chat::error::SpendwiseChatError;
use spendwise_chat::store::TranscriptStore;

fn run_with(args: &[&str]) -> Result<String, SpendwiseChatError> {
    let cli = Cli::try_parse_from(std::iter::once("spendwise-chat").chain(args.iter().copied()))
        .expect("valid arguments");
    let mut out = Vec::new();
    run(cli, &mut out)?;
    Ok(String::from_utf8(out).expect("utf-8 output"))
}

#[test]
fn render_formats_time_role_and_content() {
    let message = ChatMessage::with_timestamp(Some("user"), Some("hi"), 1_700_000_000_000);
    assert_eq!(render(&message), "[2023-11-14T22:13:20+00:00] user: hi");

    let blank = ChatMessage::empty();
    assert_eq!(render(&blank), "[1970-01-01T00:00:00+00:00] : ");
}

#[test]
fn render_falls_back_to_raw_millis_out_of_range() {
    let message = ChatMessage::with_timestamp(Some("u"), Some("c"), i64::MIN);
    assert_eq!(render(&message), "[-9223372036854775808] u: c");

    let message = ChatMessage::with_timestamp(Some("u"), Some("c"), i64::MAX);
    assert_eq!(render(&message), format!("[{}] u: c", i64::MAX));
}

#[test]
fn add_then_list_window() {
    let temp = tempfile::tempdir().expect("temp dir");
    let transcript = temp.path().join("chat.json");
    let transcript = transcript.to_str().unwrap();

    for content in ["one", "two", "three"] {
        let printed = run_with(&[
            "--transcript",
            transcript,
            "add",
            "--role",
            "user",
            "--content",
            content,
        ])
        .unwrap();
        assert!(printed.trim_end().ends_with(&format!("] user: {content}")), "{printed}");
    }

    let listed = run_with(&["--transcript", transcript, "list", "--limit", "2"]).unwrap();
    let lines: Vec<_> = listed.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].ends_with("] user: two"));
    assert!(lines[1].ends_with("] user: three"));

    let all = run_with(&["--transcript", transcript, "list"]).unwrap();
    assert_eq!(all.lines().count(), 3);
}

#[test]
fn add_applies_configured_retention() {
    let temp = tempfile::tempdir().expect("temp dir");
    let transcript = temp.path().join("chat.json");
    let config = temp.path().join("config.json");
    std::fs::write(
        &config,
        json!({
            "history": {"max_messages": 2},
            "transcript_path": transcript.to_str().unwrap()
        })
        .to_string(),
    )
    .unwrap();
    let config = config.to_str().unwrap();

    for content in ["a", "b", "c"] {
        run_with(&["--config", config, "add", "--role", "ai", "--content", content]).unwrap();
    }

    let history = TranscriptStore::new(&transcript).load().unwrap();
    assert_eq!(history.transcript(0), vec!["ai: b", "ai: c"]);
}

#[test]
fn add_without_role_or_content_records_blank_fields() {
    let temp = tempfile::tempdir().expect("temp dir");
    let transcript = temp.path().join("chat.json");

    run_with(&["--transcript", transcript.to_str().unwrap(), "add"]).unwrap();

    let history = TranscriptStore::new(&transcript).load().unwrap();
    let message = history.last().unwrap();
    assert_eq!(message.role(), None);
    assert_eq!(message.content(), None);
    assert!(message.timestamp() > 0);
}

#[test]
fn clear_empties_even_a_corrupt_transcript() {
    let temp = tempfile::tempdir().expect("temp dir");
    let transcript = temp.path().join("chat.json");
    let path = transcript.to_str().unwrap();
    std::fs::write(&transcript, "{broken").unwrap();

    let err = run_with(&["--transcript", path, "list"]).unwrap_err();
    assert!(matches!(err, SpendwiseChatError::Serialization(_)));

    run_with(&["--transcript", path, "clear"]).unwrap();
    assert_eq!(run_with(&["--transcript", path, "list"]).unwrap(), "");

    run_with(&[
        "--transcript",
        path,
        "add",
        "--role",
        "user",
        "--content",
        "fresh",
    ])
    .unwrap();
    run_with(&["--transcript", path, "clear"]).unwrap();
    assert!(TranscriptStore::new(&transcript).load().unwrap().is_empty());
}

#[test]
fn missing_config_file_is_reported() {
    let temp = tempfile::tempdir().expect("temp dir");
    let config = temp.path().join("absent.json");

    let err = run_with(&["--config", config.to_str().unwrap(), "list"]).unwrap_err();
    assert!(matches!(err, SpendwiseChatError::Config(_)));
}
