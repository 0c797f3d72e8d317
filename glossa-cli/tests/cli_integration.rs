//! Integration tests for the glossa CLI

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use tempfile::TempDir;

/// Helper to get the path to a test fixture
fn fixture_path(name: &str) -> String {
    format!("tests/fixtures/{}", name)
}

fn glossa() -> Command {
    let mut cmd = Command::cargo_bin("glossa").unwrap();
    cmd.env_remove("GLOSSA_CONFIG").env_remove("GLOSSA_LEXICON");
    cmd
}

fn json_output(cmd: &mut Command) -> Value {
    let output = cmd.output().unwrap();
    assert!(output.status.success(), "command failed: {:?}", output);
    serde_json::from_slice(&output.stdout).unwrap()
}

#[test]
fn test_sentiment_inline_text() {
    glossa()
        .args(["sentiment", "This is amazing and wonderful!"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Label:"))
        .stdout(predicate::str::contains("positive"))
        .stdout(predicate::str::contains("- amazing"));
}

#[test]
fn test_sentiment_json() {
    let data = json_output(glossa().args(["sentiment", "-f", "json", "This is amazing and wonderful!"]));
    assert_eq!(data["sentiment"]["label"], "positive");
    assert_eq!(data["sentiment"]["score"], 1.0);
    assert_eq!(data["sentiment"]["confidence"], 1.0);
}

#[test]
fn test_neutral_sentiment_default() {
    let data = json_output(glossa().args(["sentiment", "-f", "json", "The sky is blue."]));
    assert_eq!(data["sentiment"]["label"], "neutral");
    assert_eq!(data["sentiment"]["score"], 0.0);
    assert_eq!(data["sentiment"]["confidence"], 0.5);
}

#[test]
fn test_sentiment_from_stdin() {
    let data = json_output(
        glossa()
            .args(["sentiment", "--format", "json"])
            .write_stdin("The service was terrible and the food was awful."),
    );
    assert_eq!(data["sentiment"]["label"], "negative");
}

#[test]
fn test_blank_input_is_rejected() {
    glossa()
        .arg("tokens")
        .write_stdin("   \n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Please enter some text to analyze"));
}

#[test]
fn test_missing_input_file() {
    glossa()
        .args(["profile", "-i", "tests/fixtures/does-not-exist.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("File not found"));
}

#[test]
fn test_tokens() {
    let data = json_output(glossa().args(["tokens", "-f", "json", "The quick, brown fox!"]));
    assert_eq!(
        data["tokens"],
        serde_json::json!(["the", "quick", "brown", "fox"])
    );
    assert_eq!(data["filtered"], serde_json::json!(["quick", "brown", "fox"]));
}

#[test]
fn test_profile_from_file() {
    glossa()
        .args(["profile", "-i"])
        .arg(fixture_path("news.txt"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Text Profile"))
        .stdout(predicate::str::contains("English (en)"));
}

#[test]
fn test_entities_from_file() {
    let data = json_output(
        glossa()
            .args(["entities", "-f", "json", "-i"])
            .arg(fixture_path("news.txt")),
    );
    assert_eq!(data["PERSON"], serde_json::json!(["Sundar Pichai"]));
    assert_eq!(data["LOCATION"], serde_json::json!(["London", "India"]));
    assert_eq!(data["ORGANIZATION"], serde_json::json!(["Google"]));
    assert_eq!(data["DATE"], serde_json::json!(["March", "2024"]));
}

#[test]
fn test_anaphora_from_file() {
    glossa()
        .args(["anaphora", "-i"])
        .arg(fixture_path("story.txt"))
        .assert()
        .success()
        .stdout(predicate::str::contains("\"she\" (sentence 2, word 1) -> \"Mary\""));
}

#[test]
fn test_coherence_json() {
    let data = json_output(
        glossa()
            .args(["coherence", "-f", "json", "-i"])
            .arg(fixture_path("story.txt")),
    );
    let score = data["score"].as_f64().unwrap();
    let cohesion = data["lexical_cohesion"].as_f64().unwrap();
    assert!((0.0..=1.0).contains(&cohesion));
    assert!((score - (2.0 * cohesion).min(1.0)).abs() < 1e-9);
    assert_eq!(data["sentences"], 3);
}

#[test]
fn test_tree() {
    glossa()
        .args(["tree", "The cat"])
        .assert()
        .success()
        .stdout(predicate::str::contains("├── NP"))
        .stdout(predicate::str::contains("└── cat"));
}

#[test]
fn test_ngrams_top() {
    glossa()
        .args(["ngrams", "--top", "1", "a b c d"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"a b\" (1)"))
        .stdout(predicate::str::contains("\"b c\"").not());
}

#[test]
fn test_summarize_markdown() {
    glossa()
        .args([
            "summarize",
            "-k",
            "1",
            "-f",
            "markdown",
            "Cats purr. Dogs bark at cats. Birds sing.",
        ])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("# Text Summarization"))
        .stdout(predicate::str::contains("Dogs bark at cats."))
        .stdout(predicate::str::contains("\n---\n"));
}

#[test]
fn test_ask() {
    let data = json_output(glossa().args([
        "ask",
        "-f",
        "json",
        "Where is the office?",
        "Our team grew quickly. The office is in London.",
    ]));
    assert_eq!(data["question_type"], "where");
    assert_eq!(data["answer"], "The office is in London");
}

#[test]
fn test_ask_without_match() {
    glossa()
        .args(["ask", "Who won the race?", "The sky is blue."])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "I couldn't find a relevant answer in the provided context.",
        ));
}

#[test]
fn test_ask_blank_question() {
    glossa()
        .args(["ask", "  ", "The office is in London."])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Please enter a question"));
}

#[test]
fn test_search_blank_query() {
    glossa()
        .args(["search", "", "--doc", "rust is fast"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Please enter a search query"));
}

#[test]
fn test_search_documents_glob() {
    let data = json_output(glossa().args([
        "search",
        "machine learning",
        "-f",
        "json",
        "-d",
        "tests/fixtures/docs/*.txt",
    ]));
    let results = data["results"].as_array().unwrap();
    assert_eq!(data["documents"], 3);
    assert_eq!(results.len(), 2);
    assert!(results[0]["source"].as_str().unwrap().ends_with("ml.txt"));
    assert!(results[1]["source"].as_str().unwrap().ends_with("rust.txt"));
}

#[test]
fn test_search_inline_documents() {
    glossa()
        .args([
            "search",
            "machine learning",
            "--doc",
            "machine learning is great",
            "--doc",
            "cats are cute",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("doc 1 - relevance 100.0%"))
        .stdout(predicate::str::contains("doc 2").not());
}

#[test]
fn test_search_no_matching_files() {
    glossa()
        .args(["search", "query", "-d", "tests/fixtures/docs/*.csv"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No files found"));
}

#[test]
fn test_overview_to_output_file() {
    let temp_dir = TempDir::new().unwrap();
    let output = temp_dir.path().join("overview.json");

    glossa()
        .args(["overview", "-f", "json", "-i"])
        .arg(fixture_path("news.txt"))
        .arg("-o")
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let data: Value = serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
    assert_eq!(data["language"], "en");
    assert_eq!(data["sentiment"]["label"], "positive");
    assert_eq!(data["entity_count"], 6);
}

#[test]
fn test_config_file_sets_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let config = temp_dir.path().join("glossa.toml");
    fs::write(
        &config,
        "[output]\ndefault_format = \"json\"\npretty_json = false\n\n[analysis]\nsummary_sentences = 1\n",
    )
    .unwrap();

    glossa()
        .arg("--config")
        .arg(&config)
        .args(["summarize", "Cats purr. Dogs bark at cats. Birds sing."])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"summary\":\"Dogs bark at cats.\""));
}

#[test]
fn test_invalid_config_file() {
    let temp_dir = TempDir::new().unwrap();
    let config = temp_dir.path().join("glossa.toml");
    fs::write(&config, "[output]\ndefault_format = \"yaml\"\n").unwrap();

    glossa()
        .arg("--config")
        .arg(&config)
        .args(["tokens", "hello"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown output format 'yaml'"));
}

#[test]
fn test_generate_validate_and_use_lexicon() {
    let temp_dir = TempDir::new().unwrap();
    let lexicon = temp_dir.path().join("lexicon.toml");

    glossa()
        .arg("generate-config")
        .arg(&lexicon)
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration template written"));

    glossa()
        .arg("validate")
        .arg(&lexicon)
        .assert()
        .success()
        .stdout(predicate::str::contains("Lexicon is valid"));

    // extend the positive list and analyze with the edited lexicon
    let source = fs::read_to_string(&lexicon).unwrap();
    fs::write(&lexicon, source.replacen("\"good\",", "\"good\", \"stellar\",", 1)).unwrap();

    let data = json_output(
        glossa()
            .arg("--lexicon")
            .arg(&lexicon)
            .args(["sentiment", "-f", "json", "A stellar launch"]),
    );
    assert_eq!(data["sentiment"]["label"], "positive");
}

#[test]
fn test_validate_invalid_lexicon() {
    let temp_dir = TempDir::new().unwrap();
    let lexicon = temp_dir.path().join("broken.toml");
    fs::write(&lexicon, "[metadata]\ncode = \"xx\"\n").unwrap();

    glossa()
        .arg("validate")
        .arg(&lexicon)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Validation failed"));
}

#[test]
fn test_list_commands() {
    glossa()
        .args(["list", "formats"])
        .assert()
        .success()
        .stdout(predicate::str::contains("markdown"));

    glossa()
        .args(["list", "languages"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Devanagari"));

    glossa()
        .args(["list", "tags"])
        .assert()
        .success()
        .stdout(predicate::str::contains("PRP"));
}

#[test]
fn test_version() {
    glossa()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("glossa"));
}
