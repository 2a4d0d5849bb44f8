//! Integration tests for generate, save, post and library commands

use assert_cmd::assert::OutputAssertExt;
use assert_cmd::cargo_bin;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use std::process::Command;
use tempfile::TempDir;

use aiwriter_testkit::{
    completion_body, get_shared_mock_server, models_body, shared_api_base,
    structured_completion_body,
};

const SAMPLE_HTML: &str =
    "<h2>Sample Generated Content</h2><p>This is a test content generated by AI.</p>";

/// Config dir with an API key, pointed at `<mock>/<prefix>/v1`
fn configured(prefix: &str, extra_settings: &str) -> (TempDir, String) {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("settings.toml"),
        format!(
            "api_key = \"sk-cli-test\"\nsite_url = \"https://blog.example.com\"\n{}",
            extra_settings
        ),
    )
    .unwrap();
    (temp, shared_api_base(prefix))
}

fn aiwriter(config_dir: &Path, base_url: &str) -> Command {
    let mut cmd = Command::new(cargo_bin!("aiwriter"));
    cmd.env("AIWRITER_CONFIG_DIR", config_dir)
        .env("AIWRITER_API_BASE_URL", base_url)
        .env_remove("OPENAI_API_KEY");
    cmd
}

fn json_stdout(cmd: &mut Command) -> serde_json::Value {
    let output = cmd.output().unwrap();
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).unwrap()
}

#[test]
fn test_generate_sample_scenario_json() {
    let (temp, base) = configured("cli-sample", "");
    let mock = {
        let mut server = get_shared_mock_server();
        server
            .mock("POST", "/cli-sample/v1/chat/completions")
            .match_header("authorization", "Bearer sk-cli-test")
            .with_status(200)
            .with_body(completion_body(SAMPLE_HTML))
            .expect(1)
            .create()
    };

    let body = json_stdout(aiwriter(temp.path(), &base).args([
        "generate",
        "--topic",
        "WordPress Development",
        "--json",
    ]));

    mock.assert();
    let data = &body["data"];
    assert_eq!(body["success"], true);
    assert_eq!(data["message"], "Content generated successfully!");
    assert_eq!(data["title"], "Sample Generated Content");
    assert_eq!(data["word_count"], 11);
    assert_eq!(data["usage_tokens"], 200);
    let content = data["content"].as_str().unwrap();
    assert!(content.contains("<h2>") && content.contains("<p>"));
    assert!(data.get("saved_id").is_none());
}

#[test]
fn test_generate_human_output() {
    let (temp, base) = configured("cli-human", "");
    let _mock = {
        let mut server = get_shared_mock_server();
        server
            .mock("POST", "/cli-human/v1/chat/completions")
            .with_status(200)
            .with_body(structured_completion_body("Human Title", "<p>Readable.</p>"))
            .create()
    };

    aiwriter(temp.path(), &base)
        .args(["generate", "--topic", "Readable output"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Human Title"))
        .stdout(predicate::str::contains("<p>Readable.</p>"))
        .stdout(predicate::str::contains("Words: 1"))
        .stdout(predicate::str::contains("Content generated successfully!"));
}

#[test]
fn test_generate_save_and_create_post() {
    let (temp, base) = configured("cli-chain", "");
    let _mock = {
        let mut server = get_shared_mock_server();
        server
            .mock("POST", "/cli-chain/v1/chat/completions")
            .with_status(200)
            .with_body(structured_completion_body(
                "Chained",
                "<h2>Part</h2><p>Body text.</p>",
            ))
            .create()
    };

    let body = json_stdout(aiwriter(temp.path(), &base).args([
        "generate",
        "--topic",
        "Chained actions",
        "--save",
        "--create-post",
        "--status",
        "publish",
        "--json",
    ]));

    let data = &body["data"];
    assert_eq!(data["saved"]["id"], 1);
    assert_eq!(data["saved"]["message"], "Content saved successfully!");
    assert_eq!(data["post"]["post_id"], 1);
    assert_eq!(data["post"]["status"], "publish");
    assert_eq!(
        data["post"]["edit_url"],
        "https://blog.example.com/wp-admin/post.php?post=1&action=edit"
    );

    let posts: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(temp.path().join("posts.json")).unwrap())
            .unwrap();
    let stored = &posts["posts"][0];
    assert_eq!(stored["title"], "Chained");
    assert!(
        stored["content"]
            .as_str()
            .unwrap()
            .starts_with("<!-- wp:heading {\"level\":2} -->")
    );
    assert_eq!(stored["meta"]["_ai_writer_generated"], true);
}

#[test]
fn test_auto_save_setting() {
    let (temp, base) = configured("cli-autosave", "auto_save = true\n");
    let _mock = {
        let mut server = get_shared_mock_server();
        server
            .mock("POST", "/cli-autosave/v1/chat/completions")
            .with_status(200)
            .with_body(completion_body("<p>Kept automatically.</p>"))
            .create()
    };

    let body = json_stdout(aiwriter(temp.path(), &base).args([
        "generate",
        "--topic",
        "Auto saved",
        "--save",
        "--json",
    ]));

    // --save does not store a second copy
    assert_eq!(body["data"]["saved_id"], 1);
    assert!(body["data"].get("saved").is_none());

    let listed = json_stdout(aiwriter(temp.path(), &base).args(["library", "list", "--json"]));
    assert_eq!(listed["data"].as_array().unwrap().len(), 1);
}

#[test]
fn test_generate_auth_failure() {
    let (temp, base) = configured("cli-401", "");
    let _mock = {
        let mut server = get_shared_mock_server();
        server
            .mock("POST", "/cli-401/v1/chat/completions")
            .with_status(401)
            .create()
    };

    aiwriter(temp.path(), &base)
        .args(["generate", "--topic", "Wrong key"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains(
            "Invalid API key. Please check your OpenAI API key in settings.",
        ));
}

#[test]
fn test_connection_with_override_key() {
    let (temp, base) = configured("cli-conn", "");
    let mock = {
        let mut server = get_shared_mock_server();
        server
            .mock("GET", "/cli-conn/v1/models")
            .match_header("authorization", "Bearer sk-override")
            .with_status(200)
            .with_body(models_body(&["gpt-4", "gpt-4o", "tts-1"]))
            .expect(1)
            .create()
    };

    aiwriter(temp.path(), &base)
        .args(["test-connection", "--api-key", "sk-override"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Connection successful! Found 2 available models.",
        ));
    mock.assert();
}

#[test]
fn test_save_from_file_and_show() {
    let (temp, base) = configured("cli-save", "");
    let file = temp.path().join("draft.html");
    fs::write(&file, "<p>From a file.</p>\n").unwrap();

    aiwriter(temp.path(), &base)
        .args(["save", "--content-file"])
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("Content saved successfully!"))
        .stdout(predicate::str::contains("Generated Content"));

    let shown = json_stdout(aiwriter(temp.path(), &base).args(["library", "show", "1", "--json"]));
    assert_eq!(shown["data"]["title"], "Generated Content");
    assert_eq!(shown["data"]["content"], "<p>From a file.</p>");
}

#[test]
fn test_save_empty_content() {
    let (temp, base) = configured("cli-save-empty", "");
    aiwriter(temp.path(), &base)
        .args(["save", "--content", "  "])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No content to save."));
}

#[test]
fn test_library_show_missing_entry() {
    let (temp, base) = configured("cli-lib-missing", "");
    aiwriter(temp.path(), &base)
        .args(["library", "show", "42"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Content '42' not found"));
}

#[test]
fn test_post_create_plain_text() {
    let (temp, base) = configured("cli-post", "");

    let body = json_stdout(aiwriter(temp.path(), &base).args([
        "post",
        "create",
        "--title",
        "Plain post",
        "--content",
        "First line.\n\nSecond line.",
        "--status",
        "unknown",
        "--json",
    ]));

    assert_eq!(body["data"]["status"], "draft");
    assert_eq!(
        body["data"]["message"],
        "Post \"Plain post\" created successfully!"
    );

    let posts = fs::read_to_string(temp.path().join("posts.json")).unwrap();
    assert!(posts.contains("<!-- wp:paragraph -->\\n<p>First line.</p>\\n<!-- /wp:paragraph -->"));
}

#[test]
fn test_post_create_requires_title() {
    let (temp, base) = configured("cli-post-title", "");
    aiwriter(temp.path(), &base)
        .args(["post", "create", "--title", " ", "--content", "<p>x</p>"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Post title is required."));
}
