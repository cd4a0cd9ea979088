use assert_cmd::Command;
use std::fs;

fn session_json() -> &'static str {
    r#"{
        "session_id": "cli-1",
        "language": "es",
        "attempts": [
            {
                "kind": "reading",
                "transcript": "el veloz zorro marron salta sobre el perro perezoso",
                "reference_text": "el veloz zorro marron salta sobre el perro perezoso",
                "audio_duration_seconds": 4.5
            },
            {
                "kind": "description",
                "transcript": "una plaza tranquila con arboles viejos",
                "audio_duration_seconds": 4.0
            },
            {
                "kind": "question",
                "transcript": "creo que volveria porque me gusto mucho",
                "audio_duration_seconds": 4.0
            }
        ]
    }"#
}

#[test]
fn score_command_emits_session_result_json() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("session.json");
    fs::write(&input, session_json()).unwrap();

    let output = Command::cargo_bin("speechmap")
        .unwrap()
        .arg("score")
        .arg(&input)
        .assert()
        .success();

    let stdout = String::from_utf8(output.get_output().stdout.clone()).unwrap();
    let result: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(result["session_id"], "cli-1");
    assert!(result["overallScore"].is_number());
    assert!(result["dimensions"].as_array().unwrap().len() >= 2);
}

#[test]
fn score_command_writes_output_file() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("session.json");
    let output_path = dir.path().join("result.json");
    fs::write(&input, session_json()).unwrap();

    Command::cargo_bin("speechmap")
        .unwrap()
        .arg("score")
        .arg(&input)
        .arg("--output")
        .arg(&output_path)
        .assert()
        .success();

    let written = fs::read_to_string(&output_path).unwrap();
    let result: serde_json::Value = serde_json::from_str(&written).unwrap();
    assert_eq!(result["session_id"], "cli-1");
}

#[test]
fn score_command_rejects_incomplete_session() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("session.json");
    fs::write(
        &input,
        r#"{
            "session_id": "cli-2",
            "attempts": [
                { "kind": "reading", "transcript": "hola", "audio_duration_seconds": 1.0 }
            ]
        }"#,
    )
    .unwrap();

    Command::cargo_bin("speechmap")
        .unwrap()
        .arg("score")
        .arg(&input)
        .assert()
        .failure();
}

#[test]
fn init_command_writes_resource_files() {
    let dir = tempfile::tempdir().unwrap();

    Command::cargo_bin("speechmap")
        .unwrap()
        .arg("init")
        .arg(dir.path())
        .assert()
        .success();

    assert!(dir.path().join("parameters.json").exists());
    assert!(dir.path().join("filler_words.json").exists());

    // A second run without --force refuses to overwrite.
    Command::cargo_bin("speechmap")
        .unwrap()
        .arg("init")
        .arg(dir.path())
        .assert()
        .failure();

    Command::cargo_bin("speechmap")
        .unwrap()
        .arg("init")
        .arg(dir.path())
        .arg("--force")
        .assert()
        .success();
}
