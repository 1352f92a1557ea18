use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn photo_share_cmd() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("photo-share"));
    for var in [
        "PHOTO_SHARE_CONFIG",
        "PHOTO_SHARE_SEED",
        "PHOTO_SHARE_HOST",
        "PHOTO_SHARE_PORT",
    ] {
        cmd.env_remove(var);
    }
    cmd
}

const SEED: &str = r#"
[[users]]
github_login = "gPlake"
name = "Glen Plake"

[[photos]]
name = "Dropping the Heart Chute"
category = "ACTION"
github_user = "gPlake"

[[photos]]
name = "Gunbarrel 25"
"#;

fn setup_seed_dir() -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(temp_dir.path().join("seed.toml"), SEED).unwrap();
    temp_dir
}

// =============================================================================
// Basic CLI
// =============================================================================

#[test]
fn test_help() {
    photo_share_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("GraphQL"));
}

#[test]
fn test_version() {
    photo_share_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("photo-share"));
}

#[test]
fn test_schema_prints_sdl() {
    let temp_dir = TempDir::new().unwrap();

    photo_share_cmd()
        .arg("schema")
        .current_dir(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("postPhoto(input: PostPhotoInput!): Photo!"))
        .stdout(predicate::str::contains("enum PhotoCategory"));
}

#[test]
fn test_schema_ignores_broken_seed() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(
        temp_dir.path().join("photo-share.toml"),
        "[data]\nseed = \"missing.toml\"\n",
    )
    .unwrap();

    photo_share_cmd()
        .arg("schema")
        .current_dir(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("type Query"));

    photo_share_cmd()
        .args(["query", "{ totalPhotos }"])
        .current_dir(temp_dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load seed data"));
}

#[test]
fn test_verbose_reports_config_source() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(
        temp_dir.path().join("photo-share.toml"),
        "[server]\nport = 9000\n",
    )
    .unwrap();

    photo_share_cmd()
        .args(["-v", "schema"])
        .current_dir(temp_dir.path())
        .env_remove("RUST_LOG")
        .assert()
        .success()
        .stderr(predicate::str::contains("Loaded config"))
        .stderr(predicate::str::contains("photo-share.toml"));
}

// =============================================================================
// Query and mutate
// =============================================================================

#[test]
fn test_mutate_posts_photo() {
    let temp_dir = TempDir::new().unwrap();

    photo_share_cmd()
        .arg("mutate")
        .arg(r#"postPhoto(input: { name: "Sunset", description: "Evening view" }) { id category url }"#)
        .current_dir(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""id": "0""#))
        .stdout(predicate::str::contains(r#""category": "PORTRAIT""#))
        .stdout(predicate::str::contains("https://link.com/img/0.jpg"));
}

#[test]
fn test_query_runs_mutation_with_variables() {
    let temp_dir = TempDir::new().unwrap();

    photo_share_cmd()
        .args([
            "query",
            "mutation Post($input: PostPhotoInput!) { postPhoto(input: $input) { name category } }",
            "--variables",
            r#"{"input": {"name": "Me", "category": "SELFIE"}}"#,
        ])
        .current_dir(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""name": "Me""#))
        .stdout(predicate::str::contains(r#""category": "SELFIE""#));
}

#[test]
fn test_query_empty_store() {
    let temp_dir = TempDir::new().unwrap();

    photo_share_cmd()
        .args(["query", "{ totalPhotos }"])
        .current_dir(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""totalPhotos": 0"#));
}

#[test]
fn test_query_with_seed_flag() {
    let temp_dir = setup_seed_dir();

    photo_share_cmd()
        .args([
            "query",
            "{ totalPhotos allPhotos { name } }",
            "--seed",
            "seed.toml",
        ])
        .current_dir(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""totalPhotos": 2"#))
        .stdout(predicate::str::contains("Gunbarrel 25"));
}

#[test]
fn test_query_with_seed_from_config_file() {
    let temp_dir = setup_seed_dir();
    std::fs::write(
        temp_dir.path().join("photo-share.toml"),
        "[data]\nseed = \"seed.toml\"\n",
    )
    .unwrap();

    photo_share_cmd()
        .args(["query", "{ allPhotos { name category } }"])
        .current_dir(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Dropping the Heart Chute"))
        .stdout(predicate::str::contains(r#""category": "ACTION""#));
}

#[test]
fn test_invalid_variables_fail() {
    let temp_dir = TempDir::new().unwrap();

    photo_share_cmd()
        .args(["query", "{ totalPhotos }", "--variables", "not json"])
        .current_dir(temp_dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid --variables JSON"));
}

// =============================================================================
// Configuration errors
// =============================================================================

#[test]
fn test_missing_config_file_fails() {
    let temp_dir = TempDir::new().unwrap();

    photo_share_cmd()
        .args(["--config", "missing.toml", "schema"])
        .current_dir(temp_dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load config"));
}

#[test]
fn test_invalid_seed_fails() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(
        temp_dir.path().join("seed.toml"),
        "[[tags]]\nphoto_id = 7\ngithub_login = \"gPlake\"\n",
    )
    .unwrap();

    photo_share_cmd()
        .args(["--seed", "seed.toml", "query", "{ totalPhotos }"])
        .current_dir(temp_dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load seed data"));
}
