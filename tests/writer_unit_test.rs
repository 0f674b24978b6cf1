//! Unit tests for the output sink and the generate-then-write pipeline

use kanban_seed::{
    FakeValues, OutputTarget, ScriptWriter, SeedConfig, SeedScript, Statement, StatementKind,
    ValueSource,
};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn sample_script() -> SeedScript {
    let mut script = SeedScript::new();
    script.push(Statement::new(
        StatementKind::Member,
        "INSERT INTO _App.Members (userId, boardId) VALUE (2, 1);".to_string(),
    ));
    script.push(Statement::new(
        StatementKind::Board,
        "CALL _App.create_board(1, 'b', '#000000', @__discarded__);".to_string(),
    ));
    script
}

#[test]
fn test_output_target_from_path() {
    assert_eq!(OutputTarget::from_path(Path::new("-")), OutputTarget::Stdout);
    assert_eq!(
        OutputTarget::from_path(Path::new("data.sql")),
        OutputTarget::File("data.sql".into())
    );
    assert_eq!(OutputTarget::Stdout.to_string(), "<stdout>");
}

#[tokio::test]
async fn test_write_script_to_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("data.sql");

    let writer = ScriptWriter::new(OutputTarget::File(path.clone()));
    let bytes = writer.write(&sample_script()).await.unwrap();

    let content = fs::read_to_string(&path).unwrap();
    assert_eq!(bytes, content.len());
    assert_eq!(
        content,
        "CALL _App.create_board(1, 'b', '#000000', @__discarded__);\n\
         INSERT INTO _App.Members (userId, boardId) VALUE (2, 1);"
    );
}

#[tokio::test]
async fn test_write_overwrites_existing_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("data.sql");
    fs::write(&path, "stale content that is much longer than the new script\n".repeat(100)).unwrap();

    let writer = ScriptWriter::new(OutputTarget::File(path.clone()));
    writer.write(&sample_script()).await.unwrap();

    let content = fs::read_to_string(&path).unwrap();
    assert!(!content.contains("stale"));
    assert_eq!(content.lines().count(), 2);
}

#[tokio::test]
async fn test_write_to_missing_directory_fails() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("missing").join("data.sql");

    let writer = ScriptWriter::new(OutputTarget::File(path));
    let err = writer.write(&sample_script()).await.unwrap_err();
    assert!(err.to_string().contains("Failed to write"));
}

#[tokio::test]
async fn test_run_writes_full_script() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("data.sql");
    let config = SeedConfig {
        users: 2,
        ..Default::default()
    };

    let stats = kanban_seed::run(
        &config,
        FakeValues::from_seed(42),
        OutputTarget::File(path.clone()),
    )
    .await
    .unwrap();

    assert_eq!(stats.total(), 42);
    let content = fs::read_to_string(&path).unwrap();
    assert_eq!(content.lines().count(), 42);
    assert!(!content.ends_with('\n'));
}

/// Value source whose colors are never available
struct NoColors(FakeValues<rand::rngs::StdRng>);

impl ValueSource for NoColors {
    fn username(&mut self) -> anyhow::Result<String> {
        self.0.username()
    }
    fn first_name(&mut self) -> anyhow::Result<String> {
        self.0.first_name()
    }
    fn last_name(&mut self) -> anyhow::Result<String> {
        self.0.last_name()
    }
    fn email(&mut self) -> anyhow::Result<String> {
        self.0.email()
    }
    fn password(&mut self, length: usize) -> anyhow::Result<String> {
        self.0.password(length)
    }
    fn alpha(&mut self, length: usize) -> anyhow::Result<String> {
        self.0.alpha(length)
    }
    fn rgb_color(&mut self) -> anyhow::Result<String> {
        anyhow::bail!("no colors left")
    }
    fn int_range(&mut self, min: i64, max: i64) -> anyhow::Result<i64> {
        self.0.int_range(min, max)
    }
}

#[tokio::test]
async fn test_generation_failure_writes_nothing() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("data.sql");

    let result = kanban_seed::run(
        &SeedConfig::default(),
        NoColors(FakeValues::from_seed(1)),
        OutputTarget::File(path.clone()),
    )
    .await;

    let err = result.unwrap_err();
    assert!(format!("{:#}", err).contains("no colors left"));
    assert!(!path.exists());
}
