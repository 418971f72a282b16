//! Unit tests for command dispatch.

use anyhow::{Context, Result, anyhow, ensure};
use camino::Utf8PathBuf;
use clap::Parser;
use figment::Jail;
use rstest::rstest;
use serde_json::{Value, json};

use super::{Cli, Command, run};

fn run_in_jail(args: &[&str], files: &[(&str, &str)]) -> Result<Value> {
    let mut output = Vec::new();
    let mut outcome = Ok(());
    Jail::expect_with(|j| {
        for (name, contents) in files {
            j.create_file(name, contents)?;
        }
        let cli = Cli::try_parse_from(args).map_err(|e| e.to_string())?;
        outcome = run(cli, &mut output).map_err(|e| anyhow!(e.to_string()));
        Ok(())
    });
    outcome?;
    serde_json::from_slice(&output).context("command output is JSON")
}

#[rstest]
fn parses_merge_arguments() -> Result<()> {
    let cli = Cli::try_parse_from(["talk-admin", "merge", "a.json", "b.toml"])?;
    let Command::Merge { files } = cli.command else {
        return Err(anyhow!("expected merge command"));
    };
    ensure!(files == [Utf8PathBuf::from("a.json"), Utf8PathBuf::from("b.toml")]);
    Ok(())
}

#[rstest]
fn merge_requires_a_file() {
    assert!(Cli::try_parse_from(["talk-admin", "merge"]).is_err());
}

#[rstest]
fn merges_mixed_formats() -> Result<()> {
    let merged = run_in_jail(
        &["talk-admin", "merge", "base.toml", "local.json"],
        &[
            ("base.toml", "[form]\ntheme = \"admin\"\nfields = [\"title\"]\n"),
            ("local.json", r#"{"form": {"fields": ["summary"], "id": "talk"}}"#),
        ],
    )?;
    ensure!(
        merged == json!({"form": {"theme": "admin", "fields": ["summary"], "id": "talk"}}),
        "unexpected merge output {merged}"
    );
    Ok(())
}

#[rstest]
fn single_document_merge_is_an_arity_error() {
    let err = run_in_jail(&["talk-admin", "merge", "only.json"], &[("only.json", "{}")])
        .expect_err("one document is not enough");
    assert!(err.to_string().contains("at least 2 mappings"), "{err}");
}

#[rstest]
fn resolves_the_talk_update_hook() -> Result<()> {
    let rendered = run_in_jail(
        &[
            "talk-admin",
            "hook",
            "sylius_admin.talk.update.content",
            "--context",
            "context.json",
        ],
        &[(
            "context.json",
            r#"{"form": {"name": "talk"}, "resource": {"id": 3}}"#,
        )],
    )?;
    ensure!(
        rendered
            == json!([{
                "name": "form",
                "component": "App\\Twig\\Component\\TalkFormComponent",
                "priority": 0,
                "props": {"form": {"name": "talk"}, "initialFormData": {"id": 3}},
            }]),
        "unexpected hook output {rendered}"
    );
    Ok(())
}

#[rstest]
fn extra_hook_files_come_from_settings() -> Result<()> {
    let rendered = run_in_jail(
        &[
            "talk-admin",
            "--config-path",
            "admin.toml",
            "hook",
            "sylius_admin.talk.update.content",
        ],
        &[
            ("admin.toml", "hook_files = [\"off.toml\"]\n"),
            (
                "off.toml",
                "[hooks.\"sylius_admin.talk.update.content\".form]\nenabled = false\n",
            ),
        ],
    )?;
    ensure!(rendered == json!([]), "expected no hookables, got {rendered}");
    Ok(())
}

#[rstest]
fn summarises_talk_statistics() -> Result<()> {
    let stats = run_in_jail(
        &["talk-admin", "stats", "talks.toml"],
        &[(
            "talks.toml",
            "[[talks]]\ntalkId = 1\ntitle = \"Borrowing\"\nattendees = 30\n\n\
             [[talks]]\ntalkId = 2\ntitle = \"Traits\"\nattendees = 12\n",
        )],
    )?;
    ensure!(
        stats.get("businessActivitySummary")
            == Some(&json!({"totalTalks": 2, "totalAttendees": 42})),
        "unexpected summary in {stats}"
    );
    Ok(())
}
