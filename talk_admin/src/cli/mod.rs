//! Command-line interface for inspecting merges, hooks and statistics.

use std::io::Write;

use camino::{Utf8Path, Utf8PathBuf};
use clap::{Parser, Subcommand};
use serde_json::{Map, Value};
use tracing::debug;
use twig_extra::MergeRecursiveExtension;

use crate::document::load_document;
use crate::hooks::HookTarget;
use crate::statistics::{Statistics, TalkStatistics};
use crate::{AdminApp, AdminError, AdminResult, AdminSettings};

/// Top-level command line.
#[derive(Debug, Parser)]
#[command(name = "talk-admin", version, about = "Talk administration helpers")]
pub struct Cli {
    /// Settings file layered over the defaults.
    #[arg(long, global = true, env = AdminSettings::CONFIG_PATH_ENV)]
    pub config_path: Option<Utf8PathBuf>,

    /// Action to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported actions.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Deep-merge two or more JSON or TOML documents with `merge_recursive`.
    Merge {
        /// Documents to merge, lowest precedence first.
        #[arg(required = true, num_args = 1..)]
        files: Vec<Utf8PathBuf>,
    },
    /// Resolve the hookables of a hook against a render context.
    Hook {
        /// Hook name, e.g. `sylius_admin.talk.update.content`.
        name: String,
        /// JSON or TOML document used as the render context.
        #[arg(long)]
        context: Option<Utf8PathBuf>,
    },
    /// Summarise a JSON or TOML list of per-talk figures.
    Stats {
        /// Document holding a `talks` array.
        file: Utf8PathBuf,
    },
}

/// Execute `cli`, writing pretty-printed JSON to `out`.
///
/// # Errors
///
/// Returns an [`AdminError`] when settings, documents or the requested
/// operation fail, or when writing to `out` fails.
pub fn run<W: Write>(cli: Cli, out: &mut W) -> AdminResult<()> {
    let settings = AdminSettings::load(cli.config_path.as_deref())?;
    let app = AdminApp::wire(&settings)?;
    let rendered = match cli.command {
        Command::Merge { files } => merge_files(&app, &files)?,
        Command::Hook { name, context } => resolve_hook(&app, &name, context)?,
        Command::Stats { file } => summarise(&file)?,
    };
    serde_json::to_writer_pretty(&mut *out, &rendered)?;
    writeln!(out)?;
    Ok(())
}

fn merge_files(app: &AdminApp, files: &[Utf8PathBuf]) -> AdminResult<Value> {
    let documents = files
        .iter()
        .map(|path| load_document(path))
        .collect::<AdminResult<Vec<_>>>()?;
    debug!(documents = documents.len(), "merging documents");
    Ok(app
        .environment()
        .apply_filter(MergeRecursiveExtension::FILTER, &documents)?)
}

fn resolve_hook(app: &AdminApp, name: &str, context: Option<Utf8PathBuf>) -> AdminResult<Value> {
    let render_context = match context {
        Some(path) => match load_document(&path)? {
            Value::Object(map) => map,
            other => {
                return Err(AdminError::document(
                    path,
                    format!("render context must be a mapping, found {other}"),
                ));
            }
        },
        None => Map::new(),
    };
    let rendered = app.hooks().resolve(name, &render_context)?;
    Ok(Value::Array(
        rendered
            .into_iter()
            .map(|hookable| {
                let mut entry = Map::new();
                entry.insert("name".to_owned(), Value::String(hookable.name));
                let (kind, target) = match hookable.target {
                    HookTarget::Component(component) => ("component", component),
                    HookTarget::Template(template) => ("template", template),
                };
                entry.insert(kind.to_owned(), Value::String(target));
                entry.insert("priority".to_owned(), Value::from(hookable.priority));
                entry.insert("props".to_owned(), Value::Object(hookable.props));
                Value::Object(entry)
            })
            .collect(),
    ))
}

fn summarise(file: &Utf8Path) -> AdminResult<Value> {
    #[derive(serde::Deserialize)]
    struct TalkList {
        talks: Vec<TalkStatistics>,
    }

    let list: TalkList = serde_json::from_value(load_document(file)?)
        .map_err(|e| AdminError::document(file, e))?;
    Ok(Value::Object(Statistics::from_talks(list.talks).to_context()?))
}

#[cfg(test)]
mod tests;
