//! Workspace tasks: `cargo run -p ligview-xtask -- <task>`.

use std::cell::RefCell;
use std::path::{Path, PathBuf};
use std::process::Command;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use ligview::catalog::{ComplexDescriptor, CATALOG};
use ligview::options::Options;
use ligview::render::RecordingEngine;
use ligview::source::RcsbSource;
use ligview::viewer::{drive_load, Completion, ViewController};

#[derive(Parser)]
#[command(name = "xtask", about = "ligview workspace tasks")]
struct Cli {
    #[command(subcommand)]
    task: Task,
}

#[derive(Subcommand)]
enum Task {
    /// Build the web UI bundle with trunk.
    BuildUi {
        /// Build with optimizations.
        #[arg(long)]
        release: bool,
    },
    /// Download every catalog complex and build its scene headlessly.
    CheckCatalog {
        /// TOML options preset to use instead of the defaults.
        #[arg(long)]
        options: Option<PathBuf>,
        /// Write the recorded scene commands as JSON into this directory.
        #[arg(long)]
        dump: Option<PathBuf>,
    },
    /// List option presets, or write the defaults as a new one.
    Presets {
        /// Directory holding `<name>.toml` presets.
        #[arg(long, default_value = "presets")]
        dir: PathBuf,
        /// Write the default options as `<dir>/<NAME>.toml`.
        #[arg(long, value_name = "NAME")]
        init: Option<String>,
    },
    /// Write the options JSON schema.
    Schema {
        /// Output file.
        #[arg(default_value = "options.schema.json")]
        out: PathBuf,
    },
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info"),
    )
    .init();

    match Cli::parse().task {
        Task::BuildUi { release } => build_ui(release),
        Task::CheckCatalog { options, dump } => {
            let options = match options {
                Some(path) => Options::load(&path)
                    .with_context(|| format!("loading {}", path.display()))?,
                None => Options::default(),
            };
            check_catalog(&options, dump.as_deref())
        }
        Task::Presets { dir, init } => presets(&dir, init.as_deref()),
        Task::Schema { out } => {
            let schema = serde_json::to_string_pretty(&Options::json_schema())?;
            std::fs::write(&out, schema)
                .with_context(|| format!("writing {}", out.display()))?;
            log::info!("wrote {}", out.display());
            Ok(())
        }
    }
}

fn presets(dir: &Path, init: Option<&str>) -> Result<()> {
    if let Some(name) = init {
        let path = dir.join(format!("{name}.toml"));
        if path.exists() {
            bail!("{} already exists", path.display());
        }
        Options::default()
            .save(&path)
            .with_context(|| format!("writing {}", path.display()))?;
        log::info!("wrote {}", path.display());
    }

    let names = Options::list_presets(dir);
    if names.is_empty() {
        log::info!("no presets in {}", dir.display());
    }
    for name in names {
        let path = dir.join(format!("{name}.toml"));
        match Options::load(&path) {
            Ok(_) => log::info!("{name}"),
            Err(e) => log::warn!("{name}: {e}"),
        }
    }
    Ok(())
}

fn build_ui(release: bool) -> Result<()> {
    let ui_dir = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("crates")
        .join("ligview-ui");
    let mut cmd = Command::new("trunk");
    let _ = cmd.arg("build").current_dir(&ui_dir);
    if release {
        let _ = cmd.arg("--release");
    }
    let status = cmd.status().context("failed to run trunk (is it installed?)")?;
    if !status.success() {
        bail!("trunk build failed with {status}");
    }
    log::info!("UI bundle written to {}", ui_dir.join("dist").display());
    Ok(())
}

fn check_catalog(options: &Options, dump: Option<&Path>) -> Result<()> {
    let source = RcsbSource::new(&options.source);
    let mut failures = Vec::new();

    for complex in CATALOG {
        let engine = RecordingEngine::new();
        let scene = engine.log();
        let view = RefCell::new(ViewController::new(
            engine,
            complex.id.to_lowercase(),
            options.clone(),
        ));

        // Before mount a selection only records the choice.
        let _ = view.borrow_mut().select(complex);
        let ticket = view.borrow_mut().mount();
        let completion = pollster::block_on(drive_load(&view, &source, ticket));

        match completion {
            Completion::Applied => {
                log::info!("{}: ok ({} scene commands)", complex.id, scene.len());
            }
            _ => {
                let message = view
                    .borrow()
                    .state()
                    .error
                    .clone()
                    .unwrap_or_else(|| format!("{completion:?}"));
                log::error!("{}: {message}", complex.id);
                failures.push(complex);
            }
        }

        if let Some(dir) = dump {
            write_dump(dir, complex, &serde_json::to_value(scene.commands())?)?;
        }
    }

    if !failures.is_empty() {
        let ids: Vec<_> = failures.iter().map(|c| c.id).collect();
        bail!("{} complex(es) failed: {}", ids.len(), ids.join(", "));
    }
    Ok(())
}

fn write_dump(
    dir: &Path,
    complex: &ComplexDescriptor,
    commands: &serde_json::Value,
) -> Result<()> {
    std::fs::create_dir_all(dir)?;
    let path = dir.join(format!("{}.json", complex.id));
    std::fs::write(&path, serde_json::to_string_pretty(commands)?)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}
