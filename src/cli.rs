use crate::engine::ReviewEngine;
use crate::model::{gate_status, GateState, StepStatus};
use crate::report;
use anyhow::{Context, Result};
use clap::Parser;
use std::io::Read;
use std::path::PathBuf;

#[derive(Debug, Parser, Clone)]
#[command(
    name = "claim-review-cli",
    version,
    about = "Claim-review note assistant with optional TUI"
)]
pub struct Cli {
    /// Read claim notes from a file; in TUI mode this preloads the editor
    #[arg(long)]
    pub input: Option<PathBuf>,

    /// Print the assembled report (or progress) and exit (no TUI)
    #[arg(long)]
    pub text: bool,

    /// Print the full assessment as JSON and exit (no TUI)
    #[arg(long)]
    pub json: bool,

    /// Also write the completed report to a file (with --text or --json)
    #[arg(long)]
    pub export: Option<PathBuf>,
}

pub fn run(args: Cli) -> Result<()> {
    if !args.json && !args.text {
        #[cfg(feature = "tui")]
        {
            return crate::tui::run(args);
        }
        #[cfg(not(feature = "tui"))]
        {
            // Fallback when built without TUI support.
            return run_once(&args);
        }
    }

    run_once(&args)
}

/// Notes come from --input when given, otherwise from stdin.
fn read_notes(args: &Cli) -> Result<String> {
    match args.input.as_deref() {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("read claim notes from {}", path.display())),
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("read claim notes from stdin")?;
            Ok(buf)
        }
    }
}

/// JSON document printed by --json.
#[derive(serde::Serialize)]
struct Assessment<'a> {
    steps: &'a [StepStatus],
    completed_steps: usize,
    gate: GateState,
    report: Option<&'a str>,
}

/// One-shot assessment for scripting. An incomplete report is not an error:
/// progress goes to stderr and the process still exits cleanly.
fn run_once(args: &Cli) -> Result<()> {
    let notes = read_notes(args)?;
    let engine = ReviewEngine::new()?;
    let snapshot = engine.assess(&notes);
    let report_text = report::render_report(&snapshot, None);

    if let Some(path) = args.export.as_deref() {
        let text = report_text.as_deref().ok_or_else(|| {
            anyhow::anyhow!("cannot export: {}", gate_status(snapshot.gate()))
        })?;
        std::fs::write(path, text)
            .with_context(|| format!("write report to {}", path.display()))?;
        eprintln!("Exported: {}", path.display());
    }

    if args.json {
        let doc = Assessment {
            steps: &snapshot.steps,
            completed_steps: snapshot.completed_steps(),
            gate: snapshot.gate(),
            report: report_text.as_deref(),
        };
        println!("{}", serde_json::to_string_pretty(&doc)?);
        return Ok(());
    }

    match report_text {
        Some(text) => println!("{}", text),
        None => {
            eprintln!("{}", gate_status(snapshot.gate()));
            for step in &snapshot.steps {
                if let Some(hint) = report::requirements_hint(&step.missing) {
                    eprintln!("{}", step.step.heading());
                    eprintln!("  {}", hint);
                }
            }
        }
    }
    Ok(())
}
