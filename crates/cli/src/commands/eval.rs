use anyhow::{Context, Result};
use notify::{RecursiveMode, Watcher};
use std::fs;
use std::path::Path;
use tracing::debug;

use crate::display::formatter;
use evalscope_core::Evaluator;

pub fn eval_command(filepath: &str, offline: bool, json: bool, watch: bool) -> Result<()> {
    debug!("Evaluating file: {} (offline: {})", filepath, offline);

    let mut evaluator = Evaluator::new()?;
    if offline {
        evaluator = evaluator.without_remote();
    }

    run_once(&mut evaluator, filepath, offline, json)?;

    if watch {
        watch_loop(&mut evaluator, filepath, offline, json)?;
    }

    Ok(())
}

fn run_once(evaluator: &mut Evaluator, filepath: &str, offline: bool, json: bool) -> Result<()> {
    let source =
        fs::read_to_string(filepath).with_context(|| format!("Failed to read {filepath}"))?;

    let result = if offline {
        evaluator.evaluate_offline(&source)
    } else {
        evaluator.evaluate(&source)
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        formatter::print_evaluation(filepath, &result);
    }

    Ok(())
}

/// Re-evaluate on every file modification, the CLI analogue of the lesson
/// editor's evaluate-per-edit loop.
fn watch_loop(evaluator: &mut Evaluator, filepath: &str, offline: bool, json: bool) -> Result<()> {
    let (tx, rx) = std::sync::mpsc::channel();
    let mut watcher = notify::recommended_watcher(tx)?;
    watcher.watch(Path::new(filepath), RecursiveMode::NonRecursive)?;

    println!("👀 Watching {filepath} (ctrl-c to stop)");

    for event in rx {
        match event {
            Ok(event) if event.kind.is_modify() || event.kind.is_create() => {
                debug!("change detected: {:?}", event.kind);
                run_once(evaluator, filepath, offline, json)?;
            }
            Ok(_) => {}
            Err(err) => eprintln!("⚠️  watch error: {err}"),
        }
    }

    Ok(())
}
