//! chronic-check: console front end for the chronic disease symptom checker.

use chronic_core::{
    diagnose, render, CoreConfig, KnowledgeBase, LabelMenu, OutputFormat, NO_VALID_INPUT,
    SELECTION_PROMPT,
};
use std::io::{self, BufRead, Write};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Pre-flight check: config loads and the rule table validates.
fn run_verify(config: &CoreConfig) -> Result<(), String> {
    println!("chronic-check pre-flight\n");
    println!("App name: {}", config.app_name);
    println!("Output:   {:?}", config.output);
    let source = config.rules_path.as_deref().unwrap_or("built-in");
    let kb = KnowledgeBase::load(config)
        .map_err(|e| format!("rule table ({}) INVALID: {}", source, e))?;
    println!(
        "Rule table ({})... OK ({} diseases, {} labels)",
        source,
        kb.len(),
        kb.all_labels().len()
    );
    for rule in kb.iter() {
        println!(
            "  - {} (trigger {} of {} labels)",
            rule.name,
            rule.trigger_count,
            rule.distinct_label_count()
        );
    }
    println!("\nSUCCESS: ready to run.");
    Ok(())
}

/// One interaction: show the menu, read a line, report.
fn run_session<R: BufRead, W: Write>(
    config: &CoreConfig,
    kb: &KnowledgeBase,
    input: &mut R,
    out: &mut W,
) -> chronic_core::Result<()> {
    let menu = LabelMenu::new(kb);

    writeln!(out, "--- {} ---", config.app_name)?;
    writeln!(out, "\nPlease select symptoms/risk factors:")?;
    for line in menu.render() {
        writeln!(out, "{}", line)?;
    }
    write!(out, "{}", SELECTION_PROMPT)?;
    out.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    let selection = menu.parse_selection(&line);

    if selection.is_empty() {
        writeln!(out, "\n{}", NO_VALID_INPUT)?;
        return Ok(());
    }

    let result = diagnose(&selection, kb);
    tracing::info!(
        target: "chronic::cli",
        selected = selection.len(),
        flagged = result.len(),
        "Diagnosis complete"
    );
    writeln!(out, "\n{}", render(config.output, &selection, &result)?)?;
    Ok(())
}

fn main() {
    // Load .env file if present (before any env::var calls)
    if let Err(e) = dotenvy::dotenv() {
        eprintln!("[chronic-check] .env not loaded: {} (using system environment)", e);
    }

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let mut config = match CoreConfig::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("[chronic-check] failed to load config: {}", e);
            std::process::exit(1);
        }
    };

    let args: Vec<String> = std::env::args().collect();
    if args.iter().any(|a| a == "--json") {
        config.output = OutputFormat::Json;
    }
    if args.iter().any(|a| a == "--verify") {
        match run_verify(&config) {
            Ok(()) => std::process::exit(0),
            Err(e) => {
                eprintln!("PRE-FLIGHT FAILED: {}", e);
                std::process::exit(1);
            }
        }
    }

    let kb = match KnowledgeBase::load(&config) {
        Ok(kb) => kb,
        Err(e) => {
            eprintln!("[chronic-check] failed to load rule table: {}", e);
            std::process::exit(1);
        }
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    if let Err(e) = run_session(&config, &kb, &mut stdin.lock(), &mut stdout.lock()) {
        eprintln!("[chronic-check] {}", e);
        std::process::exit(1);
    }
}
