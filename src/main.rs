use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use playcheck::backend::CommandBackend;
use playcheck::corpus::WalkPolicy;
use playcheck::fixtures::FixtureRegistry;
use playcheck::verify::{run_suite, Verdict};

#[derive(Parser)]
#[command(name = "playcheck")]
#[command(version = build_version())]
#[command(about = "Regression harness for playground example snippets")]
struct Cli {
    /// Root directory of the example corpus
    corpus: Option<PathBuf>,
    /// Backend command invoked per example (source on stdin, JSON on stdout)
    #[arg(long)]
    runner: Option<String>,
}

fn build_version() -> String {
    match option_env!("GIT_HASH") {
        Some(hash) => format!(
            "{} ({hash} {})",
            env!("CARGO_PKG_VERSION"),
            option_env!("GIT_DIRTY").unwrap_or("unknown")
        ),
        None => env!("CARGO_PKG_VERSION").to_string(),
    }
}

fn main() -> anyhow::Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();
    let cli = Cli::parse();

    let (Some(corpus), Some(runner)) = (cli.corpus, cli.runner) else {
        println!(
            "playcheck - verify the example corpus against a backend, e.g.: \
             playcheck ./examples --runner playground-runner"
        );
        return Ok(ExitCode::SUCCESS);
    };

    let registry = FixtureRegistry::builtin();
    let backend = CommandBackend::new(runner);
    let report = run_suite(&corpus, &WalkPolicy::default(), &registry, &backend)?;

    for result in &report.results {
        match &result.verdict {
            Verdict::Pass => println!("[PASS] {}", result.file_name),
            Verdict::Fail(reason) => println!("[FAIL] {reason}"),
        }
    }
    println!(
        "{} passed, {} failed, {} skipped",
        report.passed(),
        report.failed(),
        report.skipped.len()
    );

    Ok(if report.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
