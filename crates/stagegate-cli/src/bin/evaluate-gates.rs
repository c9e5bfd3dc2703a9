use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use stagegate_core::render_evaluation_summary;
use stagegate_runner::{evaluate_all, write_evaluation_report, ReportDirs};

/// Evaluate QA quality gates from collected tool reports.
#[derive(Parser)]
#[command(name = "evaluate-gates", version)]
struct Cli {
    #[arg(long)]
    security_results: PathBuf,
    #[arg(long)]
    compliance_results: PathBuf,
    #[arg(long)]
    quality_results: PathBuf,
    #[arg(long)]
    performance_results: PathBuf,
    /// Where to write the evaluation JSON.
    #[arg(long)]
    output: PathBuf,
    /// Optional TOML file overriding thresholds.
    #[arg(long)]
    config: Option<PathBuf>,
}

fn run(cli: Cli) -> anyhow::Result<i32> {
    let cfg = stagegate_cli::load_config(cli.config.as_deref())?;
    let dirs = ReportDirs {
        security: cli.security_results,
        compliance: cli.compliance_results,
        quality: cli.quality_results,
        performance: cli.performance_results,
    };

    let eval = evaluate_all(&dirs, &cfg.thresholds);
    print!("{}", render_evaluation_summary(&eval.result));

    let status = write_evaluation_report(&eval, &cli.output)
        .with_context(|| format!("save evaluation to {}", cli.output.display()))?;
    println!("\n📄 Evaluation results saved to: {}", cli.output.display());
    Ok(status.exit_code())
}

fn main() {
    stagegate_cli::init_tracing();
    let code = match run(stagegate_cli::parse_args::<Cli>()) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("❌ Gate evaluation failed: {e:#}");
            1
        }
    };
    std::process::exit(code);
}
