use std::path::PathBuf;

use clap::Parser;
use stagegate_runner::create_promotion_report;

/// Record the promotion decision for a QA evaluation.
#[derive(Parser)]
#[command(name = "create-promotion-report", version)]
struct Cli {
    #[arg(long)]
    qa_evaluation: PathBuf,
    /// Stage the templates are headed to.
    #[arg(long)]
    target: String,
    /// Gate status token from the checker.
    #[arg(long)]
    status: String,
    /// Defaults to the configured reports directory.
    #[arg(long)]
    reports_dir: Option<PathBuf>,
    #[arg(long)]
    config: Option<PathBuf>,
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let cfg = stagegate_cli::load_config(cli.config.as_deref())?;
    let reports_dir = cli.reports_dir.unwrap_or_else(|| PathBuf::from(&cfg.promotion.reports_dir));

    let (path, doc) =
        create_promotion_report(&cli.qa_evaluation, &cli.target, &cli.status, &reports_dir, &cfg.promotion)?;
    let verdict = if doc.approved() { "✅" } else { "❌" };
    println!("{verdict} {}", doc.promotion_report.recommendation);
    println!("📄 Promotion report created: {}", path.display());
    Ok(())
}

fn main() {
    stagegate_cli::init_tracing();
    let code = match run(stagegate_cli::parse_args::<Cli>()) {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("❌ Failed to create promotion report: {e:#}");
            1
        }
    };
    std::process::exit(code);
}
