use std::path::PathBuf;

use clap::Parser;
use stagegate_promote::TemplatePromoter;

/// Copy QA-approved templates into the next stage tree.
#[derive(Parser)]
#[command(name = "promote-templates", version)]
struct Cli {
    #[arg(long)]
    source_dir: PathBuf,
    #[arg(long)]
    target_dir: PathBuf,
    /// Evaluation JSON that must report PASSED.
    #[arg(long)]
    qa_results: PathBuf,
    #[arg(long)]
    config: Option<PathBuf>,
}

fn run(cli: Cli) -> anyhow::Result<i32> {
    let cfg = stagegate_cli::load_config(cli.config.as_deref())?;
    let promoter = TemplatePromoter::new(&cfg.promotion);
    println!(
        "🚀 Promotion {} ({} -> {})",
        promoter.promotion_id(),
        cfg.promotion.source_stage,
        cfg.promotion.target_stage
    );

    let outcome = match promoter.promote(&cli.source_dir, &cli.target_dir, &cli.qa_results) {
        Ok(outcome) => outcome,
        Err(e) => {
            println!("❌ {e}");
            return Ok(1);
        }
    };

    let meta = &outcome.metadata;
    for t in &meta.promoted_templates {
        println!("✅ {} -> {}", t.source_path, t.target_path);
    }
    for rel in &meta.failed_templates {
        println!("❌ {rel}");
    }
    println!("\n📊 Promotion Summary:");
    println!("   Total templates: {}", meta.total_templates);
    println!("   Successfully promoted: {}", meta.successfully_promoted);
    println!("   Success rate: {:.1}%", meta.success_rate());
    println!("📄 Summary saved to: {}", outcome.summary_path.display());

    if meta.is_complete() {
        println!("🎉 All templates promoted to {} stage", meta.target_stage);
        Ok(0)
    } else {
        println!("⚠️ Some templates failed to promote");
        Ok(1)
    }
}

fn main() {
    stagegate_cli::init_tracing();
    let code = match run(stagegate_cli::parse_args::<Cli>()) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("❌ Template promotion failed: {e:#}");
            1
        }
    };
    std::process::exit(code);
}
