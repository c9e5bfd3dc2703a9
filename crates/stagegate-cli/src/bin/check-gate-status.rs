use std::path::PathBuf;

use clap::Parser;
use stagegate_core::render_status_check;
use stagegate_runner::check_gate_status;

/// Re-read a persisted evaluation and exit by its overall status.
#[derive(Parser)]
#[command(name = "check-gate-status", version)]
struct Cli {
    #[arg(long)]
    evaluation_file: PathBuf,
}

fn main() {
    stagegate_cli::init_tracing();
    let cli = stagegate_cli::parse_args::<Cli>();

    let check = check_gate_status(&cli.evaluation_file);
    match &check.evaluation {
        Some(eval) => print!("{}", render_status_check(eval, &check.categories)),
        None => {
            println!("❌ Evaluation file unusable: {}", cli.evaluation_file.display());
            println!("\n🎯 Overall Status: {}", check.status);
        }
    }
    // last line is the bare token for shell consumers
    println!("{}", check.status);
    std::process::exit(check.exit_code());
}
