use anyhow::Result;
use clap::Parser;
use tracing::error;

use datecheck::{report, utils, Args};

fn main() -> Result<()> {
    let args = Args::parse();
    utils::setup_logging(args.verbose);
    utils::validate_args(&args)?;

    if args.no_color {
        colored::control::set_override(false);
    }

    match report::analyze_date(&args) {
        Ok(result) => report::print_report(&result, &args),
        Err(e) => {
            error!(action = "fail", component = "date_analysis", error = %e, "Date analysis failed");
            eprintln!("Error: {e:#}");
            std::process::exit(1);
        }
    }
}
