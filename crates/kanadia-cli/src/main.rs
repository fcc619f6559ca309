//! CLI entry point for kanadia.
//!
//! This module is intentionally thin: it handles argument parsing, I/O, and exit codes.
//! All business logic lives in the `kanadia-app` crate.

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use clap::{Parser, Subcommand};
use kanadia_app::{
    DecideInput, ExplainOutput, format_explanation, format_not_found, parse_report_json,
    render_report_markdown, run_decide, run_explain, serialize_report, serialize_verdicts,
};
use kanadia_settings::Overrides;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "kanadia",
    version,
    about = "Border-crossing decisions for the Kanadia immigration office"
)]
struct Cli {
    /// Path to kanadia config TOML (optional; missing file means defaults).
    #[arg(long, default_value = "kanadia.toml")]
    config: Utf8PathBuf,

    /// Country table JSON.
    #[arg(long)]
    countries: Option<Utf8PathBuf>,

    /// Watchlist JSON.
    #[arg(long)]
    watchlist: Option<Utf8PathBuf>,

    /// Traveller entries JSON.
    #[arg(long)]
    entries: Option<Utf8PathBuf>,

    /// Evaluate as of this date (YYYY-MM-DD) instead of today.
    #[arg(long)]
    as_of: Option<String>,

    /// Evaluate records in parallel.
    #[arg(long)]
    parallel: bool,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Decide every traveller and print the verdicts as a JSON array.
    Decide {
        /// Also write the full JSON report here.
        #[arg(long)]
        report_out: Option<Utf8PathBuf>,

        /// Also write a Markdown summary here.
        #[arg(long)]
        markdown_out: Option<Utf8PathBuf>,
    },

    /// Render markdown from an existing JSON report.
    Md {
        /// Path to the JSON report file.
        #[arg(long)]
        report: Utf8PathBuf,

        /// Where to write the Markdown output (if not specified, prints to stdout).
        #[arg(long, short)]
        output: Option<Utf8PathBuf>,
    },

    /// Explain a rule_id or code.
    Explain {
        /// The rule_id (e.g., "entry.reject") or code (e.g., "unknown_origin") to explain.
        identifier: String,
    },
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();
    let overrides = Overrides {
        countries: cli.countries,
        watchlist: cli.watchlist,
        entries: cli.entries,
        as_of: cli.as_of,
        parallel: cli.parallel,
    };

    match cli.cmd {
        Commands::Decide {
            report_out,
            markdown_out,
        } => cmd_decide(
            &cli.config,
            overrides,
            report_out.as_deref(),
            markdown_out.as_deref(),
        ),
        Commands::Md { report, output } => cmd_md(report, output),
        Commands::Explain { identifier } => cmd_explain(&identifier),
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_env("KANADIA_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn cmd_decide(
    config_path: &Utf8Path,
    overrides: Overrides,
    report_out: Option<&Utf8Path>,
    markdown_out: Option<&Utf8Path>,
) -> anyhow::Result<()> {
    let result = (|| -> anyhow::Result<()> {
        // Missing config file is allowed (defaults apply).
        let cfg_text = std::fs::read_to_string(config_path).unwrap_or_default();

        let output = run_decide(DecideInput {
            config_text: &cfg_text,
            overrides,
        })?;

        println!("{}", serialize_verdicts(&output.report.verdicts)?);

        if let Some(path) = report_out {
            let data = serialize_report(&output.report)?;
            write_text_file(path, &data).context("write report json")?;
        }
        if let Some(path) = markdown_out {
            let md = render_report_markdown(&output.report);
            write_text_file(path, &md).context("write markdown")?;
        }

        Ok(())
    })();

    if let Err(err) = result {
        eprintln!("kanadia error: {err:#}");
        std::process::exit(1);
    }
    Ok(())
}

fn write_text_file(path: &Utf8Path, text: &str) -> anyhow::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_str().is_empty()
    {
        std::fs::create_dir_all(parent).with_context(|| format!("create directory: {}", parent))?;
    }
    std::fs::write(path, text).with_context(|| format!("write text: {}", path))?;
    Ok(())
}

fn cmd_md(report_path: Utf8PathBuf, output: Option<Utf8PathBuf>) -> anyhow::Result<()> {
    let report_text = std::fs::read_to_string(&report_path)
        .with_context(|| format!("read report: {}", report_path))?;
    let report = parse_report_json(&report_text)?;
    let md = render_report_markdown(&report);

    if let Some(out_path) = output {
        write_text_file(&out_path, &md).context("write markdown output")?;
    } else {
        print!("{}", md);
    }

    Ok(())
}

fn cmd_explain(identifier: &str) -> anyhow::Result<()> {
    match run_explain(identifier) {
        ExplainOutput::Found(exp) => {
            print!("{}", format_explanation(&exp));
            Ok(())
        }
        ExplainOutput::NotFound {
            identifier,
            available_rule_ids,
            available_codes,
        } => {
            eprint!(
                "{}",
                format_not_found(&identifier, available_rule_ids, available_codes)
            );
            std::process::exit(1);
        }
    }
}
