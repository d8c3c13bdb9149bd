// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::Parser;

#[cfg(feature = "parallel")]
use indicatif::{ProgressBar, ProgressStyle};

use docrank::{
    export, extract_files, normalize, rank_outcome, ExtractionOutcome, RankOptions, RankOutcome,
    SkillQuery,
};

mod cli;
use cli::{display, Cli, Commands, OutputFormat};

/// Progress bars only below this many files would just flicker.
#[cfg(feature = "parallel")]
const PROGRESS_THRESHOLD: usize = 50;

fn main() {
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Rank {
            target,
            target_file,
            skills,
            format,
            output,
            top,
            files,
        } => run_rank(RankArgs {
            target,
            target_file,
            skills,
            format,
            output,
            options: RankOptions { top },
            files,
        }),
        Commands::Normalize { text } => {
            println!("{}", normalize(&text));
            Ok(())
        }
    };

    if let Err(e) = result {
        log::error!("{:#}", e);
        std::process::exit(1);
    }
}

struct RankArgs {
    target: Option<String>,
    target_file: Option<PathBuf>,
    skills: String,
    format: OutputFormat,
    output: Option<PathBuf>,
    options: RankOptions,
    files: Vec<PathBuf>,
}

fn read_target(args: &RankArgs) -> Result<String> {
    match (&args.target, &args.target_file) {
        (Some(text), _) => Ok(text.clone()),
        (None, Some(path)) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read target description {}", path.display())),
        (None, None) => bail!("Missing job description"),
    }
}

#[cfg(feature = "parallel")]
fn load(files: &[PathBuf]) -> Vec<ExtractionOutcome> {
    if files.len() < PROGRESS_THRESHOLD || !atty::is(atty::Stream::Stderr) {
        return extract_files(files);
    }
    let progress = ProgressBar::new(files.len() as u64);
    if let Ok(style) =
        ProgressStyle::with_template("{spinner:.cyan} {prefix:<12} [{bar:40.cyan/dim}] {pos}/{len} {msg}")
    {
        progress.set_style(style.progress_chars("━━╸"));
    }
    progress.set_prefix("Reading");
    docrank::extract::extract_files_with_progress(files, &progress)
}

#[cfg(not(feature = "parallel"))]
fn load(files: &[PathBuf]) -> Vec<ExtractionOutcome> {
    extract_files(files)
}

fn run_rank(args: RankArgs) -> Result<()> {
    let target = read_target(&args)?;
    if target.trim().is_empty() {
        bail!("Missing job description");
    }
    if args.files.is_empty() {
        bail!("Missing files: pass at least one document to rank");
    }

    let skills = SkillQuery::parse(&args.skills);
    let outcomes = load(&args.files);
    log::debug!(
        "extracted {} files, looking for {} skills",
        outcomes.len(),
        skills.len()
    );

    let results = match rank_outcome(&target, &outcomes, &skills, &args.options) {
        RankOutcome::Ranked(results) => results,
        RankOutcome::NothingToRank(reason) => {
            bail!("Nothing to rank: {}", reason)
        }
    };

    let rendered = match args.format {
        OutputFormat::Table => display::render_results(&results, outcomes.len()),
        OutputFormat::Csv => export::to_csv(&results).context("Failed to write CSV")?,
        OutputFormat::Json => export::to_json(&results).context("Failed to serialize results")?,
    };

    write_output(args.output.as_deref(), &rendered)
}

fn write_output(path: Option<&Path>, rendered: &str) -> Result<()> {
    match path {
        Some(path) => {
            fs::write(path, rendered)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            log::info!("Wrote results to {}", path.display());
        }
        None => {
            print!("{}", rendered);
            if !rendered.ends_with('\n') {
                println!();
            }
        }
    }
    Ok(())
}
