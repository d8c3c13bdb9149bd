// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the docrank command-line interface.
//!
//! Two subcommands: `rank` to rank files against a target description, and
//! `normalize` to show what the scorer actually sees for a piece of text.

pub mod display;

use std::path::PathBuf;

use clap::builder::RangedU64ValueParser;
use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(
    name = "docrank",
    about = "Rank documents against a target description by TF-IDF similarity",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// How ranked results are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Boxed terminal table
    Table,
    /// CSV with a header row
    Csv,
    /// Pretty-printed JSON array
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Rank text files against a target description
    Rank {
        /// Target description text
        #[arg(short, long, conflicts_with = "target_file", required_unless_present = "target_file")]
        target: Option<String>,

        /// Read the target description from a file
        #[arg(long)]
        target_file: Option<PathBuf>,

        /// Comma-separated skills to look for ("Python, SQL, Machine Learning")
        #[arg(short, long, default_value = "")]
        skills: String,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,

        /// Write output to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Only show the best N results (at least 1)
        #[arg(long, value_parser = RangedU64ValueParser::<usize>::new().range(1..))]
        top: Option<usize>,

        /// Documents to rank (.txt, .docx or .pdf)
        files: Vec<PathBuf>,
    },

    /// Print the normalized form of a text
    Normalize {
        /// Text to normalize
        text: String,
    },
}
