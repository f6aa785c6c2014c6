use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::export::OutputFormat;
use crate::segment::Strategy;

#[derive(Parser)]
#[command(name = "parley")]
#[command(
    author,
    version,
    about = "Speaker segmentation and subtitle export for meeting transcripts"
)]
#[command(
    long_about = "Parse raw meeting transcripts into speaker-attributed segments, estimate timestamps from the audio duration, and export plain text, SRT, or WebVTT"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Split a transcript into speaker-attributed segments
    Segment {
        /// Transcript file to read
        file: PathBuf,

        /// Parsing strategy (config default if omitted)
        #[arg(short, long, value_enum)]
        strategy: Option<Strategy>,

        /// Merge adjacent same-speaker turns
        #[arg(long)]
        merge: bool,

        /// Remove filler words from segment text
        #[arg(long)]
        clean: bool,

        /// Audio duration in seconds, enables timestamp estimation
        #[arg(short, long)]
        duration: Option<f64>,

        /// Emit segments as JSON instead of labeled text
        #[arg(long)]
        json: bool,

        /// Omit speaker labels from text output
        #[arg(long)]
        no_labels: bool,
    },

    /// Export a transcript as subtitles or plain text
    Export {
        /// Transcript file: raw text, or a JSON segment dump
        file: PathBuf,

        /// Output format (config default if omitted)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Audio duration in seconds (required unless the input carries timestamps)
        #[arg(short, long)]
        duration: Option<f64>,

        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Remove filler words from a transcript, preserving speakers
    Clean {
        /// Transcript file to read
        file: PathBuf,

        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// List speakers with their assigned colors
    Speakers {
        /// Transcript file to read
        file: PathBuf,
    },

    /// Rename a speaker across the whole transcript
    Rename {
        /// Transcript file: raw text, or a JSON segment dump
        file: PathBuf,

        /// Current speaker name (interactive selection if omitted)
        #[arg(long)]
        from: Option<String>,

        /// Replacement name (prompted if omitted)
        #[arg(long)]
        to: Option<String>,

        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show the segment playing at a given time
    Locate {
        /// Transcript file to read
        file: PathBuf,

        /// Audio duration in seconds
        #[arg(short, long)]
        duration: f64,

        /// Playback position in seconds
        #[arg(short, long)]
        time: f64,
    },

    /// Configuration management
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show current configuration
    Show,
    /// Open config file in editor
    Edit,
    /// Print config file path
    Path,
    /// Initialize default configuration
    Init,
}
