use std::path::PathBuf;

use cellar_core::OutputSchema;
use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "cellar")]
#[command(about = "Wine labels and tasting notes from merchant emails", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Config file (default: user config directory)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Clean a CSV of merchant emails (columns: date, message)
    Clean {
        /// Input CSV
        input: PathBuf,

        /// Output CSV (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output columns (default from config: dataset)
        #[arg(long, value_enum)]
        schema: Option<SchemaArg>,

        /// Worker threads (0 = one per core)
        #[arg(long)]
        workers: Option<usize>,
    },

    /// Clean a single message and show its label and note
    Inspect {
        /// Message text (read from stdin when omitted)
        message: Option<String>,

        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show every substitution pattern applied to a sample
    Patterns,

    /// Show the effective configuration
    Config,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum SchemaArg {
    /// labels, notes
    Dataset,
    /// name, note
    Training,
}

impl From<SchemaArg> for OutputSchema {
    fn from(arg: SchemaArg) -> Self {
        match arg {
            SchemaArg::Dataset => OutputSchema::Dataset,
            SchemaArg::Training => OutputSchema::Training,
        }
    }
}
