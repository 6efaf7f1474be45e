// src/cli.rs

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "goling",
    version,
    about = "goling - A pocket journal for the moments of your day",
    long_about = "goling records short moments (a note, a place, some tags and, when available, where you were) and lets you browse them as a feed, a map of locations or a summary. Everything is stored locally."
)]
pub struct Cli {
    /// Path to the config file. Defaults to ~/.config/goling/config.toml
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Creates the journal database and reports how many moments it holds.
    Init,

    /// Records a new moment.
    /// If no note is provided via -m, it opens the default editor.
    New {
        #[arg(short, long, help = "The note for this moment")]
        message: Option<String>,
        #[arg(short, long, default_value = "", help = "Where you are, as free text")]
        place: String,
        #[arg(short, long, default_value = "", help = "Free-form tags, e.g. \"#cafe #walk\"")]
        tags: String,
        #[arg(long, requires = "lon", allow_negative_numbers = true, help = "Latitude to attach")]
        lat: Option<f64>,
        #[arg(long, requires = "lat", allow_negative_numbers = true, help = "Longitude to attach")]
        lon: Option<f64>,
        #[arg(long, conflicts_with_all = ["lat", "lon"], help = "Do not attach a location")]
        no_location: bool,
    },

    /// Lists moments in the order they were recorded.
    List,

    /// Shows moments newest first.
    Feed {
        #[arg(short, long, help = "Show latest N entries (default: 10)")]
        num: Option<usize>,
    },

    /// Shows a single moment in full.
    Show {
        #[arg(help = "The id of the moment")]
        id: String,
    },

    /// Lists the positions of moments that carry a location.
    Map,

    /// Shows totals for the journal.
    Stats,

    /// Prints the stored journal as a JSON array.
    Export,
}
