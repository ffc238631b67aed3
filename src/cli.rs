use std::path::PathBuf;

use clap::Parser;

/// CLI tooling for the game.
#[derive(Parser, Debug)]
pub struct Args {
    /// Read the blink signal from a ThinkGear connector socket
    /// (usually 127.0.0.1:13854). Without this flag the Space bar
    /// stands in for the headset.
    #[arg(long, value_name = "HOST:PORT")]
    pub headset: Option<String>,

    /// How long to wait for the first headset packet before starting
    /// with the default reading.
    #[arg(long, value_name = "SECONDS", default_value_t = 5)]
    pub warmup: u64,

    /// RON file overriding the built-in gameplay tuning.
    #[arg(long, value_name = "FILE")]
    pub tuning: Option<PathBuf>,
}
