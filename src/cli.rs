use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "location-api",
    about = "HTTP API that serves countries, states and cities for an allow-listed set of countries",
    version
)]
pub struct Args {
    /// Load the dataset from this JSON file instead of the built-in one
    #[arg(long, value_name = "PATH")]
    pub dataset: Option<PathBuf>,

    /// Write the full hierarchy export to PATH ("-" for stdout) and exit
    #[arg(long, value_name = "PATH")]
    pub export: Option<PathBuf>,
}
