use std::path::PathBuf;

use clap::Parser;

/// File inspected when nothing else is configured.
pub const DEFAULT_FILE: &str = "forward_step_2d_X1E4_100.h5";

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Config {
    /// HDF5 file to inspect.
    #[arg(short, long, env = "H5INSPECT_FILE", default_value = DEFAULT_FILE)]
    pub file: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            file: DEFAULT_FILE.into(),
        }
    }
}

impl Config {
    /// Parse the command line (and environment), exiting with a usage message on errors.
    pub fn load() -> Config {
        Config::parse()
    }
}
