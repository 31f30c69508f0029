//! List the objects in the configured HDF5 file, exits with 1 if it can not be read.
use std::process::ExitCode;

use h5inspect::cli;
use h5inspect::config::Config;
use h5inspect::inspect::check_hdf5_file;

fn main() -> ExitCode {
    cli::init_logging();

    let config = Config::load();

    if check_hdf5_file(&config.file, &mut std::io::stdout().lock()) {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
