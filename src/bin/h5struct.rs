//! Print the structure of the configured HDF5 file (`--file`, `H5INSPECT_FILE` or the default).
use std::process::ExitCode;

use h5inspect::cli;
use h5inspect::config::Config;
use h5inspect::inspect::print_hdf5_structure;

fn main() -> ExitCode {
    cli::init_logging();

    let config = Config::load();

    cli::finish(
        print_hdf5_structure(&config.file, &mut std::io::stdout().lock()).map_err(Into::into),
    )
}
