//! Print the groups, datasets and attributes of a HDF5 file to stdout.
use std::env;
use std::process::ExitCode;

use h5inspect::cli::{self, Failure};
use h5inspect::inspect::print_hdf5_structure;

fn main() -> ExitCode {
    cli::init_logging();

    let args: Vec<String> = env::args().collect();

    cli::finish(cli::file_arg(&args).and_then(|fin| {
        print_hdf5_structure(&fin, &mut std::io::stdout().lock()).map_err(Failure::from)
    }))
}
