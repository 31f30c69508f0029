//! Argument handling and exit codes shared by the binaries.
use std::fmt;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

/// Why a command line tool stopped.
#[derive(Debug)]
pub enum Failure {
    /// Wrong number of arguments, carries the program name.
    Usage(String),
    /// The input file does not exist.
    NotFound(PathBuf),
    /// The file could not be opened or read as HDF5.
    Inspect(anyhow::Error),
}

impl Failure {
    pub fn exit_code(&self) -> u8 {
        1
    }
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Failure::Usage(program) => write!(f, "Usage: {program} <path_to_h5_file>"),
            Failure::NotFound(path) => write!(f, "File {} does not exist.", path.display()),
            Failure::Inspect(e) => write!(f, "Error reading HDF5 file: {e:#}"),
        }
    }
}

impl std::error::Error for Failure {}

impl From<anyhow::Error> for Failure {
    fn from(e: anyhow::Error) -> Self {
        Failure::Inspect(e)
    }
}

fn program_name(arg0: Option<&str>) -> String {
    arg0.and_then(|a| Path::new(a).file_name())
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "h5inspect".into())
}

/// The single file argument of `args` (including the program name), which must exist.
pub fn file_arg(args: &[String]) -> Result<PathBuf, Failure> {
    match args {
        [_, file] => {
            let path = PathBuf::from(file);
            if path.exists() {
                Ok(path)
            } else {
                Err(Failure::NotFound(path))
            }
        }
        _ => Err(Failure::Usage(program_name(args.first().map(String::as_str)))),
    }
}

/// Print the result of a tool to stdout and turn it into an exit code.
pub fn finish(r: Result<(), Failure>) -> ExitCode {
    match r {
        Ok(()) => ExitCode::SUCCESS,
        Err(f) => {
            if let Failure::Inspect(e) = &f {
                debug!("{:?}", e);
            }
            println!("{f}");
            ExitCode::from(f.exit_code())
        }
    }
}

/// Logging to stderr, `RUST_LOG` overrides the default level.
pub fn init_logging() {
    use env_logger::Env;

    env_logger::Builder::from_env(Env::default().default_filter_or("h5inspect=warn")).init();
}
