//! # h5inspect
//!
//! Print the structure of HDF5 files: every group and dataset below the root,
//! their attributes, and the shape and datatype of each dataset.
//!
//! The file is parsed by the [official HDF5 library](https://docs.rs/hdf5-metno), this crate
//! walks the objects and formats them.
//!
//! ## Usage
//!
//! ```no_run
//! use h5inspect::inspect::Inspector;
//!
//! let i = Inspector::open("data.h5").unwrap();
//! i.print_structure(&mut std::io::stdout()).unwrap();
//! ```
//!
//! Three binaries wrap the library:
//!
//! * `h5inspect <file>`: print the structure of the given file.
//! * `h5struct [--file FILE]`: print the structure of the configured file.
//! * `h5check [--file FILE]`: list the objects of the configured file, reporting read errors.

#[macro_use]
extern crate anyhow;
#[macro_use]
extern crate log;

pub mod attr;
pub mod cli;
pub mod config;
pub mod inspect;
pub mod tree;
pub mod types;

pub mod prelude {
    pub use super::attr::{attributes, AttrValue, Value};
    pub use super::inspect::{check_hdf5_file, print_hdf5_structure, Inspector};
    pub use super::tree::{walk, Node, Walk};
    pub use super::types::{Datatype, Shape};
}
