//! Print the structure of a HDF5 file.
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::attr::attributes;
use crate::tree::walk;

/// A HDF5 file opened read-only for inspection. The file is closed when the inspector is
/// dropped.
pub struct Inspector {
    path: PathBuf,
    hf: hdf5::File,
}

impl Inspector {
    /// Open an existing HDF5 file in read-only mode.
    pub fn open<P>(path: P) -> Result<Inspector, anyhow::Error>
    where
        P: AsRef<Path>,
    {
        let path = path.as_ref();

        debug!("Opening {:?}..", path);
        let hf = hdf5::File::open(path)
            .with_context(|| format!("unable to open {}", path.display()))?;

        Ok(Inspector {
            path: path.into(),
            hf,
        })
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        self.path.as_ref()
    }

    pub fn file(&self) -> &hdf5::File {
        &self.hf
    }

    /// Write the path of every object followed by its attributes, one `key: value` per line.
    pub fn print_attributes<W: Write>(&self, out: &mut W) -> Result<usize, anyhow::Error> {
        let mut n = 0;

        for r in walk(&self.hf) {
            let (path, node) = r?;
            writeln!(out, "{path}")?;

            for (key, value) in attributes(node.location()).with_context(|| path.clone())? {
                writeln!(out, "    {key}: {value}")?;
            }

            n += 1;
        }

        trace!("{:?}: {} objects", self.path, n);

        Ok(n)
    }

    /// Write one line with shape and datatype for every dataset.
    pub fn print_datasets<W: Write>(&self, out: &mut W) -> Result<usize, anyhow::Error> {
        let mut n = 0;

        for r in walk(&self.hf) {
            let (path, node) = r?;

            if let Some((shape, dtype)) = node.dataset_info().with_context(|| path.clone())? {
                writeln!(out, "Dataset: {path}, shape: {shape}, dtype: {dtype}")?;
                n += 1;
            }
        }

        trace!("{:?}: {} datasets", self.path, n);

        Ok(n)
    }

    /// File header, attribute listing and dataset listing.
    pub fn print_structure<W: Write>(&self, out: &mut W) -> Result<(), anyhow::Error> {
        writeln!(out, "File: {}", self.path.display())?;
        self.print_attributes(out)?;

        writeln!(out, "\nDatasets:")?;
        self.print_datasets(out)?;

        Ok(())
    }

    /// The path of every object, one per line.
    pub fn print_contents<W: Write>(&self, out: &mut W) -> Result<(), anyhow::Error> {
        writeln!(out, "File contents:")?;

        for r in walk(&self.hf) {
            let (path, _) = r?;
            writeln!(out, "{path}")?;
        }

        Ok(())
    }
}

/// Open `path` and print its structure.
pub fn print_hdf5_structure<P, W>(path: P, out: &mut W) -> Result<(), anyhow::Error>
where
    P: AsRef<Path>,
    W: Write,
{
    Inspector::open(path)?.print_structure(out)
}

/// Open `path` and list its contents. Any failure is written to `out` and `false` is returned.
pub fn check_hdf5_file<P, W>(path: P, out: &mut W) -> bool
where
    P: AsRef<Path>,
    W: Write,
{
    match Inspector::open(path).and_then(|i| i.print_contents(out)) {
        Ok(()) => true,
        Err(e) => {
            debug!("check failed: {:?}", e);
            // Nothing left to report to if the output itself is broken.
            let _ = writeln!(out, "Error reading HDF5 file: {e:#}");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hdf5::types::VarLenUnicode;
    use std::str::FromStr;

    fn scenario(dir: &tempfile::TempDir) -> PathBuf {
        let p = dir.path().join("scenario.h5");
        let hf = hdf5::File::create(&p).unwrap();

        let g = hf.create_group("G").unwrap();
        g.new_attr::<VarLenUnicode>()
            .create("units")
            .unwrap()
            .write_scalar(&VarLenUnicode::from_str("m").unwrap())
            .unwrap();

        let d = g.new_dataset::<f64>().shape((10, 3)).create("D").unwrap();
        d.write_raw(&vec![0.0f64; 30]).unwrap();

        p
    }

    #[test]
    fn attributes_pass() {
        let dir = tempfile::tempdir().unwrap();
        let i = Inspector::open(scenario(&dir)).unwrap();

        let mut out = Vec::new();
        assert_eq!(i.print_attributes(&mut out).unwrap(), 2);

        assert_eq!(String::from_utf8(out).unwrap(), "G\n    units: m\nG/D\n");
    }

    #[test]
    fn datasets_pass() {
        let dir = tempfile::tempdir().unwrap();
        let i = Inspector::open(scenario(&dir)).unwrap();

        let mut out = Vec::new();
        assert_eq!(i.print_datasets(&mut out).unwrap(), 1);

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Dataset: G/D, shape: (10, 3), dtype: float64\n"
        );
    }

    #[test]
    fn structure() {
        let dir = tempfile::tempdir().unwrap();
        let p = scenario(&dir);

        let mut out = Vec::new();
        print_hdf5_structure(&p, &mut out).unwrap();

        let expected = format!(
            "File: {}\nG\n    units: m\nG/D\n\nDatasets:\nDataset: G/D, shape: (10, 3), dtype: float64\n",
            p.display()
        );
        assert_eq!(String::from_utf8(out).unwrap(), expected);
    }

    #[test]
    fn check_lists_contents() {
        let dir = tempfile::tempdir().unwrap();
        let p = scenario(&dir);

        let mut out = Vec::new();
        assert!(check_hdf5_file(&p, &mut out));
        assert_eq!(String::from_utf8(out).unwrap(), "File contents:\nG\nG/D\n");
    }

    #[test]
    fn check_corrupt_file() {
        let dir = tempfile::tempdir().unwrap();
        let p = dir.path().join("corrupt.h5");
        std::fs::write(&p, b"this is not a hdf5 file").unwrap();

        let mut out = Vec::new();
        assert!(!check_hdf5_file(&p, &mut out));

        let out = String::from_utf8(out).unwrap();
        assert!(out.starts_with("Error reading HDF5 file: unable to open"));
        assert!(out.contains("corrupt.h5"));
    }

    #[test]
    fn open_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        assert!(Inspector::open(dir.path().join("missing.h5")).is_err());
    }
}
