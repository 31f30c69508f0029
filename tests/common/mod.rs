use std::path::{Path, PathBuf};
use std::str::FromStr;

use hdf5::types::VarLenUnicode;

pub fn str_attr(loc: &hdf5::Location, name: &str, value: &str) {
    loc.new_attr::<VarLenUnicode>()
        .create(name)
        .unwrap()
        .write_scalar(&VarLenUnicode::from_str(value).unwrap())
        .unwrap();
}

/// One group `G` with `units="m"` and a float64 dataset `G/D` of shape (10, 3).
pub fn scenario(dir: &Path) -> PathBuf {
    let p = dir.join("scenario.h5");
    let hf = hdf5::File::create(&p).unwrap();

    let g = hf.create_group("G").unwrap();
    str_attr(&g, "units", "m");

    let d = g.new_dataset::<f64>().shape((10, 3)).create("D").unwrap();
    d.write_raw(&(0..30).map(f64::from).collect::<Vec<_>>()).unwrap();

    p
}

/// A file resembling a simulation output: 3 groups and 4 datasets at several depths.
pub fn simulation(dir: &Path) -> PathBuf {
    let p = dir.join("simulation.h5");
    let hf = hdf5::File::create(&p).unwrap();

    str_attr(&hf, "title", "forward step");

    let mesh = hf.create_group("mesh").unwrap();
    mesh.new_attr::<u32>()
        .create("cells")
        .unwrap()
        .write_scalar(&400u32)
        .unwrap();
    mesh.new_attr::<f64>()
        .shape(2)
        .create("origin")
        .unwrap()
        .write_raw(&[0.0f64, 1.5][..])
        .unwrap();
    mesh.new_dataset::<f64>()
        .shape((400, 2))
        .create("coordinates")
        .unwrap();
    mesh.new_dataset::<i32>()
        .shape((100, 4))
        .create("topology")
        .unwrap();

    let fields = hf.create_group("fields").unwrap();
    let step = fields.create_group("step_000100").unwrap();
    step.new_attr::<f64>()
        .create("time")
        .unwrap()
        .write_scalar(&0.25f64)
        .unwrap();
    let rho = step.new_dataset::<f32>().shape(400).create("rho").unwrap();
    str_attr(&rho, "units", "kg/m^3");
    str_attr(&rho, "center", "cell");

    hf.new_dataset::<u8>().shape(()).create("version").unwrap();

    p
}

/// Groups `a` and `b`, where the object header of `b/z` fails its checksum.
pub fn damaged_member(dir: &Path) -> PathBuf {
    let p = dir.join("damaged.h5");
    {
        let hf = hdf5::File::with_options()
            .with_fapl(|fapl| fapl.libver_latest())
            .create(&p)
            .unwrap();
        hf.create_group("a").unwrap();
        let b = hf.create_group("b").unwrap();
        let z = b.new_dataset::<i32>().shape(4).create("z").unwrap();
        z.new_attr::<i32>()
            .create("checksummed_marker")
            .unwrap()
            .write_scalar(&1)
            .unwrap();
    }

    let mut bytes = std::fs::read(&p).unwrap();
    let marker = b"checksummed_marker";
    let at = bytes
        .windows(marker.len())
        .position(|w| w == marker)
        .unwrap();
    bytes[at] ^= 0xff;
    std::fs::write(&p, bytes).unwrap();

    p
}
