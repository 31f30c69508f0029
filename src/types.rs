use std::fmt;

use hdf5::types::{FloatSize, IntSize, TypeDescriptor};
use itertools::Itertools;

/// Element datatype of a dataset.
#[derive(Debug, PartialEq, Clone)]
pub enum Datatype {
    UInt(usize),
    Int(usize),
    Float(usize),
    Bool,
    FixedString(usize),
    VarLen,
    Enum(Box<Datatype>),
    Compound(usize),
    Array(Box<Datatype>, usize),
    Unknown,
}

fn int_size(sz: IntSize) -> usize {
    match sz {
        IntSize::U1 => 1,
        IntSize::U2 => 2,
        IntSize::U4 => 4,
        IntSize::U8 => 8,
    }
}

impl From<&TypeDescriptor> for Datatype {
    fn from(desc: &TypeDescriptor) -> Self {
        use TypeDescriptor as h5t;

        match desc {
            h5t::Integer(sz) => Datatype::Int(int_size(*sz)),
            h5t::Unsigned(sz) => Datatype::UInt(int_size(*sz)),
            h5t::Float(FloatSize::U4) => Datatype::Float(4),
            h5t::Float(FloatSize::U8) => Datatype::Float(8),
            h5t::Boolean => Datatype::Bool,
            h5t::Enum(tp) if tp.signed => Datatype::Enum(Box::new(Datatype::Int(int_size(tp.size)))),
            h5t::Enum(tp) => Datatype::Enum(Box::new(Datatype::UInt(int_size(tp.size)))),
            h5t::Compound(tp) => Datatype::Compound(tp.fields.len()),
            h5t::FixedArray(tp, n) => Datatype::Array(Box::new(Datatype::from(&**tp)), *n),
            h5t::FixedAscii(n) | h5t::FixedUnicode(n) => Datatype::FixedString(*n),
            h5t::VarLenArray(_) | h5t::VarLenAscii | h5t::VarLenUnicode => Datatype::VarLen,
            _ => Datatype::Unknown,
        }
    }
}

impl From<hdf5::Datatype> for Datatype {
    fn from(dtype: hdf5::Datatype) -> Self {
        dtype
            .to_descriptor()
            .map_or(Datatype::Unknown, |desc| (&desc).into())
    }
}

impl fmt::Display for Datatype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use Datatype::*;

        match self {
            UInt(sz) => write!(f, "uint{}", sz * 8),
            Int(sz) => write!(f, "int{}", sz * 8),
            Float(sz) => write!(f, "float{}", sz * 8),
            Bool => write!(f, "bool"),
            FixedString(n) => write!(f, "|S{n}"),
            VarLen => write!(f, "object"),
            Enum(base) => write!(f, "enum ({base})"),
            Compound(n) => write!(f, "compound ({n} fields)"),
            Array(base, n) => write!(f, "({n},){base}"),
            Unknown => write!(f, "unknown"),
        }
    }
}

/// Extents of a dataset, displayed as a tuple: `()`, `(5,)`, `(10, 3)`.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Shape(pub Vec<usize>);

impl Shape {
    pub fn ndim(&self) -> usize {
        self.0.len()
    }
}

impl From<&hdf5::Dataset> for Shape {
    fn from(ds: &hdf5::Dataset) -> Self {
        Shape(ds.shape())
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0.as_slice() {
            [n] => write!(f, "({n},)"),
            extents => write!(f, "({})", extents.iter().join(", ")),
        }
    }
}
