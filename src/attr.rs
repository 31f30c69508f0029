//! Attribute values.
//!
//! Attributes are read with the exact native type of the stored value, no conversion is
//! requested from the HDF5 library. Types without a printable value (compounds, enums,
//! references, nested arrays) become [`AttrValue::Unsupported`].
use std::fmt;

use anyhow::Context;
use hdf5::types::{
    FixedAscii, FixedUnicode, FloatSize, H5Type, IntSize, TypeDescriptor, VarLenAscii,
    VarLenUnicode,
};

#[derive(Debug, PartialEq, Clone)]
pub enum Value {
    Int(i64),
    UInt(u64),
    F32(f32),
    F64(f64),
    Bool(bool),
    Str(String),
}

#[derive(Debug, PartialEq, Clone)]
pub enum AttrValue {
    Scalar(Value),
    Array(Vec<Value>),
    Unsupported(String),
}

fn read_as<T: H5Type, F>(a: &hdf5::Attribute, f: F) -> hdf5::Result<Vec<Value>>
where
    F: Fn(T) -> Value,
{
    Ok(a.read_raw::<T>()?.into_iter().map(f).collect())
}

fn read_str<T: H5Type + AsRef<str>>(a: &hdf5::Attribute) -> hdf5::Result<Vec<Value>> {
    read_as::<T, _>(a, |s| Value::Str(s.as_ref().to_owned()))
}

// Fixed strings are dispatched on their exact length so that the library does not have to
// convert between string sizes.
macro_rules! branch_fixed_impl {
    ($a:expr, $n:expr, $t:ident, $( $ns:literal ),*) => {
        match $n {
            $(
                $ns => Some(read_str::<$t<$ns>>($a)),
            )*
            _ => None
        }
    };
}

macro_rules! branch_fixed {
    ($a:expr, $n:expr, $t:ident) => {
        branch_fixed_impl!(
            $a, $n, $t, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 17, 18, 19, 20, 21,
            22, 23, 24, 25, 26, 27, 28, 29, 30, 31, 32, 33, 34, 35, 36, 37, 38, 39, 40, 41, 42, 43,
            44, 45, 46, 47, 48, 49, 50, 51, 52, 53, 54, 55, 56, 57, 58, 59, 60, 61, 62, 63, 64, 70,
            72, 80, 90, 96, 100, 110, 120, 128, 150, 192, 200, 250, 255, 256, 300, 384, 400, 500,
            512, 1000, 1024, 2048, 4096
        )
    };
}

impl AttrValue {
    /// Read the value of `a`.
    pub fn read(a: &hdf5::Attribute) -> Result<AttrValue, anyhow::Error> {
        use TypeDescriptor as h5t;

        let desc = a.dtype()?.to_descriptor()?;

        let values = match &desc {
            h5t::Integer(IntSize::U1) => read_as::<i8, _>(a, |v| Value::Int(v.into())),
            h5t::Integer(IntSize::U2) => read_as::<i16, _>(a, |v| Value::Int(v.into())),
            h5t::Integer(IntSize::U4) => read_as::<i32, _>(a, |v| Value::Int(v.into())),
            h5t::Integer(IntSize::U8) => read_as::<i64, _>(a, Value::Int),
            h5t::Unsigned(IntSize::U1) => read_as::<u8, _>(a, |v| Value::UInt(v.into())),
            h5t::Unsigned(IntSize::U2) => read_as::<u16, _>(a, |v| Value::UInt(v.into())),
            h5t::Unsigned(IntSize::U4) => read_as::<u32, _>(a, |v| Value::UInt(v.into())),
            h5t::Unsigned(IntSize::U8) => read_as::<u64, _>(a, Value::UInt),
            h5t::Float(FloatSize::U4) => read_as::<f32, _>(a, Value::F32),
            h5t::Float(FloatSize::U8) => read_as::<f64, _>(a, Value::F64),
            h5t::Boolean => read_as::<bool, _>(a, Value::Bool),
            h5t::VarLenUnicode => read_str::<VarLenUnicode>(a),
            h5t::VarLenAscii => read_str::<VarLenAscii>(a),
            h5t::FixedAscii(n) => match branch_fixed!(a, *n, FixedAscii) {
                Some(values) => values,
                None => return Ok(AttrValue::Unsupported(desc.to_string())),
            },
            h5t::FixedUnicode(n) => match branch_fixed!(a, *n, FixedUnicode) {
                Some(values) => values,
                None => return Ok(AttrValue::Unsupported(desc.to_string())),
            },
            desc => return Ok(AttrValue::Unsupported(desc.to_string())),
        }?;

        if a.is_scalar() {
            let mut values = values.into_iter();
            values
                .next()
                .map(AttrValue::Scalar)
                .ok_or_else(|| anyhow!("scalar attribute without value"))
        } else {
            Ok(AttrValue::Array(values))
        }
    }
}

/// All attributes of `loc`, in the order reported by the library.
pub fn attributes(loc: &hdf5::Location) -> Result<Vec<(String, AttrValue)>, anyhow::Error> {
    loc.attr_names()?
        .into_iter()
        .map(|n| {
            let v = loc
                .attr(&n)
                .map_err(anyhow::Error::from)
                .and_then(|a| AttrValue::read(&a))
                .with_context(|| format!("reading attribute {n}"))?;
            Ok::<_, anyhow::Error>((n, v))
        })
        .collect()
}

impl Value {
    fn fmt_quoted(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Str(s) => write!(f, "'{s}'"),
            v => write!(f, "{v}"),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(v) => write!(f, "{v}"),
            Value::UInt(v) => write!(f, "{v}"),
            Value::F32(v) => write!(f, "{v:?}"),
            Value::F64(v) => write!(f, "{v:?}"),
            Value::Bool(true) => write!(f, "True"),
            Value::Bool(false) => write!(f, "False"),
            Value::Str(s) => write!(f, "{s}"),
        }
    }
}

impl fmt::Display for AttrValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttrValue::Scalar(v) => write!(f, "{v}"),
            AttrValue::Array(vs) => {
                write!(f, "[")?;
                for (i, v) in vs.iter().enumerate() {
                    if i > 0 {
                        write!(f, " ")?;
                    }
                    v.fmt_quoted(f)?;
                }
                write!(f, "]")
            }
            AttrValue::Unsupported(desc) => write!(f, "<{desc}>"),
        }
    }
}
