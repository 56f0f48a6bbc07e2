//! Parse targets.
//!
//! [`Target`] is the entry-point view of a value handed to
//! [`parse`](crate::parse): it reports the value's [`Kind`] and, for records,
//! exposes the type-erased [`DynRecord`] the binder works on. Primitive and
//! container types implement it so that passing one yields
//! [`Error::NotRecord`](crate::Error::NotRecord) instead of a type error deep
//! inside generic code.

use std::collections::{BTreeMap, HashMap, VecDeque};
use std::fmt;

use crate::field::DynRecord;

/// Coarse classification of a parse target.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Kind {
    Bool,
    Int,
    Uint,
    Float,
    Char,
    Str,
    Seq,
    Map,
    Unit,
    Record,
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Bool => "bool",
            Self::Int => "int",
            Self::Uint => "uint",
            Self::Float => "float",
            Self::Char => "char",
            Self::Str => "string",
            Self::Seq => "sequence",
            Self::Map => "map",
            Self::Unit => "unit",
            Self::Record => "record",
        })
    }
}

/// A value that can be passed to [`parse`](crate::parse).
///
/// `#[derive(Record)]` implements this with kind [`Kind::Record`].
pub trait Target {
    /// Kind of this value.
    fn kind(&self) -> Kind;

    /// The record behind this value, if it is one.
    fn as_record(&mut self) -> Option<&mut dyn DynRecord>;
}

macro_rules! non_record_target {
    ($kind:ident => $($ty:ty),+ $(,)?) => {
        $(
            impl Target for $ty {
                fn kind(&self) -> Kind {
                    Kind::$kind
                }

                fn as_record(&mut self) -> Option<&mut dyn DynRecord> {
                    None
                }
            }
        )+
    };
}

non_record_target!(Bool => bool);
non_record_target!(Int => i8, i16, i32, i64, i128, isize);
non_record_target!(Uint => u8, u16, u32, u64, u128, usize);
non_record_target!(Float => f32, f64);
non_record_target!(Char => char);
non_record_target!(Str => String, &str);
non_record_target!(Unit => ());

impl<T> Target for Vec<T> {
    fn kind(&self) -> Kind {
        Kind::Seq
    }

    fn as_record(&mut self) -> Option<&mut dyn DynRecord> {
        None
    }
}

impl<T> Target for VecDeque<T> {
    fn kind(&self) -> Kind {
        Kind::Seq
    }

    fn as_record(&mut self) -> Option<&mut dyn DynRecord> {
        None
    }
}

impl<T> Target for [T] {
    fn kind(&self) -> Kind {
        Kind::Seq
    }

    fn as_record(&mut self) -> Option<&mut dyn DynRecord> {
        None
    }
}

impl<K, V, S> Target for HashMap<K, V, S> {
    fn kind(&self) -> Kind {
        Kind::Map
    }

    fn as_record(&mut self) -> Option<&mut dyn DynRecord> {
        None
    }
}

impl<K, V> Target for BTreeMap<K, V> {
    fn kind(&self) -> Kind {
        Kind::Map
    }

    fn as_record(&mut self) -> Option<&mut dyn DynRecord> {
        None
    }
}

// Indirection is transparent: a boxed record is still a record.
impl<T: Target + ?Sized> Target for Box<T> {
    fn kind(&self) -> Kind {
        (**self).kind()
    }

    fn as_record(&mut self) -> Option<&mut dyn DynRecord> {
        (**self).as_record()
    }
}

impl<T: Target + ?Sized> Target for &mut T {
    fn kind(&self) -> Kind {
        (**self).kind()
    }

    fn as_record(&mut self) -> Option<&mut dyn DynRecord> {
        (**self).as_record()
    }
}
