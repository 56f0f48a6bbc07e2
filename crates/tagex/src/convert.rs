//! Settable value cells.
//!
//! [`Convert`] is the single capability a field type needs to receive a
//! captured substring. The registry primitives implement it through the
//! conversion registry; user types implement it directly to supply their
//! own conversion. Indirection layers (`Option`, `Box`, `&mut`, `Rc`, `Arc`)
//! delegate to the value they hold, so the binder never unwraps anything
//! itself.

use std::rc::Rc;
use std::sync::Arc;

use crate::errors::ConvertError;
use crate::registry::{self, Primitive};

/// Convert captured text into a value, in place.
///
/// Implement this for a field type to give it a custom conversion. Such
/// fields have no default sub-pattern, so they should carry
/// `#[tagex(pattern = "...")]`.
///
/// ```text
/// struct Flag(bool);
///
/// impl Convert for Flag {
///     fn convert(&mut self, text: &str) -> Result<(), ConvertError> {
///         self.0 = text == "on";
///         Ok(())
///     }
/// }
/// ```
pub trait Convert {
    /// Registry kind of this type, `None` for custom conversions.
    fn kind() -> Option<Primitive>
    where
        Self: Sized,
    {
        None
    }

    /// Write the value converted from `text` into `self`.
    ///
    /// On error `self` should be left as it was.
    fn convert(&mut self, text: &str) -> Result<(), ConvertError>;
}

impl Convert for bool {
    fn kind() -> Option<Primitive> {
        Some(Primitive::Bool)
    }

    fn convert(&mut self, text: &str) -> Result<(), ConvertError> {
        *self = registry::parse_bool(text)?;
        Ok(())
    }
}

macro_rules! int_convert {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl Convert for $ty {
                fn kind() -> Option<Primitive> {
                    Some(Primitive::Int)
                }

                fn convert(&mut self, text: &str) -> Result<(), ConvertError> {
                    *self = registry::parse_int::<$ty>(text)?;
                    Ok(())
                }
            }
        )+
    };
}

int_convert!(i8, i16, i32, i64, i128, isize);

impl Convert for String {
    fn kind() -> Option<Primitive> {
        Some(Primitive::Text)
    }

    fn convert(&mut self, text: &str) -> Result<(), ConvertError> {
        *self = registry::parse_text(text);
        Ok(())
    }
}

/// An empty slot is filled with `T::default()` before converting.
impl<T: Convert + Default> Convert for Option<T> {
    fn kind() -> Option<Primitive> {
        T::kind()
    }

    fn convert(&mut self, text: &str) -> Result<(), ConvertError> {
        match self {
            Some(inner) => inner.convert(text),
            None => {
                let mut inner = T::default();
                inner.convert(text)?;
                *self = Some(inner);
                Ok(())
            }
        }
    }
}

impl<T: Convert> Convert for Box<T> {
    fn kind() -> Option<Primitive> {
        T::kind()
    }

    fn convert(&mut self, text: &str) -> Result<(), ConvertError> {
        (**self).convert(text)
    }
}

impl<T: Convert> Convert for &mut T {
    fn kind() -> Option<Primitive> {
        T::kind()
    }

    fn convert(&mut self, text: &str) -> Result<(), ConvertError> {
        (**self).convert(text)
    }
}

/// Shared `Rc`s are read-only; only a uniquely held one can be written.
impl<T: Convert> Convert for Rc<T> {
    fn kind() -> Option<Primitive> {
        T::kind()
    }

    fn convert(&mut self, text: &str) -> Result<(), ConvertError> {
        Rc::get_mut(self)
            .ok_or_else(ConvertError::unsettable::<Self>)?
            .convert(text)
    }
}

impl<T: Convert> Convert for Arc<T> {
    fn kind() -> Option<Primitive> {
        T::kind()
    }

    fn convert(&mut self, text: &str) -> Result<(), ConvertError> {
        Arc::get_mut(self)
            .ok_or_else(ConvertError::unsettable::<Self>)?
            .convert(text)
    }
}

#[cfg(test)]
mod tests;
