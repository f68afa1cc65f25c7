use std::any::{type_name, Any, TypeId};
use std::fmt::{Debug, Formatter};
use std::sync::Arc;

use crate::datatypes::DataType;
use crate::error::{AnyframeError, AnyframeResult};

/// Named wrapper around a caller-supplied native series type.
///
/// `S` is deliberately unconstrained: any backend column type (or a plain
/// `Vec<T>`) can instantiate it. The wrapper owns the native value and only
/// adds the name every series carries in the compatibility layer.
#[derive(Debug, Clone, PartialEq)]
pub struct Series<S> {
    name: Arc<str>,
    native: S,
}

impl<S> Series<S> {
    pub fn new(name: &str, native: S) -> Self {
        Series {
            name: Arc::from(name),
            native,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn rename(&mut self, name: &str) {
        self.name = Arc::from(name);
    }

    pub fn native(&self) -> &S {
        &self.native
    }

    pub fn native_mut(&mut self) -> &mut S {
        &mut self.native
    }

    pub fn into_native(self) -> S {
        self.native
    }

    /// Apply `f` to the native payload, keeping the name.
    pub fn map_native<U>(self, f: impl FnOnce(S) -> U) -> Series<U> {
        Series {
            name: self.name,
            native: f(self.native),
        }
    }
}

impl<S: Any + Send + Sync> Series<S> {
    /// Erase the native type so the series can travel through [`Expr`](crate::expr::Expr).
    pub fn erase(self) -> AnySeries {
        AnySeries::new(self)
    }
}

/// A [`Series`] with its native type erased.
///
/// The erased payload is shared, so cloning an `AnySeries` is cheap. Equality
/// is pointer equality on the payload: clones compare equal, fresh wrappers
/// around identical contents do not.
#[derive(Clone)]
pub struct AnySeries {
    name: Arc<str>,
    dtype: DataType,
    native_type: &'static str,
    native: Arc<dyn Any + Send + Sync>,
}

impl AnySeries {
    pub fn new<S: Any + Send + Sync>(series: Series<S>) -> Self {
        AnySeries {
            name: series.name,
            dtype: erased_dtype::<S>(),
            native_type: type_name::<S>(),
            native: Arc::new(series.native),
        }
    }

    /// Like [`AnySeries::new`], with a caller-supplied dtype instead of the
    /// inferred one. Backends whose column types are opaque to the inference
    /// table use this to keep the hint meaningful.
    pub fn with_dtype<S: Any + Send + Sync>(series: Series<S>, dtype: DataType) -> Self {
        AnySeries {
            dtype,
            ..AnySeries::new(series)
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn dtype(&self) -> DataType {
        self.dtype
    }

    pub fn is<S: Any>(&self) -> bool {
        self.native.is::<S>()
    }

    /// Borrow the native payload as `S`.
    pub fn downcast_ref<S: Any>(&self) -> AnyframeResult<&S> {
        self.native.downcast_ref::<S>().ok_or_else(|| {
            AnyframeError::SchemaMismatch(
                format!(
                    "cannot downcast native series '{}' from {} to {}",
                    self.name,
                    self.native_type,
                    type_name::<S>()
                )
                .into(),
            )
        })
    }

    /// Recover the typed series. Clones the payload if it is still shared.
    pub fn downcast<S>(self) -> AnyframeResult<Series<S>>
    where
        S: Any + Send + Sync + Clone,
    {
        let AnySeries {
            name,
            dtype: _,
            native_type,
            native,
        } = self;
        match native.downcast::<S>() {
            Ok(native) => Ok(Series {
                name,
                native: Arc::try_unwrap(native).unwrap_or_else(|arc| (*arc).clone()),
            }),
            Err(_) => Err(AnyframeError::SchemaMismatch(
                format!(
                    "cannot downcast native series '{}' from {} to {}",
                    name,
                    native_type,
                    type_name::<S>()
                )
                .into(),
            )),
        }
    }
}

impl Debug for AnySeries {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "AnySeries {{ name: {:?}, dtype: {}, native: {} }}",
            self.name, self.dtype, self.native_type
        )
    }
}

impl PartialEq for AnySeries {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && Arc::ptr_eq(&self.native, &other.native)
    }
}

fn erased_dtype<S: Any>() -> DataType {
    let id = TypeId::of::<S>();
    if id == TypeId::of::<Vec<bool>>() {
        DataType::Boolean
    } else if id == TypeId::of::<Vec<String>>() {
        DataType::Utf8
    } else if id == TypeId::of::<Vec<i32>>() {
        DataType::Int32
    } else if id == TypeId::of::<Vec<i64>>() {
        DataType::Int64
    } else if id == TypeId::of::<Vec<f32>>() {
        DataType::Float32
    } else if id == TypeId::of::<Vec<f64>>() {
        DataType::Float64
    } else {
        DataType::Unknown
    }
}
