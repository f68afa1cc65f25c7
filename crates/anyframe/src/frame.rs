/// Wrapper around a caller-supplied native dataframe type.
///
/// Like [`Series`](crate::series::Series), `D` carries no bounds; the
/// compatibility layer never needs to know what the backend frame can do,
/// only who owns it.
#[derive(Debug, Clone, PartialEq)]
pub struct DataFrame<D> {
    native: D,
}

impl<D> DataFrame<D> {
    pub fn new(native: D) -> Self {
        DataFrame { native }
    }

    pub fn native(&self) -> &D {
        &self.native
    }

    pub fn native_mut(&mut self) -> &mut D {
        &mut self.native
    }

    pub fn into_native(self) -> D {
        self.native
    }

    pub fn map_native<U>(self, f: impl FnOnce(D) -> U) -> DataFrame<U> {
        DataFrame {
            native: f(self.native),
        }
    }
}

impl<D> From<D> for DataFrame<D> {
    fn from(native: D) -> Self {
        DataFrame::new(native)
    }
}

#[cfg(test)]
mod tests {
    use super::DataFrame;

    #[test]
    fn wrapper_places_no_bounds_on_the_native_type() {
        struct Opaque;

        let df = DataFrame::new(Opaque);
        let _native: Opaque = df.into_native();
    }

    #[test]
    fn map_native_rewraps() {
        let df: DataFrame<Vec<&str>> = vec!["a", "b"].into();
        let df = df.map_native(|cols| cols.len());
        assert_eq!(*df.native(), 2);
    }
}
