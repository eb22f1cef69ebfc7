use crate::DuplicateError;

/// Transfer capability consulted when live elements must be carried from one
/// storage block into another.
///
/// Growing a [`ContigVec`][crate::ContigVec] means acquiring a larger block
/// and transferring every live element into it. Two transfer strategies
/// exist:
///
/// - **Bitwise move** ([`BITWISE_MOVE`][Self::BITWISE_MOVE] is `true`, the
///   default): the element bytes are copied to the new block and the old
///   block is released without running destructors. This cannot fail and
///   leaves no work behind, so it is preferred whenever the element type
///   permits it.
/// - **Duplication** ([`BITWISE_MOVE`][Self::BITWISE_MOVE] is `false`):
///   each element produces a fresh value via
///   [`try_duplicate`][Self::try_duplicate] which is placed in the new
///   block, after which the originals are destroyed. Each duplication step
///   may fail, in which case the whole transfer is rolled back.
///
/// The flag is an associated `const`, so the strategy choice is made per
/// element type at compile time and the unused branch is eliminated during
/// monomorphization.
///
/// Types that observe their own address (for example by registering a
/// pointer to themselves elsewhere) must opt out of the bitwise move and
/// provide [`try_duplicate`][Self::try_duplicate] instead. Types that
/// cannot be duplicated simply keep both defaults; duplication-based
/// operations on them ([`try_clone`][crate::ContigVec::try_clone] and
/// friends) then report a [`DuplicateError`].
///
/// # Examples
///
/// A type that supports both strategies:
///
/// ```rust
/// use contig_vec::{DuplicateError, Relocate};
///
/// #[derive(Clone)]
/// struct Sample {
///     label: String,
/// }
///
/// impl Relocate for Sample {
///     fn try_duplicate(&self) -> Result<Self, DuplicateError> {
///         Ok(self.clone())
///     }
/// }
/// ```
///
/// A type that must never be moved bitwise:
///
/// ```rust
/// use contig_vec::{DuplicateError, Relocate};
///
/// struct SelfObserving {
///     id: u64,
/// }
///
/// impl Clone for SelfObserving {
///     fn clone(&self) -> Self {
///         // Imagine address-dependent bookkeeping here.
///         Self { id: self.id }
///     }
/// }
///
/// impl Relocate for SelfObserving {
///     const BITWISE_MOVE: bool = false;
///
///     fn try_duplicate(&self) -> Result<Self, DuplicateError> {
///         Ok(self.clone())
///     }
/// }
/// ```
pub trait Relocate: Sized {
    /// Whether the element may be carried into new storage with a bitwise
    /// move.
    ///
    /// Nearly every Rust type qualifies; set this to `false` only for types
    /// whose validity depends on their own address.
    const BITWISE_MOVE: bool = true;

    /// Produces a duplicate of this element for placement in new storage.
    ///
    /// Used as the transfer strategy when [`BITWISE_MOVE`][Self::BITWISE_MOVE]
    /// is `false`, and by value-copying operations such as
    /// [`try_clone`][crate::ContigVec::try_clone] and
    /// [`filled`][crate::ContigVec::filled] regardless of the flag.
    ///
    /// The default implementation reports the type as non-duplicable.
    ///
    /// # Errors
    ///
    /// Returns a [`DuplicateError`] when no duplicate can be produced. The
    /// container rolls back whatever partial work the failed operation had
    /// done before propagating the error.
    fn try_duplicate(&self) -> Result<Self, DuplicateError> {
        Err(DuplicateError::unsupported::<Self>())
    }
}

macro_rules! relocate_via_copy {
    ($($element:ty),* $(,)?) => {
        $(
            impl Relocate for $element {
                fn try_duplicate(&self) -> Result<Self, DuplicateError> {
                    Ok(*self)
                }
            }
        )*
    };
}

relocate_via_copy!(
    u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64, bool, char,
    &'static str,
);

impl Relocate for String {
    fn try_duplicate(&self) -> Result<Self, DuplicateError> {
        Ok(self.clone())
    }
}

impl<T: Relocate> Relocate for Option<T> {
    const BITWISE_MOVE: bool = T::BITWISE_MOVE;

    fn try_duplicate(&self) -> Result<Self, DuplicateError> {
        self.as_ref().map(T::try_duplicate).transpose()
    }
}

// The box itself always relocates bitwise: moving the pointer leaves the
// heap value at its existing address.
impl<T: Relocate> Relocate for Box<T> {
    fn try_duplicate(&self) -> Result<Self, DuplicateError> {
        Ok(Box::new((**self).try_duplicate()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primitives_duplicate_by_value() {
        assert_eq!(42_u32.try_duplicate().expect("u32 supports duplication"), 42);
        assert_eq!(
            "text"
                .to_string()
                .try_duplicate()
                .expect("String supports duplication"),
            "text"
        );
    }

    #[test]
    fn default_duplication_is_refused() {
        #[derive(Debug)]
        struct Opaque;

        impl Relocate for Opaque {}

        let error = Opaque
            .try_duplicate()
            .expect_err("the default implementation refuses duplication");
        assert!(error.to_string().contains("Opaque"));
    }

    #[test]
    fn option_inherits_the_inner_strategy() {
        struct Pinned;

        impl Relocate for Pinned {
            const BITWISE_MOVE: bool = false;
        }

        assert!(!Option::<Pinned>::BITWISE_MOVE);
        assert!(Option::<u32>::BITWISE_MOVE);

        let duplicated = Some(7_u32)
            .try_duplicate()
            .expect("u32 supports duplication");
        assert_eq!(duplicated, Some(7));
        assert_eq!(None::<u32>.try_duplicate().expect("nothing to duplicate"), None);
    }

    #[test]
    fn boxes_relocate_bitwise_even_around_pinned_contents() {
        struct Pinned;

        impl Relocate for Pinned {
            const BITWISE_MOVE: bool = false;

            fn try_duplicate(&self) -> Result<Self, DuplicateError> {
                Ok(Self)
            }
        }

        assert!(Box::<Pinned>::BITWISE_MOVE);

        let duplicate = Box::new(Pinned)
            .try_duplicate()
            .expect("inner type supports duplication");
        drop(duplicate);
    }
}
