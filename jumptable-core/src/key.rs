//! Key classification.
//!
//! Integer keys are stored densely, indexed by their value. [`DenseKey`] is the
//! conversion between a key and its slot index; every primitive integer
//! implements it. Any other key goes through a hash map and only needs
//! `Hash + Eq`.

use std::fmt::Debug;

/// A key that addresses a slot in a dense, vector-backed table.
pub trait DenseKey: Copy + Debug {
    /// The slot index for this key, or `None` if the key cannot address a
    /// slot (negative, or wider than `usize`).
    fn to_index(self) -> Option<usize>;

    /// The key for slot `index`, or `None` if the key type cannot hold it.
    fn from_index(index: usize) -> Option<Self>;
}

macro_rules! impl_dense_key {
    ($($t:ty),* $(,)?) => {
        $(
            impl DenseKey for $t {
                #[inline]
                fn to_index(self) -> Option<usize> {
                    usize::try_from(self).ok()
                }

                #[inline]
                fn from_index(index: usize) -> Option<Self> {
                    <$t>::try_from(index).ok()
                }
            }
        )*
    };
}

impl_dense_key!(
    u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize
);

#[cfg(test)]
mod tests {
    use super::DenseKey;

    #[test]
    fn test_negative_keys_have_no_index() {
        assert_eq!((-1i32).to_index(), None);
        assert_eq!(i64::MIN.to_index(), None);
        assert_eq!(0i8.to_index(), Some(0));
        assert_eq!(200u8.to_index(), Some(200));
    }

    #[test]
    fn test_from_index_respects_key_width() {
        assert_eq!(u8::from_index(255), Some(255));
        assert_eq!(u8::from_index(256), None);
        assert_eq!(i8::from_index(128), None);
        assert_eq!(i32::from_index(8), Some(8));
    }
}
