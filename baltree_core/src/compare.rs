//! Ordering policies for [`Tree`](crate::Tree).
//!
//! A comparator must describe a total order. Nothing checks this: an
//! inconsistent comparator leaves the tree in an unspecified (but memory
//! safe) shape.

use std::borrow::Cow;
use std::cmp::Ordering;

pub trait Comparator<T: ?Sized> {
    fn compare(&self, a: &T, b: &T) -> Ordering;
}

impl<T: ?Sized, F> Comparator<T> for F
where
    F: Fn(&T, &T) -> Ordering,
{
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self(a, b)
    }
}

/// String conversion used by [`Lexicographic`].
///
/// `None` stands for an undefined value. Types without a meaningful string
/// form simply do not implement this trait, so they cannot be stored in a
/// lexicographically ordered tree.
pub trait LexicalKey {
    fn lexical_key(&self) -> Option<Cow<'_, str>>;
}

impl LexicalKey for str {
    fn lexical_key(&self) -> Option<Cow<'_, str>> {
        Some(Cow::Borrowed(self))
    }
}

impl LexicalKey for String {
    fn lexical_key(&self) -> Option<Cow<'_, str>> {
        Some(Cow::Borrowed(self.as_str()))
    }
}

impl LexicalKey for Cow<'_, str> {
    fn lexical_key(&self) -> Option<Cow<'_, str>> {
        Some(Cow::Borrowed(self.as_ref()))
    }
}

impl<T: LexicalKey + ?Sized> LexicalKey for &T {
    fn lexical_key(&self) -> Option<Cow<'_, str>> {
        (**self).lexical_key()
    }
}

impl<T: LexicalKey + ?Sized> LexicalKey for Box<T> {
    fn lexical_key(&self) -> Option<Cow<'_, str>> {
        (**self).lexical_key()
    }
}

impl<T: LexicalKey> LexicalKey for Option<T> {
    fn lexical_key(&self) -> Option<Cow<'_, str>> {
        self.as_ref().and_then(LexicalKey::lexical_key)
    }
}

macro_rules! lexical_key_via_display {
    ($($ty:ty),* $(,)?) => {
        $(
            impl LexicalKey for $ty {
                fn lexical_key(&self) -> Option<Cow<'_, str>> {
                    Some(Cow::Owned(self.to_string()))
                }
            }
        )*
    };
}

lexical_key_via_display!(
    bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64,
);

/// Default policy: compare string conversions byte-wise.
/// Undefined values sort after everything and equal each other.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Lexicographic;

impl<T: LexicalKey + ?Sized> Comparator<T> for Lexicographic {
    fn compare(&self, a: &T, b: &T) -> Ordering {
        match (a.lexical_key(), b.lexical_key()) {
            (None, None) => Ordering::Equal,
            (None, Some(_)) => Ordering::Greater,
            (Some(_), None) => Ordering::Less,
            (Some(x), Some(y)) => x.cmp(&y),
        }
    }
}

/// Ascending numeric order. Incomparable pairs (NaN) compare equal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Numbers;

impl<T: PartialOrd + ?Sized> Comparator<T> for Numbers {
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.partial_cmp(b).unwrap_or(Ordering::Equal)
    }
}

/// Descending numeric order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NumbersReversed;

impl<T: PartialOrd + ?Sized> Comparator<T> for NumbersReversed {
    fn compare(&self, a: &T, b: &T) -> Ordering {
        b.partial_cmp(a).unwrap_or(Ordering::Equal)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Strings;

impl<T: AsRef<str> + ?Sized> Comparator<T> for Strings {
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.as_ref().cmp(b.as_ref())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StringsReversed;

impl<T: AsRef<str> + ?Sized> Comparator<T> for StringsReversed {
    fn compare(&self, a: &T, b: &T) -> Ordering {
        b.as_ref().cmp(a.as_ref())
    }
}

/// The type's own [`Ord`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Natural;

impl<T: Ord + ?Sized> Comparator<T> for Natural {
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}
