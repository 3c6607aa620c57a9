use std::{fmt, ops::Index, str::FromStr};

use crate::{
    decimal,
    error::{Error, Result},
    storage::{read_index, write_index, GrowthPolicy, Storage},
    traverse::Traverse,
};

mod private {
    pub trait Sealed {}
}

/// A numeric type that can be stored in a [`NumVec`].
///
/// This is implemented for the primitive signed integers and floats, and can't
/// be implemented outside of this crate.
pub trait Element:
    Copy + Default + PartialEq + fmt::Debug + fmt::Display + private::Sealed + 'static
{
    const ZERO: Self;
    /// What [`NumVec::to_json_string`] writes before the decimal encoding.
    const JSON_OPEN: &'static str;
    /// What [`NumVec::to_json_string`] writes after the decimal encoding.
    const JSON_CLOSE: &'static str;
    const TYPE_NAME: &'static str;

    /// Parses a decimal literal of exactly this type.
    fn parse_literal(s: &str) -> Option<Self>;

    /// Converts a number to this type. Integers truncate towards zero, and
    /// reject values that are outside of their range (or not numbers at all).
    fn from_f64(v: f64) -> Option<Self>;

    fn zero_ref() -> &'static Self;
}

macro_rules! int_element {
    ($($t:ty),*) => {
        $(
            impl private::Sealed for $t {}

            impl Element for $t {
                const ZERO: Self = 0;
                const JSON_OPEN: &'static str = "IntVec:";
                const JSON_CLOSE: &'static str = "";
                const TYPE_NAME: &'static str = stringify!($t);

                fn parse_literal(s: &str) -> Option<Self> {
                    s.parse().ok()
                }

                fn from_f64(v: f64) -> Option<Self> {
                    let v = v.trunc();
                    // MIN is a power of two, so both bounds are exact.
                    let min = <$t>::MIN as f64;
                    (v >= min && v < -min).then_some(v as $t)
                }

                fn zero_ref() -> &'static Self {
                    &0
                }
            }
        )*
    };
}

macro_rules! float_element {
    ($($t:ty),*) => {
        $(
            impl private::Sealed for $t {}

            impl Element for $t {
                const ZERO: Self = 0.0;
                const JSON_OPEN: &'static str = "FloatVec[";
                const JSON_CLOSE: &'static str = "]";
                const TYPE_NAME: &'static str = stringify!($t);

                fn parse_literal(s: &str) -> Option<Self> {
                    s.parse().ok()
                }

                fn from_f64(v: f64) -> Option<Self> {
                    Some(v as $t)
                }

                fn zero_ref() -> &'static Self {
                    &0.0
                }
            }
        )*
    };
}

int_element!(i8, i16, i32, i64);
float_element!(f32, f64);

/// A growable vector of numbers.
///
/// The length is always one more than the highest index written (or the length
/// it was created with). Unwritten positions read as zero, as does anything out
/// of range.
///
/// # Examples
///
/// ```rust
/// # use packvec::IntVec;
/// let mut v = IntVec::new();
/// v.set(2, 3).unwrap();
/// assert_eq!(v.to_string(), "0,0,3");
/// assert_eq!(v.get(1000), 0);
/// ```
#[derive(Clone, PartialEq)]
pub struct NumVec<T: Element> {
    data: Storage<T>,
}

pub type IntVec = NumVec<i32>;
pub type FloatVec = NumVec<f32>;

impl<T: Element> Default for NumVec<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Element> NumVec<T> {
    pub fn new() -> Self {
        Self::with_policy(GrowthPolicy::default())
    }

    /// An empty vector that grows its allocation according to `policy`.
    pub fn with_policy(policy: GrowthPolicy) -> Self {
        NumVec {
            data: Storage::new(policy),
        }
    }

    /// A vector of `len` zeros.
    ///
    /// # Panics
    ///
    /// Panics if the allocation fails, as `vec![0; len]` does.
    pub fn with_len(len: usize) -> Self {
        NumVec {
            data: Storage::with_len(len, GrowthPolicy::default()),
        }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    pub fn policy(&self) -> GrowthPolicy {
        self.data.policy()
    }

    /// Extends the vector with zeros until it has at least `len` elements.
    pub fn grow(&mut self, len: usize) -> Result<()> {
        self.data.grow_to(len)
    }

    /// Reads an element. Out-of-range indices, including negative ones, read
    /// as zero.
    pub fn get(&self, index: isize) -> T {
        read_index(index, self.len())
            .and_then(|i| self.data.get(i))
            .unwrap_or(T::ZERO)
    }

    /// Writes an element, growing the vector to `index + 1` elements if
    /// `index` is past the end.
    ///
    /// Returns the written value. Negative indices, and indices too large to
    /// allocate room for, are rejected and leave the vector untouched.
    pub fn set(&mut self, index: isize, value: T) -> Result<T> {
        let idx = write_index(index)?;
        self.data.grow_to(idx + 1)?;
        // unwrap: `grow_to` made the index addressable.
        *self.data.get_mut(idx).unwrap() = value;
        Ok(value)
    }

    /// Writes a number after converting it to the element type.
    pub fn set_f64(&mut self, index: isize, value: f64) -> Result<T> {
        let value = T::from_f64(value).ok_or_else(|| Error::Type {
            value: value.to_string(),
            target: T::TYPE_NAME,
        })?;
        self.set(index, value)
    }

    /// Writes a number given as text. Literals of another numeric type are
    /// converted as in [`NumVec::set_f64`].
    pub fn set_str(&mut self, index: isize, value: &str) -> Result<T> {
        let literal = value.trim();
        let converted = T::parse_literal(literal)
            .or_else(|| literal.parse::<f64>().ok().and_then(T::from_f64));
        let converted = converted.ok_or_else(|| Error::Type {
            value: value.to_owned(),
            target: T::TYPE_NAME,
        })?;
        self.set(index, converted)
    }

    /// Appends an element.
    ///
    /// # Panics
    ///
    /// Panics if the allocation fails, as `Vec::push` does.
    pub fn push(&mut self, value: T) {
        let idx = self.data.push_zero();
        // unwrap: `push_zero` made the index addressable.
        *self.data.get_mut(idx).unwrap() = value;
    }

    pub fn as_slice(&self) -> &[T] {
        self.data.as_slice()
    }

    pub fn iter(&self) -> std::iter::Copied<std::slice::Iter<'_, T>> {
        self.as_slice().iter().copied()
    }

    /// The decimal encoding, framed with the vector kind: `IntVec:1,2,3` for
    /// integers and `FloatVec[1.5,2]` for floats. [`FromStr`] accepts this
    /// form as well as the bare encoding.
    pub fn to_json_string(&self) -> String {
        format!("{}{self}{}", T::JSON_OPEN, T::JSON_CLOSE)
    }

    pub fn check_invariants(&self) {
        self.data.check_invariants();
    }
}

impl<T: Element> Traverse for NumVec<T> {
    type Item = T;

    fn len(&self) -> usize {
        self.data.len()
    }

    fn item(&self, idx: usize) -> T {
        self.as_slice()[idx]
    }
}

impl<T: Element> Index<usize> for NumVec<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        self.as_slice().get(index).unwrap_or(T::zero_ref())
    }
}

impl<'a, T: Element> IntoIterator for &'a NumVec<T> {
    type Item = T;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: Element> FromIterator<T> for NumVec<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut ret = NumVec::new();
        ret.extend(iter);
        ret
    }
}

impl<T: Element> Extend<T> for NumVec<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for elt in iter {
            self.push(elt);
        }
    }
}

impl<T: Element> fmt::Display for NumVec<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        decimal::write(f, self.as_slice())
    }
}

impl<T: Element> fmt::Debug for NumVec<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

impl<T: Element> FromStr for NumVec<T> {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let framed = s
            .strip_prefix(T::JSON_OPEN)
            .and_then(|rest| rest.strip_suffix(T::JSON_CLOSE));
        let values = match framed {
            Some(body) => decimal::decode::<T>(body).map_err(|e| e.shifted(T::JSON_OPEN.len()))?,
            None => decimal::decode::<T>(s)?,
        };
        Ok(values.into_iter().collect())
    }
}

impl<T: Element + serde::Serialize> serde::Serialize for NumVec<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeSeq;

        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for elt in self.iter() {
            seq.serialize_element(&elt)?;
        }
        seq.end()
    }
}

impl<'de, T: Element + serde::Deserialize<'de>> serde::Deserialize<'de> for NumVec<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let vec: Vec<T> = Vec::deserialize(deserializer)?;
        Ok(vec.into_iter().collect())
    }
}
