use std::{
    fmt,
    hash::{Hash, Hasher},
    ops::Index,
    str::FromStr,
};

use serde_with::{DeserializeFromStr, SerializeDisplay};

use crate::{
    error::{Error, Result},
    radix::{self, Radix},
    storage::{read_index, write_index, GrowthPolicy, Storage},
    traverse::Traverse,
};

pub(crate) const WORD_BITS: usize = u64::BITS as usize;

/// A growable vector of bits, packed into 64-bit words.
///
/// Bit `i` lives in word `i / 64` at offset `i % 64`. Reading outside of
/// `[0, len)` yields `false`, and writing past the end extends the vector.
///
/// Two bit vectors are equal when they have the same true bits. Trailing
/// false bits don't count, so a vector equals its decoded encoding in any
/// radix even though decoding rounds the length up to whole digits.
///
/// # Examples
///
/// ```rust
/// # use packvec::{BitVec, Radix};
/// let mut bits = BitVec::new();
/// bits.set(3, true).unwrap();
/// assert_eq!(bits.len(), 4);
/// assert!(bits.get(3));
/// assert!(!bits.get(-1));
/// assert_eq!(bits.to_string_radix(Radix::Base2), "0b0001");
/// ```
#[derive(Clone, SerializeDisplay, DeserializeFromStr)]
pub struct BitVec {
    // The storage length is always `len.div_ceil(WORD_BITS)` words, and every
    // bit at or after `len` is zero.
    words: Storage<u64>,
    len: usize,
}

impl Default for BitVec {
    fn default() -> Self {
        Self::new()
    }
}

impl BitVec {
    pub fn new() -> Self {
        BitVec {
            words: Storage::new(GrowthPolicy::Exact),
            len: 0,
        }
    }

    /// A vector of `len` false bits.
    ///
    /// # Panics
    ///
    /// Panics if the allocation fails, as `vec![false; len]` does.
    pub fn with_len(len: usize) -> Self {
        BitVec {
            words: Storage::with_len(len.div_ceil(WORD_BITS), GrowthPolicy::Exact),
            len,
        }
    }

    /// The number of addressable bits.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The number of allocated bits. This is always a whole number of words.
    pub fn capacity(&self) -> usize {
        self.words.capacity() * WORD_BITS
    }

    /// Extends the vector with false bits until it has at least `len` bits.
    pub fn grow(&mut self, len: usize) -> Result<()> {
        if len > self.len {
            self.words.grow_to(len.div_ceil(WORD_BITS))?;
            self.len = len;
        }
        Ok(())
    }

    fn bit(&self, idx: usize) -> bool {
        self.words
            .get(idx / WORD_BITS)
            .is_some_and(|w| w & (1u64 << (idx % WORD_BITS)) != 0)
    }

    /// Reads a bit. Out-of-range indices, including negative ones, read as
    /// `false`.
    pub fn get(&self, index: isize) -> bool {
        read_index(index, self.len).is_some_and(|i| self.bit(i))
    }

    /// Writes a bit, growing the vector if `index` is past the end.
    ///
    /// Returns the written value. Negative indices, and indices too large to
    /// allocate room for, are rejected and leave the vector untouched.
    pub fn set(&mut self, index: isize, value: bool) -> Result<bool> {
        let idx = write_index(index)?;
        self.grow(idx + 1)?;

        let mask = 1u64 << (idx % WORD_BITS);
        // unwrap: `grow` made the word addressable.
        let word = self.words.get_mut(idx / WORD_BITS).unwrap();
        if value {
            *word |= mask;
        } else {
            *word &= !mask;
        }
        Ok(value)
    }

    /// Appends a bit.
    ///
    /// # Panics
    ///
    /// Panics if a new word is needed and can't be allocated.
    pub fn push(&mut self, value: bool) {
        let idx = self.len;
        if idx % WORD_BITS == 0 {
            self.words.push_zero();
        }
        self.len += 1;
        if value {
            // unwrap: `grow` made the word addressable.
            *self.words.get_mut(idx / WORD_BITS).unwrap() |= 1u64 << (idx % WORD_BITS);
        }
    }

    /// The number of true bits.
    pub fn count_ones(&self) -> usize {
        self.words
            .as_slice()
            .iter()
            .map(|w| w.count_ones() as usize)
            .sum()
    }

    pub fn iter(&self) -> Bits<'_> {
        Bits { vec: self, idx: 0 }
    }

    /// An iterator over the indices of the true bits, in ascending order.
    pub fn iter_ones(&self) -> Ones<'_> {
        let words = self.words.as_slice();
        Ones {
            words,
            word_idx: 0,
            current: words.first().copied().unwrap_or(0),
        }
    }

    /// Calls `f` with the index of every true bit, in ascending order.
    pub fn for_each_true<F: FnMut(usize)>(&self, f: F) {
        self.iter_ones().for_each(f);
    }

    pub fn to_string_radix(&self, radix: Radix) -> String {
        radix::encode(self, radix)
    }

    /// The base-64 encoding, framed as `BitVec[...]`.
    pub fn to_json_string(&self) -> String {
        format!("BitVec[{}]", self.to_string_radix(Radix::Base64))
    }

    /// Reads `width` bits starting at `start` as a little-endian number. Bits
    /// past the end read as zero.
    pub(crate) fn chunk(&self, start: usize, width: usize) -> u64 {
        debug_assert!(width > 0 && width < WORD_BITS);
        let word_idx = start / WORD_BITS;
        let shift = start % WORD_BITS;
        let word = |i: usize| self.words.get(i).unwrap_or(0);

        let mut ret = word(word_idx) >> shift;
        if shift + width > WORD_BITS {
            ret |= word(word_idx + 1) << (WORD_BITS - shift);
        }
        ret & ((1u64 << width) - 1)
    }

    /// Sets the bits of `value` in the `width` bits starting at `start`.
    /// These bits must already be addressable.
    pub(crate) fn or_chunk(&mut self, start: usize, width: usize, value: u64) {
        debug_assert!(start + width <= self.len && value < (1u64 << width));
        let word_idx = start / WORD_BITS;
        let shift = start % WORD_BITS;

        if let Some(w) = self.words.get_mut(word_idx) {
            *w |= value << shift;
        }
        if shift + width > WORD_BITS {
            if let Some(w) = self.words.get_mut(word_idx + 1) {
                *w |= value >> (WORD_BITS - shift);
            }
        }
    }

    // The words up to the last one with a true bit in it.
    fn significant_words(&self) -> &[u64] {
        let words = self.words.as_slice();
        let end = words.iter().rposition(|&w| w != 0).map_or(0, |i| i + 1);
        &words[..end]
    }

    pub fn check_invariants(&self) {
        self.words.check_invariants();
        assert_eq!(self.words.len(), self.len.div_ceil(WORD_BITS));
        let tail = self.len % WORD_BITS;
        if tail != 0 {
            let last = self.words.as_slice()[self.words.len() - 1];
            assert_eq!(last >> tail, 0, "bits past the end must be cleared");
        }
    }
}

impl PartialEq for BitVec {
    fn eq(&self, other: &Self) -> bool {
        self.significant_words() == other.significant_words()
    }
}

impl Eq for BitVec {}

impl Hash for BitVec {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.significant_words().hash(state);
    }
}

impl Traverse for BitVec {
    type Item = bool;

    fn len(&self) -> usize {
        self.len
    }

    fn item(&self, idx: usize) -> bool {
        self.bit(idx)
    }
}

/// An iterator over the bits of a [`BitVec`].
#[derive(Clone, Debug)]
pub struct Bits<'a> {
    vec: &'a BitVec,
    idx: usize,
}

impl Iterator for Bits<'_> {
    type Item = bool;

    fn next(&mut self) -> Option<bool> {
        if self.idx < self.vec.len {
            self.idx += 1;
            Some(self.vec.bit(self.idx - 1))
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.vec.len - self.idx;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Bits<'_> {}

/// An iterator over the indices of the true bits of a [`BitVec`].
///
/// Empty words are skipped without looking at their bits.
#[derive(Clone, Debug)]
pub struct Ones<'a> {
    words: &'a [u64],
    word_idx: usize,
    // The bits of `words[word_idx]` that haven't been yielded yet.
    current: u64,
}

impl Iterator for Ones<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        while self.current == 0 {
            self.word_idx += 1;
            self.current = *self.words.get(self.word_idx)?;
        }

        let offset = self.current.trailing_zeros() as usize;
        self.current &= self.current - 1;
        Some(self.word_idx * WORD_BITS + offset)
    }
}

impl<'a> IntoIterator for &'a BitVec {
    type Item = bool;
    type IntoIter = Bits<'a>;

    fn into_iter(self) -> Bits<'a> {
        self.iter()
    }
}

impl Index<usize> for BitVec {
    type Output = bool;

    fn index(&self, index: usize) -> &bool {
        if isize::try_from(index).is_ok_and(|i| self.get(i)) {
            &true
        } else {
            &false
        }
    }
}

impl FromIterator<bool> for BitVec {
    fn from_iter<I: IntoIterator<Item = bool>>(iter: I) -> Self {
        let mut ret = BitVec::new();
        ret.extend(iter);
        ret
    }
}

impl Extend<bool> for BitVec {
    fn extend<I: IntoIterator<Item = bool>>(&mut self, iter: I) {
        for bit in iter {
            self.push(bit);
        }
    }
}

impl fmt::Display for BitVec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_string_radix(Radix::default()))
    }
}

impl fmt::Debug for BitVec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BitVec")
            .field("len", &self.len)
            .field("bits", &self.to_string_radix(Radix::Base2))
            .finish()
    }
}

impl FromStr for BitVec {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        radix::decode(s)
    }
}
