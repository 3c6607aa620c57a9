//! Textual encodings of bit vectors in base 2, 8, 16 and 64.
//!
//! Bits are grouped into chunks of `k = log2(base)` bits. Chunk `j` covers the
//! bits `[j * k, (j + 1) * k)`, and the bit at offset `b` within a chunk
//! contributes `2^b` to the chunk's value. Each chunk becomes one digit, chunk
//! zero first, and the whole thing is preceded by the radix's prefix:
//!
//! | radix | prefix | digits |
//! |-------|--------|--------|
//! | 2     | `0b`   | `01` |
//! | 8     | `0`    | `01234567` |
//! | 16    | `0x`   | `0123456789abcdef` |
//! | 64    | `/`    | `0-9`, `a-z`, `A-Z`, `/`, `+` |
//!
//! Decoding produces exactly `k` bits per digit, so a vector whose length
//! isn't a multiple of `k` comes back with some extra false bits at the end.

use log::debug;

use crate::{
    bitvec::BitVec,
    error::{Error, Result},
};

const HEX_DIGITS: &[u8; 16] = b"0123456789abcdef";

/// The base-64 digit table. A digit's position in this table is its value.
pub const BASE64_DIGITS: &[u8; 64] =
    b"0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ/+";

/// The bases that a [`BitVec`] can be written in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Radix {
    Base2,
    Base8,
    Base16,
    #[default]
    Base64,
}

impl Radix {
    pub const ALL: [Radix; 4] = [Radix::Base2, Radix::Base8, Radix::Base16, Radix::Base64];

    pub fn from_base(base: u32) -> Option<Radix> {
        match base {
            2 => Some(Radix::Base2),
            8 => Some(Radix::Base8),
            16 => Some(Radix::Base16),
            64 => Some(Radix::Base64),
            _ => None,
        }
    }

    pub fn base(self) -> u32 {
        1 << self.bits()
    }

    /// How many bits each digit holds.
    pub fn bits(self) -> u32 {
        match self {
            Radix::Base2 => 1,
            Radix::Base8 => 3,
            Radix::Base16 => 4,
            Radix::Base64 => 6,
        }
    }

    pub fn prefix(self) -> &'static str {
        match self {
            Radix::Base2 => "0b",
            Radix::Base8 => "0",
            Radix::Base16 => "0x",
            Radix::Base64 => "/",
        }
    }

    /// The digits of this radix, indexed by value.
    pub fn alphabet(self) -> &'static [u8] {
        match self {
            Radix::Base2 => &HEX_DIGITS[..2],
            Radix::Base8 => &HEX_DIGITS[..8],
            Radix::Base16 => HEX_DIGITS,
            Radix::Base64 => BASE64_DIGITS,
        }
    }

    /// The value of the digit `c`, if it is one.
    pub fn digit_value(self, c: char) -> Option<u64> {
        let c = u8::try_from(c).ok()?;
        self.alphabet()
            .iter()
            .position(|&d| d == c)
            .map(|v| v as u64)
    }

    /// Recognizes the prefix of `input` and returns the radix together with
    /// the digits that follow it.
    pub fn detect(input: &str) -> Result<(Radix, &str)> {
        // `0b` and `0x` have to be tried before the bare `0`.
        [Radix::Base2, Radix::Base16, Radix::Base64, Radix::Base8]
            .into_iter()
            .find_map(|radix| input.strip_prefix(radix.prefix()).map(|rest| (radix, rest)))
            .ok_or_else(|| Error::parse(0, "expected one of the prefixes `0b`, `0`, `0x` or `/`"))
    }
}

impl std::fmt::Display for Radix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "base {}", self.base())
    }
}

/// Writes all the bits of `bits` in the given radix, prefix included.
pub fn encode(bits: &BitVec, radix: Radix) -> String {
    let k = radix.bits() as usize;
    let alphabet = radix.alphabet();
    let digits = bits.len().div_ceil(k);

    let mut ret = String::with_capacity(radix.prefix().len() + digits);
    ret.push_str(radix.prefix());
    ret.extend((0..digits).map(|j| char::from(alphabet[bits.chunk(j * k, k) as usize])));
    ret
}

/// Parses a prefixed bit string.
pub fn decode(input: &str) -> Result<BitVec> {
    let (radix, digits) = Radix::detect(input)?;
    let offset = input.len() - digits.len();
    let k = radix.bits() as usize;

    let mut ret = BitVec::with_len(digits.chars().count() * k);
    for (j, (pos, c)) in digits.char_indices().enumerate() {
        let value = radix.digit_value(c).ok_or_else(|| {
            Error::parse(offset + pos, format!("`{c}` is not a digit in {radix}"))
        })?;
        ret.or_chunk(j * k, k, value);
    }

    debug!("radix: decoded {} bits in {radix}", ret.len());
    Ok(ret)
}
