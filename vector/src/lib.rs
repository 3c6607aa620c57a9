//! Growable, randomly-indexable vectors with compact textual encodings.
//!
//! [`BitVec`] is a bit-packed vector of booleans that can be written in base
//! 2, 8, 16 or 64 (see [`radix`]). [`NumVec`] is a vector of numbers, with the
//! [`IntVec`] and [`FloatVec`] aliases for the common element types, written as
//! comma-separated decimal literals (see [`decimal`]).
//!
//! Both kinds of vector share the same access rules: reading out of range
//! (negative indices included) returns zero or `false`, writing past the end
//! grows the vector, and writing at a negative index is an error. They also
//! share the [`Traverse`] methods `for_each`, `map` and `reduce`.
//!
//! ```rust
//! use packvec::{BitVec, IntVec, Radix, Traverse};
//!
//! let bits: BitVec = "0x55".parse().unwrap();
//! assert_eq!(bits.to_string_radix(Radix::Base2), "0b10101010");
//! assert_eq!(bits.iter_ones().collect::<Vec<_>>(), vec![0, 2, 4, 6]);
//!
//! let ints: IntVec = "1,2,3".parse().unwrap();
//! assert_eq!(ints.reduce(0, |acc, x| acc + x), 6);
//! ```

pub mod bitvec;
pub mod decimal;
pub mod error;
pub mod numvec;
pub mod radix;
pub mod storage;
pub mod traverse;

pub use bitvec::BitVec;
pub use error::{Error, Result};
pub use numvec::{Element, FloatVec, IntVec, NumVec};
pub use radix::Radix;
pub use storage::{GrowthPolicy, Storage};
pub use traverse::Traverse;
