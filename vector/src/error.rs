//! Errors reported by vector construction and writes.

/// An error raised while decoding a vector or writing to one.
///
/// Reads never fail: out-of-range reads return the zero value instead.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The input string isn't a valid encoding. `input_pos` is the byte offset
    /// of the offending part of the input.
    #[error("parse error at byte {input_pos}: {msg}")]
    Parse { input_pos: usize, msg: String },

    /// A write was attempted at a negative index.
    #[error("cannot write at negative index {index}")]
    Index { index: isize },

    /// A value couldn't be coerced to the vector's element type.
    #[error("`{value}` cannot be stored as {target}")]
    Type {
        value: String,
        target: &'static str,
    },

    /// Growing the vector needed more memory than could be allocated. The
    /// vector is left as it was. `requested` counts storage units, which are
    /// elements for numeric vectors and 64-bit words for bit vectors.
    #[error("cannot allocate room for {requested} storage units")]
    Alloc { requested: usize },
}

impl Error {
    pub(crate) fn parse(input_pos: usize, msg: impl Into<String>) -> Self {
        Error::Parse {
            input_pos,
            msg: msg.into(),
        }
    }

    /// Moves a parse error's position `by` bytes later, for errors found in a
    /// part of a larger input.
    pub(crate) fn shifted(self, by: usize) -> Self {
        match self {
            Error::Parse { input_pos, msg } => Error::Parse {
                input_pos: input_pos + by,
                msg,
            },
            e => e,
        }
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
