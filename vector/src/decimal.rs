//! The comma-separated decimal encoding of numeric vectors, e.g. `1,-2,3`.
//!
//! The empty vector is the empty string. There are no brackets and no prefix.

use std::fmt;

use log::debug;

use crate::{
    error::{Error, Result},
    numvec::Element,
};

pub fn write<T: fmt::Display, W: fmt::Write>(out: &mut W, items: &[T]) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            out.write_char(',')?;
        }
        write!(out, "{item}")?;
    }
    Ok(())
}

pub fn encode<T: fmt::Display>(items: &[T]) -> String {
    let mut ret = String::new();
    // Writing to a `String` can't fail.
    let _ = write(&mut ret, items);
    ret
}

/// Parses a comma-separated list of literals. Whitespace around each literal
/// is ignored.
pub fn decode<T: Element>(input: &str) -> Result<Vec<T>> {
    if input.trim().is_empty() {
        return Ok(Vec::new());
    }

    let mut ret = Vec::new();
    let mut pos = 0;
    for token in input.split(',') {
        let literal = token.trim();
        let value = T::parse_literal(literal).ok_or_else(|| {
            let msg = if literal.is_empty() {
                format!("missing {} literal", T::TYPE_NAME)
            } else {
                format!("`{literal}` is not a valid {} literal", T::TYPE_NAME)
            };
            Error::parse(pos, msg)
        })?;
        ret.push(value);
        pos += token.len() + 1;
    }

    debug!("decimal: decoded {} {} values", ret.len(), T::TYPE_NAME);
    Ok(ret)
}
