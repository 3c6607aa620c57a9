use std::io::Read;

use anyhow::Context;

use crate::cli::InputOptions;

impl InputOptions {
    /// The input given on the command line, or else all of stdin. Surrounding
    /// whitespace is dropped.
    pub fn read(&self) -> anyhow::Result<String> {
        let raw = match &self.input {
            Some(input) => input.clone(),
            None => {
                let mut buf = String::new();
                std::io::stdin()
                    .read_to_string(&mut buf)
                    .context("failed to read stdin")?;
                buf
            }
        };
        Ok(raw.trim().to_owned())
    }
}
