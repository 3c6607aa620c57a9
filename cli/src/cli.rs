//! Command-line options and subcommands.

use packvec::GrowthPolicy;

use crate::{
    bits::{BitsCommand, OnesCommand},
    nums::NumsCommand,
};

#[derive(clap::Parser, Debug)]
/// Converts bit and number vectors between their textual encodings.
#[command(author, about, version, long_about = None)]
pub struct Options {
    #[command(flatten)]
    pub global: GlobalOptions,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(clap::Parser, Debug)]
pub struct GlobalOptions {
    /// How numeric vectors allocate room when they grow
    #[arg(long, global = true, value_enum, default_value_t)]
    pub growth: Growth,
}

#[derive(clap::ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Growth {
    /// Allocate exactly what is needed
    Exact,
    /// Double the allocation every time it fills up
    #[default]
    Doubling,
}

impl From<Growth> for GrowthPolicy {
    fn from(growth: Growth) -> Self {
        match growth {
            Growth::Exact => GrowthPolicy::Exact,
            Growth::Doubling => GrowthPolicy::default(),
        }
    }
}

#[derive(clap::Parser, Debug)]
pub struct InputOptions {
    /// The encoded vector, omit to read from stdin
    #[arg(allow_hyphen_values = true)]
    pub input: Option<String>,
}

/// Available subcommands.
#[derive(clap::Subcommand, Debug)]
pub enum Command {
    /// Decodes a prefixed bit string and writes it in another base
    Bits(BitsCommand),
    /// Prints the indices of the true bits of a prefixed bit string
    Ones(OnesCommand),
    /// Decodes a comma-separated list of integers
    Ints(NumsCommand),
    /// Decodes a comma-separated list of floating-point numbers
    Floats(NumsCommand),
}
