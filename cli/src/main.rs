//! Entry point of the program.

mod bits;
mod cli;
mod input;
mod nums;

use crate::cli::{Command, Options};

fn main() {
    env_logger::init();
    let opts = <Options as clap::Parser>::parse();

    let result = match opts.command {
        Command::Bits(bits) => bits.run(opts.global),

        Command::Ones(ones) => ones.run(opts.global),

        Command::Ints(ints) => ints.run::<i32>(opts.global),

        Command::Floats(floats) => floats.run::<f32>(opts.global),
    };

    if let Err(e) = result {
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}
