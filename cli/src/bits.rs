use anyhow::Context;
use packvec::{BitVec, Radix};

use crate::cli::{GlobalOptions, InputOptions};

fn parse_radix(s: &str) -> Result<Radix, String> {
    s.parse::<u32>()
        .ok()
        .and_then(Radix::from_base)
        .ok_or_else(|| format!("`{s}` is not one of 2, 8, 16 or 64"))
}

fn decode(input: &InputOptions) -> anyhow::Result<BitVec> {
    let text = input.read()?;
    let bits: BitVec = text
        .parse()
        .with_context(|| format!("invalid bit string `{text}`"))?;
    log::info!("decoded {} bits ({} set)", bits.len(), bits.count_ones());
    Ok(bits)
}

#[derive(clap::Parser, Debug)]
pub struct BitsCommand {
    #[command(flatten)]
    pub input: InputOptions,

    /// The base to write the result in (2, 8, 16 or 64)
    #[arg(short, long, value_parser = parse_radix)]
    pub base: Option<Radix>,

    /// Write the `BitVec[...]` form instead
    #[arg(long, conflicts_with = "base")]
    pub json: bool,
}

impl BitsCommand {
    pub fn run(self, _: GlobalOptions) -> anyhow::Result<()> {
        let bits = decode(&self.input)?;
        if self.json {
            println!("{}", bits.to_json_string());
        } else {
            println!("{}", bits.to_string_radix(self.base.unwrap_or_default()));
        }
        Ok(())
    }
}

#[derive(clap::Parser, Debug)]
pub struct OnesCommand {
    #[command(flatten)]
    pub input: InputOptions,
}

impl OnesCommand {
    pub fn run(self, _: GlobalOptions) -> anyhow::Result<()> {
        let bits = decode(&self.input)?;
        let ones: Vec<String> = bits.iter_ones().map(|i| i.to_string()).collect();
        println!("{}", ones.join(" "));
        Ok(())
    }
}
