use anyhow::Context;
use packvec::{decimal, Element, GrowthPolicy, NumVec, Traverse};

use crate::cli::{GlobalOptions, InputOptions};

#[derive(clap::Parser, Debug)]
pub struct NumsCommand {
    #[command(flatten)]
    pub input: InputOptions,

    /// Print the sum of the values instead of the values
    #[arg(long)]
    pub sum: bool,

    /// Print the values as a JSON array
    #[arg(long, conflicts_with = "sum")]
    pub json: bool,
}

impl NumsCommand {
    pub fn run<T>(self, global: GlobalOptions) -> anyhow::Result<()>
    where
        T: Element + serde::Serialize + Into<f64>,
    {
        let text = self.input.read()?;
        let values = decimal::decode::<T>(&text)
            .with_context(|| format!("invalid {} list `{text}`", T::TYPE_NAME))?;

        let policy = GrowthPolicy::from(global.growth);
        let mut nums = NumVec::with_policy(policy);
        nums.extend(values);
        log::info!(
            "decoded {} values, capacity {} with {policy:?}",
            nums.len(),
            nums.capacity()
        );

        if self.sum {
            println!("{}", nums.reduce(0.0, |acc, x| acc + Into::<f64>::into(x)));
        } else if self.json {
            println!("{}", serde_json::to_string(&nums)?);
        } else {
            println!("{nums}");
        }
        Ok(())
    }
}
