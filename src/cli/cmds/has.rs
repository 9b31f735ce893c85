use crate::cli;

/// Check whether a bag holds an item
#[derive(clap::Parser)]
pub struct Has {
    /// Item to look for
    #[arg(short, long)]
    item: String,

    /// Items of the bag, repeated once per copy
    items: Vec<String>,
}

impl Has {
    pub fn run(&self) -> anyhow::Result<cli::Output> {
        let bag = cli::util::bag_from_items(&self.items);
        Ok(bag.contains(self.item.as_str()).to_string().into())
    }
}
