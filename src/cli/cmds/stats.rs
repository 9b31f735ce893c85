use crate::cli;

/// Count the items of a bag
#[derive(clap::Parser)]
pub struct Stats {
    /// Items of the bag, repeated once per copy
    items: Vec<String>,
}

impl Stats {
    pub fn run(&self) -> anyhow::Result<cli::Output> {
        let bag = cli::util::bag_from_items(&self.items);
        Ok(format!("size: {}\nunique: {}", bag.len(), bag.unique_count()).into())
    }
}
