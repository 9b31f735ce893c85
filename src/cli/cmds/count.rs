use crate::cli;

/// Count the copies of an item in a bag
#[derive(clap::Parser)]
pub struct Count {
    /// Item to count
    #[arg(short, long)]
    item: String,

    /// Items of the bag, repeated once per copy
    items: Vec<String>,
}

impl Count {
    pub fn run(&self) -> anyhow::Result<cli::Output> {
        let bag = cli::util::bag_from_items(&self.items);
        Ok(bag.count_of(self.item.as_str()).to_string().into())
    }
}
