use anyhow::Context;

use crate::base;
use crate::cli;

/// Remove one copy of an item from a bag
#[derive(clap::Parser)]
pub struct Rm {
    /// Item to remove
    #[arg(short, long)]
    item: String,

    /// Items of the bag, repeated once per copy
    items: Vec<String>,
}

impl Rm {
    pub fn run(&self, printer: &base::Printer) -> anyhow::Result<cli::Output> {
        let mut bag = cli::util::bag_from_items(&self.items);
        let left = bag
            .remove(self.item.as_str())
            .with_context(|| format!("failed to remove '{}'", self.item))?;
        log::debug!("{} copies of '{}' left", left, self.item);
        cli::util::print_bag(printer, &bag)
    }
}
