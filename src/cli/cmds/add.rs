use crate::base;
use crate::cli;

/// Add one copy of an item to a bag
#[derive(clap::Parser)]
pub struct Add {
    /// Item to add
    #[arg(short, long)]
    item: String,

    /// Items of the bag, repeated once per copy
    items: Vec<String>,
}

impl Add {
    pub fn run(&self, printer: &base::Printer) -> anyhow::Result<cli::Output> {
        let mut bag = cli::util::bag_from_items(&self.items);
        bag.add(self.item.clone());
        cli::util::print_bag(printer, &bag)
    }
}
