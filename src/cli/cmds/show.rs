use crate::base;
use crate::cli;

/// Write out a bag
#[derive(clap::Parser)]
pub struct Show {
    /// Items of the bag, repeated once per copy
    items: Vec<String>,
}

impl Show {
    pub fn run(&self, printer: &base::Printer) -> anyhow::Result<cli::Output> {
        let bag = cli::util::bag_from_items(&self.items);
        cli::util::print_bag(printer, &bag)
    }
}
