use anyhow::Context;

use crate::base;
use crate::cli;

pub fn printer_from_opts(opts: &cli::sharedopts::RenderOpts) -> base::Printer {
    let mut printer = base::Printer::default().with_style(opts.style);
    if opts.sorted {
        printer = printer.with_sorted()
    }
    printer
}

pub fn bag_from_items(items: &[String]) -> base::Bag<String> {
    let bag = items.iter().cloned().collect::<base::Bag<_>>();
    log::debug!(
        "built bag of {} items, {} unique",
        bag.len(),
        bag.unique_count()
    );
    bag
}

pub fn print_bag(printer: &base::Printer, bag: &base::Bag<String>) -> anyhow::Result<cli::Output> {
    let s = printer
        .print(bag)
        .with_context(|| format!("failed to write bag as {}", printer.style))?;
    Ok(s.into())
}
