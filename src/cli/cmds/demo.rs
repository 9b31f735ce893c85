use std::fmt::Write;

use anyhow::Context;

use crate::base;
use crate::cli;

/// Walk through every bag operation on two sample bags
#[derive(clap::Parser)]
pub struct Demo {}

impl Demo {
    pub fn run(&self, printer: &base::Printer) -> anyhow::Result<cli::Output> {
        let compact = printer.with_style(base::Style::Compact);
        let verbose = printer.with_style(base::Style::Verbose);
        let mut b = ["d", "a", "b", "d", "c", "b", "d"]
            .map(String::from)
            .into_iter()
            .collect::<base::Bag<_>>();
        let mut b2 = ["a", "a", "b", "x", "d"]
            .map(String::from)
            .into_iter()
            .collect::<base::Bag<_>>();

        let mut out = String::new();
        writeln!(out, "b = {}", compact.print(&b)?)?;
        writeln!(out, "b = {}", verbose.print(&b)?)?;
        writeln!(out, "b2 = {}", compact.print(&b2)?)?;
        writeln!(out, "b2 = {}", verbose.print(&b2)?)?;

        writeln!(out, "\nadd, remove, in, count")?;
        b.add("a".to_string());
        writeln!(out, "add 'a' to b: {}", compact.print(&b)?)?;
        b2.remove("a").context("failed to remove 'a' from b2")?;
        writeln!(out, "remove 'a' from b2: {}", compact.print(&b2)?)?;
        writeln!(out, "'a' in b: {}", b.contains("a"))?;
        writeln!(out, "'x' in b: {}", b.contains("x"))?;
        writeln!(out, "count of 'd' in b: {}", b.count_of("d"))?;

        writeln!(out, "\nlen, unique")?;
        writeln!(out, "length of b: {}", b.len())?;
        writeln!(out, "# of unique items in b: {}", b.unique_count())?;
        writeln!(out, "length of b2: {}", b2.len())?;
        writeln!(out, "# of unique items in b2: {}", b2.unique_count())?;

        writeln!(out, "\nb+b2, b==b2, b!=b2")?;
        writeln!(out, "b + b2: {}", compact.print(&(&b + &b2))?)?;
        writeln!(out, "b == b2: {}", b == b2)?;
        writeln!(out, "b != b2: {}", b != b2)?;

        writeln!(out, "\niterator")?;
        let mut items = b.iter().collect::<Vec<_>>();
        items.sort();
        writeln!(out, "sorted items of b: {:?}", items)?;

        Ok(out.into())
    }
}
