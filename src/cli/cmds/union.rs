use crate::base;
use crate::cli;

/// Combine two bags, summing the copies of each item
#[derive(clap::Parser)]
pub struct Union {
    #[command(flatten)]
    pair_opts: cli::sharedopts::PairOpts,
}

impl Union {
    pub fn run(&self, printer: &base::Printer) -> anyhow::Result<cli::Output> {
        let left = cli::util::bag_from_items(&self.pair_opts.left);
        let right = cli::util::bag_from_items(&self.pair_opts.right);
        cli::util::print_bag(printer, &(&left + &right))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    cli::testing::generate_testcases![
        (
            both_empty,
            cli::testing::Case {
                invocations: &[cli::testing::Invocation {
                    args: &["", "union"],
                    res: cli::testing::ResultMatcher::OkExact(cli::Output::String(
                        "Bag()".into()
                    )),
                }],
            }
        ),
        (
            one_empty,
            cli::testing::Case {
                invocations: &[
                    cli::testing::Invocation {
                        args: &["", "union", "--sorted", "-l", "b,a,b"],
                        res: cli::testing::ResultMatcher::OkExact(cli::Output::String(
                            "Bag(a[1], b[2])".into()
                        )),
                    },
                    cli::testing::Invocation {
                        args: &["", "union", "--sorted", "-r", "b,a,b"],
                        res: cli::testing::ResultMatcher::OkExact(cli::Output::String(
                            "Bag(a[1], b[2])".into()
                        )),
                    },
                ],
            }
        ),
        (
            normal_execution,
            cli::testing::Case {
                invocations: &[cli::testing::Invocation {
                    args: &[
                        "",
                        "union",
                        "--sorted",
                        "--left",
                        "a,a,b,c,d,d,d",
                        "--right",
                        "a,b,x,d",
                    ],
                    res: cli::testing::ResultMatcher::OkExact(cli::Output::String(
                        "Bag(a[3], b[2], c[1], d[4], x[1])".into()
                    )),
                }],
            }
        ),
        (
            repeated_options,
            cli::testing::Case {
                invocations: &[cli::testing::Invocation {
                    args: &["", "union", "--sorted", "-l", "a", "-l", "a,b", "-r", "b"],
                    res: cli::testing::ResultMatcher::OkExact(cli::Output::String(
                        "Bag(a[2], b[2])".into()
                    )),
                }],
            }
        ),
    ];
}
