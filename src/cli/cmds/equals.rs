use crate::cli;

/// Check whether two bags hold the same copies of the same items
#[derive(clap::Parser)]
pub struct Equals {
    #[command(flatten)]
    pair_opts: cli::sharedopts::PairOpts,
}

impl Equals {
    pub fn run(&self) -> anyhow::Result<cli::Output> {
        let left = cli::util::bag_from_items(&self.pair_opts.left);
        let right = cli::util::bag_from_items(&self.pair_opts.right);
        Ok((left == right).to_string().into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    cli::testing::generate_testcases![
        (
            equal,
            cli::testing::Case {
                invocations: &[
                    cli::testing::Invocation {
                        args: &["", "eq"],
                        res: cli::testing::ResultMatcher::OkGlob("true"),
                    },
                    cli::testing::Invocation {
                        args: &["", "eq", "-l", "a,b", "-r", "a,b"],
                        res: cli::testing::ResultMatcher::OkGlob("true"),
                    },
                    cli::testing::Invocation {
                        args: &["", "eq", "-l", "a,b,b", "-r", "b,a,b"],
                        res: cli::testing::ResultMatcher::OkGlob("true"),
                    },
                ],
            }
        ),
        (
            not_equal,
            cli::testing::Case {
                invocations: &[
                    cli::testing::Invocation {
                        args: &["", "eq", "-l", "a,b", "-r", "a,c"],
                        res: cli::testing::ResultMatcher::OkGlob("false"),
                    },
                    cli::testing::Invocation {
                        args: &["", "eq", "-l", "a,b", "-r", "a,a,b"],
                        res: cli::testing::ResultMatcher::OkGlob("false"),
                    },
                    cli::testing::Invocation {
                        args: &["", "eq", "-l", "a"],
                        res: cli::testing::ResultMatcher::OkGlob("false"),
                    },
                ],
            }
        ),
    ];
}
