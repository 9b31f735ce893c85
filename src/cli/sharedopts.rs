use crate::base;

pub const STYLE_HELP: &str = "How bags are written out";
pub const STYLE_HELP_LONG: &str = "How bags are written out

compact: each distinct item once with its count, e.g. Bag(a[1], b[2])
verbose: every copy of every item, e.g. Bag([\"a\", \"b\", \"b\"])
json: object mapping items to counts, e.g. {\"a\":1,\"b\":2}";

#[derive(clap::Args)]
pub struct RenderOpts {
    #[arg(
        long,
        global = true,
        default_value = "compact",
        help = STYLE_HELP,
        long_help = STYLE_HELP_LONG,
    )]
    pub style: base::Style,

    /// Write distinct items in ascending order
    ///
    /// Without this flag, items appear in an unspecified order that may differ
    /// between runs.
    #[arg(long, global = true)]
    pub sorted: bool,
}

#[derive(clap::Args)]
pub struct PairOpts {
    /// Items of the left bag
    ///
    /// Use commas to separate items. Omit to use an empty bag.
    #[arg(short, long, value_name = "ITEMS", value_delimiter = ',')]
    pub left: Vec<String>,

    /// Items of the right bag
    ///
    /// Use commas to separate items. Omit to use an empty bag.
    #[arg(short, long, value_name = "ITEMS", value_delimiter = ',')]
    pub right: Vec<String>,
}
