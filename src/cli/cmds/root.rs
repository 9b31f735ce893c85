use crate::cli;

/// Multiset inspector
///
/// Builds bags from command line items and runs a single bag operation on
/// them.
#[derive(clap::Parser)]
#[command(color = clap::ColorChoice::Never)]
pub struct Root {
    #[command(subcommand)]
    command: Commands,

    #[command(flatten)]
    render_opts: cli::sharedopts::RenderOpts,
}

#[derive(clap::Subcommand)]
enum Commands {
    Show(cli::cmds::show::Show),
    Stats(cli::cmds::stats::Stats),
    Count(cli::cmds::count::Count),
    Has(cli::cmds::has::Has),
    Add(cli::cmds::add::Add),
    Rm(cli::cmds::rm::Rm),
    Union(cli::cmds::union::Union),
    Eq(cli::cmds::equals::Equals),
    Demo(cli::cmds::demo::Demo),
}

impl Root {
    pub fn run(self) -> anyhow::Result<cli::Output> {
        let printer = cli::util::printer_from_opts(&self.render_opts);
        log::debug!("printing with {:?}", printer);

        match self.command {
            Commands::Show(cmd) => cmd.run(&printer),
            Commands::Stats(cmd) => cmd.run(),
            Commands::Count(cmd) => cmd.run(),
            Commands::Has(cmd) => cmd.run(),
            Commands::Add(cmd) => cmd.run(&printer),
            Commands::Rm(cmd) => cmd.run(&printer),
            Commands::Union(cmd) => cmd.run(&printer),
            Commands::Eq(cmd) => cmd.run(),
            Commands::Demo(cmd) => cmd.run(&printer),
        }
    }
}
