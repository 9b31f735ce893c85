fn main() {
    fn try_main() -> anyhow::Result<()> {
        let root = <bag::Root as clap::Parser>::parse();
        let output = root.run()?;
        print!("{}", output);
        Ok(())
    }

    env_logger::init();
    if let Err(e) = try_main() {
        eprint!("error");
        e.chain().for_each(|cause| eprint!(": {}", cause));
        eprintln!();
        std::process::exit(1);
    }
}
