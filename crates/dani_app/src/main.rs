mod platform;

use clap::Parser;

fn main() -> anyhow::Result<()> {
    let args = platform::cli::Args::parse();
    platform::logging::initialize(args.log, &args.log_file, args.verbose);
    platform::app::run(&args)
}
