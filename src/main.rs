use clap::Parser;

use indicator_report::cli::{Cli, Commands};
use indicator_report::commands::{init_tracing, run_init, run_report, run_views};

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    let exit_code = match &cli.command {
        Commands::Report(args) => run_report(args, &cli),
        Commands::Views(args) => run_views(args, &cli),
        Commands::Init(args) => run_init(args, &cli),
    };

    std::process::exit(exit_code);
}
