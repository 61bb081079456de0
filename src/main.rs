use clap::Parser;
use env_logger::Env;

use wrap_guard::cli::{Cli, Commands};
use wrap_guard::commands::{run_check, run_config, run_init, run_styles};

fn main() {
    let cli = Cli::parse();

    env_logger::Builder::from_env(Env::default().default_filter_or(cli.log_filter())).init();

    let exit_code = match &cli.command {
        Commands::Check(args) => run_check(args, &cli),
        Commands::Init(args) => run_init(args),
        Commands::Config(args) => run_config(args),
        Commands::Styles => run_styles(),
    };

    std::process::exit(exit_code);
}
