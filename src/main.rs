use clap::Parser;
use std::process;

use mealplan::cli::commands::{Cli, Commands};
use mealplan::config::Config;
use mealplan::{cli, logging, output};

fn main() {
    let cli_args = Cli::parse();
    let json_output = cli_args.json;

    let config = match Config::resolve(cli_args.data_dir.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            output::report_error(&e, json_output);
            process::exit(1);
        }
    };
    if let Err(e) = logging::init_logging(&config.log_filter) {
        eprintln!("Warning: logging disabled: {e}");
    }

    let exit_code = match cli_args.command {
        Commands::Init => cli::init::run(&config, json_output),
        Commands::Recipe(cmd) => cli::recipe::run(cmd, &config, json_output),
        Commands::Plan(cmd) => cli::plan::run(cmd, &config, json_output),
        Commands::Nutrition(cmd) => cli::nutrition::run(cmd, &config, json_output),
    };

    process::exit(exit_code);
}
