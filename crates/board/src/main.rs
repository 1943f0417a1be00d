mod app;

use std::env;
use std::process::ExitCode;

use app::bootstrap::{self, CliCommand};

fn main() -> ExitCode {
    let args = env::args().skip(1).collect::<Vec<_>>();
    let env_background = env::var(bootstrap::BACKGROUND_ENV_VAR).ok();
    match bootstrap::parse_args(&args, env_background) {
        Ok(CliCommand::Help) => {
            println!("{}", bootstrap::usage_text());
            ExitCode::SUCCESS
        }
        Ok(CliCommand::Run(options)) => app::loop_runner::run(bootstrap::build_app(options)),
        Err(message) => {
            eprintln!("{message}\n\n{}", bootstrap::usage_text());
            ExitCode::from(2)
        }
    }
}
