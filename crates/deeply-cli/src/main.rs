use std::io;
use std::process::ExitCode;

use clap::Parser;
use deeply_cli::{input, logging, run, Args, Outcome};

fn main() -> ExitCode {
    let args = Args::parse();
    logging::init_with_filter(&args.log_level);

    let result = input::load_config(args.config.as_deref())
        .and_then(|config| run(&args.command, config, &mut io::stdout().lock()));

    match result {
        Ok(Outcome::Success) => ExitCode::SUCCESS,
        Ok(Outcome::Mismatch) => ExitCode::from(1),
        Err(e) => {
            eprintln!("deeply: {e}");
            ExitCode::from(2)
        }
    }
}
