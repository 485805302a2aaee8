use clap::Parser;

use dt_core::cli::{self, Cli};
use dt_core::{logging, ExitCode};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.json_logs);

    let code = match cli::run(cli) {
        Ok(()) => ExitCode::Ok,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::from(&err)
        }
    };
    std::process::exit(code.as_i32());
}
