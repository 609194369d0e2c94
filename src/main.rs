use colored::Colorize;
use std::process::ExitCode;
use subnet_calc::logging::init_logging;

fn main() -> ExitCode {
    // Do as little as possible in main.rs as it can't contain any tests
    if let Err(e) = init_logging() {
        eprintln!("{}: {e}", "warning".yellow());
    }
    log::info!("#Start main()");

    match subnet_calc::run(std::env::args().skip(1)) {
        Ok(out) => {
            print!("{out}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::debug!("run failed: {e:?}");
            eprintln!("{}: {e}", "error".red());
            ExitCode::FAILURE
        }
    }
}
