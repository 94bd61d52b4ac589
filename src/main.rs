//! Lectern CLI binary.

use std::io::Write;
use std::process::ExitCode;

use clap::Parser;

use lectern::cli::args::LecternArgs;
use lectern::cli::commands::execute_command;

fn main() -> ExitCode {
    let args = LecternArgs::parse();

    env_logger::Builder::new()
        .filter_level(args.log_level())
        .format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()))
        .init();

    match execute_command(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
