use bowl_collection::cli;
use std::process::ExitCode;

fn main() -> ExitCode {
    // Process the command line
    match cli::run() {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
