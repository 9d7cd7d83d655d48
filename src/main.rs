mod entry;
mod system;

use std::process::ExitCode;

fn main() -> ExitCode {
    match entry::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("thor: {}", err);
            ExitCode::FAILURE
        }
    }
}
