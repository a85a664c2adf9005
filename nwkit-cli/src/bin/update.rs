use std::process::ExitCode;

use nwkit_cli::commands::update::UpdateArgs;

fn main() -> ExitCode {
    nwkit_cli::run::<UpdateArgs>(std::env::args_os())
}
