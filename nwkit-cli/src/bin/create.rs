use std::process::ExitCode;

use nwkit_cli::commands::create::CreateArgs;

fn main() -> ExitCode {
    nwkit_cli::run::<CreateArgs>(std::env::args_os())
}
