/// tagsort - reorganize audio files by their tags
use std::process::ExitCode;
use tagsort_cli::{exit_code, parse_args, run, Invocation, EXIT_UNHANDLED};

fn main() -> ExitCode {
    let cli = match parse_args(std::env::args_os()) {
        Ok(Invocation::Run(cli)) => cli,
        Ok(Invocation::Print(text)) => {
            print!("{}", text);
            return ExitCode::SUCCESS;
        }
        Err(err) => {
            eprintln!("{}", err);
            return ExitCode::from(err.exit_code());
        }
    };

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let code = exit_code(&err);
            if code == EXIT_UNHANDLED {
                eprintln!("Unhandled error: {:#}", err);
            } else {
                eprintln!("{:#}", err);
            }
            ExitCode::from(code)
        }
    }
}
