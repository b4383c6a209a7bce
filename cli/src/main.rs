use clap::Parser;
use curlgen_cli::clipboard::{self, SystemClipboard};

fn main() {
    // Structured logging on stderr, level from VERBOSE (0..3).
    curlgen_cli::logging::init_logging();

    let cli = curlgen_cli::Cli::parse();

    match curlgen_cli::execute(&cli) {
        Ok(output) => {
            println!("{output}");
            if cli.copy {
                // Blocks on Linux until another client owns the selection.
                let notice = clipboard::export(&mut SystemClipboard, &output);
                eprintln!("{notice}");
            }
        }
        Err(e) => {
            let msg = format!("{e:#}");
            tracing::error!(error = %msg, exit_code = 1, "fatal_error");
            std::process::exit(1);
        }
    }
}
