use clap::Parser;
use moodlog::application::Session;
use moodlog::cli::{execute, run_session, Cli, Outcome};
use moodlog::domain::SystemClock;
use moodlog::error::MoodlogError;
use moodlog::infrastructure::{init_logging, Config};
use std::io::{self, IsTerminal};

fn main() {
    let cli = Cli::parse();

    let result = run(cli);

    match result {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: Cli) -> Result<(), MoodlogError> {
    // Command-line flags override the config file
    let mut config = Config::discover(cli.config.as_deref())?;
    if let Some(theme) = cli.theme {
        config.theme = theme;
    }
    if cli.no_samples {
        config.seed_samples = false;
    }

    init_logging(&config.log_level);

    let mut session = Session::from_config(&config, SystemClock);

    match cli.command {
        Some(command) => {
            if let Outcome::Output(text) = execute(&mut session, command)? {
                println!("{}", text.trim_end());
            }
            Ok(())
        }
        None => {
            let stdin = io::stdin();
            let prompt = stdin.is_terminal();
            run_session(
                &mut session,
                stdin.lock(),
                io::stdout().lock(),
                io::stderr().lock(),
                prompt,
            )
        }
    }
}
