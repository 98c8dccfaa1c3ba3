//! Ask for a user name in the current terminal.
//!
//! Run with `cargo run --example ask`. Tab accepts the default, Enter submits, Esc aborts.

use std::process::ExitCode;

use text_prompt::config::EnvConfig;
use text_prompt::{
    logging, run_prompt, PolledStdin, PromptKeybindings, RawModeGuard, TerminalHost, TextPrompt,
    TextPromptOptions, Validator, WriterTerminal,
};

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> text_prompt::Result<()> {
    let config = EnvConfig::from_env();
    logging::init_from_env(&config)?;

    let style = std::env::args().nth(1).unwrap_or_else(|| "default".to_string());
    let options = TextPromptOptions::new("What is your name?")
        .style(style)
        .initial("anonymous")
        .validate(Validator::new(|value: &str| {
            if value.chars().count() < 3 {
                Err("Name must be at least 3 characters".to_string())
            } else {
                Ok(())
            }
        }));

    let terminal = WriterTerminal::stdout().with_write_log(config.write_log.clone());
    let mut prompt = TextPrompt::new(options, TerminalHost::new(terminal))?;

    let answer = {
        let _raw = RawModeGuard::stdin()?;
        run_prompt(&mut prompt, &PromptKeybindings::default(), &mut PolledStdin::new())?
    };

    if answer.aborted {
        println!("aborted with {:?}", answer.value);
    } else {
        println!("hello, {}", answer.value);
    }
    Ok(())
}
