//! Shell completion generation command.
//!
//! This module provides the `completions` command which generates shell completion
//! scripts for bash, zsh, fish, and PowerShell.

use crate::cli::Cli;
use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::{Args, CommandFactory};
use clap_complete::{generate, Shell};
use std::io;

/// Binary name matching the installed executable
const BIN_NAME: &str = "kura";

/// Generate shell completion scripts
#[derive(Args)]
pub struct CompletionsCommand {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

impl CompletionsCommand {
    /// Execute the completions command.
    pub fn execute(&self, _global: &GlobalOptions) -> Result<(), CliError> {
        let mut cmd = Cli::command();

        eprintln!("# Generating {} completion script", self.shell);
        eprintln!("# Run the following command to enable completions:");

        match self.shell {
            Shell::Bash => {
                eprintln!(
                    "#   kura completions bash > ~/.local/share/bash-completion/completions/kura"
                );
                eprintln!("# Or source it directly in ~/.bashrc:");
                eprintln!("#   eval \"$(kura completions bash)\"");
            }
            Shell::Zsh => {
                eprintln!("#   kura completions zsh > ~/.zsh/completions/_kura");
                eprintln!("# Make sure ~/.zsh/completions is in your $fpath");
                eprintln!("# Or add to ~/.zshrc:");
                eprintln!("#   eval \"$(kura completions zsh)\"");
            }
            Shell::Fish => {
                eprintln!("#   kura completions fish > ~/.config/fish/completions/kura.fish");
                eprintln!("# Or add to config.fish:");
                eprintln!("#   kura completions fish | source");
            }
            Shell::PowerShell => {
                eprintln!("#   kura completions powershell > $PROFILE");
                eprintln!("# Or run:");
                eprintln!("#   kura completions powershell | Out-String | Invoke-Expression");
            }
            _ => {}
        }

        eprintln!();

        generate(self.shell, &mut cmd, BIN_NAME, &mut io::stdout());

        Ok(())
    }
}
