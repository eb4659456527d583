//! Shell completion generation command.

use crate::cli::Cli;
use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::{Args, CommandFactory};
use clap_complete::{generate, Shell};
use std::io;

/// Name of the installed binary.
const BIN_NAME: &str = "itemres";

/// Generate shell completion scripts
#[derive(Args)]
pub struct CompletionsCommand {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

/// Installation hints printed to stderr before the script.
fn install_hints(shell: Shell) -> &'static [&'static str] {
    match shell {
        Shell::Bash => &[
            "#   itemres completions bash > ~/.local/share/bash-completion/completions/itemres",
            "# Or add to ~/.bashrc:",
            "#   eval \"$(itemres completions bash)\"",
        ],
        Shell::Zsh => &[
            "#   itemres completions zsh > ~/.zsh/completions/_itemres",
            "# Make sure ~/.zsh/completions is in your $fpath",
        ],
        Shell::Fish => &["#   itemres completions fish > ~/.config/fish/completions/itemres.fish"],
        Shell::PowerShell => &["#   itemres completions powershell | Out-String | Invoke-Expression"],
        _ => &[],
    }
}

impl CompletionsCommand {
    /// Execute the completions command.
    pub fn execute(&self, global: &GlobalOptions) -> Result<(), CliError> {
        if !global.quiet {
            eprintln!("# Generating {} completion script", self.shell);
            for hint in install_hints(self.shell) {
                eprintln!("{hint}");
            }
        }

        let mut cmd = Cli::command();
        generate(self.shell, &mut cmd, BIN_NAME, &mut io::stdout());
        Ok(())
    }
}
