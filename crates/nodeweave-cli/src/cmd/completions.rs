use anyhow::Result;
use clap::Args;
use clap_complete::{Shell, generate};

/// Arguments for `nw completions`.
#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// Target shell for completion script generation.
    #[arg(value_enum)]
    pub shell: Shell,
}

/// Write the completion script for `shell` to stdout.
pub fn run_completions(shell: Shell, command: &mut clap::Command) -> Result<()> {
    let mut out = std::io::stdout();
    let bin_name = command.get_name().to_string();
    generate(shell, command, bin_name, &mut out);
    Ok(())
}
