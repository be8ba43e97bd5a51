//! Shell completion scripts for `fzh`
use std::io::Write;

use clap::CommandFactory;

use crate::options::FzhOptions;

/// Shells `fzh --shell` can write a completion script for
#[derive(Clone, Copy, clap::ValueEnum, PartialEq, Eq, Debug)]
pub enum Shell {
    /// bash
    Bash,
    /// elvish
    Elvish,
    /// fish
    Fish,
    /// nushell, generated by `clap_complete_nushell`
    Nushell,
    /// PowerShell
    PowerShell,
    /// zsh
    Zsh,
}

impl Shell {
    /// The matching `clap_complete` generator; nushell lives in its own crate.
    fn builtin(self) -> Option<clap_complete::Shell> {
        match self {
            Shell::Bash => Some(clap_complete::Shell::Bash),
            Shell::Elvish => Some(clap_complete::Shell::Elvish),
            Shell::Fish => Some(clap_complete::Shell::Fish),
            Shell::PowerShell => Some(clap_complete::Shell::PowerShell),
            Shell::Zsh => Some(clap_complete::Shell::Zsh),
            Shell::Nushell => None,
        }
    }
}

/// Writes the completion script for `shell` to `out`
pub fn generate_to(shell: Shell, out: &mut dyn Write) {
    let mut cmd = FzhOptions::command();
    let bin_name = cmd.get_name().to_string();
    debug!("generating {shell:?} completions for {bin_name}");

    match shell.builtin() {
        Some(generator) => clap_complete::generate(generator, &mut cmd, bin_name, out),
        None => clap_complete::generate(clap_complete_nushell::Nushell, &mut cmd, bin_name, out),
    }
}

/// Writes the completion script for `shell` to stdout
pub fn generate(shell: Shell) {
    generate_to(shell, &mut std::io::stdout());
}

#[cfg(test)]
mod tests {
    use clap::ValueEnum;

    use super::*;

    fn script(shell: Shell) -> String {
        let mut out = Vec::new();
        generate_to(shell, &mut out);
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_generate_bash() {
        let script = script(Shell::Bash);
        assert!(script.contains("fzh"));
        assert!(script.contains("--case-sensitive"));
        assert!(script.contains("--read0"));
    }

    #[test]
    fn test_generate_nushell() {
        assert!(script(Shell::Nushell).contains("fzh"));
    }

    #[test]
    fn test_every_shell_generates() {
        for &shell in Shell::value_variants() {
            assert!(!script(shell).is_empty(), "{shell:?}");
        }
    }
}
