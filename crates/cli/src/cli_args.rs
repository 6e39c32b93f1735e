//! Command-line argument parsing.

use clap::Parser;

/// Command-line arguments for the `qr` binary.
#[derive(Parser, Debug)] // requires `derive` feature
#[command(term_width = 0)] // Just to make testing across clap features easier
pub struct Args {
    /// Path to the actions config file (JSON, or YAML with a `.yml`/`.yaml` extension).
    ///
    /// If not provided, defaults to `config.json` in the working directory.
    #[arg(long, short = 'c')]
    pub config_path: Option<String>,

    /// Shell used to run commands (`<shell> -c <command>`) and scripts (`<shell> <script>`).
    #[arg(long, short = 's')]
    pub shell: Option<String>,

    /// Show what an action would run instead of running it.
    #[arg(long, short = 'd', action)]
    pub dry_run: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["qr"]).unwrap();
        assert!(args.config_path.is_none());
        assert!(args.shell.is_none());
        assert!(!args.dry_run);
    }

    #[test]
    fn test_all_options() {
        let args =
            Args::try_parse_from(["qr", "-c", "menu.yml", "--shell", "zsh", "--dry-run"]).unwrap();
        assert_eq!(args.config_path.as_deref(), Some("menu.yml"));
        assert_eq!(args.shell.as_deref(), Some("zsh"));
        assert!(args.dry_run);
    }

    #[test]
    fn test_unknown_argument_is_rejected() {
        assert!(Args::try_parse_from(["qr", "--unknown"]).is_err());
    }
}
