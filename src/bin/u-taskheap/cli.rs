use clap::Parser;

/// Interactive priority task scheduler.
///
/// Runs a menu-driven console loop over a single in-memory scheduler.
/// Nothing is persisted between runs.
#[derive(Parser, Debug)]
#[command(name = "u-taskheap", about = "Interactive priority task scheduler")]
pub struct CliArgs {
    /// Path to config file (default: <config dir>/u-taskheap/config.toml)
    #[arg(long, env = "U_TASKHEAP_CONFIG")]
    pub config: Option<String>,

    /// Start with an empty scheduler instead of the sample tasks
    #[arg(long)]
    pub no_seed: bool,

    /// Print the task list as JSON
    #[arg(long)]
    pub json: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = CliArgs::try_parse_from(["u-taskheap"]).unwrap();
        assert!(!args.no_seed);
        assert!(!args.json);
    }

    #[test]
    fn test_flags() {
        let args =
            CliArgs::try_parse_from(["u-taskheap", "--no-seed", "--json", "--config", "x.toml"])
                .unwrap();
        assert!(args.no_seed);
        assert!(args.json);
        assert_eq!(args.config.as_deref(), Some("x.toml"));
    }
}
