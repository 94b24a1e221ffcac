// CLI module for mt2native

use clap::Parser;

/// mt2native - Literal machine translation refined into native-sounding text
#[derive(Parser, Debug)]
#[command(name = "mt2native", version, about, long_about = None)]
pub struct Args {
    /// Path to a TOML configuration file (default: ~/.mt2native/config.toml)
    #[arg(long, env = "MT2NATIVE_CONFIG")]
    pub config: Option<String>,

    /// Validate configuration and provider credentials, then exit
    #[arg(long)]
    pub check: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_parse_defaults() {
        let args = Args::parse_from(["mt2native"]);
        assert!(args.config.is_none());
        assert!(!args.check);
    }

    #[test]
    fn test_args_parse_config_and_check() {
        let args = Args::parse_from(["mt2native", "--config", "/tmp/mt2native.toml", "--check"]);
        assert_eq!(args.config.as_deref(), Some("/tmp/mt2native.toml"));
        assert!(args.check);
    }
}
