// CLI module for transgate
// Author: kelexine (https://github.com/kelexine)

use clap::Parser;
use std::path::PathBuf;

/// transgate - one HTTP API in front of many machine translation vendors
#[derive(Parser, Debug)]
#[command(name = "transgate", version, about, long_about = None)]
pub struct Args {
    /// Configuration file (default: ~/.transgate/config.toml)
    #[arg(short, long, env = "TRANSGATE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Override `server.host`
    #[arg(long)]
    pub host: Option<String>,

    /// Override `server.port`
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Print which providers are configured and exit
    #[arg(long)]
    pub list_providers: bool,

    /// Print the effective configuration (secrets redacted) and exit
    #[arg(long)]
    pub print_config: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_overrides() {
        let args = Args::parse_from(["transgate", "--config", "/tmp/t.toml", "--port", "8080"]);
        assert_eq!(args.config, Some(PathBuf::from("/tmp/t.toml")));
        assert_eq!(args.port, Some(8080));
        assert!(args.host.is_none());
        assert!(!args.list_providers);
    }

    #[test]
    fn test_flags() {
        let args = Args::parse_from(["transgate", "--list-providers", "--print-config"]);
        assert!(args.list_providers);
        assert!(args.print_config);
    }
}
