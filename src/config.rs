use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;
use tracing::Level;

/// Serve prefix suggestions for a fixed vocabulary over HTTP.
#[derive(Parser, Debug, Clone)]
#[command(version, about)]
pub struct Config {
    /// Address to listen on.
    #[arg(long, default_value = "127.0.0.1:5000")]
    pub bind: SocketAddr,

    /// Word list to serve, one term per line. Uses the built-in list when omitted.
    #[arg(long, value_name = "PATH")]
    pub vocabulary: Option<PathBuf>,

    /// Maximum level of log output.
    #[arg(long, default_value_t = Level::INFO)]
    pub log_level: Level,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::try_parse_from(["asuggest"]).unwrap();
        assert_eq!(config.bind, "127.0.0.1:5000".parse().unwrap());
        assert_eq!(config.vocabulary, None);
        assert_eq!(config.log_level, Level::INFO);
    }

    #[test]
    fn test_overrides() {
        let config = Config::try_parse_from([
            "asuggest",
            "--bind",
            "0.0.0.0:8080",
            "--vocabulary",
            "junos.txt",
            "--log-level",
            "debug",
        ])
        .unwrap();
        assert_eq!(config.bind.port(), 8080);
        assert_eq!(config.vocabulary, Some(PathBuf::from("junos.txt")));
        assert_eq!(config.log_level, Level::DEBUG);
    }

    #[test]
    fn test_rejects_bad_address() {
        assert!(Config::try_parse_from(["asuggest", "--bind", "localhost"]).is_err());
    }

    #[test]
    fn test_command_is_well_formed() {
        use clap::CommandFactory;
        Config::command().debug_assert();
    }
}
