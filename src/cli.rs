// Standard library
use std::path::PathBuf;

// 3rd party crates
use clap::Parser;

// Project imports
use crate::report::types::ReportRequest;

/// List availability zones and their status.
#[derive(Debug, Parser)]
#[command(name = "cloudzones", version)]
pub struct Cli {
    /// List compute availability zones
    #[arg(long)]
    pub compute: bool,

    /// List volume availability zones
    #[arg(long)]
    pub volume: bool,

    /// List additional fields in output
    #[arg(long)]
    pub long: bool,

    /// Path to the configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

impl Cli {
    pub fn to_request(&self) -> ReportRequest {
        ReportRequest {
            compute: self.compute,
            volume: self.volume,
            long: self.long,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_flags_means_neither_branch_requested() {
        let cli = Cli::try_parse_from(["cloudzones"]).unwrap();
        let request = cli.to_request();
        assert!(!request.compute);
        assert!(!request.volume);
        assert!(!request.long);
    }

    #[test]
    fn flags_map_onto_the_request() {
        let cli = Cli::try_parse_from(["cloudzones", "--compute", "--long"]).unwrap();
        let request = cli.to_request();
        assert!(request.compute);
        assert!(!request.volume);
        assert!(request.long);
    }

    #[test]
    fn config_path_is_optional() {
        let cli = Cli::try_parse_from(["cloudzones", "--config", "/tmp/cz.toml"]).unwrap();
        assert_eq!(cli.config.as_deref(), Some(std::path::Path::new("/tmp/cz.toml")));
    }
}
