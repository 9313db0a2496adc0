use clap::Parser;
use misconfig_core::OutputFormat;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "misconfig-policy-generator")]
#[command(
    version,
    about = "Generate a security policy from a JSON or YAML configuration file"
)]
pub struct Cli {
    /// Input configuration file (.json, .yaml or .yml)
    #[arg(short, long)]
    pub input: PathBuf,

    /// Output policy file, overwritten if it exists
    #[arg(short, long)]
    pub output: PathBuf,

    /// Output format: json or yaml
    #[arg(short, long, value_parser = parse_format)]
    pub format: OutputFormat,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

fn parse_format(s: &str) -> Result<OutputFormat, String> {
    s.parse::<OutputFormat>().map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_all_flags() {
        let cli = Cli::try_parse_from([
            "misconfig-policy-generator",
            "-i",
            "config.yaml",
            "--output",
            "policy.json",
            "-f",
            "json",
            "-v",
        ])
        .unwrap();
        assert_eq!(cli.input, PathBuf::from("config.yaml"));
        assert_eq!(cli.output, PathBuf::from("policy.json"));
        assert_eq!(cli.format, OutputFormat::Json);
        assert!(cli.verbose);
    }

    #[test]
    fn test_format_is_required() {
        let result = Cli::try_parse_from([
            "misconfig-policy-generator",
            "-i",
            "config.yaml",
            "-o",
            "policy.json",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_unknown_format_rejected() {
        let err = Cli::try_parse_from([
            "misconfig-policy-generator",
            "-i",
            "config.yaml",
            "-o",
            "policy.xml",
            "-f",
            "xml",
        ])
        .unwrap_err();
        assert!(err.to_string().contains("expected json or yaml"));
    }
}
