use clap::{Args as ClapArgs, Parser, Subcommand};
use std::path::PathBuf;

use crate::application::dto::{OutputFormat, StrategyName};

/// Formulate consistent synthetic machine identities from a hardware catalog
#[derive(Parser, Debug)]
#[command(name = "identity-formulator")]
#[command(version)]
#[command(
    about = "Formulate consistent synthetic machine identities from a hardware catalog",
    long_about = None
)]
pub struct Args {
    /// Path to the hardware database (YAML)
    #[arg(short, long, global = true, value_name = "PATH")]
    pub database: Option<PathBuf>,

    /// Path to a config file (defaults to ./identity-formulator.config.yml if present)
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Output file for the formulated identity
    #[arg(short, long, global = true, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Write the formulated identity to stdout instead of a file
    #[arg(long, global = true, conflicts_with = "output")]
    pub stdout: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// List all available components and preset profiles
    List {
        /// Listing format: text or json
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,
    },

    /// Formulate an identity from a preset profile
    Preset {
        /// Preset profile name
        name: String,

        #[command(flatten)]
        strategy: StrategyArg,
    },

    /// Formulate an identity from a random compatible combination
    Random {
        #[command(flatten)]
        strategy: StrategyArg,
    },

    /// Formulate an identity from explicit component ids
    Custom {
        /// CPU id
        #[arg(long)]
        cpu: String,
        /// GPU id
        #[arg(long)]
        gpu: String,
        /// Motherboard id
        #[arg(long)]
        motherboard: String,
        /// Network interface id
        #[arg(long)]
        network: String,
        /// Storage device id
        #[arg(long)]
        storage: String,
        /// Operating system id
        #[arg(long)]
        os: String,

        #[command(flatten)]
        strategy: StrategyArg,
    },
}

impl Commands {
    /// Strategy given on the command line, if the command takes one
    pub fn strategy(&self) -> Option<StrategyName> {
        match self {
            Commands::List { .. } => None,
            Commands::Preset { strategy, .. }
            | Commands::Random { strategy }
            | Commands::Custom { strategy, .. } => strategy.strategy,
        }
    }
}

#[derive(ClapArgs, Debug, Clone, PartialEq, Eq)]
pub struct StrategyArg {
    /// Randomization strategy: conservative, moderate or aggressive [default: moderate]
    #[arg(short, long)]
    pub strategy: Option<StrategyName>,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Args {
        Args::try_parse_from(args).unwrap()
    }

    #[test]
    fn test_list_defaults_to_text() {
        let args = parse(&["identity-formulator", "list"]);
        assert_eq!(
            args.command,
            Commands::List {
                format: OutputFormat::Text
            }
        );
        assert_eq!(args.command.strategy(), None);
    }

    #[test]
    fn test_preset_with_strategy() {
        let args = parse(&[
            "identity-formulator",
            "preset",
            "office_desktop",
            "--strategy",
            "aggressive",
        ]);
        match &args.command {
            Commands::Preset { name, .. } => assert_eq!(name, "office_desktop"),
            other => panic!("unexpected command: {:?}", other),
        }
        assert_eq!(args.command.strategy(), Some(StrategyName::Aggressive));
    }

    #[test]
    fn test_random_without_strategy() {
        let args = parse(&["identity-formulator", "random"]);
        assert_eq!(args.command.strategy(), None);
    }

    #[test]
    fn test_invalid_strategy_rejected() {
        let result = Args::try_parse_from(["identity-formulator", "random", "--strategy", "wild"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_custom_collects_component_ids() {
        let args = parse(&[
            "identity-formulator",
            "custom",
            "--cpu",
            "cpu_1",
            "--gpu",
            "gpu_1",
            "--motherboard",
            "mb_1",
            "--network",
            "net_1",
            "--storage",
            "stor_1",
            "--os",
            "os_1",
        ]);
        match args.command {
            Commands::Custom {
                cpu,
                motherboard,
                os,
                strategy,
                ..
            } => {
                assert_eq!(cpu, "cpu_1");
                assert_eq!(motherboard, "mb_1");
                assert_eq!(os, "os_1");
                assert_eq!(strategy.strategy, None);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_custom_requires_every_component() {
        let result = Args::try_parse_from([
            "identity-formulator",
            "custom",
            "--cpu",
            "cpu_1",
            "--gpu",
            "gpu_1",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_global_options_after_subcommand() {
        let args = parse(&[
            "identity-formulator",
            "random",
            "--database",
            "db.yml",
            "--stdout",
        ]);
        assert_eq!(args.database, Some(PathBuf::from("db.yml")));
        assert!(args.stdout);
    }

    #[test]
    fn test_stdout_conflicts_with_output() {
        let result = Args::try_parse_from([
            "identity-formulator",
            "--stdout",
            "--output",
            "x.json",
            "random",
        ]);
        assert!(result.is_err());
    }
}
