use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use super::colors::{ColorMode, ThemeMode};

#[derive(Parser, Debug)]
#[command(name = "factory-gen")]
#[command(author, version, about = "Companion factory generator for Dart data models")]
pub struct Cli {
  #[command(subcommand)]
  pub command: Commands,

  /// Control color output
  #[arg(long, value_enum, default_value = "auto", global = true)]
  pub color: ColorMode,

  /// Terminal theme (dark or light background)
  #[arg(long, value_enum, default_value = "auto", global = true)]
  pub theme: ThemeMode,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
  /// Show the default every field resolves to, and where it came from
  List(ListCommand),
  /// Generate factories from a model descriptor document
  Generate(GenerateCommand),
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum GenerateMode {
  /// Write every factory into the single file given by --output
  Combined,
  /// Write one file per model into the directory given by --output
  PerClass,
}

#[derive(Args, Debug, Clone)]
pub struct DefaultsArgs {
  /// Path to the project configuration (default: ./factory_gen.toml when present)
  #[arg(long, value_name = "FILE")]
  pub config: Option<PathBuf>,

  /// Project-wide default for a type, overriding the configuration file.
  /// Repeatable, e.g. --type-default "String='lorem'" --type-default "List<int>=[1, 2]"
  #[arg(long = "type-default", value_name = "TYPE=EXPR")]
  pub type_defaults: Vec<String>,
}

#[derive(Args, Debug)]
pub struct GenerateCommand {
  /// Generation mode
  #[arg(short, long, value_enum, default_value = "combined")]
  pub mode: GenerateMode,

  /// Path to the model descriptor document (JSON, or TOML by extension)
  #[arg(short, long, value_name = "FILE")]
  pub input: PathBuf,

  /// Output file (combined) or directory (per-class)
  #[arg(short, long, value_name = "PATH")]
  pub output: Option<PathBuf>,

  #[command(flatten)]
  pub defaults: DefaultsArgs,

  /// Omit the generated-code banner and `part of` directive
  #[arg(long, default_value_t = false)]
  pub no_header: bool,

  /// Enable verbose output with every resolved default
  #[arg(short, long, default_value_t = false)]
  pub verbose: bool,

  /// Suppress non-essential output (errors only)
  #[arg(short, long, default_value_t = false)]
  pub quiet: bool,
}

#[derive(Args, Debug)]
pub struct ListCommand {
  /// Path to the model descriptor document (JSON, or TOML by extension)
  #[arg(short, long, value_name = "FILE")]
  pub input: PathBuf,

  #[command(flatten)]
  pub defaults: DefaultsArgs,
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_type_default_flag_is_repeatable_and_never_split() {
    let cli = Cli::try_parse_from([
      "factory-gen",
      "list",
      "-i",
      "models.json",
      "--type-default",
      "List<int>=[1, 2]",
      "--type-default",
      "String='lorem'",
    ])
    .unwrap();

    let Commands::List(command) = cli.command else {
      panic!("expected the list command");
    };
    assert_eq!(command.defaults.type_defaults, ["List<int>=[1, 2]", "String='lorem'"]);
  }
}
