use std::path::{Path, PathBuf};

use chrono::{Local, Timelike};
use crossterm::style::Stylize;
use factory_gen::generator::{
  errors::GenerationError,
  orchestrator::{GeneratedOutput, GenerationStats, Orchestrator},
};

use super::{load_descriptors, load_project_config};
use crate::ui::{Colors, DefaultsArgs, GenerateCommand, GenerateMode};

fn format_timestamp() -> String {
  let now = Local::now();
  format!("[{:02}:{:02}:{:02}]", now.hour(), now.minute(), now.second())
}

#[derive(Debug, Clone)]
pub struct GenerateConfig {
  pub mode: GenerateMode,
  pub input: PathBuf,
  pub output: PathBuf,
  pub defaults: DefaultsArgs,
  pub header: bool,
  pub verbose: bool,
  pub quiet: bool,
}

impl GenerateConfig {
  pub fn from_command(command: GenerateCommand) -> anyhow::Result<Self> {
    let GenerateCommand {
      mode,
      input,
      output,
      defaults,
      no_header,
      verbose,
      quiet,
    } = command;

    let output = match (mode, output) {
      (GenerateMode::PerClass, None) => PathBuf::from("."),
      (GenerateMode::Combined, None) => anyhow::bail!("Output path (-o) is required for combined mode"),
      (_, Some(path)) => path,
    };

    Ok(Self {
      mode,
      input,
      output,
      defaults,
      header: !no_header,
      verbose,
      quiet,
    })
  }

  async fn write_combined(&self, output: &GeneratedOutput) -> anyhow::Result<()> {
    if let Some(parent) = self.output.parent()
      && !parent.as_os_str().is_empty()
    {
      tokio::fs::create_dir_all(parent).await?;
    }
    tokio::fs::write(&self.output, output.combined()).await?;
    Ok(())
  }

  async fn write_per_class(&self, output: &GeneratedOutput) -> anyhow::Result<Vec<PathBuf>> {
    tokio::fs::create_dir_all(&self.output).await?;
    let mut written = vec![];
    for (file_name, contents) in output.per_class() {
      let path = self.output.join(file_name);
      tokio::fs::write(&path, contents).await?;
      written.push(path);
    }
    Ok(written)
  }
}

struct GenerateLogger<'a> {
  config: &'a GenerateConfig,
  colors: &'a Colors,
}

impl<'a> GenerateLogger<'a> {
  fn new(config: &'a GenerateConfig, colors: &'a Colors) -> Self {
    Self { config, colors }
  }

  fn info(&self, message: &str) {
    if !self.config.quiet {
      println!("{} {message}", format_timestamp().with(self.colors.timestamp()));
    }
  }

  fn stat(&self, label: &str, value: String) {
    if !self.config.quiet {
      println!(
        "            {:<25} {}",
        label.with(self.colors.label()),
        value.with(self.colors.value())
      );
    }
  }

  fn log_loading(&self) {
    self.info(
      &format!("Loading model descriptors from: {}", self.config.input.display())
        .with(self.colors.primary())
        .to_string(),
    );
  }

  fn log_generating(&self) {
    self.info(&"Generating factories...".with(self.colors.primary()).to_string());
  }

  fn print_statistics(&self, stats: &GenerationStats) {
    if self.config.quiet {
      return;
    }

    self.stat("Elements processed:", stats.elements_seen.to_string());
    self.stat("Factories generated:", stats.factories_generated.to_string());
    self.stat("Fields resolved:", stats.fields_resolved.to_string());
    for (source, count) in &stats.defaults_by_source {
      self.stat("", format!("{count} from {source}"));
    }
    if stats.failures > 0 {
      self.stat("Failures:", stats.failures.to_string());
    }
    if !stats.warnings.is_empty() {
      self.stat("Warnings:", stats.warnings.len().to_string());
    }
  }

  fn print_warnings(&self, stats: &GenerationStats) {
    if stats.warnings.is_empty() || self.config.quiet {
      return;
    }

    println!();
    for warning in &stats.warnings {
      println!(
        "{} {}",
        "Warning:".with(self.colors.accent()),
        warning.as_str().with(self.colors.primary())
      );
    }
  }

  fn print_resolved_defaults(&self, output: &GeneratedOutput) {
    if self.config.quiet || !self.config.verbose {
      return;
    }

    for factory in &output.factories {
      println!();
      println!("              {}", factory.def.name.as_str().with(self.colors.accent()));
      for param in &factory.def.params {
        println!(
          "                {:<20} {} {}",
          param.name.as_str().with(self.colors.label()),
          param.fallback.as_str().with(self.colors.value()),
          format!("({})", param.source).with(self.colors.timestamp())
        );
      }
    }
  }

  fn print_failures(&self, failures: &[GenerationError]) {
    if failures.is_empty() {
      return;
    }

    eprintln!();
    for failure in failures {
      eprintln!(
        "{} {}",
        "Error:".with(self.colors.accent()),
        failure.to_string().with(self.colors.primary())
      );
    }
  }

  fn log_writing(&self, path: &Path) {
    self.info(
      &format!("Writing to: {}", path.display())
        .with(self.colors.primary())
        .to_string(),
    );
  }

  fn log_success(&self) {
    if !self.config.quiet {
      let message = match self.config.mode {
        GenerateMode::Combined => "Successfully generated factories",
        GenerateMode::PerClass => "Successfully generated factory files",
      };
      println!();
      println!(
        "{} {}",
        format_timestamp().with(self.colors.timestamp()),
        message.with(self.colors.success())
      );
    }
  }
}

pub async fn generate_code(config: GenerateConfig, colors: &Colors) -> anyhow::Result<()> {
  let logger = GenerateLogger::new(&config, colors);

  logger.log_loading();
  let document = load_descriptors(&config.input).await?;
  let settings = load_project_config(&config.defaults).await?.into_settings(config.header);

  logger.log_generating();
  let orchestrator = Orchestrator::new(document, settings);
  let output = orchestrator.generate(&config.input.display().to_string());
  logger.print_statistics(&output.stats);
  logger.print_warnings(&output.stats);
  logger.print_resolved_defaults(&output);

  match config.mode {
    GenerateMode::Combined => {
      logger.log_writing(&config.output);
      config.write_combined(&output).await?;
    }
    GenerateMode::PerClass => {
      for path in config.write_per_class(&output).await? {
        logger.log_writing(&path);
      }
    }
  }

  logger.print_failures(&output.failures);
  if output.has_failures() {
    anyhow::bail!("{} element(s) could not be generated", output.failures.len());
  }

  logger.log_success();
  Ok(())
}
