//! CLI for the `chromatic` crate.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use serde_json::Value;
use tracing_subscriber::EnvFilter;

use chromatic::{Arg, Chromatic, ChromaticOptions, Console, StyleTable, Stylizer};

/// Paints text with true-color ANSI styles and writes styled log lines.
#[derive(Debug, Parser)]
#[command(name = "chromatic", version)]
struct Args {
    /// JSON or YAML configuration file with `styles` and `console` sections.
    #[arg(long, short = 'c', global = true, value_name = "FILE")]
    config: Option<PathBuf>,
    /// Includes every known color, not only the base set.
    #[arg(long, global = true)]
    complete: bool,
    /// Includes one more known color; may be repeated.
    #[arg(long, short = 'i', global = true, value_name = "NAME")]
    include: Vec<String>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Paints text with a dotted style chain, e.g. `bright.underline.red`.
    Paint {
        style: String,
        #[arg(required = true)]
        text: Vec<String>,
    },
    /// Writes a line through a console level, e.g. `error` or `warn`.
    Log {
        level: String,
        /// Reads each argument as JSON; non-string values pass through unstyled.
        #[arg(long)]
        json: bool,
        #[arg(required = true)]
        text: Vec<String>,
    },
    /// Lists the available styles, each painted with itself.
    List {
        /// Lists modifiers, foregrounds and backgrounds apart.
        #[arg(long)]
        grouped: bool,
        /// Shows the raw escape templates instead of painting names.
        #[arg(long)]
        raw: bool,
    },
    /// Shows every console level and a few compositions.
    Demo,
}

impl Args {
    fn options(&self) -> anyhow::Result<ChromaticOptions> {
        let mut options = match &self.config {
            Some(path) => load_options(path)?,
            None => ChromaticOptions::default(),
        };

        if self.complete {
            options.styles.complete = true;
        }
        options.styles.include.extend(self.include.iter().cloned());
        Ok(options)
    }

    fn run(self) -> anyhow::Result<()> {
        let options = self.options()?;
        let chromatic = Chromatic::with_options(options).context("cannot build styles")?;

        match self.command {
            Command::Paint { style, text } => {
                let stylizer = chromatic
                    .table()
                    .resolve(&style)
                    .with_context(|| format!("cannot resolve style `{}`", style))?;
                let args: Vec<Arg<'_>> = text.iter().map(Arg::from).collect();
                println!("{}", stylizer.apply(&args));
            }
            Command::Log { level, json, text } => {
                let values = if json {
                    text.iter()
                        .map(|item| {
                            serde_json::from_str(item)
                                .with_context(|| format!("`{}` is not valid JSON", item))
                        })
                        .collect::<anyhow::Result<Vec<Value>>>()?
                } else {
                    text.into_iter().map(Value::String).collect()
                };

                let args: Vec<Arg<'_>> = values.iter().map(json_arg).collect();
                chromatic
                    .console()
                    .emit(&level, &args)
                    .context("cannot write log line")?;
            }
            Command::List { grouped, raw } => list(chromatic.table(), grouped, raw),
            Command::Demo => demo(chromatic.console(), chromatic.table())?,
        }
        Ok(())
    }
}

fn load_options(path: &Path) -> anyhow::Result<ChromaticOptions> {
    let source = fs::read_to_string(path)
        .with_context(|| format!("cannot read configuration `{}`", path.display()))?;

    let is_yaml = matches!(
        path.extension().and_then(|ext| ext.to_str()),
        Some("yaml" | "yml")
    );
    let options = if is_yaml {
        ChromaticOptions::from_yaml_str(&source)
    } else {
        ChromaticOptions::from_json_str(&source)
    };

    tracing::debug!(path = %path.display(), yaml = is_yaml, "loaded configuration");
    options.with_context(|| format!("invalid configuration `{}`", path.display()))
}

fn json_arg(value: &Value) -> Arg<'_> {
    match value {
        Value::String(text) => Arg::from(text),
        other => Arg::value(other),
    }
}

fn list(table: &StyleTable, grouped: bool, raw: bool) {
    for (name, template) in table.create_set(!grouped).templates() {
        if raw {
            println!("{:<24} {:?}", name, template.as_str());
        } else {
            println!("{}", Stylizer::new(template.clone()).paint(&name));
        }
    }
}

fn demo(console: &Console, table: &StyleTable) -> anyhow::Result<()> {
    for method in console.methods() {
        let sample = format!("{} message", method.name());
        method
            .call(&[Arg::from(&sample)])
            .with_context(|| format!("cannot write `{}` level", method.name()))?;
    }

    for chain in ["bright.underline.yellow", "bgblue.white", "dim.cyan"] {
        let stylizer = table.resolve(chain)?;
        println!("{}", stylizer.paint(chain));
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    Args::parse().run()
}
