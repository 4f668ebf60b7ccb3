//! Longhand CLI
//!
//! Expand CSS shorthands into longhands and collapse them back.
//!
//! - longhand expand background 'url(a.png) no-repeat, url(b.png)'
//! - longhand collapse flex flex-grow=0 flex-shrink=0 flex-basis=auto
//! - longhand compact margin-top=1px margin-right=1px margin-bottom=1px margin-left=1px

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use indexmap::IndexMap;
use longhand_common::warning::warn_once;
use longhand_css::{Longhands, ShorthandError, ShorthandKind, split_important};
use owo_colors::OwoColorize;
use strum::IntoEnumIterator;

/// Longhand: CSS shorthand expansion and collapse
#[derive(Parser, Debug)]
#[command(name = "longhand")]
#[command(author, version, about, long_about = None)]
#[command(after_help = r#"EXAMPLES:
    # Expand a shorthand into every longhand
    longhand expand background 'url(a.png) center / cover no-repeat'

    # !important is carried to each longhand
    longhand expand margin '1px 2px !important'

    # Collapse a complete longhand set
    longhand collapse border-radius border-top-left-radius=4px \
        border-top-right-radius=4px border-bottom-right-radius=0 border-bottom-left-radius=0

    # Replace every complete group in a declaration block
    longhand compact color=red padding-top=1px padding-right=2px \
        padding-bottom=1px padding-left=2px

    # Show a family's longhands and initial values
    longhand meta animation --json
"#)]
struct Cli {
    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Expand a shorthand value into its longhands
    Expand {
        /// Shorthand property name
        shorthand: String,
        /// Declaration value; several arguments are joined with spaces
        #[arg(required = true, num_args = 1.., allow_hyphen_values = true)]
        value: Vec<String>,
        /// Print a JSON object instead of declarations
        #[arg(long)]
        json: bool,
    },
    /// Collapse a complete longhand set into its shorthand
    Collapse {
        /// Shorthand property name
        shorthand: String,
        /// Longhands as name=value
        #[arg(value_name = "NAME=VALUE", required = true)]
        longhands: Vec<String>,
        /// Print a JSON object instead of a declaration
        #[arg(long)]
        json: bool,
    },
    /// Replace every complete, collapsible longhand group with its shorthand
    Compact {
        /// Declarations as name=value
        #[arg(value_name = "NAME=VALUE", required = true)]
        declarations: Vec<String>,
        /// Print a JSON object instead of declarations
        #[arg(long)]
        json: bool,
    },
    /// Print a shorthand's descriptor
    Meta {
        /// Shorthand property name
        shorthand: String,
        /// Print JSON (the default is a table)
        #[arg(long)]
        json: bool,
    },
    /// List every supported shorthand
    List {
        /// Print a JSON object of shorthand to longhands
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let out = Output { color: !cli.no_color };

    match cli.command {
        Command::Expand {
            shorthand,
            value,
            json,
        } => expand(&out, &shorthand, &value.join(" "), json),
        Command::Collapse {
            shorthand,
            longhands,
            json,
        } => collapse(&out, &shorthand, &longhands, json),
        Command::Compact { declarations, json } => {
            let block = parse_declarations(&declarations);
            let compacted = longhand_css::compact(&block);
            if json {
                println!("{}", serde_json::to_string_pretty(&compacted)?);
            } else {
                for (name, value) in &compacted {
                    let (value, important) = split_important(value);
                    out.declaration(name, value, important);
                }
            }
            Ok(())
        }
        Command::Meta { shorthand, json } => {
            let meta = longhand_css::meta(&shorthand)
                .with_context(|| format!("no descriptor for '{shorthand}'"))?;
            if json {
                println!("{}", serde_json::to_string_pretty(meta)?);
            } else {
                println!("{}", out.name(meta.shorthand));
                for (index, longhand) in meta.longhands.iter().enumerate() {
                    match meta.default_at(index) {
                        "" => println!("  {longhand}"),
                        initial => println!("  {longhand} {}", out.dim(&format!("(initial: {initial})"))),
                    }
                }
            }
            Ok(())
        }
        Command::List { json } => {
            if json {
                let families: IndexMap<&str, &[&str]> = ShorthandKind::iter()
                    .map(|kind| (kind.meta().shorthand, kind.meta().longhands))
                    .collect();
                println!("{}", serde_json::to_string_pretty(&families)?);
            } else {
                for kind in ShorthandKind::iter() {
                    let meta = kind.meta();
                    println!("{} {}", out.name(meta.shorthand), out.dim(&meta.longhands.join(", ")));
                }
            }
            Ok(())
        }
    }
}

/// Expand `value`, carrying `!important` to every longhand
fn expand(out: &Output, shorthand: &str, value: &str, json: bool) -> Result<()> {
    let (value, important) = split_important(value);
    let longhands = longhand_css::expand(shorthand, value)
        .map_err(|err| rejected(err, &format!("cannot expand {shorthand}: {value}")))?;

    if json {
        let longhands: Longhands = longhands
            .into_iter()
            .map(|(name, value)| {
                let value = if important {
                    format!("{value} !important")
                } else {
                    value
                };
                (name, value)
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&longhands)?);
    } else {
        for (name, value) in &longhands {
            out.declaration(name, value, important);
        }
    }
    Ok(())
}

/// Collapse `name=value` arguments; `!important` must be on all or none
fn collapse(out: &Output, shorthand: &str, arguments: &[String], json: bool) -> Result<()> {
    let block = parse_declarations(arguments);
    let mut longhands = Longhands::with_capacity(block.len());
    let mut flags = Vec::with_capacity(block.len());
    for (name, value) in &block {
        let (value, important) = split_important(value);
        flags.push(important);
        let _ = longhands.insert(name.clone(), value.to_string());
    }
    let important = flags.first().copied().unwrap_or(false);
    if flags.iter().any(|&flag| flag != important) {
        bail!("!important is set on some longhands of {shorthand} but not all");
    }

    let value = longhand_css::collapse(shorthand, &longhands)
        .map_err(|err| rejected(err, &format!("cannot collapse into {shorthand}")))?;

    if json {
        let value = if important {
            format!("{value} !important")
        } else {
            value
        };
        let mut object = IndexMap::new();
        let _ = object.insert(shorthand.to_ascii_lowercase(), value);
        println!("{}", serde_json::to_string_pretty(&object)?);
    } else {
        out.declaration(&shorthand.to_ascii_lowercase(), &value, important);
    }
    Ok(())
}

/// Note the kind of a rejection on stderr (once per kind) and wrap the error
fn rejected(err: ShorthandError, context: &str) -> anyhow::Error {
    let _ = warn_once("CSS", &format!("declaration rejected: {}", err.kind()));
    anyhow::Error::new(err).context(context.to_string())
}

/// Parse `name=value` arguments in order. A malformed argument is reported
/// once and skipped.
fn parse_declarations(arguments: &[String]) -> Longhands {
    let mut block = Longhands::with_capacity(arguments.len());
    for argument in arguments {
        let Some((name, value)) = argument.split_once('=') else {
            let _ = warn_once("CLI", &format!("ignoring '{argument}': expected name=value"));
            continue;
        };
        let name = name.trim();
        if name.is_empty() {
            let _ = warn_once("CLI", &format!("ignoring '{argument}': empty property name"));
            continue;
        }
        let _ = block.insert(name.to_ascii_lowercase(), value.trim().to_string());
    }
    block
}

/// Terminal output, optionally colored
struct Output {
    color: bool,
}

impl Output {
    fn name(&self, text: &str) -> String {
        if self.color {
            text.cyan().to_string()
        } else {
            text.to_string()
        }
    }

    fn dim(&self, text: &str) -> String {
        if self.color {
            text.dimmed().to_string()
        } else {
            text.to_string()
        }
    }

    fn declaration(&self, name: &str, value: &str, important: bool) {
        let flag = match (important, self.color) {
            (false, _) => String::new(),
            (true, true) => format!(" {}", "!important".yellow()),
            (true, false) => " !important".to_string(),
        };
        println!("{}: {value}{flag};", self.name(name));
    }
}
