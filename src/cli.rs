//! Minimal CLI: operations → (envelopes | fragments), plus an XML pretty-printer
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{ArgAction, Args, Parser, Subcommand};
use colored::Colorize;
use indexmap::IndexMap;
use rayon::prelude::*;
use serde_json::Value;

use crate::error::SoapGenError;
use crate::format::{format_xml, FormatOptions};
use crate::generate::initial_xml;
use crate::operation::{envelope_for_operation, operations_from_value, Operation};
use crate::schema::FlatSchema;

// ————————————————————————————————————————————————————————————————————————————
// TYPES
// ————————————————————————————————————————————————————————————————————————————

/// generate placeholder SOAP requests from WSDL-derived operation descriptions
#[derive(Parser, Debug)]
#[command(name = "soapgen", version)]
pub struct CommandLineInterface {
    /// raise log level (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// print the initial request envelope of every operation
    Envelope(EnvelopeOut),
    /// treat each document as a flat schema and print its `tem:` fragment
    Fragment(FragmentOut),
    /// pretty-print XML files
    Format(FormatOut),
    /// print the decoded operation descriptors as JSON
    Operations(OperationsOut),
}

#[derive(Args, Debug, Clone)]
struct InputSettings {
    /// JQ pre-process filter for each document.
    #[arg(long)]
    jq_expr: Option<String>,

    /// One or more inputs. May be literal paths or quoted glob patterns
    #[arg(long, short, num_args = 1.., required = true)]
    input: Vec<String>,
}

#[derive(clap::Parser, Debug)]
struct EnvelopeOut {
    #[command(flatten)]
    input_settings: InputSettings,

    /// print a JSON object of operation name → envelope
    #[arg(long)]
    json: bool,

    /// output file (stdout if omitted)
    #[arg(short, long)]
    out: Option<PathBuf>,
}

#[derive(clap::Parser, Debug)]
struct OperationsOut {
    #[command(flatten)]
    input_settings: InputSettings,

    /// output .json file (stdout if omitted)
    #[arg(short, long)]
    out: Option<PathBuf>,
}

#[derive(clap::Parser, Debug)]
struct FragmentOut {
    #[command(flatten)]
    input_settings: InputSettings,

    /// spaces before top-level elements
    #[arg(long)]
    indent: Option<usize>,

    /// output file (stdout if omitted)
    #[arg(short, long)]
    out: Option<PathBuf>,
}

#[derive(clap::Parser, Debug)]
struct FormatOut {
    /// One or more XML files. May be literal paths or quoted glob patterns
    #[arg(long, short, num_args = 1.., required = true)]
    input: Vec<String>,

    /// one attribute per line, aligned after the tag name
    #[arg(long)]
    align_attributes: bool,

    /// keep simple element values on the tag line
    #[arg(long)]
    inline_values: bool,

    /// drop VsDebuggerCausalityData noise
    #[arg(long)]
    hide_causality: bool,

    /// output file (stdout if omitted)
    #[arg(short, long)]
    out: Option<PathBuf>,
}

// ————————————————————————————————————————————————————————————————————————————
// IMPLEMENTATION
// ————————————————————————————————————————————————————————————————————————————

impl InputSettings {
    fn load_process(
        &self,
        mut apply: impl FnMut(&Path, Value) -> anyhow::Result<()>,
    ) -> anyhow::Result<()> {
        let source_paths = resolve_file_path_patterns(&self.input)
            .context("failed to resolve input file paths")?;
        for source_path in source_paths {
            let json_value = read_json(&source_path)?;
            match self.jq_expr.as_ref() {
                None => apply(&source_path, json_value)?,
                Some(jq_expr) => {
                    let result = crate::jq_exec::run_jaq(jq_expr, &json_value).with_context(|| {
                        format!("failed to apply jq expression to {}", source_path.display())
                    })?;
                    for json_value in result {
                        apply(&source_path, json_value)?;
                    }
                }
            }
        }
        Ok(())
    }

    fn load_operations(&self) -> anyhow::Result<Vec<Operation>> {
        let mut operations = Vec::<Operation>::new();
        self.load_process(|path, value| {
            let found = operations_from_value(&value)
                .with_context(|| format!("in {}", path.display()))?;
            tracing::info!(path = %path.display(), operations = found.len(), "loaded operations");
            operations.extend(found);
            Ok(())
        })?;
        Ok(operations)
    }
}

impl FormatOut {
    fn options(&self) -> FormatOptions {
        FormatOptions {
            align_attributes: self.align_attributes,
            inline_element_values: self.inline_values,
            hide_causality_data: self.hide_causality,
        }
    }
}

impl CommandLineInterface {
    pub fn load() -> Self {
        Self::parse()
    }

    pub fn log_level(&self) -> tracing::Level {
        match self.verbose {
            0 => tracing::Level::WARN,
            1 => tracing::Level::INFO,
            2 => tracing::Level::DEBUG,
            _ => tracing::Level::TRACE,
        }
    }

    pub fn run(&self) -> anyhow::Result<()> {
        match &self.cmd {
            Command::Envelope(target) => {
                let operations = target.input_settings.load_operations()?;
                let envelopes: Vec<(String, String)> = operations
                    .par_iter()
                    .map(|operation| (operation.name.clone(), envelope_for_operation(operation)))
                    .collect();

                let output = if target.json {
                    let by_name: IndexMap<String, String> = envelopes.into_iter().collect();
                    serde_json::to_string_pretty(&by_name).map_err(|source| SoapGenError::Json {
                        origin: "envelope output".to_string(),
                        source,
                    })?
                } else {
                    envelopes
                        .into_iter()
                        .map(|(_, envelope)| envelope)
                        .collect::<Vec<_>>()
                        .join("\n\n")
                };
                write_output(target.out.as_deref(), &output)
            }
            Command::Fragment(target) => {
                let indent = target.indent.map(|n| " ".repeat(n));
                let mut fragments = Vec::<String>::new();
                target.input_settings.load_process(|path, value| {
                    let schema = FlatSchema::from_value(&value);
                    if schema.is_none() {
                        tracing::warn!(path = %path.display(), "document is not a flat schema object");
                    }
                    fragments.push(initial_xml(schema.as_ref(), indent.as_deref()));
                    Ok(())
                })?;
                write_output(target.out.as_deref(), &fragments.join("\n\n"))
            }
            Command::Format(target) => {
                let options = target.options();
                let source_paths = resolve_file_path_patterns(&target.input)
                    .context("failed to resolve input file paths")?;
                let mut documents = Vec::with_capacity(source_paths.len());
                for source_path in source_paths {
                    let source = read_text(&source_path)?;
                    documents.push(format_xml(&source, &options));
                }
                write_output(target.out.as_deref(), documents.join("\n").trim_end())
            }
            Command::Operations(target) => {
                let operations = target.input_settings.load_operations()?;
                let output = serde_json::to_string_pretty(&operations).map_err(|source| SoapGenError::Json {
                    origin: "operation output".to_string(),
                    source,
                })?;
                write_output(target.out.as_deref(), &output)
            }
        }
    }
}

// ————————————————————————————————————————————————————————————————————————————
// INTERNAL HELPERS
// ————————————————————————————————————————————————————————————————————————————

fn read_text(path: &Path) -> Result<String, SoapGenError> {
    std::fs::read_to_string(path).map_err(|source| SoapGenError::Read {
        path: path.to_path_buf(),
        source,
    })
}

fn read_json(path: &Path) -> Result<Value, SoapGenError> {
    let source = read_text(path)?;
    serde_json::from_str::<Value>(&source).map_err(|source| SoapGenError::Json {
        origin: path.display().to_string(),
        source,
    })
}

fn write_output(out: Option<&Path>, text: &str) -> anyhow::Result<()> {
    let Some(out) = out else {
        println!("{text}");
        return Ok(());
    };
    let write_error = |source| SoapGenError::Write {
        path: out.to_path_buf(),
        source,
    };
    if let Some(parent) = out.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(write_error)?;
    }
    std::fs::write(out, text).map_err(write_error)?;
    eprintln!("{} {}", "wrote".green().bold(), out.display());
    Ok(())
}

fn resolve_file_path_patterns<I>(patterns: I) -> Result<Vec<PathBuf>, SoapGenError>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    fn has_glob_chars(s: &str) -> bool {
        s.bytes().any(|b| matches!(b, b'*' | b'?' | b'[' | b'{'))
    }

    let mut out = Vec::<PathBuf>::new();

    for raw in patterns {
        let pattern = raw.as_ref();

        if has_glob_chars(pattern) {
            let before = out.len();
            for entry in glob::glob(pattern)? {
                out.push(entry?);
            }
            if out.len() == before {
                return Err(SoapGenError::NoMatches(pattern.to_string()));
            }
        } else {
            out.push(PathBuf::from(pattern));
        }
    }

    Ok(out)
}
