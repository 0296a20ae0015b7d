//! typh CLI (made by FontLab https://www.fontlab.com/)

use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{ArgAction, Args, Parser, Subcommand, ValueHint};
use regex::Regex;
use serde_json::Value;

use typh_core::catalog::{parse_catalog, render_module, sort_families, CatalogFamily};
use typh_core::harvest::DEFAULT_MAX_DEPTH;
use typh_core::select::{select_first_string, select_font_family_bounded};

/// CLI entrypoint for typh.
#[derive(Debug, Parser)]
#[command(
    name = "typh",
    about = "Best-effort typography value harvesting (made by FontLab https://www.fontlab.com/)"
)]
pub struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// One-shot build of the generated font catalog module
    Catalog(CatalogArgs),
    /// Extract a font family name from a JSON value
    Family(FamilyArgs),
    /// Extract a scalar typography field from a JSON value
    Scalar(ScalarArgs),
}

#[derive(Debug, Args)]
struct CatalogArgs {
    /// Source catalog JSON (must carry a top-level "items" list)
    #[arg(value_hint = ValueHint::FilePath)]
    source: PathBuf,

    /// Where to write the generated module
    #[arg(short = 'o', long = "out", value_hint = ValueHint::FilePath)]
    out: PathBuf,

    /// Keep only families whose name matches this regex
    #[arg(long = "filter", value_hint = ValueHint::Other)]
    filter: Option<String>,
}

#[derive(Debug, Args)]
struct FamilyArgs {
    /// JSON file to read, or `-`/nothing for STDIN
    #[arg(value_hint = ValueHint::FilePath)]
    input: Option<PathBuf>,

    /// Recursion ceiling for the deep harvest
    #[arg(long = "max-depth", default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: usize,

    /// Emit a JSON object instead of a bare string
    #[arg(long = "json", action = ArgAction::SetTrue)]
    json: bool,
}

#[derive(Debug, Args)]
struct ScalarArgs {
    /// JSON file to read, or `-`/nothing for STDIN
    #[arg(value_hint = ValueHint::FilePath)]
    input: Option<PathBuf>,

    /// Emit a JSON object instead of a bare string
    #[arg(long = "json", action = ArgAction::SetTrue)]
    json: bool,
}

/// Parse CLI args and execute the selected command.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Catalog(args) => run_catalog(args),
        Command::Family(args) => run_family(args),
        Command::Scalar(args) => run_scalar(args),
    }
}

fn run_catalog(args: CatalogArgs) -> Result<()> {
    let json = fs::read_to_string(&args.source)
        .with_context(|| format!("reading source catalog {}", args.source.display()))?;

    let mut families = parse_catalog(&json)?;

    if let Some(pattern) = &args.filter {
        let re =
            Regex::new(pattern).with_context(|| format!("invalid filter regex: {pattern}"))?;
        families.retain(|entry| re.is_match(&entry.family));
    }

    sort_families(&mut families);
    write_catalog_module(&families, &args.out)?;

    println!("wrote {} families to {}", families.len(), args.out.display());
    Ok(())
}

fn write_catalog_module(families: &[CatalogFamily], out: &Path) -> Result<()> {
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating output directory {}", parent.display()))?;
        }
    }

    fs::write(out, render_module(families))
        .with_context(|| format!("writing generated module {}", out.display()))?;
    Ok(())
}

fn run_family(args: FamilyArgs) -> Result<()> {
    let stdin = io::stdin();
    let value = read_value(args.input.as_deref(), stdin.lock())?;
    let family = select_font_family_bounded(&value, args.max_depth);

    let stdout = io::stdout();
    write_extracted("fontFamily", family.as_deref(), args.json, stdout.lock())
}

fn run_scalar(args: ScalarArgs) -> Result<()> {
    let stdin = io::stdin();
    let value = read_value(args.input.as_deref(), stdin.lock())?;
    let scalar = select_first_string(&value);

    let stdout = io::stdout();
    write_extracted("value", scalar.as_deref(), args.json, stdout.lock())
}

fn read_value(input: Option<&Path>, mut stdin: impl Read) -> Result<Value> {
    let raw = match input {
        Some(path) if path != Path::new("-") => fs::read_to_string(path)
            .with_context(|| format!("reading input {}", path.display()))?,
        _ => {
            let mut buf = String::new();
            stdin.read_to_string(&mut buf).context("reading STDIN")?;
            buf
        }
    };

    serde_json::from_str(&raw).context("parsing input JSON")
}

fn write_extracted(
    field: &str,
    extracted: Option<&str>,
    as_json: bool,
    mut w: impl Write,
) -> Result<()> {
    if as_json {
        let mut wrapped = serde_json::Map::new();
        wrapped.insert(
            field.to_string(),
            extracted.map_or(Value::Null, |text| Value::String(text.to_string())),
        );
        writeln!(w, "{}", Value::Object(wrapped))?;
    } else if let Some(text) = extracted {
        writeln!(w, "{text}")?;
    }
    // "Not found" is an answer: plain mode prints nothing and exits 0.
    Ok(())
}
