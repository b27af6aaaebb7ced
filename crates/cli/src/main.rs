//! CLI tool for turning outline text into slide decks.

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use slides_core::{parse_slides_response, to_markdown, OutlineParser, SlideDeck};
use std::fs::File;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

/// Convert outline text (headings, bullets, code fences) into slides.
#[derive(Parser, Debug)]
#[command(name = "outline-slides")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Input outline file(s); reads stdin when omitted or "-"
    input: Vec<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Json)]
    format: OutputFormat,

    /// Output directory (default: same as input file)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print output to stdout instead of writing to file
    #[arg(short, long)]
    print: bool,

    /// Treat input as a language-model JSON response instead of outline text
    #[arg(long)]
    from_response: bool,

    /// Deck title used when the outline has no "# " heading
    #[arg(long, conflicts_with = "from_response")]
    default_title: Option<String>,

    /// Title for slides that have content but no heading
    #[arg(long, conflicts_with = "from_response")]
    untitled_title: Option<String>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Slide deck as pretty-printed JSON
    Json,
    /// Outline text, re-serialized from the deck
    Markdown,
    /// PowerPoint package
    Pptx,
}

impl OutputFormat {
    fn extension(self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Markdown => "md",
            OutputFormat::Pptx => "pptx",
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    if args.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    }

    if args.print && args.format == OutputFormat::Pptx {
        anyhow::bail!("PPTX output is binary and cannot be printed; use --output instead");
    }

    let parser = build_parser(&args);
    let stdin_marker = PathBuf::from("-");
    let inputs: Vec<&PathBuf> = if args.input.is_empty() {
        vec![&stdin_marker]
    } else {
        args.input.iter().collect()
    };

    for input_path in inputs {
        if args.verbose {
            eprintln!("Processing: {}", input_path.display());
        }

        match process_input(input_path, &args, &parser) {
            Ok(output) => {
                if args.print || (is_stdin(input_path) && args.output.is_none()) {
                    std::io::stdout().write_all(&output)?;
                } else {
                    let output_path = get_output_path(input_path, args.output.as_ref(), args.format)?;
                    write_output(&output_path, &output)?;
                    if args.verbose {
                        eprintln!("Written to: {}", output_path.display());
                    }
                }
            }
            Err(e) => {
                eprintln!("Error processing {}: {:#}", input_path.display(), e);
            }
        }
    }

    Ok(())
}

fn build_parser(args: &Args) -> OutlineParser {
    let mut parser = OutlineParser::new();
    if let Some(title) = &args.default_title {
        parser = parser.with_default_title(title.clone());
    }
    if let Some(title) = &args.untitled_title {
        parser = parser.with_untitled_slide_title(title.clone());
    }
    parser
}

fn is_stdin(path: &Path) -> bool {
    path.as_os_str() == "-"
}

/// Read, convert and render a single input.
fn process_input(input_path: &Path, args: &Args, parser: &OutlineParser) -> Result<Vec<u8>> {
    let text = read_input(input_path)?;

    let deck = if args.from_response {
        log::debug!("Decoding as model response");
        parse_slides_response(&text).context("Input is not a slides response")?
    } else {
        log::debug!("Parsing as outline text");
        parser.parse(&text)
    };

    if args.verbose {
        eprintln!("  Built {} slides titled {:?}", deck.len(), deck.title);
    }

    render_output(&deck, args.format)
}

fn read_input(input_path: &Path) -> Result<String> {
    let mut text = String::new();
    if is_stdin(input_path) {
        std::io::stdin()
            .read_to_string(&mut text)
            .context("Failed to read stdin")?;
    } else {
        File::open(input_path)
            .with_context(|| format!("Failed to open {}", input_path.display()))?
            .read_to_string(&mut text)
            .with_context(|| format!("Failed to read {}", input_path.display()))?;
    }
    Ok(text)
}

/// Render a deck in the requested format.
fn render_output(deck: &SlideDeck, format: OutputFormat) -> Result<Vec<u8>> {
    let bytes = match format {
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(deck)?;
            json.push('\n');
            json.into_bytes()
        }
        OutputFormat::Markdown => to_markdown(deck).into_bytes(),
        OutputFormat::Pptx => slides_pptx::write_deck(deck).context("Failed to write PPTX")?,
    };
    Ok(bytes)
}

/// Determine the output path for a processed input.
fn get_output_path(
    input_path: &Path,
    output_dir: Option<&PathBuf>,
    format: OutputFormat,
) -> Result<PathBuf> {
    let stem = if is_stdin(input_path) {
        "deck"
    } else {
        input_path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("output")
    };

    let output_filename = format!("{}.{}", stem, format.extension());

    let output_path = match output_dir {
        Some(dir) => {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create output directory: {}", dir.display()))?;
            dir.join(output_filename)
        }
        None => match input_path.parent() {
            Some(parent) => parent.join(output_filename),
            None => PathBuf::from(output_filename),
        },
    };

    Ok(output_path)
}

/// Write output to a file.
fn write_output(path: &Path, content: &[u8]) -> Result<()> {
    let mut file =
        File::create(path).with_context(|| format!("Failed to create {}", path.display()))?;

    file.write_all(content)
        .with_context(|| format!("Failed to write to {}", path.display()))?;

    Ok(())
}
