use anyhow::Context;
use clap::Parser;
use mdstrip::{CodeFencePolicy, Pipeline, PresetKind, Settings};
use std::io::Read;
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Parser, Debug)]
#[command(
    name = "mdstrip",
    version,
    author,
    about = "Strip Markdown, XML tags and code fences from text",
    long_about = "Strip Markdown formatting, XML/component tags and fenced code blocks from \
    documentation, LLM logs, or mixed Markdown/XML content, and report the character and \
    token reduction.\n\n\
    USAGE EXAMPLES:\n  \
      # Clean a file to plain text (default preset)\n  \
      mdstrip notes.md\n\n  \
      # Clean stdin, keep the code inside fences\n  \
      cat transcript.txt | mdstrip --fences preserve\n\n  \
      # Strip only XML tags, keep standard Markdown\n  \
      mdstrip --preset markdown-only README.md\n\n  \
      # Custom combination with a reduction summary\n  \
      mdstrip --keep-code --stats notes.md"
)]
struct Cli {
    /// Input file ("-" or omitted reads stdin)
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// Output file (omitted writes stdout)
    #[arg(short, long, value_name = "PATH")]
    out: Option<PathBuf>,

    /// Cleaning preset; individual --keep-* flags refine it
    #[arg(short, long, value_enum, default_value = "plain-text")]
    preset: CliPreset,

    /// Keep fenced code blocks untouched
    #[arg(long)]
    keep_code: bool,

    /// Keep <...> tags untouched
    #[arg(long)]
    keep_tags: bool,

    /// Keep Markdown formatting untouched
    #[arg(long)]
    keep_markdown: bool,

    /// How fenced code blocks are stripped
    #[arg(long, value_enum, default_value = "remove")]
    fences: CliFencePolicy,

    /// Print a reduction summary to stderr
    #[arg(long)]
    stats: bool,

    /// Emit the full result record as JSON instead of plain text
    #[arg(long)]
    json: bool,

    /// Verbose output
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum CliPreset {
    /// Strip code blocks, tags and Markdown formatting
    PlainText,
    /// Strip only tags, keep standard Markdown
    MarkdownOnly,
}

impl From<CliPreset> for PresetKind {
    fn from(p: CliPreset) -> Self {
        match p {
            CliPreset::PlainText => Self::PlainText,
            CliPreset::MarkdownOnly => Self::MarkdownOnly,
        }
    }
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum CliFencePolicy {
    /// Strip only the fence markers, keep the code
    Preserve,
    /// Strip the fences and the code between them
    Remove,
}

impl From<CliFencePolicy> for CodeFencePolicy {
    fn from(p: CliFencePolicy) -> Self {
        match p {
            CliFencePolicy::Preserve => Self::Preserve,
            CliFencePolicy::Remove => Self::Remove,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_tracing(cli.verbose)?;

    let text = read_input(cli.input.as_deref())?;
    let settings = build_settings(&cli);

    let pipeline = Pipeline::new(settings).context("Failed to initialize pipeline")?;
    let result = pipeline.process(&text);

    let output = if cli.json {
        serde_json::to_string_pretty(&result).context("Failed to serialize result")?
    } else {
        result.cleaned_text.clone()
    };

    write_output(cli.out.as_deref(), &output)?;

    if cli.stats {
        result.print_summary();
    }

    Ok(())
}

/// Starts from the preset and applies the individual flag overrides.
fn build_settings(cli: &Cli) -> Settings {
    let preset: PresetKind = cli.preset.into();
    let base = preset.settings();

    Settings::builder()
        .strip_code(base.strip_code && !cli.keep_code)
        .fence_policy(cli.fences.into())
        .strip_tags(base.strip_tags && !cli.keep_tags)
        .strip_markdown(base.strip_markdown && !cli.keep_markdown)
        .build()
}

fn read_input(path: Option<&std::path::Path>) -> anyhow::Result<String> {
    match path {
        Some(p) if p.as_os_str() != "-" => std::fs::read_to_string(p)
            .with_context(|| format!("Failed to read input file '{}'", p.display())),
        _ => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read stdin")?;
            Ok(buffer)
        }
    }
}

fn write_output(path: Option<&std::path::Path>, output: &str) -> anyhow::Result<()> {
    match path {
        Some(p) => std::fs::write(p, output)
            .with_context(|| format!("Failed to write output file '{}'", p.display())),
        None => {
            println!("{output}");
            Ok(())
        }
    }
}

fn setup_tracing(verbosity: u8) -> anyhow::Result<()> {
    let filter = match verbosity {
        0 => EnvFilter::new("mdstrip=warn"),
        1 => EnvFilter::new("mdstrip=info"),
        2 => EnvFilter::new("mdstrip=debug"),
        _ => EnvFilter::new("mdstrip=trace"),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .init();

    Ok(())
}
