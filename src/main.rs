use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand, ValueEnum};
use hanzi_strokes::eval::{evaluate, Corpus, MatchMode};
use hanzi_strokes::glyph::GlyphSource;
use hanzi_strokes::{
    classify_character, FoldClassifier, GeometricClassifier, LegacyClassifier, Orientation,
    StrokeClassifier, StrokeTable, TableClassifier,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "hanzi-strokes", about = "Stroke medians to calligraphic stroke names")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Classify the strokes of one or more characters
    Classify {
        #[command(flatten)]
        common: Common,

        /// Characters to classify
        chars: String,
    },
    /// Run a corpus and report accuracy
    Eval {
        #[command(flatten)]
        common: Common,

        /// Corpus JSON (`[{"char": .., "strokes": [..]}]`); built-in 48 characters if omitted
        #[arg(long)]
        corpus: Option<PathBuf>,

        /// Compare stroke families instead of exact names
        #[arg(long)]
        relaxed: bool,
    },
}

#[derive(Args)]
struct Common {
    /// Directory of hanzi-writer `<char>.json` files
    #[arg(short, long)]
    data: PathBuf,

    /// Classification strategy
    #[arg(short, long, value_enum, default_value = "geometric")]
    strategy: Strategy,

    /// Stroke-name table JSON for the table strategy
    #[arg(long)]
    table: Option<PathBuf>,

    /// Medians use a y-down coordinate system
    #[arg(long)]
    y_down: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum Strategy {
    Geometric,
    Fold,
    Table,
    Legacy,
}

impl Common {
    fn classifier(&self) -> Result<Box<dyn StrokeClassifier>, Box<dyn std::error::Error>> {
        Ok(match self.strategy {
            Strategy::Geometric => Box::new(GeometricClassifier::default()),
            Strategy::Fold => Box::new(FoldClassifier::default()),
            Strategy::Legacy => Box::new(LegacyClassifier::new()),
            Strategy::Table => {
                let table = match &self.table {
                    Some(path) => StrokeTable::load(path)?,
                    None => {
                        tracing::warn!("table strategy without --table; every stroke reads as 点");
                        StrokeTable::new()
                    }
                };
                Box::new(TableClassifier::new(table))
            }
        })
    }

    fn source(&self) -> GlyphSource {
        let orientation = if self.y_down { Orientation::YDown } else { Orientation::YUp };
        GlyphSource::new(&self.data).with_orientation(orientation)
    }
}

fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Classify { common, chars } => {
            let classifier = common.classifier()?;
            let source = common.source();
            eprintln!();
            eprintln!("  hanzi-strokes \u{00b7} {} classifier", classifier.name());
            eprintln!();
            for hanzi in chars.chars().filter(|c| !c.is_whitespace()) {
                let paths = source.load(hanzi)?;
                let labels = classify_character(classifier.as_ref(), hanzi, &paths);
                let names: Vec<&str> = labels.iter().map(|l| l.as_str()).collect();
                println!("{}  [{}]", hanzi, names.join(", "));
            }
            eprintln!();
            Ok(ExitCode::SUCCESS)
        }
        Command::Eval { common, corpus, relaxed } => {
            let classifier = common.classifier()?;
            let corpus = match &corpus {
                Some(path) => Corpus::load(path)?,
                None => Corpus::standard(),
            };
            let mode = if relaxed { MatchMode::Relaxed } else { MatchMode::Strict };
            let report = evaluate(classifier.as_ref(), &corpus, &common.source(), mode)?;
            eprint!("{}", report);
            eprintln!();
            Ok(if report.all_passed() { ExitCode::SUCCESS } else { ExitCode::FAILURE })
        }
    }
}
