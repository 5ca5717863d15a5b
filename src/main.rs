use std::io::{Read, Write};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing::{debug, info};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use bwt_rust::index::sa::PAR_SORT_THRESHOLD;
use bwt_rust::io::archive::{ArchiveMeta, BwtArchive};
use bwt_rust::io::fasta::{self, FastaReader};
use bwt_rust::util::alphabet::parse_terminator;
use bwt_rust::{boundary, Bwt, BwtError, BwtOpt};

#[derive(Parser, Debug)]
#[command(
    name = "bwt-rust",
    author,
    version,
    about = "Burrows-Wheeler transform and its inverse",
    arg_required_else_help = true
)]
struct Cli {
    /// Log at debug level (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args, Debug)]
struct InputArgs {
    /// Sequence given inline
    sequence: Option<String>,
    /// Read the sequence from a file ('-' for stdin); stdin is used when neither is given
    #[arg(short, long, conflicts_with = "sequence")]
    input: Option<String>,
    /// Input is FASTA; every record is processed on its own and written back as FASTA
    #[arg(long, conflicts_with = "json")]
    fasta: bool,
    /// Input is a JSON value; only a JSON string is accepted as a sequence
    #[arg(long)]
    json: bool,
    /// Terminator symbol, one of $&*-%#
    #[arg(short, long, default_value = "$")]
    terminator: String,
    /// Output path (stdout if omitted)
    #[arg(short, long)]
    out: Option<String>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Compute the Burrows-Wheeler transform
    Transform {
        #[command(flatten)]
        input: InputArgs,
        /// Also save the result as a binary archive
        #[arg(long, conflicts_with = "fasta")]
        save: Option<String>,
        #[arg(short = 'j', long = "threads", default_value_t = 0)]
        threads: usize,
        /// Sequence length from which suffix sorting runs in parallel
        #[arg(long = "par-threshold", default_value_t = PAR_SORT_THRESHOLD)]
        par_threshold: usize,
    },
    /// Invert a Burrows-Wheeler transform
    Inverse {
        #[command(flatten)]
        input: InputArgs,
        /// Read the transformed sequence and its terminator from an archive
        #[arg(long, conflicts_with_all = ["sequence", "input", "fasta", "json"])]
        archive: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));
    let layer = fmt::layer()
        .event_format(fmt::format().compact())
        .with_writer(std::io::stderr);
    tracing_subscriber::registry()
        .with(layer)
        .with(filter)
        .try_init()?;

    match cli.command {
        Commands::Transform {
            input,
            save,
            threads,
            par_threshold,
        } => {
            let opt = BwtOpt {
                terminator: parse_terminator(&input.terminator).map_err(report)?,
                threads,
                par_threshold,
            };
            run_transform(&input, save.as_deref(), opt)
        }
        Commands::Inverse { input, archive } => match archive {
            Some(path) => run_inverse_archive(&path, input.out.as_deref()),
            None => {
                let opt = BwtOpt {
                    terminator: parse_terminator(&input.terminator).map_err(report)?,
                    ..BwtOpt::default()
                };
                run_inverse(&input, opt)
            }
        },
    }
}

/// Library errors keep their kind and code visible in the CLI output.
fn report(e: BwtError) -> anyhow::Error {
    let head = format!("{:?} error (code {})", e.kind(), e.code());
    anyhow::Error::new(e).context(head)
}

fn open_output(out: Option<&str>) -> Result<Box<dyn Write>> {
    Ok(match out {
        Some(p) => {
            let file = std::fs::File::create(p)
                .with_context(|| format!("cannot create output '{}'", p))?;
            Box::new(std::io::BufWriter::new(file))
        }
        None => Box::new(std::io::BufWriter::new(std::io::stdout())),
    })
}

fn read_input(input: &InputArgs) -> Result<Vec<u8>> {
    if let Some(s) = &input.sequence {
        return Ok(s.clone().into_bytes());
    }
    match input.input.as_deref() {
        Some(path) if path != "-" => {
            std::fs::read(path)
                .with_context(|| format!("cannot read input '{}'", path))
        }
        _ => {
            let mut buf = Vec::new();
            std::io::stdin()
                .read_to_end(&mut buf)
                .context("cannot read stdin")?;
            Ok(buf)
        }
    }
}

fn source_name(input: &InputArgs) -> String {
    match (&input.sequence, input.input.as_deref()) {
        (Some(_), _) => "<inline>".to_string(),
        (None, Some(path)) if path != "-" => path.to_string(),
        _ => "<stdin>".to_string(),
    }
}

/// Plain-text or JSON input -> one sequence.
///
/// Trailing line endings of stdin or a file are not part of the sequence;
/// an inline SEQUENCE is taken verbatim.
fn read_text(input: &InputArgs) -> Result<String> {
    let bytes = read_input(input)?;
    if input.json {
        let value: serde_json::Value =
            serde_json::from_slice(&bytes).context("input is not valid JSON")?;
        return boundary::sequence_from_json(&value).map_err(report);
    }
    let mut text = boundary::sequence_from_bytes(bytes).map_err(report)?;
    if input.sequence.is_none() {
        while text.ends_with('\n') || text.ends_with('\r') {
            text.pop();
        }
    }
    Ok(text)
}

/// Applies `op` to every FASTA record, keeping headers.
/// Nothing is written unless every record succeeds.
fn run_fasta<F>(input: &InputArgs, mut op: F) -> Result<()>
where
    F: FnMut(&[u8]) -> bwt_rust::Result<Vec<u8>>,
{
    let bytes = read_input(input)?;
    let records = FastaReader::new(std::io::Cursor::new(bytes)).records()?;
    let results = records
        .iter()
        .map(|rec| {
            let seq = op(&rec.seq)
                .map_err(report)
                .with_context(|| format!("FASTA record '{}'", rec.id))?;
            Ok(rec.with_seq(seq))
        })
        .collect::<Result<Vec<_>>>()?;

    let mut out = open_output(input.out.as_deref())?;
    for rec in &results {
        fasta::write_record(&mut out, rec, fasta::LINE_WIDTH)?;
    }
    out.flush()?;
    info!(records = results.len(), "FASTA done");
    Ok(())
}

fn run_transform(input: &InputArgs, save: Option<&str>, opt: BwtOpt) -> Result<()> {
    if opt.threads > 0 {
        rayon::ThreadPoolBuilder::new()
            .num_threads(opt.threads)
            .build_global()?;
    }
    debug!(?opt, "transform");

    if input.fasta {
        let codec = Bwt::for_bytes(opt.terminator as u8).map_err(report)?;
        let codec = codec.with_par_threshold(opt.par_threshold);
        return run_fasta(input, |seq| codec.transform(seq));
    }

    let codec = opt.codec().map_err(report)?;
    let text = read_text(input)?;
    let transformed = codec.transform_str(&text).map_err(report)?;
    info!(len = text.chars().count(), "transformed");

    let mut out = open_output(input.out.as_deref())?;
    writeln!(out, "{}", transformed)?;
    out.flush()?;

    if let Some(path) = save {
        let mut archive = BwtArchive::new(opt.terminator, transformed);
        archive.set_meta(ArchiveMeta {
            source: Some(source_name(input)),
            build_args: Some(std::env::args().collect::<Vec<_>>().join(" ")),
            build_timestamp: Some(chrono::Utc::now().to_rfc3339()),
        });
        archive
            .save_to_file(path)
            .with_context(|| format!("cannot write archive to '{}'", path))?;
        info!(path, "archive saved");
    }
    Ok(())
}

fn run_inverse(input: &InputArgs, opt: BwtOpt) -> Result<()> {
    if input.fasta {
        let codec = Bwt::for_bytes(opt.terminator as u8).map_err(report)?;
        return run_fasta(input, |seq| codec.inverse(seq));
    }

    let codec = opt.codec().map_err(report)?;
    let text = read_text(input)?;
    let original = codec.inverse_str(&text).map_err(report)?;
    info!(len = original.chars().count(), "inverted");

    let mut out = open_output(input.out.as_deref())?;
    writeln!(out, "{}", original)?;
    out.flush()?;
    Ok(())
}

fn run_inverse_archive(path: &str, out_path: Option<&str>) -> Result<()> {
    let archive = BwtArchive::load_from_file(path)
        .with_context(|| format!("cannot read archive '{}'", path))?;
    debug!(terminator = %archive.terminator, meta = ?archive.meta, "archive loaded");
    let original = archive.restore()?;

    let mut out = open_output(out_path)?;
    writeln!(out, "{}", original)?;
    out.flush()?;
    Ok(())
}
