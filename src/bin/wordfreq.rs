use clap::Parser;
use log::info;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use wordfreq::report::{self, Layout};
use wordfreq::WordFreqError;

/// Show the most common words of a text file
#[derive(Parser, Debug)]
#[command(name = "wordfreq", about, long_about = None, disable_version_flag = true)]
struct Args {
    /// Text file to analyze
    file: PathBuf,

    /// Ignore words shorter than N characters
    #[arg(default_value_t = 1, allow_negative_numbers = true)]
    min_length: i64,

    /// Show top K words
    #[arg(default_value_t = 10, allow_negative_numbers = true)]
    k: i64,

    /// Print only the first and last five words of long lists
    #[arg(long)]
    elide: bool,
}

// Zero and below mean "no filter" for the length and "nothing" for k.
fn non_negative(n: i64) -> usize {
    usize::try_from(n.max(0)).unwrap_or(usize::MAX)
}

fn run(args: &Args) -> Result<(), WordFreqError> {
    let start = Instant::now();

    let min_length = non_negative(args.min_length);
    let k = non_negative(args.k);
    let layout = if args.elide {
        Layout::Elided
    } else {
        Layout::Full
    };

    let text = wordfreq::read_document(&args.file)?;
    let top = wordfreq::analyze(&text, min_length, k);
    drop(text);

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    report::write_entries(&mut out, &top, layout)?;

    let elapsed = start.elapsed();
    info!("finished {} in {:?}", args.file.display(), elapsed);
    report::write_elapsed(&mut out, elapsed, k)?;
    out.flush()?;
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("wordfreq: {}", e);
            ExitCode::FAILURE
        }
    }
}
