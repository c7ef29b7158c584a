use std::fs::File;
use std::io::{self, BufReader, IsTerminal};
use std::path::PathBuf;

use anyhow::Context;
use structopt::StructOpt;

use rpncalc::console::{Console, Format};

#[derive(Debug, StructOpt)]
#[structopt(
    name = "rpncalc",
    about = "A reverse polish notation calculator with a few scientific functions."
)]
struct Opt {
    /// Enables trace log level
    #[structopt(short, long)]
    trace: bool,

    /// Enables info log level
    #[structopt(short, long)]
    info: bool,

    /// Number of decimal places to display, shortest form if omitted
    #[structopt(short, long)]
    precision: Option<usize>,

    /// Never print the input prompt
    #[structopt(short, long)]
    quiet: bool,

    /// Read commands from this file instead of standard input
    #[structopt(parse(from_os_str))]
    script: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let opt = Opt::from_args();

    let log_level = if opt.trace {
        log::Level::Trace
    } else if opt.info {
        log::Level::Info
    } else {
        log::Level::Warn
    };

    simple_logger::init_with_level(log_level)?;

    let mut console = Console::new(Format {
        precision: opt.precision,
    });

    let stdout = io::stdout();

    match opt.script {
        Some(path) => {
            let file = File::open(&path)
                .with_context(|| format!("Failed to open script {}", path.display()))?;

            log::info!("reading commands from {}", path.display());

            console.run(BufReader::new(file), stdout.lock(), false)
        }
        None => {
            let stdin = io::stdin();
            let prompt = !opt.quiet && stdin.is_terminal();

            console.run(stdin.lock(), stdout.lock(), prompt)
        }
    }
}
