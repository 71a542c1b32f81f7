use std::{path::PathBuf, process};

use clap::Parser;
use cminus_scanner::{
    debug_log,
    errors::errors::DriverError,
    logger::Logger,
    render_error,
    report::{
        io::{run, DirectorySink, FsSource, ReportSource},
        report::{LEXICAL_ERRORS_FILE, SYMBOL_TABLE_FILE, TOKENS_FILE},
    },
};

#[derive(Parser)]
#[command(name = "cminus-scanner")]
#[command(about = "Scans a C-minus source file into token, symbol table and lexical error reports.")]
#[command(version)]
struct Args {
    #[arg(default_value = "input.txt", help = "C-minus source file to scan")]
    input: PathBuf,

    #[arg(short, long, default_value = ".", help = "Directory the reports are written to")]
    out_dir: PathBuf,

    #[arg(short, long, help = "Enable debug logging")]
    debug: bool,

    #[arg(short, long, help = "Print every lexical error with its source line")]
    verbose: bool,
}

fn main() {
    let args = Args::parse();
    Logger::init(args.debug);

    if let Err(e) = execute(&args) {
        eprintln!("{e}");
        process::exit(1);
    }
}

fn execute(args: &Args) -> Result<(), DriverError> {
    let source = FsSource::new(&args.input);
    let mut sink = DirectorySink::new(&args.out_dir);

    let (text, output) = run(&source, &mut sink)?;
    debug_log!("reports written to {}", args.out_dir.display());

    if args.verbose {
        for error in &output.errors {
            eprint!("{}", render_error(error, &text, &source.name()));
        }
    }

    println!(
        "done; see {}, {}, {}",
        TOKENS_FILE, SYMBOL_TABLE_FILE, LEXICAL_ERRORS_FILE
    );
    Ok(())
}
