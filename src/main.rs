use clap::Parser;
use sfc_port::{DEFAULT_INPUT, DEFAULT_OUTPUT, Options, convert, port, read_source, read_stream};
use std::io::{self, IsTerminal};
use std::path::PathBuf;
use std::process;
use tracing_subscriber::EnvFilter;

const STDIN_NAME: &str = "<stdin>";

#[derive(Parser)]
#[command(name = "sfc-port")]
#[command(about = "Port the legacy chat admin page into an Inertia Vue page component")]
struct Cli {
    /// Legacy PHP page to read
    #[arg(long, default_value = DEFAULT_INPUT)]
    input: PathBuf,

    /// Vue component to write (overwritten)
    #[arg(long, default_value = DEFAULT_OUTPUT)]
    output: PathBuf,

    /// Read the page from stdin instead of --input
    #[arg(long)]
    stdin: bool,

    /// Print the component instead of writing it
    #[arg(long)]
    stdout: bool,

    /// With --stdout, print the component and conversion metadata as JSON
    #[arg(long, requires = "stdout")]
    json: bool,

    /// Log each conversion step
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let filter = if cli.verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let (source, filename) = if cli.stdin {
        match read_stream(io::stdin().lock(), STDIN_NAME) {
            Ok(source) => (source, STDIN_NAME.to_string()),
            Err(err) => fail(&err.render("", ""), &err.render_color("", "")),
        }
    } else {
        match read_source(&cli.input) {
            Ok(source) => (source, cli.input.display().to_string()),
            Err(err) => fail(&err.render("", ""), &err.render_color("", "")),
        }
    };

    let options = Options::default();

    if cli.stdout {
        match convert(&source, &options) {
            Ok(result) if cli.json => match serde_json::to_string(&result) {
                Ok(json) => println!("{json}"),
                Err(err) => {
                    eprintln!("Error: {err}");
                    process::exit(1);
                }
            },
            Ok(result) => print!("{}", result.code),
            Err(err) => fail(&err.render(&source, &filename), &err.render_color(&source, &filename)),
        }
        return;
    }

    match port(&source, &cli.output, &options) {
        Ok(_) => println!("wrote {}", cli.output.display()),
        Err(err) => fail(&err.render(&source, &filename), &err.render_color(&source, &filename)),
    }
}

/// Print a rendered diagnostic (colored on a terminal) and exit
fn fail(plain: &str, colored: &str) -> ! {
    if io::stderr().is_terminal() {
        eprint!("{colored}");
    } else {
        eprint!("{plain}");
    }
    process::exit(1);
}
