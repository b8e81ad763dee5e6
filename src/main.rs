//! logos CLI entry point.

use std::error::Error as _;
use std::ffi::OsString;
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use tracing::Level;

use logos::config::{DEFAULT_BACKGROUND_COLOR, DEFAULT_NODE_COLOR, DEFAULT_TEXT_SIZE};
use logos::{Error, RenderConfig, layout, parsers, renderers};

const EX_USAGE: u8 = 64;
const EX_DATAERR: u8 = 65;
const EX_IOERR: u8 = 74;

/// Single-dash spellings accepted by older releases, and their long forms.
const LEGACY_FLAGS: &[(&str, &str)] = &[("-bgc", "--bgc"), ("-nc", "--nc"), ("-ts", "--ts")];

/// Compile a logos diagram into an SVG file.
#[derive(Parser, Debug)]
#[command(name = "logos", version = env!("LOGOS_VERSION"))]
struct Cli {
    /// Source file ("-" reads stdin)
    path: PathBuf,

    /// Canvas fill color
    #[arg(
        long = "background-color",
        visible_alias = "bgc",
        value_name = "COLOR",
        default_value = DEFAULT_BACKGROUND_COLOR
    )]
    background_color: String,

    /// Node box fill color
    #[arg(
        long = "node-color",
        visible_alias = "nc",
        value_name = "COLOR",
        default_value = DEFAULT_NODE_COLOR
    )]
    node_color: String,

    /// Label font size in pixels
    #[arg(
        long = "text-size",
        visible_alias = "ts",
        value_name = "PX",
        default_value_t = DEFAULT_TEXT_SIZE,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    text_size: u32,

    /// Write the SVG here instead of "<title>.svg"
    #[arg(short = 'o', long = "output")]
    output: Option<PathBuf>,

    /// Print the edge listing of the interpreted graph
    #[arg(long)]
    dump: bool,

    /// Print Graphviz DOT instead of writing SVG
    #[arg(long)]
    dot: bool,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse_from(expand_legacy_flags(std::env::args_os())) {
        Ok(cli) => cli,
        Err(e) => {
            let code = if e.use_stderr() { EX_USAGE } else { 0 };
            let _ = e.print();
            return ExitCode::from(code);
        }
    };
    init_tracing(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => report(&err),
    }
}

/// Rewrite `-bgc`, `-nc` and `-ts` to their long aliases. Arguments after
/// `--` are left alone.
fn expand_legacy_flags(args: impl IntoIterator<Item = OsString>) -> Vec<OsString> {
    let mut options_done = false;
    args.into_iter()
        .map(|arg| {
            if options_done {
                return arg;
            }
            if arg == "--" {
                options_done = true;
                return arg;
            }
            LEGACY_FLAGS
                .iter()
                .find(|(short, _)| arg == *short)
                .map_or(arg, |(_, long)| OsString::from(*long))
        })
        .collect()
}

fn init_tracing(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_max_level(level)
        .with_target(false)
        .init();
}

fn run(cli: &Cli) -> Result<(), Error> {
    let src = read_source(&cli.path)?;
    let result = parsers::interpret(&src);
    if cli.dump {
        print!("{}", result.graph.describe());
    }
    if result.had_error() {
        return Err(Error::Parse(result.diagnostics));
    }

    let mut graph = result.graph;
    if cli.dot {
        print!("{}", graph.to_dot());
        return Ok(());
    }

    let laid_out = layout::layout(&mut graph);
    let config = RenderConfig {
        background_color: cli.background_color.clone(),
        node_color: cli.node_color.clone(),
        text_size: cli.text_size,
    };
    let path = cli
        .output
        .clone()
        .unwrap_or_else(|| PathBuf::from(renderers::output_file_name(graph.title())));
    renderers::svg::draw(&laid_out, &config).save(&path)
}

fn read_source(path: &Path) -> Result<String, Error> {
    let read_err = |source| Error::Read {
        path: path.to_path_buf(),
        source,
    };
    if path == Path::new("-") {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf).map_err(read_err)?;
        return Ok(buf);
    }
    fs::read_to_string(path).map_err(read_err)
}

fn report(err: &Error) -> ExitCode {
    match err {
        Error::Parse(diagnostics) => {
            for d in diagnostics {
                eprintln!("{d}");
            }
            ExitCode::from(EX_DATAERR)
        }
        other => {
            match other.source() {
                Some(cause) => eprintln!("error: {other}: {cause}"),
                None => eprintln!("error: {other}"),
            }
            ExitCode::from(EX_IOERR)
        }
    }
}
