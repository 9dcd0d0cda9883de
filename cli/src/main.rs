use std::error::Error;
use std::fs;
use std::io::{self, Read, Write};

use anytype::{encode, Container, Indent, ParseMode, ParseOptions};
use clap::Parser;
use tracing::debug;

#[derive(Parser, Debug)]
#[command(name = "anytype", version, about = "Inspect and reformat JSON documents")]
struct Args {
    /// Input file path. Omit or use '-' to read from stdin.
    input: Option<String>,

    /// Output file path (prints to stdout if omitted).
    #[arg(short, long, value_name = "file")]
    output: Option<String>,

    /// Parse the input as a JSON array instead of an object.
    #[arg(long)]
    list: bool,

    /// Indentation size, 0 for compact output (default: 2).
    #[arg(long, value_name = "number", default_value_t = 2)]
    indent: usize,

    /// Accept whitespace in place of a missing comma between elements.
    #[arg(long)]
    repair: bool,

    /// Print only the value at a tree-form path such as `.users#0.name`.
    #[arg(long, value_name = "path", conflicts_with = "type_of")]
    get: Option<String>,

    /// Print the type tag of the value at a tree-form path.
    #[arg(long = "type", value_name = "path")]
    type_of: Option<String>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(io::stderr)
        .init();

    if let Err(err) = run() {
        eprintln!("ERROR  {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    let indent = match args.indent {
        0 => None,
        spaces => Some(Indent::new(spaces)?),
    };
    let input = read_input(args.input.as_deref())?;
    let document = parse_document(&args, &input)?;

    if let Some(path) = args.type_of.as_deref() {
        let tag = document.type_of_tf(path);
        return write_output(args.output.as_deref(), tag.name().as_bytes());
    }

    if let Some(path) = args.get.as_deref() {
        let value = document.get_tf(path)?;
        return with_output_writer(args.output.as_deref(), |writer| {
            encode::to_writer(writer, value, indent).map_err(|err| err.into())
        });
    }

    let value = document.to_value();
    with_output_writer(args.output.as_deref(), |writer| {
        encode::to_writer(writer, &value, indent).map_err(|err| err.into())
    })
}

fn parse_document(args: &Args, input: &[u8]) -> Result<Box<dyn Container>, Box<dyn Error>> {
    let mode = if args.repair {
        ParseMode::Repair
    } else {
        ParseMode::Strict
    };
    let options = ParseOptions::new().with_mode(mode);
    debug!(?mode, list = args.list, len = input.len(), "parsing input");

    if args.list {
        Ok(Box::new(anytype::list_from_slice_with_options(input, &options)?))
    } else {
        Ok(Box::new(anytype::object_from_slice_with_options(input, &options)?))
    }
}

fn read_input(input: Option<&str>) -> Result<Vec<u8>, Box<dyn Error>> {
    match input {
        None | Some("-") => {
            let mut buf = Vec::new();
            io::stdin().read_to_end(&mut buf)?;
            Ok(buf)
        }
        Some(path) => Ok(fs::read(path)?),
    }
}

fn with_output_writer<F>(path: Option<&str>, f: F) -> Result<(), Box<dyn Error>>
where
    F: FnOnce(&mut dyn Write) -> Result<(), Box<dyn Error>>,
{
    match path {
        Some(path) if path != "-" => {
            let mut file = fs::File::create(path)?;
            f(&mut file)
        }
        _ => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            f(&mut handle)
        }
    }
}

fn write_output(path: Option<&str>, data: &[u8]) -> Result<(), Box<dyn Error>> {
    with_output_writer(path, |writer| {
        writer.write_all(data)?;
        Ok(())
    })
}

