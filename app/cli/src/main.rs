use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use lfind_simd::{
    parse_key, read_values, Element, InputFormat, SearchDispatcher, SimdConfig,
};
use log::{debug, info};
use std::fs::File;
use std::io::{self, BufReader, Read};
use std::process::ExitCode;
use std::time::Instant;

/// Vectorized linear search over u8 and u32 arrays
#[derive(Parser)]
#[command(name = "lfind")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress all non-error output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    /// Use the scalar scan instead of the vector kernels
    #[arg(long, global = true)]
    scalar: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Exit 0 if any byte equals KEY, 1 otherwise
    Find8 {
        /// Key to search for (decimal or 0x hex)
        key: String,

        #[command(flatten)]
        source: Source,
    },

    /// Exit 0 if any byte is less than or equal to KEY, 1 otherwise
    Le8 {
        /// Upper bound to search for (decimal or 0x hex)
        key: String,

        #[command(flatten)]
        source: Source,
    },

    /// Exit 0 if any 32-bit word equals KEY, 1 otherwise
    Find32 {
        /// Key to search for (decimal or 0x hex)
        key: String,

        #[command(flatten)]
        source: Source,
    },

    /// Display the search backend compiled into this build
    Info {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Where the array comes from
#[derive(clap::Args)]
struct Source {
    /// Input file (use '-' for stdin)
    #[arg(short, long, value_name = "FILE", default_value = "-")]
    input: String,

    /// Read raw element bytes (little-endian for 32-bit) instead of text
    #[arg(short, long)]
    binary: bool,
}

impl Source {
    fn format(&self) -> InputFormat {
        if self.binary {
            InputFormat::Binary
        } else {
            InputFormat::Text
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Set up logging based on verbosity flags
    setup_logging(cli.verbose, cli.quiet);

    let config = if cli.scalar {
        SimdConfig::disabled()
    } else {
        SimdConfig::default()
    };
    let dispatcher = SearchDispatcher::with_config(config);
    debug!("Search level: {}", dispatcher.level());

    let result = match cli.command {
        Commands::Find8 { key, source } => search_command(&source, |values: &[u8]| {
            let key = parse_key(&key)?;
            Ok(dispatcher.find_u8(key, values))
        }),
        Commands::Le8 { key, source } => search_command(&source, |values: &[u8]| {
            let key = parse_key(&key)?;
            Ok(dispatcher.find_le_u8(key, values))
        }),
        Commands::Find32 { key, source } => search_command(&source, |values: &[u32]| {
            let key = parse_key(&key)?;
            Ok(dispatcher.find_u32(key, values))
        }),
        Commands::Info { json } => info_command(&dispatcher, json).map(|_| true),
    };

    match result {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitCode::from(2)
        }
    }
}

/// Set up logging based on verbosity flags
fn setup_logging(verbose: bool, quiet: bool) {
    let log_level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "info"
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false)
        .init();

    debug!("Logging initialized at {} level", log_level);
}

/// Open input from file or stdin
fn open_input(input: &str) -> Result<Box<dyn Read>> {
    if input == "-" {
        Ok(Box::new(io::stdin().lock()))
    } else {
        let file =
            File::open(input).with_context(|| format!("Failed to open input file: {}", input))?;
        Ok(Box::new(BufReader::new(file)))
    }
}

/// Load the array and run one search over it, printing the answer
fn search_command<T, F>(source: &Source, search: F) -> Result<bool>
where
    T: Element,
    F: FnOnce(&[T]) -> lfind_simd::Result<bool>,
{
    let reader = open_input(&source.input)?;
    let values: Vec<T> = read_values(reader, source.format())
        .with_context(|| format!("Failed to read {}-bit values from {}", T::WIDTH, source.input))?;
    debug!("Loaded {} elements from {}", values.len(), source.input);

    let start = Instant::now();
    let found = search(values.as_slice()).context("Invalid key")?;
    debug!("Search took {:?}", start.elapsed());

    println!("{}", found);
    Ok(found)
}

/// Execute the info command
fn info_command(dispatcher: &SearchDispatcher, json: bool) -> Result<()> {
    let info = dispatcher.info();

    if json {
        println!("{}", info.to_json().context("Failed to render backend info")?);
        return Ok(());
    }

    info!("Target architecture: {}", info.target_arch);
    println!("Backend:          {}", info.level);
    println!("Native backend:   {}", info.native);
    println!("Register width:   {} bytes", info.register_width);
    println!("u8 per step:      {}", info.lanes_u8);
    println!("u32 per register: {}", info.lanes_u32);
    println!("u32 per step:     {}", info.block_u32);
    Ok(())
}
