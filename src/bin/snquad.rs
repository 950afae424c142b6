//! Command line tool to build and inspect SN quadrature sets
//!
//! Builds the product Gauss-Legendre/midpoint quadrature for an SN order and
//! logs a summary of the set, skipping the need to write a program just to
//! check the directions and weights.
//!
//! Allows for conversion to ASCII column data, JSON, and a bincode binary.
//!
//! # Usage
//!
//! ```text
//! Usage: snquad <order> [options]
//! ```
//!
//! Help is printed with the `-h` flag, and `--help` will show examples, default
//! values, examples, and any important behaviour.
//!
//! ## Options
//!
//! By default a simple summary of the quadrature set is logged.
//!
//! ```bash
//! # Print a summary of the S8 quadrature
//! snquad 8
//! ```
//!
//! ### List supported orders
//!
//! ```bash
//! snquad --list
//! ```
//!
//! ### Print every direction
//!
//! ```bash
//! snquad 4 --directions
//! ```
//!
//! ### Convert to files
//!
//! ```bash
//! # Output files named 'quadrature_s8.txt', 'quadrature_s8.json', 'quadrature_s8.bin'
//! snquad 8 --ascii --json --binary
//! ```
//!
//! ### Change the output file names
//!
//! By default the file names are 'quadrature_s<order>.<ext>'. This can be
//! changed by providing --output with a name
//!
//! ```bash
//! # Output files named 'myfile.txt' and 'myfile.json'
//! snquad 8 --ascii --json --output myfile
//! ```
//!

// standard libraries
use std::f64::consts::PI;

// crate modules
use snquad::utils::{f, NumberFmt};
use snquad::writers::{write, OutputFormat};
use snquad::{Quadrature, SUPPORTED_ORDERS};

// external crates
use anyhow::{anyhow, Result};
use clap::Parser;
use log::*;

#[doc(hidden)]
fn main() -> Result<()> {
    // set up the command line interface and match arguments
    let cli: Cli = Cli::parse();

    // set up logging (+2 to make 'Info' the default)
    let verbosity = cli.verbose as usize + 2;
    logging_init(verbosity, cli.quiet);

    if cli.list {
        print_supported_orders();
        return Ok(());
    }

    let order = cli
        .order
        .ok_or_else(|| anyhow!("Empty <order> positional argument"))?;

    // Try to build the quadrature, unsupported orders stop here
    info!("Building S{order} quadrature");
    let quadrature = Quadrature::new(order)?;

    // Log a summary of the set to the terminal for reference
    if !cli.quiet {
        print_summary(&quadrature);
    }

    if cli.directions {
        print_directions(&quadrature);
    }

    let stem = match &cli.output {
        Some(o) => o.to_string(),
        None => f!("quadrature_s{order}"),
    };

    for format in cli.formats() {
        let path = write(&quadrature, &stem, format)?;
        info!("Written {format} file to {}", path.display());
    }

    Ok(())
}

/// Build and inspect SN quadrature sets
///
/// Product quadrature of Gauss-Legendre polar levels and midpoint azimuthal
/// sectors. An order N gives N polar levels, 2N azimuthal sectors, and 2N^2
/// directions in total.
///
/// Examples
/// --------
///
///  Print a summary of the S8 quadrature
///     $ snquad 8
///
///  List the supported orders
///     $ snquad --list
///
///  Print every direction to the terminal
///     $ snquad 4 --directions
///
///  Convert to ASCII, JSON, and binary
///     $ snquad 8 --ascii --json --binary
///
///  Change file names to "myfile"
///     $ snquad 8 --json --ascii --output myfile
///
/// Notes
/// -----
///
/// Only the even orders 2 to 30 are tabulated. Anything else is rejected
/// rather than rounded to a nearby order.
#[doc(hidden)]
#[derive(Parser)]
#[command(
    verbatim_doc_comment,
    arg_required_else_help(true),
    before_help(banner()),
    after_help("Typical use: snquad 8 --ascii\n\nNOTE: --help shows more detail and examples"),
    term_width(70),
    hide_possible_values(true),
    override_usage("snquad <order> [options]")
)]
struct Cli {
    // * Positional
    /// SN order of the quadrature (even, 2 to 30)
    #[arg(name = "order")]
    #[arg(required_unless_present("list"))]
    order: Option<usize>,

    /// List the supported orders and exit
    #[arg(help_heading("Quadrature options"))]
    #[arg(short, long)]
    list: bool,

    /// Print every direction to the terminal
    ///
    /// Rows are `index xi eta mu w` in angle index order.
    #[arg(help_heading("Quadrature options"))]
    #[arg(short, long)]
    directions: bool,

    /// Generate an ASCII file ('.txt')
    #[arg(help_heading("Output options"))]
    #[arg(short, long)]
    ascii: bool,

    /// Generate a JSON file ('.json')
    #[arg(help_heading("Output options"))]
    #[arg(short, long)]
    json: bool,

    /// Generate a bincode binary file ('.bin')
    #[arg(help_heading("Output options"))]
    #[arg(short, long)]
    binary: bool,

    /// Name of output file (excl. extension)
    ///
    /// Defaults to `quadrature_s<order>`, and will automatically set the
    /// relevant extension.
    #[arg(help_heading("Output options"))]
    #[arg(short, long)]
    #[arg(value_name = "path")]
    output: Option<String>,

    // * Flags
    /// Verbose logging (-v, -vv)
    ///
    /// If specified, the default log level of INFO is increased to DEBUG (-v)
    /// or TRACE (-vv). Errors and Warnings are always logged unless in quiet
    /// (-q) mode.
    #[arg(short, long)]
    #[arg(action = clap::ArgAction::Count)]
    verbose: u8,

    /// Supress all log output (overrules --verbose)
    #[arg(short, long)]
    quiet: bool,
}

impl Cli {
    /// Every output format requested on the command line
    fn formats(&self) -> Vec<OutputFormat> {
        [
            (self.ascii, OutputFormat::Ascii),
            (self.json, OutputFormat::Json),
            (self.binary, OutputFormat::Binary),
        ]
        .into_iter()
        .filter_map(|(requested, format)| requested.then_some(format))
        .collect()
    }
}

/// Sets up logging at runtime to allow for multiple verbosity levels
#[doc(hidden)]
fn logging_init(verbosity: usize, quiet: bool) {
    let result = stderrlog::new()
        .modules(vec![module_path!()])
        .quiet(quiet)
        .verbosity(verbosity)
        .show_level(false)
        .color(stderrlog::ColorChoice::Never)
        .timestamp(stderrlog::Timestamp::Off)
        .init();

    if let Err(e) = result {
        eprintln!("Unable to initialise logging: {e}");
    }
}

/// Creates a banner for the command line
#[doc(hidden)]
fn banner() -> String {
    let mut s = f!("{:-<1$}\n", "", 70);
    s += &f!("{:^70}\n", "SNQuad :: Discrete Ordinates Quadrature");
    s += &f!("{:-<1$}", "", 70);
    s
}

#[doc(hidden)]
/// Write the supported orders to the terminal
fn print_supported_orders() {
    let orders = SUPPORTED_ORDERS
        .iter()
        .map(|order| f!("S{order} ({})", 2 * order * order))
        .collect::<Vec<String>>()
        .join(", ");

    println!("Supported orders (number of angles):");
    println!("{}", textwrap::indent(&textwrap::fill(&orders, 66), "    "));
}

#[doc(hidden)]
/// Write every direction to the terminal
fn print_directions(quadrature: &Quadrature) {
    println!(
        "{:<7}{:>19}{:>19}{:>19}{:>19}",
        "index", "xi", "eta", "mu", "w"
    );
    for direction in quadrature.directions() {
        println!("{direction}");
    }
}

#[doc(hidden)]
/// Write summary to the terminal
fn print_summary(quadrature: &Quadrature) {
    let order = quadrature.order();
    let mut s = "Summary of quadrature set\n".to_string();
    s += &f!("order       : S{}\n", order);
    s += &f!(
        "angles      : {} ({} levels x {} sectors)\n",
        quadrature.num_angles(),
        order,
        2 * order
    );
    s += &f!(
        "weight sum  : {} (4pi = {})\n",
        quadrature.weight_sum().sci(10, 2),
        (4.0 * PI).sci(10, 2)
    );
    s += &f!("norm error  : {}", quadrature.max_norm_error().sci(3, 2));
    println!("{s}")
}
