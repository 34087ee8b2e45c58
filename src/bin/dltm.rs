//! Convert coordinates between geographical latitude/longitude and the
//! Dubai Local Transverse Mercator grid, one coordinate pair per line.
use anyhow::Context;
use clap::Parser;
use dltm::convert::{self, Conversion};
use dltm::prelude::*;
use log::{debug, info, trace, warn};
use std::io::{self, BufRead, BufReader, Write};
use std::path::PathBuf;

/// DLTM: Convert latitude/longitude to Dubai Local Transverse Mercator
/// easting/northing, or (with --inv) the other way round.
/// Reads "lat lon" (or "easting northing") pairs, one per line,
/// from the files given, or from stdin.
#[derive(Parser, Debug)]
#[clap(name = "dltm")]
#[clap(author, version, about, long_about = None)]
struct Cli {
    /// Inverse operation: easting/northing to latitude/longitude
    #[clap(long = "inv")]
    inverse: bool,

    /// Append a Google Maps link to each converted point
    #[clap(short, long)]
    maps: bool,

    /// Append a WhatsApp share link to each converted point
    #[clap(short, long)]
    share: bool,

    /// Report fwd-inv roundtrip deviation
    #[clap(short, long)]
    roundtrip: bool,

    /// Echo input to output
    #[clap(short, long)]
    echo: bool,

    #[clap(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// The files to operate on ("-" or none for stdin)
    args: Vec<PathBuf>,
}

fn main() -> Result<(), anyhow::Error> {
    let options = Cli::parse();
    env_logger::Builder::new()
        .filter_level(options.verbose.log_level_filter())
        .init();
    trace!("This is DLTM");
    debug!("{options:#?}");

    let op = dltm::dltm();
    let direction = if options.inverse { Inv } else { Fwd };
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let stderr = io::stderr();
    let mut err = stderr.lock();

    let stdin_only = options.args.is_empty() || options.args == [PathBuf::from("-")];
    if stdin_only {
        let stdin = io::stdin();
        convert_lines(op, direction, &options, stdin.lock(), &mut out, &mut err)?;
        return Ok(());
    }

    for path in &options.args {
        if path.as_os_str() == "-" {
            let stdin = io::stdin();
            convert_lines(op, direction, &options, stdin.lock(), &mut out, &mut err)?;
            continue;
        }
        info!("Reading {}", path.display());
        let file = std::fs::File::open(path)
            .with_context(|| format!("Cannot open {}", path.display()))?;
        convert_lines(op, direction, &options, BufReader::new(file), &mut out, &mut err)?;
    }
    Ok(())
}

fn convert_lines(
    op: &TransverseMercator,
    direction: Direction,
    options: &Cli,
    input: impl BufRead,
    out: &mut impl Write,
    err: &mut impl Write,
) -> Result<(), anyhow::Error> {
    for (number, line) in input.lines().enumerate() {
        let line = line.context("Cannot read input")?;
        let line = line.split('#').next().unwrap_or_default().trim();
        if line.is_empty() {
            continue;
        }

        let mut fields = line.split_whitespace();
        let first = fields.next().unwrap_or_default();
        let second = fields.next().unwrap_or_default();
        if fields.next().is_some() {
            warn!("line {}: ignoring fields beyond the first two", number + 1);
        }

        let conversion = match convert::convert(op, direction, first, second) {
            Ok(conversion) => conversion,
            Err(e) => {
                warn!("line {}: {e}", number + 1);
                writeln!(err, "line {}: {}", number + 1, e.user_message())?;
                continue;
            }
        };

        let mut report = String::new();
        if options.echo {
            report.push_str(line);
            report.push_str("  =>  ");
        }
        report.push_str(&conversion.to_string());
        if options.roundtrip {
            report.push_str(&format!("  {}", roundtrip_deviation(op, &conversion)));
        }
        if options.maps {
            report.push_str(&format!("  {}", conversion.maps_url()));
        }
        if options.share {
            report.push_str(&format!("  {}", conversion.share_url()));
        }
        writeln!(out, "{report}")?;
    }
    Ok(())
}

// Deviation after converting back to the input representation:
// meters for grid input, degrees for geographical input
fn roundtrip_deviation(op: &TransverseMercator, conversion: &Conversion) -> String {
    match conversion.direction() {
        Fwd => {
            let grid = conversion.projected();
            match op.inverse(grid.easting, grid.northing) {
                Ok(geo) => format!("{:.3e}", geo.max_deviation(&conversion.geodetic())),
                Err(e) => format!("({e})"),
            }
        }
        Inv => {
            let geo = conversion.geodetic();
            match op.forward(geo.latitude, geo.longitude) {
                Ok(grid) => format!("{:.3e}", grid.hypot2(&conversion.projected())),
                Err(e) => format!("({e})"),
            }
        }
    }
}

// ----- T E S T S ---------------------------------------------------------------------
