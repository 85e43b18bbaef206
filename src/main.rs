use anyhow::{Context, Result, bail};
use clap::Parser;
use std::path::PathBuf;
use std::time::Instant;

use parcelmeter::config::FileConfig;
use parcelmeter::domain::{GeoPoint, Ring};
use parcelmeter::input::{load_ring, validate_ring};
use parcelmeter::report::{MeasurementReport, measure};
use parcelmeter::units::AreaUnit;

/// Measure land parcels: geodetic area and per-edge ground distances
///
/// Examples:
///   # Measure a saved parcel polygon (GeoJSON or a JSON vertex list)
///   parcelmeter parcel.json
///
///   # Show the area in acres and skip the edge table
///   parcelmeter parcel.json -u acre --no-edges
///
///   # Measure inline coordinates (lat,lng pairs)
///   parcelmeter --coords "12.9716,77.5946 12.9716,77.5956 12.9726,77.5956 12.9726,77.5946"
///
///   # Full report as JSON for scripting
///   parcelmeter parcel.json --json
#[derive(Parser, Debug)]
#[command(name = "parcelmeter")]
#[command(version, about, long_about = None)]
struct Args {
    /// Polygon file: GeoJSON Polygon/Feature or a JSON list of {"lat", "lng"} vertices
    input: Option<PathBuf>,

    /// Inline vertices as whitespace-separated lat,lng pairs
    #[arg(long, allow_hyphen_values = true)]
    coords: Option<String>,

    /// Path to config file (optional, auto-searches parcelmeter.toml if not provided)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Display unit for the area summary
    #[arg(short, long)]
    unit: Option<AreaUnit>,

    /// Emit the full report as JSON instead of text
    #[arg(long)]
    json: bool,

    /// Skip the per-edge distance table
    #[arg(long)]
    no_edges: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let total_start = Instant::now();

    let file_config = if let Some(ref config_path) = args.config {
        if config_path.exists() {
            let contents = std::fs::read_to_string(config_path)
                .context(format!("Failed to read config file: {:?}", config_path))?;
            Some(toml::from_str(&contents).context("Failed to parse config file")?)
        } else {
            bail!("Config file not found: {:?}", config_path);
        }
    } else {
        FileConfig::load()
    };
    let file_config = file_config.unwrap_or_default();

    let unit = args.unit.unwrap_or(file_config.unit);
    let show_edges = !args.no_edges && file_config.edges;
    let verbose = args.verbose || file_config.verbose;

    let ring = read_ring(&args)?;
    if verbose {
        println!("Loaded {} vertices", ring.len());
        if !ring.is_measurable() {
            println!("Fewer than 3 distinct vertices: area will be 0");
        }
    }

    let start = Instant::now();
    let report = measure(&ring);
    if verbose {
        println!("Measured in {:.3}ms", start.elapsed().as_secs_f64() * 1000.0);
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report, unit, show_edges);
    }

    if verbose {
        println!();
        println!(
            "Done! Total time: {:.3}s",
            total_start.elapsed().as_secs_f64()
        );
    }

    Ok(())
}

fn read_ring(args: &Args) -> Result<Ring> {
    if let Some(ref coords) = args.coords {
        let ring = parse_coords(coords)?;
        validate_ring(&ring).context("Invalid inline coordinates")?;
        return Ok(ring);
    }

    if let Some(ref path) = args.input {
        return load_ring(path).context(format!("Failed to load polygon: {:?}", path));
    }

    bail!("No input: pass a polygon file or --coords (see --help)");
}

/// Parse whitespace-separated "lat,lng" pairs
fn parse_coords(coords: &str) -> Result<Ring> {
    let mut points = Vec::new();
    for (i, pair) in coords.split_whitespace().enumerate() {
        let (lat, lon) = pair
            .split_once(',')
            .with_context(|| format!("Coordinate {} is not a lat,lng pair: {:?}", i, pair))?;
        let lat: f64 = lat
            .trim()
            .parse()
            .with_context(|| format!("Bad latitude in coordinate {}: {:?}", i, pair))?;
        let lon: f64 = lon
            .trim()
            .parse()
            .with_context(|| format!("Bad longitude in coordinate {}: {:?}", i, pair))?;
        points.push(GeoPoint::new(lat, lon));
    }
    Ok(Ring::new(points))
}

fn print_report(report: &MeasurementReport, unit: AreaUnit, show_edges: bool) {
    println!("Parcel: {} vertices", report.vertex_count);
    println!("Area: {:.1} m²", report.area_square_meters);
    if unit != AreaUnit::SquareMeter {
        println!("      {}", report.area_in(unit));
    }

    if show_edges && !report.edges.is_empty() {
        println!();
        println!("Edges:");
        for edge in &report.edges {
            println!("  {} -> {}: {}", edge.from, edge.to, edge.label);
        }
    }
}
