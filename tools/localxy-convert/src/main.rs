//! localxy-convert: convert points between WGS84 and LocalXY from the command line.
//!
//! Usage:
//!   localxy-convert to-local --origin 29.45,-98.61,90 --point 29.46,-98.60
//!   localxy-convert to-wgs84 --config origin.json --point 120.5,-40.0 --point 0,0

use std::path::PathBuf;
use std::process;

use localxy::{LocalXyWgs84Util, OriginConfig};
use serde_json::json;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() {
    init_logging();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        process::exit(1);
    }

    match args[1].as_str() {
        "to-local" => cmd_to_local(&args[2..]),
        "to-wgs84" => cmd_to_wgs84(&args[2..]),
        "help" | "--help" | "-h" => print_usage(),
        other => {
            eprintln!("Unknown command: {other}");
            print_usage();
            process::exit(1);
        }
    }
}

fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn print_usage() {
    eprintln!(
        "localxy-convert: WGS84 <-> LocalXY conversion tool\n\
         \n\
         Commands:\n\
         \n\
         to-local  Convert lat,lon points (degrees) to LocalXY x,y (meters)\n\
         to-wgs84  Convert LocalXY x,y points (meters) to lat,lon (degrees)\n\
         \n\
         Options:\n\
         \n\
           --origin <lat,lon[,heading[,alt]]>  Reference origin (degrees, meters)\n\
           --frame <id>                        Frame id for --origin (optional)\n\
           --config <path>                     JSON origin config instead of --origin\n\
           --point <a,b>                       Point to convert (can specify multiple)\n\
         \n\
         Each converted point is printed as one JSON line on stdout.\n\
         Set RUST_LOG=info for diagnostics on stderr.\n\
         \n\
         Examples:\n\
         \n\
           localxy-convert to-local --origin 29.45,-98.61 --point 29.46,-98.60\n\
           localxy-convert to-wgs84 --config origin.json --point 120.5,-40.0\n"
    );
}

fn parse_pair(value: &str) -> Option<(f64, f64)> {
    let parts: Vec<&str> = value.split(',').collect();
    if parts.len() != 2 {
        return None;
    }
    let a: f64 = parts[0].trim().parse().ok()?;
    let b: f64 = parts[1].trim().parse().ok()?;
    Some((a, b))
}

fn parse_value<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    for i in 0..args.len() {
        if args[i] == flag && i + 1 < args.len() {
            return Some(&args[i + 1]);
        }
    }
    None
}

/// Parse `lat,lon[,heading[,alt]]` into an origin config.
fn parse_origin(value: &str) -> Option<OriginConfig> {
    let values: Vec<f64> = value
        .split(',')
        .map(|p| p.trim().parse::<f64>())
        .collect::<Result<_, _>>()
        .ok()?;

    let mut config = match values.as_slice() {
        [lat, lon, ..] if values.len() <= 4 => OriginConfig::new(*lat, *lon),
        _ => return None,
    };
    if let Some(heading) = values.get(2) {
        config.heading = *heading;
    }
    if let Some(altitude) = values.get(3) {
        config.altitude = *altitude;
    }
    config.validate().ok()?;
    Some(config)
}

fn parse_points(args: &[String]) -> Result<Vec<(f64, f64)>, String> {
    let mut points = Vec::new();
    for i in 0..args.len() {
        if args[i] == "--point" && i + 1 < args.len() {
            let point = parse_pair(&args[i + 1])
                .ok_or_else(|| format!("invalid --point value: {}", args[i + 1]))?;
            points.push(point);
        }
    }
    Ok(points)
}

/// Resolve the origin from `--config` or `--origin` (+ `--frame`).
fn resolve_origin(args: &[String]) -> Result<OriginConfig, String> {
    if let Some(path) = parse_value(args, "--config") {
        let path = PathBuf::from(path);
        return OriginConfig::load(&path).map_err(|e| e.to_string());
    }

    let value = parse_value(args, "--origin")
        .ok_or_else(|| "--origin <lat,lon[,heading[,alt]]> or --config <path> is required".to_string())?;
    let mut config =
        parse_origin(value).ok_or_else(|| format!("invalid --origin value: {value}"))?;
    if let Some(frame) = parse_value(args, "--frame") {
        config.frame = frame.to_string();
    }
    Ok(config)
}

/// Build the converter and the point list, or exit with usage.
fn setup(args: &[String]) -> (LocalXyWgs84Util, Vec<(f64, f64)>) {
    let config = match resolve_origin(args) {
        Ok(c) => c,
        Err(e) => {
            error!("{e}");
            eprintln!("Error: {e}");
            print_usage();
            process::exit(1);
        }
    };

    let points = match parse_points(args) {
        Ok(p) if !p.is_empty() => p,
        Ok(_) => {
            eprintln!("Error: --point <a,b> is required");
            process::exit(1);
        }
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    };

    info!(
        latitude = config.latitude,
        longitude = config.longitude,
        heading = config.heading,
        frame = %config.frame,
        points = points.len(),
        "converting"
    );

    (LocalXyWgs84Util::from_config(&config), points)
}

// --- Conversion commands ---

fn cmd_to_local(args: &[String]) {
    let (util, points) = setup(args);
    for (latitude, longitude) in points {
        let Some(p) = util.to_local_xy(latitude, longitude) else {
            eprintln!("Error: LocalXY origin not initialized");
            process::exit(1);
        };
        let line = json!({
            "frame": util.frame(),
            "latitude": latitude,
            "longitude": longitude,
            "x": p.x,
            "y": p.y,
        });
        println!("{line}");
    }
}

fn cmd_to_wgs84(args: &[String]) {
    let (util, points) = setup(args);
    for (x, y) in points {
        let Some(g) = util.to_wgs84(x, y) else {
            eprintln!("Error: LocalXY origin not initialized");
            process::exit(1);
        };
        let line = json!({
            "frame": util.frame(),
            "x": x,
            "y": y,
            "latitude": g.latitude,
            "longitude": g.longitude,
        });
        println!("{line}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_origin_variants() {
        let c = parse_origin("29.45,-98.61").unwrap();
        assert_eq!((c.latitude, c.longitude, c.heading, c.altitude), (29.45, -98.61, 0.0, 0.0));

        let c = parse_origin("29.45, -98.61, 90").unwrap();
        assert_eq!(c.heading, 90.0);

        let c = parse_origin("29.45,-98.61,90,200").unwrap();
        assert_eq!(c.altitude, 200.0);

        assert!(parse_origin("29.45").is_none());
        assert!(parse_origin("1,2,3,4,5").is_none());
        assert!(parse_origin("a,b").is_none());
        assert!(parse_origin("NaN,0").is_none());
    }

    #[test]
    fn test_parse_points() {
        let a = args(&["--point", "1,2", "--origin", "0,0", "--point", "-3.5,4"]);
        assert_eq!(parse_points(&a).unwrap(), vec![(1.0, 2.0), (-3.5, 4.0)]);

        let a = args(&["--point", "1;2"]);
        assert!(parse_points(&a).is_err());
    }

    #[test]
    fn test_resolve_origin_with_frame() {
        let a = args(&["--origin", "10,20,45", "--frame", "map"]);
        let c = resolve_origin(&a).unwrap();
        assert_eq!(c.frame, "map");
        assert_eq!(c.heading, 45.0);

        assert!(resolve_origin(&args(&["--point", "1,2"])).is_err());
    }

    #[test]
    fn test_resolve_origin_missing_config_file() {
        let a = args(&["--config", "/nonexistent/localxy/origin.json"]);
        let err = resolve_origin(&a).unwrap_err();
        assert!(err.contains("origin.json"));
    }
}
