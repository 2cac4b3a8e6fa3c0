use std::path::PathBuf;

use anyhow::{Context, bail};
use clap::{Args, Parser, Subcommand};
use lumen_config::SiteConfig;
use lumen_ephem::{
    GeoCoordinate, MoonIllumination, MoonTimes, SolarTimes, moon_illumination, moon_position,
    moon_times, sun_position, sun_times,
};
use lumen_time::Instant;

#[derive(Parser)]
#[command(name = "lumen", about = "Sun and moon positions, phases and rise/set times")]
struct Cli {
    /// Log at debug level (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Solar azimuth and altitude at an instant
    SunPosition {
        #[command(flatten)]
        at: When,
        #[command(flatten)]
        place: Place,
    },
    /// Solar noon, nadir, twilights and golden hour for a day
    SunTimes {
        #[command(flatten)]
        at: When,
        #[command(flatten)]
        place: Place,
    },
    /// Lunar azimuth, altitude, distance and parallactic angle
    MoonPosition {
        #[command(flatten)]
        at: When,
        #[command(flatten)]
        place: Place,
    },
    /// Illuminated fraction and phase of the Moon
    MoonIllumination {
        #[command(flatten)]
        at: When,
    },
    /// Moonrise and moonset for a UTC day
    MoonTimes {
        #[command(flatten)]
        at: When,
        #[command(flatten)]
        place: Place,
    },
    /// Sun times, moon times and illumination together
    Day {
        #[command(flatten)]
        at: When,
        #[command(flatten)]
        place: Place,
    },
}

#[derive(Args)]
struct When {
    /// RFC 3339 timestamp or YYYY-MM-DD (00:00 UTC)
    #[arg(long)]
    date: String,
}

#[derive(Args)]
struct Place {
    /// Latitude in degrees, north positive
    #[arg(long, allow_hyphen_values = true, conflicts_with = "site")]
    lat: Option<f64>,
    /// Longitude in degrees, east positive
    #[arg(long, allow_hyphen_values = true, conflicts_with = "site")]
    lon: Option<f64>,
    /// Observer height above the terrain in meters
    #[arg(long)]
    height: Option<f64>,
    /// Named site from the catalog given by --sites
    #[arg(long, requires = "sites")]
    site: Option<String>,
    /// TOML site catalog
    #[arg(long)]
    sites: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    match cli.command {
        Commands::SunPosition { at, place } => {
            let t = parse_date(&at.date)?;
            let loc = resolve_place(&place)?;
            let pos = sun_position(t, &loc);
            println!("time:          {t}");
            println!("azimuth_deg:   {:.4}", pos.azimuth_deg_from_north());
            println!("altitude_deg:  {:.4}", pos.altitude_deg());
        }
        Commands::SunTimes { at, place } => {
            let t = parse_date(&at.date)?;
            let loc = resolve_place(&place)?;
            print_sun_times(&sun_times(t, &loc));
        }
        Commands::MoonPosition { at, place } => {
            let t = parse_date(&at.date)?;
            let loc = resolve_place(&place)?;
            let pos = moon_position(t, &loc);
            let hz = pos.horizontal();
            println!("time:                   {t}");
            println!("azimuth_deg:            {:.4}", hz.azimuth_deg_from_north());
            println!("altitude_deg:           {:.4}", hz.altitude_deg());
            println!("distance_km:            {:.1}", pos.distance_km);
            println!(
                "parallactic_angle_deg:  {:.4}",
                pos.parallactic_angle_rad.to_degrees()
            );
        }
        Commands::MoonIllumination { at } => {
            let t = parse_date(&at.date)?;
            print_illumination(&moon_illumination(t));
        }
        Commands::MoonTimes { at, place } => {
            let t = parse_date(&at.date)?;
            let loc = resolve_place(&place)?;
            print_moon_times(&moon_times(t, &loc));
        }
        Commands::Day { at, place } => {
            let t = parse_date(&at.date)?;
            let loc = resolve_place(&place)?;
            println!("[sun]");
            print_sun_times(&sun_times(t, &loc));
            println!("\n[moon]");
            print_moon_times(&moon_times(t, &loc));
            print_illumination(&moon_illumination(t));
        }
    }
    Ok(())
}

fn init_logger(verbose: bool) {
    let env = env_logger::Env::default().default_filter_or(if verbose { "debug" } else { "warn" });
    let _ = env_logger::Builder::from_env(env).try_init();
}

fn parse_date(s: &str) -> anyhow::Result<Instant> {
    s.parse::<Instant>()
        .with_context(|| format!("invalid --date {s:?}"))
}

fn resolve_place(place: &Place) -> anyhow::Result<GeoCoordinate> {
    if let Some(name) = &place.site {
        let Some(path) = &place.sites else {
            bail!("--site needs --sites FILE");
        };
        let catalog = SiteConfig::load(path)
            .with_context(|| format!("loading site catalog {}", path.display()))?;
        let mut coord = catalog.coordinate(name)?;
        if let Some(h) = place.height {
            coord = GeoCoordinate::try_new(coord.latitude_deg, coord.longitude_deg, h)?;
        }
        log::debug!("site {name} resolved to {coord:?}");
        return Ok(coord);
    }

    let (Some(lat), Some(lon)) = (place.lat, place.lon) else {
        bail!("either --lat and --lon, or --site with --sites, is required");
    };
    Ok(GeoCoordinate::try_new(lat, lon, place.height.unwrap_or(0.0))?)
}

fn fmt_opt(t: Option<Instant>) -> String {
    t.map_or_else(|| "-".to_string(), |t| t.to_string())
}

fn print_sun_times(times: &SolarTimes) {
    for (event, t) in times.iter() {
        println!("{:14} {}", format!("{}:", event.name()), fmt_opt(t));
    }
}

fn print_moon_times(mt: &MoonTimes) {
    println!("rise:          {}", fmt_opt(mt.rise));
    println!("set:           {}", fmt_opt(mt.set));
    println!("always_up:     {}", mt.always_up);
    println!("always_down:   {}", mt.always_down);
}

fn print_illumination(ill: &MoonIllumination) {
    println!("fraction:      {:.4}", ill.fraction);
    println!("phase:         {:.4}", ill.phase);
    println!("phase_name:    {}", ill.phase_name().name());
    println!("angle_deg:     {:.4}", ill.angle_rad.to_degrees());
}

#[cfg(test)]
mod tests {
    use super::*;

    fn place(lat: Option<f64>, lon: Option<f64>) -> Place {
        Place {
            lat,
            lon,
            height: None,
            site: None,
            sites: None,
        }
    }

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_negative_longitude() {
        let cli = Cli::try_parse_from([
            "lumen", "sun-times", "--date", "2024-06-21", "--lat", "51.5", "--lon", "-0.12",
        ])
        .unwrap();
        match cli.command {
            Commands::SunTimes { place, .. } => assert_eq!(place.lon, Some(-0.12)),
            _ => panic!("wrong subcommand"),
        }
    }

    #[test]
    fn site_conflicts_with_lat() {
        let res = Cli::try_parse_from([
            "lumen", "day", "--date", "2024-06-21", "--lat", "1", "--site", "x", "--sites",
            "s.toml",
        ]);
        assert!(res.is_err());
    }

    #[test]
    fn resolve_from_lat_lon() {
        let c = resolve_place(&place(Some(10.0), Some(-20.0))).unwrap();
        assert_eq!((c.latitude_deg, c.longitude_deg, c.height_m), (10.0, -20.0, 0.0));
    }

    #[test]
    fn resolve_rejects_partial_location() {
        assert!(resolve_place(&place(Some(10.0), None)).is_err());
    }

    #[test]
    fn resolve_rejects_out_of_range() {
        let err = resolve_place(&place(Some(95.0), Some(0.0))).unwrap_err();
        assert!(err.to_string().contains("latitude"));
    }

    #[test]
    fn absent_instants_render_as_dash() {
        assert_eq!(fmt_opt(None), "-");
        assert_eq!(
            fmt_opt(Some(Instant::UNIX_EPOCH)),
            "1970-01-01T00:00:00.000Z"
        );
    }

    #[test]
    fn bad_date_is_error() {
        assert!(parse_date("21/06/2024").is_err());
        assert!(parse_date("2024-06-21").is_ok());
    }
}
