use clap::{Args, Parser, Subcommand};
use stellium_chart::{
    ChartConfig, ChartSnapshot, ExportStep, Location, ZodiacMode, aspects_with_orbs,
    compute_chart, export_range_csv, format_zodiac,
};
use stellium_core::{AyanamsaFrame, Center, HouseSystem, NodeVariant};
use stellium_mean::MeanEphemeris;
use stellium_time::{Moment, ZoneSpec, normalize};
use stellium_wheel::{WheelGeometry, layout};

#[derive(Parser)]
#[command(name = "stellium", about = "Astrological chart computation CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute a chart for one moment
    Chart {
        #[command(flatten)]
        when: WhenArgs,
        #[command(flatten)]
        frame: FrameArgs,
        /// Observer latitude in degrees (requires --lon)
        #[arg(long, requires = "lon")]
        lat: Option<f64>,
        /// Observer longitude in degrees, east positive (requires --lat)
        #[arg(long, requires = "lat")]
        lon: Option<f64>,
        /// House system: equal, equal-mid, placidus
        #[arg(long, default_value = "equal")]
        houses: String,
        /// Emit the snapshot as JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Export body longitudes over a time range as CSV
    Export {
        /// Range start date (YYYY-MM-DD)
        #[arg(long)]
        start: String,
        /// Range end date (YYYY-MM-DD)
        #[arg(long)]
        end: String,
        /// Time of day applied to both endpoints (HH:MM)
        #[arg(long, default_value = "00:00")]
        time: String,
        /// Step granularity: hour, 6h, day
        #[arg(long, default_value = "day")]
        step: String,
        #[command(flatten)]
        zone: ZoneArgs,
        #[command(flatten)]
        frame: FrameArgs,
    },
    /// Compute a chart and print its projected wheel layout as JSON
    Wheel {
        #[command(flatten)]
        when: WhenArgs,
        #[command(flatten)]
        frame: FrameArgs,
        #[arg(long, requires = "lon")]
        lat: Option<f64>,
        #[arg(long, requires = "lat")]
        lon: Option<f64>,
        #[arg(long, default_value = "equal")]
        houses: String,
        /// Outer wheel radius in drawing units
        #[arg(long, default_value = "280")]
        radius: f64,
    },
}

#[derive(Args)]
struct WhenArgs {
    /// Local civil date (YYYY-MM-DD, signed year accepted)
    #[arg(long)]
    date: String,
    /// Local civil time (HH:MM)
    #[arg(long, default_value = "12:00")]
    time: String,
    #[command(flatten)]
    zone: ZoneArgs,
}

#[derive(Args)]
struct ZoneArgs {
    /// Fixed UTC offset in hours (no daylight saving applied)
    #[arg(long, conflicts_with = "zone")]
    offset: Option<f64>,
    /// IANA timezone name, e.g. America/Chicago
    #[arg(long)]
    zone: Option<String>,
}

#[derive(Args)]
struct FrameArgs {
    /// Sidereal frame: fagan-bradley, lahiri, krishnamurti, raman
    #[arg(long, default_value = "fagan-bradley")]
    ayanamsa: String,
    /// Additive ayanamsa calibration in degrees
    #[arg(long, default_value = "0")]
    ayanamsa_offset: f64,
    /// Use the sidereal zodiac for signs, aspects, and the wheel
    #[arg(long)]
    sidereal: bool,
    /// Heliocentric positions (suppresses the node points)
    #[arg(long)]
    heliocentric: bool,
    /// Use the mean node instead of the true node
    #[arg(long)]
    mean_node: bool,
    /// Leave the node points out of the chart
    #[arg(long)]
    no_nodes: bool,
    /// Comma-separated per-aspect orb overrides in table order
    /// (conjunction,sextile,square,trine,opposition); blank or
    /// unparsable entries keep the default
    #[arg(long)]
    orbs: Option<String>,
}

impl ZoneArgs {
    fn to_spec(&self) -> ZoneSpec {
        match (&self.offset, &self.zone) {
            (Some(h), _) => ZoneSpec::FixedHours(*h),
            (None, Some(name)) => ZoneSpec::Named(name.clone()),
            (None, None) => ZoneSpec::FixedHours(0.0),
        }
    }
}

impl FrameArgs {
    fn to_config(&self, house_system: HouseSystem) -> ChartConfig {
        let mut config = ChartConfig {
            center: if self.heliocentric {
                Center::Heliocentric
            } else {
                Center::Geocentric
            },
            node_variant: if self.mean_node {
                NodeVariant::Mean
            } else {
                NodeVariant::True
            },
            include_nodes: !self.no_nodes,
            zodiac_mode: if self.sidereal {
                ZodiacMode::Sidereal
            } else {
                ZodiacMode::Tropical
            },
            house_system,
            ..ChartConfig::default()
        };
        config.ayanamsa.frame = parse_frame(&self.ayanamsa);
        config.ayanamsa.extra_offset_deg = self.ayanamsa_offset;
        if let Some(raw) = &self.orbs {
            let overrides: Vec<Option<f64>> =
                raw.split(',').map(|s| s.trim().parse().ok()).collect();
            config.aspects = aspects_with_orbs(&overrides);
        }
        config
    }
}

fn parse_frame(s: &str) -> AyanamsaFrame {
    match s.to_ascii_lowercase().as_str() {
        "fagan-bradley" | "fagan_bradley" | "fb" => AyanamsaFrame::FaganBradley,
        "lahiri" => AyanamsaFrame::Lahiri,
        "krishnamurti" | "kp" => AyanamsaFrame::Krishnamurti,
        "raman" => AyanamsaFrame::Raman,
        _ => {
            eprintln!("Invalid ayanamsa frame: {s}");
            eprintln!("Valid: fagan-bradley, lahiri, krishnamurti, raman");
            std::process::exit(1);
        }
    }
}

fn parse_house_system(s: &str) -> HouseSystem {
    match s.to_ascii_lowercase().as_str() {
        "equal" | "equal-cusp" => HouseSystem::EqualAscCusp,
        "equal-mid" | "equal-midpoint" => HouseSystem::EqualAscMid,
        "placidus" => HouseSystem::Placidus,
        _ => {
            eprintln!("Invalid house system: {s}");
            eprintln!("Valid: equal, equal-mid, placidus");
            std::process::exit(1);
        }
    }
}

fn normalize_or_exit(date: &str, time: &str, zone: &ZoneSpec) -> Moment {
    normalize(date, time, zone).unwrap_or_else(|e| {
        eprintln!("Failed to normalize time: {e}");
        std::process::exit(1);
    })
}

fn location_of(lat: Option<f64>, lon: Option<f64>) -> Option<Location> {
    Some(Location {
        latitude_deg: lat?,
        longitude_deg: lon?,
    })
}

fn print_chart_table(snapshot: &ChartSnapshot, zone: &ZoneSpec) {
    let utc = snapshot.moment.to_civil_utc();
    println!("UTC      {utc}  (input zone: {})", zone.label());
    println!("JD (UT)  {:.6}", snapshot.moment.jd_ut());
    println!("Ayanamsa {:.6} deg", snapshot.ayanamsa_deg);
    println!();
    println!("{:<12} {:>24} {:>24}", "Body", "Tropical", "Sidereal");
    for p in &snapshot.positions {
        println!(
            "{} {:<10} {:>24} {:>24}",
            p.body.glyph(),
            p.body.name(),
            format_zodiac(p.tropical_deg),
            format_zodiac(p.sidereal_deg),
        );
    }

    if let Some(h) = &snapshot.houses {
        println!();
        println!("Ascendant  {}", format_zodiac(h.ascendant_deg));
        println!("Midheaven  {}", format_zodiac(h.midheaven_deg));
        for (i, cusp) in h.cusps_deg.iter().enumerate() {
            println!("House {:<2}   {}", i + 1, format_zodiac(*cusp));
        }
    }

    if !snapshot.aspects.is_empty() {
        println!();
        for hit in &snapshot.aspects {
            println!(
                "{} {} {} {}  ({}{:+.2} deg)",
                hit.body_a.name(),
                hit.definition.glyph,
                hit.body_b.name(),
                hit.definition.name,
                hit.definition.glyph,
                hit.deviation_deg,
            );
        }
    }
}

fn main() {
    let cli = Cli::parse();
    let eph = MeanEphemeris::new();

    match cli.command {
        Commands::Chart {
            when,
            frame,
            lat,
            lon,
            houses,
            json,
        } => {
            let zone = when.zone.to_spec();
            let moment = normalize_or_exit(&when.date, &when.time, &zone);
            let config = frame.to_config(parse_house_system(&houses));
            let snapshot = compute_chart(&eph, moment, location_of(lat, lon), &config)
                .unwrap_or_else(|e| {
                    eprintln!("Chart computation failed: {e}");
                    std::process::exit(1);
                });
            if json {
                match serde_json::to_string_pretty(&snapshot) {
                    Ok(s) => println!("{s}"),
                    Err(e) => {
                        eprintln!("Failed to serialize snapshot: {e}");
                        std::process::exit(1);
                    }
                }
            } else {
                print_chart_table(&snapshot, &zone);
            }
        }

        Commands::Export {
            start,
            end,
            time,
            step,
            zone,
            frame,
        } => {
            let spec = zone.to_spec();
            let start = normalize_or_exit(&start, &time, &spec);
            let end = normalize_or_exit(&end, &time, &spec);
            let step = ExportStep::from_name(&step).unwrap_or_else(|| {
                eprintln!("Invalid step: use hour, 6h, or day");
                std::process::exit(1);
            });
            let config = frame.to_config(HouseSystem::EqualAscCusp);
            let csv = export_range_csv(&eph, start, end, step, &config).unwrap_or_else(|e| {
                eprintln!("Export failed: {e}");
                std::process::exit(1);
            });
            print!("{csv}");
        }

        Commands::Wheel {
            when,
            frame,
            lat,
            lon,
            houses,
            radius,
        } => {
            let zone = when.zone.to_spec();
            let moment = normalize_or_exit(&when.date, &when.time, &zone);
            let config = frame.to_config(parse_house_system(&houses));
            let snapshot = compute_chart(&eph, moment, location_of(lat, lon), &config)
                .unwrap_or_else(|e| {
                    eprintln!("Chart computation failed: {e}");
                    std::process::exit(1);
                });
            let geometry = WheelGeometry {
                radius,
                ..WheelGeometry::default()
            };
            let wheel = layout(&snapshot, geometry);
            match serde_json::to_string_pretty(&wheel) {
                Ok(s) => println!("{s}"),
                Err(e) => {
                    eprintln!("Failed to serialize wheel: {e}");
                    std::process::exit(1);
                }
            }
        }
    }
}
