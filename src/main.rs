// Galaxy Atlas visitation history - command line entry point

use clap::{Args, Parser, Subcommand};
use atlas_history::{
    AtlasConfig, FileStorage, GalaxyCoordinates, Indicator, PageContext, VisitedLocationStore,
    CONFIG_FILE,
};
use atlas_history::models::{clamp_coordinate, select_option_index};
use atlas_history::operations::{record_page_visit, revealed_indicators, visitation_report};
use atlas_history::verbosity::set_verbosity_level;
use atlas_history::{v_error, v_summary};

#[derive(Parser, Debug)]
#[command(name = "atlas-history", about = "Galaxy Atlas visited-location history")]
struct Cli {
    /// Configuration file (created with defaults if missing)
    #[arg(long, default_value = CONFIG_FILE)]
    config: String,

    /// Increase diagnostic output (-v basic, -vv full)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Args, Debug, Clone)]
struct PageArgs {
    /// Galaxy coordinate key, e.g. "5,12,-3"
    #[arg(allow_hyphen_values = true)]
    coordinates: String,

    #[arg(long)]
    system: Option<String>,

    #[arg(long)]
    planet: Option<String>,
}

impl PageArgs {
    fn context(&self) -> PageContext {
        PageContext::new(
            Some(&self.coordinates),
            self.system.as_deref(),
            self.planet.as_deref(),
        )
    }
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Mark the page's location as visited
    Mark(PageArgs),
    /// Print whether the page's location has been visited
    Check(PageArgs),
    /// Print visitation status for each level of the page's location
    Report(PageArgs),
    /// Print which seen indicators the page should reveal
    Indicators {
        #[command(flatten)]
        page: PageArgs,
        /// System indicator ids present on the page
        #[arg(long = "system-indicator")]
        systems: Vec<String>,
        /// Planet indicator names present on the page
        #[arg(long = "planet-indicator")]
        planets: Vec<String>,
    },
    /// Print a random coordinate triple
    RandomCoords,
    /// Normalize a typed coordinate and find its named range
    SelectOption {
        value: String,
        /// Ascending lower bounds of the named ranges
        #[arg(long, value_delimiter = ',')]
        options: Vec<u32>,
    },
    /// Dump the stored visitation record as JSON
    Dump,
    /// Show storage location and visitation totals
    Status,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    set_verbosity_level(cli.verbose);

    let config = AtlasConfig::load_or_create(&cli.config)?;
    config.validate()?;
    if cli.verbose == 0 && config.output.verbosity > 0 {
        set_verbosity_level(config.output.verbosity);
    }
    config.print_summary();

    let backend = FileStorage::new(&config.storage.path);
    let mut store = VisitedLocationStore::with_slot(backend, &config.storage.slot);

    match cli.command {
        Command::Mark(page) => match record_page_visit(&mut store, &page.context()) {
            Ok(Some(location)) => {
                v_summary!("🪐 Marked {} as visited", location);
            }
            Ok(None) => {
                v_error!("❌ Coordinates are required to mark a visit");
                return Err("missing coordinates".into());
            }
            Err(e) => {
                v_error!("❌ Failed to record visit: {}", e);
                return Err(e);
            }
        },
        Command::Check(page) => {
            let visited = page
                .context()
                .location()
                .is_some_and(|location| store.is_visited(&location));
            println!("{}", visited);
        }
        Command::Report(page) => {
            for line in visitation_report(&store, &page.context()) {
                println!("{}", line);
            }
        }
        Command::Indicators {
            page,
            systems,
            planets,
        } => {
            let indicators: Vec<Indicator> = systems
                .into_iter()
                .map(Indicator::System)
                .chain(planets.into_iter().map(Indicator::Planet))
                .collect();
            for indicator in revealed_indicators(&store, &page.context(), &indicators) {
                match indicator {
                    Indicator::System(system) => println!("system {}", system),
                    Indicator::Planet(planet) => println!("planet {}", planet),
                }
            }
        }
        Command::RandomCoords => {
            let coordinates =
                GalaxyCoordinates::random(&mut rand::rng(), config.coordinates.max_coordinate);
            println!("{}", coordinates);
        }
        Command::SelectOption { value, options } => {
            let max = config.coordinates.max_coordinate;
            let value = clamp_coordinate(&value, max);
            match select_option_index(&options, value, max) {
                Some(index) => println!("{} {}", value, index),
                None => println!("{} none", value),
            }
        }
        Command::Dump => {
            println!("{}", serde_json::to_string_pretty(&store.record())?);
        }
        Command::Status => {
            let record = store.record();
            let backend = store.backend();
            println!("💾 Storage file: {}", backend.path().display());
            match backend.last_modified() {
                Some(modified) => {
                    println!("🕒 Last written: {}", modified.format("%Y-%m-%d %H:%M:%S UTC"));
                }
                None => println!("🕒 Nothing stored yet"),
            }
            println!(
                "🌌 Visited: {} galaxies, {} systems, {} planets",
                record.galaxy_count(),
                record.system_count(),
                record.planet_count()
            );
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coordinates_may_start_with_a_minus_sign() {
        let cli = Cli::try_parse_from(["atlas-history", "mark", "-5,12,3", "--system", "2"])
            .expect("negative coordinate key should parse");

        match cli.command {
            Command::Mark(page) => {
                assert_eq!(page.coordinates, "-5,12,3");
                assert_eq!(page.system.as_deref(), Some("2"));
            }
            other => panic!("Unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_verbose_flag_still_parses_before_subcommand() {
        let cli = Cli::try_parse_from(["atlas-history", "-vv", "check", "1,2,3"])
            .expect("verbose flag should parse");
        assert_eq!(cli.verbose, 2);
    }
}
