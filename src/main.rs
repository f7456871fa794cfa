use std::fs;
use std::path::PathBuf;

use chrono::Utc;
use clap::{Parser, Subcommand};
use flight_recommender::models::{FlightAlert, FlightData, FlightRecord};
use flight_recommender::utils::alert_store::AlertStore;
use flight_recommender::utils::{loader, synthetic};
use flight_recommender::{suggest, Config, FlightRanker, Preference, Recommender, SearchRequest};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "flight-recommender", about = "Rank and browse flights")]
struct Args {
    /// Flight feed to load instead of FLIGHT_DATA_PATH
    #[arg(long, global = true)]
    data: Option<PathBuf>,

    /// Use a generated pool of this many flights instead of the feed
    #[arg(long, global = true)]
    synthetic: Option<usize>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Rank the flights for a route and travel date
    Recommend {
        #[arg(long)]
        from: String,
        #[arg(long)]
        to: String,
        /// Travel date as YYYY-MM-DD
        #[arg(long)]
        date: String,
        /// balanced, cost, comfort or duration
        #[arg(long, default_value = "balanced")]
        prefer: Preference,
    },
    /// Curated list for a route, any day
    Suggest {
        #[arg(long)]
        from: String,
        #[arg(long)]
        to: String,
    },
    /// List the selectable cities, or the destinations reachable from one
    Cities {
        #[arg(long)]
        from: Option<String>,
    },
    /// Manage saved flight alerts
    #[command(subcommand)]
    Alerts(AlertsCommand),
}

#[derive(Debug, Subcommand)]
enum AlertsCommand {
    List,
    /// Save the flight-status record stored in a JSON file
    Add { file: PathBuf },
    Clear,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    if let Err(e) = run(args) {
        error!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load();

    match args.command {
        Command::Recommend {
            ref from,
            ref to,
            ref date,
            prefer,
        } => {
            let data = load_pool(&args, &config)?;
            let request =
                SearchRequest::parse(from.as_str(), to.as_str(), date)?.with_preference(prefer);
            let recommender = Recommender::with_config(config.scoring);

            let start_time = std::time::Instant::now();
            let results = recommender.rank(&data.flights, &request);
            let elapsed = start_time.elapsed();

            println!(
                "{} -> {} on {} ({}), {} mode, ranked in {:.2?}",
                request.origin,
                request.destination,
                request.date,
                request.weekday(),
                request.preference,
                elapsed
            );
            print_flights(&results);
        }
        Command::Suggest { ref from, ref to } => {
            let data = load_pool(&args, &config)?;
            let results = suggest(&data.flights, from, to);
            println!("Recommended flights from {} to {}", from, to);
            print_flights(&results);
            if let Some(top) = results.first() {
                println!("Top recommended flight: {} {}", top.airline, top.id);
            }
        }
        Command::Cities { ref from } => {
            let data = load_pool(&args, &config)?;
            let cities = match from {
                Some(origin) => data.available_destinations(origin),
                None => data.cities.iter().map(String::as_str).collect(),
            };
            for city in cities {
                println!("{}", city);
            }
        }
        Command::Alerts(ref command) => {
            run_alerts(command, &AlertStore::new(&config.alerts_path))?
        }
    }

    Ok(())
}

fn run_alerts(
    command: &AlertsCommand,
    store: &AlertStore,
) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        AlertsCommand::List => {
            let alerts = store.load();
            if alerts.is_empty() {
                println!("No flight alerts yet.");
            }
            let now = Utc::now();
            for alert in &alerts {
                println!("{}", alert.label());
                println!("  {} -> {}", alert.departure.airport, alert.arrival.airport);
                println!("  Departure: {}", alert.departure.scheduled);
                if let Some(countdown) = alert.time_until_departure(now) {
                    println!("  {}", countdown);
                }
            }
        }
        AlertsCommand::Add { file } => {
            let json_str = fs::read_to_string(file)?;
            let alert: FlightAlert = serde_json::from_str(&json_str)?;
            let label = alert.label();
            let count = store.append(alert)?;
            info!("Saved alert for {} ({} total)", label, count);
        }
        AlertsCommand::Clear => {
            store.clear()?;
            info!("Cleared alerts in {}", store.path().display());
        }
    }
    Ok(())
}

fn load_pool(args: &Args, config: &Config) -> Result<FlightData, Box<dyn std::error::Error>> {
    if let Some(count) = args.synthetic {
        info!("Generating {} synthetic flights", count);
        let mut rng = StdRng::seed_from_u64(count as u64);
        let cities = ["Delhi", "Mumbai", "Bangalore", "Pune", "Kolkata", "Chennai"];
        return Ok(synthetic::generate_flight_data(&mut rng, &cities, count));
    }

    let path = args.data.as_ref().unwrap_or(&config.flight_data_path);
    Ok(loader::load_flight_data(path)?)
}

fn print_flights(flights: &[&FlightRecord]) {
    if flights.is_empty() {
        println!("No flights found for the selected route and date.");
        return;
    }

    for (i, flight) in flights.iter().enumerate() {
        println!("{}. {} ({})  {:.0}", i + 1, flight.airline, flight.id, flight.price);
        println!("   {} -> {}", flight.departure, flight.arrival);
        println!(
            "   Duration: {}  Luggage: {}  Comfort: {}/10{}",
            flight.duration,
            flight.luggage_allowance,
            flight.comfort_score,
            if flight.meal_included { "  Meal" } else { "" }
        );
        if !flight.departure_time.is_empty() {
            println!(
                "   {} - {} | {}",
                flight.departure_time, flight.arrival_time, flight.aircraft
            );
        }
    }
}
