use chrono::Local;
use clap::Parser;
use playtop::{
    ContentFilter, DEFAULT_EVENT_COUNT, PlaytopError, ProgressEvent, Report, ReportOptions,
    compile_report, sample_catalog,
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::process;

/// Simulate viewership on the demo catalog and print today's most played titles
#[derive(Parser, Debug)]
#[command(name = "playtop", version, about)]
struct Cli {
    /// Restrict the ranking to "movies" or "series" (any other value ranks everything)
    #[arg(long)]
    filter: Option<String>,

    /// Number of simulated play events
    #[arg(long, default_value_t = DEFAULT_EVENT_COUNT)]
    events: usize,

    /// Seed for the random source, for reproducible runs
    #[arg(long)]
    seed: Option<u64>,

    /// Print progress information to stderr
    #[arg(short, long)]
    verbose: bool,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,
}

/// Handles progress events and prints formatted output to stderr
fn handle_progress_event(event: ProgressEvent) {
    match event {
        ProgressEvent::Started {
            catalog_size,
            event_count,
        } => {
            eprintln!(
                "Simulating {} play event(s) on {} title(s)...",
                event_count, catalog_size
            );
        }
        ProgressEvent::PlayEventSimulated {
            index,
            total,
            title,
            play_count,
        } => {
            eprintln!("[{}/{}] {} -> {} plays", index, total, title, play_count);
        }
        ProgressEvent::SimulationComplete { event_count } => {
            eprintln!("Simulation complete after {} event(s).", event_count);
        }
        ProgressEvent::Ranked {
            filter,
            entry_count,
        } => {
            eprintln!("Ranked {} title(s) (filter: {})\n", entry_count, filter);
        }
    }
}

fn run(cli: &Cli) -> Result<Report, PlaytopError> {
    let options = ReportOptions {
        event_count: cli.events,
        filter: ContentFilter::from_option(cli.filter.as_deref()),
    };

    // "Today" is fixed once per run
    let today = Local::now().date_naive();

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut catalog = sample_catalog();

    if cli.verbose {
        compile_report(&mut catalog, options, today, &mut rng, handle_progress_event)
    } else {
        compile_report(&mut catalog, options, today, &mut rng, |_| {})
    }
}

fn main() {
    let cli = Cli::parse();

    let report = match run(&cli) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    if cli.json {
        match serde_json::to_string_pretty(&report).map_err(PlaytopError::from) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Error: {}", e);
                process::exit(1);
            }
        }
    } else {
        print!("{}", report);
    }
}
