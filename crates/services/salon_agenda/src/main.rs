// File: services/salon_agenda/src/main.rs
mod book_file;
mod render;

#[cfg(test)]
mod test_support;

use salon_common::{init_from_config, log_error, log_result, validation_error, SalonError};
use salon_config::{load_config, AppConfig};
use salon_schedule::{booking::parse_date, today_in, TimeGrid, WorkerFilter};
use std::env;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;

const USAGE: &str = "usage: salon-agenda [.env file] [book.json] [YYYY-MM-DD] [worker id | all]";

/// Positional arguments, after an optional leading dotenv path.
#[derive(Debug, Default, PartialEq)]
struct Args {
    book: Option<PathBuf>,
    date: Option<String>,
    worker: Option<String>,
}

impl Args {
    fn parse<I: IntoIterator<Item = String>>(args: I) -> Self {
        let mut positional = args.into_iter().skip_while(|a| a.starts_with(".env"));
        Args {
            book: positional.next().map(PathBuf::from),
            date: positional.next(),
            worker: positional.next(),
        }
    }
}

fn run(config: &AppConfig, args: Args) -> Result<String, SalonError> {
    let book_path = args
        .book
        .or_else(|| config.agenda.data_path.as_ref().map(PathBuf::from))
        .ok_or_else(|| validation_error(format!("no book file given\n{}", USAGE)))?;
    let book = log_result(
        book_file::load_book(&book_path),
        "Book loaded",
        "Failed to load book",
    )?;

    let date = match args.date.as_deref() {
        Some(raw) => parse_date(raw)?,
        None => today_in(&config.scheduling.time_zone)?,
    };
    let filter = args
        .worker
        .as_deref()
        .map(WorkerFilter::from_selection)
        .unwrap_or_default();
    debug!("Rendering {} for {:?}", date, filter);

    let grid = TimeGrid::from_config(&config.scheduling)?;
    let day = book.day_grid(&grid, date, &filter);
    Ok(render::render_day(&day))
}

fn main() -> ExitCode {
    let config = match load_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load config: {}", e);
            return ExitCode::FAILURE;
        }
    };
    if let Err(e) = init_from_config(&config.logging) {
        eprintln!("{}", e);
        return ExitCode::FAILURE;
    }

    match run(&config, Args::parse(env::args().skip(1))) {
        Ok(agenda) => {
            print!("{}", agenda);
            ExitCode::SUCCESS
        }
        Err(e) => {
            log_error(&e, "salon-agenda");
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}
