//! city-picker — Command-line front end for city-picker-core
//!
//! Runs the picker's search, alphabet index and selection against a dataset
//! and prints what a UI would show. Timers run on a simulated clock, so a
//! whole typing burst or touch gesture completes instantly.
//!
//! Usage examples
//! --------------
//!
//! - Show dataset stats
//!   $ city-picker stats
//!
//! - Type "b", "be", "bei" quickly and print the final results
//!   $ city-picker search b be bei
//!
//! - Drag along a 20px-per-letter column that starts at y=100
//!   $ city-picker touch --baseline 100 --height 20 105 125 145
//!
//! - Select a city
//!   $ city-picker select 上海
//!
//! Data source
//! -----------
//!
//! By default the bundled sample dataset is used. Pass `--input <path>` to
//! load a `.json` or `.json.gz` file with the same shape.
mod args;

use crate::args::{CliArgs, Commands, LogLevel};
use anyhow::{bail, Context};
use city_picker_core::prelude::*;
use clap::Parser;
use log::{info, LevelFilter};
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};
use std::time::Duration;

/// Logs navigation instead of switching screens.
struct LogNavigator;

impl Navigator for LogNavigator {
    fn navigate_home(&mut self) {
        info!("navigate home");
    }
}

/// Records the groups the list was scrolled to.
#[derive(Default)]
struct ScrollLog(Vec<String>);

impl ScrollTarget for ScrollLog {
    fn scroll_to_group(&mut self, letter: &str) {
        info!("scroll to group {letter}");
        self.0.push(letter.to_string());
    }
}

fn init_logging(level: LogLevel) {
    let filter = match level {
        LogLevel::Off => LevelFilter::Off,
        LogLevel::Error => LevelFilter::Error,
        LogLevel::Warn => LevelFilter::Warn,
        LogLevel::Info => LevelFilter::Info,
        LogLevel::Debug => LevelFilter::Debug,
        LogLevel::Trace => LevelFilter::Trace,
    };
    // Only fails if a logger is already installed.
    let _ = TermLogger::init(filter, Config::default(), TerminalMode::Stderr, ColorChoice::Auto);
}

fn print_city(city: &CityRecord) {
    println!("{} ({}) [{}]", city.name(), city.spell(), city.id());
}

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();
    init_logging(args.log_level);

    let config = match &args.config {
        Some(path) => PickerConfig::from_path(path)?,
        None => PickerConfig::default(),
    };

    let data = match &args.input {
        Some(path) => CityData::load_from_path(path)
            .with_context(|| format!("loading dataset {}", path.display()))?,
        None => CityData::load()?,
    };

    let layout = match &args.command {
        Commands::Touch {
            baseline, height, ..
        } => FixedLayout::new(*baseline, *height),
        _ => FixedLayout::new(0.0, 20.0),
    };

    let clock = ManualClock::new();
    let mut picker = CityPicker::new(
        data,
        &config,
        Box::new(layout),
        LogNavigator,
        ScrollLog::default(),
    );

    match args.command {
        Commands::Stats => {
            let stats = picker.dataset().stats();
            println!("Dataset statistics:");
            println!("  Groups: {}", stats.groups);
            println!("  Cities: {}", stats.cities);
            println!("  Hot cities: {}", picker.hot_cities().len());
            println!("  Selected city: {}", picker.selected_city());
        }

        Commands::Letters => {
            println!("{}", picker.letters().join(" "));
        }

        Commands::Hot => {
            for city in picker.hot_cities() {
                print_city(city);
            }
        }

        Commands::Group { letter } => match picker.dataset().group(&letter) {
            Some(group) => {
                for city in group.cities() {
                    print_city(city);
                }
            }
            None => eprintln!("No group {letter}"),
        },

        Commands::Search {
            queries,
            interval_ms,
        } => {
            let step = Duration::from_millis(interval_ms);
            for query in queries {
                picker.set_query(clock.now(), query);
                clock.advance(step);
                // Keystrokes slower than the window each trigger a search.
                picker.tick(clock.now());
            }
            // The last keystroke doesn't have to wait out the window.
            picker.flush_search();

            info!("{} search computation(s)", picker.search().revision());
            if picker.results().is_empty() {
                println!("No cities found matching: {}", picker.search().query());
            } else {
                for city in picker.results() {
                    print_city(city);
                }
            }
        }

        Commands::Touch {
            interval_ms,
            pointer_y,
            ..
        } => {
            let step = Duration::from_millis(interval_ms);
            picker.touch_start();
            for y in pointer_y {
                picker.touch_move(clock.now(), y);
                clock.advance(step);
                for event in picker.tick(clock.now()) {
                    if let PickerEvent::LetterSelected { letter } = event {
                        println!("y={y} -> {letter}");
                    }
                }
            }
            picker.touch_end();
            clock.advance(config.touch_debounce());
            for event in picker.tick(clock.now()) {
                if let PickerEvent::LetterSelected { letter } = event {
                    println!("after release -> {letter}");
                }
            }

            if picker.scroller().0.is_empty() {
                println!("No letter hit");
            }
        }

        Commands::Select { name } => {
            let Some(city) = picker.find_by_name(&name).cloned() else {
                bail!("No city named {name}");
            };
            picker.choose(city.name());
            println!("Selected city: {}", picker.selected_city());
        }
    }

    Ok(())
}
