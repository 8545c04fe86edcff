//! Basic usage example for city-picker
//!
//! Loads the bundled dataset, runs a debounced search and picks a city.

use city_picker_core::prelude::*;
use std::time::Duration;

struct PrintNavigator;

impl Navigator for PrintNavigator {
    fn navigate_home(&mut self) {
        println!("  -> navigating home");
    }
}

fn main() -> Result<()> {
    println!("=== City Picker Basic Usage ===\n");

    let data = CityData::load()?;
    let stats = data.stats();
    println!(
        "Loaded {} cities in {} groups ({} hot)\n",
        stats.cities, stats.groups, stats.hot_cities
    );

    let mut picker = CityPicker::new(
        data,
        &PickerConfig::default(),
        Box::new(FixedLayout::new(0.0, 20.0)),
        PrintNavigator,
        Detached,
    );

    println!("--- Alphabet index ---");
    println!("{}\n", picker.letters().join(" "));

    println!("--- Hot cities ---");
    for city in picker.hot_cities() {
        println!("  {} ({})", city.name, city.spell);
    }
    println!();

    // Simulate typing "s", "sh", "sha" 60ms apart.
    let clock = ManualClock::new();
    for query in ["s", "sh", "sha"] {
        picker.set_query(clock.now(), query);
        clock.advance(Duration::from_millis(60));
        picker.tick(clock.now());
    }
    clock.advance(Duration::from_millis(200));
    for event in picker.tick(clock.now()) {
        println!("event: {event:?}");
    }

    println!("--- Results for {:?} ---", picker.search().query());
    for city in picker.results() {
        println!("  {} ({})", city.name, city.spell);
    }
    println!();

    println!("--- Choosing the first result ---");
    if let Some(event) = picker.choose_result(0) {
        println!("event: {event:?}");
    }
    println!("Selected city: {}", picker.selected_city());

    Ok(())
}
