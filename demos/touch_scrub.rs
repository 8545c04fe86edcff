//! Touch scrub example for city-picker
//!
//! Drags a simulated finger down the alphabet column in real time and prints
//! the groups the list scrolls to.

use city_picker_core::prelude::*;
use std::thread::sleep;
use std::time::Duration;

struct PrintScroller;

impl ScrollTarget for PrintScroller {
    fn scroll_to_group(&mut self, letter: &str) {
        println!("  scroll to {letter}");
    }
}

fn main() -> Result<()> {
    println!("=== City Picker Touch Scrub ===\n");

    // Letter column starts at y=80; each row is 18px tall.
    let mut picker = CityPicker::new(
        CityData::load()?,
        &PickerConfig::default(),
        Box::new(FixedLayout::new(80.0, 18.0)),
        Detached,
        PrintScroller,
    );
    println!("Letters: {}\n", picker.letters().join(" "));

    let clock = SystemClock::new();
    picker.touch_start();
    // A quick flick first: samples 4ms apart keep restarting the 16ms window,
    // so only the last one resolves.
    for y in [60.0, 66.0, 72.0, 78.0, 84.0] {
        picker.touch_move(clock.now(), y);
        sleep(Duration::from_millis(4));
        picker.tick(clock.now());
    }
    sleep(Duration::from_millis(20));
    picker.tick(clock.now());

    // Then a slow drag, one row per frame-and-a-bit.
    let mut y = 90.0;
    while y < 520.0 {
        picker.touch_move(clock.now(), y);
        sleep(Duration::from_millis(20));
        picker.tick(clock.now());
        y += 18.0;
    }
    picker.touch_end();

    sleep(Duration::from_millis(20));
    let late = picker.tick(clock.now());
    println!("\nEvents after release: {}", late.len());

    Ok(())
}
