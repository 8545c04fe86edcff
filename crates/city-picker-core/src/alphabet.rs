// crates/city-picker-core/src/alphabet.rs
//! Alphabet quick-scroll: maps a pointer's vertical position over the letter
//! column to the group key under it.

use crate::model::CityDataset;
use crate::timer::Debouncer;
use log::trace;
use std::sync::Arc;
use std::time::Duration;

/// Layout measurements of the rendered letter column.
///
/// All letter rows are assumed to have the same height; that is a layout
/// precondition and is not checked.
pub trait LayoutMetrics {
    /// Vertical offset of the first letter element.
    fn baseline_y(&self) -> f32;
    /// Height of one letter element.
    fn element_height(&self) -> f32;
}

/// Fixed measurements, for hosts that know their layout up front.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedLayout {
    pub baseline_y: f32,
    pub element_height: f32,
}

impl FixedLayout {
    pub fn new(baseline_y: f32, element_height: f32) -> Self {
        Self {
            baseline_y,
            element_height,
        }
    }
}

impl LayoutMetrics for FixedLayout {
    fn baseline_y(&self) -> f32 {
        self.baseline_y
    }

    fn element_height(&self) -> f32 {
        self.element_height
    }
}

/// `floor((pointer_y - baseline_y) / element_height)`, if it lands on a letter.
///
/// ```rust
/// use city_picker_core::alphabet::letter_index_at;
///
/// assert_eq!(letter_index_at(145.0, 100.0, 20.0, 3), Some(2));
/// assert_eq!(letter_index_at(145.0, 100.0, 20.0, 2), None);
/// assert_eq!(letter_index_at(99.0, 100.0, 20.0, 3), None);
/// ```
pub fn letter_index_at(pointer_y: f32, baseline_y: f32, element_height: f32, len: usize) -> Option<usize> {
    if !(element_height.is_finite() && element_height > 0.0) {
        return None;
    }
    let index = ((pointer_y - baseline_y) / element_height).floor();
    if index.is_finite() && index >= 0.0 && (index as usize) < len {
        Some(index as usize)
    } else {
        None
    }
}

/// Tracks a touch gesture over the letter column.
///
/// Moves are only considered between [`on_touch_start`](Self::on_touch_start)
/// and [`on_touch_end`](Self::on_touch_end), and are debounced so that a
/// burst of moves within one frame maps to a single letter.
pub struct AlphabetTracker {
    dataset: Option<Arc<CityDataset>>,
    letters: Vec<String>,
    layout: Box<dyn LayoutMetrics>,
    baseline_y: f32,
    touching: bool,
    emit_after_release: bool,
    timer: Debouncer<f32>,
}

impl AlphabetTracker {
    pub fn new(
        dataset: Option<Arc<CityDataset>>,
        layout: Box<dyn LayoutMetrics>,
        debounce: Duration,
    ) -> Self {
        let mut tracker = Self {
            dataset: None,
            letters: Vec::new(),
            baseline_y: layout.baseline_y(),
            layout,
            touching: false,
            emit_after_release: false,
            timer: Debouncer::new(debounce),
        };
        tracker.set_dataset(dataset);
        tracker
    }

    /// Keep a move scheduled before release alive after the finger lifts.
    pub fn with_emit_after_release(mut self, enabled: bool) -> Self {
        self.emit_after_release = enabled;
        self
    }

    /// Replace the dataset; letters and the cached baseline follow it.
    pub fn set_dataset(&mut self, dataset: Option<Arc<CityDataset>>) {
        self.letters = dataset
            .as_deref()
            .map(|ds| ds.letters().into_iter().map(str::to_owned).collect())
            .unwrap_or_default();
        self.dataset = dataset;
        self.refresh_layout();
    }

    pub fn set_layout(&mut self, layout: Box<dyn LayoutMetrics>) {
        self.layout = layout;
        self.refresh_layout();
    }

    /// Re-read the baseline after anything that re-renders the letter column.
    pub fn refresh_layout(&mut self) {
        self.baseline_y = self.layout.baseline_y();
    }

    pub fn dataset(&self) -> Option<&CityDataset> {
        self.dataset.as_deref()
    }

    pub fn letters(&self) -> &[String] {
        &self.letters
    }

    pub fn baseline_y(&self) -> f32 {
        self.baseline_y
    }

    pub fn is_touching(&self) -> bool {
        self.touching
    }

    pub fn on_touch_start(&mut self) {
        trace!("alphabet: touch start");
        self.touching = true;
    }

    /// Schedule a lookup for `pointer_y`. Ignored unless a touch is active.
    pub fn on_touch_move(&mut self, now: Duration, pointer_y: f32) {
        if !self.touching {
            return;
        }
        trace!("alphabet: touch move y={pointer_y}");
        self.timer.schedule(now, pointer_y);
    }

    pub fn on_touch_end(&mut self) {
        trace!("alphabet: touch end");
        self.touching = false;
        if !self.emit_after_release {
            self.timer.cancel();
        }
    }

    /// Drop a pending lookup.
    pub fn cancel(&mut self) -> bool {
        self.timer.cancel()
    }

    /// Resolve the pending move once its window has elapsed.
    ///
    /// Returns the letter under the pointer, or `None` if nothing is due or
    /// the pointer is outside the column.
    pub fn poll(&mut self, now: Duration) -> Option<String> {
        let pointer_y = self.timer.poll(now)?;
        let index = letter_index_at(
            pointer_y,
            self.baseline_y,
            self.layout.element_height(),
            self.letters.len(),
        )?;
        self.letters.get(index).cloned()
    }
}

impl std::fmt::Debug for AlphabetTracker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AlphabetTracker")
            .field("letters", &self.letters)
            .field("baseline_y", &self.baseline_y)
            .field("touching", &self.touching)
            .field("emit_after_release", &self.emit_after_release)
            .field("pending", &self.timer.is_pending())
            .finish()
    }
}
