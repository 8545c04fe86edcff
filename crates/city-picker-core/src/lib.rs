// crates/city-picker-core/src/lib.rs
//! # city-picker-core
//!
//! The logic behind a travel app's city selection screen, without the
//! rendering:
//!
//! - [`SearchIndex`]: debounced, case-sensitive substring search over a
//!   grouped city list;
//! - [`AlphabetTracker`]: maps a finger dragged along the A–Z column to the
//!   group under it;
//! - [`AppContext`]: the selected-city store;
//! - [`CityPicker`]: ties the three together and talks to the host through
//!   the [`Navigator`] and [`ScrollTarget`] traits.
//!
//! Time is always passed in explicitly (see [`clock`]), so the same code
//! runs under a terminal, a browser or a test.
//!
//! ```rust
//! use city_picker_core::prelude::*;
//! use std::time::Duration;
//!
//! let data = CityData::load()?;
//! let mut picker = CityPicker::new(
//!     data,
//!     &PickerConfig::default(),
//!     Box::new(FixedLayout::new(100.0, 20.0)),
//!     Detached,
//!     Detached,
//! );
//!
//! picker.set_query(Duration::ZERO, "jing");
//! picker.tick(Duration::from_millis(200));
//! assert!(picker.results().iter().any(|c| c.name == "北京"));
//! # Ok::<(), city_picker_core::PickerError>(())
//! ```

pub mod alphabet;
pub mod clock;
pub mod config;
pub mod context;
pub mod error;
pub mod loader;
pub mod model;
pub mod picker;
pub mod search;
pub mod text;
pub mod timer;

pub mod prelude {
    pub use crate::alphabet::{AlphabetTracker, FixedLayout, LayoutMetrics};
    pub use crate::clock::{Clock, ManualClock};
    #[cfg(not(target_arch = "wasm32"))]
    pub use crate::clock::SystemClock;
    pub use crate::config::PickerConfig;
    pub use crate::context::{AppContext, Detached, Navigator, ScrollTarget};
    pub use crate::error::{PickerError, Result};
    pub use crate::model::{CityData, CityDataset, CityGroup, CityRecord, DatasetStats};
    pub use crate::picker::{CityPicker, PickerEvent};
    pub use crate::search::{search, CitySearch, SearchIndex, SearchState};
    pub use crate::timer::{Debouncer, TimerHandle};
}

// Re-exports
pub use crate::alphabet::{AlphabetTracker, FixedLayout, LayoutMetrics};
pub use crate::config::PickerConfig;
pub use crate::context::{AppContext, Detached, Navigator, ScrollTarget};
pub use crate::error::{PickerError, Result};
pub use crate::model::{CityData, CityDataset, CityGroup, CityRecord, DatasetStats};
pub use crate::picker::{CityPicker, PickerEvent};
pub use crate::search::{CitySearch, SearchIndex, SearchState};
