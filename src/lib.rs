//! Workspace umbrella crate. Re-exports `city-picker-core` so the demos and
//! downstream users can depend on a single name.

pub use city_picker_core::*;
