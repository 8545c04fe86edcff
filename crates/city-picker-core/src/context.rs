// crates/city-picker-core/src/context.rs
use log::debug;

/// Application state shared by the picker screens.
///
/// Holds the selected city. There is exactly one writer,
/// [`select_city`](Self::select_city); everything else only reads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppContext {
    selected_city: String,
}

impl AppContext {
    pub fn new(default_city: impl Into<String>) -> Self {
        Self {
            selected_city: default_city.into(),
        }
    }

    pub fn selected_city(&self) -> &str {
        &self.selected_city
    }

    pub fn select_city(&mut self, name: impl Into<String>) {
        self.selected_city = name.into();
        debug!("selected city: {}", self.selected_city);
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_CITY)
    }
}

/// Returns the app to its previous screen once a city has been chosen.
pub trait Navigator {
    fn navigate_home(&mut self);
}

/// The scrollable city list, able to jump to a group heading.
pub trait ScrollTarget {
    fn scroll_to_group(&mut self, letter: &str);
}

/// Stand-in for hosts without navigation or scrolling.
#[derive(Debug, Default, Clone, Copy)]
pub struct Detached;

impl Navigator for Detached {
    fn navigate_home(&mut self) {}
}

impl ScrollTarget for Detached {
    fn scroll_to_group(&mut self, _letter: &str) {}
}
