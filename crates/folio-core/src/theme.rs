//! Theme preference: one persisted string flag.
//!
//! The stored value is read once at startup and mutated only by an explicit
//! user toggle. A missing or corrupt value falls back to the default.

pub const THEME_STORAGE_KEY: &str = "theme";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    /// Parse a stored value; anything unrecognized is the default.
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            Some("dark") => Theme::Dark,
            Some("light") => Theme::Light,
            Some(other) => {
                log::warn!("unrecognized stored theme {other:?}; using default");
                Theme::default()
            }
            None => Theme::default(),
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }
}

/// Single-key string preference persistence. The web frontend backs this with
/// localStorage; tests use an in-memory map.
pub trait PreferenceStore {
    fn read(&self, key: &str) -> Option<String>;
    fn write(&self, key: &str, value: &str);
}

pub struct ThemeStore<P> {
    prefs: P,
    current: Theme,
}

impl<P: PreferenceStore> ThemeStore<P> {
    /// Read the persisted preference (or the default) once at startup.
    pub fn load(prefs: P) -> Self {
        let current = Theme::parse(prefs.read(THEME_STORAGE_KEY).as_deref());
        Self { prefs, current }
    }

    pub fn current(&self) -> Theme {
        self.current
    }

    /// Flip dark <-> light, persist, and return the new theme for the caller
    /// to apply to the document.
    pub fn toggle(&mut self) -> Theme {
        self.current = self.current.toggled();
        self.prefs.write(THEME_STORAGE_KEY, self.current.as_str());
        self.current
    }
}
