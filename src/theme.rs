use crate::storage::{KeyValueStore, StorageError};

pub const THEME_KEY: &str = "theme";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn toggle_label(self) -> String {
        let next = self.toggled().as_str();
        format!("Switch to {next} theme")
    }

    pub fn pressed(self) -> bool {
        matches!(self, Self::Dark)
    }

    /// The toggle shows where it will take you: a moon in light mode.
    pub fn icon(self) -> &'static str {
        match self {
            Self::Light => "fas fa-moon",
            Self::Dark => "fas fa-sun",
        }
    }

    /// Stored choice first, then the system preference.
    pub fn resolve(stored: Option<&str>, system_prefers_dark: bool) -> Self {
        stored.and_then(Self::parse).unwrap_or(if system_prefers_dark {
            Self::Dark
        } else {
            Self::Light
        })
    }
}

pub fn read_stored_theme<S: KeyValueStore + ?Sized>(store: &S) -> Option<Theme> {
    store.get(THEME_KEY).as_deref().and_then(Theme::parse)
}

pub fn persist_theme<S: KeyValueStore + ?Sized>(store: &mut S, theme: Theme) -> Result<(), StorageError> {
    store.set(THEME_KEY, theme.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    #[test]
    fn stored_theme_beats_system_preference() {
        assert_eq!(Theme::resolve(Some("light"), true), Theme::Light);
        assert_eq!(Theme::resolve(Some("dark"), false), Theme::Dark);
    }

    #[test]
    fn unknown_stored_value_falls_back_to_system() {
        assert_eq!(Theme::resolve(Some("sepia"), true), Theme::Dark);
        assert_eq!(Theme::resolve(None, false), Theme::Light);
    }

    #[test]
    fn toggle_round_trips_through_storage() {
        let mut store = MemoryStore::default();
        assert_eq!(read_stored_theme(&store), None);

        let next = Theme::Light.toggled();
        persist_theme(&mut store, next).expect("memory store accepts writes");

        assert_eq!(read_stored_theme(&store), Some(Theme::Dark));
        assert_eq!(next.icon(), "fas fa-sun");
        assert_eq!(next.toggle_label(), "Switch to light theme");
        assert!(next.pressed());
    }
}
