/// A keydown as the page sees it. `command` is Ctrl on most platforms and
/// Cmd (meta) on macOS; either one counts.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeyPress {
    pub key: String,
    pub command: bool,
}

impl KeyPress {
    pub fn new(key: impl Into<String>, ctrl: bool, meta: bool) -> Self {
        Self {
            key: key.into(),
            command: ctrl || meta,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shortcut {
    ToggleTheme,
    JumpHome,
    CloseOverlay,
}

impl Shortcut {
    pub fn from_key(press: &KeyPress) -> Option<Self> {
        if press.command {
            match press.key.as_str() {
                "k" => return Some(Self::ToggleTheme),
                "h" => return Some(Self::JumpHome),
                _ => {}
            }
        }

        (press.key == "Escape").then_some(Self::CloseOverlay)
    }

    /// Command shortcuts replace the browser's own binding (address bar,
    /// history). Escape keeps its default.
    pub fn suppresses_default(self) -> bool {
        !matches!(self, Self::CloseOverlay)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::ToggleTheme => "toggle-theme",
            Self::JumpHome => "jump-home",
            Self::CloseOverlay => "close-overlay",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_letters_map_to_shortcuts() {
        assert_eq!(Shortcut::from_key(&KeyPress::new("k", true, false)), Some(Shortcut::ToggleTheme));
        assert_eq!(Shortcut::from_key(&KeyPress::new("k", false, true)), Some(Shortcut::ToggleTheme));
        assert_eq!(Shortcut::from_key(&KeyPress::new("h", true, false)), Some(Shortcut::JumpHome));
    }

    #[test]
    fn plain_letters_are_left_alone() {
        assert_eq!(Shortcut::from_key(&KeyPress::new("k", false, false)), None);
        assert_eq!(Shortcut::from_key(&KeyPress::new("h", false, false)), None);
        assert_eq!(Shortcut::from_key(&KeyPress::new("j", true, true)), None);
        assert_eq!(Shortcut::from_key(&KeyPress::new("Enter", false, false)), None);
    }

    #[test]
    fn escape_closes_with_or_without_modifiers() {
        assert_eq!(Shortcut::from_key(&KeyPress::new("Escape", false, false)), Some(Shortcut::CloseOverlay));
        assert_eq!(Shortcut::from_key(&KeyPress::new("Escape", true, false)), Some(Shortcut::CloseOverlay));
    }

    #[test]
    fn only_command_shortcuts_suppress_the_browser_default() {
        assert!(Shortcut::ToggleTheme.suppresses_default());
        assert!(Shortcut::JumpHome.suppresses_default());
        assert!(!Shortcut::CloseOverlay.suppresses_default());
        assert_eq!(Shortcut::JumpHome.as_str(), "jump-home");
    }
}
