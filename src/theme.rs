// SPDX-License-Identifier: MPL-2.0
//! Color-scheme state: keeps the document marker class and the persisted
//! preference consistent.

use crate::document::SharedDocument;
use crate::error::Error;
use crate::storage::SharedStore;
use std::str::FromStr;

/// Storage key the theme is persisted under.
pub const THEME_KEY: &str = "theme";
/// Marker class on the document root selecting the dark presentation.
pub const DARK_CLASS: &str = "dark";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn code(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn is_dark(self) -> bool {
        matches!(self, Theme::Dark)
    }

    pub fn opposite(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

impl FromStr for Theme {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(Error::UnknownTheme(other.to_string())),
        }
    }
}

/// Owns the active color scheme.
///
/// The controller keeps no theme field of its own: presence of the `dark`
/// marker class on the document root is the sole source of truth, so code
/// that manipulates the class directly changes what the next [`toggle`]
/// does.
///
/// [`toggle`]: ThemeController::toggle
pub struct ThemeController {
    document: SharedDocument,
    store: SharedStore,
}

impl ThemeController {
    pub fn new(document: SharedDocument, store: SharedStore) -> Self {
        Self { document, store }
    }

    /// Applies the persisted theme, if the stored value is exactly `light`
    /// or `dark`. Anything else leaves default presentation untouched.
    pub fn initialize(&self) {
        let saved = self.store.borrow().get(THEME_KEY);
        if let Some(theme) = saved.and_then(|value| value.parse::<Theme>().ok()) {
            self.set_theme(theme);
        }
    }

    /// Applies `theme` to the document root and persists it. Idempotent.
    pub fn set_theme(&self, theme: Theme) {
        {
            let mut document = self.document.borrow_mut();
            if theme.is_dark() {
                document.add_class(DARK_CLASS);
            } else {
                document.remove_class(DARK_CLASS);
            }
        }
        self.store.borrow_mut().set(THEME_KEY, theme.code());
    }

    /// Switches to the opposite of whatever the document currently shows.
    pub fn toggle(&self) {
        let current = if self.document.borrow().contains_class(DARK_CLASS) {
            Theme::Dark
        } else {
            Theme::Light
        };
        self.set_theme(current.opposite());
    }
}
