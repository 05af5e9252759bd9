// SPDX-License-Identifier: MPL-2.0
//! Active-language state: keeps the catalog locale, the document attributes,
//! and the persisted preference consistent.

use crate::document::{Direction, SharedDocument};
use crate::error::Error;
use crate::i18n::fluent::SharedI18n;
use crate::observable::Observable;
use crate::storage::SharedStore;
use std::fmt;
use std::rc::Rc;
use std::str::FromStr;
use unic_langid::LanguageIdentifier;

/// Storage key the active language is persisted under.
pub const LANGUAGE_KEY: &str = "app-language";

/// A language the shell can display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    En,
    Fa,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::En, Language::Fa];

    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Fa => "fa",
        }
    }

    /// Reading direction derived from the language.
    pub fn direction(self) -> Direction {
        match self {
            Language::Fa => Direction::Rtl,
            Language::En => Direction::Ltr,
        }
    }

    pub fn locale(self) -> LanguageIdentifier {
        self.code().parse().unwrap()
    }
}

impl Default for Language {
    fn default() -> Self {
        Language::Fa
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "en" => Ok(Language::En),
            "fa" => Ok(Language::Fa),
            other => Err(Error::UnknownLanguage(other.to_string())),
        }
    }
}

/// Owns the active UI language.
///
/// Construction reads the persisted preference (defaulting to Persian) and
/// wires a subscriber on the language cell; the subscriber re-applies the
/// catalog locale and the document direction on every write to the cell,
/// including the eager run at wiring time. The document `lang` attribute and
/// the persisted value are written only by [`set_language`].
///
/// [`set_language`]: LanguageController::set_language
pub struct LanguageController {
    language: Observable<Language>,
    document: SharedDocument,
    store: SharedStore,
}

impl LanguageController {
    pub fn new(i18n: SharedI18n, document: SharedDocument, store: SharedStore) -> Self {
        let initial = store
            .borrow()
            .get(LANGUAGE_KEY)
            .and_then(|code| code.parse().ok())
            .unwrap_or_default();

        let mut language = Observable::new(initial);
        let catalog = Rc::clone(&i18n);
        let doc = Rc::clone(&document);
        language.subscribe(move |lang: &Language| {
            catalog.borrow_mut().set_locale(lang.locale());
            doc.borrow_mut().set_direction(lang.direction());
        });

        Self {
            language,
            document,
            store,
        }
    }

    pub fn language(&self) -> Language {
        self.language.get()
    }

    /// Direct access to the language cell. Writes through this path still
    /// re-apply the catalog locale and the document direction, but do not
    /// persist anything and do not touch the document `lang` attribute.
    pub fn language_mut(&mut self) -> &mut Observable<Language> {
        &mut self.language
    }

    /// Switches the active language: updates the cell (which re-applies the
    /// catalog locale and document direction), sets the document `lang`
    /// attribute, and persists the code.
    pub fn set_language(&mut self, lang: Language) {
        self.language.set(lang);
        self.document.borrow_mut().set_language(lang.code());
        self.store.borrow_mut().set(LANGUAGE_KEY, lang.code());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::DocumentState;
    use crate::i18n::fluent::I18n;
    use crate::storage::{MemoryStore, PreferenceStore};
    use std::cell::RefCell;

    type Fixture = (
        SharedI18n,
        Rc<RefCell<DocumentState>>,
        Rc<RefCell<MemoryStore>>,
        LanguageController,
    );

    fn fixture_with(seed: Option<&str>) -> Fixture {
        let i18n: SharedI18n = Rc::new(RefCell::new(I18n::new()));
        let document = Rc::new(RefCell::new(DocumentState::new()));
        let store = Rc::new(RefCell::new(MemoryStore::new()));
        if let Some(code) = seed {
            store.borrow_mut().set(LANGUAGE_KEY, code);
        }
        let document_handle: SharedDocument = document.clone();
        let store_handle: SharedStore = store.clone();
        let controller = LanguageController::new(Rc::clone(&i18n), document_handle, store_handle);
        (i18n, document, store, controller)
    }

    #[test]
    fn defaults_to_persian_when_nothing_is_persisted() {
        let (i18n, document, store, controller) = fixture_with(None);

        assert_eq!(controller.language(), Language::Fa);
        assert_eq!(i18n.borrow().current_locale().to_string(), "fa");
        assert_eq!(document.borrow().direction(), Some(Direction::Rtl));
        // Construction neither persists nor sets the lang attribute.
        assert!(store.borrow().is_empty());
        assert!(document.borrow().language().is_none());
    }

    #[test]
    fn picks_up_recognized_persisted_language() {
        let (i18n, document, _store, controller) = fixture_with(Some("en"));

        assert_eq!(controller.language(), Language::En);
        assert_eq!(i18n.borrow().current_locale().to_string(), "en");
        assert_eq!(document.borrow().direction(), Some(Direction::Ltr));
    }

    #[test]
    fn unrecognized_persisted_language_falls_back_to_persian() {
        let (_i18n, document, _store, controller) = fixture_with(Some("de"));

        assert_eq!(controller.language(), Language::Fa);
        assert_eq!(document.borrow().direction(), Some(Direction::Rtl));
    }

    #[test]
    fn set_language_applies_the_full_effect_set() {
        for lang in Language::ALL {
            let (i18n, document, store, mut controller) = fixture_with(None);

            controller.set_language(lang);

            assert_eq!(controller.language(), lang);
            assert_eq!(i18n.borrow().current_locale().to_string(), lang.code());
            let expected_dir = if lang == Language::Fa {
                Direction::Rtl
            } else {
                Direction::Ltr
            };
            assert_eq!(document.borrow().direction(), Some(expected_dir));
            assert_eq!(document.borrow().language(), Some(lang.code()));
            assert_eq!(store.borrow().get(LANGUAGE_KEY).as_deref(), Some(lang.code()));
        }
    }

    #[test]
    fn direct_cell_write_applies_locale_and_direction_only() {
        let (i18n, document, store, mut controller) = fixture_with(None);

        controller.language_mut().set(Language::En);

        assert_eq!(i18n.borrow().current_locale().to_string(), "en");
        assert_eq!(document.borrow().direction(), Some(Direction::Ltr));
        // The asymmetry: no persistence, no lang attribute.
        assert!(store.borrow().get(LANGUAGE_KEY).is_none());
        assert!(document.borrow().language().is_none());
    }

    #[test]
    fn language_parse_rejects_unknown_codes() {
        assert!(matches!(
            "klingon".parse::<Language>(),
            Err(Error::UnknownLanguage(code)) if code == "klingon"
        ));
    }

    #[test]
    fn direction_is_rtl_only_for_persian() {
        assert_eq!(Language::Fa.direction(), Direction::Rtl);
        assert_eq!(Language::En.direction(), Direction::Ltr);
    }
}
