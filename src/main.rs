// SPDX-License-Identifier: MPL-2.0
use appshell::document::{DocumentRoot, DocumentState, SharedDocument};
use appshell::i18n::fluent::{resolve_locale, I18n, SharedI18n};
use appshell::language::{Language, LanguageController, LANGUAGE_KEY};
use appshell::storage::{FileStore, SharedStore};
use appshell::theme::{ThemeController, DARK_CLASS};
use std::cell::RefCell;
use std::rc::Rc;

fn main() {
    let mut args = pico_args::Arguments::from_env();
    let cli_lang: Option<String> = args.opt_value_from_str("--lang").unwrap();
    let toggle_theme = args.contains("--toggle-theme");

    let store: SharedStore = Rc::new(RefCell::new(FileStore::new()));
    let document = Rc::new(RefCell::new(DocumentState::new()));
    let i18n: SharedI18n = Rc::new(RefCell::new(I18n::new()));

    let persisted = store.borrow().get(LANGUAGE_KEY);
    let available = i18n.borrow().available_locales.clone();

    let document_handle: SharedDocument = document.clone();
    let mut language_controller = LanguageController::new(
        Rc::clone(&i18n),
        Rc::clone(&document_handle),
        Rc::clone(&store),
    );

    // CLI override / OS locale can select a different startup language than
    // the controller's persisted-or-default one.
    if let Some(locale) = resolve_locale(cli_lang, persisted, &available) {
        if let Ok(lang) = locale.language.as_str().parse::<Language>() {
            if lang != language_controller.language() {
                language_controller.set_language(lang);
            }
        }
    }

    let theme_controller = ThemeController::new(Rc::clone(&document_handle), Rc::clone(&store));
    theme_controller.initialize();
    if toggle_theme {
        theme_controller.toggle();
    }

    let catalog = i18n.borrow();
    let doc = document.borrow();
    println!("{}", catalog.tr("app-title"));
    println!(
        "{}: {}",
        catalog.tr("language-label"),
        language_controller.language()
    );
    println!(
        "{}: {}",
        catalog.tr("direction-label"),
        doc.direction().map(|d| d.as_attr()).unwrap_or("ltr")
    );
    let theme_name = if doc.contains_class(DARK_CLASS) {
        catalog.tr("theme-dark")
    } else {
        catalog.tr("theme-light")
    };
    println!("{}: {}", catalog.tr("theme-label"), theme_name);
}
