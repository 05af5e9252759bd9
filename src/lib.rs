// SPDX-License-Identifier: MPL-2.0
//! `appshell` is the preference core of a bilingual (English/Persian)
//! application shell.
//!
//! It provides two independent controllers, [`language::LanguageController`]
//! and [`theme::ThemeController`], that keep the Fluent message catalog,
//! the document environment, and a persistent key-value store consistent
//! with the user's language and color-scheme choices.

pub mod config;
pub mod document;
pub mod error;
pub mod i18n;
pub mod language;
pub mod observable;
pub mod storage;
pub mod theme;
