// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the shell.
//!
//! This module provides localization using the Fluent localization system:
//! embedded `.ftl` catalogs for the supported locales, a mutable
//! current-locale slot written by the language controller, and message
//! lookup with a fallback locale.

pub mod fluent;
