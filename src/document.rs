// SPDX-License-Identifier: MPL-2.0
//! The document environment: root-level attributes and class membership
//! consumed by the styling layer.

use std::cell::RefCell;
use std::rc::Rc;

/// Reading direction of the document root.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Ltr,
    Rtl,
}

impl Direction {
    /// The `dir` attribute value.
    pub fn as_attr(self) -> &'static str {
        match self {
            Direction::Ltr => "ltr",
            Direction::Rtl => "rtl",
        }
    }
}

/// Mutable view of the document root the controllers write to.
pub trait DocumentRoot {
    fn set_direction(&mut self, direction: Direction);
    fn set_language(&mut self, code: &str);
    fn add_class(&mut self, name: &str);
    fn remove_class(&mut self, name: &str);
    fn contains_class(&self, name: &str) -> bool;
}

/// Shared single-threaded handle to the document root.
pub type SharedDocument = Rc<RefCell<dyn DocumentRoot>>;

/// In-memory document root. Class addition is set-like: adding a class that
/// is already present leaves a single entry.
#[derive(Debug, Default)]
pub struct DocumentState {
    direction: Option<Direction>,
    language: Option<String>,
    classes: Vec<String>,
}

impl DocumentState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn direction(&self) -> Option<Direction> {
        self.direction
    }

    pub fn language(&self) -> Option<&str> {
        self.language.as_deref()
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }
}

impl DocumentRoot for DocumentState {
    fn set_direction(&mut self, direction: Direction) {
        self.direction = Some(direction);
    }

    fn set_language(&mut self, code: &str) {
        self.language = Some(code.to_string());
    }

    fn add_class(&mut self, name: &str) {
        if !self.contains_class(name) {
            self.classes.push(name.to_string());
        }
    }

    fn remove_class(&mut self, name: &str) {
        self.classes.retain(|class| class != name);
    }

    fn contains_class(&self, name: &str) -> bool {
        self.classes.iter().any(|class| class == name)
    }
}
