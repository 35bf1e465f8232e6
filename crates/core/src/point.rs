//! Point record
//!
//! A `Point` holds two coordinates and a display label. After every
//! successful [`Point::update`] the label reads `Point(<x>,<y>)` for the
//! current coordinates.
//!
//! The label lives in a [`Label`] with a fixed byte capacity. Writes past the
//! capacity fail instead of spilling, and `update` rejects the whole change
//! when the new label would not fit: coordinates and label stay as they were.

use crate::error::DemoError;
use std::fmt::{self, Write};
use tracing::{debug, warn};

/// Bytes available for a point label
pub const LABEL_CAPACITY: usize = 20;

/// Text buffer that refuses to grow past `LABEL_CAPACITY` bytes
///
/// Implements `fmt::Write`, so `write!` works on it directly. A write that
/// would overflow returns `fmt::Error` and leaves the contents unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Label {
    text: String,
}

impl Label {
    pub fn new() -> Self {
        Label {
            text: String::with_capacity(LABEL_CAPACITY),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

impl Write for Label {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        if self.text.len() + s.len() > LABEL_CAPACITY {
            return Err(fmt::Error);
        }
        self.text.push_str(s);
        Ok(())
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl PartialEq<&str> for Label {
    fn eq(&self, other: &&str) -> bool {
        self.text == *other
    }
}

/// A point with a label derived from its coordinates
///
/// `Point::default()` is the not-yet-updated state: both coordinates 0 and
/// an empty label. Callers are expected to `update` before reading it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Point {
    x: i64,
    y: i64,
    label: Label,
}

impl Point {
    /// Move the point to `(x, y)` and regenerate its label
    ///
    /// # Errors
    ///
    /// Returns `DemoError::LabelOverflow` if `Point(<x>,<y>)` is longer than
    /// `LABEL_CAPACITY` bytes. The point is not modified in that case.
    pub fn update(&mut self, x: i64, y: i64) -> Result<(), DemoError> {
        let mut label = Label::new();
        if write!(label, "Point({},{})", x, y).is_err() {
            let needed = format!("Point({},{})", x, y).len();
            warn!(x, y, needed, "update: label does not fit, point left unchanged");
            return Err(DemoError::LabelOverflow {
                needed,
                capacity: LABEL_CAPACITY,
            });
        }

        self.x = x;
        self.y = y;
        self.label = label;
        debug!(label = self.label.as_str(), "update: point moved");
        Ok(())
    }

    pub fn x(&self) -> i64 {
        self.x
    }

    pub fn y(&self) -> i64 {
        self.y
    }

    pub fn label(&self) -> &Label {
        &self.label
    }
}
