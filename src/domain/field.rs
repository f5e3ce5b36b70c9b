//! The capability shared by every contact field.

use std::fmt::Display;

/// A validated contact field that renders back to the text it was built from.
///
/// `Display` must produce exactly [`Field::value`], so a field shown to the
/// user always matches what was typed in.
pub trait Field: Display {
    /// The original input string.
    fn value(&self) -> &str;
}
