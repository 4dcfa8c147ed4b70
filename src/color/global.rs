//! CSS-wide keywords.

use std::fmt;

/// A CSS-wide keyword accepted by every property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Global {
    Inherit,
    Initial,
    Unset,
    Revert,
    RevertLayer,
}

impl Global {
    pub fn as_str(self) -> &'static str {
        match self {
            Global::Inherit => "inherit",
            Global::Initial => "initial",
            Global::Unset => "unset",
            Global::Revert => "revert",
            Global::RevertLayer => "revert-layer",
        }
    }
}

impl fmt::Display for Global {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
