//! Bundle representation formats.
//!
//! A provider negotiates between two representations of the same bundle
//! name: a compiled type constructed through the scope's type resolution, and
//! a textual resource decoded from a byte stream. Formats are configured as
//! string identifiers and validated at construction; the declared order is
//! the only precedence rule.

use std::fmt;
use std::str::FromStr;

use crate::error::InvalidFormatError;

/// Identifier accepted for the compiled-type representation.
const COMPILED_TYPE: &str = "compiled-type";
/// Identifier accepted for the textual representation.
const TEXTUAL: &str = "textual";

/// A bundle representation a provider may attempt.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum BundleFormat {
    /// The bundle is a constructible type resolved within the scope.
    CompiledType,
    /// The bundle is a textual key/value resource decoded from a stream.
    Textual,
}

impl BundleFormat {
    /// The string identifier this format is configured under.
    #[must_use]
    pub const fn identifier(self) -> &'static str {
        match self {
            Self::CompiledType => COMPILED_TYPE,
            Self::Textual => TEXTUAL,
        }
    }
}

impl fmt::Display for BundleFormat {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.identifier())
    }
}

impl FromStr for BundleFormat {
    type Err = InvalidFormatError;

    fn from_str(identifier: &str) -> Result<Self, Self::Err> {
        match identifier {
            COMPILED_TYPE => Ok(Self::CompiledType),
            TEXTUAL => Ok(Self::Textual),
            other => Err(InvalidFormatError::new(other)),
        }
    }
}
