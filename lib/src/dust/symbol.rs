use std::{error, fmt};

use derive_more::Display;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A single segment marker within a row of the dust.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Symbol {
    /// An ink segment, the pen goes down for it
    Draw,
    /// A gap, the cursor travels over it with the pen raised
    Skip,
}

impl Symbol {
    /// The numeric code the symbol was historically stored as.
    pub const fn code(self) -> u8 {
        match self {
            Symbol::Draw => 2,
            Symbol::Skip => 1,
        }
    }

    /// The three symbols this one is replaced by in the next generation.
    pub const fn expansion(self) -> [Symbol; 3] {
        match self {
            Symbol::Draw => [Symbol::Draw, Symbol::Skip, Symbol::Draw],
            Symbol::Skip => [Symbol::Skip, Symbol::Skip, Symbol::Skip],
        }
    }

    pub fn is_ink(self) -> bool {
        self == Symbol::Draw
    }
}

/// Prints `#` for ink and `.` for a gap. The alternate form prints the numeric code.
impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            write!(f, "{}", self.code())
        } else {
            match self {
                Symbol::Draw => write!(f, "#"),
                Symbol::Skip => write!(f, "."),
            }
        }
    }
}

/// A numeric code that doesn't correspond to any [Symbol].
#[derive(Debug, Display, PartialEq, Eq)]
#[display("unknown symbol code {_0}")]
pub struct SymbolError(pub u8);

impl error::Error for SymbolError {}

impl TryFrom<u8> for Symbol {
    type Error = SymbolError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            2 => Ok(Symbol::Draw),
            1 => Ok(Symbol::Skip),
            other => Err(SymbolError(other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes() {
        assert_eq!(Symbol::try_from(2), Ok(Symbol::Draw));
        assert_eq!(Symbol::try_from(1), Ok(Symbol::Skip));
        assert_eq!(Symbol::try_from(0), Err(SymbolError(0)));
        assert_eq!(Symbol::try_from(Symbol::Skip.code()), Ok(Symbol::Skip));
    }

    #[test]
    fn test_display() {
        assert_eq!(Symbol::Draw.to_string(), "#");
        assert_eq!(format!("{:#}", Symbol::Skip), "1");
        assert_eq!(SymbolError(7).to_string(), "unknown symbol code 7");
    }
}
