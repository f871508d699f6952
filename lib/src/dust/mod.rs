/// The [Symbol] enum, the alphabet of the rewriting system.
mod symbol;
pub use symbol::{Symbol, SymbolError};

/// The rewriting rule and the [Generation] rows it produces.
mod generation;
pub use generation::{rewrite, Generation, Generations, BRANCHING};
