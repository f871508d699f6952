/// The rewriting system behind the dust. Wraps the [dust::Symbol] alphabet and
/// the [dust::Generation] rows.
///
/// ## Getting Started
///
/// Every dust starts from [dust::Generation::seed], and each
/// [next](dust::Generation::next) call applies the [dust::rewrite] rule once:
///
/// ```rust
/// use cantor_dust_lib::dust::Generation;
///
/// let row = Generation::seed(9.0).next().next();
/// assert_eq!(row.to_string(), "#.#...#.#");
/// assert_eq!(row.segment_length(), 1.0);
/// ```
pub mod dust;

/// Turtle graphics: the [turtle::Cursor], the [turtle::Command] primitives and
/// the [turtle::Surface] trait that consumes them.
pub mod turtle;

/// A module for turning generations into drawings.
pub mod display;

/// Ties the generator and renderer together into a whole drawing.
pub mod drawing;
