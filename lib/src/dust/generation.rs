use std::fmt;

use super::Symbol;

/// How many children every symbol is replaced by on a rewrite
pub const BRANCHING: usize = 3;

/// Rewrites a row of symbols into the next generation.
///
/// Every ink segment is split into ink, gap, ink and every gap stays a gap
/// three times over, so the output is always three times longer than the input.
pub fn rewrite(symbols: &[Symbol]) -> Vec<Symbol> {
    let mut res = Vec::with_capacity(symbols.len() * BRANCHING);
    for symbol in symbols {
        res.extend(symbol.expansion());
    }
    res
}

/// One row of the dust: the symbols at a recursion level and the length of
/// every segment on that level.
#[derive(Debug, Clone, PartialEq)]
pub struct Generation {
    symbols: Vec<Symbol>,
    segment_length: f64,
    level: u32,
}

impl Generation {
    /// The single ink segment every dust starts from.
    pub fn seed(length: f64) -> Self {
        Generation {
            symbols: vec![Symbol::Draw],
            segment_length: length,
            level: 0,
        }
    }

    /// Creates the generation that follows this one.
    pub fn next(&self) -> Self {
        Generation {
            symbols: rewrite(&self.symbols),
            segment_length: self.segment_length / BRANCHING as f64,
            level: self.level + 1,
        }
    }

    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    pub fn segment_length(&self) -> f64 {
        self.segment_length
    }

    /// How many rewrites separate this generation from the seed.
    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// The total length of the row, ink and gaps combined.
    pub fn width(&self) -> f64 {
        self.segment_length * self.symbols.len() as f64
    }

    pub fn ink_count(&self) -> usize {
        self.symbols.iter().filter(|s| s.is_ink()).count()
    }

    /// Returns the `[start, end)` offsets of every ink segment, measured from
    /// the start of the row. Adjacent ink segments are not merged.
    pub fn ink_intervals(&self) -> Vec<(f64, f64)> {
        self.symbols
            .iter()
            .enumerate()
            .filter(|(_, s)| s.is_ink())
            .map(|(i, _)| {
                let start = i as f64 * self.segment_length;
                (start, start + self.segment_length)
            })
            .collect()
    }
}

impl fmt::Display for Generation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for symbol in &self.symbols {
            if f.alternate() {
                write!(f, "{:#}", symbol)?;
            } else {
                write!(f, "{}", symbol)?;
            }
        }
        Ok(())
    }
}

/// Iterator over the generations of a dust, from the seed down to a given
/// depth inclusive. Only the current generation is kept alive.
pub struct Generations {
    next: Option<Generation>,
    remaining: u32,
}

impl Generations {
    pub fn new(seed: Generation, depth: u32) -> Self {
        Generations {
            next: Some(seed),
            remaining: depth,
        }
    }
}

impl Iterator for Generations {
    type Item = Generation;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next.take()?;
        if self.remaining > 0 {
            self.remaining -= 1;
            self.next = Some(current.next());
        }
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = if self.next.is_some() {
            self.remaining as usize + 1
        } else {
            0
        };
        (len, Some(len))
    }
}

impl ExactSizeIterator for Generations {}
