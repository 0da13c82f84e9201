use std::fmt;

/// Number of code units in one measured input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CharCount {
    pub units: usize,
}

impl CharCount {
    pub fn new(units: usize) -> Self {
        CharCount { units }
    }

    pub fn is_empty(&self) -> bool {
        self.units == 0
    }
}

impl From<usize> for CharCount {
    fn from(units: usize) -> Self {
        CharCount::new(units)
    }
}

impl fmt::Display for CharCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.units)
    }
}
