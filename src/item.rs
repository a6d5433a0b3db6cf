use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

/// An item identifier as it appears in the input data. Identifiers are
/// integers, but are not assumed contiguous or bounded.
#[derive(Copy, Clone, Hash, PartialOrd, PartialEq, Eq, Ord, Debug)]
pub struct Item {
    id: u32,
}

impl Item {
    pub fn with_id(id: u32) -> Item {
        Item { id: id }
    }
}

impl FromStr for Item {
    type Err = ParseIntError;
    fn from_str(s: &str) -> Result<Item, ParseIntError> {
        Ok(Item::with_id(s.parse::<u32>()?))
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.id)
    }
}
