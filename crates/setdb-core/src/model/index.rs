use std::fmt::{self, Display};

///
/// IndexModel
/// One indexable scalar field, usable for exact-value lookup.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct IndexModel {
    pub field: &'static str,
}

impl IndexModel {
    #[must_use]
    pub const fn new(field: &'static str) -> Self {
        Self { field }
    }
}

impl Display for IndexModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "INDEX({})", self.field)
    }
}
