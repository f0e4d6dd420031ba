use std::fmt::{self, Display};

///
/// RelationModel
/// One foreign-key relation: `attribute` holds the id of a `target_type` record.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct RelationModel {
    pub attribute: &'static str,
    pub target_type: &'static str,
}

impl RelationModel {
    #[must_use]
    pub const fn new(attribute: &'static str, target_type: &'static str) -> Self {
        Self {
            attribute,
            target_type,
        }
    }
}

impl Display for RelationModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.attribute, self.target_type)
    }
}
