#[cfg(test)]
mod tests;

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

///
/// IndexValue
///
/// A scalar field value in the form it takes inside an index key.
///
/// Rendering is canonical: integers print in plain base-10 (a sign only
/// for negatives, no leading zeros), text is verbatim and case- and
/// whitespace-sensitive, booleans print as `true`/`false`. Equal logical
/// values always render to the same key segment.
///

#[derive(Clone, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
pub enum IndexValue {
    Bool(bool),
    Int(i64),
    Text(String),
    Uint(u64),
}

impl IndexValue {
    /// Render the canonical key segment.
    #[must_use]
    pub fn canonical(&self) -> String {
        self.to_string()
    }
}

impl Display for IndexValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(v) => write!(f, "{v}"),
            Self::Int(v) => write!(f, "{v}"),
            Self::Text(v) => f.write_str(v),
            Self::Uint(v) => write!(f, "{v}"),
        }
    }
}

impl From<bool> for IndexValue {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<&str> for IndexValue {
    fn from(v: &str) -> Self {
        Self::Text(v.to_string())
    }
}

impl From<String> for IndexValue {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

impl From<&String> for IndexValue {
    fn from(v: &String) -> Self {
        Self::Text(v.clone())
    }
}

macro_rules! impl_from_int {
    ($variant:ident, $target:ty, $($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for IndexValue {
                fn from(v: $ty) -> Self {
                    Self::$variant(<$target>::from(v))
                }
            }
        )*
    };
}

impl_from_int!(Int, i64, i8, i16, i32, i64);
impl_from_int!(Uint, u64, u8, u16, u32, u64);
