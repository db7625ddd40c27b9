use std::fmt::{self, Debug, Formatter};

/// Pre-rendered text that is written as-is when formatted with [`Debug`], so it can be passed to
/// [`DebugStruct::field`](std::fmt::DebugStruct::field) without being quoted.
pub struct DebugRaw(pub String);

impl Debug for DebugRaw {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
