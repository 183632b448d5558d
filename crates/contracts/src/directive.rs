//! Line classification result shared by the classifier and the router.

use crate::DestinationName;

/// Outcome of classifying one input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineClass {
    /// Content for the currently active destinations.
    Payload,
    /// Switch the active destinations to these names, in order.
    ///
    /// Never empty. Duplicates are kept as written.
    Directive(Vec<DestinationName>),
}

impl LineClass {
    pub fn is_directive(&self) -> bool {
        matches!(self, Self::Directive(_))
    }

    /// Destination names named by a directive; empty for payload lines.
    pub fn targets(&self) -> &[DestinationName] {
        match self {
            Self::Payload => &[],
            Self::Directive(names) => names,
        }
    }
}
