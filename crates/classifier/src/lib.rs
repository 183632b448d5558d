//! # Line Classifier
//!
//! Decides whether an input line is a directive or payload.
//!
//! A directive contains the delimiter as exactly one whitespace-bounded
//! field followed by at least one destination name:
//!
//! ```
//! use classifier::classify;
//! use contracts::LineClass;
//!
//! let class = classify("FTEE", "// FTEE foo.bar baz.txt").unwrap();
//! assert_eq!(class, LineClass::Directive(vec!["foo.bar".into(), "baz.txt".into()]));
//!
//! assert_eq!(classify("FTEE", "plain text\n").unwrap(), LineClass::Payload);
//! ```
//!
//! Anything before the delimiter field is ignored, so directives can hide
//! inside comments of whatever language the input is written in.

use contracts::{Delimiter, DestinationName, DirectiveError, LineClass};
use tracing::trace;

/// Classifier bound to one run's delimiter
#[derive(Debug, Clone, Default)]
pub struct LineClassifier {
    delimiter: Delimiter,
}

impl LineClassifier {
    pub fn new(delimiter: Delimiter) -> Self {
        Self { delimiter }
    }

    /// Classify one line, terminator included or not
    pub fn classify(&self, line: &str) -> Result<LineClass, DirectiveError> {
        classify(self.delimiter.as_str(), line)
    }
}

/// Classify `line` against `delimiter`.
///
/// # Errors
/// - [`DirectiveError::UnboundedDelimiter`] when the delimiter text occurs
///   only glued to other characters (`//FTEE out`)
/// - [`DirectiveError::MultipleDelimiters`] on a second delimiter field
/// - [`DirectiveError::MissingTargets`] when nothing follows the delimiter
pub fn classify(delimiter: &str, line: &str) -> Result<LineClass, DirectiveError> {
    if !line.contains(delimiter) {
        return Ok(LineClass::Payload);
    }

    let mut fields = line.split_whitespace();
    if !fields.any(|field| field == delimiter) {
        return Err(DirectiveError::unbounded_delimiter(delimiter));
    }

    let mut names = Vec::new();
    for field in fields {
        if field == delimiter {
            return Err(DirectiveError::multiple_delimiters(delimiter));
        }
        names.push(DestinationName::from(field));
    }

    if names.is_empty() {
        return Err(DirectiveError::missing_targets(delimiter));
    }

    trace!(targets = names.len(), "Directive line");
    Ok(LineClass::Directive(names))
}
