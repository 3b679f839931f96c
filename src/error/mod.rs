//! Error types.
//!
//! [`ValidationError`] is the library's own failure kind: the recoverable
//! "does not conform" outcome that combinators such as `or`, `union` and
//! `default` inspect and redirect. [`ValidationErrors`] collects failures
//! across a batch of inputs. [`BuildError`] reports mistakes made while
//! constructing a validator, such as an invalid regular expression.

mod build_error;
mod validation_error;

pub use build_error::BuildError;
pub use validation_error::{SourceLocation, ValidationError, ValidationErrors};
