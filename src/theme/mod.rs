//! Design-token theme: token table, integrity validation, stylesheet
//! emission.

pub mod css;
pub mod tokens;
pub mod validate;

pub use validate::{ThemeError, validate};
