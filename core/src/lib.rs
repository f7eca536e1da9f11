//! Casing inference and conversion for identifier-like strings.
//!
//! Five conventions are supported: camelCase, PascalCase, snake_case,
//! kebab-case and GLOBAL_CASE (upper snake). [`infer_casing`] classifies a
//! string into one of them; the `{source}_to_{target}` functions convert
//! between any ordered pair, pivoting through an intermediate lowercase word
//! sequence so all 20 directions stay consistent.
//!
//! ```rust
//! use recase::{CasingForm, infer_casing, kebab_to_pascal, camel_to_global};
//!
//! assert_eq!(infer_casing("thisIsAnExample"), Ok(CasingForm::Camel));
//! assert_eq!(kebab_to_pascal("this-is-an-example"), "ThisIsAnExample");
//! assert_eq!(camel_to_global("thisIsAnExample"), "THIS_IS_AN_EXAMPLE");
//! ```
//!
//! Conversions assume their input already is in the named source form and do
//! not validate it; only the classifier can fail. Everything is a pure
//! function over its arguments, safe to call from any number of threads.

pub mod convert;
pub mod form;
pub mod infer;

pub use convert::{
    camel_to_global, camel_to_kebab, camel_to_pascal, camel_to_snake, convert, global_to_camel,
    global_to_kebab, global_to_pascal, global_to_snake, kebab_to_camel, kebab_to_global,
    kebab_to_pascal, kebab_to_snake, pascal_to_camel, pascal_to_global, pascal_to_kebab,
    pascal_to_snake, snake_to_camel, snake_to_global, snake_to_kebab, snake_to_pascal,
};
pub use form::{CasingForm, ParseCasingFormError};
pub use infer::{InferError, infer_casing};
