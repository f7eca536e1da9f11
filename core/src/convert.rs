//! # Conversion Matrix
//!
//! The 20 directed conversions between the five casing forms, all built from
//! one pivot: split the input into its word sequence under the source form,
//! then join the words back under the target form. Routing every pair through
//! the same two primitives keeps the matrix consistent by construction
//! instead of maintaining 20 bespoke transforms.
//!
//! Conversions do not validate their input. `camel_to_snake` assumes it was
//! handed camel case; given anything else it still produces deterministic
//! output, just not meaningful output. Callers that need validation should
//! run [`infer_casing`] first and compare.
//!
//! [`infer_casing`]: crate::infer::infer_casing

use crate::form::CasingForm;

/// Convert between any two casing forms.
///
/// The named `{source}_to_{target}` functions below all delegate here.
/// `from == to` is permitted and is the identity on well-formed input.
pub fn convert(s: &str, from: CasingForm, to: CasingForm) -> String {
    to.join_words(&from.split_words(s))
}

/// `thisIsAnExample` -> `THIS_IS_AN_EXAMPLE`
pub fn camel_to_global(s: &str) -> String {
    convert(s, CasingForm::Camel, CasingForm::Global)
}

/// `thisIsAnExample` -> `this-is-an-example`
pub fn camel_to_kebab(s: &str) -> String {
    convert(s, CasingForm::Camel, CasingForm::Kebab)
}

/// `thisIsAnExample` -> `ThisIsAnExample`
pub fn camel_to_pascal(s: &str) -> String {
    convert(s, CasingForm::Camel, CasingForm::Pascal)
}

/// `thisIsAnExample` -> `this_is_an_example`
pub fn camel_to_snake(s: &str) -> String {
    convert(s, CasingForm::Camel, CasingForm::Snake)
}

/// `THIS_IS_AN_EXAMPLE` -> `thisIsAnExample`
pub fn global_to_camel(s: &str) -> String {
    convert(s, CasingForm::Global, CasingForm::Camel)
}

/// `THIS_IS_AN_EXAMPLE` -> `this-is-an-example`
pub fn global_to_kebab(s: &str) -> String {
    convert(s, CasingForm::Global, CasingForm::Kebab)
}

/// `THIS_IS_AN_EXAMPLE` -> `ThisIsAnExample`
pub fn global_to_pascal(s: &str) -> String {
    convert(s, CasingForm::Global, CasingForm::Pascal)
}

/// `THIS_IS_AN_EXAMPLE` -> `this_is_an_example`
pub fn global_to_snake(s: &str) -> String {
    convert(s, CasingForm::Global, CasingForm::Snake)
}

/// `this-is-an-example` -> `thisIsAnExample`
pub fn kebab_to_camel(s: &str) -> String {
    convert(s, CasingForm::Kebab, CasingForm::Camel)
}

/// `this-is-an-example` -> `THIS_IS_AN_EXAMPLE`
pub fn kebab_to_global(s: &str) -> String {
    convert(s, CasingForm::Kebab, CasingForm::Global)
}

/// `this-is-an-example` -> `ThisIsAnExample`
pub fn kebab_to_pascal(s: &str) -> String {
    convert(s, CasingForm::Kebab, CasingForm::Pascal)
}

/// `this-is-an-example` -> `this_is_an_example`
pub fn kebab_to_snake(s: &str) -> String {
    convert(s, CasingForm::Kebab, CasingForm::Snake)
}

/// `ThisIsAnExample` -> `thisIsAnExample`
pub fn pascal_to_camel(s: &str) -> String {
    convert(s, CasingForm::Pascal, CasingForm::Camel)
}

/// `ThisIsAnExample` -> `THIS_IS_AN_EXAMPLE`
pub fn pascal_to_global(s: &str) -> String {
    convert(s, CasingForm::Pascal, CasingForm::Global)
}

/// `ThisIsAnExample` -> `this-is-an-example`
pub fn pascal_to_kebab(s: &str) -> String {
    convert(s, CasingForm::Pascal, CasingForm::Kebab)
}

/// `ThisIsAnExample` -> `this_is_an_example`
pub fn pascal_to_snake(s: &str) -> String {
    convert(s, CasingForm::Pascal, CasingForm::Snake)
}

/// `this_is_an_example` -> `thisIsAnExample`
pub fn snake_to_camel(s: &str) -> String {
    convert(s, CasingForm::Snake, CasingForm::Camel)
}

/// `this_is_an_example` -> `THIS_IS_AN_EXAMPLE`
pub fn snake_to_global(s: &str) -> String {
    convert(s, CasingForm::Snake, CasingForm::Global)
}

/// `this_is_an_example` -> `this-is-an-example`
pub fn snake_to_kebab(s: &str) -> String {
    convert(s, CasingForm::Snake, CasingForm::Kebab)
}

/// `this_is_an_example` -> `ThisIsAnExample`
pub fn snake_to_pascal(s: &str) -> String {
    convert(s, CasingForm::Snake, CasingForm::Pascal)
}
