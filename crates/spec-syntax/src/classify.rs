//! Naming convention for syntax identifiers.
//!
//! Grammar rule names are written in camel case starting with an uppercase
//! letter followed by a lowercase one (`Item`, `SomeRule`). Prose words
//! (`hello`) and acronyms (`AB`, `ABc`) do not qualify.

/// Returns true if `identifier` follows the syntax identifier convention.
///
/// Only the first two characters are constrained: the first must be
/// uppercase and the second, if present, must not be. The empty string is
/// accepted.
pub fn is_syntax_identifier(identifier: &str) -> bool {
    let mut chars = identifier.chars();

    match chars.next() {
        Some(first) if !first.is_uppercase() => return false,
        None => return true,
        Some(_) => {}
    }

    !chars.next().is_some_and(char::is_uppercase)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::empty("", true)]
    #[case::single_upper("A", true)]
    #[case::single_lower("a", false)]
    #[case::upper_lower("Ab", true)]
    #[case::two_upper("AB", false)]
    #[case::upper_lower_lower("Abc", true)]
    #[case::acronym_prefix("ABc", false)]
    #[case::camel_case("SomeRule", true)]
    #[case::later_capitals_unconstrained("AbCDEF", true)]
    #[case::prose("hello", false)]
    #[case::unicode_upper("Ärger", true)]
    #[case::unicode_lower("über", false)]
    fn classifies_identifiers(#[case] identifier: &str, #[case] expected: bool) {
        assert_eq!(is_syntax_identifier(identifier), expected);
    }
}
