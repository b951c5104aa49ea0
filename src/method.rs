//! The fixed set of reduction methods and their public string names.

use strum::{Display, EnumString};

/// One of the four reduction operations.
///
/// The string form is the CLI contract surface. `Divide` deliberately
/// serializes as `devide`: the published interface carries that spelling
/// and callers depend on the literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum Method {
    Add,
    Subtract,
    Multiply,
    #[strum(serialize = "devide")]
    Divide,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn parses_all_four_names() {
        assert_eq!(Method::from_str("add").unwrap(), Method::Add);
        assert_eq!(Method::from_str("subtract").unwrap(), Method::Subtract);
        assert_eq!(Method::from_str("multiply").unwrap(), Method::Multiply);
        assert_eq!(Method::from_str("devide").unwrap(), Method::Divide);
    }

    #[test]
    fn rejects_correct_spelling_of_divide() {
        // "devide" is the contract; the dictionary spelling is not in it.
        assert!(Method::from_str("divide").is_err());
    }

    #[test]
    fn rejects_unknown_and_case_variants() {
        assert!(Method::from_str("frobnicate").is_err());
        assert!(Method::from_str("Add").is_err());
        assert!(Method::from_str("").is_err());
    }

    #[test]
    fn display_matches_contract_names() {
        assert_eq!(Method::Add.to_string(), "add");
        assert_eq!(Method::Divide.to_string(), "devide");
    }
}
