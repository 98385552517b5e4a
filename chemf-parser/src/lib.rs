#![doc = include_str!("../README.md")]

pub mod catalog;
pub mod composition;
pub mod parser;
pub mod tokenizer;

pub use composition::{Composition, Formatted, Order};
pub use parser::{ast::Formula, error::Error, ParseMode, Parser};

/// The result of reading a formula: its syntax tree, its composition, and any warnings raised
/// while reading it in [`ParseMode::Lenient`].
#[derive(Debug)]
pub struct Parsed {
    /// The syntax tree of the formula. Parts skipped in lenient mode are not present.
    pub formula: Formula,

    /// The empirical composition of the formula.
    pub composition: Composition,

    /// Problems found in the formula that did not stop it from being read. Always empty in
    /// [`ParseMode::Strict`].
    pub warnings: Vec<Error>,
}

/// Parses a linear formula, possibly containing groups, and computes its composition.
pub fn parse_composition(linear: &str, mode: ParseMode) -> Result<Parsed, Vec<Error>> {
    read(Parser::with_mode(linear, mode))
}

/// Counts the atoms of a flat formula, one without groups, such as `C15H12Br4O2`.
pub fn count_flat(flat: &str, mode: ParseMode) -> Result<Parsed, Vec<Error>> {
    read(Parser::with_mode(flat, mode).flat())
}

fn read(mut parser: Parser) -> Result<Parsed, Vec<Error>> {
    let (formula, warnings) = parser.try_parse_full_with_warnings::<Formula>()?;
    let composition = formula.composition().map_err(|err| vec![err])?;
    Ok(Parsed { formula, composition, warnings })
}

/// Converts a linear formula into its empirical formula, written in [`Order::Alphabetical`]
/// order.
///
/// ```
/// use chemf_parser::convert_to_empirical_formula;
///
/// assert_eq!(convert_to_empirical_formula("(CH3)2C[C6H2(Br)2OH]2").unwrap(), "Br4C15H12O2");
/// ```
///
/// The formula is read in [`ParseMode::Strict`]; use [`parse_composition`] to read it leniently
/// or to write it in another order.
pub fn convert_to_empirical_formula(linear: &str) -> Result<String, Vec<Error>> {
    parse_composition(linear, ParseMode::Strict).map(|parsed| parsed.composition.to_string())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn golden_formulas() {
        assert_eq!(convert_to_empirical_formula("(CH3)2C[C6H2(Br)2OH]2").unwrap(), "Br4C15H12O2");
        assert_eq!(convert_to_empirical_formula("[(CH3)2SiH]2NH").unwrap(), "C4H15NSi2");
        assert_eq!(convert_to_empirical_formula("H2O").unwrap(), "H2O");
        assert_eq!(convert_to_empirical_formula("NaCl").unwrap(), "ClNa");
    }

    #[test]
    fn hill_order() {
        let parsed = parse_composition("(CH3)2C[C6H2(Br)2OH]2", ParseMode::Strict).unwrap();
        assert_eq!(parsed.composition.hill().to_string(), "C15H12Br4O2");
        assert_eq!(parsed.composition.display(Order::Alphabetical).to_string(), "Br4C15H12O2");
    }

    #[test]
    fn output_is_flat() {
        for linear in ["(CH3)2C[C6H2(Br)2OH]2", "[(CH3)2SiH]2NH", "Ca(OH)2", "K4[Fe(CN)6]"] {
            let empirical = convert_to_empirical_formula(linear).unwrap();
            let flat = count_flat(&empirical, ParseMode::Strict).unwrap();
            let linear = parse_composition(linear, ParseMode::Strict).unwrap();

            assert!(flat.formula.is_flat());
            assert_eq!(flat.composition, linear.composition);
            assert_eq!(flat.composition.to_string(), empirical);
        }
    }

    #[test]
    fn unclosed_group_policy() {
        let errs = convert_to_empirical_formula("(CH3").unwrap_err();
        assert_eq!(errs.len(), 1);
        assert_eq!(errs[0].spans, vec![0..1]);

        let parsed = parse_composition("(CH3", ParseMode::Lenient).unwrap();
        assert_eq!(parsed.composition.to_string(), "CH3");
        assert_eq!(parsed.warnings.len(), 1);
    }

    #[test]
    fn strict_has_no_warnings() {
        let parsed = parse_composition("Ca(OH)2", ParseMode::Strict).unwrap();
        assert!(parsed.warnings.is_empty());
        assert_eq!(parsed.composition.to_string(), "CaH2O2");
    }

    #[test]
    fn unknown_element_is_skipped_leniently() {
        assert!(convert_to_empirical_formula("CH3Xx").is_err());

        let parsed = parse_composition("CH3Xx", ParseMode::Lenient).unwrap();
        assert_eq!(parsed.composition.to_string(), "CH3");
        assert_eq!(parsed.warnings.len(), 1);
    }

    #[test]
    fn deep_nesting_is_an_error() {
        let depth = parser::MAX_NESTING;
        let linear = format!("{}H{}", "(".repeat(depth), ")".repeat(depth));
        assert_eq!(convert_to_empirical_formula(&linear).unwrap(), "H");

        let linear = format!("{}H{}", "(".repeat(50_000), ")".repeat(50_000));
        assert!(convert_to_empirical_formula(&linear).is_err());
        assert!(parse_composition(&linear, ParseMode::Lenient).is_err());
    }

    #[test]
    fn count_flat_rejects_groups() {
        assert!(count_flat("Ca(OH)2", ParseMode::Strict).is_err());
    }
}
