//! The table of atomic symbols recognized in formulas, and the [`SymbolMatcher`] built from it.

use levenshtein::levenshtein;
use once_cell::sync::Lazy;

/// Every recognized atomic symbol, paired with the name of its element.
///
/// Deuterium is the only isotope with its own symbol.
pub const CATALOG: &[(&str, &str)] = &[
    ("H", "hydrogen"),
    ("He", "helium"),
    ("Li", "lithium"),
    ("Be", "beryllium"),
    ("B", "boron"),
    ("C", "carbon"),
    ("N", "nitrogen"),
    ("O", "oxygen"),
    ("F", "fluorine"),
    ("Ne", "neon"),
    ("Na", "sodium"),
    ("Mg", "magnesium"),
    ("Al", "aluminium"),
    ("Si", "silicon"),
    ("P", "phosphorus"),
    ("S", "sulfur"),
    ("Cl", "chlorine"),
    ("Ar", "argon"),
    ("K", "potassium"),
    ("Ca", "calcium"),
    ("Sc", "scandium"),
    ("Ti", "titanium"),
    ("V", "vanadium"),
    ("Cr", "chromium"),
    ("Mn", "manganese"),
    ("Fe", "iron"),
    ("Co", "cobalt"),
    ("Ni", "nickel"),
    ("Cu", "copper"),
    ("Zn", "zinc"),
    ("Ga", "gallium"),
    ("Ge", "germanium"),
    ("As", "arsenic"),
    ("Se", "selenium"),
    ("Br", "bromine"),
    ("Kr", "krypton"),
    ("Rb", "rubidium"),
    ("Sr", "strontium"),
    ("Y", "yttrium"),
    ("Zr", "zirconium"),
    ("Nb", "niobium"),
    ("Mo", "molybdenum"),
    ("Tc", "technetium"),
    ("Ru", "ruthenium"),
    ("Rh", "rhodium"),
    ("Pd", "palladium"),
    ("Ag", "silver"),
    ("Cd", "cadmium"),
    ("In", "indium"),
    ("Sn", "tin"),
    ("Sb", "antimony"),
    ("Te", "tellurium"),
    ("I", "iodine"),
    ("Xe", "xenon"),
    ("Cs", "caesium"),
    ("Ba", "barium"),
    ("La", "lanthanum"),
    ("Ce", "cerium"),
    ("Pr", "praseodymium"),
    ("Nd", "neodymium"),
    ("Pm", "promethium"),
    ("Sm", "samarium"),
    ("Eu", "europium"),
    ("Gd", "gadolinium"),
    ("Tb", "terbium"),
    ("Dy", "dysprosium"),
    ("Ho", "holmium"),
    ("Er", "erbium"),
    ("Tm", "thulium"),
    ("Yb", "ytterbium"),
    ("Lu", "lutetium"),
    ("Hf", "hafnium"),
    ("Ta", "tantalum"),
    ("W", "tungsten"),
    ("Re", "rhenium"),
    ("Os", "osmium"),
    ("Ir", "iridium"),
    ("Pt", "platinum"),
    ("Au", "gold"),
    ("Hg", "mercury"),
    ("Tl", "thallium"),
    ("Pb", "lead"),
    ("Bi", "bismuth"),
    ("Po", "polonium"),
    ("At", "astatine"),
    ("Rn", "radon"),
    ("Fr", "francium"),
    ("Ra", "radium"),
    ("Ac", "actinium"),
    ("Th", "thorium"),
    ("Pa", "protactinium"),
    ("U", "uranium"),
    ("Np", "neptunium"),
    ("Pu", "plutonium"),
    ("Am", "americium"),
    ("Cm", "curium"),
    ("Bk", "berkelium"),
    ("Cf", "californium"),
    ("Es", "einsteinium"),
    ("Fm", "fermium"),
    ("Md", "mendelevium"),
    ("No", "nobelium"),
    ("Lr", "lawrencium"),
    ("Rf", "rutherfordium"),
    ("Db", "dubnium"),
    ("Sg", "seaborgium"),
    ("Bh", "bohrium"),
    ("Hs", "hassium"),
    ("Mt", "meitnerium"),
    ("Ds", "darmstadtium"),
    ("Rg", "roentgenium"),
    ("Cn", "copernicium"),
    ("D", "deuterium"),
];

/// Returns the catalog entry for the given symbol. The lookup is case-sensitive.
pub fn lookup(symbol: &str) -> Option<(&'static str, &'static str)> {
    CATALOG.iter().copied().find(|(s, _)| *s == symbol)
}

/// Returns the name of the element with the given symbol.
pub fn name(symbol: &str) -> Option<&'static str> {
    lookup(symbol).map(|(_, name)| name)
}

/// Returns the symbols that the user may have meant when writing `text`.
///
/// A symbol matching `text` regardless of case is returned on its own. Otherwise, the result
/// holds every symbol sharing the first letter of `text` that is at most one edit away from it.
pub fn similar_symbols(text: &str) -> Vec<&'static str> {
    let lowered = text.to_ascii_lowercase();
    if let Some((symbol, _)) = CATALOG.iter().find(|(s, _)| s.to_ascii_lowercase() == lowered) {
        return vec![*symbol];
    }

    let Some(first) = lowered.chars().next() else {
        return Vec::new();
    };

    let mut similar = CATALOG
        .iter()
        .map(|(s, _)| *s)
        .filter(|s| s.to_ascii_lowercase().starts_with(first))
        .filter(|s| levenshtein(&s.to_ascii_lowercase(), &lowered) < 2)
        .collect::<Vec<_>>();
    similar.sort_unstable();
    similar
}

static MATCHER: Lazy<SymbolMatcher> = Lazy::new(|| SymbolMatcher::new(CATALOG));

/// An alternation of literal atomic symbols, used to split a run of letters into symbols.
///
/// Symbols are tried longest first. Many symbols have a shorter symbol as a prefix (`C` and
/// `Cl`, `Ca`, `Co`, ...; `N` and `Na`, `Ni`, ...), and a run like `NaCl` must split into `Na`
/// and `Cl`, never `N`, `a`, `C`, `l`. Ties in length are broken alphabetically so the order
/// does not depend on the catalog.
#[derive(Debug, Clone)]
pub struct SymbolMatcher {
    symbols: Vec<&'static str>,
}

impl SymbolMatcher {
    /// Builds a matcher from the given catalog.
    ///
    /// # Panics
    ///
    /// Panics if the catalog is empty; no formula could ever be read with such a matcher.
    pub fn new(catalog: &[(&'static str, &'static str)]) -> Self {
        assert!(!catalog.is_empty(), "the symbol catalog must not be empty");

        let mut symbols = catalog.iter().map(|(symbol, _)| *symbol).collect::<Vec<_>>();
        symbols.sort_unstable_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
        symbols.dedup();
        Self { symbols }
    }

    /// Returns the matcher built from [`CATALOG`]. It is built on first use.
    pub fn get() -> &'static Self {
        &MATCHER
    }

    /// Returns the symbols in the order they are tried.
    pub fn symbols(&self) -> &[&'static str] {
        &self.symbols
    }

    /// Returns the first symbol, in matching order, that `text` starts with.
    pub fn match_prefix(&self, text: &str) -> Option<&'static str> {
        self.symbols.iter().copied().find(|symbol| text.starts_with(symbol))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symbols_are_unique() {
        let matcher = SymbolMatcher::get();
        assert_eq!(matcher.symbols().len(), CATALOG.len());
    }

    #[test]
    fn longest_symbols_first() {
        let symbols = SymbolMatcher::get().symbols();
        assert!(symbols.windows(2).all(|pair| pair[0].len() >= pair[1].len()));

        let pos = |sym: &str| symbols.iter().position(|s| *s == sym).unwrap();
        assert!(pos("Cl") < pos("C"));
        assert!(pos("Na") < pos("N"));
        assert!(pos("Cn") < pos("C"));
    }

    #[test]
    fn prefix_collisions() {
        let matcher = SymbolMatcher::get();
        assert_eq!(matcher.match_prefix("NaCl"), Some("Na"));
        assert_eq!(matcher.match_prefix("Cl"), Some("Cl"));
        assert_eq!(matcher.match_prefix("CO2"), Some("C"));
        assert_eq!(matcher.match_prefix("Cx"), Some("C"));
        assert_eq!(matcher.match_prefix("xyz"), None);
    }

    #[test]
    fn order_does_not_depend_on_catalog() {
        let reversed = CATALOG.iter().rev().copied().collect::<Vec<_>>();
        let matcher = SymbolMatcher::new(&reversed);
        assert_eq!(matcher.symbols(), SymbolMatcher::get().symbols());
    }

    #[test]
    #[should_panic]
    fn empty_catalog() {
        SymbolMatcher::new(&[]);
    }

    #[test]
    fn names() {
        assert_eq!(name("Na"), Some("sodium"));
        assert_eq!(name("D"), Some("deuterium"));
        assert_eq!(name("na"), None);
        assert_eq!(lookup("Xx"), None);
    }

    #[test]
    fn similar() {
        assert_eq!(similar_symbols("cl"), vec!["Cl"]);
        assert_eq!(similar_symbols("Xx"), vec!["Xe"]);
        assert_eq!(similar_symbols("L"), vec!["La", "Li", "Lr", "Lu"]);
        assert!(similar_symbols("Qq").is_empty());
        assert!(similar_symbols("").is_empty());
    }
}
