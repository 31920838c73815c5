use std::collections::BTreeSet;
use std::fmt;

use serde::Deserialize;

/// A normalized build-configuration symbol.
///
/// Normalization makes the C macro spelling (`__SAMD51__`), the Cargo env
/// spelling (`ARDUINO_ARCH_SAMD`) and the feature spelling (`samd51`,
/// `arduino-arch-samd`) compare equal.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
#[serde(from = "String")]
pub struct TargetSymbol(String);

impl TargetSymbol {
    pub fn new(raw: &str) -> Self {
        let name = raw
            .trim()
            .trim_matches('_')
            .chars()
            .map(|c| match c {
                '_' => '-',
                c => c.to_ascii_lowercase(),
            })
            .collect();
        Self(name)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for TargetSymbol {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl From<String> for TargetSymbol {
    fn from(raw: String) -> Self {
        Self::new(&raw)
    }
}

impl fmt::Display for TargetSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The set of target symbols visible to one build.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SymbolSet(BTreeSet<TargetSymbol>);

impl SymbolSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Collects symbols from a build script environment.
    ///
    /// Every `CARGO_FEATURE_*` variable contributes its feature name, and
    /// `CARGO_CFG_CONTEXT` contributes each of its comma-separated values.
    pub fn from_cargo_env<I, K, V>(vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut set = Self::new();
        for (key, value) in vars {
            let key = key.as_ref();
            if let Some(feature) = key.strip_prefix("CARGO_FEATURE_") {
                set.insert(feature);
            } else if key == "CARGO_CFG_CONTEXT" {
                value
                    .as_ref()
                    .split(',')
                    .filter(|context| !context.trim().is_empty())
                    .for_each(|context| set.insert(context));
            }
        }
        set
    }

    pub fn insert(&mut self, symbol: impl Into<TargetSymbol>) {
        self.0.insert(symbol.into());
    }

    pub fn contains(&self, symbol: &TargetSymbol) -> bool {
        self.0.contains(symbol)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &TargetSymbol> {
        self.0.iter()
    }
}

impl<S: Into<TargetSymbol>> FromIterator<S> for SymbolSet {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl fmt::Display for SymbolSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("none");
        }
        for (i, symbol) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "`{symbol}`")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_spellings() {
        assert_eq!(TargetSymbol::new("__SAMD51__"), TargetSymbol::new("samd51"));
        assert_eq!(
            TargetSymbol::new("ARDUINO_ARCH_SAMD").as_str(),
            "arduino-arch-samd"
        );
        assert_eq!(TargetSymbol::new(" cortex-m4 ").as_str(), "cortex-m4");
    }

    #[test]
    fn test_from_cargo_env() {
        let vars = [
            ("CARGO_FEATURE_SAMD51", "1"),
            ("CARGO_FEATURE_ARDUINO_ARCH_SAMD", "1"),
            ("CARGO_CFG_CONTEXT", "cortex-m,samd51,"),
            ("CARGO_CFG_TARGET_ARCH", "arm"),
            ("PATH", "/usr/bin"),
        ];
        let set = SymbolSet::from_cargo_env(vars);

        let expected: SymbolSet = ["samd51", "arduino-arch-samd", "cortex-m"]
            .into_iter()
            .collect();
        assert_eq!(set, expected);
    }

    #[test]
    fn test_display() {
        assert_eq!(SymbolSet::new().to_string(), "none");

        let set: SymbolSet = ["samd21", "ARDUINO_ARCH_SAMD"].into_iter().collect();
        assert_eq!(set.to_string(), "`arduino-arch-samd`, `samd21`");
    }
}
