use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::{Error, PortModule, SymbolSet, TargetSymbol};

/// One row of the decision table.
///
/// Matches when every symbol in `when` is set.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Entry {
    pub when: Vec<TargetSymbol>,
    pub port: PortModule,
}

impl Entry {
    pub fn new<S: Into<TargetSymbol>>(when: impl IntoIterator<Item = S>, port: PortModule) -> Self {
        Self {
            when: when.into_iter().map(Into::into).collect(),
            port,
        }
    }

    pub fn matches(&self, symbols: &SymbolSet) -> bool {
        self.when.iter().all(|symbol| symbols.contains(symbol))
    }

    fn is_covered_by(&self, earlier: &Entry) -> bool {
        earlier.when.iter().all(|symbol| self.when.contains(symbol))
    }

    /// The condition, formatted as `a + b`.
    pub fn condition(&self) -> String {
        self.when
            .iter()
            .map(TargetSymbol::as_str)
            .collect::<Vec<_>>()
            .join(" + ")
    }
}

/// Outcome of a successful resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution<'a> {
    pub port: PortModule,
    /// Position of the winning entry in the table.
    pub index: usize,
    pub entry: &'a Entry,
}

/// The decision table, in precedence order.
///
/// Resolution is first-match: once an entry matches, later entries are not
/// consulted, even if they would match too.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Table {
    #[serde(rename = "targets")]
    entries: Vec<Entry>,
}

impl Table {
    /// Creates a table and checks it is usable.
    pub fn new(entries: Vec<Entry>) -> Result<Self, Error> {
        let table = Self { entries };
        table.validate()?;
        Ok(table)
    }

    /// The table shipped with the crate.
    ///
    /// Family symbols come first, then chips. The SAMD chips additionally
    /// need the Arduino platform symbol.
    pub fn builtin() -> Self {
        use PortModule::*;

        Self {
            entries: vec![
                Entry::new(["cortex-m0"], CortexM0),
                Entry::new(["cortex-m4"], CortexM4),
                Entry::new(["cortex-m7"], CortexM7),
                Entry::new(["arduino-arch-samd", "samd21"], CortexM0),
                Entry::new(["arduino-arch-samd", "samd51"], CortexM4),
                Entry::new(["imxrt1062"], CortexM7),
                Entry::new(["stm32f767"], CortexM7),
            ],
        }
    }

    /// Parses a YAML table. The result is not validated yet.
    pub fn from_yaml(src: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(src)
    }

    /// Reads an integrator-supplied YAML table.
    pub fn load(path: &Path) -> Result<Self, Error> {
        let src = fs::read_to_string(path).map_err(|source| Error::TableFile {
            path: path.into(),
            source,
        })?;
        let table = Self::from_yaml(&src).map_err(|source| Error::TableParse {
            path: path.into(),
            source,
        })?;
        table.validate()?;
        log::debug!("loaded {} port table entries from {}", table.len(), path.display());
        Ok(table)
    }

    /// Rejects tables that could never resolve, entries that could never
    /// match, and entries that would match unconditionally.
    pub fn validate(&self) -> Result<(), Error> {
        if self.entries.is_empty() {
            return Err(Error::EmptyTable);
        }
        for (index, entry) in self.entries.iter().enumerate() {
            if entry.when.is_empty() {
                return Err(Error::EmptyCondition { index });
            }
            // e.g. `__`, which normalizes to nothing and can never be set
            if entry.when.iter().any(|symbol| symbol.as_str().is_empty()) {
                return Err(Error::EmptySymbol { index });
            }
        }
        Ok(())
    }

    /// Returns `(shadowed, by)` index pairs for entries that can never
    /// match, because an earlier entry requires a subset of their symbols.
    pub fn shadowed(&self) -> Vec<(usize, usize)> {
        let mut shadowed = Vec::new();
        for (index, entry) in self.entries.iter().enumerate() {
            let earlier = self
                .entries
                .iter()
                .take(index)
                .position(|earlier| entry.is_covered_by(earlier));
            if let Some(by) = earlier {
                log::warn!(
                    "port table entry #{index} ({}) is shadowed by entry #{by}",
                    entry.condition()
                );
                shadowed.push((index, by));
            }
        }
        shadowed
    }

    /// Resolves `symbols` to exactly one port module.
    pub fn resolve(&self, symbols: &SymbolSet) -> Result<Resolution<'_>, Error> {
        for (index, entry) in self.entries.iter().enumerate() {
            log::trace!("evaluating entry #{index} ({})", entry.condition());
            if entry.matches(symbols) {
                log::debug!("{symbols} resolved to {} by entry #{index}", entry.port);
                return Ok(Resolution {
                    port: entry.port,
                    index,
                    entry,
                });
            }
        }
        Err(Error::UnsupportedTarget {
            symbols: symbols.clone(),
        })
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Resolves a table path given through the environment.
///
/// Relative paths are joined onto `manifest_dir`, absolute paths are kept.
pub fn table_path(raw: &Path, manifest_dir: &Path) -> PathBuf {
    if raw.is_relative() {
        manifest_dir.join(raw)
    } else {
        raw.to_path_buf()
    }
}
