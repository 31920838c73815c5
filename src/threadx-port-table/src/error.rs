use std::io;
use std::path::PathBuf;

use crate::SymbolSet;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("microcontroller family is not supported (target symbols: {symbols})")]
    UnsupportedTarget { symbols: SymbolSet },
    #[error("port table has no entries")]
    EmptyTable,
    #[error("port table entry #{index} has an empty `when` condition")]
    EmptyCondition { index: usize },
    #[error("port table entry #{index} has an empty symbol in its `when` condition")]
    EmptySymbol { index: usize },
    #[error("unknown port module `{found}`")]
    UnknownPort { found: String },
    #[error("could not read port table `{path}`")]
    TableFile { path: PathBuf, source: io::Error },
    #[error("could not parse port table `{path}`")]
    TableParse {
        path: PathBuf,
        source: serde_yaml::Error,
    },
}
