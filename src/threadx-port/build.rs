use std::env;
use std::error::Error;
use std::path::{Path, PathBuf};

use threadx_port_table::{table_path, PortModule, SymbolSet, Table, TABLE_ENV};

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed={TABLE_ENV}");

    let values = PortModule::ALL
        .iter()
        .map(|port| format!("\"{}\"", port.name()))
        .collect::<Vec<_>>()
        .join(", ");
    println!("cargo:rustc-check-cfg=cfg(threadx_port, values({values}))");

    let table = match env::var_os(TABLE_ENV) {
        Some(path) => {
            let manifest_dir = PathBuf::from(env::var_os("CARGO_MANIFEST_DIR").unwrap());
            let path = table_path(Path::new(&path), &manifest_dir);
            println!("cargo:rerun-if-changed={}", path.display());
            Table::load(&path).unwrap_or_else(|err| fail(&err))
        }
        None => Table::builtin(),
    };

    for (index, by) in table.shadowed() {
        println!(
            "cargo:warning=threadx-port: table entry #{index} can never match, entry #{by} always wins"
        );
    }

    let vars = env::vars_os()
        .filter_map(|(key, value)| Some((key.into_string().ok()?, value.into_string().ok()?)));
    let symbols = SymbolSet::from_cargo_env(vars);
    let resolution = table.resolve(&symbols).unwrap_or_else(|err| fail(&err));

    eprintln!(
        "threadx-port: {symbols} -> {} (entry #{})",
        resolution.port, resolution.index
    );

    println!("cargo:rustc-cfg=threadx_port=\"{}\"", resolution.port.name());
    println!("cargo:rustc-env=THREADX_PORT={}", resolution.port.name());
    println!(
        "cargo:rustc-env=THREADX_PORT_MATCHED={}",
        resolution.entry.condition()
    );
}

/// Aborts the build, printing `err` and its sources.
fn fail(err: &dyn Error) -> ! {
    let mut message = format!("threadx-port: {err}");
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(&format!("\n  caused by: {cause}"));
        source = cause.source();
    }
    panic!("{message}");
}
