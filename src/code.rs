//! Embedded source text for the `code` subcommand

use std::io::{self, Write};

/// Every source file of the crate, in module order
pub const SOURCES: &[(&str, &str)] = &[
    ("Cargo.toml", include_str!("../Cargo.toml")),
    ("src/main.rs", include_str!("main.rs")),
    ("src/lib.rs", include_str!("lib.rs")),
    ("src/cli/mod.rs", include_str!("cli/mod.rs")),
    ("src/cli/args.rs", include_str!("cli/args.rs")),
    ("src/cli/orchestration.rs", include_str!("cli/orchestration.rs")),
    ("src/code.rs", include_str!("code.rs")),
    ("src/config.rs", include_str!("config.rs")),
    ("src/domain/mod.rs", include_str!("domain/mod.rs")),
    ("src/domain/prerelease.rs", include_str!("domain/prerelease.rs")),
    ("src/domain/version.rs", include_str!("domain/version.rs")),
    ("src/error.rs", include_str!("error.rs")),
    ("src/git/mod.rs", include_str!("git/mod.rs")),
    ("src/git/command.rs", include_str!("git/command.rs")),
    ("src/git/mock.rs", include_str!("git/mock.rs")),
    ("src/source.rs", include_str!("source.rs")),
    ("src/transform.rs", include_str!("transform.rs")),
    ("src/ui.rs", include_str!("ui.rs")),
];

/// Write all sources to `out`, each preceded by a `// ==> path <==` header
pub fn write_sources<W: Write>(mut out: W) -> io::Result<()> {
    for (path, text) in SOURCES {
        writeln!(out, "// ==> {} <==", path)?;
        out.write_all(text.as_bytes())?;
        if !text.ends_with('\n') {
            writeln!(out)?;
        }
    }
    out.flush()
}
