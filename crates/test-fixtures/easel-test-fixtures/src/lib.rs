//! Fixture access for Easel tests. Everything is indexed by
//! `fixtures/manifest.json`, split into share documents and legacy links.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use anyhow::{anyhow, Context, Result};
use once_cell::sync::Lazy;
use serde::Deserialize;

static MANIFEST: Lazy<Manifest> = Lazy::new(|| {
    let raw = include_str!("../../../../fixtures/manifest.json");
    serde_json::from_str(raw).expect("fixtures manifest should parse")
});

#[derive(Debug, Deserialize)]
struct Manifest {
    share: BTreeMap<String, String>,
    legacy: BTreeMap<String, String>,
}

#[derive(Clone, Copy)]
enum Section {
    Share,
    Legacy,
}

impl Section {
    fn entries(self) -> &'static BTreeMap<String, String> {
        match self {
            Section::Share => &MANIFEST.share,
            Section::Legacy => &MANIFEST.legacy,
        }
    }

    fn names(self) -> Vec<String> {
        self.entries().keys().cloned().collect()
    }

    /// Contents of the named fixture file.
    fn read(self, name: &str) -> Result<String> {
        let rel = self.entries().get(name).ok_or_else(|| {
            let section = match self {
                Section::Share => "share",
                Section::Legacy => "legacy",
            };
            anyhow!("no {section} fixture named '{name}'")
        })?;
        let path = Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("../../../fixtures")
            .join(rel);
        fs::read_to_string(&path).with_context(|| format!("reading {}", path.display()))
    }
}

/// Share-state documents: `{ "state": {...}, "encoded": "...", "reduced": bool }`.
pub mod share {
    use super::*;

    /// One share fixture, with the state left as raw JSON so callers pick
    /// their own state type.
    #[derive(Debug, Clone, Deserialize)]
    pub struct ShareFixture {
        pub state: serde_json::Value,
        pub encoded: String,
        /// Whether `state` is already the reduced form of its rehydration.
        #[serde(default)]
        pub reduced: bool,
    }

    pub fn keys() -> Vec<String> {
        Section::Share.names()
    }

    pub fn load(name: &str) -> Result<ShareFixture> {
        let text = Section::Share.read(name)?;
        serde_json::from_str(&text).with_context(|| format!("parsing share fixture {name}"))
    }
}

/// Old query-string links, one per file.
pub mod legacy {
    use super::*;

    pub fn keys() -> Vec<String> {
        Section::Legacy.names()
    }

    /// The query string with surrounding whitespace removed.
    pub fn query(name: &str) -> Result<String> {
        Ok(Section::Legacy.read(name)?.trim().to_string())
    }
}
