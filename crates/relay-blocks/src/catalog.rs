//! Block catalog: which model asset and tint each primitive name uses.

use std::collections::HashMap;
use std::error::Error;
use std::fs;
use std::path::Path;

use serde::Deserialize;

#[derive(Deserialize)]
struct CatalogConfig {
    blocks: Vec<BlockDef>,
}

/// One catalog entry, straight from TOML.
#[derive(Deserialize, Clone, Debug)]
pub struct BlockDef {
    pub name: String,
    pub model: String,
    pub tint: [f32; 3],
}

/// Loaded catalog with by-name lookup.
#[derive(Default, Clone, Debug)]
pub struct BlockCatalog {
    pub defs: Vec<BlockDef>,
    by_name: HashMap<String, usize>,
}

impl BlockCatalog {
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, Box<dyn Error>> {
        let text = fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    pub fn from_toml_str(text: &str) -> Result<Self, Box<dyn Error>> {
        let cfg: CatalogConfig = toml::from_str(text)?;
        let mut cat = BlockCatalog::default();
        for def in cfg.blocks.into_iter() {
            if cat.by_name.contains_key(&def.name) {
                return Err(format!("duplicate catalog entry '{}'", def.name).into());
            }
            cat.by_name.insert(def.name.clone(), cat.defs.len());
            cat.defs.push(def);
        }
        Ok(cat)
    }

    pub fn get(&self, name: &str) -> Option<&BlockDef> {
        self.by_name.get(name).map(|&i| &self.defs[i])
    }

    pub fn iter(&self) -> impl Iterator<Item = &BlockDef> {
        self.defs.iter()
    }
}
