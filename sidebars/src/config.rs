use std::path::{Path, PathBuf};

use sidenav::{error, Catalog};
use sidenav::error::{Chainable, Result};

use crate::SITE_DIR;

/// The navigation tree, compiled in. Edit `catalog.toml` to change it.
const CATALOG: &str = include_str!("catalog.toml");

#[derive(Debug)]
pub struct Config {
    pub site: PathBuf,
    pub catalog: Catalog,
}

impl Config {
    pub fn discover() -> Result<Self> {
        let catalog = Catalog::from_toml(CATALOG)
            .chain(error!("embedded sidebar catalog is malformed"))?;

        for id in catalog.duplicate_ids() {
            log::warn!("catalog links {id} more than once; every copy will be marked active");
        }

        Ok(Config { site: site_dir(), catalog })
    }
}

/// The site directory sits beside the tool's own directory in the repository,
/// wherever the tool is run from.
fn site_dir() -> PathBuf {
    let tool = Path::new(env!("CARGO_MANIFEST_DIR"));
    tool.parent().unwrap_or(tool).join(SITE_DIR)
}
