//! Process-wide dataset.
//!
//! The listings table is loaded at most once per process and then shared
//! read-only. `init` performs the load; `get` returns it afterwards. There is
//! no teardown: the dataset lives until the process exits.

use std::path::Path;
use std::sync::{Mutex, OnceLock};

use anyhow::{Context, Result};

use crate::data::loader;
use crate::data::model::Dataset;

static DATASET: OnceLock<Dataset> = OnceLock::new();

/// Serialises the fallible load so two callers racing on first access never
/// read the file twice.
static LOAD_GUARD: Mutex<()> = Mutex::new(());

/// Load the dataset from `path` unless it is already loaded.
///
/// Later calls return the first dataset and ignore their arguments.
pub fn init(path: &Path, delimiter: u8) -> Result<&'static Dataset> {
    if let Some(ds) = DATASET.get() {
        return Ok(ds);
    }

    let _guard = LOAD_GUARD
        .lock()
        .map_err(|_| anyhow::anyhow!("dataset loader lock poisoned"))?;
    if let Some(ds) = DATASET.get() {
        return Ok(ds);
    }

    let dataset = loader::load_file(path, delimiter)
        .with_context(|| format!("loading listings from {}", path.display()))?;
    log::info!(
        "Loaded {} listings from {} ({} conditions, {} vehicle types)",
        dataset.len(),
        path.display(),
        dataset.conditions.len(),
        dataset.body_types.len()
    );
    Ok(DATASET.get_or_init(|| dataset))
}

/// The loaded dataset, or `None` before a successful `init`.
pub fn get() -> Option<&'static Dataset> {
    DATASET.get()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    // The store is global, so a single test covers the whole lifecycle.
    #[test]
    fn loads_once_and_ignores_later_paths() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "price,model_year,model,condition,odometer,type,days_listed").unwrap();
        writeln!(file, "1000,2010,civic,fair,200000,sedan,12").unwrap();
        writeln!(file, "5000,2015,camry,good,90000,sedan,40").unwrap();

        let first = init(file.path(), b',').unwrap();
        assert_eq!(first.len(), 2);

        let again = init(Path::new("/definitely/not/here.csv"), b',').unwrap();
        assert!(std::ptr::eq(first, again));
        assert!(std::ptr::eq(get().unwrap(), first));
    }
}
