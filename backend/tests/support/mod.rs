#![allow(dead_code)]

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use second_earth::config::{AggregationConfig, AppConfig};
use tempfile::TempDir;

static ENV_LOCK: Mutex<()> = Mutex::new(());

/// Runs `f` with environment variables temporarily modified.
///
/// This is panic-safe (restores variables on unwind) and also serializes access to
/// process-global env vars to avoid flaky tests when Rust runs tests in parallel.
///
/// `changes` is a list of `(key, value)` pairs:
/// - `Some(v)` sets the variable to `v`
/// - `None` removes the variable
pub fn with_scoped_env<F, R>(changes: &[(&str, Option<&str>)], f: F) -> R
where
    F: FnOnce() -> R,
{
    let _lock = ENV_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
    let _guard = ScopedEnv::new(changes);
    f()
}

struct ScopedEnv {
    snapshot: Vec<(String, Option<String>)>,
}

impl ScopedEnv {
    fn new(changes: &[(&str, Option<&str>)]) -> Self {
        let keys: HashSet<&str> = changes.iter().map(|(k, _)| *k).collect();
        let snapshot = keys
            .into_iter()
            .map(|k| (k.to_string(), std::env::var(k).ok()))
            .collect::<Vec<_>>();

        for (k, v) in changes {
            match v {
                Some(val) => std::env::set_var(k, val),
                None => std::env::remove_var(k),
            }
        }

        Self { snapshot }
    }
}

impl Drop for ScopedEnv {
    fn drop(&mut self) {
        for (k, v) in self.snapshot.drain(..) {
            match v {
                Some(val) => std::env::set_var(&k, val),
                None => std::env::remove_var(&k),
            }
        }
    }
}

pub const SELECTED_CSV: &str = "\
pl_name,hostname,default_flag,pl_rade,pl_bmasse,pl_insol,pl_eqt,st_teff,pl_orbeccen
K2-3 c,K2-3,1,1.58,3.1,1.4,300,3896,0.1
K2-3 c,K2-3,0,1.60,2.9,1.5,305,3900,0.12
TOI-1266 c,TOI-1266,1,1.56,1.9,1.9,290,3563,0.04
GJ 367 b,GJ 367,1,0.72,0.55,573,1745,3522,0
Kepler-138 c,Kepler-138,1,1.51,2.3,,410,3841,
\"Quoted, b\",Somewhere,1,1,1,1,255,5772,0.0167
";

pub const RAW_CSV: &str = "\
pl_name,default_flag,pl_rade,pl_bmasse,pl_orbsmax,pl_insol
K2-3 c,1,1.58,3.1,0.1406,1.4
K2-3 c,0,1.62,2.9,0.14,1.5
GJ 367 b,1,0.72,0.55,0.0071,573
Kepler-51 b,1,6.9,3.7,0.2514,
HAT-P-11 b,1,4.36,26.7,0.0525,103
";

/// Temporary data root holding the selected and raw CSV files.
pub struct DataDir {
    pub dir: TempDir,
}

impl DataDir {
    pub fn new() -> Self {
        Self::with_files(Some(SELECTED_CSV), Some(RAW_CSV))
    }

    pub fn with_files(selected: Option<&str>, raw: Option<&str>) -> Self {
        let dir = TempDir::new().expect("create temp dir");
        let public = dir.path().join("public").join("data");
        fs::create_dir_all(&public).expect("create public/data");
        if let Some(content) = selected {
            fs::write(public.join("selected_planets_full.csv"), content).expect("write selected");
        }
        if let Some(content) = raw {
            fs::write(public.join("rawdata.csv"), content).expect("write raw");
        }
        Self { dir }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn selected_path(&self) -> PathBuf {
        self.path().join("public/data/selected_planets_full.csv")
    }

    /// Config rooted at this directory, with no allow-list and env overrides
    /// that nothing else sets.
    pub fn config(&self) -> AppConfig {
        let mut config = AppConfig::default();
        config.data.root = self.path().to_path_buf();
        config.data.selected_env = "SECOND_EARTH_TEST_UNSET_SELECTED".to_string();
        config.data.raw_env = "SECOND_EARTH_TEST_UNSET_RAW".to_string();
        config.analysis.aggregation = AggregationConfig::unfiltered();
        config
    }
}
