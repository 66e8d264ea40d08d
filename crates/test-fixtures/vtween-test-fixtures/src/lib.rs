use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use anyhow::{anyhow, Context, Result};
use once_cell::sync::Lazy;
use serde::Deserialize;
use vtween_core::{Scheduler, SchedulerConfig, TweenContext};

static MANIFEST: Lazy<Manifest> = Lazy::new(|| {
    let raw = include_str!("../../../../fixtures/manifest.json");
    serde_json::from_str(raw).expect("fixtures manifest should parse")
});

#[derive(Debug, Deserialize)]
struct Manifest {
    configs: HashMap<String, String>,
}

fn fixtures_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../../../fixtures")
}

fn resolve_path(rel: &str) -> PathBuf {
    fixtures_root().join(rel)
}

fn read_to_string(rel: &str) -> Result<String> {
    let path = resolve_path(rel);
    fs::read_to_string(&path)
        .with_context(|| format!("failed to read fixture at {}", path.display()))
}

fn lookup<'a, T>(map: &'a HashMap<String, T>, kind: &str, name: &str) -> Result<&'a T> {
    map.get(name)
        .ok_or_else(|| anyhow!("unknown {kind} fixture '{name}'"))
}

/// Scheduler configurations under `fixtures/configs`.
pub mod configs {
    use super::*;

    pub fn keys() -> Vec<String> {
        MANIFEST.configs.keys().cloned().collect()
    }

    pub fn json(name: &str) -> Result<String> {
        let rel = lookup(&MANIFEST.configs, "config", name)?;
        read_to_string(rel)
    }

    pub fn load(name: &str) -> Result<SchedulerConfig> {
        let text = json(name)?;
        SchedulerConfig::from_json(&text)
            .with_context(|| format!("failed to parse config fixture {name}"))
    }

    /// Fresh scheduler built from the named config.
    pub fn scheduler(name: &str) -> Result<Scheduler> {
        load(name).map(Scheduler::new)
    }

    pub fn path(name: &str) -> Result<PathBuf> {
        let rel = lookup(&MANIFEST.configs, "config", name)?;
        Ok(resolve_path(rel))
    }
}

/// Collects every value a tween hands to its setter.
#[derive(Debug)]
pub struct Recorder<T> {
    values: Rc<RefCell<Vec<T>>>,
}

impl<T> Clone for Recorder<T> {
    fn clone(&self) -> Self {
        Self {
            values: Rc::clone(&self.values),
        }
    }
}

impl<T> Default for Recorder<T> {
    fn default() -> Self {
        Self {
            values: Rc::default(),
        }
    }
}

impl<T: Clone + 'static> Recorder<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn setter(&self) -> impl FnMut(T) + 'static {
        let values = Rc::clone(&self.values);
        move |v| values.borrow_mut().push(v)
    }

    pub fn values(&self) -> Vec<T> {
        self.values.borrow().clone()
    }

    pub fn last(&self) -> Option<T> {
        self.values.borrow().last().cloned()
    }

    pub fn len(&self) -> usize {
        self.values.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.borrow().is_empty()
    }

    pub fn clear(&self) {
        self.values.borrow_mut().clear();
    }
}

/// Counts callback invocations.
#[derive(Clone, Debug, Default)]
pub struct Counter {
    hits: Rc<Cell<u32>>,
}

impl Counter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn callback(&self) -> impl FnMut(&mut TweenContext) + 'static {
        let hits = Rc::clone(&self.hits);
        move |_| hits.set(hits.get() + 1)
    }

    pub fn get(&self) -> u32 {
        self.hits.get()
    }
}

/// Advance `scheduler` by `seconds` in fixed steps of `step`.
pub fn run_for(scheduler: &mut Scheduler, seconds: f32, step: f32) {
    let steps = (seconds / step).round() as u32;
    for _ in 0..steps {
        scheduler.update(step);
    }
}
