//! Persistence contract for analysis output.
//!
//! Screens are upserted by `(name, file_path)`; navigation paths are
//! upserted by exact value. Re-inserting the output of an unchanged project
//! stores nothing new.

use crate::graph::{NavigationEdge, Screen};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Store errors
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Failed to access store file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse store file: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Store version mismatch: expected {expected}, found {found}")]
    VersionMismatch { expected: u32, found: u32 },
}

const STORE_VERSION: u32 = 1;

/// Consumer of screens and navigation paths
pub trait ScreenStore {
    /// Upsert screens; returns how many were new
    fn insert_screens(&mut self, screens: &[Screen]) -> Result<usize, StoreError>;

    /// Upsert navigation paths; returns how many were new
    fn insert_navigation_paths(&mut self, edges: &[NavigationEdge]) -> Result<usize, StoreError>;
}

/// In-memory store, optionally snapshotted to a JSON file
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct MemoryStore {
    version: u32,
    screens: Vec<Screen>,
    navigation_paths: Vec<NavigationEdge>,
    #[serde(skip)]
    screen_keys: HashSet<(String, PathBuf)>,
    #[serde(skip)]
    edge_keys: HashSet<NavigationEdge>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            version: STORE_VERSION,
            ..Self::default()
        }
    }

    pub fn screens(&self) -> &[Screen] {
        &self.screens
    }

    pub fn navigation_paths(&self) -> &[NavigationEdge] {
        &self.navigation_paths
    }

    /// Load a snapshot, or start empty if the file does not exist
    pub fn open(path: &Path) -> Result<Self, StoreError> {
        if !path.exists() {
            return Ok(Self::new());
        }

        let file = fs::File::open(path)?;
        let mut store: MemoryStore = serde_json::from_reader(BufReader::new(file))?;
        if store.version != STORE_VERSION {
            return Err(StoreError::VersionMismatch {
                expected: STORE_VERSION,
                found: store.version,
            });
        }

        store.screen_keys = store
            .screens
            .iter()
            .map(|s| (s.name.clone(), s.file_path.clone()))
            .collect();
        store.edge_keys = store.navigation_paths.iter().cloned().collect();
        Ok(store)
    }

    /// Write a snapshot
    pub fn save(&self, path: &Path) -> Result<(), StoreError> {
        let file = fs::File::create(path)?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, self)?;
        writer.flush()?;
        Ok(())
    }
}

impl ScreenStore for MemoryStore {
    fn insert_screens(&mut self, screens: &[Screen]) -> Result<usize, StoreError> {
        let mut inserted = 0;
        for screen in screens {
            if self
                .screen_keys
                .insert((screen.name.clone(), screen.file_path.clone()))
            {
                self.screens.push(screen.clone());
                inserted += 1;
            }
        }
        Ok(inserted)
    }

    fn insert_navigation_paths(&mut self, edges: &[NavigationEdge]) -> Result<usize, StoreError> {
        let mut inserted = 0;
        for edge in edges {
            if self.edge_keys.insert(edge.clone()) {
                self.navigation_paths.push(edge.clone());
                inserted += 1;
            }
        }
        Ok(inserted)
    }
}
