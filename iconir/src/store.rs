//! Permanent identities for icon outlines.
//!
//! Each distinct path string is given a small integer key the first time it is
//! seen. The key determines the glyph index and the Private Use Area code point,
//! so once handed out it must never change or be given to anything else.

use std::{
    collections::{hash_map::Entry, HashMap, HashSet},
    fs,
    path::Path,
};

use icondrasil::types::{CodePoint, MAX_KEY, NOTDEF_KEY};
use log::{debug, info};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

use crate::error::StoreError;

/// An icon as submitted by a caller.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct IconEntry {
    pub name: String,
    /// Raw path data, the identity of the icon
    pub value: String,
}

impl IconEntry {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> IconEntry {
        IconEntry {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// A stored icon outline and the key it was assigned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconDefinition {
    code_point: CodePoint,
    name: String,
    value: String,
}

impl IconDefinition {
    pub fn key(&self) -> u32 {
        self.code_point.key()
    }

    /// The glyph index, which is always the key.
    pub fn index(&self) -> u32 {
        self.key()
    }

    pub fn code_point(&self) -> CodePoint {
        self.code_point
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> &str {
        &self.value
    }
}

/// Somewhere to keep the value => key table.
///
/// Implementations must be internally synchronized: two callers submitting the
/// same unseen value at the same time must end up with one key.
pub trait DefinitionStore: Send + Sync {
    /// Resolve every entry to its definition, allocating keys for unseen values.
    ///
    /// Results are in the same order as `entries`. Resubmitting a known value
    /// keeps its key and replaces its name. Either every entry is resolved or
    /// the store is left untouched.
    fn assign(&self, entries: &[IconEntry]) -> Result<Vec<IconDefinition>, StoreError>;

    /// Every stored definition, key ascending.
    fn query_all(&self) -> Vec<IconDefinition>;

    fn get(&self, value: &str) -> Option<IconDefinition>;

    /// Forget a definition. Its key is retired, not recycled.
    fn remove(&self, value: &str) -> Option<IconDefinition>;

    /// Forget everything and restart allocation.
    ///
    /// Invalidates every key issued so far; only for test isolation.
    fn reset(&self);
}

#[derive(Debug)]
struct Table {
    next_key: u32,
    by_value: HashMap<String, IconDefinition>,
}

impl Default for Table {
    fn default() -> Self {
        Table {
            next_key: NOTDEF_KEY + 1,
            by_value: HashMap::new(),
        }
    }
}

impl Table {
    fn available(&self) -> usize {
        (MAX_KEY + 1).saturating_sub(self.next_key) as usize
    }
}

/// A [`DefinitionStore`] held in memory, optionally snapshotted to disk.
#[derive(Debug, Default)]
pub struct MemoryStore {
    table: Mutex<Table>,
}

#[derive(Serialize, Deserialize)]
struct Snapshot {
    next_key: u32,
    definitions: Vec<StoredDefinition>,
}

#[derive(Serialize, Deserialize)]
struct StoredDefinition {
    key: u32,
    name: String,
    value: String,
}

impl MemoryStore {
    pub fn new() -> MemoryStore {
        Default::default()
    }

    /// Restore a store previously written by [`MemoryStore::save`].
    ///
    /// A missing file is an empty store.
    pub fn load(path: &Path) -> Result<MemoryStore, StoreError> {
        if !path.exists() {
            info!("No definitions at {path:?}, starting empty");
            return Ok(MemoryStore::new());
        }
        let yml = fs::read_to_string(path).map_err(|source| StoreError::FileIo {
            path: path.to_path_buf(),
            source,
        })?;
        let snapshot: Snapshot = serde_yaml::from_str(&yml)?;
        let corrupt = |reason: String| StoreError::CorruptSnapshot {
            path: path.to_path_buf(),
            reason,
        };

        if snapshot.next_key <= NOTDEF_KEY || snapshot.next_key > MAX_KEY + 1 {
            return Err(corrupt(format!("next key {} is out of range", snapshot.next_key)));
        }
        let mut keys = HashSet::new();
        let mut by_value = HashMap::with_capacity(snapshot.definitions.len());
        for stored in snapshot.definitions {
            if stored.key == NOTDEF_KEY || stored.key >= snapshot.next_key {
                return Err(corrupt(format!("key {} is out of range", stored.key)));
            }
            if !keys.insert(stored.key) {
                return Err(corrupt(format!("key {} is used twice", stored.key)));
            }
            let Some(code_point) = CodePoint::for_key(stored.key) else {
                return Err(corrupt(format!("key {} has no code point", stored.key)));
            };
            if by_value.contains_key(&stored.value) {
                return Err(corrupt(format!("\"{}\" is stored twice", stored.value)));
            }
            by_value.insert(
                stored.value.clone(),
                IconDefinition {
                    code_point,
                    name: stored.name,
                    value: stored.value,
                },
            );
        }
        info!("Loaded {} definitions from {path:?}", by_value.len());
        Ok(MemoryStore {
            table: Mutex::new(Table {
                next_key: snapshot.next_key,
                by_value,
            }),
        })
    }

    /// Write every definition, and the allocation counter, to `path` as yaml.
    pub fn save(&self, path: &Path) -> Result<(), StoreError> {
        let snapshot = {
            let table = self.table.lock();
            let mut definitions: Vec<_> = table
                .by_value
                .values()
                .map(|def| StoredDefinition {
                    key: def.key(),
                    name: def.name.clone(),
                    value: def.value.clone(),
                })
                .collect();
            definitions.sort_by_key(|def| def.key);
            Snapshot {
                next_key: table.next_key,
                definitions,
            }
        };
        let yml = serde_yaml::to_string(&snapshot)?;
        fs::write(path, yml).map_err(|source| StoreError::FileIo {
            path: path.to_path_buf(),
            source,
        })?;
        info!(
            "Saved {} definitions to {path:?}",
            snapshot.definitions.len()
        );
        Ok(())
    }
}

impl DefinitionStore for MemoryStore {
    fn assign(&self, entries: &[IconEntry]) -> Result<Vec<IconDefinition>, StoreError> {
        let mut guard = self.table.lock();
        let table = &mut *guard;

        // Check capacity up front so a failing batch commits nothing
        let unseen: HashSet<_> = entries
            .iter()
            .map(|e| e.value.as_str())
            .filter(|value| !table.by_value.contains_key(*value))
            .collect();
        let available = table.available();
        if unseen.len() > available {
            return Err(StoreError::AllocationExhausted {
                requested: unseen.len(),
                available,
            });
        }

        let mut resolved = Vec::with_capacity(entries.len());
        for entry in entries {
            let definition = match table.by_value.entry(entry.value.clone()) {
                Entry::Occupied(mut occupied) => {
                    let definition = occupied.get_mut();
                    definition.name.clone_from(&entry.name);
                    definition.clone()
                }
                Entry::Vacant(vacant) => {
                    let code_point = CodePoint::for_key(table.next_key).ok_or(
                        StoreError::AllocationExhausted {
                            requested: unseen.len(),
                            available,
                        },
                    )?;
                    table.next_key += 1;
                    debug!("Assigned {code_point} to '{}'", entry.name);
                    vacant
                        .insert(IconDefinition {
                            code_point,
                            name: entry.name.clone(),
                            value: entry.value.clone(),
                        })
                        .clone()
                }
            };
            resolved.push(definition);
        }
        Ok(resolved)
    }

    fn query_all(&self) -> Vec<IconDefinition> {
        let mut all: Vec<_> = self.table.lock().by_value.values().cloned().collect();
        all.sort_by_key(|def| def.key());
        all
    }

    fn get(&self, value: &str) -> Option<IconDefinition> {
        self.table.lock().by_value.get(value).cloned()
    }

    fn remove(&self, value: &str) -> Option<IconDefinition> {
        let removed = self.table.lock().by_value.remove(value);
        if let Some(def) = &removed {
            debug!("Retired {} ('{}')", def.code_point, def.name);
        }
        removed
    }

    fn reset(&self) {
        *self.table.lock() = Table::default();
    }
}
