//! Palette — the ordered list of colors a user is building.
//!
//! Entries keep their insertion order, which is also display order. Each
//! entry gets a decimal string id from a counter that only moves forward,
//! so an id is never reused within one palette even after removals. If the
//! counter ever wraps, ids still held by an entry are skipped.
//!
//! Palettes read from a document keep the ids they were saved with; the
//! counter resumes after the largest numeric id found. Entries with a
//! missing or duplicate id are given a fresh one.

use std::collections::HashSet;

use ps_color::Color;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{Result, StudioError};

/// One swatch in the palette.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaletteEntry {
    /// Unique within the owning palette.
    pub id: String,

    /// Serialized as canonical `#rrggbb`.
    #[serde(rename = "hex")]
    pub color: Color,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// An ordered collection of palette entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    entries: Vec<PaletteEntry>,

    /// Next id to hand out.
    next_id: u64,
}

impl Palette {
    /// An empty palette.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
            next_id: 1,
        }
    }

    /// The palette a fresh session starts with.
    #[must_use]
    pub fn starter() -> Self {
        let mut palette = Self::new();
        palette.add(Color::from_u32(0x63_66_f1), Some("Primary".to_owned()));
        palette.add(Color::from_u32(0x8b_5c_f6), Some("Secondary".to_owned()));
        palette.add(Color::from_u32(0x06_b6_d4), Some("Accent".to_owned()));
        palette
    }

    /// Rebuild a palette from stored entries, repairing ids where needed.
    #[must_use]
    pub fn from_entries(entries: Vec<PaletteEntry>) -> Self {
        let max_id = entries
            .iter()
            .filter_map(|e| e.id.parse::<u64>().ok())
            .max()
            .unwrap_or(0);
        let mut palette = Self {
            entries: Vec::with_capacity(entries.len()),
            next_id: successor(max_id),
        };

        let reserved: HashSet<String> = entries.iter().map(|e| e.id.clone()).collect();
        let mut seen = HashSet::with_capacity(entries.len());
        for mut entry in entries {
            if entry.id.is_empty() || seen.contains(&entry.id) {
                let fresh = loop {
                    let id = palette.fresh_id();
                    if !reserved.contains(&id) {
                        break id;
                    }
                };
                warn!("Palette entry id '{}' is missing or repeated, using '{fresh}'", entry.id);
                entry.id = fresh;
            }
            seen.insert(entry.id.clone());
            palette.entries.push(entry);
        }
        palette
    }

    /// Next counter value not already taken by an entry.
    fn fresh_id(&mut self) -> String {
        loop {
            let id = self.next_id.to_string();
            self.next_id = successor(self.next_id);
            if self.get(&id).is_none() {
                return id;
            }
        }
    }

    /// Append a color and return the new entry.
    pub fn add(&mut self, color: Color, name: Option<String>) -> &PaletteEntry {
        let id = self.fresh_id();
        debug!("Adding {color} to palette as entry {id}");
        let index = self.entries.len();
        self.entries.push(PaletteEntry { id, color, name });
        &self.entries[index]
    }

    /// Remove an entry by id and return it.
    ///
    /// # Errors
    ///
    /// Returns [`StudioError::UnknownEntry`] if no entry has this id.
    pub fn remove(&mut self, id: &str) -> Result<PaletteEntry> {
        let index = self.position(id)?;
        debug!("Removing entry {id} from palette");
        Ok(self.entries.remove(index))
    }

    /// Replace an entry's color, and its name when `name` is non-empty.
    ///
    /// # Errors
    ///
    /// Returns [`StudioError::UnknownEntry`] if no entry has this id.
    pub fn update(&mut self, id: &str, color: Color, name: Option<&str>) -> Result<()> {
        let entry = self.get_mut(id)?;
        entry.color = color;
        if let Some(name) = name.filter(|n| !n.is_empty()) {
            entry.name = Some(name.to_owned());
        }
        Ok(())
    }

    /// Set an entry's name. An empty name clears it.
    ///
    /// # Errors
    ///
    /// Returns [`StudioError::UnknownEntry`] if no entry has this id.
    pub fn rename(&mut self, id: &str, name: &str) -> Result<()> {
        let entry = self.get_mut(id)?;
        entry.name = (!name.is_empty()).then(|| name.to_owned());
        Ok(())
    }

    /// Look up an entry by id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&PaletteEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    fn get_mut(&mut self, id: &str) -> Result<&mut PaletteEntry> {
        self.entries
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or_else(|| StudioError::UnknownEntry { id: id.to_owned() })
    }

    fn position(&self, id: &str) -> Result<usize> {
        self.entries
            .iter()
            .position(|e| e.id == id)
            .ok_or_else(|| StudioError::UnknownEntry { id: id.to_owned() })
    }

    /// Entries in display order.
    pub fn iter(&self) -> std::slice::Iter<'_, PaletteEntry> {
        self.entries.iter()
    }

    /// Entries as a slice.
    #[must_use]
    pub fn entries(&self) -> &[PaletteEntry] {
        &self.entries
    }

    /// Colors in display order.
    #[must_use]
    pub fn colors(&self) -> Vec<Color> {
        self.entries.iter().map(|e| e.color).collect()
    }

    /// Whether any entry already has this color.
    #[must_use]
    pub fn contains_color(&self, color: Color) -> bool {
        self.entries.iter().any(|e| e.color == color)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Counter step. Wraps past `u64::MAX` back to 1.
const fn successor(id: u64) -> u64 {
    match id.checked_add(1) {
        Some(next) => next,
        None => 1,
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> IntoIterator for &'a Palette {
    type Item = &'a PaletteEntry;
    type IntoIter = std::slice::Iter<'a, PaletteEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
