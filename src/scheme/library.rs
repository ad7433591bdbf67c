//! In-memory library of saved schemes
//!
//! Ids are allocated by the owning [`SchemeLibrary`] and never reused,
//! even after removal. Records are returned in id order.

use std::collections::btree_map::Entry;
use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::color::normalize_hex;
use crate::scheme::SchemeKind;
use crate::{ColorError, Result};

/// Identifier of a saved scheme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SchemeId(u32);

impl SchemeId {
    pub fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for SchemeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A named scheme kept by the user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedScheme {
    pub id: SchemeId,
    pub name: String,
    pub kind: SchemeKind,
    /// Canonical `#RRGGBB` colors in scheme order
    pub colors: Vec<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub favorite: bool,
}

/// Fields that may change after a scheme is saved
///
/// `None` leaves the field untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SchemeUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub favorite: Option<bool>,
}

/// Listing filter; the default matches everything
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SchemeFilter {
    pub kind: Option<SchemeKind>,
    pub favorites_only: bool,
}

impl SchemeFilter {
    fn matches(&self, scheme: &SavedScheme) -> bool {
        (!self.favorites_only || scheme.favorite)
            && self.kind.map_or(true, |kind| scheme.kind == kind)
    }
}

/// Saved schemes keyed by id
///
/// Every record is stored under its own `id`, every color is canonical
/// `#RRGGBB`, and `next_id` is greater than every stored id. Deserialization
/// checks all three, so they hold for restored libraries too.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "StoredLibrary")]
pub struct SchemeLibrary {
    schemes: BTreeMap<SchemeId, SavedScheme>,
    next_id: u64,
}

/// Library as written on disk, before its records are checked
#[derive(Deserialize)]
struct StoredLibrary {
    schemes: BTreeMap<SchemeId, SavedScheme>,
    #[serde(default)]
    next_id: u64,
}

impl TryFrom<StoredLibrary> for SchemeLibrary {
    type Error = ColorError;

    fn try_from(stored: StoredLibrary) -> Result<Self> {
        let mut schemes = BTreeMap::new();
        for mut scheme in stored.schemes.into_values() {
            scheme.colors = scheme
                .colors
                .iter()
                .map(|c| normalize_hex(c))
                .collect::<Result<Vec<_>>>()?;
            match schemes.entry(scheme.id) {
                Entry::Occupied(_) => {
                    return Err(ColorError::DuplicateSchemeId { id: scheme.id.get() })
                }
                Entry::Vacant(slot) => {
                    slot.insert(scheme);
                }
            }
        }

        let past_max = schemes
            .keys()
            .next_back()
            .map_or(1, |max: &SchemeId| u64::from(max.get()) + 1);
        Ok(Self {
            next_id: stored.next_id.max(past_max),
            schemes,
        })
    }
}

impl Default for SchemeLibrary {
    fn default() -> Self {
        Self::new()
    }
}

impl SchemeLibrary {
    pub fn new() -> Self {
        Self {
            schemes: BTreeMap::new(),
            next_id: 1,
        }
    }

    pub fn len(&self) -> usize {
        self.schemes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.schemes.is_empty()
    }

    fn next_free_id(&self) -> Result<SchemeId> {
        u32::try_from(self.next_id)
            .map(SchemeId)
            .map_err(|_| ColorError::IdsExhausted)
    }

    /// Save a scheme under a fresh id
    ///
    /// # Arguments
    ///
    /// * `name` - Display name
    /// * `kind` - Scheme the colors were generated with
    /// * `colors` - Hex colors; normalized to `#RRGGBB`
    /// * `description` - Free text, may be empty
    ///
    /// # Errors
    ///
    /// Returns `ColorError::InvalidFormat` if any color is malformed and
    /// `ColorError::IdsExhausted` once `u32::MAX` has been handed out; no id
    /// is consumed in either case
    pub fn save<I, S>(
        &mut self,
        name: impl Into<String>,
        kind: SchemeKind,
        colors: I,
        description: impl Into<String>,
    ) -> Result<&SavedScheme>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let colors = colors
            .into_iter()
            .map(|c| normalize_hex(c.as_ref()))
            .collect::<Result<Vec<_>>>()?;

        let id = self.next_free_id()?;
        let scheme = SavedScheme {
            id,
            name: name.into(),
            kind,
            colors,
            description: description.into(),
            favorite: false,
        };
        let slot = match self.schemes.entry(id) {
            Entry::Vacant(slot) => slot,
            Entry::Occupied(_) => return Err(ColorError::DuplicateSchemeId { id: id.get() }),
        };
        self.next_id += 1;
        log::debug!("saved {} scheme {id} ({})", scheme.kind, scheme.name);
        Ok(&*slot.insert(scheme))
    }

    pub fn get(&self, id: SchemeId) -> Option<&SavedScheme> {
        self.schemes.get(&id)
    }

    /// Saved schemes matching `filter`, in id order
    pub fn list(&self, filter: &SchemeFilter) -> Vec<&SavedScheme> {
        self.schemes
            .values()
            .filter(|scheme| filter.matches(scheme))
            .collect()
    }

    /// Apply a partial update
    ///
    /// # Errors
    ///
    /// Returns `ColorError::SchemeNotFound` if no scheme has this id
    pub fn update(&mut self, id: SchemeId, update: SchemeUpdate) -> Result<&SavedScheme> {
        let scheme = self
            .schemes
            .get_mut(&id)
            .ok_or(ColorError::SchemeNotFound { id: id.get() })?;

        if let Some(name) = update.name {
            scheme.name = name;
        }
        if let Some(description) = update.description {
            scheme.description = description;
        }
        if let Some(favorite) = update.favorite {
            scheme.favorite = favorite;
        }
        Ok(&*scheme)
    }

    pub fn set_favorite(&mut self, id: SchemeId, favorite: bool) -> Result<&SavedScheme> {
        self.update(
            id,
            SchemeUpdate {
                favorite: Some(favorite),
                ..SchemeUpdate::default()
            },
        )
    }

    /// Remove a scheme, returning it
    pub fn remove(&mut self, id: SchemeId) -> Result<SavedScheme> {
        self.schemes
            .remove(&id)
            .ok_or(ColorError::SchemeNotFound { id: id.get() })
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ColorError::serialization("encoding scheme library", e))
    }

    /// Restore a library from [`SchemeLibrary::to_json`] output
    ///
    /// Records are re-keyed by their own id and their colors normalized.
    /// The id counter is moved past the largest stored id so restored
    /// records can never be shadowed by new ones.
    ///
    /// # Errors
    ///
    /// Returns `ColorError::Serialization` for malformed JSON, a malformed
    /// color or two records sharing an id
    pub fn from_json(json: &str) -> Result<Self> {
        let library: Self = serde_json::from_str(json)
            .map_err(|e| ColorError::serialization("decoding scheme library", e))?;
        log::debug!("restored {} saved schemes", library.len());
        Ok(library)
    }
}
