//! In-memory INI document model and mutation API.
//!
//! A [`Document`] owns an ordered map of named [`Section`]s plus one implicit
//! default section held separately; default-section keys act as fallback
//! values for every lookup. Insertion order is significant everywhere:
//! sections keep document order, keys keep section order, and overwriting a
//! key never moves it.

use indexmap::IndexMap;
use serde::ser::{Serialize, SerializeMap, Serializer};

use super::error::AccessError;
use super::interpolate;
use super::options::{Interpolation, Options};

/// One named group of key/value pairs, in insertion order.
///
/// Keys are stored in normalized form (lowercased unless the owning
/// document's options say otherwise); values are stored literally, with
/// interpolation placeholders untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Section {
    entries: IndexMap<String, String>,
}

impl Section {
    /// The stored value for a normalized key, if present.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Whether the section contains the normalized key.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Iterate over `(key, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Iterate over keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Number of keys in the section.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the section has no keys.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Insert a pair; an existing key keeps its position, a new key appends.
    pub(crate) fn insert(&mut self, key: String, value: String) {
        self.entries.insert(key, value);
    }

    /// Remove a key, preserving the order of the remaining keys.
    pub(crate) fn remove(&mut self, key: &str) -> bool {
        self.entries.shift_remove(key).is_some()
    }
}

impl Serialize for Section {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

/// A parsed, mutable INI document.
///
/// Created empty via [`Document::new`] or by [`parse`](super::parse). All
/// accessors respect the [`Options`] the document was created with: key
/// normalization, default-section fallback, and the interpolation mode.
///
/// ```
/// use inifmt::ini::{Document, Options};
///
/// let mut doc = Document::new(Options::default());
/// doc.add_section("server").unwrap();
/// doc.set("server", "Host", "localhost").unwrap();
/// assert_eq!(doc.get("server", "host").unwrap(), "localhost");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    defaults: Section,
    sections: IndexMap<String, Section>,
    options: Options,
}

impl Default for Document {
    fn default() -> Self {
        Self::new(Options::default())
    }
}

impl Document {
    /// Create an empty document with the given engine options.
    #[must_use]
    pub fn new(options: Options) -> Self {
        Self {
            defaults: Section::default(),
            sections: IndexMap::new(),
            options,
        }
    }

    /// The engine options this document was created with.
    #[must_use]
    pub const fn options(&self) -> &Options {
        &self.options
    }

    /// The default section's own pairs (never includes inherited views).
    #[must_use]
    pub const fn defaults(&self) -> &Section {
        &self.defaults
    }

    /// Section names in insertion order; the default section is excluded.
    #[must_use]
    pub fn sections(&self) -> Vec<&str> {
        self.sections.keys().map(String::as_str).collect()
    }

    /// Whether a named section exists. The default section never counts.
    #[must_use]
    pub fn has_section(&self, name: &str) -> bool {
        self.sections.contains_key(name)
    }

    /// The named section, or the default section when `name` is the
    /// configured default-section name.
    #[must_use]
    pub fn section(&self, name: &str) -> Option<&Section> {
        if self.is_default_name(name) {
            Some(&self.defaults)
        } else {
            self.sections.get(name)
        }
    }

    /// Iterate over named sections in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Section)> {
        self.sections.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Read a value, resolving interpolation and falling back to the default
    /// section when the key is absent locally.
    ///
    /// ```
    /// use inifmt::ini::parse_default;
    ///
    /// let doc = parse_default("[DEFAULT]\nroot = /var\n[x]\npath = %(root)s/data\n").unwrap();
    /// assert_eq!(doc.get("x", "path").unwrap(), "/var/data");
    /// ```
    ///
    /// # Errors
    ///
    /// [`AccessError::SectionNotFound`], [`AccessError::KeyNotFound`], or an
    /// [`AccessError::Interpolation`] when a placeholder cannot be resolved.
    pub fn get(&self, section: &str, key: &str) -> Result<String, AccessError> {
        let normalized = self.options.normalize_key(key);
        let raw = self.lookup_raw(section, &normalized)?.to_string();
        match self.options.interpolation {
            Interpolation::None => Ok(raw),
            Interpolation::Basic | Interpolation::Extended => {
                interpolate::resolve(self, section, &normalized, &raw).map_err(Into::into)
            }
        }
    }

    /// Read the literal stored value, with default-section fallback but no
    /// interpolation.
    ///
    /// # Errors
    ///
    /// [`AccessError::SectionNotFound`] or [`AccessError::KeyNotFound`].
    pub fn get_raw(&self, section: &str, key: &str) -> Result<&str, AccessError> {
        let normalized = self.options.normalize_key(key);
        self.lookup_raw(section, &normalized)
    }

    /// Like [`get`](Self::get), but a missing key yields `fallback` instead
    /// of an error. A missing section is still an error.
    ///
    /// # Errors
    ///
    /// [`AccessError::SectionNotFound`] or an interpolation failure.
    pub fn get_or(&self, section: &str, key: &str, fallback: &str) -> Result<String, AccessError> {
        match self.get(section, key) {
            Err(AccessError::KeyNotFound { .. }) => Ok(fallback.to_string()),
            other => other,
        }
    }

    /// Write a value. The key is normalized; an existing key keeps its
    /// position, a new key appends at the end of the section.
    ///
    /// # Errors
    ///
    /// [`AccessError::SectionNotFound`] when the section does not exist and
    /// `auto_create_sections` is off.
    pub fn set(&mut self, section: &str, key: &str, value: &str) -> Result<(), AccessError> {
        let normalized = self.options.normalize_key(key);
        if self.is_default_name(section) {
            self.defaults.insert(normalized, value.to_string());
            return Ok(());
        }
        if !self.sections.contains_key(section) && !self.options.auto_create_sections {
            return Err(AccessError::SectionNotFound {
                section: section.to_string(),
            });
        }
        self.sections
            .entry(section.to_string())
            .or_default()
            .insert(normalized, value.to_string());
        Ok(())
    }

    /// Add an empty section at the end of the document.
    ///
    /// # Errors
    ///
    /// [`AccessError::DuplicateSection`] when the name is already present,
    /// [`AccessError::ReservedSectionName`] when it is the default-section
    /// name.
    pub fn add_section(&mut self, name: &str) -> Result<(), AccessError> {
        if self.is_default_name(name) {
            return Err(AccessError::ReservedSectionName {
                section: name.to_string(),
            });
        }
        if self.sections.contains_key(name) {
            return Err(AccessError::DuplicateSection {
                section: name.to_string(),
            });
        }
        self.sections.insert(name.to_string(), Section::default());
        Ok(())
    }

    /// Remove a named section with all its keys. Returns whether it existed.
    /// The default section cannot be removed.
    pub fn remove_section(&mut self, name: &str) -> bool {
        self.sections.shift_remove(name).is_some()
    }

    /// Remove a key from a section (or from the default section when
    /// `section` is the default-section name). Returns whether it existed.
    ///
    /// # Errors
    ///
    /// [`AccessError::SectionNotFound`].
    pub fn remove_key(&mut self, section: &str, key: &str) -> Result<bool, AccessError> {
        let normalized = self.options.normalize_key(key);
        if self.is_default_name(section) {
            return Ok(self.defaults.remove(&normalized));
        }
        let Some(target) = self.sections.get_mut(section) else {
            return Err(AccessError::SectionNotFound {
                section: section.to_string(),
            });
        };
        Ok(target.remove(&normalized))
    }

    /// All `(key, value)` pairs visible from a section: inherited
    /// default-section keys first (those not locally overridden), then local
    /// keys. Values are resolved the same way [`get`](Self::get) resolves.
    ///
    /// # Errors
    ///
    /// [`AccessError::SectionNotFound`] or an interpolation failure.
    pub fn items(&self, section: &str) -> Result<Vec<(String, String)>, AccessError> {
        let local = self
            .section(section)
            .ok_or_else(|| AccessError::SectionNotFound {
                section: section.to_string(),
            })?;
        let mut pairs = Vec::new();
        if !self.is_default_name(section) {
            for (key, _) in self.defaults.iter() {
                if !local.contains_key(key) {
                    pairs.push((key.to_string(), self.get(section, key)?));
                }
            }
        }
        for (key, _) in local.iter() {
            pairs.push((key.to_string(), self.get(section, key)?));
        }
        Ok(pairs)
    }

    /// Literal value visible from `section` under an already-normalized key:
    /// local first, then the default section. `None` when the section or the
    /// key is missing. Used by interpolation target lookups.
    pub(crate) fn raw_visible(&self, section: &str, normalized_key: &str) -> Option<&str> {
        if self.is_default_name(section) {
            return self.defaults.get(normalized_key);
        }
        let local = self.sections.get(section)?;
        local
            .get(normalized_key)
            .or_else(|| self.defaults.get(normalized_key))
    }

    /// Mutable access to the default section, for the parser.
    pub(crate) fn defaults_mut(&mut self) -> &mut Section {
        &mut self.defaults
    }

    /// Insert-or-get a named section, for the parser.
    pub(crate) fn section_entry(&mut self, name: String) -> &mut Section {
        self.sections.entry(name).or_default()
    }

    fn is_default_name(&self, name: &str) -> bool {
        name == self.options.default_section
    }

    fn lookup_raw(&self, section: &str, normalized_key: &str) -> Result<&str, AccessError> {
        if !self.is_default_name(section) && !self.sections.contains_key(section) {
            return Err(AccessError::SectionNotFound {
                section: section.to_string(),
            });
        }
        self.raw_visible(section, normalized_key)
            .ok_or_else(|| AccessError::KeyNotFound {
                section: section.to_string(),
                key: normalized_key.to_string(),
            })
    }
}

impl Serialize for Document {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut len = self.sections.len();
        if !self.defaults.is_empty() {
            len += 1;
        }
        let mut map = serializer.serialize_map(Some(len))?;
        if !self.defaults.is_empty() {
            map.serialize_entry(&self.options.default_section, &self.defaults)?;
        }
        for (name, section) in &self.sections {
            map.serialize_entry(name, section)?;
        }
        map.end()
    }
}
