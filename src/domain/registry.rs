//! Application registry
//!
//! The set of applications the shell can display is closed and known at
//! compile time. Identifiers are an enum rather than free-form strings, so an
//! unresolvable id cannot be expressed past the input layer; the registry is
//! validated once at start-up and never changes afterwards.

use std::fmt;

use thiserror::Error;

/// Identifier for one entry in the application registry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AppId {
    /// The synthetic landing entry; never embedded
    Home,
    /// The text comparison sub-application
    CostSense,
    /// The timestamp conversion sub-application
    TimestampLab,
}

impl AppId {
    /// All ids in dropdown order, landing entry first
    pub const ALL: [AppId; 3] = [AppId::Home, AppId::CostSense, AppId::TimestampLab];

    /// Stable string key for this id
    pub fn key(self) -> &'static str {
        match self {
            AppId::Home => "home",
            AppId::CostSense => "costsense",
            AppId::TimestampLab => "timestamplab",
        }
    }

    /// Resolves a string key back to an id, if it names one
    pub fn from_key(key: &str) -> Option<AppId> {
        AppId::ALL.iter().copied().find(|id| id.key() == key)
    }

    /// Position of this id within [`AppId::ALL`]
    fn ordinal(self) -> usize {
        match self {
            AppId::Home => 0,
            AppId::CostSense => 1,
            AppId::TimestampLab => 2,
        }
    }
}

impl fmt::Display for AppId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Immutable description of one registered application
///
/// `embed_source` names the embedded document the host loads when the entry is
/// selected. It is `None` only for the landing entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppDescriptor {
    pub id: AppId,
    pub display_name: &'static str,
    pub blurb: &'static str,
    pub embed_source: Option<&'static str>,
}

impl AppDescriptor {
    /// True if selecting this entry shows an embedded pane instead of landing
    pub fn is_embeddable(&self) -> bool {
        self.embed_source.is_some()
    }
}

/// Validation errors raised while building the registry at start-up
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("application '{id}' is registered more than once")]
    Duplicate { id: AppId },
    #[error("application '{id}' is missing from the table")]
    Missing { id: AppId },
    #[error("landing entry '{id}' must not declare an embed source")]
    LandingWithSource { id: AppId },
    #[error("embeddable entry '{id}' must declare an embed source")]
    MissingSource { id: AppId },
    #[error("entry '{id}' names unknown embed source '{source_name}'")]
    UnknownSource { id: AppId, source_name: &'static str },
}

/// The fixed, validated application table
///
/// Construction fails fast on a malformed table; afterwards every lookup by id
/// is total.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registry {
    /// Entries stored in [`AppId::ALL`] order
    entries: Vec<AppDescriptor>,
}

impl Registry {
    /// Builds a registry from a descriptor table
    ///
    /// Every [`AppId`] must appear exactly once. The landing entry must not
    /// carry an embed source and every other entry must carry one.
    pub fn new(table: Vec<AppDescriptor>) -> Result<Self, RegistryError> {
        for id in AppId::ALL {
            match table.iter().filter(|entry| entry.id == id).count() {
                0 => return Err(RegistryError::Missing { id }),
                1 => {}
                _ => return Err(RegistryError::Duplicate { id }),
            }
        }

        for entry in &table {
            match (entry.id, entry.embed_source) {
                (AppId::Home, Some(_)) => {
                    return Err(RegistryError::LandingWithSource { id: entry.id });
                }
                (AppId::Home, None) => {}
                (id, None) => return Err(RegistryError::MissingSource { id }),
                (_, Some(_)) => {}
            }
        }

        let mut entries = table;
        entries.sort_by_key(|entry| entry.id.ordinal());
        Ok(Self { entries })
    }

    /// Descriptor for an id; total because the table is validated
    pub fn descriptor(&self, id: AppId) -> &AppDescriptor {
        &self.entries[id.ordinal()]
    }

    /// Descriptor at a dropdown row, or `None` past the end of the table
    pub fn by_index(&self, index: usize) -> Option<&AppDescriptor> {
        self.entries.get(index)
    }

    /// Number of registered applications, landing entry included
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All entries in dropdown order
    pub fn iter(&self) -> impl Iterator<Item = &AppDescriptor> {
        self.entries.iter()
    }

    /// Only the entries that render an embedded pane
    pub fn embeddable(&self) -> impl Iterator<Item = &AppDescriptor> {
        self.entries.iter().filter(|entry| entry.is_embeddable())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> Vec<AppDescriptor> {
        vec![
            AppDescriptor {
                id: AppId::Home,
                display_name: "Home",
                blurb: "landing",
                embed_source: None,
            },
            AppDescriptor {
                id: AppId::CostSense,
                display_name: "SimpleTextCompare",
                blurb: "compare",
                embed_source: Some("embedded/text-compare"),
            },
            AppDescriptor {
                id: AppId::TimestampLab,
                display_name: "TimestampLab",
                blurb: "timestamps",
                embed_source: Some("embedded/timestamp-lab"),
            },
        ]
    }

    #[test]
    fn valid_table_builds() {
        let registry = Registry::new(table()).expect("table must validate");
        assert_eq!(registry.len(), 3);
        assert_eq!(registry.descriptor(AppId::Home).display_name, "Home");
        assert_eq!(
            registry.descriptor(AppId::CostSense).display_name,
            "SimpleTextCompare"
        );
    }

    #[test]
    fn entries_are_sorted_into_dropdown_order() {
        let mut reversed = table();
        reversed.reverse();
        let registry = Registry::new(reversed).expect("order of the input table is free");

        let ids: Vec<AppId> = registry.iter().map(|entry| entry.id).collect();
        assert_eq!(ids, AppId::ALL);
        assert_eq!(registry.by_index(0).map(|entry| entry.id), Some(AppId::Home));
    }

    #[test]
    fn duplicate_id_is_rejected() {
        let mut bad = table();
        bad.push(bad[1]);
        assert_eq!(
            Registry::new(bad),
            Err(RegistryError::Duplicate { id: AppId::CostSense })
        );
    }

    #[test]
    fn missing_id_is_rejected() {
        let mut bad = table();
        bad.remove(2);
        assert_eq!(
            Registry::new(bad),
            Err(RegistryError::Missing { id: AppId::TimestampLab })
        );
    }

    #[test]
    fn landing_entry_must_not_have_a_source() {
        let mut bad = table();
        bad[0].embed_source = Some("embedded/home");
        assert_eq!(
            Registry::new(bad),
            Err(RegistryError::LandingWithSource { id: AppId::Home })
        );
    }

    #[test]
    fn embeddable_entry_must_have_a_source() {
        let mut bad = table();
        bad[1].embed_source = None;
        assert_eq!(
            Registry::new(bad),
            Err(RegistryError::MissingSource { id: AppId::CostSense })
        );
    }

    #[test]
    fn key_round_trip() {
        for id in AppId::ALL {
            assert_eq!(AppId::from_key(id.key()), Some(id));
        }
        assert_eq!(AppId::from_key("unknown"), None);
    }

    #[test]
    fn embeddable_iterator_skips_landing() {
        let registry = Registry::new(table()).expect("table must validate");
        let ids: Vec<AppId> = registry.embeddable().map(|entry| entry.id).collect();
        assert_eq!(ids, [AppId::CostSense, AppId::TimestampLab]);
    }

    #[test]
    fn index_past_the_table_is_none() {
        let registry = Registry::new(table()).expect("table must validate");
        assert!(registry.by_index(3).is_none());
    }
}
