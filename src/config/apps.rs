//! Built-in application table
//!
//! The shell's application set is fixed at process start. The table lives
//! here as data; [`build_registry`] validates it once during start-up and the
//! process refuses to come up on a malformed table.

use crate::domain::registry::{AppDescriptor, AppId, Registry, RegistryError};
use crate::embed::apps::{self, text_compare, timestamp_lab};

/// The descriptor table the shell ships with
pub fn builtin_descriptors() -> Vec<AppDescriptor> {
    vec![
        AppDescriptor {
            id: AppId::Home,
            display_name: "Home",
            blurb: "Landing page and shared message overview",
            embed_source: None,
        },
        AppDescriptor {
            id: AppId::CostSense,
            display_name: "SimpleTextCompare",
            blurb: "Simple text comparison tool with highlighting",
            embed_source: Some(text_compare::SOURCE),
        },
        AppDescriptor {
            id: AppId::TimestampLab,
            display_name: "TimestampLab",
            blurb: "Timestamp manipulation and conversion tool",
            embed_source: Some(timestamp_lab::SOURCE),
        },
    ]
}

/// Builds and fully validates the registry
///
/// On top of the structural checks in [`Registry::new`], every embed source
/// must resolve to a loadable embedded application.
pub fn build_registry() -> Result<Registry, RegistryError> {
    let registry = Registry::new(builtin_descriptors())?;
    for entry in registry.iter() {
        if let Some(source) = entry.embed_source {
            if !apps::is_known(source) {
                return Err(RegistryError::UnknownSource {
                    id: entry.id,
                    source_name: source,
                });
            }
        }
    }
    Ok(registry)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_table_validates() {
        let registry = build_registry().expect("builtin table must validate");
        assert_eq!(registry.len(), AppId::ALL.len());
    }

    #[test]
    fn builtin_sources_all_resolve() {
        let registry = build_registry().expect("builtin table must validate");
        for entry in registry.embeddable() {
            let source = entry.embed_source.expect("embeddable entries carry a source");
            assert!(apps::is_known(source), "source '{source}' must resolve");
        }
    }

    #[test]
    fn home_is_the_only_entry_without_a_source() {
        for entry in builtin_descriptors() {
            assert_eq!(entry.embed_source.is_none(), entry.id == AppId::Home);
        }
    }

    #[test]
    fn display_names_match_the_landing_cards() {
        let registry = build_registry().expect("builtin table must validate");
        assert_eq!(
            registry.descriptor(AppId::CostSense).display_name,
            "SimpleTextCompare"
        );
        assert_eq!(
            registry.descriptor(AppId::TimestampLab).display_name,
            "TimestampLab"
        );
    }
}
