mod seed;

use std::sync::OnceLock;

use crate::models::ActivityRecord;

/// The fixed, in-memory list of activities plus the category filter list.
/// Built once at first access and read-only afterwards, so handlers can
/// query it from any number of concurrent requests without locking.
pub struct Catalog {
    activities: Vec<ActivityRecord>,
    categories: Vec<String>,
}

impl Catalog {
    pub fn get() -> &'static Catalog {
        static CATALOG: OnceLock<Catalog> = OnceLock::new();
        CATALOG.get_or_init(|| Catalog {
            activities: seed::activities(),
            categories: seed::categories(),
        })
    }

    /// Every record, insertion order.
    pub fn all(&self) -> &[ActivityRecord] {
        &self.activities
    }

    /// Records flagged as featured, original relative order.
    pub fn featured(&self) -> Vec<&ActivityRecord> {
        self.activities.iter().filter(|a| a.featured).collect()
    }

    /// Lookup by id; callers render a 404 page on `None`.
    pub fn by_id(&self, id: u32) -> Option<&ActivityRecord> {
        self.activities.iter().find(|a| a.id == id)
    }

    /// Case-insensitive category filter. An unknown category is an empty
    /// listing, not an error.
    pub fn by_category(&self, name: &str) -> Vec<&ActivityRecord> {
        self.activities
            .iter()
            .filter(|a| a.category.eq_ignore_ascii_case(name))
            .collect()
    }

    /// The category filter list, leading "All" sentinel included.
    pub fn categories(&self) -> &[String] {
        &self.categories
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_unique() {
        let catalog = Catalog::get();
        let mut ids: Vec<u32> = catalog.all().iter().map(|a| a.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), catalog.all().len());
    }

    #[test]
    fn by_id_finds_every_seeded_record() {
        let catalog = Catalog::get();
        for record in catalog.all() {
            assert_eq!(catalog.by_id(record.id), Some(record));
        }
    }

    #[test]
    fn by_id_missing_is_none() {
        assert!(Catalog::get().by_id(999).is_none());
        assert!(Catalog::get().by_id(0).is_none());
    }

    #[test]
    fn featured_is_the_featured_subset_in_order() {
        let catalog = Catalog::get();
        let expected: Vec<&ActivityRecord> =
            catalog.all().iter().filter(|a| a.featured).collect();
        assert_eq!(catalog.featured(), expected);
        assert!(catalog.featured().len() <= catalog.all().len());
    }

    #[test]
    fn by_category_is_case_insensitive() {
        let catalog = Catalog::get();
        assert_eq!(
            catalog.by_category("creative"),
            catalog.by_category("CREATIVE")
        );
        assert!(!catalog.by_category("Creative").is_empty());
    }

    #[test]
    fn by_category_unknown_is_empty() {
        assert!(Catalog::get().by_category("Nonexistent").is_empty());
    }

    #[test]
    fn every_record_category_is_listed() {
        let catalog = Catalog::get();
        assert_eq!(catalog.categories().first().map(String::as_str), Some("All"));
        for record in catalog.all() {
            assert!(
                catalog.categories().contains(&record.category),
                "unlisted category: {}",
                record.category
            );
        }
    }
}
