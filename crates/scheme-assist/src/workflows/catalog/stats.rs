use super::domain::{Scheme, SchemeCategory, SchemeLevel};
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LevelCounts {
    pub central: usize,
    pub state: usize,
}

/// Catalog-wide counts shown next to the profile form. Only active schemes are counted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CatalogStats {
    pub total_schemes: usize,
    pub category_counts: BTreeMap<SchemeCategory, usize>,
    pub level_counts: LevelCounts,
    pub new_schemes: usize,
    pub schemes_with_deadlines: usize,
}

impl CatalogStats {
    pub fn from_schemes<'a, I>(schemes: I) -> Self
    where
        I: IntoIterator<Item = &'a Scheme>,
    {
        let mut stats = Self::default();

        for scheme in schemes.into_iter().filter(|scheme| scheme.is_active) {
            stats.total_schemes += 1;
            *stats.category_counts.entry(scheme.category).or_insert(0) += 1;
            match scheme.level {
                SchemeLevel::Central => stats.level_counts.central += 1,
                SchemeLevel::State => stats.level_counts.state += 1,
            }
            if scheme.is_new {
                stats.new_schemes += 1;
            }
            if scheme.deadline.is_some() {
                stats.schemes_with_deadlines += 1;
            }
        }

        stats
    }

    /// Largest categories first; ties fall back to category order.
    pub fn top_categories(&self, limit: usize) -> Vec<(SchemeCategory, usize)> {
        let mut entries: Vec<(SchemeCategory, usize)> = self
            .category_counts
            .iter()
            .map(|(category, count)| (*category, *count))
            .collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
        entries.truncate(limit);
        entries
    }
}
