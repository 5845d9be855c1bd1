use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{NarrativeError, NarrativeResult};

/// Resolves the map snapshot asset for a year.
///
/// Lookup order:
/// 1. explicit entry in `assets` (aliases are plain entries pointing at
///    another year's file),
/// 2. nearest prior mapped year when `year` lies inside the mapped range,
/// 3. `fallback_path` for years outside the mapped range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapImageResolver {
    #[serde(default)]
    assets: IndexMap<i32, String>,
    fallback_path: String,
}

impl Default for MapImageResolver {
    /// Snapshot table of the Helsinki speed-limit maps.
    ///
    /// 2015 and 2023 have no dedicated export and reuse the previous map.
    fn default() -> Self {
        let mut resolver = Self::new("2014.png");
        for year in [2014, 2016, 2017, 2018, 2019, 2020, 2021, 2022, 2024] {
            resolver = resolver.with_asset(year, format!("{year}.png"));
        }
        resolver.with_alias(2015, 2014).with_alias(2023, 2022)
    }
}

impl MapImageResolver {
    #[must_use]
    pub fn new(fallback_path: impl Into<String>) -> Self {
        Self {
            assets: IndexMap::new(),
            fallback_path: fallback_path.into(),
        }
    }

    #[must_use]
    pub fn with_asset(mut self, year: i32, path: impl Into<String>) -> Self {
        self.assets.insert(year, path.into());
        self.assets.sort_keys();
        self
    }

    /// Maps `year` onto the asset of `source_year`.
    ///
    /// Does nothing when `source_year` has no asset yet.
    #[must_use]
    pub fn with_alias(self, year: i32, source_year: i32) -> Self {
        match self.assets.get(&source_year).cloned() {
            Some(path) => self.with_asset(year, path),
            None => self,
        }
    }

    #[must_use]
    pub fn fallback_path(&self) -> &str {
        &self.fallback_path
    }

    #[must_use]
    pub fn assets(&self) -> &IndexMap<i32, String> {
        &self.assets
    }

    #[must_use]
    pub fn resolve(&self, year: i32) -> &str {
        if let Some(path) = self.assets.get(&year) {
            return path;
        }

        let (Some(first), Some(last)) = (self.assets.first(), self.assets.last()) else {
            return &self.fallback_path;
        };
        if year < *first.0 || year > *last.0 {
            return &self.fallback_path;
        }

        self.assets
            .iter()
            .take_while(|(mapped_year, _)| **mapped_year < year)
            .last()
            .map_or(self.fallback_path.as_str(), |(_, path)| path.as_str())
    }

    pub(crate) fn validate(&self) -> NarrativeResult<()> {
        if self.fallback_path.trim().is_empty() {
            return Err(NarrativeError::InvalidConfig(
                "map image fallback path must not be empty".to_owned(),
            ));
        }
        if let Some((year, _)) = self.assets.iter().find(|(_, path)| path.trim().is_empty()) {
            return Err(NarrativeError::InvalidConfig(format!(
                "map image path for year {year} must not be empty"
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::MapImageResolver;

    #[test]
    fn default_table_aliases_missing_exports() {
        let resolver = MapImageResolver::default();
        assert_eq!(resolver.resolve(2015), "2014.png");
        assert_eq!(resolver.resolve(2023), "2022.png");
        assert_eq!(resolver.resolve(2020), "2020.png");
    }

    #[test]
    fn gaps_reuse_nearest_prior_and_outliers_use_fallback() {
        let resolver = MapImageResolver::new("none.png")
            .with_asset(2010, "a.png")
            .with_asset(2020, "b.png");
        assert_eq!(resolver.resolve(2013), "a.png");
        assert_eq!(resolver.resolve(2020), "b.png");
        assert_eq!(resolver.resolve(2009), "none.png");
        assert_eq!(resolver.resolve(2031), "none.png");
        assert_eq!(MapImageResolver::new("x.png").resolve(2014), "x.png");
    }
}
