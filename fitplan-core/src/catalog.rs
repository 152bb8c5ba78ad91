//! Regional food catalog and allergy-aware selection.
//!
//! The catalog is plain data: region -> {carbs, protein by diet type, sides}.
//! A built-in table ships with the crate and a replacement can be loaded from
//! JSON. Loaded catalogs are validated so that every lookup has an answer.

use rand::Rng;
use rand::seq::IndexedRandom;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

use crate::profile::{DietType, Region};

/// Region used when the requested one is not in the catalog.
pub const DEFAULT_REGION: Region = Region::NorthIndian;

/// Diet type whose protein list is used when the requested one is missing.
pub const DEFAULT_DIET: DietType = DietType::Vegetarian;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog must define the default region `{0:?}`")]
    MissingDefaultRegion(Region),

    #[error("region `{0:?}` has no vegetarian protein list")]
    MissingDefaultDiet(Region),

    #[error("region `{region:?}` has an empty {category} list")]
    EmptyList {
        region: Region,
        category: &'static str,
    },

    #[error("parse catalog json: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Food lists for one region.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionalFoods {
    pub carbs: Vec<String>,
    pub protein: BTreeMap<DietType, Vec<String>>,
    pub sides: Vec<String>,
}

impl RegionalFoods {
    /// Protein list for `diet`, or the vegetarian list when absent.
    pub fn proteins(&self, diet: DietType) -> &[String] {
        self.protein
            .get(&diet)
            .or_else(|| self.protein.get(&DEFAULT_DIET))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    fn validate(&self, region: Region) -> Result<(), CatalogError> {
        if !self.protein.contains_key(&DEFAULT_DIET) {
            return Err(CatalogError::MissingDefaultDiet(region));
        }
        if self.carbs.is_empty() {
            return Err(CatalogError::EmptyList { region, category: "carbs" });
        }
        if self.sides.is_empty() {
            return Err(CatalogError::EmptyList { region, category: "sides" });
        }
        if self.protein.values().any(Vec::is_empty) {
            return Err(CatalogError::EmptyList { region, category: "protein" });
        }
        Ok(())
    }
}

/// Borrowed view of the three category lists for a region/diet pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FoodChoices<'a> {
    pub carbs: &'a [String],
    pub proteins: &'a [String],
    pub sides: &'a [String],
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FoodCatalog {
    regions: BTreeMap<Region, RegionalFoods>,
}

impl FoodCatalog {
    /// Build a catalog, checking that every lookup can be answered.
    pub fn new(regions: BTreeMap<Region, RegionalFoods>) -> Result<Self, CatalogError> {
        if !regions.contains_key(&DEFAULT_REGION) {
            return Err(CatalogError::MissingDefaultRegion(DEFAULT_REGION));
        }
        for (region, foods) in &regions {
            foods.validate(*region)?;
        }
        Ok(Self { regions })
    }

    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let regions: BTreeMap<Region, RegionalFoods> = serde_json::from_str(json)?;
        Self::new(regions)
    }

    pub fn to_json_pretty(&self) -> Result<String, CatalogError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Foods for the region, falling back to the default region.
    pub fn regional(&self, region: Region) -> &RegionalFoods {
        match self.regions.get(&region) {
            Some(foods) => foods,
            None => &self.regions[&DEFAULT_REGION],
        }
    }

    /// Category lists for a region and diet type. Total: missing regions fall
    /// back to north-indian, missing diet types to that region's vegetarian list.
    pub fn lookup(&self, region: Region, diet: DietType) -> FoodChoices<'_> {
        let foods = self.regional(region);
        FoodChoices {
            carbs: &foods.carbs,
            proteins: foods.proteins(diet),
            sides: &foods.sides,
        }
    }
}

impl Default for FoodCatalog {
    fn default() -> Self {
        let mut regions = BTreeMap::new();
        regions.insert(
            Region::NorthIndian,
            RegionalFoods {
                carbs: strings(&["Poha", "Dalia", "Whole Wheat Roti", "Brown Rice", "Oats"]),
                protein: BTreeMap::from([
                    (
                        DietType::Vegetarian,
                        strings(&["Paneer Sabzi", "Mixed Dal", "Rajma", "Chole"]),
                    ),
                    (
                        DietType::NonVegetarian,
                        strings(&["Chicken Curry", "Egg Bhurji", "Fish Fry", "Mutton (Limited)"]),
                    ),
                    (
                        DietType::Vegan,
                        strings(&["Tofu Scramble", "Soya Chunks Curry", "Chickpea Salad", "Lentil Soup"]),
                    ),
                    (
                        DietType::Eggetarian,
                        strings(&["Egg Curry", "Omelette", "Paneer", "Dal"]),
                    ),
                ]),
                sides: strings(&["Curd", "Green Chutney", "Raita", "Salad"]),
            },
        );
        regions.insert(
            Region::SouthIndian,
            RegionalFoods {
                carbs: strings(&["Idli", "Dosa", "Ragi Mudde", "Red Rice", "Upma"]),
                protein: BTreeMap::from([
                    (
                        DietType::Vegetarian,
                        strings(&["Sambar with Veggies", "Kootu", "Sprouted Moong Salad", "Buttermilk"]),
                    ),
                    (
                        DietType::NonVegetarian,
                        strings(&["Fish Curry", "Chicken Chettinad", "Egg Roast", "Prawn Roast"]),
                    ),
                    (
                        DietType::Vegan,
                        strings(&[
                            "Coconut Milk Stew",
                            "Sundal",
                            "Moong Dal Payasam (No Milk)",
                            "Peanut Podi",
                        ]),
                    ),
                    (
                        DietType::Eggetarian,
                        strings(&["Egg Appam", "Egg Dosa", "Sambar", "Sprouts"]),
                    ),
                ]),
                sides: strings(&["Coconut Chutney", "Poriyal", "Pickle", "Papad"]),
            },
        );
        Self { regions }
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Pick one item, avoiding entries that contain `allergy` (case-insensitive).
/// The allergy text is matched as given, surrounding whitespace included.
///
/// If the filter would remove everything, the unfiltered list is used instead,
/// so a non-empty list always yields an item. An empty list yields "".
pub fn select<'a, R: Rng + ?Sized>(list: &'a [String], allergy: Option<&str>, rng: &mut R) -> &'a str {
    let needle = allergy.map(str::to_lowercase).filter(|a| !a.is_empty());

    let mut pool: Vec<&String> = match &needle {
        Some(n) => list
            .iter()
            .filter(|item| !item.to_lowercase().contains(n.as_str()))
            .collect(),
        None => list.iter().collect(),
    };

    if pool.is_empty() {
        tracing::debug!(allergy = ?needle, "allergy filter excluded every item; using full list");
        pool = list.iter().collect();
    }

    pool.choose(rng).copied().map(String::as_str).unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_default_catalog_is_valid() {
        let catalog = FoodCatalog::default();
        let json = catalog.to_json_pretty().unwrap();
        let reloaded = FoodCatalog::from_json(&json).unwrap();
        assert_eq!(reloaded, catalog);
    }

    #[test]
    fn test_unknown_region_falls_back_to_north_indian() {
        let catalog = FoodCatalog::default();
        let other = catalog.lookup(Region::RegionalOther, DietType::Vegan);
        let north = catalog.lookup(Region::NorthIndian, DietType::Vegan);
        assert_eq!(other, north);
        assert!(other.carbs.iter().any(|c| c == "Poha"));
    }

    #[test]
    fn test_missing_diet_falls_back_to_vegetarian() {
        let mut regions = BTreeMap::new();
        regions.insert(
            Region::NorthIndian,
            RegionalFoods {
                carbs: strings(&["Oats"]),
                protein: BTreeMap::from([(DietType::Vegetarian, strings(&["Rajma"]))]),
                sides: strings(&["Curd"]),
            },
        );
        let catalog = FoodCatalog::new(regions).unwrap();
        let choices = catalog.lookup(Region::NorthIndian, DietType::Eggetarian);
        assert_eq!(choices.proteins, &["Rajma".to_string()]);
    }

    #[test]
    fn test_rejects_catalog_without_default_region() {
        let mut regions = BTreeMap::new();
        regions.insert(
            Region::SouthIndian,
            RegionalFoods {
                carbs: strings(&["Idli"]),
                protein: BTreeMap::from([(DietType::Vegetarian, strings(&["Kootu"]))]),
                sides: strings(&["Papad"]),
            },
        );
        let err = FoodCatalog::new(regions).unwrap_err();
        assert!(matches!(err, CatalogError::MissingDefaultRegion(Region::NorthIndian)));
    }

    #[test]
    fn test_rejects_empty_lists_and_missing_vegetarian() {
        let json = r#"{"north-indian":{"carbs":[],"protein":{"vegetarian":["Dal"]},"sides":["Curd"]}}"#;
        assert!(matches!(
            FoodCatalog::from_json(json),
            Err(CatalogError::EmptyList { category: "carbs", .. })
        ));

        let json = r#"{"north-indian":{"carbs":["Oats"],"protein":{"vegan":["Tofu"]},"sides":["Curd"]}}"#;
        assert!(matches!(
            FoodCatalog::from_json(json),
            Err(CatalogError::MissingDefaultDiet(Region::NorthIndian))
        ));
    }

    #[test]
    fn test_select_avoids_allergen() {
        let list = strings(&["Paneer Sabzi", "Mixed Dal", "Paneer Tikka"]);
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            assert_eq!(select(&list, Some("PANEER"), &mut rng), "Mixed Dal");
        }
    }

    #[test]
    fn test_select_matches_allergy_text_as_given() {
        let list = strings(&["Dalia", "Mixed Dal"]);
        let mut rng = StdRng::seed_from_u64(5);
        for _ in 0..30 {
            assert_eq!(select(&list, Some(" Dal"), &mut rng), "Dalia");
        }
    }

    #[test]
    fn test_select_ignores_filter_that_excludes_everything() {
        let list = strings(&["Egg Curry", "Egg Roast"]);
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..20 {
            let pick = select(&list, Some("egg"), &mut rng);
            assert!(list.iter().any(|i| i == pick));
        }
    }

    #[test]
    fn test_select_without_filter_covers_list() {
        let list = strings(&["Idli", "Dosa", "Upma"]);
        let mut rng = StdRng::seed_from_u64(99);
        let mut seen = std::collections::BTreeSet::new();
        for _ in 0..100 {
            seen.insert(select(&list, None, &mut rng));
        }
        assert_eq!(seen.len(), 3);
    }

    #[test]
    fn test_select_empty_list() {
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(select(&[], Some("x"), &mut rng), "");
    }
}
