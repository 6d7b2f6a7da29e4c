//! # Ingredient Categorizer
//!
//! Maps parsed ingredient names onto a closed set of category buckets via
//! case-insensitive keyword containment. The category table is static
//! configuration data with an authoritative order: the first category whose
//! keyword list matches wins, so a name containing both "chicken" and
//! "cheese" resolves to proteins, never dairy.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Category buckets for parsed ingredients, matching the labels the storage
/// collaborator persists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Proteins,
    Vegetables,
    Grains,
    Dairy,
    Herbs,
    Other,
}

impl Category {
    /// The lowercase label used in storage rows
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Proteins => "proteins",
            Category::Vegetables => "vegetables",
            Category::Grains => "grains",
            Category::Dairy => "dairy",
            Category::Herbs => "herbs",
            Category::Other => "other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ordered category keyword table. Order is authoritative for tie-breaking
/// and must not change: proteins before vegetables before grains before
/// dairy before herbs.
static CATEGORY_KEYWORDS: &[(Category, &[&str])] = &[
    (
        Category::Proteins,
        &[
            "chicken", "beef", "pork", "lamb", "fish", "salmon", "tuna", "shrimp", "prawn",
            "bacon", "sausage", "turkey", "ham", "tofu", "egg", "steak", "mince", "duck",
        ],
    ),
    (
        Category::Vegetables,
        &[
            "onion", "garlic", "tomato", "carrot", "zucchini", "capsicum", "potato", "spinach",
            "broccoli", "cucumber", "celery", "mushroom", "cabbage", "corn", "pea", "lettuce",
            "avocado", "pumpkin", "eggplant", "cauliflower",
        ],
    ),
    (
        Category::Grains,
        &[
            "rice", "pasta", "couscous", "flour", "bread", "oat", "quinoa", "noodle", "barley",
            "tortilla", "polenta", "breadcrumb",
        ],
    ),
    (
        Category::Dairy,
        &[
            "milk", "cheese", "butter", "cream", "yogurt", "yoghurt", "feta", "parmesan",
            "mozzarella", "cheddar", "ricotta",
        ],
    ),
    (
        Category::Herbs,
        &[
            "basil", "parsley", "thyme", "rosemary", "oregano", "coriander", "cilantro", "mint",
            "dill", "sage", "chive", "bay leaf", "tarragon",
        ],
    ),
];

/// Assign exactly one category to an ingredient name.
///
/// Pure function of the name and the static table: the same name always
/// yields the same category. Unmatched names fall through to
/// [`Category::Other`].
///
/// # Examples
///
/// ```rust
/// use recipe_import::categorizer::{categorize, Category};
///
/// assert_eq!(categorize("couscous"), Category::Grains);
/// assert_eq!(categorize("feta"), Category::Dairy);
/// assert_eq!(categorize("lemon"), Category::Other);
/// ```
pub fn categorize(name: &str) -> Category {
    let lowered = name.to_lowercase();

    for (category, keywords) in CATEGORY_KEYWORDS {
        if keywords.iter().any(|keyword| lowered.contains(keyword)) {
            return *category;
        }
    }
    Category::Other
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_per_bucket() {
        assert_eq!(categorize("pork"), Category::Proteins);
        assert_eq!(categorize("zucchinis"), Category::Vegetables);
        assert_eq!(categorize("couscous"), Category::Grains);
        assert_eq!(categorize("feta"), Category::Dairy);
        assert_eq!(categorize("basil"), Category::Herbs);
        assert_eq!(categorize("lemon"), Category::Other);
    }

    #[test]
    fn test_substring_containment() {
        assert_eq!(categorize("feta cheese"), Category::Dairy);
        assert_eq!(categorize("chicken thighs"), Category::Proteins);
        assert_eq!(categorize("all-purpose flour"), Category::Grains);
        assert_eq!(categorize("fresh parsley leaves"), Category::Herbs);
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(categorize("Pork"), Category::Proteins);
        assert_eq!(categorize("COUSCOUS"), Category::Grains);
    }

    #[test]
    fn test_table_order_tie_break() {
        // Matches both a proteins keyword and a dairy keyword; proteins is
        // listed first and wins
        assert_eq!(categorize("chicken and cheese"), Category::Proteins);
        assert_eq!(categorize("cheese chicken"), Category::Proteins);
    }

    #[test]
    fn test_unmatched_defaults_to_other() {
        assert_eq!(categorize("lemon pepper"), Category::Other);
        assert_eq!(categorize("olive oil"), Category::Other);
        assert_eq!(categorize(""), Category::Other);
    }

    #[test]
    fn test_idempotent_pure_function() {
        for _ in 0..3 {
            assert_eq!(categorize("salmon fillet"), Category::Proteins);
        }
    }

    #[test]
    fn test_label_strings() {
        assert_eq!(Category::Proteins.as_str(), "proteins");
        assert_eq!(Category::Other.to_string(), "other");
        assert_eq!(
            serde_json::to_string(&Category::Dairy).unwrap(),
            "\"dairy\""
        );
    }
}
