//! Curated collections of places and the user's comments on them.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

use crate::filters::CategoryKey;
use crate::places::{Place, PlaceCatalog};

/// A statically defined grouping of places.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Collection {
    /// Collection identifier
    pub id: &'static str,
    /// Display title
    pub title: &'static str,
    /// Short description
    pub description: &'static str,
    /// Theme label shown as a badge
    pub theme: &'static str,
    /// Member place ids
    pub place_ids: &'static [&'static str],
}

impl Collection {
    /// Member places present in the catalog, in catalog order.
    pub fn places<'a>(&self, catalog: &'a PlaceCatalog) -> Vec<&'a Place> {
        catalog
            .iter()
            .filter(|p| self.place_ids.contains(&p.id.as_str()))
            .collect()
    }

    /// Number of member places per category key; unmapped labels are skipped.
    pub fn category_breakdown(&self, catalog: &PlaceCatalog) -> BTreeMap<CategoryKey, usize> {
        let mut breakdown = BTreeMap::new();
        for place in self.places(catalog) {
            if let Some(key) = CategoryKey::from_label(&place.category) {
                *breakdown.entry(key).or_insert(0) += 1;
            }
        }
        breakdown
    }

    /// Whether every member place present in the catalog has been visited.
    pub fn is_completed(&self, catalog: &PlaceCatalog) -> bool {
        let places = self.places(catalog);
        !places.is_empty() && places.iter().all(|p| p.is_visited)
    }
}

/// All curated collections.
pub fn all_collections() -> &'static [Collection] {
    &COLLECTIONS
}

/// Look up a collection by id.
pub fn find_collection(id: &str) -> Option<&'static Collection> {
    COLLECTIONS.iter().find(|c| c.id == id)
}

/// Number of collections whose places have all been visited.
pub fn completed_count(catalog: &PlaceCatalog) -> usize {
    COLLECTIONS
        .iter()
        .filter(|c| c.is_completed(catalog))
        .count()
}

/// Distinct place ids referenced by any collection.
pub fn total_unique_places() -> usize {
    COLLECTIONS
        .iter()
        .flat_map(|c| c.place_ids.iter())
        .collect::<BTreeSet<_>>()
        .len()
}

static COLLECTIONS: [Collection; 10] = [
    Collection {
        id: "1",
        title: "Работают ночью",
        description: "Места, которые открыты допоздна для ночных прогулок",
        theme: "Развлечения",
        place_ids: &["9", "11", "4"],
    },
    Collection {
        id: "2",
        title: "Семейные места",
        description: "Идеальные локации для отдыха с детьми",
        theme: "Семья",
        place_ids: &["1", "5", "10", "13", "15"],
    },
    Collection {
        id: "3",
        title: "Романтические места",
        description: "Уютные места для свиданий и романтических встреч",
        theme: "Романтика",
        place_ids: &["4", "10", "8", "16"],
    },
    Collection {
        id: "4",
        title: "Уютные кофейни",
        description: "Атмосферные места для работы и отдыха за чашкой кофе",
        theme: "Кафе",
        place_ids: &["2", "8", "14"],
    },
    Collection {
        id: "5",
        title: "Культурная программа",
        description: "Музеи, театры и выставки",
        theme: "Культура",
        place_ids: &["3", "7", "13", "15", "16"],
    },
    Collection {
        id: "6",
        title: "Гастрономический тур",
        description: "Лучшие рестораны и кафе города",
        theme: "Еда",
        place_ids: &["2", "4", "8", "11", "14"],
    },
    Collection {
        id: "7",
        title: "Топ по рейтингу",
        description: "Самые высоко оцененные места в городе",
        theme: "Премиум",
        place_ids: &["3", "10", "7", "1", "4"],
    },
    Collection {
        id: "8",
        title: "В центре города",
        description: "Популярные места в центральной части города",
        theme: "Локация",
        place_ids: &["2", "3", "7", "9", "13", "14"],
    },
    Collection {
        id: "9",
        title: "Активный отдых",
        description: "Прогулки и активности на свежем воздухе",
        theme: "Спорт",
        place_ids: &["1", "5", "10"],
    },
    Collection {
        id: "10",
        title: "Шоппинг",
        description: "Торговые центры и магазины",
        theme: "Шоппинг",
        place_ids: &["6", "12"],
    },
];

/// User comments keyed by collection id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CollectionComments {
    comments: BTreeMap<String, String>,
}

impl CollectionComments {
    /// Save a comment; returns `true` when the collection had no comment yet.
    ///
    /// Editing an existing comment replaces the text but is not a new annotation.
    /// Blank comments are ignored.
    pub fn set(&mut self, collection_id: &str, comment: impl Into<String>) -> bool {
        let comment = comment.into();
        if comment.trim().is_empty() {
            return false;
        }
        self.comments
            .insert(collection_id.to_string(), comment)
            .is_none()
    }

    /// Comment for a collection.
    pub fn get(&self, collection_id: &str) -> Option<&str> {
        self.comments.get(collection_id).map(String::as_str)
    }

    /// Whether the collection has been annotated.
    pub fn has_comment(&self, collection_id: &str) -> bool {
        self.comments.contains_key(collection_id)
    }

    /// Number of annotated collections.
    pub fn annotated_count(&self) -> usize {
        self.comments.len()
    }
}
