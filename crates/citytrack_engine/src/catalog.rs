//! Static catalogs of civic issues and narrative scenes.

use derive_getters::Getters;
use derive_new::new;
use serde::Serialize;

/// Identifier of a catalog entry. Ids are the integers `1..=len`, in
/// stable catalog order.
pub type EntryId = u32;

/// One lettered choice offered by a narrative scene.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Getters, new)]
pub struct DecisionOption {
    /// Decision-kind key the client submits (`"A"`, `"B"`, `"C"`).
    key: String,
    /// Display label shown to the player.
    label: String,
}

/// Variant-specific display data for a catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Presentation {
    /// A pin on the 2D city map (issue-map variant).
    MapPin {
        /// Horizontal map coordinate in canvas pixels.
        x: u32,
        /// Vertical map coordinate in canvas pixels.
        y: u32,
    },
    /// A multiple-choice prompt (narrative variant).
    Prompt {
        /// The lettered options, in display order.
        options: Vec<DecisionOption>,
    },
}

/// One fixed issue or scene the player can resolve.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Getters, new)]
pub struct CatalogEntry {
    /// Unique positive id, stable across the catalog's lifetime.
    id: EntryId,
    /// Short display name.
    name: String,
    /// Player-facing description of the situation.
    description: String,
    /// Emoji rendered with the entry.
    emoji: String,
    /// Map pin or option prompt, depending on the variant.
    presentation: Presentation,
}

/// A fixed-size, read-only set of catalog entries.
///
/// Loaded once at engine construction and immutable thereafter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
}

impl Catalog {
    /// The five city-map issues, with their canvas coordinates.
    pub fn city_issues() -> Self {
        let entries = vec![
            CatalogEntry::new(
                1,
                "Garbage Overflow".to_string(),
                "Garbage is overflowing from a public bin".to_string(),
                "🗑️".to_string(),
                Presentation::MapPin { x: 300, y: 200 },
            ),
            CatalogEntry::new(
                2,
                "Broken Streetlight".to_string(),
                "A streetlight is not working".to_string(),
                "💡".to_string(),
                Presentation::MapPin { x: 600, y: 150 },
            ),
            CatalogEntry::new(
                3,
                "Road Pothole".to_string(),
                "There is a pothole in the road".to_string(),
                "🕳️".to_string(),
                Presentation::MapPin { x: 400, y: 400 },
            ),
            CatalogEntry::new(
                4,
                "Water Leakage".to_string(),
                "Water is leaking from a pipeline".to_string(),
                "💧".to_string(),
                Presentation::MapPin { x: 700, y: 350 },
            ),
            CatalogEntry::new(
                5,
                "Illegal Poster".to_string(),
                "Wall has illegal advertising posters".to_string(),
                "🎨".to_string(),
                Presentation::MapPin { x: 200, y: 500 },
            ),
        ];
        Self { entries }
    }

    /// The five narrative scenes, each with three lettered options.
    pub fn story_scenes() -> Self {
        let entries = vec![
            CatalogEntry::new(
                1,
                "Garbage Overflowing from Bin".to_string(),
                "You walk past a public area and notice the garbage bin is \
                 overflowing with trash. Litter is scattered around on the \
                 ground, creating an unhygienic environment."
                    .to_string(),
                "🗑️".to_string(),
                prompt(
                    "Collect trash and dispose properly",
                    "Call municipal waste management authority",
                    "Ignore and walk away",
                ),
            ),
            CatalogEntry::new(
                2,
                "Broken Streetlight".to_string(),
                "A streetlight in a busy neighborhood is broken and hasn't \
                 been working for weeks. Pedestrians struggle to see in the \
                 dark, creating safety concerns."
                    .to_string(),
                "💡".to_string(),
                prompt(
                    "Report to local maintenance crew and help fix it",
                    "Notify the municipal corporation's maintenance department",
                    "Ignore - not your responsibility",
                ),
            ),
            CatalogEntry::new(
                3,
                "Pothole in Road".to_string(),
                "A deep pothole has formed in the middle of the road, making \
                 it hazardous for vehicles and pedestrians. Rain water is \
                 pooling inside it."
                    .to_string(),
                "🕳️".to_string(),
                prompt(
                    "Mark the pothole and alert nearby communities",
                    "Report to public works department with location details",
                    "Leave it as is - too risky to handle alone",
                ),
            ),
            CatalogEntry::new(
                4,
                "Water Leakage from Pipeline".to_string(),
                "Water is continuously leaking from a damaged pipeline, \
                 wasting freshwater and creating muddy patches. People are \
                 losing valuable drinking water."
                    .to_string(),
                "💧".to_string(),
                prompt(
                    "Temporarily stop the leak and alert residents",
                    "Call water authority to repair the pipeline",
                    "Ignore - someone else will notice",
                ),
            ),
            CatalogEntry::new(
                5,
                "Illegal Wall Poster / Vandalism".to_string(),
                "Illegal advertisements and vandalism cover a historic public \
                 wall. The defacement damages the wall and spoils the area's \
                 aesthetics."
                    .to_string(),
                "🎨".to_string(),
                prompt(
                    "Organize community cleanup and removal of posters",
                    "Report to municipal corporation's beautification department",
                    "Ignore - decorates the boring wall",
                ),
            ),
        ];
        Self { entries }
    }

    /// Looks up an entry by id. Returns `None` when absent.
    pub fn get(&self, id: EntryId) -> Option<&CatalogEntry> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    /// Number of entries in the catalog.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the catalog has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All entries in catalog order.
    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }
}

fn prompt(a: &str, b: &str, c: &str) -> Presentation {
    Presentation::Prompt {
        options: vec![
            DecisionOption::new("A".to_string(), a.to_string()),
            DecisionOption::new("B".to_string(), b.to_string()),
            DecisionOption::new("C".to_string(), c.to_string()),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn city_issue_ids_are_dense() {
        let catalog = Catalog::city_issues();
        assert_eq!(catalog.len(), 5);
        for (index, entry) in catalog.entries().iter().enumerate() {
            assert_eq!(*entry.id(), index as EntryId + 1);
        }
    }

    #[test]
    fn story_scene_ids_are_dense() {
        let catalog = Catalog::story_scenes();
        assert_eq!(catalog.len(), 5);
        for (index, entry) in catalog.entries().iter().enumerate() {
            assert_eq!(*entry.id(), index as EntryId + 1);
        }
    }

    #[test]
    fn story_scenes_offer_three_lettered_options() {
        let catalog = Catalog::story_scenes();
        for entry in catalog.entries() {
            match entry.presentation() {
                Presentation::Prompt { options } => {
                    let keys: Vec<&str> =
                        options.iter().map(|option| option.key().as_str()).collect();
                    assert_eq!(keys, ["A", "B", "C"]);
                }
                Presentation::MapPin { .. } => panic!("Scene should carry a prompt"),
            }
        }
    }

    #[test]
    fn lookup_unknown_id_is_none() {
        assert!(Catalog::city_issues().get(0).is_none());
        assert!(Catalog::city_issues().get(6).is_none());
        assert!(Catalog::story_scenes().get(999).is_none());
    }

    #[test]
    fn lookup_known_id_matches() {
        let catalog = Catalog::city_issues();
        let entry = catalog.get(3).expect("id 3 exists");
        assert_eq!(entry.name(), "Road Pothole");
    }
}
