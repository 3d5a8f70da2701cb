//! Static content catalog

use std::collections::HashSet;
use std::fmt::Write as _;

use serde::{Deserialize, Serialize};

use crate::error::{NavError, NavResult};

/// Reserved menu id of the landing view
pub const HOME_MENU: &str = "home";

/// Reserved menu id of the contact view
pub const CONTACT_MENU: &str = "kontakt";

/// A single catalog entry (one tile of a submenu)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// 1-based id, unique within its section
    pub id: u32,
    pub title: String,
}

impl Item {
    pub fn new(id: u32, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
        }
    }
}

/// A top-level category grouping catalog items
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub id: String,
    /// Display label used by the menu and the breadcrumb
    pub label: String,
    pub items: Vec<Item>,
}

impl Section {
    pub fn new(id: impl Into<String>, label: impl Into<String>, items: Vec<Item>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            items,
        }
    }

    /// Position of `item_id` in catalog order
    pub fn index_of(&self, item_id: u32) -> Option<usize> {
        self.items.iter().position(|item| item.id == item_id)
    }

    pub fn item_at(&self, index: usize) -> Option<&Item> {
        self.items.get(index)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Read-only catalog of sections, kept in insertion order.
///
/// Built once at startup and never mutated afterwards; every constructor
/// validates it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "CatalogDocument", into = "CatalogDocument")]
pub struct Catalog {
    sections: Vec<Section>,
}

/// On-disk shape of a catalog file
#[derive(Debug, Clone, Serialize, Deserialize)]
struct CatalogDocument {
    sections: Vec<Section>,
}

impl TryFrom<CatalogDocument> for Catalog {
    type Error = NavError;

    fn try_from(doc: CatalogDocument) -> NavResult<Self> {
        Self::new(doc.sections)
    }
}

impl From<Catalog> for CatalogDocument {
    fn from(catalog: Catalog) -> Self {
        Self {
            sections: catalog.sections,
        }
    }
}

impl Catalog {
    /// Build a catalog, rejecting content the state machine could not
    /// navigate consistently.
    pub fn new(sections: Vec<Section>) -> NavResult<Self> {
        let mut seen_sections = HashSet::new();
        for section in &sections {
            if section.id.is_empty() {
                return Err(NavError::InvalidCatalog("section id must not be empty".to_string()));
            }
            if section.id == HOME_MENU || section.id == CONTACT_MENU {
                return Err(NavError::InvalidCatalog(format!(
                    "section id '{}' is reserved for a menu",
                    section.id
                )));
            }
            if !seen_sections.insert(section.id.as_str()) {
                return Err(NavError::InvalidCatalog(format!(
                    "duplicate section '{}'",
                    section.id
                )));
            }

            let mut seen_items = HashSet::new();
            for item in &section.items {
                if item.id == 0 {
                    return Err(NavError::InvalidCatalog(format!(
                        "item ids start at 1 (section '{}')",
                        section.id
                    )));
                }
                if !seen_items.insert(item.id) {
                    return Err(NavError::InvalidCatalog(format!(
                        "duplicate item {} in section '{}'",
                        item.id, section.id
                    )));
                }
            }
        }

        Ok(Self { sections })
    }

    /// Parse and validate a JSON catalog document
    pub fn from_json(json: &str) -> NavResult<Self> {
        let doc: CatalogDocument = serde_json::from_str(json)?;
        Self::try_from(doc)
    }

    /// The portfolio content shipped with the site
    pub fn builtin() -> Self {
        let section = |id: &str, label: &str, titles: &[&str]| {
            let items = (1u32..)
                .zip(titles)
                .map(|(id, title)| Item::new(id, *title))
                .collect();
            Section::new(id, label, items)
        };

        Self {
            sections: vec![
                section(
                    "akwarystyka",
                    "Akwarystyka",
                    &["Akwarium 300L", "Akwarium morskie", "Biotop amazoński"],
                ),
                section(
                    "aplikacje",
                    "Aplikacje",
                    &[
                        "Task Manager",
                        "Weather App",
                        "E-commerce",
                        "Chat App",
                        "Portfolio CMS",
                        "Analytics Dashboard",
                    ],
                ),
                section(
                    "rower",
                    "Rower poziomy",
                    &["Projekt konstrukcji", "Proces budowy"],
                ),
                section(
                    "inne",
                    "Inne",
                    &["Fotografia", "Grafika 3D", "DIY projekty", "Podróże"],
                ),
            ],
        }
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn section(&self, id: &str) -> Option<&Section> {
        self.sections.iter().find(|section| section.id == id)
    }

    /// Look up a section, reporting a miss as `UnknownSection`
    pub fn require_section(&self, id: &str) -> NavResult<&Section> {
        self.section(id)
            .ok_or_else(|| NavError::UnknownSection(id.to_string()))
    }

    pub fn contains_section(&self, id: &str) -> bool {
        self.section(id).is_some()
    }

    /// Display label of any menu id. Unknown ids label as themselves.
    pub fn label<'a>(&'a self, menu_id: &'a str) -> &'a str {
        match menu_id {
            HOME_MENU => "Home",
            CONTACT_MENU => "Kontakt",
            _ => self
                .section(menu_id)
                .map_or(menu_id, |section| section.label.as_str()),
        }
    }

    /// Top-level menu ids in display order: home, every section, contact
    pub fn menu_ids(&self) -> Vec<&str> {
        std::iter::once(HOME_MENU)
            .chain(self.sections.iter().map(|section| section.id.as_str()))
            .chain(std::iter::once(CONTACT_MENU))
            .collect()
    }

    /// Multi-line overview of the catalog, one line per section
    pub fn summary(&self) -> String {
        let mut out = String::new();
        for section in &self.sections {
            let _ = writeln!(out, "{}: {} items", section.label, section.len());
        }
        out
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn builtin_matches_site_content() {
        let catalog = Catalog::builtin();
        let counts: Vec<(&str, usize)> = catalog
            .sections()
            .iter()
            .map(|s| (s.id.as_str(), s.len()))
            .collect();
        assert_eq!(
            counts,
            vec![("akwarystyka", 3), ("aplikacje", 6), ("rower", 2), ("inne", 4)]
        );
        assert!(Catalog::new(catalog.sections().to_vec()).is_ok());
    }

    #[test]
    fn index_follows_catalog_order_not_id() {
        let section = Section::new(
            "mixed",
            "Mixed",
            vec![Item::new(5, "five"), Item::new(2, "two"), Item::new(9, "nine")],
        );
        assert_eq!(section.index_of(2), Some(1));
        assert_eq!(section.index_of(9), Some(2));
        assert_eq!(section.index_of(1), None);
    }

    #[test]
    fn labels_cover_reserved_and_unknown_menus() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.label("home"), "Home");
        assert_eq!(catalog.label("kontakt"), "Kontakt");
        assert_eq!(catalog.label("rower"), "Rower poziomy");
        assert_eq!(catalog.label("blog"), "blog");
    }

    #[test]
    fn menu_ids_wrap_sections_with_home_and_contact() {
        let catalog = Catalog::builtin();
        assert_eq!(
            catalog.menu_ids(),
            vec!["home", "akwarystyka", "aplikacje", "rower", "inne", "kontakt"]
        );
    }

    #[test]
    fn rejects_zero_item_id() {
        let err = Catalog::new(vec![Section::new("a", "A", vec![Item::new(0, "zero")])]);
        assert!(matches!(err, Err(NavError::InvalidCatalog(_))));
    }

    #[test]
    fn rejects_duplicate_items_and_sections() {
        let dup_items = Catalog::new(vec![Section::new(
            "a",
            "A",
            vec![Item::new(1, "x"), Item::new(1, "y")],
        )]);
        assert!(matches!(dup_items, Err(NavError::InvalidCatalog(_))));

        let dup_sections = Catalog::new(vec![
            Section::new("a", "A", vec![]),
            Section::new("a", "Again", vec![]),
        ]);
        assert!(matches!(dup_sections, Err(NavError::InvalidCatalog(_))));
    }

    #[test]
    fn rejects_reserved_section_ids() {
        for reserved in [HOME_MENU, CONTACT_MENU] {
            let err = Catalog::new(vec![Section::new(reserved, "X", vec![])]);
            assert!(matches!(err, Err(NavError::InvalidCatalog(_))));
        }
    }

    #[test]
    fn from_json_parses_and_validates() {
        let json = r#"{
            "sections": [
                { "id": "foto", "label": "Fotografia", "items": [
                    { "id": 1, "title": "Góry" },
                    { "id": 2, "title": "Morze" }
                ] }
            ]
        }"#;
        let catalog = Catalog::from_json(json).unwrap();
        assert_eq!(catalog.require_section("foto").unwrap().len(), 2);

        let invalid = r#"{ "sections": [ { "id": "home", "label": "H", "items": [] } ] }"#;
        assert!(matches!(
            Catalog::from_json(invalid),
            Err(NavError::InvalidCatalog(_))
        ));

        assert!(matches!(
            Catalog::from_json("{ not json"),
            Err(NavError::CatalogParse(_))
        ));
    }

    #[test]
    fn summary_lists_every_section() {
        let summary = Catalog::builtin().summary();
        assert!(summary.contains("Aplikacje: 6 items"));
        assert!(summary.contains("Rower poziomy: 2 items"));
        assert_eq!(summary.lines().count(), 4);
    }
}
