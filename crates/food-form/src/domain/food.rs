//! Menu Item Entity
//!
//! A persisted menu item and the id-less variant the admin form builds.

use serde::{Deserialize, Serialize};

use super::tag::FoodTag;

/// Price as held by the draft
///
/// Starts numeric; the number input hands back raw text, which is stored
/// untouched. Both shapes go over the wire as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PriceField {
    Amount(serde_json::Number),
    Raw(String),
}

impl Default for PriceField {
    fn default() -> Self {
        PriceField::Amount(serde_json::Number::from(0u32))
    }
}

impl PriceField {
    /// Value shown in the input
    pub fn display(&self) -> String {
        match self {
            PriceField::Amount(n) => n.to_string(),
            PriceField::Raw(s) => s.clone(),
        }
    }

    /// Numeric value, if the field holds one
    pub fn parsed(&self) -> Option<f64> {
        match self {
            PriceField::Amount(n) => n.as_f64(),
            PriceField::Raw(s) => s.trim().parse::<f64>().ok().filter(|v| v.is_finite()),
        }
    }
}

/// A menu item as stored by the foods service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    /// Assigned by the foods service
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub price: PriceField,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub tags: Vec<FoodTag>,
}

/// A menu item that has not been persisted yet
///
/// Field order is the JSON key order of the create request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewMenuItem {
    pub description: String,
    pub image: String,
    pub name: String,
    pub price: PriceField,
    /// Insertion-ordered, no duplicates
    pub tags: Vec<FoodTag>,
}

impl NewMenuItem {
    /// Empty draft: blank strings, zero price, no tags
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_tag(&self, tag: FoodTag) -> bool {
        self.tags.contains(&tag)
    }

    /// Add a tag unless already present
    pub fn insert_tag(&mut self, tag: FoodTag) {
        if !self.has_tag(tag) {
            self.tags.push(tag);
        }
    }

    pub fn remove_tag(&mut self, tag: FoodTag) {
        self.tags.retain(|t| *t != tag);
    }

    /// Attach the id assigned by the foods service
    pub fn with_id(self, id: u32) -> MenuItem {
        MenuItem {
            id,
            name: self.name,
            image: self.image,
            price: self.price,
            description: self.description,
            tags: self.tags,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_item_is_empty() {
        let item = NewMenuItem::new();
        assert!(item.name.is_empty());
        assert!(item.tags.is_empty());
        assert_eq!(item.price.parsed(), Some(0.0));
        assert_eq!(serde_json::to_string(&item).unwrap(), r#"{"description":"","image":"","name":"","price":0,"tags":[]}"#);
    }

    #[test]
    fn test_insert_tag_deduplicates() {
        let mut item = NewMenuItem::new();
        item.insert_tag(FoodTag::Lunch);
        item.insert_tag(FoodTag::Spicy);
        item.insert_tag(FoodTag::Lunch);
        assert_eq!(item.tags, vec![FoodTag::Lunch, FoodTag::Spicy]);
        item.remove_tag(FoodTag::Lunch);
        assert_eq!(item.tags, vec![FoodTag::Spicy]);
    }

    #[test]
    fn test_price_shapes() {
        assert_eq!(PriceField::Raw("4.50".into()).parsed(), Some(4.5));
        assert_eq!(PriceField::Raw("".into()).parsed(), None);
        assert_eq!(PriceField::Raw("abc".into()).display(), "abc");
    }

    #[test]
    fn test_read_item_with_either_price() {
        let numeric: MenuItem = serde_json::from_str(
            r#"{"id":1,"name":"Soup","image":"soup.png","price":7,"description":"Hot","tags":["Lunch"]}"#,
        )
        .unwrap();
        assert_eq!(numeric.price.parsed(), Some(7.0));

        let textual: MenuItem =
            serde_json::from_str(r#"{"id":2,"name":"Taco","price":"5","tags":["Spicy"]}"#).unwrap();
        assert_eq!(textual.price, PriceField::Raw("5".into()));
        assert_eq!(textual.tags, vec![FoodTag::Spicy]);
    }

    #[test]
    fn test_with_id() {
        let mut draft = NewMenuItem::new();
        draft.name = "Pancakes".into();
        let item = draft.with_id(9);
        assert_eq!(item.id, 9);
        assert_eq!(item.name, "Pancakes");
    }
}
