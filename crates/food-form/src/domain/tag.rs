//! Food Tag Enumeration
//!
//! Closed set of categories a menu item can carry.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::error::FormError;

/// Category attached to a menu item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum FoodTag {
    Breakfast,
    Lunch,
    Dinner,
    Dessert,
    Drink,
    Appetizer,
    Spicy,
    Vegetarian,
    Alcoholic,
}

impl FoodTag {
    /// Every tag, in checkbox display order
    pub const ALL: [FoodTag; 9] = [
        FoodTag::Breakfast,
        FoodTag::Lunch,
        FoodTag::Dinner,
        FoodTag::Dessert,
        FoodTag::Drink,
        FoodTag::Appetizer,
        FoodTag::Spicy,
        FoodTag::Vegetarian,
        FoodTag::Alcoholic,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FoodTag::Breakfast => "Breakfast",
            FoodTag::Lunch => "Lunch",
            FoodTag::Dinner => "Dinner",
            FoodTag::Dessert => "Dessert",
            FoodTag::Drink => "Drink",
            FoodTag::Appetizer => "Appetizer",
            FoodTag::Spicy => "Spicy",
            FoodTag::Vegetarian => "Vegetarian",
            FoodTag::Alcoholic => "Alcoholic",
        }
    }

    /// DOM id of this tag's checkbox
    pub fn checkbox_id(&self) -> String {
        format!("tag-{}", self.as_str())
    }
}

impl std::fmt::Display for FoodTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FoodTag {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FoodTag::ALL
            .iter()
            .copied()
            .find(|tag| tag.as_str() == s)
            .ok_or_else(|| FormError::UnknownTag(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_order() {
        let names: Vec<&str> = FoodTag::ALL.iter().map(|t| t.as_str()).collect();
        assert_eq!(
            names,
            ["Breakfast", "Lunch", "Dinner", "Dessert", "Drink", "Appetizer", "Spicy", "Vegetarian", "Alcoholic"]
        );
    }

    #[test]
    fn test_parse_tag() {
        assert_eq!("Spicy".parse::<FoodTag>(), Ok(FoodTag::Spicy));
        assert_eq!("spicy".parse::<FoodTag>(), Err(FormError::UnknownTag("spicy".into())));
    }

    #[test]
    fn test_tag_serialization() {
        assert_eq!(serde_json::to_string(&FoodTag::Vegetarian).unwrap(), "\"Vegetarian\"");
        assert_eq!(FoodTag::Drink.checkbox_id(), "tag-Drink");
    }
}
