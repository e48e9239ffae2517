//! Static bread catalog.
//!
//! Ordered by design: [`default_selectable`] picks the first entry whose
//! required level is met, so lower-tier breads come first.

use serde::Serialize;

/// A reward definition. The catalog is immutable process-wide data.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Bread {
    pub key: &'static str,
    pub name: &'static str,
    /// Level at which this bread becomes available.
    pub required_level: usize,
}

pub const BREADS: [Bread; 12] = [
    Bread { key: "PlainBread", name: "Plain Bread", required_level: 0 },
    Bread { key: "Crouton", name: "Crouton", required_level: 1 },
    Bread { key: "DinnerRoll", name: "Dinner Roll", required_level: 1 },
    Bread { key: "Muffin", name: "Muffin", required_level: 2 },
    Bread { key: "Scone", name: "Scone", required_level: 1 },
    Bread { key: "ChocoChipCookie", name: "Choco Chip Cookie", required_level: 2 },
    Bread { key: "Baguette", name: "Baguette", required_level: 2 },
    Bread { key: "Bagel", name: "Bagel", required_level: 2 },
    Bread { key: "Pretzel", name: "Pretzel", required_level: 2 },
    Bread { key: "CreamBread", name: "Cream Bread", required_level: 2 },
    Bread { key: "Croissant", name: "Croissant", required_level: 3 },
    Bread { key: "Brioche", name: "Brioche", required_level: 3 },
];

/// Look up a bread by key.
pub fn find_bread(key: &str) -> Option<&'static Bread> {
    BREADS.iter().find(|b| b.key == key)
}

/// First catalog entry unlocked at `level`, if any.
pub fn default_selectable(level: usize) -> Option<&'static str> {
    BREADS
        .iter()
        .find(|b| b.required_level <= level)
        .map(|b| b.key)
}

/// Whether `key` names a catalog bread unlocked at `level`.
pub fn is_unlocked(level: usize, key: &str) -> bool {
    match find_bread(key) {
        Some(bread) => bread.required_level <= level,
        None => false,
    }
}
