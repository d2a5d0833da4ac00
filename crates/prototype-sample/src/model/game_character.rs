use prototype_framework::Prototype;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Core attributes of a [`GameCharacter`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterStats {
    pub level: u32,
    pub health: u32,
    pub mana: u32,
    pub strength: u32,
    pub intelligence: u32,
    pub dexterity: u32,
}

impl Default for CharacterStats {
    fn default() -> Self {
        Self {
            level: 1,
            health: 100,
            mana: 50,
            strength: 10,
            intelligence: 10,
            dexterity: 10,
        }
    }
}

/// A game character template: a class, stats, learned skills and an inventory.
#[derive(Debug, PartialEq)]
pub struct GameCharacter {
    pub name: String,
    pub class: String,
    pub stats: CharacterStats,
    pub skills: Vec<String>,
    /// Item name to quantity held.
    pub inventory: BTreeMap<String, u32>,
}

/// Partial update for a [`GameCharacter`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CharacterUpdate {
    pub name: Option<String>,
    pub stats: Option<CharacterStats>,
}

impl GameCharacter {
    pub fn new(name: impl Into<String>, class: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            class: class.into(),
            stats: CharacterStats::default(),
            skills: Vec::new(),
            inventory: BTreeMap::new(),
        }
    }

    /// Copy construction: a value-equal character owning its own skills and inventory.
    pub fn copy_from(other: &GameCharacter) -> Self {
        Self {
            name: other.name.clone(),
            class: other.class.clone(),
            stats: other.stats,
            skills: other.skills.iter().cloned().collect(),
            inventory: other
                .inventory
                .iter()
                .map(|(item, quantity)| (item.clone(), *quantity))
                .collect(),
        }
    }

    pub fn add_skill(&mut self, skill: impl Into<String>) {
        self.skills.push(skill.into());
    }

    /// Adds `quantity` of `item`, stacking onto any already held.
    pub fn add_item(&mut self, item: impl Into<String>, quantity: u32) {
        let held = self.inventory.entry(item.into()).or_insert(0);
        *held = held.saturating_add(quantity);
    }

    pub fn quantity_of(&self, item: &str) -> u32 {
        self.inventory.get(item).copied().unwrap_or(0)
    }

    pub fn set_stats(&mut self, stats: CharacterStats) {
        self.stats = stats;
    }

    pub fn level_up(&mut self) {
        self.stats.level = self.stats.level.saturating_add(1);
    }

    /// Applies a partial update. Returns `true` if any field was present.
    pub fn apply(&mut self, update: CharacterUpdate) -> bool {
        let mut changed = false;
        if let Some(name) = update.name {
            self.name = name;
            changed = true;
        }
        if let Some(stats) = update.stats {
            self.stats = stats;
            changed = true;
        }
        changed
    }
}

impl Prototype for GameCharacter {
    fn clone_prototype(&self) -> Self {
        Self::copy_from(self)
    }
}

impl fmt::Display for GameCharacter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = &self.stats;
        writeln!(f, "=== Character: {} ({}) ===", self.name, self.class)?;
        writeln!(f, "Level: {}", s.level)?;
        writeln!(f, "Health: {} | Mana: {}", s.health, s.mana)?;
        writeln!(
            f,
            "STR: {} | INT: {} | DEX: {}",
            s.strength, s.intelligence, s.dexterity
        )?;
        writeln!(f, "Skills: {}", super::joined_or_none(&self.skills))?;
        let items: Vec<String> = self
            .inventory
            .iter()
            .map(|(item, quantity)| format!("{item} x{quantity}"))
            .collect();
        write!(f, "Inventory: {}", super::joined_or_none(&items))
    }
}
