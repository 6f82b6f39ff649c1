//! Item types and related helpers.
//!
//! Every item has a name and a trade value. What an item can *do* is described
//! by its [`ItemCapability`]: weapons carry damage, consumables carry a healing
//! value, and plain items are only good for trading.

use std::fmt::Display;

use variantly::Variantly;

/// The one thing an item is useful for, apart from being sold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Variantly)]
pub enum ItemCapability {
    Weapon { damage: i32 },
    Consumable { healing_value: i32 },
    Plain,
}

/// Anything that can sit in an inventory and change hands in a trade.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    /// The display name of the item.
    pub name: String,
    /// A short flavor description.
    pub description: String,
    /// Price in gold when traded.
    pub value: u32,
    /// What the item can be used for.
    pub capability: ItemCapability,
}

impl Item {
    pub fn new(name: &str, description: &str, value: u32, capability: ItemCapability) -> Item {
        Item {
            name: name.to_string(),
            description: description.to_string(),
            value,
            capability,
        }
    }

    /// Damage dealt when used as a weapon, or `None` if this is not a weapon.
    pub fn damage(&self) -> Option<i32> {
        match self.capability {
            ItemCapability::Weapon { damage } => Some(damage),
            _ => None,
        }
    }

    /// HP restored when consumed, or `None` if this can't be eaten or drunk.
    pub fn healing_value(&self) -> Option<i32> {
        match self.capability {
            ItemCapability::Consumable { healing_value } => Some(healing_value),
            _ => None,
        }
    }

    pub fn rock() -> Item {
        Item::new(
            "Rock",
            "A fist-sized rock, suitable for bludgeoning.",
            1,
            ItemCapability::Weapon { damage: 5 },
        )
    }

    pub fn dagger() -> Item {
        Item::new(
            "Dagger",
            "A small dagger with some rust. Somewhat more dangerous than a rock.",
            20,
            ItemCapability::Weapon { damage: 10 },
        )
    }

    pub fn rusty_sword() -> Item {
        Item::new(
            "Rusty sword",
            "This sword is showing its age, but still has some fight in it.",
            100,
            ItemCapability::Weapon { damage: 20 },
        )
    }

    pub fn crusty_bread() -> Item {
        Item::new(
            "Crusty bread",
            "Stale, but it will keep you going.",
            12,
            ItemCapability::Consumable { healing_value: 10 },
        )
    }

    pub fn healing_potion() -> Item {
        Item::new(
            "Healing potion",
            "A murky red draught that smells of iron.",
            60,
            ItemCapability::Consumable { healing_value: 50 },
        )
    }
}

impl Display for Item {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.capability {
            ItemCapability::Weapon { damage } => write!(f, "{} (+{damage} damage)", self.name),
            ItemCapability::Consumable { healing_value } => write!(f, "{} (+{healing_value} HP)", self.name),
            ItemCapability::Plain => write!(f, "{}", self.name),
        }
    }
}

/// Methods common to anything that owns items and a purse of gold.
///
/// Both parties of a trade implement this, so the trade engine never needs to
/// know whether it is dealing with the player or the merchant.
pub trait ItemHolder {
    fn inventory(&self) -> &[Item];
    fn inventory_mut(&mut self) -> &mut Vec<Item>;
    fn gold(&self) -> u32;
    fn gold_mut(&mut self) -> &mut u32;

    fn add_item(&mut self, item: Item) {
        self.inventory_mut().push(item);
    }

    /// Removes and returns the item at `index`, if there is one.
    fn remove_item(&mut self, index: usize) -> Option<Item> {
        if index < self.inventory().len() {
            Some(self.inventory_mut().remove(index))
        } else {
            None
        }
    }
}
