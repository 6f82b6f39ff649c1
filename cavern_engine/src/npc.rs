//! NPC Module
//!
//! The only non-playable character is the merchant who squats on trader tiles.

use crate::item::{Item, ItemHolder};

/// Starting purse for a freshly generated merchant.
pub const MERCHANT_GOLD: u32 = 100;

/// A trader NPC. Shares the inventory/gold shape of the player so either can
/// take the buyer or seller side of a trade.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Merchant {
    pub name: String,
    pub description: String,
    pub gold: u32,
    pub inventory: Vec<Item>,
}

impl Default for Merchant {
    fn default() -> Merchant {
        Merchant {
            name: "Trader".into(),
            description: "A strange not-quite-human, not-quite-creature with a sack of wares.".into(),
            gold: MERCHANT_GOLD,
            inventory: vec![
                Item::crusty_bread(),
                Item::crusty_bread(),
                Item::crusty_bread(),
                Item::healing_potion(),
                Item::healing_potion(),
            ],
        }
    }
}

impl Merchant {
    pub fn new() -> Merchant {
        Merchant::default()
    }
}

impl ItemHolder for Merchant {
    fn inventory(&self) -> &[Item] {
        &self.inventory
    }

    fn inventory_mut(&mut self) -> &mut Vec<Item> {
        &mut self.inventory
    }

    fn gold(&self) -> u32 {
        self.gold
    }

    fn gold_mut(&mut self) -> &mut u32 {
        &mut self.gold
    }
}
