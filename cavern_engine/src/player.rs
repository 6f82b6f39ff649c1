//! Player -- the adventurer and the actions they can take.
use anyhow::Result;
use log::info;

use crate::item::{Item, ItemHolder};
use crate::repl::input::{InputSource, prompt_selection};
use crate::trade::trade_session;
use crate::view::{View, ViewItem};
use crate::world::World;

/// Healing never raises hp above this.
pub const MAX_HP: i32 = 100;
/// Gold carried at the start of a game.
pub const STARTING_GOLD: u32 = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    pub x: i32,
    pub y: i32,
    pub hp: i32,
    pub gold: u32,
    pub inventory: Vec<Item>,
    /// Set once the player reaches a victory tile; never cleared.
    pub victory: bool,
}

impl Player {
    /// A fresh adventurer standing on the world's spawn point.
    pub fn new(world: &World) -> Player {
        let (x, y) = world.spawn();
        Player {
            x,
            y,
            hp: MAX_HP,
            gold: STARTING_GOLD,
            inventory: vec![Item::rock(), Item::crusty_bread()],
            victory: false,
        }
    }

    pub fn is_alive(&self) -> bool {
        self.hp > 0
    }

    /// Shift position by the given delta. There are no bounds; walking off
    /// the mapped area simply lands on "no tile".
    pub fn move_by(&mut self, dx: i32, dy: i32) {
        self.x += dx;
        self.y += dy;
        info!("player moved to ({}, {})", self.x, self.y);
    }

    pub fn move_north(&mut self) {
        self.move_by(0, -1);
    }

    pub fn move_south(&mut self) {
        self.move_by(0, 1);
    }

    pub fn move_east(&mut self) {
        self.move_by(1, 0);
    }

    pub fn move_west(&mut self) {
        self.move_by(-1, 0);
    }

    /// The most damaging weapon carried. Ties go to the item found first;
    /// items without damage are never chosen.
    pub fn best_weapon(&self) -> Option<&Item> {
        let mut best: Option<&Item> = None;
        let mut max_damage = 0;
        for item in &self.inventory {
            if let Some(damage) = item.damage()
                && damage > max_damage
            {
                best = Some(item);
                max_damage = damage;
            }
        }
        best
    }

    /// Strike the enemy on the current tile with the best weapon carried.
    ///
    /// Does nothing but report when there is no weapon, no enemy here, or
    /// the enemy is already dead.
    pub fn attack(&self, world: &mut World, view: &mut View) {
        let Some(weapon) = self.best_weapon() else {
            view.push(ViewItem::ActionFailure("You have nothing to fight with!".into()));
            return;
        };
        let Some(enemy) = world.tile_at_mut(self.x, self.y).and_then(|tile| tile.enemy_mut()) else {
            view.push(ViewItem::ActionFailure("There is nothing here to attack.".into()));
            return;
        };
        if !enemy.is_alive() {
            view.push(ViewItem::ActionFailure(format!("The {} is already dead.", enemy.name())));
            return;
        }

        let damage = weapon.damage().unwrap_or_default();
        enemy.take_damage(damage);
        info!(
            "player hit {} with {} for {damage}, enemy hp now {}",
            enemy.name(),
            weapon.name,
            enemy.hp
        );
        if enemy.is_alive() {
            view.push(ViewItem::EnemyWounded {
                weapon: weapon.name.clone(),
                enemy: enemy.name().to_string(),
                hp_left: enemy.hp,
            });
        } else {
            view.push(ViewItem::EnemyKilled {
                weapon: weapon.name.clone(),
                enemy: enemy.name().to_string(),
            });
        }
    }

    /// Indices of inventory items that can heal.
    fn consumable_indices(&self) -> Vec<usize> {
        self.inventory
            .iter()
            .enumerate()
            .filter(|(_, item)| item.healing_value().is_some())
            .map(|(i, _)| i)
            .collect()
    }

    /// Eat or drink one healing item chosen by the player.
    ///
    /// The chosen item is used up and hp is capped at [`MAX_HP`]. Running out
    /// of input cancels without effect.
    ///
    /// # Errors
    /// Propagates failures from the input source.
    pub fn heal(&mut self, input: &mut dyn InputSource, view: &mut View) -> Result<()> {
        let consumables = self.consumable_indices();
        if consumables.is_empty() {
            view.push(ViewItem::ActionFailure("You don't have any items to heal you!".into()));
            return Ok(());
        }

        let options = consumables.iter().map(|&i| self.inventory[i].to_string()).collect();
        view.push(ViewItem::HealOptions(options));
        let Some(choice) = prompt_selection(input, view, "Heal with: ", consumables.len(), false)? else {
            view.push(ViewItem::EngineMessage("You put your provisions away.".into()));
            return Ok(());
        };

        let item = self.inventory.remove(consumables[choice]);
        let healing = item.healing_value().unwrap_or_default();
        self.hp = (self.hp + healing).min(MAX_HP);
        info!("player used {} (+{healing}), hp now {}", item.name, self.hp);
        view.push(ViewItem::Healed {
            item: item.name,
            hp: self.hp,
        });
        Ok(())
    }

    /// Trade with whoever is on the current tile, if anyone.
    ///
    /// # Errors
    /// Propagates failures from the input source.
    pub fn trade(&mut self, world: &mut World, input: &mut dyn InputSource, view: &mut View) -> Result<()> {
        match world.tile_at_mut(self.x, self.y).and_then(|tile| tile.trader_mut()) {
            Some(merchant) => trade_session(self, merchant, input, view),
            None => {
                view.push(ViewItem::ActionFailure("There is no one here to trade with.".into()));
                Ok(())
            },
        }
    }

    pub fn show_inventory(&self, view: &mut View) {
        view.push(ViewItem::Inventory {
            items: self
                .inventory
                .iter()
                .map(|item| (item.to_string(), item.description.clone()))
                .collect(),
            gold: self.gold,
        });
    }
}

impl ItemHolder for Player {
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
