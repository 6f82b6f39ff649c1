//! Output for the cave.
//!
//! Actions never print. They push [`ViewItem`]s, and the queue is rendered
//! whenever the game is about to wait for input.
use std::fmt::Write;

use colored::Colorize;
use textwrap::{fill, termwidth};
use variantly::Variantly;

use crate::command::Command;
use crate::style::GameStyle;

const ICON_FAILURE: &str = "\u{274C}"; // ✖
const ICON_ERROR: &str = "⚠︎"; // U+26A0 U+FE0E
const ICON_HARMED: &str = "\u{2623}"; // biohazard sign
const ICON_HEALED: &str = "\u{2624}"; // caduceus
const ICON_GOLD: &str = "\u{25C9}"; // ◉
const ICON_CELEBRATE: &str = "🎉"; // U+1F389
const ICON_DEATH: &str = "☠";

/// Whether flushed items go to the terminal or are retained for inspection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Variantly)]
pub enum ViewMode {
    Terminal,
    Captured,
}

/// View aggregates messages produced by game actions and displays them in order.
#[derive(Debug, Clone)]
pub struct View {
    pub width: usize,
    pub mode: ViewMode,
    pub items: Vec<ViewItem>,
}
impl Default for View {
    fn default() -> Self {
        Self::new()
    }
}

impl View {
    /// Create a new empty view that prints to the terminal.
    pub fn new() -> Self {
        Self {
            width: termwidth(),
            mode: ViewMode::Terminal,
            items: Vec::new(),
        }
    }

    /// Create a view that never prints; flushed items stay in `items`.
    pub fn captured() -> Self {
        Self {
            width: 80,
            mode: ViewMode::Captured,
            items: Vec::new(),
        }
    }

    pub fn push(&mut self, item: ViewItem) {
        self.items.push(item);
    }

    /// Display everything pushed since the last flush.
    pub fn flush(&mut self) {
        if self.mode.is_captured() {
            return;
        }
        // re-check terminal width in case it's been resized
        self.width = termwidth();
        for item in self.items.drain(..) {
            println!("{}", item.render(self.width));
        }
    }

    /// Returns true if any pending or captured item satisfies `pred`.
    pub fn contains(&self, pred: impl Fn(&ViewItem) -> bool) -> bool {
        self.items.iter().any(pred)
    }
}

/// One piece of output produced by the game core.
#[derive(Debug, Clone, PartialEq, Eq, Variantly)]
pub enum ViewItem {
    TileIntro(String),
    PlayerHarmed {
        enemy: String,
        damage: i32,
        hp_left: i32,
    },
    GoldFound(u32),
    VictoryReached,
    PlayerDied,
    EnemyKilled {
        weapon: String,
        enemy: String,
    },
    EnemyWounded {
        weapon: String,
        enemy: String,
        hp_left: i32,
    },
    HealOptions(Vec<String>),
    Healed {
        item: String,
        hp: i32,
    },
    /// Each entry is an item label and its description.
    Inventory {
        items: Vec<(String, String)>,
        gold: u32,
    },
    MerchantGreeting {
        name: String,
        description: String,
    },
    TradeListing {
        heading: String,
        entries: Vec<(String, u32)>,
    },
    TradeComplete {
        item: String,
        price: u32,
    },
    TooExpensive {
        item: String,
        price: u32,
    },
    InvalidChoice(String),
    ActionFailure(String),
    ActionMenu(Vec<Command>),
    EngineMessage(String),
}

impl ViewItem {
    /// Format this item for the terminal, wrapping prose to `width`.
    pub fn render(&self, width: usize) -> String {
        match self {
            ViewItem::TileIntro(text) => format!("\n{}\n", fill(text, width).description_style()),
            ViewItem::PlayerHarmed { enemy, damage, hp_left } => format!(
                "{ICON_HARMED} {} does {} damage. You have {} HP remaining.",
                enemy.enemy_style(),
                damage.to_string().harmed_style(),
                hp_left.to_string().bold()
            ),
            ViewItem::GoldFound(amount) => format!("{ICON_GOLD} {}", format!("+{amount} gold added.").gold_style()),
            ViewItem::VictoryReached => format!("{ICON_CELEBRATE} {}", "Victory is yours!".victory_style()),
            ViewItem::PlayerDied => format!("{ICON_DEATH} {}", "Your journey has come to an early end!".error_style()),
            ViewItem::EnemyKilled { weapon, enemy } => format!(
                "You use {} against {}!\nYou killed {}!",
                weapon.item_style(),
                enemy.enemy_style(),
                enemy.enemy_style()
            ),
            ViewItem::EnemyWounded { weapon, enemy, hp_left } => format!(
                "You use {} against {}!\n{} HP is {hp_left}.",
                weapon.item_style(),
                enemy.enemy_style(),
                enemy.enemy_style()
            ),
            ViewItem::HealOptions(options) => {
                let mut out = format!("{}", "Choose an item to use to heal:".subheading_style());
                for (i, name) in options.iter().enumerate() {
                    let _ = write!(out, "\n{}. {}", i + 1, name.item_style());
                }
                out
            },
            ViewItem::Healed { item, hp } => format!(
                "{ICON_HEALED} You use the {}. {}",
                item.item_style(),
                format!("Current HP: {hp}").healed_style()
            ),
            ViewItem::Inventory { items, gold } => {
                let mut out = format!("{}", "Inventory:".subheading_style());
                if items.is_empty() {
                    let _ = write!(out, "\n{}", "You are carrying nothing.".italic().dimmed());
                }
                for (label, description) in items {
                    let _ = write!(out, "\n* {} - {}", label.item_style(), description.italic());
                }
                let _ = write!(out, "\nGold: {}", gold.to_string().gold_style());
                out
            },
            ViewItem::TradeListing { heading, entries } => {
                let mut out = format!("{}", heading.subheading_style());
                if entries.is_empty() {
                    let _ = write!(out, "\n{}", "Nothing to offer.".italic().dimmed());
                }
                for (i, (name, value)) in entries.iter().enumerate() {
                    let _ = write!(out, "\n{}. {} - {} Gold", i + 1, name.item_style(), value);
                }
                out
            },
            ViewItem::MerchantGreeting { name, description } => {
                format!("{}\n{}", name.npc_style(), fill(description, width).description_style())
            },
            ViewItem::TradeComplete { item, price } => {
                format!("Trade complete! ({} for {} gold)", item.item_style(), price.to_string().gold_style())
            },
            ViewItem::TooExpensive { item, price } => format!(
                "{ICON_FAILURE} That's too expensive: {} costs {} gold.",
                item.item_style(),
                price
            ),
            ViewItem::InvalidChoice(text) => format!("{ICON_ERROR} {}", text.error_style()),
            ViewItem::ActionFailure(text) => format!("{ICON_FAILURE} {}", text.denied_style()),
            ViewItem::ActionMenu(commands) => {
                let mut out = format!("{}", "Choose an action:".subheading_style());
                for command in commands {
                    let _ = write!(out, "\n{}: {}", command.key().to_string().bold(), command.label());
                }
                out
            },
            ViewItem::EngineMessage(text) => text.italic().to_string(),
        }
    }
}
