//! Trade engine.
//!
//! Moves items and gold between two [`ItemHolder`]s. Which party is the
//! seller depends on the direction of the deal: when the player buys, the
//! merchant sells, and vice versa.

use anyhow::Result;
use log::info;
use thiserror::Error;

use crate::item::ItemHolder;
use crate::npc::Merchant;
use crate::player::Player;
use crate::repl::input::{InputEvent, InputSource, is_quit, prompt_selection};
use crate::view::{View, ViewItem};

/// Why an exchange did not happen. Neither party is changed in either case.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TradeError {
    #[error("no item at position {0}")]
    NoSuchItem(usize),
    #[error("{item} costs {price} gold but the buyer only has {funds}")]
    TooExpensive { item: String, price: u32, funds: u32 },
}

/// Record of a completed exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TradeReceipt {
    pub item: String,
    pub price: u32,
}

/// Move the seller's item at `index` to the buyer, and its value in gold from
/// the buyer to the seller.
///
/// Every check happens before anything is mutated, so a refused trade leaves
/// both inventories and both purses exactly as they were.
///
/// # Errors
/// [`TradeError::NoSuchItem`] if `index` is out of range;
/// [`TradeError::TooExpensive`] if the buyer can't afford the item.
pub fn swap<S, B>(seller: &mut S, buyer: &mut B, index: usize) -> Result<TradeReceipt, TradeError>
where
    S: ItemHolder + ?Sized,
    B: ItemHolder + ?Sized,
{
    let (name, price) = match seller.inventory().get(index) {
        Some(item) => (item.name.clone(), item.value),
        None => return Err(TradeError::NoSuchItem(index)),
    };
    if price > buyer.gold() {
        return Err(TradeError::TooExpensive {
            item: name,
            price,
            funds: buyer.gold(),
        });
    }

    let item = seller.remove_item(index).ok_or(TradeError::NoSuchItem(index))?;
    buyer.add_item(item);
    *seller.gold_mut() += price;
    *buyer.gold_mut() -= price;
    info!("traded {name} for {price} gold");
    Ok(TradeReceipt { item: name, price })
}

/// Show the seller's wares and let the player pick items until they quit.
///
/// The listing is shown again after every attempt so positions stay accurate
/// as items change hands.
///
/// # Errors
/// Propagates failures from the input source.
pub fn trade_listing<S, B>(
    seller: &mut S,
    buyer: &mut B,
    heading: &str,
    input: &mut dyn InputSource,
    view: &mut View,
) -> Result<()>
where
    S: ItemHolder + ?Sized,
    B: ItemHolder + ?Sized,
{
    loop {
        let entries: Vec<(String, u32)> = seller
            .inventory()
            .iter()
            .map(|item| (item.name.clone(), item.value))
            .collect();
        let count = entries.len();
        view.push(ViewItem::TradeListing {
            heading: heading.to_string(),
            entries,
        });
        if count == 0 {
            return Ok(());
        }

        let Some(index) = prompt_selection(input, view, "Choose an item or press Q to exit: ", count, true)? else {
            return Ok(());
        };
        match swap(seller, buyer, index) {
            Ok(receipt) => view.push(ViewItem::TradeComplete {
                item: receipt.item,
                price: receipt.price,
            }),
            Err(TradeError::TooExpensive { item, price, funds }) => {
                info!("trade refused: {item} costs {price}, buyer has {funds}");
                view.push(ViewItem::TooExpensive { item, price });
            },
            Err(err @ TradeError::NoSuchItem(_)) => view.push(ViewItem::InvalidChoice(err.to_string())),
        }
    }
}

/// Repeatedly offer to buy, sell, or quit until the player quits.
///
/// # Errors
/// Propagates failures from the input source.
pub fn trade_session(
    player: &mut Player,
    merchant: &mut Merchant,
    input: &mut dyn InputSource,
    view: &mut View,
) -> Result<()> {
    info!("trade session opened with {}", merchant.name);
    view.push(ViewItem::MerchantGreeting {
        name: merchant.name.clone(),
        description: merchant.description.clone(),
    });
    loop {
        view.flush();
        let line = match input.read_line("Would you like to (B)uy, (S)ell, or (Q)uit? ")? {
            InputEvent::Line(line) => line,
            InputEvent::Eof | InputEvent::Interrupted => break,
        };
        if is_quit(&line) {
            break;
        }
        match line.trim().to_lowercase().as_str() {
            "b" => trade_listing(merchant, player, "Here's what's available to buy:", input, view)?,
            "s" => trade_listing(player, merchant, "Here's what's available to sell:", input, view)?,
            _ => view.push(ViewItem::InvalidChoice("Invalid choice!".into())),
        }
    }
    info!("trade session closed with {}", merchant.name);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::Item;
    use crate::repl::input::ScriptedInput;
    use crate::tile::Tile;
    use crate::world::World;

    fn player() -> Player {
        let world = World::from_rows(vec![vec![Some(Tile::start(0, 0)), Some(Tile::victory(1, 0))]], (0, 0));
        Player::new(&world)
    }

    fn merchant_with(items: Vec<Item>, gold: u32) -> Merchant {
        Merchant {
            inventory: items,
            gold,
            ..Merchant::default()
        }
    }

    #[test]
    fn swap_moves_item_and_gold() {
        let mut buyer = player();
        buyer.gold = 30;
        let mut seller = merchant_with(vec![Item::crusty_bread(), Item::dagger()], 100);

        let receipt = swap(&mut seller, &mut buyer, 1).unwrap();
        assert_eq!(receipt, TradeReceipt { item: "Dagger".into(), price: 20 });
        assert_eq!(buyer.gold, 10);
        assert_eq!(seller.gold, 120);
        assert_eq!(buyer.inventory.last(), Some(&Item::dagger()));
        assert_eq!(seller.inventory, vec![Item::crusty_bread()]);
    }

    #[test]
    fn unaffordable_swap_changes_nothing() {
        let mut buyer = player();
        let mut seller = merchant_with(vec![Item::new("Lantern", "Dim.", 8, crate::item::ItemCapability::Plain)], 40);
        let (buyer_before, seller_before) = (buyer.clone(), seller.clone());

        let err = swap(&mut seller, &mut buyer, 0).unwrap_err();
        assert_eq!(
            err,
            TradeError::TooExpensive {
                item: "Lantern".into(),
                price: 8,
                funds: 5
            }
        );
        assert_eq!(buyer, buyer_before);
        assert_eq!(seller, seller_before);
    }

    #[test]
    fn exact_funds_are_enough() {
        let mut buyer = player();
        buyer.gold = 12;
        let mut seller = merchant_with(vec![Item::crusty_bread()], 0);
        swap(&mut seller, &mut buyer, 0).unwrap();
        assert_eq!(buyer.gold, 0);
        assert_eq!(seller.gold, 12);
        assert!(seller.inventory.is_empty());
    }

    #[test]
    fn swap_out_of_range_is_refused() {
        let mut buyer = player();
        let mut seller = merchant_with(vec![], 0);
        assert_eq!(swap(&mut seller, &mut buyer, 0), Err(TradeError::NoSuchItem(0)));
    }

    #[test]
    fn session_buy_then_sell() {
        let mut p = player();
        p.gold = 15;
        let mut m = merchant_with(vec![Item::crusty_bread(), Item::healing_potion()], 100);
        let mut input = ScriptedInput::new(["B", "1", "q", "s", "1", "Q", "q"]);
        let mut view = View::captured();

        trade_session(&mut p, &mut m, &mut input, &mut view).unwrap();

        assert_eq!(input.remaining(), 0);
        // bought bread for 12, then sold the rock for 1
        assert_eq!(p.gold, 4);
        assert_eq!(m.gold, 100 + 12 - 1);
        let names: Vec<_> = p.inventory.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, ["Crusty bread", "Crusty bread"]);
        assert!(m.inventory.iter().any(|i| i.name == "Rock"));
        assert_eq!(view.items.iter().filter(|i| i.is_trade_complete()).count(), 2);
    }

    #[test]
    fn session_rejects_unknown_choices() {
        let mut p = player();
        let mut m = Merchant::default();
        let mut input = ScriptedInput::new(["x", "buy", "q"]);
        let mut view = View::captured();
        trade_session(&mut p, &mut m, &mut input, &mut view).unwrap();
        assert_eq!(
            view.items.iter().filter(|i| **i == ViewItem::InvalidChoice("Invalid choice!".into())).count(),
            2
        );
        assert_eq!(p.gold, 5);
        assert_eq!(m, Merchant::default());
        assert_eq!(
            view.items.first(),
            Some(&ViewItem::MerchantGreeting {
                name: m.name.clone(),
                description: m.description.clone(),
            })
        );
    }

    #[test]
    fn listing_reports_too_expensive_and_continues() {
        let mut p = player();
        let mut m = Merchant::default();
        let mut input = ScriptedInput::new(["4", "abc", "q"]);
        let mut view = View::captured();

        trade_listing(&mut m, &mut p, "For sale:", &mut input, &mut view).unwrap();
        assert!(view.contains(|i| *i == ViewItem::TooExpensive { item: "Healing potion".into(), price: 60 }));
        assert!(view.contains(ViewItem::is_invalid_choice));
        assert_eq!(p.gold, 5);
        assert_eq!(m.inventory.len(), 5);
    }

    #[test]
    fn listing_with_empty_stock_returns_immediately() {
        let mut p = player();
        p.inventory.clear();
        let mut m = Merchant::default();
        let mut input = ScriptedInput::new(["1"]);
        let mut view = View::captured();
        trade_listing(&mut p, &mut m, "To sell:", &mut input, &mut view).unwrap();
        assert_eq!(input.remaining(), 1);
    }
}
