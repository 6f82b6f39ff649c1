//! Enemy module
//!
//! Enemies are drawn once, when their tile is built, from a fixed weighted
//! table. They never move and never respawn.

use std::fmt::Display;

use rand::Rng;

/// The kinds of creature that can lurk on an enemy tile.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, variantly::Variantly)]
pub enum EnemyKind {
    GiantSpider,
    Ogre,
    BatColony,
    RockMonster,
}

impl EnemyKind {
    /// Maps a roll in `[0, 1)` onto the kind table using cumulative thresholds.
    pub fn from_roll(roll: f64) -> EnemyKind {
        if roll < 0.50 {
            EnemyKind::GiantSpider
        } else if roll < 0.80 {
            EnemyKind::Ogre
        } else if roll < 0.95 {
            EnemyKind::BatColony
        } else {
            EnemyKind::RockMonster
        }
    }

    /// Draws a kind using the supplied random number generator.
    pub fn draw(rng: &mut impl Rng) -> EnemyKind {
        EnemyKind::from_roll(rng.random::<f64>())
    }

    pub fn name(self) -> &'static str {
        match self {
            EnemyKind::GiantSpider => "Giant Spider",
            EnemyKind::Ogre => "Ogre",
            EnemyKind::BatColony => "Colony of bats",
            EnemyKind::RockMonster => "Rock Monster",
        }
    }

    pub fn starting_hp(self) -> i32 {
        match self {
            EnemyKind::GiantSpider => 10,
            EnemyKind::Ogre => 30,
            EnemyKind::BatColony => 100,
            EnemyKind::RockMonster => 80,
        }
    }

    pub fn damage(self) -> i32 {
        match self {
            EnemyKind::GiantSpider => 2,
            EnemyKind::Ogre => 10,
            EnemyKind::BatColony => 4,
            EnemyKind::RockMonster => 15,
        }
    }

    /// Narration while the enemy still lives.
    pub fn alive_text(self) -> &'static str {
        match self {
            EnemyKind::GiantSpider => "A giant spider jumps down from its web in front of you!",
            EnemyKind::Ogre => "An ogre is blocking your path!",
            EnemyKind::BatColony => {
                "You hear a squeaking noise growing louder... suddenly you are lost in a swarm of bats!"
            },
            EnemyKind::RockMonster => "You've disturbed a rock monster from his slumber!",
        }
    }

    /// Narration once the enemy is dead.
    pub fn dead_text(self) -> &'static str {
        match self {
            EnemyKind::GiantSpider => "The corpse of a dead spider rots on the ground.",
            EnemyKind::Ogre => "A dead ogre reminds you of your triumph.",
            EnemyKind::BatColony => "Dozens of dead bats are scattered on the ground.",
            EnemyKind::RockMonster => "Defeated, the monster has reverted into an ordinary rock.",
        }
    }
}

impl Display for EnemyKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A creature occupying an enemy tile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Enemy {
    pub kind: EnemyKind,
    pub hp: i32,
}

impl Enemy {
    /// Create an enemy of the given kind at full health.
    pub fn new(kind: EnemyKind) -> Enemy {
        Enemy {
            kind,
            hp: kind.starting_hp(),
        }
    }

    /// Create an enemy by weighted random draw.
    pub fn spawn(rng: &mut impl Rng) -> Enemy {
        Enemy::new(EnemyKind::draw(rng))
    }

    pub fn name(&self) -> &'static str {
        self.kind.name()
    }

    pub fn damage(&self) -> i32 {
        self.kind.damage()
    }

    pub fn is_alive(&self) -> bool {
        self.hp > 0
    }

    /// Reduce hp by `amount`. Hp may drop below zero.
    pub fn take_damage(&mut self, amount: i32) {
        self.hp -= amount;
    }

    /// Current narration, depending on whether the enemy still lives.
    pub fn text(&self) -> &'static str {
        if self.is_alive() {
            self.kind.alive_text()
        } else {
            self.kind.dead_text()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn roll_thresholds_map_to_kinds() {
        assert_eq!(EnemyKind::from_roll(0.0), EnemyKind::GiantSpider);
        assert_eq!(EnemyKind::from_roll(0.49), EnemyKind::GiantSpider);
        assert_eq!(EnemyKind::from_roll(0.50), EnemyKind::Ogre);
        assert_eq!(EnemyKind::from_roll(0.79), EnemyKind::Ogre);
        assert_eq!(EnemyKind::from_roll(0.80), EnemyKind::BatColony);
        assert_eq!(EnemyKind::from_roll(0.94), EnemyKind::BatColony);
        assert_eq!(EnemyKind::from_roll(0.95), EnemyKind::RockMonster);
        assert_eq!(EnemyKind::from_roll(0.999), EnemyKind::RockMonster);
    }

    #[test]
    fn new_enemy_starts_at_kind_hp() {
        let ogre = Enemy::new(EnemyKind::Ogre);
        assert_eq!(ogre.hp, 30);
        assert_eq!(ogre.damage(), 10);
        assert!(ogre.is_alive());
        assert_eq!(ogre.text(), EnemyKind::Ogre.alive_text());
    }

    #[test]
    fn enemy_dies_at_zero_hp() {
        let mut spider = Enemy::new(EnemyKind::GiantSpider);
        spider.take_damage(10);
        assert!(!spider.is_alive());
        assert_eq!(spider.text(), EnemyKind::GiantSpider.dead_text());

        let mut ogre = Enemy::new(EnemyKind::Ogre);
        ogre.take_damage(45);
        assert_eq!(ogre.hp, -15);
        assert!(!ogre.is_alive());
    }

    #[test]
    fn spawn_always_yields_a_living_enemy() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let enemy = Enemy::spawn(&mut rng);
            assert!(enemy.is_alive());
            assert_eq!(enemy.hp, enemy.kind.starting_hp());
        }
    }
}
