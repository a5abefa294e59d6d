//! Card identity and per-card storage
//!
//! The rule set covers exactly three credit cards, so cards are identified by
//! a closed enum rather than an open id space. `CardSet` gives every per-card
//! quantity (balances, pending charges, statements, payment plans) one typed
//! container with infallible indexing.

use std::fmt;
use std::ops::{Index, IndexMut};

use serde::{Deserialize, Serialize};

/// Identity of one of the three tracked credit cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardId {
    A,
    B,
    C,
}

impl CardId {
    /// All cards, in the order payments are evaluated.
    pub const ALL: [CardId; 3] = [CardId::A, CardId::B, CardId::C];

    pub fn label(self) -> &'static str {
        match self {
            CardId::A => "Card A",
            CardId::B => "Card B",
            CardId::C => "Card C",
        }
    }
}

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One value of type `T` per card.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CardSet<T> {
    pub a: T,
    pub b: T,
    pub c: T,
}

impl<T> CardSet<T> {
    pub fn new(a: T, b: T, c: T) -> Self {
        Self { a, b, c }
    }

    /// Same value for every card.
    pub fn splat(value: T) -> Self
    where
        T: Clone,
    {
        Self {
            a: value.clone(),
            b: value.clone(),
            c: value,
        }
    }

    pub fn get(&self, card: CardId) -> &T {
        match card {
            CardId::A => &self.a,
            CardId::B => &self.b,
            CardId::C => &self.c,
        }
    }

    pub fn get_mut(&mut self, card: CardId) -> &mut T {
        match card {
            CardId::A => &mut self.a,
            CardId::B => &mut self.b,
            CardId::C => &mut self.c,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (CardId, &T)> {
        CardId::ALL.iter().map(move |&card| (card, self.get(card)))
    }

    pub fn map<U>(&self, mut f: impl FnMut(CardId, &T) -> U) -> CardSet<U> {
        CardSet {
            a: f(CardId::A, &self.a),
            b: f(CardId::B, &self.b),
            c: f(CardId::C, &self.c),
        }
    }
}

impl CardSet<f64> {
    /// Sum across all three cards.
    pub fn total(&self) -> f64 {
        self.a + self.b + self.c
    }
}

impl<T> Index<CardId> for CardSet<T> {
    type Output = T;

    fn index(&self, card: CardId) -> &T {
        self.get(card)
    }
}

impl<T> IndexMut<CardId> for CardSet<T> {
    fn index_mut(&mut self, card: CardId) -> &mut T {
        self.get_mut(card)
    }
}
