use crate::card::Card;
use std::fmt;

/// Stable handle for a card inside one holder. Never reused, so a handle
/// kept past a deletion simply stops resolving.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CardId(u64);

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "card#{}", self.0)
    }
}

/// The container cards are appended to, kept in insertion order.
#[derive(Debug, Default)]
pub struct TodoHolder {
    pub title: String,
    cards: Vec<(CardId, Card)>,
    next_id: u64,
}

impl TodoHolder {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            cards: Vec::new(),
            next_id: 1,
        }
    }

    pub fn append(&mut self, card: Card) -> CardId {
        let id = CardId(self.next_id);
        self.next_id += 1;
        self.cards.push((id, card));
        id
    }

    /// Detaches a card. Removing a card that is already gone returns `None`.
    pub fn remove(&mut self, id: CardId) -> Option<Card> {
        let index = self.position(id)?;
        Some(self.cards.remove(index).1)
    }

    pub fn get(&self, id: CardId) -> Option<&Card> {
        self.cards.iter().find(|(cid, _)| *cid == id).map(|(_, card)| card)
    }

    pub fn get_mut(&mut self, id: CardId) -> Option<&mut Card> {
        self.cards
            .iter_mut()
            .find(|(cid, _)| *cid == id)
            .map(|(_, card)| card)
    }

    pub fn position(&self, id: CardId) -> Option<usize> {
        self.cards.iter().position(|(cid, _)| *cid == id)
    }

    pub fn id_at(&self, index: usize) -> Option<CardId> {
        self.cards.get(index).map(|(id, _)| *id)
    }

    pub fn iter(&self) -> impl Iterator<Item = (CardId, &Card)> {
        self.cards.iter().map(|(id, card)| (*id, card))
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
