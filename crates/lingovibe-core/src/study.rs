use lingovibe_types::{Flashcard, SavedWord};

/// Cyclic flashcard traversal over a snapshot of the notebook
#[derive(Debug, Clone)]
pub struct StudySequencer {
    cards: Vec<SavedWord>,
    current_index: usize,
    revealed: bool,
}

impl StudySequencer {
    /// `None` when there is nothing to study
    pub fn new(snapshot: Vec<SavedWord>) -> Option<Self> {
        if snapshot.is_empty() {
            return None;
        }

        Some(Self {
            cards: snapshot,
            current_index: 0,
            revealed: false,
        })
    }

    /// Hide the back face and move to the next card, wrapping at the end
    pub fn advance(&mut self) {
        self.revealed = false;
        self.current_index = (self.current_index + 1) % self.cards.len();
    }

    pub fn reveal(&mut self) {
        self.revealed = true;
    }

    pub fn unreveal(&mut self) {
        self.revealed = false;
    }

    pub fn flip(&mut self) {
        self.revealed = !self.revealed;
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn current(&self) -> &SavedWord {
        &self.cards[self.current_index]
    }

    /// 1-based position and deck size
    pub fn position(&self) -> (usize, usize) {
        (self.current_index + 1, self.cards.len())
    }

    /// Re-snapshot after the notebook changed underneath an open session.
    ///
    /// Follows the card on screen to its new position. If that card is gone,
    /// the index is clamped to the new size and the card is hidden. Returns
    /// `false` when the notebook is now empty and study mode should close.
    pub fn resync(&mut self, live: &[SavedWord]) -> bool {
        if live.is_empty() {
            return false;
        }

        let shown = self.current().id.clone();
        self.cards = live.to_vec();

        match self.cards.iter().position(|w| w.id == shown) {
            Some(index) => self.current_index = index,
            None => {
                self.current_index = self.current_index.min(self.cards.len() - 1);
                self.revealed = false;
            }
        }
        true
    }

    pub fn card(&self) -> Flashcard {
        let word = self.current();
        let (position, total) = self.position();

        Flashcard {
            position,
            total,
            term: word.entry.term.clone(),
            image_url: word.entry.image_url.clone(),
            revealed: self.revealed,
            definition: word.entry.definition.clone(),
            example: word.entry.examples.first().cloned(),
        }
    }
}
