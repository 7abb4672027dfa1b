use crate::core::card::Card;

/// Iterate over every `N` card combination of a slice of cards.
///
/// Combinations come out in lexicographic order of their positions in the
/// slice. Nothing is allocated per combination.
///
/// ```
/// use poker_equity::core::{Card, CardIter};
///
/// let cards: Vec<Card> = (0..7).map(Card::from).collect();
/// assert_eq!(21, CardIter::<5>::new(&cards).count());
/// ```
#[derive(Debug)]
pub struct CardIter<'a, const N: usize> {
    // All the possible cards that can be picked
    possible_cards: &'a [Card],
    // Set of current offsets being used to create card sets.
    idx: [usize; N],
    // Has the first combination been handed out yet.
    started: bool,
}

impl<'a, const N: usize> CardIter<'a, N> {
    pub fn new(possible_cards: &'a [Card]) -> Self {
        Self {
            possible_cards,
            idx: std::array::from_fn(|i| i),
            started: false,
        }
    }

    fn current(&self) -> [Card; N] {
        std::array::from_fn(|i| self.possible_cards[self.idx[i]])
    }
}

impl<const N: usize> Iterator for CardIter<'_, N> {
    type Item = [Card; N];

    fn next(&mut self) -> Option<[Card; N]> {
        let len = self.possible_cards.len();
        if N == 0 || N > len {
            return None;
        }

        if !self.started {
            self.started = true;
            return Some(self.current());
        }

        // Find the right most position that can still move forward.
        let mut level = N;
        while level > 0 {
            level -= 1;
            if self.idx[level] < len - N + level {
                self.idx[level] += 1;
                // Everything after restarts just past the moved position.
                for after in level + 1..N {
                    self.idx[after] = self.idx[after - 1] + 1;
                }
                return Some(self.current());
            }
        }

        // Every position is at its last spot, so this stays exhausted.
        None
    }
}
