//! Lookup tables behind the hand evaluator.
//!
//! Five card hands fall into 7,462 equivalence classes. Every class is
//! identified by the multiset of its values plus whether it is a flush, and
//! a multiset of values is identified by the product of the values' primes.
//! So two maps from prime product to rank (one for flushes, one for
//! everything else) cover every hand.
//!
//! Nothing is read from disk. The tables are generated on first use by
//! enumerating every multiset of five values, classifying it, and sorting
//! all classes with one comparator. After that they are never mutated.

use std::collections::HashMap;
use std::sync::OnceLock;

use tracing::{Level, event};

use super::card::PRIMES;
use super::rank::{HandCategory, HandRank, STRAIGHTS};
use super::Value;

/// Number of distinct five card hand classes.
pub const NUM_CLASSES: usize = 7_462;

const RANK_MASKS: usize = 1 << 13;

static TABLES: OnceLock<LookupTables> = OnceLock::new();

/// Shared read only tables. Built the first time they are asked for.
pub(crate) fn tables() -> &'static LookupTables {
    TABLES.get_or_init(LookupTables::build)
}

pub(crate) struct LookupTables {
    /// Keyed by 13 bit value mask. Zero when the mask isn't a straight,
    /// otherwise the top card's value + 1.
    straights: [u8; RANK_MASKS],
    /// Prime product of five different values, all one suit.
    flushes: HashMap<u32, HandRank>,
    /// Prime product of any five values that are not all one suit.
    unsuited: HashMap<u32, HandRank>,
}

/// What a class is sorted by. Category first, then the values that break
/// ties inside the category, most significant first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct ClassKey {
    category: HandCategory,
    kickers: [u8; 5],
}

struct Class {
    key: ClassKey,
    product: u32,
    flush: bool,
}

impl LookupTables {
    fn build() -> Self {
        let mut straights = [0u8; RANK_MASKS];
        for (i, mask) in STRAIGHTS.iter().enumerate() {
            // The wheel's top card is the five.
            straights[usize::from(*mask)] = (i + 3 + 1) as u8;
        }

        let mut classes = Vec::with_capacity(NUM_CLASSES);
        let mut values = [0u8; 5];
        enumerate_multisets(&mut values, 0, 0, &mut |multiset| {
            let counts = count_values(multiset);
            let product = multiset.iter().map(|v| PRIMES[usize::from(*v)]).product();
            let mask = counts
                .iter()
                .enumerate()
                .filter(|(_, c)| **c > 0)
                .fold(0u16, |m, (v, _)| m | 1 << v);
            let straight_high = straights[usize::from(mask)].checked_sub(1);

            let key = classify(&counts, straight_high);
            classes.push(Class {
                key,
                product,
                flush: false,
            });

            // Five different values can also come in one suit.
            if mask.count_ones() == 5 {
                let category = if straight_high.is_some() {
                    HandCategory::StraightFlush
                } else {
                    HandCategory::Flush
                };
                classes.push(Class {
                    key: ClassKey { category, ..key },
                    product,
                    flush: true,
                });
            }
        });

        classes.sort_by_key(|c| c.key);

        let mut flushes = HashMap::with_capacity(1_287);
        let mut unsuited = HashMap::with_capacity(6_175);
        for (idx, class) in classes.iter().enumerate() {
            let rank = HandRank::new(class.key.category, idx as u16 + 1);
            if class.flush {
                flushes.insert(class.product, rank);
            } else {
                unsuited.insert(class.product, rank);
            }
        }

        event!(
            Level::DEBUG,
            classes = classes.len(),
            flushes = flushes.len(),
            unsuited = unsuited.len(),
            "Built hand rank lookup tables"
        );

        Self {
            straights,
            flushes,
            unsuited,
        }
    }

    /// The top card of the straight made by exactly these five values.
    pub(crate) fn straight_high(&self, rank_mask: u16) -> Option<Value> {
        self.straights
            .get(usize::from(rank_mask))
            .and_then(|v| v.checked_sub(1))
            .map(Value::from_u8)
    }

    /// Look up a hand by its prime product and whether it is one suit.
    pub(crate) fn lookup(&self, product: u32, flush: bool) -> Option<HandRank> {
        if flush {
            self.flushes.get(&product).copied()
        } else {
            self.unsuited.get(&product).copied()
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.flushes.len() + self.unsuited.len()
    }

    /// Every rank in the tables, in no particular order.
    pub(crate) fn ranks(&self) -> impl Iterator<Item = &HandRank> {
        self.flushes.values().chain(self.unsuited.values())
    }
}

/// Call `f` with every non decreasing sequence of five values where no
/// value repeats five times.
fn enumerate_multisets(values: &mut [u8; 5], depth: usize, min: u8, f: &mut impl FnMut(&[u8; 5])) {
    if depth == 5 {
        if values[0] != values[4] {
            f(values);
        }
        return;
    }
    for v in min..13 {
        values[depth] = v;
        enumerate_multisets(values, depth + 1, v, f);
    }
}

fn count_values(values: &[u8; 5]) -> [u8; 13] {
    let mut counts = [0u8; 13];
    for v in values {
        counts[usize::from(*v)] += 1;
    }
    counts
}

/// Classify a hand that isn't a flush from how many of each value it has.
fn classify(counts: &[u8; 13], straight_high: Option<u8>) -> ClassKey {
    // Values ordered by how many times they appear, then by value.
    let mut groups: Vec<(u8, u8)> = counts
        .iter()
        .enumerate()
        .filter(|(_, c)| **c > 0)
        .map(|(v, c)| (*c, v as u8))
        .collect();
    groups.sort_unstable_by(|a, b| b.cmp(a));

    let shape: Vec<u8> = groups.iter().map(|(c, _)| *c).collect();
    let mut kickers = [0u8; 5];

    if let Some(high) = straight_high {
        kickers[0] = high;
        return ClassKey {
            category: HandCategory::Straight,
            kickers,
        };
    }

    let category = match shape.as_slice() {
        [4, 1] => HandCategory::FourOfAKind,
        [3, 2] => HandCategory::FullHouse,
        [3, 1, 1] => HandCategory::ThreeOfAKind,
        [2, 2, 1] => HandCategory::TwoPair,
        [2, 1, 1, 1] => HandCategory::OnePair,
        _ => HandCategory::HighCard,
    };
    for (slot, (_, v)) in kickers.iter_mut().zip(groups.iter()) {
        *slot = *v;
    }

    ClassKey { category, kickers }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_count() {
        assert_eq!(NUM_CLASSES, tables().len());
        assert_eq!(1_287, tables().flushes.len());
        assert_eq!(6_175, tables().unsuited.len());
    }

    #[test]
    fn test_strengths_are_dense() {
        let mut strengths: Vec<u16> = tables().ranks().map(|r| r.strength()).collect();
        strengths.sort_unstable();
        let expected: Vec<u16> = (1..=NUM_CLASSES as u16).collect();
        assert_eq!(expected, strengths);
    }

    #[test]
    fn test_category_counts() {
        for category in HandCategory::categories() {
            let found = tables().ranks().filter(|r| r.category() == category).count();
            assert_eq!(category.class_count(), found, "{}", category);
        }
    }

    #[test]
    fn test_straight_table() {
        let t = tables();
        assert_eq!(Some(Value::Five), t.straight_high(STRAIGHTS[0]));
        assert_eq!(Some(Value::Six), t.straight_high(STRAIGHTS[1]));
        assert_eq!(Some(Value::Ace), t.straight_high(STRAIGHTS[9]));

        let straights = (0..RANK_MASKS as u16)
            .filter(|m| t.straight_high(*m).is_some())
            .count();
        assert_eq!(10, straights);

        // Four to the wheel isn't a straight, nor is a six card run.
        assert_eq!(None, t.straight_high(0b1_0000_0000_0111));
        assert_eq!(None, t.straight_high(0b11_1111));
    }

    #[test]
    fn test_multiset_count() {
        let mut n = 0;
        enumerate_multisets(&mut [0; 5], 0, 0, &mut |_| n += 1);
        assert_eq!(6_175, n);
    }

    #[test]
    fn test_classify_kickers() {
        // Kings full of twos.
        let mut counts = [0u8; 13];
        counts[Value::King as usize] = 3;
        counts[Value::Two as usize] = 2;
        let key = classify(&counts, None);
        assert_eq!(HandCategory::FullHouse, key.category);
        assert_eq!([11, 0, 0, 0, 0], key.kickers);

        // Twos full of kings is weaker.
        let mut counts = [0u8; 13];
        counts[Value::King as usize] = 2;
        counts[Value::Two as usize] = 3;
        let weaker = classify(&counts, None);
        assert!(weaker < key);
    }
}
