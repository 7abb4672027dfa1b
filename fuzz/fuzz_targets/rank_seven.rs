#![no_main]
#[macro_use]
extern crate libfuzzer_sys;
extern crate poker_equity;

use poker_equity::core::{Card, CardIter, Hand, evaluate, evaluate5};
use std::str;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = str::from_utf8(data) {
        if let Ok(h) = Hand::new_from_str(s) {
            if h.count() == 7 {
                let cards: Vec<Card> = h.cards();
                let r_seven = evaluate(&cards).unwrap();
                let r_five_max = CardIter::<5>::new(&cards)
                    .map(|five| evaluate5(&five).unwrap())
                    .max()
                    .unwrap();
                assert_eq!(r_five_max, r_seven);
            }
        }
    }
});
