use poker_equity::core::{Card, Deck, EquityError, HandCategory, Rankable, evaluate};
use poker_equity::holdem::{
    AdviceThresholds, EquityCache, Recommendation, SimulationConfig, advise, analyze, simulate,
};
use rand::{SeedableRng, rngs::StdRng};

fn cards(s: &str) -> Vec<Card> {
    s.split_whitespace()
        .map(|c| Card::try_from(c).unwrap())
        .collect()
}

fn hero(s: &str) -> [Card; 2] {
    let c = cards(s);
    [c[0], c[1]]
}

#[test_log::test]
fn aces_beat_deuces_on_a_dry_board() {
    let board = cards("Kc 8d 5h");
    let mut rng = StdRng::seed_from_u64(2024);

    let aces = simulate(hero("As Ad"), &board, 1, 3_000, &mut rng).unwrap();
    let deuces = simulate(hero("2s 2d"), &board, 1, 3_000, &mut rng).unwrap();

    assert!(aces.equity() > deuces.equity());
}

#[test_log::test]
fn full_pipeline_from_cards_to_advice() {
    let mut rng = StdRng::seed_from_u64(11);
    let result = SimulationConfig::default()
        .trials(1_000)
        .run_with_rng(hero("7c 2d"), &cards("As Kh Qh Jh"), &mut rng)
        .unwrap();

    // Seven high facing four to a royal is a long shot.
    let advice = advise(result.equity_percent(), 100.0, 50.0).unwrap();
    assert_eq!(Recommendation::Fold, advice.recommendation);
    assert!(advice.equity_percent < advice.pot_odds_percent.unwrap());
}

#[test]
fn seeded_simulation_is_reproducible() {
    let run = || {
        let mut rng = StdRng::seed_from_u64(99);
        simulate(hero("Th 9h"), &cards("8h 7c 2s"), 2, 1, &mut rng).unwrap()
    };
    assert_eq!(run(), run());
}

#[test]
fn deck_without_hero_and_board() {
    let known = cards("Ah Kh 2c 7d Ts 9s 3h");
    assert_eq!(45, Deck::without(&known).unwrap().len());
}

#[test]
fn evaluator_matches_trait() {
    let seven = cards("Ah Kh Qh Jh Th 2c 3d");
    let rank = evaluate(&seven).unwrap();
    assert_eq!(HandCategory::StraightFlush, rank.category());
    assert_eq!(rank, seven.as_slice().rank().unwrap());
    assert_eq!(1, rank.class());
}

#[test]
fn input_errors_are_classified() {
    let mut rng = StdRng::seed_from_u64(1);

    let overlap = simulate(hero("Ah Kh"), &cards("Ah 2c 3d"), 1, 10, &mut rng).unwrap_err();
    assert!(overlap.is_invalid_input());

    let exhausted = simulate(hero("Ah Kh"), &cards("2c 3d 4s"), 23, 10, &mut rng).unwrap_err();
    assert!(exhausted.is_exhausted());
    assert_eq!(
        EquityError::DeckExhausted {
            needed: 48,
            remaining: 47
        },
        exhausted
    );
}

#[test]
fn cache_and_analysis_agree() {
    let config = SimulationConfig::default().trials(400);
    let h = hero("Jd Jc");
    let board = cards("Js 4c 9h");

    let mut cache = EquityCache::new();
    let cached = cache
        .get_or_simulate(&config, h, &board, &mut StdRng::seed_from_u64(8))
        .unwrap();
    let analysis = analyze(
        &config,
        &AdviceThresholds::default(),
        h,
        &board,
        100.0,
        0.0,
        &mut StdRng::seed_from_u64(8),
    )
    .unwrap();

    assert_eq!(cached, analysis.result);
    assert_eq!(
        HandCategory::ThreeOfAKind,
        analysis.current_hand.unwrap().category()
    );
    assert_eq!(Recommendation::BetBig, analysis.advice.recommendation);
}

#[cfg(feature = "serde")]
#[test]
fn analysis_serializes_to_json() {
    let mut rng = StdRng::seed_from_u64(5);
    let analysis = analyze(
        &SimulationConfig::default().trials(500),
        &AdviceThresholds::default(),
        hero("Ah Ad"),
        &[],
        100.0,
        10.0,
        &mut rng,
    )
    .unwrap();

    let json = serde_json::to_string(&analysis).unwrap();
    assert!(json.contains("\"recommendation\""));
    assert!(json.contains("\"raise\""));
}
