//! Pacing simulator for Snow Clicker.
//! Run with: cargo test simulate_ -- --nocapture

use super::logic;
use super::state::SnowState;

/// Second at which each upgrade was first bought.
#[derive(Debug, Default)]
struct Milestones {
    first_auto_snow: Option<u32>,
    first_multiplier: Option<u32>,
}

/// Play `seconds` seconds at `clicks_per_sec`, buying greedily after every
/// income tick (multiplier first, then auto-snow).
fn play(seconds: u32, clicks_per_sec: u32) -> (SnowState, Milestones) {
    let mut state = SnowState::new();
    let mut milestones = Milestones::default();

    for second in 1..=seconds {
        for _ in 0..clicks_per_sec {
            logic::click(&mut state);
        }
        logic::passive_income(&mut state);

        loop {
            if logic::buy_multiplier(&mut state) {
                milestones.first_multiplier.get_or_insert(second);
            } else if logic::buy_auto_snow(&mut state) {
                milestones.first_auto_snow.get_or_insert(second);
            } else {
                break;
            }
        }
    }
    (state, milestones)
}

#[test]
fn simulate_first_minute_at_five_clicks() {
    let (state, milestones) = play(60, 5);
    println!("after 60s: {state:?} {milestones:?}");

    assert_eq!(milestones.first_auto_snow, Some(2));
    assert_eq!(milestones.first_multiplier, Some(18));
    assert_eq!(state.auto_snow, 11);
    assert_eq!(state.multiplier, 8);
}

#[test]
fn simulate_five_minutes_stays_consistent() {
    let (state, _) = play(300, 5);
    println!("after 300s: {state:?}");

    assert!(state.multiplier.is_power_of_two());
    assert!(state.snowflakes < state.auto_snow_cost && state.snowflakes < state.multiplier_cost);
    assert!(state.auto_snow >= 20);
}

#[test]
fn simulate_idle_player_earns_nothing() {
    let (state, milestones) = play(600, 0);
    assert_eq!(state, SnowState::new());
    assert!(milestones.first_auto_snow.is_none());
}
