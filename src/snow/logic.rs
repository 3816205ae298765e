//! Snow Clicker game rules: pure functions over `SnowState`.
//!
//! None of these touch storage, particles, or the screen; the controller in
//! `snow/mod.rs` sequences persistence and presentation around them.

use super::state::SnowState;

/// `round(cost * 1.5)` for the next auto-snow upgrade.
pub fn next_auto_snow_cost(cost: u64) -> u64 {
    scale_rounded(cost, 3)
}

/// `round(cost * 2.5)` for the next multiplier upgrade.
pub fn next_multiplier_cost(cost: u64) -> u64 {
    scale_rounded(cost, 5)
}

/// `round(cost * halves / 2)`, rounding .5 up like `Math.round`, clamped to `u64::MAX`.
fn scale_rounded(cost: u64, halves: u128) -> u64 {
    let scaled = (cost as u128 * halves + 1) / 2;
    scaled.min(u64::MAX as u128) as u64
}

/// Manual click. Returns the snowflakes gained.
pub fn click(state: &mut SnowState) -> u64 {
    let gain = state.per_click();
    state.snowflakes = state.snowflakes.saturating_add(gain);
    gain
}

/// One passive income tick. `None` when no auto-snow is owned, in which case
/// the state is untouched.
pub fn passive_income(state: &mut SnowState) -> Option<u64> {
    if state.auto_snow == 0 {
        return None;
    }
    let gain = state.per_second();
    state.snowflakes = state.snowflakes.saturating_add(gain);
    Some(gain)
}

/// Try to buy one auto-snow level. Returns true if successful.
pub fn buy_auto_snow(state: &mut SnowState) -> bool {
    if !state.can_afford_auto_snow() {
        return false;
    }
    state.snowflakes -= state.auto_snow_cost;
    state.auto_snow = state.auto_snow.saturating_add(1);
    state.auto_snow_cost = next_auto_snow_cost(state.auto_snow_cost);
    true
}

/// Try to double the multiplier. Returns true if successful.
pub fn buy_multiplier(state: &mut SnowState) -> bool {
    if !state.can_afford_multiplier() {
        return false;
    }
    state.snowflakes -= state.multiplier_cost;
    state.multiplier = state.multiplier.saturating_mul(2);
    state.multiplier_cost = next_multiplier_cost(state.multiplier_cost);
    true
}

/// Format a count with thousands separators: 1234567 → "1,234,567".
pub fn format_number(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn any_state() -> impl Strategy<Value = SnowState> {
        (
            0u64..1_000_000_000,
            0u64..10_000,
            (0u32..30).prop_map(|p| 1u64 << p),
            1u64..1_000_000_000,
            1u64..1_000_000_000,
        )
            .prop_map(|(snowflakes, auto_snow, multiplier, auto_snow_cost, multiplier_cost)| {
                SnowState {
                    snowflakes,
                    auto_snow,
                    multiplier,
                    auto_snow_cost,
                    multiplier_cost,
                }
            })
    }

    #[test]
    fn click_adds_multiplier() {
        let mut s = SnowState::new();
        assert_eq!(click(&mut s), 1);
        s.multiplier = 8;
        assert_eq!(click(&mut s), 8);
        assert_eq!(s.snowflakes, 9);
    }

    #[test]
    fn passive_income_without_auto_snow_is_noop() {
        let mut s = SnowState::new();
        s.snowflakes = 42;
        let before = s.clone();
        assert_eq!(passive_income(&mut s), None);
        assert_eq!(s, before);
    }

    #[test]
    fn passive_income_scales_with_multiplier() {
        let mut s = SnowState::new();
        s.auto_snow = 3;
        s.multiplier = 4;
        assert_eq!(passive_income(&mut s), Some(12));
        assert_eq!(s.snowflakes, 12);
    }

    #[test]
    fn buy_auto_snow_success() {
        let mut s = SnowState::new();
        s.snowflakes = 25;
        assert!(buy_auto_snow(&mut s));
        assert_eq!(s.snowflakes, 15);
        assert_eq!(s.auto_snow, 1);
        assert_eq!(s.auto_snow_cost, 15);
    }

    #[test]
    fn auto_snow_cost_sequence_rounds_half_up() {
        // 10 → 15 → 22.5 → 23 → 34.5 → 35 → 52.5 → 53
        let mut cost = 10;
        let mut seen = Vec::new();
        for _ in 0..5 {
            cost = next_auto_snow_cost(cost);
            seen.push(cost);
        }
        assert_eq!(seen, vec![15, 23, 35, 53, 80]);
    }

    #[test]
    fn multiplier_cost_sequence_rounds_half_up() {
        // 50 → 125 → 312.5 → 313 → 782.5 → 783
        let mut cost = 50;
        let mut seen = Vec::new();
        for _ in 0..4 {
            cost = next_multiplier_cost(cost);
            seen.push(cost);
        }
        assert_eq!(seen, vec![125, 313, 783, 1958]);
    }

    #[test]
    fn buy_multiplier_success() {
        let mut s = SnowState::new();
        s.snowflakes = 60;
        assert!(buy_multiplier(&mut s));
        assert_eq!(s.snowflakes, 10);
        assert_eq!(s.multiplier, 2);
        assert_eq!(s.multiplier_cost, 125);
    }

    #[test]
    fn buy_with_exact_balance_leaves_zero() {
        let mut s = SnowState::new();
        s.snowflakes = 50;
        assert!(buy_multiplier(&mut s));
        assert_eq!(s.snowflakes, 0);
    }

    #[test]
    fn buy_multiplier_insufficient_is_noop() {
        let mut s = SnowState::new();
        s.snowflakes = 49;
        let before = s.clone();
        assert!(!buy_multiplier(&mut s));
        assert_eq!(s, before);
    }

    #[test]
    fn cost_growth_clamps_at_max() {
        assert_eq!(next_auto_snow_cost(u64::MAX), u64::MAX);
        assert_eq!(next_multiplier_cost(u64::MAX / 2), u64::MAX);
    }

    #[test]
    fn clicks_saturate_instead_of_overflowing() {
        let mut s = SnowState::new();
        s.snowflakes = u64::MAX - 1;
        s.multiplier = 4;
        click(&mut s);
        assert_eq!(s.snowflakes, u64::MAX);
    }

    #[test]
    fn fresh_player_scenario() {
        let mut s = SnowState::new();
        for _ in 0..10 {
            click(&mut s);
        }
        assert_eq!(s.snowflakes, 10);

        assert!(buy_auto_snow(&mut s));
        assert_eq!(s.snowflakes, 0);
        assert_eq!(s.auto_snow, 1);
        assert_eq!(s.auto_snow_cost, 15);

        assert_eq!(passive_income(&mut s), Some(1));
        assert_eq!(s.snowflakes, 1);
    }

    #[test]
    fn format_number_groups_thousands() {
        assert_eq!(format_number(0), "0");
        assert_eq!(format_number(999), "999");
        assert_eq!(format_number(1000), "1,000");
        assert_eq!(format_number(1234567), "1,234,567");
        assert_eq!(format_number(100000), "100,000");
    }

    proptest! {
        #[test]
        fn n_clicks_add_n_times_multiplier(mut s in any_state(), n in 0u64..500) {
            let start = s.snowflakes;
            let m = s.multiplier;
            for _ in 0..n {
                click(&mut s);
            }
            prop_assert_eq!(s.snowflakes, start + n * m);
        }

        #[test]
        fn unaffordable_auto_snow_changes_nothing(mut s in any_state()) {
            prop_assume!(s.snowflakes < s.auto_snow_cost);
            let before = s.clone();
            prop_assert!(!buy_auto_snow(&mut s));
            prop_assert_eq!(s, before);
        }

        #[test]
        fn auto_snow_cost_grows_by_rounded_half(mut s in any_state()) {
            prop_assume!(s.snowflakes >= s.auto_snow_cost);
            let old = s.auto_snow_cost;
            prop_assert!(buy_auto_snow(&mut s));
            prop_assert_eq!(s.auto_snow_cost, (old as f64 * 1.5).round() as u64);
            prop_assert!(s.auto_snow_cost >= old);
        }

        #[test]
        fn multiplier_doubles_exactly(mut s in any_state()) {
            prop_assume!(s.snowflakes >= s.multiplier_cost);
            let old = s.multiplier;
            let old_cost = s.multiplier_cost;
            prop_assert!(buy_multiplier(&mut s));
            prop_assert_eq!(s.multiplier, old * 2);
            prop_assert!(s.multiplier_cost >= old_cost);
        }

        #[test]
        fn purchases_never_go_negative(mut s in any_state(), buys in proptest::collection::vec(any::<bool>(), 0..20)) {
            for pick_auto in buys {
                let before = s.snowflakes;
                let ok = if pick_auto { buy_auto_snow(&mut s) } else { buy_multiplier(&mut s) };
                prop_assert!(s.snowflakes <= before);
                if !ok {
                    prop_assert_eq!(s.snowflakes, before);
                }
                prop_assert!(s.multiplier >= 1);
            }
        }
    }
}
