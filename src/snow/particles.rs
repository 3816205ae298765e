//! Falling snowflake particles. Purely cosmetic; knows nothing about `SnowState`.

/// Upper bound on live flakes. The oldest is dropped first.
pub const MAX_FLAKES: usize = 64;

const MIN_SIZE: f32 = 15.0;
const MAX_SIZE: f32 = 35.0;
const MIN_OPACITY: f32 = 0.7;
const MAX_OPACITY: f32 = 1.0;
const MIN_FALL_SECS: f32 = 3.0;
const MAX_FALL_SECS: f32 = 7.0;

/// One falling snowflake.
#[derive(Clone, Debug)]
pub struct Snowflake {
    /// Horizontal position as a fraction of the viewport width, `0.0..1.0`.
    pub x: f32,
    /// Size in the 15–35 range; picks the glyph.
    pub size: f32,
    /// Opacity in the 0.7–1.0 range; picks the brightness.
    pub opacity: f32,
    /// Remaining lifetime in ticks.
    pub life: u32,
    /// Total fall duration in ticks.
    pub max_life: u32,
}

impl Snowflake {
    /// Fall progress, 0.0 at the top to 1.0 at the bottom.
    pub fn progress(&self) -> f32 {
        if self.max_life == 0 {
            return 1.0;
        }
        1.0 - self.life as f32 / self.max_life as f32
    }

    pub fn glyph(&self) -> char {
        if self.size >= 28.0 {
            '❄'
        } else if self.size >= 21.0 {
            '❅'
        } else {
            '*'
        }
    }
}

/// Live flakes plus flakes waiting for their stagger delay.
pub struct SnowField {
    pub flakes: Vec<Snowflake>,
    /// Remaining delay in ticks for each scheduled flake.
    pending: Vec<u32>,
    ticks_per_sec: u32,
    rng_state: u32,
}

impl SnowField {
    pub fn new(ticks_per_sec: u32, seed: u32) -> Self {
        Self {
            flakes: Vec::new(),
            pending: Vec::new(),
            ticks_per_sec: ticks_per_sec.max(1),
            // xorshift must never be seeded with zero
            rng_state: if seed == 0 { 0x9E37_79B9 } else { seed },
        }
    }

    /// Spawn one flake now.
    pub fn spawn(&mut self) {
        let x = self.uniform(0.0, 1.0).min(0.999);
        let size = self.uniform(MIN_SIZE, MAX_SIZE);
        let opacity = self.uniform(MIN_OPACITY, MAX_OPACITY);
        let secs = self.uniform(MIN_FALL_SECS, MAX_FALL_SECS);
        let life = ((secs * self.ticks_per_sec as f32).round() as u32).max(1);

        self.flakes.push(Snowflake {
            x,
            size,
            opacity,
            life,
            max_life: life,
        });
        if self.flakes.len() > MAX_FLAKES {
            self.flakes.remove(0);
        }
    }

    /// Spawn a flake after `delay_ticks` ticks (immediately if zero).
    pub fn schedule(&mut self, delay_ticks: u32) {
        if delay_ticks == 0 {
            self.spawn();
        } else {
            self.pending.push(delay_ticks);
        }
    }

    /// Spawn 1–3 flakes, each `stagger_ticks` after the previous one.
    /// Returns how many were requested.
    pub fn spawn_burst(&mut self, stagger_ticks: u32) -> u32 {
        let count = 1 + self.next_random() % 3;
        for i in 0..count {
            self.schedule(i * stagger_ticks);
        }
        count
    }

    /// Age live flakes, drop finished ones, release due scheduled flakes.
    pub fn tick(&mut self, delta_ticks: u32) {
        if delta_ticks == 0 {
            return;
        }
        for flake in &mut self.flakes {
            flake.life = flake.life.saturating_sub(delta_ticks);
        }
        self.flakes.retain(|f| f.life > 0);

        for delay in &mut self.pending {
            *delay = delay.saturating_sub(delta_ticks);
        }
        let due = self.pending.iter().filter(|&&d| d == 0).count();
        self.pending.retain(|&d| d > 0);
        for _ in 0..due {
            self.spawn();
        }
    }

    #[cfg(test)]
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    fn next_random(&mut self) -> u32 {
        let mut x = self.rng_state;
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        self.rng_state = x;
        x
    }

    /// Uniform sample in `[lo, hi)`.
    fn uniform(&mut self, lo: f32, hi: f32) -> f32 {
        let unit = (self.next_random() >> 8) as f32 / (1u32 << 24) as f32;
        lo + unit * (hi - lo)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spawned_flake_is_within_ranges() {
        let mut field = SnowField::new(10, 7);
        for _ in 0..MAX_FLAKES {
            field.spawn();
        }
        for f in &field.flakes {
            assert!((0.0..1.0).contains(&f.x), "x={}", f.x);
            assert!((MIN_SIZE..=MAX_SIZE).contains(&f.size), "size={}", f.size);
            assert!((MIN_OPACITY..=MAX_OPACITY).contains(&f.opacity), "opacity={}", f.opacity);
            assert!((30..=70).contains(&f.max_life), "max_life={}", f.max_life);
            assert_eq!(f.life, f.max_life);
        }
    }

    #[test]
    fn flake_removes_itself_after_fall_duration() {
        let mut field = SnowField::new(10, 1);
        field.spawn();
        let life = field.flakes[0].max_life;
        field.tick(life - 1);
        assert_eq!(field.flakes.len(), 1);
        field.tick(1);
        assert!(field.flakes.is_empty());
    }

    #[test]
    fn burst_is_one_to_three_and_staggered() {
        for seed in 1..200 {
            let mut field = SnowField::new(10, seed);
            let count = field.spawn_burst(1);
            assert!((1..=3).contains(&count));
            // first flake is immediate, the rest wait one tick apart
            assert_eq!(field.flakes.len(), 1);
            assert_eq!(field.pending_count() as u32, count - 1);
            field.tick(1);
            assert_eq!(field.flakes.len() as u32, count.min(2));
            field.tick(1);
            assert_eq!(field.flakes.len() as u32, count);
            assert_eq!(field.pending_count(), 0);
        }
    }

    #[test]
    fn burst_counts_cover_all_values() {
        let mut field = SnowField::new(10, 12345);
        let mut seen = [false; 4];
        for _ in 0..100 {
            seen[field.spawn_burst(0) as usize] = true;
        }
        assert!(!seen[0] && seen[1] && seen[2] && seen[3]);
    }

    #[test]
    fn large_tick_releases_all_pending() {
        let mut field = SnowField::new(10, 3);
        field.schedule(2);
        field.schedule(5);
        field.tick(10);
        assert_eq!(field.pending_count(), 0);
        assert_eq!(field.flakes.len(), 2);
    }

    #[test]
    fn flake_count_is_capped() {
        let mut field = SnowField::new(10, 9);
        for _ in 0..MAX_FLAKES + 10 {
            field.spawn();
        }
        assert_eq!(field.flakes.len(), MAX_FLAKES);
    }

    #[test]
    fn zero_seed_still_produces_randomness() {
        let mut field = SnowField::new(10, 0);
        field.spawn();
        field.spawn();
        assert_ne!(field.flakes[0].x, field.flakes[1].x);
    }

    #[test]
    fn progress_and_glyph() {
        let mut flake = Snowflake {
            x: 0.5,
            size: 30.0,
            opacity: 1.0,
            life: 40,
            max_life: 40,
        };
        assert_eq!(flake.progress(), 0.0);
        flake.life = 10;
        assert!((flake.progress() - 0.75).abs() < 1e-6);
        assert_eq!(flake.glyph(), '❄');
        flake.size = 22.0;
        assert_eq!(flake.glyph(), '❅');
        flake.size = 15.0;
        assert_eq!(flake.glyph(), '*');
    }
}
