/// Snow Clicker game state definitions.

pub const DEFAULT_SNOWFLAKES: u64 = 0;
pub const DEFAULT_AUTO_SNOW: u64 = 0;
pub const DEFAULT_MULTIPLIER: u64 = 1;
pub const DEFAULT_AUTO_SNOW_COST: u64 = 10;
pub const DEFAULT_MULTIPLIER_COST: u64 = 50;

/// The persisted game record. Everything else on screen is derived from it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SnowState {
    /// Current snowflake balance.
    pub snowflakes: u64,
    /// Owned auto-snow upgrades; each adds `multiplier` snowflakes per second.
    pub auto_snow: u64,
    /// Factor applied to clicks and passive income. Always >= 1.
    pub multiplier: u64,
    /// Price of the next auto-snow upgrade.
    pub auto_snow_cost: u64,
    /// Price of the next multiplier upgrade.
    pub multiplier_cost: u64,
}

impl SnowState {
    pub fn new() -> Self {
        Self {
            snowflakes: DEFAULT_SNOWFLAKES,
            auto_snow: DEFAULT_AUTO_SNOW,
            multiplier: DEFAULT_MULTIPLIER,
            auto_snow_cost: DEFAULT_AUTO_SNOW_COST,
            multiplier_cost: DEFAULT_MULTIPLIER_COST,
        }
    }

    /// Snowflakes gained per manual click.
    pub fn per_click(&self) -> u64 {
        self.multiplier
    }

    /// Snowflakes gained per passive income tick.
    pub fn per_second(&self) -> u64 {
        self.auto_snow.saturating_mul(self.multiplier)
    }

    pub fn can_afford_auto_snow(&self) -> bool {
        self.snowflakes >= self.auto_snow_cost
    }

    pub fn can_afford_multiplier(&self) -> bool {
        self.snowflakes >= self.multiplier_cost
    }
}

impl Default for SnowState {
    fn default() -> Self {
        Self::new()
    }
}
