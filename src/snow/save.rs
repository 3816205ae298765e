//! Snow Clicker save/load.
//!
//! The record is a flat JSON object under a single storage key:
//!
//! ```json
//! {"score":120,"autoSnow":2,"multiplier":4,"autoSnowCost":23,"multiplierCost":125}
//! ```
//!
//! There is no version field. Loading treats a missing, `null`, zero, or
//! non-finite field as absent and keeps that field's default. This also means
//! a stored multiplier of `0` loads as `1`.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};

use crate::error::SaveError;
use crate::storage::KeyValueStore;

use super::state::{
    SnowState, DEFAULT_AUTO_SNOW, DEFAULT_AUTO_SNOW_COST, DEFAULT_MULTIPLIER,
    DEFAULT_MULTIPLIER_COST, DEFAULT_SNOWFLAKES,
};

/// Outgoing record. Also the host export payload.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SaveRecord {
    score: u64,
    auto_snow: u64,
    multiplier: u64,
    auto_snow_cost: u64,
    multiplier_cost: u64,
}

/// Incoming record. Numbers stay as `serde_json::Number` so integers keep
/// every bit, while fractional values written by other clients still parse.
#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
struct LoadedRecord {
    score: Option<Number>,
    auto_snow: Option<Number>,
    multiplier: Option<Number>,
    auto_snow_cost: Option<Number>,
    multiplier_cost: Option<Number>,
}

fn extract_save(state: &SnowState) -> SaveRecord {
    SaveRecord {
        score: state.snowflakes,
        auto_snow: state.auto_snow,
        multiplier: state.multiplier,
        auto_snow_cost: state.auto_snow_cost,
        multiplier_cost: state.multiplier_cost,
    }
}

/// A loaded number counts as present only if it rounds to at least 1.
fn present_or(value: Option<&Number>, default: u64) -> u64 {
    let Some(n) = value else {
        return default;
    };
    if let Some(exact) = n.as_u64() {
        return if exact >= 1 { exact } else { default };
    }
    match n.as_f64() {
        // `as` saturates for values beyond u64::MAX
        Some(v) if v.is_finite() && v.round() >= 1.0 => v.round() as u64,
        _ => default,
    }
}

fn apply_save(state: &mut SnowState, record: &LoadedRecord) {
    state.snowflakes = present_or(record.score.as_ref(), DEFAULT_SNOWFLAKES);
    state.auto_snow = present_or(record.auto_snow.as_ref(), DEFAULT_AUTO_SNOW);
    state.multiplier = present_or(record.multiplier.as_ref(), DEFAULT_MULTIPLIER);
    state.auto_snow_cost = present_or(record.auto_snow_cost.as_ref(), DEFAULT_AUTO_SNOW_COST);
    state.multiplier_cost = present_or(record.multiplier_cost.as_ref(), DEFAULT_MULTIPLIER_COST);
}

/// Serialize the five persisted fields.
pub fn to_json(state: &SnowState) -> Result<String, serde_json::Error> {
    serde_json::to_string(&extract_save(state))
}

/// Write the state under `key`, overwriting any previous value.
pub fn save_game(
    state: &SnowState,
    store: &mut dyn KeyValueStore,
    key: &str,
) -> Result<(), SaveError> {
    let json = to_json(state).map_err(SaveError::Encode)?;
    store.set(key, &json)?;
    log::trace!("saved {json}");
    Ok(())
}

/// Overlay the stored record onto `state`.
///
/// Returns `Ok(false)` when nothing is stored (state untouched) and
/// `Err(SaveError::Corrupt)` when the stored text is not a JSON object of
/// numbers (state untouched). Arrays are rejected even though a derived
/// struct would accept them positionally.
pub fn load_game(
    state: &mut SnowState,
    store: &dyn KeyValueStore,
    key: &str,
) -> Result<bool, SaveError> {
    let Some(json) = store.get(key)? else {
        return Ok(false);
    };
    let object: Map<String, Value> = serde_json::from_str(&json).map_err(SaveError::Corrupt)?;
    let record: LoadedRecord =
        serde_json::from_value(Value::Object(object)).map_err(SaveError::Corrupt)?;
    apply_save(state, &record);
    Ok(true)
}
