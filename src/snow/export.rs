//! One-shot export of the save record to the embedding host.

use crate::error::ExportError;
use crate::host::HostBridge;

use super::save;
use super::state::SnowState;

/// What happened when the player pressed "Save & send".
#[derive(Debug, PartialEq)]
pub enum ExportOutcome {
    /// Payload handed to the host.
    Sent,
    /// Not running inside a host that accepts data.
    Unavailable,
}

/// Serialize the state and pass it to the host's `sendData`. Nothing is
/// awaited or read back.
pub fn export_state(
    state: &SnowState,
    host: Option<&dyn HostBridge>,
) -> Result<ExportOutcome, ExportError> {
    let Some(host) = host else {
        return Ok(ExportOutcome::Unavailable);
    };
    let payload = save::to_json(state).map_err(ExportError::Encode)?;
    host.send_data(&payload)?;
    Ok(ExportOutcome::Sent)
}
