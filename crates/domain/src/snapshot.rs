//! The status snapshot served by the furnace controller.

use serde::{Deserialize, Serialize};

/// One full status reading from the furnace controller.
///
/// A snapshot is decoded from a single JSON response body, projected onto
/// the display, and discarded — there is no persistence and no diffing
/// against the previous snapshot.
///
/// Every field is required: a payload missing any of them fails to decode.
/// Unknown payload keys are ignored, since the controller ships extra
/// diagnostic keys the monitor never reads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusSnapshot {
    /// Flue gas temperature, °C.
    pub flue_temperature: f64,
    /// Control-board CPU temperature, °C.
    pub pi_cpu_temperature: f64,
    /// Overfire condition flag.
    pub overfire: bool,
    /// Forced-heat mode engaged.
    pub force_heat_active: bool,
    /// Overfire-triggered shutoff relay engaged.
    pub overfire_force_shutoff_active: bool,
    /// Forced-heat-on relay engaged.
    pub force_heat_on_active: bool,
    /// Server-supplied timestamp label, displayed verbatim.
    pub last_polled: String,
}
