//! Projection of a [`StatusSnapshot`] onto display content.
//!
//! Deriving a view from a snapshot is pure and cannot fail: temperatures are
//! formatted to one decimal place with a `°C` suffix, boolean flags map to
//! one of two fixed labels, and the status region carries a color.

use std::fmt;

use crate::snapshot::StatusSnapshot;

/// Identifier of one display region.
///
/// The display contract requires every region to exist on the target
/// surface; resolving an absent region fails the whole apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Region {
    FlueTemperature,
    BoardTemperature,
    Status,
    ForceHeat,
    OverfireShutoff,
    ForceHeatOn,
    LastPolled,
}

impl Region {
    /// All regions, in display order.
    pub const ALL: [Self; 7] = [
        Self::FlueTemperature,
        Self::BoardTemperature,
        Self::Status,
        Self::ForceHeat,
        Self::OverfireShutoff,
        Self::ForceHeatOn,
        Self::LastPolled,
    ];

    /// Stable textual identifier, used in diagnostics.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::FlueTemperature => "flue-temperature",
            Self::BoardTemperature => "board-temperature",
            Self::Status => "status",
            Self::ForceHeat => "force-heat",
            Self::OverfireShutoff => "overfire-shutoff",
            Self::ForceHeatOn => "force-heat-on",
            Self::LastPolled => "last-polled",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Color of the status region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusColor {
    /// Overfire condition — alert red.
    Alert,
    /// Normal operation — green.
    Normal,
}

impl StatusColor {
    /// Hex color code of this status color.
    #[must_use]
    pub const fn hex(self) -> &'static str {
        match self {
            Self::Alert => "#ff4136",
            Self::Normal => "#2ecc40",
        }
    }
}

/// The rendered content of all display regions for one snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusView {
    pub flue_temperature: String,
    pub board_temperature: String,
    pub status: String,
    pub status_color: StatusColor,
    pub force_heat: String,
    pub overfire_shutoff: String,
    pub force_heat_on: String,
    pub last_polled: String,
}

impl StatusView {
    /// Region contents in display order.
    #[must_use]
    pub fn regions(&self) -> [(Region, &str); 7] {
        [
            (Region::FlueTemperature, self.flue_temperature.as_str()),
            (Region::BoardTemperature, self.board_temperature.as_str()),
            (Region::Status, self.status.as_str()),
            (Region::ForceHeat, self.force_heat.as_str()),
            (Region::OverfireShutoff, self.overfire_shutoff.as_str()),
            (Region::ForceHeatOn, self.force_heat_on.as_str()),
            (Region::LastPolled, self.last_polled.as_str()),
        ]
    }
}

impl From<&StatusSnapshot> for StatusView {
    fn from(snapshot: &StatusSnapshot) -> Self {
        Self {
            flue_temperature: format_celsius(snapshot.flue_temperature),
            board_temperature: format!(
                "Control Board Temp: {}",
                format_celsius(snapshot.pi_cpu_temperature)
            ),
            status: if snapshot.overfire {
                "OVERFIRE CONDITION!".to_string()
            } else {
                "Normal".to_string()
            },
            status_color: if snapshot.overfire {
                StatusColor::Alert
            } else {
                StatusColor::Normal
            },
            force_heat: flag_label(snapshot.force_heat_active, "Force Heat"),
            overfire_shutoff: flag_label(
                snapshot.overfire_force_shutoff_active,
                "Overfire Shutoff",
            ),
            force_heat_on: flag_label(snapshot.force_heat_on_active, "Force Heat On"),
            last_polled: format!("Last Polled: {}", snapshot.last_polled),
        }
    }
}

/// One decimal place, `°C` suffix.
fn format_celsius(value: f64) -> String {
    format!("{value:.1}\u{b0}C")
}

fn flag_label(active: bool, subject: &str) -> String {
    if active {
        format!("{subject} Active")
    } else {
        format!("{subject} Inactive")
    }
}
