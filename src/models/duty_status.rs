use serde::Serialize;

/// The four duty statuses of a driver daily log, top to bottom
/// in the same order as the rows of the paper grid.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum DutyStatus {
    OffDuty,
    Sleeper,
    Driving,
    OnDuty,
}

impl DutyStatus {
    pub const ALL: [DutyStatus; 4] = [
        DutyStatus::OffDuty,
        DutyStatus::Sleeper,
        DutyStatus::Driving,
        DutyStatus::OnDuty,
    ];

    /// Grid row of this status (0 = top lane).
    pub fn row(&self) -> usize {
        match self {
            DutyStatus::OffDuty => 0,
            DutyStatus::Sleeper => 1,
            DutyStatus::Driving => 2,
            DutyStatus::OnDuty => 3,
        }
    }

    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &'static str {
        match self {
            DutyStatus::OffDuty => "off_duty",
            DutyStatus::Sleeper => "sleeper",
            DutyStatus::Driving => "driving",
            DutyStatus::OnDuty => "on_duty",
        }
    }

    /// Convert DB string → enum. Unknown strings are the caller's
    /// error to report, never a silent default row.
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "off_duty" => Some(DutyStatus::OffDuty),
            "sleeper" => Some(DutyStatus::Sleeper),
            "driving" => Some(DutyStatus::Driving),
            "on_duty" => Some(DutyStatus::OnDuty),
            _ => None,
        }
    }

    /// Helper: convert input code from CLI (accepts aliases and case)
    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_lowercase().as_str() {
            "off" | "off_duty" | "off-duty" => Some(DutyStatus::OffDuty),
            "sb" | "sleeper" | "sleeper_berth" => Some(DutyStatus::Sleeper),
            "d" | "driving" => Some(DutyStatus::Driving),
            "on" | "on_duty" | "on-duty" => Some(DutyStatus::OnDuty),
            _ => None,
        }
    }

    /// Human label as printed on the paper form margin.
    pub fn label(&self) -> &'static str {
        match self {
            DutyStatus::OffDuty => "Off Duty",
            DutyStatus::Sleeper => "Sleeper Berth",
            DutyStatus::Driving => "Driving",
            DutyStatus::OnDuty => "On Duty (not driving)",
        }
    }

    pub fn is_driving(&self) -> bool {
        matches!(self, DutyStatus::Driving)
    }
}
