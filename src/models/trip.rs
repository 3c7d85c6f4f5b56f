use chrono::{Local, NaiveDate};
use serde::Serialize;

/// Weekly on-duty cycle rule the carrier operates under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CycleRule {
    /// 70 hours over 8 days.
    SeventyEight,
    /// 60 hours over 7 days.
    SixtySeven,
}

impl CycleRule {
    pub fn to_db_str(&self) -> &'static str {
        match self {
            CycleRule::SeventyEight => "70/8",
            CycleRule::SixtySeven => "60/7",
        }
    }

    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "70/8" => Some(CycleRule::SeventyEight),
            "60/7" => Some(CycleRule::SixtySeven),
            _ => None,
        }
    }

    /// Maximum on-duty hours within the rolling window.
    pub fn cap_hours(&self) -> f64 {
        match self {
            CycleRule::SeventyEight => 70.0,
            CycleRule::SixtySeven => 60.0,
        }
    }

    /// Rolling window length in days, today included.
    pub fn window_days(&self) -> i64 {
        match self {
            CycleRule::SeventyEight => 8,
            CycleRule::SixtySeven => 7,
        }
    }
}

/// A stored trip row.
#[derive(Debug, Clone, Serialize)]
pub struct Trip {
    pub id: i64,
    pub date: NaiveDate,
    pub from_location: String,
    pub to_location: String,
    pub carrier_name: String,
    pub main_office_address: Option<String>,
    pub truck_number: Option<String>,
    pub trailer_number: Option<String>,
    pub home_terminal_address: Option<String>,
    pub cycle_rule: CycleRule,
    pub document_number: Option<String>,
    pub shipper: Option<String>,
    pub commodity: Option<String>,
    pub completed: bool,
    pub remarks: Option<String>,
    pub created_at: String,
}

impl Trip {
    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    /// Sheet-header metadata view of this trip. Location fields are passed
    /// through raw: the caller resolves them to display strings before
    /// the draw pass.
    pub fn details(&self) -> TripDetails {
        TripDetails {
            date: self.date,
            from_location: non_empty(&self.from_location),
            to_location: non_empty(&self.to_location),
            carrier_name: non_empty(&self.carrier_name),
            main_office_address: self.main_office_address.clone(),
            truck_number: self.truck_number.clone(),
            trailer_number: self.trailer_number.clone(),
            home_terminal_address: self.home_terminal_address.clone(),
            document_number: self.document_number.clone(),
            shipper: self.shipper.clone(),
            commodity: self.commodity.clone(),
        }
    }
}

fn non_empty(s: &str) -> Option<String> {
    if s.trim().is_empty() {
        None
    } else {
        Some(s.to_string())
    }
}

/// Static header metadata consumed by the sheet renderer. Every optional
/// field has an explicit "absent" state so the render fallback is a
/// testable branch rather than an accidental string coercion.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TripDetails {
    pub date: NaiveDate,
    pub from_location: Option<String>,
    pub to_location: Option<String>,
    pub carrier_name: Option<String>,
    pub main_office_address: Option<String>,
    pub truck_number: Option<String>,
    pub trailer_number: Option<String>,
    pub home_terminal_address: Option<String>,
    pub document_number: Option<String>,
    pub shipper: Option<String>,
    pub commodity: Option<String>,
}

impl TripDetails {
    pub fn for_date(date: NaiveDate) -> Self {
        Self {
            date,
            from_location: None,
            to_location: None,
            carrier_name: None,
            main_office_address: None,
            truck_number: None,
            trailer_number: None,
            home_terminal_address: None,
            document_number: None,
            shipper: None,
            commodity: None,
        }
    }
}

/// Default creation timestamp helper shared by the logic layer.
pub fn now_rfc3339() -> String {
    Local::now().to_rfc3339()
}
