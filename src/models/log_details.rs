use serde::Serialize;

/// Derived numeric fields printed on the sheet: daily per-status totals,
/// mileage, and the rolling recap sums. These are computed by the
/// calculator layer (or any other collaborator) and passed in wholesale;
/// the renderer treats them as opaque scalars. `None` means the value is
/// unknown and renders as the explicit placeholder.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LogDetails {
    pub total_off_duty_hours: Option<f64>,
    pub total_sleeper_hours: Option<f64>,
    pub total_driving_hours: Option<f64>,
    pub total_on_duty_hours: Option<f64>,

    pub total_miles_driving_today: Option<f64>,
    pub total_miles_today: Option<f64>,

    pub total_on_duty_hours_today: Option<f64>,
    pub total_on_duty_hours_last_6_days: Option<f64>,
    pub total_on_duty_hours_last_7_days: Option<f64>,
    pub total_on_duty_hours_last_8_days: Option<f64>,
    pub available_hours_tomorrow: Option<f64>,

    pub remarks: Option<String>,
}
