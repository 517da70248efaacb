use serde::Deserialize;

/// Demand figures for one service over the requested date range.
/// Aggregated server-side; the client only displays them.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceReport {
    pub service_type: String,
    #[serde(default)]
    pub total_bookings: u64,
    #[serde(default)]
    pub total_revenue: f64,
    #[serde(default)]
    pub total_service_time: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneralReport {
    #[serde(default)]
    pub service_demand_report: Vec<ServiceReport>,
}
