//! Admin statistics.
//!
//! `GET /admin/stats` is served by two generations of the backend: the
//! enveloped platform report and an older flat summary.

use serde::Deserialize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct FranchiseeCounts {
    #[serde(default)]
    pub active: u64,
    #[serde(default)]
    pub pending_applications: u64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct CustomerCounts {
    #[serde(default)]
    pub total: u64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct JobCounts {
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub this_month: u64,
    #[serde(default)]
    pub pending: u64,
    #[serde(default)]
    pub in_progress: u64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
pub struct RevenueTotals {
    #[serde(default)]
    pub this_month: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct TerritoryCounts {
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub assigned: u64,
}

/// Platform-wide report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
pub struct PlatformStats {
    #[serde(default)]
    pub franchisees: FranchiseeCounts,
    #[serde(default)]
    pub customers: CustomerCounts,
    #[serde(default)]
    pub jobs: JobCounts,
    #[serde(default)]
    pub revenue: RevenueTotals,
    #[serde(default)]
    pub territories: TerritoryCounts,
}

/// Flat summary from the older admin endpoint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegacyStats {
    #[serde(default)]
    pub total_bookings: u64,
    #[serde(default)]
    pub total_customers: u64,
    #[serde(default)]
    pub total_franchisees: u64,
    #[serde(default)]
    pub completed_bookings: u64,
    #[serde(default)]
    pub total_revenue: f64,
}

/// Whichever stats shape the server answered with.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StatsReport {
    Platform(PlatformStats),
    Legacy(LegacyStats),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_platform_stats() {
        let json = r#"{
            "franchisees": {"active": 3, "pending_applications": 2},
            "customers": {"total": 140},
            "jobs": {"total": 500, "this_month": 42, "pending": 5, "in_progress": 7},
            "revenue": {"this_month": 6300.5},
            "territories": {"total": 60, "assigned": 12}
        }"#;
        let stats: PlatformStats = serde_json::from_str(json).unwrap();

        assert_eq!(stats.franchisees.pending_applications, 2);
        assert_eq!(stats.jobs.in_progress, 7);
        assert_eq!(stats.territories.assigned, 12);
    }

    #[test]
    fn test_parse_legacy_stats() {
        let json = r#"{"totalBookings":10,"totalCustomers":4,"totalFranchisees":1,
            "completedBookings":6,"totalRevenue":900}"#;
        let stats: LegacyStats = serde_json::from_str(json).unwrap();

        assert_eq!(stats.completed_bookings, 6);
        assert!((stats.total_revenue - 900.0).abs() < f64::EPSILON);
    }
}
