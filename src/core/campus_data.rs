//! Static campus datasets shown by every view and fed to the assistant as context.

use serde::Serialize;

use crate::core::routes::View;

/// Daily waste collection for one location, in kilograms per stream.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct WasteRecord {
    pub date: &'static str,
    pub dry: u32,
    pub wet: u32,
    pub recyclable: u32,
    pub location: &'static str,
}

impl WasteRecord {
    pub fn total(&self) -> u32 {
        self.dry + self.wet + self.recyclable
    }
}

/// Daily utility usage for one building: electricity in kWh, water in litres.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct EnergyRecord {
    pub date: &'static str,
    pub electricity: u32,
    pub water: u32,
    pub building: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
    Neutral,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildingScore {
    pub name: &'static str,
    pub score: u32,
    pub rank: u32,
    pub trend: Trend,
    pub waste_diverted: i32,
    pub energy_saved: i32,
}

/// Visual tone of a headline stat card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatTone {
    Positive,
    Info,
    Warning,
    Water,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CampusStat {
    pub label: &'static str,
    pub value: &'static str,
    pub tone: StatTone,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NavItem {
    pub view: View,
    pub label: &'static str,
    pub icon: &'static str,
}

/// Chart palette shared by the dashboard, waste and energy views.
pub mod palette {
    pub const DRY: &str = "#94a3b8";
    pub const WET: &str = "#10b981";
    pub const RECYCLABLE: &str = "#3b82f6";
    pub const ELECTRICITY: &str = "#f59e0b";
    pub const WATER: &str = "#0ea5e9";
}

pub const WASTE_DATA: &[WasteRecord] = &[
    WasteRecord { date: "2023-10-21", dry: 120, wet: 80, recyclable: 45, location: "Hostel A" },
    WasteRecord { date: "2023-10-22", dry: 130, wet: 90, recyclable: 50, location: "Hostel A" },
    WasteRecord { date: "2023-10-23", dry: 110, wet: 120, recyclable: 30, location: "Hostel A" },
    WasteRecord { date: "2023-10-24", dry: 150, wet: 85, recyclable: 60, location: "Hostel A" },
    WasteRecord { date: "2023-10-25", dry: 140, wet: 100, recyclable: 55, location: "Hostel A" },
    WasteRecord { date: "2023-10-26", dry: 125, wet: 110, recyclable: 40, location: "Hostel A" },
    WasteRecord { date: "2023-10-27", dry: 135, wet: 95, recyclable: 50, location: "Hostel A" },
];

pub const ENERGY_DATA: &[EnergyRecord] = &[
    EnergyRecord { date: "Mon", electricity: 450, water: 2100, building: "Academic Block" },
    EnergyRecord { date: "Tue", electricity: 480, water: 2300, building: "Academic Block" },
    EnergyRecord { date: "Wed", electricity: 520, water: 2500, building: "Academic Block" },
    EnergyRecord { date: "Thu", electricity: 490, water: 2200, building: "Academic Block" },
    EnergyRecord { date: "Fri", electricity: 510, water: 2400, building: "Academic Block" },
    EnergyRecord { date: "Sat", electricity: 320, water: 1500, building: "Academic Block" },
    EnergyRecord { date: "Sun", electricity: 280, water: 1200, building: "Academic Block" },
];

pub const LEADERBOARD_DATA: &[BuildingScore] = &[
    BuildingScore { name: "Hostel Alpha", score: 2840, rank: 1, trend: Trend::Up, waste_diverted: 450, energy_saved: 120 },
    BuildingScore { name: "Main Academic Block", score: 2610, rank: 2, trend: Trend::Neutral, waste_diverted: 380, energy_saved: 200 },
    BuildingScore { name: "Hostel Gamma", score: 2450, rank: 3, trend: Trend::Up, waste_diverted: 310, energy_saved: 85 },
    BuildingScore { name: "Research Wing", score: 2100, rank: 4, trend: Trend::Down, waste_diverted: 150, energy_saved: 340 },
    BuildingScore { name: "Dining Hall C", score: 1890, rank: 5, trend: Trend::Up, waste_diverted: 520, energy_saved: -10 },
];

pub const NAVIGATION_ITEMS: &[NavItem] = &[
    NavItem { view: View::Overview, label: "Overview", icon: "▦" },
    NavItem { view: View::Waste, label: "Waste Mgmt", icon: "🗑" },
    NavItem { view: View::Energy, label: "Energy & Water", icon: "⚡" },
    NavItem { view: View::Leaderboard, label: "Leaderboard", icon: "🏆" },
    NavItem { view: View::Chat, label: "AI Assistant", icon: "💬" },
];

pub const CAMPUS_STATS: &[CampusStat] = &[
    CampusStat { label: "Total Waste Diverted", value: "45%", tone: StatTone::Positive },
    CampusStat { label: "Energy Savings", value: "12%", tone: StatTone::Info },
    CampusStat { label: "Critical Overflows", value: "2", tone: StatTone::Warning },
    CampusStat { label: "Water Usage Trend", value: "+5%", tone: StatTone::Water },
];

/// The most recent `count` records of a dataset, oldest first.
pub fn latest<T>(records: &[T], count: usize) -> &[T] {
    &records[records.len().saturating_sub(count)..]
}

/// The newest waste record, used for the stream breakdown.
pub fn latest_waste() -> Option<&'static WasteRecord> {
    WASTE_DATA.last()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latest_slices_tail() {
        let tail = latest(WASTE_DATA, 3);
        assert_eq!(tail.len(), 3);
        assert_eq!(tail[2].date, "2023-10-27");
        assert_eq!(latest(ENERGY_DATA, 50).len(), ENERGY_DATA.len());
        assert!(latest::<WasteRecord>(&[], 7).is_empty());
    }

    #[test]
    fn test_navigation_covers_every_view_once() {
        let views: Vec<View> = NAVIGATION_ITEMS.iter().map(|item| item.view).collect();
        assert_eq!(views, View::ALL.to_vec());
    }

    #[test]
    fn test_leaderboard_ranks_are_sequential() {
        for (idx, entry) in LEADERBOARD_DATA.iter().enumerate() {
            assert_eq!(entry.rank as usize, idx + 1);
        }
    }

    #[test]
    fn test_building_score_serializes_camel_case() {
        let json = serde_json::to_value(LEADERBOARD_DATA[4]).unwrap();
        assert_eq!(json["wasteDiverted"], 520);
        assert_eq!(json["energySaved"], -10);
        assert_eq!(json["trend"], "up");
    }

    #[test]
    fn test_latest_waste_total() {
        let record = latest_waste().unwrap();
        assert_eq!(record.total(), 280);
    }
}
