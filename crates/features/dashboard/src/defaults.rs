//! The dashboard as it looks out of the box.
//!
//! Every card the dashboard pages know how to render has an entry here. When a new card ships,
//! add it to the matching section so fresh installations and failed loads can show it.

use fmdash_domain::constants::{
    AMC, ASSETS, INVENTORY, MEETING_ROOMS, PARKING, SCHEDULE, SURVEYS, TICKETS, VISITORS,
};
use fmdash_domain::{ConfigurationDocument, Item, Section};
use std::sync::LazyLock;

/// `(section, [(item, visible by default)])` in display order.
const DEFAULT_LAYOUT: &[(&str, &[(&str, bool)])] = &[
    (
        TICKETS,
        &[
            ("ticketStatusOverview", true),
            ("categoryWiseTickets", true),
            ("proactiveReactiveTickets", false),
            ("unitCategoryWise", true),
            ("ticketAgingMatrix", true),
            ("responseTat", true),
            ("resolutionTat", true),
            ("recentTickets", false),
        ],
    ),
    (
        AMC,
        &[
            ("statusOverview", true),
            ("typeDistribution", true),
            ("unitResourceDistribution", true),
            ("serviceStats", true),
            ("expiryAnalysis", true),
            ("serviceTracking", false),
            ("coverageByLocation", true),
        ],
    ),
    (
        ASSETS,
        &[
            ("assetOverview", true),
            ("assetStatus", true),
            ("assetDistribution", true),
            ("groupWiseAssets", true),
            ("categoryWiseAssets", true),
            ("assetBreakdown", false),
        ],
    ),
    (
        INVENTORY,
        &[
            ("itemsStatus", true),
            ("categoryWise", true),
            ("greenConsumption", false),
            ("consumptionReport", true),
            ("currentMinimumStock", true),
        ],
    ),
    (
        SCHEDULE,
        &[("scheduleOverview", true), ("taskCompletion", true), ("technicianPerformance", false)],
    ),
    (SURVEYS, &[("responseDistribution", true), ("responseTrend", true), ("surveyStatus", true)]),
    (VISITORS, &[("visitorTrendAnalysis", true), ("expectedVisitors", true)]),
    (PARKING, &[("parkingAllocationOverview", true), ("parkingDateSiteWise", false)]),
    (MEETING_ROOMS, &[("revenueOverview", true), ("bookingUtilization", true)]),
];

static DEFAULT_DOCUMENT: LazyLock<ConfigurationDocument> = LazyLock::new(|| {
    ConfigurationDocument::new(
        DEFAULT_LAYOUT
            .iter()
            .map(|(section, items)| {
                Section::new(
                    *section,
                    items.iter().map(|(name, visible)| Item::new(*name, *visible)).collect(),
                )
            })
            .collect(),
    )
});

/// Shared reference to the built-in default document.
#[must_use]
pub fn default_document() -> &'static ConfigurationDocument {
    &DEFAULT_DOCUMENT
}

/// Owned copy of the built-in default document.
#[must_use]
pub fn default_configuration() -> ConfigurationDocument {
    DEFAULT_DOCUMENT.clone()
}
