//! Enumerated navigation sections of the marketplace front end.

use serde::{Deserialize, Serialize};

/// The marketplace front end's top-level sections.
///
/// An explicit variant per section, one handler path per variant; the
/// gateway serves this as a static catalog so clients never branch on
/// free-form strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    /// Browse all registered events.
    Catalog,
    /// Tickets owned by the connected wallet.
    MyTickets,
    /// Register a new event.
    CreateEvent,
    /// On-demand wallet balance display.
    WalletBalance,
}

impl Section {
    /// All sections in display order.
    pub const ALL: [Self; 4] = [
        Self::Catalog,
        Self::MyTickets,
        Self::CreateEvent,
        Self::WalletBalance,
    ];

    /// Stable string form used in URLs and logs.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Catalog => "catalog",
            Self::MyTickets => "my_tickets",
            Self::CreateEvent => "create_event",
            Self::WalletBalance => "wallet_balance",
        }
    }

    /// Display label for navigation menus.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Catalog => "Events",
            Self::MyTickets => "My Tickets",
            Self::CreateEvent => "Create Event",
            Self::WalletBalance => "Wallet Balance",
        }
    }

    /// REST path backing the section.
    #[must_use]
    pub const fn api_path(self) -> &'static str {
        match self {
            Self::Catalog => "/api/v1/events",
            Self::MyTickets => "/api/v1/wallets/{address}/tickets",
            Self::CreateEvent => "/api/v1/events",
            Self::WalletBalance => "/api/v1/wallets/{address}/balance",
        }
    }
}
