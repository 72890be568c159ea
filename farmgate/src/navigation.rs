use farmgate_auth::SessionState;

/// Every screen the navigator can show
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    AuthGate,
    Login,
    Home,
    FarmerRegistration,
    SeedDistribution,
    HarvestEntry,
    Receipts,
}

/// Per-route display options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteOptions {
    pub title: &'static str,
    pub header_shown: bool,
}

impl Route {
    pub const ALL: [Route; 7] = [
        Route::AuthGate,
        Route::Login,
        Route::Home,
        Route::FarmerRegistration,
        Route::SeedDistribution,
        Route::HarvestEntry,
        Route::Receipts,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::AuthGate => "AuthGate",
            Self::Login => "Login",
            Self::Home => "Home",
            Self::FarmerRegistration => "FarmerRegistration",
            Self::SeedDistribution => "SeedDistribution",
            Self::HarvestEntry => "HarvestEntry",
            Self::Receipts => "Receipts",
        }
    }

    pub fn options(&self) -> RouteOptions {
        match self {
            Self::AuthGate => RouteOptions {
                title: "AuthGate",
                header_shown: false,
            },
            Self::Login => RouteOptions {
                title: "Login",
                header_shown: false,
            },
            Self::Home => RouteOptions {
                title: "Home",
                header_shown: true,
            },
            Self::FarmerRegistration => RouteOptions {
                title: "Register Farmer",
                header_shown: true,
            },
            Self::SeedDistribution => RouteOptions {
                title: "Seed Distribution Entry",
                header_shown: true,
            },
            Self::HarvestEntry => RouteOptions {
                title: "Harvest Entry",
                header_shown: true,
            },
            Self::Receipts => RouteOptions {
                title: "Farmer Receipts",
                header_shown: true,
            },
        }
    }

    /// Placeholder screens whose only action is returning home
    pub fn is_stub(&self) -> bool {
        matches!(
            self,
            Self::FarmerRegistration | Self::SeedDistribution | Self::HarvestEntry | Self::Receipts
        )
    }

    /// Label rendered in the body of a stub screen
    pub fn stub_label(&self) -> Option<&'static str> {
        match self {
            Self::FarmerRegistration => Some("Farmer Registration Screen"),
            Self::SeedDistribution => Some("Seed Distribution Entry Screen"),
            Self::HarvestEntry => Some("Harvest Entry Screen"),
            Self::Receipts => Some("Receipts Screen"),
            _ => None,
        }
    }

    /// Where the session gate sends the user
    pub fn from_session(state: SessionState) -> Self {
        match state {
            SessionState::Authenticated => Self::Home,
            SessionState::Anonymous => Self::Login,
        }
    }
}

/// Entries of the home menu, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HomeMenuItem {
    Open(Route),
    Logout,
}

pub const HOME_MENU: [HomeMenuItem; 5] = [
    HomeMenuItem::Open(Route::FarmerRegistration),
    HomeMenuItem::Open(Route::SeedDistribution),
    HomeMenuItem::Open(Route::HarvestEntry),
    HomeMenuItem::Open(Route::Receipts),
    HomeMenuItem::Logout,
];

impl HomeMenuItem {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Open(Route::FarmerRegistration) => "Register Farmer",
            Self::Open(Route::SeedDistribution) => "Seed Distribution",
            Self::Open(Route::HarvestEntry) => "Harvest Entry",
            Self::Open(Route::Receipts) => "View Receipts",
            Self::Open(route) => route.options().title,
            Self::Logout => "Logout",
        }
    }
}
