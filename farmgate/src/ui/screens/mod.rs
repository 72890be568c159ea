pub mod auth_gate_screen;
pub mod home_screen;
pub mod login_screen;
pub mod stub_screen;

use crate::navigation::Route;
use crate::state::{AuthGateState, HomeState, LoginState};

#[derive(Debug, Clone)]
pub enum Screen {
    AuthGate(AuthGateState),
    Login(LoginState),
    Home(HomeState),
    FarmerRegistration,
    SeedDistribution,
    HarvestEntry,
    Receipts,
}

impl Screen {
    pub fn route(&self) -> Route {
        match self {
            Self::AuthGate(_) => Route::AuthGate,
            Self::Login(_) => Route::Login,
            Self::Home(_) => Route::Home,
            Self::FarmerRegistration => Route::FarmerRegistration,
            Self::SeedDistribution => Route::SeedDistribution,
            Self::HarvestEntry => Route::HarvestEntry,
            Self::Receipts => Route::Receipts,
        }
    }

    /// Fresh screen state for a route
    pub fn for_route(route: Route) -> Self {
        match route {
            Route::AuthGate => Self::AuthGate(AuthGateState::default()),
            Route::Login => Self::Login(LoginState::default()),
            Route::Home => Self::Home(HomeState::default()),
            Route::FarmerRegistration => Self::FarmerRegistration,
            Route::SeedDistribution => Self::SeedDistribution,
            Route::HarvestEntry => Self::HarvestEntry,
            Route::Receipts => Self::Receipts,
        }
    }
}
