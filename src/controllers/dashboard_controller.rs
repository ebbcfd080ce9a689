use crate::repositories::Stores;
use crate::services::dashboard_service::{summarize, DashboardSummary};
use crate::utils::errors::AppResult;

pub struct DashboardController {
    stores: Stores,
}

impl DashboardController {
    pub fn new(stores: Stores) -> Self {
        Self { stores }
    }

    pub async fn summary(&self) -> AppResult<DashboardSummary> {
        let (customers, vehicles, orders) = futures::try_join!(
            self.stores.customers.list(),
            self.stores.vehicles.list(),
            self.stores.work_orders.list(),
        )?;
        Ok(summarize(&customers, &vehicles, &orders))
    }
}
