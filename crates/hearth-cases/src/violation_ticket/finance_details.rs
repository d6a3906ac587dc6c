//! Finance details embedded in a violation ticket

use super::value_objects::ServiceFee;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinanceDetailsProps {
    service_fee: ServiceFee,
}

impl FinanceDetailsProps {
    pub fn new(service_fee: ServiceFee) -> Self {
        Self { service_fee }
    }

    pub fn service_fee(&self) -> f64 {
        self.service_fee.value_of()
    }

    pub(crate) fn set_service_fee(&mut self, service_fee: ServiceFee) {
        self.service_fee = service_fee;
    }
}
