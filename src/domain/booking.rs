// src/domain/booking.rs

pub const CLEANING_FEE: u32 = 50;
pub const SERVICE_FEE: u32 = 83;

/// Estimate shown on the detail page's booking card. Nothing is charged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceBreakdown {
    pub nightly: u32,
    pub nights: u32,
    pub cleaning_fee: u32,
    pub service_fee: u32,
}

impl PriceBreakdown {
    pub fn new(nightly: u32, nights: u32) -> Self {
        Self {
            nightly,
            nights,
            cleaning_fee: CLEANING_FEE,
            service_fee: SERVICE_FEE,
        }
    }

    pub fn stay_cost(&self) -> u64 {
        u64::from(self.nightly) * u64::from(self.nights)
    }

    /// Total before taxes.
    pub fn total(&self) -> u64 {
        self.stay_cost() + u64::from(self.cleaning_fee) + u64::from(self.service_fee)
    }
}
