use rust_decimal::Decimal;

use crate::tariff::{FeeRequest, TariffEngine};

pub(super) fn engine() -> TariffEngine {
    TariffEngine::default()
}

pub(super) fn settled_monetary(amount: Decimal, parties: u32, label: &str) -> FeeRequest {
    FeeRequest {
        agreement_reached: true,
        monetary: true,
        amount: Some(amount),
        party_count: parties,
        dispute_label: Some(label.to_string()),
    }
}

pub(super) fn unsettled(monetary: bool, parties: u32, label: &str) -> FeeRequest {
    FeeRequest {
        agreement_reached: false,
        monetary,
        amount: None,
        party_count: parties,
        dispute_label: Some(label.to_string()),
    }
}
