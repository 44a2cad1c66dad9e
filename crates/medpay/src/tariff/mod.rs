//! Mediation fee assessment under the party-count and settlement-bracket
//! tariff rules.
//!
//! Settled monetary disputes are priced by progressive accumulation over
//! the settlement brackets, floored at the category's minimum fee.
//! Everything else (no agreement, or a non-monetary subject) is priced
//! from the party-count ladder times the statutory minimum billable
//! hours.

mod category;
mod engine;
pub mod schedule;

#[cfg(test)]
mod tests;

pub use category::DisputeCategory;
pub use schedule::{
    AmountBracket, CategoryRate, CategoryRates, LadderRung, MinimumFees, ScheduleError,
    TariffSchedule,
};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Attributes of a dispute needed to price a mediation. Constructed per
/// user action, consumed once, never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeeRequest {
    pub agreement_reached: bool,
    pub monetary: bool,
    pub amount: Option<Decimal>,
    pub party_count: u32,
    pub dispute_label: Option<String>,
}

/// Stateless engine applying one tariff schedule to fee requests.
pub struct TariffEngine {
    schedule: TariffSchedule,
}

impl TariffEngine {
    pub fn new(schedule: TariffSchedule) -> Self {
        Self { schedule }
    }

    pub fn schedule(&self) -> &TariffSchedule {
        &self.schedule
    }

    /// Prices a dispute. Never panics and never errors: degenerate
    /// inputs come back as [`FeeAssessment::NotAssessable`] so callers
    /// can tell "no fee computable" apart from a computed amount.
    pub fn assess(&self, request: &FeeRequest) -> FeeAssessment {
        if request.party_count == 0 {
            return FeeAssessment::NotAssessable(NotAssessableReason::NoParties);
        }

        let category = DisputeCategory::resolve(request.dispute_label.as_deref());

        if request.monetary && request.agreement_reached {
            let amount = match request.amount {
                Some(amount) if amount > Decimal::ZERO => amount,
                _ => {
                    return FeeAssessment::NotAssessable(
                        NotAssessableReason::MissingSettlementAmount,
                    )
                }
            };
            let accumulated = engine::settlement_fee(&self.schedule, amount);
            let minimum_floor = self.schedule.minimum_fees.floor_for(category);
            FeeAssessment::Assessed(AssessedFee {
                fee: accumulated.max(minimum_floor),
                category,
                basis: FeeBasis::SettlementBrackets {
                    accumulated,
                    minimum_floor,
                },
            })
        } else {
            let rung_fee = engine::ladder_fee(&self.schedule, category, request.party_count);
            let billable_hours = self.schedule.minimum_billable_hours;
            FeeAssessment::Assessed(AssessedFee {
                fee: rung_fee * Decimal::from(billable_hours),
                category,
                basis: FeeBasis::PartyLadder {
                    rung_fee,
                    billable_hours,
                },
            })
        }
    }
}

impl Default for TariffEngine {
    fn default() -> Self {
        Self::new(TariffSchedule::year_2025())
    }
}

/// Outcome of a fee assessment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FeeAssessment {
    Assessed(AssessedFee),
    NotAssessable(NotAssessableReason),
}

impl FeeAssessment {
    /// The assessed fee, or zero when no fee could be computed.
    pub fn amount(&self) -> Decimal {
        match self {
            FeeAssessment::Assessed(assessed) => assessed.fee,
            FeeAssessment::NotAssessable(_) => Decimal::ZERO,
        }
    }

    pub fn summary(&self) -> String {
        match self {
            FeeAssessment::Assessed(assessed) => format!(
                "{} TL for {} ({})",
                assessed.fee,
                assessed.category.canonical_label(),
                assessed.basis.summary()
            ),
            FeeAssessment::NotAssessable(reason) => reason.summary().to_string(),
        }
    }
}

/// A computed fee with the inputs that shaped it, allowing transparent
/// audits of how an amount came about.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessedFee {
    pub fee: Decimal,
    pub category: DisputeCategory,
    pub basis: FeeBasis,
}

/// How an assessed fee was derived.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FeeBasis {
    SettlementBrackets {
        accumulated: Decimal,
        minimum_floor: Decimal,
    },
    PartyLadder {
        rung_fee: Decimal,
        billable_hours: u32,
    },
}

impl FeeBasis {
    pub fn summary(&self) -> String {
        match self {
            FeeBasis::SettlementBrackets {
                accumulated,
                minimum_floor,
            } => format!(
                "progressive brackets: {accumulated} TL accumulated, floored at {minimum_floor} TL"
            ),
            FeeBasis::PartyLadder {
                rung_fee,
                billable_hours,
            } => format!("party ladder: {rung_fee} TL over {billable_hours} billable hours"),
        }
    }
}

/// Why no fee could be assessed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NotAssessableReason {
    NoParties,
    MissingSettlementAmount,
}

impl NotAssessableReason {
    pub fn summary(&self) -> &'static str {
        match self {
            NotAssessableReason::NoParties => "party count must be at least one",
            NotAssessableReason::MissingSettlementAmount => {
                "settlement amount is missing or not positive"
            }
        }
    }
}
