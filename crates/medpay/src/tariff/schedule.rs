//! Versioned tariff tables.
//!
//! The figures in [`TariffSchedule::year_2025`] are the published 2025
//! minimum fee schedule. Yearly updates mean adding a constructor here;
//! the calculation code never changes.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use super::category::DisputeCategory;

/// One rung of a party-count fee ladder. A `max_parties` of `None`
/// covers every remaining count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LadderRung {
    pub max_parties: Option<u32>,
    pub fee: Decimal,
}

/// Marginal rate applied to the slice of the settlement amount up to
/// `upper_bound` (cumulative); `None` leaves the bracket unbounded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AmountBracket {
    pub upper_bound: Option<Decimal>,
    pub rate: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MinimumFees {
    pub general: Decimal,
    pub commercial: Decimal,
}

impl MinimumFees {
    pub fn floor_for(&self, category: DisputeCategory) -> Decimal {
        if category.is_commercial_class() {
            self.commercial
        } else {
            self.general
        }
    }
}

/// Hourly rate and party ladder for one dispute category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryRate {
    pub hourly_rate: Decimal,
    pub party_ladder: Vec<LadderRung>,
}

impl CategoryRate {
    /// Standard 2025 ladder shape: two parties pay the hourly rate per
    /// party, larger groups pay a fixed fee per band (3-5, 6-10, 11+).
    fn two_party_then_fixed(hourly_rate: Decimal, fixed: [Decimal; 3]) -> Self {
        let [small_group, medium_group, large_group] = fixed;
        Self {
            hourly_rate,
            party_ladder: vec![
                LadderRung {
                    max_parties: Some(2),
                    fee: hourly_rate * dec!(2),
                },
                LadderRung {
                    max_parties: Some(5),
                    fee: small_group,
                },
                LadderRung {
                    max_parties: Some(10),
                    fee: medium_group,
                },
                LadderRung {
                    max_parties: None,
                    fee: large_group,
                },
            ],
        }
    }
}

/// Per-category rate tables, complete by construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryRates {
    pub worker_employer: CategoryRate,
    pub commercial: CategoryRate,
    pub consumer: CategoryRate,
    pub rent: CategoryRate,
    pub family: CategoryRate,
    pub partnership_dissolution: CategoryRate,
    pub other: CategoryRate,
}

impl CategoryRates {
    pub fn for_category(&self, category: DisputeCategory) -> &CategoryRate {
        match category {
            DisputeCategory::WorkerEmployer => &self.worker_employer,
            DisputeCategory::Commercial => &self.commercial,
            DisputeCategory::Consumer => &self.consumer,
            DisputeCategory::Rent => &self.rent,
            DisputeCategory::Family => &self.family,
            DisputeCategory::PartnershipDissolution => &self.partnership_dissolution,
            DisputeCategory::Other => &self.other,
        }
    }

    fn iter(&self) -> impl Iterator<Item = (DisputeCategory, &CategoryRate)> {
        DisputeCategory::ALL
            .iter()
            .map(move |category| (*category, self.for_category(*category)))
    }
}

/// Immutable tariff tables for one schedule year.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TariffSchedule {
    pub year: u16,
    pub rates: CategoryRates,
    pub brackets: Vec<AmountBracket>,
    pub minimum_fees: MinimumFees,
    /// Statutory minimum billable duration, in hourly units, for
    /// non-settled and non-monetary disputes.
    pub minimum_billable_hours: u32,
}

impl TariffSchedule {
    /// Looks up the compiled-in schedule for a tariff year.
    pub fn for_year(year: u16) -> Result<Self, ScheduleError> {
        match year {
            2025 => Ok(Self::year_2025()),
            other => Err(ScheduleError::UnsupportedYear(other)),
        }
    }

    /// The 2025 schedule.
    pub fn year_2025() -> Self {
        Self {
            year: 2025,
            rates: CategoryRates {
                worker_employer: CategoryRate::two_party_then_fixed(
                    dec!(785),
                    [dec!(1650), dec!(1750), dec!(1850)],
                ),
                commercial: CategoryRate::two_party_then_fixed(
                    dec!(1150),
                    [dec!(2350), dec!(2450), dec!(2550)],
                ),
                consumer: CategoryRate::two_party_then_fixed(
                    dec!(785),
                    [dec!(1650), dec!(1750), dec!(1850)],
                ),
                rent: CategoryRate::two_party_then_fixed(
                    dec!(835),
                    [dec!(1750), dec!(1850), dec!(1950)],
                ),
                family: CategoryRate::two_party_then_fixed(
                    dec!(785),
                    [dec!(1650), dec!(1750), dec!(1850)],
                ),
                partnership_dissolution: CategoryRate::two_party_then_fixed(
                    dec!(900),
                    [dec!(2000), dec!(2100), dec!(2200)],
                ),
                other: CategoryRate::two_party_then_fixed(
                    dec!(785),
                    [dec!(1650), dec!(1750), dec!(1850)],
                ),
            },
            brackets: vec![
                AmountBracket {
                    upper_bound: Some(dec!(300000)),
                    rate: dec!(0.06),
                },
                AmountBracket {
                    upper_bound: Some(dec!(780000)),
                    rate: dec!(0.05),
                },
                AmountBracket {
                    upper_bound: Some(dec!(1560000)),
                    rate: dec!(0.04),
                },
                AmountBracket {
                    upper_bound: Some(dec!(4680000)),
                    rate: dec!(0.03),
                },
                AmountBracket {
                    upper_bound: Some(dec!(6240000)),
                    rate: dec!(0.02),
                },
                AmountBracket {
                    upper_bound: Some(dec!(12480000)),
                    rate: dec!(0.015),
                },
                AmountBracket {
                    upper_bound: Some(dec!(26520000)),
                    rate: dec!(0.01),
                },
                AmountBracket {
                    upper_bound: None,
                    rate: dec!(0.005),
                },
            ],
            minimum_fees: MinimumFees {
                general: dec!(6000),
                commercial: dec!(9000),
            },
            minimum_billable_hours: 2,
        }
    }

    /// Checks the table invariants the lookups rely on: non-empty
    /// ladders and brackets, strictly ascending bounds, and unbounded
    /// entries only in final position.
    pub fn validate(&self) -> Result<(), ScheduleError> {
        for (category, rate) in self.rates.iter() {
            validate_ladder(category, &rate.party_ladder)?;
        }

        if self.brackets.is_empty() {
            return Err(ScheduleError::EmptyBrackets);
        }
        let mut seen_unbounded = false;
        let mut previous: Option<Decimal> = None;
        for (index, bracket) in self.brackets.iter().enumerate() {
            if seen_unbounded {
                return Err(ScheduleError::BracketOutOfOrder { index });
            }
            match bracket.upper_bound {
                Some(bound) => {
                    if previous.is_some_and(|last| bound <= last) {
                        return Err(ScheduleError::BracketOutOfOrder { index });
                    }
                    previous = Some(bound);
                }
                None => seen_unbounded = true,
            }
        }

        Ok(())
    }
}

fn validate_ladder(category: DisputeCategory, ladder: &[LadderRung]) -> Result<(), ScheduleError> {
    if ladder.is_empty() {
        return Err(ScheduleError::EmptyLadder { category });
    }
    let mut seen_unbounded = false;
    let mut previous: Option<u32> = None;
    for (index, rung) in ladder.iter().enumerate() {
        if seen_unbounded {
            return Err(ScheduleError::LadderOutOfOrder { category, index });
        }
        match rung.max_parties {
            Some(bound) => {
                if previous.is_some_and(|last| bound <= last) {
                    return Err(ScheduleError::LadderOutOfOrder { category, index });
                }
                previous = Some(bound);
            }
            None => seen_unbounded = true,
        }
    }
    Ok(())
}

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ScheduleError {
    #[error("no tariff schedule published for year {0}")]
    UnsupportedYear(u16),
    #[error("party ladder for {category:?} is empty")]
    EmptyLadder { category: DisputeCategory },
    #[error("party ladder for {category:?} must keep bounds strictly ascending (rung {index})")]
    LadderOutOfOrder {
        category: DisputeCategory,
        index: usize,
    },
    #[error("settlement bracket table is empty")]
    EmptyBrackets,
    #[error("settlement bracket bounds must be strictly ascending (bracket {index})")]
    BracketOutOfOrder { index: usize },
}
