use rust_decimal::Decimal;

use super::category::DisputeCategory;
use super::schedule::TariffSchedule;

/// Progressive accumulation across the settlement brackets: each bracket
/// taxes the slice of the amount falling inside it at its marginal rate.
pub(crate) fn settlement_fee(schedule: &TariffSchedule, amount: Decimal) -> Decimal {
    let mut fee = Decimal::ZERO;
    let mut remaining = amount;
    let mut lower_bound = Decimal::ZERO;

    for bracket in &schedule.brackets {
        let applicable = match bracket.upper_bound {
            Some(upper) => remaining.min(upper - lower_bound),
            None => remaining,
        };
        fee += applicable * bracket.rate;
        remaining -= applicable;
        if remaining <= Decimal::ZERO {
            break;
        }
        if let Some(upper) = bracket.upper_bound {
            lower_bound = upper;
        }
    }

    fee
}

/// Party-ladder lookup: the first rung covering the party count wins;
/// counts beyond every bound use the last rung.
pub(crate) fn ladder_fee(
    schedule: &TariffSchedule,
    category: DisputeCategory,
    party_count: u32,
) -> Decimal {
    let ladder = &schedule.rates.for_category(category).party_ladder;
    ladder
        .iter()
        .find(|rung| rung.max_parties.is_none_or(|max| party_count <= max))
        .or_else(|| ladder.last())
        .map(|rung| rung.fee)
        .unwrap_or(Decimal::ZERO)
}
