use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::common::{engine, settled_monetary, unsettled};
use crate::tariff::engine::{ladder_fee, settlement_fee};
use crate::tariff::{
    DisputeCategory, FeeAssessment, FeeBasis, FeeRequest, NotAssessableReason, TariffSchedule,
};

#[test]
fn zero_parties_is_never_assessable() {
    let engine = engine();
    let mut request = settled_monetary(dec!(500000), 0, "Ticari");
    assert_eq!(
        engine.assess(&request),
        FeeAssessment::NotAssessable(NotAssessableReason::NoParties)
    );
    assert_eq!(engine.assess(&request).amount(), Decimal::ZERO);

    request.agreement_reached = false;
    request.monetary = false;
    assert_eq!(
        engine.assess(&request),
        FeeAssessment::NotAssessable(NotAssessableReason::NoParties)
    );
}

#[test]
fn settled_monetary_without_a_positive_amount_is_not_assessable() {
    let engine = engine();
    for amount in [Some(Decimal::ZERO), Some(dec!(-10)), None] {
        let request = FeeRequest {
            amount,
            ..settled_monetary(Decimal::ZERO, 2, "Tüketici")
        };
        let assessment = engine.assess(&request);
        assert_eq!(
            assessment,
            FeeAssessment::NotAssessable(NotAssessableReason::MissingSettlementAmount)
        );
        assert_eq!(assessment.amount(), Decimal::ZERO);
    }
}

#[test]
fn first_bracket_prices_a_settled_dispute() {
    let assessment = engine().assess(&settled_monetary(dec!(300000), 3, "Diğer"));
    match assessment {
        FeeAssessment::Assessed(assessed) => {
            assert_eq!(assessed.fee, dec!(18000));
            assert_eq!(assessed.category, DisputeCategory::Other);
            assert_eq!(
                assessed.basis,
                FeeBasis::SettlementBrackets {
                    accumulated: dec!(18000),
                    minimum_floor: dec!(6000),
                }
            );
        }
        other => panic!("expected an assessed fee, got {other:?}"),
    }
}

#[test]
fn accumulation_spans_brackets_marginally() {
    let schedule = TariffSchedule::year_2025();
    // 300k at 6%, 480k at 5%, 220k at 4%.
    assert_eq!(settlement_fee(&schedule, dec!(1000000)), dec!(50800));
    // Past the last bound the unbounded 0.5% bracket takes over.
    assert_eq!(settlement_fee(&schedule, dec!(30000000)), dec!(449400));
}

#[test]
fn accumulated_fee_is_monotone_in_the_amount() {
    let schedule = TariffSchedule::year_2025();
    let mut last = Decimal::ZERO;
    for amount in [
        dec!(1),
        dec!(299999),
        dec!(300000),
        dec!(300001),
        dec!(780000),
        dec!(5000000),
        dec!(26520000),
        dec!(99000000),
    ] {
        let fee = settlement_fee(&schedule, amount);
        assert!(
            fee >= last,
            "fee dropped from {last} to {fee} at amount {amount}"
        );
        last = fee;
    }
}

#[test]
fn minimum_floor_engages_for_small_settlements() {
    let engine = engine();
    let general = engine.assess(&settled_monetary(dec!(10000), 2, "Aile"));
    assert_eq!(general.amount(), dec!(6000));

    let commercial = engine.assess(&settled_monetary(dec!(10000), 2, "Ticari"));
    assert_eq!(commercial.amount(), dec!(9000));

    let dissolution = engine.assess(&settled_monetary(dec!(10000), 2, "Ortaklığın Giderilmesi"));
    assert_eq!(dissolution.amount(), dec!(9000));
}

#[test]
fn unsettled_monetary_commercial_two_parties_doubles_twice() {
    // 1150 hourly, two parties, two minimum billable hours.
    let assessment = engine().assess(&unsettled(true, 2, "Ticari"));
    match assessment {
        FeeAssessment::Assessed(assessed) => {
            assert_eq!(assessed.fee, dec!(4600));
            assert_eq!(
                assessed.basis,
                FeeBasis::PartyLadder {
                    rung_fee: dec!(2300),
                    billable_hours: 2,
                }
            );
        }
        other => panic!("expected an assessed fee, got {other:?}"),
    }
}

#[test]
fn non_monetary_disputes_use_the_ladder_even_with_an_agreement() {
    let engine = engine();
    let request = FeeRequest {
        agreement_reached: true,
        monetary: false,
        amount: Some(dec!(1000000)),
        party_count: 2,
        dispute_label: Some("Kira".to_string()),
    };
    // 835 * 2 parties * 2 hours; the amount is ignored.
    assert_eq!(engine.assess(&request).amount(), dec!(3340));
}

#[test]
fn ladder_rungs_switch_at_their_bounds() {
    let schedule = TariffSchedule::year_2025();
    let commercial = DisputeCategory::Commercial;
    assert_eq!(ladder_fee(&schedule, commercial, 1), dec!(2300));
    assert_eq!(ladder_fee(&schedule, commercial, 2), dec!(2300));
    assert_eq!(ladder_fee(&schedule, commercial, 3), dec!(2350));
    assert_eq!(ladder_fee(&schedule, commercial, 5), dec!(2350));
    assert_eq!(ladder_fee(&schedule, commercial, 6), dec!(2450));
    assert_eq!(ladder_fee(&schedule, commercial, 10), dec!(2450));
    assert_eq!(ladder_fee(&schedule, commercial, 11), dec!(2550));
    assert_eq!(ladder_fee(&schedule, commercial, 250), dec!(2550));
}

#[test]
fn ladder_fee_falls_back_to_the_last_rung_when_every_bound_is_exceeded() {
    let mut schedule = TariffSchedule::year_2025();
    // A custom schedule whose ladder has no unbounded rung.
    schedule.rates.other.party_ladder.pop();
    assert_eq!(
        ladder_fee(&schedule, DisputeCategory::Other, 500),
        dec!(1750)
    );
}
