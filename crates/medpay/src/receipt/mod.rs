//! Freelance receipt (SMM) breakdown for a mediation fee.
//!
//! Mediators invoice through a serbest meslek makbuzu; what the tendered
//! fee represents depends on how it was quoted. The four treatment modes
//! cover the VAT-inclusive/exclusive and with/without-withholding
//! combinations, each derived independently for a legal-entity payer and
//! a natural-person payer. Amounts are kept at full precision; rounding
//! belongs to the rendering edge.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Statutory VAT rate on mediation receipts.
pub const VAT_RATE: Decimal = dec!(0.20);

/// Statutory income tax withholding rate for legal-entity payers.
pub const WITHHOLDING_RATE: Decimal = dec!(0.20);

/// VAT/withholding treatment the fee was quoted under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReceiptMode {
    VatInclusiveNoWithholding,
    VatInclusiveWithWithholding,
    VatExclusiveNoWithholding,
    VatExclusiveWithWithholding,
}

impl ReceiptMode {
    pub const ALL: [ReceiptMode; 4] = [
        ReceiptMode::VatInclusiveNoWithholding,
        ReceiptMode::VatInclusiveWithWithholding,
        ReceiptMode::VatExclusiveNoWithholding,
        ReceiptMode::VatExclusiveWithWithholding,
    ];

    /// Label used on the receipt options screen.
    pub fn display_label(&self) -> &'static str {
        match self {
            ReceiptMode::VatInclusiveNoWithholding => "KDV Dahil, Stopaj Yok",
            ReceiptMode::VatInclusiveWithWithholding => "KDV Dahil, Stopaj Var",
            ReceiptMode::VatExclusiveNoWithholding => "KDV Hariç, Stopaj Yok",
            ReceiptMode::VatExclusiveWithWithholding => "KDV Hariç, Stopaj Var",
        }
    }
}

/// Amounts derived for one payee track.
#[derive(Debug, Clone, Copy)]
struct TrackAmounts {
    gross: Decimal,
    withholding: Decimal,
    net: Decimal,
    vat: Decimal,
    collected: Decimal,
}

/// One row of the receipt table. `None` marks a combination the mode
/// does not define; renderers show it as "0,00".
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReceiptRow {
    pub label: &'static str,
    pub legal_entity: Option<Decimal>,
    pub natural_person: Option<Decimal>,
}

/// Row-by-row SMM breakdown for both payee tracks, in the fixed order
/// gross, withholding, net, VAT, total collected.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReceiptBreakdown {
    pub mode: ReceiptMode,
    pub rows: Vec<ReceiptRow>,
    /// Reserved for treatments that need a caveat; none of the four
    /// current modes set it.
    pub warning: Option<String>,
}

impl ReceiptBreakdown {
    pub fn calculate(fee: Decimal, mode: ReceiptMode) -> Self {
        let (legal, natural) = match mode {
            ReceiptMode::VatInclusiveWithWithholding => {
                // Fee is VAT-inclusive for both tracks.
                let gross = fee / (Decimal::ONE + VAT_RATE);
                let vat = gross * VAT_RATE;
                let withholding = gross * WITHHOLDING_RATE;
                (
                    TrackAmounts {
                        gross,
                        withholding,
                        net: gross - withholding,
                        vat,
                        collected: gross,
                    },
                    TrackAmounts {
                        gross,
                        withholding: Decimal::ZERO,
                        net: gross,
                        vat,
                        collected: gross + vat,
                    },
                )
            }
            ReceiptMode::VatInclusiveNoWithholding => {
                // Natural person tenders a VAT-inclusive fee; the legal
                // entity's figure is already the VAT-exclusive base and
                // withholds at the source.
                let legal_gross = fee;
                let legal_withholding = legal_gross * WITHHOLDING_RATE;
                let natural_gross = fee / (Decimal::ONE + VAT_RATE);
                (
                    TrackAmounts {
                        gross: legal_gross,
                        withholding: legal_withholding,
                        net: legal_gross - legal_withholding,
                        vat: legal_gross * VAT_RATE,
                        collected: legal_gross,
                    },
                    TrackAmounts {
                        gross: natural_gross,
                        withholding: Decimal::ZERO,
                        net: natural_gross,
                        vat: natural_gross * VAT_RATE,
                        collected: fee,
                    },
                )
            }
            ReceiptMode::VatExclusiveNoWithholding => {
                // The legal entity quotes the amount net of withholding;
                // gross is back-solved before VAT applies.
                let legal_gross = fee / (Decimal::ONE - WITHHOLDING_RATE);
                (
                    TrackAmounts {
                        gross: legal_gross,
                        withholding: legal_gross * WITHHOLDING_RATE,
                        net: fee,
                        vat: legal_gross * VAT_RATE,
                        collected: legal_gross,
                    },
                    TrackAmounts {
                        gross: fee,
                        withholding: Decimal::ZERO,
                        net: fee,
                        vat: fee * VAT_RATE,
                        collected: fee + fee * VAT_RATE,
                    },
                )
            }
            ReceiptMode::VatExclusiveWithWithholding => {
                // Fee is the VAT-exclusive base for both tracks.
                let vat = fee * VAT_RATE;
                let withholding = fee * WITHHOLDING_RATE;
                (
                    TrackAmounts {
                        gross: fee,
                        withholding,
                        net: fee - withholding,
                        vat,
                        collected: fee,
                    },
                    TrackAmounts {
                        gross: fee,
                        withholding: Decimal::ZERO,
                        net: fee,
                        vat,
                        collected: fee + vat,
                    },
                )
            }
        };

        Self {
            mode,
            rows: vec![
                ReceiptRow {
                    label: "Arabuluculuk Ücreti",
                    legal_entity: Some(legal.gross),
                    natural_person: Some(natural.gross),
                },
                ReceiptRow {
                    label: "Gelir Vergisi Stopajı",
                    legal_entity: Some(legal.withholding),
                    natural_person: Some(natural.withholding),
                },
                ReceiptRow {
                    label: "Net Ücret",
                    legal_entity: Some(legal.net),
                    natural_person: Some(natural.net),
                },
                ReceiptRow {
                    label: "KDV (%20)",
                    legal_entity: Some(legal.vat),
                    natural_person: Some(natural.vat),
                },
                ReceiptRow {
                    label: "Tahsil Edilecek Tutar",
                    legal_entity: Some(legal.collected),
                    natural_person: Some(natural.collected),
                },
            ],
            warning: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::RoundingStrategy;

    fn round2(amount: Decimal) -> Decimal {
        amount.round_dp_with_strategy(2, RoundingStrategy::MidpointNearestEven)
    }

    struct Track {
        gross: Decimal,
        withholding: Decimal,
        net: Decimal,
        vat: Decimal,
        collected: Decimal,
    }

    fn tracks(breakdown: &ReceiptBreakdown) -> (Track, Track) {
        let cell = |row: usize, legal: bool| {
            let row = &breakdown.rows[row];
            let amount = if legal {
                row.legal_entity
            } else {
                row.natural_person
            };
            amount.expect("defined modes fill every cell")
        };
        let track = |legal: bool| Track {
            gross: cell(0, legal),
            withholding: cell(1, legal),
            net: cell(2, legal),
            vat: cell(3, legal),
            collected: cell(4, legal),
        };
        (track(true), track(false))
    }

    #[test]
    fn rows_keep_the_statutory_order() {
        let breakdown =
            ReceiptBreakdown::calculate(dec!(1000), ReceiptMode::VatInclusiveNoWithholding);
        let labels: Vec<&str> = breakdown.rows.iter().map(|row| row.label).collect();
        assert_eq!(
            labels,
            [
                "Arabuluculuk Ücreti",
                "Gelir Vergisi Stopajı",
                "Net Ücret",
                "KDV (%20)",
                "Tahsil Edilecek Tutar",
            ]
        );
        assert!(breakdown.warning.is_none());
    }

    #[test]
    fn vat_inclusive_no_withholding_splits_the_natural_person_fee() {
        let breakdown =
            ReceiptBreakdown::calculate(dec!(1000), ReceiptMode::VatInclusiveNoWithholding);
        let (legal, natural) = tracks(&breakdown);

        assert_eq!(round2(natural.gross), dec!(833.33));
        assert_eq!(round2(natural.vat), dec!(166.67));
        assert_eq!(natural.withholding, Decimal::ZERO);
        assert_eq!(round2(natural.net), dec!(833.33));
        assert_eq!(natural.collected, dec!(1000));

        // The legal entity's figure is the VAT-exclusive base itself.
        assert_eq!(legal.gross, dec!(1000));
        assert_eq!(legal.withholding, dec!(200));
        assert_eq!(legal.net, dec!(800));
        assert_eq!(legal.vat, dec!(200));
        assert_eq!(legal.collected, dec!(1000));
    }

    #[test]
    fn vat_inclusive_with_withholding_shares_one_base() {
        let breakdown =
            ReceiptBreakdown::calculate(dec!(1200), ReceiptMode::VatInclusiveWithWithholding);
        let (legal, natural) = tracks(&breakdown);

        assert_eq!(legal.gross, dec!(1000));
        assert_eq!(natural.gross, dec!(1000));
        assert_eq!(legal.withholding, dec!(200));
        assert_eq!(natural.withholding, Decimal::ZERO);
        assert_eq!(legal.net, dec!(800));
        assert_eq!(natural.net, dec!(1000));
        assert_eq!(legal.collected, dec!(1000));
        assert_eq!(natural.collected, dec!(1200));
    }

    #[test]
    fn vat_exclusive_no_withholding_back_solves_the_legal_gross() {
        let breakdown =
            ReceiptBreakdown::calculate(dec!(800), ReceiptMode::VatExclusiveNoWithholding);
        let (legal, natural) = tracks(&breakdown);

        assert_eq!(legal.gross, dec!(1000));
        assert_eq!(legal.withholding, dec!(200));
        assert_eq!(legal.net, dec!(800));
        assert_eq!(legal.collected, dec!(1000));

        assert_eq!(natural.gross, dec!(800));
        assert_eq!(natural.vat, dec!(160));
        assert_eq!(natural.collected, dec!(960));
    }

    #[test]
    fn back_solved_gross_round_trips_to_the_net_input() {
        let net = dec!(1234.56);
        let breakdown = ReceiptBreakdown::calculate(net, ReceiptMode::VatExclusiveNoWithholding);
        let (legal, _) = tracks(&breakdown);
        assert_eq!(
            round2(legal.gross * (Decimal::ONE - WITHHOLDING_RATE)),
            round2(net)
        );
    }

    #[test]
    fn identities_hold_for_every_mode_and_track() {
        let fee = dec!(1234.56);
        for mode in ReceiptMode::ALL {
            let breakdown = ReceiptBreakdown::calculate(fee, mode);
            let (legal, natural) = tracks(&breakdown);
            for track in [&legal, &natural] {
                assert_eq!(
                    track.net,
                    track.gross - track.withholding,
                    "net identity broken in {mode:?}"
                );
                assert_eq!(
                    track.vat,
                    track.gross * VAT_RATE,
                    "VAT identity broken in {mode:?}"
                );
            }
            assert_eq!(natural.withholding, Decimal::ZERO);
        }
    }

    #[test]
    fn zero_fee_yields_all_zero_rows() {
        let breakdown =
            ReceiptBreakdown::calculate(Decimal::ZERO, ReceiptMode::VatExclusiveWithWithholding);
        for row in &breakdown.rows {
            assert_eq!(row.legal_entity, Some(Decimal::ZERO));
            assert_eq!(row.natural_person, Some(Decimal::ZERO));
        }
    }

    #[test]
    fn display_labels_cover_all_modes() {
        let labels: Vec<&str> = ReceiptMode::ALL
            .iter()
            .map(|mode| mode.display_label())
            .collect();
        assert_eq!(
            labels,
            [
                "KDV Dahil, Stopaj Yok",
                "KDV Dahil, Stopaj Var",
                "KDV Hariç, Stopaj Yok",
                "KDV Hariç, Stopaj Var",
            ]
        );
    }
}
