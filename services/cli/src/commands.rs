use chrono::NaiveDate;
use medpay::config::AppConfig;
use medpay::deadline::{self, DisputeTrack};
use medpay::receipt::ReceiptBreakdown;
use medpay::tariff::{FeeAssessment, FeeRequest, TariffEngine, TariffSchedule};
use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::info;

use crate::cli::{DeadlineArgs, FeeArgs, ReceiptArgs};
use crate::currency::format_tl;
use crate::error::{CliError, ValidationError};

pub(crate) fn run_fee(config: &AppConfig, args: FeeArgs, json: bool) -> Result<(), CliError> {
    // The engine degrades a missing amount to "not assessable"; the shell
    // rejects it up front with a concrete message instead.
    if args.agreement && args.monetary && args.amount.is_none() {
        return Err(ValidationError::MissingSettlementAmount.into());
    }

    let schedule = TariffSchedule::for_year(config.tariff_year)?;
    let engine = TariffEngine::new(schedule);
    let request = FeeRequest {
        agreement_reached: args.agreement,
        monetary: args.monetary,
        amount: args.amount,
        party_count: args.parties,
        dispute_label: args.dispute_type,
    };

    let assessment = engine.assess(&request);
    info!(
        year = engine.schedule().year,
        parties = request.party_count,
        outcome = %assessment.summary(),
        "assessed mediation fee"
    );

    if json {
        println!("{}", serde_json::to_string_pretty(&assessment)?);
        return Ok(());
    }

    println!("Mediation fee assessment ({} tariff)", engine.schedule().year);
    match &assessment {
        FeeAssessment::Assessed(assessed) => {
            println!("Category: {}", assessed.category.canonical_label());
            println!("Basis: {}", assessed.basis.summary());
            println!("Fee: {} TL", format_tl(assessed.fee));
        }
        FeeAssessment::NotAssessable(reason) => {
            println!("No fee assessed: {}", reason.summary());
        }
    }
    Ok(())
}

pub(crate) fn run_receipt(args: ReceiptArgs, json: bool) -> Result<(), CliError> {
    let breakdown = ReceiptBreakdown::calculate(args.fee, args.mode);
    info!(mode = breakdown.mode.display_label(), "prepared SMM breakdown");

    if json {
        println!("{}", serde_json::to_string_pretty(&breakdown)?);
        return Ok(());
    }

    println!("SMM breakdown ({})", breakdown.mode.display_label());
    println!("{:<24} {:>16} {:>16}", "", "Tüzel Kişi", "Gerçek Kişi");
    for row in &breakdown.rows {
        println!(
            "{:<24} {:>16} {:>16}",
            row.label,
            cell(row.legal_entity),
            cell(row.natural_person)
        );
    }
    if let Some(warning) = &breakdown.warning {
        println!("Note: {warning}");
    }
    Ok(())
}

fn cell(amount: Option<Decimal>) -> String {
    amount.map(format_tl).unwrap_or_else(|| "0,00".to_string())
}

#[derive(Debug, Serialize)]
struct TrackDeadlinesView {
    track: &'static str,
    deadlines: Vec<WeekDateView>,
}

#[derive(Debug, Serialize)]
struct WeekDateView {
    week: u32,
    date: NaiveDate,
}

pub(crate) fn run_deadlines(args: DeadlineArgs, json: bool) -> Result<(), CliError> {
    if args.list {
        if json {
            println!("{}", serde_json::to_string_pretty(deadline::tracks())?);
            return Ok(());
        }
        for track in deadline::tracks() {
            let weeks: Vec<String> = track
                .week_offsets
                .iter()
                .map(|week| week.to_string())
                .collect();
            println!("- {} (hafta: {})", track.name, weeks.join(", "));
        }
        return Ok(());
    }

    let start = args.start.ok_or(ValidationError::MissingStartDate)?;
    let selected: Vec<&DisputeTrack> = match &args.track {
        Some(name) => {
            let track = deadline::tracks()
                .iter()
                .find(|track| track.name == *name)
                .ok_or_else(|| ValidationError::UnknownTrack(name.clone()))?;
            vec![track]
        }
        None => deadline::tracks().iter().collect(),
    };

    let dates = deadline::week_dates(start);
    info!(start = %start, tracks = selected.len(), "computed deadline schedule");

    if json {
        let views: Vec<TrackDeadlinesView> = selected
            .iter()
            .map(|track| track_view(track, &dates))
            .collect();
        println!("{}", serde_json::to_string_pretty(&views)?);
        return Ok(());
    }

    println!("Deadline schedule from {}", start.format("%d.%m.%Y"));
    for track in selected {
        println!();
        println!("{}", track.name);
        for (&week, &date) in &dates {
            if deadline::applies_to(track.name, week) {
                println!("- {}. hafta: {}", week, date.format("%d.%m.%Y"));
            }
        }
    }
    Ok(())
}

fn track_view(track: &DisputeTrack, dates: &BTreeMap<u32, NaiveDate>) -> TrackDeadlinesView {
    TrackDeadlinesView {
        track: track.name,
        deadlines: dates
            .iter()
            .filter(|(week, _)| deadline::applies_to(track.name, **week))
            .map(|(&week, &date)| WeekDateView { week, date })
            .collect(),
    }
}
