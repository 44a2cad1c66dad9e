use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use medpay::config::AppConfig;
use medpay::receipt::ReceiptMode;
use medpay::telemetry;
use rust_decimal::Decimal;

use crate::commands;
use crate::currency;
use crate::error::CliError;

#[derive(Parser, Debug)]
#[command(
    name = "medpay",
    about = "Statutory mediation fee calculator (2025 tariff)",
    version
)]
struct Cli {
    /// Emit results as JSON instead of human-readable tables
    #[arg(long, global = true)]
    json: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Assess the statutory mediation fee for a dispute
    Fee(FeeArgs),
    /// Break a mediation fee down into an SMM receipt
    Receipt(ReceiptArgs),
    /// Compute statutory deadline dates from a mediation start date
    Deadlines(DeadlineArgs),
}

#[derive(Args, Debug)]
pub(crate) struct FeeArgs {
    /// The parties reached a settlement agreement
    #[arg(long)]
    pub(crate) agreement: bool,
    /// The dispute concerns a monetary claim
    #[arg(long)]
    pub(crate) monetary: bool,
    /// Settlement amount in TL (Turkish notation such as 1.500.000,50 or plain digits)
    #[arg(long, value_parser = currency::parse_amount)]
    pub(crate) amount: Option<Decimal>,
    /// Number of parties to the dispute
    #[arg(long, value_parser = parse_party_count)]
    pub(crate) parties: u32,
    /// Dispute type label as selected on the tariff: "İşçi-İşveren", "Ticari",
    /// "Tüketici", "Ortaklığın Giderilmesi", "Kira, Komşu Hakkı, Kat Mülkiyeti",
    /// "Aile" or "Diğer"
    #[arg(long)]
    pub(crate) dispute_type: Option<String>,
}

#[derive(Args, Debug)]
pub(crate) struct ReceiptArgs {
    /// Mediation fee the receipt is issued for, in TL
    #[arg(long, value_parser = currency::parse_amount)]
    pub(crate) fee: Decimal,
    /// VAT/withholding treatment: kdv-dahil-stopaj-yok, kdv-dahil-stopaj-var,
    /// kdv-haric-stopaj-yok or kdv-haric-stopaj-var
    #[arg(long, value_parser = parse_mode)]
    pub(crate) mode: ReceiptMode,
}

#[derive(Args, Debug)]
pub(crate) struct DeadlineArgs {
    /// Mediation start date as DD.MM.YYYY
    #[arg(long, value_parser = parse_display_date)]
    pub(crate) start: Option<NaiveDate>,
    /// Restrict the output to one dispute track (exact name)
    #[arg(long)]
    pub(crate) track: Option<String>,
    /// List the configured dispute tracks and their week marks
    #[arg(long)]
    pub(crate) list: bool,
}

pub(crate) fn run() -> Result<(), CliError> {
    let cli = Cli::parse();
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    match cli.command {
        Command::Fee(args) => commands::run_fee(&config, args, cli.json),
        Command::Receipt(args) => commands::run_receipt(args, cli.json),
        Command::Deadlines(args) => commands::run_deadlines(args, cli.json),
    }
}

fn parse_party_count(raw: &str) -> Result<u32, String> {
    let count: u32 = raw
        .trim()
        .parse()
        .map_err(|_| format!("'{raw}' is not a whole number of parties"))?;
    if count == 0 {
        return Err("party count must be at least 1".to_string());
    }
    Ok(count)
}

fn parse_mode(raw: &str) -> Result<ReceiptMode, String> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "kdv-dahil-stopaj-yok" => Ok(ReceiptMode::VatInclusiveNoWithholding),
        "kdv-dahil-stopaj-var" => Ok(ReceiptMode::VatInclusiveWithWithholding),
        "kdv-haric-stopaj-yok" => Ok(ReceiptMode::VatExclusiveNoWithholding),
        "kdv-haric-stopaj-var" => Ok(ReceiptMode::VatExclusiveWithWithholding),
        _ => Err(format!(
            "unknown receipt mode '{raw}' (expected kdv-dahil-stopaj-yok, \
             kdv-dahil-stopaj-var, kdv-haric-stopaj-yok or kdv-haric-stopaj-var)"
        )),
    }
}

fn parse_display_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%d.%m.%Y")
        .map_err(|err| format!("failed to parse '{raw}' as DD.MM.YYYY ({err})"))
}
