use clap::Parser;
use miette::{IntoDiagnostic, Result};
use std::fs::File;
use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{error, info, warn};
use tripsplit::application::export::spawn_export;
use tripsplit::application::trip::Trip;
use tripsplit::config::{DEFAULT_CURRENCY, DEFAULT_MAX_PARTICIPANTS, TripConfig};
use tripsplit::domain::ports::SharedReportExporter;
use tripsplit::infrastructure::file::{FileReportExporter, ReportFormat};
use tripsplit::interfaces::csv::expense_reader::ExpenseReader;
use tripsplit::interfaces::csv::report_writer::ReportWriter;
use tripsplit::logger::init_cli_logger;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Expenses CSV file (name, amount, paid_by, beneficiaries)
    input: PathBuf,

    /// Declare a participant. Repeat for each person. When omitted,
    /// participants are taken from the names used in the file.
    #[arg(short, long = "participant", value_name = "NAME")]
    participants: Vec<String>,

    /// Largest number of participants accepted
    #[arg(long, default_value_t = DEFAULT_MAX_PARTICIPANTS)]
    max_participants: usize,

    /// Currency symbol used in exported reports
    #[arg(long, default_value = DEFAULT_CURRENCY)]
    currency: String,

    /// Also export the trip report to this path
    #[arg(long, value_name = "PATH")]
    export: Option<PathBuf>,

    /// Format of the exported report
    #[arg(long, value_enum, default_value_t = ReportFormat::Json)]
    format: ReportFormat,

    /// Print net balances instead of settlements
    #[arg(long)]
    balances: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_cli_logger(cli.verbose);

    let mut trip = Trip::new(TripConfig {
        max_participants: cli.max_participants,
        currency: cli.currency,
    });
    for name in &cli.participants {
        trip.add_participant(name).into_diagnostic()?;
    }
    let enroll = cli.participants.is_empty();

    let file = File::open(&cli.input).into_diagnostic()?;
    let reader = ExpenseReader::new(file);
    for record in reader.expenses() {
        match record {
            Ok(record) => {
                if let Err(e) = record.add_to(&mut trip, enroll) {
                    warn!("Error recording expense: {}", e);
                }
            }
            Err(e) => {
                warn!("Error reading expense: {}", e);
            }
        }
    }

    let report = trip.report();
    info!(
        participants = trip.participants().len(),
        expenses = trip.expenses().len(),
        settlements = report.settlements.len(),
        total = %report.total,
        "trip settled"
    );

    {
        let stdout = io::stdout();
        let mut writer = ReportWriter::new(stdout.lock());
        if cli.balances {
            writer.write_balances(&report.balances).into_diagnostic()?;
        } else {
            writer.write_settlements(&report.settlements).into_diagnostic()?;
        }
    }

    if let Some(path) = cli.export {
        let exporter: SharedReportExporter = Arc::new(FileReportExporter::new(path, cli.format));
        // Awaited only so the runtime does not shut down mid-write.
        if let Err(e) = spawn_export(exporter, report).await {
            error!("Export task did not finish: {}", e);
        }
    }

    Ok(())
}
