use std::path::PathBuf;
use std::process::ExitCode;

use chrono::{Datelike, Local, NaiveDate};
use clap::{Args, Parser, Subcommand, ValueEnum};
use rand::RngCore;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use thiserror::Error;
use tracing_subscriber::EnvFilter;

use fikcja_core::NrbFormat;
use fikcja_core::pesel::{BirthRecord, Sex};
use fikcja_generate::{
    BankCodeTable, GenerationError, GeneratorRegistry, NrbOptions, bank_code_table,
    generate_id_number, generate_nrb, generate_pesel, generate_regon9, generate_regon14,
    random_birth_record,
};

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Generation(#[from] GenerationError),
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

#[derive(Parser, Debug)]
#[command(
    name = "fikcja",
    version,
    about = "Generates fictitious but checksum-valid Polish identification numbers"
)]
struct Cli {
    /// Seed for a deterministic random stream.
    #[arg(long, global = true)]
    seed: Option<u64>,
    /// How many numbers to print, one per line.
    #[arg(long, global = true, default_value_t = 1)]
    count: u32,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// National identification number (11 digits).
    Pesel(PeselArgs),
    /// Identity card number (3 letters + 6 digits).
    Idcard,
    /// Business registry number, base form (9 digits).
    Regon9,
    /// Business registry number, local-unit form (14 digits).
    Regon14,
    /// Bank account number (26 digits, optionally IBAN-prefixed).
    Nrb(NrbArgs),
    /// List registered generator ids.
    List,
}

#[derive(Args, Debug)]
struct PeselArgs {
    /// Birth year (1800-2299); random when omitted.
    #[arg(long, conflicts_with_all = ["birth_date", "age"])]
    year: Option<i32>,
    /// Birth month (1-12); random when omitted.
    #[arg(long, conflicts_with = "birth_date")]
    month: Option<u32>,
    /// Birth day (1-31); random when omitted.
    #[arg(long, conflicts_with = "birth_date")]
    day: Option<u32>,
    /// Full birth date as YYYY-MM-DD.
    #[arg(long, value_name = "DATE")]
    birth_date: Option<NaiveDate>,
    /// Age in years; the year is derived from today, month and day random.
    #[arg(long, conflicts_with = "birth_date")]
    age: Option<u32>,
    /// Sex encoded in the serial parity digit.
    #[arg(long, value_enum, default_value_t = SexArg::Random)]
    sex: SexArg,
}

#[derive(Args, Debug)]
struct NrbArgs {
    /// Restrict to bank codes starting with this 4-digit prefix.
    #[arg(long, value_name = "PREFIX")]
    bank: Option<String>,
    /// Output shape.
    #[arg(long, value_enum, default_value_t = FormatArg::Compact)]
    format: FormatArg,
    /// Prepend the PL country code (IBAN form).
    #[arg(long, default_value_t = false)]
    iban: bool,
    /// Bank sort-code registry dump; defaults to the bundled table.
    #[arg(long, value_name = "PATH")]
    bank_file: Option<PathBuf>,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum SexArg {
    Female,
    Male,
    Random,
}

impl SexArg {
    fn fixed(self) -> Option<Sex> {
        match self {
            SexArg::Female => Some(Sex::Female),
            SexArg::Male => Some(Sex::Male),
            SexArg::Random => None,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum FormatArg {
    Compact,
    Spaced,
}

impl From<FormatArg> for NrbFormat {
    fn from(format: FormatArg) -> Self {
        match format {
            FormatArg::Compact => NrbFormat::Compact,
            FormatArg::Spaced => NrbFormat::Spaced,
        }
    }
}

fn main() -> ExitCode {
    init_logging();
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Błąd: {err}");
            ExitCode::FAILURE
        }
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn run(cli: Cli) -> Result<(), CliError> {
    let Cli {
        seed,
        count,
        command,
    } = cli;

    let mut rng: Box<dyn RngCore> = match seed {
        Some(seed) => {
            tracing::debug!(seed, "using seeded random stream");
            Box::new(ChaCha8Rng::seed_from_u64(seed))
        }
        None => Box::new(ChaCha8Rng::from_os_rng()),
    };

    match command {
        Command::Pesel(args) => {
            for _ in 0..count {
                let record = resolve_birth_record(&args, rng.as_mut())?;
                println!("{}", generate_pesel(&record, rng.as_mut())?);
            }
        }
        Command::Idcard => {
            for _ in 0..count {
                println!("{}", generate_id_number(rng.as_mut()));
            }
        }
        Command::Regon9 => {
            for _ in 0..count {
                println!("{}", generate_regon9(rng.as_mut()));
            }
        }
        Command::Regon14 => {
            for _ in 0..count {
                println!("{}", generate_regon14(rng.as_mut()));
            }
        }
        Command::Nrb(args) => {
            let table = load_table(args.bank_file.as_deref())?;
            let options = NrbOptions {
                bank_prefix: args.bank.clone(),
                format: args.format.into(),
                iban: args.iban,
            };
            for _ in 0..count {
                println!("{}", generate_nrb(&table, &options, rng.as_mut())?);
            }
        }
        Command::List => {
            let registry = GeneratorRegistry::new(bank_code_table().clone());
            for id in registry.ids() {
                println!("{id}");
            }
        }
    }
    Ok(())
}

fn load_table(path: Option<&std::path::Path>) -> Result<BankCodeTable, CliError> {
    let table = match path {
        Some(path) => BankCodeTable::load(path)?,
        None => bank_code_table().clone(),
    };
    tracing::debug!(codes = table.len(), "bank code table ready");
    Ok(table)
}

/// Resolves the birth data the same way the form did: an explicit date
/// wins, then explicit fields, then age, and anything left is randomized.
fn resolve_birth_record(args: &PeselArgs, rng: &mut dyn RngCore) -> Result<BirthRecord, CliError> {
    let mut record = random_birth_record(args.sex.fixed(), rng);

    if let Some(date) = args.birth_date {
        record.year = date.year();
        record.month = date.month();
        record.day = date.day();
        return Ok(record);
    }

    if let Some(age) = args.age {
        let current_year = Local::now().year();
        record.year = current_year
            .checked_sub(age as i32)
            .ok_or_else(|| CliError::InvalidConfig(format!("age out of range: {age}")))?;
    }
    if let Some(year) = args.year {
        record.year = year;
    }
    if let Some(month) = args.month {
        record.month = month;
    }
    if let Some(day) = args.day {
        record.day = day;
    }
    Ok(record)
}
