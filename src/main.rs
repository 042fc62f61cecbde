use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use log::info;

use cpu_schedule::config::SimulationConfig;
use cpu_schedule::loader::load_processes;
use cpu_schedule::models::Discipline;
use cpu_schedule::render::{render_json, write_reports};
use cpu_schedule::scheduler::WaitAccounting;
use cpu_schedule::workload::{generate, WorkloadSpec};

/// Discipline selection on the command line.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum DisciplineArg {
    /// First-come, first-serve
    Fcfs,
    /// Shortest-job-first
    Sjf,
    /// Priority with aging
    Priority,
    /// Round-robin
    Rr,
}

impl From<DisciplineArg> for Discipline {
    fn from(arg: DisciplineArg) -> Self {
        match arg {
            DisciplineArg::Fcfs => Discipline::Fcfs,
            DisciplineArg::Sjf => Discipline::Sjf,
            DisciplineArg::Priority => Discipline::Priority,
            DisciplineArg::Rr => Discipline::RoundRobin,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum AccountingArg {
    /// Cumulative service time minus arrival (textbook)
    Cumulative,
    /// Completion minus arrival minus burst, from the simulated slices
    Exact,
}

impl From<AccountingArg> for WaitAccounting {
    fn from(arg: AccountingArg) -> Self {
        match arg {
            AccountingArg::Cumulative => WaitAccounting::Cumulative,
            AccountingArg::Exact => WaitAccounting::Exact,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum Format {
    /// Title, Gantt chart and table per discipline
    #[default]
    Text,
    /// JSON array of reports
    Json,
}

/// Simulate CPU scheduling disciplines over a batch of processes
#[derive(Parser, Debug)]
#[command(name = "cpu-schedule", version)]
#[command(about = "Simulate FCFS, SJF, priority and round-robin scheduling", long_about = None)]
struct Args {
    /// Process file with rows `id,burst,arrival[,priority]`
    file: Option<PathBuf>,

    /// Discipline to run (repeatable); defaults to all four
    #[arg(short, long, value_enum)]
    discipline: Vec<DisciplineArg>,

    /// Round-robin quantum in ticks
    #[arg(short, long)]
    quantum: Option<i64>,

    /// Wait time accounting
    #[arg(short, long, value_enum)]
    accounting: Option<AccountingArg>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// JSON configuration file; command-line flags override it
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Generate this many random processes instead of reading a file
    #[arg(short, long, conflicts_with = "file")]
    generate: Option<usize>,

    /// Seed for --generate
    #[arg(short, long, default_value_t = 0, requires = "generate")]
    seed: u64,
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()))
        .init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => SimulationConfig::from_file(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => SimulationConfig::default(),
    };
    if !args.discipline.is_empty() {
        config.disciplines = args.discipline.iter().map(|&d| d.into()).collect();
    }
    if let Some(quantum) = args.quantum {
        config.quantum = quantum;
    }
    if let Some(accounting) = args.accounting {
        config.accounting = accounting.into();
    }
    config.validate().context("invalid settings")?;

    let processes = match (&args.file, args.generate) {
        (Some(path), _) => load_processes(path)
            .with_context(|| format!("loading processes from {}", path.display()))?,
        (None, Some(count)) => generate(&WorkloadSpec::new(count).with_seed(args.seed)),
        (None, None) => bail!("give a process file or --generate N"),
    };
    info!("scheduling {} process(es)", processes.len());

    let reports = config.run(&processes).context("invalid process records")?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match args.format {
        Format::Text => write_reports(&mut out, &reports)?,
        Format::Json => writeln!(out, "{}", render_json(&reports)?)?,
    }

    Ok(())
}
