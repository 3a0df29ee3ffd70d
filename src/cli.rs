// src/cli.rs
//
// Headless frontend: one refresh cycle (or a loop with --watch), printed as text,
// CSV or TSV on stdout. Missing-section warnings go to stderr.

use std::{
    io::{self, Write},
    path::PathBuf,
    thread,
};

use clap::{Parser, ValueEnum};
use color_eyre::eyre::{Result, WrapErr, eyre};

use crate::{
    config,
    engine::{self, Censo, types::SectionKind},
    progress::Progress,
    specs::StructuredTable,
    store::GridCache,
};

#[derive(Parser, Debug)]
#[command(name = "cli", version, about = "Painel NIR - Censo Diário (linha de comando)")]
pub struct Args {
    /// CSV export URL (overrides the config file)
    #[arg(long)]
    pub url: Option<String>,

    /// Config file; defaults to ./censo.toml when present
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Only print these sections (repeatable)
    #[arg(short, long, value_enum)]
    pub section: Vec<SectionArg>,

    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    pub format: Format,

    /// Keep refreshing at the configured interval
    #[arg(short, long)]
    pub watch: bool,

    /// Debug-level log file, warnings echoed to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum SectionArg {
    Altas,
    Vagas,
    Cirurgias,
    Transferencias,
}

impl From<SectionArg> for SectionKind {
    fn from(a: SectionArg) -> Self {
        match a {
            SectionArg::Altas => SectionKind::Altas,
            SectionArg::Vagas => SectionKind::Vagas,
            SectionArg::Cirurgias => SectionKind::Cirurgias,
            SectionArg::Transferencias => SectionKind::Transferencias,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Text,
    Csv,
    Tsv,
}

impl Format {
    fn delimiter(self) -> Option<u8> {
        match self {
            Format::Text => None,
            Format::Csv => Some(b','),
            Format::Tsv => Some(b'\t'),
        }
    }
}

/// Progress lines to stderr, so stdout stays clean for CSV/TSV.
struct StderrProgress;

impl Progress for StderrProgress {
    fn section_missing(&mut self, kind: SectionKind) {
        eprintln!("aviso: seção não encontrada: {}", kind.title());
    }
}

pub fn run() -> Result<()> {
    let args = Args::parse();

    let level = if args.verbose { ::log::LevelFilter::Debug } else { ::log::LevelFilter::Info };
    crate::log::init(level, args.verbose);

    let mut opts = config::load(args.config.as_deref()).wrap_err("loading config")?;
    if let Some(url) = &args.url {
        opts.source.url = url.clone();
    }

    let kinds: Vec<SectionKind> = if args.section.is_empty() {
        SectionKind::ALL.to_vec()
    } else {
        args.section.iter().map(|&a| a.into()).collect()
    };

    logf!("CLI: format={:?} sections={:?} watch={}", args.format, kinds, args.watch);

    let mut cache = GridCache::new(opts.refresh.cache_ttl());
    loop {
        let result = engine::refresh(&mut cache, &opts, Some(&mut StderrProgress));
        match result {
            Ok(censo) => print_censo(&censo, &kinds, args.format)?,
            Err(e) if args.watch => eprintln!("Dados indisponíveis: {e}"),
            Err(e) => return Err(eyre!("Dados indisponíveis: {e}")),
        }

        if !args.watch {
            return Ok(());
        }
        thread::sleep(opts.refresh.interval());
    }
}

fn print_censo(censo: &Censo, kinds: &[SectionKind], format: Format) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if format == Format::Text && kinds.len() == SectionKind::ALL.len() {
        let s = censo.summary();
        writeln!(out, "Altas realizadas (até 19h): {}", s.altas_realizadas)?;
        writeln!(out, "Altas previstas (24h):      {}", s.altas_previstas)?;
        writeln!(out, "Vagas reservadas:           {}", s.vagas_reservadas)?;
        writeln!(out, "Cirurgias programadas:      {}", s.cirurgias)?;
        writeln!(out, "Transferências/Saídas:      {}", s.transferencias)?;
        writeln!(out)?;
    }

    for &kind in kinds {
        let table = censo.table(kind);
        match format.delimiter() {
            None => write_text(&mut out, kind, &table, censo.is_missing(kind))?,
            Some(delim) => write_delimited(&mut out, kind, &table, delim)?,
        }
    }
    out.flush()?;
    Ok(())
}

fn write_text(out: &mut impl Write, kind: SectionKind, table: &StructuredTable, missing: bool) -> Result<()> {
    writeln!(out, "== {} ({} linha(s)) ==", kind.title(), table.len())?;
    if missing {
        writeln!(out, "Seção não encontrada na planilha.\n")?;
        return Ok(());
    }
    if table.is_empty() {
        writeln!(out, "Sem dados para exibir.\n")?;
        return Ok(());
    }

    let rows = table.text_rows();
    let widths: Vec<usize> = (0..table.ncols())
        .map(|ci| {
            rows.iter()
                .map(|r| r[ci].chars().count())
                .chain(std::iter::once(table.columns[ci].chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let line = |cells: &[String]| {
        cells
            .iter()
            .zip(&widths)
            .map(|(c, &w)| format!("{c:<w$}"))
            .collect::<Vec<_>>()
            .join("  ")
    };

    writeln!(out, "{}", line(table.columns.as_slice()))?;
    for r in &rows {
        writeln!(out, "{}", line(r.as_slice()))?;
    }
    writeln!(out)?;
    Ok(())
}

/// One block per section: a `# TITLE` line, then header + rows.
fn write_delimited(out: &mut impl Write, kind: SectionKind, table: &StructuredTable, delim: u8) -> Result<()> {
    writeln!(out, "# {}", kind.title())?;
    let mut w = csv::WriterBuilder::new().delimiter(delim).from_writer(&mut *out);
    w.write_record(&table.columns)?;
    for r in table.text_rows() {
        w.write_record(&r)?;
    }
    w.flush()?;
    drop(w);
    writeln!(out)?;
    Ok(())
}
