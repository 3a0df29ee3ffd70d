// tests/pipeline.rs
//
// Locate → slice → build over whole grids, and the refresh cycle around it.

mod common;

use std::cell::Cell;

use censo_nir::config::{AppOptions, SectionsConfig, SourceOptions};
use censo_nir::core::Grid;
use censo_nir::engine::types::SectionKind;
use censo_nir::engine::{Summary, refresh_with, run};
use censo_nir::error::FetchError;
use censo_nir::progress::{NullProgress, Progress};
use censo_nir::row;
use censo_nir::store::GridCache;

use common::*;

#[test]
fn four_sections_one_row_each() {
    let censo = run(&census_grid(), &SectionsConfig::default());

    assert!(censo.missing.is_empty());
    for kind in SectionKind::ALL {
        let t = censo.table(kind);
        assert_eq!(t.len(), 1, "{kind}");
        assert!(!t.is_empty());
    }

    assert_eq!(censo.altas[0].hospital, "Hosp A");
    assert_eq!(censo.vagas[0].setor, "Enfermaria");
    assert_eq!(censo.cirurgias[0].especialidade, "Ortopedia");
    assert!(censo.transferencias[0].is_total());
}

#[test]
fn summary_totals() {
    let censo = run(&census_grid(), &SectionsConfig::default());
    assert_eq!(
        censo.summary(),
        Summary {
            altas_realizadas: 3,
            altas_previstas: 5,
            vagas_reservadas: 2,
            cirurgias: 4,
            transferencias: 0,
        }
    );
}

#[test]
fn missing_section_leaves_others_intact() {
    let censo = run(&census_grid_without_vagas(), &SectionsConfig::default());

    assert_eq!(censo.missing.len(), 1);
    assert_eq!(censo.missing[0].section, SectionKind::Vagas);
    assert_eq!(censo.missing[0].section.title(), "VAGAS RESERVADAS");

    assert!(censo.table(SectionKind::Vagas).is_empty());
    assert!(censo.is_missing(SectionKind::Vagas));
    for kind in [SectionKind::Altas, SectionKind::Cirurgias, SectionKind::Transferencias] {
        assert!(!censo.table(kind).is_empty(), "{kind}");
    }
}

#[test]
fn rerun_is_identical() {
    let g = census_grid();
    let cfg = SectionsConfig::default();
    let a = run(&g, &cfg);
    let b = run(&g, &cfg);
    assert_eq!(a, b);
    for kind in SectionKind::ALL {
        assert_eq!(a.table(kind), b.table(kind));
    }
}

#[test]
fn sections_in_any_order() {
    let g = Grid::new(vec![
        row!["TRANSFERÊNCIAS/SAÍDAS"],
        row!["Transferência externa", "2"],
        row!["CIRURGIAS PROGRAMADAS (PRÓXIMO DIA)"],
        row!["Hosp C", "Cardio", "1"],
        row!["Hosp D", "Orto", "x"],
        row!["ALTAS HOSPITAL", "SETOR", "ALTAS DO DIA (ATÉ 19H)", "ALTAS PREVISTAS 24H"],
        row!["Hosp A", "UTI", "1", "2"],
        row!["Vagas Reservadas"],
        row!["Hosp B", "Enf", "3"],
    ]);
    let censo = run(&g, &SectionsConfig::default());

    assert!(censo.missing.is_empty());
    assert_eq!(censo.transferencias.len(), 1);
    assert_eq!(censo.cirurgias.len(), 2);
    assert_eq!(censo.cirurgias[1].quantidade, 0);
    assert_eq!(censo.altas.len(), 1);
    assert_eq!(censo.vagas.len(), 1);
    assert_eq!(censo.summary().transferencias, 2);
}

#[test]
fn huge_counts_do_not_overflow_summary() {
    let g = Grid::new(vec![
        row!["VAGAS RESERVADAS"],
        row!["Hosp A", "UTI", "9223372036854775807"],
        row!["Hosp B", "UTI", "1"],
    ]);
    let censo = run(&g, &SectionsConfig::default());
    assert_eq!(censo.vagas.len(), 2);
    assert_eq!(censo.summary().vagas_reservadas, i64::MAX);
}

#[test]
fn empty_grid_reports_every_section() {
    let censo = run(&Grid::default(), &SectionsConfig::default());
    assert_eq!(censo.missing.len(), 4);
    assert!(SectionKind::ALL.iter().all(|&k| censo.table(k).is_empty()));
}

#[derive(Default)]
struct Recorder {
    began: bool,
    finished: bool,
    done: Vec<(SectionKind, usize)>,
    missing: Vec<SectionKind>,
}

impl Progress for Recorder {
    fn begin(&mut self) {
        self.began = true;
    }
    fn section_done(&mut self, kind: SectionKind, rows: usize) {
        self.done.push((kind, rows));
    }
    fn section_missing(&mut self, kind: SectionKind) {
        self.missing.push(kind);
    }
    fn finish(&mut self) {
        self.finished = true;
    }
}

#[test]
fn refresh_reports_progress_and_uses_cache() {
    let opts = AppOptions::default();
    let mut cache = GridCache::new(opts.refresh.cache_ttl());
    let calls = Cell::new(0);
    let fetch = |_: &SourceOptions| -> Result<Grid, FetchError> {
        calls.set(calls.get() + 1);
        Ok(census_grid_without_vagas())
    };

    let mut rec = Recorder::default();
    let first = refresh_with(&mut cache, &opts, fetch, Some(&mut rec)).unwrap();
    assert!(rec.began && rec.finished);
    assert_eq!(rec.missing, vec![SectionKind::Vagas]);
    assert_eq!(rec.done.len(), 3);

    let second = refresh_with(&mut cache, &opts, fetch, None).unwrap();
    assert_eq!(calls.get(), 1, "second cycle inside the TTL is served from cache");
    assert_eq!(first, second);

    cache.invalidate();
    refresh_with(&mut cache, &opts, fetch, Some(&mut NullProgress)).unwrap();
    assert_eq!(calls.get(), 2);
}

#[test]
fn fetch_failure_yields_no_result() {
    let opts = AppOptions::default();
    let mut cache = GridCache::new(opts.refresh.cache_ttl());
    let mut rec = Recorder::default();

    let res = refresh_with(
        &mut cache,
        &opts,
        |src| Err(FetchError::Status { url: src.url.clone(), status: 503 }),
        Some(&mut rec),
    );

    match res {
        Err(FetchError::Status { status, .. }) => assert_eq!(status, 503),
        other => panic!("expected status error, got {other:?}"),
    }
    assert!(rec.finished);
    assert!(rec.done.is_empty() && rec.missing.is_empty());
    assert!(cache.entry().is_none());
}
