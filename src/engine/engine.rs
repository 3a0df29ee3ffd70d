// src/engine/engine.rs
use crate::config::options::{AppOptions, SectionsConfig, SourceOptions};
use crate::core::{Grid, net};
use crate::error::{FetchError, SectionNotFound};
use crate::progress::Progress;
use crate::specs::{
    self, AltasRow, CirurgiaRow, StructuredTable, TransferenciaRow, VagasRow,
    altas, cirurgias, transferencias, vagas,
};
use crate::store::GridCache;

use super::locate::{locate_all, section_ranges};
use super::slice::slice_rows;
use super::types::*;

/// Everything one refresh cycle produces from one grid.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Censo {
    pub altas: Vec<AltasRow>,
    pub vagas: Vec<VagasRow>,
    pub cirurgias: Vec<CirurgiaRow>,
    pub transferencias: Vec<TransferenciaRow>,
    /// Resolved section markers, sorted by row.
    pub markers: Vec<SectionMarker>,
    pub missing: Vec<SectionNotFound>,
}

/// Headline numbers for the dashboard cards.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Summary {
    pub altas_realizadas: i64,
    pub altas_previstas: i64,
    pub vagas_reservadas: i64,
    pub cirurgias: i64,
    pub transferencias: i64,
}

impl Censo {
    pub fn summary(&self) -> Summary {
        let (altas_realizadas, altas_previstas) = altas::totals(&self.altas);
        Summary {
            altas_realizadas,
            altas_previstas,
            vagas_reservadas: vagas::total(&self.vagas),
            cirurgias: cirurgias::total(&self.cirurgias),
            transferencias: transferencias::total(&self.transferencias),
        }
    }

    pub fn table(&self, kind: SectionKind) -> StructuredTable {
        match kind {
            SectionKind::Altas => StructuredTable::from_records(&self.altas),
            SectionKind::Vagas => StructuredTable::from_records(&self.vagas),
            SectionKind::Cirurgias => StructuredTable::from_records(&self.cirurgias),
            SectionKind::Transferencias => StructuredTable::from_records(&self.transferencias),
        }
    }

    pub fn row_count(&self, kind: SectionKind) -> usize {
        match kind {
            SectionKind::Altas => self.altas.len(),
            SectionKind::Vagas => self.vagas.len(),
            SectionKind::Cirurgias => self.cirurgias.len(),
            SectionKind::Transferencias => self.transferencias.len(),
        }
    }

    pub fn is_missing(&self, kind: SectionKind) -> bool {
        self.missing.iter().any(|m| m.section == kind)
    }
}

/// Locate → slice → build. Pure: the same grid and config always give the same result.
pub fn run(grid: &Grid, sections: &SectionsConfig) -> Censo {
    let located = locate_all(grid, sections);
    let ranges = section_ranges(&located.markers, sections, grid.len());

    let mut censo = Censo {
        markers: located.markers,
        missing: located.missing,
        ..Censo::default()
    };

    for range in ranges {
        let rows = slice_rows(grid, range.rows.start, range.rows.end);
        let shaping = sections.rule(range.kind).shaping;
        logd!("Run: {} rows {:?} → {} non-blank", range.kind, range.rows, rows.len());

        match range.kind {
            SectionKind::Altas => censo.altas = specs::build(&rows, shaping),
            SectionKind::Vagas => censo.vagas = specs::build(&rows, shaping),
            SectionKind::Cirurgias => censo.cirurgias = specs::build(&rows, shaping),
            SectionKind::Transferencias => censo.transferencias = specs::build(&rows, shaping),
        }
    }
    censo
}

/// One full refresh cycle against the configured sheet.
pub fn refresh(
    cache: &mut GridCache,
    opts: &AppOptions,
    progress: Option<&mut dyn Progress>,
) -> Result<Censo, FetchError> {
    refresh_with(cache, opts, net::fetch_grid, progress)
}

/// [`refresh`] with the fetch injected. A fetch failure ends the cycle with no
/// partial result.
pub fn refresh_with<F>(
    cache: &mut GridCache,
    opts: &AppOptions,
    fetch: F,
    mut progress: Option<&mut dyn Progress>,
) -> Result<Censo, FetchError>
where
    F: FnOnce(&SourceOptions) -> Result<Grid, FetchError>,
{
    if let Some(p) = progress.as_deref_mut() {
        p.begin();
        p.log("Buscando planilha…");
    }

    let grid = match cache.get_or_fetch(|| fetch(&opts.source)) {
        Ok(g) => g,
        Err(e) => {
            loge!("Refresh: fetch failed: {e}");
            if let Some(p) = progress.as_deref_mut() {
                p.log(&format!("Dados indisponíveis: {e}"));
                p.finish();
            }
            return Err(e);
        }
    };

    let censo = run(&grid, &opts.sections);

    for kind in SectionKind::ALL {
        if censo.is_missing(kind) {
            logw!("Refresh: section missing: {kind}");
        }
        if let Some(p) = progress.as_deref_mut() {
            if censo.is_missing(kind) {
                p.section_missing(kind);
            } else {
                p.section_done(kind, censo.row_count(kind));
            }
        }
    }

    logf!(
        "Refresh: OK grid={} rows, altas={} vagas={} cirurgias={} transferencias={} missing={}",
        grid.len(),
        censo.altas.len(),
        censo.vagas.len(),
        censo.cirurgias.len(),
        censo.transferencias.len(),
        censo.missing.len()
    );

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }
    Ok(censo)
}
