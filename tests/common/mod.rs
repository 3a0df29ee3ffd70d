// tests/common/mod.rs
//
// Shared census fixtures.
#![allow(dead_code)]

use censo_nir::core::Grid;
use censo_nir::row;

/// All four sections, one data row each, in the sheet's usual order.
pub fn census_rows() -> Vec<Vec<String>> {
    vec![
        row!["ALTAS HOSPITAL", "SETOR", "ALTAS DO DIA (ATÉ 19H)", "ALTAS PREVISTAS 24H"],
        row!["Hosp A", "UTI", "3", "5"],
        row!["", "", "", ""],
        row!["VAGAS RESERVADAS"],
        row!["Hosp B", "Enfermaria", "2"],
        row!["CIRURGIAS PROGRAMADAS - PROXIMO DIA"],
        row!["Hosp C", "Ortopedia", "4"],
        row!["TRANSFERENCIAS/SAÍDAS"],
        row!["TOTAL", "0"],
    ]
}

pub fn census_grid() -> Grid {
    Grid::new(census_rows())
}

/// Same grid with the VAGAS title replaced by text no candidate recognizes.
pub fn census_grid_without_vagas() -> Grid {
    let mut rows = census_rows();
    rows[3] = row!["LEITOS BLOQUEADOS"];
    Grid::new(rows)
}

pub fn grid(rows: &[&[&str]]) -> Grid {
    Grid::new(rows.iter().map(|r| r.iter().map(|c| c.to_string()).collect()).collect())
}
