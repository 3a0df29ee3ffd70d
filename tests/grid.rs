// tests/grid.rs
//
// Decoding the CSV export into a grid.

use censo_nir::core::Grid;
use censo_nir::row;

#[test]
fn ragged_quoted_csv() {
    let text = "ALTAS HOSPITAL,SETOR,\"ALTAS DO DIA (ATÉ 19H)\",ALTAS PREVISTAS 24H\n\
                \"Hosp A, anexo\",UTI,3,5\n\
                VAGAS RESERVADAS\n\
                ,,\n";
    let g = Grid::from_csv(text).unwrap();

    assert_eq!(g.len(), 4);
    assert_eq!(g.max_width(), 4);
    assert_eq!(g.row(1), Some(row!["Hosp A, anexo", "UTI", "3", "5"].as_slice()));
    assert_eq!(g.cell(2, 0), "VAGAS RESERVADAS");
    assert_eq!(g.cell(2, 3), "");
    assert_eq!(g.cell(99, 0), "");
    assert_eq!(g.row(3), Some(row!["", "", ""].as_slice()));
}

#[test]
fn empty_text_is_empty_grid() {
    let g = Grid::from_csv("").unwrap();
    assert!(g.is_empty());
    assert_eq!(g.max_width(), 0);
}

#[test]
fn cells_are_kept_verbatim() {
    let g = Grid::from_csv("  Hosp A ,  007 ,1.5\n").unwrap();
    assert_eq!(g.row(0), Some(row!["  Hosp A ", "  007 ", "1.5"].as_slice()));
}
