// tests/builders.rs
//
// Shaping sliced rows into typed section records.

use censo_nir::row;
use censo_nir::specs::shaping::{self, Shaping, dedupe_columns, is_plausible_header};
use censo_nir::specs::{
    AltasRow, CirurgiaRow, SectionRecord, StructuredTable, TransferenciaRow, Value, VagasRow, altas, build,
    cirurgias, transferencias,
};

fn refs(rows: &[Vec<String>]) -> Vec<&[String]> {
    rows.iter().map(|r| r.as_slice()).collect()
}

#[test]
fn header_first_discharges() {
    let rows = vec![
        row!["ALTAS HOSPITAL", "SETOR", "ALTAS DO DIA (ATÉ 19H)", "ALTAS PREVISTAS 24H"],
        row!["Hosp A", "UTI", "3", "5"],
        row!["", "", ""],
    ];
    let out: Vec<AltasRow> = build(&refs(&rows), Shaping::HeaderFirst);
    assert_eq!(
        out,
        vec![AltasRow {
            hospital: s("Hosp A"),
            setor: s("UTI"),
            realizadas_ate_19h: 3,
            previstas_24h: 5,
        }]
    );
}

#[test]
fn header_first_maps_by_name_when_columns_move() {
    let rows = vec![
        row!["SETOR", "ALTAS HOSPITAL", "ALTAS PREVISTAS 24H", "ALTAS DO DIA (ATÉ 19H)"],
        row!["UTI", "Hosp A", "5", "3"],
    ];
    let out: Vec<AltasRow> = build(&refs(&rows), Shaping::HeaderFirst);
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].hospital, "Hosp A");
    assert_eq!(out[0].setor, "UTI");
    assert_eq!(out[0].realizadas_ate_19h, 3);
    assert_eq!(out[0].previstas_24h, 5);
}

#[test]
fn header_only_block_has_no_records() {
    let rows = vec![row!["ALTAS HOSPITAL", "SETOR", "ALTAS DO DIA (ATÉ 19H)", "ALTAS PREVISTAS 24H"]];
    let out: Vec<AltasRow> = build(&refs(&rows), Shaping::HeaderFirst);
    assert!(out.is_empty());
}

#[test]
fn discharge_rows_need_hospital_and_sector() {
    let rows = vec![
        row!["ALTAS HOSPITAL", "SETOR", "ALTAS DO DIA (ATÉ 19H)", "ALTAS PREVISTAS 24H"],
        row!["Hosp A", "", "1", "1"],
        row!["", "UTI", "1", "1"],
        row!["Hosp B", "Clínica", "abc", ""],
    ];
    let out: Vec<AltasRow> = build(&refs(&rows), Shaping::HeaderFirst);
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].hospital, "Hosp B");
    assert_eq!((out[0].realizadas_ate_19h, out[0].previstas_24h), (0, 0));
}

#[test]
fn positional_reserved_beds() {
    let rows = vec![row!["Hosp B", "Enfermaria", "2"]];
    let out: Vec<VagasRow> = build(&refs(&rows), Shaping::Positional);
    assert_eq!(
        out,
        vec![VagasRow { hospital: s("Hosp B"), setor: s("Enfermaria"), vagas_reservadas: 2 }]
    );
}

#[test]
fn positional_pads_short_rows() {
    let rows = vec![row!["Hosp B", "Enf"], row!["", "", "", "extra"]];
    let out: Vec<VagasRow> = build(&refs(&rows), Shaping::Positional);
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].vagas_reservadas, 0);
}

#[test]
fn adaptive_uses_header_when_present() {
    let rows = vec![row!["Hospital", "Setor", "Vagas"], row!["Hosp B", "Enf", "2"]];
    let out: Vec<VagasRow> = build(&refs(&rows), Shaping::Adaptive);
    assert_eq!(out, vec![VagasRow { hospital: s("Hosp B"), setor: s("Enf"), vagas_reservadas: 2 }]);

    let shaped = shaping::shape(&refs(&rows), Shaping::Adaptive, &VagasRow::SCHEMA);
    assert_eq!(shaped.columns, vec![s("HOSPITAL"), s("SETOR"), s("VAGAS_RESERVADAS")]);
}

#[test]
fn adaptive_finds_header_below_title_rows() {
    let rows = vec![row!["Atualizado 10h"], row!["UNIDADE", "SETOR", "QTD"], row!["Hosp B", "Enf", "2"]];
    let shaped = shaping::shape(&refs(&rows), Shaping::Adaptive, &VagasRow::SCHEMA);
    assert_eq!(shaped.columns, vec![s("HOSPITAL"), s("SETOR"), s("VAGAS_RESERVADAS")]);
    let out: Vec<VagasRow> = build(&refs(&rows), Shaping::Adaptive);
    assert_eq!(out, vec![VagasRow { hospital: s("Hosp B"), setor: s("Enf"), vagas_reservadas: 2 }]);

    let rows = vec![
        row!["Censo"],
        row!["Atualizado 10h"],
        row!["UNIDADE", "SETOR", "QTD"],
        row!["Hosp C", "UTI", "4"],
    ];
    let out: Vec<VagasRow> = build(&refs(&rows), Shaping::Adaptive);
    assert_eq!(out, vec![VagasRow { hospital: s("Hosp C"), setor: s("UTI"), vagas_reservadas: 4 }]);
}

#[test]
fn adaptive_ignores_header_past_third_row() {
    let rows = vec![
        row!["Hosp A", "UTI", "1"],
        row!["Hosp B", "Enf", "2"],
        row!["Hosp C", "Orto", "3"],
        row!["UNIDADE", "SETOR", "QTD"],
        row!["Hosp D", "Cardio", "4"],
    ];
    let shaped = shaping::shape(&refs(&rows), Shaping::Adaptive, &VagasRow::SCHEMA);
    assert_eq!(shaped.columns, vec![s("Col1"), s("Col2"), s("Col3")]);
    assert_eq!(shaped.rows.len(), 5);
    assert_eq!(shaped.rows[3], row!["UNIDADE", "SETOR", "QTD"]);
}

#[test]
fn positional_fallback_skips_columns_claimed_by_name() {
    let rows = vec![row!["ESPECIALIDADE", "X", "QTD"], row!["Ortopedia", "Hosp C", "4"]];
    let out: Vec<CirurgiaRow> = build(&refs(&rows), Shaping::Adaptive);
    assert_eq!(
        out,
        vec![CirurgiaRow { hospital: s(""), especialidade: s("Ortopedia"), quantidade: 4 }]
    );

    let shaped = shaping::shape(&refs(&rows), Shaping::Adaptive, &CirurgiaRow::SCHEMA);
    let projected = shaped.project(CirurgiaRow::SCHEMA.columns);
    assert_eq!(projected, vec![vec!["", "Ortopedia", "4"]]);
}

#[test]
fn totals_saturate_instead_of_overflowing() {
    let big = i64::MAX;
    let altas_rows = vec![
        AltasRow { hospital: s("A"), setor: s("UTI"), realizadas_ate_19h: big, previstas_24h: 1 },
        AltasRow { hospital: s("B"), setor: s("UTI"), realizadas_ate_19h: 1, previstas_24h: big },
    ];
    assert_eq!(altas::totals(&altas_rows), (big, big));

    let cir = vec![
        CirurgiaRow { hospital: s("A"), especialidade: s("Orto"), quantidade: big },
        CirurgiaRow { hospital: s("B"), especialidade: s("Orto"), quantidade: 3 },
    ];
    assert_eq!(cirurgias::total(&cir), big);

    let tr = vec![
        TransferenciaRow { descricao: s("Saídas"), valor: i64::MIN },
        TransferenciaRow { descricao: s("Óbitos"), valor: -1 },
    ];
    assert_eq!(transferencias::total(&tr), i64::MIN);
}

#[test]
fn adaptive_falls_back_to_synthetic_columns() {
    let rows = vec![row!["Hosp B", "Enf", "2"], row!["Hosp C", "UTI", "1", "x"]];
    let shaped = shaping::shape(&refs(&rows), Shaping::Adaptive, &VagasRow::SCHEMA);
    assert_eq!(shaped.columns, vec![s("Col1"), s("Col2"), s("Col3"), s("Col4")]);
    assert_eq!(shaped.rows[0], row!["Hosp B", "Enf", "2", ""]);

    let out: Vec<VagasRow> = build(&refs(&rows), Shaping::Adaptive);
    assert_eq!(out.len(), 2);
    assert_eq!(out[1].vagas_reservadas, 1);
}

#[test]
fn plausible_headers() {
    assert!(is_plausible_header(&row!["HOSPITAL", "SETOR"]));
    assert!(!is_plausible_header(&row!["HOSPITAL", ""]));
    assert!(!is_plausible_header(&row!["Hosp B", "Enf", "2"]));
}

#[test]
fn duplicate_columns_are_suffixed() {
    let out = dedupe_columns(vec![s("A"), s("A"), s("a"), s("B")]);
    assert_eq!(out, vec![s("A"), s("A_1"), s("a_2"), s("B")]);
}

#[test]
fn transfer_total_prefers_sheet_total_row() {
    let rows = vec![row!["Saídas", "3"], row!["Óbitos", "1"], row!["Total", "5"]];
    let out: Vec<TransferenciaRow> = build(&refs(&rows), Shaping::Positional);
    assert_eq!(transferencias::total(&out), 5);

    let rows = vec![row!["Saídas", "3"], row!["Óbitos", "1"]];
    let out: Vec<TransferenciaRow> = build(&refs(&rows), Shaping::Positional);
    assert_eq!(transferencias::total(&out), 4);
}

#[test]
fn structured_table_keeps_schema_order() {
    let recs = vec![VagasRow { hospital: s("Hosp B"), setor: s("Enf"), vagas_reservadas: 2 }];
    let t = StructuredTable::from_records(&recs);
    assert_eq!(t.columns, vec![s("HOSPITAL"), s("SETOR"), s("VAGAS_RESERVADAS")]);
    assert_eq!(t.rows[0], vec![Value::Text(s("Hosp B")), Value::Text(s("Enf")), Value::Int(2)]);
    assert_eq!(t.text_rows()[0], row!["Hosp B", "Enf", "2"]);
}

fn s(x: &str) -> String {
    x.to_string()
}
