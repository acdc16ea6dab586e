use fikcja_generate::{BankCodeTable, GenerationError, bank_code_table};

const SAMPLE: &str = "\
1\t10101010\tNarodowy Bank Polski\t00-919\tWarszawa
2\t11402004\tmBank SA\t00-950\tWarszawa
3\t11402004\tmBank SA\t00-950\tWarszawa
4\t1140\tza krotki\t00-000\tNigdzie
5\tA1402004\tnie cyfra\t00-000\tNigdzie
notatka bez tabulatorow
";

#[test]
fn parse_extracts_deduped_eight_digit_codes() {
    let table = BankCodeTable::parse(SAMPLE).expect("parses");
    assert_eq!(table.len(), 2);
    assert_eq!(table.all(), ["10101010", "11402004"]);
}

#[test]
fn parse_of_empty_input_yields_empty_table() {
    let table = BankCodeTable::parse("").expect("parses");
    assert!(table.is_empty());
}

#[test]
fn matching_filters_by_prefix() {
    let table =
        BankCodeTable::new(["10101010", "11402004", "11402017"]).expect("valid codes");
    let hits: Vec<&str> = table.matching("1140").collect();
    assert_eq!(hits, ["11402004", "11402017"]);
    assert_eq!(table.matching("9999").count(), 0);
}

#[test]
fn explicit_codes_are_validated() {
    let result = BankCodeTable::new(["123"]);
    assert!(matches!(result, Err(GenerationError::BankData(_))));
}

#[test]
fn bundled_table_loads_and_is_well_formed() {
    let table = bank_code_table();
    assert!(!table.is_empty());
    assert!(
        table
            .all()
            .iter()
            .all(|code| code.len() == 8 && code.bytes().all(|b| b.is_ascii_digit()))
    );
    // The bundled dump carries a duplicate mBank row that must collapse.
    assert_eq!(table.matching("1140").count(), 2);
}

#[test]
fn load_of_missing_file_reports_bank_data_error() {
    let result = BankCodeTable::load(std::path::Path::new("does/not/exist.txt"));
    assert!(matches!(result, Err(GenerationError::BankData(_))));
}
