use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde_json::json;

use fikcja_core::pesel::{BirthRecord, Sex};
use fikcja_core::{NrbFormat, idcard, nrb, pesel, regon};
use fikcja_generate::{
    BankCodeTable, GenerationError, GeneratorRegistry, NrbOptions, generate_id_number,
    generate_nrb, generate_pesel, generate_regon9, generate_regon14, random_birth_record,
};

fn test_table() -> BankCodeTable {
    BankCodeTable::new(["10101010", "11402004", "11402017", "24901044"])
        .expect("valid codes")
}

#[test]
fn generated_pesels_validate_and_encode_sex() {
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    for _ in 0..200 {
        let record = random_birth_record(None, &mut rng);
        let value = generate_pesel(&record, &mut rng).expect("valid record");
        assert_eq!(value.len(), pesel::PESEL_LENGTH);
        pesel::validate(&value).expect("checksum holds");
        assert_eq!(pesel::sex_of(&value).expect("valid"), record.sex);
    }
}

#[test]
fn pesel_serial_parity_follows_requested_sex() {
    let mut rng = ChaCha8Rng::seed_from_u64(11);
    for sex in [Sex::Female, Sex::Male] {
        for _ in 0..50 {
            let record = random_birth_record(Some(sex), &mut rng);
            let value = generate_pesel(&record, &mut rng).expect("valid record");
            let parity_digit = value.as_bytes()[pesel::SEX_DIGIT_INDEX] - b'0';
            assert!(sex.parity_matches(parity_digit), "{value} for {sex}");
        }
    }
}

#[test]
fn pesel_rejects_years_outside_century_bands() {
    let mut rng = ChaCha8Rng::seed_from_u64(3);
    for year in [1799, 2300, 0, -44] {
        let record = BirthRecord {
            year,
            month: 5,
            day: 12,
            sex: Sex::Female,
        };
        let result = generate_pesel(&record, &mut rng);
        assert!(matches!(
            result,
            Err(GenerationError::Number(fikcja_core::Error::UnsupportedYear(_)))
        ));
    }
}

#[test]
fn pesel_encodes_fixed_date() {
    let mut rng = ChaCha8Rng::seed_from_u64(21);
    let record = BirthRecord {
        year: 2000,
        month: 1,
        day: 1,
        sex: Sex::Male,
    };
    let value = generate_pesel(&record, &mut rng).expect("valid record");
    assert!(value.starts_with("002101"), "century offset folded: {value}");
    pesel::validate(&value).expect("checksum holds");
}

#[test]
fn generated_id_numbers_validate() {
    let mut rng = ChaCha8Rng::seed_from_u64(13);
    for _ in 0..200 {
        let value = generate_id_number(&mut rng);
        assert_eq!(value.len(), idcard::ID_LENGTH);
        idcard::validate(&value).expect("checksum holds");
    }
}

#[test]
fn generated_regons_validate() {
    let mut rng = ChaCha8Rng::seed_from_u64(17);
    for _ in 0..200 {
        let regon9 = generate_regon9(&mut rng);
        regon::validate_regon9(&regon9).expect("9-digit checksum holds");

        let regon14 = generate_regon14(&mut rng);
        regon::validate_regon14(&regon14).expect("14-digit checksum holds");
        // The local-unit form extends a valid base REGON.
        regon::validate_regon9(&regon14[..9]).expect("base REGON holds");
    }
}

#[test]
fn generated_nrbs_validate() {
    let mut rng = ChaCha8Rng::seed_from_u64(19);
    let table = test_table();
    for _ in 0..100 {
        let value = generate_nrb(&table, &NrbOptions::default(), &mut rng).expect("table set");
        assert_eq!(value.len(), nrb::NRB_LENGTH);
        nrb::validate(&value).expect("mod 97 holds");
        assert!(table.all().iter().any(|code| value[2..].starts_with(code)));
    }
}

#[test]
fn nrb_bank_prefix_restricts_codes() {
    let mut rng = ChaCha8Rng::seed_from_u64(23);
    let table = test_table();
    let options = NrbOptions {
        bank_prefix: Some("1140".to_string()),
        ..NrbOptions::default()
    };
    for _ in 0..50 {
        let value = generate_nrb(&table, &options, &mut rng).expect("prefix present");
        assert!(value[2..].starts_with("1140"), "{value}");
    }
}

#[test]
fn nrb_unmatched_prefix_is_reported_not_panicked() {
    let mut rng = ChaCha8Rng::seed_from_u64(29);
    let table = test_table();
    let options = NrbOptions {
        bank_prefix: Some("9999".to_string()),
        ..NrbOptions::default()
    };
    let result = generate_nrb(&table, &options, &mut rng);
    assert!(matches!(
        result,
        Err(GenerationError::PrefixNotFound(prefix)) if prefix == "9999"
    ));
}

#[test]
fn nrb_empty_table_is_reported() {
    let mut rng = ChaCha8Rng::seed_from_u64(31);
    let table = BankCodeTable::default();
    let result = generate_nrb(&table, &NrbOptions::default(), &mut rng);
    assert!(matches!(result, Err(GenerationError::NoBankCodes)));
}

#[test]
fn nrb_formats_and_iban_prefix() {
    let mut rng = ChaCha8Rng::seed_from_u64(37);
    let table = test_table();

    let spaced = generate_nrb(
        &table,
        &NrbOptions {
            format: NrbFormat::Spaced,
            ..NrbOptions::default()
        },
        &mut rng,
    )
    .expect("table set");
    assert_eq!(spaced.len(), nrb::NRB_LENGTH + 6);
    let groups: Vec<&str> = spaced.split(' ').collect();
    assert_eq!(groups[0].len(), 2);
    assert!(groups[1..].iter().all(|group| group.len() == 4));
    nrb::validate(&spaced.replace(' ', "")).expect("mod 97 holds");

    let iban = generate_nrb(
        &table,
        &NrbOptions {
            iban: true,
            ..NrbOptions::default()
        },
        &mut rng,
    )
    .expect("table set");
    assert!(iban.starts_with("PL"));
    nrb::validate(&iban[2..]).expect("mod 97 holds");
}

#[test]
fn registry_registers_the_five_generators() {
    let registry = GeneratorRegistry::new(test_table());
    assert_eq!(
        registry.ids(),
        vec!["pl.idcard", "pl.nrb", "pl.pesel", "pl.regon14", "pl.regon9"]
    );
}

#[test]
fn registry_dispatches_with_json_params() {
    let registry = GeneratorRegistry::new(test_table());
    let mut rng = ChaCha8Rng::seed_from_u64(41);

    let value = registry
        .generate(
            "pl.pesel",
            Some(&json!({"year": 1987, "month": 12, "day": 24, "sex": "female"})),
            &mut rng,
        )
        .expect("valid params");
    assert!(value.starts_with("871224"));
    assert_eq!(pesel::sex_of(&value).expect("valid"), Sex::Female);

    let value = registry
        .generate(
            "pl.nrb",
            Some(&json!({"bank": "2490", "format": "spaced", "iban": true})),
            &mut rng,
        )
        .expect("valid params");
    assert!(value.starts_with("PL "));
    assert!(value.replace(' ', "")[4..].starts_with("2490"));
}

#[test]
fn registry_rejects_unknown_ids_and_bad_params() {
    let registry = GeneratorRegistry::new(test_table());
    let mut rng = ChaCha8Rng::seed_from_u64(43);

    assert!(matches!(
        registry.generate("pl.nip", None, &mut rng),
        Err(GenerationError::UnknownGenerator(_))
    ));
    assert!(matches!(
        registry.generate("pl.pesel", Some(&json!([1, 2, 3])), &mut rng),
        Err(GenerationError::InvalidParams(_))
    ));
    assert!(matches!(
        registry.generate("pl.pesel", Some(&json!({"sex": "unknown"})), &mut rng),
        Err(GenerationError::Number(fikcja_core::Error::InvalidSex(_)))
    ));
    assert!(matches!(
        registry.generate("pl.nrb", Some(&json!({"format": "dashed"})), &mut rng),
        Err(GenerationError::InvalidParams(_))
    ));
}

#[test]
fn seeded_streams_are_reproducible() {
    let registry = GeneratorRegistry::new(test_table());
    let mut first = ChaCha8Rng::seed_from_u64(99);
    let mut second = ChaCha8Rng::seed_from_u64(99);
    for id in registry.ids() {
        assert_eq!(
            registry.generate(id, None, &mut first).expect("defaults"),
            registry.generate(id, None, &mut second).expect("defaults"),
        );
    }
}
