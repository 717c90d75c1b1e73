use formula_forge::{
    CHARGE_SYMBOL, ElementDatabase, ElementRecord, Error, Substance, SubstanceAttributes,
};
use std::collections::BTreeSet;

fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
    (a - b).abs() <= eps
}

fn attributes(formula: &str, name: &str, kind: &str, tags: &[&str]) -> SubstanceAttributes {
    SubstanceAttributes {
        formula: formula.to_string(),
        name: Some(name.to_string()),
        kind: kind.to_string(),
        tags: tags.iter().map(|t| t.to_string()).collect::<BTreeSet<_>>(),
    }
}

/// Symbols as reported alongside the charge pseudo-element.
fn symbols_with_charge(substance: &Substance) -> Vec<String> {
    substance
        .formula()
        .elements_with_charge()
        .into_iter()
        .map(|(symbol, _)| symbol)
        .collect()
}

#[test]
fn water_from_formula() {
    let elements = ElementDatabase::periodic_table();
    let substance = Substance::new("H2O", &elements).unwrap();

    assert_eq!(substance.formula(), "H2O");
    assert_eq!(substance.name(), "H2O");
    assert_eq!(substance.kind(), "");
    assert!(substance.tags().is_empty());
    assert!(approx_eq(substance.molar_mass(), 0.01801528, 1e-12));
    assert_eq!(substance.charge(), 0.0);
    assert_eq!(substance.symbols().collect::<Vec<_>>(), vec!["H", "O"]);
    assert_eq!(symbols_with_charge(&substance).len(), 2);
    assert_eq!(substance.coefficient("H"), 2.0);
    assert_eq!(substance.coefficient("O"), 1.0);
}

#[test]
fn sodium_cation_from_attributes() {
    let elements = ElementDatabase::periodic_table();
    let substance = Substance::from_attributes(
        attributes("Na+", "Na+(aq)", "aqueous", &["cation", "charged"]),
        &elements,
    )
    .unwrap();

    assert_eq!(substance.formula(), "Na+");
    assert_eq!(substance.name(), "Na+(aq)");
    assert_eq!(substance.kind(), "aqueous");
    assert_eq!(substance.tags().len(), 2);
    assert!(substance.tags().contains("cation"));
    assert!(substance.tags().contains("charged"));
    assert!(approx_eq(substance.molar_mass(), 0.022989769, 1e-12));
    assert_eq!(substance.charge(), 1.0);
    assert_eq!(symbols_with_charge(&substance), vec!["Na", "Z"]);
    assert_eq!(substance.coefficient("Na"), 1.0);
    assert_eq!(substance.coefficient(CHARGE_SYMBOL), 1.0);
}

#[test]
fn chloride_anion_from_attributes() {
    let elements = ElementDatabase::periodic_table();
    let substance = Substance::from_attributes(
        attributes("Cl-", "Cl-(aq)", "aqueous", &["anion", "charged"]),
        &elements,
    )
    .unwrap();

    assert_eq!(substance.formula(), "Cl-");
    assert_eq!(substance.name(), "Cl-(aq)");
    assert!(substance.tags().contains("anion"));
    assert!(approx_eq(substance.molar_mass(), 0.035453, 1e-12));
    assert_eq!(substance.charge(), -1.0);
    assert_eq!(substance.coefficient("Cl"), 1.0);
    assert_eq!(substance.coefficient("Z"), -1.0);
}

#[test]
fn carbonate_repeated_signs_become_signed_integer() {
    let elements = ElementDatabase::periodic_table();
    let substance = Substance::from_attributes(
        attributes("CO3--", "CO3--(aq)", "aqueous", &["anion", "charged"]),
        &elements,
    )
    .unwrap();

    assert_eq!(substance.formula(), "CO3-2");
    assert_eq!(substance.name(), "CO3--(aq)");
    assert!(approx_eq(substance.molar_mass(), 0.0600089, 1e-10));
    assert_eq!(substance.charge(), -2.0);
    assert_eq!(substance.symbols().collect::<Vec<_>>(), vec!["C", "O"]);
    assert_eq!(symbols_with_charge(&substance), vec!["C", "O", "Z"]);
    assert_eq!(substance.coefficient("C"), 1.0);
    assert_eq!(substance.coefficient("O"), 3.0);
    assert_eq!(substance.coefficient("Z"), -2.0);
}

#[test]
fn with_formula_keeps_name() {
    let elements = ElementDatabase::periodic_table();
    let substance = Substance::new("CaCO3", &elements)
        .unwrap()
        .with_formula("Ca(CO3)", &elements)
        .unwrap();

    assert_eq!(substance.formula(), "Ca(CO3)");
    assert_eq!(substance.name(), "CaCO3");
    assert_eq!(substance.kind(), "");
    assert!(substance.tags().is_empty());
    assert!(approx_eq(substance.molar_mass(), 0.1000869, 1e-10));
    assert_eq!(substance.charge(), 0.0);
    assert_eq!(substance.symbols().collect::<Vec<_>>(), vec!["Ca", "C", "O"]);
    assert_eq!(substance.coefficient("C"), 1.0);
    assert_eq!(substance.coefficient("Ca"), 1.0);
    assert_eq!(substance.coefficient("O"), 3.0);
}

#[test]
fn with_name_on_proton() {
    let elements = ElementDatabase::periodic_table();
    let substance = Substance::new("H+", &elements)
        .unwrap()
        .with_name("H+(aq)")
        .unwrap();

    assert_eq!(substance.formula(), "H+");
    assert_eq!(substance.name(), "H+(aq)");
    assert!(approx_eq(substance.molar_mass(), 0.00100794, 1e-12));
    assert_eq!(substance.charge(), 1.0);
    assert_eq!(symbols_with_charge(&substance), vec!["H", "Z"]);
}

#[test]
fn with_type_on_bicarbonate() {
    let elements = ElementDatabase::periodic_table();
    let substance = Substance::new("HCO3-", &elements)
        .unwrap()
        .with_type("aqueous");

    assert_eq!(substance.formula(), "HCO3-");
    assert_eq!(substance.name(), "HCO3-");
    assert_eq!(substance.kind(), "aqueous");
    assert!(approx_eq(substance.molar_mass(), 0.0610168, 1e-10));
    assert_eq!(substance.charge(), -1.0);
    assert_eq!(symbols_with_charge(&substance).len(), 4);
    assert_eq!(substance.coefficient("H"), 1.0);
    assert_eq!(substance.coefficient("C"), 1.0);
    assert_eq!(substance.coefficient("O"), 3.0);
}

#[test]
fn with_tags_on_ferric_iron() {
    let elements = ElementDatabase::periodic_table();
    let substance = Substance::new("Fe+++", &elements)
        .unwrap()
        .with_tags(["cation", "charged", "iron"]);

    assert_eq!(substance.formula(), "Fe+3");
    assert_eq!(substance.name(), "Fe+++");
    assert_eq!(substance.tags().len(), 3);
    assert!(substance.tags().contains("iron"));
    assert!(approx_eq(substance.molar_mass(), 0.055847, 1e-12));
    assert_eq!(substance.charge(), 3.0);
    assert_eq!(substance.coefficient("Fe"), 1.0);
    assert_eq!(substance.coefficient("Z"), 3.0);
}

#[test]
fn custom_symbols_in_extended_database() {
    let mut elements = ElementDatabase::periodic_table();
    elements.append(ElementRecord::new("Aa"));
    elements.append(ElementRecord::new("Bb"));

    let substance = Substance::new("AaBb2+", &elements).unwrap();
    assert_eq!(substance.formula(), "AaBb2+");
    assert_eq!(substance.name(), "AaBb2+");
    assert_eq!(substance.molar_mass(), 0.0);
    assert_eq!(substance.charge(), 1.0);
    assert_eq!(symbols_with_charge(&substance), vec!["Aa", "Bb", "Z"]);
    assert_eq!(substance.coefficient("Aa"), 1.0);
    assert_eq!(substance.coefficient("Bb"), 2.0);
    assert_eq!(substance.coefficient("Z"), 1.0);
}

#[test]
fn custom_symbols_loaded_from_toml() {
    let elements = ElementDatabase::load(Some(
        r#"
        [[element]]
        symbol = "Aa"
        atomic_weight = 0.01

        [[element]]
        symbol = "Bb"
        atomic_weight = 0.02
        "#,
    ))
    .unwrap();

    let substance = Substance::new("AaBb2+", &elements).unwrap();
    assert!(approx_eq(substance.molar_mass(), 0.05, 1e-12));
}

#[test]
fn substances_defined_in_toml() {
    #[derive(serde::Deserialize)]
    struct Document {
        substance: Vec<SubstanceAttributes>,
    }

    let document: Document = toml::from_str(
        r#"
        [[substance]]
        formula = "Ca++"
        name = "Ca+2(aq)"
        type = "aqueous"
        tags = ["cation"]

        [[substance]]
        formula = "CaCO3"
        name = "Calcite"
        type = "mineral"
        "#,
    )
    .unwrap();

    let elements = ElementDatabase::periodic_table();
    let substances = document
        .substance
        .into_iter()
        .map(|attributes| Substance::from_attributes(attributes, &elements))
        .collect::<Result<Vec<_>, Error>>()
        .unwrap();

    assert_eq!(substances[0].formula(), "Ca+2");
    assert_eq!(substances[0].uid(), "Ca++");
    assert_eq!(substances[1].kind(), "mineral");
    assert!(approx_eq(substances[1].molar_mass(), 0.1000869, 1e-10));
}

#[test]
fn bad_identifiers_fail() {
    assert!(Substance::default().with_uid("bad uid").is_err());
    assert!(Substance::default().with_name("bad name").is_err());
    assert!(Substance::default().with_uid("good-uid").is_ok());
}

#[test]
fn malformed_formulas_fail_without_partial_results() {
    let elements = ElementDatabase::periodic_table();
    for formula in ["Ca(CO3", "CO3)", "2H2O", "h2o", "Fe+-", "H2 O", "Fe+3Cl", "NaZ"] {
        let result = Substance::new(formula, &elements);
        assert!(matches!(result, Err(Error::Parse(_))), "formula {formula:?}");
    }
}

#[test]
fn charge_notations_give_equal_substances() {
    let elements = ElementDatabase::periodic_table();
    let build = |formula: &str| {
        Substance::new(formula, &elements)
            .unwrap()
            .with_uid("chloride")
            .unwrap()
            .with_name("Cl-(aq)")
            .unwrap()
    };

    assert_eq!(build("Cl-"), build("Cl-1"));
    assert_eq!(build("Cl-1").formula(), "Cl-");
    assert_eq!(build("Fe+++"), build("Fe+3"));
    assert_eq!(
        Substance::new("Fe-0", &elements).unwrap().formula(),
        Substance::new("Fe", &elements).unwrap().formula()
    );
}
