use crate::Seed;
use crate::seed::hash_text;

#[test]
fn numeric_seed_is_verbatim() {
    assert_eq!(Seed::from(12345_u64).value(), 12345);
    assert_eq!(Seed::Number(0).value(), 0);
}

#[test]
fn numeric_text_resolves_to_number() {
    assert_eq!(Seed::from("12345").value(), 12345);
    assert_eq!(Seed::from(" 42 ").value(), 42);
}

#[test]
fn text_seed_hashes_deterministically() {
    let a = Seed::from("Kepler-452");
    let b = Seed::from(String::from("Kepler-452"));
    assert_eq!(a.value(), b.value());
    assert_eq!(a.value(), hash_text("Kepler-452"));
}

#[test]
fn text_seeds_are_case_sensitive() {
    assert_ne!(Seed::from("Kepler-452").value(), Seed::from("kepler-452").value());
}

#[test]
fn hashed_text_matches_its_numeric_value() {
    let text = Seed::from("Trappist-1");
    let number = Seed::from(text.value());
    assert_eq!(text.value(), number.value());
}

#[test]
fn negative_or_oversized_numbers_are_hashed() {
    assert_eq!(Seed::from("-1").value(), hash_text("-1"));
    assert_eq!(
        Seed::from("99999999999999999999999").value(),
        hash_text("99999999999999999999999")
    );
}

#[test]
fn display_distinguishes_kinds() {
    assert_eq!(Seed::from(7_u64).to_string(), "7");
    assert_eq!(Seed::from("seven").to_string(), "\"seven\"");
}

#[test]
fn serde_is_untagged() {
    let number: Seed = serde_json::from_str("12345").unwrap();
    let text: Seed = serde_json::from_str("\"Kepler-452\"").unwrap();
    assert_eq!(number, Seed::Number(12345));
    assert_eq!(text, Seed::Text("Kepler-452".to_string()));
}
