//! Acceptance tests for Refined Soundex.

use libmetaphone::prelude::*;

#[test]
fn test_reference_codes() {
    let cases: &[(&str, &str)] = &[
        ("Caren", "C30908"),
        ("Carren", "C30908"),
        ("Karen", "K30908"),
        ("Hayers", "H093"),
        ("Hairs", "H093"),
        ("Braz", "B1905"),
        ("braço", "B190"),
        ("Bess", "B103"),
        ("Bes", "B103"),
    ];
    let encoder = RefinedSoundex;
    for (word, code) in cases {
        assert_eq!(&encoder.refined_soundex(word), code, "code of {:?}", word);
    }
}

#[test]
fn test_nonletters_are_ignored() {
    assert_eq!(refined_soundex("1234567890+-="), "");
    assert_eq!(refined_soundex(" Braz... "), "B1905");
    assert_eq!(refined_soundex(""), "");
}

#[test]
fn test_encoder_trait() {
    let encoder = RefinedSoundex;
    assert!(encoder.is_encoded_equals("Hayers", "Hairs"));
    assert!(encoder.is_encoded_equals("Caren", "Carren"));
    assert!(!encoder.is_encoded_equals("Caren", "Braz"));
}
