//! Character reference codec behaviour through the public API

use etpgrf_core::entities::{
    decode, encode, encode_with_mode_name, EncodeMap, EncodeMode, EncodePolicy, MIXED_SAFE,
};
use proptest::prelude::*;

#[test]
fn test_decode_basic_references() {
    assert_eq!(decode("&lt; &gt; &amp; &quot;"), "< > & \"");
    assert_eq!(decode("Hello world!"), "Hello world!");
    assert_eq!(decode("Привет типограф!"), "Привет типограф!");
    assert_eq!(
        decode("&nbsp;&ensp;&emsp;&thinsp;&zwj;&zwnj;"),
        "\u{A0}\u{2002}\u{2003}\u{2009}\u{200D}\u{200C}"
    );
    assert_eq!(decode("&laquo;&raquo; &bdquo;&ldquo;"), "«» „“");
    assert_eq!(decode("&#8381; &#x20BD;"), "₽ ₽");
}

#[test]
fn test_soft_hyphen_both_ways() {
    assert_eq!(encode("\u{00AD}", EncodeMode::Mnemonic), "&shy;");
    assert_eq!(decode("&shy;"), "\u{00AD}");
}

#[test]
fn test_alphabet_letters_are_never_encoded() {
    assert_eq!(encode("Привет", EncodeMode::Mnemonic), "Привет");
    assert_eq!(encode("Hello", EncodeMode::Mnemonic), "Hello");
    assert_eq!(encode("Ѣ", EncodeMode::Mnemonic), "Ѣ");
}

#[test]
fn test_markup_characters_by_mode() {
    assert_eq!(encode("<", EncodeMode::Mixed), "&lt;");
    assert_eq!(encode("<", EncodeMode::Unicode), "<");
    assert_eq!(encode("<", EncodeMode::Mnemonic), "&lt;");
    assert_eq!(encode_with_mode_name("<", "unknown"), "<");
}

#[test]
fn test_mnemonic_text() {
    assert_eq!(
        encode("Цена\u{A0}— 100\u{A0}₽ «со скидкой»…", EncodeMode::Mnemonic),
        "Цена&nbsp;&mdash; 100&nbsp;&#8381; &laquo;со скидкой&raquo;&hellip;"
    );
}

#[test]
fn test_encode_map_is_deterministic() {
    let legacy: &[(&str, &str)] = &[("amp", "&"), ("lang", "\u{2329}")];
    let modern: &[(&str, &str)] = &[("amp;", "&"), ("lang;", "\u{27E8}")];
    let legacy_reordered: &[(&str, &str)] = &[("lang", "\u{2329}"), ("amp", "&")];
    let modern_reordered: &[(&str, &str)] = &[("lang;", "\u{27E8}"), ("amp;", "&")];

    let first = EncodeMap::build(&[legacy, modern], &EncodePolicy::standard());
    let second = EncodeMap::build(
        &[legacy_reordered, modern_reordered],
        &EncodePolicy::standard(),
    );
    assert_eq!(first.get('\u{27E8}'), Some("&lang;"));
    assert_eq!(first.get('\u{2329}'), None);
    assert_eq!(first, second);
    assert!(EncodeMap::global().len() > 1000);
}

#[test]
fn test_safe_set_round_trip() {
    for &ch in MIXED_SAFE {
        let text = ch.to_string();
        let encoded = encode(&text, EncodeMode::Mixed);
        assert_ne!(encoded, text, "{ch:?} must be encoded in mixed mode");
        assert_eq!(decode(&encoded), text, "{ch:?} via {encoded}");
    }
}

proptest! {
    #[test]
    fn unicode_mode_is_identity(text in "\\PC{0,200}") {
        prop_assert_eq!(encode(&text, EncodeMode::Unicode), text.as_str());
    }

    #[test]
    fn mixed_mode_round_trips_typographic_text(text in "[а-яА-Я a-z,.!?\u{AD}\u{A0}\u{2009}<>&\"'«»—]{0,120}") {
        let encoded = encode(&text, EncodeMode::Mixed);
        prop_assert_eq!(decode(&encoded), text.as_str());
    }

    #[test]
    fn decode_without_ampersand_is_identity(text in "[^&]{0,200}") {
        prop_assert_eq!(decode(&text), text.as_str());
    }
}
