//! End-to-end typographer behaviour

use etpgrf_engine::{EncodeMode, Rule, Typographer};
use proptest::prelude::*;

fn html(mode: EncodeMode) -> Typographer {
    Typographer::builder()
        .langs("ru")
        .mode(mode)
        .process_html(true)
        .build()
        .unwrap()
}

fn plain(mode: EncodeMode) -> Typographer {
    Typographer::builder().langs("ru").mode(mode).build().unwrap()
}

#[test]
fn test_html_nested_tags() {
    assert_eq!(
        html(EncodeMode::Mixed).process("<p>Текст с предлогом <b>в <i>доме</i></b>.</p>"),
        "<p>Текст с&nbsp;предлогом <b>в&nbsp;<i>доме</i></b>.</p>"
    );
}

#[test]
fn test_html_conjunctions_across_nodes() {
    assert_eq!(
        html(EncodeMode::Mixed)
            .process("<p>Союз и <b>слово</b> и еще один союз а <span>текст</span>.</p>"),
        "<p>Союз и&nbsp;<b>слово</b> и&nbsp;еще один союз а&nbsp;<span>текст</span>.</p>"
    );
}

#[test]
fn test_html_quotes_inside_node() {
    assert_eq!(
        html(EncodeMode::Mixed).process(
            "<div><p>Текст, а внутри <b>для проверки \"жирный\"</b> текст.</p></div>"
        ),
        "<div><p>Текст, а&nbsp;внутри <b>для&nbsp;проверки «жирный»</b> текст.</p></div>"
    );
}

#[test]
fn test_html_quotes_around_inline_tag() {
    assert_eq!(
        html(EncodeMode::Mixed).process("<p>Он сказал \"<b>да</b>\" и ушёл</p>"),
        "<p>Он сказал «<b>да</b>» и&nbsp;ушёл</p>"
    );
    assert_eq!(
        html(EncodeMode::Mixed).process("<p>\"<i>Онегин</i>\"</p><p>\"да\"</p>"),
        "<p>«<i>Онегин</i>»</p><p>«да»</p>"
    );
}

#[test]
fn test_markup_is_escaped_without_html_processing() {
    assert_eq!(
        plain(EncodeMode::Mixed)
            .process("<i>Текст \"без\" <b>HTML</b>, но с предлогом в доме.</i>"),
        "&lt;i&gt;Текст «без» &lt;b&gt;HTML&lt;/b&gt;, но&nbsp;с&nbsp;предлогом в&nbsp;доме.&lt;/i&gt;"
    );
}

#[test]
fn test_attributes_and_raw_elements_are_untouched() {
    assert_eq!(
        html(EncodeMode::Mixed).process("<a title=\"в доме\">в доме</a>"),
        "<a title=\"в доме\">в&nbsp;доме</a>"
    );
    assert_eq!(
        html(EncodeMode::Mixed).process("<pre>\"как есть\" в коде</pre><p>\"да\"</p>"),
        "<pre>\"как есть\" в коде</pre><p>«да»</p>"
    );
}

#[test]
fn test_unicode_html_output_stays_well_formed() {
    assert_eq!(
        html(EncodeMode::Unicode).process("<p>a < b &amp; \"c\"</p>"),
        "<p>a &lt; b &amp; «c»</p>"
    );
}

#[test]
fn test_disabling_quotes() {
    let typographer = Typographer::builder()
        .langs("ru")
        .mode(EncodeMode::Unicode)
        .quotes(false)
        .build()
        .unwrap();
    let out = typographer.process("Простой текст с \"кавычками\".");
    assert!(!out.contains(['«', '»']));
    assert!(out.contains('"'));
}

#[test]
fn test_disabling_unbreakables() {
    let typographer = Typographer::builder()
        .langs("ru")
        .mode(EncodeMode::Unicode)
        .unbreakables(Rule::Disabled)
        .build()
        .unwrap();
    assert_eq!(
        typographer.process("но с предлогом в доме"),
        "но с предлогом в доме"
    );
}

#[test]
fn test_disabling_hyphenation() {
    let word = "достопримечательности";
    assert_eq!(
        plain(EncodeMode::Unicode).process(word),
        "достопри\u{AD}мечательности"
    );
    assert_eq!(plain(EncodeMode::Mixed).process(word), "достопри&shy;мечательности");

    let typographer = Typographer::builder()
        .langs("ru")
        .mode(EncodeMode::Unicode)
        .hyphenation(false)
        .build()
        .unwrap();
    assert_eq!(typographer.process(word), word);
}

#[test]
fn test_english_typography() {
    let typographer = Typographer::builder()
        .langs("en")
        .mode(EncodeMode::Unicode)
        .build()
        .unwrap();
    assert_eq!(
        typographer.process("\"Read the book\" -- he said"),
        "\u{201C}Read the\u{A0}book\u{201D}\u{2014}he said"
    );
}

fn extract_tags(text: &str) -> Vec<&str> {
    let mut tags = Vec::new();
    let mut rest = text;
    while let Some(start) = rest.find('<') {
        let Some(len) = rest[start..].find('>') else {
            break;
        };
        tags.push(&rest[start..start + len + 1]);
        rest = &rest[start + len + 1..];
    }
    tags
}

fn document() -> impl Strategy<Value = String> {
    let tag = prop::sample::select(vec!["<p>", "</p>", "<b class=\"x\">", "</b>", "<br/>"]);
    let text = "[а-яА-Я \"]{1,12}";
    prop::collection::vec((tag, text), 0..12).prop_map(|parts| {
        parts
            .into_iter()
            .map(|(tag, text)| format!("{tag}{text}"))
            .collect()
    })
}

proptest! {
    #[test]
    fn html_processing_keeps_markup(doc in document()) {
        let out = html(EncodeMode::Mixed).process(&doc);
        prop_assert_eq!(extract_tags(&out), extract_tags(&doc));
    }

    #[test]
    fn processing_is_deterministic(text in "\\PC{0,120}") {
        let typographer = plain(EncodeMode::Mixed);
        prop_assert_eq!(typographer.process(&text), typographer.process(&text));
    }

    #[test]
    fn bare_unicode_pipeline_is_identity(text in "[^&]{0,120}") {
        let typographer = Typographer::builder()
            .langs("ru")
            .mode(EncodeMode::Unicode)
            .symbols(false)
            .quotes(false)
            .layout(false)
            .unbreakables(false)
            .hyphenation(false)
            .build()
            .unwrap();
        prop_assert_eq!(typographer.process(&text), text);
    }
}
