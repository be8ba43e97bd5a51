use fuzzy_highlight::prelude::*;
use insta::assert_snapshot;
use rand::RngExt as _;

const HAYSTACK: &str = "cartwheel";

fn strip_tags(s: &str, tag: &str) -> String {
    s.replace(&format!("<{tag}>"), "").replace(&format!("</{tag}>"), "")
}

#[test]
fn highlight_default_tag() {
    let options = MatchOptions::default();
    assert_snapshot!(fuzzy_highlight("car", HAYSTACK, &options), @"<strong>car</strong>twheel");
    assert_snapshot!(fuzzy_highlight("CaR", HAYSTACK, &options), @"<strong>car</strong>twheel");
    assert_snapshot!(fuzzy_highlight("twl", HAYSTACK, &options), @"car<strong>tw</strong>hee<strong>l</strong>");
    assert_snapshot!(fuzzy_highlight("cwhl", HAYSTACK, &options), @"<strong>c</strong>art<strong>wh</strong>ee<strong>l</strong>");
}

#[test]
fn highlight_custom_tag() {
    let options = MatchOptionsBuilder::default().tag("foo").build().unwrap();
    assert_snapshot!(fuzzy_highlight("twl", HAYSTACK, &options), @"car<foo>tw</foo>hee<foo>l</foo>");
    assert_snapshot!(highlight(HAYSTACK, &[MatchRange::new(0, 3)], "b"), @"<b>car</b>twheel");
}

#[test]
fn highlight_no_match_is_unchanged() {
    assert_eq!(fuzzy_highlight("CaR", HAYSTACK, &MatchOptions::respect_case()), HAYSTACK);
    assert_eq!(fuzzy_highlight("lw", HAYSTACK, &MatchOptions::default()), HAYSTACK);
    assert_eq!(fuzzy_highlight("", HAYSTACK, &MatchOptions::default()), HAYSTACK);
    assert_eq!(highlight(HAYSTACK, &[], DEFAULT_TAG), HAYSTACK);
}

#[test]
fn highlight_unicode() {
    let options = MatchOptions::default();
    assert_snapshot!(fuzzy_highlight("语言", "php语言", &options), @"php<strong>语言</strong>");
    assert_snapshot!(fuzzy_highlight("格式工具", "非常简单的格式化工具", &options), @"非常简单的<strong>格式</strong>化<strong>工具</strong>");
}

#[test]
fn highlight_best_start() {
    let options = MatchOptionsBuilder::default()
        .strategy(ScanStrategy::BestStart)
        .tag("em")
        .build()
        .unwrap();
    assert_snapshot!(
        fuzzy_highlight("lao", "republica democratica popular de lao", &options),
        @"republica democratica popular de <em>lao</em>"
    );
    assert_snapshot!(
        fuzzy_highlight("lao", "republica democratica popular de lao", &MatchOptions::default()),
        @"repub<strong>l</strong>ic<strong>a</strong> dem<strong>o</strong>cratica popular de lao"
    );
}

#[test]
fn highlight_round_trip() {
    let mut rng = rand::rng();
    let alphabet = ['a', 'b', 'c', 'B', '<', '语', 'é'];
    for _ in 0..500 {
        let haystack: String = (0..rng.random_range(0..16))
            .map(|_| alphabet[rng.random_range(0..alphabet.len())])
            .collect();
        let needle: String = (0..rng.random_range(0..4))
            .map(|_| alphabet[rng.random_range(0..alphabet.len())])
            .collect();

        let result = fuzzy_match(&needle, &haystack, &MatchOptions::default());
        let out = highlight(&haystack, &result.ranges, "mark");
        assert_eq!(strip_tags(&out, "mark"), haystack, "{needle:?} in {haystack:?}");
        assert_eq!(out.matches("<mark>").count(), result.ranges.len());
        assert_eq!(try_highlight(&haystack, &result.ranges, "mark").as_deref(), Ok(out.as_str()));
    }
}

#[test]
fn highlight_rejects_bad_ranges() {
    let err = try_highlight(HAYSTACK, &[MatchRange::new(3, 5), MatchRange::new(2, 4)], "b").unwrap_err();
    assert_snapshot!(err.to_string(), @"Range MatchRange { start: 2, end: 4 } starts before previous end 5");
    assert!(matches!(
        try_highlight(HAYSTACK, &[MatchRange::new(9, 10)], "b"),
        Err(HighlightError::OutOfBounds(_, 9))
    ));
    assert!(matches!(
        try_highlight(HAYSTACK, &[MatchRange::new(1, 1)], "b"),
        Err(HighlightError::EmptyRange(_))
    ));
}
