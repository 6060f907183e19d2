use super::*;

fn rom(filename: &str, attrs: &[&str]) -> RomFile {
    RomFile::new(filename, attrs.iter().map(|a| a.to_string()).collect())
}

#[test]
fn parse_strips_whitespace_and_keeps_order() {
    let prefs = PreferenceList::parse(" fr , europe ,usa");
    assert_eq!(prefs.tokens(), ["fr", "europe", "usa"]);
}

#[test]
fn parse_folds_tokens_to_lowercase() {
    let prefs = PreferenceList::parse("USA,Europe");
    assert_eq!(prefs.tokens(), ["usa", "europe"]);
}

#[test]
fn parse_drops_empty_tokens() {
    let prefs = PreferenceList::parse("fr,,usa,");
    assert_eq!(prefs.tokens(), ["fr", "usa"]);
}

#[test]
fn parse_empty_string_is_empty() {
    assert!(PreferenceList::parse("").is_empty());
    assert!(PreferenceList::parse(" , ").is_empty());
}

#[test]
fn display_joins_with_commas() {
    let prefs = PreferenceList::parse("fr, europe, usa");
    assert_eq!(prefs.to_string(), "fr,europe,usa");
}

#[test]
fn find_preferred_picks_first_matching_preference() {
    let records = [rom("FooBar (foo)", &["foo"]), rom("FooBar (bar)", &["bar"])];

    let winner = find_preferred(&records, &PreferenceList::parse("bar"));
    assert_eq!(winner, Some(&records[1]));

    let winner = find_preferred(&records, &PreferenceList::parse("foz,foo"));
    assert_eq!(winner, Some(&records[0]));
}

#[test]
fn find_preferred_returns_none_without_match() {
    let records = [rom("FooBar (foo)", &["foo"]), rom("FooBar (bar)", &["bar"])];
    assert_eq!(find_preferred(&records, &PreferenceList::parse("baz")), None);
}

#[test]
fn find_preferred_prefers_later_records_on_ties() {
    // both carry "usa"; the revision dump was listed later and should win
    let records = [
        rom("Game (USA)", &["usa"]),
        rom("Game (USA) (Rev 1)", &["usa", "rev1"]),
    ];
    let winner = find_preferred(&records, &PreferenceList::parse("usa"));
    assert_eq!(winner, Some(&records[1]));
}

#[test]
fn find_preferred_outer_loop_is_preference_order() {
    // "eu" outranks "usa" in the list even though the usa record comes later
    let records = [
        rom("Game (EU)", &["eu"]),
        rom("Game (USA)", &["usa"]),
    ];
    let winner = find_preferred(&records, &PreferenceList::parse("eu,usa"));
    assert_eq!(winner, Some(&records[0]));
}

#[test]
fn find_preferred_empty_inputs() {
    let records = [rom("Game (USA)", &["usa"])];
    assert_eq!(find_preferred(&records, &PreferenceList::parse("")), None);
    assert_eq!(
        find_preferred(&[], &PreferenceList::parse("usa")),
        None
    );
}

#[test]
fn find_preferred_is_idempotent() {
    let records = [
        rom("Game (USA)", &["usa"]),
        rom("Game (EU)", &["eu"]),
        rom("Game (USA) (Rev 1)", &["usa", "rev1"]),
    ];
    let prefs = PreferenceList::parse("usa");
    let first = find_preferred(&records, &prefs);
    let second = find_preferred(&records, &prefs);
    assert_eq!(first, second);
    assert_eq!(first, Some(&records[2]));
}
