use gridlobby::roster::Roster;
use gridlobby::test_util::sample_players;
use pretty_assertions::assert_eq;


#[test]
fn renders_usernames_joined_with_commas() {
    let mut roster = Roster::new();
    roster.replace(sample_players(&["a", "b"]));
    assert_eq!(roster.render(), "Players: a, b");
}

#[test]
fn empty_roster_renders_bare_prefix() {
    let roster = Roster::new();
    assert_eq!(roster.render(), "Players: ");
}

#[test]
fn update_replaces_rather_than_appends() {
    let mut roster = Roster::new();
    roster.replace(sample_players(&["x"]));
    roster.replace(sample_players(&["y", "z"]));
    assert_eq!(roster.render(), "Players: y, z");
}

#[test]
fn duplicates_and_order_are_preserved() {
    let mut roster = Roster::new();
    roster.replace(sample_players(&["b", "a", "b"]));
    assert_eq!(roster.render(), "Players: b, a, b");
}
