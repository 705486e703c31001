use super::*;

#[test]
fn choice_is_trimmed() {
    assert_eq!(neighborhood_choice("  Part Alta ").map(|n| n.to_string()), Ok("Part Alta".to_owned()));
}

#[test]
fn blank_choice_is_rejected() {
    assert_eq!(neighborhood_choice(""), Err("Choose a neighborhood."));
    assert_eq!(neighborhood_choice("   "), Err("Choose a neighborhood."));
}

#[test]
fn every_listed_neighborhood_parses() {
    for name in NEIGHBORHOODS {
        assert!(neighborhood_choice(name).is_ok(), "{name}");
    }
}

#[test]
fn neighborhood_list_has_no_duplicates() {
    let mut names = NEIGHBORHOODS.to_vec();
    names.sort_unstable();
    names.dedup();
    assert_eq!(names.len(), NEIGHBORHOODS.len());
}
