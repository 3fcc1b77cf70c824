use super::*;

fn draft(title: &str, description: &str, tags: &[&str]) -> MethodDraft {
    MethodDraft {
        title: title.to_owned(),
        description: description.to_owned(),
        tags: tags.iter().map(|&t| t.to_owned()).collect(),
    }
}

// =============================================================
// Seed list
// =============================================================

#[test]
fn seeded_has_eight_records_in_order() {
    let state = MethodsState::seeded();
    assert_eq!(state.items.len(), 8);
    let ids: Vec<MethodId> = state.items.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![1, 2, 3, 4, 5, 6, 7, 8]);
    assert_eq!(state.items[0].title, "Design Thinking");
    assert_eq!(state.items[7].title, "Heuristic Evaluation");
}

#[test]
fn seeded_records_have_tags_and_no_marker() {
    for record in MethodsState::seeded().items {
        assert!(!record.tags.is_empty(), "{} has no tags", record.title);
        assert!(!record.recently_added);
    }
}

// =============================================================
// matches_query
// =============================================================

#[test]
fn empty_query_matches_everything() {
    for record in MethodsState::seeded().items {
        assert!(matches_query(&record, ""));
    }
}

#[test]
fn query_matches_title_case_insensitively() {
    let state = MethodsState::seeded();
    assert!(matches_query(&state.items[0], "design thinking"));
    assert!(matches_query(&state.items[0], "DESIGN"));
    assert!(matches_query(&state.items[0], "Thin"));
}

#[test]
fn query_matches_description_substring() {
    let state = MethodsState::seeded();
    // "pontos de dor" appears only in User Journey Mapping's description.
    assert!(matches_query(&state.items[1], "pontos de dor"));
    assert!(!matches_query(&state.items[0], "pontos de dor"));
}

#[test]
fn query_matches_any_tag() {
    let record = draft_record(42, &["empatia", "inovação"]);
    assert!(matches_query(&record, "EMPATIA"));
    assert!(matches_query(&record, "inova"));
    assert!(!matches_query(&record, "teste"));
}

// =============================================================
// filtered
// =============================================================

#[test]
fn empty_query_returns_full_list_unchanged() {
    let state = MethodsState::seeded();
    assert_eq!(state.filtered(""), state.items);
}

#[test]
fn filtered_preserves_original_order() {
    let state = MethodsState::seeded();
    let ids: Vec<MethodId> = state.filtered("teste").iter().map(|r| r.id).collect();
    // Only A/B Testing and Usability Testing carry the "teste" tag.
    assert_eq!(ids, vec![4, 7]);
}

#[test]
fn filtered_partitions_by_containment() {
    let state = MethodsState::seeded();
    let query = "usu";
    let returned = state.filtered(query);
    for record in &returned {
        assert!(matches_query(record, query), "{} should match", record.title);
    }
    for record in &state.items {
        if !returned.contains(record) {
            assert!(!matches_query(record, query), "{} was wrongly excluded", record.title);
        }
    }
    assert!(!returned.is_empty());
    assert!(returned.len() < state.items.len());
}

#[test]
fn filtered_no_matches_returns_empty() {
    assert!(MethodsState::seeded().filtered("zzzzzz").is_empty());
}

// =============================================================
// create
// =============================================================

#[test]
fn create_prepends_with_marker_and_fresh_id() {
    let mut state = MethodsState::seeded();
    let id = state.create(&draft("Tree Testing", "Valida a arquitetura.", &["teste"]));
    assert_eq!(id, 9);
    assert_eq!(state.items.len(), 9);
    assert_eq!(state.items[0].id, 9);
    assert_eq!(state.items[0].title, "Tree Testing");
    assert!(state.items[0].recently_added);
}

#[test]
fn create_on_empty_list_starts_at_one() {
    let mut state = MethodsState::default();
    let id = state.create(&draft("T", "D", &["a"]));
    assert_eq!(id, 1);
}

#[test]
fn create_twice_allocates_distinct_ids() {
    let mut state = MethodsState::seeded();
    let first = state.create(&draft("A", "D", &["a"]));
    let second = state.create(&draft("B", "D", &["b"]));
    assert_ne!(first, second);
    assert_eq!(second, first + 1);
}

#[test]
fn create_stores_raw_field_values() {
    let mut state = MethodsState::default();
    state.create(&draft("  Padded  ", " D ", &["a"]));
    assert_eq!(state.items[0].title, "  Padded  ");
    assert_eq!(state.items[0].description, " D ");
}

// =============================================================
// apply_edit
// =============================================================

#[test]
fn apply_edit_replaces_fields_preserving_id() {
    let mut state = MethodsState::seeded();
    let applied = state.apply_edit(3, &draft("Proto-personas", "Versão leve.", &["usuário"]));
    assert!(applied);
    let record = state.items.iter().find(|r| r.id == 3).expect("record 3");
    assert_eq!(record.title, "Proto-personas");
    assert_eq!(record.description, "Versão leve.");
    assert_eq!(record.tags, vec!["usuário"]);
}

#[test]
fn apply_edit_preserves_recent_marker() {
    let mut state = MethodsState::seeded();
    let id = state.create(&draft("Fresh", "D", &["a"]));
    assert!(state.apply_edit(id, &draft("Renamed", "D2", &["b"])));
    assert!(state.items[0].recently_added, "edit must not clear the marker");
}

#[test]
fn apply_edit_unknown_id_returns_false_without_changes() {
    let mut state = MethodsState::seeded();
    let before = state.clone();
    assert!(!state.apply_edit(999, &draft("X", "Y", &["z"])));
    assert_eq!(state, before);
}

// =============================================================
// clear_recent
// =============================================================

#[test]
fn clear_recent_clears_marker() {
    let mut state = MethodsState::seeded();
    let id = state.create(&draft("Fresh", "D", &["a"]));
    state.clear_recent(id);
    assert!(!state.items[0].recently_added);
}

#[test]
fn clear_recent_is_idempotent() {
    let mut state = MethodsState::seeded();
    let id = state.create(&draft("Fresh", "D", &["a"]));
    state.clear_recent(id);
    state.clear_recent(id);
    assert!(!state.items[0].recently_added);
}

#[test]
fn clear_recent_unknown_id_is_noop() {
    let mut state = MethodsState::seeded();
    let before = state.clone();
    state.clear_recent(999);
    assert_eq!(state, before);
}

fn draft_record(id: MethodId, tags: &[&str]) -> MethodRecord {
    MethodRecord {
        id,
        title: "Sem título".to_owned(),
        description: "Sem descrição".to_owned(),
        tags: tags.iter().map(|&t| t.to_owned()).collect(),
        recently_added: false,
    }
}
