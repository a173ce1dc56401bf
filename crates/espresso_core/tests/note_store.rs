use chrono::{Duration, Utc};
use espresso_core::store::note_store::{create, delete, update_content, update_title};
use espresso_core::Note;

fn stale_note(title: &str, content: &str) -> Note {
    let mut note = Note::new(title, content);
    note.last_updated = note.last_updated - Duration::minutes(5);
    note
}

fn sample() -> Vec<Note> {
    vec![
        stale_note("first", "alpha"),
        stale_note("second", "beta"),
        stale_note("third", "gamma"),
    ]
}

#[test]
fn create_appends_and_keeps_prefix() {
    let before = sample();
    let called_at = Utc::now();

    let after = create(before.clone(), "fourth", "delta");

    assert_eq!(after.len(), before.len() + 1);
    assert_eq!(&after[..before.len()], before.as_slice());
    let last = after.last().unwrap();
    assert_eq!(last.title, "fourth");
    assert_eq!(last.content, "delta");
    assert!(last.last_updated >= called_at);
}

#[test]
fn create_on_empty_sequence() {
    let after = create(Vec::new(), "", "");
    assert_eq!(after.len(), 1);
    assert_eq!(after[0].title, "");
}

#[test]
fn delete_removes_one_without_reordering() {
    let before = sample();

    let after = delete(before.clone(), 1);

    assert_eq!(after, vec![before[0].clone(), before[2].clone()]);
}

#[test]
fn update_title_touches_only_target_title_and_stamp() {
    let before = sample();

    let after = update_title(before.clone(), 1, "renamed");

    assert_eq!(after.len(), before.len());
    assert_eq!(after[0], before[0]);
    assert_eq!(after[2], before[2]);
    assert_eq!(after[1].title, "renamed");
    assert_eq!(after[1].content, before[1].content);
    assert!(after[1].last_updated > before[1].last_updated);
}

#[test]
fn update_content_touches_only_target_content_and_stamp() {
    let before = sample();

    let after = update_content(before.clone(), 2, "rewritten");

    assert_eq!(&after[..2], &before[..2]);
    assert_eq!(after[2].title, before[2].title);
    assert_eq!(after[2].content, "rewritten");
    assert!(after[2].last_updated > before[2].last_updated);
}

#[test]
fn out_of_range_positions_are_identity() {
    let before = sample();
    for index in [3, 4, 100, usize::MAX] {
        assert_eq!(delete(before.clone(), index), before);
        assert_eq!(update_title(before.clone(), index, "x"), before);
        assert_eq!(update_content(before.clone(), index, "x"), before);
    }
    assert!(delete(Vec::new(), 0).is_empty());
}

#[test]
fn create_twice_then_delete_first_leaves_second() {
    let notes = create(Vec::new(), "A", "hello");
    let notes = create(notes, "B", "world");
    let notes = delete(notes, 0);

    assert_eq!(notes.len(), 1);
    assert_eq!(notes[0].title, "B");
    assert_eq!(notes[0].content, "world");
}
