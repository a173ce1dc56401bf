use espresso_core::{JsonFileNoteRepository, NoteRepository, NoteService, SaveStatus};
use std::fs;

fn service_in(dir: &tempfile::TempDir) -> NoteService<JsonFileNoteRepository> {
    NoteService::open(JsonFileNoteRepository::new(
        dir.path().join("notes").join("notes.json"),
    ))
}

#[test]
fn open_without_file_starts_empty() {
    let dir = tempfile::tempdir().unwrap();
    let service = service_in(&dir);
    assert!(service.notes().is_empty());
}

#[test]
fn create_create_delete_scenario_persists_remaining_note() {
    let dir = tempfile::tempdir().unwrap();
    let mut service = service_in(&dir);

    assert!(service.create_note("A", "hello").is_saved());
    assert!(service.create_note("B", "world").is_saved());
    assert!(service.delete_note(0).is_saved());

    assert_eq!(service.notes().len(), 1);
    assert_eq!(service.notes()[0].title, "B");
    assert_eq!(service.notes()[0].content, "world");

    let persisted = service.repository().load_notes().unwrap();
    assert_eq!(persisted.as_slice(), service.notes());
}

#[test]
fn out_of_range_update_leaves_single_note_unchanged() {
    let dir = tempfile::tempdir().unwrap();
    let mut service = service_in(&dir);
    service.create_note("only", "body");
    let before = service.notes().to_vec();

    let status = service.update_note_content(5, "x");

    assert!(status.is_saved());
    assert_eq!(service.notes(), before.as_slice());
    assert_eq!(service.notes().len(), 1);
}

#[test]
fn reopen_restores_last_saved_sequence() {
    let dir = tempfile::tempdir().unwrap();
    let expected = {
        let mut service = service_in(&dir);
        service.create_note("one", "1");
        service.create_note("two", "2");
        service.update_note_title(0, "uno");
        service.update_note_content(1, "dos");
        service.notes().to_vec()
    };

    let reopened = service_in(&dir);

    assert_eq!(reopened.notes(), expected.as_slice());
    assert_eq!(reopened.notes()[0].title, "uno");
    assert_eq!(reopened.notes()[1].content, "dos");
}

#[test]
fn corrupt_file_opens_empty_and_next_save_repairs_it() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("notes.json");
    fs::write(&path, "[{\"title\": 42}]").unwrap();

    let mut service = NoteService::open(JsonFileNoteRepository::new(&path));
    assert!(service.notes().is_empty());

    service.create_note("fresh", "start");
    let reloaded = JsonFileNoteRepository::new(&path).load_notes().unwrap();
    assert_eq!(reloaded.len(), 1);
}

#[test]
fn write_failure_is_reported_but_memory_wins() {
    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join("blocker");
    fs::write(&blocker, "plain file").unwrap();
    let mut service = NoteService::open(JsonFileNoteRepository::new(blocker.join("notes.json")));

    let status = service.create_note("unsaved", "still here");

    assert!(matches!(status, SaveStatus::Failed(_)));
    assert_eq!(service.notes().len(), 1);
    assert_eq!(service.notes()[0].title, "unsaved");
}
