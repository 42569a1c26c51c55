use contato_core::{Contact, ContactSlot, ContactStore, StoreOptions};
use rusqlite::Connection;
use std::path::Path;

fn memory_store() -> ContactStore {
    ContactStore::open_in_memory(StoreOptions::default()).unwrap()
}

fn row_count(path: &Path) -> i64 {
    let conn = Connection::open(path).unwrap();
    conn.query_row("SELECT COUNT(*) FROM Contato;", [], |row| row.get(0))
        .unwrap()
}

#[test]
fn insert_valid_contact_then_list_returns_it() {
    let store = memory_store();

    let response = store.insert("Ana Silva", "ana@example.com", "+5511987654321", "friend");
    assert!(response.success, "{}", response.message);
    assert_eq!(response.message, "inserted");
    let id = response.contact_id.unwrap();
    assert!(id > 0);

    let listed = store.list_all();
    assert!(listed.success);
    assert_eq!(
        listed.contacts,
        vec![Contact {
            id,
            name: "Ana Silva".to_string(),
            email: "ana@example.com".to_string(),
            phone: "+5511987654321".to_string(),
            description: "friend".to_string(),
        }]
    );
}

#[test]
fn insert_invalid_contact_is_rejected_without_writing() {
    let store = memory_store();

    let response = store.insert("Al", "x@x", "123", "");
    assert!(!response.success);
    assert_eq!(response.message, "invalid data");
    assert_eq!(response.contact_id, None);
    assert!(store.list_all().contacts.is_empty());
}

#[test]
fn each_field_constraint_blocks_insert_on_its_own() {
    let store = memory_store();
    let long_name = "n".repeat(256);
    let long_phone = format!("+55 11 98765-4321{}", " ".repeat(14));
    let long_description = "d".repeat(51);

    let cases = [
        ("Al", "ana@example.com", "+5511987654321", "friend"),
        (long_name.as_str(), "ana@example.com", "+5511987654321", "friend"),
        ("Ana Silva", "ana@example", "+5511987654321", "friend"),
        ("Ana Silva", "ana@example.com", "555-0100", "friend"),
        ("Ana Silva", "ana@example.com", long_phone.as_str(), "friend"),
        ("Ana Silva", "ana@example.com", "+5511987654321", long_description.as_str()),
    ];

    for (name, email, phone, description) in cases {
        let response = store.insert(name, email, phone, description);
        assert!(!response.success, "{name:?} {email:?} {phone:?} accepted");
        assert_eq!(response.message, "invalid data");
    }
    assert!(store.list_all().contacts.is_empty());
}

#[test]
fn boundary_lengths_are_accepted() {
    let store = memory_store();
    let max_name = "n".repeat(255);
    let max_description = "d".repeat(50);

    assert!(store.insert("Ana", "ana@example.com", "11987654321", "").success);
    assert!(
        store
            .insert(&max_name, "ana@example.com", "11987654321", &max_description)
            .success
    );
    assert_eq!(store.list_all().contacts.len(), 2);
}

#[test]
fn get_by_id_round_trips_inserted_fields() {
    let store = memory_store();
    store.insert("Bruno Costa", "bruno@example.com.br", "(21) 99876-5432", "work");
    let response = store.insert("Carla Dias", "carla@example.org", "+55 31 91234-5678", "");
    let id = response.contact_id.unwrap();

    let lookup = store.get_by_id(&id.to_string());
    assert!(lookup.success);
    let contact = lookup.contact.contact().unwrap();
    assert_eq!(contact.id, id);
    assert_eq!(contact.name, "Carla Dias");
    assert_eq!(contact.email, "carla@example.org");
    assert_eq!(contact.phone, "+55 31 91234-5678");
    assert_eq!(contact.description, "");
}

#[test]
fn get_by_id_accepts_leading_zeros() {
    let store = memory_store();
    let id = store
        .insert("Ana Silva", "ana@example.com", "+5511987654321", "friend")
        .contact_id
        .unwrap();

    let lookup = store.get_by_id(&format!("000{id}"));
    assert!(lookup.success);
    assert_eq!(lookup.contact.contact().map(|c| c.id), Some(id));
}

#[test]
fn get_by_id_for_unknown_id_succeeds_without_contact() {
    let store = memory_store();

    let lookup = store.get_by_id("42");
    assert!(lookup.success);
    assert_eq!(lookup.contact, ContactSlot::Missing);

    let huge = store.get_by_id("99999999999999999999999");
    assert!(huge.success);
    assert_eq!(huge.contact, ContactSlot::Missing);
}

#[test]
fn get_by_id_rejects_non_digit_ids() {
    let store = memory_store();
    store.insert("Ana Silva", "ana@example.com", "+5511987654321", "friend");

    for id in ["", "-1", "1.0", "1e3", " 1", "0x1", "one", "1 OR 1=1", "1; DROP TABLE Contato"] {
        let lookup = store.get_by_id(id);
        assert!(!lookup.success, "{id:?} was accepted");
        assert_eq!(lookup.contact, ContactSlot::Empty);
    }
}

#[test]
fn injection_attempt_leaves_table_intact() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("contacts.db");
    let store = ContactStore::open(&path, StoreOptions::default()).unwrap();
    store.insert("Ana Silva", "ana@example.com", "+5511987654321", "friend");

    let lookup = store.get_by_id("1; DROP TABLE Contato");
    assert!(!lookup.success);
    assert_eq!(lookup.contact, ContactSlot::Empty);

    assert_eq!(row_count(&path), 1);
    assert_eq!(store.list_all().contacts.len(), 1);
}

#[test]
fn ensure_schema_is_idempotent_and_keeps_rows() {
    let store = memory_store();
    store.insert("Ana Silva", "ana@example.com", "+5511987654321", "friend");

    store.ensure_schema().unwrap();
    store.ensure_schema().unwrap();

    let listed = store.list_all();
    assert!(listed.success);
    assert_eq!(listed.contacts.len(), 1);
    assert_eq!(listed.contacts[0].name, "Ana Silva");
}

#[test]
fn list_is_ordered_by_id() {
    let store = memory_store();
    for name in ["Ana", "Bruno", "Carla"] {
        assert!(store.insert(name, "x@example.com", "11987654321", "").success);
    }

    let ids = store
        .list_all()
        .contacts
        .iter()
        .map(|contact| contact.id)
        .collect::<Vec<_>>();
    let mut sorted = ids.clone();
    sorted.sort_unstable();
    assert_eq!(ids, sorted);
    assert_eq!(ids.len(), 3);
}

#[test]
fn ids_are_not_reused_after_external_delete() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("contacts.db");
    let store = ContactStore::open(&path, StoreOptions::default()).unwrap();
    let first = store
        .insert("Ana Silva", "ana@example.com", "+5511987654321", "")
        .contact_id
        .unwrap();

    Connection::open(&path)
        .unwrap()
        .execute("DELETE FROM Contato;", [])
        .unwrap();

    let second = store
        .insert("Bruno Costa", "bruno@example.com", "+5511987654321", "")
        .contact_id
        .unwrap();
    assert!(second > first);
}

#[test]
fn storage_errors_become_failed_responses() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("contacts.db");
    let store = ContactStore::open(&path, StoreOptions::default()).unwrap();

    Connection::open(&path)
        .unwrap()
        .execute_batch("DROP TABLE Contato;")
        .unwrap();

    let inserted = store.insert("Ana Silva", "ana@example.com", "+5511987654321", "friend");
    assert!(!inserted.success);
    assert!(inserted.message.starts_with("insert failed:"));
    assert!(inserted.message.contains("Contato"), "{}", inserted.message);

    let listed = store.list_all();
    assert!(!listed.success);
    assert!(listed.contacts.is_empty());

    let lookup = store.get_by_id("1");
    assert!(!lookup.success);
    assert_eq!(lookup.contact, ContactSlot::Empty);

    store.ensure_schema().unwrap();
    assert!(store.list_all().success);
}

#[test]
fn store_persists_across_reopen_and_creates_directory() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("database").join("sqlite3.db");

    let store = ContactStore::open(&path, StoreOptions::default()).unwrap();
    assert_eq!(store.location(), Some(path.as_path()));
    let id = store
        .insert("Ana Silva", "ana@example.com", "+5511987654321", "friend")
        .contact_id
        .unwrap();
    store.close().unwrap();

    let reopened = ContactStore::open(&path, StoreOptions::default()).unwrap();
    let lookup = reopened.get_by_id(&id.to_string());
    assert_eq!(lookup.contact.contact().map(|c| c.name.as_str()), Some("Ana Silva"));
}

#[test]
fn diagnostics_mode_behaves_like_production() {
    let store = ContactStore::open_in_memory(StoreOptions { diagnostics: true }).unwrap();
    assert!(store.options().diagnostics);

    assert!(store
        .insert("Ana Silva", "ana@example.com", "+5511987654321", "friend")
        .success);
    assert_eq!(store.list_all().contacts.len(), 1);
    assert!(store.get_by_id("1").success);
}

#[test]
fn phone_with_non_ascii_digits_is_not_stored() {
    let store = memory_store();

    let response = store.insert(
        "Ana Silva",
        "ana@example.com",
        "11\u{0668}\u{0667}\u{0666}\u{0665}\u{0664}\u{0663}\u{0662}\u{0661}",
        "",
    );
    assert!(!response.success);
    assert_eq!(response.message, "invalid data");
    assert!(store.list_all().contacts.is_empty());
}
