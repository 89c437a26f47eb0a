use hueloom::error::PaletteError;
use hueloom::generate::PaletteSlot;
use hueloom::store::{FileStorage, MemoryStorage, PaletteStore, Storage};
use palette::Srgb;
use tempfile::TempDir;

fn palette(seed: u8) -> Vec<Srgb<u8>> {
    vec![
        Srgb::new(seed, 0, 0),
        Srgb::new(0, seed, 0),
        Srgb::new(0, 0, seed),
    ]
}

fn memory_store() -> PaletteStore<MemoryStorage> {
    PaletteStore::new(MemoryStorage::default())
}

#[test]
fn test_empty_store_lists_nothing() {
    let store = memory_store();
    assert!(store.list().unwrap().is_empty());
    assert_eq!(store.load(0).unwrap(), None);
}

#[test]
fn test_save_appends_in_order() {
    let mut store = memory_store();
    assert_eq!(store.save(&palette(10)).unwrap(), 0);
    assert_eq!(store.save(&palette(20)).unwrap(), 1);

    let saved = store.list().unwrap();
    assert_eq!(saved.len(), 2);
    assert_eq!(saved[0].index, 0);
    assert_eq!(saved[0].colors, palette(10));
    assert_eq!(saved[1].colors, palette(20));
}

#[test]
fn test_stored_as_hex_strings() {
    let mut store = memory_store();
    store.save(&[Srgb::new(255, 0, 0), Srgb::new(26, 26, 46)]).unwrap();
    assert_eq!(
        store.storage().contents(),
        Some(r##"[["#FF0000","#1A1A2E"]]"##)
    );
}

#[test]
fn test_delete_shifts_later_entries() {
    let mut store = memory_store();
    for seed in [1, 2, 3] {
        store.save(&palette(seed)).unwrap();
    }

    assert!(store.delete(0).unwrap());

    let saved = store.list().unwrap();
    assert_eq!(saved.len(), 2);
    assert_eq!(saved[0].colors, palette(2));
    assert_eq!(saved[0].index, 0);
    assert_eq!(saved[1].colors, palette(3));
}

#[test]
fn test_delete_out_of_range_is_noop() {
    let mut store = memory_store();
    store.save(&palette(1)).unwrap();
    let before = store.storage().contents().map(str::to_string);

    assert!(!store.delete(5).unwrap());
    assert_eq!(store.storage().contents().map(str::to_string), before);
}

#[test]
fn test_load_returns_unlocked_slots() {
    let mut store = memory_store();
    store.save(&palette(9)).unwrap();

    let slots = store.load(0).unwrap().unwrap();
    let expected: Vec<_> = palette(9).into_iter().map(PaletteSlot::new).collect();
    assert_eq!(slots, expected);
    assert_eq!(store.load(1).unwrap(), None);
}

#[test]
fn test_reads_legacy_rgb_entries() {
    let storage = MemoryStorage::with_contents(r##"[["rgb(255, 0, 0)", "#00ff00"]]"##);
    let store = PaletteStore::new(storage);

    let saved = store.list().unwrap();
    assert_eq!(
        saved[0].colors,
        vec![Srgb::new(255, 0, 0), Srgb::new(0, 255, 0)]
    );
}

#[test]
fn test_undecodable_colors_are_skipped() {
    let storage = MemoryStorage::with_contents(r##"[["#FF0000", "chartreuse-ish"]]"##);
    let store = PaletteStore::new(storage);
    assert_eq!(store.list().unwrap()[0].colors, vec![Srgb::new(255, 0, 0)]);
}

#[test]
fn test_save_keeps_undecodable_entries() {
    let mut store = PaletteStore::new(MemoryStorage::with_contents(
        r##"[["#FF0000","rgba(1, 2, 3, 0.5)"],["bogus"]]"##,
    ));
    assert_eq!(store.save(&[Srgb::new(1, 2, 3)]).unwrap(), 2);

    assert_eq!(
        store.storage().contents(),
        Some(r##"[["#FF0000","rgba(1, 2, 3, 0.5)"],["bogus"],["#010203"]]"##)
    );
    // Indices still line up with storage
    let saved = store.list().unwrap();
    assert_eq!(saved.len(), 3);
    assert!(saved[1].colors.is_empty());
    assert_eq!(saved[2].colors, vec![Srgb::new(1, 2, 3)]);
}

#[test]
fn test_delete_keeps_undecodable_entries() {
    let storage = MemoryStorage::with_contents(r##"[["#000000"],["#FF0000","teal-ish"]]"##);
    let mut store = PaletteStore::new(storage);
    assert!(store.delete(0).unwrap());
    assert_eq!(store.storage().contents(), Some(r##"[["#FF0000","teal-ish"]]"##));
}

#[test]
fn test_blank_storage_is_empty_collection() {
    let store = PaletteStore::new(MemoryStorage::with_contents("  \n"));
    assert!(store.list().unwrap().is_empty());
}

#[test]
fn test_corrupt_storage_is_reported() {
    let mut store = PaletteStore::new(MemoryStorage::with_contents("{not json"));
    assert!(matches!(
        store.list(),
        Err(PaletteError::StorageUnavailable(_))
    ));
    assert!(matches!(
        store.save(&palette(1)),
        Err(PaletteError::StorageUnavailable(_))
    ));
}

#[test]
fn test_file_storage_persists_across_instances() {
    let dir = TempDir::new().unwrap();
    let data_dir = dir.path().join("nested");

    let mut store = PaletteStore::new(FileStorage::new(&data_dir, "saved_palettes"));
    store.save(&palette(42)).unwrap();
    assert!(data_dir.join("saved_palettes.json").exists());

    let reopened = PaletteStore::new(FileStorage::new(&data_dir, "saved_palettes"));
    assert_eq!(reopened.list().unwrap()[0].colors, palette(42));
}

#[test]
fn test_file_storage_missing_file_reads_none() {
    let dir = TempDir::new().unwrap();
    let storage = FileStorage::new(dir.path(), "absent");
    assert_eq!(storage.read().unwrap(), None);
}
