use hueloom::clipboard::MemoryClipboard;
use hueloom::format::{DisplayFormat, ExportFormat};
use hueloom::harmony::HarmonyMode;
use hueloom::state::{Command, PaletteState, RenderSink, Session};
use hueloom::store::{MemoryStorage, PaletteStore, SavedPalette};
use palette::Srgb;
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Render sink that records everything pushed to it.
#[derive(Debug, Default)]
struct RecordingSink {
    palettes: Vec<PaletteState>,
    saved: Vec<Vec<SavedPalette>>,
    messages: Vec<String>,
}

impl RenderSink for RecordingSink {
    fn display_palette(&mut self, state: &PaletteState) {
        self.palettes.push(state.clone());
    }

    fn display_saved_palettes(&mut self, saved: &[SavedPalette]) {
        self.saved.push(saved.to_vec());
    }

    fn notify(&mut self, message: &str) {
        self.messages.push(message.to_string());
    }
}

type TestSession = Session<MemoryStorage, MemoryClipboard, RecordingSink, StdRng>;

fn session_with(
    mode: HarmonyMode,
    clipboard: MemoryClipboard,
    storage: MemoryStorage,
) -> TestSession {
    let mut session = Session::new(
        PaletteState::new(mode, DisplayFormat::Hex),
        PaletteStore::new(storage),
        clipboard,
        RecordingSink::default(),
        StdRng::seed_from_u64(11),
    );
    session.start();
    session
}

fn session(mode: HarmonyMode) -> TestSession {
    session_with(mode, MemoryClipboard::default(), MemoryStorage::default())
}

fn last_message(session: &TestSession) -> Option<&str> {
    session.render().messages.last().map(String::as_str)
}

#[test]
fn test_start_pushes_palette_and_saved_list() {
    let session = session(HarmonyMode::Random);
    assert_eq!(session.state().slots.len(), 5);
    assert_eq!(session.render().palettes.len(), 1);
    assert_eq!(session.render().saved, vec![Vec::new()]);
}

#[test]
fn test_generate_keeps_locks() {
    let mut session = session(HarmonyMode::Random);
    session.apply(Command::ToggleLock(2));
    let kept = session.state().slots[2];
    assert!(kept.locked);

    session.apply(Command::Generate);
    assert_eq!(session.state().slots[2], kept);
    assert_eq!(session.state().slots.len(), 5);
}

#[test]
fn test_toggle_lock_out_of_range_is_ignored() {
    let mut session = session(HarmonyMode::Complementary);
    let pushes = session.render().palettes.len();
    session.apply(Command::ToggleLock(7));
    assert_eq!(session.render().palettes.len(), pushes);
    assert!(session.state().slots.iter().all(|slot| !slot.locked));
}

#[test]
fn test_change_mode_regenerates_to_new_size() {
    let mut session = session(HarmonyMode::Random);
    session.apply(Command::ChangeMode(HarmonyMode::Triadic));
    assert_eq!(session.state().mode, HarmonyMode::Triadic);
    assert_eq!(session.state().slots.len(), 3);
}

#[test]
fn test_change_format_only_changes_display() {
    let mut session = session(HarmonyMode::Analogous);
    let colors = session.state().colors();
    session.apply(Command::ChangeFormat(DisplayFormat::Rgb));
    assert_eq!(session.state().colors(), colors);
    assert!(session.state().display_values()[0].starts_with("rgb("));
    assert_eq!(
        session.render().palettes.last().map(|p| p.format),
        Some(DisplayFormat::Rgb)
    );
}

#[test]
fn test_set_base_color_replaces_first_slot_only() {
    let mut session = session(HarmonyMode::Triadic);
    let companions = session.state().slots[1..].to_vec();
    session.apply(Command::SetBaseColor(Srgb::new(1, 2, 3)));
    assert_eq!(session.state().slots[0].color, Srgb::new(1, 2, 3));
    assert_eq!(session.state().slots[1..], companions[..]);
}

#[test]
fn test_save_load_delete_cycle() {
    let mut session = session(HarmonyMode::Complementary);
    let saved_colors = session.state().colors();

    session.apply(Command::Save);
    assert_eq!(last_message(&session), Some("Palette saved!"));
    assert_eq!(session.render().saved.last().map(Vec::len), Some(1));
    assert_eq!(session.store().list().unwrap()[0].colors, saved_colors);

    session.apply(Command::ToggleLock(0));
    session.apply(Command::Generate);
    session.apply(Command::Load(0));
    assert_eq!(session.state().colors(), saved_colors);
    assert!(session.state().slots.iter().all(|slot| !slot.locked));

    session.apply(Command::Delete(0));
    assert_eq!(last_message(&session), Some("Palette deleted!"));
    assert_eq!(session.render().saved.last().map(Vec::len), Some(0));
    assert!(session.store().list().unwrap().is_empty());
}

#[test]
fn test_loaded_palette_may_differ_from_mode_size() {
    let storage =
        MemoryStorage::with_contents(r##"[["#FF0000","#00FF00","#0000FF","#FFFFFF"]]"##);
    let mut session = session_with(
        HarmonyMode::Complementary,
        MemoryClipboard::default(),
        storage,
    );

    session.apply(Command::Load(0));
    assert_eq!(session.state().slots.len(), 4);

    session.apply(Command::Generate);
    assert_eq!(session.state().slots.len(), 2);
}

#[test]
fn test_missing_saved_index_is_silent() {
    let mut session = session(HarmonyMode::Random);
    let colors = session.state().colors();
    session.apply(Command::Load(3));
    session.apply(Command::Delete(3));
    assert_eq!(session.state().colors(), colors);
    assert!(session.render().messages.is_empty());
}

#[test]
fn test_copy_uses_display_format() {
    let mut session = session(HarmonyMode::Complementary);
    session.apply(Command::ChangeFormat(DisplayFormat::Hsl));
    session.apply(Command::Copy(1));

    let expected = session.state().display_value(1);
    assert_eq!(session.clipboard().contents(), expected.as_deref());
    assert_eq!(last_message(&session), Some("Color copied to clipboard!"));
}

#[test]
fn test_export_to_clipboard() {
    let mut session = session(HarmonyMode::Triadic);

    session.apply(Command::Export(ExportFormat::Css));
    assert_eq!(last_message(&session), Some("CSS variables copied to clipboard!"));
    let css = session.clipboard().contents().unwrap_or_default();
    assert!(css.starts_with(":root {"));
    assert_eq!(css.matches("--color-").count(), 3);

    session.apply(Command::Export(ExportFormat::Json));
    assert_eq!(last_message(&session), Some("JSON copied to clipboard!"));
    assert!(session.clipboard().contents().unwrap_or_default().starts_with('['));
}

#[test]
fn test_clipboard_failure_is_reported_not_fatal() {
    let mut session = session_with(
        HarmonyMode::Random,
        MemoryClipboard::denying(),
        MemoryStorage::default(),
    );
    let colors = session.state().colors();

    session.apply(Command::Copy(0));
    let message = last_message(&session).unwrap_or_default();
    assert!(message.starts_with("Could not copy to clipboard"), "{message}");
    assert_eq!(session.state().colors(), colors);
}

#[test]
fn test_storage_failure_is_reported_not_fatal() {
    let mut session = session_with(
        HarmonyMode::Random,
        MemoryClipboard::default(),
        MemoryStorage::with_contents("{broken"),
    );
    // start() already failed to read the list
    assert!(
        last_message(&session).is_some_and(|m| m.starts_with("Could not read saved palettes"))
    );

    session.apply(Command::Save);
    let message = last_message(&session).unwrap_or_default();
    assert!(message.starts_with("Could not save palette"), "{message}");
    assert_eq!(session.state().slots.len(), 5);
}
