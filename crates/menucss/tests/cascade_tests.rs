//! Integration tests for stylesheets and the cascade over whole trees.

use menucss::{
    Color, ComputedStyles, Document, MenuCssError, NodeId, Style, StyleComputer, StyleSheet,
};

struct ConsoleUi {
    doc: Document,
    root: NodeId,
    menu: NodeId,
    start: NodeId,
    settings: NodeId,
    quit: NodeId,
}

/// div#app.layout > [text, div.menu > [button, button.selected, button]]
fn console_ui() -> ConsoleUi {
    let mut doc = Document::new();
    let root = doc.div(Some("app"), Some("layout"));
    let title = doc.text("Console UI");
    let menu = doc.div(None, Some("menu"));
    let start = doc.button("Start", None, None);
    let settings = doc.button("Settings", None, Some("selected"));
    let quit = doc.button("Quit", None, None);

    doc.add(menu, &[start, settings, quit]).unwrap();
    doc.add(root, &[title, menu]).unwrap();

    ConsoleUi {
        doc,
        root,
        menu,
        start,
        settings,
        quit,
    }
}

fn console_sheet() -> StyleSheet {
    let mut sheet = StyleSheet::new();
    sheet
        .rule("div.layout", |s| s.padding = 1)
        .unwrap()
        .rule("button", |s| {
            s.fg = Some(Color::Black);
            s.bg = Some(Color::Gray);
        })
        .unwrap()
        .rule("button.selected", |s| s.bg = Some(Color::Green))
        .unwrap();
    sheet
}

fn compute(ui: &ConsoleUi, sheet: &StyleSheet) -> ComputedStyles {
    StyleComputer::compute(&ui.doc, ui.root, sheet).unwrap()
}

// ============================================================================
// STYLESHEET
// ============================================================================

#[test]
fn rule_adds_rule_in_order() {
    let mut sheet = StyleSheet::new();
    sheet
        .rule("button", |s| s.padding = 1)
        .unwrap()
        .rule(".primary", |s| s.padding = 2)
        .unwrap();

    assert_eq!(sheet.rules().len(), 2);
    assert_eq!(sheet.rules()[0].style().padding, 1);
    assert_eq!(sheet.rules()[1].style().padding, 2);
}

// ============================================================================
// CASCADE
// ============================================================================

#[test]
fn console_ui_round_trip() {
    let ui = console_ui();
    let styles = compute(&ui, &console_sheet());

    let settings = styles.get(ui.settings).unwrap();
    assert_eq!(settings.bg, Some(Color::Green));
    assert_eq!(settings.fg, Some(Color::Black));

    for button in [ui.start, ui.quit] {
        let style = styles.get(button).unwrap();
        assert_eq!(style.bg, Some(Color::Gray));
        assert_eq!(style.fg, Some(Color::Black));
    }

    assert_eq!(styles.get(ui.root).unwrap().padding, 1);
    assert_eq!(styles.get(ui.menu), Some(&Style::default()));
}

#[test]
fn only_elements_receive_styles_in_pre_order() {
    let ui = console_ui();
    let styles = compute(&ui, &console_sheet());

    let order: Vec<NodeId> = styles.iter().map(|(id, _)| id).collect();
    assert_eq!(
        order,
        vec![ui.root, ui.menu, ui.start, ui.settings, ui.quit]
    );
    assert_eq!(styles.len(), 5);

    let title = ui.doc.children(ui.root)[0];
    assert!(!styles.contains(title));
}

#[test]
fn class_rule_beats_earlier_type_rule() {
    let mut doc = Document::new();
    let button = doc.button("OK", None, Some("primary"));

    let mut sheet = StyleSheet::new();
    sheet
        .rule("button", |s| s.padding = 1)
        .unwrap()
        .rule(".primary", |s| s.padding = 2)
        .unwrap();

    let styles = StyleComputer::compute(&doc, button, &sheet).unwrap();
    assert_eq!(styles.get(button).unwrap().padding, 2);
}

#[test]
fn later_rule_wins_on_equal_specificity() {
    let mut doc = Document::new();
    let button = doc.button("OK", None, None);

    let mut sheet = StyleSheet::new();
    sheet
        .rule("button", |s| s.bg = Some(Color::Gray))
        .unwrap()
        .rule("button", |s| s.bg = Some(Color::Green))
        .unwrap();

    let styles = StyleComputer::compute(&doc, button, &sheet).unwrap();
    assert_eq!(styles.get(button).unwrap().bg, Some(Color::Green));
}

#[test]
fn unset_properties_never_clear_earlier_values() {
    let mut doc = Document::new();
    let button = doc.button("OK", Some("ok"), None);

    let mut sheet = StyleSheet::new();
    sheet
        .rule("button", |s| {
            s.padding = 2;
            s.margin_top = 1;
            s.fg = Some(Color::Yellow);
        })
        .unwrap()
        .rule("#ok", |s| s.padding = 0)
        .unwrap();

    let styles = StyleComputer::compute(&doc, button, &sheet).unwrap();
    let style = styles.get(button).unwrap();
    assert_eq!(style.padding, 2);
    assert_eq!(style.margin_top, 1);
    assert_eq!(style.fg, Some(Color::Yellow));
}

#[test]
fn structurally_identical_elements_are_distinct_keys() {
    let mut doc = Document::new();
    let root = doc.div(None, None);
    let a = doc.button("Same", None, None);
    let b = doc.button("Same", None, None);
    doc.add(root, &[a, b]).unwrap();

    let styles = StyleComputer::compute(&doc, root, &console_sheet()).unwrap();

    assert_ne!(a, b);
    assert!(styles.contains(a));
    assert!(styles.contains(b));
    assert_eq!(styles.len(), 3);
}

#[test]
fn compute_can_start_at_a_subtree() {
    let ui = console_ui();
    let styles = StyleComputer::compute(&ui.doc, ui.menu, &console_sheet()).unwrap();

    assert_eq!(styles.len(), 4);
    assert!(!styles.contains(ui.root));
}

#[test]
fn compute_leaves_inputs_untouched() {
    let ui = console_ui();
    let sheet = console_sheet();
    let before = sheet.clone();

    let first = compute(&ui, &sheet);
    let second = compute(&ui, &sheet);

    assert_eq!(sheet, before);
    assert_eq!(first, second);
    assert_eq!(ui.doc.children(ui.menu).len(), 3);
}

#[test]
fn foreign_root_is_invalid_argument() {
    let ui = console_ui();
    let mut other = Document::new();
    let stranger = other.div(None, None);

    assert!(matches!(
        StyleComputer::compute(&ui.doc, stranger, &console_sheet()),
        Err(MenuCssError::InvalidArgument(_))
    ));
}

#[test]
fn empty_sheet_yields_default_styles() {
    let ui = console_ui();
    let styles = compute(&ui, &StyleSheet::new());

    assert_eq!(styles.len(), 5);
    assert!(styles.iter().all(|(_, style)| style.is_empty()));
}
