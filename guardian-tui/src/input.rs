//! Input dispatch — overlays → global keys → view-specific handlers.
//!
//! Every event maps to one `AppState` transition; nothing here renders.

use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Rect;

use crate::app::{AppState, Overlay, View};
use crate::panels::anomalies::card_at;
use crate::ui;

/// Handle a key event.
pub fn handle_key(app: &mut AppState, key: KeyEvent) {
    // Only handle key press events (Windows sends both Press and Release).
    if key.kind != KeyEventKind::Press {
        return;
    }

    // 1. Overlays consume input first.
    if app.overlay == Overlay::Help {
        app.overlay = Overlay::None;
        return;
    }

    // 2. Global keys (always available).
    match key.code {
        KeyCode::Char('q') => {
            app.quit();
            return;
        }
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.quit();
            return;
        }
        KeyCode::Char('?') => {
            app.overlay = Overlay::Help;
            return;
        }
        KeyCode::Char('1') => { app.select_view(View::Dashboard); return; }
        KeyCode::Char('2') => { app.select_view(View::Anomalies); return; }
        KeyCode::Char('3') => { app.select_view(View::Report); return; }
        KeyCode::Tab => {
            if key.modifiers.contains(KeyModifiers::SHIFT) {
                app.prev_view();
            } else {
                app.next_view();
            }
            return;
        }
        KeyCode::BackTab => {
            app.prev_view();
            return;
        }
        _ => {}
    }

    // 3. View-specific keys.
    match app.view {
        View::Dashboard => {} // display only
        View::Anomalies => handle_anomalies_key(app, key),
        View::Report => handle_report_key(app, key),
    }
}

fn handle_anomalies_key(app: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => app.cursor_down(),
        KeyCode::Char('k') | KeyCode::Up => app.cursor_up(),
        KeyCode::Enter | KeyCode::Char(' ') => app.toggle_cursor_anomaly(),
        KeyCode::Char('r') => app.mark_cursor_resolved(),
        _ => {}
    }
}

fn handle_report_key(app: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => app.scroll_report_down(),
        KeyCode::Char('k') | KeyCode::Up => app.scroll_report_up(),
        KeyCode::Home => app.report_scroll = 0,
        _ => {}
    }
}

/// Handle a mouse event. `screen` is the full terminal area.
///
/// Only left-button presses act: on a tab they select its view; on an
/// anomaly card they toggle that card.
pub fn handle_mouse(app: &mut AppState, mouse: MouseEvent, screen: Rect) {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return;
    }
    if app.overlay == Overlay::Help {
        app.overlay = Overlay::None;
        return;
    }

    let regions = ui::regions(screen);
    let (column, row) = (mouse.column, mouse.row);

    if let Some(view) = ui::nav::view_at(regions.nav, column, row) {
        app.select_view(view);
        return;
    }

    if app.view == View::Anomalies {
        let hit = card_at(
            &app.dataset.anomalies,
            app.expanded,
            app.cursor,
            regions.body,
            column,
            row,
        );
        if let Some(index) = hit {
            app.click_anomaly(index);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;
    use guardian_core::Dataset;

    fn app() -> AppState {
        AppState::new(Dataset::builtin(), "built-in")
    }

    fn press(app: &mut AppState, code: KeyCode) {
        handle_key(app, KeyEvent::from(code));
    }

    fn click(app: &mut AppState, column: u16, row: u16, screen: Rect) {
        let mouse = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        };
        handle_mouse(app, mouse, screen);
    }

    #[test]
    fn test_quit_on_q() {
        let mut app = app();
        press(&mut app, KeyCode::Char('q'));
        assert!(!app.running);
    }

    #[test]
    fn test_quit_on_ctrl_c() {
        let mut app = app();
        handle_key(
            &mut app,
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
        );
        assert!(!app.running);
    }

    #[test]
    fn test_number_keys_select_views() {
        let mut app = app();
        press(&mut app, KeyCode::Char('3'));
        assert_eq!(app.view, View::Report);
        press(&mut app, KeyCode::Char('2'));
        assert_eq!(app.view, View::Anomalies);
        press(&mut app, KeyCode::Char('1'));
        assert_eq!(app.view, View::Dashboard);
    }

    #[test]
    fn test_tab_cycles() {
        let mut app = app();
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.view, View::Anomalies);
        press(&mut app, KeyCode::BackTab);
        press(&mut app, KeyCode::BackTab);
        assert_eq!(app.view, View::Report);
    }

    #[test]
    fn test_release_events_ignored() {
        let mut app = app();
        let key = KeyEvent {
            code: KeyCode::Char('3'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        handle_key(&mut app, key);
        assert_eq!(app.view, View::Dashboard);
    }

    #[test]
    fn test_enter_toggles_cursor_card() {
        let mut app = app();
        press(&mut app, KeyCode::Char('2'));
        press(&mut app, KeyCode::Char('j'));
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.expanded, Some(2));
        press(&mut app, KeyCode::Char(' '));
        assert_eq!(app.expanded, None);
    }

    #[test]
    fn test_anomaly_keys_inert_on_dashboard() {
        let mut app = app();
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Char('j'));
        press(&mut app, KeyCode::Char('r'));
        assert_eq!(app.expanded, None);
        assert_eq!(app.cursor, 0);
        assert!(app.resolved.is_empty());
    }

    #[test]
    fn test_help_overlay_swallows_next_key() {
        let mut app = app();
        press(&mut app, KeyCode::Char('?'));
        assert_eq!(app.overlay, Overlay::Help);
        press(&mut app, KeyCode::Char('3'));
        assert_eq!(app.overlay, Overlay::None);
        assert_eq!(app.view, View::Dashboard);
    }

    #[test]
    fn test_report_scroll_keys() {
        let mut app = app();
        press(&mut app, KeyCode::Char('3'));
        press(&mut app, KeyCode::Char('j'));
        press(&mut app, KeyCode::Char('j'));
        press(&mut app, KeyCode::Char('k'));
        assert_eq!(app.report_scroll, 1);
        press(&mut app, KeyCode::Home);
        assert_eq!(app.report_scroll, 0);
    }

    #[test]
    fn test_click_tab() {
        let mut app = app();
        let screen = Rect::new(0, 0, 90, 40);
        // Nav row starts at y=4; third tab spans x 60..90.
        click(&mut app, 75, 5, screen);
        assert_eq!(app.view, View::Report);
    }

    #[test]
    fn test_click_card_toggles() {
        let mut app = app();
        let screen = Rect::new(0, 0, 90, 40);
        app.select_view(View::Anomalies);

        // Body starts at y=7; first card is the top of the body.
        click(&mut app, 10, 8, screen);
        assert_eq!(app.expanded, Some(1));
        click(&mut app, 10, 8, screen);
        assert_eq!(app.expanded, None);
    }

    #[test]
    fn test_click_card_ignored_outside_anomalies_view() {
        let mut app = app();
        let screen = Rect::new(0, 0, 90, 40);
        click(&mut app, 10, 8, screen);
        assert_eq!(app.expanded, None);
    }

    #[test]
    fn test_right_click_ignored() {
        let mut app = app();
        let screen = Rect::new(0, 0, 90, 40);
        let mouse = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Right),
            column: 75,
            row: 5,
            modifiers: KeyModifiers::NONE,
        };
        handle_mouse(&mut app, mouse, screen);
        assert_eq!(app.view, View::Dashboard);
    }
}
