//! Tests for keyboard and mouse handling

use super::*;
use crate::dropdown::DropdownVisibility;
use crate::input::InputPhase;
use crate::layout::Region;
use crate::test_utils::test_helpers::*;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEventKind};

mod key_tests {
    use super::*;

    #[test]
    fn test_enter_commits_input() {
        let mut chip_input = test_chip_input();
        type_text(&mut chip_input, "rust");
        assert_eq!(chip_input.input_phase(), InputPhase::Composing);

        assert!(chip_input.handle_key(key(KeyCode::Enter)));

        assert_eq!(labels(&chip_input), vec!["rust"]);
        assert_eq!(chip_input.input_value(), "");
        assert_eq!(chip_input.input_phase(), InputPhase::Idle);
    }

    #[test]
    fn test_enter_on_empty_input_adds_nothing() {
        let mut chip_input = test_chip_input();
        chip_input.handle_key(key(KeyCode::Enter));
        assert!(chip_input.selections().is_empty());
    }

    #[test]
    fn test_enter_keeps_duplicates() {
        let mut chip_input = test_chip_input();
        for _ in 0..2 {
            type_text(&mut chip_input, "dup");
            chip_input.handle_key(key(KeyCode::Enter));
        }
        assert_eq!(chip_input.selections_as_delimited_string(), "dup,dup");
    }

    #[test]
    fn test_keystrokes_invoke_filter_callback() {
        let mut chip_input = autocomplete_chip_input();
        let seen = record_input_changes(&mut chip_input);

        type_text(&mut chip_input, "ab");

        assert_eq!(*seen.borrow(), vec!["a", "ab"]);
    }

    #[test]
    fn test_filter_event_carries_key() {
        let mut chip_input = autocomplete_chip_input();
        let keys = std::rc::Rc::new(std::cell::RefCell::new(Vec::new()));
        let sink = keys.clone();
        chip_input.on_input_changed(move |event| sink.borrow_mut().push(event.key.code));

        chip_input.handle_key(key(KeyCode::Char('z')));

        assert_eq!(*keys.borrow(), vec![KeyCode::Char('z')]);
    }

    #[test]
    fn test_no_callback_without_autocomplete() {
        let mut chip_input = test_chip_input();
        let seen = record_input_changes(&mut chip_input);

        type_text(&mut chip_input, "ab");

        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn test_callback_registered_before_enabling() {
        let mut chip_input = test_chip_input();
        let seen = record_input_changes(&mut chip_input);
        chip_input.enable_autocomplete(true);

        type_text(&mut chip_input, "x");

        assert_eq!(*seen.borrow(), vec!["x"]);
    }

    #[test]
    fn test_missing_callback_is_ignored() {
        let mut chip_input = autocomplete_chip_input();
        assert!(chip_input.handle_key(key(KeyCode::Char('a'))));
        assert_eq!(chip_input.input_value(), "a");
    }

    #[test]
    fn test_disable_stops_callbacks() {
        let mut chip_input = autocomplete_chip_input();
        let seen = record_input_changes(&mut chip_input);
        type_text(&mut chip_input, "a");

        chip_input.enable_autocomplete(false);
        type_text(&mut chip_input, "b");

        assert_eq!(*seen.borrow(), vec!["a"]);
    }

    #[test]
    fn test_cursor_motion_does_not_invoke_callback() {
        let mut chip_input = autocomplete_chip_input();
        let seen = record_input_changes(&mut chip_input);
        type_text(&mut chip_input, "a");

        chip_input.handle_key(key(KeyCode::Left));

        assert_eq!(seen.borrow().len(), 1);
    }

    #[test]
    fn test_emptying_field_does_not_invoke_callback() {
        let mut chip_input = autocomplete_chip_input();
        let seen = record_input_changes(&mut chip_input);
        type_text(&mut chip_input, "a");

        chip_input.handle_key(key(KeyCode::Backspace));

        assert_eq!(*seen.borrow(), vec!["a"]);
    }

    #[test]
    fn test_observer_sees_suggestion_requests() {
        let mut chip_input = autocomplete_chip_input();
        let observer = RecordingObserver::default();
        let log = observer.log.clone();
        chip_input.set_observer(Box::new(observer));

        type_text(&mut chip_input, "hi");

        assert_eq!(
            *log.borrow(),
            vec![
                Notification::Requested("h".to_string()),
                Notification::Requested("hi".to_string()),
            ]
        );
    }

    #[test]
    fn test_release_events_ignored() {
        let mut chip_input = test_chip_input();
        let mut release = KeyEvent::new(KeyCode::Char('a'), KeyModifiers::empty());
        release.kind = KeyEventKind::Release;

        assert!(!chip_input.handle_key(release));
        assert_eq!(chip_input.input_value(), "");
    }

    #[test]
    fn test_unfocused_input_ignores_keys() {
        let mut chip_input = test_chip_input();
        chip_input.set_focused(false);

        assert!(!chip_input.handle_key(key(KeyCode::Char('a'))));
        assert_eq!(chip_input.input_value(), "");
    }

    #[test]
    fn test_down_up_move_highlight() {
        let mut chip_input = autocomplete_chip_input();
        chip_input.set_suggestions(suggestions(&["a", "b", "c"]));

        chip_input.handle_key(key(KeyCode::Down));
        assert_eq!(chip_input.highlighted(), Some(0));
        chip_input.handle_key(key(KeyCode::Down));
        assert_eq!(chip_input.highlighted(), Some(1));
        chip_input.handle_key(key(KeyCode::Up));
        chip_input.handle_key(key(KeyCode::Up));
        assert_eq!(chip_input.highlighted(), Some(2));
    }

    #[test]
    fn test_tab_accepts_highlighted_entry() {
        let mut chip_input = autocomplete_chip_input();
        type_text(&mut chip_input, "r");
        chip_input.set_suggestions(suggestions(&["rust", "ruby"]));
        chip_input.handle_key(key(KeyCode::Down));
        chip_input.handle_key(key(KeyCode::Down));

        assert!(chip_input.handle_key(key(KeyCode::Tab)));

        assert_eq!(labels(&chip_input), vec!["ruby"]);
        assert_eq!(chip_input.input_value(), "");
        assert_eq!(chip_input.dropdown_visibility(), DropdownVisibility::Closed);
    }

    #[test]
    fn test_tab_without_dropdown_not_consumed() {
        let mut chip_input = test_chip_input();
        assert!(!chip_input.handle_key(key(KeyCode::Tab)));
        assert_eq!(chip_input.input_value(), "");
    }

    #[test]
    fn test_esc_closes_dropdown() {
        let mut chip_input = autocomplete_chip_input();
        chip_input.set_suggestions(suggestions(&["a"]));

        assert!(chip_input.handle_key(key(KeyCode::Esc)));
        assert_eq!(chip_input.dropdown_visibility(), DropdownVisibility::Closed);

        // Closed dropdown leaves Esc to the host
        assert!(!chip_input.handle_key(key(KeyCode::Esc)));
    }
}

mod mouse_tests {
    use super::*;

    #[test]
    fn test_click_chip_removes_it() {
        let mut chip_input = test_chip_input();
        let a = chip_input.add_selection("a");
        chip_input.add_selection("b");
        render(&mut chip_input);
        let area = chip_input.regions().get(Region::Chip(a)).unwrap();

        assert!(chip_input.handle_mouse(click(area.x, area.y)));

        assert_eq!(labels(&chip_input), vec!["b"]);
    }

    #[test]
    fn test_click_removed_chip_again_is_noop() {
        let mut chip_input = test_chip_input();
        let a = chip_input.add_selection("a");
        chip_input.add_selection("b");
        render(&mut chip_input);
        let area = chip_input.regions().get(Region::Chip(a)).unwrap();

        // Regions are stale until the next render
        chip_input.handle_mouse(click(area.x, area.y));
        chip_input.handle_mouse(click(area.x, area.y));

        assert_eq!(labels(&chip_input), vec!["b"]);
    }

    #[test]
    fn test_click_suggestion_adds_chip() {
        let mut chip_input = autocomplete_chip_input();
        type_text(&mut chip_input, "ra");
        chip_input.set_suggestions(suggestions(&["ratatui", "rayon"]));
        render(&mut chip_input);
        let entry = chip_input.regions().get(Region::DropdownItem(1)).unwrap();

        assert!(chip_input.handle_mouse(click(entry.x + 1, entry.y)));

        assert_eq!(labels(&chip_input), vec!["rayon"]);
        assert_eq!(chip_input.input_value(), "");
        assert!(chip_input.is_focused());
        assert_eq!(chip_input.dropdown_visibility(), DropdownVisibility::Closed);
    }

    #[test]
    fn test_click_outside_closes_dropdown() {
        let mut chip_input = autocomplete_chip_input();
        chip_input.set_suggestions(suggestions(&["a"]));
        render(&mut chip_input);

        assert!(!chip_input.handle_mouse(click(TEST_WIDTH - 1, TEST_HEIGHT - 1)));

        assert_eq!(chip_input.dropdown_visibility(), DropdownVisibility::Closed);
        assert!(!chip_input.is_focused());
    }

    #[test]
    fn test_click_input_closes_dropdown_and_focuses() {
        let mut chip_input = autocomplete_chip_input();
        chip_input.set_focused(false);
        chip_input.set_suggestions(suggestions(&["a"]));
        render(&mut chip_input);
        let input = chip_input.regions().get(Region::Input).unwrap();

        assert!(chip_input.handle_mouse(click(input.x + 2, input.y)));

        assert_eq!(chip_input.dropdown_visibility(), DropdownVisibility::Closed);
        assert!(chip_input.is_focused());
    }

    #[test]
    fn test_click_dropdown_frame_keeps_it_open() {
        let mut chip_input = autocomplete_chip_input();
        chip_input.set_suggestions(suggestions(&["a"]));
        render(&mut chip_input);
        let frame = chip_input.regions().get(Region::Dropdown).unwrap();

        assert!(chip_input.handle_mouse(click(frame.x, frame.y)));

        assert_eq!(chip_input.dropdown_visibility(), DropdownVisibility::Open);
    }

    #[test]
    fn test_click_chip_keeps_dropdown_open() {
        let mut chip_input = autocomplete_chip_input();
        let a = chip_input.add_selection("a");
        chip_input.set_suggestions(suggestions(&["x"]));
        render(&mut chip_input);
        let area = chip_input.regions().get(Region::Chip(a)).unwrap();

        chip_input.handle_mouse(click(area.x, area.y));

        assert!(chip_input.selections().is_empty());
        assert_eq!(chip_input.dropdown_visibility(), DropdownVisibility::Open);
    }

    #[test]
    fn test_non_left_clicks_ignored() {
        let mut chip_input = test_chip_input();
        let a = chip_input.add_selection("a");
        render(&mut chip_input);
        let area = chip_input.regions().get(Region::Chip(a)).unwrap();

        let mut event = click(area.x, area.y);
        event.kind = MouseEventKind::Down(MouseButton::Right);

        assert!(!chip_input.handle_mouse(event));
        assert_eq!(chip_input.selections().len(), 1);
    }
}
