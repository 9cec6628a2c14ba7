#[cfg(test)]
pub mod test_helpers {
    use std::cell::RefCell;
    use std::rc::Rc;

    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use ratatui::crossterm::event::{
        KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
    };
    use ratatui::layout::Rect;

    use crate::chip_input::{ChipInput, Mounts};
    use crate::dropdown::SuggestionItem;
    use crate::input::InputChanged;
    use crate::observer::ChipInputObserver;
    use crate::selection::{ChipId, SelectionItem};

    pub const TEST_WIDTH: u16 = 60;
    pub const TEST_HEIGHT: u16 = 20;

    pub fn test_container() -> Rect {
        Rect::new(0, 0, TEST_WIDTH, 6)
    }

    pub fn test_chip_input() -> ChipInput {
        ChipInput::create(test_container(), &Mounts::new()).unwrap()
    }

    pub fn autocomplete_chip_input() -> ChipInput {
        let mut chip_input = test_chip_input();
        chip_input.enable_autocomplete(true);
        chip_input
    }

    pub fn suggestions(labels: &[&str]) -> Vec<SuggestionItem> {
        labels.iter().map(|l| SuggestionItem::new(*l)).collect()
    }

    pub fn labels(chip_input: &ChipInput) -> Vec<String> {
        chip_input
            .selections()
            .into_iter()
            .map(|item| item.label)
            .collect()
    }

    pub fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    pub fn type_text(chip_input: &mut ChipInput, text: &str) {
        for c in text.chars() {
            chip_input.handle_key(key(KeyCode::Char(c)));
        }
    }

    pub fn click(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::empty(),
        }
    }

    /// Render into a fresh test terminal and return the screen contents
    pub fn render_to_string(chip_input: &mut ChipInput, width: u16, height: u16) -> String {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| chip_input.render(f)).unwrap();
        terminal.backend().to_string()
    }

    pub fn render(chip_input: &mut ChipInput) -> String {
        render_to_string(chip_input, TEST_WIDTH, TEST_HEIGHT)
    }

    /// Everything an observer was told, in order
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum Notification {
        Added(ChipId, String),
        Removed(ChipId, String),
        Requested(String),
    }

    #[derive(Default, Clone)]
    pub struct RecordingObserver {
        pub log: Rc<RefCell<Vec<Notification>>>,
    }

    impl ChipInputObserver for RecordingObserver {
        fn on_selection_added(&mut self, id: ChipId, item: &SelectionItem) {
            self.log
                .borrow_mut()
                .push(Notification::Added(id, item.label.clone()));
        }

        fn on_selection_removed(&mut self, id: ChipId, item: &SelectionItem) {
            self.log
                .borrow_mut()
                .push(Notification::Removed(id, item.label.clone()));
        }

        fn on_suggestions_requested(&mut self, event: &InputChanged) {
            self.log
                .borrow_mut()
                .push(Notification::Requested(event.value.clone()));
        }
    }

    /// Register a filter callback that records every value it sees
    pub fn record_input_changes(chip_input: &mut ChipInput) -> Rc<RefCell<Vec<String>>> {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        chip_input.on_input_changed(move |event| sink.borrow_mut().push(event.value.clone()));
        seen
    }
}
