use ratatui::layout::Rect;

use super::chip_layout::{ChipLayout, layout_chips};
use super::component_state::{ComponentState, StatePatch};
use super::container::{ContainerRef, Mounts, validate_area};
use crate::config::Config;
use crate::dropdown::{DropdownVisibility, SuggestionItem};
use crate::error::ChipInputError;
use crate::input::{InputChanged, InputPhase, InputState};
use crate::layout::LayoutRegions;
use crate::observer::{ChipInputObserver, InputChangedCallback};
use crate::selection::{ChipId, SelectionItem, SelectionList};
use crate::theme::{ChipTheme, StyleOptions};

/// Chip/tag input mounted into a container area
pub struct ChipInput {
    pub(super) container: Rect,
    pub(super) selections: SelectionList,
    pub(super) input: InputState,
    pub(super) state: ComponentState,
    pub(super) theme: ChipTheme,
    pub(super) title: Option<String>,
    pub(super) regions: LayoutRegions,
    /// Frame area of the last render, limits how far the container grows
    pub(super) bounds: Option<Rect>,
    pub(super) on_input_changed: Option<InputChangedCallback>,
    pub(super) observer: Option<Box<dyn ChipInputObserver>>,
}

impl ChipInput {
    /// Mount a new component
    ///
    /// Fails with [`ChipInputError::InvalidContainer`] when the container
    /// cannot be resolved or is too small to draw into.
    pub fn create(container: impl Into<ContainerRef>, mounts: &Mounts) -> Result<Self, ChipInputError> {
        let container = container.into().resolve(mounts)?;

        let mut chip_input = Self {
            container,
            selections: SelectionList::new(),
            input: InputState::new(),
            state: ComponentState::default(),
            theme: ChipTheme::default(),
            title: None,
            regions: LayoutRegions::new(),
            bounds: None,
            on_input_changed: None,
            observer: None,
        };
        chip_input.reposition();
        log::debug!("Mounted chip input at {:?}", container);
        Ok(chip_input)
    }

    /// Mount a component and apply the style and autocomplete settings of `config`
    pub fn from_config(
        container: impl Into<ContainerRef>,
        mounts: &Mounts,
        config: &Config,
    ) -> Result<Self, ChipInputError> {
        let mut chip_input = Self::create(container, mounts)?;
        chip_input.apply_style(&config.style)?;
        chip_input.enable_autocomplete(config.autocomplete.enabled);
        Ok(chip_input)
    }

    pub fn container_area(&self) -> Rect {
        self.container
    }

    /// Move or resize the container, e.g. after a terminal resize
    pub fn set_container_area(&mut self, area: Rect) -> Result<(), ChipInputError> {
        validate_area(area)?;
        self.container = area;
        self.reposition();
        Ok(())
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = Some(title.into());
    }

    /// Update chip styling for this instance only
    pub fn apply_style(&mut self, options: &StyleOptions) -> Result<(), ChipInputError> {
        self.theme.apply(options)
    }

    pub fn theme(&self) -> &ChipTheme {
        &self.theme
    }

    pub fn set_observer(&mut self, observer: Box<dyn ChipInputObserver>) {
        self.observer = Some(observer);
    }

    /// Register the host filter callback
    ///
    /// The callback runs after every keystroke that changes a non-empty input
    /// while autocomplete is enabled. Registering it before enabling
    /// autocomplete is fine.
    pub fn on_input_changed<F>(&mut self, callback: F)
    where
        F: FnMut(&InputChanged) + 'static,
    {
        self.on_input_changed = Some(Box::new(callback));
    }

    // Selection store

    /// Append a chip for `label`
    pub fn add_selection(&mut self, label: impl Into<String>) -> ChipId {
        let id = self.selections.add(label);
        if let (Some(observer), Some(item)) = (self.observer.as_mut(), self.selections.get(id)) {
            observer.on_selection_added(id, item);
        }
        log::debug!("Added chip {} ({} selected)", id.value(), self.selections.len());

        if self.state.autocomplete_enabled {
            self.close_dropdown();
        }
        self.reposition();
        id
    }

    /// Remove the chip `id`; unknown or already removed chips are ignored
    pub fn remove_selection(&mut self, id: ChipId) -> Option<SelectionItem> {
        let Some(item) = self.selections.remove(id) else {
            log::debug!("Ignoring removal of unknown chip {}", id.value());
            return None;
        };
        if let Some(observer) = self.observer.as_mut() {
            observer.on_selection_removed(id, &item);
        }
        log::debug!("Removed chip {} ({} selected)", id.value(), self.selections.len());

        self.reposition();
        Some(item)
    }

    pub fn selections(&self) -> Vec<SelectionItem> {
        self.selections.items()
    }

    pub fn selection_list(&self) -> &SelectionList {
        &self.selections
    }

    pub fn selections_as_delimited_string(&self) -> String {
        self.selections.to_delimited_string()
    }

    // Input surface

    pub fn input_value(&self) -> &str {
        self.input.value()
    }

    pub fn input_phase(&self) -> InputPhase {
        self.input.phase()
    }

    pub fn is_focused(&self) -> bool {
        self.input.is_focused()
    }

    pub fn set_focused(&mut self, focused: bool) {
        self.input.set_focused(focused);
    }

    // Dropdown view

    /// Turn autocomplete on or off
    ///
    /// Turning it off drops any suggestion data and stops forwarding
    /// keystrokes to the filter callback.
    pub fn enable_autocomplete(&mut self, enabled: bool) {
        self.transition(StatePatch::new().autocomplete(enabled).listener(enabled));
        if enabled {
            self.reposition();
        }
        log::debug!("Autocomplete {}", if enabled { "enabled" } else { "disabled" });
    }

    pub fn is_autocomplete_enabled(&self) -> bool {
        self.state.autocomplete_enabled
    }

    /// Replace the suggestion data; ignored while autocomplete is off
    pub fn set_suggestions(&mut self, items: Vec<SuggestionItem>) {
        if !self.state.autocomplete_enabled {
            log::debug!("Autocomplete disabled, dropping {} suggestions", items.len());
            return;
        }
        let was_open = self.dropdown_visibility().is_open();
        self.transition(StatePatch::new().suggestions(items));
        if !was_open && self.dropdown_visibility().is_open() {
            self.reposition();
        }
    }

    pub fn suggestions(&self) -> &[SuggestionItem] {
        &self.state.suggestions
    }

    pub fn dropdown_visibility(&self) -> DropdownVisibility {
        self.state.dropdown_visibility()
    }

    pub fn highlighted(&self) -> Option<usize> {
        self.state.highlighted
    }

    /// Clear suggestion data, closing the dropdown
    pub fn close_dropdown(&mut self) {
        if self.state.autocomplete_enabled {
            self.transition(StatePatch::new().clear_suggestions());
        }
    }

    /// Recompute the dropdown position from the container's rendered height
    pub fn reposition(&mut self) {
        let top = self.container.y.saturating_add(self.rendered_height());
        self.transition(StatePatch::new().dropdown_top(top));
    }

    pub fn dropdown_top(&self) -> u16 {
        self.state.dropdown_top
    }

    /// Turn suggestion `index` into a chip, as if its entry was clicked
    pub fn select_suggestion(&mut self, index: usize) -> Option<ChipId> {
        let label = self.state.suggestions.get(index)?.label.clone();
        let id = self.add_selection(label);
        self.input.clear();
        self.input.set_focused(true);
        Some(id)
    }

    pub fn state(&self) -> &ComponentState {
        &self.state
    }

    /// Hit regions recorded by the last render
    pub fn regions(&self) -> &LayoutRegions {
        &self.regions
    }

    /// Height of the bordered container for the current chips
    ///
    /// The container grows with its chips, past its own area, down to the
    /// bottom of the last rendered frame.
    pub fn rendered_height(&self) -> u16 {
        self.current_layout()
            .rendered_height()
            .min(self.max_height())
    }

    fn max_height(&self) -> u16 {
        match self.bounds {
            Some(bounds) => bounds.bottom().saturating_sub(self.container.y),
            None => u16::MAX,
        }
    }

    /// Content rows scrolled out of view so the newest row and the input stay visible
    pub(super) fn scrolled_rows(&self, layout: &ChipLayout) -> u16 {
        layout
            .rendered_height()
            .saturating_sub(self.rendered_height())
    }

    pub(super) fn current_layout(&self) -> ChipLayout {
        let inner = Rect {
            x: self.container.x + 1,
            y: self.container.y + 1,
            width: self.container.width.saturating_sub(2),
            height: self.container.height.saturating_sub(2),
        };
        layout_chips(
            inner,
            self.selections
                .iter()
                .map(|(id, item)| (id, self.theme.chip_width(&item.label))),
        )
    }

    pub(super) fn transition(&mut self, patch: StatePatch) {
        let before = self.state.dropdown_visibility();
        self.state = std::mem::take(&mut self.state).apply(patch);
        let after = self.state.dropdown_visibility();
        if before != after {
            log::debug!("Dropdown {:?} -> {:?}", before, after);
        }
    }
}
