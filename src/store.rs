use crate::button::{default_layout, Button};
use crate::error::StoreError;

/// Button state and the current multi-select for a single UI session.
///
/// The number of buttons is fixed when the store is built. The selection
/// holds valid, distinct indices in the order they were selected.
#[derive(Debug, Clone)]
pub struct ButtonStore {
    buttons: Vec<Button>,
    selection: Vec<usize>,
}

impl Default for ButtonStore {
    fn default() -> Self {
        ButtonStore::new()
    }
}

impl ButtonStore {
    pub fn new() -> ButtonStore {
        ButtonStore::with_buttons(default_layout())
    }

    pub fn with_buttons(buttons: Vec<Button>) -> ButtonStore {
        ButtonStore {
            buttons,
            selection: Vec::new(),
        }
    }

    pub fn buttons(&self) -> &[Button] {
        &self.buttons
    }

    pub fn selection(&self) -> &[usize] {
        &self.selection
    }

    pub fn is_selected(&self, index: usize) -> bool {
        self.selection.contains(&index)
    }

    /// Adds `index` to the selection if it is absent, removes it otherwise.
    ///
    /// An index outside the button range is rejected and the selection is
    /// left as it was.
    pub fn toggle_selection(&mut self, index: usize) -> Result<(), StoreError> {
        self.check_index(index)?;

        match self.selection.iter().position(|&i| i == index) {
            Some(pos) => {
                self.selection.remove(pos);
                log::trace!("Deselected button {}", index);
            }
            None => {
                self.selection.push(index);
                log::trace!("Selected button {}", index);
            }
        }

        Ok(())
    }

    /// Recolors every selected button. Any string is accepted as a color.
    pub fn change_color(&mut self, color: &str) {
        for &index in &self.selection {
            self.buttons[index].color = color.to_string();
        }

        log::trace!("Set color {:?} on buttons {:?}", color, self.selection);
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    /// The selection as a JSON array, e.g. `[0,2]`.
    pub fn serialize_selection(&self) -> Result<String, StoreError> {
        Ok(serde_json::to_string(&self.selection)?)
    }

    /// Replaces the selection with one produced by `serialize_selection`.
    ///
    /// Nothing changes unless every index is in range and appears once.
    pub fn restore_selection(&mut self, json: &str) -> Result<(), StoreError> {
        let indices: Vec<usize> = serde_json::from_str(json)?;

        for (pos, &index) in indices.iter().enumerate() {
            self.check_index(index)?;

            if indices[..pos].contains(&index) {
                return Err(StoreError::DuplicateIndex(index));
            }
        }

        log::trace!("Restored selection {:?}", indices);
        self.selection = indices;

        Ok(())
    }

    fn check_index(&self, index: usize) -> Result<(), StoreError> {
        if index < self.buttons.len() {
            Ok(())
        } else {
            Err(StoreError::InvalidIndex {
                index,
                len: self.buttons.len(),
            })
        }
    }
}
