//! Column visibility toggle controls.
//!
//! One control exists per column. Each carries the column title, an
//! accessible label announcing what activating it will do ("Show X
//! column" / "Hide X column"), and a style class reflecting current
//! visibility. The invariant maintained here: after any sequence of
//! toggles, a control is marked visible exactly when its column reports
//! visible on the table view.

use crate::i18n::TableStrings;
use crate::table::TableView;

/// A single toggle control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToggleControl {
    column: usize,
    title: String,
    visible: bool,
    label: String,
}

impl ToggleControl {
    /// Index of the column this control drives.
    pub fn column(&self) -> usize {
        self.column
    }

    /// The visible control text: the column title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Whether the control is currently marked visible.
    pub fn visible(&self) -> bool {
        self.visible
    }

    /// The accessible label, stating the action a press performs.
    pub fn aria_label(&self) -> &str {
        &self.label
    }

    /// The style class carried by the control.
    pub fn style_class(&self) -> &'static str {
        if self.visible {
            "visible-column"
        } else {
            ""
        }
    }
}

/// The full set of toggle controls for one table.
#[derive(Debug, Clone)]
pub struct ToggleControls {
    strings: TableStrings,
    controls: Vec<ToggleControl>,
}

impl ToggleControls {
    /// Generate one control per column title, reflecting the view's
    /// current visibility.
    pub fn build<V: TableView>(view: &V, titles: &[String], strings: TableStrings) -> Self {
        let controls = titles
            .iter()
            .enumerate()
            .map(|(column, title)| {
                let visible = view.is_column_visible(column);
                ToggleControl {
                    column,
                    title: title.clone(),
                    visible,
                    label: action_label(&strings, visible, title),
                }
            })
            .collect();
        ToggleControls { strings, controls }
    }

    pub fn len(&self) -> usize {
        self.controls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.controls.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&ToggleControl> {
        self.controls.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ToggleControl> {
        self.controls.iter()
    }

    /// Flip one column's visibility on the view and bring the control's
    /// marker and label along. Unknown indices are ignored.
    pub fn toggle<V: TableView>(&mut self, view: &mut V, index: usize) {
        let Some(control) = self.controls.get_mut(index) else {
            return;
        };

        let visible = !view.is_column_visible(index);
        view.set_column_visible(index, visible);

        control.visible = visible;
        control.label = action_label(&self.strings, visible, &control.title);
    }

    /// Re-derive every control's marker and label from the view. Used
    /// after bulk visibility changes at initialization.
    pub fn sync<V: TableView>(&mut self, view: &V) {
        for control in &mut self.controls {
            control.visible = view.is_column_visible(control.column);
            control.label = action_label(&self.strings, control.visible, &control.title);
        }
    }
}

/// "Hide Dataset column" when visible, "Show Dataset column" when hidden.
fn action_label(strings: &TableStrings, visible: bool, title: &str) -> String {
    let verb = if visible { strings.hide } else { strings.show };
    format!("{} {} {}", verb, title, strings.column)
}
