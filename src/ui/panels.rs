use eframe::egui::Ui;

use crate::domain::AoiConfig;
use crate::models::SelectionSet;
use crate::ui::config::UI_TEXT;
use crate::ui::utils::section_heading;

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;

/// Trait for UI panels that can be rendered
pub trait Panel {
    type Event;
    fn render(&mut self, ui: &mut Ui) -> Vec<Self::Event>;
}

/// Checkbox selector for the active AOI set.
///
/// Built from the static AOI registry so it renders in every load phase.
/// Checkbox state reads the same selection the map markers do, so toggling
/// via a marker click updates the checkbox on the next frame and vice versa.
pub struct AoiSelectorPanel<'a> {
    aois: &'a [AoiConfig],
    selection: &'a SelectionSet,
}

impl<'a> AoiSelectorPanel<'a> {
    pub fn new(aois: &'a [AoiConfig], selection: &'a SelectionSet) -> Self {
        Self { aois, selection }
    }
}

impl Panel for AoiSelectorPanel<'_> {
    /// Key of the AOI whose checkbox was toggled
    type Event = String;

    fn render(&mut self, ui: &mut Ui) -> Vec<Self::Event> {
        let mut events = Vec::new();
        section_heading(ui, UI_TEXT.aoi_selector_heading);

        for aoi in self.aois {
            let mut checked = self.selection.is_selected(aoi.key);
            if ui.checkbox(&mut checked, aoi.name).changed() {
                events.push(aoi.key.to_string());

                #[cfg(debug_assertions)]
                if DEBUG_FLAGS.print_ui_interactions {
                    log::info!("[selector] checkbox toggled: {}", aoi.key);
                }
            }
        }

        ui.add_space(10.0);
        events
    }
}
