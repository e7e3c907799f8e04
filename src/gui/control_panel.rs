//! Control Panel Widget
//! Left side panel with navigation, player search and status.

use crate::view::View;
use egui::{Color32, ComboBox, RichText};

/// Left side control panel.
pub struct ControlPanel {
    pub view: View,
    pub search_query: String,
    pub selected_player: Option<String>,
    pub status: String,
}

impl Default for ControlPanel {
    fn default() -> Self {
        Self {
            view: View::default(),
            search_query: String::new(),
            selected_player: None,
            status: "Ready".to_string(),
        }
    }
}

impl ControlPanel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Draw the control panel. `player_names` fills the player selector
    /// while the player view is active.
    pub fn show(&mut self, ui: &mut egui::Ui, player_names: &[&str]) -> ControlPanelAction {
        let mut action = ControlPanelAction::None;

        // Title
        ui.vertical_centered(|ui| {
            ui.add_space(5.0);
            ui.label(
                RichText::new("⚽ FIFA Player Explorer")
                    .size(20.0)
                    .color(Color32::from_rgb(100, 149, 237)),
            );
        });
        ui.add_space(10.0);
        ui.separator();
        ui.add_space(5.0);

        // ===== Navigation =====
        ui.label(RichText::new("Navigate").size(14.0).strong());
        ui.add_space(5.0);

        for view in View::ALL {
            if ui
                .selectable_value(&mut self.view, view, view.label())
                .clicked()
            {
                action = ControlPanelAction::ViewChanged;
            }
        }

        // ===== Player Search =====
        if self.view == View::ExplorePlayer {
            ui.add_space(15.0);
            ui.separator();
            ui.add_space(10.0);

            ui.label(RichText::new("Search Player").size(14.0).strong());
            ui.add_space(5.0);
            if ui.text_edit_singleline(&mut self.search_query).changed() {
                action = ControlPanelAction::QueryChanged;
            }

            if !player_names.is_empty() {
                ui.add_space(10.0);
                ui.label("Select a Player");
                let selected = self.selected_player.clone().unwrap_or_default();
                ComboBox::from_id_salt("player_select")
                    .width(ui.available_width())
                    .selected_text(&selected)
                    .show_ui(ui, |ui| {
                        for name in player_names {
                            if ui.selectable_label(selected == *name, *name).clicked() {
                                self.selected_player = Some(name.to_string());
                                action = ControlPanelAction::PlayerSelected;
                            }
                        }
                    });
            }
        }

        ui.add_space(15.0);
        ui.separator();
        ui.add_space(10.0);

        // ===== Status =====
        let status_color = if self.status.contains("Error") {
            Color32::from_rgb(220, 53, 69)
        } else {
            Color32::GRAY
        };
        ui.label(RichText::new(&self.status).size(11.0).color(status_color));

        action
    }

    pub fn set_status(&mut self, status: &str) {
        self.status = status.to_string();
    }
}

/// Actions triggered by control panel
#[derive(Debug, Clone, PartialEq)]
pub enum ControlPanelAction {
    None,
    ViewChanged,
    QueryChanged,
    PlayerSelected,
}
