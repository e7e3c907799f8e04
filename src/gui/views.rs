//! View Panels
//! Central panel content for each of the four views.

use crate::charts::{ChartPlotter, RadarSeries};
use crate::data::PlayerRecord;
use crate::view::{ClubRoster, PlayerOutcome, PlayerSearch};
use egui::{Color32, ComboBox, RichText, ScrollArea};

const RADAR_SIZE: f32 = 420.0;
const WARNING_COLOR: Color32 = Color32::from_rgb(255, 193, 7);

/// Dataset facts shown on the home view.
pub struct DatasetSummary {
    pub source: String,
    pub players: usize,
    pub clubs: usize,
}

/// Actions triggered from the central panel
#[derive(Debug, Clone, PartialEq)]
pub enum ViewAction {
    None,
    ExportRadar(String),
}

pub struct ViewPanel;

impl ViewPanel {
    pub fn show_home(ui: &mut egui::Ui, summary: &DatasetSummary) {
        ui.vertical_centered(|ui| {
            ui.add_space(40.0);
            ui.label(RichText::new("⚽ FIFA Player Explorer").size(28.0).strong());
            ui.add_space(10.0);
            ui.label(
                RichText::new("Welcome to FIFA Explorer ⚡ Explore Players, Clubs and More!")
                    .size(16.0),
            );
            ui.add_space(20.0);
            ui.label(
                RichText::new(format!(
                    "{} players across {} clubs",
                    summary.players, summary.clubs
                ))
                .size(14.0),
            );
            ui.label(
                RichText::new(format!("Source: {}", summary.source))
                    .size(11.0)
                    .color(Color32::GRAY),
            );
        });
    }

    /// Player detail with badge and radar, or the search warning.
    pub fn show_player(ui: &mut egui::Ui, search: &PlayerSearch) -> ViewAction {
        let player = match &search.outcome {
            PlayerOutcome::Detail(player) => *player,
            other => {
                if let Some(message) = other.warning() {
                    Self::warning(ui, message);
                }
                return ViewAction::None;
            }
        };

        let mut action = ViewAction::None;
        let badge = player.badge();

        ScrollArea::vertical().show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.hyperlink_to("📷 Photo", player.face_url());
                ui.add_space(10.0);
                ui.label(RichText::new(player.name()).size(24.0).strong());
            });
            ui.label(RichText::new(badge.label()).size(18.0).color(badge.color()));
            ui.label(format!("Overall: {}", player.overall));
            ui.label(format!(
                "Age: {} | Nationality: {}",
                player.age_label(),
                player.nationality_name.as_deref().unwrap_or("?")
            ));
            ui.label(format!("Club: {}", player.club_label()));

            ui.add_space(15.0);
            ui.horizontal(|ui| {
                ui.label(RichText::new("📊 Skill Overview").size(16.0).strong());
                if ui.button("💾 Save PNG").clicked() {
                    action = ViewAction::ExportRadar(player.name().to_string());
                }
            });
            ui.add_space(5.0);

            let series = RadarSeries::from_skills(&player.skills);
            ChartPlotter::draw_radar_chart(ui, player.name(), &series, RADAR_SIZE);
        });

        action
    }

    pub fn show_leaderboard(ui: &mut egui::Ui, top: &[PlayerRecord]) {
        ui.label(
            RichText::new("🏆 Top 10 Players by Overall Rating")
                .size(18.0)
                .strong(),
        );
        ui.add_space(10.0);

        ScrollArea::vertical().show(ui, |ui| {
            for player in top {
                Self::player_row(ui, player, &player.leaderboard_line(), 34);
            }
        });
    }

    /// Club selector followed by the roster of the selected club.
    pub fn show_club_roster(
        ui: &mut egui::Ui,
        roster: &ClubRoster,
        selection: &mut Option<String>,
    ) {
        ui.label(RichText::new("🏟 Explore Players by Club").size(18.0).strong());
        ui.add_space(10.0);

        if roster.clubs.is_empty() {
            ui.label("No clubs in the dataset.");
            return;
        }

        ui.horizontal(|ui| {
            ui.label("Select Club");
            ComboBox::from_id_salt("club_select")
                .width(250.0)
                .selected_text(roster.selected.unwrap_or_default())
                .show_ui(ui, |ui| {
                    for club in roster.clubs {
                        if ui
                            .selectable_label(roster.selected == Some(club.as_str()), club.as_str())
                            .clicked()
                        {
                            *selection = Some(club.clone());
                        }
                    }
                });
        });

        if let Some(heading) = roster.heading() {
            ui.add_space(10.0);
            ui.label(RichText::new(heading).size(16.0).strong());
        }
        ui.add_space(5.0);

        ScrollArea::vertical().show(ui, |ui| {
            for player in &roster.players {
                Self::player_row(ui, player, &player.roster_line(), 51);
            }
        });
    }

    fn player_row(ui: &mut egui::Ui, player: &PlayerRecord, text: &str, shade: u8) {
        egui::Frame::none()
            .fill(Color32::from_gray(shade))
            .rounding(10.0)
            .inner_margin(10.0)
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.horizontal(|ui| {
                    ui.hyperlink_to("📷", player.face_url());
                    ui.label(RichText::new(text).strong().color(Color32::WHITE));
                });
            });
        ui.add_space(8.0);
    }

    fn warning(ui: &mut egui::Ui, message: &str) {
        ui.add_space(20.0);
        ui.label(
            RichText::new(format!("⚠ {}", message))
                .size(16.0)
                .color(WARNING_COLOR),
        );
    }
}
