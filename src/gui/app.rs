//! FIFA Player Explorer Main Application
//! Main window with control panel and the active view.

use crate::charts::StaticChartRenderer;
use crate::data::{DataProcessor, PlayerTable};
use crate::gui::views::{DatasetSummary, ViewAction, ViewPanel};
use crate::gui::{ControlPanel, ControlPanelAction};
use crate::view::{self, View, ViewCache};
use egui::SidePanel;
use log::{debug, error, info, warn};

/// Side length of exported radar images, in pixels.
const EXPORT_SIZE: u32 = 600;

/// Main application window.
pub struct ExplorerApp {
    table: PlayerTable,
    summary: DatasetSummary,
    cache: ViewCache,
    control_panel: ControlPanel,
    selected_club: Option<String>,
}

impl ExplorerApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, table: PlayerTable, source: String) -> Self {
        if table.is_empty() {
            warn!("Player table is empty; every view will be blank");
        }

        let cache = ViewCache::build(&table);
        let summary = DatasetSummary {
            source,
            players: table.len(),
            clubs: cache.clubs.len(),
        };

        Self {
            table,
            summary,
            cache,
            control_panel: ControlPanel::new(),
            selected_club: None,
        }
    }

    /// Save the radar chart of `player_name` as PNG and open it.
    fn handle_export_radar(&mut self, player_name: &str) {
        let Some(player) = DataProcessor::find_first(&self.table, player_name) else {
            self.control_panel
                .set_status(&format!("Error: no player named {}", player_name));
            return;
        };

        let output_path = match rfd::FileDialog::new()
            .add_filter("PNG Image", &["png"])
            .set_file_name(StaticChartRenderer::default_file_name(player_name))
            .save_file()
        {
            Some(path) => path,
            None => return, // User cancelled
        };

        match StaticChartRenderer::render_radar_png(player, &output_path, EXPORT_SIZE) {
            Ok(()) => {
                info!("Radar chart saved to {}", output_path.display());
                self.control_panel
                    .set_status(&format!("Saved {}", output_path.display()));
                if let Err(e) = open::that(&output_path) {
                    error!("Failed to open {}: {}", output_path.display(), e);
                }
            }
            Err(e) => {
                error!("Radar export failed: {}", e);
                self.control_panel.set_status(&format!("Error: {}", e));
            }
        }
    }
}

impl eframe::App for ExplorerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let mut player_search = (self.control_panel.view == View::ExplorePlayer).then(|| {
            view::resolve_player(
                &self.table,
                &self.control_panel.search_query,
                &mut self.control_panel.selected_player,
            )
        });

        // Left panel - Control Panel
        let mut action = ControlPanelAction::None;
        SidePanel::left("control_panel")
            .min_width(260.0)
            .max_width(320.0)
            .show(ctx, |ui| {
                let names = player_search
                    .as_ref()
                    .map(|s| s.names.as_slice())
                    .unwrap_or_default();
                action = self.control_panel.show(ui, names);
            });

        if action != ControlPanelAction::None {
            debug!("Control panel action: {:?}", action);
            if self.control_panel.view == View::ExplorePlayer {
                player_search = Some(view::resolve_player(
                    &self.table,
                    &self.control_panel.search_query,
                    &mut self.control_panel.selected_player,
                ));
            }
        }

        // Central panel - Active view
        let mut view_action = ViewAction::None;
        egui::CentralPanel::default().show(ctx, |ui| match self.control_panel.view {
            View::Home => ViewPanel::show_home(ui, &self.summary),
            View::ExplorePlayer => {
                if let Some(search) = &player_search {
                    view_action = ViewPanel::show_player(ui, search);
                }
            }
            View::Leaderboard => ViewPanel::show_leaderboard(ui, &self.cache.leaderboard),
            View::ExploreByClub => {
                let roster =
                    view::resolve_club(&self.table, &self.cache.clubs, &mut self.selected_club);
                ViewPanel::show_club_roster(ui, &roster, &mut self.selected_club);
            }
        });

        if let ViewAction::ExportRadar(name) = view_action {
            self.handle_export_radar(&name);
        }
    }
}
