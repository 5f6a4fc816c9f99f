use std::path::PathBuf;

use eframe::egui::{self, emath::Numeric, Color32, RichText, ScrollArea, Ui};

use kick_lens::data::filter::{InclusiveRange, Selection};
use kick_lens::data::loader;
use kick_lens::DatasetStore;

use crate::color::ColorBy;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Widgets
// ---------------------------------------------------------------------------

/// Dropdown over `All` plus the given options. Returns true on change.
fn selection_combo(
    ui: &mut Ui,
    label: &str,
    selected: &mut Selection<String>,
    options: &[String],
) -> bool {
    let mut changed = false;
    ui.label(label);
    egui::ComboBox::from_id_salt(label)
        .selected_text(selected.to_string())
        .width(ui.available_width() * 0.9)
        .show_ui(ui, |ui: &mut Ui| {
            if ui.selectable_label(selected.is_all(), "All").clicked() && !selected.is_all() {
                *selected = Selection::All;
                changed = true;
            }
            for option in options {
                let is_selected = selected.value() == Some(option);
                if ui.selectable_label(is_selected, option).clicked() && !is_selected {
                    *selected = Selection::Only(option.clone());
                    changed = true;
                }
            }
        });
    changed
}

/// Min / max slider pair. Keeps `lo <= hi`. Returns true on change.
fn range_sliders<T: Numeric>(
    ui: &mut Ui,
    label: &str,
    range: &mut InclusiveRange<T>,
    bounds: [T; 2],
) -> bool {
    ui.label(label);
    let mut changed = false;
    changed |= ui
        .add(egui::Slider::new(&mut range.lo, bounds[0]..=bounds[1]).text("min"))
        .changed();
    changed |= ui
        .add(egui::Slider::new(&mut range.hi, bounds[0]..=bounds[1]).text("max"))
        .changed();
    if range.lo > range.hi {
        range.hi = range.lo;
    }
    changed
}

// ---------------------------------------------------------------------------
// Left side panel – filter widgets
// ---------------------------------------------------------------------------

/// Render the left filter panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Filters");
    ui.separator();

    let Some(store) = &state.store else {
        ui.label("No dataset loaded.");
        return;
    };
    let has_fixtures = store.has_fixtures();

    // Clone what we need so we can mutate state inside the panel.
    let options = state.options.clone();
    let players = state.player_options();
    let field = state.config.field;
    let round_bounds = [state.round_bounds.lo, state.round_bounds.hi];

    let mut changed = false;

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            // ---- Round ----
            ui.strong("Round Filter");
            if has_fixtures {
                changed |= range_sliders(ui, "Round Number", &mut state.spec.rounds, round_bounds);
            } else {
                ui.label(
                    RichText::new("No fixtures loaded: round, venue, ground and weather filters are off.")
                        .italics(),
                );
            }
            ui.separator();

            // ---- Teams ----
            ui.strong("Team Filters");
            let mut kicking_team = state.spec.kicking_team.clone();
            if selection_combo(ui, "Kicking Team", &mut kicking_team, &options.kicking_teams) {
                state.set_kicking_team(kicking_team);
            }
            changed |= selection_combo(
                ui,
                "Receiving Team",
                &mut state.spec.receiving_team,
                &options.receiving_teams,
            );
            changed |= selection_combo(ui, "Kicking Player", &mut state.spec.player, &players);
            ui.separator();

            // ---- Kick ----
            ui.strong("Kick Filters");
            changed |= selection_combo(ui, "Kick Type", &mut state.spec.kick_type, &options.kick_types);
            changed |= selection_combo(
                ui,
                "Kick Outcome",
                &mut state.spec.kick_outcome,
                &options.outcomes,
            );
            ui.separator();

            // ---- Field position ----
            ui.strong("Field Position Filters");
            changed |= range_sliders(ui, "Start Length", &mut state.spec.start_x, field.x);
            changed |= range_sliders(ui, "Start Width", &mut state.spec.start_y, field.y);
            changed |= range_sliders(ui, "End Length", &mut state.spec.end_x, field.x);
            changed |= range_sliders(ui, "End Width", &mut state.spec.end_y, field.y);
            ui.separator();

            // ---- Match conditions ----
            ui.strong("Match Condition Filters");
            changed |= ui
                .checkbox(&mut state.tackle_enabled, "Filter by tackle number")
                .changed();
            if state.tackle_enabled {
                changed |= range_sliders(
                    ui,
                    "Tackle Number",
                    &mut state.tackle_range,
                    field.tackle_number,
                );
            }
            changed |= range_sliders(
                ui,
                "Game Time (seconds)",
                &mut state.spec.game_seconds,
                field.game_seconds,
            );
            if has_fixtures {
                changed |= selection_combo(ui, "Venue", &mut state.spec.venue, &options.venues);
                changed |= selection_combo(
                    ui,
                    "Ground Condition",
                    &mut state.spec.ground_condition,
                    &options.ground_conditions,
                );
                changed |= selection_combo(ui, "Weather", &mut state.spec.weather, &options.weathers);
            }
        });

    if changed {
        state.refilter();
    }
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open kicks…").clicked() {
                open_kicks_dialog(state);
                ui.close_menu();
            }
            if ui.button("Open fixtures…").clicked() {
                open_fixtures_dialog(state);
                ui.close_menu();
            }
            if ui.button("Reload configured files").clicked() {
                load_configured(state);
                ui.close_menu();
            }
        });

        ui.separator();

        if let Some(store) = &state.store {
            ui.label(format!(
                "{} kicks loaded, {} visible",
                store.kicks().len(),
                state.visible_count()
            ));
        }

        ui.separator();

        let current = state.color_by;
        egui::ComboBox::from_id_salt("color_by")
            .selected_text(format!("Color by: {}", current.label()))
            .show_ui(ui, |ui: &mut Ui| {
                for color_by in ColorBy::ALL {
                    if ui
                        .selectable_label(current == color_by, color_by.label())
                        .clicked()
                    {
                        state.set_color_by(color_by);
                    }
                }
            });

        if ui.button("Reset filters").clicked() {
            state.reset_filters();
        }

        if let Some(msg) = &state.status_message {
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// Loading
// ---------------------------------------------------------------------------

/// Load both tables from the configured paths.
pub fn load_configured(state: &mut AppState) {
    match DatasetStore::open(&state.config.data) {
        Ok(store) => state.set_store(store),
        Err(e) => {
            log::error!("Failed to load configured data: {e:#}");
            state.status_message = Some(format!("Error: {e:#}"));
        }
    }
}

fn pick_table_file(title: &str) -> Option<PathBuf> {
    rfd::FileDialog::new()
        .set_title(title)
        .add_filter("Supported files", &["csv", "json", "parquet", "pq"])
        .add_filter("CSV", &["csv"])
        .add_filter("JSON", &["json"])
        .add_filter("Parquet", &["parquet", "pq"])
        .pick_file()
}

pub fn open_kicks_dialog(state: &mut AppState) {
    let Some(path) = pick_table_file("Open kicks data") else {
        return;
    };
    match loader::load_kicks(&path) {
        Ok(kicks) => {
            state.config.data.kicks_path = path;
            state.replace_kicks(kicks);
        }
        Err(e) => {
            log::error!("Failed to load kicks: {e:#}");
            state.status_message = Some(format!("Error: {e:#}"));
        }
    }
}

pub fn open_fixtures_dialog(state: &mut AppState) {
    let Some(path) = pick_table_file("Open fixtures data") else {
        return;
    };
    match loader::load_fixtures(&path) {
        Ok(fixtures) => {
            state.config.data.fixtures_path = path;
            state.replace_fixtures(fixtures);
        }
        Err(e) => {
            log::error!("Failed to load fixtures: {e:#}");
            state.status_message = Some(format!("Error: {e:#}"));
        }
    }
}
