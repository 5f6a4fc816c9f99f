use eframe::egui::{self, RichText, Ui};
use egui_extras::{Column, TableBuilder};

use kick_lens::data::cross_ref::applied_conditions;
use kick_lens::report::{counts_line, fixture_line, kick_row, KICK_LISTING_COLUMNS, NO_MATCHES};

use crate::state::AppState;

/// Matches consistent with the filter. Only shown when fixtures are loaded.
pub fn match_information(ui: &mut Ui, state: &AppState) {
    let Some(store) = &state.store else {
        return;
    };
    if !store.has_fixtures() {
        return;
    }

    ui.heading("Match Information");

    let conditions = applied_conditions(&state.spec);
    if !conditions.is_empty() {
        ui.label(RichText::new(format!("Applied Conditions: {}", conditions.join(", "))).strong());
    }
    ui.label(RichText::new(counts_line(&state.outcome.fixtures, state.visible_count())).strong());

    egui::CollapsingHeader::new("View Fixtures")
        .id_salt("fixtures")
        .default_open(false)
        .show(ui, |ui: &mut Ui| {
            let xref = &state.outcome.fixtures;
            if xref.is_empty() {
                ui.label(NO_MATCHES);
                return;
            }
            for fixture in xref.fixtures(store.fixtures()) {
                let line = fixture_line(fixture);
                if xref.has_kicks(fixture) {
                    ui.label(RichText::new(format!("🏉 {line}")).strong());
                } else {
                    ui.label(format!("     {line}"));
                }
            }
        });
}

/// Tabular listing of the visible kicks.
pub fn kick_table(ui: &mut Ui, state: &AppState) {
    egui::CollapsingHeader::new("View Detailed Kick Data")
        .id_salt("kick_table")
        .default_open(false)
        .show(ui, |ui: &mut Ui| {
            if state.visible_count() == 0 {
                ui.label(kick_lens::report::NO_KICKS);
                return;
            }
            let rows: Vec<[String; 10]> = state.visible_kicks().map(kick_row).collect();

            ui.push_id("kick_table_body", |ui: &mut Ui| {
                TableBuilder::new(ui)
                    .striped(true)
                    .max_scroll_height(360.0)
                    .columns(Column::auto().resizable(true), KICK_LISTING_COLUMNS.len())
                    .header(20.0, |mut header| {
                        for name in KICK_LISTING_COLUMNS {
                            header.col(|ui: &mut Ui| {
                                ui.strong(name);
                            });
                        }
                    })
                    .body(|body| {
                        body.rows(18.0, rows.len(), |mut row| {
                            let cells = &rows[row.index()];
                            for cell in cells {
                                row.col(|ui: &mut Ui| {
                                    ui.label(cell.as_str());
                                });
                            }
                        });
                    });
            });
        });
}
