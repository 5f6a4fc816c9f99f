use eframe::egui::{Color32, Ui};
use egui_plot::{Line, Plot, PlotPoints, Points};

use kick_lens::data::loader::kick_columns;
use kick_lens::data::model::{FieldBounds, KickRecord};

use crate::state::AppState;

// ---------------------------------------------------------------------------
// Kick chart (central panel)
// ---------------------------------------------------------------------------

/// Field coordinates grow downwards; the plot's y axis grows upwards.
fn to_plot(x: f64, y: f64) -> [f64; 2] {
    [x, -y]
}

fn hover_text(kick: &KickRecord) -> String {
    let mut text = format!("Player: {}", kick.player.as_deref().unwrap_or("-"));
    if let Some(kick_type) = &kick.kick_type {
        text.push_str(&format!("\nType: {kick_type}"));
    }
    if let Some(outcome) = &kick.outcome {
        text.push_str(&format!("\nOutcome: {outcome}"));
    }
    if let Some(minute) = kick.display_field(kick_columns::GAME_MINUTE) {
        text.push_str(&format!("\nTime: {minute}"));
    }
    text.push_str(&format!("\n{} → {}", kick.team, kick.opposition));
    text
}

/// Halfway marking: across the full length at the middle of the width.
fn halfway_segment(bounds: &FieldBounds) -> [[f64; 2]; 2] {
    let [x0, x1] = bounds.x;
    let half = (bounds.y[0] + bounds.y[1]) / 2.0;
    [to_plot(x0, half), to_plot(x1, half)]
}

/// Field outline and halfway line.
fn field_lines(bounds: &FieldBounds) -> Vec<Line> {
    let [x0, x1] = bounds.x;
    let [y0, y1] = bounds.y;
    let outline: PlotPoints = vec![
        to_plot(x0, y0),
        to_plot(x1, y0),
        to_plot(x1, y1),
        to_plot(x0, y1),
        to_plot(x0, y0),
    ]
    .into();
    let halfway: PlotPoints = halfway_segment(bounds).to_vec().into();

    let field = Color32::from_rgb(0, 100, 0);
    vec![
        Line::new(outline).color(field).width(2.0),
        Line::new(halfway).color(field).width(1.0),
    ]
}

/// Render the kick chart: one start→end line per visible kick.
pub fn kick_plot(ui: &mut Ui, state: &AppState) {
    if state.store.is_none() {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("Open a kicks file to begin  (File → Open kicks…)");
        });
        return;
    }
    if state.visible_count() == 0 {
        ui.label(kick_lens::report::NO_KICKS);
    }

    let bounds = state.config.field;
    let color_map = &state.color_map;

    Plot::new("kick_plot")
        .height(520.0)
        .data_aspect(1.0)
        .show_axes(false)
        .show_grid(false)
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(false)
        .allow_zoom(true)
        .include_x(bounds.x[0])
        .include_x(bounds.x[1])
        .include_y(-bounds.y[0])
        .include_y(-bounds.y[1])
        .label_formatter(|name, _value| name.to_string())
        .show(ui, |plot_ui| {
            for line in field_lines(&bounds) {
                plot_ui.line(line);
            }

            for kick in state.visible_kicks() {
                let color = color_map
                    .as_ref()
                    .map(|cm| cm.color_for(kick))
                    .unwrap_or(Color32::LIGHT_BLUE);

                let start = to_plot(kick.start.x, kick.start.y);
                let end = to_plot(kick.end.x, kick.end.y);

                plot_ui.line(
                    Line::new(PlotPoints::from(vec![start, end]))
                        .name(hover_text(kick))
                        .color(color)
                        .width(2.0),
                );
                plot_ui.points(Points::new(vec![start]).radius(5.0).color(Color32::GRAY));
                plot_ui.points(Points::new(vec![end]).radius(4.0).color(Color32::BLACK));
            }
        });

    // Legend
    if let Some(cm) = color_map {
        ui.horizontal_wrapped(|ui: &mut Ui| {
            for (label, color) in cm.legend_entries() {
                ui.colored_label(color, format!("■ {label}"));
            }
        });
    }
}
