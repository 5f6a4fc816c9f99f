use std::collections::BTreeMap;

use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

use kick_lens::data::model::{KickRecord, KickTable, OutcomeClass};

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues.
pub fn generate_palette(n: usize) -> Vec<Color32> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n as f32) * 360.0;
            let hsl = Hsl::new(hue, 0.75, 0.55);
            let rgb: Srgb = hsl.into_color();
            Color32::from_rgb(
                (rgb.red * 255.0) as u8,
                (rgb.green * 255.0) as u8,
                (rgb.blue * 255.0) as u8,
            )
        })
        .collect()
}

/// Fixed line colour per outcome class.
pub fn outcome_color(class: OutcomeClass) -> Color32 {
    match class {
        OutcomeClass::Try => Color32::from_rgb(0, 255, 0),
        OutcomeClass::Success => Color32::from_rgba_unmultiplied(60, 60, 255, 204),
        OutcomeClass::Failure => Color32::from_rgba_unmultiplied(255, 60, 60, 204),
        OutcomeClass::Neutral => Color32::from_rgba_unmultiplied(0, 0, 0, 128),
    }
}

// ---------------------------------------------------------------------------
// Color mapping: kick → Color32
// ---------------------------------------------------------------------------

/// What the kick lines are coloured by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorBy {
    #[default]
    Outcome,
    KickingTeam,
    Player,
}

impl ColorBy {
    pub const ALL: [ColorBy; 3] = [ColorBy::Outcome, ColorBy::KickingTeam, ColorBy::Player];

    pub fn label(&self) -> &'static str {
        match self {
            ColorBy::Outcome => "Outcome",
            ColorBy::KickingTeam => "Kicking team",
            ColorBy::Player => "Player",
        }
    }

    fn key<'a>(&self, kick: &'a KickRecord) -> Option<&'a str> {
        match self {
            ColorBy::Outcome => None,
            ColorBy::KickingTeam => Some(kick.team.as_str()),
            ColorBy::Player => kick.player.as_deref(),
        }
    }
}

/// Maps kicks to colours: fixed outcome colours, or one generated colour per
/// team / player.
#[derive(Debug, Clone)]
pub struct ColorMap {
    pub color_by: ColorBy,
    mapping: BTreeMap<String, Color32>,
    default_color: Color32,
}

impl ColorMap {
    /// Build a colour map over every value in the full table, so colours stay
    /// put while filters change.
    pub fn new(color_by: ColorBy, kicks: &KickTable) -> Self {
        let values = match color_by {
            ColorBy::Outcome => Vec::new(),
            ColorBy::KickingTeam => kicks.kicking_teams(),
            ColorBy::Player => kicks.players(None),
        };
        let palette = generate_palette(values.len());
        let mapping = values.into_iter().zip(palette).collect();

        ColorMap {
            color_by,
            mapping,
            default_color: Color32::GRAY,
        }
    }

    /// Look up the colour for a given kick.
    pub fn color_for(&self, kick: &KickRecord) -> Color32 {
        match self.color_by {
            ColorBy::Outcome => outcome_color(kick.outcome_class()),
            other => other
                .key(kick)
                .and_then(|k| self.mapping.get(k))
                .copied()
                .unwrap_or(self.default_color),
        }
    }

    /// Return the legend entries (label → colour) for the UI.
    pub fn legend_entries(&self) -> Vec<(String, Color32)> {
        match self.color_by {
            ColorBy::Outcome => [
                OutcomeClass::Try,
                OutcomeClass::Success,
                OutcomeClass::Failure,
                OutcomeClass::Neutral,
            ]
            .into_iter()
            .map(|c| (c.label().to_string(), outcome_color(c)))
            .collect(),
            _ => self
                .mapping
                .iter()
                .map(|(v, c)| (v.clone(), *c))
                .collect(),
        }
    }
}
