//! Writes a small synthetic season (`data/kicks.csv`, `data/fixtures.csv`)
//! for trying the dashboard without real data.

use std::path::Path;

use anyhow::{Context, Result};

use kick_lens::data::loader::{fixture_columns as fc, kick_columns as kc};

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    fn range(&mut self, lo: f64, hi: f64) -> f64 {
        lo + (hi - lo) * self.next_f64()
    }

    fn pick<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        &items[(self.next_u64() % items.len() as u64) as usize]
    }
}

const TEAMS: [(&str, &[&str]); 4] = [
    ("Storm", &["Hughes", "Munster"]),
    ("Panthers", &["Cleary", "Luai"]),
    ("Broncos", &["Reynolds", "Walsh"]),
    ("Rabbitohs", &["Walker", "Mitchell"]),
];
const VENUES: [&str; 3] = ["AAMI Park", "BlueBet Stadium", "Suncorp Stadium"];
const GROUNDS: [&str; 3] = ["Good", "Heavy", ""];
const WEATHER: [&str; 3] = ["Fine", "Rain", "Overcast"];
const KICK_TYPES: [&str; 4] = ["Bomb", "Grubber", "Chip", "Long"];
const OUTCOMES: [&str; 10] = [
    "Try",
    "Forces Dropout",
    "40/20",
    "Opp Error",
    "Regained",
    "Kick Error",
    "20m Restart",
    "Own Error",
    "Out on Full",
    "Defused",
];

fn main() -> Result<()> {
    let mut rng = SimpleRng::new(42);
    let out_dir = Path::new("data");
    std::fs::create_dir_all(out_dir).context("creating data directory")?;

    let mut fixtures = csv::Writer::from_path(out_dir.join("fixtures.csv"))
        .context("creating fixtures.csv")?;
    fixtures.write_record([
        fc::ROUND_ID,
        fc::ROUND_NAME,
        fc::GAME_ID,
        fc::HOME_TEAM,
        fc::AWAY_TEAM,
        fc::HOME_SCORE,
        fc::AWAY_SCORE,
        fc::VENUE,
        fc::GROUND_CONDITION,
        fc::WEATHER,
    ])?;

    let mut kicks =
        csv::Writer::from_path(out_dir.join("kicks.csv")).context("creating kicks.csv")?;
    kicks.write_record([
        kc::GAME_ID,
        kc::TEAM,
        kc::OPPOSITION,
        kc::PLAYER,
        kc::KICK_TYPE,
        kc::OUTCOME,
        kc::START_X,
        kc::START_Y,
        kc::END_X,
        kc::END_Y,
        kc::GAME_SECONDS,
        kc::GAME_MINUTE,
        kc::TACKLE_NUMBER,
    ])?;

    let mut n_games = 0;
    let mut n_kicks = 0;
    for round in 1..=6_i64 {
        // Each round: every team plays once
        for pair in [(0, 1), (2, 3)] {
            let (home_i, away_i) = if round % 2 == 0 { (pair.1, pair.0) } else { pair };
            let (home, _) = TEAMS[home_i];
            let (away, _) = TEAMS[away_i];
            let game_id = 1000 + round * 10 + home_i as i64;

            fixtures.write_record([
                round.to_string(),
                format!("Round {round}"),
                game_id.to_string(),
                home.to_string(),
                away.to_string(),
                ((rng.next_u64() % 40) as i64).to_string(),
                ((rng.next_u64() % 40) as i64).to_string(),
                rng.pick(&VENUES).to_string(),
                rng.pick(&GROUNDS).to_string(),
                rng.pick(&WEATHER).to_string(),
            ])?;
            n_games += 1;

            for _ in 0..20 {
                let kicking_home = rng.next_f64() < 0.5;
                let (team_i, opp_i) = if kicking_home { (home_i, away_i) } else { (away_i, home_i) };
                let (team, players) = TEAMS[team_i];
                let seconds = rng.range(0.0, 4800.0).round();

                kicks.write_record([
                    game_id.to_string(),
                    team.to_string(),
                    TEAMS[opp_i].0.to_string(),
                    rng.pick(players).to_string(),
                    rng.pick(&KICK_TYPES).to_string(),
                    rng.pick(&OUTCOMES).to_string(),
                    format!("{:.1}", rng.range(0.0, 600.0)),
                    format!("{:.1}", rng.range(20.0, 680.0)),
                    format!("{:.1}", rng.range(500.0, 1050.0)),
                    format!("{:.1}", rng.range(0.0, 700.0)),
                    seconds.to_string(),
                    format!("{}:{:02}", seconds as i64 / 60, seconds as i64 % 60),
                    (1 + rng.next_u64() % 6).to_string(),
                ])?;
                n_kicks += 1;
            }
        }
    }

    fixtures.flush()?;
    kicks.flush()?;
    println!("Wrote {n_games} fixtures and {n_kicks} kicks to {}", out_dir.display());
    Ok(())
}
