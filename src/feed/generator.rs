use chrono::{DateTime, Duration, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use tracing::info;

use crate::catalog::{Event, MarketNode, Markets, Sport, SportSummary};
use crate::error::FeedError;

// ============================================================================
// CONSTANTS
// ============================================================================

/// Bookmaker margin applied on top of fair odds
pub const DEFAULT_MARGIN: f64 = 1.06;

/// Events generated per sport
pub const EVENTS_PER_SPORT: usize = 30;

/// Leading events republished as featured
pub const FEATURED_COUNT: usize = 10;

/// Share of events generated as in-play
pub const LIVE_PROBABILITY: f64 = 0.3;

const FOOTBALL_LEAGUES: [&str; 5] = ["Premier League", "La Liga", "Serie A", "Bundesliga", "Ligue 1"];
const TENNIS_TOURNAMENTS: [&str; 5] = ["Wimbledon", "US Open", "French Open", "Australian Open", "ATP Masters"];
const BASKETBALL_LEAGUES: [&str; 5] = ["NBA", "EuroLeague", "NCAA", "NBL", "ACB"];

const FOOTBALL_FIXTURES: [(&str, &str); EVENTS_PER_SPORT] = [
    ("Liverpool", "Arsenal"),
    ("Real Madrid", "Barcelona"),
    ("Bayern Munich", "Borussia Dortmund"),
    ("Manchester City", "Manchester United"),
    ("Chelsea", "Tottenham"),
    ("PSG", "Marseille"),
    ("Juventus", "AC Milan"),
    ("Inter Milan", "AS Roma"),
    ("Atletico Madrid", "Sevilla"),
    ("Ajax", "PSV"),
    ("Benfica", "Porto"),
    ("Celtic", "Rangers"),
    ("RB Leipzig", "Bayer Leverkusen"),
    ("Valencia", "Villarreal"),
    ("Newcastle", "Leeds United"),
    ("Everton", "West Ham"),
    ("Leicester", "Wolves"),
    ("Napoli", "Lazio"),
    ("Monaco", "Lyon"),
    ("Sporting CP", "Braga"),
    ("Feyenoord", "AZ Alkmaar"),
    ("River Plate", "Boca Juniors"),
    ("Flamengo", "Palmeiras"),
    ("Santos", "Corinthians"),
    ("Club America", "Guadalajara"),
    ("LA Galaxy", "LAFC"),
    ("Seattle Sounders", "Portland Timbers"),
    ("Atlanta United", "Orlando City"),
    ("NYCFC", "NY Red Bulls"),
    ("Toronto FC", "Montreal Impact"),
];

const TENNIS_FIXTURES: [(&str, &str); EVENTS_PER_SPORT] = [
    ("Novak Djokovic", "Rafael Nadal"),
    ("Carlos Alcaraz", "Daniil Medvedev"),
    ("Stefanos Tsitsipas", "Alexander Zverev"),
    ("Jannik Sinner", "Andrey Rublev"),
    ("Holger Rune", "Taylor Fritz"),
    ("Casper Ruud", "Felix Auger-Aliassime"),
    ("Hubert Hurkacz", "Cameron Norrie"),
    ("Frances Tiafoe", "Karen Khachanov"),
    ("Lorenzo Musetti", "Sebastian Korda"),
    ("Ben Shelton", "Tommy Paul"),
    ("Iga Swiatek", "Aryna Sabalenka"),
    ("Coco Gauff", "Elena Rybakina"),
    ("Jessica Pegula", "Ons Jabeur"),
    ("Caroline Garcia", "Maria Sakkari"),
    ("Petra Kvitova", "Belinda Bencic"),
    ("Beatriz Haddad Maia", "Daria Kasatkina"),
    ("Karolina Muchova", "Marketa Vondrousova"),
    ("Madison Keys", "Barbora Krejcikova"),
    ("Elina Svitolina", "Victoria Azarenka"),
    ("Qinwen Zheng", "Liudmila Samsonova"),
    ("Alexander Bublik", "Nicolas Jarry"),
    ("Grigor Dimitrov", "Alex de Minaur"),
    ("Ugo Humbert", "Adrian Mannarino"),
    ("Francisco Cerundolo", "Alejandro Davidovich Fokina"),
    ("Christopher Eubanks", "Jiri Lehecka"),
    ("Sebastian Baez", "Roberto Bautista Agut"),
    ("Tomas Martin Etcheverry", "Borna Coric"),
    ("Laslo Djere", "Daniel Evans"),
    ("Yoshihito Nishioka", "Aslan Karatsev"),
    ("Jan-Lennard Struff", "Matteo Berrettini"),
];

const BASKETBALL_FIXTURES: [(&str, &str); EVENTS_PER_SPORT] = [
    ("Los Angeles Lakers", "Boston Celtics"),
    ("Golden State Warriors", "Phoenix Suns"),
    ("Milwaukee Bucks", "Philadelphia 76ers"),
    ("Denver Nuggets", "Miami Heat"),
    ("Brooklyn Nets", "New York Knicks"),
    ("Dallas Mavericks", "San Antonio Spurs"),
    ("Memphis Grizzlies", "New Orleans Pelicans"),
    ("Sacramento Kings", "LA Clippers"),
    ("Cleveland Cavaliers", "Chicago Bulls"),
    ("Toronto Raptors", "Atlanta Hawks"),
    ("Portland Trail Blazers", "Utah Jazz"),
    ("Minnesota Timberwolves", "Oklahoma City Thunder"),
    ("Indiana Pacers", "Detroit Pistons"),
    ("Orlando Magic", "Charlotte Hornets"),
    ("Washington Wizards", "Houston Rockets"),
    ("Real Madrid", "Barcelona"),
    ("Olympiacos", "Panathinaikos"),
    ("CSKA Moscow", "Fenerbahce"),
    ("Maccabi Tel Aviv", "Bayern Munich"),
    ("Anadolu Efes", "Zalgiris Kaunas"),
    ("Virtus Bologna", "Olimpia Milano"),
    ("Monaco", "ASVEL"),
    ("Baskonia", "Valencia"),
    ("Alba Berlin", "Partizan Belgrade"),
    ("Red Star Belgrade", "Armani Milan"),
    ("Melbourne United", "Sydney Kings"),
    ("Perth Wildcats", "Brisbane Bullets"),
    ("Adelaide 36ers", "New Zealand Breakers"),
    ("Cairns Taipans", "Illawarra Hawks"),
    ("South East Melbourne", "Tasmania JackJumpers"),
];

const CORRECT_SCORES: [&str; 22] = [
    "0-0", "1-0", "2-0", "3-0", "4-0", "0-1", "1-1", "2-1", "3-1", "4-1", "0-2", "1-2", "2-2",
    "3-2", "4-2", "0-3", "1-3", "2-3", "3-3", "0-4", "1-4", "2-4",
];

// ============================================================================
// ODDS DATABASE
// ============================================================================

/// The whole fixture served by the mock server (`db.json`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OddsDatabase {
    pub events: Vec<Event>,
    pub featured: Vec<Event>,
    pub sports: Vec<SportSummary>,
    pub live: Vec<Event>,
    pub upcoming: Vec<Event>,
}

impl OddsDatabase {
    pub fn event(&self, id: u64) -> Option<&Event> {
        self.events.iter().find(|event| event.id == id)
    }

    pub fn load(path: &Path) -> Result<Self, FeedError> {
        let json = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&json)?)
    }

    pub fn save(&self, path: &Path) -> Result<(), FeedError> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Serve an existing fixture, or generate and persist a fresh one
    pub fn load_or_generate(path: &Path, seed: Option<u64>) -> Result<Self, FeedError> {
        if path.exists() {
            let database = Self::load(path)?;
            info!(path = %path.display(), events = database.events.len(), "📂 loaded odds fixture");
            return Ok(database);
        }

        let database = generate_with_seed(seed);
        database.save(path)?;
        info!(path = %path.display(), events = database.events.len(), "🎲 generated odds fixture");
        Ok(database)
    }
}

// ============================================================================
// ODDS HELPERS
// ============================================================================

/// Fair odds for `probability` with the bookmaker `margin`, rounded to 2dp
pub fn generate_odds(probability: f64, margin: f64) -> f64 {
    round2(1.0 / probability * margin)
}

fn odds(probability: f64) -> MarketNode {
    MarketNode::Price(generate_odds(probability, DEFAULT_MARGIN))
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn group<K, I>(entries: I) -> MarketNode
where
    K: Into<String>,
    I: IntoIterator<Item = (K, MarketNode)>,
{
    MarketNode::Group(
        entries
            .into_iter()
            .map(|(key, node)| (key.into(), node))
            .collect::<BTreeMap<String, MarketNode>>(),
    )
}

fn two_way(first: &str, first_prob: f64, second: &str, second_prob: f64) -> MarketNode {
    group([(first, odds(first_prob)), (second, odds(second_prob))])
}

fn generate_1x2<R: Rng>(rng: &mut R) -> MarketNode {
    let home = 0.25 + rng.gen::<f64>() * 0.4;
    let draw = 0.2 + rng.gen::<f64>() * 0.15;
    // Keep the long shot priced when home and draw take the whole book
    let away = (1.0 - home - draw).max(0.05);
    group([("home", odds(home)), ("draw", odds(draw)), ("away", odds(away))])
}

fn generate_over_under<R: Rng>(rng: &mut R) -> MarketNode {
    let over = 0.35 + rng.gen::<f64>() * 0.3;
    two_way("over", over, "under", 1.0 - over)
}

fn generate_handicap<R: Rng>(rng: &mut R, first: &str, second: &str) -> MarketNode {
    let first_prob = 0.35 + rng.gen::<f64>() * 0.3;
    two_way(first, first_prob, second, 1.0 - first_prob)
}

fn generate_correct_score<R: Rng>(rng: &mut R) -> MarketNode {
    let mut scores: Vec<(String, MarketNode)> = CORRECT_SCORES
        .iter()
        .map(|score| {
            let price = round2(5.0 + rng.gen::<f64>() * 45.0);
            (score.to_string(), MarketNode::Price(price))
        })
        .collect();
    scores.push((
        "other".to_string(),
        MarketNode::Price(round2(15.0 + rng.gen::<f64>() * 10.0)),
    ));
    group(scores)
}

fn ladder<I, F>(lines: I, mut node: F) -> MarketNode
where
    I: IntoIterator<Item = &'static str>,
    F: FnMut(&'static str) -> MarketNode,
{
    group(lines.into_iter().map(|line| (line, node(line))))
}

/// `over{line}` / `under{line}` pairs with the given over probabilities
fn line_totals(lines: &[(&str, f64)]) -> MarketNode {
    let mut entries = Vec::with_capacity(lines.len() * 2);
    for (line, over_prob) in lines {
        entries.push((format!("over{}", line), odds(*over_prob)));
        entries.push((format!("under{}", line), odds(1.0 - over_prob)));
    }
    group(entries)
}

fn odd_even() -> MarketNode {
    two_way("odd", 0.5, "even", 0.5)
}

fn start_time<R: Rng>(rng: &mut R, now: DateTime<Utc>, index: usize) -> DateTime<Utc> {
    let offset_secs = index as i64 * 3600 + rng.gen_range(0..86_400);
    now + Duration::seconds(offset_secs)
}

fn pick<'a, R: Rng>(rng: &mut R, options: &[&'a str]) -> &'a str {
    options[rng.gen_range(0..options.len())]
}

// ============================================================================
// EVENT GENERATORS
// ============================================================================

fn blank_event(id: u64, sport: Sport, start_time: DateTime<Utc>, is_live: bool) -> Event {
    Event {
        id,
        sport,
        league: None,
        tournament: None,
        home_team: None,
        away_team: None,
        player1: None,
        player2: None,
        start_time,
        is_live,
        minute: None,
        current_set: None,
        quarter: None,
        home_score: None,
        away_score: None,
        player1_sets: None,
        player2_sets: None,
        player1_games: None,
        player2_games: None,
        markets: Markets::new(),
        is_featured: false,
        view_count: None,
    }
}

pub fn generate_football_match<R: Rng>(
    rng: &mut R,
    id: u64,
    (home, away): (&str, &str),
    index: usize,
    now: DateTime<Utc>,
) -> Event {
    let start = start_time(rng, now, index);
    let is_live = rng.gen::<f64>() < LIVE_PROBABILITY;
    let mut event = blank_event(id, Sport::Football, start, is_live);

    event.league = Some(pick(rng, &FOOTBALL_LEAGUES).to_string());
    event.home_team = Some(home.to_string());
    event.away_team = Some(away.to_string());
    if is_live {
        event.minute = Some(rng.gen_range(0..90));
        event.home_score = Some(rng.gen_range(0..4));
        event.away_score = Some(rng.gen_range(0..4));
    }

    let btts = if rng.gen_bool(0.5) {
        group([("yes", MarketNode::Price(1.75)), ("no", MarketNode::Price(2.05))])
    } else {
        group([("yes", MarketNode::Price(2.10)), ("no", MarketNode::Price(1.65))])
    };

    let markets = &mut event.markets;
    markets.insert("1X2".into(), generate_1x2(rng));
    markets.insert(
        "doubleChance".into(),
        group([
            ("1X", odds(0.65 + rng.gen::<f64>() * 0.2)),
            ("12", odds(0.7 + rng.gen::<f64>() * 0.15)),
            ("X2", odds(0.6 + rng.gen::<f64>() * 0.25)),
        ]),
    );
    markets.insert("bothTeamsToScore".into(), btts);
    markets.insert(
        "overUnder".into(),
        ladder(["0.5", "1.5", "2.5", "3.5", "4.5", "5.5"], |_| generate_over_under(rng)),
    );
    markets.insert(
        "asianHandicap".into(),
        ladder(["-2.5", "-1.5", "-0.5", "0", "+0.5", "+1.5", "+2.5"], |_| {
            generate_handicap(rng, "home", "away")
        }),
    );
    markets.insert("correctScore".into(), generate_correct_score(rng));
    markets.insert(
        "halfTimeFullTime".into(),
        group([
            ("1/1", odds(0.25)),
            ("1/X", odds(0.06)),
            ("1/2", odds(0.02)),
            ("X/1", odds(0.08)),
            ("X/X", odds(0.15)),
            ("X/2", odds(0.08)),
            ("2/1", odds(0.02)),
            ("2/X", odds(0.06)),
            ("2/2", odds(0.25)),
        ]),
    );
    markets.insert(
        "firstGoalScorer".into(),
        group([(
            "anytime",
            group([
                (format!("{} Player 1", home), odds(0.25)),
                (format!("{} Player 2", home), odds(0.2)),
                (format!("{} Player 3", home), odds(0.15)),
                (format!("{} Player 1", away), odds(0.25)),
                (format!("{} Player 2", away), odds(0.2)),
                (format!("{} Player 3", away), odds(0.15)),
            ]),
        )]),
    );
    markets.insert(
        "totalCorners".into(),
        line_totals(&[("8.5", 0.5), ("9.5", 0.4), ("10.5", 0.3)]),
    );
    markets.insert(
        "totalCards".into(),
        line_totals(&[("2.5", 0.45), ("3.5", 0.35), ("4.5", 0.25)]),
    );
    markets.insert("oddEven".into(), odd_even());
    markets.insert("winToNil".into(), two_way("home", 0.25, "away", 0.25));
    markets.insert("cleanSheet".into(), two_way("home", 0.35, "away", 0.35));
    markets.insert(
        "teamGoals".into(),
        group([
            ("home", line_team_goals()),
            ("away", line_team_goals()),
        ]),
    );

    event
}

fn line_team_goals() -> MarketNode {
    group([
        ("over0.5", odds(0.75)),
        ("over1.5", odds(0.45)),
        ("over2.5", odds(0.2)),
    ])
}

pub fn generate_tennis_match<R: Rng>(
    rng: &mut R,
    id: u64,
    (player1, player2): (&str, &str),
    index: usize,
    now: DateTime<Utc>,
) -> Event {
    let start = start_time(rng, now, index);
    let is_live = rng.gen::<f64>() < LIVE_PROBABILITY;
    let mut event = blank_event(id, Sport::Tennis, start, is_live);

    event.tournament = Some(pick(rng, &TENNIS_TOURNAMENTS).to_string());
    event.player1 = Some(player1.to_string());
    event.player2 = Some(player2.to_string());
    if is_live {
        event.current_set = Some(rng.gen_range(1..=3));
        event.player1_sets = Some(rng.gen_range(0..3));
        event.player2_sets = Some(rng.gen_range(0..3));
        event.player1_games = Some(rng.gen_range(0..7));
        event.player2_games = Some(rng.gen_range(0..7));
    }

    let p1 = 0.3 + rng.gen::<f64>() * 0.4;
    let p2 = 1.0 - p1;

    let markets = &mut event.markets;
    markets.insert("matchWinner".into(), two_way("player1", p1, "player2", p2));
    markets.insert(
        "setBetting".into(),
        group([
            ("2-0", odds(0.35)),
            ("2-1", odds(0.3)),
            ("0-2", odds(0.35)),
            ("1-2", odds(0.3)),
        ]),
    );
    markets.insert(
        "totalGames".into(),
        line_totals(&[("20.5", 0.5), ("21.5", 0.45), ("22.5", 0.4)]),
    );
    markets.insert(
        "gameHandicap".into(),
        group([
            ("-3.5", two_way("player1", 0.45, "player2", 0.55)),
            ("-1.5", two_way("player1", 0.5, "player2", 0.5)),
            ("+1.5", two_way("player1", 0.55, "player2", 0.45)),
            ("+3.5", two_way("player1", 0.6, "player2", 0.4)),
        ]),
    );
    markets.insert(
        "firstSetWinner".into(),
        two_way("player1", p1 * 1.05, "player2", p2 * 1.05),
    );
    markets.insert(
        "setTotals".into(),
        group([
            ("set1", line_totals(&[("9.5", 0.45)])),
            ("set2", line_totals(&[("9.5", 0.45)])),
        ]),
    );
    markets.insert("tieBreak".into(), two_way("yes", 0.3, "no", 0.7));
    markets.insert("oddEvenGames".into(), odd_even());
    markets.insert(
        "toWinAtLeastOneSet".into(),
        two_way("player1", 0.8, "player2", 0.8),
    );
    markets.insert("totalAces".into(), line_totals(&[("10.5", 0.45)]));

    event
}

pub fn generate_basketball_game<R: Rng>(
    rng: &mut R,
    id: u64,
    (home, away): (&str, &str),
    index: usize,
    now: DateTime<Utc>,
) -> Event {
    let start = start_time(rng, now, index);
    let is_live = rng.gen::<f64>() < LIVE_PROBABILITY;
    let mut event = blank_event(id, Sport::Basketball, start, is_live);

    event.league = Some(pick(rng, &BASKETBALL_LEAGUES).to_string());
    event.home_team = Some(home.to_string());
    event.away_team = Some(away.to_string());
    if is_live {
        event.quarter = Some(rng.gen_range(1..=4));
        event.home_score = Some(20 + rng.gen_range(0..80));
        event.away_score = Some(20 + rng.gen_range(0..80));
    }

    let home_prob = 0.3 + rng.gen::<f64>() * 0.4;
    let away_prob = 1.0 - home_prob;
    let moneyline = || two_way("home", home_prob, "away", away_prob);
    let quarter = || {
        group([
            ("moneyline", two_way("home", 0.5, "away", 0.5)),
            ("total", line_totals(&[("52.5", 0.5)])),
        ])
    };
    let star = || {
        group([
            ("points", line_totals(&[("25.5", 0.5)])),
            ("rebounds", line_totals(&[("8.5", 0.5)])),
            ("assists", line_totals(&[("6.5", 0.5)])),
        ])
    };
    let team_totals = || line_totals(&[("105.5", 0.5), ("110.5", 0.4)]);

    let markets = &mut event.markets;
    markets.insert("moneyline".into(), moneyline());
    markets.insert(
        "spread".into(),
        group([
            ("-7.5", two_way("home", 0.5, "away", 0.5)),
            ("-5.5", two_way("home", 0.45, "away", 0.55)),
            ("-3.5", two_way("home", 0.4, "away", 0.6)),
            ("+3.5", two_way("home", 0.6, "away", 0.4)),
            ("+5.5", two_way("home", 0.55, "away", 0.45)),
            ("+7.5", two_way("home", 0.5, "away", 0.5)),
        ]),
    );
    markets.insert(
        "totalPoints".into(),
        line_totals(&[("210.5", 0.5), ("215.5", 0.45), ("220.5", 0.4), ("225.5", 0.35)]),
    );
    markets.insert(
        "halfTime".into(),
        group([
            (
                "moneyline",
                two_way("home", home_prob * 1.05, "away", away_prob * 1.05),
            ),
            ("spread", group([("-3.5", two_way("home", 0.5, "away", 0.5))])),
            ("total", line_totals(&[("105.5", 0.5)])),
        ]),
    );
    markets.insert(
        "quarters".into(),
        group([("q1", quarter()), ("q2", quarter()), ("q3", quarter()), ("q4", quarter())]),
    );
    markets.insert(
        "teamTotals".into(),
        group([("home", team_totals()), ("away", team_totals())]),
    );
    markets.insert(
        "winningMargin".into(),
        group([
            ("home1-5", odds(0.15)),
            ("home6-10", odds(0.12)),
            ("home11-15", odds(0.08)),
            ("home16-20", odds(0.05)),
            ("home21+", odds(0.03)),
            ("away1-5", odds(0.15)),
            ("away6-10", odds(0.12)),
            ("away11-15", odds(0.08)),
            ("away16-20", odds(0.05)),
            ("away21+", odds(0.03)),
        ]),
    );
    markets.insert(
        "raceToPoints".into(),
        group([
            ("20", two_way("home", 0.5, "away", 0.5)),
            ("50", moneyline()),
            ("100", moneyline()),
        ]),
    );
    markets.insert("oddEven".into(), odd_even());
    markets.insert(
        "highestScoringQuarter".into(),
        group([
            ("q1", odds(0.25)),
            ("q2", odds(0.25)),
            ("q3", odds(0.25)),
            ("q4", odds(0.25)),
        ]),
    );
    markets.insert(
        "playerProps".into(),
        group([
            (format!("{} Star Player", home), star()),
            (format!("{} Star Player", away), star()),
        ]),
    );

    event
}

// ============================================================================
// DATABASE GENERATION
// ============================================================================

/// Generate the full fixture: 30 events per sport, ids numbered from 1
pub fn generate_database<R: Rng>(rng: &mut R, now: DateTime<Utc>) -> OddsDatabase {
    let mut events = Vec::with_capacity(EVENTS_PER_SPORT * 3);
    let mut next_id = 1u64;

    for (index, fixture) in FOOTBALL_FIXTURES.iter().enumerate() {
        events.push(generate_football_match(rng, next_id, *fixture, index, now));
        next_id += 1;
    }
    for (index, fixture) in TENNIS_FIXTURES.iter().enumerate() {
        events.push(generate_tennis_match(rng, next_id, *fixture, index, now));
        next_id += 1;
    }
    for (index, fixture) in BASKETBALL_FIXTURES.iter().enumerate() {
        events.push(generate_basketball_game(rng, next_id, *fixture, index, now));
        next_id += 1;
    }

    let featured = events
        .iter()
        .take(FEATURED_COUNT)
        .cloned()
        .map(|mut event| {
            event.is_featured = true;
            event.view_count = Some(rng.gen_range(1000..10_000));
            event
        })
        .collect();

    let count = |sport: Sport| events.iter().filter(|e| e.sport == sport).count();
    let sports = vec![
        sport_summary(1, "Football", Sport::Football, count(Sport::Football), "⚽"),
        sport_summary(2, "Tennis", Sport::Tennis, count(Sport::Tennis), "🎾"),
        sport_summary(3, "Basketball", Sport::Basketball, count(Sport::Basketball), "🏀"),
    ];

    let (live, upcoming): (Vec<Event>, Vec<Event>) =
        events.iter().cloned().partition(|event| event.is_live);

    OddsDatabase {
        events,
        featured,
        sports,
        live,
        upcoming,
    }
}

fn sport_summary(id: u32, name: &str, sport: Sport, event_count: usize, icon: &str) -> SportSummary {
    SportSummary {
        id,
        name: name.to_string(),
        slug: sport.to_string(),
        event_count,
        icon: icon.to_string(),
    }
}

/// Generate from a fixed seed for reproducible fixtures, or from entropy
pub fn generate_with_seed(seed: Option<u64>) -> OddsDatabase {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    generate_database(&mut rng, Utc::now())
}

// ============================================================================
// TESTS
// ============================================================================
