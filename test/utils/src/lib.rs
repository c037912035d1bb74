pub fn overview_fixture() -> &'static str {
    return r#"{
  "team": "Edison High School",
  "season": "2025-2026",
  "coach": "Mike Ferraro",
  "stats": {
    "total_goals": 41,
    "total_assists": 27,
    "total_points": 109,
    "games_played": 7,
    "wins": 4,
    "losses": 2,
    "ties": 1,
    "record": "4-2-1"
  },
  "squad_size": {
    "field_players": 22,
    "goalkeepers": 2,
    "total": 24
  }
}"#;
}

pub fn leaderboard_fixture() -> &'static str {
    return r#"{
  "top_scorers": [
    { "Player": "Luis Ortega", "Year/Position": "Sr. F", "Goals": 11, "Assists": 4, "Points": 26 },
    { "Player": "Sam Patel", "Year/Position": "Jr. M", "Goals": 7, "Assists": 6, "Points": 20 },
    { "Player": "Noah Kim", "Year/Position": "So. F", "Goals": 5, "Assists": 2, "Points": 12 }
  ]
}"#;
}

/// Full schedule with seven played games followed by two unplayed fixtures.
pub fn schedule_fixture() -> &'static str {
    return r#"{
  "games": [
    { "Date": "09/02", "Opponent": "Woodbridge", "Location": "Home", "Result": "W 3-1", "Record": "1-0-0", "Outcome": "W" },
    { "Date": "09/05", "Opponent": "Colonia", "Location": "Away", "Result": "L 0-2", "Record": "1-1-0", "Outcome": "L" },
    { "Date": "09/09", "Opponent": "Metuchen", "Location": "Home", "Result": "T 1-1", "Record": "1-1-1", "Outcome": "T" },
    { "Date": "09/12", "Opponent": "Perth Amboy", "Location": "Away", "Result": "W 4-0", "Record": "2-1-1", "Outcome": "W" },
    { "Date": "09/16", "Opponent": "JP Stevens", "Location": "Home", "Result": "W 2-1", "Record": "3-1-1", "Outcome": "W" },
    { "Date": "09/19", "Opponent": "Piscataway", "Location": "Away", "Result": "L 1-3", "Record": "3-2-1", "Outcome": "L" },
    { "Date": "09/23", "Opponent": "Carteret", "Location": "Home", "Result": "W 5-0", "Record": "4-2-1", "Outcome": "W" },
    { "Date": "09/26", "Opponent": "South Plainfield", "Location": "Away", "Result": "", "Record": "", "Outcome": "—" },
    { "Date": "09/30", "Opponent": "Highland Park", "Location": "Home", "Result": "", "Record": "", "Outcome": "—" }
  ]
}"#;
}

pub fn upcoming_fixture() -> &'static str {
    return r#"{
  "upcoming_games": [
    { "Date": "09/26", "Opponent": "South Plainfield", "Location": "Away", "Outcome": "—" },
    { "Date": "09/30", "Opponent": "Highland Park", "Location": "Home", "Outcome": "—" }
  ]
}"#;
}

pub fn goalkeepers_fixture() -> &'static str {
    return r#"{
  "goalkeepers": [
    { "Player": "Evan Brooks", "Year/Position": "Sr. GK", "Saves": 48, "Games Played": 6 },
    { "Player": "Mateo Cruz", "Year/Position": "Fr. GK", "Saves": 9, "Games Played": 2 }
  ]
}"#;
}

pub fn year_over_year_fixture() -> &'static str {
    return r#"{
  "2024-2025": { "total_goals": 33, "total_assists": 21, "players": 23 },
  "2025-2026": { "total_goals": 41, "total_assists": 27, "players": 22 },
  "change": { "goals_diff": 8, "assists_diff": 6, "goals_change_pct": 24.2 }
}"#;
}

pub fn dashboard_fixture() -> &'static str {
    return r#"{
  "counts": { "injuries": 1, "scoutingReports": 2, "notes": 5 },
  "recentForm": ["W", "L", "W", "W", "L"],
  "activeInjuries": [
    { "player_name": "Sam Patel", "injury_type": "Hamstring strain", "expected_return": "10/04", "sport": "boys_soccer" }
  ],
  "topPerformers": [
    { "Player": "Luis Ortega", "Year/Position": "Sr. F", "Goals": 11 }
  ]
}"#;
}
