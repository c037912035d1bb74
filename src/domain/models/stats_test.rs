use anyhow::Result;
use test_utils::goalkeepers_fixture;
use test_utils::leaderboard_fixture;
use test_utils::overview_fixture;
use test_utils::schedule_fixture;
use test_utils::upcoming_fixture;
use test_utils::year_over_year_fixture;

use super::*;

fn game(opponent: &str, outcome: &str) -> Game {
    return Game {
        opponent: opponent.to_string(),
        outcome: Outcome::from(outcome.to_string()),
        ..Game::default()
    };
}

mod outcome {
    use super::*;

    #[test]
    fn it_parses_known_symbols() {
        assert_eq!(Outcome::from("W".to_string()), Outcome::Win);
        assert_eq!(Outcome::from("L".to_string()), Outcome::Loss);
        assert_eq!(Outcome::from("T".to_string()), Outcome::Tie);
        assert_eq!(Outcome::from("—".to_string()), Outcome::Pending);
    }

    #[test]
    fn it_keeps_unknown_symbols_verbatim() {
        let outcome = Outcome::from("PPD".to_string());
        assert_eq!(outcome, Outcome::Other("PPD".to_string()));
        assert_eq!(outcome.symbol(), "PPD");
        assert!(outcome.is_played());
    }

    #[test]
    fn it_only_treats_the_em_dash_as_pending() {
        assert!(!Outcome::Pending.is_played());
        assert!(Outcome::from("-".to_string()).is_played());
        assert!(Outcome::from("".to_string()).is_played());
    }

    #[test]
    fn it_serializes_back_to_the_symbol() -> Result<()> {
        assert_eq!(serde_json::to_string(&Outcome::Pending)?, "\"—\"");
        assert_eq!(serde_json::to_string(&Outcome::Win)?, "\"W\"");
        return Ok(());
    }
}

mod derived_fields {
    use super::*;

    #[test]
    fn it_excludes_exactly_the_pending_games() {
        let games = vec![
            game("Woodbridge", "W"),
            game("Colonia", "—"),
            game("Metuchen", "L"),
            game("Carteret", "—"),
            game("Rahway", "T"),
        ];

        let completed = completed_games(&games);
        let opponents = completed
            .iter()
            .map(|game| return game.opponent.as_str())
            .collect::<Vec<&str>>();

        assert_eq!(opponents, vec!["Woodbridge", "Metuchen", "Rahway"]);
    }

    #[test]
    fn it_handles_an_empty_schedule() {
        let completed = completed_games(&[]);
        assert!(completed.is_empty());
        assert!(recent_form(&completed).is_empty());
    }

    #[test]
    fn it_keeps_every_game_when_fewer_than_five_are_completed() {
        let completed = vec![game("A", "W"), game("B", "L"), game("C", "T")];
        assert_eq!(
            recent_form(&completed),
            vec![Outcome::Win, Outcome::Loss, Outcome::Tie]
        );
    }

    #[test]
    fn it_takes_the_last_five_in_chronological_order() {
        let completed = vec![
            game("A", "L"),
            game("B", "L"),
            game("C", "W"),
            game("D", "T"),
            game("E", "W"),
            game("F", "L"),
            game("G", "W"),
        ];

        assert_eq!(
            recent_form(&completed),
            vec![
                Outcome::Win,
                Outcome::Tie,
                Outcome::Win,
                Outcome::Loss,
                Outcome::Win
            ]
        );
    }

    #[test]
    fn it_builds_a_bundle_with_derived_fields() -> Result<()> {
        let schedule: Schedule = serde_json::from_str(schedule_fixture())?;
        let upcoming: Schedule = serde_json::from_str(upcoming_fixture())?;

        let bundle = SportStatsBundle::new(
            Sport::BoysSoccer,
            PrimaryStats {
                overview: Overview::default(),
                leaderboard: Leaderboard::default(),
                all_games: schedule.games,
                upcoming_games: upcoming.games,
            },
            SecondaryStats::default(),
        );

        assert_eq!(bundle.all_games.len(), 9);
        assert_eq!(bundle.upcoming_games.len(), 2);
        assert_eq!(bundle.completed_games.len(), 7);
        assert_eq!(
            bundle
                .recent_form
                .iter()
                .map(|outcome| return outcome.symbol())
                .collect::<Vec<&str>>(),
            vec!["T", "W", "W", "L", "W"]
        );
        assert!(bundle.goalkeepers.is_none());
        assert!(bundle.year_over_year.is_none());

        return Ok(());
    }
}

mod payloads {
    use super::*;

    #[test]
    fn it_decodes_the_overview() -> Result<()> {
        let overview: Overview = serde_json::from_str(overview_fixture())?;

        assert_eq!(overview.team, "Edison High School");
        assert_eq!(overview.coach, "Mike Ferraro");
        assert_eq!(overview.stats.record, "4-2-1");
        assert_eq!(overview.stats.games_played, 7);
        assert_eq!(
            overview.stats.totals.get("total_goals"),
            Some(&serde_json::json!(41))
        );
        assert_eq!(overview.squad_size.map(|squad| return squad.total), Some(24));

        return Ok(());
    }

    #[test]
    fn it_decodes_an_overview_with_missing_sections() -> Result<()> {
        let overview: Overview = serde_json::from_str(r#"{"team": "Edison High School"}"#)?;

        assert_eq!(overview.stats, OverviewStats::default());
        assert!(overview.squad_size.is_none());

        return Ok(());
    }

    #[test]
    fn it_decodes_the_leaderboard() -> Result<()> {
        let leaderboard: Leaderboard = serde_json::from_str(leaderboard_fixture())?;

        assert_eq!(leaderboard.players.len(), 3);
        assert_eq!(leaderboard.players[0].name, "Luis Ortega");
        assert_eq!(leaderboard.players[0].position, "Sr. F");
        assert_eq!(
            leaderboard.players[0].stat("Goals"),
            Some(&serde_json::json!(11))
        );

        return Ok(());
    }

    #[test]
    fn it_decodes_goalkeepers() -> Result<()> {
        let roster: GoalkeeperRoster = serde_json::from_str(goalkeepers_fixture())?;

        assert_eq!(roster.goalkeepers.len(), 2);
        assert_eq!(
            roster.goalkeepers[0].stat("Saves"),
            Some(&serde_json::json!(48))
        );

        return Ok(());
    }

    #[test]
    fn it_decodes_year_over_year() -> Result<()> {
        let comparison: YearOverYear = serde_json::from_str(year_over_year_fixture())?;

        assert_eq!(comparison.change.goals_diff, 8);
        assert_eq!(comparison.seasons.len(), 2);
        assert_eq!(comparison.seasons["2025-2026"].total_goals, 41);
        assert_eq!(comparison.seasons["2024-2025"].players, 23);

        return Ok(());
    }
}
