use std::cell::RefCell;
use std::rc::Rc;

use badminton_roster::config::AppConfig;
use badminton_roster::domain::{CourtSchedule, Game, GameFields, PlayerFields, SkillLevel, SkillStrength};
use badminton_roster::notify::GameEvent;
use badminton_roster::{RegistryError, Roster, ValidationError};
use chrono::{NaiveDate, NaiveDateTime};

fn at(hour: u32, minute: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 11, 3)
        .and_then(|d| d.and_hms_opt(hour, minute, 0))
        .unwrap()
}

fn player(nickname: &str) -> PlayerFields {
    PlayerFields {
        nickname: nickname.to_string(),
        full_name: format!("{} Reyes", nickname),
        contact_number: "+63 917 555 0101".to_string(),
        email: format!("{}@smashers.ph", nickname.to_lowercase()),
        address: "Unit 4, Baseline Towers, Makati".to_string(),
        remarks: Some("Left-handed".to_string()),
        min_level: SkillLevel::Intermediate,
        min_strength: SkillStrength::Strong,
        max_level: SkillLevel::LevelF,
        max_strength: SkillStrength::Weak,
    }
}

fn three_hour_game(roster: &Roster) -> GameFields {
    GameFields {
        court_rate: 400.0,
        ..roster.new_game_fields(vec![CourtSchedule::new("Court 3", at(18, 0), at(21, 0))])
    }
}

#[test]
fn test_session_cost_follows_membership() {
    let mut roster = Roster::new(AppConfig::new());
    let fields = three_hour_game(&roster);
    let game = roster.games_mut().create(fields).unwrap();
    assert_eq!(game.total_court_cost(), 1200.0);
    assert_eq!(game.cost_per_player(), 0.0);

    for nick in ["Ace", "Birdie", "Clear", "Drop"] {
        let p = roster.players_mut().create(player(nick)).unwrap();
        assert!(roster.add_player_to_game(game.id, p.id).unwrap());
    }

    let game = roster.games().get(game.id).unwrap();
    assert_eq!(game.player_count(), 4);
    assert_eq!(game.cost_per_player(), 300.0);
    assert_eq!(roster.players_in_game(game.id).len(), 4);
}

#[test]
fn test_rejected_game_leaves_registry_unchanged() {
    let mut roster = Roster::default();
    let fields = three_hour_game(&roster);
    roster.games_mut().create(fields).unwrap();

    let blank_court = GameFields {
        court_name: String::new(),
        ..three_hour_game(&roster)
    };
    let zero_length = GameFields {
        schedules: vec![CourtSchedule::new("Court 3", at(18, 0), at(18, 0))],
        ..three_hour_game(&roster)
    };

    assert_eq!(
        roster.games_mut().create(blank_court),
        Err(RegistryError::Invalid(ValidationError::Empty { field: "Court name" }))
    );
    assert_eq!(
        roster.games_mut().create(zero_length),
        Err(RegistryError::Invalid(ValidationError::ScheduleOrder))
    );
    assert_eq!(roster.games().len(), 1);
}

#[test]
fn test_player_lifecycle() {
    let mut roster = Roster::default();
    let ace = roster.players_mut().create(player("Ace")).unwrap();
    roster.players_mut().create(player("Birdie")).unwrap();

    let stored = roster.players().get(ace.id).unwrap();
    assert_eq!(stored.fields(), player("Ace"));
    assert_eq!(stored.skill_level_range(), "Intermediate (Strong) - Level F (Weak)");

    let inverted = PlayerFields {
        min_level: SkillLevel::LevelD,
        min_strength: SkillStrength::Strong,
        max_level: SkillLevel::LevelE,
        max_strength: SkillStrength::Weak,
        ..player("Clear")
    };
    assert!(roster.players_mut().create(inverted).is_err());
    assert_eq!(roster.players().len(), 2);

    let names: Vec<&str> = roster.players().search("").iter().map(|p| p.nickname.as_str()).collect();
    assert_eq!(names, vec!["Ace", "Birdie"]);
    assert!(roster.players().search("XYZ_NOMATCH").is_empty());

    assert!(roster.delete_player(ace.id));
    assert!(!roster.delete_player(ace.id));
    assert_eq!(roster.players().len(), 1);
}

#[test]
fn test_deleting_player_notifies_game_observers() {
    let events = Rc::new(RefCell::new(Vec::new()));
    let mut roster = Roster::default();
    let ace = roster.players_mut().create(player("Ace")).unwrap();
    let fields = three_hour_game(&roster);
    let game = roster.games_mut().create(fields).unwrap();
    roster.add_player_to_game(game.id, ace.id).unwrap();

    let sink = Rc::clone(&events);
    roster.games_mut().subscribe(move |e| sink.borrow_mut().push(e.clone()));
    roster.delete_player(ace.id);

    assert_eq!(
        *events.borrow(),
        vec![GameEvent::PlayerRemoved {
            game_id: game.id,
            player_id: ace.id
        }]
    );
    assert_eq!(roster.games().get(game.id).unwrap().player_count(), 0);
}

#[test]
fn test_game_survives_json_round_trip() {
    let mut roster = Roster::default();
    let fields = GameFields {
        title: Some("Sunday Doubles".to_string()),
        schedules: vec![
            CourtSchedule::new("Court 1", at(8, 0), at(10, 0)),
            CourtSchedule::new("Court 2", at(8, 0), at(9, 30)),
        ],
        ..three_hour_game(&roster)
    };
    let game = roster.games_mut().create(fields).unwrap();
    for nick in ["Ace", "Birdie"] {
        let p = roster.players_mut().create(player(nick)).unwrap();
        roster.add_player_to_game(game.id, p.id).unwrap();
    }
    let original = roster.games().get(game.id).unwrap();

    let json = serde_json::to_string(original).unwrap();
    let restored: Game = serde_json::from_str(&json).unwrap();

    assert_eq!(restored.schedules, original.schedules);
    assert_eq!(restored.court_rate, original.court_rate);
    assert_eq!(restored.shuttle_price, original.shuttle_price);
    let mut expected = original.player_ids.clone();
    let mut actual = restored.player_ids.clone();
    expected.sort();
    actual.sort();
    assert_eq!(actual, expected);
}
