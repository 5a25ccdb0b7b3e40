use log::info;

use crate::config::settings::AppConfig;
use crate::domain::{CourtSchedule, GameFields, GameId, Player, PlayerId};
use crate::errors::RegistryError;
use crate::services::games::GameRegistry;
use crate::services::players::PlayerRegistry;
use crate::services::settings::SettingsStore;

/// Owns every registry and applies the rules that span more than one of them
#[derive(Debug, Default)]
pub struct Roster {
    players: PlayerRegistry,
    games: GameRegistry,
    settings: SettingsStore,
}

impl Roster {
    pub fn new(config: AppConfig) -> Self {
        Self {
            players: PlayerRegistry::new(),
            games: GameRegistry::new(),
            settings: SettingsStore::new(config.settings),
        }
    }

    pub fn players(&self) -> &PlayerRegistry {
        &self.players
    }

    pub fn players_mut(&mut self) -> &mut PlayerRegistry {
        &mut self.players
    }

    pub fn games(&self) -> &GameRegistry {
        &self.games
    }

    pub fn games_mut(&mut self) -> &mut GameRegistry {
        &mut self.games
    }

    pub fn settings(&self) -> &SettingsStore {
        &self.settings
    }

    pub fn settings_mut(&mut self) -> &mut SettingsStore {
        &mut self.settings
    }

    /// Removes the player from every game first, then deletes the profile
    pub fn delete_player(&mut self, player_id: PlayerId) -> bool {
        if self.players.get(player_id).is_none() {
            return false;
        }

        let affected = self.games.games_with_player(player_id);
        for game_id in &affected {
            self.games.remove_player_from_game(*game_id, player_id);
        }
        if !affected.is_empty() {
            info!("Removed player {} from {} game(s)", player_id, affected.len());
        }

        self.players.delete(player_id)
    }

    /// Like [`GameRegistry::add_player_to_game`] but only for registered players
    pub fn add_player_to_game(&mut self, game_id: GameId, player_id: PlayerId) -> Result<bool, RegistryError> {
        if self.players.get(player_id).is_none() {
            return Err(RegistryError::UnknownPlayer(player_id));
        }
        Ok(self.games.add_player_to_game(game_id, player_id))
    }

    pub fn remove_player_from_game(&mut self, game_id: GameId, player_id: PlayerId) -> bool {
        self.games.remove_player_from_game(game_id, player_id)
    }

    /// Members of a game in membership order; ids that no longer resolve are skipped
    pub fn players_in_game(&self, game_id: GameId) -> Vec<&Player> {
        self.games
            .get(game_id)
            .map(|game| {
                game.player_ids
                    .iter()
                    .filter_map(|id| self.players.get(*id))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// New-game form values prefilled from the current settings
    pub fn new_game_fields(&self, schedules: Vec<CourtSchedule>) -> GameFields {
        GameFields::from_settings(self.settings.get(), schedules)
    }

    pub fn clear_all(&mut self) {
        self.games.clear_all();
        self.players.clear_all();
    }
}
