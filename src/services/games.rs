use log::{debug, info, warn};

use crate::domain::{Game, GameFields, GameId, PlayerId};
use crate::errors::RegistryError;
use crate::notify::{ChangeNotifier, GameEvent, SubscriptionId};

/// Insertion-ordered collection of games.
///
/// Player ids inside a game are plain references; this registry never checks
/// them against a player collection.
#[derive(Debug, Default)]
pub struct GameRegistry {
    games: Vec<Game>,
    notifier: ChangeNotifier<GameEvent>,
}

impl GameRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn games(&self) -> &[Game] {
        &self.games
    }

    pub fn get(&self, id: GameId) -> Option<&Game> {
        self.games.iter().find(|g| g.id == id)
    }

    pub fn len(&self) -> usize {
        self.games.len()
    }

    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }

    pub fn subscribe<F>(&mut self, observer: F) -> SubscriptionId
    where
        F: FnMut(&GameEvent) + 'static,
    {
        self.notifier.subscribe(observer)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.notifier.unsubscribe(id)
    }

    pub fn create(&mut self, fields: GameFields) -> Result<Game, RegistryError> {
        Self::check(&fields)?;

        let game = Game::new(fields);
        info!("Created game '{}' ({})", game.display_title(), game.id);
        self.games.push(game.clone());
        self.notifier.notify(GameEvent::Created { game_id: game.id });
        Ok(game)
    }

    /// `Ok(None)` when no game has `id`
    pub fn update(&mut self, id: GameId, fields: GameFields) -> Result<Option<Game>, RegistryError> {
        let Some(index) = self.position(id) else {
            debug!("Update skipped, no game {}", id);
            return Ok(None);
        };
        Self::check(&fields)?;

        let updated = self.games[index].with_fields(fields);
        info!("Updated game '{}' ({})", updated.display_title(), updated.id);
        self.games[index] = updated.clone();
        self.notifier.notify(GameEvent::Updated { game_id: id });
        Ok(Some(updated))
    }

    pub fn delete(&mut self, id: GameId) -> bool {
        let Some(index) = self.position(id) else {
            return false;
        };

        let removed = self.games.remove(index);
        info!("Deleted game '{}' ({})", removed.display_title(), removed.id);
        self.notifier.notify(GameEvent::Deleted { game_id: id });
        true
    }

    /// Case-insensitive match on display title or schedule dates; blank returns all
    pub fn search(&self, query: &str) -> Vec<&Game> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return self.games.iter().collect();
        }

        let found: Vec<&Game> = self.games.iter().filter(|g| g.matches(&needle)).collect();
        debug!("Game search '{}' matched {}", query, found.len());
        found
    }

    /// False when the game is unknown or already lists the player
    pub fn add_player_to_game(&mut self, game_id: GameId, player_id: PlayerId) -> bool {
        let Some(index) = self.position(game_id) else {
            return false;
        };
        let game = &self.games[index];
        if game.has_player(player_id) {
            return false;
        }

        let mut player_ids = game.player_ids.clone();
        player_ids.push(player_id);
        self.games[index] = game.with_player_ids(player_ids);
        info!("Added player {} to game {}", player_id, game_id);
        self.notifier.notify(GameEvent::PlayerAdded { game_id, player_id });
        true
    }

    /// False when the game is unknown or does not list the player
    pub fn remove_player_from_game(&mut self, game_id: GameId, player_id: PlayerId) -> bool {
        let Some(index) = self.position(game_id) else {
            return false;
        };
        let game = &self.games[index];
        if !game.has_player(player_id) {
            return false;
        }

        let player_ids = game
            .player_ids
            .iter()
            .copied()
            .filter(|id| *id != player_id)
            .collect();
        self.games[index] = game.with_player_ids(player_ids);
        info!("Removed player {} from game {}", player_id, game_id);
        self.notifier.notify(GameEvent::PlayerRemoved { game_id, player_id });
        true
    }

    /// Ids of every game that lists `player_id`, in registry order
    pub fn games_with_player(&self, player_id: PlayerId) -> Vec<GameId> {
        self.games
            .iter()
            .filter(|g| g.has_player(player_id))
            .map(|g| g.id)
            .collect()
    }

    pub fn clear_all(&mut self) {
        info!("Clearing {} game(s)", self.games.len());
        self.games.clear();
        self.notifier.notify(GameEvent::Cleared);
    }

    fn position(&self, id: GameId) -> Option<usize> {
        self.games.iter().position(|g| g.id == id)
    }

    fn check(fields: &GameFields) -> Result<(), RegistryError> {
        fields
            .validate()
            .inspect_err(|e| warn!("Rejected game at '{}': {}", fields.court_name, e))?;
        Ok(())
    }
}
