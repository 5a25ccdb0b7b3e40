use log::{debug, info, warn};

use crate::domain::{Player, PlayerFields, PlayerId};
use crate::errors::RegistryError;
use crate::notify::{ChangeNotifier, PlayerEvent, SubscriptionId};

/// Insertion-ordered collection of players.
///
/// Uniqueness of nickname and email is enforced here, inside the same call
/// that appends or replaces the record.
#[derive(Debug, Default)]
pub struct PlayerRegistry {
    players: Vec<Player>,
    notifier: ChangeNotifier<PlayerEvent>,
}

impl PlayerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn get(&self, id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    pub fn subscribe<F>(&mut self, observer: F) -> SubscriptionId
    where
        F: FnMut(&PlayerEvent) + 'static,
    {
        self.notifier.subscribe(observer)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.notifier.unsubscribe(id)
    }

    pub fn create(&mut self, fields: PlayerFields) -> Result<Player, RegistryError> {
        self.check(&fields, None)?;

        let player = Player::new(fields);
        info!("Created player {} ({})", player.nickname, player.id);
        self.players.push(player.clone());
        self.notifier.notify(PlayerEvent::Created { player_id: player.id });
        Ok(player)
    }

    /// `Ok(None)` when no player has `id`
    pub fn update(&mut self, id: PlayerId, fields: PlayerFields) -> Result<Option<Player>, RegistryError> {
        let Some(index) = self.position(id) else {
            debug!("Update skipped, no player {}", id);
            return Ok(None);
        };
        self.check(&fields, Some(id))?;

        let updated = self.players[index].with_fields(fields);
        info!("Updated player {} ({})", updated.nickname, updated.id);
        self.players[index] = updated.clone();
        self.notifier.notify(PlayerEvent::Updated { player_id: id });
        Ok(Some(updated))
    }

    pub fn delete(&mut self, id: PlayerId) -> bool {
        let Some(index) = self.position(id) else {
            return false;
        };

        let removed = self.players.remove(index);
        info!("Deleted player {} ({})", removed.nickname, removed.id);
        self.notifier.notify(PlayerEvent::Deleted { player_id: id });
        true
    }

    /// Case-insensitive substring search on nickname or full name; blank returns everyone
    pub fn search(&self, query: &str) -> Vec<&Player> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return self.players.iter().collect();
        }

        let found: Vec<&Player> = self.players.iter().filter(|p| p.matches(&needle)).collect();
        debug!("Player search '{}' matched {}", query, found.len());
        found
    }

    pub fn is_nickname_exists(&self, nickname: &str, exclude_id: Option<PlayerId>) -> bool {
        self.others(exclude_id).any(|p| p.nickname == nickname)
    }

    pub fn is_email_exists(&self, email: &str, exclude_id: Option<PlayerId>) -> bool {
        self.others(exclude_id).any(|p| p.email == email)
    }

    pub fn clear_all(&mut self) {
        info!("Clearing {} player(s)", self.players.len());
        self.players.clear();
        self.notifier.notify(PlayerEvent::Cleared);
    }

    fn position(&self, id: PlayerId) -> Option<usize> {
        self.players.iter().position(|p| p.id == id)
    }

    fn others(&self, exclude_id: Option<PlayerId>) -> impl Iterator<Item = &Player> {
        self.players.iter().filter(move |p| Some(p.id) != exclude_id)
    }

    fn check(&self, fields: &PlayerFields, exclude_id: Option<PlayerId>) -> Result<(), RegistryError> {
        fields.validate().inspect_err(|e| warn!("Rejected player '{}': {}", fields.nickname, e))?;

        if self.is_nickname_exists(&fields.nickname, exclude_id) {
            warn!("Rejected player, nickname '{}' taken", fields.nickname);
            return Err(RegistryError::DuplicateNickname(fields.nickname.clone()));
        }
        if self.is_email_exists(&fields.email, exclude_id) {
            warn!("Rejected player, email '{}' taken", fields.email);
            return Err(RegistryError::DuplicateEmail(fields.email.clone()));
        }
        Ok(())
    }
}
