use log::{info, warn};

use crate::config::settings::UserSettings;
use crate::errors::ValidationError;
use crate::notify::{ChangeNotifier, SettingsEvent, SubscriptionId};

/// Holds the single process-wide [`UserSettings`] value
#[derive(Debug, Default)]
pub struct SettingsStore {
    settings: UserSettings,
    notifier: ChangeNotifier<SettingsEvent>,
}

impl SettingsStore {
    pub fn new(settings: UserSettings) -> Self {
        Self {
            settings,
            notifier: ChangeNotifier::new(),
        }
    }

    pub fn get(&self) -> &UserSettings {
        &self.settings
    }

    pub fn subscribe<F>(&mut self, observer: F) -> SubscriptionId
    where
        F: FnMut(&SettingsEvent) + 'static,
    {
        self.notifier.subscribe(observer)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.notifier.unsubscribe(id)
    }

    /// Replaces the whole record after validating it
    pub fn update(&mut self, settings: UserSettings) -> Result<(), ValidationError> {
        settings
            .validate()
            .inspect_err(|e| warn!("Rejected settings update: {}", e))?;

        info!(
            "Settings updated: court '{}', rate {:.2}, shuttle {:.2}, divide equally {}",
            settings.court_name, settings.court_rate, settings.shuttle_price, settings.divide_equally
        );
        self.settings = settings;
        self.notifier.notify(SettingsEvent::Updated);
        Ok(())
    }

    pub fn reset_to_defaults(&mut self) {
        info!("Settings reset to defaults");
        self.settings = UserSettings::default();
        self.notifier.notify(SettingsEvent::Reset);
    }
}
