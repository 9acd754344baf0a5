use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Cosmetic/profile preferences saved as one unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Preferences {
    /// Last selected hub tab.
    pub tab: String,
    pub accent: String,
    pub cursor: String,
    pub background: String,
    pub font: String,
    /// Tab-cloak identity preset ("none" disables cloaking).
    pub cloak_preset: String,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            tab: "games".to_string(),
            accent: "#00e5ff".to_string(),
            cursor: "default".to_string(),
            background: "animated".to_string(),
            font: "default".to_string(),
            cloak_preset: "none".to_string(),
        }
    }
}

/// The preference/profile/currency service boundary.
///
/// The simulation core never calls this; the hub session does, after a
/// game reaches a terminal state. Implementations are process-lifetime
/// stores — durability is somebody else's concern.
pub trait PreferenceStore: Send {
    fn get_preferences(&self) -> Preferences;
    fn save_preferences(&mut self, prefs: Preferences);
    fn get_notepad(&self) -> String;
    fn save_notepad(&mut self, text: &str);
    fn get_currency(&self) -> u64;
    fn add_currency(&mut self, amount: u64);
    /// Deduct `amount` if the balance covers it. Returns whether the
    /// purchase went through; balances never go negative.
    fn spend_currency(&mut self, amount: u64) -> bool;
    fn get_purchased_effects(&self) -> Vec<String>;
    fn set_purchased_effects(&mut self, effects: Vec<String>);
    /// Free-form key-value slots for anything the UI wants to stash.
    fn get_custom(&self, key: &str) -> Option<serde_json::Value>;
    fn set_custom(&mut self, key: &str, value: serde_json::Value);
}

/// In-memory store: state lives exactly as long as the process.
#[derive(Debug, Default)]
pub struct MemoryStore {
    prefs: Preferences,
    notepad: String,
    currency: u64,
    effects: Vec<String>,
    custom: HashMap<String, serde_json::Value>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryStore {
    fn get_preferences(&self) -> Preferences {
        self.prefs.clone()
    }

    fn save_preferences(&mut self, prefs: Preferences) {
        self.prefs = prefs;
    }

    fn get_notepad(&self) -> String {
        self.notepad.clone()
    }

    fn save_notepad(&mut self, text: &str) {
        self.notepad = text.to_string();
    }

    fn get_currency(&self) -> u64 {
        self.currency
    }

    fn add_currency(&mut self, amount: u64) {
        self.currency = self.currency.saturating_add(amount);
    }

    fn spend_currency(&mut self, amount: u64) -> bool {
        if amount > self.currency {
            tracing::debug!(amount, balance = self.currency, "Rejected overdraft");
            return false;
        }
        self.currency -= amount;
        true
    }

    fn get_purchased_effects(&self) -> Vec<String> {
        self.effects.clone()
    }

    fn set_purchased_effects(&mut self, effects: Vec<String>) {
        self.effects = effects;
    }

    fn get_custom(&self, key: &str) -> Option<serde_json::Value> {
        self.custom.get(key).cloned()
    }

    fn set_custom(&mut self, key: &str, value: serde_json::Value) {
        self.custom.insert(key.to_string(), value);
    }
}
