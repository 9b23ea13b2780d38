//! Core data models for the clicker.
//! `GameState` is the persisted record; `Game` wraps it with its config and
//! is driven through `GameAction`s by the Yew reducer.

use crate::config::GameConfig;
use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::rc::Rc;
use std::str::FromStr;
use yew::Reducible;

/// Currency amount, counted in exact tenths of a Shekltk.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Shekltk(u64);

impl Shekltk {
    pub const ZERO: Shekltk = Shekltk(0);

    pub const fn from_tenths(tenths: u64) -> Self {
        Self(tenths)
    }

    pub const fn from_whole(whole: u64) -> Self {
        Self(whole * 10)
    }

    pub const fn tenths(self) -> u64 {
        self.0
    }

    pub fn saturating_add(self, other: Shekltk) -> Self {
        Self(self.0.saturating_add(other.0))
    }

    pub fn checked_sub(self, other: Shekltk) -> Option<Self> {
        self.0.checked_sub(other.0).map(Self)
    }
}

impl fmt::Display for Shekltk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.0 / 10, self.0 % 10)
    }
}

// Stored as a plain JSON number of whole Shekltk, e.g. `12.3`.
impl Serialize for Shekltk {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.0 as f64 / 10.0)
    }
}

impl<'de> Deserialize<'de> for Shekltk {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = f64::deserialize(deserializer)?;
        if !raw.is_finite() || raw < 0.0 {
            return Err(de::Error::custom(format!("invalid Shekltk amount {raw}")));
        }
        Ok(Self((raw * 10.0).round() as u64))
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum View {
    #[default]
    Game,
    House,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemId {
    Bed,
    Table,
    Tv,
    Plant,
    Bookshelf,
    Sofa,
}

impl ItemId {
    pub fn as_str(self) -> &'static str {
        match self {
            ItemId::Bed => "bed",
            ItemId::Table => "table",
            ItemId::Tv => "tv",
            ItemId::Plant => "plant",
            ItemId::Bookshelf => "bookshelf",
            ItemId::Sofa => "sofa",
        }
    }

    pub fn def(self) -> &'static ItemDef {
        // Catalog is ordered like the enum.
        &ITEM_CATALOG[self as usize]
    }
}

impl FromStr for ItemId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ITEM_CATALOG
            .iter()
            .map(|d| d.id)
            .find(|id| id.as_str() == s)
            .ok_or_else(|| format!("unknown item id '{s}'"))
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ItemDef {
    pub id: ItemId,
    pub emoji: &'static str,
    pub name: &'static str,
    pub price: Shekltk,
    pub description: &'static str,
}

pub static ITEM_CATALOG: [ItemDef; 6] = [
    ItemDef { id: ItemId::Bed, emoji: "🛏️", name: "Кровать", price: Shekltk::from_whole(5), description: "Уютная кровать для отдыха" },
    ItemDef { id: ItemId::Table, emoji: "🪑", name: "Стол", price: Shekltk::from_whole(8), description: "Деревянный стол для работы" },
    ItemDef { id: ItemId::Tv, emoji: "📺", name: "Телевизор", price: Shekltk::from_whole(15), description: "Развлечения после работы" },
    ItemDef { id: ItemId::Plant, emoji: "🪴", name: "Растение", price: Shekltk::from_whole(3), description: "Декоративное растение" },
    ItemDef { id: ItemId::Bookshelf, emoji: "📚", name: "Книжная полка", price: Shekltk::from_whole(12), description: "Для хранения знаний" },
    ItemDef { id: ItemId::Sofa, emoji: "🛋️", name: "Диван", price: Shekltk::from_whole(20), description: "Комфортный диван" },
];

/// Purchased items in purchase order; never holds an id twice.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct OwnedItems(Vec<ItemId>);

impl OwnedItems {
    pub fn contains(&self, id: ItemId) -> bool {
        self.0.contains(&id)
    }

    /// Returns false if the id was already owned.
    pub fn insert(&mut self, id: ItemId) -> bool {
        if self.contains(id) {
            return false;
        }
        self.0.push(id);
        true
    }

    pub fn iter(&self) -> impl Iterator<Item = ItemId> + '_ {
        self.0.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<ItemId> for OwnedItems {
    fn from_iter<I: IntoIterator<Item = ItemId>>(iter: I) -> Self {
        let mut owned = OwnedItems::default();
        for id in iter {
            owned.insert(id);
        }
        owned
    }
}

// Unknown ids from older or edited saves are dropped rather than failing the load.
impl<'de> Deserialize<'de> for OwnedItems {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw: Vec<String> = Vec::deserialize(deserializer)?;
        Ok(raw.iter().filter_map(|s| s.parse::<ItemId>().ok()).collect())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ItemStatus {
    Owned,
    Affordable,
    TooExpensive,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameState {
    #[serde(rename = "shekltk")]
    pub currency: Shekltk,
    pub energy: u32,
    /// Epoch milliseconds at which energy was last reconciled.
    pub last_energy_update: u64,
    #[serde(default)]
    pub current_view: View,
    #[serde(default)]
    pub owned_items: OwnedItems,
}

impl GameState {
    pub fn new(now_ms: u64, cfg: &GameConfig) -> Self {
        Self {
            currency: Shekltk::ZERO,
            energy: cfg.energy_cap,
            last_energy_update: now_ms,
            current_view: View::Game,
            owned_items: OwnedItems::default(),
        }
    }

    /// Clamp fields that may be out of range in a loaded record.
    pub fn sanitize(&mut self, cfg: &GameConfig) {
        self.energy = self.energy.min(cfg.energy_cap);
    }

    /// Energy earned since `last_energy_update`. Ten-hour units take precedence
    /// over hour units; leftover time in the window is not carried.
    pub fn energy_award(&self, now_ms: u64, cfg: &GameConfig) -> u32 {
        let elapsed = now_ms.saturating_sub(self.last_energy_update);
        let ten_hour_units = elapsed / cfg.ten_hour_unit_ms.max(1);
        let hour_units = elapsed / cfg.hour_unit_ms.max(1);
        let units_to_award = |units: u64, award: u32| -> u32 {
            u32::try_from(units)
                .unwrap_or(u32::MAX)
                .saturating_mul(award)
        };
        if ten_hour_units > 0 {
            units_to_award(ten_hour_units, cfg.ten_hour_award)
        } else if hour_units > 0 {
            units_to_award(hour_units, cfg.hour_award)
        } else {
            0
        }
    }

    /// Apply the regeneration rule. Returns whether the state changed.
    pub fn regenerate(&mut self, now_ms: u64, cfg: &GameConfig) -> bool {
        let award = self.energy_award(now_ms, cfg);
        if award == 0 {
            return false;
        }
        self.energy = self.energy.saturating_add(award).min(cfg.energy_cap);
        self.last_energy_update = now_ms;
        true
    }

    pub fn can_click(&self, cfg: &GameConfig) -> bool {
        self.energy > 0 && self.energy >= cfg.click_cost
    }

    /// Spend energy for currency. No-op when out of energy.
    pub fn click(&mut self, cfg: &GameConfig) -> bool {
        if !self.can_click(cfg) {
            return false;
        }
        self.energy -= cfg.click_cost;
        self.currency = self
            .currency
            .saturating_add(Shekltk::from_tenths(cfg.click_reward_tenths));
        true
    }

    pub fn item_status(&self, id: ItemId) -> ItemStatus {
        if self.owned_items.contains(id) {
            ItemStatus::Owned
        } else if self.currency >= id.def().price {
            ItemStatus::Affordable
        } else {
            ItemStatus::TooExpensive
        }
    }

    /// One-time purchase of a catalog item.
    pub fn buy(&mut self, id: ItemId) -> bool {
        if self.item_status(id) != ItemStatus::Affordable {
            return false;
        }
        let Some(rest) = self.currency.checked_sub(id.def().price) else {
            return false;
        };
        self.currency = rest;
        self.owned_items.insert(id)
    }

    pub fn switch_view(&mut self, view: View) -> bool {
        if self.current_view == view {
            return false;
        }
        self.current_view = view;
        true
    }
}

// ---------------- Reducer & Actions -----------------

/// Reducer state: the persisted record plus the rules it is played under.
#[derive(Clone, Debug, PartialEq)]
pub struct Game {
    pub config: Rc<GameConfig>,
    pub state: GameState,
}

impl Game {
    pub fn new(config: Rc<GameConfig>, state: GameState) -> Self {
        Self { config, state }
    }
}

#[derive(Clone, Debug)]
pub enum GameAction {
    /// Periodic regeneration pass.
    Tick { now_ms: u64 },
    /// Reconcile regeneration, then spend one click.
    Click { now_ms: u64 },
    Buy(ItemId),
    SwitchView(View),
}

impl Reducible for Game {
    type Action = GameAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        use GameAction::*;
        let mut new = (*self).clone();
        let cfg = &self.config;
        let changed = match action {
            Tick { now_ms } => new.state.regenerate(now_ms, cfg),
            Click { now_ms } => {
                let regenerated = new.state.regenerate(now_ms, cfg);
                let clicked = new.state.click(cfg);
                if !clicked {
                    log::debug!("click ignored: no energy");
                }
                regenerated || clicked
            }
            Buy(id) => {
                let bought = new.state.buy(id);
                if bought {
                    log::info!("bought {} for {}", id.as_str(), id.def().price);
                } else {
                    log::debug!("purchase of {} ignored", id.as_str());
                }
                bought
            }
            SwitchView(view) => new.state.switch_view(view),
        };
        if !changed {
            return self;
        }
        Rc::new(new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::HOUR_MS;

    const T0: u64 = 1_700_000_000_000;

    fn cfg() -> GameConfig {
        GameConfig::default()
    }

    fn state_with(energy: u32, currency_tenths: u64) -> GameState {
        GameState {
            currency: Shekltk::from_tenths(currency_tenths),
            energy,
            ..GameState::new(T0, &cfg())
        }
    }

    #[test]
    fn new_state_has_defaults() {
        let s = GameState::new(T0, &cfg());
        assert_eq!(s.currency, Shekltk::ZERO);
        assert_eq!(s.energy, 1000);
        assert_eq!(s.last_energy_update, T0);
        assert_eq!(s.current_view, View::Game);
        assert!(s.owned_items.is_empty());
    }

    #[test]
    fn one_hour_and_a_second_awards_one_hour_unit() {
        let mut s = state_with(500, 0);
        let now = T0 + 3_661_000;
        assert!(s.regenerate(now, &cfg()));
        assert_eq!(s.energy, 600);
        assert_eq!(s.last_energy_update, now);
    }

    #[test]
    fn ten_hour_rule_takes_precedence() {
        let mut s = state_with(0, 0);
        let now = T0 + 10 * HOUR_MS + 60_000;
        assert_eq!(s.energy_award(now, &cfg()), 1000);
        s.regenerate(now, &cfg());
        assert_eq!(s.energy, 1000);
    }

    #[test]
    fn hour_units_are_not_cumulative_with_remainder() {
        let s = state_with(0, 0);
        // 9h59m -> 9 hour units, the 59 minutes are lost on reconcile
        assert_eq!(s.energy_award(T0 + 9 * HOUR_MS + 59 * 60_000, &cfg()), 900);
        // 19h -> one ten-hour unit, the extra 9 hours are ignored
        assert_eq!(s.energy_award(T0 + 19 * HOUR_MS, &cfg()), 1000);
    }

    #[test]
    fn below_one_hour_leaves_state_untouched() {
        let mut s = state_with(10, 0);
        let before = s.clone();
        assert!(!s.regenerate(T0 + HOUR_MS - 1, &cfg()));
        assert_eq!(s, before);
    }

    #[test]
    fn clock_going_backwards_awards_nothing() {
        let mut s = state_with(10, 0);
        assert!(!s.regenerate(T0 - 5 * HOUR_MS, &cfg()));
        assert_eq!(s.last_energy_update, T0);
    }

    #[test]
    fn regeneration_caps_energy() {
        let mut s = state_with(950, 0);
        s.regenerate(T0 + 3 * HOUR_MS, &cfg());
        assert_eq!(s.energy, 1000);
    }

    #[test]
    fn click_without_energy_is_noop() {
        let mut s = state_with(0, 7);
        let before = s.clone();
        assert!(!s.click(&cfg()));
        assert_eq!(s, before);
    }

    #[test]
    fn ten_clicks_earn_exactly_one() {
        let mut s = state_with(1000, 0);
        for _ in 0..10 {
            assert!(s.click(&cfg()));
        }
        assert_eq!(s.currency, Shekltk::from_whole(1));
        assert_eq!(s.energy, 990);
        assert_eq!(s.currency.to_string(), "1.0");
    }

    #[test]
    fn energy_stays_in_range_over_mixed_sequence() {
        let c = cfg();
        let mut s = state_with(3, 0);
        let mut now = T0;
        for step in 0..5_000u64 {
            if step % 7 == 0 {
                now += HOUR_MS / 2 + step;
                s.regenerate(now, &c);
            } else {
                s.click(&c);
            }
            assert!(s.energy <= c.energy_cap);
        }
    }

    #[test]
    fn buying_deducts_price_once() {
        let mut s = state_with(1000, 55);
        assert!(s.buy(ItemId::Bed));
        assert_eq!(s.currency, Shekltk::from_tenths(5));
        assert!(s.owned_items.contains(ItemId::Bed));
        let before = s.clone();
        assert!(!s.buy(ItemId::Bed));
        assert_eq!(s, before);
    }

    #[test]
    fn buying_owned_item_with_plenty_of_money_is_noop() {
        let mut s = state_with(1000, 1000);
        s.buy(ItemId::Sofa);
        let before = s.clone();
        assert!(!s.buy(ItemId::Sofa));
        assert_eq!(s, before);
        assert_eq!(s.owned_items.len(), 1);
    }

    #[test]
    fn buying_too_expensive_item_is_noop() {
        let mut s = state_with(1000, 149);
        let before = s.clone();
        assert_eq!(s.item_status(ItemId::Tv), ItemStatus::TooExpensive);
        assert!(!s.buy(ItemId::Tv));
        assert_eq!(s, before);
    }

    #[test]
    fn exact_price_is_affordable() {
        let mut s = state_with(1000, 30);
        assert_eq!(s.item_status(ItemId::Plant), ItemStatus::Affordable);
        assert!(s.buy(ItemId::Plant));
        assert_eq!(s.currency, Shekltk::ZERO);
        assert_eq!(s.item_status(ItemId::Plant), ItemStatus::Owned);
    }

    #[test]
    fn switching_to_current_view_is_noop() {
        let mut s = state_with(1000, 0);
        assert!(!s.switch_view(View::Game));
        assert!(s.switch_view(View::House));
        assert_eq!(s.current_view, View::House);
    }

    #[test]
    fn item_ids_parse_from_catalog() {
        for def in ITEM_CATALOG.iter() {
            assert_eq!(def.id.as_str().parse::<ItemId>(), Ok(def.id));
            assert_eq!(def.id.def(), def);
        }
        assert!("piano".parse::<ItemId>().is_err());
    }

    #[test]
    fn serializes_with_save_field_names() {
        let mut s = state_with(990, 45);
        assert!(s.buy(ItemId::Plant));
        s.switch_view(View::House);
        let json: serde_json::Value = serde_json::to_value(&s).unwrap();
        assert_eq!(json["energy"], 990);
        assert_eq!(json["lastEnergyUpdate"], T0);
        assert_eq!(json["currentView"], "house");
        assert_eq!(json["ownedItems"], serde_json::json!(["plant"]));
        assert_eq!(json["shekltk"].as_f64(), Some(1.5));
    }

    #[test]
    fn float_currency_rounds_to_tenths() {
        let raw = r#"{"shekltk":0.30000000000000004,"energy":997,"lastEnergyUpdate":1}"#;
        let s: GameState = serde_json::from_str(raw).unwrap();
        assert_eq!(s.currency, Shekltk::from_tenths(3));
        assert_eq!(s.current_view, View::Game);
        assert!(s.owned_items.is_empty());
    }

    #[test]
    fn negative_currency_is_rejected() {
        let raw = r#"{"shekltk":-1,"energy":10,"lastEnergyUpdate":1}"#;
        assert!(serde_json::from_str::<GameState>(raw).is_err());
    }

    #[test]
    fn unknown_and_duplicate_items_are_dropped() {
        let raw = r#"{"shekltk":1,"energy":10,"lastEnergyUpdate":1,
            "currentView":"house","ownedItems":["tv","piano","tv","bed"]}"#;
        let s: GameState = serde_json::from_str(raw).unwrap();
        let ids: Vec<ItemId> = s.owned_items.iter().collect();
        assert_eq!(ids, vec![ItemId::Tv, ItemId::Bed]);
    }

    #[test]
    fn reducer_returns_same_rc_on_noop() {
        let game = Rc::new(Game::new(Rc::new(cfg()), state_with(0, 0)));
        let next = game.clone().reduce(GameAction::Tick { now_ms: T0 + 1_000 });
        assert!(Rc::ptr_eq(&game, &next));
        let next = game.clone().reduce(GameAction::Click { now_ms: T0 });
        assert!(Rc::ptr_eq(&game, &next));
    }

    #[test]
    fn reducer_click_reconciles_before_spending() {
        let game = Rc::new(Game::new(Rc::new(cfg()), state_with(0, 0)));
        let now = T0 + 2 * HOUR_MS;
        let next = game.reduce(GameAction::Click { now_ms: now });
        assert_eq!(next.state.energy, 199);
        assert_eq!(next.state.currency, Shekltk::from_tenths(1));
        assert_eq!(next.state.last_energy_update, now);
    }

    #[test]
    fn reducer_buy_and_switch() {
        let game = Rc::new(Game::new(Rc::new(cfg()), state_with(1000, 200)));
        let game = game.reduce(GameAction::Buy(ItemId::Sofa));
        assert_eq!(game.state.currency, Shekltk::ZERO);
        let game = game.reduce(GameAction::SwitchView(View::House));
        assert_eq!(game.state.current_view, View::House);
        let ids: Vec<ItemId> = game.state.owned_items.iter().collect();
        assert_eq!(ids, vec![ItemId::Sofa]);
    }
}
