// ── Discovery deck controller ──
//
// Owns the ordered deck of candidate cards, applies the configured
// consumption policy on each swipe and enforces the daily free-swipe
// quota. Every mutation publishes a `DeckSnapshot` on a watch channel.

mod fixtures;

use std::collections::VecDeque;
use std::sync::Arc;

use serde::Serialize;
use strum::Display;
use tokio::sync::watch;
use tracing::debug;

use crate::config::{ConsumptionPolicy, DailyLimit, DeckConfig};
use crate::model::{Card, RecordId, SwipeAction};
use crate::stream::StateStream;

pub use fixtures::sample_cards;

/// Where the deck stands with respect to its two gates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum DeckStatus {
    /// Cards available and quota not yet met.
    Active,
    /// Linear deck with nothing left. Cleared by `reload`.
    Exhausted,
    /// Daily quota met. Cleared by `reset_daily_limit`.
    LimitReached,
}

/// What a single `handle` call did to the deck.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SwipeOutcome {
    /// Quota already met; nothing consumed, nothing counted.
    Blocked,
    /// Quota consumed but the deck was empty.
    Empty,
    /// Front card moved to the back (circular).
    Recycled(RecordId),
    /// Front card dropped (linear).
    Removed(RecordId),
}

/// Point-in-time view of the deck published to subscribers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeckSnapshot {
    pub cards: Arc<Vec<Card>>,
    pub swipes_today: u32,
    pub reached_daily_limit: bool,
    pub status: DeckStatus,
}

/// The swipe deck behind the home screen.
pub struct DiscoveryViewModel {
    config: DeckConfig,
    /// Canonical reload source. Never mutated after construction.
    base_cards: Arc<Vec<Card>>,
    /// Live consumable deck; front is the card on top.
    cards: VecDeque<Card>,
    swipes_today: u32,
    reached_daily_limit: bool,
    snapshot: watch::Sender<DeckSnapshot>,
}

impl DiscoveryViewModel {
    /// Build a controller over `cards`. The given order becomes both the
    /// live deck and the reload source.
    pub fn new(cards: Vec<Card>, config: DeckConfig) -> Self {
        let base_cards = Arc::new(cards);
        let initial = DeckSnapshot {
            cards: Arc::clone(&base_cards),
            swipes_today: 0,
            reached_daily_limit: false,
            status: if base_cards.is_empty() && !config.consumption.is_circular() {
                DeckStatus::Exhausted
            } else {
                DeckStatus::Active
            },
        };
        let (snapshot, _) = watch::channel(initial);

        Self {
            config,
            cards: base_cards.iter().cloned().collect(),
            base_cards,
            swipes_today: 0,
            reached_daily_limit: false,
            snapshot,
        }
    }

    /// Controller over the built-in sample deck.
    pub fn with_sample_cards(config: DeckConfig) -> Self {
        Self::new(sample_cards(), config)
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn config(&self) -> DeckConfig {
        self.config
    }

    pub fn is_circular(&self) -> bool {
        self.config.consumption.is_circular()
    }

    pub fn daily_free_limit(&self) -> DailyLimit {
        self.config.daily_limit
    }

    pub fn cards(&self) -> &VecDeque<Card> {
        &self.cards
    }

    pub fn base_cards(&self) -> &[Card] {
        &self.base_cards
    }

    pub fn top_card(&self) -> Option<&Card> {
        self.cards.front()
    }

    pub fn swipes_today(&self) -> u32 {
        self.swipes_today
    }

    pub fn reached_daily_limit(&self) -> bool {
        self.reached_daily_limit
    }

    /// Free swipes left today, or `None` when unlimited.
    pub fn remaining_today(&self) -> Option<u32> {
        self.config
            .daily_limit
            .get()
            .map(|limit| limit.saturating_sub(self.swipes_today))
    }

    pub fn status(&self) -> DeckStatus {
        if self.reached_daily_limit {
            DeckStatus::LimitReached
        } else if !self.is_circular() && self.cards.is_empty() {
            DeckStatus::Exhausted
        } else {
            DeckStatus::Active
        }
    }

    /// Whether the swipe controls should be replaced by the gate screen.
    pub fn gate_active(&self) -> bool {
        self.status() != DeckStatus::Active
    }

    /// Subscribe to deck changes.
    pub fn subscribe(&self) -> StateStream<DeckSnapshot> {
        StateStream::new(self.snapshot.subscribe())
    }

    pub fn snapshot(&self) -> DeckSnapshot {
        DeckSnapshot {
            cards: Arc::new(self.cards.iter().cloned().collect()),
            swipes_today: self.swipes_today,
            reached_daily_limit: self.reached_daily_limit,
            status: self.status(),
        }
    }

    // ── Mutations ────────────────────────────────────────────────────

    /// Apply a swipe to the top card.
    ///
    /// The quota guard runs before anything else, so a blocked swipe
    /// neither counts nor consumes, even on an empty deck. The swipe that
    /// reaches the limit is itself accepted and raises the flag. `action`
    /// does not change how the card is consumed.
    pub fn handle(&mut self, action: SwipeAction) -> SwipeOutcome {
        if let Some(limit) = self.config.daily_limit.get() {
            if self.swipes_today >= limit {
                self.reached_daily_limit = true;
                debug!(%action, swipes_today = self.swipes_today, limit, "swipe blocked by daily limit");
                self.publish();
                return SwipeOutcome::Blocked;
            }
        }

        self.swipes_today = self.swipes_today.saturating_add(1);
        if let Some(limit) = self.config.daily_limit.get() {
            if self.swipes_today >= limit {
                self.reached_daily_limit = true;
            }
        }

        let Some(front) = self.cards.pop_front() else {
            debug!(%action, swipes_today = self.swipes_today, "swipe on empty deck");
            self.publish();
            return SwipeOutcome::Empty;
        };

        let id = front.id.clone();
        let outcome = match self.config.consumption {
            ConsumptionPolicy::Circular => {
                self.cards.push_back(front);
                SwipeOutcome::Recycled(id)
            }
            ConsumptionPolicy::Linear => SwipeOutcome::Removed(id),
        };

        debug!(
            %action,
            swipes_today = self.swipes_today,
            remaining = self.cards.len(),
            reached_daily_limit = self.reached_daily_limit,
            "swipe applied"
        );
        self.publish();
        outcome
    }

    /// Restore the deck to its original order. Quota state is day-scoped
    /// and survives a reload.
    pub fn reload(&mut self) {
        self.cards = self.base_cards.iter().cloned().collect();
        debug!(cards = self.cards.len(), "deck reloaded");
        self.publish();
    }

    /// Start a new quota day. Leaves the deck untouched.
    pub fn reset_daily_limit(&mut self) {
        self.swipes_today = 0;
        self.reached_daily_limit = false;
        debug!("daily limit reset");
        self.publish();
    }

    fn publish(&self) {
        self.snapshot.send_replace(self.snapshot());
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::num::NonZeroU32;

    use pretty_assertions::assert_eq;

    use super::*;

    fn card(name: &str) -> Card {
        Card {
            id: RecordId::from(name),
            name: name.into(),
            age: 30,
            location: "Nowhere".into(),
            tag: "Tag".into(),
            image_url: None,
            photos: Vec::new(),
            bio: String::new(),
            height_cm: None,
            weight_kg: None,
            relationship_status: None,
            ethnicity: None,
            interests: Vec::new(),
            looking_for: Vec::new(),
            friends: Vec::new(),
        }
    }

    fn deck(names: &[&str], config: DeckConfig) -> DiscoveryViewModel {
        DiscoveryViewModel::new(names.iter().map(|n| card(n)).collect(), config)
    }

    fn names(vm: &DiscoveryViewModel) -> Vec<String> {
        vm.cards().iter().map(|c| c.name.clone()).collect()
    }

    fn limit(n: u32) -> DailyLimit {
        DailyLimit::LimitOf(NonZeroU32::new(n).unwrap())
    }

    #[test]
    fn circular_swipes_rotate_the_deck() {
        let mut vm = deck(&["A", "B", "C"], DeckConfig::circular());

        assert_eq!(vm.handle(SwipeAction::Like), SwipeOutcome::Recycled(RecordId::from("A")));
        assert_eq!(names(&vm), ["B", "C", "A"]);

        vm.handle(SwipeAction::Pass);
        assert_eq!(names(&vm), ["C", "A", "B"]);
    }

    #[test]
    fn circular_deck_size_is_invariant() {
        let original = ["A", "B", "C", "D"];
        for n in 0..12 {
            let mut vm = deck(&original, DeckConfig::circular());
            for _ in 0..n {
                vm.handle(SwipeAction::Like);
            }
            assert_eq!(vm.cards().len(), original.len());
            let mut expected = original.to_vec();
            expected.rotate_left(n % original.len());
            assert_eq!(names(&vm), expected);
        }
    }

    #[test]
    fn linear_swipes_exhaust_then_noop() {
        let mut vm = deck(&["A", "B", "C"], DeckConfig::linear());
        for _ in 0..3 {
            vm.handle(SwipeAction::Like);
        }
        assert!(vm.cards().is_empty());
        assert_eq!(vm.status(), DeckStatus::Exhausted);
        assert!(vm.gate_active());

        assert_eq!(vm.handle(SwipeAction::Pass), SwipeOutcome::Empty);
        assert!(vm.cards().is_empty());
    }

    #[test]
    fn linear_size_is_saturating_difference() {
        for n in 0..6 {
            let mut vm = deck(&["A", "B", "C"], DeckConfig::linear());
            for _ in 0..n {
                vm.handle(SwipeAction::Pass);
            }
            assert_eq!(vm.cards().len(), 3usize.saturating_sub(n));
        }
    }

    #[test]
    fn limit_flag_raised_on_the_reaching_swipe() {
        let mut vm = deck(&["A", "B"], DeckConfig::linear().with_daily_limit(limit(1)));

        assert_eq!(vm.handle(SwipeAction::Like), SwipeOutcome::Removed(RecordId::from("A")));
        assert_eq!(vm.swipes_today(), 1);
        assert!(vm.reached_daily_limit());
        assert_eq!(names(&vm), ["B"]);

        assert_eq!(vm.handle(SwipeAction::Pass), SwipeOutcome::Blocked);
        assert_eq!(names(&vm), ["B"]);
        assert_eq!(vm.swipes_today(), 1);
        assert_eq!(vm.status(), DeckStatus::LimitReached);
    }

    #[test]
    fn limit_guard_fires_on_empty_deck() {
        let mut vm = deck(&[], DeckConfig::linear().with_daily_limit(limit(2)));
        assert_eq!(vm.handle(SwipeAction::Like), SwipeOutcome::Empty);
        assert_eq!(vm.handle(SwipeAction::Like), SwipeOutcome::Empty);
        assert!(vm.reached_daily_limit());
        assert_eq!(vm.handle(SwipeAction::Like), SwipeOutcome::Blocked);
        assert_eq!(vm.swipes_today(), 2);
    }

    #[test]
    fn circular_limit_blocks_after_l_swipes() {
        let mut vm = deck(&["A", "B", "C"], DeckConfig::circular().with_daily_limit(limit(3)));
        for _ in 0..3 {
            assert!(!vm.reached_daily_limit());
            vm.handle(SwipeAction::Like);
        }
        assert!(vm.reached_daily_limit());
        assert_eq!(vm.remaining_today(), Some(0));
        let before = names(&vm);
        assert_eq!(vm.handle(SwipeAction::Like), SwipeOutcome::Blocked);
        assert_eq!(names(&vm), before);
        assert_eq!(vm.swipes_today(), 3);
    }

    #[test]
    fn reload_restores_order_but_keeps_quota() {
        let mut vm = deck(&["A", "B", "C"], DeckConfig::linear().with_daily_limit(limit(5)));
        for _ in 0..4 {
            vm.handle(SwipeAction::Like);
        }
        vm.reload();
        assert_eq!(names(&vm), ["A", "B", "C"]);
        assert_eq!(vm.cards().iter().cloned().collect::<Vec<_>>(), vm.base_cards());
        assert_eq!(vm.swipes_today(), 4);
        assert!(!vm.reached_daily_limit());
        assert_eq!(vm.remaining_today(), Some(1));
    }

    #[test]
    fn reset_daily_limit_clears_counters_only() {
        let mut vm = deck(&["A", "B"], DeckConfig::linear().with_daily_limit(limit(1)));
        vm.handle(SwipeAction::Like);
        vm.handle(SwipeAction::Pass);
        vm.reset_daily_limit();

        assert_eq!(vm.swipes_today(), 0);
        assert!(!vm.reached_daily_limit());
        assert_eq!(names(&vm), ["B"]);
        assert_eq!(vm.status(), DeckStatus::Active);
    }

    #[test]
    fn unlimited_deck_reports_no_remaining_count() {
        let mut vm = deck(&["A"], DeckConfig::circular());
        for _ in 0..100 {
            vm.handle(SwipeAction::Like);
        }
        assert_eq!(vm.remaining_today(), None);
        assert!(!vm.reached_daily_limit());
        assert_eq!(vm.swipes_today(), 100);
    }

    #[tokio::test]
    async fn subscribers_see_every_mutation() {
        let mut vm = deck(&["A", "B"], DeckConfig::linear());
        let mut stream = vm.subscribe();
        assert_eq!(stream.current().cards.len(), 2);

        vm.handle(SwipeAction::Like);
        let snap = stream.changed().await.unwrap();
        assert_eq!(snap.cards.len(), 1);
        assert_eq!(snap.swipes_today, 1);

        vm.reload();
        let snap = stream.changed().await.unwrap();
        assert_eq!(snap.cards.len(), 2);
        assert_eq!(snap.status, DeckStatus::Active);
    }

    #[test]
    fn sample_deck_has_three_cards() {
        let vm = DiscoveryViewModel::with_sample_cards(DeckConfig::circular());
        assert_eq!(vm.cards().len(), 3);
        assert_eq!(vm.top_card().unwrap().title(), "Herman West, 20");
    }

    #[test]
    fn snapshot_serializes_status() {
        let vm = deck(&[], DeckConfig::linear());
        let json = serde_json::to_value(vm.snapshot()).unwrap();
        assert_eq!(json["status"], "exhausted");
    }
}
