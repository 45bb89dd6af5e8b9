//! Item state simulation for development.
//!
//! Periodically changes the state of in-memory items so that the state
//! listener path (item change -> updater -> characteristic callback) can be
//! observed without a real home-automation runtime.

use crate::item::{Hsb, Item, ItemKind, MemoryItem, OnOff, OpenClosed, State};
use log::info;
use std::sync::Arc;
use tokio::task::JoinHandle;
use tokio::time::{Duration, interval};

const DECIMAL_STEP: f64 = 5.0;
const PERCENT_STEP: f64 = 10.0;
const HUE_STEP: f64 = 30.0;

/// Spawn a task that advances every item's state once per `period`.
///
/// # Returns
///
/// A `JoinHandle` that can be used to abort the simulation task.
pub fn run_item_simulation(items: Vec<Arc<MemoryItem>>, period: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = interval(period);
        // The first tick completes immediately; keep the initial states visible for one period.
        ticker.tick().await;
        loop {
            ticker.tick().await;
            for item in &items {
                let next = next_state(item.kind(), &item.state());
                info!("[Sim] {} -> {}", item.name(), next);
                item.set_state(next);
            }
        }
    })
}

/// State that follows `current` for an item of `kind`.
pub fn next_state(kind: ItemKind, current: &State) -> State {
    match (kind, current) {
        (ItemKind::Switch, State::OnOff(OnOff::On)) => State::OFF,
        (ItemKind::Switch, _) => State::ON,
        (ItemKind::Contact, State::OpenClosed(OpenClosed::Open)) => State::CLOSED,
        (ItemKind::Contact, _) => State::OPEN,
        (ItemKind::Number, state) => {
            State::Decimal(state.as_decimal().unwrap_or(0.0) + DECIMAL_STEP)
        }
        (ItemKind::Dimmer | ItemKind::Rollershutter, state) => {
            let value = state.as_decimal().unwrap_or(0.0) + PERCENT_STEP;
            State::Percent(if value > 100.0 { 0.0 } else { value })
        }
        (ItemKind::Color, State::Hsb(hsb)) => {
            State::Hsb(hsb.with_hue((hsb.hue + HUE_STEP) % 360.0))
        }
        (ItemKind::Color, _) => State::Hsb(Hsb::default()),
        (ItemKind::String, state) => state.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::StateChangeListener;
    use std::sync::atomic::{AtomicU32, Ordering};

    #[test]
    fn test_next_state_by_kind() {
        assert_eq!(next_state(ItemKind::Switch, &State::ON), State::OFF);
        assert_eq!(next_state(ItemKind::Switch, &State::UnDef), State::ON);
        assert_eq!(next_state(ItemKind::Contact, &State::OPEN), State::CLOSED);
        assert_eq!(
            next_state(ItemKind::Number, &State::Decimal(10.0)),
            State::Decimal(15.0)
        );
        assert_eq!(
            next_state(ItemKind::Dimmer, &State::Percent(95.0)),
            State::Percent(0.0)
        );
        assert_eq!(
            next_state(ItemKind::Color, &State::Hsb(Hsb::new(350.0, 20.0, 30.0))),
            State::Hsb(Hsb::new(20.0, 20.0, 30.0))
        );
        assert_eq!(
            next_state(ItemKind::String, &State::Text("x".into())),
            State::Text("x".into())
        );
    }

    struct Counter(AtomicU32);

    impl StateChangeListener for Counter {
        fn state_changed(&self, _item: &str, _old: &State, _new: &State) {
            self.0.fetch_add(1, Ordering::SeqCst);
        }
    }

    #[tokio::test]
    async fn test_simulation_changes_items() {
        let item = Arc::new(MemoryItem::with_state("Sim_Switch", ItemKind::Switch, State::OFF));
        let counter = Arc::new(Counter(AtomicU32::new(0)));
        item.add_state_listener(counter.clone());

        let handle = run_item_simulation(vec![item.clone()], Duration::from_millis(10));
        tokio::time::sleep(Duration::from_millis(100)).await;
        handle.abort();

        assert!(counter.0.load(Ordering::SeqCst) >= 1);
    }
}
