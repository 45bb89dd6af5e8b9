//! Accessory updater: pushes item state changes to subscribed characteristics.
//!
//! The updater attaches itself as a state change listener to every item that
//! has at least one subscription, and keeps a table of callbacks keyed by
//! (item name, characteristic tag). When an item changes, every callback
//! registered for that item fires.
//!
//! - Subscribing twice with the same key replaces the earlier callback.
//! - Subscribing with a new item instance under a known name moves the
//!   listener from the old instance to the new one.
//! - Unsubscribing the last tag of an item detaches the listener.
//! - Unsubscribing an absent key is a no-op.
//! - A change delivered after unsubscribe finds no callback and is dropped.

use crate::characteristic::CharacteristicType;
use crate::item::{Item, State, StateChangeListener};
use crate::tagged_item::TaggedItem;
use log::{debug, trace};
use parking_lot::RwLock;
use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, Weak};

/// Callback invoked when a subscribed characteristic's backing item changes.
pub type ChangeCallback = Arc<dyn Fn() + Send + Sync>;

/// Identity of one subscription: the item and the characteristic tag.
///
/// Returned from `subscribe` and accepted by `unsubscribe`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionKey {
    item: String,
    tag: &'static str,
}

impl SubscriptionKey {
    pub fn new(item: impl Into<String>, characteristic_type: CharacteristicType) -> Self {
        Self {
            item: item.into(),
            tag: characteristic_type.tag(),
        }
    }

    pub fn item(&self) -> &str {
        &self.item
    }

    pub fn tag(&self) -> &'static str {
        self.tag
    }
}

impl fmt::Display for SubscriptionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.item, self.tag)
    }
}

#[derive(Default)]
struct Subscriptions {
    /// item name -> tag -> callback
    by_item: HashMap<String, HashMap<&'static str, ChangeCallback>>,
    /// Item instance this updater is registered on as a state listener, per item name.
    attached: HashMap<String, Weak<dyn Item>>,
}

#[derive(Default)]
struct UpdaterInner {
    subscriptions: RwLock<Subscriptions>,
}

impl StateChangeListener for UpdaterInner {
    fn state_changed(&self, item: &str, old: &State, new: &State) {
        // Callbacks run outside the lock so they may subscribe/unsubscribe.
        let callbacks: Vec<(&'static str, ChangeCallback)> = {
            let subscriptions = self.subscriptions.read();
            match subscriptions.by_item.get(item) {
                Some(by_tag) => by_tag
                    .iter()
                    .map(|(tag, callback)| (*tag, callback.clone()))
                    .collect(),
                None => return,
            }
        };

        trace!(
            "[Updater] {} changed {} -> {}, notifying {} subscriber(s)",
            item,
            old,
            new,
            callbacks.len()
        );
        for (tag, callback) in callbacks {
            trace!("[Updater] notify {}/{}", item, tag);
            callback();
        }
    }
}

/// Keeps characteristic subscriptions in sync with item state changes.
///
/// Cheap to clone; clones share the same subscription table.
#[derive(Clone, Default)]
pub struct AccessoryUpdater {
    inner: Arc<UpdaterInner>,
}

impl AccessoryUpdater {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `callback` for changes of `item` under `characteristic_type`'s tag.
    ///
    /// Replaces any callback already registered under the same key.
    pub fn subscribe(
        &self,
        item: &Arc<dyn Item>,
        characteristic_type: CharacteristicType,
        callback: ChangeCallback,
    ) -> SubscriptionKey {
        let key = SubscriptionKey::new(item.name(), characteristic_type);
        let (attach, previous) = {
            let mut subscriptions = self.inner.subscriptions.write();
            let replaced = subscriptions
                .by_item
                .entry(key.item.clone())
                .or_default()
                .insert(key.tag, callback);
            if replaced.is_some() {
                debug!("[Updater] Received duplicate subscription for {}", key);
            }

            let already_attached = subscriptions
                .attached
                .get(&key.item)
                .is_some_and(|attached| std::ptr::addr_eq(attached.as_ptr(), Arc::as_ptr(item)));
            if already_attached {
                (false, None)
            } else {
                let previous = subscriptions
                    .attached
                    .insert(key.item.clone(), Arc::downgrade(item))
                    .and_then(|attached| attached.upgrade());
                (true, previous)
            }
        };

        // Item registration happens outside the table lock.
        if let Some(previous) = previous {
            debug!("[Updater] Item {} was replaced, moving listener", key.item);
            previous.remove_state_listener(&self.listener());
        }
        if attach {
            item.add_state_listener(self.listener());
        }
        key
    }

    /// Remove the callback registered under `key`, if any.
    pub fn unsubscribe(&self, key: &SubscriptionKey) {
        let detach = {
            let mut subscriptions = self.inner.subscriptions.write();
            let Some(by_tag) = subscriptions.by_item.get_mut(&key.item) else {
                return;
            };
            if by_tag.remove(key.tag).is_some() {
                debug!("[Updater] Unsubscribed {}", key);
            }
            if by_tag.is_empty() {
                subscriptions.by_item.remove(&key.item);
                subscriptions
                    .attached
                    .remove(&key.item)
                    .and_then(|attached| attached.upgrade())
            } else {
                None
            }
        };

        if let Some(item) = detach {
            item.remove_state_listener(&self.listener());
        }
    }

    /// Whether a callback is currently registered under `key`.
    pub fn is_subscribed(&self, key: &SubscriptionKey) -> bool {
        self.inner
            .subscriptions
            .read()
            .by_item
            .get(&key.item)
            .is_some_and(|by_tag| by_tag.contains_key(key.tag))
    }

    /// Number of items this updater is currently listening to.
    pub fn attached_count(&self) -> usize {
        self.inner.subscriptions.read().attached.len()
    }

    /// Number of active subscriptions.
    pub fn subscription_count(&self) -> usize {
        self.inner
            .subscriptions
            .read()
            .by_item
            .values()
            .map(HashMap::len)
            .sum()
    }

    fn listener(&self) -> Arc<dyn StateChangeListener> {
        self.inner.clone()
    }

    /// Subscribe/unsubscribe pair for one characteristic of `tagged`.
    pub fn subscriber(
        &self,
        tagged: &TaggedItem,
        characteristic_type: CharacteristicType,
    ) -> ChangeSubscriber {
        ChangeSubscriber {
            updater: self.clone(),
            item: tagged.item().clone(),
            characteristic_type,
        }
    }
}

/// Subscription capability of a single characteristic.
///
/// Captures the item and tag so the protocol layer only deals in callbacks.
pub struct ChangeSubscriber {
    updater: AccessoryUpdater,
    item: Arc<dyn Item>,
    characteristic_type: CharacteristicType,
}

impl ChangeSubscriber {
    pub fn subscribe(&self, callback: ChangeCallback) -> SubscriptionKey {
        self.updater
            .subscribe(&self.item, self.characteristic_type, callback)
    }

    pub fn unsubscribe(&self) {
        self.updater.unsubscribe(&self.key());
    }

    pub fn key(&self) -> SubscriptionKey {
        SubscriptionKey::new(self.item.name(), self.characteristic_type)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::{ItemKind, MemoryItem};
    use std::sync::atomic::{AtomicU32, Ordering};

    fn counter() -> (Arc<AtomicU32>, ChangeCallback) {
        let count = Arc::new(AtomicU32::new(0));
        let inner = count.clone();
        let callback: ChangeCallback = Arc::new(move || {
            inner.fetch_add(1, Ordering::SeqCst);
        });
        (count, callback)
    }

    fn number_item(name: &str) -> (Arc<MemoryItem>, Arc<dyn Item>) {
        let item = Arc::new(MemoryItem::new(name, ItemKind::Number));
        let dyn_item: Arc<dyn Item> = item.clone();
        (item, dyn_item)
    }

    #[test]
    fn test_subscribe_fires_on_change() {
        let updater = AccessoryUpdater::new();
        let (item, dyn_item) = number_item("Fan_Speed");
        let (count, callback) = counter();

        let key = updater.subscribe(&dyn_item, CharacteristicType::RotationSpeed, callback);
        assert_eq!(key.item(), "Fan_Speed");
        assert_eq!(key.tag(), "RotationSpeed");

        item.set_state(State::Decimal(50.0));
        assert_eq!(count.load(Ordering::SeqCst), 1);

        // No change, no notification
        item.set_state(State::Decimal(50.0));
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_resubscribe_replaces_callback() {
        let updater = AccessoryUpdater::new();
        let (item, dyn_item) = number_item("Fan_Speed");
        let (first, first_callback) = counter();
        let (second, second_callback) = counter();

        updater.subscribe(&dyn_item, CharacteristicType::RotationSpeed, first_callback);
        updater.subscribe(&dyn_item, CharacteristicType::RotationSpeed, second_callback);
        assert_eq!(updater.subscription_count(), 1);

        item.set_state(State::Decimal(10.0));
        assert_eq!(first.load(Ordering::SeqCst), 0);
        assert_eq!(second.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_unsubscribe_then_notify_is_ignored() {
        let updater = AccessoryUpdater::new();
        let (item, dyn_item) = number_item("Valve_Duration");
        let (count, callback) = counter();

        let key = updater.subscribe(&dyn_item, CharacteristicType::Duration, callback);
        updater.unsubscribe(&key);
        assert!(!updater.is_subscribed(&key));

        item.set_state(State::Decimal(30.0));
        assert_eq!(count.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_unsubscribe_is_idempotent() {
        let updater = AccessoryUpdater::new();
        let key = SubscriptionKey::new("Missing", CharacteristicType::Hue);

        updater.unsubscribe(&key);
        updater.unsubscribe(&key);
        assert_eq!(updater.subscription_count(), 0);
    }

    #[test]
    fn test_tags_on_same_item_are_independent() {
        let updater = AccessoryUpdater::new();
        let (item, dyn_item) = number_item("Light_Color");
        let (hue, hue_callback) = counter();
        let (saturation, saturation_callback) = counter();

        updater.subscribe(&dyn_item, CharacteristicType::Hue, hue_callback);
        let saturation_key =
            updater.subscribe(&dyn_item, CharacteristicType::Saturation, saturation_callback);

        item.set_state(State::Decimal(1.0));
        assert_eq!(hue.load(Ordering::SeqCst), 1);
        assert_eq!(saturation.load(Ordering::SeqCst), 1);

        updater.unsubscribe(&saturation_key);
        item.set_state(State::Decimal(2.0));
        assert_eq!(hue.load(Ordering::SeqCst), 2);
        assert_eq!(saturation.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_callback_may_unsubscribe_itself() {
        let updater = AccessoryUpdater::new();
        let (item, dyn_item) = number_item("Fan_Speed");
        let key = SubscriptionKey::new("Fan_Speed", CharacteristicType::RotationSpeed);

        let count = Arc::new(AtomicU32::new(0));
        let inner_count = count.clone();
        let inner_updater = updater.clone();
        let inner_key = key.clone();
        let callback: ChangeCallback = Arc::new(move || {
            inner_count.fetch_add(1, Ordering::SeqCst);
            inner_updater.unsubscribe(&inner_key);
        });

        updater.subscribe(&dyn_item, CharacteristicType::RotationSpeed, callback);
        item.set_state(State::Decimal(1.0));
        item.set_state(State::Decimal(2.0));
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_replaced_item_after_unsubscribe_is_notified() {
        let updater = AccessoryUpdater::new();
        let (count, callback) = counter();

        let (old_item, old_dyn) = number_item("Fan_Speed");
        let key = updater.subscribe(&old_dyn, CharacteristicType::RotationSpeed, callback.clone());
        updater.unsubscribe(&key);
        assert_eq!(updater.attached_count(), 0);
        drop(old_dyn);
        drop(old_item);

        let (new_item, new_dyn) = number_item("Fan_Speed");
        updater.subscribe(&new_dyn, CharacteristicType::RotationSpeed, callback);
        new_item.set_state(State::Decimal(10.0));
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_resubscribe_with_new_instance_moves_listener() {
        let updater = AccessoryUpdater::new();
        let (count, callback) = counter();

        let (old_item, old_dyn) = number_item("Fan_Speed");
        updater.subscribe(&old_dyn, CharacteristicType::RotationSpeed, callback.clone());

        let (new_item, new_dyn) = number_item("Fan_Speed");
        updater.subscribe(&new_dyn, CharacteristicType::RotationSpeed, callback);
        assert_eq!(updater.attached_count(), 1);

        old_item.set_state(State::Decimal(5.0));
        assert_eq!(count.load(Ordering::SeqCst), 0);

        new_item.set_state(State::Decimal(10.0));
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_resubscribe_same_instance_after_unsubscribe_fires_once() {
        let updater = AccessoryUpdater::new();
        let (item, dyn_item) = number_item("Valve_Duration");
        let (count, callback) = counter();

        let key = updater.subscribe(&dyn_item, CharacteristicType::Duration, callback.clone());
        updater.unsubscribe(&key);
        updater.subscribe(&dyn_item, CharacteristicType::Duration, callback);

        item.set_state(State::Decimal(30.0));
        assert_eq!(count.load(Ordering::SeqCst), 1);
        assert_eq!(updater.attached_count(), 1);
    }
}
