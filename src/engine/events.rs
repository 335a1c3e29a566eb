// Shared event bus between scenes
//
// Scenes that care about UI events subscribe with their key and drain their
// own queue during update. Unsubscribing (on scene shutdown) drops anything
// still queued for that scene.

use super::input::MobileButton;
use super::scene::SceneKey;
use std::collections::{HashMap, VecDeque};

/// Events published by UI widgets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiEvent {
    /// An on-screen control was pressed
    MobileDown(MobileButton),
    /// An on-screen control was released
    MobileUp(MobileButton),
}

/// Publish/subscribe queue keyed by scene
#[derive(Debug, Default)]
pub struct EventBus {
    queues: HashMap<SceneKey, VecDeque<UiEvent>>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start listening for events
    pub fn subscribe(&mut self, scene: SceneKey) {
        self.queues.entry(scene).or_default();
    }

    /// Stop listening and drop pending events
    pub fn unsubscribe(&mut self, scene: SceneKey) {
        self.queues.remove(&scene);
    }

    /// Check whether a scene is listening
    pub fn is_subscribed(&self, scene: SceneKey) -> bool {
        self.queues.contains_key(&scene)
    }

    /// Deliver an event to every subscriber
    pub fn publish(&mut self, event: UiEvent) {
        if self.queues.is_empty() {
            log::debug!("No listeners for {:?}", event);
        }
        for queue in self.queues.values_mut() {
            queue.push_back(event);
        }
    }

    /// Take all pending events for a scene, oldest first
    pub fn drain(&mut self, scene: SceneKey) -> Vec<UiEvent> {
        self.queues
            .get_mut(&scene)
            .map(|queue| queue.drain(..).collect())
            .unwrap_or_default()
    }

    /// Number of listening scenes
    pub fn subscriber_count(&self) -> usize {
        self.queues.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_publish_without_subscribers_is_dropped() {
        let mut bus = EventBus::new();
        bus.publish(UiEvent::MobileDown(MobileButton::Jump));
        bus.subscribe(SceneKey::Game);
        assert!(bus.drain(SceneKey::Game).is_empty());
    }

    #[test]
    fn test_every_subscriber_gets_the_event() {
        let mut bus = EventBus::new();
        bus.subscribe(SceneKey::Game);
        bus.subscribe(SceneKey::Finish);
        bus.publish(UiEvent::MobileDown(MobileButton::Left));

        assert_eq!(
            bus.drain(SceneKey::Game),
            vec![UiEvent::MobileDown(MobileButton::Left)]
        );
        assert_eq!(
            bus.drain(SceneKey::Finish),
            vec![UiEvent::MobileDown(MobileButton::Left)]
        );
    }

    #[test]
    fn test_drain_keeps_order_and_empties_queue() {
        let mut bus = EventBus::new();
        bus.subscribe(SceneKey::Game);
        bus.publish(UiEvent::MobileDown(MobileButton::Right));
        bus.publish(UiEvent::MobileUp(MobileButton::Right));

        let events = bus.drain(SceneKey::Game);
        assert_eq!(
            events,
            vec![
                UiEvent::MobileDown(MobileButton::Right),
                UiEvent::MobileUp(MobileButton::Right)
            ]
        );
        assert!(bus.drain(SceneKey::Game).is_empty());
    }

    #[test]
    fn test_unsubscribe_drops_pending_events() {
        let mut bus = EventBus::new();
        bus.subscribe(SceneKey::Finish);
        bus.publish(UiEvent::MobileDown(MobileButton::Crouch));
        bus.unsubscribe(SceneKey::Finish);

        assert!(!bus.is_subscribed(SceneKey::Finish));
        assert!(bus.drain(SceneKey::Finish).is_empty());
        assert_eq!(bus.subscriber_count(), 0);
    }

    #[test]
    fn test_subscribe_twice_keeps_queue() {
        let mut bus = EventBus::new();
        bus.subscribe(SceneKey::Game);
        bus.publish(UiEvent::MobileDown(MobileButton::Jump));
        bus.subscribe(SceneKey::Game);
        assert_eq!(bus.drain(SceneKey::Game).len(), 1);
    }
}
