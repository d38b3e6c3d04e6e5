//! Event registry: routes emitted events to subscribed components
//!
//! Emitters push events into pipes, pipes feed a single shared queue owned
//! by the registry, and the host drains that queue and dispatches each
//! event through the policy bound to its name. Because every pipe writes
//! to the same queue, events keep their emission order across emitters.

use std::cell::RefCell;
use std::collections::{HashMap, HashSet, VecDeque};
use std::rc::Rc;

use tracing::debug;
use wordboard_core::{Action, ComponentId};

use crate::dispatch::DispatchPolicy;
use crate::emitter::Emitter;
use crate::events::{Event, EventName};
use crate::store::ComponentStore;

/// Two-sided index between event names and component ids.
///
/// Both directions are updated together on every mutation, so the two maps
/// never disagree about who is subscribed to what.
#[derive(Debug, Default)]
pub struct SubscriptionIndex {
    event_to_components: HashMap<EventName, HashSet<ComponentId>>,
    component_to_events: HashMap<ComponentId, HashSet<EventName>>,
    empty: HashSet<ComponentId>,
}

impl SubscriptionIndex {
    pub fn new() -> Self {
        SubscriptionIndex::default()
    }

    /// Subscribe a component to an event. Idempotent.
    pub fn subscribe(&mut self, event: EventName, component: ComponentId) {
        self.event_to_components
            .entry(event)
            .or_default()
            .insert(component.clone());
        self.component_to_events
            .entry(component)
            .or_default()
            .insert(event);
    }

    /// Drop every subscription held by a component.
    pub fn unsubscribe_component(&mut self, component: &ComponentId) {
        if let Some(events) = self.component_to_events.remove(component) {
            for event in events {
                if let Some(subscribers) = self.event_to_components.get_mut(&event) {
                    subscribers.remove(component);
                    if subscribers.is_empty() {
                        self.event_to_components.remove(&event);
                    }
                }
            }
        }
    }

    /// Drop an event name and detach it from every subscriber.
    pub fn remove_event(&mut self, event: EventName) {
        if let Some(components) = self.event_to_components.remove(&event) {
            for component in components {
                if let Some(events) = self.component_to_events.get_mut(&component) {
                    events.remove(&event);
                    if events.is_empty() {
                        self.component_to_events.remove(&component);
                    }
                }
            }
        }
    }

    pub fn subscribers(&self, event: EventName) -> Option<&HashSet<ComponentId>> {
        self.event_to_components.get(&event)
    }

    /// Like [`subscribers`](Self::subscribers) but yields an empty set for
    /// unknown events.
    pub fn subscribers_or_default(&self, event: EventName) -> &HashSet<ComponentId> {
        self.event_to_components.get(&event).unwrap_or(&self.empty)
    }

    pub fn is_subscribed(&self, event: EventName, component: &ComponentId) -> bool {
        self.event_to_components
            .get(&event)
            .map_or(false, |set| set.contains(component))
    }
}

/// Write end handed to an emitter for a single event name.
///
/// Emitting an event whose name does not match the pipe's name drops the
/// event; an emitter cannot smuggle events onto a channel it was not
/// bound to.
#[derive(Debug, Clone)]
pub struct EventPipe {
    name: EventName,
    sink: Rc<RefCell<VecDeque<Event>>>,
}

impl EventPipe {
    pub fn name(&self) -> EventName {
        self.name
    }

    pub fn emit(&self, event: Event) {
        if event.name() != self.name {
            debug!(
                pipe = %self.name,
                event = %event.name(),
                "dropping event emitted on mismatched pipe"
            );
            return;
        }
        self.sink.borrow_mut().push_back(event);
    }
}

/// Central wiring point between emitters, dispatch policies, and
/// components.
#[derive(Debug, Default)]
pub struct EventRegistry {
    dispatchers: HashMap<EventName, DispatchPolicy>,
    subscriptions: SubscriptionIndex,
    emitted: Rc<RefCell<VecDeque<Event>>>,
}

impl EventRegistry {
    pub fn new() -> Self {
        EventRegistry::default()
    }

    /// Hand an emitter a pipe for one event name. An emitter may be bound
    /// several times, once per name it produces.
    pub fn bind_emitter(&mut self, emitter: &mut dyn Emitter, name: EventName) {
        emitter.set_pipe(EventPipe {
            name,
            sink: Rc::clone(&self.emitted),
        });
    }

    /// Bind the dispatch policy for an event name. Rebinding replaces the
    /// previous policy.
    pub fn bind_dispatcher(&mut self, name: EventName, policy: DispatchPolicy) {
        self.dispatchers.insert(name, policy);
    }

    /// Subscribe a component to an event name. Idempotent.
    pub fn register_component(&mut self, name: EventName, component: ComponentId) {
        self.subscriptions.subscribe(name, component);
    }

    /// Drop all of a component's subscriptions.
    pub fn remove_component(&mut self, component: &ComponentId) {
        self.subscriptions.unsubscribe_component(component);
    }

    /// Drop an event name entirely: its dispatcher binding and its
    /// subscriber set. Components re-registered afterwards receive nothing
    /// until a dispatcher is bound again.
    pub fn remove_event(&mut self, name: EventName) {
        self.dispatchers.remove(&name);
        self.subscriptions.remove_event(name);
    }

    pub fn subscriptions(&self) -> &SubscriptionIndex {
        &self.subscriptions
    }

    /// Take every event emitted since the last drain, in emission order.
    pub fn drain_emitted(&mut self) -> Vec<Event> {
        self.emitted.borrow_mut().drain(..).collect()
    }

    /// Component ids currently subscribed to an event name, cloned so the
    /// caller can hand them to an emitter while the registry stays free.
    pub fn components_for_event(&self, name: EventName) -> HashSet<ComponentId> {
        self.subscriptions.subscribers_or_default(name).clone()
    }

    /// Route one event through its bound policy. Events with no dispatcher
    /// or no subscribers are silently dropped; any actions the receiving
    /// components produce come back for the host to route.
    pub fn dispatch_event(&mut self, event: &Event, store: &mut ComponentStore) -> Vec<Action> {
        let name = event.name();
        let Some(policy) = self.dispatchers.get(&name) else {
            debug!(event = %name, "no dispatcher bound, dropping event");
            return Vec::new();
        };
        let subscribers = self.subscriptions.subscribers_or_default(name);
        if subscribers.is_empty() {
            return Vec::new();
        }
        policy.dispatch(event, subscribers, store)
    }
}
