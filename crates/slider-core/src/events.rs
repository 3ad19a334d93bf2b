//! Notification channels raised by the slider.
//!
//! Each channel is a list of boxed callbacks run in registration order. The
//! slider owns its channels; hosts reach them through
//! [`AxisSlider::events_mut`](crate::AxisSlider::events_mut).

use smallvec::SmallVec;

/// Payload delivered on every slider notification.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SliderEventData {
    pub old_value: f32,
    pub new_value: f32,
    /// True when a pointer drove the change (or, for hover, when the pointer
    /// is a near pointer).
    pub was_user_driven: bool,
}

impl SliderEventData {
    pub fn new(old_value: f32, new_value: f32, was_user_driven: bool) -> Self {
        Self {
            old_value,
            new_value,
            was_user_driven,
        }
    }

    /// Payload for notifications that do not change the value.
    pub fn unchanged(value: f32, was_user_driven: bool) -> Self {
        Self::new(value, value, was_user_driven)
    }
}

/// Handle returned by [`SliderEvent::add_listener`], used to remove it again.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ListenerId(u32);

type Listener = Box<dyn FnMut(&SliderEventData)>;

/// A single notification channel.
#[derive(Default)]
pub struct SliderEvent {
    listeners: SmallVec<[(ListenerId, Listener); 2]>,
    next_id: u32,
}

impl SliderEvent {
    pub fn add_listener<F>(&mut self, listener: F) -> ListenerId
    where
        F: FnMut(&SliderEventData) + 'static,
    {
        let id = ListenerId(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Returns false if `id` was not registered on this channel.
    pub fn remove_listener(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(lid, _)| *lid != id);
        self.listeners.len() != before
    }

    pub fn remove_all_listeners(&mut self) {
        self.listeners.clear();
    }

    pub fn invoke(&mut self, data: &SliderEventData) {
        for (_, listener) in self.listeners.iter_mut() {
            listener(data);
        }
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }
}

impl std::fmt::Debug for SliderEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SliderEvent")
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

/// The five channels a slider publishes.
#[derive(Debug, Default)]
pub struct SliderEvents {
    pub on_value_updated: SliderEvent,
    pub on_interaction_started: SliderEvent,
    pub on_interaction_ended: SliderEvent,
    pub on_hover_entered: SliderEvent,
    pub on_hover_exited: SliderEvent,
}
