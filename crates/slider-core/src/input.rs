use glam::Vec3;

/// Identifies a pointer source (a hand ray, a fingertip, a mouse).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PointerId(pub u32);

/// Near pointers touch the control directly; far pointers reach it by ray.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum PointerKind {
    Near,
    #[default]
    Far,
}

/// A pointer sample delivered by the host's dispatcher.
///
/// `used` is the consumed flag: the first handler that acts on the event sets
/// it, and every later handler must leave the event alone.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerEvent {
    pub pointer: PointerId,
    pub kind: PointerKind,
    pub position: Vec3,
    used: bool,
}

impl PointerEvent {
    pub fn new(pointer: PointerId, kind: PointerKind, position: Vec3) -> Self {
        Self {
            pointer,
            kind,
            position,
            used: false,
        }
    }

    #[inline]
    pub fn is_used(&self) -> bool {
        self.used
    }

    /// Mark the event consumed.
    #[inline]
    pub fn use_event(&mut self) {
        self.used = true;
    }
}

/// Focus gained or lost by a pointer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FocusEvent {
    pub pointer: PointerId,
    pub kind: PointerKind,
}

impl FocusEvent {
    pub fn new(pointer: PointerId, kind: PointerKind) -> Self {
        Self { pointer, kind }
    }

    #[inline]
    pub fn is_near(&self) -> bool {
        self.kind == PointerKind::Near
    }
}

/// Event intake implemented by anything a dispatcher can drive.
pub trait PointerHandler {
    fn on_pointer_down(&mut self, event: &mut PointerEvent);
    fn on_pointer_dragged(&mut self, event: &mut PointerEvent);
    fn on_pointer_up(&mut self, event: &mut PointerEvent);
    fn on_focus_enter(&mut self, event: &FocusEvent);
    fn on_focus_exit(&mut self, event: &FocusEvent);
}
