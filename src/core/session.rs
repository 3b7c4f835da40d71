/// Lifecycle of the ambient music loop.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AmbientState {
    /// Waiting for a user gesture that grants activation.
    #[default]
    Locked,
    /// `play()` issued, promise pending.
    Starting,
    Playing,
    /// Session torn down.
    Stopped,
}

/// Autoplay gate for the ambient loop: at most one `play()` is in flight, and
/// only after a qualifying user gesture. A rejected play re-arms the gate so
/// the next gesture can try again.
#[derive(Clone, Debug, Default)]
pub struct AmbientGate {
    state: AmbientState,
    plays_issued: u32,
}

impl AmbientGate {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn state(&self) -> AmbientState {
        self.state
    }

    #[inline]
    pub fn is_unlocked(&self) -> bool {
        !matches!(self.state, AmbientState::Locked)
    }

    #[inline]
    pub fn is_playing(&self) -> bool {
        self.state == AmbientState::Playing
    }

    #[inline]
    pub fn plays_issued(&self) -> u32 {
        self.plays_issued
    }

    /// Record a user gesture. Returns `true` when the caller must issue
    /// `play()` on the ambient element.
    pub fn on_gesture(&mut self) -> bool {
        if self.state != AmbientState::Locked {
            return false;
        }
        self.state = AmbientState::Starting;
        self.plays_issued += 1;
        true
    }

    /// Outcome of the `play()` promise issued after `on_gesture`.
    pub fn play_settled(&mut self, ok: bool) {
        if self.state != AmbientState::Starting {
            return;
        }
        self.state = if ok {
            AmbientState::Playing
        } else {
            AmbientState::Locked
        };
    }

    pub fn teardown(&mut self) {
        self.state = AmbientState::Stopped;
    }
}
