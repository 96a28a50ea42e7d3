use std::collections::HashSet;

/// Viewport signals a strip can subscribe to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Signal {
    /// Window/viewport resized.
    Resize,
    /// Strip scrolled into or out of view.
    Visibility,
}

/// The page hosting a strip.
///
/// The host owns event delivery: it forwards the subscribed signals to
/// [`NavStrip::handle`](crate::NavStrip::handle) and drives
/// [`NavStrip::tick`](crate::NavStrip::tick) from its event loop.
pub trait Host {
    /// Current page location, either a path (`/collections/shoes`) or an
    /// absolute URL.
    fn location(&self) -> &str;

    /// Register interest in `signal`. Returns false when the host can't
    /// provide it.
    fn subscribe(&mut self, signal: Signal) -> bool;
}

/// In-memory host with a fixed set of capabilities.
#[derive(Debug, Clone)]
pub struct StaticHost {
    location: String,
    supported: HashSet<Signal>,
    subscribed: HashSet<Signal>,
}

impl StaticHost {
    /// A host at `location` supporting every signal.
    pub fn new(location: impl Into<String>) -> Self {
        Self {
            location: location.into(),
            supported: [Signal::Resize, Signal::Visibility].into_iter().collect(),
            subscribed: HashSet::new(),
        }
    }

    /// Drop support for `signal`.
    pub fn without(mut self, signal: Signal) -> Self {
        self.supported.remove(&signal);
        self
    }

    pub fn set_location(&mut self, location: impl Into<String>) {
        self.location = location.into();
    }

    pub fn is_subscribed(&self, signal: Signal) -> bool {
        self.subscribed.contains(&signal)
    }
}

impl Host for StaticHost {
    fn location(&self) -> &str {
        &self.location
    }

    fn subscribe(&mut self, signal: Signal) -> bool {
        if !self.supported.contains(&signal) {
            return false;
        }
        self.subscribed.insert(signal);
        true
    }
}
