/// Input events delivered to a strip by its host.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// Pointer button pressed over the region (page coordinates).
    PointerDown { page_x: f32 },
    /// Pointer moved over the region.
    PointerMove { page_x: f32 },
    /// Pointer button released.
    PointerUp,
    /// Pointer left the region.
    PointerLeave,
    /// Click on an element inside the strip.
    Click { target: Option<String> },
    /// First touch point placed on the region.
    TouchStart { client_x: f32 },
    /// First touch point moved.
    TouchMove { client_x: f32 },
    /// Touch lifted or cancelled.
    TouchEnd,
    /// Key pressed while focus is inside the region.
    Key { key: Key, modifiers: Modifiers },
    /// The region was scrolled natively (wheel, trackpad, scrollbar).
    Scroll { offset: f32 },
    /// The region's visible width changed.
    Resize { width: f32 },
    /// The strip entered or left the viewport.
    Visibility { intersecting: bool },
}

impl Event {
    pub fn key(key: Key) -> Self {
        Event::Key {
            key,
            modifiers: Modifiers::default(),
        }
    }

    pub fn click(target: impl Into<String>) -> Self {
        Event::Click {
            target: Some(target.into()),
        }
    }
}

/// Simplified key representation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Char(char),
    Enter,
    Tab,
    Escape,
    Left,
    Right,
    Up,
    Down,
    Home,
    End,
    PageUp,
    PageDown,
}

/// Key modifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
}

/// What the host should do with the event after the strip saw it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Outcome {
    /// The strip acted on the event.
    pub consumed: bool,
    /// Suppress the platform default (page scroll, link navigation).
    pub prevent_default: bool,
    /// Stop the event from reaching other listeners.
    pub stop_propagation: bool,
}

impl Outcome {
    pub fn ignored() -> Self {
        Self::default()
    }

    pub fn consumed() -> Self {
        Self {
            consumed: true,
            ..Default::default()
        }
    }

    pub fn prevented() -> Self {
        Self {
            consumed: true,
            prevent_default: true,
            stop_propagation: false,
        }
    }

    pub fn swallowed() -> Self {
        Self {
            consumed: true,
            prevent_default: true,
            stop_propagation: true,
        }
    }
}

// Conversion from crossterm types
impl From<crossterm::event::KeyCode> for Key {
    fn from(code: crossterm::event::KeyCode) -> Self {
        use crossterm::event::KeyCode;
        match code {
            KeyCode::Char(c) => Key::Char(c),
            KeyCode::Enter => Key::Enter,
            KeyCode::Tab => Key::Tab,
            KeyCode::Esc => Key::Escape,
            KeyCode::Left => Key::Left,
            KeyCode::Right => Key::Right,
            KeyCode::Up => Key::Up,
            KeyCode::Down => Key::Down,
            KeyCode::Home => Key::Home,
            KeyCode::End => Key::End,
            KeyCode::PageUp => Key::PageUp,
            KeyCode::PageDown => Key::PageDown,
            _ => Key::Char('\0'), // Placeholder for unsupported keys
        }
    }
}

impl From<crossterm::event::KeyModifiers> for Modifiers {
    fn from(mods: crossterm::event::KeyModifiers) -> Self {
        use crossterm::event::KeyModifiers;
        Self {
            shift: mods.contains(KeyModifiers::SHIFT),
            ctrl: mods.contains(KeyModifiers::CONTROL),
            alt: mods.contains(KeyModifiers::ALT),
        }
    }
}

impl From<crossterm::event::KeyEvent> for Event {
    fn from(key: crossterm::event::KeyEvent) -> Self {
        Event::Key {
            key: key.code.into(),
            modifiers: key.modifiers.into(),
        }
    }
}
