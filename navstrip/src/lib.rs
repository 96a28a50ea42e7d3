pub mod active;
pub mod animation;
pub mod config;
pub mod element;
pub mod error;
pub mod event;
pub mod host;
pub mod input;
pub mod markup;
pub mod render;
pub mod scroll;
pub mod strip;
pub mod timer;
pub mod transitions;

pub use config::StripConfig;
pub use element::{find_element, Content, Element};
pub use error::{ConfigError, MountError};
pub use event::{Event, Key, Modifiers, Outcome};
pub use host::{Host, Signal, StaticHost};
pub use input::ScrollCommand;
pub use markup::NavItem;
pub use scroll::{ArrowControlState, BoundaryState, ScrollRegion};
pub use strip::NavStrip;
pub use transitions::{Easing, TransitionConfig};
