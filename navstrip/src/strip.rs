use std::time::Instant;

use crate::active::{self, href_path, location_path};
use crate::config::StripConfig;
use crate::element::{find_element, Element};
use crate::error::MountError;
use crate::event::{Event, Outcome};
use crate::host::{Host, Signal};
use crate::input::{self, DragSession, ScrollCommand, TouchSession};
use crate::markup::{self, ArrowSide, NavItem, Parts, ACTIVE_CLASS, HANDLE_ATTR};
use crate::render;
use crate::scroll::{ArrowControlState, BoundaryState, ScrollRegion};
use crate::timer::Debounce;

/// Controller for a horizontally scrollable strip of navigation buttons.
///
/// The strip owns its markup tree. The host forwards input with
/// [`handle`](Self::handle) and pumps animations and timers with
/// [`tick`](Self::tick); all state changes are written back into the tree,
/// which the host reads through [`root`](Self::root).
///
/// Everything runs on the caller's thread. The most recent scroll command
/// wins: a new drag, key or click replaces whatever animation was in flight.
#[derive(Debug)]
pub struct NavStrip {
    root: Element,
    parts: Parts,
    config: StripConfig,
    region: ScrollRegion,

    drag: DragSession,
    touch: TouchSession,

    resize_timer: Debounce,
    settle_timer: Debounce,
    auto_scroll_timer: Debounce,
    /// True from the first scroll event until `scroll_settle` of quiet.
    scrolling: bool,

    resize_signal: bool,
    visibility_signal: bool,
}

impl NavStrip {
    /// Mount a strip on `root`. Returns `None`, without touching the markup,
    /// when the markup has no scroll region.
    pub fn mount(
        root: Element,
        host: &mut dyn Host,
        config: StripConfig,
        now: Instant,
    ) -> Option<Self> {
        match Self::try_mount(root, host, config, now) {
            Ok(strip) => Some(strip),
            Err(err) => {
                log::debug!("[navstrip] not mounting: {err}");
                None
            }
        }
    }

    /// Like [`mount`](Self::mount), reporting why the markup was rejected.
    /// A config that fails [`StripConfig::validate`] is logged and replaced
    /// by the defaults.
    pub fn try_mount(
        root: Element,
        host: &mut dyn Host,
        config: StripConfig,
        now: Instant,
    ) -> Result<Self, MountError> {
        let parts = markup::locate(&root)?;

        let config = match config.validate() {
            Ok(()) => config,
            Err(err) => {
                log::debug!("[navstrip] {err}, using default config");
                StripConfig::default()
            }
        };

        let region = ScrollRegion::measure(parts.nav_width, parts.items.iter().map(NavItem::right))
            .with_auto_scroll(parts.auto_scroll)
            .with_transition(config.transition());

        let resize_signal = host.subscribe(Signal::Resize);
        let visibility_signal = host.subscribe(Signal::Visibility);
        if !visibility_signal {
            log::debug!("[navstrip] host has no visibility signal, skipping visibility updates");
        }

        let mut strip = Self {
            root,
            region,
            drag: DragSession::new(config.drag_sensitivity),
            touch: TouchSession::default(),
            resize_timer: Debounce::new(config.resize_debounce),
            settle_timer: Debounce::new(config.scroll_settle),
            auto_scroll_timer: Debounce::new(config.auto_scroll_delay),
            scrolling: false,
            resize_signal,
            visibility_signal,
            parts,
            config,
        };

        strip.update_arrow_states();
        strip.mark_active(host.location());

        if strip.region.auto_scroll() && !strip.active_items().is_empty() {
            strip.auto_scroll_timer.arm(now);
        }

        log::debug!(
            "[navstrip] mounted {} ({} items, content {} / viewport {})",
            strip.parts.nav,
            strip.parts.items.len(),
            strip.region.content_extent(),
            strip.region.viewport_extent()
        );

        Ok(strip)
    }

    // -------------------------------------------------------------------------
    // Event loop
    // -------------------------------------------------------------------------

    /// Process one input event.
    pub fn handle(&mut self, event: &Event, now: Instant) -> Outcome {
        match *event {
            Event::PointerDown { page_x } => {
                self.region.stop();
                self.drag
                    .press(page_x, self.parts.nav_left, self.region.offset());
                render::render_drag_cursor(&mut self.root, &self.parts.nav, true);
                Outcome::consumed()
            }
            Event::PointerMove { page_x } => match self.drag.drag(page_x, self.parts.nav_left) {
                Some(command) => {
                    self.apply(command, now);
                    Outcome::prevented()
                }
                None => Outcome::ignored(),
            },
            Event::PointerUp | Event::PointerLeave => {
                if !self.drag.release() {
                    return Outcome::ignored();
                }
                render::render_drag_cursor(&mut self.root, &self.parts.nav, false);
                Outcome::consumed()
            }
            Event::Click { ref target } => self.handle_click(target.as_deref(), now),
            Event::TouchStart { client_x } => {
                self.region.stop();
                self.touch.start(client_x, self.region.offset());
                Outcome::consumed()
            }
            Event::TouchMove { client_x } => match self.touch.drag(client_x) {
                Some(command) => {
                    self.apply(command, now);
                    Outcome::consumed()
                }
                None => Outcome::ignored(),
            },
            Event::TouchEnd => {
                if !self.touch.is_active() {
                    return Outcome::ignored();
                }
                self.touch.end();
                Outcome::consumed()
            }
            Event::Key { key, .. } => {
                let page = self.page_amount();
                match input::key_command(key, page, self.region.max_offset()) {
                    Some(command) => {
                        log::trace!("[navstrip] key {key:?} -> {command:?}");
                        self.apply(command, now);
                        Outcome::prevented()
                    }
                    None => Outcome::ignored(),
                }
            }
            Event::Scroll { offset } => {
                self.region.stop();
                self.region.set_offset(offset);
                self.on_scroll(now);
                Outcome::consumed()
            }
            Event::Resize { width } => {
                if !self.resize_signal {
                    return Outcome::ignored();
                }
                if self.region.set_viewport(width) {
                    self.on_scroll(now);
                }
                self.resize_timer.arm(now);
                Outcome::consumed()
            }
            Event::Visibility { intersecting } => {
                if !self.visibility_signal {
                    return Outcome::ignored();
                }
                if intersecting {
                    self.update_arrow_states();
                }
                Outcome::consumed()
            }
        }
    }

    fn handle_click(&mut self, target: Option<&str>, now: Instant) -> Outcome {
        if let Some(side) = target.and_then(|id| self.parts.arrow_side(id)) {
            let disabled = target
                .and_then(|id| find_element(&self.root, id))
                .is_some_and(|arrow| arrow.disabled);
            if disabled {
                return Outcome::ignored();
            }
            match side {
                ArrowSide::Left => self.scroll_left(now),
                ArrowSide::Right => self.scroll_right(now),
            }
            return Outcome::consumed();
        }

        let on_nav = match target {
            None => true,
            Some(id) => find_element(&self.root, &self.parts.nav)
                .is_some_and(|nav| find_element(nav, id).is_some()),
        };
        if on_nav && self.drag.take_click_suppression() {
            log::trace!("[navstrip] suppressing click after drag");
            return Outcome::swallowed();
        }
        Outcome::ignored()
    }

    /// Advance the smooth scroll and fire due timers.
    pub fn tick(&mut self, now: Instant) {
        if self.region.advance(now) {
            self.on_scroll(now);
        }
        if self.resize_timer.fire(now) {
            self.update_arrow_states();
        }
        if self.settle_timer.fire(now) {
            self.scrolling = false;
        }
        if self.auto_scroll_timer.fire(now) {
            let viewport = self.region.viewport_extent();
            let target = self
                .active_items()
                .first()
                .map(|item| item.centered_offset(viewport));
            if let Some(target) = target {
                log::debug!("[navstrip] auto-scrolling to active item at {target}");
                self.apply(ScrollCommand::To(target), now);
            }
        }
    }

    /// True while an animation or timer still needs [`tick`](Self::tick).
    pub fn needs_tick(&self) -> bool {
        self.region.is_animating()
            || self.resize_timer.is_pending()
            || self.settle_timer.is_pending()
            || self.auto_scroll_timer.is_pending()
    }

    fn apply(&mut self, command: ScrollCommand, now: Instant) {
        match command {
            ScrollCommand::By(delta) => self.region.scroll_by(delta, now),
            ScrollCommand::To(target) => self.region.scroll_to(target, now),
            ScrollCommand::Set(offset) => {
                self.region.stop();
                if self.region.set_offset(offset) {
                    self.on_scroll(now);
                }
            }
        }
    }

    /// The region's offset changed.
    fn on_scroll(&mut self, now: Instant) {
        self.scrolling = true;
        self.settle_timer.arm(now);
        self.update_arrow_states();
    }

    fn update_arrow_states(&mut self) {
        let boundary = self.boundary_state();
        if let Some(arrows) = self.parts.arrows() {
            render::render_arrows(&mut self.root, arrows, boundary);
        }
    }

    fn mark_active(&mut self, location: &str) {
        let current = location_path(location);
        let paths: Vec<Option<String>> = self
            .parts
            .items
            .iter()
            .map(|item| item.href.as_deref().and_then(|href| href_path(href, location)))
            .collect();
        let flags = active::resolve(paths.iter().map(Option::as_deref), &current);
        log::trace!(
            "[navstrip] {} of {} items active for {current}",
            flags.iter().filter(|active| **active).count(),
            flags.len()
        );
        render::render_active(&mut self.root, &self.parts.items, &flags);
    }

    // -------------------------------------------------------------------------
    // Commands
    // -------------------------------------------------------------------------

    pub fn scroll_left(&mut self, now: Instant) {
        let page = self.page_amount();
        self.apply(ScrollCommand::By(-page), now);
    }

    pub fn scroll_right(&mut self, now: Instant) {
        let page = self.page_amount();
        self.apply(ScrollCommand::By(page), now);
    }

    pub fn scroll_to_start(&mut self, now: Instant) {
        self.apply(ScrollCommand::To(0.0), now);
    }

    pub fn scroll_to_end(&mut self, now: Instant) {
        self.apply(ScrollCommand::To(self.region.max_offset()), now);
    }

    /// Center the first element in the nav whose `data-collection` is
    /// `handle` and focus it. Returns false when nothing has that handle.
    pub fn scroll_to_collection(&mut self, handle: &str, now: Instant) -> bool {
        let viewport = self.region.viewport_extent();
        let found = find_element(&self.root, &self.parts.nav)
            .and_then(|nav| nav.query_attr(HANDLE_ATTR, handle))
            .map(|el| {
                let target = markup::centered_offset(el.offset_left, el.width, viewport);
                (target, el.id.clone())
            });
        let Some((target, id)) = found else {
            log::debug!("[navstrip] no element with handle {handle:?}");
            return false;
        };
        self.apply(ScrollCommand::To(target), now);
        render::render_focus(&mut self.root, &id);
        true
    }

    /// Recompute arrow state and active items without rebinding anything.
    pub fn refresh(&mut self, host: &dyn Host) {
        self.update_arrow_states();
        self.mark_active(host.location());
    }

    // -------------------------------------------------------------------------
    // State
    // -------------------------------------------------------------------------

    pub fn boundary_state(&self) -> BoundaryState {
        self.region.boundary(self.config.edge_tolerance)
    }

    pub fn arrow_state(&self) -> ArrowControlState {
        self.boundary_state().arrows()
    }

    /// Distance moved by one arrow click or arrow key.
    pub fn page_amount(&self) -> f32 {
        input::page_amount(
            self.region.viewport_extent(),
            self.parts.items.first().map(|item| item.width),
            self.config.item_gap,
            self.config.page_fraction,
            self.config.fallback_page,
        )
    }

    pub fn is_scrolling(&self) -> bool {
        self.scrolling
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_pressed()
    }

    pub fn offset(&self) -> f32 {
        self.region.offset()
    }

    pub fn region(&self) -> &ScrollRegion {
        &self.region
    }

    pub fn items(&self) -> &[NavItem] {
        &self.parts.items
    }

    /// Items currently marked active, in display order.
    pub fn active_items(&self) -> Vec<&NavItem> {
        self.parts
            .items
            .iter()
            .filter(|item| {
                find_element(&self.root, &item.id).is_some_and(|el| el.has_class(ACTIVE_CLASS))
            })
            .collect()
    }

    pub fn root(&self) -> &Element {
        &self.root
    }

    pub fn into_root(self) -> Element {
        self.root
    }
}
