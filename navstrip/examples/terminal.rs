use std::fs::File;
use std::io::{self, Write};
use std::time::{Duration, Instant};

use crossterm::event::{self, Event as CrosstermEvent, KeyCode, MouseButton, MouseEventKind};
use crossterm::style::{Attribute, Print, SetAttribute};
use crossterm::{cursor, execute, queue, terminal};
use navstrip::markup::{BUTTON_CLASS, HANDLE_ATTR, LEFT_ARROW_CLASS, NAV_CLASS, RIGHT_ARROW_CLASS};
use navstrip::{find_element, Element, Event, Host, NavStrip, StaticHost, StripConfig};
use simplelog::{Config, LevelFilter, WriteLogger};
use unicode_width::UnicodeWidthStr;

const COLLECTIONS: &[&str] = &[
    "Shoes", "Boots", "Sandals", "Sneakers", "Hats", "Scarves", "Gloves", "Jackets", "Coats",
    "Shirts", "Trousers", "Socks", "Bags", "Belts", "Sale",
];

/// Columns taken by the arrows and their padding on each side.
const NAV_LEFT: u16 = 2;
const GAP: f32 = 1.0;

fn main() -> io::Result<()> {
    let log_file = File::create("navstrip.log")?;
    WriteLogger::init(LevelFilter::Trace, Config::default(), log_file)
        .expect("Failed to initialize logger");

    let (cols, _) = terminal::size()?;
    let mut host = StaticHost::new("/collections/hats");
    let config = StripConfig::default().item_gap(GAP);
    let Some(mut strip) = NavStrip::mount(markup(cols), &mut host, config, Instant::now()) else {
        eprintln!("strip markup rejected");
        return Ok(());
    };

    let mut stdout = io::stdout();
    terminal::enable_raw_mode()?;
    execute!(
        stdout,
        terminal::EnterAlternateScreen,
        cursor::Hide,
        event::EnableMouseCapture
    )?;

    let result = run(&mut stdout, &mut strip, &mut host);

    execute!(
        stdout,
        event::DisableMouseCapture,
        cursor::Show,
        terminal::LeaveAlternateScreen
    )?;
    terminal::disable_raw_mode()?;
    result
}

fn run(stdout: &mut io::Stdout, strip: &mut NavStrip, host: &mut StaticHost) -> io::Result<()> {
    let mut cols = terminal::size()?.0;

    loop {
        draw(stdout, strip, host, cols)?;

        let timeout = if strip.needs_tick() {
            Duration::from_millis(16)
        } else {
            Duration::from_millis(250)
        };
        if event::poll(timeout)? {
            let now = Instant::now();
            match event::read()? {
                CrosstermEvent::Key(key) => {
                    if matches!(key.code, KeyCode::Char('q') | KeyCode::Esc) {
                        return Ok(());
                    }
                    strip.handle(&Event::from(key), now);
                }
                CrosstermEvent::Mouse(mouse) => {
                    let column = mouse.column;
                    match mouse.kind {
                        MouseEventKind::Down(MouseButton::Left) if column == 0 => {
                            strip.handle(&Event::click("left"), now);
                        }
                        MouseEventKind::Down(MouseButton::Left) if column + 1 == cols => {
                            strip.handle(&Event::click("right"), now);
                        }
                        MouseEventKind::Down(MouseButton::Left) => {
                            strip.handle(&Event::PointerDown { page_x: column as f32 }, now);
                        }
                        MouseEventKind::Drag(MouseButton::Left) => {
                            strip.handle(&Event::PointerMove { page_x: column as f32 }, now);
                        }
                        MouseEventKind::Up(MouseButton::Left) => {
                            strip.handle(&Event::PointerUp, now);
                            click_item(strip, host, column, now);
                        }
                        MouseEventKind::ScrollDown | MouseEventKind::ScrollRight => {
                            let offset = strip.offset() + 4.0;
                            strip.handle(&Event::Scroll { offset }, now);
                        }
                        MouseEventKind::ScrollUp | MouseEventKind::ScrollLeft => {
                            let offset = strip.offset() - 4.0;
                            strip.handle(&Event::Scroll { offset }, now);
                        }
                        _ => {}
                    }
                }
                CrosstermEvent::Resize(width, _) => {
                    cols = width;
                    strip.handle(&Event::Resize { width: nav_width(cols) }, now);
                    strip.handle(&Event::Visibility { intersecting: true }, now);
                }
                _ => {}
            }
        }

        strip.tick(Instant::now());
    }
}

/// A release over an item is a click; follow it unless the strip swallowed it.
fn click_item(strip: &mut NavStrip, host: &mut StaticHost, column: u16, now: Instant) {
    let x = column as f32 - NAV_LEFT as f32 + strip.offset();
    let Some(item) = strip
        .items()
        .iter()
        .find(|item| x >= item.offset_left && x < item.right())
        .cloned()
    else {
        return;
    };

    let outcome = strip.handle(&Event::click(item.id.clone()), now);
    if outcome.prevent_default {
        return;
    }
    if let Some(href) = item.href {
        host.set_location(href);
        strip.refresh(&*host);
        strip.scroll_to_collection(item.handle.as_deref().unwrap_or_default(), now);
    }
}

fn nav_width(cols: u16) -> f32 {
    cols.saturating_sub(NAV_LEFT * 2) as f32
}

fn markup(cols: u16) -> Element {
    let mut left = 0.0;
    let items = COLLECTIONS.iter().map(|name| {
        let handle = name.to_lowercase();
        let width = (name.width() + 2) as f32;
        let item = Element::link(format!("/collections/{handle}"))
            .id(format!("item-{handle}"))
            .class(BUTTON_CLASS)
            .attr(HANDLE_ATTR, handle)
            .text(*name)
            .bounds(left, width);
        left += width + GAP;
        item
    });
    let items: Vec<Element> = items.collect();

    Element::new("scrollable-subcollections")
        .child(Element::button().id("left").class(LEFT_ARROW_CLASS))
        .child(
            Element::new("nav")
                .id("nav")
                .class(NAV_CLASS)
                .attr("data-auto-scroll", "true")
                .bounds(NAV_LEFT as f32, nav_width(cols))
                .children(items),
        )
        .child(Element::button().id("right").class(RIGHT_ARROW_CLASS))
}

fn draw(stdout: &mut io::Stdout, strip: &NavStrip, host: &StaticHost, cols: u16) -> io::Result<()> {
    let viewport = nav_width(cols) as i32;
    let offset = strip.offset().round() as i32;

    queue!(stdout, terminal::Clear(terminal::ClearType::All))?;

    for (id, column, glyph) in [("left", 0, "<"), ("right", cols.saturating_sub(1), ">")] {
        let disabled = find_element(strip.root(), id).is_some_and(|el| el.disabled);
        let attr = if disabled { Attribute::Dim } else { Attribute::Bold };
        queue!(
            stdout,
            cursor::MoveTo(column, 1),
            SetAttribute(attr),
            Print(glyph),
            SetAttribute(Attribute::Reset)
        )?;
    }

    for item in strip.items() {
        let start = item.offset_left.round() as i32 - offset;
        let label = format!(" {} ", item.label);
        let el = find_element(strip.root(), &item.id);
        let active = el.is_some_and(|el| el.has_class("active"));
        let focused = el.is_some_and(|el| el.focused);

        let mut column = start;
        for ch in label.chars() {
            let width = ch.to_string().width() as i32;
            if column >= 0 && column + width <= viewport {
                queue!(stdout, cursor::MoveTo(NAV_LEFT + column as u16, 1))?;
                if active {
                    queue!(stdout, SetAttribute(Attribute::Reverse))?;
                }
                if focused {
                    queue!(stdout, SetAttribute(Attribute::Underlined))?;
                }
                queue!(stdout, Print(ch), SetAttribute(Attribute::Reset))?;
            }
            column += width;
        }
    }

    queue!(
        stdout,
        cursor::MoveTo(0, 3),
        Print(format!(
            "offset {:>6.1}  page {:>5.1}  {}  {}",
            strip.offset(),
            strip.page_amount(),
            if strip.is_scrolling() { "scrolling" } else { "settled  " },
            host.location()
        )),
        cursor::MoveTo(0, 4),
        Print("arrows/home/end, drag, wheel, click to navigate, q to quit")
    )?;

    stdout.flush()
}
