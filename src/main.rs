use std::path::PathBuf;
use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::info;
use raylib::prelude::*;

mod texture_loader;

use cardslide::constants::*;
use cardslide::view::{card_placement, nav_buttons, segment_fill, CardPlacement};
use cardslide::{
    FrameScheduler, IndexChange, InputEvent, IntervalScheduler, MonotonicTime, Progress,
    RenderSink, Slider, SliderConfig, TickScheduler,
};

use crate::texture_loader::load_card_textures;

const BACKGROUND: Color = Color::new(61, 0, 0, 255);
const PLACEHOLDER: Color = Color::new(110, 20, 20, 255);
const SEGMENT_TRACK: Color = Color::new(255, 255, 255, 70);
const SIDE_TINT: Color = Color::new(255, 255, 255, 140);
const BUTTON: Color = Color::new(255, 255, 255, 200);
const BUTTON_DISABLED: Color = Color::new(255, 255, 255, 50);

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum SchedulerKind {
    /// One tick per rendered frame
    Frame,
    /// Ticks on a fixed period
    Interval,
}

#[derive(Parser, Debug)]
#[command(name = "cardslide", about = "Autoplaying card deck slider")]
struct Args {
    /// Directory holding 01.png, 02.png, ... (01@2x.png preferred)
    #[arg(long, default_value = "img")]
    cards_dir: PathBuf,

    /// Number of cards in the deck
    #[arg(long, default_value_t = TOTAL_CARDS)]
    cards: usize,

    /// How long each card stays before advancing
    #[arg(long, default_value_t = CARD_DURATION_MS)]
    dwell_ms: u32,

    #[arg(long, value_enum, default_value_t = SchedulerKind::Frame)]
    scheduler: SchedulerKind,

    /// Tick period for the interval scheduler
    #[arg(long, default_value_t = INTERVAL_MS)]
    interval_ms: u32,

    #[arg(long, default_value_t = FPS)]
    fps: u32,
}

// --- Render collaborator: caches what the slider reported ---
#[derive(Debug, Default)]
struct CardView {
    current: usize,
    fraction: f64,
}

impl RenderSink for CardView {
    fn index_changed(&mut self, change: IndexChange) {
        self.current = change.current;
        self.fraction = 0.0;
    }

    fn progress(&mut self, update: Progress) {
        if update.active == self.current {
            self.fraction = update.fraction;
        }
    }
}

// --- Screen geometry, recomputed every frame so resizing works ---
struct Layout {
    scale: f32,
    center: Vector2,
    segments: Vec<Rectangle>,
    previous_button: Rectangle,
    next_button: Rectangle,
}

impl Layout {
    fn compute(screen_width: i32, screen_height: i32, cards: usize) -> Self {
        let sw = screen_width as f32;
        let sh = screen_height as f32;
        let scale = (sh * 0.8 / CARD_HEIGHT).min(sw * 0.4 / CARD_WIDTH).min(1.0);
        let center = Vector2::new(sw * 0.5, sh * 0.5 + 10.0);

        // Progress bar spans the centre card width, above it
        let bar_width = CARD_WIDTH * scale;
        let gap = 4.0;
        let segment_width = (bar_width - gap * (cards as f32 - 1.0)) / cards as f32;
        let bar_x = center.x - bar_width * 0.5;
        let bar_y = center.y - CARD_HEIGHT * scale * 0.5 - 16.0;
        let segments = (0..cards)
            .map(|i| Rectangle::new(bar_x + i as f32 * (segment_width + gap), bar_y, segment_width, 6.0))
            .collect();

        let button = 48.0;
        let offset = CARD_WIDTH * scale * 0.5 + CARD_WIDTH * scale * SIDE_CARD_SCALE + 24.0;
        Self {
            scale,
            center,
            segments,
            previous_button: Rectangle::new(center.x - offset - button, center.y - button * 0.5, button, button),
            next_button: Rectangle::new(center.x + offset, center.y - button * 0.5, button, button),
        }
    }

    fn card_rect(&self, placement: CardPlacement) -> Option<Rectangle> {
        let (scale, shift) = match placement {
            CardPlacement::Center => (self.scale, 0.0),
            CardPlacement::Left => (self.scale * SIDE_CARD_SCALE, -1.0),
            CardPlacement::Right => (self.scale * SIDE_CARD_SCALE, 1.0),
            CardPlacement::Hidden => return None,
        };
        let width = CARD_WIDTH * scale;
        let height = CARD_HEIGHT * scale;
        let dx = shift * (CARD_WIDTH * self.scale * 0.5 + width * 0.5 + 12.0);
        Some(Rectangle::new(
            self.center.x + dx - width * 0.5,
            self.center.y - height * 0.5,
            width,
            height,
        ))
    }
}

// --- Turns raylib polling state into edge-triggered slider input ---
#[derive(Debug, Default)]
struct InputMapper {
    hovering: bool,
    holding: bool,
    touching: bool,
    hidden: bool,
    last_touch_x: f32,
}

impl InputMapper {
    fn poll(&mut self, rl: &RaylibHandle, layout: &Layout) -> Vec<InputEvent> {
        let mut events = Vec::new();

        if rl.is_key_pressed(KeyboardKey::KEY_RIGHT) {
            events.push(InputEvent::ArrowRight);
        }
        if rl.is_key_pressed(KeyboardKey::KEY_LEFT) {
            events.push(InputEvent::ArrowLeft);
        }

        let hidden = rl.is_window_minimized() || rl.is_window_hidden();
        if hidden != self.hidden {
            self.hidden = hidden;
            events.push(InputEvent::VisibilityChanged { hidden });
        }

        // Touch takes over from the emulated mouse while a finger is down
        let touching = rl.get_touch_point_count() > 0;
        if touching {
            self.last_touch_x = rl.get_touch_position(0).x;
        }
        if touching != self.touching {
            self.touching = touching;
            events.push(if touching {
                InputEvent::TouchStart { x: self.last_touch_x }
            } else {
                InputEvent::TouchEnd { x: self.last_touch_x }
            });
        }
        if self.touching {
            return events;
        }

        let mouse = rl.get_mouse_position();
        let over_card = layout
            .card_rect(CardPlacement::Center)
            .is_some_and(|rect| rect.check_collision_point_rec(mouse));
        if over_card != self.hovering {
            self.hovering = over_card;
            events.push(if over_card {
                InputEvent::PointerEnterCard
            } else {
                InputEvent::PointerLeaveCard
            });
        }

        if rl.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_LEFT) {
            if layout.previous_button.check_collision_point_rec(mouse) {
                events.push(InputEvent::PreviousButton);
            } else if layout.next_button.check_collision_point_rec(mouse) {
                events.push(InputEvent::NextButton);
            } else if let Some(segment) = layout
                .segments
                .iter()
                .position(|rect| rect.check_collision_point_rec(mouse))
            {
                events.push(InputEvent::SegmentClicked(segment));
            } else if over_card {
                self.holding = true;
                events.push(InputEvent::PointerDown);
            }
        }
        if self.holding && rl.is_mouse_button_released(MouseButton::MOUSE_BUTTON_LEFT) {
            self.holding = false;
            events.push(InputEvent::PointerUp);
        }

        events
    }
}

fn draw(d: &mut RaylibDrawHandle, layout: &Layout, textures: &[Option<Texture2D>], view: &CardView) {
    d.clear_background(BACKGROUND);

    // Side cards first so the centre card overlaps them
    let order = [CardPlacement::Left, CardPlacement::Right, CardPlacement::Center];
    for placement in order {
        for (i, texture) in textures.iter().enumerate() {
            if card_placement(i, view.current) != placement {
                continue;
            }
            let Some(dest) = layout.card_rect(placement) else { continue };
            let tint = if placement == CardPlacement::Center { Color::WHITE } else { SIDE_TINT };
            match texture {
                Some(texture) => d.draw_texture_pro(
                    texture,
                    Rectangle::new(0.0, 0.0, texture.width() as f32, texture.height() as f32),
                    dest,
                    Vector2::new(0.0, 0.0),
                    0.0,
                    tint,
                ),
                None => {
                    d.draw_rectangle_rec(dest, PLACEHOLDER);
                    d.draw_text(
                        &format!("Card {}", i + 1),
                        (dest.x + dest.width * 0.5 - 40.0) as i32,
                        (dest.y + dest.height * 0.5 - 12.0) as i32,
                        24,
                        tint,
                    );
                }
            }
        }
    }

    for (i, segment) in layout.segments.iter().enumerate() {
        d.draw_rectangle_rec(*segment, SEGMENT_TRACK);
        let fill = segment_fill(i, view.current, view.fraction) as f32;
        if fill > 0.0 {
            let mut filled = *segment;
            filled.width *= fill;
            d.draw_rectangle_rec(filled, Color::WHITE);
        }
    }

    let buttons = nav_buttons(view.current, textures.len());
    for (rect, label, enabled) in [
        (layout.previous_button, "<", buttons.previous_enabled),
        (layout.next_button, ">", buttons.next_enabled),
    ] {
        let color = if enabled { BUTTON } else { BUTTON_DISABLED };
        d.draw_rectangle_lines_ex(rect, 2.0, color);
        d.draw_text(label, (rect.x + rect.width * 0.5 - 7.0) as i32, (rect.y + 10.0) as i32, 28, color);
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();
    info!("Card directory: {:?}", args.cards_dir);

    let (mut rl, thread) = raylib::init()
        .size(RENDER_WIDTH, RENDER_HEIGHT)
        .title("Card Slider")
        .vsync()
        .resizable()
        .build();
    rl.set_target_fps(args.fps);
    rl.set_trace_log(TraceLogLevel::LOG_ERROR);

    // --- Load Cards ---
    let textures = load_card_textures(&mut rl, &thread, &args.cards_dir, args.cards);

    let scheduler: Box<dyn TickScheduler> = match args.scheduler {
        SchedulerKind::Frame => Box::new(FrameScheduler::new()),
        SchedulerKind::Interval => Box::new(IntervalScheduler::new(args.interval_ms)),
    };
    let config = SliderConfig {
        card_count: args.cards,
        dwell_ms: args.dwell_ms,
        ..SliderConfig::default()
    };
    let mut slider = Slider::new(config, MonotonicTime::new(), scheduler, CardView::default())
        .context("Failed to build slider")?;

    let mut input = InputMapper::default();

    // --- Main Loop ---
    while !rl.window_should_close() {
        let layout = Layout::compute(rl.get_screen_width(), rl.get_screen_height(), slider.deck().len());

        for event in input.poll(&rl, &layout) {
            slider.handle(event);
        }
        slider.pump();

        let mut d = rl.begin_drawing(&thread);
        draw(&mut d, &layout, &textures, slider.render_sink());
    }

    slider.dispose();
    Ok(())
}
