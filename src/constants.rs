pub const TOTAL_CARDS: usize = 14;            // Cards in the reference deck
pub const CARD_DURATION_MS: u32 = 5_000;      // Dwell time per card (milliseconds)
pub const SWIPE_THRESHOLD_PX: f32 = 50.0;     // Horizontal travel that counts as a swipe

pub const RENDER_WIDTH: i32 = 1280;           // Window width
pub const RENDER_HEIGHT: i32 = 800;           // Window height
pub const FPS: u32 = 60;                      // Frames per second
pub const INTERVAL_MS: u32 = 16;              // Default period for the interval scheduler

pub const CARD_WIDTH: f32 = 360.0;            // Card size, matches the placeholder artwork
pub const CARD_HEIGHT: f32 = 640.0;
pub const SIDE_CARD_SCALE: f32 = 0.8;         // Neighbouring cards are drawn smaller
