use crate::constants::*;
use glam::Vec2;
use rand::prelude::*;
use smallvec::SmallVec;

/// Move `current` a fixed fraction of the remaining distance toward `target`.
///
/// Exponential smoothing: converges asymptotically and is a no-op at rest.
#[inline]
pub fn ease_toward(current: Vec2, target: Vec2, factor: f32) -> Vec2 {
    current + (target - current) * factor
}

/// Hue in degrees for a pointer speed (pixels per move event), wrapped to [0, 360).
#[inline]
pub fn hue_for_velocity(velocity: f32) -> f32 {
    (BASE_HUE + velocity * HUE_PER_VELOCITY).rem_euclid(360.0)
}

/// Raw pointer samples and the values derived from them.
#[derive(Clone, Copy, Debug)]
pub struct PointerState {
    pub pos: Vec2,
    pub prev: Vec2,
    pub velocity: f32,
    pub hue: f32,
    seen: bool,
}

impl Default for PointerState {
    fn default() -> Self {
        Self {
            pos: Vec2::ZERO,
            prev: Vec2::ZERO,
            velocity: 0.0,
            hue: BASE_HUE,
            seen: false,
        }
    }
}

impl PointerState {
    /// Record a raw pointer sample. The first sample has zero velocity.
    pub fn on_move(&mut self, pos: Vec2) {
        self.prev = if self.seen { self.pos } else { pos };
        self.seen = true;
        self.pos = pos;
        self.velocity = self.pos.distance(self.prev);
        self.hue = hue_for_velocity(self.velocity);
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ConstellationPoint {
    pub pos: Vec2,
    pub life: i32,
}

impl ConstellationPoint {
    #[inline]
    pub fn is_live(&self) -> bool {
        self.life > 0
    }

    #[inline]
    pub fn alpha(&self) -> f32 {
        (self.life.max(0) as f32 / CONSTELLATION_LIFE_FRAMES as f32).min(1.0)
    }
}

/// A line between two live constellation points.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Link {
    pub from: Vec2,
    pub to: Vec2,
    pub alpha: f32,
}

/// Everything to draw for one frame of the constellation.
#[derive(Clone, Debug, Default)]
pub struct ConstellationFrame {
    pub points: SmallVec<[(Vec2, f32); CONSTELLATION_CAPACITY]>,
    pub links: Vec<Link>,
}

/// Fixed pool of points; slots are reused once their life runs out.
#[derive(Clone, Debug)]
pub struct Constellation {
    points: [ConstellationPoint; CONSTELLATION_CAPACITY],
}

impl Default for Constellation {
    fn default() -> Self {
        Self {
            points: [ConstellationPoint::default(); CONSTELLATION_CAPACITY],
        }
    }
}

impl Constellation {
    #[inline]
    pub fn capacity(&self) -> usize {
        self.points.len()
    }

    pub fn live_count(&self) -> usize {
        self.points.iter().filter(|p| p.is_live()).count()
    }

    pub fn points(&self) -> &[ConstellationPoint] {
        &self.points
    }

    /// Place a point in the first free slot. Returns false when the pool is full.
    pub fn spawn(&mut self, pos: Vec2) -> bool {
        match self.points.iter_mut().find(|p| !p.is_live()) {
            Some(slot) => {
                slot.pos = pos;
                slot.life = CONSTELLATION_LIFE_FRAMES;
                true
            }
            None => false,
        }
    }

    /// Spawn with the configured probability.
    pub fn maybe_spawn<R: Rng>(&mut self, pos: Vec2, rng: &mut R) -> bool {
        rng.gen_bool(CONSTELLATION_SPAWN_PROBABILITY) && self.spawn(pos)
    }

    /// Age every live point by one frame and rebuild `out` in place. The
    /// link buffer keeps its capacity across frames.
    pub fn advance(&mut self, out: &mut ConstellationFrame) {
        for p in self.points.iter_mut().filter(|p| p.is_live()) {
            p.life -= 1;
        }
        let live: SmallVec<[ConstellationPoint; CONSTELLATION_CAPACITY]> =
            self.points.iter().copied().filter(|p| p.is_live()).collect();

        out.points.clear();
        out.links.clear();
        for (i, a) in live.iter().enumerate() {
            out.points.push((a.pos, a.alpha()));
            for b in &live[i + 1..] {
                let d = a.pos.distance(b.pos);
                if d < CONSTELLATION_LINK_DISTANCE {
                    let alpha = (1.0 - d / CONSTELLATION_LINK_DISTANCE)
                        * a.alpha().min(b.alpha())
                        * CONSTELLATION_LINE_ALPHA;
                    out.links.push(Link {
                        from: a.pos,
                        to: b.pos,
                        alpha,
                    });
                }
            }
        }
    }
}

/// Visual parameters of one trail element.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrailNodeStyle {
    pub pos: Vec2,
    pub scale: f32,
    pub hue: f32,
    pub rotation_deg: f32,
}

/// Ordered chain of eased positions: node 0 follows the pointer, node i
/// follows node i-1.
#[derive(Clone, Debug)]
pub struct Trail {
    nodes: [Vec2; TRAIL_LENGTH],
}

impl Default for Trail {
    fn default() -> Self {
        Self {
            nodes: [Vec2::ZERO; TRAIL_LENGTH],
        }
    }
}

impl Trail {
    pub fn nodes(&self) -> &[Vec2] {
        &self.nodes
    }

    /// Collapse the whole chain onto one point.
    pub fn snap(&mut self, pos: Vec2) {
        self.nodes = [pos; TRAIL_LENGTH];
    }

    /// One frame of easing. Each node chases its predecessor's position from
    /// the previous frame, so iterate back to front.
    pub fn step(&mut self, pointer: Vec2, factor: f32) {
        for i in (1..self.nodes.len()).rev() {
            self.nodes[i] = ease_toward(self.nodes[i], self.nodes[i - 1], factor);
        }
        self.nodes[0] = ease_toward(self.nodes[0], pointer, factor);
    }

    pub fn styles(&self, hue: f32) -> impl Iterator<Item = TrailNodeStyle> + '_ {
        let n = self.nodes.len() as f32;
        self.nodes.iter().enumerate().map(move |(i, pos)| TrailNodeStyle {
            pos: *pos,
            scale: (n - i as f32) / n,
            hue: (hue - i as f32 * TRAIL_HUE_STEP).rem_euclid(360.0),
            rotation_deg: i as f32 * TRAIL_ROTATION_STEP_DEG,
        })
    }
}

/// What kind of interactive element the pointer is over.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum HoverKind {
    Button,
    Link,
    Card,
    Contact,
    Brand,
    #[default]
    None,
}

impl HoverKind {
    /// Checked in this order; the first matching ancestor wins.
    pub const PRIORITY: [HoverKind; 5] = [
        HoverKind::Button,
        HoverKind::Link,
        HoverKind::Card,
        HoverKind::Contact,
        HoverKind::Brand,
    ];

    pub fn selector(self) -> &'static str {
        match self {
            HoverKind::Button => ".btn, .contact-button",
            HoverKind::Link => ".nav-link",
            HoverKind::Card => ".highlight-card, .cert-card, .education-card, .timeline-content, .network-badge, .language-badge, .leadership-item",
            HoverKind::Contact => "a[href^=\"mailto\"], a[href*=\"linkedin\"]",
            HoverKind::Brand => ".nav-brand",
            HoverKind::None => "",
        }
    }

    /// Modifier class added to the main cursor next to `hovering`.
    pub fn cursor_class(self) -> Option<&'static str> {
        match self {
            HoverKind::Button | HoverKind::Contact => Some("button"),
            HoverKind::Link => Some("link"),
            HoverKind::Card => Some("card"),
            HoverKind::Brand | HoverKind::None => None,
        }
    }

    /// Label shown next to the cursor. Buttons use their own text.
    pub fn label(self, element_text: &str) -> Option<String> {
        match self {
            HoverKind::Button => Some(format!("→ {}", element_text.trim())),
            HoverKind::Link => Some("↗ Navigate".to_string()),
            HoverKind::Card => Some("✨ Explore".to_string()),
            HoverKind::Contact => Some("📧 Connect".to_string()),
            HoverKind::Brand => Some("🏠 Home".to_string()),
            HoverKind::None => None,
        }
    }

    /// Pointer glyph (scale, rotation in degrees).
    pub fn pointer_pose(self) -> (f32, f32) {
        match self {
            HoverKind::Button => (1.3, 12.0),
            HoverKind::Link => (1.2, -12.0),
            HoverKind::Card => (1.1, 0.0),
            HoverKind::Contact => (1.3, 8.0),
            HoverKind::Brand => (1.4, 15.0),
            HoverKind::None => (1.0, 0.0),
        }
    }

    #[inline]
    pub fn is_hovering(self) -> bool {
        self != HoverKind::None
    }
}

/// Hues of the click burst particles, one per direction around the circle.
pub fn burst_particles(hue: f32) -> impl Iterator<Item = (f32, f32)> {
    (0..BURST_PARTICLES).map(move |i| {
        let angle = i as f32 / BURST_PARTICLES as f32 * std::f32::consts::TAU;
        let h = (hue + i as f32 * BURST_HUE_STEP).rem_euclid(360.0);
        (angle, h)
    })
}

/// Session state of the decorative cursor.
#[derive(Clone, Debug)]
pub struct CursorState {
    pub pointer: PointerState,
    pub trail: Trail,
    pub constellation: Constellation,
    pub hover: HoverKind,
    pub clicking: bool,
    rng: StdRng,
    draw_list: ConstellationFrame,
}

impl CursorState {
    pub fn new(seed: u64) -> Self {
        Self {
            pointer: PointerState::default(),
            trail: Trail::default(),
            constellation: Constellation::default(),
            hover: HoverKind::None,
            clicking: false,
            rng: StdRng::seed_from_u64(seed),
            draw_list: ConstellationFrame::default(),
        }
    }

    /// Handle a raw pointer move. Returns true when a constellation point spawned.
    pub fn on_move(&mut self, pos: Vec2, hover: HoverKind) -> bool {
        let first = !self.pointer.seen;
        self.pointer.on_move(pos);
        if first {
            self.trail.snap(pos);
        }
        self.hover = hover;
        self.constellation.maybe_spawn(pos, &mut self.rng)
    }

    #[inline]
    pub fn trail_ease(&self) -> f32 {
        if self.hover.is_hovering() {
            TRAIL_EASE_HOVER
        } else {
            TRAIL_EASE
        }
    }

    /// Advance one animation frame and return the constellation draw list.
    pub fn frame(&mut self) -> &ConstellationFrame {
        let ease = self.trail_ease();
        self.trail.step(self.pointer.pos, ease);
        self.constellation.advance(&mut self.draw_list);
        &self.draw_list
    }

    /// Draw list built by the last `frame`.
    #[inline]
    pub fn draw_list(&self) -> &ConstellationFrame {
        &self.draw_list
    }

    /// Whether a click at the current speed also emits a velocity ring.
    #[inline]
    pub fn ring_on_click(&self) -> bool {
        self.pointer.velocity > VELOCITY_RING_MIN
    }
}
