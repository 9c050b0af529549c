//! Decorative webs spawned around the pointer
//!
//! When the pointer moves over the page but away from the form, a small web
//! of nodes and strands occasionally appears under it, lingers, and fades.
//! None of this touches the form state.
//!
//! The host UI implements [`EffectSpawner`] to draw and remove webs.
//! [`WebEffects`] decides when and what to spawn. It takes the current
//! time and a random source as arguments, so it is deterministic under test.
//!
//! ```rust
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//! use spidr_form::testing::RecordingSpawner;
//! use spidr_form::web::{Layout, Point, Rect, WebConfig, WebEffects};
//! use std::time::Instant;
//!
//! let config = WebConfig::default().with_trigger_chance(1.0);
//! let mut effects = WebEffects::new(config, RecordingSpawner::new());
//! let mut rng = StdRng::seed_from_u64(1);
//!
//! let layout = Layout::new(Rect::new(0.0, 0.0, 1200.0, 800.0))
//!     .with_form(Rect::new(400.0, 100.0, 400.0, 600.0));
//!
//! let spawned = effects.pointer_moved(&mut rng, Point::new(100.0, 100.0), &layout, Instant::now());
//! assert!(spawned.is_some());
//! assert_eq!(effects.spawner().spawn_count(), 1);
//! ```

mod config;
mod pattern;

use std::time::{Duration, Instant};

use rand::Rng;

pub use config::WebConfig;
pub use pattern::{generate_pattern, Point, Rect, WebLine, WebNode, WebPattern};

/// Identifier of a spawned web, unique per [`WebEffects`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WebId(u64);

impl WebId {
    /// The raw counter value.
    pub fn get(self) -> u64 {
        self.0
    }
}

/// Drawing capability the host UI provides.
pub trait EffectSpawner {
    /// Add a hidden web to the page.
    fn spawn(&mut self, id: WebId, pattern: &WebPattern);

    /// Make a spawned web visible.
    fn reveal(&mut self, id: WebId);

    /// Start fading a web out.
    fn fade(&mut self, id: WebId);

    /// Take a web off the page.
    fn remove(&mut self, id: WebId);
}

/// Spawner that draws nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSpawner;

impl EffectSpawner for NoopSpawner {
    fn spawn(&mut self, _id: WebId, _pattern: &WebPattern) {}
    fn reveal(&mut self, _id: WebId) {}
    fn fade(&mut self, _id: WebId) {}
    fn remove(&mut self, _id: WebId) {}
}

/// Where the container and the form sit on the page.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layout {
    container: Rect,
    form: Option<Rect>,
}

impl Layout {
    /// A layout with no form box; webs may spawn anywhere.
    pub fn new(container: Rect) -> Self {
        Self {
            container,
            form: None,
        }
    }

    /// Set the form box, in page coordinates.
    pub fn with_form(mut self, form: Rect) -> Self {
        self.form = Some(form);
        self
    }

    /// The container box.
    pub fn container(&self) -> Rect {
        self.container
    }

    /// The form box, if known.
    pub fn form(&self) -> Option<Rect> {
        self.form
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Pending,
    Visible,
    Fading { remove_at: Instant },
}

#[derive(Debug, Clone)]
struct ActiveWeb {
    id: WebId,
    spawned_at: Instant,
    phase: Phase,
}

/// Spawns, reveals and retires webs in response to pointer events.
#[derive(Debug)]
pub struct WebEffects<S> {
    config: WebConfig,
    spawner: S,
    last_spawn: Option<Instant>,
    in_flight: bool,
    active: Vec<ActiveWeb>,
    next_id: u64,
}

impl<S: EffectSpawner> WebEffects<S> {
    /// Effects drawing through `spawner`.
    pub fn new(config: WebConfig, spawner: S) -> Self {
        Self {
            config,
            spawner,
            last_spawn: None,
            in_flight: false,
            active: Vec::new(),
            next_id: 0,
        }
    }

    /// The configuration in use.
    pub fn config(&self) -> &WebConfig {
        &self.config
    }

    /// The spawner webs are drawn through.
    pub fn spawner(&self) -> &S {
        &self.spawner
    }

    /// Give back the spawner.
    pub fn into_spawner(self) -> S {
        self.spawner
    }

    /// Number of webs on the page, fading ones included.
    pub fn active_count(&self) -> usize {
        self.active.len()
    }

    /// Whether a spawned web is still waiting for its first frame.
    pub fn is_in_flight(&self) -> bool {
        self.in_flight
    }

    fn throttled(&self, now: Instant) -> bool {
        self.last_spawn
            .is_some_and(|last| now.saturating_duration_since(last) < self.config.throttle())
    }

    /// Handle a pointer move at `client`, in page coordinates.
    ///
    /// Returns the id of the web spawned, if any. A move spawns only when
    /// the trigger roll succeeds, the throttle window has passed, no spawn
    /// is in flight, and the pointer is outside the form box grown by the
    /// configured margin.
    pub fn pointer_moved<R: Rng>(
        &mut self,
        rng: &mut R,
        client: Point,
        layout: &Layout,
        now: Instant,
    ) -> Option<WebId> {
        if rng.random::<f64>() >= self.config.trigger_chance() {
            return None;
        }
        if self.throttled(now) || self.in_flight {
            return None;
        }

        let container = layout.container();
        let local = container.to_local(client);
        if let Some(form) = layout.form() {
            let keep_out = container
                .to_local_rect(form)
                .expanded(self.config.form_margin());
            if keep_out.contains(local) {
                return None;
            }
        }

        Some(self.spawn_at(rng, local, container, now))
    }

    fn spawn_at<R: Rng>(&mut self, rng: &mut R, center: Point, container: Rect, now: Instant) -> WebId {
        let pattern = generate_pattern(rng, center, container, &self.config);
        let id = WebId(self.next_id);
        self.next_id += 1;

        self.in_flight = true;
        self.last_spawn = Some(now);
        self.active.push(ActiveWeb {
            id,
            spawned_at: now,
            phase: Phase::Pending,
        });

        #[cfg(feature = "tracing")]
        tracing::debug!(
            web = id.get(),
            x = center.x,
            y = center.y,
            nodes = pattern.nodes.len(),
            "spawning web"
        );
        self.spawner.spawn(id, &pattern);
        id
    }

    /// Reveal webs spawned since the last frame and allow the next spawn.
    pub fn animation_frame(&mut self) {
        for web in &mut self.active {
            if web.phase == Phase::Pending {
                web.phase = Phase::Visible;
                self.spawner.reveal(web.id);
            }
        }
        self.in_flight = false;
    }

    /// Fade webs past their visible time and remove webs done fading.
    pub fn tick(&mut self, now: Instant) {
        let visible_for = self.config.visible_for();
        let fade_out = self.config.fade_out();

        for web in &mut self.active {
            if matches!(web.phase, Phase::Fading { .. }) {
                continue;
            }
            let fade_at = web.spawned_at + visible_for;
            if now >= fade_at {
                web.phase = Phase::Fading {
                    remove_at: fade_at + fade_out,
                };
                self.spawner.fade(web.id);
            }
        }

        self.sweep(now);
    }

    /// Fade every web out at once; they are removed after the leave fade.
    pub fn pointer_left(&mut self, now: Instant) {
        let remove_at = now + self.config.leave_fade();
        for web in &mut self.active {
            match web.phase {
                Phase::Fading { remove_at: at } if at <= remove_at => {}
                _ => {
                    web.phase = Phase::Fading { remove_at };
                    self.spawner.fade(web.id);
                }
            }
        }
    }

    fn sweep(&mut self, now: Instant) {
        let spawner = &mut self.spawner;
        self.active.retain(|web| match web.phase {
            Phase::Fading { remove_at } if now >= remove_at => {
                spawner.remove(web.id);
                false
            }
            _ => true,
        });
    }

    /// Time until the next lifecycle change, if any web is on the page.
    ///
    /// Hosts can use this to schedule the next [`tick`](Self::tick).
    pub fn next_deadline(&self, now: Instant) -> Option<Duration> {
        self.active
            .iter()
            .map(|web| match web.phase {
                Phase::Pending | Phase::Visible => web.spawned_at + self.config.visible_for(),
                Phase::Fading { remove_at } => remove_at,
            })
            .min()
            .map(|at| at.saturating_duration_since(now))
    }
}
