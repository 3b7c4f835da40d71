use super::constants::*;
use super::schedule::TaskQueue;
use fnv::FnvHashMap;
use rand::Rng;
use smallvec::SmallVec;

/// One twinkling background star. Positions are percentages of the viewport.
#[derive(Clone, Debug, PartialEq)]
pub struct Star {
    pub x: f64,
    pub y: f64,
    pub size: f64,
    pub opacity: f64,
    pub twinkle_speed_sec: f64,
    pub twinkle_delay_sec: f64,
}

impl Star {
    #[inline]
    pub fn is_bright(&self) -> bool {
        self.size > BRIGHT_STAR_SIZE
    }
}

#[derive(Clone, Debug)]
pub struct StarLayer {
    pub stars: Vec<Star>,
    pub speed: f64,
}

impl StarLayer {
    #[inline]
    pub fn offset_x(&self, parallax_offset: f64) -> f64 {
        layer_offset_x(parallax_offset, self.speed)
    }
}

pub type StarLayers = SmallVec<[StarLayer; 3]>;

/// Horizontal displacement of a layer moving at `speed` for a scroll offset.
#[inline]
pub fn layer_offset_x(parallax_offset: f64, speed: f64) -> f64 {
    -parallax_offset * speed
}

/// Stars per layer (far, mid, near). Each share is floored independently, so
/// the total may fall short of `star_count` by at most two.
pub fn layer_counts(star_count: usize) -> [usize; 3] {
    STAR_LAYERS.map(|(percent, ..)| star_count * percent / 100)
}

pub fn build_layers<R: Rng + ?Sized>(star_count: usize, rng: &mut R) -> StarLayers {
    let counts = layer_counts(star_count);
    STAR_LAYERS
        .iter()
        .zip(counts)
        .map(|(&(_, speed, size_min, size_max), count)| StarLayer {
            stars: (0..count)
                .map(|_| Star {
                    x: rng.gen_range(0.0..100.0),
                    y: rng.gen_range(0.0..100.0),
                    size: rng.gen_range(size_min..size_max),
                    opacity: STAR_OPACITY_MIN + rng.gen::<f64>() * STAR_OPACITY_SPAN,
                    twinkle_speed_sec: TWINKLE_SPEED_MIN_SEC
                        + rng.gen::<f64>() * TWINKLE_SPEED_SPAN_SEC,
                    twinkle_delay_sec: rng.gen::<f64>() * TWINKLE_DELAY_MAX_SEC,
                })
                .collect(),
            speed,
        })
        .collect()
}

/// Star layers memoized by star count: built once, rebuilt only when the
/// requested count changes.
#[derive(Clone, Debug, Default)]
pub struct StarfieldCache {
    key: Option<usize>,
    layers: StarLayers,
}

impl StarfieldCache {
    pub fn layers<R: Rng + ?Sized>(&mut self, star_count: usize, rng: &mut R) -> &[StarLayer] {
        if self.key != Some(star_count) {
            self.layers = build_layers(star_count, rng);
            self.key = Some(star_count);
        }
        &self.layers
    }

    #[inline]
    pub fn cached_count(&self) -> Option<usize> {
        self.key
    }
}

/// Transient streak across the sky.
#[derive(Clone, Debug, PartialEq)]
pub struct ShootingStar {
    pub id: u64,
    pub start_x: f64,
    pub start_y: f64,
    pub angle_deg: f64,
    pub duration_sec: f64,
    pub spawned_at_ms: f64,
}

impl ShootingStar {
    /// Time at which the star is removed from the active set.
    #[inline]
    pub fn expires_at_ms(&self) -> f64 {
        self.spawned_at_ms + self.duration_sec * 1000.0 + SHOOTING_STAR_REMOVAL_BUFFER_MS
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum SkyTask {
    Spawn,
    Remove(u64),
}

/// Shooting-star spawner: one star shortly after `start`, then one per
/// interval, each removing itself once its animation has played.
#[derive(Clone, Debug, Default)]
pub struct ShootingStars {
    next_id: u64,
    active: FnvHashMap<u64, ShootingStar>,
    tasks: TaskQueue<SkyTask>,
}

impl ShootingStars {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start(&mut self, now_ms: f64) {
        self.stop();
        self.tasks.schedule(now_ms + SHOOTING_STAR_FIRST_MS, SkyTask::Spawn);
    }

    /// Cancel every pending spawn and removal and drop the active stars.
    pub fn stop(&mut self) {
        self.tasks.clear();
        self.active.clear();
    }

    /// Run everything due by `now_ms`. Returns whether the active set changed.
    pub fn tick<R: Rng + ?Sized>(&mut self, now_ms: f64, rng: &mut R) -> bool {
        let mut changed = false;
        while let Some((due_ms, task)) = self.tasks.pop_due(now_ms) {
            match task {
                SkyTask::Spawn => {
                    let star = self.spawn(due_ms, rng);
                    self.tasks
                        .schedule(star.expires_at_ms(), SkyTask::Remove(star.id));
                    self.tasks
                        .schedule(due_ms + SHOOTING_STAR_INTERVAL_MS, SkyTask::Spawn);
                    self.active.insert(star.id, star);
                }
                SkyTask::Remove(id) => {
                    self.active.remove(&id);
                }
            }
            changed = true;
        }
        changed
    }

    fn spawn<R: Rng + ?Sized>(&mut self, at_ms: f64, rng: &mut R) -> ShootingStar {
        let id = self.next_id;
        self.next_id += 1;
        let (x0, x1) = SHOOTING_STAR_X_RANGE;
        let (y0, y1) = SHOOTING_STAR_Y_RANGE;
        let (a0, a1) = SHOOTING_STAR_ANGLE_RANGE;
        ShootingStar {
            id,
            start_x: rng.gen_range(x0..x1),
            start_y: rng.gen_range(y0..y1),
            angle_deg: rng.gen_range(a0..a1),
            duration_sec: SHOOTING_STAR_DURATION_MIN_SEC
                + rng.gen::<f64>() * SHOOTING_STAR_DURATION_SPAN_SEC,
            spawned_at_ms: at_ms,
        }
    }

    /// Active stars in spawn order.
    pub fn active(&self) -> Vec<&ShootingStar> {
        let mut stars: Vec<&ShootingStar> = self.active.values().collect();
        stars.sort_by_key(|s| s.id);
        stars
    }

    pub fn contains(&self, id: u64) -> bool {
        self.active.contains_key(&id)
    }

    pub fn pending_tasks(&self) -> usize {
        self.tasks.len()
    }
}
