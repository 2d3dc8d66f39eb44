//! Plain view-state models behind the page's interactive bits.
//!
//! Each type owns one piece of ephemeral UI state, starts from its `Default`
//! value and changes only through its own mutator. Components keep them in
//! `Signal`s; nothing here knows about the DOM or the Dioxus runtime, so the
//! rules can be tested directly.

use std::collections::BTreeSet;
use std::time::Duration;

use content::Region;
use web_time::Instant;

/// Scroll offset (in CSS pixels) past which the navbar turns opaque.
pub const NAV_SCROLL_THRESHOLD: f64 = 50.0;

/// Whether the page has been scrolled past [`NAV_SCROLL_THRESHOLD`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScrollState {
    past_threshold: bool,
}

impl ScrollState {
    /// State after observing `offset`. Only the latest sample matters.
    pub fn sampled(self, offset: f64) -> Self {
        Self {
            past_threshold: offset > NAV_SCROLL_THRESHOLD,
        }
    }

    pub fn past_threshold(&self) -> bool {
        self.past_threshold
    }
}

/// Regions that have entered the viewport at least once.
///
/// A region is never removed once added.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RevealMap {
    revealed: BTreeSet<Region>,
}

impl RevealMap {
    /// Records one intersection sample. Returns `true` if `region` was
    /// revealed by this call.
    pub fn observe(&mut self, region: Region, is_intersecting: bool) -> bool {
        is_intersecting && self.revealed.insert(region)
    }

    /// Whether applying this sample would change anything.
    pub fn would_reveal(&self, region: Region, is_intersecting: bool) -> bool {
        is_intersecting && !self.revealed.contains(&region)
    }

    pub fn reveal_all<I: IntoIterator<Item = Region>>(&mut self, regions: I) {
        self.revealed.extend(regions);
    }

    pub fn is_revealed(&self, region: Region) -> bool {
        self.revealed.contains(&region)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Phase {
    Idle,
    /// Armed; the clock origin is fixed by the first frame.
    Running { origin: Option<Instant> },
    Finished,
}

/// A set of counters that climb together from zero to their targets.
///
/// All counters share one progress clock. At progress `p` counter `i` shows
/// `floor(p * targets[i])`, so every counter reaches its target exactly when
/// `p == 1` and not before.
#[derive(Debug, Clone, PartialEq)]
pub struct CountUp {
    targets: Vec<u32>,
    duration: Duration,
    values: Vec<u32>,
    phase: Phase,
}

impl CountUp {
    pub fn new(targets: Vec<u32>, duration: Duration) -> Self {
        let values = vec![0; targets.len()];
        Self {
            targets,
            duration,
            values,
            phase: Phase::Idle,
        }
    }

    /// Starts the animation. The counters run once per page view, so arming
    /// a running or finished animation does nothing. Returns whether this
    /// call started it.
    pub fn arm(&mut self) -> bool {
        match self.phase {
            Phase::Idle => {
                self.phase = Phase::Running { origin: None };
                true
            }
            Phase::Running { .. } | Phase::Finished => false,
        }
    }

    /// Advances to the frame drawn at `now`. Returns `true` while another
    /// frame is needed.
    pub fn tick(&mut self, now: Instant) -> bool {
        let origin = match self.phase {
            Phase::Idle | Phase::Finished => return false,
            Phase::Running { origin: Some(origin) } => origin,
            Phase::Running { origin: None } => {
                self.phase = Phase::Running { origin: Some(now) };
                now
            }
        };

        let progress = progress(now.saturating_duration_since(origin), self.duration);
        self.values = self
            .targets
            .iter()
            .map(|&target| (progress * f64::from(target)).floor() as u32)
            .collect();

        if progress >= 1.0 {
            self.phase = Phase::Finished;
            false
        } else {
            true
        }
    }

    pub fn values(&self) -> &[u32] {
        &self.values
    }

    pub fn is_idle(&self) -> bool {
        self.phase == Phase::Idle
    }

    pub fn is_finished(&self) -> bool {
        self.phase == Phase::Finished
    }
}

/// Fraction of `duration` covered by `elapsed`, clamped to `[0, 1]`.
fn progress(elapsed: Duration, duration: Duration) -> f64 {
    if duration.is_zero() {
        return 1.0;
    }
    (elapsed.as_secs_f64() / duration.as_secs_f64()).min(1.0)
}

/// Which FAQ entry is expanded, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AccordionState {
    open: Option<usize>,
}

impl AccordionState {
    /// Opens `index`, closing whatever was open, or closes it if it already is.
    pub fn toggle(&mut self, index: usize) {
        self.open = if self.open == Some(index) {
            None
        } else {
            Some(index)
        };
    }

    pub fn open_index(&self) -> Option<usize> {
        self.open
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.open == Some(index)
    }
}

/// The mobile navigation menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// A link inside the menu was followed.
    pub fn navigated(&mut self) {
        self.open = false;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    const TARGETS: [u32; 4] = [5, 1, 99, 24];
    const DURATION: Duration = Duration::from_millis(2000);

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn scroll_flag_tracks_latest_sample() {
        let mut state = ScrollState::default();
        assert!(!state.past_threshold());

        let mut flags = Vec::new();
        for offset in [0.0, 40.0, 60.0, 30.0] {
            state = state.sampled(offset);
            flags.push(state.past_threshold());
        }
        assert_eq!(flags, vec![false, false, true, false]);
    }

    #[test]
    fn scroll_threshold_is_exclusive() {
        assert!(!ScrollState::default().sampled(50.0).past_threshold());
        assert!(ScrollState::default().sampled(50.5).past_threshold());
    }

    #[test]
    fn reveal_is_one_shot() {
        let mut map = RevealMap::default();
        for region in Region::iter() {
            assert!(!map.is_revealed(region));
        }

        assert!(!map.observe(Region::Faq, false));
        assert!(!map.is_revealed(Region::Faq));

        assert!(map.observe(Region::Faq, true));
        assert!(map.is_revealed(Region::Faq));

        // Leaving the viewport or re-entering changes nothing.
        assert!(!map.would_reveal(Region::Faq, true));
        assert!(!map.observe(Region::Faq, false));
        assert!(!map.observe(Region::Faq, true));
        assert!(map.is_revealed(Region::Faq));

        assert!(!map.is_revealed(Region::Cta));
    }

    #[test]
    fn reveal_all_marks_every_region() {
        let mut map = RevealMap::default();
        map.reveal_all(Region::iter());
        assert!(Region::iter().all(|region| map.is_revealed(region)));
    }

    #[test]
    fn count_up_is_idle_until_armed() {
        let mut counter = CountUp::new(TARGETS.to_vec(), DURATION);
        let start = Instant::now();
        for t in [0, 500, 2000, 10_000] {
            assert!(!counter.tick(start + ms(t)));
            assert_eq!(counter.values(), &[0, 0, 0, 0]);
        }
        assert!(counter.is_idle());
    }

    #[test]
    fn count_up_follows_truncated_linear_progress() {
        let mut counter = CountUp::new(TARGETS.to_vec(), DURATION);
        assert!(counter.arm());

        let start = Instant::now();
        assert!(counter.tick(start));
        assert_eq!(counter.values(), &[0, 0, 0, 0]);

        let mut previous = counter.values().to_vec();
        for t in (16..2000).step_by(16) {
            assert!(counter.tick(start + ms(t)));
            let fraction = ms(t).as_secs_f64() / DURATION.as_secs_f64();
            let expected: Vec<u32> = TARGETS
                .iter()
                .map(|&target| (fraction * f64::from(target)).floor() as u32)
                .collect();
            assert_eq!(counter.values(), expected.as_slice(), "t = {t}");
            assert!(previous.iter().zip(counter.values()).all(|(a, b)| a <= b));
            previous = counter.values().to_vec();
        }

        assert!(!counter.tick(start + ms(2000)));
        assert_eq!(counter.values(), &TARGETS);
        assert!(counter.is_finished());
    }

    #[test]
    fn count_up_spot_values() {
        let mut counter = CountUp::new(TARGETS.to_vec(), DURATION);
        counter.arm();
        let start = Instant::now();
        counter.tick(start);

        counter.tick(start + ms(500));
        assert_eq!(counter.values(), &[1, 0, 24, 6]);

        counter.tick(start + ms(1000));
        assert_eq!(counter.values(), &[2, 0, 49, 12]);

        counter.tick(start + ms(1999));
        assert_eq!(counter.values(), &[4, 0, 98, 23]);
    }

    #[test]
    fn count_up_late_frame_lands_on_targets() {
        let mut counter = CountUp::new(TARGETS.to_vec(), DURATION);
        counter.arm();
        let start = Instant::now();
        counter.tick(start);
        assert!(!counter.tick(start + ms(5000)));
        assert_eq!(counter.values(), &TARGETS);

        // Finished counters ignore further frames.
        assert!(!counter.tick(start + ms(9000)));
        assert_eq!(counter.values(), &TARGETS);
    }

    #[test]
    fn count_up_runs_once_per_page_view() {
        let mut counter = CountUp::new(TARGETS.to_vec(), DURATION);
        assert!(counter.arm());
        let start = Instant::now();
        counter.tick(start);
        counter.tick(start + ms(1000));
        let midway = counter.values().to_vec();

        assert!(!counter.arm());
        counter.tick(start + ms(1000));
        assert_eq!(counter.values(), midway.as_slice());

        counter.tick(start + ms(2000));
        assert!(!counter.arm());
        assert_eq!(counter.values(), &TARGETS);
    }

    #[test]
    fn zero_duration_completes_on_first_frame() {
        let mut counter = CountUp::new(TARGETS.to_vec(), Duration::ZERO);
        counter.arm();
        assert!(!counter.tick(Instant::now()));
        assert_eq!(counter.values(), &TARGETS);
    }

    #[test]
    fn accordion_keeps_at_most_one_open() {
        let mut accordion = AccordionState::default();
        assert_eq!(accordion.open_index(), None);

        for (index, expected) in [
            (2, Some(2)),
            (4, Some(4)),
            (4, None),
            (0, Some(0)),
            (3, Some(3)),
            (3, None),
            (3, Some(3)),
        ] {
            accordion.toggle(index);
            assert_eq!(accordion.open_index(), expected);
            assert!((0..6).filter(|&i| accordion.is_open(i)).count() <= 1);
        }
    }

    #[test]
    fn menu_closes_on_navigation() {
        let mut menu = MenuState::default();
        assert!(!menu.is_open());

        menu.toggle();
        assert!(menu.is_open());
        menu.navigated();
        assert!(!menu.is_open());

        menu.navigated();
        assert!(!menu.is_open());

        menu.toggle();
        menu.toggle();
        assert!(!menu.is_open());
    }
}
