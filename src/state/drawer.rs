//! Drawer transition state machine.
//!
//! The drawer slides in from the left edge. Its horizontal offset is measured
//! in panel widths: `HIDDEN_OFFSET` is fully off-screen and `0.0` is fully
//! visible. The offset follows a linear [`Transition`] that is retargeted
//! whenever the shell opens or closes the drawer; nothing waits on it.

use super::navigation::{Screen, DRAWER_ITEMS};
use ratatui::layout::Rect;
use std::time::Duration;

/// Offset of the settled, hidden drawer.
///
pub const HIDDEN_OFFSET: f32 = -1.0;

/// Default slide duration in milliseconds.
///
pub const DEFAULT_DURATION_MS: u64 = 300;

/// Share of the terminal width taken by the panel, in percent.
///
pub const PANEL_WIDTH_PERCENT: u16 = 80;

/// Rows above the first menu row: top border, title, separator, spacer.
///
pub const MENU_TOP_ROWS: u16 = 4;

/// Linear interpolation between two values sampled by elapsed time.
///
#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    start: f32,
    end: f32,
    duration: Duration,
    elapsed: Duration,
}

impl Transition {
    /// Return a transition already settled at `value`.
    ///
    pub fn settled(value: f32, duration: Duration) -> Self {
        Transition {
            start: value,
            end: value,
            duration,
            elapsed: duration,
        }
    }

    /// Return the interpolated value at the current elapsed time.
    ///
    pub fn value(&self) -> f32 {
        if self.duration.is_zero() {
            return self.end;
        }
        let t = (self.elapsed.as_secs_f32() / self.duration.as_secs_f32()).clamp(0.0, 1.0);
        self.start + (self.end - self.start) * t
    }

    /// Return the value the transition is heading to.
    ///
    pub fn target(&self) -> f32 {
        self.end
    }

    /// Whether the transition has reached its target.
    ///
    pub fn is_settled(&self) -> bool {
        self.elapsed >= self.duration
    }

    /// Redirect toward a new target, starting from the current value.
    ///
    pub fn retarget(&mut self, end: f32) {
        if (end - self.end).abs() < f32::EPSILON {
            return;
        }
        self.start = self.value();
        self.end = end;
        self.elapsed = Duration::ZERO;
    }

    /// Advance elapsed time. Returns true while still moving.
    ///
    pub fn advance(&mut self, dt: Duration) -> bool {
        if self.is_settled() {
            return false;
        }
        self.elapsed = (self.elapsed + dt).min(self.duration);
        !self.is_settled()
    }
}

/// Specifying the phase of the drawer.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum DrawerPhase {
    Hidden,
    Opening,
    Visible,
    Closing,
}

/// Result of hit-testing a click against the drawer.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum DrawerHit {
    /// On the scrim, outside the panel.
    Outside,
    /// Inside the panel but not on a menu row.
    Panel,
    /// On the menu row for the given screen.
    MenuRow(Screen),
}

/// Houses the drawer's animation and menu cursor.
///
#[derive(Debug, Clone)]
pub struct Drawer {
    offset: Transition,
    cursor: usize,
}

impl Default for Drawer {
    fn default() -> Self {
        Drawer::new(Duration::from_millis(DEFAULT_DURATION_MS))
    }
}

impl Drawer {
    /// Return a hidden drawer sliding over the given duration.
    ///
    pub fn new(duration: Duration) -> Self {
        Drawer {
            offset: Transition::settled(HIDDEN_OFFSET, duration),
            cursor: 0,
        }
    }

    /// Point the animation at the position matching `is_open`.
    ///
    pub fn set_open(&mut self, is_open: bool) -> &mut Self {
        self.offset
            .retarget(if is_open { 0.0 } else { HIDDEN_OFFSET });
        self
    }

    /// Advance the slide animation.
    ///
    pub fn advance(&mut self, dt: Duration) -> bool {
        self.offset.advance(dt)
    }

    /// Return the current offset in panel widths.
    ///
    pub fn offset(&self) -> f32 {
        self.offset.value()
    }

    /// Return the offset the animation is heading to.
    ///
    pub fn target_offset(&self) -> f32 {
        self.offset.target()
    }

    /// Return the current phase.
    ///
    pub fn phase(&self) -> DrawerPhase {
        let opening = self.offset.target() > HIDDEN_OFFSET;
        match (opening, self.offset.is_settled()) {
            (true, true) => DrawerPhase::Visible,
            (true, false) => DrawerPhase::Opening,
            (false, true) => DrawerPhase::Hidden,
            (false, false) => DrawerPhase::Closing,
        }
    }

    /// Whether the drawer still needs to be drawn. A closing drawer stays
    /// mounted until its slide has finished.
    ///
    pub fn is_mounted(&self) -> bool {
        self.phase() != DrawerPhase::Hidden
    }

    /// Return the highlighted menu row.
    ///
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Place the cursor on a row, clamped to the menu.
    ///
    pub fn set_cursor(&mut self, index: usize) -> &mut Self {
        self.cursor = index.min(DRAWER_ITEMS.len() - 1);
        self
    }

    /// Move the cursor down, wrapping.
    ///
    pub fn next(&mut self) -> &mut Self {
        self.cursor = (self.cursor + 1) % DRAWER_ITEMS.len();
        self
    }

    /// Move the cursor up, wrapping.
    ///
    pub fn previous(&mut self) -> &mut Self {
        self.cursor = if self.cursor == 0 {
            DRAWER_ITEMS.len() - 1
        } else {
            self.cursor - 1
        };
        self
    }

    /// Return the screen under the cursor.
    ///
    pub fn selected_screen(&self) -> Screen {
        DRAWER_ITEMS[self.cursor].screen
    }
}

/// Return the area the panel covers for the given offset, clipped to the
/// screen. Used both to draw the panel and to hit-test clicks.
///
pub fn panel_area(area: Rect, offset: f32) -> Rect {
    let width = area.width.saturating_mul(PANEL_WIDTH_PERCENT) / 100;
    let shift = (offset.clamp(HIDDEN_OFFSET, 0.0) * width as f32).round() as i32;
    let left = area.x as i32 + shift;
    let right = left + width as i32;
    let visible_left = left.max(area.x as i32);
    let visible_right = right.min(area.x as i32 + area.width as i32);
    if visible_right <= visible_left {
        return Rect::new(area.x, area.y, 0, area.height);
    }
    Rect::new(
        visible_left as u16,
        area.y,
        (visible_right - visible_left) as u16,
        area.height,
    )
}

/// Return the area of one menu row within the panel.
///
pub fn menu_row_area(panel: Rect, index: usize) -> Rect {
    let y = panel.y + MENU_TOP_ROWS + index as u16;
    Rect::new(panel.x + 1, y, panel.width.saturating_sub(2), 1)
}

/// Hit-test a click at `(column, row)` against the panel.
///
pub fn hit_test(panel: Rect, column: u16, row: u16) -> DrawerHit {
    let inside = column >= panel.x
        && column < panel.x + panel.width
        && row >= panel.y
        && row < panel.y + panel.height;
    if !inside {
        return DrawerHit::Outside;
    }
    DRAWER_ITEMS
        .iter()
        .enumerate()
        .find(|(index, _)| {
            let row_area = menu_row_area(panel, *index);
            row == row_area.y
                && row_area.y < panel.y + panel.height
                && column >= row_area.x
                && column < row_area.x + row_area.width
        })
        .map(|(_, item)| DrawerHit::MenuRow(item.screen))
        .unwrap_or(DrawerHit::Panel)
}

#[cfg(test)]
mod tests {
    use super::*;

    const MS_100: Duration = Duration::from_millis(100);

    #[test]
    fn transition_interpolates_linearly() {
        let mut t = Transition::settled(HIDDEN_OFFSET, Duration::from_millis(300));
        t.retarget(0.0);
        assert_eq!(t.value(), HIDDEN_OFFSET);
        t.advance(Duration::from_millis(150));
        assert!((t.value() - -0.5).abs() < 1e-4);
        assert!(!t.advance(Duration::from_millis(200)));
        assert_eq!(t.value(), 0.0);
        assert!(t.is_settled());
    }

    #[test]
    fn retarget_mid_flight_starts_from_current_value() {
        let mut t = Transition::settled(HIDDEN_OFFSET, Duration::from_millis(300));
        t.retarget(0.0);
        t.advance(MS_100);
        let mid = t.value();
        t.retarget(HIDDEN_OFFSET);
        assert!((t.value() - mid).abs() < 1e-4);
        assert_eq!(t.target(), HIDDEN_OFFSET);
    }

    #[test]
    fn retarget_to_same_target_keeps_progress() {
        let mut t = Transition::settled(HIDDEN_OFFSET, Duration::from_millis(300));
        t.retarget(0.0);
        t.advance(MS_100);
        let before = t.value();
        t.retarget(0.0);
        assert_eq!(t.value(), before);
    }

    #[test]
    fn zero_duration_jumps_to_target() {
        let mut t = Transition::settled(HIDDEN_OFFSET, Duration::ZERO);
        t.retarget(0.0);
        assert_eq!(t.value(), 0.0);
        assert!(t.is_settled());
    }

    #[test]
    fn drawer_starts_hidden_and_unmounted() {
        let drawer = Drawer::default();
        assert_eq!(drawer.phase(), DrawerPhase::Hidden);
        assert_eq!(drawer.offset(), HIDDEN_OFFSET);
        assert!(!drawer.is_mounted());
    }

    #[test]
    fn drawer_phases_follow_animation() {
        let mut drawer = Drawer::default();
        drawer.set_open(true);
        assert_eq!(drawer.phase(), DrawerPhase::Opening);
        drawer.advance(Duration::from_millis(300));
        assert_eq!(drawer.phase(), DrawerPhase::Visible);
        assert_eq!(drawer.offset(), 0.0);

        drawer.set_open(false);
        assert_eq!(drawer.phase(), DrawerPhase::Closing);
        assert!(drawer.is_mounted());
        drawer.advance(Duration::from_millis(300));
        assert_eq!(drawer.phase(), DrawerPhase::Hidden);
        assert!(!drawer.is_mounted());
    }

    #[test]
    fn target_depends_only_on_latest_request() {
        let mut drawer = Drawer::default();
        drawer.set_open(true);
        drawer.advance(Duration::from_millis(20));
        drawer.set_open(false);
        drawer.advance(Duration::from_millis(5));
        drawer.set_open(true);
        assert_eq!(drawer.target_offset(), 0.0);
        drawer.advance(Duration::from_secs(1));
        assert_eq!(drawer.phase(), DrawerPhase::Visible);
    }

    #[test]
    fn offset_stays_in_range() {
        let mut drawer = Drawer::default();
        drawer.set_open(true);
        for _ in 0..40 {
            drawer.advance(Duration::from_millis(16));
            let offset = drawer.offset();
            assert!((HIDDEN_OFFSET..=0.0).contains(&offset));
        }
    }

    #[test]
    fn cursor_wraps() {
        let mut drawer = Drawer::default();
        drawer.previous();
        assert_eq!(drawer.cursor(), DRAWER_ITEMS.len() - 1);
        drawer.next();
        assert_eq!(drawer.cursor(), 0);
        drawer.set_cursor(42);
        assert_eq!(drawer.selected_screen(), Screen::HealthTips);
    }

    #[test]
    fn panel_area_slides_with_offset() {
        let area = Rect::new(0, 0, 100, 30);
        assert_eq!(panel_area(area, 0.0), Rect::new(0, 0, 80, 30));
        assert_eq!(panel_area(area, -0.5), Rect::new(0, 0, 40, 30));
        assert_eq!(panel_area(area, HIDDEN_OFFSET).width, 0);
    }

    #[test]
    fn hit_test_distinguishes_scrim_panel_and_rows() {
        let panel = panel_area(Rect::new(0, 0, 100, 30), 0.0);
        assert_eq!(hit_test(panel, 90, 10), DrawerHit::Outside);
        assert_eq!(hit_test(panel, 10, 1), DrawerHit::Panel);
        assert_eq!(
            hit_test(panel, 10, MENU_TOP_ROWS),
            DrawerHit::MenuRow(Screen::Home)
        );
        assert_eq!(
            hit_test(panel, 10, MENU_TOP_ROWS + 4),
            DrawerHit::MenuRow(Screen::Medications)
        );
    }

    #[test]
    fn hit_test_on_row_border_is_panel() {
        let panel = panel_area(Rect::new(0, 0, 100, 30), 0.0);
        assert_eq!(hit_test(panel, 0, MENU_TOP_ROWS), DrawerHit::Panel);
        assert_eq!(hit_test(panel, 79, MENU_TOP_ROWS + 1), DrawerHit::Panel);
        assert_eq!(
            hit_test(panel, 78, MENU_TOP_ROWS + 1),
            DrawerHit::MenuRow(Screen::WaterTracking)
        );
    }

    #[test]
    fn hit_test_on_hidden_panel_is_outside() {
        let panel = panel_area(Rect::new(0, 0, 100, 30), HIDDEN_OFFSET);
        assert_eq!(hit_test(panel, 0, MENU_TOP_ROWS), DrawerHit::Outside);
    }
}
