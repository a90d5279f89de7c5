use crate::state::Alert;
use log::*;

/// Local state of the water tracking screen.
///
#[derive(Debug, Clone, PartialEq)]
pub struct WaterState {
    glasses: u32,
    daily_goal: u32,
}

impl WaterState {
    pub fn new(daily_goal: u32) -> Self {
        WaterState {
            glasses: 0,
            daily_goal: daily_goal.max(1),
        }
    }

    /// Return glasses drunk today.
    ///
    pub fn glasses(&self) -> u32 {
        self.glasses
    }

    /// Return the daily goal in glasses.
    ///
    pub fn daily_goal(&self) -> u32 {
        self.daily_goal
    }

    /// Return progress toward the goal in `[0, 1]`.
    ///
    pub fn progress(&self) -> f64 {
        self.glasses as f64 / self.daily_goal as f64
    }

    /// Add a glass unless the goal is already met. Reaching the goal raises
    /// a congratulation.
    ///
    pub fn add_glass(&mut self) -> Option<Alert> {
        if self.glasses >= self.daily_goal {
            return None;
        }
        self.glasses += 1;
        debug!("Water intake at {}/{} glasses", self.glasses, self.daily_goal);
        if self.glasses == self.daily_goal {
            info!("Daily water goal reached");
            return Some(Alert::new(
                "Congratulations!",
                "You've reached your daily water goal!",
            ));
        }
        None
    }

    /// Remove a glass, never going below zero.
    ///
    pub fn remove_glass(&mut self) -> &mut Self {
        self.glasses = self.glasses.saturating_sub(1);
        self
    }
}
