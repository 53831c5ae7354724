use crate::board::CellTag;
use crate::clock::Interval;
use crate::grid::Pos;
use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FoodKind {
    // Stays on the board until eaten
    Normal,
    // Worth more, but counts down and disappears when its time runs out
    Special,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Decay {
    Fresh,
    Expired,
}

/// A food item sitting on one board cell.
///
/// Remaining time is kept in tenths of a second, the size of one decay step,
/// so the countdown lands on exactly zero.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Food {
    pos: Pos,
    kind: FoodKind,
    points: u32,
    remaining_tenths: Option<u32>,
    timer: Interval,
}

impl Food {
    pub fn normal(pos: Pos, points: u32, decay_step: Duration) -> Self {
        Food {
            pos,
            kind: FoodKind::Normal,
            points,
            remaining_tenths: None,
            timer: Interval::new(decay_step),
        }
    }

    pub fn special(pos: Pos, points: u32, lifetime_tenths: u32, decay_step: Duration) -> Self {
        Food {
            pos,
            kind: FoodKind::Special,
            points,
            remaining_tenths: Some(lifetime_tenths.max(1)),
            timer: Interval::new(decay_step),
        }
    }

    pub fn pos(&self) -> Pos {
        self.pos
    }

    pub fn kind(&self) -> FoodKind {
        self.kind
    }

    pub fn is_special(&self) -> bool {
        self.kind == FoodKind::Special
    }

    pub fn points(&self) -> u32 {
        self.points
    }

    pub fn remaining_tenths(&self) -> Option<u32> {
        self.remaining_tenths
    }

    pub fn tag(&self) -> CellTag {
        match self.kind {
            FoodKind::Normal => CellTag::Food,
            FoodKind::Special => CellTag::SpecialFood,
        }
    }

    pub fn is_active(&self) -> bool {
        self.timer.is_running()
    }

    pub fn set_active(&mut self, active: bool) {
        self.timer.set_running(active);
    }

    pub fn toggle_pause(&mut self) {
        self.timer.toggle();
    }

    pub fn timer(&self) -> &Interval {
        &self.timer
    }

    pub(crate) fn timer_mut(&mut self) -> &mut Interval {
        &mut self.timer
    }

    pub fn decay_tick(&mut self) -> Decay {
        if let Some(tenths) = self.remaining_tenths.as_mut() {
            *tenths = tenths.saturating_sub(1);
            if *tenths == 0 {
                return Decay::Expired;
            }
        }
        Decay::Fresh
    }

    pub fn consume(mut self) -> u32 {
        self.timer.stop();
        self.points
    }
}
