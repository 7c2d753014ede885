//! Pomodoro countdown.
//!
//! DESIGN
//! ======
//! The page ticker calls [`PomodoroState::tick`] once per second; the state
//! itself never schedules anything. Finishing a phase stops the timer and
//! flips to the other phase, so the user starts every phase explicitly.

#[cfg(test)]
#[path = "pomodoro_test.rs"]
mod pomodoro_test;

pub const DEFAULT_FOCUS_MINUTES: u32 = 25;
pub const DEFAULT_BREAK_MINUTES: u32 = 5;
pub const MAX_MINUTES: u32 = 1440;
/// Circumference of the progress ring (radius 100).
pub const RING_CIRCUMFERENCE: f64 = 2.0 * std::f64::consts::PI * 100.0;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Focus,
    Break,
}

impl Phase {
    pub fn label(self) -> &'static str {
        match self {
            Self::Focus => "专注时间",
            Self::Break => "休息时间",
        }
    }

    pub fn ring_color(self) -> &'static str {
        match self {
            Self::Focus => "#6c5ce7",
            Self::Break => "#27ae60",
        }
    }
}

/// Returned by [`PomodoroState::tick`] when a phase runs out.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PhaseComplete {
    /// Focus finished; award points and take a break.
    Focus,
    /// Break finished; back to work.
    Break,
}

impl PhaseComplete {
    pub fn message(self) -> &'static str {
        match self {
            Self::Focus => "🍅 番茄完成！休息一下吧",
            Self::Break => "⏰ 休息结束，继续加油！",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PomodoroState {
    pub running: bool,
    pub phase: Phase,
    pub time_left_secs: u32,
    pub completed: u32,
    pub focus_minutes: u32,
    pub break_minutes: u32,
    /// Set once the timer has been started since the last reset or completion.
    pub started: bool,
}

impl Default for PomodoroState {
    fn default() -> Self {
        Self {
            running: false,
            phase: Phase::Focus,
            time_left_secs: DEFAULT_FOCUS_MINUTES * 60,
            completed: 0,
            focus_minutes: DEFAULT_FOCUS_MINUTES,
            break_minutes: DEFAULT_BREAK_MINUTES,
            started: false,
        }
    }
}

impl PomodoroState {
    /// Start or pause.
    pub fn toggle(&mut self) {
        self.running = !self.running;
        if self.running {
            self.started = true;
        }
    }

    /// Advance one second.
    pub fn tick(&mut self) -> Option<PhaseComplete> {
        if !self.running {
            return None;
        }
        self.time_left_secs = self.time_left_secs.saturating_sub(1);
        if self.time_left_secs == 0 { Some(self.complete()) } else { None }
    }

    fn complete(&mut self) -> PhaseComplete {
        self.running = false;
        self.started = false;
        match self.phase {
            Phase::Focus => {
                self.completed += 1;
                self.phase = Phase::Break;
                self.time_left_secs = self.break_minutes * 60;
                PhaseComplete::Focus
            }
            Phase::Break => {
                self.phase = Phase::Focus;
                self.time_left_secs = self.focus_minutes * 60;
                PhaseComplete::Break
            }
        }
    }

    /// Stop and restart the focus phase with durations read from the inputs.
    pub fn reset(&mut self, focus_input: &str, break_input: &str) {
        self.running = false;
        self.started = false;
        self.phase = Phase::Focus;
        self.focus_minutes = parse_minutes(focus_input, DEFAULT_FOCUS_MINUTES);
        self.break_minutes = parse_minutes(break_input, DEFAULT_BREAK_MINUTES);
        self.time_left_secs = self.focus_minutes * 60;
    }

    fn phase_total_secs(&self) -> u32 {
        match self.phase {
            Phase::Focus => self.focus_minutes * 60,
            Phase::Break => self.break_minutes * 60,
        }
    }

    /// Fraction of the phase still remaining, in `0.0..=1.0`.
    pub fn progress(&self) -> f64 {
        let total = self.phase_total_secs();
        if total == 0 {
            return 0.0;
        }
        (f64::from(self.time_left_secs) / f64::from(total)).clamp(0.0, 1.0)
    }

    /// `stroke-dashoffset` for the progress ring.
    pub fn ring_offset(&self) -> f64 {
        RING_CIRCUMFERENCE * (1.0 - self.progress())
    }

    pub fn button_text(&self) -> &'static str {
        if self.running {
            "⏸ 暂停"
        } else if self.started {
            "▶ 继续"
        } else {
            "▶ 开始"
        }
    }
}

/// Integer minutes from a number input; unparsable or zero uses `fallback`.
pub fn parse_minutes(raw: &str, fallback: u32) -> u32 {
    let trimmed = raw.trim();
    let whole = trimmed.split('.').next().unwrap_or(trimmed);
    match whole.parse::<i64>() {
        Ok(0) | Err(_) => fallback,
        Ok(v) => u32::try_from(v.clamp(1, i64::from(MAX_MINUTES))).unwrap_or(fallback),
    }
}

/// `H:MM:SS` from one hour up, `MM:SS` below.
pub fn format_time(total_secs: u32) -> String {
    let hours = total_secs / 3600;
    let minutes = (total_secs % 3600) / 60;
    let seconds = total_secs % 60;
    if hours > 0 { format!("{hours}:{minutes:02}:{seconds:02}") } else { format!("{minutes:02}:{seconds:02}") }
}
