// Copyright (C) 2026 Michael Wilson <mike@mdwn.dev>
//
// This program is free software: you can redistribute it and/or modify it under
// the terms of the GNU General Public License as published by the Free Software
// Foundation, version 3.
//
// This program is distributed in the hope that it will be useful, but WITHOUT
// ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS
// FOR A PARTICULAR PURPOSE. See the GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License along with
// this program. If not, see <https://www.gnu.org/licenses/>.
//
use std::fmt;

use crate::job::Job;

/// Default width of a rendered timing bar, in characters.
pub const DEFAULT_WIDTH: usize = 50;

const DURATION_GLYPH: char = '#';
const DECAY_GLYPH: char = '=';
const GAP_GLYPH: char = '.';

/// The timing of one note of a job: how long it sounds, decays, and rests before
/// the next note.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timing {
    duration: u32,
    decay: u32,
    gap: u32,
}

/// Widths of the three timing segments when drawn into a fixed width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segments {
    pub duration: usize,
    pub decay: usize,
    pub gap: usize,
}

impl Timing {
    /// Gets the timing of a job.
    pub fn of(job: &Job) -> Timing {
        Timing {
            duration: job.note_duration(),
            decay: job.note_decay(),
            gap: job.note_gap(),
        }
    }

    /// Total length of one note cycle in milliseconds.
    pub fn cycle_ms(&self) -> u64 {
        u64::from(self.duration) + u64::from(self.decay) + u64::from(self.gap)
    }

    /// Splits `width` proportionally between duration, decay and gap. The gap takes
    /// whatever rounding leaves over, so the segments always add up to `width`.
    pub fn segments(&self, width: usize) -> Segments {
        // Never zero: every part of a job's timing is positive.
        let total = self.cycle_ms();
        let scaled = |ms: u32| (width as u64 * u64::from(ms) / total) as usize;
        let duration = scaled(self.duration);
        let decay = scaled(self.decay);
        Segments {
            duration,
            decay,
            gap: width - duration - decay,
        }
    }

    /// Draws the timing as a bar of `width` characters.
    pub fn render(&self, width: usize) -> String {
        let segments = self.segments(width);
        let mut bar = String::with_capacity(width);
        bar.extend(std::iter::repeat(DURATION_GLYPH).take(segments.duration));
        bar.extend(std::iter::repeat(DECAY_GLYPH).take(segments.decay));
        bar.extend(std::iter::repeat(GAP_GLYPH).take(segments.gap));
        bar
    }
}

impl fmt::Display for Timing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "[{}]", self.render(DEFAULT_WIDTH))?;
        write!(
            f,
            "{} duration {} ms  {} decay {} ms  {} gap {} ms  (cycle {} ms)",
            DURATION_GLYPH,
            self.duration,
            DECAY_GLYPH,
            self.decay,
            GAP_GLYPH,
            self.gap,
            self.cycle_ms()
        )
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn timing(duration: i32, decay: i32, gap: i32) -> Timing {
        Timing::of(&Job::new("timing", duration, decay, gap).expect("valid timing"))
    }

    #[test]
    fn test_cycle() {
        assert_eq!(1700, timing(1000, 500, 200).cycle_ms());
    }

    #[test]
    fn test_segments() {
        let segments = timing(1000, 500, 500).segments(100);
        assert_eq!(
            Segments {
                duration: 50,
                decay: 25,
                gap: 25
            },
            segments
        );

        // 1000/1700 * 50 = 29.4, 500/1700 * 50 = 14.7, the gap absorbs the rest.
        let segments = timing(1000, 500, 200).segments(50);
        assert_eq!(29, segments.duration);
        assert_eq!(14, segments.decay);
        assert_eq!(7, segments.gap);
    }

    #[test]
    fn test_segments_sum_to_width() {
        for (duration, decay, gap) in [(1, 1, 1), (5000, 100, 100), (100, 4500, 500), (7, 3, 1)] {
            let timing = timing(duration, decay, gap);
            for width in [0, 1, 3, 10, 50, 79] {
                let segments = timing.segments(width);
                assert_eq!(width, segments.duration + segments.decay + segments.gap);
            }
        }
    }

    #[test]
    fn test_render() {
        assert_eq!("##########=====.....", timing(1000, 500, 500).render(20));
        assert_eq!("", timing(1000, 500, 500).render(0));
    }

    #[test]
    fn test_display() {
        let text = timing(1000, 500, 200).to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(2, lines.len());
        assert_eq!(DEFAULT_WIDTH + 2, lines[0].len());
        assert!(lines[1].contains("cycle 1700 ms"));
    }
}
