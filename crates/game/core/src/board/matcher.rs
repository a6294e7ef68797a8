//! Leftmost run detection.

use super::{Element, Strip, Token};
use crate::config::GameConfig;

/// Maximal block of identical combat-capable gems.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Run {
    pub start: usize,
    pub length: usize,
    pub element: Element,
}

impl Run {
    /// One past the last slot of the run.
    pub const fn end(&self) -> usize {
        self.start + self.length
    }
}

impl Strip {
    /// Returns the lowest-index maximal run of at least `min_run` identical
    /// gems. `Void` and `Empty` never form a run.
    ///
    /// Only one run is reported per call; the cascade resolves runs one at a
    /// time from the left.
    pub fn find_run(&self, min_run: usize) -> Option<Run> {
        let tokens = self.tokens();
        let mut start = 0;

        while start < tokens.len() {
            let token = tokens[start];
            let end = tokens[start..]
                .iter()
                .position(|other| *other != token)
                .map_or(tokens.len(), |offset| start + offset);

            if let Token::Gem(element) = token {
                if end - start >= min_run {
                    return Some(Run {
                        start,
                        length: end - start,
                        element,
                    });
                }
            }
            start = end;
        }

        None
    }
}

/// [`Strip::find_run`] with the default minimum run length.
pub fn find_run(strip: &Strip) -> Option<Run> {
    strip.find_run(GameConfig::DEFAULT_MIN_RUN)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strip(s: &str) -> Strip {
        s.parse().unwrap()
    }

    #[test]
    fn finds_run_at_start() {
        let run = find_run(&strip("火火火水風土命水風土命水風土")).unwrap();
        assert_eq!(
            run,
            Run {
                start: 0,
                length: 3,
                element: Element::Fire
            }
        );
        assert_eq!(run.end(), 3);
    }

    #[test]
    fn run_is_maximal() {
        let run = find_run(&strip("水火火火火火風土命水風土命水")).unwrap();
        assert_eq!((run.start, run.length, run.element), (1, 5, Element::Fire));
    }

    #[test]
    fn leftmost_run_wins() {
        let s = strip("水土土土風命命命命火水風土命");
        let run = find_run(&s).unwrap();
        assert_eq!((run.start, run.length, run.element), (1, 3, Element::Earth));
    }

    #[test]
    fn repeated_calls_are_deterministic() {
        let s = strip("水風命命命火火火土水風土命水");
        let first = find_run(&s);
        for _ in 0..10 {
            assert_eq!(find_run(&s), first);
        }
    }

    #[test]
    fn void_and_empty_never_match() {
        assert_eq!(find_run(&strip("無無無無無火水風土命水風土命")), None);
        assert_eq!(find_run(&strip("火水風土命水風土命水____")), None);
    }

    #[test]
    fn two_in_a_row_is_not_a_run() {
        assert_eq!(find_run(&strip("火火水水風風土土命命火火水水")), None);
    }

    #[test]
    fn run_at_the_tail_is_found() {
        let run = find_run(&strip("火水風土命水風土命水風命命命")).unwrap();
        assert_eq!((run.start, run.length), (11, 3));
    }

    #[test]
    fn min_run_is_respected() {
        let s = strip("火火水風土命水風土命水風土命");
        assert_eq!(s.find_run(3), None);
        assert_eq!(s.find_run(2).map(|run| run.length), Some(2));
    }
}
