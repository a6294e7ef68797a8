//! Collapse and refill.
//!
//! Collapse removes a resolved run and compacts the strip leftward, leaving
//! `Empty` placeholders at the tail. Refill then replaces every placeholder
//! with an independent draw from the refill pool. Refill does not look at its
//! neighbours, so it may create new runs; the next detection step in the
//! cascade picks them up.

use super::{Element, Run, STRIP_LEN, Strip, Token};
use crate::env::RngSource;

impl Strip {
    /// Removes `run` and shifts everything right of it left by `run.length`.
    ///
    /// Stable partition: non-empty tokens keep their relative order, and the
    /// vacated slots end up as `Empty` at the tail. `Void` tokens are real
    /// tokens here and shift like any gem.
    pub fn collapse(&mut self, run: Run) {
        let end = run.end().min(STRIP_LEN);
        let start = run.start.min(end);
        for slot in &mut self.tokens[start..end] {
            *slot = Token::Empty;
        }

        let mut compacted = [Token::Empty; STRIP_LEN];
        let kept = self.tokens.iter().filter(|token| !token.is_empty());
        for (slot, token) in compacted.iter_mut().zip(kept) {
            *slot = *token;
        }
        self.tokens = compacted;
    }

    /// Replaces every `Empty` slot with a uniform draw from `pool`.
    ///
    /// Leaves the strip untouched when `pool` is empty; configuration
    /// validation rejects an empty pool before a session starts.
    pub fn refill<R: RngSource + ?Sized>(&mut self, pool: &[Element], rng: &mut R) {
        if pool.is_empty() {
            return;
        }
        for slot in &mut self.tokens {
            if slot.is_empty() {
                *slot = Token::Gem(draw(pool, rng));
            }
        }
    }

    /// Fresh strip of independent draws from `pool`.
    ///
    /// May contain runs; they resolve on the next turn.
    pub fn random<R: RngSource + ?Sized>(pool: &[Element], rng: &mut R) -> Self {
        let mut strip = Self::new([Token::Empty; STRIP_LEN]);
        strip.refill(pool, rng);
        strip
    }

    /// Number of `Empty` slots.
    pub fn empty_slots(&self) -> usize {
        self.tokens.iter().filter(|token| token.is_empty()).count()
    }
}

fn draw<R: RngSource + ?Sized>(pool: &[Element], rng: &mut R) -> Element {
    let index = rng.below(u32::try_from(pool.len()).unwrap_or(u32::MAX)) as usize;
    pool[index.min(pool.len() - 1)]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::PcgRng;
    use strum::IntoEnumIterator;

    fn strip(s: &str) -> Strip {
        s.parse().unwrap()
    }

    fn pool() -> Vec<Element> {
        Element::iter().collect()
    }

    #[test]
    fn collapse_shifts_tail_left_and_pads_with_empty() {
        let mut s = strip("水火火火風土命水風土命水風土");
        let run = s.find_run(3).unwrap();
        s.collapse(run);
        assert_eq!(s.to_string(), "水風土命水風土命水風土___");
        assert_eq!(s.empty_slots(), 3);
    }

    #[test]
    fn collapse_keeps_void_tokens_in_order() {
        let mut s = strip("無水水水水火無風土命水風土命");
        let run = s.find_run(3).unwrap();
        assert_eq!(run.length, 4);
        s.collapse(run);
        assert_eq!(s.to_string(), "無火無風土命水風土命____");
    }

    #[test]
    fn refill_replaces_only_empty_slots() {
        let mut s = strip("水風土命水風土命水風土___");
        let mut rng = PcgRng::new(3);
        s.refill(&pool(), &mut rng);

        assert_eq!(s.empty_slots(), 0);
        assert_eq!(
            s.tokens()[..11],
            strip("水風土命水風土命水風土___").tokens()[..11]
        );
        assert!(s.tokens()[11..].iter().all(|token| token.is_combat()));
    }

    #[test]
    fn collapse_then_refill_preserves_length_and_order() {
        let original = strip("土水風命命命命火水風土水風土");
        let mut s = original;
        let run = s.find_run(3).unwrap();
        s.collapse(run);
        s.refill(&pool(), &mut PcgRng::new(11));

        let survivors: Vec<Token> = original
            .iter()
            .enumerate()
            .filter(|(index, _)| *index < run.start || *index >= run.end())
            .map(|(_, token)| token)
            .collect();
        assert_eq!(s.tokens().len(), STRIP_LEN);
        assert_eq!(&s.tokens()[..survivors.len()], survivors.as_slice());
    }

    #[test]
    fn refill_with_empty_pool_is_a_no_op() {
        let mut s = strip("水風土命水風土命水風土___");
        s.refill(&[], &mut PcgRng::new(1));
        assert_eq!(s.empty_slots(), 3);
    }

    #[test]
    fn random_strip_is_seeded() {
        let a = Strip::random(&pool(), &mut PcgRng::new(5));
        let b = Strip::random(&pool(), &mut PcgRng::new(5));
        assert_eq!(a, b);
        assert_eq!(a.empty_slots(), 0);
        assert!(a.iter().all(|token| token.is_combat()));
    }

    #[test]
    fn refill_uses_only_pool_elements() {
        let mut rng = PcgRng::new(8);
        let only_water = [Element::Water];
        let s = Strip::random(&only_water, &mut rng);
        assert!(s.iter().all(|token| token == Token::Gem(Element::Water)));
    }
}
