use log::{debug, trace};

use crate::grid::TileKey;
use crate::wave::WaveEffect;

/// Fields up to this size sum their terms without allocating.
const INLINE_TERMS: usize = 16;

/// Summed in value order so spawn order never changes the result.
fn sorted_sum(terms: &mut [f64]) -> f64 {
    terms.sort_unstable_by(f64::total_cmp);
    terms.iter().sum()
}

/// Unordered set of running wave effects.
///
/// Effects never read each other, so neither the order they are advanced in
/// nor the order their contributions are summed in changes any result.
#[derive(Debug, Clone, Default)]
pub struct AnimationField {
    effects: Vec<WaveEffect>,
}

impl AnimationField {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.effects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.effects.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, WaveEffect> {
        self.effects.iter()
    }

    /// Takes effect immediately, queries made before the next
    /// [`advance`](Self::advance) already see it.
    pub fn spawn(&mut self, effect: WaveEffect) {
        debug!(
            "Spawning {} effect at ({}, {})",
            effect.kind(),
            effect.center().x,
            effect.center().y
        );

        self.effects.push(effect);
    }

    pub fn advance(&mut self, dt: f64) {
        for effect in &mut self.effects {
            effect.advance(dt);
        }

        let before = self.effects.len();

        self.effects.retain(WaveEffect::is_alive);

        let evicted = before - self.effects.len();

        if evicted > 0 {
            trace!("{} effects decayed, {} remaining", evicted, self.effects.len());
        }
    }

    /// Sum of every effect's contribution at `key`, 0 for an empty field.
    pub fn offset_at(&self, key: TileKey) -> f64 {
        match self.effects.as_slice() {
            [] => 0.0,
            [a] => a.offset_at(key),
            [a, b] => a.offset_at(key) + b.offset_at(key),
            effects if effects.len() <= INLINE_TERMS => {
                let mut buffer = [0.0; INLINE_TERMS];
                let terms = &mut buffer[..effects.len()];

                for (term, effect) in terms.iter_mut().zip(effects) {
                    *term = effect.offset_at(key);
                }

                sorted_sum(terms)
            }
            effects => {
                let mut terms: Vec<f64> = effects.iter().map(|e| e.offset_at(key)).collect();

                sorted_sum(&mut terms)
            }
        }
    }

    pub fn clear(&mut self) {
        self.effects.clear();
    }
}

impl<'a> IntoIterator for &'a AnimationField {
    type Item = &'a WaveEffect;
    type IntoIter = std::slice::Iter<'a, WaveEffect>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Extend<WaveEffect> for AnimationField {
    fn extend<I: IntoIterator<Item = WaveEffect>>(&mut self, iter: I) {
        for effect in iter {
            self.spawn(effect);
        }
    }
}
