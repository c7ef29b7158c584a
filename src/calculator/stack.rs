use std::collections::VecDeque;

use thiserror::Error;

/// Raised when an operation needs more values than the stack holds.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
#[error("stack holds {available} value(s), {needed} required")]
pub struct Underflow {
    pub needed: usize,
    pub available: usize,
}

#[derive(Debug, Default, Clone)]
pub struct Stack {
    store: VecDeque<f64>,
}

impl Stack {
    pub fn push(&mut self, v: impl Into<f64>) {
        self.store.push_back(v.into())
    }

    pub fn top(&self) -> Option<&f64> {
        self.store.back()
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    pub fn clear(&mut self) {
        self.store.clear()
    }

    /// Values from the bottom of the stack to the top.
    pub fn iter(&self) -> impl Iterator<Item = &f64> {
        self.store.iter()
    }

    /// Replaces the top `N` values with the result of `f`.
    ///
    /// The operands are handed over in push order, so for `N == 2` the array
    /// is `[second_from_top, top]`. If `f` fails the operands go back exactly
    /// where they were and the stack is left as it was found.
    pub fn reduce<const N: usize, E>(
        &mut self,
        f: impl FnOnce([f64; N]) -> Result<f64, E>,
    ) -> Result<f64, E>
    where
        E: From<Underflow>,
    {
        let available = self.store.len();

        if available < N {
            return Err(Underflow { needed: N, available }.into());
        }

        let mut operands = [0.0; N];
        for (slot, v) in operands.iter_mut().zip(self.store.drain(available - N..)) {
            *slot = v;
        }

        match f(operands) {
            Ok(res) => {
                self.store.push_back(res);

                Ok(res)
            }
            Err(e) => {
                self.store.extend(operands);

                Err(e)
            }
        }
    }
}
