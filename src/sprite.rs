/// Counter wrapping in `0..modulus`, reported shifted by `offset`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cycle {
    value: usize,
    modulus: usize,
    offset: usize,
}

impl Cycle {
    /// A zero modulus is treated as 1.
    pub fn new(start: usize, modulus: usize, offset: usize) -> Self {
        let modulus = modulus.max(1);

        Self {
            value: start % modulus,
            modulus,
            offset,
        }
    }

    pub fn modulus(&self) -> usize {
        self.modulus
    }

    pub fn cycle_up(&mut self) {
        self.value += 1;

        if self.value == self.modulus {
            self.value = 0;
        }
    }

    pub fn cycle_down(&mut self) {
        if self.value == 0 {
            self.value = self.modulus;
        }

        self.value -= 1;
    }

    pub fn get(&self) -> usize {
        self.value + self.offset
    }
}

/// Frame selector for an animated tile type.
///
/// Every `period` calls to [`tick`](Self::tick) the frame index moves on by
/// one, wrapping after the last frame. Ticks received while paused are not
/// counted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpriteCycler {
    frames: Cycle,
    ticks_since_advance: usize,
    period: usize,
    paused: bool,
}

impl SpriteCycler {
    pub fn new(frame_count: usize, period: usize) -> Self {
        Self {
            frames: Cycle::new(0, frame_count, 0),
            ticks_since_advance: 0,
            period: period.max(1),
            paused: false,
        }
    }

    pub fn frame_count(&self) -> usize {
        self.frames.modulus()
    }

    pub fn period(&self) -> usize {
        self.period
    }

    pub fn current_index(&self) -> usize {
        self.frames.get()
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Keeps the partial tick count so resuming continues where it left off.
    pub fn pause(&mut self, paused: bool) {
        self.paused = paused;
    }

    pub fn tick(&mut self) {
        if self.paused {
            return;
        }

        self.ticks_since_advance += 1;

        if self.ticks_since_advance >= self.period {
            self.ticks_since_advance = 0;
            self.frames.cycle_up();
        }
    }
}

impl Default for SpriteCycler {
    fn default() -> Self {
        Self::new(1, 60)
    }
}
