/// 32-bit wrapping string hash over UTF-16 code units (`h = c + 31 * h`).
pub fn seed_hash(seed: &str) -> i32 {
    seed.encode_utf16().fold(0i32, |hash, unit| {
        (unit as i32).wrapping_add(hash.wrapping_shl(5).wrapping_sub(hash))
    })
}

/// Xorshift generator seeded from a string. The same seed always yields the
/// same sequence, which is what makes "today's challenges" stable for a day.
#[derive(Debug, Clone)]
pub struct SeededRandom {
    state: i32,
}

impl SeededRandom {
    pub fn new(seed: &str) -> Self {
        Self {
            state: seed_hash(seed),
        }
    }

    /// Next value in `[0, 1]`. Both ends are reachable.
    pub fn next_f64(&mut self) -> f64 {
        let mut h = self.state;
        h ^= h.wrapping_shl(13);
        h ^= h >> 17;
        h ^= h.wrapping_shl(5);
        self.state = h;
        (h as u32) as f64 / u32::MAX as f64
    }
}
