/// Iterator over the slot indexes visited for a pair of hashes.
///
/// The table capacity is a power of two and the step is odd, so the first `capacity` indexes
/// visit every slot exactly once.
pub struct Probe {
    start: u64,
    step: u64,
    mask: u64,
    index: u64,
}

impl Probe {
    pub fn new(capacity: usize, hashes: [u64; 2]) -> Self {
        debug_assert!(capacity.is_power_of_two());
        let mask = capacity as u64 - 1;
        Probe {
            start: hashes[0] & mask,
            step: (hashes[1] & mask) | 1,
            mask,
            index: 0,
        }
    }
}

impl Iterator for Probe {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        if self.index > self.mask {
            return None;
        }
        let offset = self.index.wrapping_mul(self.step);
        self.index += 1;
        Some((self.start.wrapping_add(offset) & self.mask) as usize)
    }
}
