/// Decorative status lines shown while a generation request is in flight.
/// Rotation is driven by a fixed timer, not by actual request progress.
pub const LOADING_MESSAGES: [&str; 6] = [
    "Connecting to the space-time energy field...",
    "Reading the local geomagnetic grid...",
    "Decoding the innate five-element chart...",
    "Simulating stem-and-branch interactions...",
    "Drafting the pitfall guide...",
    "Condensing energy...",
];

/// Cycles through [`LOADING_MESSAGES`] in order, wrapping around.
#[derive(Debug, Default)]
pub struct LoadingCarousel {
    index: usize,
}

impl LoadingCarousel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> &'static str {
        LOADING_MESSAGES[self.index]
    }

    /// Advance to the next message and return it.
    pub fn advance(&mut self) -> &'static str {
        self.index = (self.index + 1) % LOADING_MESSAGES.len();
        self.current()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rotation_follows_list_order_and_wraps() {
        let mut carousel = LoadingCarousel::new();
        assert_eq!(carousel.current(), LOADING_MESSAGES[0]);

        for expected in LOADING_MESSAGES.iter().skip(1) {
            assert_eq!(carousel.advance(), *expected);
        }
        // Wrap-around back to the first message.
        assert_eq!(carousel.advance(), LOADING_MESSAGES[0]);
    }
}
