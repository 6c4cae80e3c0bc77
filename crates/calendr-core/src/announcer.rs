/// Accessibility live-region text.
/// Each announcement bumps a generation counter; a clear request only takes
/// effect for the generation that produced the current text, so a newer
/// announcement simply overwrites an older pending one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Announcer {
    message: Option<String>,
    generation: u64,
}

impl Announcer {
    pub fn announce(&mut self, message: impl Into<String>) -> u64 {
        self.generation = self.generation.wrapping_add(1);
        self.message = Some(message.into());
        log::trace!("announce #{}: {:?}", self.generation, self.message);
        self.generation
    }

    /// Returns true when the text was cleared
    pub fn clear(&mut self, generation: u64) -> bool {
        if generation == self.generation && self.message.is_some() {
            self.message = None;
            true
        } else {
            false
        }
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}
