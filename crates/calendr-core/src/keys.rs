/// Terminal and toolkit independent key vocabulary understood by the
/// engine and the overlay pickers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavKey {
    ArrowLeft,
    ArrowRight,
    ArrowUp,
    ArrowDown,
    Home,
    End,
    PageUp,
    PageDown,
    Enter,
    Space,
    Escape,
    /// recentre on the current date
    Today,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyPress {
    pub key: NavKey,
    /// modifier held: pages by year instead of by month
    pub shift: bool,
}

impl KeyPress {
    pub fn new(key: NavKey) -> Self {
        Self { key, shift: false }
    }

    pub fn shifted(key: NavKey) -> Self {
        Self { key, shift: true }
    }
}

impl From<NavKey> for KeyPress {
    fn from(key: NavKey) -> Self {
        Self::new(key)
    }
}
