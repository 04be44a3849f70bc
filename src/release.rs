/// Post-leave watch that drops the card's active look once the tilt is back
/// at rest. Re-entering the card ends the watch.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ReleaseWatch {
    #[default]
    Idle,
    Watching,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReleasePoll {
    /// Back at rest: remove the active class.
    Release,
    /// Still returning: poll again next frame.
    Again,
    /// No leave in progress.
    Stop,
}

impl ReleaseWatch {
    #[inline]
    pub fn leave(&mut self) {
        *self = Self::Watching;
    }

    /// Ends the watch. Returns whether one was running.
    #[inline]
    pub fn enter(&mut self) -> bool {
        std::mem::take(self) == Self::Watching
    }

    pub fn poll(&mut self, released: bool) -> ReleasePoll {
        match self {
            Self::Idle => ReleasePoll::Stop,
            Self::Watching if released => {
                *self = Self::Idle;
                ReleasePoll::Release
            }
            Self::Watching => ReleasePoll::Again,
        }
    }
}
