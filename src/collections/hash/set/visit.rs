use derive_more::IsVariant;

/// The signal returned by a visitor passed to [`HashSet::range`](super::HashSet::range), deciding
/// whether iteration carries on to the next element.
///
/// Visitors may also return a [`bool`], where `true` means [`Visit::Stop`], or `()`, which always
/// means [`Visit::Continue`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, IsVariant)]
pub enum Visit {
    /// Move on to the next element, if there is one.
    #[default]
    Continue,
    /// Halt immediately, without visiting any remaining elements.
    Stop,
}

impl From<bool> for Visit {
    fn from(stop: bool) -> Self {
        if stop {
            Visit::Stop
        } else {
            Visit::Continue
        }
    }
}

impl From<()> for Visit {
    fn from(_: ()) -> Self {
        Visit::Continue
    }
}
