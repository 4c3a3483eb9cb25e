//! Network availability as reported by the host runtime.

/// Reports whether the host currently believes it has network access.
///
/// Read once when connectivity tracking starts; later changes arrive as
/// explicit online/offline signals.
pub trait NetworkStatus {
    fn is_online(&self) -> bool;
}

/// A status fixed at construction, for hosts that learn availability from
/// configuration or a command-line flag.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FixedNetworkStatus(pub bool);

impl NetworkStatus for FixedNetworkStatus {
    fn is_online(&self) -> bool {
        self.0
    }
}

impl<N: NetworkStatus + ?Sized> NetworkStatus for &N {
    fn is_online(&self) -> bool {
        (**self).is_online()
    }
}
