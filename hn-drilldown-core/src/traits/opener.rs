//! External resource opener Trait

/// Opens a URL outside the application (e.g. the system browser)
///
/// Fire-and-forget: failures are the implementation's to log.
pub trait ExternalOpener {
    fn open_external(&self, url: &str);
}
