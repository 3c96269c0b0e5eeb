//! Log-backed notifier

use rolodex_core::Notifier;
use rolodex_domain::NotifyKind;
use tracing::{error, info, warn};

/// Notifier that routes operation outcomes to the log.
///
/// Stands in wherever no interactive surface is attached, keeping the
/// directory's reporting visible in server and test environments.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, kind: NotifyKind, message: &str) {
        match kind {
            NotifyKind::Error => error!(target: "rolodex::notify", "{message}"),
            NotifyKind::Warning => warn!(target: "rolodex::notify", "{message}"),
            NotifyKind::Success | NotifyKind::Info => {
                info!(target: "rolodex::notify", "{message}");
            }
        }
    }
}
