//! Shared test utilities

#![allow(dead_code)]

pub mod fixtures;
pub mod mock_api;

pub use fixtures::*;
pub use mock_api::MockGrantsApi;

use grants_admin::report::{Navigator, Notification, Notifier, Variant};
use std::sync::Mutex;

/// Notifier that keeps every notification for later assertions
#[derive(Default)]
pub struct RecordingNotifier {
    notifications: Mutex<Vec<Notification>>,
}

impl RecordingNotifier {
    pub fn all(&self) -> Vec<Notification> {
        self.notifications.lock().unwrap().clone()
    }

    /// The only notification emitted; fails if there were zero or several
    pub fn single(&self) -> Notification {
        let all = self.all();
        assert_eq!(all.len(), 1, "expected exactly one notification, got: {all:?}");
        all[0].clone()
    }

    pub fn assert_single(&self, title: &str, description: &str, variant: Variant) {
        let n = self.single();
        assert_eq!(n.title, title);
        assert_eq!(n.description, description);
        assert_eq!(n.variant, variant);
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notification: Notification) {
        self.notifications.lock().unwrap().push(notification);
    }
}

/// Navigator that records requested routes
#[derive(Default)]
pub struct RecordingNavigator {
    routes: Mutex<Vec<String>>,
}

impl RecordingNavigator {
    pub fn routes(&self) -> Vec<String> {
        self.routes.lock().unwrap().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn go_to(&self, path: &str) {
        self.routes.lock().unwrap().push(path.to_string());
    }
}
