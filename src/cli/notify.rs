//! Terminal renditions of notifications and navigation

use crate::cli::style::{Stylize, arrow, toast_icon};
use anstream::{eprintln, println};
use grants_admin::report::{Navigator, Notification, Notifier, Variant};

/// Prints notifications as toasts; destructive ones go to stderr
pub struct CliNotifier;

impl Notifier for CliNotifier {
    fn notify(&self, notification: Notification) {
        match notification.variant {
            Variant::Default => {
                println!(
                    "{} {}: {}",
                    toast_icon(notification.variant),
                    notification.title.emphasis(),
                    notification.description
                );
            }
            Variant::Destructive => {
                eprintln!(
                    "{} {}: {}",
                    toast_icon(notification.variant),
                    notification.title.error(),
                    notification.description
                );
            }
        }
    }
}

/// Prints the route the user is sent to
pub struct CliNavigator;

impl Navigator for CliNavigator {
    fn go_to(&self, path: &str) {
        println!("{} {}", arrow(), path.accent());
    }
}
