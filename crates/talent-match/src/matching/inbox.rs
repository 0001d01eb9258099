use serde::Serialize;

use super::domain::{CompanyId, Notification};

/// A company's notifications, newest first, split by read state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Inbox<'a> {
    pub unread: Vec<&'a Notification>,
    pub read: Vec<&'a Notification>,
}

impl Inbox<'_> {
    pub fn unread_count(&self) -> usize {
        self.unread.len()
    }

    pub fn is_empty(&self) -> bool {
        self.unread.is_empty() && self.read.is_empty()
    }
}

/// Builds the inbox for `company_id`. Undated notifications sort after dated ones.
pub fn company_inbox(company_id: CompanyId, notifications: &[Notification]) -> Inbox<'_> {
    let mut own: Vec<&Notification> = notifications
        .iter()
        .filter(|notification| notification.company_id == Some(company_id))
        .collect();
    own.sort_by(|left, right| right.created_at.cmp(&left.created_at));

    let (read, unread): (Vec<&Notification>, Vec<&Notification>) =
        own.into_iter().partition(|notification| notification.is_read);

    Inbox { unread, read }
}
