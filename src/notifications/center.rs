use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Weak};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::observable::{Observable, Subscription};

/// How long a notification stays up unless told otherwise.
pub const DEFAULT_DURATION: Duration = Duration::from_millis(3000);

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    Success,
    Error,
    Warning,
    #[default]
    Info,
}

impl NotificationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Info => "info",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "success" => Some(Self::Success),
            "error" => Some(Self::Error),
            "warning" => Some(Self::Warning),
            "info" => Some(Self::Info),
            _ => None,
        }
    }
}

/// Display mode. Toasts dismiss themselves; popups can offer a retry action.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum NotificationMode {
    #[default]
    Toast,
    Popup,
}

impl NotificationMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Toast => "toast",
            Self::Popup => "popup",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "toast" => Some(Self::Toast),
            "popup" => Some(Self::Popup),
            _ => None,
        }
    }
}

pub type RetryCallback = Arc<dyn Fn() + Send + Sync>;

#[derive(Clone)]
pub struct Notification {
    pub id: u64,
    pub message: String,
    pub kind: NotificationKind,
    pub mode: NotificationMode,
    pub on_retry: Option<RetryCallback>,
}

impl Notification {
    pub fn can_retry(&self) -> bool {
        self.on_retry.is_some()
    }

    /// Run the retry action. Returns `false` if there is none.
    pub fn retry(&self) -> bool {
        match &self.on_retry {
            Some(callback) => {
                callback();
                true
            }
            None => false,
        }
    }
}

impl fmt::Debug for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Notification")
            .field("id", &self.id)
            .field("message", &self.message)
            .field("kind", &self.kind)
            .field("mode", &self.mode)
            .field("on_retry", &self.can_retry())
            .finish()
    }
}

/// Input for [`NotificationCenter::add_with`].
#[derive(Clone)]
pub struct NewNotification {
    pub message: String,
    pub kind: NotificationKind,
    pub mode: NotificationMode,
    /// Zero keeps the notification until it is removed by hand.
    pub duration: Duration,
    pub on_retry: Option<RetryCallback>,
}

impl NewNotification {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: NotificationKind::default(),
            mode: NotificationMode::default(),
            duration: DEFAULT_DURATION,
            on_retry: None,
        }
    }

    pub fn kind(mut self, kind: NotificationKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn mode(mut self, mode: NotificationMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    pub fn persistent(self) -> Self {
        self.duration(Duration::ZERO)
    }

    pub fn on_retry(mut self, callback: impl Fn() + Send + Sync + 'static) -> Self {
        self.on_retry = Some(Arc::new(callback));
        self
    }
}

/// Owner of the notification list and its id sequence.
///
/// Cloning yields another handle to the same list. Ids start at 1 and are
/// never reused within a center.
#[derive(Clone, Default)]
pub struct NotificationCenter {
    inner: Arc<Inner>,
}

#[derive(Default)]
struct Inner {
    queue: Observable<Vec<Notification>>,
    last_id: AtomicU64,
}

impl Inner {
    fn remove(&self, id: u64) -> bool {
        self.queue.update_if(|list| {
            let before = list.len();
            list.retain(|n| n.id != id);
            list.len() != before
        })
    }
}

impl NotificationCenter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Post an info toast that expires after [`DEFAULT_DURATION`].
    pub fn add(&self, message: impl Into<String>) -> u64 {
        self.add_with(NewNotification::new(message))
    }

    /// Append a notification and return its id.
    ///
    /// A non-zero duration schedules its removal on the current tokio
    /// runtime. Outside a runtime the notification stays until removed.
    pub fn add_with(&self, notification: NewNotification) -> u64 {
        let NewNotification {
            message,
            kind,
            mode,
            duration,
            on_retry,
        } = notification;

        let id = self.inner.last_id.fetch_add(1, Ordering::Relaxed) + 1;

        self.inner.queue.update(|list| {
            list.push(Notification {
                id,
                message,
                kind,
                mode,
                on_retry,
            })
        });
        tracing::debug!("Added {} notification {}", kind.as_str(), id);

        if !duration.is_zero() {
            self.schedule_removal(id, duration);
        }

        id
    }

    /// Remove a notification. Returns `false` if it was already gone.
    pub fn remove(&self, id: u64) -> bool {
        let removed = self.inner.remove(id);
        if removed {
            tracing::debug!("Removed notification {}", id);
        }
        removed
    }

    /// Snapshot of the current notifications in display order.
    pub fn notifications(&self) -> Vec<Notification> {
        self.inner.queue.get()
    }

    pub fn contains(&self, id: u64) -> bool {
        self.inner.queue.with(|list| list.iter().any(|n| n.id == id))
    }

    pub fn len(&self) -> usize {
        self.inner.queue.with(Vec::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn subscribe(&self) -> Subscription<Vec<Notification>> {
        self.inner.queue.subscribe()
    }

    fn schedule_removal(&self, id: u64, after: Duration) {
        let Ok(handle) = tokio::runtime::Handle::try_current() else {
            tracing::warn!("No async runtime; notification {} will not expire", id);
            return;
        };

        // Weak so pending timers don't keep a dropped center alive.
        let inner: Weak<Inner> = Arc::downgrade(&self.inner);
        handle.spawn(async move {
            tokio::time::sleep(after).await;
            if let Some(inner) = inner.upgrade() {
                if inner.remove(id) {
                    tracing::debug!("Notification {} expired", id);
                }
            }
        });
    }
}

impl fmt::Debug for NotificationCenter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NotificationCenter")
            .field("notifications", &self.len())
            .field("last_id", &self.inner.last_id.load(Ordering::Relaxed))
            .finish()
    }
}
