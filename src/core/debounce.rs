//! Throttled title lookup.
//!
//! Typing in the URL field dispatches `update_url` on every keystroke, and
//! each well-formed value wants a `/views/title` lookup. Hitting the server
//! per keystroke is wasteful, so lookups are throttled: the first call in a
//! burst fires immediately, calls inside the 300 ms window coalesce, and one
//! trailing fire executes with the last URL seen when the window closes.
//!
//! The throttle state (`last_fire`, `pending_url`) lives in this struct,
//! constructed once and owned by the composition root — not in a hidden
//! module global. There is no cancellation: a superseded lookup that comes
//! back late still dispatches its action (the reducer's guards make that
//! harmless).

use std::sync::mpsc::Sender;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use log::{debug, warn};

use crate::api::client::ApiClient;
use crate::core::action::Action;

/// One lookup per window per burst, trailing edge included.
pub const TITLE_THROTTLE_WINDOW: Duration = Duration::from_millis(300);

#[derive(Default)]
struct ThrottleState {
    last_fire: Option<Instant>,
    /// Most recent argument in the current burst, consumed by the trailing fire.
    pending_url: Option<String>,
    trailing_scheduled: bool,
}

/// Rate-limited dispatcher for `/views/title`.
pub struct DebouncedTitleLoader {
    client: Arc<ApiClient>,
    tx: Sender<Action>,
    window: Duration,
    state: Arc<Mutex<ThrottleState>>,
}

impl DebouncedTitleLoader {
    pub fn new(client: Arc<ApiClient>, tx: Sender<Action>) -> Self {
        Self::with_window(client, tx, TITLE_THROTTLE_WINDOW)
    }

    /// Custom window, used by tests to keep bursts short.
    pub fn with_window(client: Arc<ApiClient>, tx: Sender<Action>, window: Duration) -> Self {
        Self {
            client,
            tx,
            window,
            state: Arc::new(Mutex::new(ThrottleState::default())),
        }
    }

    /// Requests a title lookup for `url`.
    ///
    /// Fires immediately when the window has elapsed since the last fire;
    /// otherwise folds the call into the burst's single trailing fire.
    /// Must be called from within a tokio runtime.
    pub fn call(&self, url: &str) {
        let now = Instant::now();
        let mut state = self.state.lock().expect("throttle state poisoned");

        let window_elapsed = state
            .last_fire
            .is_none_or(|t| now.duration_since(t) >= self.window);

        if window_elapsed && !state.trailing_scheduled {
            state.last_fire = Some(now);
            drop(state);
            debug!("title lookup (leading): {url}");
            spawn_lookup(self.client.clone(), self.tx.clone(), url.to_string());
            return;
        }

        state.pending_url = Some(url.to_string());
        if state.trailing_scheduled {
            // A trailing fire is already on its way; it will pick up the
            // latest pending_url when it wakes.
            return;
        }
        state.trailing_scheduled = true;

        let wait = state
            .last_fire
            .map_or(self.window, |t| self.window.saturating_sub(now.duration_since(t)));
        drop(state);

        let client = self.client.clone();
        let tx = self.tx.clone();
        let throttle = self.state.clone();
        tokio::spawn(async move {
            tokio::time::sleep(wait).await;
            let url = {
                let mut state = throttle.lock().expect("throttle state poisoned");
                state.trailing_scheduled = false;
                state.last_fire = Some(Instant::now());
                state.pending_url.take()
            };
            if let Some(url) = url {
                debug!("title lookup (trailing): {url}");
                lookup(&client, &tx, &url).await;
            }
        });
    }
}

fn spawn_lookup(client: Arc<ApiClient>, tx: Sender<Action>, url: String) {
    tokio::spawn(async move {
        lookup(&client, &tx, &url).await;
    });
}

async fn lookup(client: &ApiClient, tx: &Sender<Action>, url: &str) {
    let action = match client.load_title(url).await {
        Ok(title) => Action::LoadTitleSuccess(title),
        Err(err) => {
            debug!("title lookup failed for {url}: {err}");
            Action::LoadTitleFailed(err)
        }
    };
    if tx.send(action).is_err() {
        warn!("title lookup result dropped: receiver gone");
    }
}
