//! Dialog Overlay
//!
//! In-page confirmation prompt and toast notices, rendered by `DialogHost`.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use futures::channel::oneshot;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::collaborators::{Confirmation, ConfirmationPrompt, Notice, Notifier};

/// A notice currently on screen
#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub notice: Notice,
}

/// Shared overlay state
#[derive(Clone)]
pub struct Overlay {
    /// Question currently asked, if any
    pub prompt: RwSignal<Option<Confirmation>>,
    pub toasts: RwSignal<Vec<Toast>>,
    reply: Arc<Mutex<Option<oneshot::Sender<bool>>>>,
    next_toast: Arc<AtomicU64>,
    notice_timeout_ms: u32,
}

impl Overlay {
    pub fn new(notice_timeout_ms: u32) -> Self {
        Self {
            prompt: RwSignal::new(None),
            toasts: RwSignal::new(Vec::new()),
            reply: Arc::new(Mutex::new(None)),
            next_toast: Arc::new(AtomicU64::new(1)),
            notice_timeout_ms,
        }
    }

    /// Resolve the pending prompt
    pub fn answer(&self, confirmed: bool) {
        let sender = self.reply.lock().ok().and_then(|mut reply| reply.take());
        self.prompt.set(None);
        if let Some(sender) = sender {
            let _ = sender.send(confirmed);
        }
    }

    pub fn dismiss(&self, id: u64) {
        self.toasts.update(|toasts| toasts.retain(|t| t.id != id));
    }
}

#[async_trait(?Send)]
impl ConfirmationPrompt for Overlay {
    async fn confirm(&self, request: Confirmation) -> bool {
        let (sender, receiver) = oneshot::channel();
        // A prompt replaced by a newer one resolves as declined
        if let Ok(mut reply) = self.reply.lock() {
            *reply = Some(sender);
        }
        self.prompt.set(Some(request));
        receiver.await.unwrap_or(false)
    }
}

impl Notifier for Overlay {
    fn notify(&self, notice: Notice) {
        let id = self.next_toast.fetch_add(1, Ordering::Relaxed);
        let sticky = notice.is_sticky();
        self.toasts.update(|toasts| toasts.push(Toast { id, notice }));

        if !sticky {
            let toasts = self.toasts;
            let timeout = self.notice_timeout_ms;
            spawn_local(async move {
                TimeoutFuture::new(timeout).await;
                toasts.try_update(|toasts| toasts.retain(|t| t.id != id));
            });
        }
    }
}
