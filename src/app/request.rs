//! No-WASM application implementation
//!
//! Every mutation goes through the same cycle the board has always used:
//! submit, surface the server's message, and on success reload the whole
//! listing rather than patching the view in place. Activity counts are small
//! enough that the full reload is the simpler and safer choice.

use std::time::Instant;

use crate::interface::BoardApi;
use crate::message::{MessageArea, MessageKind};
use crate::model::dtos::RosterParams;
use crate::normalize::normalize_activities;
use crate::view::{render_board, BoardView};

pub const SIGNUP_OK_FALLBACK: &str = "Signed up successfully";
pub const SIGNUP_ERR_FALLBACK: &str = "An error occurred";
pub const SIGNUP_NETWORK_ERR: &str = "Failed to sign up. Please try again.";
pub const UNREGISTER_OK_FALLBACK: &str = "Unregistered successfully";
pub const UNREGISTER_ERR_FALLBACK: &str = "Failed to unregister";
pub const UNREGISTER_NETWORK_ERR: &str = "Failed to unregister. Please try again.";

/// Outcome of a listing load. `Empty` and `Failed` are both recoverable: the
/// front end offers the sample dataset as a fallback for either.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadView {
    Board(BoardView),
    Empty,
    Failed { status: Option<u16> },
}

/// Fetch the listing, normalize it and rebuild the board view.
///
/// Never returns an error: a non-2xx status carries the code for display, and
/// transport or decode failures collapse to `Failed { status: None }` after
/// being logged.
pub async fn load_activities(api: &impl BoardApi) -> LoadView {
    match api.list_activities().await {
        Ok(reply) if !reply.ok => LoadView::Failed {
            status: Some(reply.status),
        },
        Ok(reply) => {
            let activities = normalize_activities(&reply.body);
            if activities.is_empty() {
                LoadView::Empty
            } else {
                LoadView::Board(render_board(&activities))
            }
        }
        Err(e) => {
            tracing::error!(error = %e, "error fetching activities");
            LoadView::Failed { status: None }
        }
    }
}

/// Submit a signup and surface the outcome in the message area.
///
/// Returns the reloaded board on success so the caller can replace its view
/// and clear the form; `None` means the message area carries an error and
/// nothing else changed.
pub async fn sign_up(
    api: &impl BoardApi,
    area: &mut MessageArea,
    params: RosterParams<'_>,
    now: Instant,
) -> Option<LoadView> {
    match api.sign_up(params).await {
        Ok(reply) if reply.ok => {
            let text = reply.message().unwrap_or(SIGNUP_OK_FALLBACK).to_string();
            area.show(MessageKind::Success, text, now);
            Some(load_activities(api).await)
        }
        Ok(reply) => {
            let text = reply.detail().unwrap_or(SIGNUP_ERR_FALLBACK).to_string();
            area.show(MessageKind::Error, text, now);
            None
        }
        Err(e) => {
            tracing::error!(error = %e, "error signing up");
            area.show(MessageKind::Error, SIGNUP_NETWORK_ERR, now);
            None
        }
    }
}

/// Submit an unregister, guarded by a confirmation callback.
///
/// Declining the confirmation is a silent no-op: no request is made and the
/// message area is untouched. Otherwise the flow mirrors [`sign_up`].
pub async fn unregister(
    api: &impl BoardApi,
    area: &mut MessageArea,
    params: RosterParams<'_>,
    confirm: impl FnOnce() -> bool,
    now: Instant,
) -> Option<LoadView> {
    if !confirm() {
        return None;
    }

    match api.unregister(params).await {
        Ok(reply) if reply.ok => {
            let text = reply.message().unwrap_or(UNREGISTER_OK_FALLBACK).to_string();
            area.show(MessageKind::Success, text, now);
            Some(load_activities(api).await)
        }
        Ok(reply) => {
            let text = reply.detail().unwrap_or(UNREGISTER_ERR_FALLBACK).to_string();
            area.show(MessageKind::Error, text, now);
            None
        }
        Err(e) => {
            tracing::error!(error = %e, "error unregistering participant");
            area.show(MessageKind::Error, UNREGISTER_NETWORK_ERR, now);
            None
        }
    }
}
