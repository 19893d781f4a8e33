//! C-ABI wrapper around `cocktail-core`.
//!
//! # Overview
//! Lets a native UI shell drive the search widget without linking Rust's
//! serde or any HTTP stack. The shell executes the HTTP round-trip itself:
//! `cocktail_widget_begin_search` hands it a request, and
//! `cocktail_widget_complete_search` / `cocktail_widget_fail_search` report
//! what happened.
//!
//! # Design
//! - Every `extern "C"` function wraps its body in `catch_unwind` so panics
//!   never cross the FFI boundary.
//! - The widget is an opaque handle; the view is a fresh snapshot the caller
//!   frees with `cocktail_free_view`.
//! - The C caller owns every returned pointer and must call the matching
//!   `cocktail_free_*` / `cocktail_widget_free` to release it.

pub mod types;

use std::ffi::CStr;
use std::os::raw::c_char;
use std::panic::catch_unwind;

use cocktail_core::{CocktailClient, CocktailSearch, HttpResponse, TransportError};

use types::*;

/// Copy a caller-owned C string, replacing invalid UTF-8.
///
/// # Safety
/// `ptr` must be non-null and point to a NUL-terminated string that stays
/// valid for the duration of the call.
unsafe fn read_str(ptr: *const c_char) -> String {
    unsafe { CStr::from_ptr(ptr) }.to_string_lossy().into_owned()
}

// ---------------------------------------------------------------------------
// Widget lifecycle
// ---------------------------------------------------------------------------

/// Create a widget that searches the API rooted at `base_url`.
///
/// Returns null if `base_url` is null or if an internal panic occurs.
/// The caller must free the returned pointer with `cocktail_widget_free`.
#[unsafe(no_mangle)]
pub extern "C" fn cocktail_widget_new(base_url: *const c_char) -> *mut FfiWidget {
    catch_unwind(|| {
        if base_url.is_null() {
            return std::ptr::null_mut();
        }
        let client = CocktailClient::new(&unsafe { read_str(base_url) });
        Box::into_raw(Box::new(FfiWidget {
            inner: CocktailSearch::new(client),
        }))
    })
    .unwrap_or(std::ptr::null_mut())
}

/// Create a widget that searches the public TheCocktailDB API.
#[unsafe(no_mangle)]
pub extern "C" fn cocktail_widget_new_default() -> *mut FfiWidget {
    catch_unwind(|| {
        Box::into_raw(Box::new(FfiWidget {
            inner: CocktailSearch::new(CocktailClient::default()),
        }))
    })
    .unwrap_or(std::ptr::null_mut())
}

/// Free a widget. Safe to call with null.
#[unsafe(no_mangle)]
pub extern "C" fn cocktail_widget_free(widget: *mut FfiWidget) {
    if !widget.is_null() {
        let _ = catch_unwind(|| {
            drop(unsafe { Box::from_raw(widget) });
        });
    }
}

// ---------------------------------------------------------------------------
// Input and search
// ---------------------------------------------------------------------------

/// Replace the search text. Returns false if either argument is null.
#[unsafe(no_mangle)]
pub extern "C" fn cocktail_widget_set_term(widget: *mut FfiWidget, term: *const c_char) -> bool {
    catch_unwind(|| {
        if widget.is_null() || term.is_null() {
            return false;
        }
        let widget = unsafe { &mut *widget };
        widget.inner.set_term(unsafe { read_str(term) });
        true
    })
    .unwrap_or(false)
}

/// Start a search for the current term.
///
/// Returns null when the term is empty (nothing to do, state unchanged) or
/// `widget` is null. Otherwise the caller executes `request`, reports back
/// with `seq`, and frees the result with `cocktail_free_pending`.
#[unsafe(no_mangle)]
pub extern "C" fn cocktail_widget_begin_search(widget: *mut FfiWidget) -> *mut FfiPendingSearch {
    catch_unwind(|| {
        if widget.is_null() {
            return std::ptr::null_mut();
        }
        let widget = unsafe { &mut *widget };
        match widget.inner.begin_search() {
            Some(pending) => FfiPendingSearch::from_core(pending),
            None => std::ptr::null_mut(),
        }
    })
    .unwrap_or(std::ptr::null_mut())
}

/// Report the HTTP response for search `seq`. A null body reads as empty.
#[unsafe(no_mangle)]
pub extern "C" fn cocktail_widget_complete_search(
    widget: *mut FfiWidget,
    seq: u64,
    response: *const FfiHttpResponse,
) -> FfiCompletion {
    catch_unwind(|| {
        if widget.is_null() || response.is_null() {
            return FfiCompletion::NullArg;
        }
        let widget = unsafe { &mut *widget };
        let resp = unsafe { &*response };
        let body = if resp.body.is_null() {
            String::new()
        } else {
            unsafe { read_str(resp.body) }
        };
        widget
            .inner
            .complete_search(seq, Ok(HttpResponse::new(resp.status, body)))
            .into()
    })
    .unwrap_or(FfiCompletion::Panic)
}

/// Report that search `seq` never got a response. `message` may be null.
#[unsafe(no_mangle)]
pub extern "C" fn cocktail_widget_fail_search(
    widget: *mut FfiWidget,
    seq: u64,
    message: *const c_char,
) -> FfiCompletion {
    catch_unwind(|| {
        if widget.is_null() {
            return FfiCompletion::NullArg;
        }
        let widget = unsafe { &mut *widget };
        let message = if message.is_null() {
            "transport error".to_string()
        } else {
            unsafe { read_str(message) }
        };
        widget
            .inner
            .complete_search(seq, Err(TransportError(message)))
            .into()
    })
    .unwrap_or(FfiCompletion::Panic)
}

// ---------------------------------------------------------------------------
// Toggle and view
// ---------------------------------------------------------------------------

/// Flip a card between preview and full text.
///
/// Returns 1 if the card is now expanded, 0 if collapsed, -1 on a null
/// argument or panic.
#[unsafe(no_mangle)]
pub extern "C" fn cocktail_widget_toggle(widget: *mut FfiWidget, id: *const c_char) -> i32 {
    catch_unwind(|| {
        if widget.is_null() || id.is_null() {
            return -1;
        }
        let widget = unsafe { &mut *widget };
        i32::from(widget.inner.toggle(&unsafe { read_str(id) }))
    })
    .unwrap_or(-1)
}

/// Snapshot the current view. Free with `cocktail_free_view`.
#[unsafe(no_mangle)]
pub extern "C" fn cocktail_widget_view(widget: *const FfiWidget) -> *mut FfiView {
    catch_unwind(|| {
        if widget.is_null() {
            return std::ptr::null_mut();
        }
        let widget = unsafe { &*widget };
        FfiView::from_core(&widget.inner.view())
    })
    .unwrap_or(std::ptr::null_mut())
}

// ---------------------------------------------------------------------------
// Free functions
// ---------------------------------------------------------------------------

/// Free a pending search from `cocktail_widget_begin_search`. Safe with null.
#[unsafe(no_mangle)]
pub extern "C" fn cocktail_free_pending(pending: *mut FfiPendingSearch) {
    if pending.is_null() {
        return;
    }
    let _ = catch_unwind(|| {
        let pending = unsafe { Box::from_raw(pending) };
        pending.request.free_fields();
    });
}

/// Free a view from `cocktail_widget_view`. Safe with null.
#[unsafe(no_mangle)]
pub extern "C" fn cocktail_free_view(view: *mut FfiView) {
    if view.is_null() {
        return;
    }
    let _ = catch_unwind(|| {
        let view = unsafe { Box::from_raw(view) };
        view.free_fields();
    });
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
