//! `#[repr(C)]` types for the FFI boundary.
//!
//! # Design
//! Each type mirrors a core type with C-compatible representations:
//! `*mut c_char` instead of `String`, pointer + length instead of `Vec`, and
//! enums with explicit discriminants. Conversions live here to keep `lib.rs`
//! focused on the `extern "C"` surface.

use std::ffi::CString;
use std::os::raw::c_char;

use cocktail_core::{
    Card, CocktailSearch, Completion, ErrorKind, HttpMethod, HttpRequest, PendingSearch, View,
};

/// Opaque handle to a widget. C callers receive a pointer to this and pass
/// it back into every FFI function.
pub struct FfiWidget {
    pub(crate) inner: CocktailSearch,
}

/// Copy `s` into a heap C string. Interior NULs are dropped rather than
/// failing the whole conversion.
pub(crate) fn c_string(s: &str) -> *mut c_char {
    let bytes: Vec<u8> = s.bytes().filter(|&b| b != 0).collect();
    CString::new(bytes).unwrap_or_default().into_raw()
}

/// Free a string produced by `c_string`. Null is ignored.
pub(crate) fn free_c_string(s: *mut c_char) {
    if !s.is_null() {
        drop(unsafe { CString::from_raw(s) });
    }
}

/// Move a `Vec` onto the heap as pointer + length. Empty yields null.
fn leak_vec<T>(items: Vec<T>) -> (*mut T, u32) {
    if items.is_empty() {
        return (std::ptr::null_mut(), 0);
    }
    let len = items.len() as u32;
    let boxed = items.into_boxed_slice();
    (Box::into_raw(boxed) as *mut T, len)
}

/// Reclaim a pointer + length produced by `leak_vec`.
pub(crate) unsafe fn reclaim_vec<T>(ptr: *mut T, len: u32) -> Vec<T> {
    if ptr.is_null() || len == 0 {
        return Vec::new();
    }
    let slice = std::ptr::slice_from_raw_parts_mut(ptr, len as usize);
    unsafe { Box::from_raw(slice) }.into_vec()
}

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

/// HTTP method as a C enum.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FfiHttpMethod {
    Get = 0,
}

impl From<HttpMethod> for FfiHttpMethod {
    fn from(m: HttpMethod) -> Self {
        match m {
            HttpMethod::Get => FfiHttpMethod::Get,
        }
    }
}

/// A single HTTP header as a key-value pair of C strings.
#[repr(C)]
pub struct FfiHeader {
    pub key: *mut c_char,
    pub value: *mut c_char,
}

/// An HTTP request described as C-compatible plain data.
#[repr(C)]
pub struct FfiHttpRequest {
    pub method: FfiHttpMethod,
    pub url: *mut c_char,
    pub headers: *mut FfiHeader,
    pub headers_len: u32,
}

impl FfiHttpRequest {
    fn from_core(req: HttpRequest) -> Self {
        let headers: Vec<FfiHeader> = req
            .headers
            .iter()
            .map(|(k, v)| FfiHeader {
                key: c_string(k),
                value: c_string(v),
            })
            .collect();
        let (headers, headers_len) = leak_vec(headers);
        FfiHttpRequest {
            method: req.method.into(),
            url: c_string(&req.url),
            headers,
            headers_len,
        }
    }

    /// Free the strings and header array, not the struct itself.
    pub(crate) fn free_fields(&self) {
        free_c_string(self.url);
        for h in unsafe { reclaim_vec(self.headers, self.headers_len) } {
            free_c_string(h.key);
            free_c_string(h.value);
        }
    }
}

/// A search the host must execute, and the sequence number to report back.
#[repr(C)]
pub struct FfiPendingSearch {
    pub seq: u64,
    pub request: FfiHttpRequest,
}

impl FfiPendingSearch {
    pub(crate) fn from_core(pending: PendingSearch) -> *mut Self {
        Box::into_raw(Box::new(FfiPendingSearch {
            seq: pending.seq,
            request: FfiHttpRequest::from_core(pending.request),
        }))
    }
}

// ---------------------------------------------------------------------------
// Response input (caller-provided, not heap-allocated by us)
// ---------------------------------------------------------------------------

/// An HTTP response described as C-compatible plain data.
///
/// The C caller builds this on the stack after executing the request. The
/// FFI layer reads but never frees these fields.
#[repr(C)]
pub struct FfiHttpResponse {
    pub status: u16,
    pub body: *const c_char,
}

// ---------------------------------------------------------------------------
// Outcome and view types
// ---------------------------------------------------------------------------

/// What the widget did with a reported response.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FfiCompletion {
    Loaded = 0,
    NoResults = 1,
    Failed = 2,
    Stale = 3,
    NullArg = 4,
    Panic = 5,
}

impl From<Completion> for FfiCompletion {
    fn from(c: Completion) -> Self {
        match c {
            Completion::Loaded { .. } => FfiCompletion::Loaded,
            Completion::NoResults => FfiCompletion::NoResults,
            Completion::Failed => FfiCompletion::Failed,
            Completion::Stale => FfiCompletion::Stale,
        }
    }
}

#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FfiErrorKind {
    None = 0,
    NoResults = 1,
    RequestFailed = 2,
}

impl From<ErrorKind> for FfiErrorKind {
    fn from(kind: ErrorKind) -> Self {
        match kind {
            ErrorKind::NoResults => FfiErrorKind::NoResults,
            ErrorKind::RequestFailed => FfiErrorKind::RequestFailed,
        }
    }
}

/// One result card exposed to C.
#[repr(C)]
pub struct FfiCard {
    pub id: *mut c_char,
    pub name: *mut c_char,
    pub thumbnail: *mut c_char,
    pub image_alt: *mut c_char,
    pub text: *mut c_char,
    pub expanded: bool,
    pub toggle_label: *mut c_char,
    pub toggle_class: *mut c_char,
}

impl FfiCard {
    fn from_core(card: &Card) -> Self {
        FfiCard {
            id: c_string(&card.id),
            name: c_string(&card.name),
            thumbnail: c_string(&card.thumbnail),
            image_alt: c_string(&card.image_alt),
            text: c_string(&card.text),
            expanded: card.expanded,
            toggle_label: c_string(card.toggle_label),
            toggle_class: c_string(card.toggle_class),
        }
    }

    fn free_fields(&self) {
        for s in [
            self.id,
            self.name,
            self.thumbnail,
            self.image_alt,
            self.text,
            self.toggle_label,
            self.toggle_class,
        ] {
            free_c_string(s);
        }
    }
}

/// Everything a native shell needs to draw the widget.
///
/// `error_message` is null exactly when `error_kind` is `None`.
#[repr(C)]
pub struct FfiView {
    pub heading: *mut c_char,
    pub search_value: *mut c_char,
    pub placeholder: *mut c_char,
    pub button_label: *mut c_char,
    pub loading: bool,
    pub error_kind: FfiErrorKind,
    pub error_message: *mut c_char,
    pub cards: *mut FfiCard,
    pub cards_len: u32,
}

impl FfiView {
    pub(crate) fn from_core(view: &View) -> *mut Self {
        let (error_kind, error_message) = match &view.error {
            Some(failure) => (FfiErrorKind::from(failure.kind), c_string(&failure.message)),
            None => (FfiErrorKind::None, std::ptr::null_mut()),
        };
        let cards: Vec<FfiCard> = view.cards.iter().map(FfiCard::from_core).collect();
        let (cards, cards_len) = leak_vec(cards);
        Box::into_raw(Box::new(FfiView {
            heading: c_string(view.heading),
            search_value: c_string(&view.search_bar.value),
            placeholder: c_string(view.search_bar.placeholder),
            button_label: c_string(view.search_bar.button_label),
            loading: view.loading,
            error_kind,
            error_message,
            cards,
            cards_len,
        }))
    }

    pub(crate) fn free_fields(&self) {
        free_c_string(self.heading);
        free_c_string(self.search_value);
        free_c_string(self.placeholder);
        free_c_string(self.button_label);
        free_c_string(self.error_message);
        for card in unsafe { reclaim_vec(self.cards, self.cards_len) } {
            card.free_fields();
        }
    }
}
