//! Drive the C ABI the way a native shell would: the test plays the host,
//! executing each `FfiHttpRequest` with ureq against the mock server.

use std::ffi::{CStr, CString};
use std::os::raw::c_char;

use cocktail_ffi::types::{FfiCompletion, FfiErrorKind, FfiHttpResponse, FfiPendingSearch};
use cocktail_ffi::*;

fn c_str<'a>(p: *const c_char) -> &'a str {
    unsafe { CStr::from_ptr(p) }.to_str().unwrap()
}

fn start_server() -> std::net::SocketAddr {
    let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = std_listener.local_addr().unwrap();
    std_listener.set_nonblocking(true).unwrap();
    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async {
            let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
            mock_server::run(listener).await
        })
        .unwrap();
    });
    addr
}

/// Execute the pending request and report the outcome back to the widget.
fn execute(widget: *mut types::FfiWidget, pending: *mut FfiPendingSearch) -> FfiCompletion {
    let p = unsafe { &*pending };
    let agent = ureq::Agent::config_builder()
        .http_status_as_error(false)
        .build()
        .new_agent();
    let completion = match agent.get(c_str(p.request.url)).call() {
        Ok(mut response) => {
            let status = response.status().as_u16();
            let body = response.body_mut().read_to_string().unwrap_or_default();
            let body = CString::new(body).unwrap();
            let resp = FfiHttpResponse {
                status,
                body: body.as_ptr(),
            };
            cocktail_widget_complete_search(widget, p.seq, &resp)
        }
        Err(err) => {
            let msg = CString::new(err.to_string()).unwrap();
            cocktail_widget_fail_search(widget, p.seq, msg.as_ptr())
        }
    };
    cocktail_free_pending(pending);
    completion
}

#[test]
fn search_and_toggle_through_c_abi() {
    let addr = start_server();
    let url = CString::new(format!("http://{addr}{}", mock_server::API_PREFIX)).unwrap();
    let widget = cocktail_widget_new(url.as_ptr());

    let term = CString::new("margarita").unwrap();
    assert!(cocktail_widget_set_term(widget, term.as_ptr()));
    let pending = cocktail_widget_begin_search(widget);
    assert!(!pending.is_null());
    assert_eq!(execute(widget, pending), FfiCompletion::Loaded);

    let view = cocktail_widget_view(widget);
    let v = unsafe { &*view };
    assert_eq!(v.cards_len, 2);
    let cards = unsafe { std::slice::from_raw_parts(v.cards, v.cards_len as usize) };
    assert_eq!(c_str(cards[0].name), "Margarita");
    assert!(c_str(cards[0].text).ends_with("..."));
    let first_id = CString::new(c_str(cards[0].id)).unwrap();
    cocktail_free_view(view);

    assert_eq!(cocktail_widget_toggle(widget, first_id.as_ptr()), 1);
    let view = cocktail_widget_view(widget);
    let v = unsafe { &*view };
    let cards = unsafe { std::slice::from_raw_parts(v.cards, v.cards_len as usize) };
    assert!(cards[0].expanded);
    assert!(!cards[1].expanded);
    cocktail_free_view(view);

    let term = CString::new("no such drink").unwrap();
    cocktail_widget_set_term(widget, term.as_ptr());
    let pending = cocktail_widget_begin_search(widget);
    assert_eq!(execute(widget, pending), FfiCompletion::NoResults);

    let view = cocktail_widget_view(widget);
    let v = unsafe { &*view };
    assert_eq!(v.error_kind, FfiErrorKind::NoResults);
    assert_eq!(v.cards_len, 0);
    cocktail_free_view(view);

    cocktail_widget_free(widget);
}
