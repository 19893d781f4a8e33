//! Search flow against the live mock server.
//!
//! # Design
//! Starts the mock server on a random port, then drives the widget over real
//! HTTP using a ureq-backed `Transport`. Validates that request building and
//! response classification agree with the server's actual wire format.

use cocktail_core::{
    CocktailClient, CocktailSearch, Completion, ErrorKind, HttpRequest, HttpResponse, Transport,
    TransportError,
};

/// Runs each request on a fresh ureq agent. Status codes come back as data.
struct Ureq;

impl Transport for Ureq {
    fn execute(&self, req: &HttpRequest) -> Result<HttpResponse, TransportError> {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .new_agent();
        let mut response = agent
            .get(&req.url)
            .call()
            .map_err(|e| TransportError(e.to_string()))?;
        let status = response.status().as_u16();
        let body = response.body_mut().read_to_string().unwrap_or_default();
        Ok(HttpResponse::new(status, body))
    }
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

#[test]
fn search_lifecycle() {
    let addr = start_server();
    let transport = Ureq;
    let mut widget = CocktailSearch::new(CocktailClient::new(&format!(
        "http://{addr}{}",
        mock_server::API_PREFIX
    )));

    // Step 1: type "margarita" and search.
    widget.set_term("margarita");
    assert_eq!(
        widget.search(&transport),
        Some(Completion::Loaded { count: 2 })
    );

    // Step 2: both cards collapsed, long one truncated.
    let view = widget.view();
    assert_eq!(view.cards[0].name, "Margarita");
    assert_eq!(view.cards[1].name, "Blue Margarita");
    assert!(view.cards.iter().all(|c| !c.expanded));
    assert!(view.cards[0].text.ends_with("..."));

    // Step 3: expand the first card only.
    let first = view.cards[0].id.clone();
    widget.toggle(&first);
    let view = widget.view();
    assert!(view.cards[0].expanded);
    assert!(view.cards[0].text.ends_with("carefully pour into the glass."));
    assert!(!view.cards[1].expanded);

    // Step 4: a term with spaces round-trips through percent-encoding.
    widget.set_term("old fashioned");
    assert_eq!(
        widget.search(&transport),
        Some(Completion::Loaded { count: 1 })
    );
    assert_eq!(widget.view().cards[0].id, "11001");

    // Step 5: no match clears the cards.
    widget.set_term("zzzz");
    assert_eq!(widget.search(&transport), Some(Completion::NoResults));
    let view = widget.view();
    assert!(view.cards.is_empty());
    assert_eq!(view.error.unwrap().kind, ErrorKind::NoResults);
}

#[test]
fn wrong_endpoint_is_request_failure_and_keeps_results() {
    let addr = start_server();
    let transport = Ureq;

    let mut widget = CocktailSearch::new(CocktailClient::new(&format!(
        "http://{addr}{}",
        mock_server::API_PREFIX
    )));
    widget.set_term("mojito");
    widget.search(&transport);
    let loaded = widget.state().drinks().to_vec();
    assert_eq!(loaded.len(), 1);

    // A client pointed at a path the server does not serve gets 404s.
    let mut broken = CocktailSearch::new(CocktailClient::new(&format!("http://{addr}/nope")));
    broken.set_term("mojito");
    assert_eq!(broken.search(&transport), Some(Completion::Failed));
    assert!(broken.state().drinks().is_empty());

    widget.set_term("mojito");
    let pending = widget.begin_search().unwrap();
    let failed = transport.execute(&HttpRequest {
        url: format!("http://{addr}/nope/search.php?s=mojito"),
        ..pending.request
    });
    assert_eq!(
        widget.complete_search(pending.seq, failed),
        Completion::Failed
    );
    assert_eq!(widget.state().drinks(), loaded.as_slice());
    assert_eq!(
        widget.view().error.unwrap().kind,
        ErrorKind::RequestFailed
    );
}

#[test]
fn unreachable_host_is_request_failure() {
    // Bind then drop to get a port nobody is listening on.
    let addr = std::net::TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap();
    let mut widget = CocktailSearch::new(CocktailClient::new(&format!("http://{addr}")));
    widget.set_term("margarita");
    assert_eq!(
        widget.search(&Ureq),
        Some(Completion::Failed)
    );
}
