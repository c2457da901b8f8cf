//! Full lifecycle test against the live mock server.
//!
//! # Design
//! Starts the mock server on a random port, then exercises every core client
//! operation over real HTTP using ureq. Validates that the core's request
//! building and response parsing work end-to-end with the actual server.

use todolists_core::{ApiError, HttpMethod, HttpResponse, ListClient};

/// Execute an `HttpRequest` using ureq and return an `HttpResponse`.
///
/// Disables ureq's automatic status-code-as-error behavior so 4xx/5xx
/// responses are returned as data rather than `Err`, letting the core
/// client handle status interpretation.
fn execute(req: todolists_core::HttpRequest) -> HttpResponse {
    let agent = ureq::Agent::config_builder()
        .http_status_as_error(false)
        .build()
        .new_agent();

    let mut response = match req.method {
        HttpMethod::Get => agent.get(&req.url).call(),
        HttpMethod::Delete => agent.delete(&req.url).call(),
        HttpMethod::Post => agent.post(&req.url).send_empty(),
    }
    .expect("HTTP transport error");

    let status = response.status().as_u16();
    let body = response.body_mut().read_to_string().unwrap_or_default();

    HttpResponse { status, body }
}

#[test]
fn list_and_item_lifecycle() {
    // Step 1: start mock server on a random port.
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

    let client = ListClient::new(&format!("http://{addr}"));

    // Step 2: all lists — empty store answers null, parsed as empty.
    let req = client.build_all_lists();
    let lists = client.parse_all_lists(execute(req)).unwrap();
    assert!(lists.is_empty(), "expected empty store");

    // Step 3: create a list.
    let req = client.build_create_list("Groceries");
    let created = client.parse_create_list(execute(req)).unwrap();
    assert_eq!(created.name, "Groceries");
    assert!(!created.uuid.is_empty());
    let list_id = created.uuid.clone();

    // Step 4: all lists — one summary.
    let req = client.build_all_lists();
    let lists = client.parse_all_lists(execute(req)).unwrap();
    assert_eq!(lists.len(), 1);
    assert_eq!(lists[0], created);

    // Step 5: detail of the fresh list — empty collection (`{}` on the wire).
    let req = client.build_get_list(&list_id);
    let detail = client.parse_get_list(execute(req)).unwrap();
    assert_eq!(detail.name, "Groceries");
    assert!(detail.items.items.is_empty());

    // Step 6: add an item with text that needs escaping.
    let req = client.build_add_item(&list_id, "buy milk & eggs");
    let detail = client.parse_add_item(execute(req)).unwrap();
    assert_eq!(detail.items.items.len(), 1);
    assert_eq!(detail.items.items[0].text, "buy milk & eggs");
    assert_eq!(detail.items.total, 1);
    let item_id = detail.items.items[0].uuid.clone();

    // Step 7: add a second item — order preserved.
    let req = client.build_add_item(&list_id, "walk dog");
    let detail = client.parse_add_item(execute(req)).unwrap();
    assert_eq!(detail.items.items.len(), 2);
    assert_eq!(detail.items.items[1].text, "walk dog");

    // Step 8: edit the first item.
    let req = client.build_edit_item(&list_id, &item_id, "buy oat milk");
    let detail = client.parse_edit_item(execute(req)).unwrap();
    assert_eq!(detail.items.items[0].text, "buy oat milk");
    assert_eq!(detail.items.total, 2);

    // Step 9: delete the first item — server returns the shrunk detail.
    let req = client.build_delete_item(&list_id, &item_id);
    let detail = client.parse_delete_item(execute(req)).unwrap();
    assert_eq!(detail.items.items.len(), 1);
    assert!(detail.items.items.iter().all(|i| i.uuid != item_id));

    // Step 10: delete the item again — NotFound.
    let req = client.build_delete_item(&list_id, &item_id);
    let err = client.parse_delete_item(execute(req)).unwrap_err();
    assert!(matches!(err, ApiError::NotFound));

    // Step 11: delete the list — remaining summaries (none).
    let req = client.build_delete_list(&list_id);
    let remaining = client.parse_delete_list(execute(req)).unwrap();
    assert!(remaining.is_empty());

    // Step 12: detail after delete — NotFound.
    let req = client.build_get_list(&list_id);
    let err = client.parse_get_list(execute(req)).unwrap_err();
    assert!(matches!(err, ApiError::NotFound));

    // Step 13: create with an empty name — server rejects with 422.
    let req = client.build_create_list("");
    let err = client.parse_create_list(execute(req)).unwrap_err();
    assert!(matches!(err, ApiError::Server { status: 422, .. }));
}
