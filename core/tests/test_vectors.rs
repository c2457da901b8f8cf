//! Verify build/parse methods against JSON test vectors stored in
//! `test-vectors/`.
//!
//! Each vector file describes inputs, expected requests, simulated
//! responses, and expected parse results. Comparing deserialized values
//! (not raw strings) avoids false negatives from field-ordering
//! differences.

use todolists_core::{HttpMethod, HttpRequest, HttpResponse, ListClient, ListDetail, ListSummary};

const BASE_URL: &str = "http://localhost:8080";

fn client() -> ListClient {
    ListClient::new(BASE_URL)
}

/// Parse the method string from test vectors into `HttpMethod`.
fn parse_method(s: &str) -> HttpMethod {
    match s {
        "GET" => HttpMethod::Get,
        "POST" => HttpMethod::Post,
        "DELETE" => HttpMethod::Delete,
        other => panic!("unknown method: {other}"),
    }
}

fn cases(raw: &str) -> Vec<serde_json::Value> {
    let vectors: serde_json::Value = serde_json::from_str(raw).unwrap();
    vectors["cases"].as_array().unwrap().clone()
}

fn assert_request(name: &str, req: &HttpRequest, expected: &serde_json::Value) {
    assert_eq!(
        req.method,
        parse_method(expected["method"].as_str().unwrap()),
        "{name}: method"
    );
    assert_eq!(
        req.url,
        format!("{BASE_URL}{}", expected["path"].as_str().unwrap()),
        "{name}: url"
    );
}

fn simulated(case: &serde_json::Value) -> HttpResponse {
    let sim = &case["simulated_response"];
    HttpResponse {
        status: sim["status"].as_u64().unwrap() as u16,
        body: sim["body"].as_str().unwrap().to_string(),
    }
}

// ---------------------------------------------------------------------------
// List collection operations
// ---------------------------------------------------------------------------

#[test]
fn all_lists_test_vectors() {
    let c = client();
    for case in cases(include_str!("../../test-vectors/all_lists.json")) {
        let name = case["name"].as_str().unwrap();
        let req = c.build_all_lists();
        assert_request(name, &req, &case["expected_request"]);

        let lists = c.parse_all_lists(simulated(&case)).unwrap();
        let expected: Vec<ListSummary> =
            serde_json::from_value(case["expected_result"].clone()).unwrap();
        assert_eq!(lists, expected, "{name}: parsed result");
    }
}

#[test]
fn create_list_test_vectors() {
    let c = client();
    for case in cases(include_str!("../../test-vectors/create_list.json")) {
        let name = case["name"].as_str().unwrap();
        let req = c.build_create_list(case["input"]["name"].as_str().unwrap());
        assert_request(name, &req, &case["expected_request"]);

        let created = c.parse_create_list(simulated(&case)).unwrap();
        let expected: ListSummary =
            serde_json::from_value(case["expected_result"].clone()).unwrap();
        assert_eq!(created, expected, "{name}: parsed result");
    }
}

#[test]
fn delete_list_test_vectors() {
    let c = client();
    for case in cases(include_str!("../../test-vectors/delete_list.json")) {
        let name = case["name"].as_str().unwrap();
        let req = c.build_delete_list(case["input"]["list_id"].as_str().unwrap());
        assert_request(name, &req, &case["expected_request"]);

        let remaining = c.parse_delete_list(simulated(&case)).unwrap();
        let expected: Vec<ListSummary> =
            serde_json::from_value(case["expected_result"].clone()).unwrap();
        assert_eq!(remaining, expected, "{name}: parsed result");
    }
}

// ---------------------------------------------------------------------------
// Item operations
// ---------------------------------------------------------------------------

#[test]
fn get_list_test_vectors() {
    let c = client();
    for case in cases(include_str!("../../test-vectors/get_list.json")) {
        let name = case["name"].as_str().unwrap();
        let req = c.build_get_list(case["input"]["list_id"].as_str().unwrap());
        assert_request(name, &req, &case["expected_request"]);

        let detail = c.parse_get_list(simulated(&case)).unwrap();
        let expected: ListDetail =
            serde_json::from_value(case["expected_result"].clone()).unwrap();
        assert_eq!(detail, expected, "{name}: parsed result");
    }
}

#[test]
fn add_item_test_vectors() {
    let c = client();
    for case in cases(include_str!("../../test-vectors/add_item.json")) {
        let name = case["name"].as_str().unwrap();
        let input = &case["input"];
        let req = c.build_add_item(
            input["list_id"].as_str().unwrap(),
            input["text"].as_str().unwrap(),
        );
        assert_request(name, &req, &case["expected_request"]);

        let detail = c.parse_add_item(simulated(&case)).unwrap();
        let expected: ListDetail =
            serde_json::from_value(case["expected_result"].clone()).unwrap();
        assert_eq!(detail, expected, "{name}: parsed result");
    }
}

#[test]
fn edit_item_test_vectors() {
    let c = client();
    for case in cases(include_str!("../../test-vectors/edit_item.json")) {
        let name = case["name"].as_str().unwrap();
        let input = &case["input"];
        let req = c.build_edit_item(
            input["list_id"].as_str().unwrap(),
            input["item_id"].as_str().unwrap(),
            input["text"].as_str().unwrap(),
        );
        assert_request(name, &req, &case["expected_request"]);

        let detail = c.parse_edit_item(simulated(&case)).unwrap();
        let expected: ListDetail =
            serde_json::from_value(case["expected_result"].clone()).unwrap();
        assert_eq!(detail, expected, "{name}: parsed result");
    }
}

#[test]
fn delete_item_test_vectors() {
    let c = client();
    for case in cases(include_str!("../../test-vectors/delete_item.json")) {
        let name = case["name"].as_str().unwrap();
        let input = &case["input"];
        let req = c.build_delete_item(
            input["list_id"].as_str().unwrap(),
            input["item_id"].as_str().unwrap(),
        );
        assert_request(name, &req, &case["expected_request"]);

        let detail = c.parse_delete_item(simulated(&case)).unwrap();
        let expected: ListDetail =
            serde_json::from_value(case["expected_result"].clone()).unwrap();
        assert_eq!(detail, expected, "{name}: parsed result");
    }
}
