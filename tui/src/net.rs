//! Executes core-built requests and reports outcomes back to the UI loop.
//!
//! The core crate never touches the network; this module is the host side
//! of that split. Calls run on blocking tasks so the UI loop stays
//! responsive, and every outcome is posted back stamped with the epoch it
//! was dispatched under — the coordinator decides whether it still applies.

use tokio::sync::mpsc::UnboundedSender;
use todolists_core::{ApiError, HttpMethod, HttpRequest, HttpResponse, ListClient};

use crate::app::{ApiCall, ApiOutcome, Command, Msg};

pub fn dispatch(tx: &UnboundedSender<Msg>, client: &ListClient, command: Command) {
    let tx = tx.clone();
    let client = client.clone();
    tokio::spawn(async move {
        let Command { epoch, call } = command;
        tracing::debug!(?call, epoch, "dispatching request");
        match tokio::task::spawn_blocking(move || run_call(&client, call)).await {
            Ok(outcome) => {
                let _ = tx.send(Msg::Api(epoch, outcome));
            }
            Err(join_error) => tracing::warn!(%join_error, "request task panicked"),
        }
    });
}

fn run_call(client: &ListClient, call: ApiCall) -> ApiOutcome {
    match call {
        ApiCall::AllLists => ApiOutcome::Lists(
            execute(client.build_all_lists()).and_then(|r| client.parse_all_lists(r)),
        ),
        ApiCall::CreateList { name } => ApiOutcome::Created(
            execute(client.build_create_list(&name)).and_then(|r| client.parse_create_list(r)),
        ),
        ApiCall::DeleteList { list_id } => ApiOutcome::Lists(
            execute(client.build_delete_list(&list_id)).and_then(|r| client.parse_delete_list(r)),
        ),
        ApiCall::GetList { list_id } => ApiOutcome::Detail(
            execute(client.build_get_list(&list_id)).and_then(|r| client.parse_get_list(r)),
        ),
        ApiCall::AddItem { list_id, text } => ApiOutcome::Detail(
            execute(client.build_add_item(&list_id, &text)).and_then(|r| client.parse_add_item(r)),
        ),
        ApiCall::EditItem {
            list_id,
            item_id,
            text,
        } => ApiOutcome::Detail(
            execute(client.build_edit_item(&list_id, &item_id, &text))
                .and_then(|r| client.parse_edit_item(r)),
        ),
        ApiCall::DeleteItem { list_id, item_id } => ApiOutcome::Detail(
            execute(client.build_delete_item(&list_id, &item_id))
                .and_then(|r| client.parse_delete_item(r)),
        ),
    }
}

/// Execute an `HttpRequest` using ureq and return an `HttpResponse`.
///
/// Disables ureq's automatic status-code-as-error behavior so 4xx/5xx
/// responses come back as data rather than `Err`, letting the core client
/// handle status interpretation. Transport failures map to
/// `ApiError::Network`.
fn execute(req: HttpRequest) -> Result<HttpResponse, ApiError> {
    let agent = ureq::Agent::config_builder()
        .http_status_as_error(false)
        .build()
        .new_agent();

    let result = match req.method {
        HttpMethod::Get => agent.get(&req.url).call(),
        HttpMethod::Delete => agent.delete(&req.url).call(),
        HttpMethod::Post => agent.post(&req.url).send_empty(),
    };
    let mut response = result.map_err(|e| ApiError::Network(e.to_string()))?;

    let status = response.status().as_u16();
    let body = response
        .body_mut()
        .read_to_string()
        .map_err(|e| ApiError::Network(e.to_string()))?;

    Ok(HttpResponse { status, body })
}
