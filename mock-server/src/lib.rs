//! In-memory implementation of the list-of-lists todo service.
//!
//! Serves the same wire contract the real service exposes: all parameters
//! travel in the URL, mutations answer with the authoritative post-mutation
//! state when `return_list=true`, an empty item collection serializes as
//! `{}`, and an empty store answers `/list/all` with JSON `null`.

use std::{collections::HashMap, sync::Arc};

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::{json, Value};
use tokio::{net::TcpListener, sync::RwLock};
use uuid::Uuid;

/// Maximum number of lists the store accepts.
pub const MAX_LISTS: usize = 1000;
/// Maximum number of items in a single list.
pub const MAX_ITEMS_PER_LIST: usize = 1000;
/// Maximum byte length of a single item's text.
pub const MAX_TEXT_LENGTH: usize = 1000;

#[derive(Clone, Debug)]
pub struct StoredItem {
    pub uuid: String,
    pub text: String,
}

#[derive(Clone, Debug)]
pub struct StoredList {
    pub uuid: String,
    pub name: String,
    pub created: DateTime<Utc>,
    pub items: Vec<StoredItem>,
}

#[derive(Default)]
pub struct Store {
    lists: HashMap<String, StoredList>,
}

pub type Db = Arc<RwLock<Store>>;

type ApiResult = Result<Response, (StatusCode, String)>;

#[derive(Deserialize)]
struct NewListParams {
    name: Option<String>,
}

#[derive(Deserialize)]
struct ReturnListParams {
    #[serde(default)]
    return_list: bool,
}

#[derive(Deserialize)]
struct ItemParams {
    text: Option<String>,
    #[serde(default)]
    return_list: bool,
}

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(Store::default()));
    Router::new()
        .route("/list/all", get(all_lists))
        .route("/list/new", post(new_list))
        .route("/list/id/{list_id}", get(get_list).delete(delete_list))
        .route("/list/id/{list_id}/item/add", post(add_item))
        .route(
            "/list/id/{list_id}/item/id/{item_id}",
            post(edit_item).delete(delete_item),
        )
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn all_lists(State(db): State<Db>) -> Json<Value> {
    let store = db.read().await;
    Json(summaries_value(&store))
}

async fn new_list(State(db): State<Db>, Query(params): Query<NewListParams>) -> ApiResult {
    let name = params.name.filter(|n| !n.is_empty()).ok_or((
        StatusCode::UNPROCESSABLE_ENTITY,
        "missing 'name' parameter".to_string(),
    ))?;
    let mut store = db.write().await;
    if store.lists.len() >= MAX_LISTS {
        return Err((
            StatusCode::UNPROCESSABLE_ENTITY,
            "already at the maximum number of lists".to_string(),
        ));
    }
    let list = StoredList {
        uuid: Uuid::new_v4().to_string(),
        name,
        created: Utc::now(),
        items: Vec::new(),
    };
    let body = detail_value(&list);
    store.lists.insert(list.uuid.clone(), list);
    Ok(Json(body).into_response())
}

async fn get_list(State(db): State<Db>, Path(id): Path<String>) -> ApiResult {
    let store = db.read().await;
    let list = store.lists.get(&id).ok_or_else(|| not_found(&id))?;
    Ok(Json(detail_value(list)).into_response())
}

async fn delete_list(
    State(db): State<Db>,
    Path(id): Path<String>,
    Query(params): Query<ReturnListParams>,
) -> ApiResult {
    let mut store = db.write().await;
    store.lists.remove(&id).ok_or_else(|| not_found(&id))?;
    if params.return_list {
        Ok(Json(summaries_value(&store)).into_response())
    } else {
        Ok(StatusCode::OK.into_response())
    }
}

async fn add_item(
    State(db): State<Db>,
    Path(id): Path<String>,
    Query(params): Query<ItemParams>,
) -> ApiResult {
    let text = params.text.filter(|t| !t.is_empty()).ok_or((
        StatusCode::UNPROCESSABLE_ENTITY,
        "missing 'text' parameter".to_string(),
    ))?;
    check_text_length(&text)?;
    let mut store = db.write().await;
    let list = store.lists.get_mut(&id).ok_or_else(|| not_found(&id))?;
    if list.items.len() >= MAX_ITEMS_PER_LIST {
        return Err((
            StatusCode::UNPROCESSABLE_ENTITY,
            "already at the maximum number of items in the list".to_string(),
        ));
    }
    let item = StoredItem {
        uuid: Uuid::new_v4().to_string(),
        text,
    };
    list.items.push(item.clone());
    if params.return_list {
        Ok(Json(detail_value(list)).into_response())
    } else {
        Ok(Json(item_value(&item)).into_response())
    }
}

async fn edit_item(
    State(db): State<Db>,
    Path((list_id, item_id)): Path<(String, String)>,
    Query(params): Query<ItemParams>,
) -> ApiResult {
    let text = params.text.ok_or((
        StatusCode::UNPROCESSABLE_ENTITY,
        "missing 'text' parameter".to_string(),
    ))?;
    check_text_length(&text)?;
    let mut store = db.write().await;
    let list = store.lists.get_mut(&list_id).ok_or_else(|| not_found(&list_id))?;
    let item = list
        .items
        .iter_mut()
        .find(|i| i.uuid == item_id)
        .ok_or_else(|| not_found(&item_id))?;
    item.text = text;
    if params.return_list {
        Ok(Json(detail_value(list)).into_response())
    } else {
        Ok(StatusCode::OK.into_response())
    }
}

async fn delete_item(
    State(db): State<Db>,
    Path((list_id, item_id)): Path<(String, String)>,
    Query(params): Query<ReturnListParams>,
) -> ApiResult {
    let mut store = db.write().await;
    let list = store.lists.get_mut(&list_id).ok_or_else(|| not_found(&list_id))?;
    let position = list
        .items
        .iter()
        .position(|i| i.uuid == item_id)
        .ok_or_else(|| not_found(&item_id))?;
    list.items.remove(position);
    if params.return_list {
        Ok(Json(detail_value(list)).into_response())
    } else {
        Ok(StatusCode::OK.into_response())
    }
}

fn not_found(id: &str) -> (StatusCode, String) {
    (StatusCode::NOT_FOUND, format!("'{id}' does not exist"))
}

fn check_text_length(text: &str) -> Result<(), (StatusCode, String)> {
    if text.len() > MAX_TEXT_LENGTH {
        return Err((
            StatusCode::UNPROCESSABLE_ENTITY,
            "item text is too long".to_string(),
        ));
    }
    Ok(())
}

/// Summaries sorted by creation time. An empty store marshals as `null`.
fn summaries_value(store: &Store) -> Value {
    if store.lists.is_empty() {
        return Value::Null;
    }
    let mut lists: Vec<&StoredList> = store.lists.values().collect();
    lists.sort_by(|a, b| a.created.cmp(&b.created));
    Value::Array(lists.into_iter().map(summary_value).collect())
}

fn summary_value(list: &StoredList) -> Value {
    json!({
        "UUID": list.uuid,
        "Name": list.name,
        "Created": list.created,
    })
}

fn detail_value(list: &StoredList) -> Value {
    let mut value = summary_value(list);
    value["List"] = collection_value(&list.items);
    value
}

/// An empty collection marshals as `{}`, counters and all.
fn collection_value(items: &[StoredItem]) -> Value {
    if items.is_empty() {
        return json!({});
    }
    json!({
        "Items": items.iter().map(item_value).collect::<Vec<_>>(),
        "MaxTotal": MAX_ITEMS_PER_LIST,
        "MaxTextLength": MAX_TEXT_LENGTH,
        "Total": items.len(),
    })
}

fn item_value(item: &StoredItem) -> Value {
    json!({
        "UUID": item.uuid,
        "value": item.text,
    })
}
