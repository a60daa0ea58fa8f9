use std::{collections::HashMap, sync::Arc};

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Todo {
    pub id: u64,
    pub title: String,
    pub completed: bool,
}

#[derive(Deserialize)]
pub struct CreateTodo {
    pub title: String,
    #[serde(default)]
    pub completed: bool,
}

/// In-memory todo table. Ids are assigned sequentially starting at 1;
/// keeping the counter inside the lock makes assignment atomic with insert.
#[derive(Default)]
pub struct Todos {
    next_id: u64,
    items: HashMap<u64, Todo>,
}

pub type Db = Arc<RwLock<Todos>>;

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(Todos::default()));
    Router::new()
        .route("/todos", get(list_todos).post(create_todo))
        .route("/todos/{id}", get(get_todo))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn list_todos(State(db): State<Db>) -> Json<Vec<Todo>> {
    let todos = db.read().await;
    Json(todos.items.values().cloned().collect())
}

async fn create_todo(
    State(db): State<Db>,
    Json(input): Json<CreateTodo>,
) -> (StatusCode, Json<Todo>) {
    let mut todos = db.write().await;
    todos.next_id += 1;
    let todo = Todo {
        id: todos.next_id,
        title: input.title,
        completed: input.completed,
    };
    todos.items.insert(todo.id, todo.clone());
    (StatusCode::CREATED, Json(todo))
}

async fn get_todo(
    State(db): State<Db>,
    Path(id): Path<u64>,
) -> Result<Json<Todo>, StatusCode> {
    let todos = db.read().await;
    todos.items.get(&id).cloned().map(Json).ok_or(StatusCode::NOT_FOUND)
}
