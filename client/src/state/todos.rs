//! To-do list persisted in `localStorage`.

#[cfg(test)]
#[path = "todos_test.rs"]
mod todos_test;

use serde::{Deserialize, Serialize};

use crate::util::storage;

pub const EMPTY_TEXT: &str = "暂无任务，添加一个开始学习吧！";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TodoItem {
    #[serde(default = "new_id")]
    pub id: String,
    pub text: String,
    #[serde(default)]
    pub done: bool,
    #[serde(rename = "createdAt", default)]
    pub created_at: f64,
}

fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct TodoState {
    pub items: Vec<TodoItem>,
}

impl TodoState {
    pub fn load() -> Self {
        Self { items: storage::load_json(storage::TODOS_KEY).unwrap_or_default() }
    }

    pub fn save(&self) {
        storage::save_json(storage::TODOS_KEY, &self.items);
    }

    /// Append a task. Blank text is ignored.
    pub fn add(&mut self, text: &str, now_ms: f64) -> bool {
        let text = text.trim();
        if text.is_empty() {
            return false;
        }
        self.items.push(TodoItem { id: new_id(), text: text.to_owned(), done: false, created_at: now_ms });
        true
    }

    /// Flip a task. Returns `true` only when it just became done.
    pub fn toggle(&mut self, id: &str) -> bool {
        let Some(item) = self.items.iter_mut().find(|t| t.id == id) else {
            return false;
        };
        item.done = !item.done;
        item.done
    }

    pub fn delete(&mut self, id: &str) {
        self.items.retain(|t| t.id != id);
    }

    pub fn completed_count(&self) -> usize {
        self.items.iter().filter(|t| t.done).count()
    }

    pub fn total(&self) -> usize {
        self.items.len()
    }
}
