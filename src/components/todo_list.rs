//! Todo List Component
//!
//! Renders the task list, the empty placeholder, or the inline fetch error.

use leptos::prelude::*;

use crate::models::Todo;
use crate::render;

/// Task list display. The whole body is rebuilt from the signals on every
/// change; items carry no identity.
#[component]
pub fn TodoList(
    todos: ReadSignal<Vec<Todo>>,
    load_error: ReadSignal<Option<String>>,
) -> impl IntoView {
    view! {
        <ul class="todo-list" id="todo-list">
            {move || match load_error.get() {
                Some(message) => view! { <li class="error">{message}</li> }.into_any(),
                None => {
                    let todos = todos.get();
                    if todos.is_empty() {
                        view! { <li class="placeholder">{render::EMPTY_PLACEHOLDER}</li> }
                            .into_any()
                    } else {
                        todos
                            .iter()
                            .map(|todo| view! { <li>{render::todo_line(todo)}</li> })
                            .collect_view()
                            .into_any()
                    }
                }
            }}
        </ul>
    }
}
