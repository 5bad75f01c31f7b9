//! New Todo Form Component
//!
//! Form for submitting new tasks to the API.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::api::{self, ApiError, NewTodo};
use crate::context::AppContext;
use crate::render;

/// Form for creating new tasks
#[component]
pub fn NewTodoForm() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (task_text, set_task_text) = signal(String::new());

    let create_todo = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        // Whitespace-only input is a silent no-op, not an error
        let Some(task) = render::normalize_task_input(&task_text.get()) else {
            return;
        };

        spawn_local(async move {
            match api::create_todo(&NewTodo { task: &task }).await {
                Ok(()) => {
                    set_task_text.set(String::new());
                    ctx.reload();
                }
                Err(ApiError::Status { message, .. }) => {
                    alert(&render::create_failure_alert(message.as_deref()));
                }
                Err(ApiError::Network(message)) => {
                    web_sys::console::error_1(
                        &format!("[NewTodoForm] Error submitting todo: {}", message).into(),
                    );
                    alert(render::SUBMIT_NETWORK_ALERT);
                }
            }
        });
    };

    view! {
        <form class="new-todo-form" id="todo-form" on:submit=create_todo>
            <input
                type="text"
                id="task-input"
                placeholder="Add a new task..."
                prop:value=move || task_text.get()
                on:input=move |ev| {
                    let target = ev.target().unwrap();
                    let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                    set_task_text.set(input.value());
                }
            />
            <button type="submit">"Add Task"</button>
        </form>
    }
}

fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}
