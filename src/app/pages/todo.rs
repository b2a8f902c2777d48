//! Todo page component.

use dioxus::prelude::*;
use tracing::debug;

use crate::app::components::Layout;
use crate::app::todo_list::TodoList;

#[component]
pub fn Todo() -> Element {
    let mut todos = use_signal(TodoList::new);
    let mut draft = use_signal(String::new);

    let mut add = move || {
        if let Some(id) = todos.write().add(&draft()) {
            debug!(id, "Todo added");
            draft.set(String::new());
        }
    };

    let items = todos.read().items().to_vec();
    let remaining = todos.read().remaining();

    rsx! {
        Layout {
            title: "Todo".to_string(),

            h1 { "Todo" }
            article {
                fieldset { role: "group",
                    input {
                        r#type: "text",
                        placeholder: "What needs doing?",
                        value: "{draft}",
                        oninput: move |evt| draft.set(evt.value()),
                        onkeydown: move |evt| {
                            if evt.key() == Key::Enter {
                                add();
                            }
                        },
                    }
                    button { onclick: move |_| add(), "Add" }
                }

                if items.is_empty() {
                    p { "Nothing to do." }
                } else {
                    ul {
                        for todo in items {
                            li { key: "{todo.id}",
                                label {
                                    input {
                                        r#type: "checkbox",
                                        checked: todo.done,
                                        onchange: move |_| {
                                            todos.write().toggle(todo.id);
                                        },
                                    }
                                    span { class: if todo.done { "todo-done" } else { "" }, "{todo.text}" }
                                }
                                button {
                                    class: "secondary outline",
                                    onclick: move |_| {
                                        todos.write().remove(todo.id);
                                    },
                                    "✕"
                                }
                            }
                        }
                    }
                }
                small { "{remaining} remaining" }
            }
        }
    }
}
