//! Generic clickable button

use leptos::prelude::*;

#[component]
pub fn Button(
    #[prop(into, optional)] class: String,
    #[prop(into)] on_click: Callback<()>,
    children: Children,
) -> impl IntoView {
    view! {
        <button type="button" class=format!("btn {}", class) on:click=move |_| on_click.run(())>
            {children()}
        </button>
    }
}
