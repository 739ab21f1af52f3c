use chef_core::{FAILURE_MESSAGE, Role, Transcript};
use leptos::prelude::*;

#[server]
pub async fn get_recipe(dish: String) -> Result<String, ServerFnError> {
    use std::time::Instant;

    let start = Instant::now();
    // Total on the server side: failures already arrive as the fixed sentence
    let reply = crate::server::chef::recipe_turn(&dish).await;

    tracing::info!(
        dish = %dish,
        duration_ms = %start.elapsed().as_millis(),
        "Recipe turn served"
    );

    Ok(reply)
}

#[server]
pub async fn credential_configured() -> Result<bool, ServerFnError> {
    Ok(crate::server::chef::credential_configured())
}

#[component]
pub fn Chat() -> impl IntoView {
    let (transcript, set_transcript) = signal(Transcript::new());
    let (input, set_input) = signal(String::new());
    let (loading, set_loading) = signal(false);

    // Checked once per page load; absence disables the whole input surface
    let credential = Resource::new(|| (), |_| async { credential_configured().await });

    // Shared submit path for button and Enter key
    let send_request = move |dish: String| {
        let dish = dish.trim().to_string();
        if dish.is_empty() || loading.get() {
            return;
        }

        set_transcript.update(|t| t.push_user(dish.clone()));
        set_input.set(String::new());
        set_loading.set(true);

        leptos::task::spawn_local(async move {
            let reply = match get_recipe(dish).await {
                Ok(text) => text,
                Err(e) => {
                    // Transport-level failure, same apology as a provider fault
                    leptos::logging::error!("Recipe request failed: {}", e);
                    FAILURE_MESSAGE.to_string()
                }
            };
            set_transcript.update(|t| t.push_assistant(reply));
            set_loading.set(false);
        });
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        send_request(input.get());
    };

    // Enter sends, Shift+Enter inserts a newline
    let on_keydown = move |ev: web_sys::KeyboardEvent| {
        if ev.key() == "Enter" && !ev.shift_key() {
            ev.prevent_default();
            send_request(input.get());
        }
    };

    let clear_history = move |_| {
        set_transcript.update(|t| t.clear());
    };

    view! {
        <div class="chef-container">
            <aside class="sidebar">
                <button class="clear-button" on:click=clear_history prop:disabled=loading>
                    "Clear Chat History"
                </button>
                <hr/>
                <p class="sidebar-note">"Built with Leptos & OpenRouter"</p>
            </aside>

            <section class="chat-panel">
                <header class="hero">
                    <h1>"🍳 AI Master Chef Bot"</h1>
                    <p class="tagline">
                        "Ask for any dish, and the AI Master Chef will give you the recipe!"
                    </p>
                </header>

                <div class="transcript">
                    {move || {
                        transcript
                            .get()
                            .turns()
                            .iter()
                            .map(|turn| {
                                let bubble_class = match turn.role {
                                    Role::User => "turn turn-user",
                                    Role::Assistant => "turn turn-assistant",
                                };
                                view! {
                                    <div class=bubble_class>
                                        <p class="turn-text">{turn.text.clone()}</p>
                                    </div>
                                }
                            })
                            .collect_view()
                    }}

                    {move || loading.get().then(|| view! {
                        <div class="turn turn-assistant turn-pending">
                            <p class="turn-text">"Chef is thinking... 🧑‍🍳"</p>
                        </div>
                    })}
                </div>

                <Suspense fallback=|| view! { <div class="loading">"Loading..."</div> }>
                    {move || {
                        credential.get().map(|result| match result {
                            Ok(true) => view! {
                                <form class="chat-form" on:submit=on_submit>
                                    <textarea
                                        class="chat-input"
                                        placeholder="e.g., Jollof Rice, Spaghetti Carbonara, etc."
                                        rows="2"
                                        prop:value=input
                                        on:input=move |ev| set_input.set(event_target_value(&ev))
                                        on:keydown=on_keydown
                                        prop:disabled=loading
                                    />
                                    <button
                                        type="submit"
                                        class="send-button"
                                        prop:disabled=move || {
                                            loading.get() || input.get().trim().is_empty()
                                        }
                                    >
                                        {move || if loading.get() { "Cooking..." } else { "Ask the chef" }}
                                    </button>
                                </form>
                            }.into_any(),
                            _ => view! {
                                // No credential: warning stays, no input is rendered
                                <div class="warning-message">
                                    <span class="icon">"⚠️"</span>
                                    <span>
                                        "API key not found! Please add OPENROUTER_API_KEY to the server environment."
                                    </span>
                                </div>
                            }.into_any(),
                        })
                    }}
                </Suspense>
            </section>
        </div>
    }
}
