use super::widgets::bind_input;
use crate::api::ApiClient;
use crate::error::ApiError;
use crate::models::{AuthResponse, LoginRequest, RegisterRequest};
use crate::route::Route;
use crate::session::{BrowserStorage, Session, SessionContext};
use tracing::warn;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

const GENERIC_ERROR: &str = "An error occurred";

#[derive(Properties, PartialEq)]
pub struct AuthScreenProps {
    pub on_navigate: Callback<Route>,
}

#[function_component(AuthScreen)]
pub fn auth_screen(props: &AuthScreenProps) -> Html {
    let session = use_context::<SessionContext>();
    let is_login = use_state(|| true);
    let name = use_state(|| "".to_string());
    let email = use_state(|| "".to_string());
    let password = use_state(|| "".to_string());
    let error = use_state(|| None::<String>);
    let loading = use_state(|| false);

    let on_submit = {
        let is_login = is_login.clone();
        let name = name.clone();
        let email = email.clone();
        let password = password.clone();
        let error = error.clone();
        let loading = loading.clone();
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *loading {
                return;
            }
            let login = *is_login;
            let name_val = name.trim().to_string();
            let email_val = email.trim().to_string();
            let password_val = (*password).clone();
            let session = session.clone();
            let on_navigate = on_navigate.clone();
            let error = error.clone();
            let loading = loading.clone();

            loading.set(true);
            error.set(None);

            spawn_local(async move {
                let client = ApiClient::from_config(None);
                let result = if login {
                    client
                        .login(&LoginRequest {
                            email: email_val,
                            password: password_val,
                        })
                        .await
                } else {
                    client
                        .register(&RegisterRequest {
                            name: name_val,
                            email: email_val,
                            password: password_val,
                        })
                        .await
                };

                match result.and_then(require_token) {
                    Ok(auth) => {
                        let next = Session::sign_in(&BrowserStorage, auth.token, auth.user);
                        if let Some(session) = session.as_ref() {
                            session.set(next);
                        }
                        loading.set(false);
                        on_navigate.emit(Route::Dashboard);
                    }
                    Err(err) => {
                        warn!(error = %err, login, "authentication failed");
                        error.set(Some(err.user_message(GENERIC_ERROR)));
                        loading.set(false);
                    }
                }
            });
        })
    };

    let toggle_mode = {
        let is_login = is_login.clone();
        let error = error.clone();
        Callback::from(move |_| {
            is_login.set(!*is_login);
            error.set(None);
        })
    };

    let input_class = "w-full px-4 py-2 bg-input border border-input rounded-lg text-foreground focus:outline-none focus:ring-2 focus:ring-primary";

    html! {
        <div class="min-h-screen flex items-center justify-center bg-background">
            <div class="w-full max-w-md bg-card border border-border rounded-2xl shadow-lg p-8">
                <div class="text-center mb-6">
                    <h1 class="text-2xl font-bold text-foreground">{ if *is_login { "Login" } else { "Register" } }</h1>
                    <p class="text-sm text-muted-foreground mt-2">
                        { if *is_login { "Sign in to your MiniPay wallet." } else { "Create a MiniPay wallet." } }
                    </p>
                </div>

                <form class="space-y-4" onsubmit={on_submit}>
                    if !*is_login {
                        <div class="space-y-1">
                            <label class="text-sm font-medium text-foreground">{"Name"}</label>
                            <input
                                type="text"
                                name="name"
                                placeholder="Name"
                                required={true}
                                class={input_class}
                                value={(*name).clone()}
                                oninput={bind_input(&name)}
                            />
                        </div>
                    }
                    <div class="space-y-1">
                        <label class="text-sm font-medium text-foreground">{"Email"}</label>
                        <input
                            type="email"
                            name="email"
                            placeholder="Email"
                            required={true}
                            class={input_class}
                            value={(*email).clone()}
                            oninput={bind_input(&email)}
                        />
                    </div>
                    <div class="space-y-1">
                        <label class="text-sm font-medium text-foreground">{"Password"}</label>
                        <input
                            type="password"
                            name="password"
                            placeholder="Password"
                            required={true}
                            class={input_class}
                            value={(*password).clone()}
                            oninput={bind_input(&password)}
                        />
                    </div>

                    if let Some(msg) = &*error {
                        <div class="text-sm text-red-500">{ msg.clone() }</div>
                    }

                    <button
                        type="submit"
                        class="w-full bg-primary text-primary-foreground py-2 rounded-lg font-semibold hover:opacity-90 transition-opacity"
                        disabled={*loading}
                    >
                        { if *loading { "Please wait..." } else if *is_login { "Login" } else { "Register" } }
                    </button>
                </form>

                <div class="mt-6 text-center text-sm text-muted-foreground">
                    { if *is_login { "Don't have an account?" } else { "Already have an account?" } }
                    <button type="button" class="ml-2 text-primary font-semibold" onclick={toggle_mode}>
                        { if *is_login { "Register" } else { "Login" } }
                    </button>
                </div>
            </div>
        </div>
    }
}

// A 2xx reply without a token leaves the user signed out.
fn require_token(auth: AuthResponse) -> Result<AuthResponse, ApiError> {
    if auth.token.trim().is_empty() {
        Err(ApiError::Decode("auth response carried no token".to_string()))
    } else {
        Ok(auth)
    }
}
