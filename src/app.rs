//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::toaster::Toaster;
use crate::pages::{
    auth::AuthPage, forgot_password::ForgotPasswordPage, login::LoginPage,
    not_found::NotFoundPage, reset_password::ResetPasswordPage, setup_account::SetupAccountPage,
    signup::SignupPage, studio::StudioPage, verify_email::VerifyEmailPage,
    verify_reset::VerifyResetPage, welcome::WelcomePage,
};
use crate::state::{
    auth::AuthState, chat::ChatState, conversations::ConversationsState, toast::ToastState,
};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides all shared state contexts and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // Provide reactive state contexts for all child components.
    let auth = RwSignal::new(AuthState::default());
    let chat = RwSignal::new(ChatState::default());
    let conversations = RwSignal::new(ConversationsState::default());
    let toasts = RwSignal::new(ToastState::default());

    provide_context(auth);
    provide_context(chat);
    provide_context(conversations);
    provide_context(toasts);

    view! {
        <Stylesheet id="leptos" href="/pkg/pictora.css"/>
        <Title text="Pictora"/>

        <Router>
            <Routes fallback=NotFoundPage>
                <Route path=StaticSegment("") view=WelcomePage/>
                <Route path=StaticSegment("auth") view=AuthPage/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("signup") view=SignupPage/>
                <Route path=StaticSegment("verify-email") view=VerifyEmailPage/>
                <Route path=StaticSegment("setup-account") view=SetupAccountPage/>
                <Route path=StaticSegment("forgot-password") view=ForgotPasswordPage/>
                <Route path=StaticSegment("verify-reset") view=VerifyResetPage/>
                <Route path=StaticSegment("reset-password") view=ResetPasswordPage/>
                <Route path=StaticSegment("home") view=StudioPage/>
            </Routes>
        </Router>

        <Toaster/>
    }
}
