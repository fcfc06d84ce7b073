//! Login service routes

use axum::{
    Form, Json, Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
    routing::{get, post},
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};

use crate::{
    AppState,
    config::LoginConfig,
    error::{AuthError, Field},
    models::{Session, SessionId},
    store::Translator,
    validation::validate_form,
};

/// Submitted login form
///
/// Missing fields deserialize as empty strings and fail validation.
#[derive(Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

/// Data needed to render the login form
///
/// The trimmed username is echoed back; the password never is.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct LoginView {
    pub title: String,
    pub site_name: Option<String>,
    pub site_icon: Option<String>,
    pub welcome: String,
    pub prompt: String,
    pub username: String,
    pub username_err: String,
    pub password_err: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub form_err: Option<String>,
}

impl LoginView {
    fn reject(&mut self, error: AuthError, translator: &dyn Translator) {
        let message = translator.translate(error.message_key());
        match error.field() {
            Some(Field::Username) => self.username_err = message,
            Some(Field::Password) => self.password_err = message,
            None => self.form_err = Some(message),
        }
    }
}

/// Create the router for the login service
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/login", get(login_page).post(login))
        .route("/logout", post(logout))
        .route("/session", get(current_session))
        .with_state(state)
}

/// Health check endpoint
pub async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "service": "login-service"
    }))
}

/// Login form endpoint
pub async fn login_page(
    State(state): State<AppState>,
    jar: CookieJar,
) -> Result<Response, RouteError> {
    if logged_in(&state, &jar).await.is_some() {
        return Ok(Redirect::to(&state.config.landing_path).into_response());
    }

    let view = build_view(&state, String::new()).await?;
    Ok((StatusCode::OK, Json(view)).into_response())
}

/// Login form submission endpoint
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(form): Form<LoginForm>,
) -> Result<Response, RouteError> {
    if logged_in(&state, &jar).await.is_some() {
        return Ok(Redirect::to(&state.config.landing_path).into_response());
    }

    let mut view = build_view(&state, form.username.trim().to_string()).await?;
    let translator = state.translator.as_ref();

    let field_errors = validate_form(&form.username, &form.password);
    if !field_errors.is_empty() {
        for error in [field_errors.username, field_errors.password].into_iter().flatten() {
            view.reject(error, translator);
        }
        return Ok((StatusCode::UNPROCESSABLE_ENTITY, Json(view)).into_response());
    }

    // Always a fresh id, never the one the client arrived with
    let sid = SessionId::generate();
    match state
        .authenticator
        .authenticate(&sid, &form.username, &form.password)
        .await
    {
        Ok(_) => {
            let jar = jar.add(session_cookie(&state.config, &sid));
            Ok((jar, Redirect::to(&state.config.landing_path)).into_response())
        }
        Err(error) => {
            view.reject(error, translator);
            let status = match error {
                AuthError::BackendError => StatusCode::INTERNAL_SERVER_ERROR,
                _ => StatusCode::UNPROCESSABLE_ENTITY,
            };
            Ok((status, Json(view)).into_response())
        }
    }
}

/// Logout endpoint
pub async fn logout(
    State(state): State<AppState>,
    jar: CookieJar,
) -> Result<Response, RouteError> {
    if let Some(sid) = session_id(&jar, &state.config) {
        info!("Logout request");
        state.sessions.destroy(&sid).await.map_err(|e| {
            error!("Failed to remove session: {}", e);
            RouteError::InternalServerError
        })?;
    }

    let jar = jar.remove(Cookie::build((state.config.cookie_name.clone(), "")).path("/"));
    Ok((jar, Redirect::to("/login")).into_response())
}

/// Current session endpoint
pub async fn current_session(
    State(state): State<AppState>,
    jar: CookieJar,
) -> Result<Json<Session>, RouteError> {
    let sid = session_id(&jar, &state.config).ok_or(RouteError::Unauthorized)?;

    match state.sessions.get(&sid).await {
        Ok(Some(session)) if session.logged_in => Ok(Json(session)),
        Ok(_) => Err(RouteError::Unauthorized),
        Err(e) => {
            error!("Failed to read session: {}", e);
            Err(RouteError::InternalServerError)
        }
    }
}

async fn build_view(state: &AppState, username: String) -> Result<LoginView, RouteError> {
    let site_name = setting(state, "site_name").await?;
    let site_icon = setting(state, "site_icon").await?;

    let t = state.translator.as_ref();
    Ok(LoginView {
        title: t.translate("login_title"),
        site_name,
        site_icon,
        welcome: t.translate("welcome_back"),
        prompt: t.translate("please_fill_credentials"),
        username,
        ..LoginView::default()
    })
}

async fn setting(state: &AppState, key: &str) -> Result<Option<String>, RouteError> {
    state.settings.get_setting(key).await.map_err(|e| {
        error!("Failed to load setting {}: {}", key, e);
        RouteError::InternalServerError
    })
}

fn session_id(jar: &CookieJar, config: &LoginConfig) -> Option<SessionId> {
    jar.get(&config.cookie_name)
        .and_then(|cookie| cookie.value().parse().ok())
}

/// The logged-in session referenced by the request cookie, if any
///
/// A session store failure here is logged and treated as anonymous.
async fn logged_in(state: &AppState, jar: &CookieJar) -> Option<Session> {
    let sid = session_id(jar, &state.config)?;
    match state.sessions.get(&sid).await {
        Ok(session) => session.filter(|session| session.logged_in),
        Err(e) => {
            warn!("Failed to read session, treating client as anonymous: {}", e);
            None
        }
    }
}

fn session_cookie(config: &LoginConfig, sid: &SessionId) -> Cookie<'static> {
    Cookie::build((config.cookie_name.clone(), sid.to_string()))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .build()
}

/// Errors raised outside the login attempt itself
#[derive(Debug)]
pub enum RouteError {
    Unauthorized,
    InternalServerError,
}

impl IntoResponse for RouteError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            RouteError::Unauthorized => (StatusCode::UNAUTHORIZED, "Unauthorized"),
            RouteError::InternalServerError => {
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
            }
        };

        let body = Json(serde_json::json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}
