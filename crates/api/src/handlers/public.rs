//! Public site handlers: landing page, contact form, newsletter signup.

use axum::extract::rejection::FormRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Redirect, Response};
use axum::{Form, Json};
use folio_core::content::{
    self, MAX_CITY_LENGTH, MAX_EMAIL_LENGTH, MAX_FULL_NAME_LENGTH, MAX_MOBILE_LENGTH,
};
use folio_core::error::CoreError;
use folio_db::models::client::Client;
use folio_db::models::contact::CreateContact;
use folio_db::models::project::Project;
use folio_db::models::subscriber::Subscriber;
use folio_db::repositories::{ClientRepo, ContactRepo, ProjectRepo, SubscriberRepo};
use folio_db::DbPool;
use serde::Serialize;

use crate::error::{is_unique_violation, AppError, AppResult};
use crate::flash;
use crate::forms::{ContactForm, SubscribeForm};
use crate::response::DataResponse;
use crate::state::AppState;

const LANDING_PATH: &str = "/";

// ---------------------------------------------------------------------------
// Landing page
// ---------------------------------------------------------------------------

/// Content shown on the landing page.
#[derive(Debug, Serialize)]
pub struct LandingPage {
    pub projects: Vec<Project>,
    pub clients: Vec<Client>,
}

/// GET /
pub async fn index(State(state): State<AppState>) -> AppResult<Json<DataResponse<LandingPage>>> {
    let projects = ProjectRepo::list(&state.pool).await?;
    let clients = ClientRepo::list(&state.pool).await?;
    Ok(Json(DataResponse {
        data: LandingPage { projects, clients },
    }))
}

// ---------------------------------------------------------------------------
// Contact form
// ---------------------------------------------------------------------------

fn validate_contact(form: &ContactForm) -> Result<CreateContact, CoreError> {
    Ok(CreateContact {
        full_name: content::require(
            "full_name",
            form.full_name.as_deref(),
            Some(MAX_FULL_NAME_LENGTH),
        )?,
        email: content::require("email", form.email.as_deref(), Some(MAX_EMAIL_LENGTH))?,
        mobile: content::require("mobile", form.mobile.as_deref(), Some(MAX_MOBILE_LENGTH))?,
        city: content::require("city", form.city.as_deref(), Some(MAX_CITY_LENGTH))?,
    })
}

/// POST /contact
///
/// Always redirects back to the landing page with a flash; a malformed
/// body is reported the same way as any other failure.
pub async fn contact(
    State(state): State<AppState>,
    form: Result<Form<ContactForm>, FormRejection>,
) -> Redirect {
    let form = match form {
        Ok(Form(form)) => form,
        Err(rejection) => {
            tracing::info!(error = %rejection, "Unreadable contact submission");
            return flash::error(LANDING_PATH, "contact_failed");
        }
    };

    let input = match validate_contact(&form) {
        Ok(input) => input,
        Err(e) => {
            tracing::info!(error = %e, "Rejected contact submission");
            return flash::error(LANDING_PATH, "contact_invalid");
        }
    };

    match ContactRepo::create(&state.pool, &input).await {
        Ok(contact) => {
            tracing::info!(id = contact.id, "Contact submission recorded");
            flash::success(LANDING_PATH, "contact_received")
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to record contact submission");
            flash::error(LANDING_PATH, "contact_failed")
        }
    }
}

// ---------------------------------------------------------------------------
// Newsletter signup
// ---------------------------------------------------------------------------

/// Outcome of a `POST /subscribe` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubscribeOutcome {
    Subscribed,
    MissingEmail,
    InvalidEmail,
    AlreadySubscribed,
    ServerError,
}

impl SubscribeOutcome {
    pub fn status(self) -> StatusCode {
        match self {
            SubscribeOutcome::Subscribed => StatusCode::OK,
            SubscribeOutcome::MissingEmail
            | SubscribeOutcome::InvalidEmail
            | SubscribeOutcome::AlreadySubscribed => StatusCode::BAD_REQUEST,
            SubscribeOutcome::ServerError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            SubscribeOutcome::Subscribed => "Successfully subscribed!",
            SubscribeOutcome::MissingEmail => "Email is required",
            SubscribeOutcome::InvalidEmail => "Please enter a valid email address",
            SubscribeOutcome::AlreadySubscribed => "Email already subscribed",
            SubscribeOutcome::ServerError => "An error occurred",
        }
    }
}

/// JSON body of a `POST /subscribe` response.
#[derive(Debug, Serialize)]
pub struct SubscribeResponse {
    pub success: bool,
    pub message: &'static str,
}

impl IntoResponse for SubscribeOutcome {
    fn into_response(self) -> Response {
        let body = SubscribeResponse {
            success: self == SubscribeOutcome::Subscribed,
            message: self.message(),
        };
        (self.status(), Json(body)).into_response()
    }
}

/// Insert `email` as a new subscriber.
///
/// The email lookup is only a fast path for the common duplicate case;
/// the `uq_subscribers_email` constraint is what guarantees uniqueness
/// under concurrent signups. Both surface as [`CoreError::Conflict`].
async fn add_subscriber(pool: &DbPool, email: &str) -> AppResult<Subscriber> {
    if SubscriberRepo::find_by_email(pool, email).await?.is_some() {
        return Err(already_subscribed(email));
    }
    SubscriberRepo::create(pool, email).await.map_err(|e| {
        if is_unique_violation(&e) {
            already_subscribed(email)
        } else {
            AppError::Database(e)
        }
    })
}

fn already_subscribed(email: &str) -> AppError {
    CoreError::Conflict(format!("{email} is already subscribed")).into()
}

/// POST /subscribe
pub async fn subscribe(
    State(state): State<AppState>,
    form: Result<Form<SubscribeForm>, FormRejection>,
) -> SubscribeOutcome {
    let email = match form {
        Ok(Form(SubscribeForm { email: Some(email) })) if !email.trim().is_empty() => email,
        Ok(_) => return SubscribeOutcome::MissingEmail,
        Err(rejection) => {
            tracing::info!(error = %rejection, "Unreadable subscribe request");
            return SubscribeOutcome::MissingEmail;
        }
    };

    let email = match content::validate_email(&email) {
        Ok(email) => email,
        Err(e) => {
            tracing::info!(error = %e, "Rejected subscriber email");
            return SubscribeOutcome::InvalidEmail;
        }
    };

    match add_subscriber(&state.pool, &email).await {
        Ok(subscriber) => {
            tracing::info!(id = subscriber.id, "Subscriber added");
            SubscribeOutcome::Subscribed
        }
        Err(AppError::Core(CoreError::Conflict(reason))) => {
            tracing::info!(%reason, "Duplicate subscription");
            SubscribeOutcome::AlreadySubscribed
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to add subscriber");
            SubscribeOutcome::ServerError
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_subscribed_is_success() {
        assert_eq!(SubscribeOutcome::Subscribed.status(), StatusCode::OK);
        assert_eq!(
            SubscribeOutcome::AlreadySubscribed.status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            SubscribeOutcome::ServerError.status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn contact_requires_every_field() {
        let form = ContactForm {
            full_name: Some("Ada".into()),
            email: Some("ada@example.com".into()),
            mobile: None,
            city: Some("London".into()),
        };
        assert!(validate_contact(&form).is_err());
    }

    #[test]
    fn contact_mobile_is_limited_to_twenty_chars() {
        let form = ContactForm {
            full_name: Some("Ada".into()),
            email: Some("ada@example.com".into()),
            mobile: Some("1".repeat(21)),
            city: Some("London".into()),
        };
        assert!(validate_contact(&form).is_err());
    }
}
