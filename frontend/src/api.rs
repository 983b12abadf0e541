//! Thin REST client for the waitlist server. One function per endpoint,
//! all returning `Result<_, ApiError>`; bodies decode through the typed
//! shapes in `common::wire` so a mismatch fails loudly.

use common::wire::{
    MessageResponse, PageResponse, PositionResponse, ReferralEntry, RegisterRequest,
    ResendRequest, UserResponse, WaitlistEntry,
};
use common::ApiError;
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;

use crate::config;

fn url(path: &str) -> String {
    format!("{}{}", config::server_url(), path)
}

fn transport(err: gloo_net::Error) -> ApiError {
    ApiError::Transport(err.to_string())
}

async fn decode<T: DeserializeOwned>(resp: Response) -> Result<T, ApiError> {
    resp.json::<T>()
        .await
        .map_err(|err| ApiError::Decode(err.to_string()))
}

/// Classify a non-2xx response, keeping the body's `message` if any.
async fn error_from(resp: Response) -> ApiError {
    let status = resp.status();
    let message = resp
        .json::<MessageResponse>()
        .await
        .ok()
        .map(|body| body.message);
    ApiError::from_status(status, message)
}

/// `GET /user/?email=<email>` — 404 means no such account.
pub async fn lookup_user(email: &str) -> Result<UserResponse, ApiError> {
    let resp = Request::get(&url(&format!("/user/?email={email}")))
        .send()
        .await
        .map_err(transport)?;
    if resp.ok() {
        decode(resp).await
    } else {
        Err(error_from(resp).await)
    }
}

/// `POST /auth/` or `/auth/<referral_code>/`. Success is 201 with the
/// created user; 400 carries the server's validation message.
pub async fn register_user(
    name: &str,
    email: &str,
    referral_code: Option<&str>,
) -> Result<UserResponse, ApiError> {
    let path = match referral_code {
        Some(code) if !code.is_empty() => format!("/auth/{code}/"),
        _ => "/auth/".to_string(),
    };
    let body = RegisterRequest {
        name: name.to_string(),
        email: email.to_string(),
    };
    let resp = Request::post(&url(&path))
        .json(&body)
        .map_err(transport)?
        .send()
        .await
        .map_err(transport)?;
    if resp.status() == 201 {
        decode(resp).await
    } else {
        Err(error_from(resp).await)
    }
}

/// `POST /resend-verification-email/` — fire-and-forget.
pub async fn resend_verification(email: &str) -> Result<(), ApiError> {
    let body = ResendRequest {
        email: email.to_string(),
    };
    let resp = Request::post(&url("/resend-verification-email/"))
        .json(&body)
        .map_err(transport)?
        .send()
        .await
        .map_err(transport)?;
    if resp.ok() {
        Ok(())
    } else {
        Err(error_from(resp).await)
    }
}

/// `GET /auth/verify/<code>/` — returns the server's message; a 400
/// (invalid or expired code) comes back as `BadRequest` with its message.
pub async fn verify_email(code: &str) -> Result<String, ApiError> {
    let resp = Request::get(&url(&format!("/auth/verify/{code}/")))
        .send()
        .await
        .map_err(transport)?;
    if resp.ok() {
        decode::<MessageResponse>(resp).await.map(|body| body.message)
    } else {
        Err(error_from(resp).await)
    }
}

/// `GET /waitlist/?id=<id>` — 404 until the user is verified and ranked.
pub async fn fetch_position(user_id: u64) -> Result<u64, ApiError> {
    let resp = Request::get(&url(&format!("/waitlist/?id={user_id}")))
        .send()
        .await
        .map_err(transport)?;
    if resp.ok() {
        decode::<PositionResponse>(resp)
            .await
            .map(|body| body.position)
    } else {
        Err(error_from(resp).await)
    }
}

/// `GET /global-waitlist/?page=<n>` — one page of the ranked listing.
pub async fn global_waitlist(page: u32) -> Result<PageResponse<WaitlistEntry>, ApiError> {
    let resp = Request::get(&url(&format!("/global-waitlist/?page={page}")))
        .send()
        .await
        .map_err(transport)?;
    if resp.ok() {
        decode(resp).await
    } else {
        Err(error_from(resp).await)
    }
}

/// `GET /referrals/<id>/?page=<n>` — one page of the user's referrals.
pub async fn referrals(user_id: u64, page: u32) -> Result<PageResponse<ReferralEntry>, ApiError> {
    let resp = Request::get(&url(&format!("/referrals/{user_id}/?page={page}")))
        .send()
        .await
        .map_err(transport)?;
    if resp.ok() {
        decode(resp).await
    } else {
        Err(error_from(resp).await)
    }
}
