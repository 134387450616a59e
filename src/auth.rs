//! Thin client for the account backend.

use std::time::Duration;

use log::{info, warn};
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::models::User;

const LOGIN_PATH: &str = "/user/userLogin";
const SIGN_UP_PATH: &str = "/user/signUp";

#[derive(Debug, Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SignUpRequest<'a> {
    name: &'a str,
    email: &'a str,
    password: &'a str,
    check_password: &'a str,
}

/// Only the fields we keep; the backend may send more.
#[derive(Debug, Deserialize)]
struct LoginResponse {
    id: i64,
    name: String,
    email: String,
}

#[derive(Debug, Clone)]
pub struct AuthClient {
    http: Client,
    base_url: String,
}

impl AuthClient {
    /// # Errors
    /// Returns an error if the HTTP client cannot be created.
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent(concat!("ecolife/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            base_url: base_url.into(),
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }

    pub fn login(&self, email: &str, password: &str) -> Result<User> {
        let response = self
            .http
            .post(self.endpoint(LOGIN_PATH))
            .json(&LoginRequest { email, password })
            .send()?;

        let status = response.status();
        if !status.is_success() {
            warn!("login rejected with {}", status);
            return Err(Error::Auth {
                action: "login",
                status,
            });
        }

        let body: LoginResponse = response.json()?;
        info!("logged in as user {}", body.id);
        Ok(User {
            id: body.id,
            name: body.name,
            email: body.email,
        })
    }

    /// Creates the account, then logs in with the same credentials.
    pub fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
        check_password: &str,
    ) -> Result<User> {
        check_passwords_match(password, check_password)?;

        let response = self
            .http
            .post(self.endpoint(SIGN_UP_PATH))
            .json(&SignUpRequest {
                name,
                email,
                password,
                check_password,
            })
            .send()?;

        let status = response.status();
        if !status.is_success() {
            warn!("sign up rejected with {}", status);
            return Err(Error::Auth {
                action: "sign up",
                status,
            });
        }

        self.login(email, password)
    }
}

fn check_passwords_match(password: &str, check_password: &str) -> Result<()> {
    if password != check_password {
        return Err(Error::PasswordMismatch);
    }
    Ok(())
}
