use crate::helpers::JsonResponse;
use crate::middleware::authentication::Authentication;
use crate::models::{Identity, Owner};
use actix_web::dev::Payload;
use actix_web::{Error, FromRequest, HttpMessage, HttpRequest};
use std::future::{ready, Ready};
use std::ops::Deref;
use std::sync::Arc;

/// Handler argument for routes that require a verified bearer token.
#[derive(Debug, Clone)]
pub struct LoggedUser(pub Arc<Identity>);

impl Deref for LoggedUser {
    type Target = Identity;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromRequest for LoggedUser {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let authentication = req.extensions().get::<Authentication>().cloned();
        ready(match authentication {
            Some(Authentication::User(identity)) => Ok(LoggedUser(identity)),
            Some(Authentication::Rejected(reason)) => {
                Err(JsonResponse::<()>::build().unauthorized(reason))
            }
            _ => Err(JsonResponse::<()>::build().unauthorized("Not authenticated")),
        })
    }
}

/// Handler argument for routes open to guests.
#[derive(Debug, Clone)]
pub struct Caller(pub Option<Arc<Identity>>);

impl Caller {
    pub fn owner(&self) -> Owner {
        match &self.0 {
            Some(identity) => Owner::User(identity.email.clone()),
            None => Owner::Guest,
        }
    }
}

impl FromRequest for Caller {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let identity = match req.extensions().get::<Authentication>() {
            Some(Authentication::User(identity)) => Some(identity.clone()),
            _ => None,
        };
        ready(Ok(Caller(identity)))
    }
}
