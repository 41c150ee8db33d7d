use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use shared::{
    domain::{Contact, ContactId},
    protocol::{ApiRoute, ContactUpdate, NewContact},
};
use tracing::debug;
use url::Url;

use crate::{
    config::ClientSettings,
    error::{PhoneBookError, Result},
    PhoneBookApi,
};

/// HTTP implementation of [`PhoneBookApi`] over the phone-book REST service.
pub struct PhoneBookClient {
    http: Client,
    base_url: Url,
}

impl PhoneBookClient {
    pub fn new(settings: &ClientSettings) -> Result<Self> {
        let base_url = parse_base_url(&settings.api_url)?;
        let http = Client::builder()
            .danger_accept_invalid_certs(settings.accept_invalid_certs)
            .build()
            .map_err(|source| PhoneBookError::Transport {
                operation: "build_client",
                source,
            })?;
        Ok(Self { http, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn endpoint(&self, route: &ApiRoute) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().extend(route.segments());
        }
        url
    }
}

pub fn parse_base_url(raw: &str) -> Result<Url> {
    let invalid = |reason: String| PhoneBookError::InvalidBaseUrl {
        url: raw.to_string(),
        reason,
    };
    let url = Url::parse(raw.trim()).map_err(|e| invalid(e.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid(format!("unsupported scheme '{}'", url.scheme())));
    }
    if url.cannot_be_a_base() {
        return Err(invalid("url cannot be used as a base".to_string()));
    }
    Ok(url)
}

fn transport(operation: &'static str) -> impl FnOnce(reqwest::Error) -> PhoneBookError {
    move |source| PhoneBookError::Transport { operation, source }
}

fn decode(operation: &'static str) -> impl FnOnce(reqwest::Error) -> PhoneBookError {
    move |source| PhoneBookError::Decode { operation, source }
}

fn ensure_success(operation: &'static str, response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(PhoneBookError::UnexpectedStatus { operation, status })
    }
}

fn ensure_no_content(operation: &'static str, response: &Response) -> Result<()> {
    match response.status() {
        StatusCode::NO_CONTENT => Ok(()),
        status => Err(PhoneBookError::UnexpectedStatus { operation, status }),
    }
}

#[async_trait]
impl PhoneBookApi for PhoneBookClient {
    async fn get_all(&self) -> Result<Vec<Contact>> {
        let route = ApiRoute::GetAll;
        let operation = route.operation();
        let url = self.endpoint(&route);
        debug!(operation, %url, "phonebook request");

        let response = self.http.get(url).send().await.map_err(transport(operation))?;
        let response = ensure_success(operation, response)?;
        response.json().await.map_err(decode(operation))
    }

    async fn get_by_contact(&self, contact: &str) -> Result<Contact> {
        let route = ApiRoute::GetByContact(contact.to_string());
        let operation = route.operation();
        let url = self.endpoint(&route);
        debug!(operation, %url, "phonebook request");

        let response = self.http.get(url).send().await.map_err(transport(operation))?;
        if response.status() == StatusCode::NOT_FOUND {
            return Err(PhoneBookError::NotFound {
                query: contact.to_string(),
            });
        }
        let response = ensure_success(operation, response)?;
        response.json().await.map_err(decode(operation))
    }

    async fn add_contact(&self, contact: &NewContact) -> Result<()> {
        let route = ApiRoute::AddContact;
        let operation = route.operation();
        let url = self.endpoint(&route);
        debug!(operation, %url, "phonebook request");

        let response = self
            .http
            .post(url)
            .json(contact)
            .send()
            .await
            .map_err(transport(operation))?;
        let response = ensure_success(operation, response)?;
        // Created record is discarded; the follow-up reload renders it.
        let _created: serde_json::Value = response.json().await.map_err(decode(operation))?;
        Ok(())
    }

    async fn update_contact(&self, update: &ContactUpdate) -> Result<()> {
        let route = ApiRoute::UpdateContact;
        let operation = route.operation();
        let url = self.endpoint(&route);
        debug!(operation, %url, "phonebook request");

        let response = self
            .http
            .put(url)
            .json(update)
            .send()
            .await
            .map_err(transport(operation))?;
        ensure_no_content(operation, &response)
    }

    async fn delete_contact(&self, id: ContactId) -> Result<()> {
        let route = ApiRoute::DeleteContact(id);
        let operation = route.operation();
        let url = self.endpoint(&route);
        debug!(operation, %url, "phonebook request");

        let response = self
            .http
            .delete(url)
            .send()
            .await
            .map_err(transport(operation))?;
        ensure_no_content(operation, &response)
    }
}

#[cfg(test)]
#[path = "tests/client_tests.rs"]
mod tests;
