//! Typed Pet Store operations over the [`HttpClient`] port.

use std::path::Path;
use std::sync::Arc;

use petprobe_domain::petstore::{Pet, PetStatus, PetUpdateStatus};
use petprobe_domain::request::{Header, MultipartField, RequestBody, RequestSpec};
use petprobe_domain::response::{RawResponse, StructuredResponse};
use petprobe_domain::settings::PetstoreSettings;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::ports::HttpClient;
use crate::ApplicationResult;

/// Outcome of a service call: `None` when the exchange failed on the wire.
pub type ServiceResponse<T> = ApplicationResult<Option<StructuredResponse<T>>>;

/// Client for the Pet Store `/pet` resource.
///
/// Every call sends `Accept: application/json` and decodes the body into the
/// operation's record type. Bodies that are empty or do not decode are
/// reported as absent, never as errors, so that error statuses can still be
/// asserted on.
pub struct PetService<C: HttpClient> {
    client: Arc<C>,
    settings: PetstoreSettings,
}

impl<C: HttpClient> PetService<C> {
    /// Creates a service that talks to the API described by `settings`.
    pub const fn new(client: Arc<C>, settings: PetstoreSettings) -> Self {
        Self { client, settings }
    }

    /// Settings the service was created with.
    #[must_use]
    pub const fn settings(&self) -> &PetstoreSettings {
        &self.settings
    }

    /// `GET {endpoint}/{id}`
    ///
    /// # Errors
    ///
    /// Returns an error if the request cannot be built.
    pub async fn find_pet_by_id(&self, id: i64) -> ServiceResponse<Pet> {
        let url = self.settings.endpoint_url(&[&id.to_string()])?;
        self.send(RequestSpec::get(url)).await
    }

    /// `GET {endpoint}/findByStatus?status={status}`
    ///
    /// `status` is sent verbatim so that unknown values can be probed.
    ///
    /// # Errors
    ///
    /// Returns an error if the request cannot be built.
    pub async fn find_pets_by_status(&self, status: &str) -> ServiceResponse<Vec<Pet>> {
        let url = self.settings.endpoint_url(&["findByStatus"])?;
        self.send(RequestSpec::get(url).with_query("status", status))
            .await
    }

    /// Same as [`Self::find_pets_by_status`] with the wire form of `status`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request cannot be built.
    pub async fn find_pets_by_known_status(&self, status: PetStatus) -> ServiceResponse<Vec<Pet>> {
        self.find_pets_by_status(status.as_str()).await
    }

    /// `POST {endpoint}` with the pet as JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if the pet cannot be encoded or the request cannot be built.
    pub async fn add_new_pet(&self, pet: &Pet) -> ServiceResponse<Pet> {
        let url = self.settings.endpoint_url(&[])?;
        let body = RequestBody::json(serde_json::to_string(pet)?);
        self.send(RequestSpec::post(url).with_body(body)).await
    }

    /// `PUT {endpoint}` with the pet as JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if the pet cannot be encoded or the request cannot be built.
    pub async fn update_existing_pet(&self, pet: &Pet) -> ServiceResponse<Pet> {
        let url = self.settings.endpoint_url(&[])?;
        let body = RequestBody::json(serde_json::to_string(pet)?);
        self.send(RequestSpec::put(url).with_body(body)).await
    }

    /// `DELETE {endpoint}/{id}`
    ///
    /// # Errors
    ///
    /// Returns an error if the request cannot be built.
    pub async fn delete_pet(&self, id: i64) -> ServiceResponse<PetUpdateStatus> {
        let url = self.settings.endpoint_url(&[&id.to_string()])?;
        self.send(RequestSpec::delete(url)).await
    }

    /// `POST {endpoint}/{id}` with `name` and `status` form-encoded.
    ///
    /// # Errors
    ///
    /// Returns an error if the request cannot be built.
    pub async fn update_pet_with_form_data(
        &self,
        id: i64,
        name: &str,
        status: PetStatus,
    ) -> ServiceResponse<PetUpdateStatus> {
        let url = self.settings.endpoint_url(&[&id.to_string()])?;
        let body = RequestBody::form([("name", name), ("status", status.as_str())]);
        self.send(RequestSpec::post(url).with_body(body)).await
    }

    /// `POST {endpoint}/{id}/uploadImage` with the file at `image` as
    /// multipart field `file`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or the request cannot be built.
    pub async fn upload_image(&self, id: i64, image: &Path) -> ServiceResponse<PetUpdateStatus> {
        let url = self
            .settings
            .endpoint_url(&[&id.to_string(), "uploadImage"])?;
        let body = RequestBody::multipart(vec![MultipartField::file("file", image)]);
        self.send(RequestSpec::post(url).with_body(body)).await
    }

    async fn send<T: DeserializeOwned>(&self, mut request: RequestSpec) -> ServiceResponse<T> {
        request.headers.add(Header::accept_json());
        debug!(method = %request.method, url = %request.url, "calling pet store");

        match self.client.execute(&request).await {
            Ok(raw) => Ok(Some(decode(raw))),
            Err(err) if err.is_transport() => {
                warn!(method = %request.method, url = %request.url, error = %err, "no response");
                Ok(None)
            }
            Err(err) => Err(err.into()),
        }
    }
}

fn decode<T: DeserializeOwned>(raw: RawResponse) -> StructuredResponse<T> {
    let status = raw.status;
    let response = raw.decode::<T>();
    if let Some(error) = &response.decode_error {
        debug!(%status, %error, "response body did not decode");
    }
    response
}
