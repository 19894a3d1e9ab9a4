//! In-memory Pet Store used by the suite tests.

#![allow(dead_code, clippy::unwrap_used, clippy::significant_drop_tightening)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use petprobe_application::{HttpClient, HttpClientError, HttpFuture, PetService};
use petprobe_domain::petstore::{Pet, PetStatus, PetUpdateStatus};
use petprobe_domain::request::{HttpMethod, MultipartField, RequestBody, RequestSpec};
use petprobe_domain::response::{RawResponse, ResponseHeaders};
use petprobe_domain::settings::PetstoreSettings;
use serde::Serialize;

pub const BASE_URL: &str = "http://petstore.test/v2";

/// Emulates the public Pet Store closely enough for the scenario suite.
#[derive(Default)]
pub struct FakePetStore {
    pets: Mutex<HashMap<i64, Pet>>,
    offline: bool,
    calls: Mutex<usize>,
}

impl FakePetStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Every call fails with a timeout.
    pub fn offline() -> Arc<Self> {
        Arc::new(Self {
            offline: true,
            ..Self::default()
        })
    }

    pub fn insert(&self, pet: Pet) {
        self.pets.lock().unwrap().insert(pet.id, pet);
    }

    pub fn get(&self, id: i64) -> Option<Pet> {
        self.pets.lock().unwrap().get(&id).cloned()
    }

    pub fn calls(&self) -> usize {
        *self.calls.lock().unwrap()
    }

    fn handle(&self, request: &RequestSpec) -> (u16, String) {
        let url = request.full_url();
        let segments: Vec<&str> = url
            .path_segments()
            .map(|s| s.skip_while(|seg| *seg != "pet").skip(1).collect())
            .unwrap_or_default();

        match (request.method, segments.as_slice()) {
            (HttpMethod::Post, []) => self.create(&request.body),
            (HttpMethod::Put, []) => self.update(&request.body),
            (HttpMethod::Get, ["findByStatus"]) => {
                let status = url
                    .query_pairs()
                    .find(|(k, _)| k == "status")
                    .map(|(_, v)| v.into_owned())
                    .unwrap_or_default();
                self.find_by_status(&status)
            }
            (HttpMethod::Get, [id]) => match parse_id(id) {
                Some(id) => self.get(id).map_or_else(not_found, |pet| ok(&pet)),
                None => error(400, "Invalid ID supplied"),
            },
            (HttpMethod::Delete, [id]) => match parse_id(id) {
                Some(id) if self.pets.lock().unwrap().remove(&id).is_some() => {
                    ok(&report(id))
                }
                _ => not_found(),
            },
            (HttpMethod::Post, [id]) => self.update_with_form(id, &request.body),
            (HttpMethod::Post, [id, "uploadImage"]) => self.upload(id, &request.body),
            _ => error(404, "unknown route"),
        }
    }

    fn create(&self, body: &RequestBody) -> (u16, String) {
        let Some(pet) = json_pet(body) else {
            return error(400, "Invalid input");
        };
        if !(0..=i64::from(i32::MAX)).contains(&pet.id) {
            return error(405, "Invalid input");
        }
        let mut pets = self.pets.lock().unwrap();
        if pets.contains_key(&pet.id) {
            return error(405, "Invalid input");
        }
        pets.insert(pet.id, pet.clone());
        ok(&pet)
    }

    fn update(&self, body: &RequestBody) -> (u16, String) {
        let Some(pet) = json_pet(body) else {
            return error(400, "Invalid input");
        };
        if i32::try_from(pet.id).is_err() {
            return error(400, "Invalid ID supplied");
        }
        if pet.name.is_none() && pet.category.is_none() {
            return error(405, "Validation exception");
        }
        let mut pets = self.pets.lock().unwrap();
        if !pets.contains_key(&pet.id) {
            return not_found();
        }
        pets.insert(pet.id, pet.clone());
        ok(&pet)
    }

    fn find_by_status(&self, status: &str) -> (u16, String) {
        let Ok(status) = status.parse::<PetStatus>() else {
            return error(400, "Invalid status value");
        };
        let found: Vec<Pet> = self
            .pets
            .lock()
            .unwrap()
            .values()
            .filter(|p| p.status == Some(status))
            .cloned()
            .collect();
        ok(&found)
    }

    fn update_with_form(&self, id: &str, body: &RequestBody) -> (u16, String) {
        let (Some(id), RequestBody::FormUrlEncoded(fields)) = (parse_id(id), body) else {
            return error(405, "Invalid input");
        };
        let mut pets = self.pets.lock().unwrap();
        let Some(pet) = pets.get_mut(&id) else {
            return not_found();
        };
        for (key, value) in fields {
            match key.as_str() {
                "name" => pet.name = Some(value.clone()),
                "status" => pet.status = value.parse().ok(),
                _ => {}
            }
        }
        ok(&report(id))
    }

    fn upload(&self, id: &str, body: &RequestBody) -> (u16, String) {
        let has_file = matches!(
            body,
            RequestBody::Multipart(fields)
                if fields.iter().any(|f| matches!(f, MultipartField::File { name, .. } if name == "file"))
        );
        match parse_id(id) {
            Some(id) if has_file && self.get(id).is_some() => ok(&report(id)),
            Some(_) if has_file => not_found(),
            _ => error(415, "Unsupported Media Type"),
        }
    }
}

impl HttpClient for FakePetStore {
    fn execute(&self, request: &RequestSpec) -> HttpFuture<'_> {
        *self.calls.lock().unwrap() += 1;
        let result = if self.offline {
            Err(HttpClientError::Timeout { timeout_ms: 30_000 })
        } else {
            let (status, body) = self.handle(request);
            let mut headers = ResponseHeaders::new();
            headers.append("content-type", "application/json");
            Ok(RawResponse::new(
                status,
                headers,
                body.into_bytes(),
                Duration::from_millis(1),
            ))
        };
        Box::pin(async move { result })
    }
}

pub fn service(store: &Arc<FakePetStore>) -> PetService<FakePetStore> {
    PetService::new(Arc::clone(store), PetstoreSettings::with_base_url(BASE_URL))
}

fn parse_id(raw: &str) -> Option<i64> {
    raw.parse::<i64>()
        .ok()
        .filter(|id| i32::try_from(*id).is_ok())
}

fn json_pet(body: &RequestBody) -> Option<Pet> {
    match body {
        RequestBody::Json(text) => serde_json::from_str(text).ok(),
        _ => None,
    }
}

fn report(id: i64) -> PetUpdateStatus {
    PetUpdateStatus {
        code: 200,
        kind: Some("unknown".to_string()),
        message: Some(id.to_string()),
    }
}

fn ok(body: &impl Serialize) -> (u16, String) {
    (200, serde_json::to_string(body).unwrap())
}

fn error(status: u16, message: &str) -> (u16, String) {
    let body = PetUpdateStatus {
        code: i32::from(status),
        kind: Some("error".to_string()),
        message: Some(message.to_string()),
    };
    (status, serde_json::to_string(&body).unwrap())
}

fn not_found() -> (u16, String) {
    error(404, "Pet not found")
}
