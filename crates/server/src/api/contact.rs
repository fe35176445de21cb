use std::sync::Arc;

use crate::{
    api::{OptionDto, rejected},
    state::AppState,
};
use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use sarthi::contact::{self, CHANNELS, Category, ContactChannel, ContactForm, FAQ, Faq};
use serde::Serialize;

#[derive(Debug, Serialize)]
struct ContactInfoDto {
    channels: &'static [ContactChannel],
    categories: Vec<OptionDto>,
    faq: &'static [Faq],
}

pub async fn contact_info(State(_): State<Arc<AppState>>) -> Result<Response, StatusCode> {
    let result = ContactInfoDto {
        channels: &CHANNELS,
        categories: Category::ALL
            .iter()
            .map(|category| OptionDto::new(category.key(), category.label()))
            .collect(),
        faq: &FAQ,
    };
    Ok(Json(result).into_response())
}

#[derive(Debug, Serialize)]
struct AcknowledgementDto {
    message: &'static str,
}

pub async fn submit_contact(
    State(state): State<Arc<AppState>>,
    Json(form): Json<ContactForm>,
) -> Result<Response, StatusCode> {
    state.simulate_latency().await;
    match contact::submit(form) {
        Ok(message) => Ok(Json(AcknowledgementDto { message }).into_response()),
        Err(err) => Ok(rejected(err)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::test_util::{json, state};

    fn form() -> ContactForm {
        ContactForm {
            name: "Harpreet".into(),
            email: "harpreet@example.com".into(),
            subject: "Lost bag".into(),
            category: Category::Complaint,
            message: "Left a bag on PB-01-A-1234".into(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn info_lists_channels_and_faq() {
        let response = contact_info(State(state())).await.unwrap();
        let body = json(response).await;
        assert_eq!(body["channels"].as_array().unwrap().len(), 4);
        assert_eq!(body["faq"].as_array().unwrap().len(), 5);
        assert_eq!(body["categories"][2]["label"], "Refund Request");
    }

    #[tokio::test]
    async fn valid_form_is_acknowledged() {
        let response = submit_contact(State(state()), Json(form())).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = json(response).await;
        assert_eq!(body["message"], contact::ACKNOWLEDGEMENT);
    }

    #[tokio::test]
    async fn bad_email_is_rejected() {
        let mut form = form();
        form.email = "harpreet.example.com".into();
        let response = submit_contact(State(state()), Json(form)).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let body = json(response).await;
        assert_eq!(
            body["error"],
            "harpreet.example.com is not a valid email address"
        );
    }
}
