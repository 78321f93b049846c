use anyhow::anyhow;
use axum::{
    Json,
    extract::{FromRequest, Request, rejection::JsonRejection},
    http::StatusCode,
};
use serde::de::DeserializeOwned;
use validator::{Validate, ValidationErrors};
use zambool_core::AppError;

/// Turns serde's "`field`: unknown variant `x`, expected one of `a`, `b`"
/// into "field must be one of a or b".
fn unknown_variant_message(error_msg: &str) -> String {
    let Some(idx) = error_msg.find("unknown variant") else {
        return "Invalid value in request".to_string();
    };

    let field = error_msg[..idx]
        .trim_end()
        .trim_end_matches(':')
        .rsplit(": ")
        .next()
        .filter(|path| !path.is_empty() && *path != ".")
        .unwrap_or("value");

    let expected = error_msg[idx..]
        .split("expected ")
        .nth(1)
        .map(|rest| rest.split(" at line").next().unwrap_or(rest))
        .map(|rest| rest.trim_start_matches("one of "))
        .unwrap_or_default();

    let variants: Vec<&str> = expected
        .split(", ")
        .flat_map(|part| part.split(" or "))
        .map(|variant| variant.trim().trim_matches('`'))
        .filter(|variant| !variant.is_empty())
        .collect();

    match variants.split_last() {
        Some((last, [])) => format!("{} must be {}", field, last),
        Some((last, rest)) => format!("{} must be one of {} or {}", field, rest.join(", "), last),
        None => format!("{} has an unknown value", field),
    }
}

fn format_errors(errors: &ValidationErrors) -> String {
    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by(|a, b| a.0.cmp(&b.0));

    fields
        .into_iter()
        .flat_map(|(field, errors)| {
            errors.iter().map(move |error| {
                error
                    .message
                    .as_ref()
                    .map(|msg| msg.to_string())
                    .unwrap_or_else(|| format!("{} is invalid", field))
            })
        })
        .collect::<Vec<_>>()
        .join(", ")
}

/// JSON body extractor that also runs `validator` rules.
///
/// Malformed bodies are a 400; bodies that parse but break a rule are a 422.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| {
                let error_msg = rejection.body_text();

                if error_msg.contains("missing field") {
                    let field = error_msg
                        .split("missing field `")
                        .nth(1)
                        .and_then(|s| s.split('`').next())
                        .unwrap_or("unknown");
                    return AppError::new(
                        StatusCode::BAD_REQUEST,
                        anyhow!("{} is required", field),
                    );
                }

                if error_msg.contains("unknown variant") {
                    return AppError::new(
                        StatusCode::BAD_REQUEST,
                        anyhow!("{}", unknown_variant_message(&error_msg)),
                    );
                }

                if error_msg.contains("invalid type") {
                    return AppError::new(
                        StatusCode::BAD_REQUEST,
                        anyhow!("Invalid field type in request"),
                    );
                }

                if matches!(rejection, JsonRejection::MissingJsonContentType(_)) {
                    return AppError::new(
                        StatusCode::BAD_REQUEST,
                        anyhow!("Missing 'Content-Type: application/json' header"),
                    );
                }

                AppError::new(StatusCode::BAD_REQUEST, anyhow!("Invalid request body"))
            })?;

        value.validate().map_err(|errors| {
            AppError::new(
                StatusCode::UNPROCESSABLE_ENTITY,
                anyhow!("{}", format_errors(&errors)),
            )
        })?;

        Ok(ValidatedJson(value))
    }
}
