use actix_web::error::UrlGenerationError;
use actix_web::{error, http::header, http::StatusCode, HttpResponse};
use serde::de::{self, Deserialize, Deserializer};
use serde::ser::Serializer;
use std::fmt::{self, Display};

fn statuscode_to_u16<S>(x: &StatusCode, s: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    s.serialize_u16(x.as_u16())
}

fn u16_to_statuscode<'de, D>(d: D) -> Result<StatusCode, D::Error>
where
    D: Deserializer<'de>,
{
    let code = u16::deserialize(d)?;
    StatusCode::from_u16(code).map_err(de::Error::custom)
}

/// JSON body of every error response.
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiError {
    pub error: ApiErrorDetail,
    #[serde(
        rename = "status",
        serialize_with = "statuscode_to_u16",
        deserialize_with = "u16_to_statuscode"
    )]
    pub http_status: StatusCode,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct ApiErrorDetail {
    pub code: u32,
    pub message: String,
}

impl Display for ApiError {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        let body = serde_json::to_string(self).map_err(|_| fmt::Error)?;
        formatter.write_str(&body)
    }
}

impl ApiError {
    fn new(http_status: StatusCode, code: u32, message: String) -> Self {
        ApiError {
            http_status,
            error: ApiErrorDetail { code, message },
        }
    }
}

impl error::ResponseError for ApiError {
    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code())
            .insert_header((header::CONTENT_TYPE, "application/json; charset=utf-8"))
            .body(self.to_string())
    }

    fn status_code(&self) -> StatusCode {
        self.http_status
    }
}

#[derive(Debug, thiserror::Error)]
pub enum GreetingError {
    #[error("Not Found")]
    NotFound,
    #[error("Method Not Allowed")]
    MethodNotAllowed,
    #[error("Invalid query string: {reason}")]
    InvalidQuery { reason: String },
    #[error("Cannot build the link to the requested resource")]
    UrlGeneration(#[from] UrlGenerationError),
}

impl GreetingError {
    fn code(&self) -> u32 {
        match self {
            GreetingError::NotFound => 404,
            GreetingError::MethodNotAllowed => 405,
            GreetingError::InvalidQuery { .. } => 1001,
            GreetingError::UrlGeneration(_) => 1002,
        }
    }

    fn http_status(&self) -> StatusCode {
        match self {
            GreetingError::NotFound => StatusCode::NOT_FOUND,
            GreetingError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            GreetingError::InvalidQuery { .. } => StatusCode::BAD_REQUEST,
            GreetingError::UrlGeneration(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<&GreetingError> for ApiError {
    fn from(error: &GreetingError) -> Self {
        ApiError::new(error.http_status(), error.code(), error.to_string())
    }
}

impl error::ResponseError for GreetingError {
    fn error_response(&self) -> HttpResponse {
        if let GreetingError::UrlGeneration(source) = self {
            log::error!("{}: {:?}", self, source);
        }
        let as_api_err: ApiError = self.into();
        as_api_err.error_response()
    }

    fn status_code(&self) -> StatusCode {
        self.http_status()
    }
}

#[cfg(test)]
mod tests {
    use super::{ApiError, GreetingError};
    use actix_web::error::{ResponseError, UrlGenerationError};
    use actix_web::http::{header, StatusCode};

    #[test]
    fn not_found_uses_the_http_status_as_code() {
        let api_err: ApiError = (&GreetingError::NotFound).into();

        assert_eq!(StatusCode::NOT_FOUND, api_err.http_status);
        assert_eq!(404, api_err.error.code);
        assert_eq!("Not Found", api_err.error.message);
    }

    #[test]
    fn invalid_query_is_a_bad_request() {
        let err = GreetingError::InvalidQuery {
            reason: "duplicate field `name`".into(),
        };

        assert_eq!(StatusCode::BAD_REQUEST, err.status_code());
        assert_eq!(1001, ApiError::from(&err).error.code);
        assert_eq!(
            "Invalid query string: duplicate field `name`",
            ApiError::from(&err).error.message
        );
    }

    #[test]
    fn unresolvable_link_is_a_server_error() {
        let err = GreetingError::from(UrlGenerationError::ResourceNotFound);

        assert_eq!(StatusCode::INTERNAL_SERVER_ERROR, err.status_code());
        assert_eq!(1002, ApiError::from(&err).error.code);
    }

    #[test]
    fn error_body_is_json() {
        let resp = GreetingError::MethodNotAllowed.error_response();

        assert_eq!(StatusCode::METHOD_NOT_ALLOWED, resp.status());
        assert_eq!(
            "application/json; charset=utf-8",
            resp.headers().get(header::CONTENT_TYPE).unwrap()
        );
    }

    #[test]
    fn api_error_displays_as_its_json_body() {
        let api_err: ApiError = (&GreetingError::NotFound).into();

        assert_eq!(
            r#"{"error":{"code":404,"message":"Not Found"},"status":404}"#,
            api_err.to_string()
        );
    }
}
