use serde::Serialize;

/// Greeting returned from the API root.
pub const WELCOME_MESSAGE: &str = "Welcome to DevMatch API";

/// Liveness status reported by the health endpoint.
pub const HEALTH_OK: &str = "OK";

/// Body of `GET /`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Welcome {
    pub message: String,
}

impl Welcome {
    pub fn greeting() -> Self {
        Self {
            message: WELCOME_MESSAGE.to_string(),
        }
    }
}

/// Body of `GET /health`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Health {
    pub status: String,
}

impl Health {
    pub fn ok() -> Self {
        Self {
            status: HEALTH_OK.to_string(),
        }
    }
}

/// JSON body for errors generated by the server itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorBody {
    pub message: String,
}
