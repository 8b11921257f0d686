use thiserror::Error;

/// Сообщение, когда сервер отклонил запрос, не объяснив причину
pub const GENERIC_FAILURE: &str = "请求失败";

/// Сообщение для пользователя при истёкшей сессии
pub const SESSION_EXPIRED: &str = "登录已过期，请重新登录";

/// Ошибки единого API-шлюза
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Backend ответил 401: сессия недействительна, выход уже выполнен
    #[error("登录已过期，请重新登录")]
    AuthExpired,

    /// Backend отклонил запрос (валидация, not found, конфликт)
    #[error("{message}")]
    RequestFailed { status: u16, message: String },

    /// Сеть недоступна или ответ не удалось разобрать
    #[error("{0}")]
    Transport(String),
}

impl ApiError {
    pub fn request_failed(status: u16, message: Option<&str>) -> Self {
        ApiError::RequestFailed {
            status,
            message: message.unwrap_or(GENERIC_FAILURE).to_string(),
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::AuthExpired => Some(401),
            ApiError::RequestFailed { status, .. } => Some(*status),
            ApiError::Transport(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_failed_displays_server_message_verbatim() {
        let err = ApiError::request_failed(400, Some("bad credentials"));
        assert_eq!(err.to_string(), "bad credentials");
        assert_eq!(err.status(), Some(400));
    }

    #[test]
    fn request_failed_falls_back_to_generic_message() {
        let err = ApiError::request_failed(500, None);
        assert_eq!(err.to_string(), GENERIC_FAILURE);
    }

    #[test]
    fn auth_expired_reports_session_message() {
        assert_eq!(ApiError::AuthExpired.to_string(), SESSION_EXPIRED);
        assert_eq!(ApiError::AuthExpired.status(), Some(401));
    }
}
