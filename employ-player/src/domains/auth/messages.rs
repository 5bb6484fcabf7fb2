use employ_model::SessionToken;

#[derive(Clone)]
pub enum Message {
    EmailChanged(String),
    PasswordChanged(String),
    Submit,
    LoginResult(Result<SessionToken, String>),
}

impl Message {
    pub fn name(&self) -> &'static str {
        match self {
            Self::EmailChanged(_) => "Auth::EmailChanged",
            Self::PasswordChanged(_) => "Auth::PasswordChanged",
            Self::Submit => "Auth::Submit",
            Self::LoginResult(_) => "Auth::LoginResult",
        }
    }

    /// Debug form with credentials hidden, safe for logs.
    pub fn sanitized_display(&self) -> String {
        match self {
            Self::PasswordChanged(_) => "PasswordChanged(***)".to_string(),
            Self::LoginResult(Ok(_)) => "LoginResult(Ok(***))".to_string(),
            _ => format!("{:?}", self),
        }
    }
}

impl std::fmt::Debug for Message {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmailChanged(email) => write!(f, "EmailChanged({email:?})"),
            Self::PasswordChanged(_) => write!(f, "PasswordChanged(***)"),
            Self::Submit => write!(f, "Submit"),
            Self::LoginResult(Ok(_)) => write!(f, "LoginResult(Ok(***))"),
            Self::LoginResult(Err(e)) => write!(f, "LoginResult(Err({e:?}))"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn password_never_reaches_debug_output() {
        let msg = Message::PasswordChanged("hunter2".into());
        assert!(!format!("{msg:?}").contains("hunter2"));
        assert!(!msg.sanitized_display().contains("hunter2"));
        assert_eq!(msg.name(), "Auth::PasswordChanged");
    }
}
