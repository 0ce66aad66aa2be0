use crate::application::ports::CredentialSource;
use crate::domain::Credentials;

pub struct StaticCredentialSource {
    credentials: Option<Credentials>,
}

impl StaticCredentialSource {
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials: Some(credentials),
        }
    }

    pub fn empty() -> Self {
        Self { credentials: None }
    }
}

impl CredentialSource for StaticCredentialSource {
    fn load(&self) -> Option<Credentials> {
        self.credentials.clone()
    }
}
