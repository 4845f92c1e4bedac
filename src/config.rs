/// The web-app configuration record for a Firebase project.
///
/// This mirrors the configuration object handed out by the Firebase console
/// for a web app. Only [`api_key`](Self::api_key) is consumed by the REST
/// endpoints; the remaining fields identify the project and its satellite
/// services and are carried so a console snippet can be transcribed
/// one-to-one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FirebaseConfig {
    /// The web API key of the project.
    pub api_key: String,

    /// The auth domain, typically `<project id>.firebaseapp.com`.
    pub auth_domain: Option<String>,

    /// The Realtime Database URL.
    pub database_url: Option<String>,

    /// The project ID.
    pub project_id: Option<String>,

    /// The Cloud Storage bucket.
    pub storage_bucket: Option<String>,

    /// The Cloud Messaging sender ID.
    pub messaging_sender_id: Option<String>,

    /// The app ID of the web app registration.
    pub app_id: Option<String>,
}

impl FirebaseConfig {
    /// Create a configuration carrying only the web API key.
    ///
    /// The project fields can be filled in with struct-update syntax:
    ///
    /// ```
    /// use firebase_auth_rest::FirebaseConfig;
    ///
    /// let config = FirebaseConfig {
    ///     project_id: Some("my-project".into()),
    ///     ..FirebaseConfig::new("<web api key>")
    /// };
    /// ```
    #[must_use]
    pub fn new(api_key: &str) -> Self {
        Self {
            api_key: api_key.into(),
            ..Self::default()
        }
    }
}

/// How the client retains the signed-in user.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Persistence {
    /// The client does not retain the signed-in user at all;
    /// [`current_user`](crate::AuthClient::current_user) stays empty and the
    /// only handle to the session is the returned
    /// [`UserCredential`](crate::UserCredential).
    None,

    /// The client keeps the current user until
    /// [`sign_out`](crate::AuthClient::sign_out) or a replacing sign-in.
    #[default]
    InMemory,
}
